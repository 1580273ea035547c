use crate::{module_decl::ModuleDecl, stmt::Stmt};
use global_common::Span;

#[derive(Debug, Clone, PartialEq)]
pub enum Program {
    Module(Module),
    Script(Script),
}

spanned_enum!(Program { Module, Script });

#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    pub span: Span,

    pub body: Vec<ModuleItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Script {
    pub span: Span,

    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModuleItem {
    ModuleDecl(ModuleDecl),
    Stmt(Stmt),
}

spanned_enum!(ModuleItem { ModuleDecl, Stmt });

impl From<Stmt> for ModuleItem {
    fn from(s: Stmt) -> Self {
        Self::Stmt(s)
    }
}

impl From<ModuleDecl> for ModuleItem {
    fn from(d: ModuleDecl) -> Self {
        Self::ModuleDecl(d)
    }
}

spanned_struct!(Module, Script);
