use crate::{class::Class, expr::Expr, function::Function, ident::Ident, pat::Pat};
use global_common::{Span, Spanned};

#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    Class(ClassDecl),
    Fn(FnDecl),
    Var(VarDecl),
}

spanned_enum!(Decl { Class, Fn, Var });
enum_from!(Decl {
    Class(ClassDecl),
    Fn(FnDecl),
    Var(VarDecl),
});

#[derive(Debug, Clone, PartialEq)]
pub struct FnDecl {
    pub ident: Ident,

    pub function: Function,
}

impl Spanned for FnDecl {
    fn span(&self) -> Span {
        self.function.span
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    pub ident: Ident,

    pub class: Class,
}

impl Spanned for ClassDecl {
    fn span(&self) -> Span {
        self.class.span
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub span: Span,

    pub kind: VarDeclKind,

    pub decls: Vec<VarDeclarator>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarDeclKind {
    /// `var`
    Var,
    /// `let`
    Let,
    /// `const`
    Const,
}

impl VarDeclKind {
    pub fn as_str(self) -> &'static str {
        match self {
            VarDeclKind::Var => "var",
            VarDeclKind::Let => "let",
            VarDeclKind::Const => "const",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclarator {
    pub span: Span,
    pub name: Pat,

    /// Initialization expression.
    pub init: Option<Box<Expr>>,
}

spanned_struct!(VarDecl, VarDeclarator);
