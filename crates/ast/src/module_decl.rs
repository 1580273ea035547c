use crate::{
    decl::Decl,
    expr::{ClassExpr, Expr, FnExpr},
    ident::Ident,
    lit::Str,
};
use global_common::Span;

#[derive(Debug, Clone, PartialEq)]
pub enum ModuleDecl {
    Import(ImportDecl),

    ExportDecl(ExportDecl),

    ExportNamed(NamedExport),

    ExportDefaultDecl(ExportDefaultDecl),

    ExportDefaultExpr(ExportDefaultExpr),

    ExportAll(ExportAll),
}

spanned_enum!(ModuleDecl {
    Import,
    ExportDecl,
    ExportNamed,
    ExportDefaultDecl,
    ExportDefaultExpr,
    ExportAll,
});

#[derive(Debug, Clone, PartialEq)]
pub struct ExportDefaultExpr {
    pub span: Span,

    pub expr: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportDecl {
    pub span: Span,

    pub decl: Decl,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportDecl {
    pub span: Span,

    pub specifiers: Vec<ImportSpecifier>,

    pub src: Str,
}

/// `export * from 'mod'`
#[derive(Debug, Clone, PartialEq)]
pub struct ExportAll {
    pub span: Span,

    pub src: Str,
}

/// `export { foo } from 'mod'`
/// `export { foo as bar } from 'mod'`
#[derive(Debug, Clone, PartialEq)]
pub struct NamedExport {
    pub span: Span,

    pub specifiers: Vec<ExportSpecifier>,

    pub src: Option<Str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportDefaultDecl {
    pub span: Span,

    pub decl: DefaultDecl,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DefaultDecl {
    Class(ClassExpr),

    Fn(FnExpr),
}

spanned_enum!(DefaultDecl { Class, Fn });

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImportSpecifier {
    Named(ImportNamedSpecifier),
    Default(ImportDefaultSpecifier),
    Namespace(ImportStarAsSpecifier),
}

spanned_enum!(ImportSpecifier {
    Named,
    Default,
    Namespace,
});

impl ImportSpecifier {
    /// The binding this specifier introduces.
    pub fn local(&self) -> &Ident {
        match *self {
            ImportSpecifier::Named(ref s) => &s.local,
            ImportSpecifier::Default(ref s) => &s.local,
            ImportSpecifier::Namespace(ref s) => &s.local,
        }
    }
}

/// e.g. `import foo from 'mod.js'`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImportDefaultSpecifier {
    pub span: Span,

    pub local: Ident,
}

/// e.g. `import * as foo from 'mod.js'`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImportStarAsSpecifier {
    pub span: Span,

    pub local: Ident,
}

/// e.g. local = foo, imported = None `import { foo } from 'mod.js'`
/// e.g. local = bar, imported = Some(foo) for `import { foo as bar } from
/// 'mod.js'`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImportNamedSpecifier {
    pub span: Span,

    pub local: Ident,

    pub imported: Option<Ident>,
}

/// `foo` or `foo as bar` in an export list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExportSpecifier {
    pub span: Span,

    /// `foo` in `export { foo as bar }`
    pub orig: Ident,

    /// `Some(bar)` in `export { foo as bar }`
    pub exported: Option<Ident>,
}

spanned_struct!(
    ExportDefaultExpr,
    ExportDecl,
    ImportDecl,
    ExportAll,
    NamedExport,
    ExportDefaultDecl,
    ImportDefaultSpecifier,
    ImportStarAsSpecifier,
    ImportNamedSpecifier,
    ExportSpecifier,
);
