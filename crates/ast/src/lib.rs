//! Typed syntax tree of an ES2015 program.
//!
//! Every node carries the [Span] it was parsed from. [estree] turns a
//! [Program] into its ESTree JSON form.
#![deny(unreachable_patterns)]
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
#![deny(unreachable_pub)]

pub use self::{
    class::{Class, ClassMember, ClassMethod, Constructor, MethodKind},
    decl::{ClassDecl, Decl, FnDecl, VarDecl, VarDeclKind, VarDeclarator},
    expr::{
        ArrayLit, ArrowExpr, AssignExpr, BinExpr, BlockStmtOrExpr, CallExpr, ClassExpr, CondExpr,
        Expr, ExprOrSpread, ExprOrSuper, FnExpr, MemberExpr, MetaPropExpr, NewExpr, ObjectLit,
        ParenExpr, PatOrExpr, SeqExpr, Super, TaggedTpl, ThisExpr, Tpl, TplElement, UnaryExpr,
        UpdateExpr, YieldExpr,
    },
    function::Function,
    ident::Ident,
    lit::{Bool, Lit, Null, Number, Regex, Str},
    module::{Module, ModuleItem, Program, Script},
    module_decl::{
        DefaultDecl, ExportAll, ExportDecl, ExportDefaultDecl, ExportDefaultExpr, ExportSpecifier,
        ImportDecl, ImportDefaultSpecifier, ImportNamedSpecifier, ImportSpecifier,
        ImportStarAsSpecifier, ModuleDecl, NamedExport,
    },
    operators::{AssignOp, BinaryOp, UnaryOp, UpdateOp},
    pat::{ArrayPat, AssignPat, AssignPatProp, KeyValuePatProp, ObjectPat, ObjectPatProp, Pat, RestPat},
    prop::{
        AssignProp, ComputedPropName, GetterProp, KeyValueProp, MethodProp, Prop, PropName,
        SetterProp,
    },
    stmt::{
        BlockStmt, BreakStmt, CatchClause, ContinueStmt, DebuggerStmt, DoWhileStmt, EmptyStmt,
        ExprStmt, ForInStmt, ForOfStmt, ForStmt, IfStmt, LabeledStmt, ReturnStmt, Stmt, SwitchCase,
        SwitchStmt, ThrowStmt, TryStmt, VarDeclOrExpr, VarDeclOrPat, WhileStmt, WithStmt,
    },
};
use global_common::Span;

/// Interned identifier and string contents.
pub type JsWord = string_cache::DefaultAtom;

#[macro_use]
mod macros;
mod class;
mod decl;
pub mod estree;
mod expr;
mod function;
mod ident;
mod lit;
mod module;
mod module_decl;
mod operators;
mod pat;
mod prop;
mod stmt;

/// Placeholder left where the parser recovered from an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Invalid {
    pub span: Span,
}

spanned_struct!(Invalid);
