#![allow(clippy::vec_box)]
use super::{
    class::Class,
    function::Function,
    ident::Ident,
    lit::{Lit, Str},
    operators::{AssignOp, BinaryOp, UnaryOp, UpdateOp},
    pat::Pat,
    prop::Prop,
    stmt::BlockStmt,
    Invalid,
};
use global_common::{Span, Spanned};

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    This(ThisExpr),

    Array(ArrayLit),

    Object(ObjectLit),

    Fn(FnExpr),

    Unary(UnaryExpr),

    /// `++v`, `--v`, `v++`, `v--`
    Update(UpdateExpr),

    Bin(BinExpr),

    Assign(AssignExpr),

    /// A member expression. If computed is true, the node corresponds to a
    /// computed (a[b]) member expression and property is an Expression. If
    /// computed is false, the node corresponds to a static (a.b) member
    /// expression and property is an Identifier.
    Member(MemberExpr),

    /// true ? 'a' : 'b'
    Cond(CondExpr),

    Call(CallExpr),

    /// `new Cat()`
    New(NewExpr),

    Seq(SeqExpr),

    Ident(Ident),

    Lit(Lit),

    Tpl(Tpl),

    TaggedTpl(TaggedTpl),

    Arrow(ArrowExpr),

    Class(ClassExpr),

    Yield(YieldExpr),

    MetaProp(MetaPropExpr),

    Paren(ParenExpr),

    Invalid(Invalid),
}

spanned_enum!(Expr {
    This,
    Array,
    Object,
    Fn,
    Unary,
    Update,
    Bin,
    Assign,
    Member,
    Cond,
    Call,
    New,
    Seq,
    Ident,
    Lit,
    Tpl,
    TaggedTpl,
    Arrow,
    Class,
    Yield,
    MetaProp,
    Paren,
    Invalid,
});

enum_from!(Expr {
    This(ThisExpr),
    Array(ArrayLit),
    Object(ObjectLit),
    Fn(FnExpr),
    Unary(UnaryExpr),
    Update(UpdateExpr),
    Bin(BinExpr),
    Assign(AssignExpr),
    Member(MemberExpr),
    Cond(CondExpr),
    Call(CallExpr),
    New(NewExpr),
    Seq(SeqExpr),
    Ident(Ident),
    Lit(Lit),
    Tpl(Tpl),
    TaggedTpl(TaggedTpl),
    Arrow(ArrowExpr),
    Class(ClassExpr),
    Yield(YieldExpr),
    MetaProp(MetaPropExpr),
    Paren(ParenExpr),
    Invalid(Invalid),
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThisExpr {
    pub span: Span,
}

/// Array literal.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayLit {
    pub span: Span,
    pub elems: Vec<Option<ExprOrSpread>>,
}

/// Object literal.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectLit {
    pub span: Span,
    pub props: Vec<Prop>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub span: Span,
    pub op: UnaryOp,

    pub arg: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateExpr {
    pub span: Span,
    pub op: UpdateOp,

    pub prefix: bool,

    pub arg: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinExpr {
    pub span: Span,
    pub op: BinaryOp,

    pub left: Box<Expr>,

    pub right: Box<Expr>,
}

/// Function expression.
#[derive(Debug, Clone, PartialEq)]
pub struct FnExpr {
    pub ident: Option<Ident>,

    pub function: Function,
}

/// Class expression.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassExpr {
    pub ident: Option<Ident>,

    pub class: Class,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignExpr {
    pub span: Span,
    pub op: AssignOp,

    pub left: PatOrExpr,

    pub right: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpr {
    pub span: Span,
    pub obj: ExprOrSuper,

    pub prop: Box<Expr>,

    pub computed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CondExpr {
    pub span: Span,
    pub test: Box<Expr>,

    pub cons: Box<Expr>,

    pub alt: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub span: Span,
    pub callee: ExprOrSuper,

    pub args: Vec<ExprOrSpread>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewExpr {
    pub span: Span,
    pub callee: Box<Expr>,

    /// `None` for `new Foo` without an argument list.
    pub args: Option<Vec<ExprOrSpread>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeqExpr {
    pub span: Span,

    pub exprs: Vec<Box<Expr>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrowExpr {
    pub span: Span,

    pub params: Vec<Pat>,

    pub body: BlockStmtOrExpr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct YieldExpr {
    pub span: Span,

    pub arg: Option<Box<Expr>>,

    pub delegate: bool,
}

/// `new.target`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MetaPropExpr {
    pub meta: Ident,

    pub prop: Ident,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tpl {
    pub span: Span,

    pub exprs: Vec<Box<Expr>>,

    pub quasis: Vec<TplElement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaggedTpl {
    pub span: Span,

    pub tag: Box<Expr>,

    pub tpl: Tpl,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TplElement {
    pub span: Span,
    pub tail: bool,
    /// `None` when the raw text holds an invalid escape, which is only
    /// allowed in tagged templates.
    pub cooked: Option<Str>,
    pub raw: Str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParenExpr {
    pub span: Span,

    pub expr: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprOrSuper {
    Super(Super),

    Expr(Box<Expr>),
}

impl Spanned for ExprOrSuper {
    fn span(&self) -> Span {
        match *self {
            ExprOrSuper::Super(ref s) => s.span,
            ExprOrSuper::Expr(ref e) => e.span(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Super {
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprOrSpread {
    /// Span of the `...` token, if this is a spread element.
    pub spread: Option<Span>,

    pub expr: Box<Expr>,
}

impl Spanned for ExprOrSpread {
    fn span(&self) -> Span {
        let expr = self.expr.span();
        match self.spread {
            Some(spread) => spread.to(expr),
            None => expr,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[allow(clippy::large_enum_variant)]
pub enum BlockStmtOrExpr {
    BlockStmt(BlockStmt),
    Expr(Box<Expr>),
}

impl Spanned for BlockStmtOrExpr {
    fn span(&self) -> Span {
        match *self {
            BlockStmtOrExpr::BlockStmt(ref b) => b.span,
            BlockStmtOrExpr::Expr(ref e) => e.span(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PatOrExpr {
    Expr(Box<Expr>),
    Pat(Box<Pat>),
}

impl Spanned for PatOrExpr {
    fn span(&self) -> Span {
        match *self {
            PatOrExpr::Expr(ref e) => e.span(),
            PatOrExpr::Pat(ref p) => p.span(),
        }
    }
}

impl Spanned for FnExpr {
    fn span(&self) -> Span {
        self.function.span
    }
}

impl Spanned for ClassExpr {
    fn span(&self) -> Span {
        self.class.span
    }
}

impl Spanned for MetaPropExpr {
    fn span(&self) -> Span {
        self.meta.span.to(self.prop.span)
    }
}

spanned_struct!(
    ThisExpr,
    ArrayLit,
    ObjectLit,
    UnaryExpr,
    UpdateExpr,
    BinExpr,
    AssignExpr,
    MemberExpr,
    CondExpr,
    CallExpr,
    NewExpr,
    SeqExpr,
    ArrowExpr,
    YieldExpr,
    Tpl,
    TaggedTpl,
    TplElement,
    ParenExpr,
    Super,
);

impl Expr {
    /// Unwraps any number of parentheses.
    pub fn unwrap_parens(&self) -> &Expr {
        match *self {
            Expr::Paren(ParenExpr { ref expr, .. }) => expr.unwrap_parens(),
            _ => self,
        }
    }
}
