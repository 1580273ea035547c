use crate::{expr::Expr, ident::Ident, prop::PropName, Invalid};
use global_common::{Span, Spanned};

#[derive(Debug, Clone, PartialEq)]
pub enum Pat {
    Ident(Ident),

    Array(ArrayPat),

    Rest(RestPat),

    Object(ObjectPat),

    Assign(AssignPat),

    Invalid(Invalid),

    /// Only for for-in / for-of loops and assignment targets. This is
    /// *syntactically* valid for the left-hand side of an assignment, e.g.
    /// `a.b = 1` or `[obj.a] = arr`.
    Expr(Box<Expr>),
}

spanned_enum!(Pat {
    Ident,
    Array,
    Rest,
    Object,
    Assign,
    Invalid,
    Expr,
});

enum_from!(Pat {
    Ident(Ident),
    Array(ArrayPat),
    Rest(RestPat),
    Object(ObjectPat),
    Assign(AssignPat),
    Invalid(Invalid),
});

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayPat {
    pub span: Span,

    pub elems: Vec<Option<Pat>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectPat {
    pub span: Span,

    pub props: Vec<ObjectPatProp>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignPat {
    pub span: Span,

    pub left: Box<Pat>,

    pub right: Box<Expr>,
}

/// EsTree `RestElement`
#[derive(Debug, Clone, PartialEq)]
pub struct RestPat {
    pub span: Span,

    pub dot3_token: Span,

    pub arg: Box<Pat>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ObjectPatProp {
    KeyValue(KeyValuePatProp),

    /// `{ a = 1 }` or `{ a }`
    Assign(AssignPatProp),
}

impl Spanned for ObjectPatProp {
    fn span(&self) -> Span {
        match *self {
            ObjectPatProp::KeyValue(ref p) => p.key.span().to(p.value.span()),
            ObjectPatProp::Assign(ref p) => p.span,
        }
    }
}

/// `{key: value}`
#[derive(Debug, Clone, PartialEq)]
pub struct KeyValuePatProp {
    pub key: PropName,

    pub value: Box<Pat>,
}

/// `{key}` or `{key = value}`
#[derive(Debug, Clone, PartialEq)]
pub struct AssignPatProp {
    pub span: Span,
    pub key: Ident,

    pub value: Option<Box<Expr>>,
}

spanned_struct!(ArrayPat, ObjectPat, AssignPat, RestPat, AssignPatProp);
