use crate::{
    expr::Expr,
    function::Function,
    ident::Ident,
    lit::{Number, Str},
    pat::Pat,
    stmt::BlockStmt,
};
use global_common::{Span, Spanned};

#[derive(Debug, Clone, PartialEq)]
pub enum Prop {
    /// `a` in `{ a, }`
    Shorthand(Ident),

    /// `key: value` in `{ key: value, }`
    KeyValue(KeyValueProp),

    /// This is **invalid** for object literal. It is only valid as the cover
    /// grammar of an object pattern, e.g. `({ a = 1 } = obj)`.
    Assign(AssignProp),

    Getter(GetterProp),

    Setter(SetterProp),

    Method(MethodProp),
}

impl Spanned for Prop {
    fn span(&self) -> Span {
        match *self {
            Prop::Shorthand(ref i) => i.span,
            Prop::KeyValue(ref p) => p.key.span().to(p.value.span()),
            Prop::Assign(ref p) => p.key.span.to(p.value.span()),
            Prop::Getter(ref p) => p.span,
            Prop::Setter(ref p) => p.span,
            Prop::Method(ref p) => p.key.span().to(p.function.span),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyValueProp {
    pub key: PropName,

    pub value: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignProp {
    pub key: Ident,
    pub value: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetterProp {
    pub span: Span,
    pub key: PropName,
    pub body: BlockStmt,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetterProp {
    pub span: Span,
    pub key: PropName,
    pub param: Pat,
    pub body: BlockStmt,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodProp {
    pub key: PropName,

    pub function: Function,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PropName {
    Ident(Ident),
    /// String literal.
    Str(Str),
    /// Numeric literal.
    Num(Number),
    Computed(ComputedPropName),
}

impl Spanned for PropName {
    fn span(&self) -> Span {
        match *self {
            PropName::Ident(ref i) => i.span,
            PropName::Str(ref s) => s.span,
            PropName::Num(ref n) => n.span,
            PropName::Computed(ref c) => c.span,
        }
    }
}

impl PropName {
    pub fn is_computed(&self) -> bool {
        matches!(*self, PropName::Computed(..))
    }

    /// Static name of the key, used to detect `constructor`.
    pub fn static_name(&self) -> Option<&str> {
        match *self {
            PropName::Ident(ref i) => Some(&*i.sym),
            PropName::Str(ref s) => Some(&*s.value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComputedPropName {
    /// Span including `[` and `]`.
    pub span: Span,
    pub expr: Box<Expr>,
}

spanned_struct!(GetterProp, SetterProp, ComputedPropName);
