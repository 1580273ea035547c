use crate::JsWord;
use global_common::Span;

#[derive(Debug, Clone, PartialEq)]
pub enum Lit {
    Str(Str),
    Bool(Bool),
    Null(Null),
    Num(Number),
    Regex(Regex),
}

spanned_enum!(Lit { Str, Bool, Null, Num, Regex });
enum_from!(Lit {
    Str(Str),
    Bool(Bool),
    Null(Null),
    Num(Number),
    Regex(Regex),
});

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Str {
    pub span: Span,
    /// Cooked value, escapes resolved.
    pub value: JsWord,
    /// This includes line escape.
    pub has_escape: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bool {
    pub span: Span,
    pub value: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Null {
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number {
    pub span: Span,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Regex {
    pub span: Span,
    pub exp: JsWord,
    pub flags: JsWord,
}

spanned_struct!(Str, Bool, Null, Number, Regex);
