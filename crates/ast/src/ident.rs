use crate::JsWord;
use global_common::Span;

/// Ident with span.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ident {
    pub span: Span,
    pub sym: JsWord,
}

impl Ident {
    pub const fn new(sym: JsWord, span: Span) -> Self {
        Ident { span, sym }
    }
}

spanned_struct!(Ident);
