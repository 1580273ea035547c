use crate::{pat::Pat, stmt::BlockStmt};
use global_common::Span;

/// Common parts of function and method.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub span: Span,

    pub params: Vec<Pat>,

    pub body: BlockStmt,

    pub is_generator: bool,
}

spanned_struct!(Function);
