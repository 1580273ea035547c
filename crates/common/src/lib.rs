//! # Cargo features
//!
//! ## `tty-emitter`
//!
//! Adds a colored implementation of [errors::Emitter] for terminals.
//! Enabling this feature will add tty-related dependencies.
#![deny(unused)]

pub use self::{
    pos::{BytePos, CharPos, Pos, Span, Spanned, DUMMY_SP},
    source_map::{FileName, Loc, SourceFile, SourceMap, SpanSnippetError},
};

pub mod chars;
pub mod errors;
pub mod input;
mod pos;
mod source_map;

pub mod sync {
    /// Source files are immutable once loaded and may be read by several
    /// parses running on different threads.
    pub use std::sync::Arc as Lrc;
}
