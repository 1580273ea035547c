use ast::JsWord;
use global_common::{
    errors::{DiagnosticBuilder, Handler},
    Span, Spanned,
};
use std::{borrow::Cow, fmt};

/// A syntax error and the span it points at.
#[derive(Clone, PartialEq)]
pub struct Error {
    error: Box<(Span, SyntaxError)>,
}

impl Error {
    #[cold]
    pub(crate) fn new(span: Span, error: SyntaxError) -> Self {
        Self {
            error: Box::new((span, error)),
        }
    }

    pub fn kind(&self) -> &SyntaxError {
        &self.error.1
    }

    pub fn into_kind(self) -> SyntaxError {
        self.error.1
    }

    pub(crate) fn is_eof(&self) -> bool {
        matches!(self.error.1, SyntaxError::Eof)
    }

    /// Turns the error into a diagnostic of `handler`, attaching the notes and
    /// caret some errors carry.
    #[cold]
    pub fn into_diagnostic(self, handler: &Handler) -> DiagnosticBuilder<'_> {
        let (span, kind) = *self.error;
        let mut db = handler.struct_span_err(span, &kind.msg());

        match kind {
            SyntaxError::DuplicateImportBinding { first } => {
                db.span_note(first, "first usage of name");
            }
            SyntaxError::NamespaceImportIdent => {
                db.set_caret(span.hi);
            }
            _ => {}
        }

        db
    }
}

impl Spanned for Error {
    fn span(&self) -> Span {
        self.error.0
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.error.0, self.error.1.msg())
    }
}

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SyntaxError {
    Eof,

    // Lexer
    UnterminatedStrLit,
    UnterminatedRegExp,
    UnterminatedTpl,
    UnterminatedBlockComment,
    InvalidEscape,
    BadCharacterEscapeSequence {
        expected: &'static str,
    },
    InvalidCodePoint,
    InvalidIdentChar,
    UnexpectedChar {
        c: char,
    },
    UnrecognizedUnicodeChar,
    ExpectedDigit {
        radix: u8,
    },
    IdentAfterNum,
    DuplicateRegExpFlags {
        flag: char,
    },
    UnknownRegExpFlags {
        flag: char,
    },
    EscapeInReservedWord {
        word: JsWord,
    },
    LegacyOctal,
    LegacyOctalEscape,

    // Tokens
    Expected {
        token: Cow<'static, str>,
    },
    ExpectedAfter {
        token: &'static str,
        after: &'static str,
    },
    Unexpected {
        got: String,
    },
    ExpectedIdent,
    ExpectedStr,
    LineBreakInThrow,
    LineBreakBeforeArrow,

    // Statements
    ConstWithoutInit,
    PatVarWithoutInit,
    LetInLexicalBinding,
    LexicalDeclNotAllowed,
    TooManyVarInForInOf,
    ForInOfInit,
    InvalidBreak,
    InvalidContinue,
    UndefinedLabel {
        name: JsWord,
    },
    DuplicateLabel {
        name: JsWord,
    },
    ReturnNotAllowed,
    WithInStrict,
    TryWithoutHandler,
    MultipleDefault,

    // Expressions and patterns
    InvalidAssignTarget,
    InvalidUpdateOperand,
    InvalidPat,
    RestNotLast,
    ShorthandPropInit,
    DeleteOfIdentInStrict,
    EvalOrArgumentsInStrict {
        name: JsWord,
    },
    ReservedWord {
        word: JsWord,
    },
    UnaryInExp,
    InvalidTplEscape,
    NotTarget,

    // Classes
    DuplicateConstructor,
    SpecialConstructor,
    StaticPrototype,

    // Modules
    ImportExportInScript,
    NonTopLevelImportExport,
    InvalidExportName,
    InvalidImportLocalName,
    DuplicateImportBinding {
        /// Where the name was bound first.
        first: Span,
    },
    /// Caret goes to the end of the span, where the name was expected.
    NamespaceImportIdent,
}

impl SyntaxError {
    #[cold]
    #[inline(never)]
    pub fn msg(&self) -> Cow<'static, str> {
        match self {
            SyntaxError::Eof => "unexpected end of input".into(),

            SyntaxError::UnterminatedStrLit => "unterminated string literal".into(),
            SyntaxError::UnterminatedRegExp => "unterminated regular expression literal".into(),
            SyntaxError::UnterminatedTpl => "unterminated template literal".into(),
            SyntaxError::UnterminatedBlockComment => "unterminated comment".into(),
            SyntaxError::InvalidEscape => "invalid escape sequence".into(),
            SyntaxError::BadCharacterEscapeSequence { expected } => {
                format!("bad character escape sequence, expected {}", expected).into()
            }
            SyntaxError::InvalidCodePoint => "invalid Unicode code point".into(),
            SyntaxError::InvalidIdentChar => "invalid character in identifier".into(),
            SyntaxError::UnexpectedChar { c } => format!("unexpected character '{}'", c).into(),
            SyntaxError::UnrecognizedUnicodeChar => "unrecognized Unicode character".into(),
            SyntaxError::ExpectedDigit { radix } => format!(
                "expected {} digit",
                match radix {
                    2 => "a binary",
                    8 => "an octal",
                    10 => "a decimal",
                    16 => "a hexadecimal",
                    _ => "a",
                }
            )
            .into(),
            SyntaxError::IdentAfterNum => {
                "numeric literal must not be immediately followed by an identifier".into()
            }
            SyntaxError::DuplicateRegExpFlags { flag } => {
                format!("duplicate regular expression flag '{}'", flag).into()
            }
            SyntaxError::UnknownRegExpFlags { flag } => {
                format!("invalid regular expression flag '{}'", flag).into()
            }
            SyntaxError::EscapeInReservedWord { word } => {
                format!("keyword '{}' must not contain escaped characters", word).into()
            }
            SyntaxError::LegacyOctal => "octal literals are not allowed in strict mode".into(),
            SyntaxError::LegacyOctalEscape => {
                "octal escape sequences are not allowed in strict mode".into()
            }

            SyntaxError::Expected { token } => format!("'{}' expected", token).into(),
            SyntaxError::ExpectedAfter { token, after } => {
                format!("'{}' expected after {}", token, after).into()
            }
            SyntaxError::Unexpected { got } => format!("unexpected token '{}'", got).into(),
            SyntaxError::ExpectedIdent => "identifier expected".into(),
            SyntaxError::ExpectedStr => "string literal expected".into(),
            SyntaxError::LineBreakInThrow => "line break is not allowed after 'throw'".into(),
            SyntaxError::LineBreakBeforeArrow => {
                "line break is not allowed before '=>'".into()
            }

            SyntaxError::ConstWithoutInit => "missing initializer in const declaration".into(),
            SyntaxError::PatVarWithoutInit => {
                "missing initializer in destructuring declaration".into()
            }
            SyntaxError::LetInLexicalBinding => {
                "'let' is disallowed as a lexically bound name".into()
            }
            SyntaxError::LexicalDeclNotAllowed => {
                "declaration is not allowed in a single-statement context".into()
            }
            SyntaxError::TooManyVarInForInOf => {
                "only one binding is allowed in the head of a for-in/for-of loop".into()
            }
            SyntaxError::ForInOfInit => {
                "for-in/for-of loop variable declaration may not have an initializer".into()
            }
            SyntaxError::InvalidBreak => "'break' not within a loop or switch".into(),
            SyntaxError::InvalidContinue => "'continue' not within a loop".into(),
            SyntaxError::UndefinedLabel { name } => format!("label '{}' not found", name).into(),
            SyntaxError::DuplicateLabel { name } => {
                format!("label '{}' is already defined", name).into()
            }
            SyntaxError::ReturnNotAllowed => "'return' not in a function".into(),
            SyntaxError::WithInStrict => "'with' is not allowed in strict mode".into(),
            SyntaxError::TryWithoutHandler => "'catch' or 'finally' expected".into(),
            SyntaxError::MultipleDefault => {
                "more than one 'default' clause in switch statement".into()
            }

            SyntaxError::InvalidAssignTarget => "invalid assignment left-hand side".into(),
            SyntaxError::InvalidUpdateOperand => "invalid operand in update operation".into(),
            SyntaxError::InvalidPat => "invalid destructuring target".into(),
            SyntaxError::RestNotLast => "rest element must be last".into(),
            SyntaxError::ShorthandPropInit => "invalid shorthand property initializer".into(),
            SyntaxError::DeleteOfIdentInStrict => {
                "'delete' of a variable is not allowed in strict mode".into()
            }
            SyntaxError::EvalOrArgumentsInStrict { name } => {
                format!("'{}' cannot be a binding in strict mode", name).into()
            }
            SyntaxError::ReservedWord { word } => format!("'{}' is a reserved word", word).into(),
            SyntaxError::UnaryInExp => {
                "Unary operator before ** must use parens to disambiguate".into()
            }
            SyntaxError::InvalidTplEscape => {
                "invalid escape sequence in template literal".into()
            }
            SyntaxError::NotTarget => "'target' expected after 'new.'".into(),

            SyntaxError::DuplicateConstructor => "duplicate constructor in class".into(),
            SyntaxError::SpecialConstructor => {
                "constructor cannot be a generator, getter or setter".into()
            }
            SyntaxError::StaticPrototype => {
                "static method cannot be named 'prototype'".into()
            }

            SyntaxError::ImportExportInScript => {
                "'import' and 'export' may only appear in a module".into()
            }
            SyntaxError::NonTopLevelImportExport => {
                "'import' and 'export' may only appear at the top level".into()
            }
            SyntaxError::InvalidExportName => "Invalid exported name".into(),
            SyntaxError::InvalidImportLocalName => "Invalid local name for import".into(),
            SyntaxError::DuplicateImportBinding { .. } => {
                "Duplicate entry in import declaration list".into()
            }
            SyntaxError::NamespaceImportIdent => {
                "'identifier' expected in namespace import".into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use global_common::BytePos;

    #[test]
    fn debug_shows_message() {
        let err = Error::new(
            Span::new(BytePos(3), BytePos(6)),
            SyntaxError::Expected { token: ";".into() },
        );
        let s = format!("{:?}", err);
        assert!(s.ends_with("';' expected"), "{}", s);
    }

    #[test]
    fn messages_with_data() {
        assert_eq!(
            SyntaxError::UndefinedLabel {
                name: "outer".into()
            }
            .msg(),
            "label 'outer' not found"
        );
        assert_eq!(
            SyntaxError::ReservedWord {
                word: "implements".into()
            }
            .msg(),
            "'implements' is a reserved word"
        );
    }
}
