pub(crate) use self::{AssignOpToken::*, BinOpToken::*, Keyword::*, Token::*};
use crate::error::Error;
pub(crate) use ast::AssignOp as AssignOpToken;
use ast::{BinaryOp, JsWord};
use global_common::{Span, Spanned};
use std::{
    borrow::Cow,
    fmt::{self, Debug, Display, Formatter},
};

#[derive(Clone, PartialEq)]
pub enum Token {
    /// Identifier, keyword, "null", "true", "false".
    Word(Word),

    /// '=>'
    Arrow,

    /// '.'
    Dot,

    /// '...'
    DotDotDot,
    /// '!'
    Bang,

    /// '('
    LParen,
    /// ')'
    RParen,
    /// `[`
    LBracket,
    /// ']'
    RBracket,
    /// '{'
    LBrace,
    /// '}'
    RBrace,

    /// ';'
    Semi,
    /// ','
    Comma,

    /// '`'
    BackQuote,
    /// Text of a template between its delimiters. `cooked` is `None` when the
    /// text holds an invalid escape sequence.
    Template {
        raw: JsWord,
        cooked: Option<JsWord>,
        has_escape: bool,
    },
    /// ':'
    Colon,
    ///
    BinOp(BinOpToken),
    ///
    AssignOp(AssignOpToken),

    /// '${'
    DollarLBrace,

    /// '?'
    QuestionMark,

    /// `++`
    PlusPlus,
    /// `--`
    MinusMinus,

    /// `~`
    Tilde,

    /// String literal. Span of this token contains quote.
    Str {
        value: JsWord,
        /// Text between the quotes, escapes untouched.
        raw: JsWord,
        /// This field exists because 'use\x20strict' is **not** an use strict
        /// directive.
        has_escape: bool,
    },

    /// Regexp literal.
    Regex(JsWord, JsWord),

    Num {
        value: f64,
        raw: JsWord,
    },

    Error(Error),
}

impl Token {
    pub fn starts_expr(&self) -> bool {
        match self {
            Token::Word(w) => w.starts_expr(),
            BinOp(o) => o.starts_expr(),

            Bang
            | LParen
            | LBracket
            | LBrace
            | BackQuote
            | DollarLBrace
            | PlusPlus
            | MinusMinus
            | Tilde
            | Str { .. }
            | Regex(_, _)
            | Num { .. } => true,

            _ => false,
        }
    }

    pub fn before_expr(&self) -> bool {
        match self {
            Token::Word(w) => w.before_expr(),
            BinOp(o) => o.before_expr(),

            Arrow
            | DotDotDot
            | Bang
            | LParen
            | LBracket
            | LBrace
            | Semi
            | Comma
            | Colon
            | AssignOp(_)
            | DollarLBrace
            | QuestionMark
            | PlusPlus
            | MinusMinus
            | Tilde => true,

            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum BinOpToken {
    /// `==`
    EqEq,
    /// `!=`
    NotEq,
    /// `===`
    EqEqEq,
    /// `!==`
    NotEqEq,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,
    /// `<<`
    LShift,
    /// `>>`
    RShift,
    /// `>>>`
    ZeroFillRShift,

    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,

    /// `|`
    BitOr,
    /// `^`
    BitXor,
    /// `&`
    BitAnd,

    /// `**`
    Exp,

    /// `||`
    LogicalOr,
    /// `&&`
    LogicalAnd,
}

impl BinOpToken {
    pub const fn before_expr(self) -> bool {
        true
    }

    fn starts_expr(&self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TokenAndSpan {
    pub token: Token,
    /// Had a line break before this token?
    pub had_line_break: bool,
    pub span: Span,
}

impl Spanned for TokenAndSpan {
    #[inline(always)]
    fn span(&self) -> Span {
        self.span
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Word {
    Keyword(Keyword),

    Null,
    True,
    False,

    Ident(JsWord),
}

impl Word {
    fn starts_expr(&self) -> bool {
        match self {
            Word::Keyword(k) => k.starts_expr(),
            _ => true,
        }
    }

    fn before_expr(&self) -> bool {
        match self {
            Word::Keyword(k) => k.before_expr(),
            _ => false,
        }
    }

    pub(crate) fn cow(&self) -> Cow<'_, str> {
        match *self {
            Word::Keyword(k) => Cow::Borrowed(k.as_str()),
            Word::Ident(ref w) => Cow::Borrowed(&**w),
            Word::False => Cow::Borrowed("false"),
            Word::True => Cow::Borrowed("true"),
            Word::Null => Cow::Borrowed("null"),
        }
    }
}

impl From<JsWord> for Word {
    fn from(i: JsWord) -> Self {
        match Keyword::from_str(&i) {
            Some(k) => Word::Keyword(k),
            None => match &*i {
                "null" => Word::Null,
                "true" => Word::True,
                "false" => Word::False,
                _ => Word::Ident(i),
            },
        }
    }
}

impl From<&str> for Word {
    fn from(s: &str) -> Self {
        match Keyword::from_str(s) {
            Some(k) => Word::Keyword(k),
            None => match s {
                "null" => Word::Null,
                "true" => Word::True,
                "false" => Word::False,
                _ => Word::Ident(s.into()),
            },
        }
    }
}

impl From<Keyword> for Word {
    fn from(kwd: Keyword) -> Self {
        Word::Keyword(kwd)
    }
}

impl From<Word> for JsWord {
    fn from(w: Word) -> Self {
        match w {
            Word::Ident(w) => w,
            w => JsWord::from(&*w.cow()),
        }
    }
}

impl Debug for Word {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Word::Keyword(ref k) => Debug::fmt(k, f),
            _ => Display::fmt(&self.cow(), f),
        }
    }
}

/// Keywords
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// Reserved in module code only.
    Await,

    Break,
    Case,
    Catch,
    Continue,
    Debugger,
    Default_,
    Do,
    Else,

    Finally,
    For,

    Function,

    If,

    Return,

    Switch,

    Throw,

    Try,
    Var,
    /// Reserved in strict code only.
    Let,
    Const,
    While,
    With,

    New,
    This,
    Super,

    Class,

    Extends,

    Export,
    Import,

    /// Reserved in strict code and inside generators.
    Yield,

    In,
    InstanceOf,

    TypeOf,

    Void,

    Delete,
}

impl Keyword {
    fn from_str(s: &str) -> Option<Keyword> {
        Some(match s {
            "await" => Await,
            "break" => Break,
            "case" => Case,
            "catch" => Catch,
            "continue" => Continue,
            "debugger" => Debugger,
            "default" => Default_,
            "do" => Do,
            "export" => Export,
            "else" => Else,
            "finally" => Finally,
            "for" => For,
            "function" => Function,
            "if" => If,
            "return" => Return,
            "switch" => Switch,
            "throw" => Throw,
            "try" => Try,
            "var" => Var,
            "let" => Let,
            "const" => Const,
            "while" => While,
            "with" => With,
            "new" => New,
            "this" => This,
            "super" => Super,
            "class" => Class,
            "extends" => Extends,
            "import" => Import,
            "yield" => Yield,
            "in" => In,
            "instanceof" => InstanceOf,
            "typeof" => TypeOf,
            "void" => Void,
            "delete" => Delete,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Await => "await",
            Break => "break",
            Case => "case",
            Catch => "catch",
            Continue => "continue",
            Debugger => "debugger",
            Default_ => "default",
            Do => "do",
            Else => "else",
            Finally => "finally",
            For => "for",
            Function => "function",
            If => "if",
            Return => "return",
            Switch => "switch",
            Throw => "throw",
            Try => "try",
            Var => "var",
            Let => "let",
            Const => "const",
            While => "while",
            With => "with",
            New => "new",
            This => "this",
            Super => "super",
            Class => "class",
            Extends => "extends",
            Export => "export",
            Import => "import",
            Yield => "yield",
            In => "in",
            InstanceOf => "instanceof",
            TypeOf => "typeof",
            Void => "void",
            Delete => "delete",
        }
    }

    pub fn before_expr(&self) -> bool {
        matches!(
            self,
            Await
                | Case
                | Default_
                | Do
                | Else
                | Return
                | Throw
                | New
                | Extends
                | Yield
                | In
                | InstanceOf
                | TypeOf
                | Void
                | Delete
        )
    }

    fn starts_expr(&self) -> bool {
        matches!(
            self,
            Await
                | Function
                | Throw
                | New
                | This
                | Super
                | Class
                | Import
                | Yield
                | TypeOf
                | Void
                | Delete
        )
    }
}

impl Debug for Keyword {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "keyword '{}'", self.as_str())?;

        Ok(())
    }
}

impl From<BinOpToken> for BinaryOp {
    fn from(t: BinOpToken) -> Self {
        use self::BinaryOp::*;
        match t {
            BinOpToken::EqEq => EqEq,
            BinOpToken::NotEq => NotEq,
            BinOpToken::EqEqEq => EqEqEq,
            BinOpToken::NotEqEq => NotEqEq,
            BinOpToken::Lt => Lt,
            BinOpToken::LtEq => LtEq,
            BinOpToken::Gt => Gt,
            BinOpToken::GtEq => GtEq,
            BinOpToken::LShift => LShift,
            BinOpToken::RShift => RShift,
            BinOpToken::ZeroFillRShift => ZeroFillRShift,
            BinOpToken::Add => Add,
            BinOpToken::Sub => Sub,
            BinOpToken::Mul => Mul,
            BinOpToken::Div => Div,
            BinOpToken::Mod => Mod,
            BinOpToken::BitOr => BitOr,
            BinOpToken::BitXor => BitXor,
            BinOpToken::BitAnd => BitAnd,
            BinOpToken::LogicalOr => LogicalOr,
            BinOpToken::LogicalAnd => LogicalAnd,
            BinOpToken::Exp => Exp,
        }
    }
}

impl Token {
    /// Returns true if `self` can follow keyword let.
    ///
    /// e.g. `let a = xx;`, `let {a:{}} = 1`
    pub(crate) fn follows_keyword_let(&self) -> bool {
        match *self {
            // This is required to recognize `let let` in strict mode.
            tok!("let") => true,

            tok!('{') | tok!('[') | Word(Word::Ident(..)) | tok!("yield") | tok!("await") => true,

            _ => false,
        }
    }
}

/// Source-like rendering used in diagnostics.
impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(w) => f.write_str(&w.cow()),
            Template { .. } => f.write_str("template"),
            Str { raw, .. } => write!(f, "\"{}\"", raw),
            Regex(exp, flags) => write!(f, "/{}/{}", exp, flags),
            Num { raw, .. } => f.write_str(raw),
            Token::Error(_) => f.write_str("<error>"),
            _ => Debug::fmt(self, f),
        }
    }
}

impl Debug for Token {
    /// This method is called only in the case of parsing failure.
    #[cold]
    #[inline(never)]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(w) => write!(f, "{:?}", w)?,
            Arrow => write!(f, "=>")?,
            Dot => write!(f, ".")?,
            DotDotDot => write!(f, "...")?,
            Bang => write!(f, "!")?,
            LParen => write!(f, "(")?,
            RParen => write!(f, ")")?,
            LBracket => write!(f, "[")?,
            RBracket => write!(f, "]")?,
            LBrace => write!(f, "{{")?,
            RBrace => write!(f, "}}")?,
            Semi => write!(f, ";")?,
            Comma => write!(f, ",")?,
            BackQuote => write!(f, "`")?,
            Template { raw, .. } => write!(f, "template token ({})", raw)?,
            Colon => write!(f, ":")?,
            BinOp(op) => write!(f, "{}", BinaryOp::from(*op).as_str())?,
            AssignOp(op) => write!(f, "{}", op.as_str())?,
            DollarLBrace => write!(f, "${{")?,
            QuestionMark => write!(f, "?")?,
            PlusPlus => write!(f, "++")?,
            MinusMinus => write!(f, "--")?,
            Tilde => write!(f, "~")?,
            Str { value, .. } => write!(f, "string literal ({})", value)?,
            Regex(exp, flags) => write!(f, "regexp literal ({}, {})", exp, flags)?,
            Num { value, raw } => write!(f, "numeric literal ({}, {})", value, raw)?,
            Token::Error(_) => write!(f, "<lexing error>")?,
        }

        Ok(())
    }
}
