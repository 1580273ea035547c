macro_rules! span {
    ($parser:expr, $start:expr) => {{
        let start: ::global_common::BytePos = $start;
        let end: ::global_common::BytePos = $parser.input.prev_span().hi;

        debug_assert!(
            start <= end,
            "assertion failed: (span.start <= span.end). start = {}, end = {}",
            start.0,
            end.0
        );
        ::global_common::Span::new(start, end)
    }};
}

/// cur!($parser, required:bool)
///
/// When `required` is true, a lexing error is returned as the error of the
/// production and eof is reported as [crate::error::SyntaxError::Eof].
macro_rules! cur {
    ($parser:expr, false) => {
        $parser.input.cur()
    };
    ($parser:expr, true) => {{
        let pos = $parser.input.last_pos();
        let last = ::global_common::Span::new(pos, pos);
        let is_err_token = matches!($parser.input.cur(), Some(&crate::token::Token::Error(..)));
        if is_err_token {
            match $parser.input.bump() {
                crate::token::Token::Error(e) => return Err(e),
                _ => unreachable!(),
            }
        }

        match $parser.input.cur() {
            Some(c) => c,
            None => {
                return Err(crate::error::Error::new(
                    last,
                    crate::error::SyntaxError::Eof,
                ))
            }
        }
    }};
}

macro_rules! peek {
    ($parser:expr) => {{
        debug_assert!(
            $parser.input.knows_cur(),
            "parser should not call peek() without knowing current token.
Current token is {:?}",
            cur!($parser, false),
        );

        $parser.input.peek()
    }};
}

/// Returns true on eof.
macro_rules! eof {
    ($parser:expr) => {
        cur!($parser, false).is_none()
    };
}

/// This handles automatic semicolon insertion.
///
/// Returns bool.
macro_rules! is {
    ($parser:expr, BindingIdent) => {{
        let ctx = $parser.ctx();
        match cur!($parser, false) {
            Some(&crate::token::Token::Word(ref w)) => !ctx.is_reserved(w),
            _ => false,
        }
    }};

    ($parser:expr, IdentRef) => {{
        let ctx = $parser.ctx();
        match cur!($parser, false) {
            Some(&crate::token::Token::Word(ref w)) => !ctx.is_reserved(w),
            _ => false,
        }
    }};

    ($parser:expr, IdentName) => {{
        matches!(cur!($parser, false), Some(&crate::token::Token::Word(..)))
    }};

    ($parser:expr, Str) => {{
        matches!(cur!($parser, false), Some(&crate::token::Token::Str { .. }))
    }};

    ($parser:expr, Num) => {{
        matches!(cur!($parser, false), Some(&crate::token::Token::Num { .. }))
    }};

    ($parser:expr, ';') => {{
        match $parser.input.cur() {
            Some(&crate::token::Token::Semi) | None | Some(&tok!('}')) => true,
            _ => $parser.input.had_line_break_before_cur(),
        }
    }};

    ($parser:expr, $t:tt) => {
        $parser.input.is(&tok!($t))
    };
}

macro_rules! is_one_of {
    ($parser:expr, $($t:tt),+) => {{
        false
        $(
            || is!($parser, $t)
        )*
    }};
}

/// This handles automatic semicolon insertion.
///
/// Returns bool.
macro_rules! eat {
    ($parser:expr, ';') => {{
        tracing::trace!("eat(';'): cur={:?}", cur!($parser, false));
        match $parser.input.cur() {
            Some(&crate::token::Token::Semi) => {
                $parser.input.bump();
                true
            }
            None | Some(&tok!('}')) => true,
            _ => $parser.input.had_line_break_before_cur(),
        }
    }};

    ($parser:expr, $t:tt) => {{
        if is!($parser, $t) {
            $parser.input.bump();
            true
        } else {
            false
        }
    }};
}

macro_rules! eat_exact {
    ($parser:expr, $t:tt) => {{
        $parser.input.eat(&tok!($t))
    }};
}

/// Returns the error for the current token from the enclosing function.
macro_rules! unexpected {
    ($parser:expr) => {{
        return Err($parser.unexpected_err(None));
    }};
    ($parser:expr, $expected:expr) => {{
        return Err($parser.unexpected_err(Some(::std::borrow::Cow::from($expected))));
    }};
}

/// This handles automatic semicolon insertion.
macro_rules! expect {
    ($parser:expr, ';') => {{
        if !eat!($parser, ';') {
            unexpected!($parser, ";")
        }
    }};
    ($parser:expr, $t:tt) => {{
        if !eat!($parser, $t) {
            unexpected!($parser, tok!($t).to_string())
        }
    }};
}

macro_rules! expect_exact {
    ($parser:expr, $t:tt) => {{
        if !eat_exact!($parser, $t) {
            unexpected!($parser, tok!($t).to_string())
        }
    }};
}

/// Returns an unrecoverable error from the enclosing function.
macro_rules! syntax_error {
    ($parser:expr, $err:expr) => {
        syntax_error!($parser, $parser.input.cur_span(), $err)
    };

    ($parser:expr, $span:expr, $err:expr) => {{
        let err = crate::error::Error::new($span, $err);
        tracing::trace!("emitting error: {:?}", err);
        return Err(err);
    }};
}

macro_rules! trace_cur {
    ($parser:expr, $name:ident) => {{
        tracing::trace!(
            "{}: {:?}",
            stringify!($name),
            cur!($parser, false)
        );
    }};
}

/// Returns `$expr` from the enclosing function if it is an arrow function
/// starting at the recorded potential arrow start.
macro_rules! return_if_arrow {
    ($parser:expr, $expr:expr) => {{
        let is_cur = match $parser.state.potential_arrow_start {
            Some(start) => $expr.span().lo == start,
            None => false,
        };
        if is_cur {
            if let Expr::Arrow { .. } = *$expr {
                return Ok($expr);
            }
        }
    }};
}
