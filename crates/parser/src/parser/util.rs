use super::*;
use std::{
    borrow::Cow,
    ops::{Deref, DerefMut},
};

pub(super) trait ParseObject<Obj> {
    type Prop;
    fn make_object(&mut self, span: Span, props: Vec<Self::Prop>) -> PResult<Obj>;
    fn parse_object_prop(&mut self) -> PResult<Self::Prop>;
}

pub(super) struct WithState<'w, I: Tokens> {
    inner: &'w mut Parser<I>,
    orig_state: State,
}
impl<'w, I: Tokens> Deref for WithState<'w, I> {
    type Target = Parser<I>;

    fn deref(&self) -> &Parser<I> {
        self.inner
    }
}
impl<'w, I: Tokens> DerefMut for WithState<'w, I> {
    fn deref_mut(&mut self) -> &mut Parser<I> {
        self.inner
    }
}
impl<'w, I: Tokens> Drop for WithState<'w, I> {
    fn drop(&mut self) {
        std::mem::swap(&mut self.inner.state, &mut self.orig_state);
    }
}

pub(super) struct WithCtx<'w, I: Tokens> {
    inner: &'w mut Parser<I>,
    orig_ctx: Context,
}
impl<'w, I: Tokens> Deref for WithCtx<'w, I> {
    type Target = Parser<I>;

    fn deref(&self) -> &Parser<I> {
        self.inner
    }
}
impl<'w, I: Tokens> DerefMut for WithCtx<'w, I> {
    fn deref_mut(&mut self) -> &mut Parser<I> {
        self.inner
    }
}
impl<'w, I: Tokens> Drop for WithCtx<'w, I> {
    fn drop(&mut self) {
        self.inner.set_ctx(self.orig_ctx);
    }
}

pub(super) trait ExprExt {
    fn as_expr(&self) -> &Expr;

    /// "IsValidSimpleAssignmentTarget"
    fn is_valid_simple_assignment_target(&self, strict: bool) -> bool {
        match *self.as_expr() {
            Expr::Ident(Ident { ref sym, .. }) => {
                if strict && (&**sym == "arguments" || &**sym == "eval") {
                    return false;
                }
                true
            }

            Expr::Paren(ParenExpr { ref expr, .. }) => {
                expr.is_valid_simple_assignment_target(strict)
            }

            Expr::Member(..) => true,

            Expr::This(..)
            | Expr::Lit(..)
            | Expr::Array(..)
            | Expr::Object(..)
            | Expr::Fn(..)
            | Expr::Class(..)
            | Expr::Tpl(..)
            | Expr::TaggedTpl(..)
            | Expr::New(..)
            | Expr::Call(..)
            | Expr::MetaProp(..)
            | Expr::Update(..)
            | Expr::Unary(..)
            | Expr::Bin(..)
            | Expr::Cond(..)
            | Expr::Yield(..)
            | Expr::Arrow(..)
            | Expr::Assign(..)
            | Expr::Seq(..)
            | Expr::Invalid(..) => false,
        }
    }
}

impl ExprExt for Box<Expr> {
    fn as_expr(&self) -> &Expr {
        self
    }
}
impl ExprExt for Expr {
    fn as_expr(&self) -> &Expr {
        self
    }
}

impl<I: Tokens> Parser<I> {
    pub(super) fn assert_and_bump(&mut self, token: &Token) {
        debug_assert!(
            self.input.is(token),
            "assertion failed: expected token {:?}, got {:?}",
            token,
            self.input.cur()
        );

        self.input.bump();
    }

    /// Original context is restored when returned guard is dropped.
    pub(super) fn with_ctx(&mut self, ctx: Context) -> WithCtx<'_, I> {
        let orig_ctx = self.ctx();
        self.set_ctx(ctx);
        WithCtx {
            orig_ctx,
            inner: self,
        }
    }

    /// Original state is restored when returned guard is dropped.
    pub(super) fn with_state(&mut self, state: State) -> WithState<'_, I> {
        let orig_state = std::mem::replace(&mut self.state, state);
        WithState {
            orig_state,
            inner: self,
        }
    }

    pub(super) fn strict_mode(&mut self) -> WithCtx<'_, I> {
        let ctx = Context {
            strict: true,
            ..self.ctx()
        };
        self.with_ctx(ctx)
    }

    /// Original context is restored when returned guard is dropped.
    pub(super) fn include_in_expr(&mut self, include_in_expr: bool) -> WithCtx<'_, I> {
        let ctx = Context {
            include_in_expr,
            ..self.ctx()
        };
        self.with_ctx(ctx)
    }

    /// Context of a function body.
    pub(super) fn fn_ctx(&self, is_generator: bool) -> Context {
        Context {
            in_function: true,
            in_generator: is_generator,
            is_break_allowed: false,
            is_continue_allowed: false,
            include_in_expr: true,
            ..self.ctx()
        }
    }

    /// The lexer depends on the context too, so it is updated as well.
    pub(super) fn set_ctx(&mut self, ctx: Context) {
        self.input.set_ctx(ctx);
    }

    /// Records a recoverable error.
    #[cold]
    #[inline(never)]
    pub(super) fn emit_err(&mut self, span: Span, kind: SyntaxError) {
        let err = Error::new(span, kind);
        tracing::debug!("recoverable error: {:?}", err);
        self.errors.push(err);
    }

    #[cold]
    #[inline(never)]
    pub(super) fn unexpected_err(&mut self, expected: Option<Cow<'static, str>>) -> Error {
        let span = self.input.cur_span();
        match self.input.cur() {
            Some(&Token::Error(..)) => match self.input.bump() {
                Token::Error(err) => err,
                _ => unreachable!(),
            },
            None => Error::new(span, SyntaxError::Eof),
            Some(tok) => {
                let kind = match expected {
                    Some(token) => SyntaxError::Expected { token },
                    None => SyntaxError::Unexpected {
                        got: tok.to_string(),
                    },
                };
                Error::new(span, kind)
            }
        }
    }

    /// Reports `key = value` properties recorded after `since` which did not
    /// become part of a pattern.
    pub(super) fn report_shorthand_inits(&mut self, since: usize) {
        let since = since.min(self.state.shorthand_inits.len());
        let spans: Vec<_> = self.state.shorthand_inits.drain(since..).collect();
        for span in spans {
            self.emit_err(span, SyntaxError::ShorthandPropInit);
        }
    }

    /// Skips to a point where the next statement can start: past a `;` or up
    /// to the `}` closing the current block.
    ///
    /// At least one token is consumed if the failed statement did not consume
    /// any.
    pub(super) fn recover(&mut self, start: BytePos) {
        if self.input.cur_pos() == start && !eof!(self) {
            self.bump_and_keep_error();
        }

        let mut depth = 0usize;
        loop {
            let (opens, closes, stops) = match self.input.cur() {
                None => return,
                Some(&tok!(';')) => (false, false, depth == 0),
                Some(&tok!('{')) | Some(&tok!("${")) => (true, false, false),
                Some(&tok!('}')) => {
                    if depth == 0 {
                        return;
                    }
                    (false, true, false)
                }
                Some(_) => (false, false, false),
            };

            if opens {
                depth += 1;
            } else if closes {
                depth -= 1;
            }

            self.bump_and_keep_error();
            if stops {
                return;
            }
        }
    }

    fn bump_and_keep_error(&mut self) {
        if let Token::Error(err) = self.input.bump() {
            tracing::debug!("lexing error while recovering: {:?}", err);
            self.errors.push(err);
        }
    }
}
