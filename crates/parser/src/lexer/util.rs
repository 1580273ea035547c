use super::{LexResult, Lexer};
use crate::error::{Error, SyntaxError};
use global_common::{
    chars::{is_line_terminator, is_whitespace},
    input::Input,
    BytePos, Span,
};

/// See https://tc39.github.io/ecma262/#sec-line-terminators
#[inline]
pub fn is_line_break(ch: char) -> bool {
    is_line_terminator(ch)
}

pub fn is_valid_regex_flag(ch: char) -> bool {
    matches!(ch, 'g' | 'm' | 's' | 'i' | 'y' | 'u')
}

impl<I: Input> Lexer<I> {
    #[inline(always)]
    pub(super) fn cur(&mut self) -> Option<char> {
        self.input.cur()
    }

    #[inline(always)]
    pub(super) fn peek(&mut self) -> Option<char> {
        self.input.peek()
    }

    #[inline(always)]
    pub(super) fn bump(&mut self) {
        self.input.bump()
    }

    #[inline(always)]
    pub(super) fn is(&mut self, c: u8) -> bool {
        self.input.is_byte(c)
    }

    #[inline(always)]
    pub(super) fn eat(&mut self, c: u8) -> bool {
        self.input.eat_byte(c)
    }

    #[inline(always)]
    pub(super) fn cur_pos(&self) -> BytePos {
        self.input.cur_pos()
    }

    #[inline(always)]
    pub(super) fn last_pos(&self) -> BytePos {
        self.input.last_pos()
    }

    /// Looks ahead without consuming.
    pub(super) fn input_starts_with(&self, s: &str) -> bool {
        let mut input = self.input.clone();
        s.chars().all(|c| {
            let matched = input.cur() == Some(c);
            if matched {
                input.bump();
            }
            matched
        })
    }

    pub(super) fn span(&self, start: BytePos) -> Span {
        let end = self.last_pos();
        debug_assert!(
            start <= end,
            "assertion failed: (span.start <= span.end). start = {}, end = {}",
            start.0,
            end.0
        );

        Span::new(start, end)
    }

    /// Shorthand for `let span = self.span(start); self.error_span(span)`
    #[cold]
    #[inline(never)]
    pub(super) fn error<T>(&mut self, start: BytePos, kind: SyntaxError) -> LexResult<T> {
        let span = self.span(start);
        self.error_span(span, kind)
    }

    #[cold]
    #[inline(never)]
    pub(super) fn error_span<T>(&mut self, span: Span, kind: SyntaxError) -> LexResult<T> {
        Err(Error::new(span, kind))
    }

    /// Expects current char to be '/' and next char to be '*'.
    pub(super) fn skip_block_comment(&mut self) -> LexResult<()> {
        let start = self.cur_pos();

        debug_assert_eq!(self.cur(), Some('/'));
        debug_assert_eq!(self.peek(), Some('*'));

        self.bump(); // '/'
        self.bump(); // '*'

        while let Some(ch) = self.cur() {
            if ch == '*' && self.peek() == Some('/') {
                self.bump(); // '*'
                self.bump(); // '/'
                return Ok(());
            }

            if is_line_break(ch) {
                self.state.had_line_break = true;
            }

            self.bump();
        }

        self.error(start, SyntaxError::UnterminatedBlockComment)
    }

    /// Skips to the end of the line. The line terminator is left to
    /// [Lexer::skip_space] so the line break is recorded.
    pub(super) fn skip_line_comment(&mut self, start_skip: usize) {
        for _ in 0..start_skip {
            self.bump();
        }

        self.input.uncons_while(|c| !is_line_break(c));
    }

    /// Skip comments or whitespaces.
    ///
    /// In script code, `<!--` starts a line comment anywhere and `-->` starts
    /// one at the beginning of a line.
    ///
    /// See https://tc39.github.io/ecma262/#sec-white-space
    pub(super) fn skip_space(&mut self) -> LexResult<()> {
        while let Some(ch) = self.cur() {
            match ch {
                c if is_line_break(c) => {
                    self.state.had_line_break = true;
                    self.bump();
                }
                c if is_whitespace(c) => self.bump(),
                '/' => match self.peek() {
                    Some('/') => self.skip_line_comment(2),
                    Some('*') => self.skip_block_comment()?,
                    _ => return Ok(()),
                },
                // Hashbang
                '#' if self.input.is_at_start() && self.peek() == Some('!') => {
                    self.skip_line_comment(2)
                }
                '<' if !self.ctx.module && self.input_starts_with("<!--") => {
                    self.skip_line_comment(4)
                }
                '-' if !self.ctx.module
                    && self.state.had_line_break
                    && self.input_starts_with("-->") =>
                {
                    self.skip_line_comment(3)
                }
                _ => return Ok(()),
            }
        }

        Ok(())
    }
}
