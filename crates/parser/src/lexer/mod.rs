//! ECMAScript lexer.

pub mod identifier;
mod number;
mod state;
mod util;

use self::{
    identifier::{is_ident_part, is_ident_start},
    state::State,
    util::{is_line_break, is_valid_regex_flag},
};
use crate::{
    context::Context,
    error::{Error, SyntaxError},
    token::*,
    Syntax,
};
use ast::JsWord;
use global_common::{chars::char_literals, input::Input, BytePos, Span, Spanned};
use std::iter::FusedIterator;

pub(crate) type LexResult<T> = Result<T, Error>;

#[derive(Clone)]
pub struct Lexer<I: Input> {
    state: State,
    input: I,
    pub(crate) ctx: Context,
    syntax: Syntax,
}

impl<I: Input> FusedIterator for Lexer<I> {}

impl<I: Input> Iterator for Lexer<I> {
    type Item = TokenAndSpan;

    fn next(&mut self) -> Option<Self::Item> {
        // The first token of the input counts as starting a line.
        self.state.had_line_break = self.state.is_first();

        let mut start = self.cur_pos();

        let token = match self.read_next(&mut start) {
            Ok(Some(token)) => token,
            Ok(None) => return None,
            Err(err) => {
                // Errors must consume input or the parser would never reach
                // the end of it.
                if self.cur_pos() == start && self.cur().is_some() {
                    self.bump();
                }

                return Some(TokenAndSpan {
                    span: err.span(),
                    token: Token::Error(err),
                    had_line_break: self.state.had_line_break,
                });
            }
        };

        self.state.update(start, &token);

        Some(TokenAndSpan {
            token,
            had_line_break: self.state.had_line_break,
            span: self.span(start),
        })
    }
}

impl<I: Input> Lexer<I> {
    pub fn new(syntax: Syntax, input: I) -> Self {
        Lexer {
            state: State::new(),
            input,
            ctx: Context {
                module: syntax.commonjs(),
                strict: syntax.commonjs(),
                ..Default::default()
            },
            syntax,
        }
    }

    /// `start` is updated to the start of the produced token.
    fn read_next(&mut self, start: &mut BytePos) -> LexResult<Option<Token>> {
        if let Some(tpl_start) = self.state.cur_tpl_start() {
            return self.read_tmpl_token(tpl_start).map(Some);
        }

        self.skip_space()?;
        *start = self.cur_pos();

        self.read_token()
    }

    fn read_token(&mut self) -> LexResult<Option<Token>> {
        let c = match self.cur() {
            Some(c) => c,
            None => return Ok(None),
        };

        let token = match c {
            // The interpretation of a dot depends on whether it is followed
            // by a digit or another two dots.
            '.' => self.read_token_dot()?,
            '(' | ')' | ';' | ',' | '[' | ']' | '{' | '}' | ':' | '?' | '`' | '~' => {
                self.bump();
                match c {
                    '(' => LParen,
                    ')' => RParen,
                    ';' => Semi,
                    ',' => Comma,
                    '[' => LBracket,
                    ']' => RBracket,
                    '{' => LBrace,
                    '}' => RBrace,
                    ':' => Colon,
                    '?' => QuestionMark,
                    '`' => BackQuote,
                    '~' => Tilde,
                    _ => unreachable!(),
                }
            }
            '0' => match self.peek() {
                // '0x', '0X' - hex number
                Some('x') | Some('X') => self.read_radix_number(16)?,
                // '0o', '0O' - octal number
                Some('o') | Some('O') => self.read_radix_number(8)?,
                // '0b', '0B' - binary number
                Some('b') | Some('B') => self.read_radix_number(2)?,

                _ => self.read_number(false)?,
            },
            // Anything else beginning with a digit is an integer, octal
            // number, or float.
            '1'..='9' => self.read_number(false)?,

            '"' | '\'' => self.read_str_lit()?,

            '/' => self.read_token_slash()?,
            '%' | '*' => self.read_token_mul_mod(c),
            '|' | '&' => self.read_token_logical(c),
            '^' => {
                // Bitwise xor
                self.bump();
                if self.eat(b'=') {
                    AssignOp(BitXorAssign)
                } else {
                    BinOp(BitXor)
                }
            }
            '+' | '-' => self.read_token_plus_min(c),
            '<' | '>' => self.read_token_lt_gt(c),
            '=' | '!' => self.read_token_eq_excl(c),

            // Identifier or keyword. '\uXXXX' sequences are allowed in
            // identifiers, so '\' also dispatches to that.
            c if c == '\\' || is_ident_start(c) => self.read_ident_or_keyword()?,

            c => {
                let start = self.cur_pos();
                self.bump();
                let kind = if c.is_ascii() {
                    SyntaxError::UnexpectedChar { c }
                } else {
                    SyntaxError::UnrecognizedUnicodeChar
                };
                return self.error(start, kind);
            }
        };

        Ok(Some(token))
    }

    fn read_token_dot(&mut self) -> LexResult<Token> {
        debug_assert_eq!(self.cur(), Some('.'));

        if let Some('0'..='9') = self.peek() {
            return self.read_number(true);
        }

        self.bump(); // 1st '.'

        if self.is(b'.') && self.peek() == Some('.') {
            self.bump(); // 2nd '.'
            self.bump(); // 3rd '.'
            return Ok(tok!("..."));
        }

        Ok(tok!('.'))
    }

    fn read_token_slash(&mut self) -> LexResult<Token> {
        debug_assert_eq!(self.cur(), Some('/'));

        // Regex
        if self.state.is_expr_allowed {
            return self.read_regexp();
        }

        // Divide operator
        self.bump();

        Ok(if self.eat(b'=') {
            AssignOp(DivAssign)
        } else {
            tok!('/')
        })
    }

    fn read_token_mul_mod(&mut self, c: char) -> Token {
        debug_assert!(c == '*' || c == '%');
        self.bump();

        let is_mul = c == '*';
        let mut token = if is_mul { BinOp(Mul) } else { BinOp(Mod) };

        // check for **
        if is_mul && self.eat(b'*') {
            token = BinOp(Exp)
        }

        if self.eat(b'=') {
            token = match token {
                BinOp(Mul) => AssignOp(MulAssign),
                BinOp(Mod) => AssignOp(ModAssign),
                BinOp(Exp) => AssignOp(ExpAssign),
                _ => unreachable!(),
            }
        }

        token
    }

    fn read_token_logical(&mut self, c: char) -> Token {
        debug_assert!(c == '|' || c == '&');
        self.bump();

        let is_and = c == '&';

        // '||', '&&'
        if self.eat(c as u8) {
            return BinOp(if is_and { LogicalAnd } else { LogicalOr });
        }

        // '|=', '&='
        if self.eat(b'=') {
            return AssignOp(if is_and { BitAndAssign } else { BitOrAssign });
        }

        BinOp(if is_and { BitAnd } else { BitOr })
    }

    fn read_token_plus_min(&mut self, c: char) -> Token {
        debug_assert!(c == '+' || c == '-');
        self.bump(); // '+' or '-'

        let is_plus = c == '+';

        // '++', '--'
        if self.eat(c as u8) {
            return if is_plus { PlusPlus } else { MinusMinus };
        }

        // '+=', '-='
        if self.eat(b'=') {
            return AssignOp(if is_plus { AddAssign } else { SubAssign });
        }

        BinOp(if is_plus { Add } else { Sub })
    }

    fn read_token_lt_gt(&mut self, c: char) -> Token {
        debug_assert!(c == '<' || c == '>');
        self.bump(); // '<' or '>'

        let mut op = if c == '<' { Lt } else { Gt };

        // '<<', '>>'
        if self.eat(c as u8) {
            op = if c == '<' { LShift } else { RShift };

            //'>>>'
            if c == '>' && self.eat(b'>') {
                op = ZeroFillRShift;
            }
        }

        if self.eat(b'=') {
            match op {
                Lt => BinOp(LtEq),
                Gt => BinOp(GtEq),
                LShift => AssignOp(LShiftAssign),
                RShift => AssignOp(RShiftAssign),
                ZeroFillRShift => AssignOp(ZeroFillRShiftAssign),
                _ => unreachable!(),
            }
        } else {
            BinOp(op)
        }
    }

    fn read_token_eq_excl(&mut self, c: char) -> Token {
        debug_assert!(c == '=' || c == '!');
        self.bump(); // '=' or '!'

        if self.eat(b'=') {
            // "=="
            if self.eat(b'=') {
                if c == '!' {
                    BinOp(NotEqEq)
                } else {
                    BinOp(EqEqEq)
                }
            } else if c == '!' {
                BinOp(NotEq)
            } else {
                BinOp(EqEq)
            }
        } else if c == '=' && self.eat(b'>') {
            Arrow
        } else if c == '!' {
            Bang
        } else {
            AssignOp(Assign)
        }
    }

    /// See https://tc39.github.io/ecma262/#sec-literals-regular-expression-literals
    fn read_regexp(&mut self) -> LexResult<Token> {
        debug_assert_eq!(self.cur(), Some('/'));

        let start = self.cur_pos();
        self.bump();

        let content_start = self.cur_pos();
        let (mut escaped, mut in_class) = (false, false);

        loop {
            let c = match self.cur() {
                // Regex literal cannot span multiple lines
                Some(c) if !is_line_break(c) => c,
                _ => return self.error(start, SyntaxError::UnterminatedRegExp),
            };

            if escaped {
                escaped = false;
            } else {
                match c {
                    '[' => in_class = true,
                    ']' if in_class => in_class = false,
                    '/' if !in_class => break,
                    _ => {}
                }
                escaped = c == '\\';
            }
            self.bump();
        }

        let content: JsWord = self.input.slice(content_start, self.cur_pos()).into();

        self.bump(); // '/'

        let flags_start = self.cur_pos();
        let flags = self.input.uncons_while(is_ident_part).to_string();

        for (i, flag) in flags.char_indices() {
            let lo = flags_start + BytePos(i as u32);
            let span = Span::new(lo, lo + BytePos(flag.len_utf8() as u32));

            if !is_valid_regex_flag(flag) {
                return self.error_span(span, SyntaxError::UnknownRegExpFlags { flag });
            }
            if flags[..i].contains(flag) {
                return self.error_span(span, SyntaxError::DuplicateRegExpFlags { flag });
            }
        }

        Ok(Regex(content, flags.into()))
    }

    /// See https://tc39.github.io/ecma262/#sec-literals-string-literals
    fn read_str_lit(&mut self) -> LexResult<Token> {
        let quote = match self.cur() {
            Some(c @ '\'') | Some(c @ '"') => c,
            _ => unreachable!("read_str_lit should be called on a quote"),
        };
        let start = self.cur_pos();
        self.bump(); // ' or "

        let raw_start = self.cur_pos();
        let mut out = String::new();
        let mut has_escape = false;
        // Bad escapes are reported once the closing quote is found, so that
        // lexing resumes after the literal.
        let mut error = None;

        while let Some(c) = self.cur() {
            match c {
                c if c == quote => {
                    let raw: JsWord = self.input.slice(raw_start, self.cur_pos()).into();
                    self.bump();

                    if let Some(err) = error {
                        return Err(err);
                    }
                    return Ok(Str {
                        value: out.into(),
                        raw,
                        has_escape,
                    });
                }
                '\\' => {
                    has_escape = true;
                    match self.read_escaped_char(false) {
                        Ok(Some(c)) => out.push(c),
                        Ok(None) => {}
                        Err(err) => {
                            error.get_or_insert(err);
                        }
                    }
                }
                '\n' | '\r' => break,
                _ => {
                    out.push(c);
                    self.bump();
                }
            }
        }

        self.error(start, SyntaxError::UnterminatedStrLit)
    }

    /// Reads an escape sequence. Returns `None` for a line continuation.
    ///
    /// Legacy octal escapes and `\8`/`\9` are rejected in templates and in
    /// strict code.
    fn read_escaped_char(&mut self, in_template: bool) -> LexResult<Option<char>> {
        debug_assert_eq!(self.cur(), Some('\\'));

        let start = self.cur_pos();
        self.bump(); // '\'

        let c = match self.cur() {
            Some(c) => c,
            None => return self.error(start, SyntaxError::InvalidEscape),
        };

        let c = match c {
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'b' => char_literals::BACKSPACE,
            'v' => char_literals::LINE_TABULATION,
            'f' => char_literals::FORM_FEED,
            '\r' => {
                self.bump();
                self.eat(b'\n');
                return Ok(None);
            }
            '\n' | char_literals::LINE_SEPARATOR | char_literals::PARAGRAPH_SEPARATOR => {
                self.bump();
                return Ok(None);
            }
            'x' => {
                self.bump(); // 'x'
                return match self.read_int_u32(16, 2).and_then(std::char::from_u32) {
                    Some(c) => Ok(Some(c)),
                    None => self.error(
                        start,
                        SyntaxError::BadCharacterEscapeSequence {
                            expected: "'\\x' followed by 2 hex digits",
                        },
                    ),
                };
            }
            'u' => {
                self.bump(); // 'u'
                return self.read_unicode_escape(start).map(Some);
            }

            // \0 is not an octal literal nor decimal literal.
            '0' if !matches!(self.peek(), Some('0'..='9')) => '\0',

            '0'..='7' => {
                if in_template {
                    self.bump();
                    return self.error(start, SyntaxError::InvalidEscape);
                }
                if self.ctx.strict {
                    self.bump();
                    return self.error(start, SyntaxError::LegacyOctalEscape);
                }

                // `\0`-`\377`
                let max_len = if c <= '3' { 3 } else { 2 };
                let mut value = 0;
                for _ in 0..max_len {
                    match self.cur().and_then(|c| c.to_digit(8)) {
                        Some(v) => {
                            value = value * 8 + v;
                            self.bump();
                        }
                        None => break,
                    }
                }

                return Ok(std::char::from_u32(value));
            }

            '8' | '9' if in_template || self.ctx.strict => {
                self.bump();
                return self.error(start, SyntaxError::InvalidEscape);
            }

            c => c,
        };

        self.bump();

        Ok(Some(c))
    }

    /// Reads the part of `\u` escape after `u`.
    ///
    /// Unpaired surrogates are replaced with U+FFFD.
    fn read_unicode_escape(&mut self, start: BytePos) -> LexResult<char> {
        if self.eat(b'{') {
            let value = self.read_int_u32(16, 0);

            return match value {
                Some(v) if v <= 0x10_ffff && self.is(b'}') => {
                    self.bump();
                    Ok(std::char::from_u32(v).unwrap_or(char::REPLACEMENT_CHARACTER))
                }
                _ => self.error(start, SyntaxError::InvalidCodePoint),
            };
        }

        let high = match self.read_int_u32(16, 4) {
            Some(v) => v,
            None => {
                return self.error(
                    start,
                    SyntaxError::BadCharacterEscapeSequence {
                        expected: "'\\u' followed by 4 hex digits",
                    },
                )
            }
        };

        if (0xd800..0xdc00).contains(&high) && self.input_starts_with("\\u") {
            let pair_start = self.cur_pos();
            self.bump(); // '\'
            self.bump(); // 'u'

            match self.read_int_u32(16, 4) {
                Some(low) if (0xdc00..0xe000).contains(&low) => {
                    let c = 0x10000 + ((high - 0xd800) << 10) + (low - 0xdc00);
                    return Ok(std::char::from_u32(c).unwrap_or(char::REPLACEMENT_CHARACTER));
                }
                _ => self.input.reset_to(pair_start),
            }
        }

        Ok(std::char::from_u32(high).unwrap_or(char::REPLACEMENT_CHARACTER))
    }

    /// Reads the text of a template literal, or the `` ` ``/`${` right after
    /// it.
    ///
    /// `tpl_start` is the position of the opening backquote.
    fn read_tmpl_token(&mut self, tpl_start: BytePos) -> LexResult<Token> {
        if self.state.last_was_tpl_element() {
            if self.is(b'$') && self.peek() == Some('{') {
                self.bump(); // '$'
                self.bump(); // '{'
                return Ok(tok!("${"));
            }
            if self.eat(b'`') {
                return Ok(tok!('`'));
            }
        }

        let mut raw = String::new();
        let mut cooked = Some(String::new());
        let mut has_escape = false;

        while let Some(c) = self.cur() {
            if c == '`' || (c == '$' && self.peek() == Some('{')) {
                return Ok(Template {
                    raw: raw.into(),
                    cooked: cooked.map(JsWord::from),
                    has_escape,
                });
            }

            if c == '\\' {
                has_escape = true;

                let esc_start = self.cur_pos();
                match self.read_escaped_char(true) {
                    Ok(Some(c)) => {
                        if let Some(cooked) = &mut cooked {
                            cooked.push(c)
                        }
                    }
                    Ok(None) => {}
                    Err(..) => cooked = None,
                }

                let text = self.input.slice(esc_start, self.cur_pos());
                raw.push_str(&text.replace("\r\n", "\n").replace('\r', "\n"));
                continue;
            }

            self.bump();
            // Line terminators are normalized in both raw and cooked text.
            let c = if c == '\r' {
                self.eat(b'\n');
                '\n'
            } else {
                c
            };
            raw.push(c);
            if let Some(cooked) = &mut cooked {
                cooked.push(c)
            }
        }

        // Leave the template so the next call sees the end of input.
        self.state.context.pop();
        self.error_span(
            Span::new(tpl_start, self.cur_pos()),
            SyntaxError::UnterminatedTpl,
        )
    }

    /// Reads an identifier, resolving `\u` escapes. Returns whether escapes
    /// were used.
    fn read_word_as_str(&mut self) -> LexResult<(JsWord, bool)> {
        let mut word = String::new();
        let mut has_escape = false;
        let mut first = true;

        while let Some(c) = self.cur() {
            if (first && is_ident_start(c)) || (!first && is_ident_part(c)) {
                self.bump();
                word.push(c);
            } else if c == '\\' {
                has_escape = true;

                let esc_start = self.cur_pos();
                self.bump(); // '\'
                if !self.eat(b'u') {
                    return self.error(esc_start, SyntaxError::InvalidIdentChar);
                }

                let c = self.read_unicode_escape(esc_start)?;
                let valid = if first {
                    is_ident_start(c)
                } else {
                    is_ident_part(c)
                };
                if !valid {
                    return self.error(esc_start, SyntaxError::InvalidIdentChar);
                }

                word.push(c);
            } else {
                break;
            }

            first = false;
        }

        Ok((word.into(), has_escape))
    }

    /// See https://tc39.github.io/ecma262/#sec-names-and-keywords
    fn read_ident_or_keyword(&mut self) -> LexResult<Token> {
        let start = self.cur_pos();
        let (text, has_escape) = self.read_word_as_str()?;

        let word = Word::from(text);

        if !has_escape {
            return Ok(Word(word));
        }

        // Whether `yield`, `let` and `await` are reserved depends on the
        // syntactic context, which is why the lexer carries one.
        if self.ctx.is_reserved(&word) {
            return self.error(
                start,
                SyntaxError::EscapeInReservedWord { word: word.into() },
            );
        }

        Ok(Word(Word::Ident(word.into())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use global_common::input::StringInput;
    use pretty_assertions::assert_eq;

    fn lex_with(syntax: Syntax, s: &str) -> Vec<Token> {
        Lexer::new(syntax, StringInput::new(s, BytePos(1)))
            .map(|t| t.token)
            .collect()
    }

    fn lex(s: &str) -> Vec<Token> {
        lex_with(Syntax::default(), s)
    }

    fn ident(s: &str) -> Token {
        Word(Word::Ident(s.into()))
    }

    fn num(value: f64, raw: &str) -> Token {
        Num {
            value,
            raw: raw.into(),
        }
    }

    fn errors(tokens: &[Token]) -> Vec<String> {
        tokens
            .iter()
            .filter_map(|t| match t {
                Token::Error(e) => Some(e.kind().msg().into_owned()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn punctuators() {
        assert_eq!(
            lex("a **= b >>>= c ... => !== ?"),
            vec![
                ident("a"),
                AssignOp(ExpAssign),
                ident("b"),
                AssignOp(ZeroFillRShiftAssign),
                ident("c"),
                DotDotDot,
                Arrow,
                BinOp(NotEqEq),
                QuestionMark,
            ]
        );
    }

    #[test]
    fn keywords_and_literals() {
        assert_eq!(
            lex("const x = null"),
            vec![tok!("const"), ident("x"), tok!('='), tok!("null")]
        );
    }

    #[test]
    fn regex_vs_division() {
        assert_eq!(
            lex("a / b / c"),
            vec![ident("a"), tok!('/'), ident("b"), tok!('/'), ident("c")]
        );
        assert_eq!(
            lex("x = /a[/]b/gi"),
            vec![ident("x"), tok!('='), Regex("a[/]b".into(), "gi".into())]
        );
        assert_eq!(
            lex("if (x) /re/.test(y)")[4],
            Regex("re".into(), "".into())
        );
    }

    #[test]
    fn regex_flags() {
        assert_eq!(
            errors(&lex("/a/gg")),
            vec!["duplicate regular expression flag 'g'"]
        );
        assert_eq!(
            errors(&lex("/a/x")),
            vec!["invalid regular expression flag 'x'"]
        );
        assert_eq!(
            errors(&lex("/a\n/")),
            vec![
                "unterminated regular expression literal",
                "unterminated regular expression literal"
            ]
        );
    }

    #[test]
    fn strings() {
        assert_eq!(
            lex(r#"'a\n\x41B\u{43}\101' "\0""#),
            vec![
                Str {
                    value: "a\nABCA".into(),
                    raw: r"a\n\x41B\u{43}\101".into(),
                    has_escape: true,
                },
                Str {
                    value: "\0".into(),
                    raw: r"\0".into(),
                    has_escape: true,
                },
            ]
        );
    }

    #[test]
    fn surrogate_pair_escape() {
        assert_eq!(
            lex(r"'\uD83D\uDE00'"),
            vec![Str {
                value: "\u{1F600}".into(),
                raw: r"\uD83D\uDE00".into(),
                has_escape: true,
            }]
        );
    }

    #[test]
    fn line_continuation() {
        match &lex("'a\\\nb'")[0] {
            Str { value, .. } => assert_eq!(&**value, "ab"),
            t => panic!("{:?}", t),
        }
    }

    #[test]
    fn unterminated_string() {
        let tokens = lex("'abc\nx");
        assert_eq!(errors(&tokens), vec!["unterminated string literal"]);
        assert_eq!(tokens.last(), Some(&ident("x")));
    }

    #[test]
    fn octal_escape_in_strict_mode() {
        let module = Syntax::Es(crate::EsConfig {
            commonjs: true,
            ..Default::default()
        });
        assert_eq!(
            errors(&lex_with(module, "'\\01'")),
            vec!["octal escape sequences are not allowed in strict mode"]
        );
    }

    #[test]
    fn numbers() {
        assert_eq!(
            lex("1 .5 0x10 a.b"),
            vec![
                num(1.0, "1"),
                num(0.5, ".5"),
                num(16.0, "0x10"),
                ident("a"),
                tok!('.'),
                ident("b"),
            ]
        );
    }

    #[test]
    fn template() {
        assert_eq!(
            lex("`a${b}c`"),
            vec![
                tok!('`'),
                Template {
                    raw: "a".into(),
                    cooked: Some("a".into()),
                    has_escape: false,
                },
                tok!("${"),
                ident("b"),
                tok!('}'),
                Template {
                    raw: "c".into(),
                    cooked: Some("c".into()),
                    has_escape: false,
                },
                tok!('`'),
            ]
        );
    }

    #[test]
    fn template_with_invalid_escape() {
        assert_eq!(
            lex(r"`\01`")[1],
            Template {
                raw: r"\01".into(),
                cooked: None,
                has_escape: true,
            }
        );
    }

    #[test]
    fn empty_template_and_nesting() {
        let tokens = lex("``; `${`x`}`");
        assert_eq!(
            &tokens[..3],
            &[
                tok!('`'),
                Template {
                    raw: "".into(),
                    cooked: Some("".into()),
                    has_escape: false,
                },
                tok!('`'),
            ]
        );
        assert!(errors(&tokens).is_empty());
        assert_eq!(tokens.last(), Some(&tok!('`')));
    }

    #[test]
    fn unterminated_template_stops() {
        let tokens = lex("`abc");
        assert_eq!(errors(&tokens), vec!["unterminated template literal"]);
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn unicode_escape_in_identifier() {
        assert_eq!(lex(r"\u0061bc"), vec![ident("abc")]);
        assert_eq!(
            errors(&lex(r"v\u0061r")),
            vec!["keyword 'var' must not contain escaped characters"]
        );
    }

    #[test]
    fn comments() {
        assert_eq!(
            lex("#!/usr/bin/env node\na // b\n/* c */ d <!-- e\n--> f\ng"),
            vec![ident("a"), ident("d"), ident("g")]
        );
    }

    #[test]
    fn html_comments_are_operators_in_modules() {
        let module = Syntax::Es(crate::EsConfig {
            commonjs: true,
            ..Default::default()
        });
        assert_eq!(
            lex_with(module, "a\n--> b"),
            vec![ident("a"), MinusMinus, tok!('>'), ident("b")]
        );
    }

    #[test]
    fn line_breaks() {
        let tokens: Vec<_> = Lexer::new(Syntax::default(), StringInput::new("a\nb c", BytePos(1)))
            .map(|t| t.had_line_break)
            .collect();
        assert_eq!(tokens, vec![true, true, false]);
    }

    #[test]
    fn spans() {
        let spans: Vec<_> =
            Lexer::new(Syntax::default(), StringInput::new("ab  'c'", BytePos(1)))
                .map(|t| (t.span.lo.0, t.span.hi.0))
                .collect();
        assert_eq!(spans, vec![(1, 3), (5, 8)]);
    }

    #[test]
    fn unexpected_characters() {
        let tokens = lex("a @ b \u{2603}");
        assert_eq!(
            errors(&tokens),
            vec!["unexpected character '@'", "unrecognized Unicode character"]
        );
        assert_eq!(tokens[2], ident("b"));
    }
}
