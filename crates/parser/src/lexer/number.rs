//! Lexer methods related to reading numbers.
//!
//!
//! See https://tc39.github.io/ecma262/#sec-literals-numeric-literals

use super::{is_ident_start, LexResult, Lexer};
use crate::{
    error::SyntaxError,
    token::{Num, Token},
};
use global_common::{input::Input, BytePos, Span};

impl<I: Input> Lexer<I> {
    /// `op`- |total, radix, value| -> (total * radix + value, continue)
    ///
    /// Returns the total and the number of digits read.
    fn read_digits<F, Ret>(&mut self, radix: u8, mut op: F) -> (Ret, usize)
    where
        F: FnMut(Ret, u8, u32) -> (Ret, bool),
        Ret: Copy + Default,
    {
        debug_assert!(
            radix == 2 || radix == 8 || radix == 10 || radix == 16,
            "radix for read_int should be one of 2, 8, 10, 16, but got {}",
            radix
        );

        let mut total: Ret = Default::default();
        let mut count = 0;

        while let Some(c) = self.cur() {
            let val = match c.to_digit(radix as u32) {
                Some(val) => val,
                None => break,
            };

            self.bump();
            count += 1;
            let (t, cont) = op(total, radix, val);
            total = t;
            if !cont {
                break;
            }
        }

        (total, count)
    }

    /// This can read long integers like
    /// "13612536612375123612312312312312312312312".
    fn read_number_no_dot(&mut self, radix: u8) -> LexResult<f64> {
        let start = self.cur_pos();

        let (res, count) = self.read_digits(radix, |total, radix, v| {
            (f64::mul_add(total, radix as f64, v as f64), true)
        });

        if count == 0 {
            return self.error(start, SyntaxError::ExpectedDigit { radix });
        }
        Ok(res)
    }

    /// Ensure that an identifier does not directly follow a number.
    fn ensure_not_ident(&mut self) -> LexResult<()> {
        match self.cur() {
            Some(ch) if is_ident_start(ch) || ch.is_ascii_digit() => {
                let pos = self.cur_pos();
                // Swallow the rest of the word so lexing resumes after it.
                self.input
                    .uncons_while(|c| super::is_ident_part(c) || c.is_ascii_digit());
                self.error_span(Span::new(pos, self.last_pos()), SyntaxError::IdentAfterNum)
            }
            _ => Ok(()),
        }
    }

    pub(super) fn read_radix_number(&mut self, radix: u8) -> LexResult<Token> {
        debug_assert!(
            radix == 2 || radix == 8 || radix == 16,
            "radix should be one of 2, 8, 16, but got {}",
            radix
        );
        debug_assert_eq!(self.cur(), Some('0'));

        let start = self.cur_pos();

        self.bump(); // 0
        self.bump(); // one of x, X, o, O, b, B

        let value = self.read_number_no_dot(radix)?;

        self.ensure_not_ident()?;

        Ok(Num {
            value,
            raw: self.raw_since(start),
        })
    }

    /// Read an integer of at most `len` digits in the given radix. Returns
    /// `None` if zero digits were read or if the value overflows.
    /// When `len` is not zero, this will return `None` unless the integer has
    /// exactly `len` digits.
    pub(super) fn read_int_u32(&mut self, radix: u8, len: u8) -> Option<u32> {
        let mut overflow = false;
        let (v, count) = self.read_digits(radix, |total: u32, radix, val| {
            let next = total
                .checked_mul(radix as u32)
                .and_then(|t| t.checked_add(val));
            match next {
                Some(next) => (next, true),
                None => {
                    overflow = true;
                    (total, false)
                }
            }
        });
        let count_ok = if len == 0 {
            count > 0
        } else {
            count == len as usize
        };
        if overflow || !count_ok {
            None
        } else {
            Some(v)
        }
    }

    /// Reads an integer, legacy octal integer, or floating-point number.
    pub(super) fn read_number(&mut self, starts_with_dot: bool) -> LexResult<Token> {
        debug_assert!(self.cur().is_some());
        if starts_with_dot {
            debug_assert!(
                self.is(b'.'),
                "read_number(starts_with_dot = true) expects current char to be '.'"
            );
        }
        let start = self.cur_pos();

        if !starts_with_dot {
            let starts_with_zero = self.is(b'0');

            self.read_number_no_dot(10)?;

            // `0` alone is decimal, `017` is a legacy octal and `019` is a
            // decimal with a leading zero.
            if starts_with_zero && self.last_pos() != start + BytePos(1) {
                let raw = self.raw_since(start);
                if raw.bytes().all(|b| (b'0'..=b'7').contains(&b)) {
                    self.ensure_not_ident()?;

                    let value = raw
                        .bytes()
                        .fold(0f64, |total, b| total.mul_add(8.0, f64::from(b - b'0')));
                    return Ok(Num { value, raw });
                }
            }
        }

        //  `0.a`, `08.a`, `102.a` are invalid.
        //
        // `.1.a`, `.1e-4.a` are valid,
        if self.eat(b'.') {
            self.read_digits(10, |_: (), _, _| ((), true));
        }

        // Handle 'e' and 'E'
        //
        // .5e1 = 5
        // 1e2 = 100
        // 1e+2 = 100
        // 1e-2 = 0.01
        if self.is(b'e') || self.is(b'E') {
            self.bump(); // 'e' or 'E'

            if self.is(b'+') || self.is(b'-') {
                self.bump();
            }

            self.read_number_no_dot(10)?;
        }

        self.ensure_not_ident()?;

        let raw = self.raw_since(start);
        match raw.parse::<f64>() {
            Ok(value) => Ok(Num { value, raw }),
            Err(..) => self.error(start, SyntaxError::ExpectedDigit { radix: 10 }),
        }
    }

    fn raw_since(&self, start: BytePos) -> ast::JsWord {
        self.input.slice(start, self.last_pos()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{lexer::Lexer, Syntax};
    use global_common::input::StringInput;

    fn lex_num(s: &str) -> Result<(f64, String), String> {
        let mut l = Lexer::new(Syntax::default(), StringInput::new(s, BytePos(1)));
        match l.next().map(|t| t.token) {
            Some(Token::Num { value, raw }) => Ok((value, raw.to_string())),
            Some(Token::Error(e)) => Err(e.kind().msg().into_owned()),
            other => panic!("{:?}", other),
        }
    }

    fn num(s: &str) -> f64 {
        lex_num(s).unwrap().0
    }

    #[test]
    fn decimal() {
        assert_eq!(num("0"), 0.0);
        assert_eq!(num("1234"), 1234.0);
        assert_eq!(num("1.5"), 1.5);
        assert_eq!(num(".5"), 0.5);
        assert_eq!(num("5."), 5.0);
        assert_eq!(num("1e3"), 1000.0);
        assert_eq!(num("2.5E-1"), 0.25);
        assert_eq!(num("1e+2"), 100.0);
    }

    #[test]
    fn radix() {
        assert_eq!(num("0xff"), 255.0);
        assert_eq!(num("0XFF"), 255.0);
        assert_eq!(num("0o17"), 15.0);
        assert_eq!(num("0b101"), 5.0);
    }

    #[test]
    fn legacy_octal() {
        assert_eq!(lex_num("017"), Ok((15.0, "017".into())));
        // Not octal: contains 8 or 9.
        assert_eq!(num("019"), 19.0);
        assert_eq!(num("08.5"), 8.5);
    }

    #[test]
    fn large_integer() {
        assert_eq!(num("18446744073709551616"), 18446744073709551616.0);
    }

    #[test]
    fn errors() {
        assert_eq!(
            lex_num("3in x"),
            Err("numeric literal must not be immediately followed by an identifier".into())
        );
        assert_eq!(lex_num("0x"), Err("expected a hexadecimal digit".into()));
        assert_eq!(lex_num("1e"), Err("expected a decimal digit".into()));
    }
}
