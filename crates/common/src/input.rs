use crate::{pos::BytePos, SourceFile};
use std::str;

/// Implementation of [Input] over the text of a single source file.
///
/// Positions handed out by this type are absolute, i.e. they live in the
/// [crate::SourceMap] position space of the file the text came from.
#[derive(Clone)]
pub struct StringInput<'a> {
    /// Position of the first char of `iter`.
    start_pos: BytePos,
    last_pos: BytePos,
    /// Current cursor
    iter: str::CharIndices<'a>,
    orig: &'a str,
    /// Original start position.
    orig_start: BytePos,
}

impl<'a> StringInput<'a> {
    /// `start` is the absolute position of the first byte of `src`.
    pub fn new(src: &'a str, start: BytePos) -> Self {
        StringInput {
            start_pos: start,
            last_pos: start,
            orig: src,
            iter: src.char_indices(),
            orig_start: start,
        }
    }

    #[inline]
    fn offset_of(&self, pos: BytePos) -> usize {
        (pos.0 - self.orig_start.0) as usize
    }
}

impl<'a> From<&'a SourceFile> for StringInput<'a> {
    fn from(fm: &'a SourceFile) -> Self {
        StringInput::new(&fm.src, fm.start_pos)
    }
}

impl<'a> Input for StringInput<'a> {
    #[inline]
    fn cur(&mut self) -> Option<char> {
        self.iter.clone().next().map(|i| i.1)
    }

    #[inline]
    fn peek(&mut self) -> Option<char> {
        self.iter.clone().nth(1).map(|i| i.1)
    }

    #[inline]
    fn bump(&mut self) {
        if let Some((i, c)) = self.iter.next() {
            self.last_pos = self.start_pos + BytePos((i + c.len_utf8()) as u32);
        } else {
            unreachable!("bump should not be called when cur() == None");
        }
    }

    #[inline]
    fn is_at_start(&self) -> bool {
        self.orig_start == self.last_pos
    }

    fn cur_pos(&self) -> BytePos {
        self.iter
            .clone()
            .next()
            .map(|(p, _)| self.start_pos + BytePos(p as u32))
            .unwrap_or(self.last_pos)
    }

    #[inline]
    fn last_pos(&self) -> BytePos {
        self.last_pos
    }

    #[inline]
    fn slice(&self, start: BytePos, end: BytePos) -> &str {
        debug_assert!(start <= end);
        &self.orig[self.offset_of(start)..self.offset_of(end)]
    }

    fn uncons_while<F>(&mut self, mut pred: F) -> &str
    where
        F: FnMut(char) -> bool,
    {
        let s = self.iter.as_str();
        let mut last = 0;

        for (i, c) in s.char_indices() {
            if pred(c) {
                last = i + c.len_utf8();
            } else {
                break;
            }
        }
        let ret = &s[..last];

        self.last_pos = self.cur_pos() + BytePos(last as _);
        self.start_pos = self.last_pos;
        self.iter = s[last..].char_indices();

        ret
    }

    #[inline]
    fn reset_to(&mut self, to: BytePos) {
        let idx = self.offset_of(to);

        self.iter = self.orig[idx..].char_indices();
        self.start_pos = to;
        self.last_pos = to;
    }

    #[inline]
    fn is_byte(&mut self, c: u8) -> bool {
        match self.iter.as_str().as_bytes().first() {
            Some(&b) => b == c,
            None => false,
        }
    }
}

pub trait Input: Clone {
    fn cur(&mut self) -> Option<char>;
    fn peek(&mut self) -> Option<char>;
    fn bump(&mut self);

    fn is_at_start(&self) -> bool;

    fn cur_pos(&self) -> BytePos;

    fn last_pos(&self) -> BytePos;

    /// Text between two absolute positions.
    fn slice(&self, start: BytePos, end: BytePos) -> &str;

    /// Takes items from stream, testing each one with predicate. returns the
    /// range of items which passed predicate.
    fn uncons_while<F>(&mut self, f: F) -> &str
    where
        F: FnMut(char) -> bool;

    fn reset_to(&mut self, to: BytePos);

    /// Implementors can override the method to make it faster.
    #[inline]
    fn is_byte(&mut self, c: u8) -> bool {
        match self.cur() {
            Some(ch) => ch == c as char,
            _ => false,
        }
    }

    /// Implementors can override the method to make it faster.
    #[inline]
    fn eat_byte(&mut self, c: u8) -> bool {
        if self.is_byte(c) {
            self.bump();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_are_absolute() {
        let mut input = StringInput::new("let é = 1;", BytePos(10));
        assert_eq!(input.cur_pos(), BytePos(10));

        let word = input.uncons_while(|c| c.is_ascii_alphabetic()).to_string();
        assert_eq!(word, "let");
        assert_eq!(input.cur_pos(), BytePos(13));

        input.bump();
        input.bump();
        assert_eq!(input.cur_pos(), BytePos(16));
        assert_eq!(input.slice(BytePos(14), BytePos(16)), "é");
    }

    #[test]
    fn reset_to_rewinds() {
        let mut input = StringInput::new("abc", BytePos(1));
        input.bump();
        input.bump();
        input.reset_to(BytePos(2));
        assert_eq!(input.cur(), Some('b'));
        assert!(input.eat_byte(b'b'));
        assert_eq!(input.cur(), Some('c'));
    }
}
