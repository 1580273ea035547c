use crate::token::{Keyword, Word};

/// Syntactic context.
#[derive(Debug, Clone, Copy, Default)]
pub struct Context {
    /// Is in module code? Module code is always strict.
    pub module: bool,
    pub strict: bool,
    /// If false, `in` is not parsed as a binary operator. Used for the head of
    /// a `for` statement.
    pub include_in_expr: bool,
    /// If true, yield expression is parsed, and "yield" is treated as a
    /// keyword.
    pub in_generator: bool,

    pub is_continue_allowed: bool,
    pub is_break_allowed: bool,

    pub in_function: bool,
}

impl Context {
    pub(crate) fn is_reserved(self, word: &Word) -> bool {
        match *word {
            Word::Keyword(Keyword::Let) => self.strict,
            Word::Keyword(Keyword::Await) => self.module,
            Word::Keyword(Keyword::Yield) => self.in_generator || self.strict,

            Word::Null | Word::True | Word::False | Word::Keyword(..) => true,

            Word::Ident(ref w) => self.is_future_reserved(w),
        }
    }

    pub fn is_reserved_word(self, word: &str) -> bool {
        match word {
            "let" => self.strict,
            "await" => self.module,
            "yield" => self.in_generator || self.strict,

            "null" | "true" | "false" | "break" | "case" | "catch" | "continue" | "debugger"
            | "default" | "do" | "export" | "else" | "finally" | "for" | "function" | "if"
            | "return" | "switch" | "throw" | "try" | "var" | "const" | "while" | "with"
            | "new" | "this" | "super" | "class" | "extends" | "import" | "in" | "instanceof"
            | "typeof" | "void" | "delete" => true,

            _ => self.is_future_reserved(word),
        }
    }

    fn is_future_reserved(self, word: &str) -> bool {
        match word {
            "enum" => true,

            "implements" | "package" | "protected" | "interface" | "private" | "public"
            | "static" => self.strict,

            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict() -> Context {
        Context {
            strict: true,
            ..Default::default()
        }
    }

    #[test]
    fn future_reserved_words_need_strict_mode() {
        for w in &["implements", "package", "protected", "interface", "private", "public"] {
            assert!(!Context::default().is_reserved_word(w), "{}", w);
            assert!(strict().is_reserved_word(w), "{}", w);
        }
        assert!(Context::default().is_reserved_word("enum"));
    }

    #[test]
    fn contextual_keywords() {
        let sloppy = Context::default();
        assert!(!sloppy.is_reserved(&Word::Keyword(Keyword::Let)));
        assert!(strict().is_reserved(&Word::Keyword(Keyword::Let)));

        let gen = Context {
            in_generator: true,
            ..Default::default()
        };
        assert!(gen.is_reserved(&Word::Keyword(Keyword::Yield)));
        assert!(!sloppy.is_reserved(&Word::Keyword(Keyword::Yield)));

        let module = Context {
            module: true,
            strict: true,
            ..Default::default()
        };
        assert!(module.is_reserved(&Word::Keyword(Keyword::Await)));
        assert!(!strict().is_reserved(&Word::Keyword(Keyword::Await)));
    }

    #[test]
    fn word_and_str_agree() {
        let ctx = strict();
        for w in &["if", "null", "let", "yield", "foo", "static", "of"] {
            assert_eq!(ctx.is_reserved(&Word::from(*w)), ctx.is_reserved_word(w), "{}", w);
        }
    }
}
