//! 12.1 Identifiers
use super::*;

impl<I: Tokens> Parser<I> {
    /// IdentifierReference
    pub(super) fn parse_ident_ref(&mut self) -> PResult<Ident> {
        self.parse_ident()
    }

    /// LabelIdentifier
    pub(super) fn parse_label_ident(&mut self) -> PResult<Ident> {
        self.parse_ident()
    }

    /// IdentifierName. This allows idents like `catch`.
    pub(super) fn parse_ident_name(&mut self) -> PResult<Ident> {
        let start = self.input.cur_pos();

        let w = match *cur!(self, true) {
            Token::Word(..) => match self.input.bump() {
                Token::Word(w) => w,
                _ => unreachable!(),
            },
            _ => syntax_error!(self, SyntaxError::ExpectedIdent),
        };

        Ok(Ident::new(w.into(), span!(self, start)))
    }

    /// Identifier
    ///
    /// A reserved word is reported and parsing goes on as if it was an
    /// identifier.
    pub(super) fn parse_ident(&mut self) -> PResult<Ident> {
        trace_cur!(self, parse_ident);

        let start = self.input.cur_pos();

        let w = match *cur!(self, true) {
            Token::Word(..) => match self.input.bump() {
                Token::Word(w) => w,
                _ => unreachable!(),
            },
            _ => syntax_error!(self, SyntaxError::ExpectedIdent),
        };
        let span = span!(self, start);

        if self.ctx().is_reserved(&w) {
            self.emit_err(
                span,
                SyntaxError::ReservedWord {
                    word: w.clone().into(),
                },
            );
        }

        Ok(Ident::new(w.into(), span))
    }

    /// BindingIdentifier
    pub(super) fn parse_binding_ident(&mut self) -> PResult<Ident> {
        trace_cur!(self, parse_binding_ident);

        let ident = self.parse_ident()?;
        self.check_binding_ident(&ident);
        Ok(ident)
    }

    /// `eval` and `arguments` cannot be bound in strict mode code.
    pub(super) fn check_binding_ident(&mut self, ident: &Ident) {
        if self.ctx().strict && (&*ident.sym == "eval" || &*ident.sym == "arguments") {
            self.emit_err(
                ident.span,
                SyntaxError::EvalOrArgumentsInStrict {
                    name: ident.sym.clone(),
                },
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EsConfig;
    use global_common::input::StringInput;

    fn parser(src: &str, commonjs: bool) -> Parser<Lexer<StringInput<'_>>> {
        let syntax = Syntax::Es(EsConfig {
            commonjs,
            ..Default::default()
        });
        let mut p = Parser::new(syntax, StringInput::new(src, BytePos(0)));
        if commonjs {
            let ctx = Context {
                module: true,
                strict: true,
                ..p.ctx()
            };
            p.set_ctx(ctx);
        }
        p
    }

    #[test]
    fn ident_name_allows_keywords() {
        let mut p = parser("catch", false);
        let ident = p.parse_ident_name().unwrap();
        assert_eq!(&*ident.sym, "catch");
        assert!(p.take_errors().is_empty());
    }

    #[test]
    fn reserved_word_is_recoverable() {
        let mut p = parser("implements", true);
        let ident = p.parse_ident().unwrap();
        assert_eq!(&*ident.sym, "implements");
        assert_eq!(
            p.take_errors()
                .into_iter()
                .map(|e| e.into_kind())
                .collect::<Vec<_>>(),
            vec![SyntaxError::ReservedWord {
                word: "implements".into()
            }]
        );
    }

    #[test]
    fn non_word_is_not_an_ident() {
        let mut p = parser("123", false);
        let err = p.parse_ident().unwrap_err();
        assert_eq!(err.into_kind(), SyntaxError::ExpectedIdent);
    }

    #[test]
    fn eval_binding_in_strict_code() {
        let mut p = parser("eval", true);
        p.parse_binding_ident().unwrap();
        assert_eq!(p.take_errors().len(), 1);

        let mut p = parser("eval", false);
        p.parse_binding_ident().unwrap();
        assert!(p.take_errors().is_empty());
    }
}
