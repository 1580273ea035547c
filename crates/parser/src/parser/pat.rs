//! 13.3.3 Destructuring Binding Patterns
use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum PatType {
    BindingPat,
    BindingElement,
    /// AssignmentPattern
    AssignPat,
    AssignElement,
}

impl PatType {
    pub fn element(self) -> Self {
        match self {
            PatType::BindingPat | PatType::BindingElement => PatType::BindingElement,
            PatType::AssignPat | PatType::AssignElement => PatType::AssignElement,
        }
    }

    fn is_binding(self) -> bool {
        matches!(self, PatType::BindingPat | PatType::BindingElement)
    }
}

impl<I: Tokens> Parser<I> {
    pub(super) fn parse_binding_pat_or_ident(&mut self) -> PResult<Pat> {
        trace_cur!(self, parse_binding_pat_or_ident);

        match *cur!(self, true) {
            Token::Word(..) => self.parse_binding_ident().map(Pat::from),
            tok!('[') => self.parse_array_binding_pat(),
            tok!('{') => self.parse_object(),
            _ => syntax_error!(self, SyntaxError::ExpectedIdent),
        }
    }

    /// babel: `parseBindingElement`
    pub(super) fn parse_binding_element(&mut self) -> PResult<Pat> {
        trace_cur!(self, parse_binding_element);

        let start = self.input.cur_pos();
        let left = self.parse_binding_pat_or_ident()?;

        if eat!(self, '=') {
            let right = self.include_in_expr(true).parse_assignment_expr()?;
            return Ok(Pat::Assign(AssignPat {
                span: span!(self, start),
                left: Box::new(left),
                right,
            }));
        }

        Ok(left)
    }

    fn parse_array_binding_pat(&mut self) -> PResult<Pat> {
        let start = self.input.cur_pos();

        self.assert_and_bump(&tok!('['));

        let mut elems = vec![];

        while !eof!(self) && !is!(self, ']') {
            if eat!(self, ',') {
                elems.push(None);
                continue;
            }

            let start = self.input.cur_pos();

            if eat!(self, "...") {
                let dot3_token = span!(self, start);
                let arg = self.parse_binding_pat_or_ident()?;
                let pat = Pat::Rest(RestPat {
                    span: span!(self, start),
                    dot3_token,
                    arg: Box::new(arg),
                });
                if !is!(self, ']') {
                    self.emit_err(pat.span(), SyntaxError::RestNotLast);
                    expect!(self, ',');
                }
                elems.push(Some(pat));
                continue;
            }

            elems.push(Some(self.parse_binding_element()?));

            if !is!(self, ']') {
                expect!(self, ',');
            }
        }

        expect!(self, ']');

        Ok(Pat::Array(ArrayPat {
            span: span!(self, start),
            elems,
        }))
    }

    /// `FormalParameters`, without the parens.
    pub(super) fn parse_formal_params(&mut self) -> PResult<Vec<Pat>> {
        let mut params = vec![];

        while !eof!(self) && !is!(self, ')') {
            let start = self.input.cur_pos();

            if eat!(self, "...") {
                let dot3_token = span!(self, start);
                let arg = self.parse_binding_pat_or_ident()?;
                let pat = Pat::Rest(RestPat {
                    span: span!(self, start),
                    dot3_token,
                    arg: Box::new(arg),
                });
                if !is!(self, ')') {
                    self.emit_err(pat.span(), SyntaxError::RestNotLast);
                    expect!(self, ',');
                }
                params.push(pat);
                continue;
            }

            params.push(self.parse_binding_element()?);

            if !is!(self, ')') {
                expect!(self, ',');
            }
        }

        Ok(params)
    }

    /// `PropertySetParameterList`
    pub(super) fn parse_setter_param(&mut self) -> PResult<Pat> {
        self.parse_binding_element()
    }

    /// Converts expressions of an arrow function head to its parameters.
    pub(super) fn parse_exprs_as_params(&mut self, exprs: Vec<ExprOrSpread>) -> PResult<Vec<Pat>> {
        let len = exprs.len();
        let mut params = Vec::with_capacity(len);

        for (i, ExprOrSpread { spread, expr }) in exprs.into_iter().enumerate() {
            match spread {
                Some(dot3_token) => {
                    let arg = self.reparse_expr_as_pat(PatType::BindingPat, expr)?;
                    let span = dot3_token.to(arg.span());
                    if i + 1 != len {
                        self.emit_err(span, SyntaxError::RestNotLast);
                    }
                    params.push(Pat::Rest(RestPat {
                        span,
                        dot3_token,
                        arg: Box::new(arg),
                    }));
                }
                None => params.push(self.reparse_expr_as_pat(PatType::BindingElement, expr)?),
            }
        }

        Ok(params)
    }

    /// Converts an expression parsed with the cover grammar to a pattern.
    ///
    /// Problems are reported as recoverable errors; the returned pattern then
    /// holds [Pat::Invalid] where the expression could not be converted.
    pub(super) fn reparse_expr_as_pat(&mut self, pat_ty: PatType, expr: Box<Expr>) -> PResult<Pat> {
        let span = expr.span();
        let strict = self.ctx().strict;

        if !pat_ty.is_binding() {
            // Anything but a literal pattern is a simple assignment target.
            let is_pattern = match *expr {
                Expr::Object(..) | Expr::Array(..) => true,
                Expr::Assign(..) => pat_ty == PatType::AssignElement,
                _ => false,
            };
            if !is_pattern {
                if !expr.is_valid_simple_assignment_target(strict) {
                    self.emit_err(span, SyntaxError::InvalidAssignTarget);
                    return Ok(Pat::Invalid(Invalid { span }));
                }
                return Ok(match *expr {
                    Expr::Ident(i) => Pat::Ident(i),
                    expr => Pat::Expr(Box::new(expr)),
                });
            }
        }

        match *expr {
            Expr::Ident(ident) => {
                self.check_binding_ident(&ident);
                Ok(Pat::Ident(ident))
            }

            Expr::Assign(AssignExpr {
                span,
                op: AssignOp::Assign,
                left,
                right,
            }) if pat_ty != PatType::BindingPat => {
                let left = match left {
                    PatOrExpr::Expr(left) => self.reparse_expr_as_pat(pat_ty, left)?,
                    PatOrExpr::Pat(left) => match *left {
                        // Already converted as an assignment target.
                        Pat::Expr(left) => self.reparse_expr_as_pat(pat_ty, left)?,
                        Pat::Ident(ident) => {
                            self.reparse_expr_as_pat(pat_ty, Box::new(Expr::Ident(ident)))?
                        }
                        pat => {
                            if pat_ty.is_binding() {
                                self.check_binding_pat(&pat);
                            }
                            pat
                        }
                    },
                };
                Ok(Pat::Assign(AssignPat {
                    span,
                    left: Box::new(left),
                    right,
                }))
            }

            Expr::Object(ObjectLit { span, props }) => {
                let mut pat_props = Vec::with_capacity(props.len());
                for prop in props {
                    match prop {
                        Prop::Shorthand(ident) => {
                            if pat_ty.is_binding() {
                                self.check_binding_ident(&ident);
                            } else if !Expr::Ident(ident.clone())
                                .is_valid_simple_assignment_target(strict)
                            {
                                self.emit_err(ident.span, SyntaxError::InvalidAssignTarget);
                            }
                            pat_props.push(ObjectPatProp::Assign(AssignPatProp {
                                span: ident.span,
                                key: ident,
                                value: None,
                            }));
                        }
                        Prop::KeyValue(KeyValueProp { key, value }) => {
                            let value = self.reparse_expr_as_pat(pat_ty.element(), value)?;
                            pat_props.push(ObjectPatProp::KeyValue(KeyValuePatProp {
                                key,
                                value: Box::new(value),
                            }));
                        }
                        Prop::Assign(AssignProp { key, value }) => {
                            let span = key.span.to(value.span());
                            // Not an error anymore.
                            self.state.shorthand_inits.retain(|s| *s != span);
                            if pat_ty.is_binding() {
                                self.check_binding_ident(&key);
                            }
                            pat_props.push(ObjectPatProp::Assign(AssignPatProp {
                                span,
                                key,
                                value: Some(value),
                            }));
                        }
                        prop => {
                            self.emit_err(prop.span(), SyntaxError::InvalidPat);
                        }
                    }
                }
                Ok(Pat::Object(ObjectPat {
                    span,
                    props: pat_props,
                }))
            }

            Expr::Array(ArrayLit { span, elems }) => {
                let len = elems.len();
                let mut pat_elems = Vec::with_capacity(len);
                for (i, elem) in elems.into_iter().enumerate() {
                    let elem = match elem {
                        None => None,
                        Some(ExprOrSpread {
                            spread: Some(dot3_token),
                            expr,
                        }) => {
                            let arg_ty = if pat_ty.is_binding() {
                                PatType::BindingPat
                            } else {
                                PatType::AssignPat
                            };
                            let arg = self.reparse_expr_as_pat(arg_ty, expr)?;
                            let span = dot3_token.to(arg.span());
                            if i + 1 != len {
                                self.emit_err(span, SyntaxError::RestNotLast);
                            }
                            Some(Pat::Rest(RestPat {
                                span,
                                dot3_token,
                                arg: Box::new(arg),
                            }))
                        }
                        Some(ExprOrSpread { spread: None, expr }) => {
                            Some(self.reparse_expr_as_pat(pat_ty.element(), expr)?)
                        }
                    };
                    pat_elems.push(elem);
                }
                Ok(Pat::Array(ArrayPat {
                    span,
                    elems: pat_elems,
                }))
            }

            Expr::Invalid(i) => Ok(Pat::Invalid(i)),

            _ => {
                self.emit_err(span, SyntaxError::InvalidPat);
                Ok(Pat::Invalid(Invalid { span }))
            }
        }
    }

    /// Reports bindings of a pattern which cannot be bound.
    fn check_binding_pat(&mut self, pat: &Pat) {
        match *pat {
            Pat::Ident(ref ident) => self.check_binding_ident(ident),
            Pat::Expr(ref expr) => self.emit_err(expr.span(), SyntaxError::InvalidPat),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EsConfig;
    use global_common::input::StringInput;

    fn parser(src: &str) -> Parser<Lexer<StringInput<'_>>> {
        Parser::new(
            Syntax::Es(EsConfig::default()),
            StringInput::new(src, BytePos(0)),
        )
    }

    fn binding(src: &str) -> (Pat, Vec<SyntaxError>) {
        let mut p = parser(src);
        let pat = p.parse_binding_element().unwrap();
        let errors = p.take_errors().into_iter().map(|e| e.into_kind()).collect();
        (pat, errors)
    }

    fn assign_target(src: &str) -> (Pat, Vec<SyntaxError>) {
        let mut p = parser(src);
        let expr = p.parse_assignment_expr_base().unwrap();
        let pat = p.reparse_expr_as_pat(PatType::AssignPat, expr).unwrap();
        let errors = p.take_errors().into_iter().map(|e| e.into_kind()).collect();
        (pat, errors)
    }

    #[test]
    fn binding_with_default() {
        let (pat, errors) = binding("a = 1");
        assert!(matches!(pat, Pat::Assign(..)));
        assert!(errors.is_empty());
    }

    #[test]
    fn nested_binding_patterns() {
        let (pat, errors) = binding("{a, b: [c, , ...d], e = 2}");
        assert!(errors.is_empty(), "{:?}", errors);
        match pat {
            Pat::Object(ObjectPat { props, .. }) => assert_eq!(props.len(), 3),
            _ => panic!("{:?}", pat),
        }
    }

    #[test]
    fn rest_must_be_last() {
        let mut p = parser("a, ...b, c");
        let _ = p.parse_formal_params();
        assert_eq!(
            p.take_errors()
                .into_iter()
                .map(|e| e.into_kind())
                .collect::<Vec<_>>(),
            vec![SyntaxError::RestNotLast]
        );
    }

    #[test]
    fn object_literal_to_pattern() {
        let (pat, errors) = assign_target("{a, b: c.d, e = 1}");
        assert!(errors.is_empty(), "{:?}", errors);
        match pat {
            Pat::Object(ObjectPat { ref props, .. }) => {
                assert!(matches!(props[2], ObjectPatProp::Assign(AssignPatProp { value: Some(..), .. })));
            }
            _ => panic!("{:?}", pat),
        }
    }

    #[test]
    fn shorthand_init_is_forgiven_in_patterns() {
        let mut p = parser("{a = 1}");
        let expr = p.parse_assignment_expr_base().unwrap();
        assert_eq!(p.state.shorthand_inits.len(), 1);
        p.reparse_expr_as_pat(PatType::AssignPat, expr).unwrap();
        assert!(p.state.shorthand_inits.is_empty());
    }

    #[test]
    fn invalid_targets() {
        let (pat, errors) = assign_target("a + b");
        assert!(matches!(pat, Pat::Invalid(..)));
        assert_eq!(errors, vec![SyntaxError::InvalidAssignTarget]);

        let (_, errors) = assign_target("[a, f()]");
        assert_eq!(errors, vec![SyntaxError::InvalidAssignTarget]);

        let (_, errors) = assign_target("({a})");
        assert_eq!(errors, vec![SyntaxError::InvalidAssignTarget]);
    }
}
