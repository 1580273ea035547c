use super::{pat::PatType, *};

mod ops;

// A recursive descent parser operates by defining functions for all
// syntactic elements, and recursively calling those, each function
// advancing the input stream and returning an AST node. Precedence
// of constructs (for example, the fact that `!x[1]` means `!(x[1])`
// instead of `(!x)[1]` is handled by the fact that the parser
// function that parses unary prefix operators is called first, and
// in turn calls the function that parses `[]` subscripts, so it
// receives the node for `x[1]` already parsed, and wraps *that* in
// the unary operator node.
//
// Binary operators are parsed with an operator precedence parser,
// which is much more compact than one nested function per precedence
// level.

impl<I: Tokens> Parser<I> {
    /// 'Expression'
    pub(super) fn parse_expr(&mut self) -> PResult<Box<Expr>> {
        trace_cur!(self, parse_expr);

        let start = self.input.cur_pos();
        let expr = self.parse_assignment_expr()?;

        self.parse_expr_rest(start, expr)
    }

    /// Parses the rest of a sequence expression whose first element is
    /// `first`.
    pub(super) fn parse_expr_rest(
        &mut self,
        start: BytePos,
        first: Box<Expr>,
    ) -> PResult<Box<Expr>> {
        if !is!(self, ',') {
            return Ok(first);
        }

        let mut exprs = vec![first];
        while eat!(self, ',') {
            exprs.push(self.parse_assignment_expr()?);
        }

        Ok(Box::new(Expr::Seq(SeqExpr {
            span: span!(self, start),
            exprs,
        })))
    }

    /// 'AssignmentExpression'
    ///
    /// Object literals inside which still hold `key = value` properties are
    /// reported here, as they can no longer become patterns.
    pub(super) fn parse_assignment_expr(&mut self) -> PResult<Box<Expr>> {
        let since = self.state.shorthand_inits.len();
        let expr = self.parse_assignment_expr_base()?;
        self.report_shorthand_inits(since);
        Ok(expr)
    }

    /// 'AssignmentExpression' which may still be converted to a pattern by
    /// the caller.
    pub(super) fn parse_assignment_expr_base(&mut self) -> PResult<Box<Expr>> {
        trace_cur!(self, parse_assignment_expr_base);

        if self.ctx().in_generator && is!(self, "yield") {
            return self.parse_yield_expr();
        }

        self.state.potential_arrow_start = match *cur!(self, true) {
            Token::Word(..) | tok!('(') => Some(self.input.cur_pos()),
            _ => None,
        };

        let start = self.input.cur_pos();

        // Try to parse conditional expression.
        let cond = self.parse_cond_expr()?;

        return_if_arrow!(self, cond);

        self.finish_assignment_expr(start, cond)
    }

    fn finish_assignment_expr(&mut self, start: BytePos, cond: Box<Expr>) -> PResult<Box<Expr>> {
        trace_cur!(self, finish_assignment_expr);

        let op = match cur!(self, false) {
            Some(&Token::AssignOp(op)) => op,
            _ => return Ok(cond),
        };

        let left = if op == op!('=') {
            let pat = self.reparse_expr_as_pat(PatType::AssignPat, cond)?;
            PatOrExpr::Pat(Box::new(pat))
        } else {
            // Compound assignment needs a simple target.
            if !cond.is_valid_simple_assignment_target(self.ctx().strict) {
                self.emit_err(cond.span(), SyntaxError::InvalidAssignTarget);
            }
            PatOrExpr::Expr(cond)
        };

        self.input.bump();
        let right = self.parse_assignment_expr()?;
        Ok(Box::new(Expr::Assign(AssignExpr {
            span: span!(self, start),
            op,
            left,
            right,
        })))
    }

    /// Spec: 'ConditionalExpression'
    fn parse_cond_expr(&mut self) -> PResult<Box<Expr>> {
        trace_cur!(self, parse_cond_expr);

        let start = self.input.cur_pos();

        let test = self.parse_bin_expr()?;
        return_if_arrow!(self, test);

        if eat!(self, '?') {
            let cons = self.include_in_expr(true).parse_assignment_expr()?;
            expect!(self, ':');
            let alt = self.parse_assignment_expr()?;
            let span = span!(self, start);
            Ok(Box::new(Expr::Cond(CondExpr {
                span,
                test,
                cons,
                alt,
            })))
        } else {
            Ok(test)
        }
    }

    /// Parse a primary expression or arrow function
    fn parse_primary_expr(&mut self) -> PResult<Box<Expr>> {
        trace_cur!(self, parse_primary_expr);

        let start = self.input.cur_pos();

        let can_be_arrow = self
            .state
            .potential_arrow_start
            .map(|s| s == start)
            .unwrap_or(false);

        match *cur!(self, true) {
            tok!("this") => {
                self.input.bump();
                return Ok(Box::new(Expr::This(ThisExpr {
                    span: span!(self, start),
                })));
            }

            tok!("function") => return self.parse_fn_expr(),
            tok!("class") => return self.parse_class_expr(),

            tok!('[') => return self.parse_array_lit(),
            tok!('{') => return self.parse_object::<Box<Expr>>(),
            tok!('(') => return self.parse_paren_expr_or_arrow_fn(can_be_arrow),
            tok!('`') => return Ok(Box::new(Expr::Tpl(self.parse_tpl(false)?))),

            tok!("null") | tok!("true") | tok!("false") | Token::Num { .. } | Token::Str { .. } => {
                return Ok(Box::new(Expr::Lit(self.parse_lit()?)));
            }

            Token::Regex(..) => match self.input.bump() {
                Token::Regex(exp, flags) => {
                    return Ok(Box::new(Expr::Lit(Lit::Regex(Regex {
                        span: span!(self, start),
                        exp,
                        flags,
                    }))));
                }
                _ => unreachable!(),
            },

            Token::Word(Word::Ident(..)) | tok!("let") | tok!("yield") | tok!("await") => {}

            _ => unexpected!(self),
        }

        let id = self.parse_ident_ref()?;

        if can_be_arrow && is!(self, "=>") {
            // `a => b`
            let params = vec![self.reparse_expr_as_pat(
                PatType::BindingElement,
                Box::new(Expr::Ident(id)),
            )?];
            return self.parse_arrow_body(start, params);
        }

        Ok(Box::new(Expr::Ident(id)))
    }

    pub(super) fn parse_lit(&mut self) -> PResult<Lit> {
        let start = self.input.cur_pos();

        let v = match *cur!(self, true) {
            Token::Word(Word::Null) => {
                self.input.bump();
                Lit::Null(Null {
                    span: span!(self, start),
                })
            }
            Token::Word(Word::True) | Token::Word(Word::False) => {
                let value = is!(self, "true");
                self.input.bump();
                Lit::Bool(Bool {
                    span: span!(self, start),
                    value,
                })
            }
            Token::Str { .. } => match self.input.bump() {
                Token::Str {
                    value, has_escape, ..
                } => Lit::Str(Str {
                    span: span!(self, start),
                    value,
                    has_escape,
                }),
                _ => unreachable!(),
            },
            Token::Num { .. } => match self.input.bump() {
                Token::Num { value, raw } => {
                    let span = span!(self, start);
                    if self.ctx().strict && is_legacy_octal(&raw) {
                        self.emit_err(span, SyntaxError::LegacyOctal);
                    }
                    Lit::Num(Number { span, value })
                }
                _ => unreachable!(),
            },
            _ => unexpected!(self),
        };

        Ok(v)
    }

    fn parse_array_lit(&mut self) -> PResult<Box<Expr>> {
        trace_cur!(self, parse_array_lit);

        let start = self.input.cur_pos();

        self.assert_and_bump(&tok!('['));
        let mut elems = vec![];

        while !eof!(self) && !is!(self, ']') {
            if is!(self, ',') {
                expect!(self, ',');
                elems.push(None);
                continue;
            }

            let elem_start = self.input.cur_pos();
            let spread = if eat!(self, "...") {
                Some(span!(self, elem_start))
            } else {
                None
            };
            let expr = self.include_in_expr(true).parse_assignment_expr_base()?;
            elems.push(Some(ExprOrSpread { spread, expr }));

            if !is!(self, ']') {
                expect!(self, ',');
            }
        }

        expect!(self, ']');

        let span = span!(self, start);
        Ok(Box::new(Expr::Array(ArrayLit { span, elems })))
    }

    /// `is_new_expr`: true iff we are parsing production 'NewExpression'.
    fn parse_member_expr_or_new_expr(&mut self, is_new_expr: bool) -> PResult<Box<Expr>> {
        trace_cur!(self, parse_member_expr_or_new_expr);

        let start = self.input.cur_pos();
        if eat!(self, "new") {
            let span_of_new = span!(self, start);
            if eat!(self, '.') {
                if is!(self, "target") {
                    let prop_start = self.input.cur_pos();
                    self.input.bump();
                    let expr = Box::new(Expr::MetaProp(MetaPropExpr {
                        meta: Ident::new("new".into(), span_of_new),
                        prop: Ident::new("target".into(), span!(self, prop_start)),
                    }));

                    return self.parse_subscripts(ExprOrSuper::Expr(expr), true);
                }

                syntax_error!(self, SyntaxError::NotTarget)
            }

            // 'NewExpression' allows new call without paren.
            let callee = self.parse_member_expr_or_new_expr(is_new_expr)?;
            return_if_arrow!(self, callee);

            if !is_new_expr || is!(self, '(') {
                // Parsed with 'MemberExpression' production.
                let args = self.parse_args().map(Some)?;

                let new_expr = ExprOrSuper::Expr(Box::new(Expr::New(NewExpr {
                    span: span!(self, start),
                    callee,
                    args,
                })));

                // We should parse subscripts for MemberExpression.
                // Because it's left recursive.
                return self.parse_subscripts(new_expr, true);
            }

            // Parsed with 'NewExpression' production.

            return Ok(Box::new(Expr::New(NewExpr {
                span: span!(self, start),
                callee,
                args: None,
            })));
        }

        if eat!(self, "super") {
            let base = ExprOrSuper::Super(Super {
                span: span!(self, start),
            });
            return self.parse_subscripts(base, true);
        }

        let obj = self.parse_primary_expr()?;
        return_if_arrow!(self, obj);

        self.parse_subscripts(ExprOrSuper::Expr(obj), true)
    }

    /// Parse `NewExpression`.
    /// This includes `MemberExpression`.
    fn parse_new_expr(&mut self) -> PResult<Box<Expr>> {
        trace_cur!(self, parse_new_expr);

        self.parse_member_expr_or_new_expr(true)
    }

    /// Parse `Arguments[Yield, Await]`
    pub(super) fn parse_args(&mut self) -> PResult<Vec<ExprOrSpread>> {
        trace_cur!(self, parse_args);

        let start = self.input.cur_pos();
        expect!(self, '(');

        let mut first = true;
        let mut expr_or_spreads = vec![];

        while !eof!(self) && !is!(self, ')') {
            if first {
                first = false;
            } else {
                expect!(self, ',');
                // Handle trailing comma.
                if is!(self, ')') {
                    break;
                }
            }

            let elem_start = self.input.cur_pos();
            let spread = if eat!(self, "...") {
                Some(span!(self, elem_start))
            } else {
                None
            };
            let expr = self.include_in_expr(true).parse_assignment_expr()?;
            expr_or_spreads.push(ExprOrSpread { spread, expr });
        }

        expect!(self, ')');
        tracing::trace!("parsed {} arguments at {:?}", expr_or_spreads.len(), start);
        Ok(expr_or_spreads)
    }

    /// Parse paren expression or arrow function expression.
    fn parse_paren_expr_or_arrow_fn(&mut self, can_be_arrow: bool) -> PResult<Box<Expr>> {
        trace_cur!(self, parse_paren_expr_or_arrow_fn);

        let start = self.input.cur_pos();

        expect!(self, '(');

        let mut items = vec![];
        let mut trailing_comma = None;
        while !eof!(self) && !is!(self, ')') {
            if !items.is_empty() {
                expect!(self, ',');
                if is!(self, ')') {
                    trailing_comma = Some(self.input.prev_span());
                    break;
                }
            }

            let elem_start = self.input.cur_pos();
            let spread = if eat!(self, "...") {
                Some(span!(self, elem_start))
            } else {
                None
            };
            let expr = self.include_in_expr(true).parse_assignment_expr_base()?;
            items.push(ExprOrSpread { spread, expr });
        }

        expect!(self, ')');
        let paren_span = span!(self, start);

        // ParenthesizedExpression cannot be followed by `=>`, so this is an
        // arrow function.
        if can_be_arrow && is!(self, "=>") {
            let params = self.parse_exprs_as_params(items)?;
            return self.parse_arrow_body(start, params);
        }

        // It was not head of arrow function.

        if items.is_empty() {
            // `()` is only valid as the head of an arrow function.
            unexpected!(self, "=>")
        }
        if let Some(span) = trailing_comma {
            syntax_error!(
                self,
                span,
                SyntaxError::Unexpected {
                    got: ",".to_string()
                }
            )
        }

        let mut exprs = Vec::with_capacity(items.len());
        for ExprOrSpread { spread, expr } in items {
            if let Some(span) = spread {
                syntax_error!(
                    self,
                    span,
                    SyntaxError::Unexpected {
                        got: "...".to_string()
                    }
                )
            }
            exprs.push(expr);
        }

        let expr = if exprs.len() == 1 {
            exprs.remove(0)
        } else {
            let span = Span::new(exprs[0].span().lo, exprs[exprs.len() - 1].span().hi);
            Box::new(Expr::Seq(SeqExpr { span, exprs }))
        };

        Ok(Box::new(Expr::Paren(ParenExpr {
            span: paren_span,
            expr,
        })))
    }

    /// Parses `=> body` of an arrow function starting at `start`.
    fn parse_arrow_body(&mut self, start: BytePos, params: Vec<Pat>) -> PResult<Box<Expr>> {
        if self.input.had_line_break_before_cur() {
            let span = self.input.cur_span();
            self.emit_err(span, SyntaxError::LineBreakBeforeArrow);
        }
        expect!(self, "=>");

        let ctx = self.fn_ctx(false);
        let body = if is!(self, '{') {
            let mut p = self.with_ctx(ctx);
            let mut p = p.with_state(State::default());
            BlockStmtOrExpr::BlockStmt(p.parse_fn_body()?)
        } else {
            BlockStmtOrExpr::Expr(self.with_ctx(ctx).parse_assignment_expr()?)
        };

        // The body may hold other arrow functions.
        self.state.potential_arrow_start = Some(start);

        Ok(Box::new(Expr::Arrow(ArrowExpr {
            span: span!(self, start),
            params,
            body,
        })))
    }

    fn parse_subscripts(&mut self, mut obj: ExprOrSuper, no_call: bool) -> PResult<Box<Expr>> {
        loop {
            obj = match self.parse_subscript(obj, no_call)? {
                (expr, false) => return Ok(expr),
                (expr, true) => ExprOrSuper::Expr(expr),
            }
        }
    }

    /// returned bool is true if this method should be called again.
    fn parse_subscript(&mut self, obj: ExprOrSuper, no_call: bool) -> PResult<(Box<Expr>, bool)> {
        let start = obj.span().lo;

        // member expression
        // $obj.name
        if eat!(self, '.') {
            let prop = Box::new(Expr::Ident(self.parse_ident_name()?));
            let span = span!(self, start);
            return Ok((
                Box::new(Expr::Member(MemberExpr {
                    span,
                    obj,
                    prop,
                    computed: false,
                })),
                true,
            ));
        }

        // $obj[name()]
        if eat!(self, '[') {
            let prop = self.include_in_expr(true).parse_expr()?;
            expect!(self, ']');
            let span = span!(self, start);
            return Ok((
                Box::new(Expr::Member(MemberExpr {
                    span,
                    obj,
                    prop,
                    computed: true,
                })),
                true,
            ));
        }

        if !no_call && is!(self, '(') {
            let args = self.parse_args()?;
            return Ok((
                Box::new(Expr::Call(CallExpr {
                    span: span!(self, start),
                    callee: obj,
                    args,
                })),
                true,
            ));
        }

        match obj {
            ExprOrSuper::Expr(expr) => {
                // MemberExpression[?Yield, ?Await] TemplateLiteral[?Yield, ?Await, +Tagged]
                if is!(self, '`') {
                    let tpl = self.parse_tagged_tpl(expr)?;
                    return Ok((Box::new(Expr::TaggedTpl(tpl)), true));
                }

                Ok((expr, false))
            }
            ExprOrSuper::Super(..) => {
                if no_call {
                    syntax_error!(
                        self,
                        self.input.cur_span(),
                        SyntaxError::ExpectedAfter {
                            token: ".",
                            after: "'super'"
                        }
                    )
                }
                syntax_error!(
                    self,
                    self.input.cur_span(),
                    SyntaxError::ExpectedAfter {
                        token: "(",
                        after: "'super'"
                    }
                )
            }
        }
    }

    /// Parse call, dot, and `[]`-subscript expressions.
    pub(super) fn parse_lhs_expr(&mut self) -> PResult<Box<Expr>> {
        trace_cur!(self, parse_lhs_expr);

        let start = self.input.cur_pos();

        // `super()` can't be handled from parse_new_expr()
        if is!(self, "super") && self.input.peeked_is(&tok!('(')) {
            self.input.bump();
            let obj = ExprOrSuper::Super(Super {
                span: span!(self, start),
            });
            let args = self.parse_args()?;
            let call = Box::new(Expr::Call(CallExpr {
                span: span!(self, start),
                callee: obj,
                args,
            }));

            return self.parse_subscripts(ExprOrSuper::Expr(call), false);
        }

        let callee = self.parse_new_expr()?;
        return_if_arrow!(self, callee);

        match *callee {
            // If this is parsed using 'NewExpression' rule, just return it.
            // Because it's not left-recursive.
            Expr::New(NewExpr { args: None, .. }) => {
                debug_assert_ne!(cur!(self, false), Some(&tok!('(')));
                return Ok(callee);
            }
            _ => {}
        }

        // 'CallExpr' rule contains 'MemberExpr (...)',
        // and 'MemberExpr' rule contains 'new MemberExpr (...)'

        if is!(self, '(') {
            // This is parsed using production MemberExpression,
            // which is left-recursive.
            let args = self.parse_args()?;
            let call_expr = Box::new(Expr::Call(CallExpr {
                span: span!(self, start),
                callee: ExprOrSuper::Expr(callee),
                args,
            }));

            return self.parse_subscripts(ExprOrSuper::Expr(call_expr), false);
        }

        // This is parsed using production 'NewExpression', which contains
        // 'MemberExpression'
        Ok(callee)
    }

    fn parse_tagged_tpl(&mut self, tag: Box<Expr>) -> PResult<TaggedTpl> {
        let tagged_tpl_start = tag.span().lo;
        trace_cur!(self, parse_tagged_tpl);

        let tpl = self.parse_tpl(true)?;

        let span = span!(self, tagged_tpl_start);
        Ok(TaggedTpl { span, tag, tpl })
    }

    /// Invalid escapes are allowed in tagged templates only; their cooked
    /// value is `None`.
    fn parse_tpl(&mut self, is_tagged: bool) -> PResult<Tpl> {
        trace_cur!(self, parse_tpl);
        let start = self.input.cur_pos();

        self.assert_and_bump(&tok!('`'));

        let (exprs, quasis) = self.parse_tpl_elements(is_tagged)?;

        expect!(self, '`');

        let span = span!(self, start);
        Ok(Tpl {
            span,
            exprs,
            quasis,
        })
    }

    fn parse_tpl_elements(&mut self, is_tagged: bool) -> PResult<(Vec<Box<Expr>>, Vec<TplElement>)> {
        trace_cur!(self, parse_tpl_elements);

        let mut exprs = vec![];

        let cur_elem = self.parse_tpl_element(is_tagged)?;
        let mut is_tail = cur_elem.tail;
        let mut quasis = vec![cur_elem];

        while !is_tail {
            expect!(self, "${");
            exprs.push(self.include_in_expr(true).parse_expr()?);
            expect!(self, '}');
            let elem = self.parse_tpl_element(is_tagged)?;
            is_tail = elem.tail;
            quasis.push(elem);
        }

        Ok((exprs, quasis))
    }

    fn parse_tpl_element(&mut self, is_tagged: bool) -> PResult<TplElement> {
        let start = self.input.cur_pos();

        let (raw, cooked) = match *cur!(self, true) {
            Token::Template { .. } => match self.input.bump() {
                Token::Template {
                    raw,
                    cooked,
                    has_escape,
                } => (raw, cooked.map(|cooked| (cooked, has_escape))),
                _ => unreachable!(),
            },
            _ => unexpected!(self, "template"),
        };
        let span = span!(self, start);

        if cooked.is_none() && !is_tagged {
            self.emit_err(span, SyntaxError::InvalidTplEscape);
        }

        Ok(TplElement {
            span,
            tail: is!(self, '`'),
            cooked: cooked.map(|(value, has_escape)| Str {
                span,
                value,
                has_escape,
            }),
            raw: Str {
                span,
                value: raw,
                has_escape: false,
            },
        })
    }

    fn parse_yield_expr(&mut self) -> PResult<Box<Expr>> {
        let start = self.input.cur_pos();

        self.assert_and_bump(&tok!("yield"));
        debug_assert!(self.ctx().in_generator);

        // No line break may follow `yield`.
        if self.input.had_line_break_before_cur()
            || (!is!(self, '*')
                && (is!(self, ';')
                    || !cur!(self, false)
                        .map(|t| t.starts_expr())
                        .unwrap_or(true)))
        {
            Ok(Box::new(Expr::Yield(YieldExpr {
                span: span!(self, start),
                arg: None,
                delegate: false,
            })))
        } else {
            let has_star = eat!(self, '*');
            let arg = self.parse_assignment_expr()?;

            Ok(Box::new(Expr::Yield(YieldExpr {
                span: span!(self, start),
                arg: Some(arg),
                delegate: has_star,
            })))
        }
    }
}

/// `010` and `08` are not allowed in strict mode code.
fn is_legacy_octal(raw: &str) -> bool {
    let mut chars = raw.chars();
    chars.next() == Some('0') && chars.next().map(|c| c.is_ascii_digit()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EsConfig;
    use global_common::input::StringInput;

    fn parse(src: &str) -> (Box<Expr>, Vec<SyntaxError>) {
        let mut p = Parser::new(
            Syntax::Es(EsConfig::default()),
            StringInput::new(src, BytePos(0)),
        );
        let expr = p.parse_expr().unwrap();
        let errors = p.take_errors().into_iter().map(|e| e.into_kind()).collect();
        (expr, errors)
    }

    fn expr(src: &str) -> Box<Expr> {
        let (expr, errors) = parse(src);
        assert!(errors.is_empty(), "{}: {:?}", src, errors);
        expr
    }

    #[test]
    fn legacy_octal() {
        assert!(is_legacy_octal("010"));
        assert!(is_legacy_octal("08"));
        assert!(!is_legacy_octal("0"));
        assert!(!is_legacy_octal("0.5"));
        assert!(!is_legacy_octal("0x10"));
        assert!(!is_legacy_octal("10"));
    }

    #[test]
    fn sequence() {
        match *expr("a, b, c") {
            Expr::Seq(SeqExpr { ref exprs, .. }) => assert_eq!(exprs.len(), 3),
            ref e => panic!("{:?}", e),
        }
    }

    #[test]
    fn conditional() {
        assert!(matches!(*expr("a ? b : c"), Expr::Cond(..)));
    }

    #[test]
    fn parens_are_kept() {
        match *expr("(a, b)") {
            Expr::Paren(ParenExpr { ref expr, .. }) => assert!(matches!(**expr, Expr::Seq(..))),
            ref e => panic!("{:?}", e),
        }
    }

    #[test]
    fn array_holes() {
        match *expr("[, a, , ...b,]") {
            Expr::Array(ArrayLit { ref elems, .. }) => {
                assert_eq!(elems.len(), 4);
                assert!(elems[0].is_none());
                assert!(elems[2].is_none());
                assert!(elems[3].as_ref().map(|e| e.spread.is_some()).unwrap_or(false));
            }
            ref e => panic!("{:?}", e),
        }
    }

    #[test]
    fn calls_and_members() {
        match *expr("a.b(c)[d]`e`") {
            Expr::TaggedTpl(TaggedTpl { ref tag, .. }) => {
                assert!(matches!(**tag, Expr::Member(MemberExpr { computed: true, .. })))
            }
            ref e => panic!("{:?}", e),
        }
        assert!(matches!(*expr("f(...a, b)"), Expr::Call(..)));
    }

    #[test]
    fn keyword_member_names() {
        assert!(matches!(*expr("a.if.class"), Expr::Member(..)));
    }

    #[test]
    fn empty_parens_need_arrow() {
        let mut p = Parser::new(
            Syntax::Es(EsConfig::default()),
            StringInput::new("() + 1", BytePos(0)),
        );
        let err = p.parse_expr().unwrap_err();
        assert_eq!(
            err.into_kind(),
            SyntaxError::Expected {
                token: "=>".into()
            }
        );
    }

    #[test]
    fn regex_literal() {
        match *expr("/ab+c/gi") {
            Expr::Lit(Lit::Regex(Regex {
                ref exp, ref flags, ..
            })) => {
                assert_eq!(&**exp, "ab+c");
                assert_eq!(&**flags, "gi");
            }
            ref e => panic!("{:?}", e),
        }
    }

    #[test]
    fn nested_arrows() {
        match *expr("a => b => a + b") {
            Expr::Arrow(ArrowExpr {
                body: BlockStmtOrExpr::Expr(ref body),
                ..
            }) => assert!(matches!(**body, Expr::Arrow(..))),
            ref e => panic!("{:?}", e),
        }
    }
}
