//! Parser for unary operations and binary operations.
use super::*;

impl<I: Tokens> Parser<I> {
    /// Name from spec: 'LogicalORExpression'
    pub(super) fn parse_bin_expr(&mut self) -> PResult<Box<Expr>> {
        trace_cur!(self, parse_bin_expr);

        let left = self.parse_unary_expr()?;

        return_if_arrow!(self, left);
        self.parse_bin_op_recursively(left, 0)
    }

    /// Parse binary operators with the operator precedence parsing
    /// algorithm. `left` is the left-hand side of the operator.
    /// `min_prec` provides context that allows the function to stop and
    /// defer further parser to one of its callers when it encounters an
    /// operator that has a lower precedence than the set it is parsing.
    fn parse_bin_op_recursively(
        &mut self,
        mut left: Box<Expr>,
        mut min_prec: u8,
    ) -> PResult<Box<Expr>> {
        loop {
            let (next_left, next_prec) = self.parse_bin_op_recursively_inner(left, min_prec)?;

            min_prec = match next_prec {
                Some(v) => v,
                None => return Ok(next_left),
            };

            left = next_left;
        }
    }

    /// Returns `(left, Some(next_prec))` or `(expr, None)`.
    fn parse_bin_op_recursively_inner(
        &mut self,
        left: Box<Expr>,
        min_prec: u8,
    ) -> PResult<(Box<Expr>, Option<u8>)> {
        let ctx = self.ctx();
        // Return left on eof
        let word = match self.input.cur() {
            Some(cur) => cur,
            _ => return Ok((left, None)),
        };
        let op = match *word {
            tok!("in") if ctx.include_in_expr => op!("in"),
            tok!("instanceof") => op!("instanceof"),
            Token::BinOp(op) => op.into(),
            _ => {
                return Ok((left, None));
            }
        };

        if op.precedence() <= min_prec {
            return Ok((left, None));
        }
        self.input.bump();

        if op == op!("**") {
            if let Expr::Unary(..) = *left {
                // `-a ** b` is ambiguous; the operand stays as parsed.
                let op_span = self.input.prev_span();
                self.emit_err(left.span().with_hi(op_span.hi), SyntaxError::UnaryInExp);
            }
        }

        let right = {
            let left_of_right = self.parse_unary_expr()?;
            self.parse_bin_op_recursively(
                left_of_right,
                if op == op!("**") {
                    // exponential operator is right associative
                    op.precedence() - 1
                } else {
                    op.precedence()
                },
            )?
        };

        let span = Span::new(left.span().lo, right.span().hi);
        let node = Box::new(Expr::Bin(BinExpr {
            span,
            op,
            left,
            right,
        }));

        Ok((node, Some(min_prec)))
    }

    /// Parse unary expression and update expression.
    ///
    /// spec: 'UnaryExpression'
    pub(super) fn parse_unary_expr(&mut self) -> PResult<Box<Expr>> {
        trace_cur!(self, parse_unary_expr);

        let start = self.input.cur_pos();

        // Parse update expression
        if is!(self, "++") || is!(self, "--") {
            let op = if self.input.bump() == tok!("++") {
                op!("++")
            } else {
                op!("--")
            };

            let arg = self.parse_unary_expr()?;
            self.check_update_operand(&arg);

            return Ok(Box::new(Expr::Update(UpdateExpr {
                span: span!(self, start),
                prefix: true,
                op,
                arg,
            })));
        }

        // Parse unary expression
        if is_one_of!(self, "delete", "void", "typeof", '+', '-', '~', '!') {
            let op = match self.input.bump() {
                tok!("delete") => op!("delete"),
                tok!("void") => op!("void"),
                tok!("typeof") => op!("typeof"),
                tok!('+') => op!(unary, "+"),
                tok!('-') => op!(unary, "-"),
                tok!('~') => op!("~"),
                tok!('!') => op!("!"),
                _ => unreachable!(),
            };
            let arg = self.parse_unary_expr()?;

            if op == op!("delete") && self.ctx().strict {
                if let Expr::Ident(ref i) = *arg.unwrap_parens() {
                    self.emit_err(i.span, SyntaxError::DeleteOfIdentInStrict);
                }
            }

            return Ok(Box::new(Expr::Unary(UnaryExpr {
                span: span!(self, start),
                op,
                arg,
            })));
        }

        // UpdateExpression
        let expr = self.parse_lhs_expr()?;
        return_if_arrow!(self, expr);

        // Line terminator isn't allowed here.
        if self.input.had_line_break_before_cur() {
            return Ok(expr);
        }

        if is_one_of!(self, "++", "--") {
            self.check_update_operand(&expr);

            let op = if self.input.bump() == tok!("++") {
                op!("++")
            } else {
                op!("--")
            };

            return Ok(Box::new(Expr::Update(UpdateExpr {
                span: span!(self, expr.span().lo),
                prefix: false,
                op,
                arg: expr,
            })));
        }
        Ok(expr)
    }

    fn check_update_operand(&mut self, arg: &Expr) {
        if !arg.is_valid_simple_assignment_target(self.ctx().strict) {
            self.emit_err(arg.span(), SyntaxError::InvalidUpdateOperand);
        }
    }
}
