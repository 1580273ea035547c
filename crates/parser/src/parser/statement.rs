use super::{pat::PatType, *};

mod module_item;

enum ForHead {
    For {
        init: Option<VarDeclOrExpr>,
        test: Option<Box<Expr>>,
        update: Option<Box<Expr>>,
    },
    ForIn {
        left: VarDeclOrPat,
        right: Box<Expr>,
    },
    ForOf {
        left: VarDeclOrPat,
        right: Box<Expr>,
    },
}

pub(super) trait IsDirective {
    fn as_stmt_mut(&mut self) -> Option<&mut Stmt>;
}

impl IsDirective for Stmt {
    fn as_stmt_mut(&mut self) -> Option<&mut Stmt> {
        Some(self)
    }
}

pub(super) trait StmtLikeParser<Type: IsDirective> {
    fn handle_import_export(&mut self, top_level: bool) -> PResult<Type>;
}

impl<I: Tokens> StmtLikeParser<Stmt> for Parser<I> {
    /// `import` and `export` are only allowed at the top level of a module.
    /// The declaration is parsed anyway and replaced by an invalid
    /// expression.
    fn handle_import_export(&mut self, _: bool) -> PResult<Stmt> {
        let start = self.input.cur_pos();
        let keyword_span = self.input.cur_span();

        let kind = if self.ctx().module {
            SyntaxError::NonTopLevelImportExport
        } else {
            SyntaxError::ImportExportInScript
        };
        self.emit_err(keyword_span, kind);

        self.parse_module_decl()?;

        let span = span!(self, start);
        Ok(Stmt::Expr(ExprStmt {
            span,
            expr: Box::new(Expr::Invalid(Invalid { span })),
            directive: None,
        }))
    }
}

impl<I: Tokens> Parser<I> {
    /// Parses statements until `end` (or eof if `end` is `None`). `end` is
    /// not consumed.
    ///
    /// A statement which fails with anything other than an unexpected eof is
    /// recorded as an error and skipped.
    pub(super) fn parse_block_body<Type>(
        &mut self,
        allow_directives: bool,
        top_level: bool,
        end: Option<&Token>,
    ) -> PResult<Vec<Type>>
    where
        Self: StmtLikeParser<Type>,
        Type: IsDirective + From<Stmt>,
    {
        trace_cur!(self, parse_block_body);

        let old_ctx = self.ctx();
        let mut in_prologue = allow_directives;

        let mut stmts = vec![];
        while self.input.cur() != end {
            let start = self.input.cur_pos();
            let labels = self.state.labels.len();
            let shorthand_inits = self.state.shorthand_inits.len();

            let directive = if in_prologue {
                self.directive_candidate()
            } else {
                None
            };

            let mut stmt = match self.parse_stmt_like(true, top_level) {
                Ok(stmt) => stmt,
                Err(err) if !err.is_eof() => {
                    tracing::debug!("recovering from {:?}", err);
                    self.errors.push(err);
                    self.state.labels.truncate(labels);
                    self.state.shorthand_inits.truncate(shorthand_inits);
                    self.recover(start);
                    in_prologue = false;
                    continue;
                }
                Err(err) => return Err(err),
            };

            if in_prologue {
                in_prologue = self.mark_directive(&mut stmt, directive);
            }

            stmts.push(stmt);
        }

        self.set_ctx(old_ctx);

        Ok(stmts)
    }

    /// Span and raw text of the string literal which may start a directive.
    fn directive_candidate(&mut self) -> Option<(Span, JsWord, bool)> {
        let (raw, has_escape) = match self.input.cur() {
            Some(Token::Str {
                raw, has_escape, ..
            }) => (raw.clone(), *has_escape),
            _ => return None,
        };

        Some((self.input.cur_span(), raw, has_escape))
    }

    /// Returns false if `stmt` ends the directive prologue.
    fn mark_directive<Type: IsDirective>(
        &mut self,
        stmt: &mut Type,
        candidate: Option<(Span, JsWord, bool)>,
    ) -> bool {
        let (span, raw, has_escape) = match candidate {
            Some(c) => c,
            None => return false,
        };

        match stmt.as_stmt_mut() {
            Some(Stmt::Expr(ExprStmt {
                expr, directive, ..
            })) => match **expr {
                // The literal must be the whole expression.
                Expr::Lit(Lit::Str(Str { span: lit_span, .. })) if lit_span == span => {
                    *directive = Some(raw.clone());
                }
                _ => return false,
            },
            _ => return false,
        }

        // 'use\x20strict' is not a use strict directive.
        if &*raw == "use strict" && !has_escape {
            tracing::trace!("entering strict mode at {:?}", span);
            let ctx = Context {
                strict: true,
                ..self.ctx()
            };
            self.set_ctx(ctx);
        }

        true
    }

    pub(super) fn parse_stmt(&mut self, top_level: bool) -> PResult<Stmt> {
        self.parse_stmt_like(false, top_level)
    }

    fn parse_stmt_list_item(&mut self, top_level: bool) -> PResult<Stmt> {
        self.parse_stmt_like(true, top_level)
    }

    /// Parse a statement, declaration or module item.
    fn parse_stmt_like<Type>(&mut self, include_decl: bool, top_level: bool) -> PResult<Type>
    where
        Self: StmtLikeParser<Type>,
        Type: IsDirective + From<Stmt>,
    {
        if is_one_of!(self, "import", "export") {
            return self.handle_import_export(top_level);
        }

        self.parse_stmt_content(include_decl).map(From::from)
    }

    fn parse_stmt_content(&mut self, include_decl: bool) -> PResult<Stmt> {
        trace_cur!(self, parse_stmt_content);

        let start = self.input.cur_pos();

        // Most types of statements are recognized by the keyword they
        // start with. Many are trivial to parse, some require a bit of
        // complexity.

        match *cur!(self, true) {
            tok!("break") | tok!("continue") => {
                return self.parse_break_continue_stmt();
            }
            tok!("debugger") => {
                self.input.bump();
                expect!(self, ';');
                return Ok(Stmt::Debugger(DebuggerStmt {
                    span: span!(self, start),
                }));
            }
            tok!("do") => {
                return self.parse_do_stmt();
            }
            tok!("for") => {
                return self.parse_for_stmt();
            }
            tok!("function") => {
                // Allowed in sloppy code for web compatibility.
                if !include_decl && self.ctx().strict {
                    let span = self.input.cur_span();
                    self.emit_err(span, SyntaxError::LexicalDeclNotAllowed);
                }

                return self.parse_fn_decl().map(Stmt::Decl);
            }
            tok!("class") => {
                if !include_decl {
                    let span = self.input.cur_span();
                    self.emit_err(span, SyntaxError::LexicalDeclNotAllowed);
                }
                return self.parse_class_decl().map(Stmt::Decl);
            }
            tok!("if") => {
                return self.parse_if_stmt();
            }
            tok!("return") => {
                return self.parse_return_stmt();
            }
            tok!("switch") => {
                return self.parse_switch_stmt();
            }
            tok!("throw") => {
                return self.parse_throw_stmt();
            }
            tok!("try") => {
                return self.parse_try_stmt();
            }
            tok!("var") => {
                let v = self.parse_var_stmt(false)?;
                return Ok(Stmt::Decl(Decl::Var(v)));
            }
            tok!("const") => {
                if !include_decl {
                    let span = self.input.cur_span();
                    self.emit_err(span, SyntaxError::LexicalDeclNotAllowed);
                }
                let v = self.parse_var_stmt(false)?;
                return Ok(Stmt::Decl(Decl::Var(v)));
            }
            // 'let' can start an identifier reference.
            tok!("let") => {
                let is_keyword = match peek!(self) {
                    Some(t) => t.follows_keyword_let(),
                    None => false,
                };

                if is_keyword {
                    if !include_decl {
                        let span = self.input.cur_span();
                        self.emit_err(span, SyntaxError::LexicalDeclNotAllowed);
                    }
                    let v = self.parse_var_stmt(false)?;
                    return Ok(Stmt::Decl(Decl::Var(v)));
                }
            }
            tok!("while") => {
                return self.parse_while_stmt();
            }
            tok!("with") => {
                return self.parse_with_stmt();
            }
            tok!('{') => {
                return self.parse_block().map(Stmt::Block);
            }
            tok!(';') => {
                self.input.bump();
                return Ok(Stmt::Empty(EmptyStmt {
                    span: span!(self, start),
                }));
            }

            _ => {}
        }

        // If the statement does not start with a statement keyword or a
        // brace, it's an ExpressionStatement or LabeledStatement. We
        // simply start parsing an expression, and afterwards, if the
        // next token is a colon and the expression was a simple
        // Identifier node, we switch to interpreting it as a label.
        let expr = self.include_in_expr(true).parse_expr()?;

        let expr = match *expr {
            Expr::Ident(ident) => {
                if eat!(self, ':') {
                    return self.parse_labelled_stmt(ident);
                }
                Box::new(Expr::Ident(ident))
            }
            _ => expr,
        };

        expect!(self, ';');

        Ok(Stmt::Expr(ExprStmt {
            span: span!(self, start),
            expr,
            directive: None,
        }))
    }

    fn parse_break_continue_stmt(&mut self) -> PResult<Stmt> {
        let start = self.input.cur_pos();

        let is_break = is!(self, "break");
        self.input.bump();

        // A line break ends the statement.
        let label = if eat!(self, ';') {
            None
        } else {
            let label = self.parse_label_ident()?;
            expect!(self, ';');
            Some(label)
        };

        let span = span!(self, start);

        self.verify_break_continue(is_break, &label, span);

        if is_break {
            Ok(Stmt::Break(BreakStmt { span, label }))
        } else {
            Ok(Stmt::Continue(ContinueStmt { span, label }))
        }
    }

    fn verify_break_continue(&mut self, is_break: bool, label: &Option<Ident>, span: Span) {
        let ctx = self.ctx();

        if let Some(label) = label {
            if !self.state.labels.contains(&label.sym) {
                self.emit_err(
                    label.span,
                    SyntaxError::UndefinedLabel {
                        name: label.sym.clone(),
                    },
                );
                return;
            }
        }

        if is_break {
            if label.is_none() && !ctx.is_break_allowed {
                self.emit_err(span, SyntaxError::InvalidBreak);
            }
        } else if !ctx.is_continue_allowed {
            self.emit_err(span, SyntaxError::InvalidContinue);
        }
    }

    fn parse_header_expr(&mut self) -> PResult<Box<Expr>> {
        expect!(self, '(');
        let val = self.include_in_expr(true).parse_expr()?;
        expect!(self, ')');
        Ok(val)
    }

    fn loop_ctx(&self) -> Context {
        Context {
            is_break_allowed: true,
            is_continue_allowed: true,
            ..self.ctx()
        }
    }

    fn parse_do_stmt(&mut self) -> PResult<Stmt> {
        let start = self.input.cur_pos();

        self.assert_and_bump(&tok!("do"));

        let ctx = self.loop_ctx();
        let body = self.with_ctx(ctx).parse_stmt(false).map(Box::new)?;

        expect!(self, "while");
        let test = self.parse_header_expr()?;

        // `do {} while (a) b` is allowed without a line break.
        self.input.eat(&tok!(';'));

        Ok(Stmt::DoWhile(DoWhileStmt {
            span: span!(self, start),
            test,
            body,
        }))
    }

    // Disambiguating between a `for` and a `for`/`in` or `for`/`of`
    // loop is non-trivial. Basically, we have to parse the init `var`
    // statement or expression, disallowing the `in` operator, and then check
    // whether the next token is `in` or `of`. When there is no init
    // part (semicolon immediately after the opening parenthesis), it
    // is a regular `for` loop.
    fn parse_for_stmt(&mut self) -> PResult<Stmt> {
        let start = self.input.cur_pos();

        self.assert_and_bump(&tok!("for"));

        expect!(self, '(');
        let head = self.parse_for_head()?;
        expect!(self, ')');

        let ctx = self.loop_ctx();
        let body = self.with_ctx(ctx).parse_stmt(false).map(Box::new)?;

        let span = span!(self, start);
        Ok(match head {
            ForHead::For { init, test, update } => Stmt::For(ForStmt {
                span,
                init,
                test,
                update,
                body,
            }),
            ForHead::ForIn { left, right } => Stmt::ForIn(ForInStmt {
                span,
                left,
                right,
                body,
            }),
            ForHead::ForOf { left, right } => Stmt::ForOf(ForOfStmt {
                span,
                left,
                right,
                body,
            }),
        })
    }

    fn parse_for_head(&mut self) -> PResult<ForHead> {
        let is_let_decl = is!(self, "let")
            && match peek!(self) {
                Some(t) => t.follows_keyword_let(),
                None => false,
            };

        if is_one_of!(self, "const", "var") || is_let_decl {
            let decl = self.parse_var_stmt(true)?;

            if is_one_of!(self, "of", "in") {
                if decl.decls.len() > 1 {
                    for excess in &decl.decls[1..] {
                        self.emit_err(excess.span, SyntaxError::TooManyVarInForInOf);
                    }
                } else if decl.decls[0].init.is_some() {
                    self.emit_err(decl.decls[0].span, SyntaxError::ForInOfInit);
                }

                return self.parse_for_each_head(VarDeclOrPat::VarDecl(decl));
            }

            expect_exact!(self, ';');
            return self.parse_normal_for_head(Some(VarDeclOrExpr::VarDecl(decl)));
        }

        if eat_exact!(self, ';') {
            return self.parse_normal_for_head(None);
        }

        let start = self.input.cur_pos();
        let since = self.state.shorthand_inits.len();
        let init = self.include_in_expr(false).parse_assignment_expr_base()?;

        // for (a of b)
        if is_one_of!(self, "of", "in") {
            let pat = self.reparse_expr_as_pat(PatType::AssignPat, init)?;
            self.report_shorthand_inits(since);

            return self.parse_for_each_head(VarDeclOrPat::Pat(pat));
        }

        self.report_shorthand_inits(since);
        let init = self.include_in_expr(false).parse_expr_rest(start, init)?;

        expect_exact!(self, ';');

        self.parse_normal_for_head(Some(VarDeclOrExpr::Expr(init)))
    }

    fn parse_for_each_head(&mut self, left: VarDeclOrPat) -> PResult<ForHead> {
        let of = self.input.bump() == tok!("of");
        if of {
            let right = self.include_in_expr(true).parse_assignment_expr()?;
            Ok(ForHead::ForOf { left, right })
        } else {
            let right = self.include_in_expr(true).parse_expr()?;
            Ok(ForHead::ForIn { left, right })
        }
    }

    fn parse_normal_for_head(&mut self, init: Option<VarDeclOrExpr>) -> PResult<ForHead> {
        let test = if eat_exact!(self, ';') {
            None
        } else {
            let test = self.include_in_expr(true).parse_expr().map(Some)?;
            expect_exact!(self, ';');
            test
        };

        let update = if is!(self, ')') {
            None
        } else {
            self.include_in_expr(true).parse_expr().map(Some)?
        };

        Ok(ForHead::For { init, test, update })
    }

    fn parse_if_stmt(&mut self) -> PResult<Stmt> {
        let start = self.input.cur_pos();

        self.assert_and_bump(&tok!("if"));

        let test = self.parse_header_expr()?;
        let cons = self.parse_stmt(false).map(Box::new)?;
        let alt = if eat!(self, "else") {
            Some(self.parse_stmt(false).map(Box::new)?)
        } else {
            None
        };

        Ok(Stmt::If(IfStmt {
            span: span!(self, start),
            test,
            cons,
            alt,
        }))
    }

    fn parse_return_stmt(&mut self) -> PResult<Stmt> {
        let start = self.input.cur_pos();

        if !self.ctx().in_function && !self.syntax().allow_return_outside_function() {
            let span = self.input.cur_span();
            self.emit_err(span, SyntaxError::ReturnNotAllowed);
        }

        self.assert_and_bump(&tok!("return"));

        // In `return` (and `break`/`continue`), the keywords with
        // optional arguments, we eagerly look for a semicolon or the
        // possibility to insert one.

        let arg = if is!(self, ';') {
            None
        } else {
            Some(self.include_in_expr(true).parse_expr()?)
        };
        expect!(self, ';');

        Ok(Stmt::Return(ReturnStmt {
            span: span!(self, start),
            arg,
        }))
    }

    fn parse_switch_stmt(&mut self) -> PResult<Stmt> {
        let switch_start = self.input.cur_pos();

        self.assert_and_bump(&tok!("switch"));

        let discriminant = self.parse_header_expr()?;
        let mut cases = vec![];
        let mut has_default = false;

        expect!(self, '{');

        let ctx = Context {
            is_break_allowed: true,
            ..self.ctx()
        };

        {
            let mut p = self.with_ctx(ctx);

            while is_one_of!(p, "case", "default") {
                let case_start = p.input.cur_pos();
                let is_case = p.input.bump() == tok!("case");

                let test = if is_case {
                    Some(p.include_in_expr(true).parse_expr()?)
                } else {
                    if has_default {
                        let span = span!(p, case_start);
                        p.emit_err(span, SyntaxError::MultipleDefault);
                    }
                    has_default = true;
                    None
                };
                expect!(p, ':');

                let mut cons = vec![];
                while !eof!(p) && !is_one_of!(p, "case", "default", '}') {
                    cons.push(p.parse_stmt_list_item(false)?);
                }

                cases.push(SwitchCase {
                    span: span!(p, case_start),
                    test,
                    cons,
                });
            }
        }

        expect!(self, '}');

        Ok(Stmt::Switch(SwitchStmt {
            span: span!(self, switch_start),
            discriminant,
            cases,
        }))
    }

    fn parse_throw_stmt(&mut self) -> PResult<Stmt> {
        let start = self.input.cur_pos();

        self.assert_and_bump(&tok!("throw"));

        if self.input.had_line_break_before_cur() {
            let span = self.input.cur_span();
            self.emit_err(span, SyntaxError::LineBreakInThrow);
        }

        let arg = self.include_in_expr(true).parse_expr()?;
        expect!(self, ';');

        Ok(Stmt::Throw(ThrowStmt {
            span: span!(self, start),
            arg,
        }))
    }

    fn parse_try_stmt(&mut self) -> PResult<Stmt> {
        let start = self.input.cur_pos();

        self.assert_and_bump(&tok!("try"));

        let block = self.parse_block()?;

        let handler = self.parse_catch_clause()?;
        let finalizer = if eat!(self, "finally") {
            Some(self.parse_block()?)
        } else {
            None
        };

        if handler.is_none() && finalizer.is_none() {
            let span = self.input.cur_span();
            self.emit_err(span, SyntaxError::TryWithoutHandler);
        }

        Ok(Stmt::Try(TryStmt {
            span: span!(self, start),
            block,
            handler,
            finalizer,
        }))
    }

    fn parse_catch_clause(&mut self) -> PResult<Option<CatchClause>> {
        let start = self.input.cur_pos();

        if !eat!(self, "catch") {
            return Ok(None);
        }

        expect!(self, '(');
        let param = self.parse_binding_pat_or_ident()?;
        expect!(self, ')');

        let body = self.parse_block()?;

        Ok(Some(CatchClause {
            span: span!(self, start),
            param,
            body,
        }))
    }

    pub(super) fn parse_var_stmt(&mut self, for_loop: bool) -> PResult<VarDecl> {
        let start = self.input.cur_pos();
        let kind = match self.input.bump() {
            tok!("const") => VarDeclKind::Const,
            tok!("let") => VarDeclKind::Let,
            tok!("var") => VarDeclKind::Var,
            _ => unreachable!(),
        };

        let mut decls = vec![];
        loop {
            // `in` is an operator in the head of a `for` statement only after
            // the declarations.
            let decl = self
                .include_in_expr(!for_loop)
                .parse_var_declarator(kind, for_loop)?;
            decls.push(decl);

            if !eat!(self, ',') {
                break;
            }
        }

        if !for_loop {
            expect!(self, ';');
        }

        Ok(VarDecl {
            span: span!(self, start),
            kind,
            decls,
        })
    }

    fn parse_var_declarator(&mut self, kind: VarDeclKind, for_loop: bool) -> PResult<VarDeclarator> {
        let start = self.input.cur_pos();

        let name = self.parse_binding_pat_or_ident()?;

        if kind != VarDeclKind::Var && !self.ctx().strict {
            if let Pat::Ident(ref i) = name {
                if &*i.sym == "let" {
                    self.emit_err(i.span, SyntaxError::LetInLexicalBinding);
                }
            }
        }

        let init = if eat!(self, '=') {
            Some(self.parse_assignment_expr()?)
        } else {
            // `for (const a of b)` has no initializer.
            let in_for_each_head = for_loop && is_one_of!(self, "in", "of");
            if !in_for_each_head {
                match name {
                    Pat::Ident(..) => {
                        if kind == VarDeclKind::Const {
                            self.emit_err(name.span(), SyntaxError::ConstWithoutInit);
                        }
                    }
                    _ => self.emit_err(name.span(), SyntaxError::PatVarWithoutInit),
                }
            }
            None
        };

        Ok(VarDeclarator {
            span: span!(self, start),
            name,
            init,
        })
    }

    fn parse_while_stmt(&mut self) -> PResult<Stmt> {
        let start = self.input.cur_pos();

        self.assert_and_bump(&tok!("while"));

        let test = self.parse_header_expr()?;

        let ctx = self.loop_ctx();
        let body = self.with_ctx(ctx).parse_stmt(false).map(Box::new)?;

        Ok(Stmt::While(WhileStmt {
            span: span!(self, start),
            test,
            body,
        }))
    }

    fn parse_with_stmt(&mut self) -> PResult<Stmt> {
        if self.ctx().strict {
            let span = self.input.cur_span();
            self.emit_err(span, SyntaxError::WithInStrict);
        }

        let start = self.input.cur_pos();

        self.assert_and_bump(&tok!("with"));

        let obj = self.parse_header_expr()?;
        let body = self.parse_stmt(false).map(Box::new)?;

        Ok(Stmt::With(WithStmt {
            span: span!(self, start),
            obj,
            body,
        }))
    }

    pub(super) fn parse_block(&mut self) -> PResult<BlockStmt> {
        let start = self.input.cur_pos();

        expect!(self, '{');
        let stmts = self.parse_block_body(false, false, Some(&tok!('}')))?;
        expect!(self, '}');

        Ok(BlockStmt {
            span: span!(self, start),
            stmts,
        })
    }

    fn parse_labelled_stmt(&mut self, label: Ident) -> PResult<Stmt> {
        if self.state.labels.contains(&label.sym) {
            self.emit_err(
                label.span,
                SyntaxError::DuplicateLabel {
                    name: label.sym.clone(),
                },
            );
        }

        self.state.labels.push(label.sym.clone());

        // Labelled function declarations are a sloppy mode extension.
        let body = if is!(self, "function") {
            if self.ctx().strict {
                let span = self.input.cur_span();
                self.emit_err(span, SyntaxError::LexicalDeclNotAllowed);
            }
            self.parse_fn_decl().map(Stmt::Decl)
        } else {
            self.parse_stmt(false)
        };

        self.state.labels.pop();

        Ok(Stmt::Labeled(LabeledStmt {
            span: span!(self, label.span.lo),
            label,
            body: Box::new(body?),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EsConfig;
    use global_common::input::StringInput;

    fn stmts(src: &str) -> (Vec<Stmt>, Vec<SyntaxError>) {
        let mut p = Parser::new(
            Syntax::Es(EsConfig::default()),
            StringInput::new(src, BytePos(0)),
        );
        let script = p.parse_script().unwrap();
        let errors = p.take_errors().into_iter().map(|e| e.into_kind()).collect();
        (script.body, errors)
    }

    #[test]
    fn directive_spans_the_statement() {
        let (body, errors) = stmts("'use strict';\n'a' + 1;\n'b';");
        assert!(errors.is_empty());
        match body.as_slice() {
            [Stmt::Expr(first), Stmt::Expr(second), Stmt::Expr(third)] => {
                assert_eq!(first.span, Span::new(BytePos(0), BytePos(13)));
                assert_eq!(first.directive.as_deref(), Some("use strict"));
                // `'a' + 1` ends the prologue.
                assert_eq!(second.directive, None);
                assert_eq!(third.directive, None);
            }
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn recovery_skips_to_the_end_of_the_statement() {
        let (body, errors) = stmts("a b c; d;");
        assert_eq!(
            errors,
            vec![SyntaxError::Expected { token: ";".into() }]
        );
        assert_eq!(body.len(), 1);
    }

    #[test]
    fn recovery_skips_nested_blocks() {
        let (body, errors) = stmts("a b { c; } d; e;");
        assert_eq!(errors.len(), 1);
        assert_eq!(body.len(), 1);
    }

    #[test]
    fn labels_are_scoped_to_their_statement() {
        let (_, errors) = stmts("a: { b c; }\nwhile (x) { break a; }");
        assert_eq!(
            errors,
            vec![
                SyntaxError::Expected { token: ";".into() },
                SyntaxError::UndefinedLabel { name: "a".into() },
            ]
        );
    }

    #[test]
    fn for_of_with_pattern() {
        let (body, errors) = stmts("for (let { a, b: [c] } of d) {}");
        assert!(errors.is_empty(), "{:?}", errors);
        match body.as_slice() {
            [Stmt::ForOf(ForOfStmt {
                left: VarDeclOrPat::VarDecl(decl),
                ..
            })] => {
                assert_eq!(decl.kind, VarDeclKind::Let);
                assert!(matches!(decl.decls[0].name, Pat::Object(..)));
            }
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn for_head_allows_in_inside_parens() {
        let (body, errors) = stmts("for (var a = (b in c); a; ) {}");
        assert!(errors.is_empty(), "{:?}", errors);
        assert!(matches!(body.as_slice(), [Stmt::For(..)]));
    }

    #[test]
    fn switch_cases() {
        let (body, errors) = stmts("switch (a) { case 1: case 2: b(); break; default: c(); }");
        assert!(errors.is_empty());
        match body.as_slice() {
            [Stmt::Switch(SwitchStmt { cases, .. })] => {
                assert_eq!(cases.len(), 3);
                assert!(cases[0].cons.is_empty());
                assert_eq!(cases[1].cons.len(), 2);
                assert!(cases[2].test.is_none());
            }
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn do_while_needs_no_semicolon() {
        let (body, errors) = stmts("do x(); while (a) y()");
        assert!(errors.is_empty(), "{:?}", errors);
        assert_eq!(body.len(), 2);
    }

    #[test]
    fn labelled_function() {
        let (body, errors) = stmts("a: function f() {}");
        assert!(errors.is_empty());
        match body.as_slice() {
            [Stmt::Labeled(LabeledStmt { label, body, .. })] => {
                assert_eq!(&*label.sym, "a");
                assert!(matches!(**body, Stmt::Decl(Decl::Fn(..))));
            }
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn labelled_function_in_strict_code() {
        let (body, errors) = stmts("'use strict'; a: function f() {}");
        assert_eq!(errors, vec![SyntaxError::LexicalDeclNotAllowed]);
        assert!(matches!(body.as_slice(), [_, Stmt::Labeled(..)]));
    }

    #[test]
    fn import_in_script_is_parsed_anyway() {
        let (body, errors) = stmts("export default 1; a;");
        assert_eq!(errors, vec![SyntaxError::ImportExportInScript]);
        assert_eq!(body.len(), 2);
        assert!(matches!(
            body[0],
            Stmt::Expr(ExprStmt {
                ref expr,
                ..
            }) if matches!(**expr, Expr::Invalid(..))
        ));
    }
}
