use super::*;

/// Parser for function expression and function declaration.
impl<I: Tokens> Parser<I> {
    pub(super) fn parse_fn_expr(&mut self) -> PResult<Box<Expr>> {
        let (ident, function) = self.parse_fn(false)?;
        Ok(Box::new(Expr::Fn(FnExpr { ident, function })))
    }

    pub(super) fn parse_fn_decl(&mut self) -> PResult<Decl> {
        let (ident, function) = self.parse_fn(true)?;
        match ident {
            Some(ident) => Ok(Decl::Fn(FnDecl { ident, function })),
            None => unreachable!("function declaration without a name"),
        }
    }

    /// `export default function [name]() {}`
    pub(super) fn parse_default_fn(&mut self) -> PResult<DefaultDecl> {
        let (ident, function) = self.parse_fn(false)?;
        Ok(DefaultDecl::Fn(FnExpr { ident, function }))
    }

    fn parse_fn(&mut self, requires_name: bool) -> PResult<(Option<Ident>, Function)> {
        trace_cur!(self, parse_fn);

        let start = self.input.cur_pos();
        self.assert_and_bump(&tok!("function"));

        let is_generator = eat!(self, '*');

        let ident = if is!(self, IdentName) {
            // The name of a generator expression is bound inside of it.
            let ident = if requires_name {
                self.parse_binding_ident()?
            } else {
                let ctx = Context {
                    in_generator: is_generator,
                    ..self.ctx()
                };
                self.with_ctx(ctx).parse_binding_ident()?
            };
            Some(ident)
        } else if requires_name {
            syntax_error!(self, SyntaxError::ExpectedIdent)
        } else {
            None
        };

        let function = self.parse_fn_args_body(start, is_generator)?;

        Ok((ident, function))
    }

    /// Parses the parameter list and body of a method. The span of the
    /// function starts at the parameter list.
    pub(super) fn parse_method_fn(&mut self, is_generator: bool) -> PResult<Function> {
        let start = self.input.cur_pos();
        self.parse_fn_args_body(start, is_generator)
    }

    /// `start` is the start of the function, which is not necessarily the
    /// start of the parameter list.
    pub(super) fn parse_fn_args_body(
        &mut self,
        start: BytePos,
        is_generator: bool,
    ) -> PResult<Function> {
        trace_cur!(self, parse_fn_args_body);

        let ctx = self.fn_ctx(is_generator);
        let mut p = self.with_ctx(ctx);
        let mut p = p.with_state(State::default());

        expect!(p, '(');
        let params = p.parse_formal_params()?;
        expect!(p, ')');

        let body = p.parse_fn_body()?;

        Ok(Function {
            span: span!(p, start),
            params,
            body,
            is_generator,
        })
    }

    /// `{ FunctionBody }`. The caller sets up the context of the function.
    pub(super) fn parse_fn_body(&mut self) -> PResult<BlockStmt> {
        let start = self.input.cur_pos();

        expect!(self, '{');
        let stmts = self.parse_block_body(true, false, Some(&tok!('}')))?;
        expect!(self, '}');

        Ok(BlockStmt {
            span: span!(self, start),
            stmts,
        })
    }
}

/// Parser for classes.
impl<I: Tokens> Parser<I> {
    pub(super) fn parse_class_decl(&mut self) -> PResult<Decl> {
        let (ident, class) = self.parse_class(true)?;
        match ident {
            Some(ident) => Ok(Decl::Class(ClassDecl { ident, class })),
            None => unreachable!("class declaration without a name"),
        }
    }

    pub(super) fn parse_class_expr(&mut self) -> PResult<Box<Expr>> {
        let (ident, class) = self.parse_class(false)?;
        Ok(Box::new(Expr::Class(ClassExpr { ident, class })))
    }

    /// `export default class [name] {}`
    pub(super) fn parse_default_class(&mut self) -> PResult<DefaultDecl> {
        let (ident, class) = self.parse_class(false)?;
        Ok(DefaultDecl::Class(ClassExpr { ident, class }))
    }

    fn parse_class(&mut self, requires_name: bool) -> PResult<(Option<Ident>, Class)> {
        trace_cur!(self, parse_class);

        let start = self.input.cur_pos();
        self.assert_and_bump(&tok!("class"));

        // All parts of a class are strict mode code.
        let mut p = self.strict_mode();

        let ident = if is!(p, IdentName) && !is!(p, "extends") {
            Some(p.parse_binding_ident()?)
        } else if requires_name {
            syntax_error!(p, SyntaxError::ExpectedIdent)
        } else {
            None
        };

        let super_class = if eat!(p, "extends") {
            Some(p.parse_lhs_expr()?)
        } else {
            None
        };

        expect!(p, '{');
        let body = p.parse_class_body()?;
        expect!(p, '}');

        Ok((
            ident,
            Class {
                span: span!(p, start),
                super_class,
                body,
            },
        ))
    }

    fn parse_class_body(&mut self) -> PResult<Vec<ClassMember>> {
        let mut elems = vec![];
        let mut has_constructor = false;

        while !eof!(self) && !is!(self, '}') {
            if self.input.eat(&tok!(';')) {
                continue;
            }

            let member = self.parse_class_member()?;
            if let ClassMember::Constructor(ref c) = member {
                if has_constructor {
                    self.emit_err(c.key.span(), SyntaxError::DuplicateConstructor);
                }
                has_constructor = true;
            }
            elems.push(member);
        }

        Ok(elems)
    }

    fn parse_class_member(&mut self) -> PResult<ClassMember> {
        trace_cur!(self, parse_class_member);

        let start = self.input.cur_pos();

        // `static(){}` is a method named `static`.
        let is_static = if is!(self, "static") && !self.input.peeked_is(&tok!('(')) {
            self.input.bump();
            true
        } else {
            false
        };

        if eat!(self, '*') {
            let key = self.parse_prop_name()?;
            if is_constructor(&key) && !is_static {
                self.emit_err(key.span(), SyntaxError::SpecialConstructor);
            }
            return self.make_method(start, key, is_static, MethodKind::Method, true);
        }

        let key = self.parse_prop_name()?;

        let accessor = match key {
            PropName::Ident(ref i) if !is!(self, '(') => match &*i.sym {
                "get" => Some(MethodKind::Getter),
                "set" => Some(MethodKind::Setter),
                _ => None,
            },
            _ => None,
        };

        if let Some(kind) = accessor {
            let key = self.parse_prop_name()?;
            if is_constructor(&key) && !is_static {
                self.emit_err(key.span(), SyntaxError::SpecialConstructor);
            }
            return self.make_method(start, key, is_static, kind, false);
        }

        if is_constructor(&key) && !is_static {
            let function = self.parse_method_fn(false)?;
            return Ok(ClassMember::Constructor(Constructor {
                span: span!(self, start),
                key,
                function,
            }));
        }

        self.make_method(start, key, is_static, MethodKind::Method, false)
    }

    fn make_method(
        &mut self,
        start: BytePos,
        key: PropName,
        is_static: bool,
        kind: MethodKind,
        is_generator: bool,
    ) -> PResult<ClassMember> {
        if is_static && key.static_name() == Some("prototype") {
            self.emit_err(key.span(), SyntaxError::StaticPrototype);
        }

        let function = self.parse_method_fn(is_generator)?;

        Ok(ClassMember::Method(ClassMethod {
            span: span!(self, start),
            key,
            function,
            kind,
            is_static,
        }))
    }
}

fn is_constructor(key: &PropName) -> bool {
    key.static_name() == Some("constructor")
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

    #[test]
    fn function_span_starts_at_keyword() {
        let mut p = parser("function foo(a, b = 1, ...c) {}");
        match p.parse_fn_decl().unwrap() {
            Decl::Fn(FnDecl { ident, function }) => {
                assert_eq!(&*ident.sym, "foo");
                assert_eq!(function.span.lo, BytePos(0));
                assert_eq!(function.params.len(), 3);
                assert!(!function.is_generator);
            }
            decl => panic!("{:?}", decl),
        }
    }

    #[test]
    fn anonymous_function_expression() {
        let mut p = parser("function* () { yield 1; }");
        match *p.parse_fn_expr().unwrap() {
            Expr::Fn(FnExpr {
                ident: None,
                ref function,
            }) => assert!(function.is_generator),
            ref e => panic!("{:?}", e),
        }
    }

    #[test]
    fn class_members() {
        let mut p = parser(
            "class A extends B { constructor(a) {} static get x() {} static() {} *[Symbol.iterator]() \
             {}; }",
        );
        match p.parse_class_decl().unwrap() {
            Decl::Class(ClassDecl { class, .. }) => {
                assert!(class.super_class.is_some());
                assert_eq!(class.body.len(), 4);
                assert!(matches!(class.body[0], ClassMember::Constructor(..)));
                assert!(matches!(
                    class.body[1],
                    ClassMember::Method(ClassMethod {
                        kind: MethodKind::Getter,
                        is_static: true,
                        ..
                    })
                ));
                assert!(matches!(
                    class.body[2],
                    ClassMember::Method(ClassMethod {
                        is_static: false,
                        ..
                    })
                ));
            }
            decl => panic!("{:?}", decl),
        }
        assert!(p.take_errors().is_empty());
    }

    #[test]
    fn class_body_is_strict() {
        let mut p = parser("class A { m() { with (a) {} } }");
        p.parse_class_decl().unwrap();
        assert_eq!(
            p.take_errors()
                .into_iter()
                .map(|e| e.into_kind())
                .collect::<Vec<_>>(),
            vec![SyntaxError::WithInStrict]
        );
    }
}
