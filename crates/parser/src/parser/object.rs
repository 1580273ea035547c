//! Parser for object literal.

use super::{util::ParseObject, *};

impl<I: Tokens> Parser<I> {
    /// Parse a object literal or object pattern.
    pub(super) fn parse_object<T>(&mut self) -> PResult<T>
    where
        Self: ParseObject<T>,
    {
        trace_cur!(self, parse_object);

        let start = self.input.cur_pos();
        self.assert_and_bump(&tok!('{'));

        let mut props = vec![];

        let mut first = true;
        while !self.input.eat(&tok!('}')) {
            // Handle comma
            if first {
                first = false;
            } else {
                expect!(self, ',');
                if self.input.eat(&tok!('}')) {
                    break;
                }
            }

            let prop = self.parse_object_prop()?;
            props.push(prop);
        }

        self.make_object(span!(self, start), props)
    }

    /// 'PropertyName'
    pub(super) fn parse_prop_name(&mut self) -> PResult<PropName> {
        let start = self.input.cur_pos();

        let v = match *cur!(self, true) {
            Token::Str { .. } => match self.input.bump() {
                Token::Str {
                    value, has_escape, ..
                } => PropName::Str(Str {
                    span: span!(self, start),
                    value,
                    has_escape,
                }),
                _ => unreachable!(),
            },
            Token::Num { .. } => match self.input.bump() {
                Token::Num { value, .. } => PropName::Num(Number {
                    span: span!(self, start),
                    value,
                }),
                _ => unreachable!(),
            },
            Token::Word(..) => match self.input.bump() {
                Token::Word(w) => PropName::Ident(Ident::new(w.into(), span!(self, start))),
                _ => unreachable!(),
            },
            tok!('[') => {
                self.input.bump();
                let expr = self.include_in_expr(true).parse_assignment_expr()?;
                expect!(self, ']');
                PropName::Computed(ComputedPropName {
                    span: span!(self, start),
                    expr,
                })
            }
            _ => unexpected!(self),
        };

        Ok(v)
    }

    /// Parses `() { ... }` of a getter.
    fn parse_getter_body(&mut self) -> PResult<BlockStmt> {
        let ctx = self.fn_ctx(false);
        let mut p = self.with_ctx(ctx);
        let mut p = p.with_state(State::default());

        expect!(p, '(');
        expect!(p, ')');
        p.parse_fn_body()
    }

    /// Parses `(param) { ... }` of a setter.
    fn parse_setter_param_and_body(&mut self) -> PResult<(Pat, BlockStmt)> {
        let ctx = self.fn_ctx(false);
        let mut p = self.with_ctx(ctx);
        let mut p = p.with_state(State::default());

        expect!(p, '(');
        let param = p.parse_setter_param()?;
        expect!(p, ')');
        let body = p.parse_fn_body()?;
        Ok((param, body))
    }
}

impl<I: Tokens> ParseObject<Box<Expr>> for Parser<I> {
    type Prop = Prop;

    fn make_object(&mut self, span: Span, props: Vec<Self::Prop>) -> PResult<Box<Expr>> {
        Ok(Box::new(Expr::Object(ObjectLit { span, props })))
    }

    /// spec: 'PropertyDefinition'
    fn parse_object_prop(&mut self) -> PResult<Self::Prop> {
        trace_cur!(self, parse_object_prop);

        let start = self.input.cur_pos();

        // Parse as 'MethodDefinition'
        if eat!(self, '*') {
            let key = self.parse_prop_name()?;
            let function = self.parse_method_fn(true)?;
            return Ok(Prop::Method(MethodProp { key, function }));
        }

        let key = self.parse_prop_name()?;

        if eat!(self, ':') {
            let value = self.include_in_expr(true).parse_assignment_expr_base()?;
            return Ok(Prop::KeyValue(KeyValueProp { key, value }));
        }

        // Handle `a(){}` (and `get(){}` / `set(){}`)
        if is!(self, '(') {
            let function = self.parse_method_fn(false)?;
            return Ok(Prop::Method(MethodProp { key, function }));
        }

        let ident = match key {
            PropName::Ident(ident) => ident,
            // `{ 'a' }` and `{ 1 }` need a value.
            _ => unexpected!(self, ":"),
        };

        // `get` and `set` followed by a property name start an accessor.
        let is_accessor_start = (&*ident.sym == "get" || &*ident.sym == "set")
            && !is_one_of!(self, ',', '}', '=')
            && !eof!(self);
        if is_accessor_start {
            let key = self.parse_prop_name()?;

            return if &*ident.sym == "get" {
                let body = self.parse_getter_body()?;
                Ok(Prop::Getter(GetterProp {
                    span: span!(self, start),
                    key,
                    body,
                }))
            } else {
                let (param, body) = self.parse_setter_param_and_body()?;
                Ok(Prop::Setter(SetterProp {
                    span: span!(self, start),
                    key,
                    param,
                    body,
                }))
            };
        }

        // Shorthand properties are identifier references.
        if self.ctx().is_reserved_word(&ident.sym) {
            self.emit_err(
                ident.span,
                SyntaxError::ReservedWord {
                    word: ident.sym.clone(),
                },
            );
        }

        if eat!(self, '=') {
            let value = self.include_in_expr(true).parse_assignment_expr()?;
            // Valid only if this object turns out to be a pattern.
            self.state.shorthand_inits.push(ident.span.to(value.span()));
            return Ok(Prop::Assign(AssignProp { key: ident, value }));
        }

        Ok(Prop::Shorthand(ident))
    }
}

impl<I: Tokens> ParseObject<Pat> for Parser<I> {
    type Prop = ObjectPatProp;

    fn make_object(&mut self, span: Span, props: Vec<Self::Prop>) -> PResult<Pat> {
        Ok(Pat::Object(ObjectPat { span, props }))
    }

    /// Production 'BindingProperty'
    fn parse_object_prop(&mut self) -> PResult<Self::Prop> {
        let start = self.input.cur_pos();

        let key = self.parse_prop_name()?;
        if eat!(self, ':') {
            let value = Box::new(self.parse_binding_element()?);

            return Ok(ObjectPatProp::KeyValue(KeyValuePatProp { key, value }));
        }
        let key = match key {
            PropName::Ident(ident) => ident,
            _ => unexpected!(self, ":"),
        };

        if self.ctx().is_reserved_word(&key.sym) {
            self.emit_err(
                key.span,
                SyntaxError::ReservedWord {
                    word: key.sym.clone(),
                },
            );
        }
        self.check_binding_ident(&key);

        let value = if eat!(self, '=') {
            Some(self.include_in_expr(true).parse_assignment_expr()?)
        } else {
            None
        };

        Ok(ObjectPatProp::Assign(AssignPatProp {
            span: span!(self, start),
            key,
            value,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EsConfig;
    use global_common::input::StringInput;

    fn object(src: &str) -> (Vec<Prop>, Vec<SyntaxError>) {
        let mut p = Parser::new(
            Syntax::Es(EsConfig::default()),
            StringInput::new(src, BytePos(0)),
        );
        let expr: Box<Expr> = p.parse_object().unwrap();
        let errors = p.take_errors().into_iter().map(|e| e.into_kind()).collect();
        match *expr {
            Expr::Object(ObjectLit { props, .. }) => (props, errors),
            _ => unreachable!(),
        }
    }

    #[test]
    fn property_kinds() {
        let (props, errors) = object(
            "{ a, b: 1, 'c': 2, 3: 4, [d]: 5, e() {}, *f() {}, get g() {}, set g(v) {}, get: 6, \
             set() {} }",
        );
        assert!(errors.is_empty(), "{:?}", errors);
        assert!(matches!(props[0], Prop::Shorthand(..)));
        assert!(matches!(props[1], Prop::KeyValue(..)));
        assert!(matches!(
            props[4],
            Prop::KeyValue(KeyValueProp {
                key: PropName::Computed(..),
                ..
            })
        ));
        assert!(matches!(props[5], Prop::Method(..)));
        assert!(
            matches!(props[6], Prop::Method(MethodProp { ref function, .. }) if function.is_generator)
        );
        assert!(matches!(props[7], Prop::Getter(..)));
        assert!(matches!(props[8], Prop::Setter(..)));
        assert!(matches!(props[9], Prop::KeyValue(..)));
        assert!(matches!(props[10], Prop::Method(..)));
    }

    #[test]
    fn trailing_comma() {
        let (props, errors) = object("{ a, }");
        assert_eq!(props.len(), 1);
        assert!(errors.is_empty());
    }

    #[test]
    fn keyword_shorthand() {
        let (_, errors) = object("{ if }");
        assert_eq!(errors, vec![SyntaxError::ReservedWord { word: "if".into() }]);
    }
}
