#[macro_use]
mod macros;
mod class_and_fn;
mod expression;
mod identifier;
mod input;
mod object;
mod pat;
mod statement;
mod util;

use self::{input::Buffer, util::ExprExt};
pub use self::input::Tokens;
use crate::{
    context::Context,
    error::{Error, SyntaxError},
    lexer::Lexer,
    token::{Token, Word},
    Syntax,
};
use ast::*;
use global_common::{input::Input, BytePos, Span, Spanned};

#[derive(Clone, Default)]
struct State {
    labels: Vec<JsWord>,
    /// Start position of an assignment expression.
    potential_arrow_start: Option<BytePos>,
    /// Spans of `key = value` properties of object literals which may still
    /// turn out to be part of a pattern.
    shorthand_inits: Vec<Span>,
}

/// Unrecoverable errors are returned; recoverable ones are collected and
/// available through [Parser::take_errors].
pub type PResult<T> = Result<T, Error>;

/// EcmaScript parser.
#[derive(Clone)]
pub struct Parser<I: Tokens> {
    state: State,
    input: Buffer<I>,
    errors: Vec<Error>,
}

impl<I: Input> Parser<Lexer<I>> {
    pub fn new(syntax: Syntax, input: I) -> Self {
        Self::new_from(Lexer::new(syntax, input))
    }
}

impl<I: Tokens> Parser<I> {
    pub fn new_from(input: I) -> Self {
        Parser {
            state: Default::default(),
            input: Buffer::new(input),
            errors: vec![],
        }
    }

    /// Returns the errors the parser recovered from, ordered by position.
    pub fn take_errors(&mut self) -> Vec<Error> {
        let mut errors = std::mem::take(&mut self.errors);
        errors.sort_by_key(|err| err.span().lo);
        errors
    }

    pub fn parse_script(&mut self) -> PResult<Script> {
        trace_cur!(self, parse_script);

        let ctx = Context {
            module: false,
            include_in_expr: true,
            ..self.ctx()
        };
        self.set_ctx(ctx);

        let start = self.input.cur_pos();

        self.parse_block_body(true, true, None).map(|body| Script {
            span: span!(self, start),
            body,
        })
    }

    pub fn parse_module(&mut self) -> PResult<Module> {
        trace_cur!(self, parse_module);

        // Module code is always in strict mode
        let ctx = Context {
            module: true,
            strict: true,
            include_in_expr: true,
            ..self.ctx()
        };
        self.set_ctx(ctx);

        let start = self.input.cur_pos();

        self.parse_block_body(true, true, None).map(|body| Module {
            span: span!(self, start),
            body,
        })
    }

    /// Parses a module if the syntax enables module code and a script
    /// otherwise.
    pub fn parse_program(&mut self) -> PResult<Program> {
        if self.syntax().commonjs() {
            self.parse_module().map(Program::Module)
        } else {
            self.parse_script().map(Program::Script)
        }
    }

    fn ctx(&self) -> Context {
        self.input.get_ctx()
    }

    fn syntax(&self) -> Syntax {
        self.input.syntax()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EsConfig;
    use global_common::input::StringInput;

    fn parse(src: &str, commonjs: bool) -> (PResult<Program>, Vec<String>) {
        let syntax = Syntax::Es(EsConfig {
            commonjs,
            ..Default::default()
        });
        let mut p = Parser::new(syntax, StringInput::new(src, BytePos(1)));
        let res = p.parse_program();
        let errors = p
            .take_errors()
            .into_iter()
            .map(|e| e.kind().msg().into_owned())
            .collect();
        (res, errors)
    }

    fn script(src: &str) -> Vec<Stmt> {
        match parse(src, false) {
            (Ok(Program::Script(s)), errors) if errors.is_empty() => s.body,
            other => panic!("failed to parse {:?}: {:?}", src, other),
        }
    }

    fn errors(src: &str) -> Vec<String> {
        parse(src, false).1
    }

    fn module_errors(src: &str) -> Vec<String> {
        parse(src, true).1
    }

    fn expr(src: &str) -> Box<Expr> {
        match script(src).pop() {
            Some(Stmt::Expr(ExprStmt { expr, .. })) => expr,
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn empty_program() {
        assert!(script("").is_empty());
        assert!(script("  // comment\n").is_empty());
        match parse("", true) {
            (Ok(Program::Module(m)), errors) => {
                assert!(m.body.is_empty());
                assert!(errors.is_empty());
            }
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn binary_precedence() {
        match *expr("a + b * c") {
            Expr::Bin(BinExpr {
                op: BinaryOp::Add,
                ref right,
                ..
            }) => assert!(matches!(
                **right,
                Expr::Bin(BinExpr {
                    op: BinaryOp::Mul,
                    ..
                })
            )),
            ref e => panic!("{:?}", e),
        }
    }

    #[test]
    fn exponent_is_right_associative() {
        match *expr("2 ** 3 ** 2") {
            Expr::Bin(BinExpr {
                op: BinaryOp::Exp,
                ref left,
                ref right,
                ..
            }) => {
                assert!(matches!(**left, Expr::Lit(Lit::Num(..))));
                assert!(matches!(**right, Expr::Bin(..)));
            }
            ref e => panic!("{:?}", e),
        }
    }

    #[test]
    fn parenthesized_unary_before_exponent() {
        assert!(errors("(+3) ** 2;").is_empty());
        assert!(errors("2 ** -3;").is_empty());
        assert_eq!(
            errors("-x ** 2;"),
            vec!["Unary operator before ** must use parens to disambiguate"]
        );
    }

    #[test]
    fn new_target() {
        match script("function f() { return new.target; }").pop() {
            Some(Stmt::Decl(Decl::Fn(FnDecl { function, .. }))) => {
                match function.body.stmts[0] {
                    Stmt::Return(ReturnStmt {
                        arg: Some(ref arg), ..
                    }) => match **arg {
                        Expr::MetaProp(MetaPropExpr {
                            ref meta, ref prop, ..
                        }) => {
                            assert_eq!(&*meta.sym, "new");
                            assert_eq!(&*prop.sym, "target");
                        }
                        ref e => panic!("{:?}", e),
                    },
                    ref s => panic!("{:?}", s),
                }
            }
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn new_without_arguments() {
        match *expr("new Foo;") {
            Expr::New(NewExpr { args: None, .. }) => {}
            ref e => panic!("{:?}", e),
        }
        match *expr("new Foo.bar(1).baz") {
            Expr::Member(MemberExpr {
                obj: ExprOrSuper::Expr(ref obj),
                ..
            }) => assert!(matches!(**obj, Expr::New(NewExpr { args: Some(..), .. }))),
            ref e => panic!("{:?}", e),
        }
    }

    #[test]
    fn arrow_functions() {
        assert!(matches!(*expr("a => a"), Expr::Arrow(..)));
        assert!(matches!(*expr("(a, b) => a + b"), Expr::Arrow(..)));
        assert!(matches!(*expr("() => {}"), Expr::Arrow(..)));
        assert!(matches!(*expr("({a, b = 1}, [c], ...d) => 0"), Expr::Arrow(..)));
        assert_eq!(
            errors("a\n=> a"),
            vec!["line break is not allowed before '=>'"]
        );
        assert_eq!(errors("(a.b) => 0"), vec!["invalid destructuring target"]);
    }

    #[test]
    fn arrow_body_is_not_called() {
        let stmts = script("x => {}\n(foo)");
        assert_eq!(stmts.len(), 2);
    }

    #[test]
    fn destructuring_assignment() {
        match *expr("[a, {b, c: d = 1}] = arr") {
            Expr::Assign(AssignExpr {
                left: PatOrExpr::Pat(ref pat),
                ..
            }) => assert!(matches!(**pat, Pat::Array(..))),
            ref e => panic!("{:?}", e),
        }
        assert!(errors("({a = 1} = obj);").is_empty());
        assert_eq!(
            errors("({a = 1});"),
            vec!["invalid shorthand property initializer"]
        );
    }

    #[test]
    fn invalid_assignment_targets() {
        assert_eq!(errors("1 = a;"), vec!["invalid assignment left-hand side"]);
        assert_eq!(errors("a + b = c;"), vec!["invalid assignment left-hand side"]);
        assert_eq!(errors("a() += 1;"), vec!["invalid assignment left-hand side"]);
        assert_eq!(errors("++a();"), vec!["invalid operand in update operation"]);
        assert!(errors("(a) = 1; a.b = 1; a[0] += 2; a++;").is_empty());
    }

    #[test]
    fn template_literals() {
        match *expr("`a${b}c${d}`") {
            Expr::Tpl(Tpl {
                ref exprs,
                ref quasis,
                ..
            }) => {
                assert_eq!(exprs.len(), 2);
                assert_eq!(quasis.len(), 3);
                assert!(quasis[2].tail);
            }
            ref e => panic!("{:?}", e),
        }
        assert!(matches!(*expr("tag`\\unicode`"), Expr::TaggedTpl(..)));
        assert_eq!(
            errors("`\\unicode`"),
            vec!["invalid escape sequence in template literal"]
        );
    }

    #[test]
    fn directives() {
        match script("'use strict'; 'other'; a;").as_slice() {
            [Stmt::Expr(first), Stmt::Expr(second), Stmt::Expr(third)] => {
                assert_eq!(first.directive.as_deref(), Some("use strict"));
                assert_eq!(second.directive.as_deref(), Some("other"));
                assert_eq!(third.directive, None);
            }
            other => panic!("{:?}", other),
        }
        assert_eq!(
            errors("'use strict'; with (a) {}"),
            vec!["'with' is not allowed in strict mode"]
        );
        assert!(errors("'use\\x20strict'; with (a) {}").is_empty());
        assert!(errors("('use strict'); with (a) {}").is_empty());
    }

    #[test]
    fn strict_mode_is_scoped_to_functions() {
        assert!(errors("function f() { 'use strict'; } with (a) {}").is_empty());
        assert_eq!(
            errors("function f() { 'use strict'; delete x; }"),
            vec!["'delete' of a variable is not allowed in strict mode"]
        );
        assert_eq!(
            errors("'use strict'; 010;"),
            vec!["octal literals are not allowed in strict mode"]
        );
    }

    #[test]
    fn const_without_init() {
        assert_eq!(
            errors("const a;"),
            vec!["missing initializer in const declaration"]
        );
        assert_eq!(
            errors("const a = 1, b;"),
            vec!["missing initializer in const declaration"]
        );
        assert_eq!(
            errors("var [a];"),
            vec!["missing initializer in destructuring declaration"]
        );
        assert!(errors("for (const a of b) {}").is_empty());
        assert!(errors("var a, b; let c;").is_empty());
    }

    #[test]
    fn break_and_continue() {
        assert!(errors("while (a) { break; continue; }").is_empty());
        assert!(errors("a: { break a; }").is_empty());
        assert!(errors("switch (a) { case 1: break; }").is_empty());
        assert_eq!(errors("break;"), vec!["'break' not within a loop or switch"]);
        assert_eq!(
            errors("switch (a) { case 1: continue; }"),
            vec!["'continue' not within a loop"]
        );
        assert_eq!(
            errors("while (a) { break b; }"),
            vec!["label 'b' not found"]
        );
        assert_eq!(
            errors("a: a: ;"),
            vec!["label 'a' is already defined"]
        );
        assert_eq!(
            errors("while (a) { function f() { break; } }"),
            vec!["'break' not within a loop or switch"]
        );
    }

    #[test]
    fn return_outside_function() {
        assert_eq!(errors("return 1;"), vec!["'return' not in a function"]);
        assert!(errors("function f() { return; }").is_empty());
        assert!(errors("() => { return; }").is_empty());

        let syntax = Syntax::Es(EsConfig {
            allow_return_outside_function: true,
            ..Default::default()
        });
        let mut p = Parser::new(syntax, StringInput::new("return 1;", BytePos(1)));
        assert!(p.parse_program().is_ok());
        assert!(p.take_errors().is_empty());
    }

    #[test]
    fn restricted_productions() {
        assert_eq!(
            errors("throw\nnew Error();"),
            vec!["line break is not allowed after 'throw'"]
        );
        // `return` followed by a line break returns nothing.
        match script("function f() { return\n1 }").pop() {
            Some(Stmt::Decl(Decl::Fn(FnDecl { function, .. }))) => {
                assert_eq!(function.body.stmts.len(), 2);
            }
            other => panic!("{:?}", other),
        }
        assert_eq!(script("a\n++b").len(), 2);
    }

    #[test]
    fn classes() {
        assert!(errors(
            "class A extends B { constructor() { super(); } static f() {} get x() {} set x(v) \
             {} *g() {} }"
        )
        .is_empty());
        assert_eq!(
            errors("class A { constructor() {} constructor() {} }"),
            vec!["duplicate constructor in class"]
        );
        assert_eq!(
            errors("class A { get constructor() {} }"),
            vec!["constructor cannot be a generator, getter or setter"]
        );
        assert_eq!(
            errors("class A { static prototype() {} }"),
            vec!["static method cannot be named 'prototype'"]
        );
    }

    #[test]
    fn generators() {
        assert!(errors("function* g() { yield; yield 1; yield* g(); }").is_empty());
        // `yield` is an identifier outside generators in sloppy code.
        assert!(errors("var yield = 1;").is_empty());
        assert_eq!(
            errors("'use strict'; var yield;"),
            vec!["'yield' is a reserved word"]
        );
    }

    #[test]
    fn yield_before_line_break() {
        let body = match script("function* g() { yield\nfoo }").pop() {
            Some(Stmt::Decl(Decl::Fn(f))) => f.function.body.stmts,
            other => panic!("{:?}", other),
        };
        match body.as_slice() {
            [Stmt::Expr(first), Stmt::Expr(second)] => {
                assert!(matches!(
                    *first.expr,
                    Expr::Yield(YieldExpr {
                        arg: None,
                        delegate: false,
                        ..
                    })
                ));
                assert!(matches!(*second.expr, Expr::Ident(..)));
            }
            other => panic!("{:?}", other),
        }

        assert!(!errors("function* g() { yield\n* 2 }").is_empty());
    }

    #[test]
    fn declarations_in_statement_position() {
        assert_eq!(
            errors("if (a) let b = 1;"),
            vec!["declaration is not allowed in a single-statement context"]
        );
        assert_eq!(
            errors("while (a) class B {}"),
            vec!["declaration is not allowed in a single-statement context"]
        );
        // `let` is an identifier in sloppy code.
        assert!(errors("let = 1; let\n(a);").is_empty());
    }

    #[test]
    fn for_statements() {
        assert!(errors(
            "for (;;) {} for (var i = 0; i < 1; i++) {} for (a in b) {} for (let [a, b] of c) {} \
             for (a.b of c) {} for ([a, b] of c) {}"
        )
        .is_empty());
        assert_eq!(
            errors("for (var a, b of c) {}"),
            vec!["only one binding is allowed in the head of a for-in/for-of loop"]
        );
        assert_eq!(
            errors("for (let a = 1 of c) {}"),
            vec!["for-in/for-of loop variable declaration may not have an initializer"]
        );
        // The head is read as for-in and ends at `{}`.
        let errs = errors("for (var i = 0 in {};;) {}");
        assert_eq!(
            &errs[..2],
            &[
                "for-in/for-of loop variable declaration may not have an initializer",
                "')' expected",
            ]
        );
    }

    #[test]
    fn try_statements() {
        assert!(errors("try {} catch (e) {} try {} finally {} try {} catch ({a}) {} finally {}")
            .is_empty());
        assert_eq!(errors("try {}"), vec!["'catch' or 'finally' expected"]);
    }

    #[test]
    fn switch_with_two_defaults() {
        assert_eq!(
            errors("switch (a) { default: case 1: default: }"),
            vec!["more than one 'default' clause in switch statement"]
        );
    }

    #[test]
    fn eval_and_arguments_in_strict_code() {
        assert!(errors("var eval; function arguments() {}").is_empty());
        assert_eq!(
            errors("'use strict'; var eval;"),
            vec!["'eval' cannot be a binding in strict mode"]
        );
        assert_eq!(
            errors("'use strict'; arguments = 1;"),
            vec!["invalid assignment left-hand side"]
        );
    }

    #[test]
    fn let_as_lexical_name() {
        assert_eq!(
            errors("let let = 1;"),
            vec!["'let' is disallowed as a lexically bound name"]
        );
    }

    #[test]
    fn import_export_outside_modules() {
        assert_eq!(
            errors("import a from 'a';"),
            vec!["'import' and 'export' may only appear in a module"]
        );
        assert_eq!(
            module_errors("{ export var a; }"),
            vec!["'import' and 'export' may only appear at the top level"]
        );
    }

    #[test]
    fn module_items() {
        assert!(module_errors(
            "import a from 'a'; import * as b from 'b'; import c, { d as e, f } from 'c'; \
             import 'd'; export var g = 1; export function h() {} export class I {} export { a \
             as default, b }; export { x as y } from 'x'; export * from 'y'; export default a + b;"
        )
        .is_empty());
        assert!(module_errors("export default function () {}").is_empty());
        assert!(module_errors("export default class {}").is_empty());
        assert!(module_errors("export { if } from 'x';").is_empty());
    }

    #[test]
    fn recovers_after_statement_errors() {
        assert_eq!(
            errors("a b; c d;"),
            vec!["';' expected", "';' expected"]
        );
        assert_eq!(
            errors("function f() { a b } c d;"),
            vec!["';' expected", "';' expected"]
        );
    }

    #[test]
    fn unexpected_eof_aborts() {
        let (res, _) = parse("function f() {", false);
        assert_eq!(
            res.map(|_| ()).map_err(|e| e.into_kind()),
            Err(SyntaxError::Eof)
        );
        let (res, _) = parse("foo(", false);
        assert!(res.is_err());
    }

    #[test]
    fn lexer_errors_are_reported() {
        assert_eq!(errors("'abc\n;"), vec!["unterminated string literal"]);
        assert_eq!(errors("a = 1;\n@;\nb = 2;"), vec!["unexpected character '@'"]);
    }
}
