//! ESTree serialization.
//!
//! Each node is written as a map whose first entry is `"type"`, followed by
//! the fields of that node kind in a fixed order. Absent optional children
//! are written as `null`.

use crate::*;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::{io, slice};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Two-space indentation, one value per line.
    Pretty,
    Compact,
}

pub fn to_string(program: &Program, format: Format) -> serde_json::Result<String> {
    match format {
        Format::Pretty => serde_json::to_string_pretty(program),
        Format::Compact => serde_json::to_string(program),
    }
}

pub fn to_writer<W: io::Write>(w: W, program: &Program, format: Format) -> serde_json::Result<()> {
    match format {
        Format::Pretty => serde_json::to_writer_pretty(w, program),
        Format::Compact => serde_json::to_writer(w, program),
    }
}

/// Writes one node: the `type` tag, then every `key => value` in order.
macro_rules! node {
    ($s:expr, $ty:expr $(, $key:literal => $value:expr)* $(,)?) => {{
        let mut map = $s.serialize_map(None)?;
        map.serialize_entry("type", $ty)?;
        $(map.serialize_entry($key, $value)?;)*
        map.end()
    }};
}

const NULL: &() = &();
const NO_SPECIFIERS: &[ExportSpecifier] = &[];

impl Serialize for Program {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match *self {
            Program::Module(ref m) => node!(s, "Program", "body" => &m.body),
            Program::Script(ref script) => node!(s, "Program", "body" => &script.body),
        }
    }
}

impl Serialize for ModuleItem {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match *self {
            ModuleItem::ModuleDecl(ref d) => d.serialize(s),
            ModuleItem::Stmt(ref stmt) => stmt.serialize(s),
        }
    }
}

// _____________________________________________________________________________
// Statements
//

impl Serialize for Stmt {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match *self {
            Stmt::Block(ref b) => b.serialize(s),
            Stmt::Empty(..) => node!(s, "EmptyStatement"),
            Stmt::Debugger(..) => node!(s, "DebuggerStatement"),
            Stmt::With(ref w) => node!(s, "WithStatement", "object" => &w.obj, "body" => &w.body),
            Stmt::Return(ref r) => node!(s, "ReturnStatement", "argument" => &r.arg),
            Stmt::Labeled(ref l) => {
                node!(s, "LabeledStatement", "label" => &l.label, "body" => &l.body)
            }
            Stmt::Break(ref b) => node!(s, "BreakStatement", "label" => &b.label),
            Stmt::Continue(ref c) => node!(s, "ContinueStatement", "label" => &c.label),
            Stmt::If(ref i) => node!(
                s,
                "IfStatement",
                "test" => &i.test,
                "consequent" => &i.cons,
                "alternate" => &i.alt,
            ),
            Stmt::Switch(ref sw) => node!(
                s,
                "SwitchStatement",
                "discriminant" => &sw.discriminant,
                "cases" => &sw.cases,
            ),
            Stmt::Throw(ref t) => node!(s, "ThrowStatement", "argument" => &t.arg),
            Stmt::Try(ref t) => node!(
                s,
                "TryStatement",
                "block" => &t.block,
                "handler" => &t.handler,
                "finalizer" => &t.finalizer,
            ),
            Stmt::While(ref w) => node!(s, "WhileStatement", "body" => &w.body, "test" => &w.test),
            Stmt::DoWhile(ref w) => {
                node!(s, "DoWhileStatement", "body" => &w.body, "test" => &w.test)
            }
            Stmt::For(ref f) => node!(
                s,
                "ForStatement",
                "init" => &f.init,
                "test" => &f.test,
                "update" => &f.update,
                "body" => &f.body,
            ),
            Stmt::ForIn(ref f) => node!(
                s,
                "ForInStatement",
                "left" => &f.left,
                "right" => &f.right,
                "body" => &f.body,
            ),
            Stmt::ForOf(ref f) => node!(
                s,
                "ForOfStatement",
                "left" => &f.left,
                "right" => &f.right,
                "body" => &f.body,
            ),
            Stmt::Decl(ref d) => d.serialize(s),
            Stmt::Expr(ref e) => node!(
                s,
                "ExpressionStatement",
                "expression" => &e.expr,
                "directive" => &e.directive.as_deref(),
            ),
        }
    }
}

impl Serialize for BlockStmt {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        node!(s, "BlockStatement", "body" => &self.stmts)
    }
}

impl Serialize for SwitchCase {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        node!(s, "SwitchCase", "test" => &self.test, "consequent" => &self.cons)
    }
}

impl Serialize for CatchClause {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        node!(s, "CatchClause", "param" => &self.param, "body" => &self.body)
    }
}

impl Serialize for VarDeclOrExpr {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match *self {
            VarDeclOrExpr::VarDecl(ref v) => v.serialize(s),
            VarDeclOrExpr::Expr(ref e) => e.serialize(s),
        }
    }
}

impl Serialize for VarDeclOrPat {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match *self {
            VarDeclOrPat::VarDecl(ref v) => v.serialize(s),
            VarDeclOrPat::Pat(ref p) => p.serialize(s),
        }
    }
}

impl Serialize for Decl {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match *self {
            Decl::Fn(ref f) => FunctionNode::decl(Some(&f.ident), &f.function).serialize(s),
            Decl::Class(ref c) => ClassNode::decl(Some(&c.ident), &c.class).serialize(s),
            Decl::Var(ref v) => v.serialize(s),
        }
    }
}

impl Serialize for VarDecl {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        node!(
            s,
            "VariableDeclaration",
            "kind" => self.kind.as_str(),
            "declarations" => &self.decls,
        )
    }
}

impl Serialize for VarDeclarator {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        node!(s, "VariableDeclarator", "init" => &self.init, "id" => &self.name)
    }
}

// _____________________________________________________________________________
// Functions and classes
//

/// `FunctionDeclaration` or `FunctionExpression`.
struct FunctionNode<'a> {
    ty: &'static str,
    id: Option<&'a Ident>,
    params: &'a [Pat],
    body: &'a BlockStmt,
    generator: bool,
}

impl<'a> FunctionNode<'a> {
    fn decl(id: Option<&'a Ident>, f: &'a Function) -> Self {
        FunctionNode::new("FunctionDeclaration", id, f)
    }

    fn expr(id: Option<&'a Ident>, f: &'a Function) -> Self {
        FunctionNode::new("FunctionExpression", id, f)
    }

    fn new(ty: &'static str, id: Option<&'a Ident>, f: &'a Function) -> Self {
        FunctionNode {
            ty,
            id,
            params: &f.params,
            body: &f.body,
            generator: f.is_generator,
        }
    }

    /// Getters and setters keep their parameters and body outside of a
    /// [Function].
    fn accessor(params: &'a [Pat], body: &'a BlockStmt) -> Self {
        FunctionNode {
            ty: "FunctionExpression",
            id: None,
            params,
            body,
            generator: false,
        }
    }
}

impl Serialize for FunctionNode<'_> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        node!(
            s,
            self.ty,
            "id" => &self.id,
            "params" => self.params,
            "body" => self.body,
            "returnType" => NULL,
            "generator" => &self.generator,
        )
    }
}

/// `ClassDeclaration` or `ClassExpression`.
struct ClassNode<'a> {
    ty: &'static str,
    id: Option<&'a Ident>,
    class: &'a Class,
}

impl<'a> ClassNode<'a> {
    fn decl(id: Option<&'a Ident>, class: &'a Class) -> Self {
        ClassNode {
            ty: "ClassDeclaration",
            id,
            class,
        }
    }

    fn expr(id: Option<&'a Ident>, class: &'a Class) -> Self {
        ClassNode {
            ty: "ClassExpression",
            id,
            class,
        }
    }
}

impl Serialize for ClassNode<'_> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        node!(
            s,
            self.ty,
            "id" => &self.id,
            "superClass" => &self.class.super_class,
            "body" => &ClassBody(&self.class.body),
        )
    }
}

struct ClassBody<'a>(&'a [ClassMember]);

impl Serialize for ClassBody<'_> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        node!(s, "ClassBody", "body" => self.0)
    }
}

impl Serialize for ClassMember {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let (key, function, kind, is_static) = match *self {
            ClassMember::Constructor(ref c) => (&c.key, &c.function, "constructor", false),
            ClassMember::Method(ref m) => {
                let kind = match m.kind {
                    MethodKind::Method => "method",
                    MethodKind::Getter => "get",
                    MethodKind::Setter => "set",
                };
                (&m.key, &m.function, kind, m.is_static)
            }
        };

        node!(
            s,
            "MethodDefinition",
            "key" => key,
            "value" => &FunctionNode::expr(None, function),
            "kind" => kind,
            "computed" => &key.is_computed(),
            "static" => &is_static,
        )
    }
}

// _____________________________________________________________________________
// Expressions
//

impl Serialize for Expr {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match *self {
            Expr::This(..) => node!(s, "ThisExpression"),
            Expr::Array(ref a) => node!(s, "ArrayExpression", "elements" => &a.elems),
            Expr::Object(ref o) => node!(s, "ObjectExpression", "properties" => &o.props),
            Expr::Fn(ref f) => FunctionNode::expr(f.ident.as_ref(), &f.function).serialize(s),
            Expr::Unary(ref u) => node!(
                s,
                "UnaryExpression",
                "operator" => u.op.as_str(),
                "argument" => &u.arg,
                "prefix" => &true,
            ),
            Expr::Update(ref u) => node!(
                s,
                "UpdateExpression",
                "operator" => u.op.as_str(),
                "argument" => &u.arg,
                "prefix" => &u.prefix,
            ),
            Expr::Bin(ref b) => node!(
                s,
                if b.op.is_logical() {
                    "LogicalExpression"
                } else {
                    "BinaryExpression"
                },
                "left" => &b.left,
                "right" => &b.right,
                "operator" => b.op.as_str(),
            ),
            Expr::Assign(ref a) => node!(
                s,
                "AssignmentExpression",
                "operator" => a.op.as_str(),
                "left" => &a.left,
                "right" => &a.right,
            ),
            Expr::Member(ref m) => node!(
                s,
                "MemberExpression",
                "object" => &m.obj,
                "property" => &m.prop,
                "computed" => &m.computed,
            ),
            Expr::Cond(ref c) => node!(
                s,
                "ConditionalExpression",
                "test" => &c.test,
                "alternate" => &c.alt,
                "consequent" => &c.cons,
            ),
            Expr::Call(ref c) => {
                node!(s, "CallExpression", "callee" => &c.callee, "arguments" => &c.args)
            }
            Expr::New(ref n) => node!(
                s,
                "NewExpression",
                "callee" => &n.callee,
                "arguments" => n.args.as_deref().unwrap_or(&[]),
            ),
            Expr::Seq(ref seq) => node!(s, "SequenceExpression", "expressions" => &seq.exprs),
            Expr::Ident(ref i) => i.serialize(s),
            Expr::Lit(ref l) => l.serialize(s),
            Expr::Tpl(ref t) => t.serialize(s),
            Expr::TaggedTpl(ref t) => {
                node!(s, "TaggedTemplateExpression", "tag" => &t.tag, "quasi" => &t.tpl)
            }
            Expr::Arrow(ref a) => node!(
                s,
                "ArrowFunctionExpression",
                "id" => NULL,
                "params" => &a.params,
                "body" => &a.body,
                "returnType" => NULL,
                "expression" => &matches!(a.body, BlockStmtOrExpr::Expr(..)),
            ),
            Expr::Class(ref c) => ClassNode::expr(c.ident.as_ref(), &c.class).serialize(s),
            Expr::Yield(ref y) => node!(
                s,
                "YieldExpression",
                "argument" => &y.arg,
                "delegate" => &y.delegate,
            ),
            Expr::MetaProp(ref m) => {
                node!(s, "MetaProperty", "meta" => &m.meta, "property" => &m.prop)
            }
            Expr::Paren(ref p) => p.expr.serialize(s),
            Expr::Invalid(..) => node!(s, "Invalid"),
        }
    }
}

impl Serialize for ExprOrSpread {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self.spread {
            Some(..) => node!(s, "SpreadElement", "argument" => &self.expr),
            None => self.expr.serialize(s),
        }
    }
}

impl Serialize for ExprOrSuper {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match *self {
            ExprOrSuper::Super(..) => node!(s, "Super"),
            ExprOrSuper::Expr(ref e) => e.serialize(s),
        }
    }
}

impl Serialize for BlockStmtOrExpr {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match *self {
            BlockStmtOrExpr::BlockStmt(ref b) => b.serialize(s),
            BlockStmtOrExpr::Expr(ref e) => e.serialize(s),
        }
    }
}

impl Serialize for PatOrExpr {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match *self {
            PatOrExpr::Pat(ref p) => p.serialize(s),
            PatOrExpr::Expr(ref e) => e.serialize(s),
        }
    }
}

impl Serialize for Tpl {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        node!(
            s,
            "TemplateLiteral",
            "quasis" => &self.quasis,
            "expressions" => &self.exprs,
        )
    }
}

impl Serialize for TplElement {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        node!(
            s,
            "TemplateElement",
            "tail" => &self.tail,
            "cooked" => &self.cooked.as_ref().map(|c| &*c.value),
            "raw" => &*self.raw.value,
        )
    }
}

impl Serialize for Ident {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        node!(s, "Identifier", "name" => &*self.sym, "typeAnnotation" => NULL)
    }
}

impl Serialize for Lit {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match *self {
            Lit::Str(ref v) => v.serialize(s),
            Lit::Bool(ref b) => node!(s, "BooleanLiteral", "value" => &b.value),
            Lit::Null(..) => node!(s, "NullLiteral"),
            Lit::Num(ref n) => n.serialize(s),
            Lit::Regex(ref r) => node!(
                s,
                "RegExpLiteral",
                "pattern" => &*r.exp,
                "flags" => &*r.flags,
            ),
        }
    }
}

impl Serialize for Str {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        node!(s, "StringLiteral", "value" => &*self.value)
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        node!(s, "NumericLiteral", "value" => &NumValue(self.value))
    }
}

/// Writes integral values without a fractional part. Values JSON can't hold
/// are written as strings so they stay distinct from `null`.
struct NumValue(f64);

impl Serialize for NumValue {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

        let v = self.0;
        if v.is_nan() {
            return s.serialize_str("NaN");
        }
        if v.is_infinite() {
            return s.serialize_str(if v > 0.0 { "Infinity" } else { "-Infinity" });
        }
        if v.fract() == 0.0 && v.abs() <= MAX_SAFE_INTEGER {
            s.serialize_i64(v as i64)
        } else {
            s.serialize_f64(v)
        }
    }
}

// _____________________________________________________________________________
// Object literals and patterns
//

/// An ESTree `Property`, shared by object literals and object patterns.
struct PropertyNode<K, V> {
    key: K,
    value: V,
    kind: &'static str,
    computed: bool,
    method: bool,
    shorthand: bool,
}

impl<K, V> PropertyNode<K, V> {
    fn init(key: K, value: V, computed: bool) -> Self {
        PropertyNode {
            key,
            value,
            kind: "init",
            computed,
            method: false,
            shorthand: false,
        }
    }

    fn shorthand(key: K, value: V) -> Self {
        PropertyNode {
            shorthand: true,
            ..PropertyNode::init(key, value, false)
        }
    }
}

impl<K: Serialize, V: Serialize> Serialize for PropertyNode<K, V> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        node!(
            s,
            "Property",
            "key" => &self.key,
            "value" => &self.value,
            "kind" => self.kind,
            "computed" => &self.computed,
            "method" => &self.method,
            "shorthand" => &self.shorthand,
        )
    }
}

/// `AssignmentPattern` built from a shorthand `{ a = 1 }`.
struct AssignmentPatternNode<'a, L> {
    left: &'a L,
    right: &'a Expr,
}

impl<L: Serialize> Serialize for AssignmentPatternNode<'_, L> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        node!(s, "AssignmentPattern", "left" => self.left, "right" => self.right)
    }
}

impl Serialize for Prop {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match *self {
            Prop::Shorthand(ref i) => PropertyNode::shorthand(i, i).serialize(s),
            Prop::KeyValue(ref p) => {
                PropertyNode::init(&p.key, &p.value, p.key.is_computed()).serialize(s)
            }
            Prop::Assign(ref p) => PropertyNode::shorthand(
                &p.key,
                AssignmentPatternNode {
                    left: &p.key,
                    right: &p.value,
                },
            )
            .serialize(s),
            Prop::Getter(ref p) => PropertyNode {
                kind: "get",
                ..PropertyNode::init(
                    &p.key,
                    FunctionNode::accessor(&[], &p.body),
                    p.key.is_computed(),
                )
            }
            .serialize(s),
            Prop::Setter(ref p) => PropertyNode {
                kind: "set",
                ..PropertyNode::init(
                    &p.key,
                    FunctionNode::accessor(slice::from_ref(&p.param), &p.body),
                    p.key.is_computed(),
                )
            }
            .serialize(s),
            Prop::Method(ref p) => PropertyNode {
                method: true,
                ..PropertyNode::init(
                    &p.key,
                    FunctionNode::expr(None, &p.function),
                    p.key.is_computed(),
                )
            }
            .serialize(s),
        }
    }
}

impl Serialize for PropName {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match *self {
            PropName::Ident(ref i) => i.serialize(s),
            PropName::Str(ref v) => v.serialize(s),
            PropName::Num(ref n) => n.serialize(s),
            PropName::Computed(ref c) => c.expr.serialize(s),
        }
    }
}

impl Serialize for Pat {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match *self {
            Pat::Ident(ref i) => i.serialize(s),
            Pat::Array(ref a) => node!(
                s,
                "ArrayPattern",
                "elements" => &a.elems,
                "typeAnnotation" => NULL,
            ),
            Pat::Rest(ref r) => node!(s, "RestElement", "argument" => &r.arg),
            Pat::Object(ref o) => node!(
                s,
                "ObjectPattern",
                "properties" => &o.props,
                "typeAnnotation" => NULL,
            ),
            Pat::Assign(ref a) => {
                node!(s, "AssignmentPattern", "left" => &a.left, "right" => &a.right)
            }
            Pat::Invalid(..) => node!(s, "Invalid"),
            Pat::Expr(ref e) => e.serialize(s),
        }
    }
}

impl Serialize for ObjectPatProp {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match *self {
            ObjectPatProp::KeyValue(ref p) => {
                PropertyNode::init(&p.key, &p.value, p.key.is_computed()).serialize(s)
            }
            ObjectPatProp::Assign(ref p) => match p.value {
                Some(ref value) => PropertyNode::shorthand(
                    &p.key,
                    AssignmentPatternNode {
                        left: &p.key,
                        right: value,
                    },
                )
                .serialize(s),
                None => PropertyNode::shorthand(&p.key, &p.key).serialize(s),
            },
        }
    }
}

// _____________________________________________________________________________
// Modules
//

impl Serialize for ModuleDecl {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match *self {
            ModuleDecl::Import(ref i) => node!(
                s,
                "ImportDeclaration",
                "specifiers" => &i.specifiers,
                "source" => &i.src,
                "importKind" => "value",
            ),
            ModuleDecl::ExportDecl(ref e) => node!(
                s,
                "ExportNamedDeclaration",
                "declaration" => &e.decl,
                "specifiers" => NO_SPECIFIERS,
                "source" => NULL,
                "exportKind" => "value",
            ),
            ModuleDecl::ExportNamed(ref e) => node!(
                s,
                "ExportNamedDeclaration",
                "declaration" => NULL,
                "specifiers" => &e.specifiers,
                "source" => &e.src,
                "exportKind" => "value",
            ),
            ModuleDecl::ExportDefaultDecl(ref e) => match e.decl {
                DefaultDecl::Fn(ref f) => node!(
                    s,
                    "ExportDefaultDeclaration",
                    "declaration" => &FunctionNode::decl(f.ident.as_ref(), &f.function),
                ),
                DefaultDecl::Class(ref c) => node!(
                    s,
                    "ExportDefaultDeclaration",
                    "declaration" => &ClassNode::decl(c.ident.as_ref(), &c.class),
                ),
            },
            ModuleDecl::ExportDefaultExpr(ref e) => {
                node!(s, "ExportDefaultDeclaration", "declaration" => &e.expr)
            }
            ModuleDecl::ExportAll(ref e) => node!(
                s,
                "ExportAllDeclaration",
                "source" => &e.src,
                "exportKind" => "value",
            ),
        }
    }
}

impl Serialize for ImportSpecifier {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match *self {
            ImportSpecifier::Named(ref n) => node!(
                s,
                "ImportSpecifier",
                "imported" => n.imported.as_ref().unwrap_or(&n.local),
                "local" => &n.local,
            ),
            ImportSpecifier::Default(ref d) => {
                node!(s, "ImportDefaultSpecifier", "local" => &d.local)
            }
            ImportSpecifier::Namespace(ref n) => {
                node!(s, "ImportNamespaceSpecifier", "local" => &n.local)
            }
        }
    }
}

impl Serialize for ExportSpecifier {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        node!(
            s,
            "ExportSpecifier",
            "exported" => self.exported.as_ref().unwrap_or(&self.orig),
            "local" => &self.orig,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use global_common::{BytePos, Span, DUMMY_SP};
    use pretty_assertions::assert_eq;

    fn ident(sym: &str) -> Ident {
        Ident::new(sym.into(), DUMMY_SP)
    }

    fn num(value: f64) -> Box<Expr> {
        Box::new(Expr::Lit(Lit::Num(Number {
            span: DUMMY_SP,
            value,
        })))
    }

    fn script(stmts: Vec<Stmt>) -> Program {
        Program::Script(Script {
            span: DUMMY_SP,
            body: stmts,
        })
    }

    fn expr_stmt(expr: Box<Expr>) -> Stmt {
        Stmt::Expr(ExprStmt {
            span: DUMMY_SP,
            expr,
            directive: None,
        })
    }

    #[test]
    fn new_target_in_function() {
        let new_target = Expr::MetaProp(MetaPropExpr {
            meta: Ident::new("new".into(), Span::new(BytePos(27), BytePos(30))),
            prop: ident("target"),
        });
        let program = script(vec![Stmt::Decl(Decl::Fn(FnDecl {
            ident: ident("foo"),
            function: Function {
                span: DUMMY_SP,
                params: vec![],
                body: BlockStmt {
                    span: DUMMY_SP,
                    stmts: vec![Stmt::Return(ReturnStmt {
                        span: DUMMY_SP,
                        arg: Some(Box::new(new_target)),
                    })],
                },
                is_generator: false,
            },
        }))]);

        let expected = r#"{
  "type": "Program",
  "body": [
    {
      "type": "FunctionDeclaration",
      "id": {
        "type": "Identifier",
        "name": "foo",
        "typeAnnotation": null
      },
      "params": [],
      "body": {
        "type": "BlockStatement",
        "body": [
          {
            "type": "ReturnStatement",
            "argument": {
              "type": "MetaProperty",
              "meta": {
                "type": "Identifier",
                "name": "new",
                "typeAnnotation": null
              },
              "property": {
                "type": "Identifier",
                "name": "target",
                "typeAnnotation": null
              }
            }
          }
        ]
      },
      "returnType": null,
      "generator": false
    }
  ]
}"#;

        assert_eq!(to_string(&program, Format::Pretty).unwrap(), expected);
    }

    #[test]
    fn numbers() {
        let program = script(vec![
            expr_stmt(num(3.0)),
            expr_stmt(num(0.5)),
            expr_stmt(num(-0.0)),
        ]);

        assert_eq!(
            to_string(&program, Format::Compact).unwrap(),
            "{\"type\":\"Program\",\"body\":[\
             {\"type\":\"ExpressionStatement\",\"expression\":{\"type\":\"NumericLiteral\",\"value\":3},\"directive\":null},\
             {\"type\":\"ExpressionStatement\",\"expression\":{\"type\":\"NumericLiteral\",\"value\":0.5},\"directive\":null},\
             {\"type\":\"ExpressionStatement\",\"expression\":{\"type\":\"NumericLiteral\",\"value\":0},\"directive\":null}]}"
        );
    }

    #[test]
    fn overflowing_number_is_not_null() {
        let program = script(vec![expr_stmt(num(f64::INFINITY))]);

        let json: serde_json::Value =
            serde_json::from_str(&to_string(&program, Format::Compact).unwrap()).unwrap();
        assert_eq!(json["body"][0]["expression"]["value"], "Infinity");
    }

    #[test]
    fn export_declaration_has_empty_specifiers() {
        let program = Program::Module(Module {
            span: DUMMY_SP,
            body: vec![ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(ExportDecl {
                span: DUMMY_SP,
                decl: Decl::Var(VarDecl {
                    span: DUMMY_SP,
                    kind: VarDeclKind::Var,
                    decls: vec![VarDeclarator {
                        span: DUMMY_SP,
                        name: Pat::Ident(ident("a")),
                        init: None,
                    }],
                }),
            }))],
        });

        let json: serde_json::Value =
            serde_json::from_str(&to_string(&program, Format::Compact).unwrap()).unwrap();
        let decl = &json["body"][0];
        assert_eq!(decl["type"], "ExportNamedDeclaration");
        assert_eq!(decl["specifiers"], serde_json::json!([]));
        assert_eq!(decl["source"], serde_json::Value::Null);
        assert_eq!(decl["declaration"]["declarations"][0]["id"]["name"], "a");
    }

    #[test]
    fn logical_and_binary() {
        let bin = |op, left, right| {
            Box::new(Expr::Bin(BinExpr {
                span: DUMMY_SP,
                op,
                left,
                right,
            }))
        };
        let program = script(vec![expr_stmt(bin(
            BinaryOp::LogicalOr,
            bin(BinaryOp::Exp, num(2.0), num(3.0)),
            num(1.0),
        ))]);

        let json: serde_json::Value =
            serde_json::from_str(&to_string(&program, Format::Compact).unwrap()).unwrap();
        let expr = &json["body"][0]["expression"];
        assert_eq!(expr["type"], "LogicalExpression");
        assert_eq!(expr["operator"], "||");
        assert_eq!(expr["left"]["type"], "BinaryExpression");
        assert_eq!(expr["left"]["operator"], "**");
    }

    #[test]
    fn import_specifier_defaults_imported_to_local() {
        let program = Program::Module(Module {
            span: DUMMY_SP,
            body: vec![ModuleItem::ModuleDecl(ModuleDecl::Import(ImportDecl {
                span: DUMMY_SP,
                specifiers: vec![ImportSpecifier::Named(ImportNamedSpecifier {
                    span: DUMMY_SP,
                    local: ident("foo"),
                    imported: None,
                })],
                src: Str {
                    span: DUMMY_SP,
                    value: "foo.js".into(),
                    has_escape: false,
                },
            }))],
        });

        let json: serde_json::Value =
            serde_json::from_str(&to_string(&program, Format::Pretty).unwrap()).unwrap();
        let decl = &json["body"][0];
        assert_eq!(decl["type"], "ImportDeclaration");
        assert_eq!(decl["importKind"], "value");
        assert_eq!(decl["specifiers"][0]["imported"]["name"], "foo");
        assert_eq!(decl["specifiers"][0]["local"]["name"], "foo");
        assert_eq!(decl["source"]["value"], "foo.js");
    }

    #[test]
    fn field_order_with_nulls() {
        let program = script(vec![Stmt::If(IfStmt {
            span: DUMMY_SP,
            test: Box::new(Expr::Ident(ident("a"))),
            cons: Box::new(Stmt::Empty(EmptyStmt { span: DUMMY_SP })),
            alt: None,
        })]);

        assert_eq!(
            to_string(&program, Format::Compact).unwrap(),
            "{\"type\":\"Program\",\"body\":[{\"type\":\"IfStatement\",\"test\":{\"type\":\
             \"Identifier\",\"name\":\"a\",\"typeAnnotation\":null},\"consequent\":{\"type\":\
             \"EmptyStatement\"},\"alternate\":null}]}"
        );
    }
}
