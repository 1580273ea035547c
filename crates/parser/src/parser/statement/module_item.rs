use super::*;
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

impl IsDirective for ModuleItem {
    fn as_stmt_mut(&mut self) -> Option<&mut Stmt> {
        match *self {
            ModuleItem::Stmt(ref mut s) => Some(s),
            ModuleItem::ModuleDecl(..) => None,
        }
    }
}

impl<I: Tokens> StmtLikeParser<ModuleItem> for Parser<I> {
    fn handle_import_export(&mut self, top_level: bool) -> PResult<ModuleItem> {
        if !top_level {
            return StmtLikeParser::<Stmt>::handle_import_export(self, top_level)
                .map(ModuleItem::Stmt);
        }

        self.parse_module_decl().map(ModuleItem::ModuleDecl)
    }
}

impl<I: Tokens> Parser<I> {
    pub(super) fn parse_module_decl(&mut self) -> PResult<ModuleDecl> {
        if is!(self, "import") {
            self.parse_import()
        } else {
            self.parse_export()
        }
    }

    fn parse_import(&mut self) -> PResult<ModuleDecl> {
        trace_cur!(self, parse_import);

        let start = self.input.cur_pos();
        self.assert_and_bump(&tok!("import"));

        // Handle import 'mod.js'
        if is!(self, Str) {
            let src = self.parse_str_lit()?;
            expect!(self, ';');

            return Ok(ModuleDecl::Import(ImportDecl {
                span: span!(self, start),
                specifiers: vec![],
                src,
            }));
        }

        let mut specifiers = vec![];

        let mut needs_more = true;
        if is!(self, IdentName) {
            let local = self.parse_imported_binding()?;
            specifiers.push(ImportSpecifier::Default(ImportDefaultSpecifier {
                span: local.span,
                local,
            }));
            needs_more = eat!(self, ',');
        }

        if needs_more {
            if is!(self, '*') {
                specifiers.push(self.parse_namespace_import()?);
            } else if eat!(self, '{') {
                while !eof!(self) && !is!(self, '}') {
                    specifiers.push(self.parse_import_specifier()?);
                    if !is!(self, '}') {
                        expect!(self, ',');
                    }
                }
                expect!(self, '}');
            } else {
                unexpected!(self, "{")
            }
        }

        self.check_duplicate_imports(&specifiers);

        let src = self.parse_from_clause_and_semi()?;

        Ok(ModuleDecl::Import(ImportDecl {
            span: span!(self, start),
            specifiers,
            src,
        }))
    }

    /// `* as ns`
    fn parse_namespace_import(&mut self) -> PResult<ImportSpecifier> {
        let start = self.input.cur_pos();
        self.assert_and_bump(&tok!('*'));
        expect!(self, "as");

        let ctx = self.ctx();
        let is_valid = match *cur!(self, true) {
            Token::Word(ref w) => !ctx.is_reserved(w),
            _ => false,
        };

        let local = if is_valid {
            self.parse_imported_binding()?
        } else {
            // Points at the start of the offending token.
            let span = Span::new(start, self.input.cur_pos());
            if !is!(self, IdentName) {
                syntax_error!(self, span, SyntaxError::NamespaceImportIdent)
            }
            self.emit_err(span, SyntaxError::NamespaceImportIdent);
            self.parse_ident_name()?
        };

        Ok(ImportSpecifier::Namespace(ImportStarAsSpecifier {
            span: span!(self, start),
            local,
        }))
    }

    /// Parse `foo`, `foo2 as bar` in `import { foo, foo2 as bar }`
    fn parse_import_specifier(&mut self) -> PResult<ImportSpecifier> {
        let start = self.input.cur_pos();

        let orig_name = self.parse_ident_name()?;

        if eat!(self, "as") {
            let local = self.parse_imported_binding()?;

            return Ok(ImportSpecifier::Named(ImportNamedSpecifier {
                span: span!(self, start),
                local,
                imported: Some(orig_name),
            }));
        }

        // Handle difference between
        //
        // 'ImportedBinding'
        // 'IdentifierName' as 'ImportedBinding'
        self.check_imported_binding(&orig_name);

        Ok(ImportSpecifier::Named(ImportNamedSpecifier {
            span: span!(self, start),
            local: orig_name,
            imported: None,
        }))
    }

    fn parse_imported_binding(&mut self) -> PResult<Ident> {
        let local = self.parse_ident_name()?;
        self.check_imported_binding(&local);
        Ok(local)
    }

    fn check_imported_binding(&mut self, local: &Ident) {
        if self.ctx().is_reserved_word(&local.sym) {
            self.emit_err(local.span, SyntaxError::InvalidImportLocalName);
            return;
        }

        self.check_binding_ident(local);
    }

    /// Every repeated binding refers back to the first one.
    fn check_duplicate_imports(&mut self, specifiers: &[ImportSpecifier]) {
        let mut first_bindings = FxHashMap::default();

        for specifier in specifiers {
            let local = specifier.local();
            match first_bindings.entry(local.sym.clone()) {
                Entry::Occupied(e) => {
                    let first = *e.get();
                    self.emit_err(local.span, SyntaxError::DuplicateImportBinding { first });
                }
                Entry::Vacant(e) => {
                    e.insert(local.span);
                }
            }
        }
    }

    fn parse_str_lit(&mut self) -> PResult<Str> {
        let start = self.input.cur_pos();

        match *cur!(self, true) {
            Token::Str { .. } => match self.input.bump() {
                Token::Str {
                    value, has_escape, ..
                } => Ok(Str {
                    span: span!(self, start),
                    value,
                    has_escape,
                }),
                _ => unreachable!(),
            },
            _ => syntax_error!(self, SyntaxError::ExpectedStr),
        }
    }

    fn parse_from_clause_and_semi(&mut self) -> PResult<Str> {
        expect!(self, "from");

        let src = self.parse_str_lit()?;
        expect!(self, ';');
        Ok(src)
    }

    fn parse_export(&mut self) -> PResult<ModuleDecl> {
        trace_cur!(self, parse_export);

        let start = self.input.cur_pos();
        self.assert_and_bump(&tok!("export"));

        if eat!(self, '*') {
            let src = self.parse_from_clause_and_semi()?;
            return Ok(ModuleDecl::ExportAll(ExportAll {
                span: span!(self, start),
                src,
            }));
        }

        if eat!(self, "default") {
            let decl = if is!(self, "class") {
                self.parse_default_class()?
            } else if is!(self, "function") {
                self.parse_default_fn()?
            } else {
                let expr = self.include_in_expr(true).parse_assignment_expr()?;
                expect!(self, ';');
                return Ok(ModuleDecl::ExportDefaultExpr(ExportDefaultExpr {
                    span: span!(self, start),
                    expr,
                }));
            };

            return Ok(ModuleDecl::ExportDefaultDecl(ExportDefaultDecl {
                span: span!(self, start),
                decl,
            }));
        }

        if eat!(self, '{') {
            let mut specifiers = vec![];
            while !eof!(self) && !is!(self, '}') {
                specifiers.push(self.parse_named_export_specifier()?);
                if !is!(self, '}') {
                    expect!(self, ',');
                }
            }
            expect!(self, '}');

            let src = if is!(self, "from") {
                Some(self.parse_from_clause_and_semi()?)
            } else {
                expect!(self, ';');
                None
            };

            // Without `from`, the names refer to local bindings.
            if src.is_none() {
                let ctx = self.ctx();
                for specifier in &specifiers {
                    if ctx.is_reserved_word(&specifier.orig.sym) {
                        self.emit_err(specifier.orig.span, SyntaxError::InvalidExportName);
                    }
                }
            }

            return Ok(ModuleDecl::ExportNamed(NamedExport {
                span: span!(self, start),
                specifiers,
                src,
            }));
        }

        let decl = if is_one_of!(self, "var", "let", "const") {
            self.parse_var_stmt(false).map(Decl::Var)?
        } else if is!(self, "function") {
            self.parse_fn_decl()?
        } else if is!(self, "class") {
            self.parse_class_decl()?
        } else {
            unexpected!(self)
        };

        Ok(ModuleDecl::ExportDecl(ExportDecl {
            span: span!(self, start),
            decl,
        }))
    }

    /// `foo` or `foo as bar`. Both names may be any IdentifierName here.
    fn parse_named_export_specifier(&mut self) -> PResult<ExportSpecifier> {
        let start = self.input.cur_pos();

        let orig = self.parse_ident_name()?;

        let exported = if eat!(self, "as") {
            Some(self.parse_ident_name()?)
        } else {
            None
        };

        Ok(ExportSpecifier {
            span: span!(self, start),
            orig,
            exported,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EsConfig;
    use global_common::input::StringInput;

    fn module(src: &str) -> (Vec<ModuleItem>, Vec<Error>) {
        let syntax = Syntax::Es(EsConfig {
            commonjs: true,
            ..Default::default()
        });
        let mut p = Parser::new(syntax, StringInput::new(src, BytePos(0)));
        let module = p.parse_module().unwrap();
        (module.body, p.take_errors())
    }

    fn import_decl(src: &str) -> ImportDecl {
        match module(src).0.pop() {
            Some(ModuleItem::ModuleDecl(ModuleDecl::Import(decl))) => decl,
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn default_and_named_imports() {
        let decl = import_decl("import a, { b, c as d } from 'm';");
        assert_eq!(&*decl.src.value, "m");
        assert_eq!(decl.specifiers.len(), 3);
        assert!(matches!(decl.specifiers[0], ImportSpecifier::Default(..)));
        match decl.specifiers[2] {
            ImportSpecifier::Named(ImportNamedSpecifier {
                ref local,
                imported: Some(ref imported),
                ..
            }) => {
                assert_eq!(&*local.sym, "d");
                assert_eq!(&*imported.sym, "c");
            }
            ref s => panic!("{:?}", s),
        }
    }

    #[test]
    fn bare_import() {
        assert!(import_decl("import 'm';").specifiers.is_empty());
    }

    #[test]
    fn every_duplicate_points_at_the_first_binding() {
        let (_, errors) = module("import { a, b as a, c as a } from 'm';");
        let first = Span::new(BytePos(9), BytePos(10));
        assert_eq!(
            errors.into_iter().map(|e| e.into_kind()).collect::<Vec<_>>(),
            vec![
                SyntaxError::DuplicateImportBinding { first },
                SyntaxError::DuplicateImportBinding { first },
            ]
        );
    }

    #[test]
    fn reserved_namespace_binding() {
        let (items, errors) = module("import * as protected from 'ns.js';");
        assert_eq!(items.len(), 1);
        assert_eq!(errors.len(), 1);
        // From `*` up to the start of the name.
        assert_eq!(errors[0].span(), Span::new(BytePos(7), BytePos(12)));
        assert_eq!(*errors[0].kind(), SyntaxError::NamespaceImportIdent);
    }

    #[test]
    fn export_list_reports_each_name() {
        let (_, errors) = module("export { a, return, b as c, implements as d };");
        assert_eq!(
            errors
                .iter()
                .map(|e| (e.span(), e.kind().clone()))
                .collect::<Vec<_>>(),
            vec![
                (
                    Span::new(BytePos(12), BytePos(18)),
                    SyntaxError::InvalidExportName
                ),
                (
                    Span::new(BytePos(28), BytePos(38)),
                    SyntaxError::InvalidExportName
                ),
            ]
        );
    }

    #[test]
    fn export_default_forms() {
        let (items, errors) =
            module("export default function () {} export default class A {} export default (1, 2);");
        assert!(errors.is_empty(), "{:?}", errors);
        assert!(matches!(
            items[0],
            ModuleItem::ModuleDecl(ModuleDecl::ExportDefaultDecl(ExportDefaultDecl {
                decl: DefaultDecl::Fn(FnExpr { ident: None, .. }),
                ..
            }))
        ));
        assert!(matches!(
            items[1],
            ModuleItem::ModuleDecl(ModuleDecl::ExportDefaultDecl(ExportDefaultDecl {
                decl: DefaultDecl::Class(ClassExpr { ident: Some(..), .. }),
                ..
            }))
        ));
        assert!(matches!(
            items[2],
            ModuleItem::ModuleDecl(ModuleDecl::ExportDefaultExpr(..))
        ));
    }

    #[test]
    fn missing_module_specifier() {
        let (_, errors) = module("import a from b;");
        assert_eq!(
            errors.into_iter().map(|e| e.into_kind()).collect::<Vec<_>>(),
            vec![SyntaxError::ExpectedStr]
        );
    }
}
