//! Golden tests for the rendered diagnostics of invalid programs.
//!
//! Every `fixture/error/<mode>/<name>.js` is parsed as a script or as a
//! module and the text written to the handler is compared with
//! `<name>.stderr`. Run with `UPDATE=1` to rewrite the expectations.

use global_common::{errors::Handler, input::StringInput, sync::Lrc, FileName, SourceMap};
use parser::{EsConfig, Parser, Syntax};
use std::{
    fs,
    path::{Path, PathBuf},
};
use testing::StdErr;

fn fixture_dir(mode: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixture")
        .join("error")
        .join(mode)
}

/// Parses `src` and reports everything the parser found through `handler`.
fn report(cm: &Lrc<SourceMap>, handler: &Handler, name: &str, src: String, commonjs: bool) {
    let fm = cm.new_source_file(FileName::Real(name.into()), src);
    let syntax = Syntax::Es(EsConfig {
        commonjs,
        ..Default::default()
    });

    let mut p = Parser::new(syntax, StringInput::from(&*fm));
    let res = p.parse_program();

    for err in p.take_errors() {
        err.into_diagnostic(handler).emit();
    }
    if let Err(err) = res {
        err.into_diagnostic(handler).emit();
    }
}

fn stderr_of(mode: &str, name: &str) -> StdErr {
    let path = fixture_dir(mode).join(format!("{}.js", name));
    let src = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {}", path.display(), err));

    testing::run_test_capture(|cm, handler| {
        report(&cm, handler, &format!("{}.js", name), src, mode == "module");
        assert!(handler.has_errors(), "{} should not parse", path.display());
    })
}

fn check(mode: &str, name: &str) {
    let expected = fixture_dir(mode).join(format!("{}.stderr", name));
    stderr_of(mode, name).compare_to_file(expected);
}

#[test]
fn const_without_initializer() {
    check("script", "const");
}

#[test]
fn unary_before_exponent() {
    check("script", "exp");
}

#[test]
fn statement_recovery() {
    check("script", "recovery");
}

#[test]
fn import_export_in_script() {
    check("script", "import-in-script");
}

#[test]
fn import_bindings() {
    check("module", "import");
}

#[test]
fn export_local_names() {
    check("module", "export");
}

#[test]
fn import_inside_function() {
    check("module", "nested-import");
}

#[test]
fn error_count_is_the_verdict() {
    let stderr = testing::run_test_capture(|cm, handler| {
        report(&cm, handler, "ok.js", "let a = 1;\n".into(), false);
        assert!(!handler.has_errors());

        report(&cm, handler, "bad.js", "with (a) {}\nconst b;\n".into(), true);
        assert_eq!(handler.err_count(), 2);
    });

    testing::assert_eq!(
        &*stderr,
        "bad.js:1:1: error: 'with' is not allowed in strict mode\n\
         with (a) {}\n\
         ^~~~\n\
         bad.js:2:7: error: missing initializer in const declaration\n\
         const b;\n      \
         ^\n"
    );
}

#[test]
fn unexpected_eof_aborts() {
    let stderr = testing::run_test_capture(|cm, handler| {
        report(&cm, handler, "eof.js", "function f() {".into(), false);
    });

    assert!(
        stderr.contains("error: unexpected end of input"),
        "{}",
        stderr
    );
}
