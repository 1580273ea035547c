use cli::{run, Format, Options, EXIT_PARSE_ERROR, EXIT_SUCCESS};
use global_common::FileName;
use parser::{EsConfig, Syntax};
use pretty_assertions::assert_eq;

struct Output {
    code: i32,
    stdout: String,
    stderr: String,
}

fn esparse(opts: &Options, src: &str) -> Output {
    let mut stdout = vec![];
    let mut stderr = vec![];
    let code = run(opts, src, &mut stdout, &mut stderr);

    Output {
        code,
        stdout: String::from_utf8(stdout).unwrap(),
        stderr: String::from_utf8(stderr).unwrap(),
    }
}

fn options(name: &str, commonjs: bool, dump_ast: bool, format: Format) -> Options {
    Options {
        file_name: FileName::Real(name.into()),
        syntax: Syntax::Es(EsConfig {
            commonjs,
            ..Default::default()
        }),
        dump_ast,
        format,
    }
}

#[test]
fn valid_program_prints_nothing() {
    let out = esparse(&Options::default(), "var a = 1;\n");
    assert_eq!(out.code, EXIT_SUCCESS);
    assert_eq!(out.stdout, "");
    assert_eq!(out.stderr, "");
}

#[test]
fn compact_dump() {
    let out = esparse(&options("a.js", false, true, Format::Compact), "x;");
    assert_eq!(out.code, EXIT_SUCCESS);
    assert_eq!(
        out.stdout,
        "{\"type\":\"Program\",\"body\":[{\"type\":\"ExpressionStatement\",\"expression\":{\"type\":\
         \"Identifier\",\"name\":\"x\",\"typeAnnotation\":null},\"directive\":null}]}\n"
    );
}

#[test]
fn pretty_dump() {
    let out = esparse(&options("a.js", false, true, Format::Pretty), ";");
    assert_eq!(out.code, EXIT_SUCCESS);
    assert_eq!(
        out.stdout,
        "{\n  \"type\": \"Program\",\n  \"body\": [\n    {\n      \"type\": \"EmptyStatement\"\n    }\n  \
         ]\n}\n"
    );
}

#[test]
fn errors_suppress_the_dump() {
    let out = esparse(
        &options("exp-error.js", false, true, Format::Pretty),
        "+3 ** 2;\n\ndelete 3 ** 2;\n",
    );

    assert_eq!(out.code, EXIT_PARSE_ERROR);
    assert_eq!(out.stdout, "");
    assert_eq!(
        out.stderr,
        "exp-error.js:1:1: error: Unary operator before ** must use parens to disambiguate\n+3 ** \
         2;\n^~~~~\nexp-error.js:3:1: error: Unary operator before ** must use parens to \
         disambiguate\ndelete 3 ** 2;\n^~~~~~~~~~~\n"
    );
}

#[test]
fn module_mode() {
    let src = "import * as protected from 'ns.js';\n";

    let out = esparse(&options("import-error.js", true, false, Format::Compact), src);
    assert_eq!(out.code, EXIT_PARSE_ERROR);
    assert_eq!(
        out.stderr,
        "import-error.js:1:13: error: 'identifier' expected in namespace import\nimport * as \
         protected from 'ns.js';\n       ~~~~~^\n"
    );

    let out = esparse(&options("plain.js", false, false, Format::Compact), src);
    assert_eq!(out.code, EXIT_PARSE_ERROR);
    assert!(
        out.stderr
            .starts_with("plain.js:1:1: error: 'import' and 'export' may only appear in a module"),
        "{}",
        out.stderr
    );
}

#[test]
fn anonymous_input() {
    let out = esparse(&Options::default(), "const abc;");
    assert_eq!(out.code, EXIT_PARSE_ERROR);
    assert_eq!(
        out.stderr,
        "<anon>:1:7: error: missing initializer in const declaration\nconst abc;\n      ^~~\n"
    );
}

#[test]
fn overflowing_literal_is_dumped_as_infinity() {
    let out = esparse(&options("a.js", false, true, Format::Compact), "x = 1e400;");
    assert_eq!(out.code, EXIT_SUCCESS);
    assert!(
        out.stdout
            .contains("\"right\":{\"type\":\"NumericLiteral\",\"value\":\"Infinity\"}"),
        "{}",
        out.stdout
    );
}
