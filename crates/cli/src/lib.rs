//! Driver for `esparse`: parses one file, reports its diagnostics and
//! optionally dumps the ESTree form of the program.

pub use ast::estree::Format;

use anyhow::{anyhow, bail, Result};
use ast::estree;
use global_common::{
    errors::{EmitterWriter, Handler},
    input::StringInput,
    sync::Lrc,
    FileName, SourceMap,
};
use parser::{EsConfig, Parser, Syntax};
use std::{
    io::{self, Write},
    path::PathBuf,
    sync::{Arc, Mutex, PoisonError},
};
use tracing::debug;

pub mod config;

pub const EXIT_SUCCESS: i32 = 0;
/// At least one error diagnostic was reported.
pub const EXIT_PARSE_ERROR: i32 = 1;
/// The input could not be read or the arguments were invalid.
pub const EXIT_FAILURE: i32 = 2;

/// Command line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub file: PathBuf,
    pub config: Option<PathBuf>,
    pub commonjs: bool,
    pub dump_ast: bool,
    pub format: Format,
}

impl Args {
    pub const USAGE: &'static str =
        "usage: esparse [-commonjs] [-dump-ast] [-pretty-json|-compact-json] [-config file] <file>";

    pub fn parse<I>(args: I) -> Result<Args>
    where
        I: IntoIterator<Item = String>,
    {
        let mut file = None;
        let mut config = None;
        let mut commonjs = false;
        let mut dump_ast = false;
        let mut format = Format::Compact;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match &*arg {
                "-commonjs" => commonjs = true,
                "-dump-ast" => dump_ast = true,
                "-pretty-json" => format = Format::Pretty,
                "-compact-json" => format = Format::Compact,
                "-config" => match args.next() {
                    Some(path) => config = Some(PathBuf::from(path)),
                    None => bail!("'-config' expects a file\n{}", Self::USAGE),
                },
                flag if flag.starts_with('-') && flag.len() > 1 => {
                    bail!("unknown option '{}'\n{}", flag, Self::USAGE)
                }
                _ if file.is_some() => bail!("more than one input file\n{}", Self::USAGE),
                path => file = Some(PathBuf::from(path)),
            }
        }

        let file = file.ok_or_else(|| anyhow!("no input file\n{}", Self::USAGE))?;

        Ok(Args {
            file,
            config,
            commonjs,
            dump_ast,
            format,
        })
    }
}

/// What to do with one source text.
#[derive(Debug, Clone)]
pub struct Options {
    /// Used in diagnostic headers.
    pub file_name: FileName,
    pub syntax: Syntax,
    pub dump_ast: bool,
    pub format: Format,
}

impl Options {
    /// Flags given on the command line win over the config file.
    pub fn new(args: &Args, mut es: EsConfig) -> Self {
        if args.commonjs {
            es.commonjs = true;
        }

        Options {
            file_name: FileName::Real(args.file.clone()),
            syntax: Syntax::Es(es),
            dump_ast: args.dump_ast,
            format: args.format,
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Options {
            file_name: FileName::Anon,
            syntax: Default::default(),
            dump_ast: false,
            format: Format::Compact,
        }
    }
}

/// Parses `src` and writes the AST to `out` (if requested) and every
/// diagnostic to `err`. Returns the exit code.
pub fn run(opts: &Options, src: &str, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    let cm = Lrc::new(SourceMap::new());
    let buf = SharedBuf::default();
    let handler = Handler::with_emitter(
        false,
        Box::new(EmitterWriter::new(Box::new(buf.clone()), Some(cm.clone()))),
    );

    let code = match compile(&cm, &handler, opts, src.to_string(), out) {
        Ok(code) => code,
        Err(e) => {
            handler.err(&format!("failed to write output: {}", e));
            EXIT_FAILURE
        }
    };

    let rendered = buf.0.lock().unwrap_or_else(PoisonError::into_inner);
    match err.write_all(&rendered).and_then(|_| err.flush()) {
        Ok(()) => code,
        Err(..) => EXIT_FAILURE,
    }
}

/// Parses `src` as a new file of `cm`, reporting through `handler`.
pub fn compile(
    cm: &Lrc<SourceMap>,
    handler: &Handler,
    opts: &Options,
    src: String,
    out: &mut dyn Write,
) -> io::Result<i32> {
    let fm = cm.new_source_file(opts.file_name.clone(), src);
    debug!("parsing {} ({} bytes)", fm.name, fm.src.len());

    let mut parser = Parser::new(opts.syntax, StringInput::from(&*fm));
    let program = parser.parse_program();

    for e in parser.take_errors() {
        e.into_diagnostic(handler).emit();
    }
    let program = match program {
        Ok(program) => program,
        Err(e) => {
            e.into_diagnostic(handler).emit();
            return Ok(EXIT_PARSE_ERROR);
        }
    };

    if handler.has_errors() {
        debug!("{} error(s) in {}", handler.err_count(), fm.name);
        return Ok(EXIT_PARSE_ERROR);
    }

    if opts.dump_ast {
        estree::to_writer(&mut *out, &program, opts.format)?;
        writeln!(out)?;
        out.flush()?;
    }

    Ok(EXIT_SUCCESS)
}

/// Collects what the emitter writes so it can be copied to the caller's
/// stream afterwards.
#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Result<Args> {
        Args::parse(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn flags_in_any_order() {
        let a = args(&["-dump-ast", "a.js", "-pretty-json", "-commonjs"]).unwrap();
        assert_eq!(
            a,
            Args {
                file: "a.js".into(),
                config: None,
                commonjs: true,
                dump_ast: true,
                format: Format::Pretty,
            }
        );
    }

    #[test]
    fn last_format_wins() {
        let a = args(&["-pretty-json", "-compact-json", "a.js"]).unwrap();
        assert_eq!(a.format, Format::Compact);
    }

    #[test]
    fn config_takes_a_value() {
        let a = args(&["-config", "c.json", "a.js"]).unwrap();
        assert_eq!(a.config, Some(PathBuf::from("c.json")));

        assert!(args(&["a.js", "-config"]).is_err());
    }

    #[test]
    fn bad_arguments() {
        assert!(args(&[]).is_err());
        assert!(args(&["-verbose", "a.js"]).is_err());
        assert!(args(&["a.js", "b.js"]).is_err());
    }

    #[test]
    fn commonjs_flag_overrides_config() {
        let a = args(&["-commonjs", "a.js"]).unwrap();
        let opts = Options::new(&a, EsConfig::default());
        assert!(opts.syntax.commonjs());

        let a = args(&["a.js"]).unwrap();
        let opts = Options::new(
            &a,
            EsConfig {
                commonjs: true,
                ..Default::default()
            },
        );
        assert!(opts.syntax.commonjs());
    }
}
