//! Helpers shared by the test suites of the workspace.
//!
//! [run_test] gives a test a fresh [SourceMap] and a [Handler] that renders
//! diagnostics into memory, so the exact text a user would see on stderr can
//! be compared against a golden string.

pub use pretty_assertions::{assert_eq, assert_ne};

use global_common::{
    errors::{EmitterWriter, Handler, HandlerFlags},
    sync::Lrc,
    SourceMap,
};
use once_cell::sync::Lazy;
use std::{
    env, fmt, fs,
    io::{self, Write},
    ops::Deref,
    path::Path,
    sync::{Arc, Mutex, PoisonError},
};
use tracing_subscriber::EnvFilter;

static LOGGER: Lazy<()> = Lazy::new(|| {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // Another harness may have installed a global subscriber already.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init();
});

/// Installs a `RUST_LOG`-filtered subscriber that writes through the test
/// harness. Calling it more than once is fine.
pub fn init_logger() {
    Lazy::force(&LOGGER);
}

/// Text written to the emitter while running a test.
pub type StdErr = NormalizedOutput;

/// Runs `op` with a new source map and a handler whose output is captured.
///
/// `op` returns `Err(())` after it has reported its errors through the
/// handler; the captured text is then returned as the error.
pub fn run_test<F, Ret>(treat_err_as_bug: bool, op: F) -> Result<Ret, StdErr>
where
    F: FnOnce(Lrc<SourceMap>, &Handler) -> Result<Ret, ()>,
{
    init_logger();

    let cm = Lrc::new(SourceMap::new());
    let buf = BufferedWriter::default();
    let emitter = EmitterWriter::new(Box::new(buf.clone()), Some(cm.clone()));
    let handler = Handler::with_emitter_and_flags(Box::new(emitter), HandlerFlags { treat_err_as_bug });

    match op(cm, &handler) {
        Ok(ret) => Ok(ret),
        Err(()) => Err(buf.into()),
    }
}

/// Like [run_test], but always returns what was written to the handler.
pub fn run_test_capture<F>(op: F) -> StdErr
where
    F: FnOnce(Lrc<SourceMap>, &Handler),
{
    match run_test(false, |cm, handler| {
        op(cm, handler);
        Err::<(), ()>(())
    }) {
        Ok(()) => unreachable!(),
        Err(stderr) => stderr,
    }
}

#[derive(Clone, Default)]
struct BufferedWriter(Arc<Mutex<Vec<u8>>>);

impl Write for BufferedWriter {
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

impl From<BufferedWriter> for NormalizedOutput {
    fn from(buf: BufferedWriter) -> Self {
        let bytes = buf.0.lock().unwrap_or_else(PoisonError::into_inner);
        NormalizedOutput::from(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Output with `\r\n` turned into `\n` and trailing whitespace removed
/// from every line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedOutput(String);

impl NormalizedOutput {
    /// Compares against the contents of `path`. With `UPDATE=1` in the
    /// environment a mismatching file is rewritten instead.
    pub fn compare_to_file(self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let expected = fs::read_to_string(path)
            .map(NormalizedOutput::from)
            .unwrap_or_default();

        if expected == self {
            return;
        }

        if env::var("UPDATE").map(|v| v == "1").unwrap_or(false) {
            if let Err(err) = fs::write(path, &self.0) {
                panic!("failed to update {}: {}", path.display(), err);
            }
            return;
        }

        assert_eq!(expected.0, self.0, "mismatch with {}", path.display());
    }
}

impl From<String> for NormalizedOutput {
    fn from(s: String) -> Self {
        if s.is_empty() {
            return NormalizedOutput(s);
        }

        let mut out = String::with_capacity(s.len());
        for line in s.replace("\r\n", "\n").lines() {
            out.push_str(line.trim_end());
            out.push('\n');
        }
        NormalizedOutput(out)
    }
}

impl From<&str> for NormalizedOutput {
    fn from(s: &str) -> Self {
        NormalizedOutput::from(s.to_string())
    }
}

impl Deref for NormalizedOutput {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::assert_eq;
    use global_common::{BytePos, FileName, Span};

    #[test]
    fn normalizes_line_endings() {
        let out = NormalizedOutput::from("a  \r\nb\t\n");
        assert_eq!(&*out, "a\nb\n");
    }

    #[test]
    fn captures_rendered_errors() {
        let out = run_test(false, |cm, handler| {
            let fm = cm.new_source_file(FileName::Real("a.js".into()), "let x;".into());
            let lo = fm.start_pos + BytePos(4);
            handler.span_err(Span::new(lo, lo + BytePos(1)), "bad name");
            Err::<(), ()>(())
        });

        assert_eq!(
            out.unwrap_err(),
            NormalizedOutput::from("a.js:1:5: error: bad name\nlet x;\n    ^\n")
        );
    }

    #[test]
    fn ok_values_pass_through() {
        let out = run_test(false, |_, handler| {
            assert!(!handler.has_errors());
            Ok(7)
        });
        assert_eq!(out, Ok(7));
    }
}
