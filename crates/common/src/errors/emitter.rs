use super::{Diagnostic, Level};
use crate::{pos::BytePos, sync::Lrc, SourceFile, SourceMap, Span};
use std::io::{self, Write};
#[cfg(feature = "tty-emitter")]
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Emitter trait for emitting errors.
pub trait Emitter {
    /// Emit a structured diagnostic.
    fn emit(&mut self, db: &Diagnostic);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorConfig {
    Auto,
    Always,
    Never,
}

#[cfg(feature = "tty-emitter")]
impl ColorConfig {
    fn to_color_choice(self) -> ColorChoice {
        match self {
            ColorConfig::Always => ColorChoice::Always,
            ColorConfig::Never => ColorChoice::Never,
            ColorConfig::Auto if atty::is(atty::Stream::Stderr) => ColorChoice::Auto,
            ColorConfig::Auto => ColorChoice::Never,
        }
    }
}

/// Writes diagnostics as `file:line:col: level: message` headers, each
/// followed by the quoted source line and a `^~~~` marker line.
pub struct EmitterWriter {
    dst: Destination,
    sm: Option<Lrc<SourceMap>>,
}

impl EmitterWriter {
    #[cfg(feature = "tty-emitter")]
    pub fn stderr(color_config: ColorConfig, source_map: Option<Lrc<SourceMap>>) -> EmitterWriter {
        let dst = Destination::Terminal(StandardStream::stderr(color_config.to_color_choice()));
        EmitterWriter {
            dst,
            sm: source_map,
        }
    }

    pub fn new(dst: Box<dyn Write + Send>, source_map: Option<Lrc<SourceMap>>) -> EmitterWriter {
        EmitterWriter {
            dst: Destination::Raw(dst),
            sm: source_map,
        }
    }

    fn emit_block(
        &mut self,
        level: Level,
        msg: &str,
        span: Option<Span>,
        caret: Option<BytePos>,
    ) -> io::Result<()> {
        let snippet = match (span, &self.sm) {
            (Some(span), Some(sm)) if !span.is_dummy() => {
                let anchor = caret.unwrap_or(span.lo);
                sm.lookup_char_pos(anchor).map(|loc| (span, anchor, loc))
            }
            _ => None,
        };

        let (span, anchor, loc) = match snippet {
            Some(snippet) => snippet,
            None => {
                self.dst.write_level(level)?;
                return writeln!(self.dst, ": {}", msg);
            }
        };

        write!(
            self.dst,
            "{}:{}:{}: ",
            loc.file.name,
            loc.line,
            loc.col.0 + 1
        )?;
        self.dst.write_level(level)?;
        writeln!(self.dst, ": {}", msg)?;

        let line_index = loc.line - 1;
        if let Some(line) = loc.file.get_line(line_index) {
            writeln!(self.dst, "{}", line)?;
        }
        if let Some(marker) = marker_line(&loc.file, line_index, span, anchor) {
            self.dst.write_marker(&marker)?;
        }

        Ok(())
    }

    fn emit_messages(&mut self, db: &Diagnostic) -> io::Result<()> {
        self.emit_block(db.level, &db.message, db.span, db.caret)?;
        for child in &db.children {
            self.emit_block(child.level, &child.message, child.span, child.caret)?;
        }
        self.dst.flush()
    }
}

impl Emitter for EmitterWriter {
    fn emit(&mut self, db: &Diagnostic) {
        if let Err(e) = self.emit_messages(db) {
            panic!("failed to emit error: {}", e)
        }
    }
}

/// Builds the marker line for `span` on the given line: `~` under every
/// covered char, `^` under `caret`. Tabs of the source line are kept so the
/// marker stays aligned.
fn marker_line(file: &SourceFile, line_index: usize, span: Span, caret: BytePos) -> Option<String> {
    let (lo, hi) = file.line_bounds(line_index)?;
    let start = (lo - file.start_pos).0 as usize;
    let end = (hi - file.start_pos).0 as usize;

    let mut marker = String::new();
    for (i, c) in file.src[start..end].char_indices() {
        let pos = lo + BytePos(i as u32);
        marker.push(if pos == caret {
            '^'
        } else if span.lo <= pos && pos < span.hi {
            '~'
        } else if c == '\t' {
            '\t'
        } else {
            ' '
        });
    }
    if caret == hi {
        marker.push('^');
    }

    let len = marker.trim_end().len();
    marker.truncate(len);
    Some(marker)
}

enum Destination {
    #[cfg(feature = "tty-emitter")]
    Terminal(StandardStream),
    Raw(Box<dyn Write + Send>),
}

impl Destination {
    fn write_level(&mut self, level: Level) -> io::Result<()> {
        match *self {
            #[cfg(feature = "tty-emitter")]
            Destination::Terminal(ref mut t) => {
                let mut spec = ColorSpec::new();
                spec.set_bold(true).set_intense(true);
                match level {
                    Level::Bug | Level::Error => spec.set_fg(Some(Color::Red)),
                    Level::Warning => spec.set_fg(Some(Color::Yellow)),
                    Level::Note => spec.set_fg(Some(Color::Green)),
                    Level::Cancelled => &mut spec,
                };
                t.set_color(&spec)?;
                write!(t, "{}", level)?;
                t.reset()
            }
            Destination::Raw(ref mut w) => write!(w, "{}", level),
        }
    }

    fn write_marker(&mut self, marker: &str) -> io::Result<()> {
        match *self {
            #[cfg(feature = "tty-emitter")]
            Destination::Terminal(ref mut t) => {
                t.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
                write!(t, "{}", marker)?;
                t.reset()?;
                writeln!(t)
            }
            Destination::Raw(ref mut w) => writeln!(w, "{}", marker),
        }
    }
}

impl Write for Destination {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        match *self {
            #[cfg(feature = "tty-emitter")]
            Destination::Terminal(ref mut t) => t.write(bytes),
            Destination::Raw(ref mut w) => w.write(bytes),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match *self {
            #[cfg(feature = "tty-emitter")]
            Destination::Terminal(ref mut t) => t.flush(),
            Destination::Raw(ref mut w) => w.flush(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{errors::Handler, FileName};
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Buffer {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    /// Runs `op` against a handler for `src` and returns the rendered text.
    fn render(src: &str, op: impl FnOnce(&Handler, BytePos)) -> String {
        let cm = Lrc::new(SourceMap::new());
        let fm = cm.new_source_file(FileName::Real("t.js".into()), src.into());
        let buf = Buffer::default();
        let handler = Handler::with_emitter_writer(Box::new(buf.clone()), Some(cm));
        op(&handler, fm.start_pos);
        buf.text()
    }

    fn sp(base: BytePos, lo: u32, hi: u32) -> Span {
        Span::new(base + BytePos(lo), base + BytePos(hi))
    }

    #[test]
    fn caret_and_tildes() {
        let out = render("x;\nconst abc;\n", |handler, base| {
            handler.span_err(sp(base, 9, 12), "missing initializer in const declaration");
        });

        assert_eq!(
            out,
            "t.js:2:7: error: missing initializer in const declaration\nconst abc;\n      ^~~\n"
        );
    }

    #[test]
    fn caret_past_span() {
        let src = "import * as protected from 'ns.js';";
        let out = render(src, |handler, base| {
            handler
                .struct_span_err(sp(base, 7, 12), "'identifier' expected in namespace import")
                .set_caret(base + BytePos(12))
                .emit();
        });

        assert_eq!(
            out,
            format!(
                "t.js:1:13: error: 'identifier' expected in namespace import\n{}\n       ~~~~~^\n",
                src
            )
        );
    }

    #[test]
    fn notes_follow_error() {
        let src = "import { foo , foo } from 'foo.js';";
        let out = render(src, |handler, base| {
            handler
                .struct_span_err(sp(base, 15, 18), "Duplicate entry in import declaration list")
                .span_note(sp(base, 9, 12), "first usage of name")
                .emit();
        });

        assert_eq!(
            out,
            format!(
                "t.js:1:16: error: Duplicate entry in import declaration list\n{src}\n{pad}^~~\n\
                 t.js:1:10: note: first usage of name\n{src}\n{note_pad}^~~\n",
                src = src,
                pad = " ".repeat(15),
                note_pad = " ".repeat(9),
            )
        );
    }

    #[test]
    fn tabs_and_multibyte() {
        let out = render("\t\u{e9}\u{e9} = 1;", |handler, base| {
            handler.span_err(sp(base, 6, 7), "bad");
        });

        assert_eq!(out, "t.js:1:5: error: bad\n\t\u{e9}\u{e9} = 1;\n\t   ^\n");
    }

    #[test]
    fn span_clipped_to_line() {
        let out = render("a = (\n  b);", |handler, base| {
            handler.span_err(sp(base, 4, 10), "unclosed");
        });

        assert_eq!(out, "t.js:1:5: error: unclosed\na = (\n    ^\n");
    }

    #[test]
    fn without_span() {
        let out = render("", |handler, _| handler.err("no input"));
        assert_eq!(out, "error: no input\n");
    }
}
