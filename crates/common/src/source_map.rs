use crate::{
    chars::char_literals::*,
    pos::{BytePos, CharPos, Pos, Span},
    sync::Lrc,
};
use std::{
    borrow::Cow,
    fmt,
    path::PathBuf,
    sync::{PoisonError, RwLock},
};
use unicode_width::UnicodeWidthChar;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FileName {
    Real(PathBuf),
    /// Source text without a file on disk, e.g. read from stdin.
    Anon,
    Custom(String),
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            FileName::Real(ref path) => write!(f, "{}", path.display()),
            FileName::Anon => write!(f, "<anon>"),
            FileName::Custom(ref s) => write!(f, "<{}>", s),
        }
    }
}

impl From<PathBuf> for FileName {
    fn from(p: PathBuf) -> Self {
        FileName::Real(p)
    }
}

/// A single source in the [SourceMap].
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: FileName,
    pub src: Lrc<String>,
    /// The start position of this source in the [SourceMap].
    pub start_pos: BytePos,
    /// The end position of this source in the [SourceMap].
    pub end_pos: BytePos,
    /// Locations of line beginnings in the source code.
    pub lines: Vec<BytePos>,
}

impl SourceFile {
    pub fn new(name: FileName, src: String, start_pos: BytePos) -> SourceFile {
        let end_pos = start_pos + BytePos::from_usize(src.len());
        let lines = analyze_source_file(&src, start_pos);

        SourceFile {
            name,
            src: Lrc::new(src),
            start_pos,
            end_pos,
            lines,
        }
    }

    #[inline]
    pub fn contains(&self, pos: BytePos) -> bool {
        self.start_pos <= pos && pos <= self.end_pos
    }

    /// Finds the line containing the given position. The return value is the
    /// index into the `lines` array of this SourceFile, not the 1-based line
    /// number.
    pub fn lookup_line(&self, pos: BytePos) -> Option<usize> {
        if self.lines.is_empty() {
            return None;
        }

        match self.lines.binary_search(&pos) {
            Ok(idx) => Some(idx),
            Err(0) => None,
            Err(idx) => Some(idx - 1),
        }
    }

    /// Returns the `[lo, hi)` range of the line, terminator excluded.
    pub fn line_bounds(&self, line_index: usize) -> Option<(BytePos, BytePos)> {
        let lo = *self.lines.get(line_index)?;
        let next = self
            .lines
            .get(line_index + 1)
            .copied()
            .unwrap_or(self.end_pos);

        let text = &self.src[self.offset(lo)..self.offset(next)];
        let trimmed = text.trim_end_matches(|c| {
            matches!(
                c,
                LINE_FEED | CARRIAGE_RETURN | LINE_SEPARATOR | PARAGRAPH_SEPARATOR
            )
        });

        Some((lo, lo + BytePos::from_usize(trimmed.len())))
    }

    /// Gets a line from the list of pre-computed line-beginnings, without its
    /// line terminator.
    pub fn get_line(&self, line_index: usize) -> Option<Cow<'_, str>> {
        let (lo, hi) = self.line_bounds(line_index)?;
        Some(Cow::from(&self.src[self.offset(lo)..self.offset(hi)]))
    }

    #[inline]
    fn offset(&self, pos: BytePos) -> usize {
        (pos - self.start_pos).to_usize()
    }
}

/// Records the start of every line. `\r\n` counts as a single terminator.
fn analyze_source_file(src: &str, start_pos: BytePos) -> Vec<BytePos> {
    let mut lines = vec![start_pos];
    let mut iter = src.char_indices().peekable();

    while let Some((i, c)) = iter.next() {
        let next_line = match c {
            CARRIAGE_RETURN => {
                if let Some(&(_, LINE_FEED)) = iter.peek() {
                    continue;
                }
                i + c.len_utf8()
            }
            LINE_FEED | LINE_SEPARATOR | PARAGRAPH_SEPARATOR => i + c.len_utf8(),
            _ => continue,
        };

        lines.push(start_pos + BytePos::from_usize(next_line));
    }

    lines
}

/// A source code location used for error reporting.
#[derive(Debug, Clone)]
pub struct Loc {
    /// Information about the original source
    pub file: Lrc<SourceFile>,
    /// The (1-based) line number
    pub line: usize,
    /// The (0-based) column offset, in chars
    pub col: CharPos,
    /// The (0-based) column offset when displayed
    pub col_display: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanSnippetError {
    DummySpan,
    SourceNotAvailable { pos: BytePos },
    DistinctSources,
}

/// Owns every source file of a compilation session.
///
/// Files are laid out one after another in a single position space that
/// starts at `1`, so a [BytePos] identifies both a file and an offset in
/// it.
#[derive(Default)]
pub struct SourceMap {
    files: RwLock<Vec<Lrc<SourceFile>>>,
}

impl SourceMap {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn files(&self) -> Vec<Lrc<SourceFile>> {
        self.files
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn next_start_pos(files: &[Lrc<SourceFile>]) -> BytePos {
        match files.last() {
            None => BytePos(1),
            // Add one so there is some space between files. This lets us
            // distinguish positions in the source map, even in the presence
            // of zero-length files.
            Some(last) => last.end_pos + BytePos(1),
        }
    }

    pub fn new_source_file(&self, name: FileName, src: String) -> Lrc<SourceFile> {
        let mut files = self.files.write().unwrap_or_else(PoisonError::into_inner);
        let start_pos = Self::next_start_pos(&files);

        let fm = Lrc::new(SourceFile::new(name, src, start_pos));
        files.push(fm.clone());
        fm
    }

    pub fn lookup_source_file(&self, pos: BytePos) -> Option<Lrc<SourceFile>> {
        let files = self.files.read().unwrap_or_else(PoisonError::into_inner);

        let idx = files.partition_point(|f| f.start_pos <= pos);
        let fm = files.get(idx.checked_sub(1)?)?;
        if fm.contains(pos) {
            Some(fm.clone())
        } else {
            None
        }
    }

    /// Looks up source information about a [BytePos].
    pub fn lookup_char_pos(&self, pos: BytePos) -> Option<Loc> {
        let file = self.lookup_source_file(pos)?;
        let line_index = file.lookup_line(pos)?;
        let line_lo = file.lines[line_index];

        let before = &file.src[file.offset(line_lo)..file.offset(pos)];
        let col = CharPos(before.chars().count());
        let col_display = before
            .chars()
            .map(|c| if c == '\t' { 4 } else { c.width().unwrap_or(0) })
            .sum();

        Some(Loc {
            file,
            line: line_index + 1,
            col,
            col_display,
        })
    }

    pub fn span_to_snippet(&self, sp: Span) -> Result<String, SpanSnippetError> {
        if sp.is_dummy() {
            return Err(SpanSnippetError::DummySpan);
        }

        let file = self
            .lookup_source_file(sp.lo)
            .ok_or(SpanSnippetError::SourceNotAvailable { pos: sp.lo })?;
        if !file.contains(sp.hi) {
            return Err(SpanSnippetError::DistinctSources);
        }

        Ok(file.src[file.offset(sp.lo)..file.offset(sp.hi)].to_string())
    }
}

impl fmt::Debug for SourceMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceMap")
            .field("files", &self.files().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cm(src: &str) -> (SourceMap, Lrc<SourceFile>) {
        let cm = SourceMap::new();
        let fm = cm.new_source_file(FileName::Custom("test".into()), src.into());
        (cm, fm)
    }

    #[test]
    fn line_starts() {
        let (_, fm) = cm("a\nb\r\nc\rd\u{2028}e");
        assert_eq!(
            fm.lines,
            vec![BytePos(1), BytePos(3), BytePos(6), BytePos(8), BytePos(12)]
        );
        assert_eq!(fm.get_line(1).as_deref(), Some("b"));
        assert_eq!(fm.get_line(3).as_deref(), Some("d"));
        assert_eq!(fm.get_line(4).as_deref(), Some("e"));
        assert_eq!(fm.get_line(5), None);
    }

    #[test]
    fn char_columns() {
        let (cm, fm) = cm("x\n\u{e9}t\u{e9} = 1;");
        // `=` sits after `été ` which is 6 bytes but 4 chars.
        let loc = cm.lookup_char_pos(fm.start_pos + BytePos(8)).unwrap();
        assert_eq!(loc.line, 2);
        assert_eq!(loc.col, CharPos(4));
    }

    #[test]
    fn second_file_is_disjoint() {
        let cm = SourceMap::new();
        let a = cm.new_source_file(FileName::Anon, "abc".into());
        let b = cm.new_source_file(FileName::Anon, "def".into());
        assert!(b.start_pos > a.end_pos);

        let loc = cm.lookup_char_pos(b.start_pos + BytePos(2)).unwrap();
        assert_eq!(loc.file.start_pos, b.start_pos);
        assert_eq!(loc.col, CharPos(2));
        assert_eq!(
            cm.span_to_snippet(Span::new(b.start_pos, b.end_pos)),
            Ok("def".to_string())
        );
    }

    #[test]
    fn snippet_of_dummy_span() {
        let (cm, _) = cm("abc");
        assert_eq!(
            cm.span_to_snippet(crate::DUMMY_SP),
            Err(SpanSnippetError::DummySpan)
        );
    }
}
