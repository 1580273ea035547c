//! Diagnostic reporting.
//!
//! A [Handler] owns an [Emitter] and counts the errors that went through it.
//! Diagnostics are built with a [DiagnosticBuilder] and leave it through
//! [DiagnosticBuilder::emit].

pub use self::emitter::{ColorConfig, Emitter, EmitterWriter};
use crate::{pos::BytePos, sync::Lrc, SourceMap, Span};
use std::{
    cell::{Cell, RefCell},
    fmt,
    io::Write,
    ops::{Deref, DerefMut},
    thread::panicking,
};

mod emitter;

#[derive(Copy, PartialEq, Eq, Clone, Hash, Debug)]
pub enum Level {
    Bug,
    Error,
    Warning,
    Note,
    Cancelled,
}

impl Level {
    pub fn to_str(self) -> &'static str {
        match self {
            Level::Bug => "error: internal compiler error",
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Note => "note",
            Level::Cancelled => panic!("Shouldn't call on cancelled error"),
        }
    }

    pub fn is_error(self) -> bool {
        matches!(self, Level::Bug | Level::Error)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_str().fmt(f)
    }
}

/// A note attached to a [Diagnostic], rendered in its own block after the
/// parent.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubDiagnostic {
    pub level: Level,
    pub message: String,
    pub span: Option<Span>,
    pub caret: Option<BytePos>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
    pub span: Option<Span>,
    /// Column marked with `^`. Defaults to `span.lo`.
    pub caret: Option<BytePos>,
    pub children: Vec<SubDiagnostic>,
}

impl Diagnostic {
    pub fn new(level: Level, message: &str) -> Self {
        Diagnostic {
            level,
            message: message.to_string(),
            span: None,
            caret: None,
            children: vec![],
        }
    }

    pub fn cancel(&mut self) {
        self.level = Level::Cancelled;
    }

    pub fn cancelled(&self) -> bool {
        self.level == Level::Cancelled
    }

    pub fn is_error(&self) -> bool {
        self.level.is_error()
    }

    pub fn set_span(&mut self, sp: Span) -> &mut Self {
        self.span = Some(sp);
        self
    }

    pub fn set_caret(&mut self, pos: BytePos) -> &mut Self {
        self.caret = Some(pos);
        self
    }

    pub fn note(&mut self, msg: &str) -> &mut Self {
        self.sub(Level::Note, msg, None);
        self
    }

    pub fn span_note(&mut self, sp: Span, msg: &str) -> &mut Self {
        self.sub(Level::Note, msg, Some(sp));
        self
    }

    pub fn warn(&mut self, msg: &str) -> &mut Self {
        self.sub(Level::Warning, msg, None);
        self
    }

    fn sub(&mut self, level: Level, message: &str, span: Option<Span>) {
        self.children.push(SubDiagnostic {
            level,
            message: message.to_string(),
            span,
            caret: None,
        });
    }
}

/// Used for emitting structured error messages and other diagnostic
/// information.
///
/// If there is some state in a downstream crate you would like to access in
/// the methods of `DiagnosticBuilder` here, consider extending
/// `HandlerFlags`, accessed via `self.handler.flags`.
#[must_use]
pub struct DiagnosticBuilder<'a> {
    handler: &'a Handler,
    diagnostic: Diagnostic,
}

impl<'a> DiagnosticBuilder<'a> {
    pub fn new(handler: &'a Handler, level: Level, message: &str) -> Self {
        DiagnosticBuilder {
            handler,
            diagnostic: Diagnostic::new(level, message),
        }
    }

    /// Emit the diagnostic.
    pub fn emit(&mut self) {
        if self.cancelled() {
            return;
        }

        self.handler.emit_db(self);
        self.cancel();
    }

    pub fn span_note(&mut self, sp: Span, msg: &str) -> &mut Self {
        self.diagnostic.span_note(sp, msg);
        self
    }

    pub fn note(&mut self, msg: &str) -> &mut Self {
        self.diagnostic.note(msg);
        self
    }

    pub fn set_span(&mut self, sp: Span) -> &mut Self {
        self.diagnostic.set_span(sp);
        self
    }

    pub fn set_caret(&mut self, pos: BytePos) -> &mut Self {
        self.diagnostic.set_caret(pos);
        self
    }
}

impl<'a> Deref for DiagnosticBuilder<'a> {
    type Target = Diagnostic;

    fn deref(&self) -> &Diagnostic {
        &self.diagnostic
    }
}

impl<'a> DerefMut for DiagnosticBuilder<'a> {
    fn deref_mut(&mut self) -> &mut Diagnostic {
        &mut self.diagnostic
    }
}

impl<'a> fmt::Debug for DiagnosticBuilder<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.diagnostic.fmt(f)
    }
}

/// Destructor bomb - a `DiagnosticBuilder` must be either emitted or
/// cancelled or we emit a bug.
impl<'a> Drop for DiagnosticBuilder<'a> {
    fn drop(&mut self) {
        if !panicking() && !self.cancelled() {
            let message = self.diagnostic.message.clone();
            self.emit();
            if cfg!(debug_assertions) {
                panic!("error was constructed but not emitted: {}", message);
            }
        }
    }
}

#[derive(Default, Debug, Clone, Copy)]
pub struct HandlerFlags {
    /// If true, immediately panic when an error is emitted.
    pub treat_err_as_bug: bool,
}

/// A handler deals with errors; certain errors (fatal, bug, unimpl) may cause
/// immediate exit, others log errors for later reporting.
pub struct Handler {
    pub flags: HandlerFlags,
    err_count: Cell<usize>,
    emitter: RefCell<Box<dyn Emitter>>,
}

impl Handler {
    #[cfg(feature = "tty-emitter")]
    pub fn with_tty_emitter(
        color_config: ColorConfig,
        treat_err_as_bug: bool,
        cm: Option<Lrc<SourceMap>>,
    ) -> Handler {
        let emitter = Box::new(EmitterWriter::stderr(color_config, cm));
        Handler::with_emitter(treat_err_as_bug, emitter)
    }

    /// Renders diagnostics as plain text into `dst`.
    pub fn with_emitter_writer(
        dst: Box<dyn Write + Send>,
        cm: Option<Lrc<SourceMap>>,
    ) -> Handler {
        Handler::with_emitter(false, Box::new(EmitterWriter::new(dst, cm)))
    }

    pub fn with_emitter(treat_err_as_bug: bool, e: Box<dyn Emitter>) -> Handler {
        Handler::with_emitter_and_flags(e, HandlerFlags { treat_err_as_bug })
    }

    pub fn with_emitter_and_flags(e: Box<dyn Emitter>, flags: HandlerFlags) -> Handler {
        Handler {
            flags,
            err_count: Cell::new(0),
            emitter: RefCell::new(e),
        }
    }

    pub fn struct_err(&self, msg: &str) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder::new(self, Level::Error, msg)
    }

    pub fn struct_span_err(&self, sp: Span, msg: &str) -> DiagnosticBuilder<'_> {
        let mut db = self.struct_err(msg);
        db.set_span(sp);
        db
    }

    pub fn struct_warn(&self, msg: &str) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder::new(self, Level::Warning, msg)
    }

    pub fn err(&self, msg: &str) {
        self.struct_err(msg).emit();
    }

    pub fn span_err(&self, sp: Span, msg: &str) {
        self.struct_span_err(sp, msg).emit();
    }

    pub fn err_count(&self) -> usize {
        self.err_count.get()
    }

    pub fn has_errors(&self) -> bool {
        self.err_count() > 0
    }

    pub fn emit_diagnostic(&self, diagnostic: &Diagnostic) {
        if diagnostic.cancelled() {
            return;
        }

        if diagnostic.is_error() {
            self.bump_err_count();
        }

        self.emitter.borrow_mut().emit(diagnostic);
    }

    fn emit_db(&self, db: &DiagnosticBuilder<'_>) {
        self.emit_diagnostic(&db.diagnostic);

        if self.flags.treat_err_as_bug && db.is_error() {
            panic!("encountered error with `treat_err_as_bug` set");
        }
    }

    fn bump_err_count(&self) {
        self.err_count.set(self.err_count.get() + 1);
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("flags", &self.flags)
            .field("err_count", &self.err_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    /// Collects every diagnostic it receives.
    struct Collect(Rc<RefCell<Vec<Diagnostic>>>);

    impl Emitter for Collect {
        fn emit(&mut self, db: &Diagnostic) {
            self.0.borrow_mut().push(db.clone());
        }
    }

    fn handler() -> (Handler, Rc<RefCell<Vec<Diagnostic>>>) {
        let store = Rc::new(RefCell::new(vec![]));
        let handler = Handler::with_emitter(false, Box::new(Collect(store.clone())));
        (handler, store)
    }

    #[test]
    fn counts_errors_only() {
        let (handler, store) = handler();
        handler.struct_warn("careful").emit();
        assert!(!handler.has_errors());

        handler.span_err(Span::new(BytePos(1), BytePos(2)), "bad");
        assert_eq!(handler.err_count(), 1);
        assert_eq!(store.borrow().len(), 2);
    }

    #[test]
    fn cancelled_is_silent() {
        let (handler, store) = handler();
        let mut db = handler.struct_err("never shown");
        db.cancel();
        drop(db);

        assert!(!handler.has_errors());
        assert!(store.borrow().is_empty());
    }

    #[test]
    fn notes_keep_order() {
        let (handler, store) = handler();
        handler
            .struct_span_err(Span::new(BytePos(5), BytePos(8)), "dup")
            .span_note(Span::new(BytePos(1), BytePos(4)), "first")
            .note("second")
            .emit();

        let store = store.borrow();
        let children: Vec<_> = store[0].children.iter().map(|c| &*c.message).collect();
        assert_eq!(children, vec!["first", "second"]);
    }
}
