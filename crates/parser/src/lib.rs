//! An ES2015 parser.
//!
//! [Lexer] turns source text into tokens and [Parser] turns tokens into an
//! [ast::Program]. Syntax errors are collected instead of aborting the parse
//! whenever the parser can resynchronise; [Parser::take_errors] returns them
//! in source order.
//!
//! ```ignore
//! let fm = cm.new_source_file(FileName::Anon, "const a = 1;".into());
//! let mut parser = Parser::new(Syntax::default(), StringInput::from(&*fm));
//! let program = parser.parse_program();
//! for err in parser.take_errors() {
//!     err.into_diagnostic(&handler).emit();
//! }
//! ```

pub use self::{
    lexer::Lexer,
    parser::{PResult, Parser, Tokens},
};
use serde::{Deserialize, Serialize};

#[macro_use]
mod macros;
mod context;
pub mod error;
pub mod lexer;
mod parser;
pub mod token;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, tag = "syntax")]
pub enum Syntax {
    /// Standard
    #[serde(rename = "ecmascript")]
    Es(EsConfig),
}

impl Default for Syntax {
    fn default() -> Self {
        Syntax::Es(Default::default())
    }
}

impl Syntax {
    /// Parse as a module: `import`/`export` are recognised and the code is
    /// strict.
    pub fn commonjs(self) -> bool {
        match self {
            Syntax::Es(EsConfig { commonjs, .. }) => commonjs,
        }
    }

    pub fn allow_return_outside_function(self) -> bool {
        matches!(
            self,
            Syntax::Es(EsConfig {
                allow_return_outside_function: true,
                ..
            })
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct EsConfig {
    #[serde(default)]
    pub commonjs: bool,

    #[serde(default)]
    pub allow_return_outside_function: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_from_json() {
        let syntax: Syntax =
            serde_json::from_str(r#"{ "syntax": "ecmascript", "commonjs": true }"#).unwrap();
        assert!(syntax.commonjs());
        assert!(!syntax.allow_return_outside_function());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let res = serde_json::from_str::<EsConfig>(r#"{ "jsx": true }"#);
        assert!(res.is_err());
    }
}
