use anyhow::{Context, Error, Result};
use parser::EsConfig;
use serde::Deserialize;
use serde_json::error::Category;
use std::{fs::read_to_string, path::Path};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub ecmascript: EsConfig,
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<Config> {
    fn convert_json_err(e: serde_json::Error) -> Error {
        let line = e.line();
        let column = e.column();

        let msg = match e.classify() {
            Category::Io => "io error",
            Category::Syntax => "syntax error",
            Category::Data => "unmatched data",
            Category::Eof => "unexpected eof",
        };
        Error::new(e).context(format!(
            "Failed to deserialize config (json) file: {}: {}:{}",
            msg, line, column
        ))
    }

    serde_json::from_str::<Config>(content).map_err(convert_json_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_object_is_default() {
        assert_eq!(parse_config("{}").unwrap(), Config::default());
    }

    #[test]
    fn camel_case_fields() {
        let config =
            parse_config(r#"{ "ecmascript": { "commonjs": true, "allowReturnOutsideFunction": true } }"#)
                .unwrap();

        assert_eq!(
            config.ecmascript,
            EsConfig {
                commonjs: true,
                allow_return_outside_function: true,
            }
        );
    }

    #[test]
    fn unknown_field_reports_position() {
        let err = parse_config("{\n  \"typescript\": {}\n}").unwrap_err();
        let msg = format!("{:#}", err);

        assert!(msg.starts_with("Failed to deserialize config (json) file: unmatched data: 2:"), "{}", msg);
        assert!(msg.contains("typescript"), "{}", msg);
    }

    #[test]
    fn truncated_json() {
        let err = parse_config("{ \"ecmascript\": ").unwrap_err();
        assert!(format!("{}", err).contains("unexpected eof"), "{}", err);
    }
}
