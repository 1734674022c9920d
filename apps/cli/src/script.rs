//! Session scripts
//!
//! A session is a TOML list of user actions:
//!
//! ```toml
//! [[event]]
//! kind = "input"
//! field = "email"
//! value = "a@b.co"
//!
//! [[event]]
//! kind = "select"
//! value = "ch"
//!
//! [[event]]
//! kind = "submit"
//! ```

use std::path::Path;

use anyhow::Context;
use formwarden_validator::form::Field;
use serde::Deserialize;

/// A parsed session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Script {
    #[serde(rename = "event", default)]
    pub events: Vec<ScriptEvent>,
}

/// One user action.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ScriptEvent {
    /// Type `value` into `field`.
    Input {
        field: Field,
        #[serde(default)]
        value: String,
    },
    /// Pick a country. An empty value clears the selection.
    Select {
        #[serde(default, alias = "country")]
        value: String,
    },
    /// Press the submit button.
    Submit,
}

impl Script {
    pub fn parse(source: &str) -> anyhow::Result<Self> {
        toml::from_str(source).context("invalid session script")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read session {}", path.display()))?;
        let script =
            Self::parse(&source).with_context(|| format!("in session {}", path.display()))?;
        tracing::debug!(events = script.events.len(), path = %path.display(), "session loaded");
        Ok(script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_kinds() {
        let script = Script::parse(
            r#"
[[event]]
kind = "input"
field = "confirm"
value = "x"

[[event]]
kind = "select"
country = "de"

[[event]]
kind = "submit"
"#,
        )
        .unwrap();

        assert_eq!(
            script.events,
            [
                ScriptEvent::Input {
                    field: Field::Confirmation,
                    value: "x".into()
                },
                ScriptEvent::Select { value: "de".into() },
                ScriptEvent::Submit,
            ]
        );
    }

    #[test]
    fn test_empty_script() {
        assert_eq!(Script::parse("").unwrap(), Script::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = Script::parse(
            r#"
[[event]]
kind = "input"
field = "zip"
"#,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("invalid session script"));
    }
}
