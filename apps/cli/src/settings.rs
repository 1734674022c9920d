//! Layered configuration: defaults → TOML file → environment → CLI flags.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use formwarden_validator::config::FormConfig;

/// Prefix of environment overrides, e.g. `FORMWARDEN_EMAIL__MIN_LENGTH=6`.
pub const ENV_PREFIX: &str = "FORMWARDEN_";

/// Configuration flags shared by every subcommand.
#[derive(Debug, Clone, Default, Args)]
pub struct ConfigArgs {
    /// TOML file with `[email]` settings and `[[postal]]` rules
    #[arg(short, long, value_name = "FILE", env = "FORMWARDEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Minimum email length, in UTF-16 code units
    #[arg(long, value_name = "N")]
    pub email_min_length: Option<usize>,
}

impl ConfigArgs {
    /// Merges all layers into a [`FormConfig`].
    pub fn load(&self) -> anyhow::Result<FormConfig> {
        let mut figment = Figment::from(Serialized::defaults(FormConfig::default()));

        if let Some(path) = &self.config {
            ensure_readable(path)?;
            figment = figment.merge(Toml::file_exact(path));
        }

        // FORMWARDEN_LOG and FORMWARDEN_CONFIG share the prefix but are not
        // configuration keys.
        figment = figment.merge(
            Env::prefixed(ENV_PREFIX)
                .ignore(&["log", "config"])
                .split("__"),
        );

        if let Some(min) = self.email_min_length {
            figment = figment.merge(Serialized::default("email.min_length", min));
        }

        let config: FormConfig = figment
            .extract()
            .context("failed to load form configuration")?;
        tracing::debug!(
            countries = config.postal.len(),
            email_min_length = ?config.email.min_length,
            "configuration loaded"
        );
        Ok(config)
    }
}

fn ensure_readable(path: &Path) -> anyhow::Result<()> {
    std::fs::metadata(path)
        .with_context(|| format!("cannot read config file {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_layers() {
        let config = ConfigArgs::default().load().unwrap();
        assert_eq!(config.postal.len(), 3);
        assert!(config.email.required);
    }

    #[test]
    fn test_flag_sets_min_length() {
        let args = ConfigArgs {
            config: None,
            email_min_length: Some(7),
        };
        assert_eq!(args.load().unwrap().email.min_length, Some(7));
    }

    #[test]
    fn test_file_replaces_country_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("form.toml");
        std::fs::write(
            &path,
            r#"
[email]
min_length = 5

[[postal]]
country = "at"
pattern = '(A-)?\d{4}'
message = "Austrian postal codes have 4 digits"
"#,
        )
        .unwrap();

        let args = ConfigArgs {
            config: Some(path),
            email_min_length: Some(9),
        };
        let config = args.load().unwrap();
        assert_eq!(config.email.min_length, Some(9));
        assert_eq!(config.postal.len(), 1);
        assert_eq!(config.postal[0].country, "at");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let args = ConfigArgs {
            config: Some(PathBuf::from("/nonexistent/form.toml")),
            email_min_length: None,
        };
        let err = args.load().unwrap_err();
        assert!(err.to_string().contains("cannot read config file"));
    }
}
