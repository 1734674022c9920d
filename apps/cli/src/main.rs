//! Formwarden CLI
//!
//! Replays scripted form sessions through the validator and prints every
//! error-state change the way a page would render it.
//!
//! ## Usage
//!
//! ```bash
//! formwarden run session.toml
//! formwarden run session.toml --email-min-length 6 --format json
//! formwarden rules --config form.toml
//! ```

mod logging;
mod script;
mod settings;
mod surface;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use formwarden_validator::engine::SubmitOutcome;
use formwarden_validator::form::Field;
use formwarden_validator::surface::FormBinding;

use crate::script::{Script, ScriptEvent};
use crate::settings::ConfigArgs;
use crate::surface::{Record, TerminalSurface};

#[derive(Parser)]
#[command(name = "formwarden")]
#[command(about = "Replay form sessions through the field validator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a session script
    Run {
        /// TOML file with `[[event]]` entries
        #[arg(value_name = "SESSION")]
        session: PathBuf,

        #[command(flatten)]
        config: ConfigArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the effective postal rule table
    Rules {
        #[command(flatten)]
        config: ConfigArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One human-readable line per change
    Text,
    /// One JSON object per line
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Run {
            session,
            config,
            format,
        } => run(&session, &config, format),
        Commands::Rules { config, format } => rules(&config, format),
    }
}

fn run(session: &Path, config: &ConfigArgs, format: OutputFormat) -> anyhow::Result<()> {
    let script = Script::load(session)?;
    let validator = config
        .load()?
        .build()
        .context("invalid form configuration")?;
    let mut binding = FormBinding::new(validator, TerminalSurface::new());
    let mut out = io::stdout().lock();

    for (index, event) in script.events.into_iter().enumerate() {
        let step = index + 1;
        tracing::debug!(step, ?event, "replaying event");

        let handled = match event {
            ScriptEvent::Input { field, value } => {
                binding.surface_mut().type_into(field, value);
                binding.on_input(field)
            }
            ScriptEvent::Select { value } => {
                binding.surface_mut().type_into(Field::Country, value);
                binding.on_country_change()
            }
            ScriptEvent::Submit => {
                if let SubmitOutcome::Rejected { field } = binding.on_submit() {
                    binding.surface_mut().push(Record::Rejected { field });
                }
                Ok(())
            }
        };

        for record in binding.surface_mut().drain() {
            emit(&mut out, &record, format)?;
        }
        handled.with_context(|| format!("session event {step} failed"))?;
    }

    out.flush()?;
    Ok(())
}

fn rules(config: &ConfigArgs, format: OutputFormat) -> anyhow::Result<()> {
    let config = config.load()?;
    let rules = config
        .postal_rules()
        .context("invalid postal rule table")?;
    let mut out = io::stdout().lock();

    for (rule, row) in rules.iter().zip(&config.postal) {
        match format {
            OutputFormat::Text => writeln!(
                out,
                "{}\t{}\t{}",
                rule.country(),
                rule.pattern(),
                rule.message()
            )?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut out, row)?;
                writeln!(out)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}

fn emit(out: &mut impl Write, record: &Record, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{record}")?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, record)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
