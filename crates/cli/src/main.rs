use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use beacon_engine::{
    FieldValidator, NotificationSink, RULES, RecordingSink, RuleEntry, SubmissionWizard, TracingSink, WizardError,
};
use beacon_types::{Effect, FieldName, ManuscriptDraft, Notification, Section, SubmissionReceipt, SubmitOutcome};
use beacon_util::{SubmissionConfig, load_config, load_config_from_path};
use clap::{Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

mod script;

/// Manuscript submission wizard.
#[derive(Debug, Parser)]
#[command(name = "beacon", version, about)]
struct Cli {
    /// Path to the submission config (defaults to $BEACON_CONFIG_PATH or the user config dir).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Replay a scripted wizard session (YAML or JSON).
    Run {
        script: PathBuf,
        /// Print the final outcome as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Validate a single field value.
    Check { field: String, value: String },
    /// List the configured research categories.
    Categories,
    /// List the validation rule table.
    Rules {
        /// Only list the fields of one section (manuscript, authors or upload).
        #[arg(long)]
        section: Option<Section>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    }
    .context("loading submission config")?;

    match cli.command {
        Command::Run { script, json } => run_script(&config, &script, json),
        Command::Check { field, value } => check_field(&config, &field, &value),
        Command::Categories => {
            for category in &config.categories {
                println!("{:<24}{}", category.as_str(), category.label());
            }
            Ok(())
        }
        Command::Rules { section } => {
            for entry in rules_for(section) {
                println!(
                    "{:<20}{:<28}{:<20}{}",
                    entry.field.section().label(),
                    entry.field.label(),
                    entry.rule.to_string(),
                    entry.message
                );
            }
            if section.is_none_or(|section| section == Section::Upload) {
                println!("{:<20}{}", Section::Upload.label(), config.attachment.describe());
            }
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run_script(config: &SubmissionConfig, path: &Path, json: bool) -> Result<()> {
    let steps = script::load_script(path)?;
    let sink = RecordingSink::new();
    let recorder = sink.clone();
    let mut wizard = SubmissionWizard::new(config, move |notice: &Notification| {
        TracingSink.notify(notice);
        recorder.notify(notice);
    });
    let mut last_outcome: Option<SubmitOutcome> = None;

    for (index, step) in steps.into_iter().enumerate() {
        let msg = step.into_msg().with_context(|| format!("step {}", index + 1))?;
        debug!(step = index + 1, ?msg, "Replaying step");
        let effects = match wizard.update(msg) {
            Ok(effects) => effects,
            Err(WizardError::Attachment(error)) => {
                warn!(step = index + 1, %error, "Attachment refused");
                println!("! {}", error);
                continue;
            }
            Err(error @ WizardError::Finished) => {
                return Err(error).with_context(|| format!("step {}", index + 1));
            }
        };
        for effect in effects {
            print_effect(&effect, json);
            if let Effect::Submitted(outcome) = effect {
                last_outcome = Some(outcome);
            }
        }
        for notice in sink.drain() {
            if !json {
                print_notice(&notice);
            }
        }
    }

    let Some(outcome) = last_outcome else {
        bail!("script finished without a submit step");
    };
    match outcome {
        SubmitOutcome::Accepted { payload } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&SubmissionReceipt::new(payload))?);
            }
            Ok(())
        }
        SubmitOutcome::Rejected { reason } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&reason)?);
            }
            bail!("submission rejected: {} ({})", reason.as_str(), reason)
        }
    }
}

/// Rule table rows, optionally limited to the fields hosted by one section.
fn rules_for(section: Option<Section>) -> Vec<&'static RuleEntry> {
    let rules: &'static [RuleEntry] = &RULES;
    rules
        .iter()
        .filter(|entry| section.is_none_or(|section| entry.field.section() == section))
        .collect()
}

fn print_effect(effect: &Effect, json: bool) {
    if json {
        return;
    }
    match effect {
        Effect::FieldValidated { field, result } => match &result.message {
            Some(message) => println!("  {:<20} invalid: {}", field.as_str(), message),
            None => println!("  {:<20} ok", field.as_str()),
        },
        Effect::AttachmentChanged { current, drag_active } => {
            let summary = current.as_ref().map(|file| file.summary()).unwrap_or_else(|| "no file".to_string());
            println!("  attachment: {}{}", summary, if *drag_active { " (dragging)" } else { "" });
        }
        Effect::SectionChanged(section) => println!("> {}", section.label()),
        Effect::Submitted(_) => {}
    }
}

fn print_notice(notice: &Notification) {
    println!("* {}: {}", notice.title, notice.description);
}

fn check_field(config: &SubmissionConfig, field: &str, value: &str) -> Result<()> {
    let field: FieldName = field.parse()?;
    let mut draft = ManuscriptDraft::new();
    draft.set(field, value);
    let result = FieldValidator::new(config.categories.clone()).validate_field(&draft, field);
    println!("{}", serde_json::to_string_pretty(&result)?);
    if !result.valid {
        bail!("{} is invalid", field);
    }
    Ok(())
}
