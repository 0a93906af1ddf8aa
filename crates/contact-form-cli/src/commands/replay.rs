use anyhow::Result;
use colored::Colorize;
use contact_form::{render, ContactForm, Phase, Validate};
use serde_json::{json, Value};
use std::fmt::Write;
use std::path::Path;

use crate::script::{ReplayStats, Script};
use crate::OutputFormat;
use super::load_config;

pub fn execute(script: &Path, config: Option<&Path>, format: OutputFormat) -> Result<()> {
    let config = load_config(config)?;
    let script = Script::load(script)?;
    tracing::debug!(events = script.events.len(), "replaying script");

    let mut form = ContactForm::with_validator(config.rules());
    let stats = script.apply(&mut form)?;

    let output = match format {
        OutputFormat::Summary => summary(&form, stats),
        OutputFormat::Json => serde_json::to_string_pretty(&report(&form))?,
        OutputFormat::Html => render(&form, &config.view_options()).into_string(),
    };
    println!("{}", output);

    Ok(())
}

/// JSON view of the form: `{ state, errors, submitted, phase }`
pub fn report<V: Validate>(form: &ContactForm<V>) -> Value {
    json!({
        "state": form.state(),
        "errors": form.errors(),
        "submitted": form.submitted(),
        "phase": form.phase(),
    })
}

fn summary<V: Validate>(form: &ContactForm<V>, stats: ReplayStats) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_summary(&mut out, form, stats);
    out.trim_end().to_string()
}

fn write_summary<V: Validate>(
    out: &mut String,
    form: &ContactForm<V>,
    stats: ReplayStats,
) -> std::fmt::Result {
    writeln!(out, "{}", "Replay finished".green().bold())?;
    writeln!(
        out,
        "Inputs: {}, submits accepted: {}, submits rejected: {}",
        stats.inputs, stats.accepted, stats.rejected
    )?;

    let phase = match form.phase() {
        Phase::Editing => "editing".yellow(),
        Phase::Submitted => "submitted".green(),
    };
    writeln!(out, "Phase: {}", phase)?;
    writeln!(out)?;

    if form.errors().is_empty() {
        writeln!(out, "{}", "No validation errors".green())?;
    } else {
        writeln!(out, "{}", "Validation errors:".red().bold())?;
        for error in form.errors() {
            writeln!(out, "  {} {}", "✗".red(), error)?;
        }
    }
    writeln!(out)?;

    match form.submitted() {
        Some(snapshot) => {
            writeln!(out, "{}", "You Submitted:".cyan().bold())?;
            for (field, value) in snapshot.iter() {
                if field.is_required() || !value.is_empty() {
                    writeln!(out, "  {}: {}", field.label(), value)?;
                }
            }
        }
        None => writeln!(out, "{}", "Nothing submitted yet".dimmed())?,
    }

    Ok(())
}
