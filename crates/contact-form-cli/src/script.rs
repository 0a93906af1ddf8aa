// Scripted user interaction: a JSON list of input and submit events

use anyhow::{Context, Result};
use contact_form::{ContactForm, Validate};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A recorded sequence of user events
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

/// One user event
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ScriptEvent {
    /// The user typed `value` into the field named `field`
    Input { field: String, value: String },
    /// The user activated the submit button
    Submit,
}

/// Outcome counts of a replay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub inputs: usize,
    pub accepted: usize,
    pub rejected: usize,
}

impl Script {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read script: {:?}", path))?;
        Self::from_json(&content).with_context(|| format!("Failed to parse script: {:?}", path))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply every event to `form` in order
    ///
    /// Rejected submissions are counted, not treated as failures. An unknown
    /// field name aborts the replay.
    pub fn apply<V: Validate>(&self, form: &mut ContactForm<V>) -> Result<ReplayStats> {
        let mut stats = ReplayStats::default();

        for (index, event) in self.events.iter().enumerate() {
            match event {
                ScriptEvent::Input { field, value } => {
                    form.set_field_by_name(field, value.as_str())
                        .with_context(|| format!("event #{}: input rejected", index))?;
                    stats.inputs += 1;
                }
                ScriptEvent::Submit => match form.submit() {
                    Ok(_) => stats.accepted += 1,
                    Err(err) => {
                        tracing::info!(event = index, "{}", err);
                        stats.rejected += 1;
                    }
                },
            }
        }

        Ok(stats)
    }
}
