//! Input scripts: JSON arrays of [`InputEvent`]s replayed against an editor.
//!
//! ```json
//! [
//!   { "Key": "r" },
//!   { "MouseDown": { "x": 10.0, "y": 10.0 } },
//!   { "MouseDown": { "x": 60.0, "y": 40.0 } },
//!   { "Special": "PageUp" }
//! ]
//! ```

use anyhow::Context;
use serde::Serialize;
use std::path::Path;

use clipsketch_designer::{EditorState, InputEvent};

/// Outcome of replaying a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ReplaySummary {
    pub events: usize,
    pub redraws: usize,
}

pub fn load_script(path: &Path) -> anyhow::Result<Vec<InputEvent>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input script {}", path.display()))?;
    let events: Vec<InputEvent> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid input script {}", path.display()))?;
    tracing::info!(path = %path.display(), events = events.len(), "loaded input script");
    Ok(events)
}

/// Dispatches every event in order.
pub fn replay(state: &mut EditorState, events: &[InputEvent]) -> ReplaySummary {
    let redraws = events
        .iter()
        .filter(|&&event| state.dispatch(event))
        .count();
    ReplaySummary {
        events: events.len(),
        redraws,
    }
}
