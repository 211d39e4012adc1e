//! Persisted best-result records for the widget deck.
//!
//! DESIGN
//! ======
//! The memory-game record goes through the engine's validating codec so a
//! tampered or stale entry degrades to defaults instead of rendering
//! impossible numbers. The remaining widget bests are plain JSON.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

use engine::GameRecord;
use serde::{Deserialize, Serialize};

use crate::util::persist;

const MEMORY_KEY: &str = "playdeck_memory_record";
const WIDGETS_KEY: &str = "playdeck_widget_bests";

/// Best results for the non-game widgets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetBests {
    /// Highest hue-match score locked in (0-100).
    pub hue_score: u32,
    /// Completed focus-timer sessions.
    pub focus_sessions: u32,
}

/// Records shared across pages via context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RecordsState {
    pub memory: GameRecord,
    pub widgets: WidgetBests,
}

impl RecordsState {
    /// Load persisted records. Missing or malformed entries fall back to
    /// defaults; storage is advisory, never authoritative.
    #[must_use]
    pub fn load() -> Self {
        let memory = persist::load_string(MEMORY_KEY)
            .and_then(|raw| match engine::decode_record(&raw) {
                Ok(record) => Some(record),
                Err(_err) => {
                    #[cfg(feature = "hydrate")]
                    log::warn!("discarding stored memory record: {_err}");
                    None
                }
            })
            .unwrap_or_default();
        let widgets = persist::load_json(WIDGETS_KEY).unwrap_or_default();
        Self { memory, widgets }
    }

    /// Fold a finished memory game into the record; persists on improvement.
    pub fn absorb_memory(&mut self, round: u32, score: u32) {
        if self.memory.absorb(round, score) {
            persist::save_string(MEMORY_KEY, &engine::encode_record(&self.memory));
        }
    }

    /// Raise the hue-match best if `score` beats it.
    pub fn absorb_hue_score(&mut self, score: u32) {
        if score > self.widgets.hue_score {
            self.widgets.hue_score = score;
            persist::save_json(WIDGETS_KEY, &self.widgets);
        }
    }

    /// Count one completed focus session.
    pub fn record_focus_session(&mut self) {
        self.widgets.focus_sessions += 1;
        persist::save_json(WIDGETS_KEY, &self.widgets);
    }
}
