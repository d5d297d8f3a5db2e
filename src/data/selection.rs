//! User-controlled selection: x variable and the two setup toggles.

use super::dataset::Dataset;
use crate::error::ChartError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub x_variable: String,
    pub knees_locked: bool,
    pub eyes_closed: bool,
}

/// A single control change. Each one triggers one orchestrator pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    XVariable(String),
    KneesLocked(bool),
    EyesClosed(bool),
}

impl Selection {
    /// Initial selection: `preferred` if the dataset has it, otherwise its first
    /// candidate variable. Both toggles start unchecked.
    pub fn initial(dataset: &Dataset, preferred: &str) -> Self {
        let x_variable = if dataset.has_variable(preferred) {
            preferred.to_string()
        } else {
            let fallback = dataset
                .candidate_variables()
                .first()
                .cloned()
                .unwrap_or_default();
            tracing::warn!(
                preferred,
                fallback = %fallback,
                "default x variable not in dataset"
            );
            fallback
        };
        Self {
            x_variable,
            knees_locked: false,
            eyes_closed: false,
        }
    }

    /// Apply one control change. Unknown variables are rejected without mutation.
    pub fn apply(&mut self, event: SelectionEvent, dataset: &Dataset) -> Result<(), ChartError> {
        match event {
            SelectionEvent::XVariable(name) => {
                if !dataset.has_variable(&name) {
                    return Err(ChartError::UnknownVariable(name));
                }
                self.x_variable = name;
            }
            SelectionEvent::KneesLocked(v) => self.knees_locked = v,
            SelectionEvent::EyesClosed(v) => self.eyes_closed = v,
        }
        Ok(())
    }
}
