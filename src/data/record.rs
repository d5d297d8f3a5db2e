//! Typed dataset rows.

use std::collections::HashMap;

pub const SUBJECT_COLUMN: &str = "Subject";
pub const GROUP_COLUMN: &str = "Group";
pub const LOCKED_KNEES_COLUMN: &str = "Locked knees?";
pub const EYES_OPEN_COLUMN: &str = "Eyes open?";

// ─────────────────────────────────────────────────────────────────────────────
// Condition – the two response series
// ─────────────────────────────────────────────────────────────────────────────

/// Experimental condition under which a QoM response was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    WithMusic,
    WithoutMusic,
}

impl Condition {
    /// Both conditions in paint order.
    pub const ALL: [Condition; 2] = [Condition::WithMusic, Condition::WithoutMusic];

    /// Name of the response column holding this condition's QoM.
    pub fn response_column(self) -> &'static str {
        match self {
            Condition::WithMusic => "Mean QoM w M",
            Condition::WithoutMusic => "Mean QoM w/oM",
        }
    }

    /// Legend entry for this condition.
    pub fn legend_label(self) -> &'static str {
        match self {
            Condition::WithMusic => "Subject Experienced Music",
            Condition::WithoutMusic => "Subject Experienced Silence",
        }
    }

    /// Response name used in point tooltips.
    pub fn response_label(self) -> &'static str {
        match self {
            Condition::WithMusic => "Mean QoM With Music",
            Condition::WithoutMusic => "Mean QoM Without Music",
        }
    }

    /// Short name used in the difference readout.
    pub fn short_label(self) -> &'static str {
        match self {
            Condition::WithMusic => "With Music",
            Condition::WithoutMusic => "Without Music",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Condition::WithMusic => 0,
            Condition::WithoutMusic => 1,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SetupFlag – ternary setup fields
// ─────────────────────────────────────────────────────────────────────────────

/// Value of a ternary setup column: `0` → `No`, `1` → `Yes`, `0.5` → `Either`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetupFlag {
    No,
    Yes,
    /// Valid under both toggle states.
    Either,
}

impl SetupFlag {
    /// Decode a raw cell value. Anything other than 0, 1 or 0.5 is rejected.
    pub fn from_value(v: f64) -> Option<Self> {
        if v == 0.0 {
            Some(SetupFlag::No)
        } else if v == 1.0 {
            Some(SetupFlag::Yes)
        } else if v == 0.5 {
            Some(SetupFlag::Either)
        } else {
            None
        }
    }

    /// Whether a record with this flag is visible for the given toggle state.
    pub fn admits(self, toggle: bool) -> bool {
        match self {
            SetupFlag::Either => true,
            SetupFlag::Yes => toggle,
            SetupFlag::No => !toggle,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Record
// ─────────────────────────────────────────────────────────────────────────────

/// Render identity of a row. `ordinal` disambiguates repeated subject ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowKey {
    pub subject: String,
    pub ordinal: usize,
}

/// One row of the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub key: RowKey,
    pub group: String,
    /// Numeric columns; `None` marks an empty cell.
    pub numbers: HashMap<String, Option<f64>>,
    /// `None` when the cell was empty or not one of 0, 1, 0.5.
    pub locked_knees: Option<SetupFlag>,
    pub eyes_open: Option<SetupFlag>,
}

impl Record {
    pub fn subject(&self) -> &str {
        &self.key.subject
    }

    /// Value of a numeric field, `None` if missing or not numeric.
    pub fn number(&self, field: &str) -> Option<f64> {
        self.numbers.get(field).copied().flatten()
    }

    pub fn response(&self, condition: Condition) -> Option<f64> {
        self.number(condition.response_column())
    }
}
