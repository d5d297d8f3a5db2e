//! Dataset store: CSV loading with per-column type inference.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use tracing::{info, warn};

use super::record::{
    Condition, Record, RowKey, SetupFlag, EYES_OPEN_COLUMN, GROUP_COLUMN, LOCKED_KNEES_COLUMN,
    SUBJECT_COLUMN,
};
use crate::error::DatasetError;

/// Immutable, fully loaded dataset.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<Record>,
    candidates: Vec<String>,
}

impl Dataset {
    /// Build a dataset from already typed records. At least one candidate
    /// x variable is required.
    pub fn new(records: Vec<Record>, candidates: Vec<String>) -> Result<Self, DatasetError> {
        if candidates.is_empty() {
            return Err(DatasetError::NoCandidateVariables);
        }
        Ok(Self {
            records,
            candidates,
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let ds = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            records = ds.len(),
            variables = ds.candidates.len(),
            "dataset loaded"
        );
        Ok(ds)
    }

    /// Parse CSV with a header row.
    ///
    /// A column is numeric when it has at least one value and every non-empty cell
    /// parses as a finite number; empty cells become missing values. Candidate x variables are the numeric
    /// columns other than the response and setup columns, in header order.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);
        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        let rows = rdr.records().collect::<Result<Vec<_>, _>>()?;

        let column = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| DatasetError::MissingColumn(name.to_string()))
        };
        let subject_col = column(SUBJECT_COLUMN)?;
        let group_col = column(GROUP_COLUMN)?;
        let knees_col = column(LOCKED_KNEES_COLUMN)?;
        let eyes_col = column(EYES_OPEN_COLUMN)?;
        for c in Condition::ALL {
            column(c.response_column())?;
        }

        let numeric: Vec<bool> = (0..headers.len())
            .map(|i| {
                let mut cells = rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .filter(|cell| !cell.is_empty())
                    .peekable();
                i != subject_col
                    && i != group_col
                    && cells.peek().is_some()
                    && cells.all(|cell| parse_number(cell).is_some())
            })
            .collect();

        for c in Condition::ALL {
            let name = c.response_column();
            if headers.iter().position(|h| h == name).map(|i| !numeric[i]) == Some(true) {
                warn!(column = name, "response column is not numeric; no record will be plotted");
            }
        }

        let mut candidates = Vec::new();
        for (i, h) in headers.iter().enumerate() {
            let reserved = i == knees_col
                || i == eyes_col
                || Condition::ALL.iter().any(|c| c.response_column() == h);
            if numeric[i] && !reserved && !candidates.contains(h) {
                candidates.push(h.clone());
            }
        }
        if candidates.is_empty() {
            return Err(DatasetError::NoCandidateVariables);
        }

        let mut seen: HashMap<String, usize> = HashMap::new();
        let mut invalid_setup = 0usize;
        let mut records = Vec::with_capacity(rows.len());
        for row in &rows {
            let cell = |i: usize| row.get(i).unwrap_or("");
            let subject = cell(subject_col).to_string();
            let ordinal = seen.entry(subject.clone()).or_insert(0);
            let key = RowKey {
                subject,
                ordinal: *ordinal,
            };
            *ordinal += 1;

            let mut setup = |i: usize| {
                let raw = cell(i);
                let flag = parse_number(raw).and_then(SetupFlag::from_value);
                if flag.is_none() && !raw.is_empty() {
                    invalid_setup += 1;
                }
                flag
            };
            let locked_knees = setup(knees_col);
            let eyes_open = setup(eyes_col);

            let numbers = headers
                .iter()
                .enumerate()
                .filter(|(i, _)| numeric[*i])
                .map(|(i, h)| (h.clone(), parse_number(cell(i))))
                .collect();

            records.push(Record {
                key,
                group: cell(group_col).to_string(),
                numbers,
                locked_knees,
                eyes_open,
            });
        }
        if invalid_setup > 0 {
            warn!(
                cells = invalid_setup,
                "setup cells outside {{0, 1, 0.5}} treated as missing"
            );
        }

        Ok(Self {
            records,
            candidates,
        })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Numeric columns usable as x variable.
    pub fn candidate_variables(&self) -> &[String] {
        &self.candidates
    }

    pub fn has_variable(&self, name: &str) -> bool {
        self.candidates.iter().any(|c| c == name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn parse_number(cell: &str) -> Option<f64> {
    cell.parse::<f64>().ok().filter(|v| v.is_finite())
}
