//! Ordinary least-squares line fitting.

use super::record::Record;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittedLine {
    pub slope: f64,
    pub intercept: f64,
}

impl FittedLine {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Value of the line at `x`.
    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    pub fn is_finite(&self) -> bool {
        self.slope.is_finite() && self.intercept.is_finite()
    }
}

/// Result of a fit. `line` is non-finite when the fit is undefined: fewer than
/// two samples, or every sample at the same x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Regression {
    pub line: FittedLine,
    pub samples: usize,
}

impl Regression {
    /// The fitted line, or `None` when the regression is undefined.
    pub fn defined(&self) -> Option<FittedLine> {
        self.line.is_finite().then_some(self.line)
    }

    pub fn is_defined(&self) -> bool {
        self.line.is_finite()
    }
}

/// Fit `y_field` against `x_field` over records that have both fields.
pub fn fit<'a>(
    records: impl IntoIterator<Item = &'a Record>,
    x_field: &str,
    y_field: &str,
) -> Regression {
    let points: Vec<[f64; 2]> = records
        .into_iter()
        .filter_map(|r| Some([r.number(x_field)?, r.number(y_field)?]))
        .collect();
    fit_points(&points)
}

/// Fit raw `[x, y]` pairs.
///
/// Undefined when fewer than two samples or every x is equal. Checked on the
/// inputs: the rounded mean of a repeated x can leave a nonzero spread.
pub fn fit_points(points: &[[f64; 2]]) -> Regression {
    let single_x = match points.first() {
        None => true,
        Some(first) => points.iter().all(|p| p[0] == first[0]),
    };
    if single_x {
        return Regression {
            line: FittedLine::new(f64::NAN, f64::NAN),
            samples: points.len(),
        };
    }
    let n = points.len() as f64;
    let mean_x = points.iter().map(|p| p[0]).sum::<f64>() / n;
    let mean_y = points.iter().map(|p| p[1]).sum::<f64>() / n;
    let mut sxy = 0.0;
    let mut sxx = 0.0;
    for p in points {
        let dx = p[0] - mean_x;
        sxy += dx * (p[1] - mean_y);
        sxx += dx * dx;
    }
    let slope = sxy / sxx;
    Regression {
        line: FittedLine::new(slope, mean_y - slope * mean_x),
        samples: points.len(),
    }
}
