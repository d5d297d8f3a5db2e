//! Linear scales and axis domain derivation.
//!
//! [`LinearScale`] maps a domain interval onto a pixel range and back. Domains are
//! "niced": rounded outward to multiples of a 1/2/5 × 10ⁿ tick step so axis labels
//! land on round numbers.

use super::dataset::Dataset;
use super::filter::VisibleSubset;
use super::record::Condition;

/// Domain used when there is nothing to plot.
pub const DEFAULT_DOMAIN: [f64; 2] = [0.0, 1.0];
/// Tick count hint used for nicing and tick generation.
pub const TICK_COUNT: usize = 10;

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// First tick index, last tick index and increment. A negative increment `-k`
/// means the step is `1 / k`, which keeps ticks exact for sub-unit steps.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let k = 10f64.powf(-power) / factor;
        i1 = (start * k).round();
        i2 = (stop * k).round();
        if i1 / k < start {
            i1 += 1.0;
        }
        if i2 / k > stop {
            i2 -= 1.0;
        }
        inc = -k;
    } else {
        let k = 10f64.powf(power) * factor;
        i1 = (start / k).round();
        i2 = (stop / k).round();
        if i1 * k < start {
            i1 += 1.0;
        }
        if i2 * k > stop {
            i2 -= 1.0;
        }
        inc = k;
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Signed tick increment (see [`tick_spec`]).
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    tick_spec(start, stop, count as f64).2
}

/// Round tick values covering `[start, stop]`.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_spec(lo, hi, count as f64);
    if !(i2 >= i1) {
        return Vec::new();
    }
    let n = (i2 - i1) as usize + 1;
    let mut out: Vec<f64> = (0..n)
        .map(|i| {
            let i = i1 + i as f64;
            if inc < 0.0 {
                i / -inc
            } else {
                i * inc
            }
        })
        .collect();
    if reverse {
        out.reverse();
    }
    out
}

/// Number of decimals needed to print ticks spaced `step` apart.
pub fn tick_decimals(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    (-step.log10() - 1e-9).ceil().max(0.0) as usize
}

// ─────────────────────────────────────────────────────────────────────────────
// LinearScale
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: [f64; 2],
    pub range: [f64; 2],
}

impl LinearScale {
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self { domain, range }
    }

    /// Domain → pixel. A zero-width domain maps everything to the range midpoint.
    pub fn forward(&self, v: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        let t = if d1 - d0 != 0.0 {
            (v - d0) / (d1 - d0)
        } else {
            0.5
        };
        r0 + t * (r1 - r0)
    }

    /// Pixel → domain.
    pub fn invert(&self, px: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        let t = if r1 - r0 != 0.0 {
            (px - r0) / (r1 - r0)
        } else {
            0.5
        };
        d0 + t * (d1 - d0)
    }

    /// Extend the domain outward to round tick boundaries.
    pub fn nice(mut self, count: usize) -> Self {
        self.domain = nice_domain(self.domain, count);
        self
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain[0], self.domain[1], count)
    }
}

/// Outward rounding of `[start, stop]`, repeated until the tick step is stable.
pub fn nice_domain(domain: [f64; 2], count: usize) -> [f64; 2] {
    let reverse = domain[1] < domain[0];
    let (mut start, mut stop) = if reverse {
        (domain[1], domain[0])
    } else {
        (domain[0], domain[1])
    };
    let mut prestep: Option<f64> = None;
    for _ in 0..10 {
        let step = tick_increment(start, stop, count);
        if prestep == Some(step) {
            break;
        } else if step > 0.0 {
            start = (start / step).floor() * step;
            stop = (stop / step).ceil() * step;
        } else if step < 0.0 {
            start = (start * step).ceil() / step;
            stop = (stop * step).floor() / step;
        } else {
            break;
        }
        prestep = Some(step);
    }
    // Normalise negative zero produced by the rounding above.
    let (start, stop) = (start + 0.0, stop + 0.0);
    if reverse {
        [stop, start]
    } else {
        [start, stop]
    }
}

/// Min/max of finite values, `None` for an empty input.
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<[f64; 2]> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some([v, v]),
            Some([lo, hi]) => Some([lo.min(v), hi.max(v)]),
        })
}

/// Niced domain for an extent; zero-width extents are widened by ±1 first.
pub fn nice_extent(extent: Option<[f64; 2]>) -> [f64; 2] {
    match extent {
        None => DEFAULT_DOMAIN,
        Some([lo, hi]) if lo == hi => nice_domain([lo - 1.0, hi + 1.0], TICK_COUNT),
        Some(e) => nice_domain(e, TICK_COUNT),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ScaleManager
// ─────────────────────────────────────────────────────────────────────────────

/// The x and y scales of the current view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleManager {
    pub x: LinearScale,
    pub y: LinearScale,
}

impl ScaleManager {
    /// Scales with default domains for a plot area of `width` × `height` pixels.
    pub fn empty(width: f64, height: f64) -> Self {
        Self {
            x: LinearScale::new(DEFAULT_DOMAIN, [0.0, width]),
            y: LinearScale::new(DEFAULT_DOMAIN, [height, 0.0]),
        }
    }

    /// x domain from the chosen variable, y domain from both response columns.
    pub fn derive(
        dataset: &Dataset,
        subset: &VisibleSubset,
        x_field: &str,
        width: f64,
        height: f64,
    ) -> Self {
        let x_ext = extent(subset.records(dataset).filter_map(|r| r.number(x_field)));
        let y_ext = extent(
            Condition::ALL
                .iter()
                .flat_map(|c| subset.records(dataset).filter_map(move |r| r.response(*c))),
        );
        Self {
            x: LinearScale::new(nice_extent(x_ext), [0.0, width]),
            y: LinearScale::new(nice_extent(y_ext), [height, 0.0]),
        }
    }
}
