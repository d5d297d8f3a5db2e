//! Interaction layer: pointer tracking and interpolation between the fitted lines.
//!
//! The layer is either [`InteractionState::Idle`] or tracking a pointer x position.
//! The readout is never stored; it is derived on demand from the pointer position
//! and the fits handed in by the caller, so a refit is reflected immediately.

use super::record::Condition;
use super::regression::{FittedLine, Regression};
use super::scale::ScaleManager;

/// Both fitted lines evaluated at one x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interpolation {
    pub x: f64,
    pub y_with: f64,
    pub y_without: f64,
    /// `y_with - y_without`.
    pub difference: f64,
    pub midpoint: f64,
}

pub fn interpolate(with: &FittedLine, without: &FittedLine, x: f64) -> Interpolation {
    let y_with = with.at(x);
    let y_without = without.at(x);
    Interpolation {
        x,
        y_with,
        y_without,
        difference: y_with - y_without,
        midpoint: (y_with + y_without) / 2.0,
    }
}

/// Vertical dashed line between the two fitted lines, in scene pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorLine {
    pub x: f64,
    pub y1: f64,
    pub y2: f64,
}

/// What the layer displays while tracking.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffReadout {
    /// Domain x under the pointer.
    pub x: f64,
    /// Line values, indexed by [`Condition::index`]; `None` for an undefined fit.
    pub values: [Option<f64>; 2],
    /// Present only when both fits are defined.
    pub interpolation: Option<Interpolation>,
    pub indicator: Option<IndicatorLine>,
    /// Scene position the label is attached to.
    pub anchor: [f64; 2],
}

impl DiffReadout {
    /// Label lines, each value rounded to `decimals`.
    pub fn lines(&self, decimals: usize) -> Vec<String> {
        let mut lines = vec![format!("x: {:.*}", decimals, self.x)];
        for c in Condition::ALL {
            if let Some(v) = self.values[c.index()] {
                lines.push(format!("{}: {:.*}", c.short_label(), decimals, v));
            }
        }
        if let Some(i) = &self.interpolation {
            lines.push(format!("Diff: {:.*}", decimals, i.difference));
        }
        lines
    }

    pub fn text(&self, decimals: usize) -> String {
        self.lines(decimals).join("\n")
    }
}

/// Readout for a pointer at scene x `x_px`. `None` when neither fit is defined
/// (which includes the empty subset), so nothing is shown.
pub fn probe(scales: &ScaleManager, fits: &[Regression; 2], x_px: f64) -> Option<DiffReadout> {
    let with = fits[Condition::WithMusic.index()].defined();
    let without = fits[Condition::WithoutMusic.index()].defined();
    if with.is_none() && without.is_none() {
        return None;
    }
    let x = scales.x.invert(x_px);
    let values = [with.map(|l| l.at(x)), without.map(|l| l.at(x))];
    let px = scales.x.forward(x);
    match (with, without) {
        (Some(w), Some(wo)) => {
            let interp = interpolate(&w, &wo, x);
            Some(DiffReadout {
                x,
                values,
                interpolation: Some(interp),
                indicator: Some(IndicatorLine {
                    x: px,
                    y1: scales.y.forward(interp.y_with),
                    y2: scales.y.forward(interp.y_without),
                }),
                anchor: [px, scales.y.forward(interp.midpoint)],
            })
        }
        _ => {
            let y = values.iter().flatten().next().copied().unwrap_or(0.0);
            Some(DiffReadout {
                x,
                values,
                interpolation: None,
                indicator: None,
                anchor: [px, scales.y.forward(y)],
            })
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    /// Pointer over the hit target at this scene x.
    Tracking { x_px: f64 },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionLayer {
    state: InteractionState,
}

impl InteractionLayer {
    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn track(&mut self, x_px: f64) {
        self.state = InteractionState::Tracking { x_px };
    }

    pub fn leave(&mut self) {
        self.state = InteractionState::Idle;
    }

    /// Current readout against the given scales and fits.
    pub fn readout(&self, scales: &ScaleManager, fits: &[Regression; 2]) -> Option<DiffReadout> {
        match self.state {
            InteractionState::Idle => None,
            InteractionState::Tracking { x_px } => probe(scales, fits, x_px),
        }
    }
}
