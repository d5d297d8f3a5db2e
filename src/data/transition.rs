//! Time-based attribute transitions.
//!
//! A [`Tween`] animates one attribute from its value at the moment the transition
//! started to a target. Retargeting mid-flight interrupts the running transition
//! and starts the new one from the current interpolated value.

/// Values that can be linearly interpolated.
pub trait Interpolate: Copy {
    fn lerp(a: Self, b: Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn lerp(a: Self, b: Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl<const N: usize> Interpolate for [f64; N] {
    fn lerp(a: Self, b: Self, t: f64) -> Self {
        let mut out = a;
        for i in 0..N {
            out[i] = a[i] + (b[i] - a[i]) * t;
        }
        out
    }
}

/// Cubic ease-in-out on `[0, 1]`.
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<T: Interpolate> {
    from: T,
    to: T,
    start: f64,
    duration: f64,
}

impl<T: Interpolate> Tween<T> {
    /// A settled tween resting at `value`.
    pub fn fixed(value: T) -> Self {
        Self {
            from: value,
            to: value,
            start: 0.0,
            duration: 0.0,
        }
    }

    /// Start at `from` and move to `to` over `duration` seconds beginning at `now`.
    pub fn new(from: T, to: T, now: f64, duration: f64) -> Self {
        Self {
            from,
            to,
            start: now,
            duration,
        }
    }

    /// Interpolated value at time `now`.
    pub fn value_at(&self, now: f64) -> T {
        if self.duration <= 0.0 || now >= self.start + self.duration {
            return self.to;
        }
        let t = ((now - self.start) / self.duration).clamp(0.0, 1.0);
        T::lerp(self.from, self.to, ease_cubic_in_out(t))
    }

    /// Final value of the current transition.
    pub fn target(&self) -> T {
        self.to
    }

    /// Replace the running transition with a new one towards `to`.
    pub fn retarget(&mut self, to: T, now: f64, duration: f64) {
        self.from = self.value_at(now);
        self.to = to;
        self.start = now;
        self.duration = duration;
    }

    pub fn is_settled(&self, now: f64) -> bool {
        self.duration <= 0.0 || now >= self.start + self.duration
    }
}
