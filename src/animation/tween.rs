use crate::{
    animation::ease::Ease,
    foundation::{color::Rgba8, core::Millis, core::Point},
};

/// Values that can be interpolated by a [`Tween`].
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` at eased progress `t`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Point {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a.lerp(*b, t)
    }
}

impl Lerp for Rgba8 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a.mix(*b, t)
    }
}

/// A single value animated from `from` to `to` over `[start, start + duration]`.
///
/// Before `start` the tween holds `from`; after the end it holds `to`. A zero duration jumps
/// straight to `to`.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween<T> {
    /// Value at `start`.
    pub from: T,
    /// Value at `start + duration`.
    pub to: T,
    /// Virtual time the tween starts.
    pub start: Millis,
    /// Tween length.
    pub duration: Millis,
    /// Progress easing.
    pub ease: Ease,
}

impl<T> Tween<T>
where
    T: Lerp + Clone,
{
    /// A tween that holds `value` forever.
    pub fn hold(value: T) -> Self {
        Self {
            from: value.clone(),
            to: value,
            start: Millis::ZERO,
            duration: Millis::ZERO,
            ease: Ease::Linear,
        }
    }

    /// Animate from `from` to `to` starting at `start`.
    pub fn new(from: T, to: T, start: Millis, duration: Millis, ease: Ease) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            ease,
        }
    }

    /// Virtual time at which the tween reaches `to`.
    pub fn end(&self) -> Millis {
        self.start.saturating_add(self.duration)
    }

    /// Raw (un-eased) progress in `[0, 1]`.
    pub fn progress(&self, now: Millis) -> f64 {
        if self.duration.0 == 0 {
            return if now >= self.start { 1.0 } else { 0.0 };
        }
        let elapsed = now.saturating_sub(self.start).0 as f64;
        (elapsed / self.duration.0 as f64).clamp(0.0, 1.0)
    }

    /// Return `true` once `now` has reached the end of the tween.
    pub fn is_finished(&self, now: Millis) -> bool {
        now >= self.end()
    }

    /// Sample the eased value at `now`.
    pub fn sample(&self, now: Millis) -> T {
        let p = self.progress(now);
        if p <= 0.0 {
            return self.from.clone();
        }
        if p >= 1.0 {
            return self.to.clone();
        }
        T::lerp(&self.from, &self.to, self.ease.apply(p))
    }

    /// Retarget: start a new tween at `now` from the current sampled value toward `to`.
    ///
    /// Interrupting a running tween continues from wherever it currently is.
    pub fn retarget(&self, to: T, now: Millis, duration: Millis, ease: Ease) -> Self {
        Self::new(self.sample(now), to, now, duration, ease)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
