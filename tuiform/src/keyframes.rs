use std::time::{Duration, Instant};

/// Easing function applied to overall playback progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Apply easing to progress (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// A reusable keyframe track: offset/value stops sampled with linear
/// interpolation between neighbors. Purely presentational; nothing in the
/// widget state machinery depends on it.
#[derive(Debug, Clone, Default)]
pub struct Keyframes {
    stops: Vec<(f32, f32)>,
}

impl Keyframes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stop at `offset` (clamped to 0.0..=1.0), kept sorted.
    pub fn stop(mut self, offset: f32, value: f32) -> Self {
        let offset = offset.clamp(0.0, 1.0);
        let pos = self
            .stops
            .iter()
            .position(|(o, _)| *o > offset)
            .unwrap_or(self.stops.len());
        self.stops.insert(pos, (offset, value));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Sample the track at progress `t` (clamped to 0.0..=1.0).
    /// Before the first stop and after the last, the edge value holds.
    pub fn sample(&self, t: f32) -> f32 {
        let Some(&(first_offset, first_value)) = self.stops.first() else {
            return 0.0;
        };

        let t = t.clamp(0.0, 1.0);
        if t <= first_offset {
            return first_value;
        }

        for window in self.stops.windows(2) {
            let (from_offset, from_value) = window[0];
            let (to_offset, to_value) = window[1];
            if t <= to_offset {
                let span = to_offset - from_offset;
                if span <= f32::EPSILON {
                    return to_value;
                }
                let local = (t - from_offset) / span;
                return from_value + (to_value - from_value) * local;
            }
        }

        self.stops[self.stops.len() - 1].1
    }

    /// Horizontal shake, in cells: the classic attention nudge for a
    /// rejected form control.
    pub fn horizontal_shake() -> Self {
        Self::new()
            .stop(0.0, 0.0)
            .stop(0.1, -1.0)
            .stop(0.2, 2.0)
            .stop(0.3, -3.0)
            .stop(0.4, 3.0)
            .stop(0.5, -3.0)
            .stop(0.6, 3.0)
            .stop(0.7, -3.0)
            .stop(0.8, 2.0)
            .stop(0.9, -1.0)
            .stop(1.0, 0.0)
    }
}

/// Plays a keyframe track against wall-clock time.
#[derive(Debug, Clone)]
pub struct KeyframePlayer {
    frames: Keyframes,
    start: Instant,
    duration: Duration,
    easing: Easing,
}

impl KeyframePlayer {
    pub fn new(frames: Keyframes, duration: Duration) -> Self {
        Self {
            frames,
            start: Instant::now(),
            duration,
            easing: Easing::Linear,
        }
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn restart(&mut self) {
        self.start = Instant::now();
    }

    pub fn finished(&self) -> bool {
        self.start.elapsed() >= self.duration
    }

    /// Current track value.
    pub fn value(&self) -> f32 {
        self.value_at(self.start.elapsed())
    }

    /// Track value at a given elapsed time. Pure; used by tests and by
    /// hosts that drive their own clock.
    pub fn value_at(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return self.frames.sample(1.0);
        }
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        self.frames.sample(self.easing.apply(t))
    }
}
