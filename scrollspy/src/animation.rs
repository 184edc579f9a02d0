/// Easing curves for animated scrolling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    /// `1 - (1 - t)^3`: fast start, gentle landing.
    #[default]
    EaseOutCubic,
}

impl Easing {
    pub fn sample(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::EaseOutCubic => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
        }
    }
}

/// One sampled animation frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationFrame {
    /// Scroll offset to write for this frame.
    pub offset: f64,
    /// `true` on the final frame; no further frames should be requested.
    pub done: bool,
}

/// A single eased scroll from `from` to `to`.
///
/// The start timestamp is taken from the first sampled frame, so the animation starts when the
/// display first refreshes after the trigger rather than when it was created.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollAnimation {
    pub from: f64,
    pub to: f64,
    pub start_ms: Option<f64>,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl ScrollAnimation {
    pub fn new(from: f64, to: f64, duration_ms: f64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms: None,
            duration_ms,
            easing,
        }
    }

    /// Scroll offset that puts an element's top edge `gap` below the nav bar.
    ///
    /// `rect_top` is the element's top relative to the viewport.
    pub fn target_offset(rect_top: f64, scroll_offset: f64, nav_height: f64, gap: f64) -> f64 {
        rect_top + scroll_offset - nav_height - gap
    }

    pub fn is_started(&self) -> bool {
        self.start_ms.is_some()
    }

    /// Normalized progress in `[0, 1]` at `now_ms`.
    ///
    /// A non-positive (or NaN) duration saturates to 1 immediately.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms.is_nan() || self.duration_ms <= 0.0 {
            return 1.0;
        }
        let start = self.start_ms.unwrap_or(now_ms);
        let elapsed = (now_ms - start).max(0.0);
        (elapsed / self.duration_ms).min(1.0)
    }

    pub fn is_done(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Samples the animation, stamping the start time on the first call.
    pub fn sample(&mut self, now_ms: f64) -> AnimationFrame {
        if self.start_ms.is_none() {
            self.start_ms = Some(now_ms);
        }
        let progress = self.progress(now_ms);
        let eased = self.easing.sample(progress);
        let offset = if progress >= 1.0 {
            self.to
        } else {
            self.from + (self.to - self.from) * eased
        };
        AnimationFrame {
            offset,
            done: progress >= 1.0,
        }
    }
}

/// Identifies one started animation. Tokens from superseded animations are rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationToken(u64);

impl AnimationToken {
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Holds at most one in-flight [`ScrollAnimation`].
///
/// Starting a new animation bumps the generation, so the frame callbacks of an older animation
/// stop at their next step instead of fighting over the scroll position.
#[derive(Clone, Debug, Default)]
pub struct AnimationSlot {
    generation: u64,
    current: Option<ScrollAnimation>,
}

impl AnimationSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, animation: ScrollAnimation) -> AnimationToken {
        if self.current.is_some() {
            sdebug!(
                generation = self.generation,
                "AnimationSlot: superseding in-flight animation"
            );
        }
        self.generation = self.generation.wrapping_add(1);
        self.current = Some(animation);
        AnimationToken(self.generation)
    }

    pub fn is_current(&self, token: AnimationToken) -> bool {
        self.current.is_some() && token.0 == self.generation
    }

    pub fn is_animating(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&ScrollAnimation> {
        self.current.as_ref()
    }

    pub fn cancel(&mut self) {
        self.current = None;
    }

    /// Advances the animation owned by `token`.
    ///
    /// Returns `None` when the token is stale or nothing is animating. The slot empties itself
    /// after returning the final frame.
    pub fn step(&mut self, token: AnimationToken, now_ms: f64) -> Option<AnimationFrame> {
        if token.0 != self.generation {
            strace!(
                token = token.0,
                generation = self.generation,
                "AnimationSlot: stale token"
            );
            return None;
        }
        let animation = self.current.as_mut()?;
        let frame = animation.sample(now_ms);
        if frame.done {
            self.current = None;
        }
        Some(frame)
    }
}
