use alloc::string::String;

use crate::{Easing, FragmentMode};

/// Default transition buffer below the header for the "at top" state.
pub const DEFAULT_TOP_BUFFER: f64 = 100.0;
/// Default distance from the footer at which the last section is forced active.
pub const DEFAULT_BOTTOM_THRESHOLD: f64 = 50.0;
/// Default distance of the activation line below the nav bar.
pub const DEFAULT_ACTIVATION_BUFFER: f64 = 100.0;
/// Default gap left between the nav bar and a scroll target.
pub const DEFAULT_SCROLL_GAP: f64 = 10.0;
/// Default duration of an animated scroll.
pub const DEFAULT_DURATION_MS: f64 = 800.0;
/// Section a header call-to-action button scrolls to by default.
pub const DEFAULT_CTA_TARGET: &str = "contacto";

/// Configuration for [`crate::SectionTracker`] and the animated scroll fallback.
///
/// Every field defaults to the constants the site was tuned with; adapters usually keep the
/// defaults and only override `cta_target`.
///
/// With `feature = "serde"`, missing fields deserialize to the same defaults as
/// [`SpyOptions::default`], including `cta_target`. An explicit `null` disables the button.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "K: serde::Serialize",
        deserialize = "K: serde::Deserialize<'de> + From<&'static str>"
    ))
)]
pub struct SpyOptions<K = String> {
    /// The nav bar is "at top" while `scroll_offset < header_height - top_buffer`.
    #[cfg_attr(feature = "serde", serde(default = "default_top_buffer"))]
    pub top_buffer: f64,
    /// The last section is forced active once
    /// `viewport_bottom > document_height - footer_height - bottom_threshold`.
    #[cfg_attr(feature = "serde", serde(default = "default_bottom_threshold"))]
    pub bottom_threshold: f64,
    /// The activation line sits at `nav_height + activation_buffer` below the viewport top.
    #[cfg_attr(feature = "serde", serde(default = "default_activation_buffer"))]
    pub activation_buffer: f64,
    /// Space kept between the nav bar and the top of a scroll target.
    #[cfg_attr(feature = "serde", serde(default = "default_scroll_gap"))]
    pub scroll_gap: f64,
    #[cfg_attr(feature = "serde", serde(default = "default_duration_ms"))]
    pub duration_ms: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub easing: Easing,
    #[cfg_attr(feature = "serde", serde(default))]
    pub fragment_mode: FragmentMode,
    /// Section targeted by the header call-to-action button. `None` disables the button.
    #[cfg_attr(feature = "serde", serde(default = "default_cta_target"))]
    pub cta_target: Option<K>,
}

impl<K> SpyOptions<K> {
    /// Options with the default constants and no call-to-action target.
    pub fn new() -> Self {
        Self {
            top_buffer: DEFAULT_TOP_BUFFER,
            bottom_threshold: DEFAULT_BOTTOM_THRESHOLD,
            activation_buffer: DEFAULT_ACTIVATION_BUFFER,
            scroll_gap: DEFAULT_SCROLL_GAP,
            duration_ms: DEFAULT_DURATION_MS,
            easing: Easing::EaseOutCubic,
            fragment_mode: FragmentMode::Push,
            cta_target: None,
        }
    }

    pub fn with_top_buffer(mut self, top_buffer: f64) -> Self {
        self.top_buffer = top_buffer;
        self
    }

    pub fn with_bottom_threshold(mut self, bottom_threshold: f64) -> Self {
        self.bottom_threshold = bottom_threshold;
        self
    }

    pub fn with_activation_buffer(mut self, activation_buffer: f64) -> Self {
        self.activation_buffer = activation_buffer;
        self
    }

    pub fn with_scroll_gap(mut self, scroll_gap: f64) -> Self {
        self.scroll_gap = scroll_gap;
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_fragment_mode(mut self, fragment_mode: FragmentMode) -> Self {
        self.fragment_mode = fragment_mode;
        self
    }

    pub fn with_cta_target(mut self, cta_target: Option<K>) -> Self {
        self.cta_target = cta_target;
        self
    }

    /// The activation line for a given nav bar height.
    pub fn activation_line(&self, nav_height: f64) -> f64 {
        nav_height + self.activation_buffer
    }
}

impl Default for SpyOptions<String> {
    fn default() -> Self {
        Self::new().with_cta_target(Some(String::from(DEFAULT_CTA_TARGET)))
    }
}

#[cfg(feature = "serde")]
fn default_top_buffer() -> f64 {
    DEFAULT_TOP_BUFFER
}

#[cfg(feature = "serde")]
fn default_bottom_threshold() -> f64 {
    DEFAULT_BOTTOM_THRESHOLD
}

#[cfg(feature = "serde")]
fn default_activation_buffer() -> f64 {
    DEFAULT_ACTIVATION_BUFFER
}

#[cfg(feature = "serde")]
fn default_scroll_gap() -> f64 {
    DEFAULT_SCROLL_GAP
}

#[cfg(feature = "serde")]
fn default_duration_ms() -> f64 {
    DEFAULT_DURATION_MS
}

#[cfg(feature = "serde")]
fn default_cta_target<K: From<&'static str>>() -> Option<K> {
    Some(K::from(DEFAULT_CTA_TARGET))
}
