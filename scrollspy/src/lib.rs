//! A headless scroll-spy engine for single-page sites.
//!
//! For the controller that drives a page (and the optional browser binding), see the
//! `scrollspy-adapter` crate.
//!
//! This crate holds the scroll math behind a sectioned page with a fixed navigation bar:
//! deciding which section is active for a scroll position, toggling the nav bar's "at top"
//! state, and easing an animated scroll toward a target when the environment has no native
//! smooth scrolling.
//!
//! It is UI-agnostic. A DOM/GUI layer is expected to provide:
//! - page metrics (scroll offset, viewport/document/header/nav/footer heights)
//! - section rectangles relative to the viewport
//! - frame timestamps for animated scrolling
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod animation;
mod key;
mod options;
mod section_map;
mod throttle;
mod tracker;
mod types;


pub use animation::{AnimationFrame, AnimationSlot, AnimationToken, Easing, ScrollAnimation};
pub use key::SectionKey;
pub use options::{
    DEFAULT_ACTIVATION_BUFFER, DEFAULT_BOTTOM_THRESHOLD, DEFAULT_CTA_TARGET, DEFAULT_DURATION_MS,
    DEFAULT_SCROLL_GAP, DEFAULT_TOP_BUFFER, SpyOptions,
};
pub use section_map::SectionMap;
pub use throttle::FrameThrottle;
pub use tracker::SectionTracker;
pub use types::{Evaluation, FragmentMode, PageMetrics, ScrollStrategy, SectionRect};
