//! Adapter utilities for the `scrollspy` crate.
//!
//! The `scrollspy` crate is UI-agnostic and focuses on the core math and state. This crate
//! provides the page-level workflow on top of it:
//!
//! - A [`Page`] trait describing what is read from and written to the document
//! - A [`Controller`] wiring throttled section tracking and the animated scroll fallback
//! - With `feature = "web"`, a `web-sys` binding that installs the controller on a live page
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(not(feature = "web"), forbid(unsafe_code))]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod page;
mod selectors;
mod trigger;

#[cfg(feature = "web")]
pub mod web;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use page::{Page, PageLayout};
pub use selectors::Selectors;
pub use trigger::{ClickOutcome, Trigger};

pub use scrollspy;
