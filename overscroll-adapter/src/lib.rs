//! Adapter utilities for the `overscroll` crate.
//!
//! The `overscroll` crate is UI-agnostic and focuses on the two interaction
//! state machines. This crate provides small, framework-neutral helpers for
//! wiring them to a real scrollable container:
//!
//! - [`ScrollSurface`]: the trait a host container wrapper implements
//! - [`PullToRefreshAttachment`] / [`InfiniteScrollingAttachment`]: bindings
//!   that hold the host weakly, poll it on scroll events, and animate content
//!   insets toward what the controller asks for
//! - [`InsetTween`]: tween-based inset animation (adapter-driven, via
//!   `tick(now_ms)`)
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod attach;
mod surface;
mod tween;


pub use attach::{
    DEFAULT_TWEEN_DURATION_MS, InfiniteScrollingAttachment, PullToRefreshAttachment,
};
pub use surface::ScrollSurface;
pub use tween::{Easing, InsetTween};
