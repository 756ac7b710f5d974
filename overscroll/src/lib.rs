//! Headless pull-to-refresh and infinite-scrolling controllers.
//!
//! For adapter-level utilities (surface binding, inset tweens), see the
//! `overscroll-adapter` crate.
//!
//! This crate implements the two small interaction state machines behind the
//! classic "pull down to refresh" and "load more near the end" behaviors. It
//! is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - scroll offset (signed; pulling past the top goes below the resting offset)
//! - viewport size and content size
//! - drag information (delivered as a flag on scroll updates)
//! - application of the content insets a controller asks for
//!
//! The controllers never block and never fail: misuse (stopping while already
//! stopped, triggering while loading) is a silent no-op. The asynchronous work
//! started by the action callback is entirely the caller's responsibility; a
//! controller stays in `Loading` until `stop_loading`/`stop_animating`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod infinite;
mod options;
mod overlay;
mod pull;
mod types;

#[cfg(test)]
mod tests;

pub use infinite::InfiniteScrolling;
pub use options::{
    ActionCallback, InfiniteOnChangeCallback, InfiniteScrollingOptions, PullOnChangeCallback,
    PullToRefreshOptions,
};
pub use overlay::{InfiniteOverlay, InfiniteOverlayContent, OverlayContent, PullOverlay};
pub use pull::PullToRefresh;
pub use types::{
    Color, DEFAULT_OVERLAY_HEIGHT, InfiniteState, Insets, RefreshState, ScrollMetrics,
    SpinnerStyle,
};
