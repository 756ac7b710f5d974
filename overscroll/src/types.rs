/// Default height of the refresh/loading overlay, in scroll-axis units.
pub const DEFAULT_OVERLAY_HEIGHT: u32 = 60;

/// Pull-to-refresh interaction state.
///
/// `Disabled` is a real state (not just a flag) so that `state()` reflects
/// what a renderer should show; the one exception is disabling mid-`Loading`,
/// which keeps `Loading` current until the completion signal arrives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RefreshState {
    Stopped,
    Triggered,
    Loading,
    Disabled,
}

/// Infinite-scrolling interaction state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InfiniteState {
    Stopped,
    Triggered,
    Loading,
}

/// Content insets of the host scrollable container.
///
/// Only `top` (pull-to-refresh) and `bottom` (infinite-scrolling) are ever
/// changed by this crate; `left`/`right` pass through snapshots untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Insets {
    pub top: u32,
    pub left: u32,
    pub bottom: u32,
    pub right: u32,
}

impl Insets {
    pub const fn new(top: u32, left: u32, bottom: u32, right: u32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    pub const fn vertical(top: u32, bottom: u32) -> Self {
        Self::new(top, 0, bottom, 0)
    }
}

/// A snapshot of the host's scroll geometry, as reported by an adapter.
///
/// `offset` is signed: the resting offset for an unscrolled container with a
/// top inset `t` is `-t`, and pulling further down goes more negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollMetrics {
    pub offset: i64,
    pub viewport: u32,
    pub content_size: u64,
    pub dragging: bool,
}

/// Spinner flavor for the default overlay content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpinnerStyle {
    #[default]
    Small,
    Large,
}

/// RGBA text color for the default overlay labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const DARK_GRAY: Self = Self::rgb(85, 85, 85);
}

impl Default for Color {
    fn default() -> Self {
        Self::DARK_GRAY
    }
}
