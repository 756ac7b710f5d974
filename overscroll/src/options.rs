use alloc::sync::Arc;

use crate::types::{DEFAULT_OVERLAY_HEIGHT, InfiniteState, Insets, RefreshState};

/// The caller-supplied unit of work invoked once per `Loading` transition.
///
/// Completion must be signaled externally via `stop_loading` /
/// `stop_animating`; the controller never times out on its own.
pub type ActionCallback = Arc<dyn Fn() + Send + Sync>;

/// A callback fired on every pull-to-refresh state transition.
///
/// The arguments are `(previous, current)`.
pub type PullOnChangeCallback = Arc<dyn Fn(RefreshState, RefreshState) + Send + Sync>;

/// A callback fired on every infinite-scrolling state transition.
///
/// The arguments are `(previous, current)`.
pub type InfiniteOnChangeCallback = Arc<dyn Fn(InfiniteState, InfiniteState) + Send + Sync>;

/// Configuration for [`crate::PullToRefresh`].
///
/// Cheap to clone: the callbacks are stored in `Arc`s.
#[derive(Clone)]
pub struct PullToRefreshOptions {
    /// Pull distance (past the resting offset) required to arm the trigger.
    pub threshold: u32,
    /// Height reserved for the overlay while loading.
    pub overlay_height: u32,
    pub enabled: bool,
    /// When `true` (the default), entering `Loading` grows the top inset by
    /// `overlay_height` so content sits below the overlay. When `false`, the
    /// insets are left alone and the overlay floats over the content.
    pub pushes_content_down_while_loading: bool,
    /// The host's content insets before this controller touches them.
    pub resting_insets: Insets,
    pub on_action: Option<ActionCallback>,
    pub on_change: Option<PullOnChangeCallback>,
}

impl PullToRefreshOptions {
    /// Creates options with the given action callback and default geometry
    /// (threshold and overlay height both [`DEFAULT_OVERLAY_HEIGHT`]).
    pub fn new(on_action: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            threshold: DEFAULT_OVERLAY_HEIGHT,
            overlay_height: DEFAULT_OVERLAY_HEIGHT,
            enabled: true,
            pushes_content_down_while_loading: true,
            resting_insets: Insets::default(),
            on_action: Some(Arc::new(on_action)),
            on_change: None,
        }
    }

    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_overlay_height(mut self, overlay_height: u32) -> Self {
        self.overlay_height = overlay_height;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_pushes_content_down_while_loading(mut self, pushes: bool) -> Self {
        self.pushes_content_down_while_loading = pushes;
        self
    }

    pub fn with_resting_insets(mut self, resting_insets: Insets) -> Self {
        self.resting_insets = resting_insets;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(RefreshState, RefreshState) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl Default for PullToRefreshOptions {
    /// Options with no action callback; useful when the callback is wired up
    /// later or state is observed through `on_change` only.
    fn default() -> Self {
        Self {
            threshold: DEFAULT_OVERLAY_HEIGHT,
            overlay_height: DEFAULT_OVERLAY_HEIGHT,
            enabled: true,
            pushes_content_down_while_loading: true,
            resting_insets: Insets::default(),
            on_action: None,
            on_change: None,
        }
    }
}

impl core::fmt::Debug for PullToRefreshOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PullToRefreshOptions")
            .field("threshold", &self.threshold)
            .field("overlay_height", &self.overlay_height)
            .field("enabled", &self.enabled)
            .field(
                "pushes_content_down_while_loading",
                &self.pushes_content_down_while_loading,
            )
            .field("resting_insets", &self.resting_insets)
            .finish_non_exhaustive()
    }
}

/// Configuration for [`crate::InfiniteScrolling`].
///
/// Cheap to clone: the callbacks are stored in `Arc`s.
#[derive(Clone)]
pub struct InfiniteScrollingOptions {
    /// Distance from the content end at which loading starts. `0` means the
    /// visible bottom edge must reach the content end exactly.
    pub trigger_distance: u32,
    /// Height reserved for the overlay (as extra bottom inset) while loading.
    pub overlay_height: u32,
    pub enabled: bool,
    /// The host's content insets before this controller touches them.
    pub resting_insets: Insets,
    pub on_action: Option<ActionCallback>,
    pub on_change: Option<InfiniteOnChangeCallback>,
}

impl InfiniteScrollingOptions {
    /// Creates options with the given action callback, a zero trigger
    /// distance, and the default overlay height.
    pub fn new(on_action: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            trigger_distance: 0,
            overlay_height: DEFAULT_OVERLAY_HEIGHT,
            enabled: true,
            resting_insets: Insets::default(),
            on_action: Some(Arc::new(on_action)),
            on_change: None,
        }
    }

    pub fn with_trigger_distance(mut self, trigger_distance: u32) -> Self {
        self.trigger_distance = trigger_distance;
        self
    }

    pub fn with_overlay_height(mut self, overlay_height: u32) -> Self {
        self.overlay_height = overlay_height;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_resting_insets(mut self, resting_insets: Insets) -> Self {
        self.resting_insets = resting_insets;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(InfiniteState, InfiniteState) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl Default for InfiniteScrollingOptions {
    /// Options with no action callback; useful when the callback is wired up
    /// later or state is observed through `on_change` only.
    fn default() -> Self {
        Self {
            trigger_distance: 0,
            overlay_height: DEFAULT_OVERLAY_HEIGHT,
            enabled: true,
            resting_insets: Insets::default(),
            on_action: None,
            on_change: None,
        }
    }
}

impl core::fmt::Debug for InfiniteScrollingOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InfiniteScrollingOptions")
            .field("trigger_distance", &self.trigger_distance)
            .field("overlay_height", &self.overlay_height)
            .field("enabled", &self.enabled)
            .field("resting_insets", &self.resting_insets)
            .finish_non_exhaustive()
    }
}
