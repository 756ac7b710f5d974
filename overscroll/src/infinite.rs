use crate::overlay::{InfiniteOverlay, InfiniteOverlayContent};
use crate::types::{InfiniteState, Insets, ScrollMetrics, SpinnerStyle};
use crate::InfiniteScrollingOptions;

/// A headless infinite-scrolling controller.
///
/// Observes the scroll offset relative to the content size and, when the
/// visible bottom edge comes within `trigger_distance` of the content's end,
/// runs `Stopped -> Triggered -> Loading` in one step: the bottom inset grows
/// by the overlay height, the spinner becomes active, and the action callback
/// fires exactly once. The controller then waits for
/// [`Self::stop_animating`].
///
/// Unlike pull-to-refresh there is no `Disabled` state; a plain enabled flag
/// suppresses transitions and hides the overlay.
#[derive(Clone, Debug)]
pub struct InfiniteScrolling<V = ()> {
    options: InfiniteScrollingOptions,
    overlay: InfiniteOverlay<V>,
    state: InfiniteState,
    enabled: bool,
    offset: i64,
    viewport: u32,
    content_size: u64,
    resting_insets: Insets,
    desired_insets: Insets,
    loading_snapshot: Option<Insets>,
}

impl<V> InfiniteScrolling<V> {
    pub fn new(options: InfiniteScrollingOptions) -> Self {
        let enabled = options.enabled;
        let resting_insets = options.resting_insets;
        odebug!(
            trigger_distance = options.trigger_distance,
            overlay_height = options.overlay_height,
            enabled,
            "InfiniteScrolling::new"
        );
        Self {
            state: InfiniteState::Stopped,
            enabled,
            offset: 0,
            viewport: 0,
            content_size: 0,
            resting_insets,
            desired_insets: resting_insets,
            loading_snapshot: None,
            overlay: InfiniteOverlay::new(),
            options,
        }
    }

    pub fn options(&self) -> &InfiniteScrollingOptions {
        &self.options
    }

    pub fn state(&self) -> InfiniteState {
        self.state
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// The insets this controller currently wants the host to have. Equal to
    /// [`Self::resting_insets`] except while loading.
    pub fn desired_insets(&self) -> Insets {
        self.desired_insets
    }

    pub fn resting_insets(&self) -> Insets {
        self.resting_insets
    }

    /// Records the host's untouched insets. Ignored mid-`Loading`; the
    /// in-flight snapshot stays authoritative until [`Self::stop_animating`].
    pub fn set_resting_insets(&mut self, insets: Insets) {
        self.resting_insets = insets;
        if self.state != InfiniteState::Loading {
            self.desired_insets = insets;
        }
    }

    pub fn spinner_active(&self) -> bool {
        self.state == InfiniteState::Loading
    }

    pub fn overlay(&self) -> &InfiniteOverlay<V> {
        &self.overlay
    }

    pub fn overlay_mut(&mut self) -> &mut InfiniteOverlay<V> {
        &mut self.overlay
    }

    /// What a renderer should draw right now. `Hidden` while disabled.
    pub fn overlay_content(&self) -> InfiniteOverlayContent<'_, V> {
        if !self.enabled {
            return InfiniteOverlayContent::Hidden;
        }
        self.overlay.content_for(self.state)
    }

    pub fn set_custom(&mut self, content: Option<V>, state: InfiniteState) {
        self.overlay.set_custom(content, state);
    }

    pub fn set_custom_all(&mut self, content: Option<V>)
    where
        V: Clone,
    {
        self.overlay.set_custom_all(content);
    }

    pub fn set_spinner_style(&mut self, style: SpinnerStyle) {
        self.overlay.set_spinner_style(style);
    }

    /// Enables or disables the controller.
    ///
    /// Disabling mid-`Loading` leaves the state and the desired insets
    /// untouched until [`Self::stop_animating`]. A `Triggered` that has not
    /// committed yet falls back to `Stopped`.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        odebug!(enabled, state = ?self.state, "InfiniteScrolling::set_enabled");
        if !enabled && self.state == InfiniteState::Triggered {
            self.set_state(InfiniteState::Stopped);
        }
        if enabled {
            self.evaluate();
        }
    }

    /// Feeds one scroll-offset update into the state machine.
    pub fn on_scroll(&mut self, offset: i64) {
        self.offset = offset;
        otrace!(offset, "InfiniteScrolling::on_scroll");
        self.evaluate();
    }

    /// Reports the host's viewport size. Re-evaluates the trigger condition.
    pub fn set_viewport(&mut self, viewport: u32) {
        self.viewport = viewport;
        self.evaluate();
    }

    /// Reports the host's content size. Re-evaluates the trigger condition:
    /// content shrinking (or the viewport growing) can start a load without
    /// any scroll event.
    pub fn set_content_size(&mut self, content_size: u64) {
        self.content_size = content_size;
        self.evaluate();
    }

    /// Stores offset, viewport, and content size in one go, evaluating the
    /// trigger condition once.
    pub fn apply_metrics(&mut self, metrics: ScrollMetrics) {
        self.offset = metrics.offset;
        self.viewport = metrics.viewport;
        self.content_size = metrics.content_size;
        self.evaluate();
    }

    /// Forces a loading cycle without a scroll event
    /// (`Stopped -> Triggered -> Loading`, callback fired once). No-op while
    /// `Loading` or disabled.
    pub fn trigger(&mut self) {
        if !self.enabled || self.state == InfiniteState::Loading {
            return;
        }
        if self.state != InfiniteState::Triggered {
            self.set_state(InfiniteState::Triggered);
        }
        self.begin_loading();
    }

    /// The external completion signal: `Loading -> Stopped`, restoring the
    /// inset snapshot. No-op in any other state.
    pub fn stop_animating(&mut self) {
        if self.state != InfiniteState::Loading {
            return;
        }
        if let Some(snapshot) = self.loading_snapshot.take() {
            self.desired_insets = snapshot;
        }
        self.set_state(InfiniteState::Stopped);
    }

    fn evaluate(&mut self) {
        if !self.enabled || self.state != InfiniteState::Stopped {
            return;
        }
        let viewport = self.viewport as u64;
        // Content that fits in the viewport never triggers; otherwise an
        // empty list would start loading before the user does anything.
        if self.content_size <= viewport {
            return;
        }
        let visible_end = self.offset.max(0) as u64 + viewport;
        let threshold = self
            .content_size
            .saturating_sub(self.options.trigger_distance as u64);
        if visible_end >= threshold {
            self.set_state(InfiniteState::Triggered);
            self.begin_loading();
        }
    }

    fn begin_loading(&mut self) {
        debug_assert!(self.state != InfiniteState::Loading, "re-entrant loading");
        let snapshot = self.desired_insets;
        self.loading_snapshot = Some(snapshot);
        self.desired_insets.bottom = snapshot.bottom.saturating_add(self.options.overlay_height);
        self.set_state(InfiniteState::Loading);
        if let Some(action) = &self.options.on_action {
            action();
        }
    }

    fn set_state(&mut self, state: InfiniteState) {
        if self.state == state {
            return;
        }
        let previous = self.state;
        self.state = state;
        otrace!(?previous, current = ?state, "InfiniteScrolling state change");
        if let Some(on_change) = &self.options.on_change {
            on_change(previous, state);
        }
    }
}
