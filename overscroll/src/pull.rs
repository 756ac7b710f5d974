use crate::overlay::{OverlayContent, PullOverlay};
use crate::types::{Color, Insets, RefreshState, ScrollMetrics, SpinnerStyle};
use crate::PullToRefreshOptions;

use alloc::string::String;

/// A headless pull-to-refresh controller.
///
/// This type holds no UI objects and no reference to the host container. An
/// adapter drives it by reporting scroll updates via [`Self::on_scroll`] and
/// applies the insets it asks for via [`Self::desired_insets`].
///
/// State machine: `Stopped -> Triggered -> Loading -> Stopped`, looping.
/// `Triggered` arms while the user drags past the threshold; the drag ending
/// (a scroll update with `dragging == false`) commits to `Loading`, which
/// snapshots the current insets, grows the top inset to make room for the
/// overlay, and fires the action callback exactly once. The controller then
/// waits for [`Self::stop_loading`].
///
/// `V` is the custom overlay content type; `()` when the default
/// title/subtitle/spinner overlay is enough.
#[derive(Clone, Debug)]
pub struct PullToRefresh<V = ()> {
    options: PullToRefreshOptions,
    overlay: PullOverlay<V>,
    state: RefreshState,
    enabled: bool,
    resting_insets: Insets,
    desired_insets: Insets,
    loading_snapshot: Option<Insets>,
}

impl<V> PullToRefresh<V> {
    pub fn new(options: PullToRefreshOptions) -> Self {
        let enabled = options.enabled;
        let resting_insets = options.resting_insets;
        odebug!(
            threshold = options.threshold,
            overlay_height = options.overlay_height,
            enabled,
            "PullToRefresh::new"
        );
        Self {
            state: if enabled {
                RefreshState::Stopped
            } else {
                RefreshState::Disabled
            },
            enabled,
            resting_insets,
            desired_insets: resting_insets,
            loading_snapshot: None,
            overlay: PullOverlay::new(),
            options,
        }
    }

    pub fn options(&self) -> &PullToRefreshOptions {
        &self.options
    }

    pub fn state(&self) -> RefreshState {
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

    /// The host's insets before any loading cycle touched them.
    pub fn resting_insets(&self) -> Insets {
        self.resting_insets
    }

    /// Records the host's untouched insets (e.g. at attach time, or when the
    /// host changes them for unrelated reasons). Ignored mid-`Loading`; the
    /// in-flight snapshot stays authoritative until [`Self::stop_loading`].
    pub fn set_resting_insets(&mut self, insets: Insets) {
        self.resting_insets = insets;
        if self.state != RefreshState::Loading {
            self.desired_insets = insets;
        }
    }

    pub fn spinner_active(&self) -> bool {
        self.state == RefreshState::Loading
    }

    pub fn overlay(&self) -> &PullOverlay<V> {
        &self.overlay
    }

    pub fn overlay_mut(&mut self) -> &mut PullOverlay<V> {
        &mut self.overlay
    }

    /// What a renderer should draw right now. `None` while disabled.
    pub fn overlay_content(&self) -> Option<OverlayContent<'_, V>> {
        self.overlay.content_for(self.state)
    }

    pub fn set_title(&mut self, title: impl Into<String>, state: RefreshState) {
        self.overlay.set_title(title, state);
    }

    pub fn set_subtitle(&mut self, subtitle: impl Into<String>, state: RefreshState) {
        self.overlay.set_subtitle(subtitle, state);
    }

    pub fn set_custom(&mut self, content: Option<V>, state: RefreshState) {
        self.overlay.set_custom(content, state);
    }

    pub fn set_custom_all(&mut self, content: Option<V>)
    where
        V: Clone,
    {
        self.overlay.set_custom_all(content);
    }

    /// Switches the overlay between its online and offline subtitle presets.
    pub fn set_online(&mut self, online: bool) {
        self.overlay.set_online(online);
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.overlay.set_text_color(color);
    }

    pub fn set_spinner_style(&mut self, style: SpinnerStyle) {
        self.overlay.set_spinner_style(style);
    }

    pub fn set_pushes_content_down_while_loading(&mut self, pushes: bool) {
        self.options.pushes_content_down_while_loading = pushes;
    }

    /// Enables or disables the controller.
    ///
    /// Disabling outside `Loading` moves straight to `Disabled`. Disabling
    /// mid-`Loading` leaves the state and the desired insets untouched until
    /// [`Self::stop_loading`], which then lands in `Disabled`.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        odebug!(enabled, state = ?self.state, "PullToRefresh::set_enabled");
        if enabled {
            if self.state == RefreshState::Disabled {
                self.set_state(RefreshState::Stopped);
            }
        } else if self.state != RefreshState::Loading {
            self.set_state(RefreshState::Disabled);
        }
    }

    /// Feeds one scroll update into the state machine.
    ///
    /// `offset` is the host's scroll offset (signed; pulling past the top goes
    /// below the resting offset `-resting_insets.top`). `dragging` reports
    /// whether the user's drag is still in progress; the `Triggered ->
    /// Loading` commit happens on the first update with `dragging == false`.
    pub fn on_scroll(&mut self, offset: i64, dragging: bool) {
        if matches!(self.state, RefreshState::Loading | RefreshState::Disabled) {
            return;
        }
        let pull = self.resting_offset() - offset;
        let threshold = self.options.threshold as i64;
        otrace!(offset, dragging, pull, "PullToRefresh::on_scroll");

        if !dragging && self.state == RefreshState::Triggered {
            self.begin_loading();
        } else if dragging && pull >= threshold && self.state == RefreshState::Stopped {
            self.set_state(RefreshState::Triggered);
        } else if pull < threshold && self.state == RefreshState::Triggered {
            self.set_state(RefreshState::Stopped);
        }
    }

    /// Convenience for adapters that poll the host in one go.
    pub fn apply_metrics(&mut self, metrics: ScrollMetrics) {
        self.on_scroll(metrics.offset, metrics.dragging);
    }

    /// Forces a loading cycle as if the user had pulled and released
    /// (`Stopped -> Triggered -> Loading`, callback fired once). No-op while
    /// `Loading` or disabled.
    pub fn trigger(&mut self) {
        if !self.enabled || self.state == RefreshState::Loading {
            return;
        }
        if self.state != RefreshState::Triggered {
            self.set_state(RefreshState::Triggered);
        }
        self.begin_loading();
    }

    /// The external completion signal: `Loading -> Stopped` (or `Disabled` if
    /// the controller was disabled in flight), restoring the inset snapshot.
    /// No-op in any other state.
    pub fn stop_loading(&mut self) {
        if self.state != RefreshState::Loading {
            return;
        }
        if let Some(snapshot) = self.loading_snapshot.take() {
            self.desired_insets = snapshot;
        }
        self.set_state(if self.enabled {
            RefreshState::Stopped
        } else {
            RefreshState::Disabled
        });
    }

    fn resting_offset(&self) -> i64 {
        -(self.resting_insets.top as i64)
    }

    fn begin_loading(&mut self) {
        debug_assert!(self.state != RefreshState::Loading, "re-entrant loading");
        let snapshot = self.desired_insets;
        self.loading_snapshot = Some(snapshot);
        if self.options.pushes_content_down_while_loading {
            self.desired_insets.top = snapshot.top.saturating_add(self.options.overlay_height);
        }
        self.set_state(RefreshState::Loading);
        if let Some(action) = &self.options.on_action {
            action();
        }
    }

    fn set_state(&mut self, state: RefreshState) {
        if self.state == state {
            return;
        }
        let previous = self.state;
        self.state = state;
        otrace!(?previous, current = ?state, "PullToRefresh state change");
        if let Some(on_change) = &self.options.on_change {
            on_change(previous, state);
        }
    }
}
