use alloc::sync::{Arc, Weak};

use overscroll::{InfiniteScrolling, Insets, PullToRefresh};

use crate::{Easing, InsetTween, ScrollSurface};

/// Default duration for inset tweens started by attachments.
pub const DEFAULT_TWEEN_DURATION_MS: u64 = 250;

/// Binds a [`PullToRefresh`] controller to a host surface.
///
/// The surface is held through a `Weak`: the attachment never extends the
/// host's lifetime, and once the host is gone every operation is a no-op.
///
/// An adapter drives this by calling:
/// - [`Self::on_scroll_event`] whenever the host reports a scroll update
/// - [`Self::tick`] each frame/timer tick while [`Self::is_animating`]
///
/// Inset changes requested by the controller are either applied immediately
/// (`animated = false`) or tweened toward over [`Self::tick`] calls. The
/// attachment only ever writes the top inset edge; the other edges pass
/// through whatever the surface currently has, so an
/// [`InfiniteScrollingAttachment`] on the same host is never disturbed.
pub struct PullToRefreshAttachment<S, V = ()> {
    surface: Weak<S>,
    controller: PullToRefresh<V>,
    tween: Option<InsetTween>,
    duration_ms: u64,
    easing: Easing,
}

impl<S: ScrollSurface, V> PullToRefreshAttachment<S, V> {
    /// Installs the controller on `surface`, snapshotting the surface's
    /// current insets as the resting insets.
    pub fn attach(surface: &Arc<S>, mut controller: PullToRefresh<V>) -> Self {
        controller.set_resting_insets(surface.content_insets());
        Self {
            surface: Arc::downgrade(surface),
            controller,
            tween: None,
            duration_ms: DEFAULT_TWEEN_DURATION_MS,
            easing: Easing::SmoothStep,
        }
    }

    pub fn with_animation(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.duration_ms = duration_ms;
        self.easing = easing;
        self
    }

    pub fn controller(&self) -> &PullToRefresh<V> {
        &self.controller
    }

    /// Mutable access for overlay configuration (titles, custom content,
    /// spinner style). State transitions should go through the attachment
    /// methods so insets stay in sync with the host.
    pub fn controller_mut(&mut self) -> &mut PullToRefresh<V> {
        &mut self.controller
    }

    pub fn into_controller(self) -> PullToRefresh<V> {
        self.controller
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    /// Polls the surface and feeds the scroll update into the controller,
    /// starting an inset tween if the controller entered or left `Loading`.
    pub fn on_scroll_event(&mut self, now_ms: u64) {
        let Some(surface) = self.surface.upgrade() else {
            return;
        };
        self.controller
            .on_scroll(surface.scroll_offset(), surface.dragging());
        self.sync_insets(&surface, true, now_ms);
    }

    /// Forces a loading cycle, as if the user had pulled and released.
    pub fn trigger(&mut self, animated: bool, now_ms: u64) {
        let Some(surface) = self.surface.upgrade() else {
            return;
        };
        self.controller.trigger();
        self.sync_insets(&surface, animated, now_ms);
    }

    /// Signals that the caller's refresh work finished.
    pub fn stop_loading(&mut self, animated: bool, now_ms: u64) {
        let Some(surface) = self.surface.upgrade() else {
            return;
        };
        self.controller.stop_loading();
        self.sync_insets(&surface, animated, now_ms);
    }

    pub fn set_enabled(&mut self, enabled: bool, animated: bool, now_ms: u64) {
        let Some(surface) = self.surface.upgrade() else {
            return;
        };
        self.controller.set_enabled(enabled);
        self.sync_insets(&surface, animated, now_ms);
    }

    /// Advances the inset tween and applies the sampled top edge to the
    /// surface. Returns the applied insets, or `None` when idle.
    pub fn tick(&mut self, now_ms: u64) -> Option<Insets> {
        let tween = self.tween?;
        let Some(surface) = self.surface.upgrade() else {
            self.tween = None;
            return None;
        };
        let done = tween.is_done(now_ms);
        let top = if done { tween.to.top } else { tween.sample(now_ms).top };
        let mut insets = surface.content_insets();
        insets.top = top;
        surface.set_content_insets(insets);
        if done {
            self.tween = None;
        }
        Some(insets)
    }

    /// Removes the controller from the host, restoring the pre-loading top
    /// inset even if a load is in flight.
    pub fn detach(mut self) -> PullToRefresh<V> {
        self.tween = None;
        if let Some(surface) = self.surface.upgrade() {
            let mut insets = surface.content_insets();
            insets.top = self.controller.resting_insets().top;
            surface.set_content_insets(insets);
        }
        self.controller
    }

    // Only the top edge is owned by this attachment; the target always keeps
    // the surface's other edges as they are right now.
    fn sync_insets(&mut self, surface: &S, animated: bool, now_ms: u64) {
        let current = surface.content_insets();
        let mut target = current;
        target.top = self.controller.desired_insets().top;
        if current == target {
            self.tween = None;
            return;
        }
        if !animated {
            self.tween = None;
            surface.set_content_insets(target);
            return;
        }
        match &mut self.tween {
            Some(tween) if tween.to.top == target.top => {}
            Some(tween) => tween.retarget(now_ms, target, self.duration_ms),
            None => {
                self.tween = Some(InsetTween::new(
                    current,
                    target,
                    now_ms,
                    self.duration_ms,
                    self.easing,
                ));
            }
        }
    }
}

/// Binds an [`InfiniteScrolling`] controller to a host surface.
///
/// Same shape as [`PullToRefreshAttachment`]: weak host reference, scroll
/// polling via [`Self::on_scroll_event`], tween-driven bottom-inset animation
/// via [`Self::tick`]. Only the bottom inset edge is ever written, so a
/// [`PullToRefreshAttachment`] on the same host is never disturbed.
pub struct InfiniteScrollingAttachment<S, V = ()> {
    surface: Weak<S>,
    controller: InfiniteScrolling<V>,
    tween: Option<InsetTween>,
    duration_ms: u64,
    easing: Easing,
}

impl<S: ScrollSurface, V> InfiniteScrollingAttachment<S, V> {
    /// Installs the controller on `surface`, snapshotting the surface's
    /// current insets as the resting insets.
    pub fn attach(surface: &Arc<S>, mut controller: InfiniteScrolling<V>) -> Self {
        controller.set_resting_insets(surface.content_insets());
        Self {
            surface: Arc::downgrade(surface),
            controller,
            tween: None,
            duration_ms: DEFAULT_TWEEN_DURATION_MS,
            easing: Easing::SmoothStep,
        }
    }

    pub fn with_animation(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.duration_ms = duration_ms;
        self.easing = easing;
        self
    }

    pub fn controller(&self) -> &InfiniteScrolling<V> {
        &self.controller
    }

    /// Mutable access for overlay configuration. State transitions should go
    /// through the attachment methods so insets stay in sync with the host.
    pub fn controller_mut(&mut self) -> &mut InfiniteScrolling<V> {
        &mut self.controller
    }

    pub fn into_controller(self) -> InfiniteScrolling<V> {
        self.controller
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    /// Polls the surface's full scroll geometry (offset, viewport, content
    /// size) and feeds it into the controller in one coalesced update.
    pub fn on_scroll_event(&mut self, now_ms: u64) {
        let Some(surface) = self.surface.upgrade() else {
            return;
        };
        self.controller.apply_metrics(surface.metrics());
        self.sync_insets(&surface, true, now_ms);
    }

    /// Forces a loading cycle without a scroll event.
    pub fn trigger(&mut self, animated: bool, now_ms: u64) {
        let Some(surface) = self.surface.upgrade() else {
            return;
        };
        self.controller.trigger();
        self.sync_insets(&surface, animated, now_ms);
    }

    /// Signals that the caller's load-more work finished.
    pub fn stop_animating(&mut self, animated: bool, now_ms: u64) {
        let Some(surface) = self.surface.upgrade() else {
            return;
        };
        self.controller.stop_animating();
        self.sync_insets(&surface, animated, now_ms);
    }

    pub fn set_enabled(&mut self, enabled: bool, animated: bool, now_ms: u64) {
        let Some(surface) = self.surface.upgrade() else {
            return;
        };
        self.controller.set_enabled(enabled);
        self.sync_insets(&surface, animated, now_ms);
    }

    /// Advances the inset tween and applies the sampled bottom edge to the
    /// surface. Returns the applied insets, or `None` when idle.
    pub fn tick(&mut self, now_ms: u64) -> Option<Insets> {
        let tween = self.tween?;
        let Some(surface) = self.surface.upgrade() else {
            self.tween = None;
            return None;
        };
        let done = tween.is_done(now_ms);
        let bottom = if done {
            tween.to.bottom
        } else {
            tween.sample(now_ms).bottom
        };
        let mut insets = surface.content_insets();
        insets.bottom = bottom;
        surface.set_content_insets(insets);
        if done {
            self.tween = None;
        }
        Some(insets)
    }

    /// Removes the controller from the host, restoring the pre-loading bottom
    /// inset even if a load is in flight.
    pub fn detach(mut self) -> InfiniteScrolling<V> {
        self.tween = None;
        if let Some(surface) = self.surface.upgrade() {
            let mut insets = surface.content_insets();
            insets.bottom = self.controller.resting_insets().bottom;
            surface.set_content_insets(insets);
        }
        self.controller
    }

    // Only the bottom edge is owned by this attachment; the target always
    // keeps the surface's other edges as they are right now.
    fn sync_insets(&mut self, surface: &S, animated: bool, now_ms: u64) {
        let current = surface.content_insets();
        let mut target = current;
        target.bottom = self.controller.desired_insets().bottom;
        if current == target {
            self.tween = None;
            return;
        }
        if !animated {
            self.tween = None;
            surface.set_content_insets(target);
            return;
        }
        match &mut self.tween {
            Some(tween) if tween.to.bottom == target.bottom => {}
            Some(tween) => tween.retarget(now_ms, target, self.duration_ms),
            None => {
                self.tween = Some(InsetTween::new(
                    current,
                    target,
                    now_ms,
                    self.duration_ms,
                    self.easing,
                ));
            }
        }
    }
}
