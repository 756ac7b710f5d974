use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

fn counting_pull() -> (PullToRefresh, Arc<AtomicUsize>) {
    let fired = Arc::new(AtomicUsize::new(0));
    let f = Arc::clone(&fired);
    let p = PullToRefresh::new(PullToRefreshOptions::new(move || {
        f.fetch_add(1, Ordering::SeqCst);
    }));
    (p, fired)
}

fn counting_infinite(options: InfiniteScrollingOptions) -> (InfiniteScrolling, Arc<AtomicUsize>) {
    let fired = Arc::new(AtomicUsize::new(0));
    let f = Arc::clone(&fired);
    let mut options = options;
    options.on_action = Some(Arc::new(move || {
        f.fetch_add(1, Ordering::SeqCst);
    }));
    (InfiniteScrolling::new(options), fired)
}

fn recording_transitions<S: Copy + Send + 'static>() -> (
    Arc<Mutex<Vec<(S, S)>>>,
    impl Fn(S, S) + Send + Sync + 'static,
) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    (log, move |prev, cur| sink.lock().unwrap().push((prev, cur)))
}

#[test]
fn pull_arms_past_threshold_and_disarms_below() {
    let (mut p, fired) = counting_pull();
    assert_eq!(p.state(), RefreshState::Stopped);

    // Threshold defaults to the overlay height (60).
    p.on_scroll(-59, true);
    assert_eq!(p.state(), RefreshState::Stopped);
    p.on_scroll(-60, true);
    assert_eq!(p.state(), RefreshState::Triggered);
    p.on_scroll(-10, true);
    assert_eq!(p.state(), RefreshState::Stopped);
    assert_eq!(fired.load(Ordering::SeqCst), 0);
}

#[test]
fn drag_release_commits_through_triggered() {
    let (log, record) = recording_transitions::<RefreshState>();
    let fired = Arc::new(AtomicUsize::new(0));
    let f = Arc::clone(&fired);
    let mut p: PullToRefresh = PullToRefresh::new(
        PullToRefreshOptions::new(move || {
            f.fetch_add(1, Ordering::SeqCst);
        })
        .with_threshold(50)
        .with_on_change(Some(record)),
    );

    p.on_scroll(-60, true);
    p.on_scroll(-60, false); // release
    assert_eq!(p.state(), RefreshState::Loading);
    assert_eq!(fired.load(Ordering::SeqCst), 1);
    assert_eq!(
        log.lock().unwrap().as_slice(),
        &[
            (RefreshState::Stopped, RefreshState::Triggered),
            (RefreshState::Triggered, RefreshState::Loading),
        ]
    );
}

#[test]
fn release_below_threshold_does_not_load() {
    let (mut p, fired) = counting_pull();
    p.on_scroll(-61, true);
    assert_eq!(p.state(), RefreshState::Triggered);
    // User eases off before releasing.
    p.on_scroll(-30, true);
    p.on_scroll(-30, false);
    assert_eq!(p.state(), RefreshState::Stopped);
    assert_eq!(fired.load(Ordering::SeqCst), 0);
}

#[test]
fn callback_fires_once_per_loading_cycle() {
    let (mut p, fired) = counting_pull();

    p.on_scroll(-70, true);
    p.on_scroll(-70, false);
    assert_eq!(fired.load(Ordering::SeqCst), 1);

    // Scroll noise and a redundant trigger while loading change nothing.
    p.on_scroll(-120, true);
    p.on_scroll(0, false);
    p.trigger();
    assert_eq!(fired.load(Ordering::SeqCst), 1);

    p.stop_loading();
    assert_eq!(p.state(), RefreshState::Stopped);

    p.trigger();
    assert_eq!(fired.load(Ordering::SeqCst), 2);
}

#[test]
fn programmatic_trigger_passes_through_triggered() {
    let (log, record) = recording_transitions::<RefreshState>();
    let mut p: PullToRefresh =
        PullToRefresh::new(PullToRefreshOptions::default().with_on_change(Some(record)));

    p.trigger();
    assert_eq!(p.state(), RefreshState::Loading);
    assert_eq!(
        log.lock().unwrap().as_slice(),
        &[
            (RefreshState::Stopped, RefreshState::Triggered),
            (RefreshState::Triggered, RefreshState::Loading),
        ]
    );
}

#[test]
fn loading_grows_top_inset_by_overlay_height_and_stop_restores_it() {
    let resting = Insets::vertical(10, 4);
    let fired = Arc::new(AtomicUsize::new(0));
    let f = Arc::clone(&fired);
    let mut p: PullToRefresh = PullToRefresh::new(
        PullToRefreshOptions::new(move || {
            f.fetch_add(1, Ordering::SeqCst);
        })
        .with_threshold(50)
        .with_resting_insets(resting),
    );

    // Resting offset is -10; pulled 60 past it.
    p.on_scroll(-70, true);
    assert_eq!(p.state(), RefreshState::Triggered);
    p.on_scroll(-70, false);
    assert_eq!(p.state(), RefreshState::Loading);
    assert_eq!(p.desired_insets(), Insets::vertical(10 + 60, 4));
    assert!(p.spinner_active());

    p.stop_loading();
    assert_eq!(p.desired_insets(), resting);
    assert!(!p.spinner_active());
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[test]
fn pushes_content_down_flag_off_leaves_insets_alone() {
    let mut p: PullToRefresh = PullToRefresh::new(
        PullToRefreshOptions::default().with_pushes_content_down_while_loading(false),
    );
    p.trigger();
    assert_eq!(p.state(), RefreshState::Loading);
    assert_eq!(p.desired_insets(), Insets::default());
    p.stop_loading();
    assert_eq!(p.desired_insets(), Insets::default());
}

#[test]
fn stop_loading_is_a_noop_outside_loading() {
    let (mut p, fired) = counting_pull();
    p.stop_loading();
    assert_eq!(p.state(), RefreshState::Stopped);
    p.on_scroll(-100, true);
    p.stop_loading();
    assert_eq!(p.state(), RefreshState::Triggered);
    assert_eq!(fired.load(Ordering::SeqCst), 0);
}

#[test]
fn disabled_suppresses_all_transitions() {
    let (mut p, fired) = counting_pull();
    p.set_enabled(false);
    assert_eq!(p.state(), RefreshState::Disabled);
    assert!(p.overlay_content().is_none());

    p.on_scroll(-200, true);
    p.on_scroll(-200, false);
    p.trigger();
    assert_eq!(p.state(), RefreshState::Disabled);
    assert_eq!(fired.load(Ordering::SeqCst), 0);

    p.set_enabled(true);
    assert_eq!(p.state(), RefreshState::Stopped);
}

#[test]
fn disabling_mid_loading_keeps_insets_until_stop() {
    let (mut p, fired) = counting_pull();
    p.trigger();
    assert_eq!(fired.load(Ordering::SeqCst), 1);
    let loading_insets = p.desired_insets();

    p.set_enabled(false);
    assert_eq!(p.state(), RefreshState::Loading);
    assert_eq!(p.desired_insets(), loading_insets);

    p.stop_loading();
    assert_eq!(p.state(), RefreshState::Disabled);
    assert_eq!(p.desired_insets(), Insets::default());
}

#[test]
fn resting_insets_shift_the_resting_offset() {
    let (mut p, _) = counting_pull();
    p.set_resting_insets(Insets::vertical(64, 0));
    // Offset -64 is resting for a 64 top inset; no pull yet.
    p.on_scroll(-64, true);
    assert_eq!(p.state(), RefreshState::Stopped);
    p.apply_metrics(ScrollMetrics {
        offset: -124,
        viewport: 400,
        content_size: 1000,
        dragging: true,
    });
    assert_eq!(p.state(), RefreshState::Triggered);
}

#[test]
fn overlay_defaults_and_customization() {
    let mut p: PullToRefresh<&'static str> = PullToRefresh::new(PullToRefreshOptions::default());

    match p.overlay_content() {
        Some(OverlayContent::Labels {
            title,
            subtitle,
            spinner,
            ..
        }) => {
            assert_eq!(title, "Pull to refresh...");
            assert_eq!(subtitle, None);
            assert_eq!(spinner, None);
        }
        other => panic!("unexpected content: {other:?}"),
    }

    p.set_title("Refreshing", RefreshState::Loading);
    p.set_subtitle("Last sync: now", RefreshState::Stopped);
    p.trigger();
    match p.overlay_content() {
        Some(OverlayContent::Labels { title, spinner, .. }) => {
            assert_eq!(title, "Refreshing");
            assert_eq!(spinner, Some(SpinnerStyle::Small));
        }
        other => panic!("unexpected content: {other:?}"),
    }

    p.set_custom(Some("spinner-art"), RefreshState::Loading);
    assert_eq!(
        p.overlay_content(),
        Some(OverlayContent::Custom(&"spinner-art"))
    );
}

#[test]
fn offline_preset_switches_subtitles() {
    let mut p: PullToRefresh = PullToRefresh::new(PullToRefreshOptions::default());
    p.set_subtitle("Updated just now", RefreshState::Stopped);

    assert_eq!(
        p.overlay().subtitle_for(RefreshState::Stopped),
        Some("Updated just now")
    );

    p.set_online(false);
    assert_eq!(
        p.overlay().subtitle_for(RefreshState::Stopped),
        Some("No connection")
    );
    p.overlay_mut()
        .set_offline_subtitle("Reconnect to refresh", RefreshState::Stopped);
    assert_eq!(
        p.overlay().subtitle_for(RefreshState::Stopped),
        Some("Reconnect to refresh")
    );

    p.set_online(true);
    assert_eq!(
        p.overlay().subtitle_for(RefreshState::Stopped),
        Some("Updated just now")
    );
}

#[test]
fn custom_all_applies_to_every_state() {
    let mut p: PullToRefresh<&'static str> = PullToRefresh::new(PullToRefreshOptions::default());
    p.set_custom_all(Some("wave"));
    assert_eq!(p.overlay().custom(RefreshState::Stopped), Some(&"wave"));
    assert_eq!(p.overlay().custom(RefreshState::Triggered), Some(&"wave"));
    assert_eq!(p.overlay().custom(RefreshState::Loading), Some(&"wave"));
    assert_eq!(p.overlay().custom(RefreshState::Disabled), None);
    p.set_custom_all(None);
    assert_eq!(p.overlay().custom(RefreshState::Loading), None);

    let mut inf: InfiniteScrolling<&'static str> =
        InfiniteScrolling::new(InfiniteScrollingOptions::default());
    inf.set_custom_all(Some("dots"));
    inf.trigger();
    assert_eq!(inf.overlay_content(), InfiniteOverlayContent::Custom(&"dots"));
}

#[test]
fn title_all_applies_to_every_state() {
    let mut overlay: PullOverlay = PullOverlay::new();
    overlay.set_title_all("Syncing");
    assert_eq!(overlay.title_for(RefreshState::Stopped), "Syncing");
    assert_eq!(overlay.title_for(RefreshState::Triggered), "Syncing");
    assert_eq!(overlay.title_for(RefreshState::Loading), "Syncing");
    assert_eq!(overlay.title_for(RefreshState::Disabled), "");
}

#[test]
fn infinite_triggers_near_content_end() {
    let (log, record) = recording_transitions::<InfiniteState>();
    let (mut inf, fired) = counting_infinite(
        InfiniteScrollingOptions::default()
            .with_trigger_distance(100)
            .with_on_change(Some(record)),
    );

    // Content height 1000, visible height 400.
    inf.apply_metrics(ScrollMetrics {
        offset: 0,
        viewport: 400,
        content_size: 1000,
        dragging: false,
    });
    assert_eq!(inf.state(), InfiniteState::Stopped);
    assert_eq!(fired.load(Ordering::SeqCst), 0);

    inf.on_scroll(950);
    assert_eq!(inf.state(), InfiniteState::Loading);
    assert_eq!(fired.load(Ordering::SeqCst), 1);
    assert_eq!(
        log.lock().unwrap().as_slice(),
        &[
            (InfiniteState::Stopped, InfiniteState::Triggered),
            (InfiniteState::Triggered, InfiniteState::Loading),
        ]
    );
}

#[test]
fn infinite_does_not_trigger_far_from_end() {
    let (mut inf, fired) =
        counting_infinite(InfiniteScrollingOptions::default().with_trigger_distance(100));
    inf.set_viewport(400);
    inf.set_content_size(10_000);
    inf.on_scroll(2_000);
    assert_eq!(inf.state(), InfiniteState::Stopped);
    assert_eq!(fired.load(Ordering::SeqCst), 0);
}

#[test]
fn infinite_content_size_update_can_trigger_without_scroll() {
    let (mut inf, fired) =
        counting_infinite(InfiniteScrollingOptions::default().with_trigger_distance(50));
    inf.set_viewport(400);
    inf.set_content_size(10_000);
    inf.on_scroll(9_000);
    assert_eq!(inf.state(), InfiniteState::Stopped);

    // The caller truncated its list; the same offset is now near the end.
    inf.set_content_size(9_400);
    assert_eq!(inf.state(), InfiniteState::Loading);
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[test]
fn infinite_loading_grows_bottom_inset_and_stop_restores_it() {
    let resting = Insets::vertical(0, 20);
    let (mut inf, fired) = counting_infinite(
        InfiniteScrollingOptions::default().with_resting_insets(resting),
    );
    inf.apply_metrics(ScrollMetrics {
        offset: 600,
        viewport: 400,
        content_size: 1000,
        dragging: false,
    });
    assert_eq!(inf.state(), InfiniteState::Loading);
    assert_eq!(inf.desired_insets(), Insets::vertical(0, 20 + 60));

    inf.stop_animating();
    assert_eq!(inf.state(), InfiniteState::Stopped);
    assert_eq!(inf.desired_insets(), resting);
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[test]
fn infinite_callback_fires_once_per_cycle() {
    let (mut inf, fired) = counting_infinite(InfiniteScrollingOptions::default());
    inf.set_viewport(400);
    inf.set_content_size(1000);
    inf.on_scroll(600);
    assert_eq!(fired.load(Ordering::SeqCst), 1);

    // Repeated updates while loading do not re-fire.
    inf.on_scroll(650);
    inf.set_content_size(1000);
    inf.trigger();
    assert_eq!(fired.load(Ordering::SeqCst), 1);

    inf.stop_animating();
    // Still at the end after the failed load; the next scroll re-triggers.
    inf.on_scroll(640);
    assert_eq!(fired.load(Ordering::SeqCst), 2);
}

#[test]
fn infinite_disabled_suppresses_and_hides() {
    let (mut inf, fired) = counting_infinite(InfiniteScrollingOptions::default());
    inf.set_enabled(false);
    inf.apply_metrics(ScrollMetrics {
        offset: 600,
        viewport: 400,
        content_size: 1000,
        dragging: false,
    });
    assert_eq!(inf.state(), InfiniteState::Stopped);
    assert_eq!(fired.load(Ordering::SeqCst), 0);
    assert!(matches!(
        inf.overlay_content(),
        InfiniteOverlayContent::Hidden
    ));

    // Re-enabling re-evaluates the stored metrics.
    inf.set_enabled(true);
    assert_eq!(inf.state(), InfiniteState::Loading);
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[test]
fn infinite_disabling_mid_loading_keeps_insets_until_stop() {
    let (mut inf, _) = counting_infinite(InfiniteScrollingOptions::default());
    inf.trigger();
    let loading_insets = inf.desired_insets();

    inf.set_enabled(false);
    assert_eq!(inf.state(), InfiniteState::Loading);
    assert_eq!(inf.desired_insets(), loading_insets);

    inf.stop_animating();
    assert_eq!(inf.state(), InfiniteState::Stopped);
    assert_eq!(inf.desired_insets(), Insets::default());
}

#[test]
fn infinite_short_content_never_triggers() {
    let (mut inf, fired) = counting_infinite(InfiniteScrollingOptions::default());
    inf.apply_metrics(ScrollMetrics {
        offset: 0,
        viewport: 400,
        content_size: 300,
        dragging: false,
    });
    assert_eq!(inf.state(), InfiniteState::Stopped);
    assert_eq!(fired.load(Ordering::SeqCst), 0);
}

#[test]
fn infinite_overlay_spinner_only_while_loading() {
    let mut inf: InfiniteScrolling<&'static str> =
        InfiniteScrolling::new(InfiniteScrollingOptions::default());
    assert!(matches!(
        inf.overlay_content(),
        InfiniteOverlayContent::Hidden
    ));

    inf.trigger();
    assert!(matches!(
        inf.overlay_content(),
        InfiniteOverlayContent::Spinner(SpinnerStyle::Small)
    ));

    inf.set_custom(Some("more-dots"), InfiniteState::Loading);
    assert_eq!(
        inf.overlay_content(),
        InfiniteOverlayContent::Custom(&"more-dots")
    );
}
