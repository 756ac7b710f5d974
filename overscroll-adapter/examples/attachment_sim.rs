// Example: binding both controllers to a simulated scroll container and
// driving inset animation from a frame loop.
use std::cell::Cell;
use std::sync::Arc;

use overscroll::{
    InfiniteScrolling, InfiniteScrollingOptions, Insets, PullToRefresh, PullToRefreshOptions,
};
use overscroll_adapter::{
    Easing, InfiniteScrollingAttachment, PullToRefreshAttachment, ScrollSurface,
};

struct SimSurface {
    insets: Cell<Insets>,
    offset: Cell<i64>,
    dragging: Cell<bool>,
}

impl ScrollSurface for SimSurface {
    fn content_insets(&self) -> Insets {
        self.insets.get()
    }
    fn set_content_insets(&self, insets: Insets) {
        self.insets.set(insets);
    }
    fn scroll_offset(&self) -> i64 {
        self.offset.get()
    }
    fn viewport(&self) -> u32 {
        400
    }
    fn content_size(&self) -> u64 {
        1000
    }
    fn dragging(&self) -> bool {
        self.dragging.get()
    }
}

fn main() {
    let surface = Arc::new(SimSurface {
        insets: Cell::new(Insets::default()),
        offset: Cell::new(0),
        dragging: Cell::new(false),
    });

    let pull: PullToRefresh = PullToRefresh::new(PullToRefreshOptions::new(|| {
        println!("pull-to-refresh action fired");
    }));
    let more: InfiniteScrolling = InfiniteScrolling::new(InfiniteScrollingOptions::new(|| {
        println!("infinite-scrolling action fired");
    }));

    let mut pull = PullToRefreshAttachment::attach(&surface, pull)
        .with_animation(240, Easing::SmoothStep);
    let mut more = InfiniteScrollingAttachment::attach(&surface, more)
        .with_animation(240, Easing::SmoothStep);

    // Drag down past the threshold and release.
    surface.offset.set(-80);
    surface.dragging.set(true);
    pull.on_scroll_event(0);
    surface.dragging.set(false);
    pull.on_scroll_event(0);

    let mut now_ms = 0u64;
    while pull.is_animating() {
        now_ms += 16;
        if let Some(insets) = pull.tick(now_ms) {
            println!("t={now_ms} insets={insets:?}");
        }
    }
    pull.stop_loading(false, now_ms);
    println!("refresh done, insets={:?}", surface.content_insets());

    // Scroll to the end of the content.
    surface.offset.set(700);
    more.on_scroll_event(now_ms);
    while more.is_animating() {
        now_ms += 16;
        more.tick(now_ms);
    }
    println!(
        "loading more, state={:?} insets={:?}",
        more.controller().state(),
        surface.content_insets()
    );
    more.stop_animating(false, now_ms);
    println!("all done, insets={:?}", surface.content_insets());
}
