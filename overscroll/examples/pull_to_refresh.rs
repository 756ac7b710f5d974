// Example: a drag/release pull-to-refresh cycle, fully headless.
use overscroll::{PullToRefresh, PullToRefreshOptions};

fn main() {
    let mut p: PullToRefresh = PullToRefresh::new(
        PullToRefreshOptions::new(|| println!("action: start refreshing"))
            .with_threshold(50)
            .with_on_change(Some(|prev, cur| println!("{prev:?} -> {cur:?}"))),
    );

    // The user pulls down past the threshold, then lets go.
    for offset in [0, -20, -40, -60, -80] {
        p.on_scroll(offset, true);
    }
    p.on_scroll(-80, false);

    println!("state={:?} insets={:?}", p.state(), p.desired_insets());

    // ... asynchronous work happens elsewhere ...
    p.stop_loading();
    println!("state={:?} insets={:?}", p.state(), p.desired_insets());
}
