// Example: infinite scrolling over a feed that grows on every load.
use overscroll::{InfiniteScrolling, InfiniteState, ScrollMetrics};

const PAGE: u64 = 500;

fn main() {
    let mut feed_size = PAGE;
    let mut inf: InfiniteScrolling = InfiniteScrolling::new(
        overscroll::InfiniteScrollingOptions::new(|| println!("action: load more"))
            .with_trigger_distance(100),
    );

    let mut offset = 0i64;
    while feed_size < 3 * PAGE {
        offset += 120;
        inf.apply_metrics(ScrollMetrics {
            offset,
            viewport: 400,
            content_size: feed_size,
            dragging: false,
        });
        if inf.state() == InfiniteState::Loading {
            feed_size += PAGE;
            println!("loaded page, feed_size={feed_size}");
            inf.set_content_size(feed_size);
            inf.stop_animating();
        }
    }
    println!("done: state={:?} insets={:?}", inf.state(), inf.desired_insets());
}
