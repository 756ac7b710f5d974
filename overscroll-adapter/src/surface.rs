use overscroll::{Insets, ScrollMetrics};

/// Adapter-side abstraction of the host scrollable container.
///
/// Methods take `&self`: implementors wrap the real container (or a model of
/// it) in interior mutability, so attachments can share the surface through a
/// plain `Arc` without extending the host's lifetime rules.
///
/// The controllers must not keep the host alive; attachments hold surfaces
/// through `Weak` and treat a failed upgrade as "host is gone" (every
/// operation becomes a no-op).
pub trait ScrollSurface {
    /// The container's current content insets.
    fn content_insets(&self) -> Insets;

    /// Applies new content insets to the container.
    fn set_content_insets(&self, insets: Insets);

    /// Signed scroll offset; pulling past the top goes below the resting
    /// offset `-content_insets().top`.
    fn scroll_offset(&self) -> i64;

    /// Size of the visible area along the scroll axis.
    fn viewport(&self) -> u32;

    /// Total scrollable content size along the scroll axis.
    fn content_size(&self) -> u64;

    /// Whether a user drag is in progress. Hosts without drag semantics
    /// (e.g. wheel-only scrolling) can keep the default.
    fn dragging(&self) -> bool {
        false
    }

    /// One coalesced snapshot of the scroll geometry.
    fn metrics(&self) -> ScrollMetrics {
        ScrollMetrics {
            offset: self.scroll_offset(),
            viewport: self.viewport(),
            content_size: self.content_size(),
            dragging: self.dragging(),
        }
    }
}
