use alloc::string::String;

use crate::types::{Color, InfiniteState, RefreshState, SpinnerStyle};

const DEFAULT_TITLES: [&str; 3] = ["Pull to refresh...", "Release to refresh...", "Loading..."];
const DEFAULT_OFFLINE_SUBTITLE: &str = "No connection";

fn pull_slot(state: RefreshState) -> Option<usize> {
    match state {
        RefreshState::Stopped => Some(0),
        RefreshState::Triggered => Some(1),
        RefreshState::Loading => Some(2),
        RefreshState::Disabled => None,
    }
}

fn infinite_slot(state: InfiniteState) -> usize {
    match state {
        InfiniteState::Stopped => 0,
        InfiniteState::Triggered => 1,
        InfiniteState::Loading => 2,
    }
}

/// What a renderer should draw for the pull-to-refresh overlay in a state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayContent<'a, V> {
    /// Caller-supplied content set via `set_custom`. It replaces the default
    /// labels and spinner entirely.
    Custom(&'a V),
    Labels {
        title: &'a str,
        subtitle: Option<&'a str>,
        /// `Some` while the spinner should animate (the `Loading` state).
        spinner: Option<SpinnerStyle>,
        text_color: Color,
    },
}

/// Presentation model for the pull-to-refresh overlay.
///
/// This is data only; no drawing happens here. Per-state text and custom
/// content are looked up at render time through [`PullOverlay::content_for`].
///
/// Subtitles come in two preset tables, "online" and "offline", switched with
/// [`PullOverlay::set_online`]. The offline table defaults to a
/// "No connection" hint for every state.
#[derive(Clone, Debug)]
pub struct PullOverlay<V = ()> {
    titles: [Option<String>; 3],
    subtitles: [Option<String>; 3],
    offline_subtitles: [Option<String>; 3],
    custom: [Option<V>; 3],
    online: bool,
    text_color: Color,
    spinner_style: SpinnerStyle,
}

impl<V> Default for PullOverlay<V> {
    fn default() -> Self {
        Self {
            titles: [None, None, None],
            subtitles: [None, None, None],
            offline_subtitles: [None, None, None],
            custom: [None, None, None],
            online: true,
            text_color: Color::default(),
            spinner_style: SpinnerStyle::default(),
        }
    }
}

impl<V> PullOverlay<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the title shown in `state`. Titles default to
    /// "Pull to refresh..." / "Release to refresh..." / "Loading...".
    pub fn set_title(&mut self, title: impl Into<String>, state: RefreshState) {
        if let Some(slot) = pull_slot(state) {
            self.titles[slot] = Some(title.into());
        }
    }

    /// Applies one title to every state.
    pub fn set_title_all(&mut self, title: impl Into<String>) {
        let title = title.into();
        self.titles = [Some(title.clone()), Some(title.clone()), Some(title)];
    }

    /// Overrides the subtitle shown in `state` while online.
    pub fn set_subtitle(&mut self, subtitle: impl Into<String>, state: RefreshState) {
        if let Some(slot) = pull_slot(state) {
            self.subtitles[slot] = Some(subtitle.into());
        }
    }

    /// Applies one online subtitle to every state.
    pub fn set_subtitle_all(&mut self, subtitle: impl Into<String>) {
        let subtitle = subtitle.into();
        self.subtitles = [Some(subtitle.clone()), Some(subtitle.clone()), Some(subtitle)];
    }

    /// Overrides the subtitle shown in `state` while offline.
    pub fn set_offline_subtitle(&mut self, subtitle: impl Into<String>, state: RefreshState) {
        if let Some(slot) = pull_slot(state) {
            self.offline_subtitles[slot] = Some(subtitle.into());
        }
    }

    /// Switches between the online and offline subtitle presets.
    pub fn set_online(&mut self, online: bool) {
        self.online = online;
    }

    pub fn online(&self) -> bool {
        self.online
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    pub fn text_color(&self) -> Color {
        self.text_color
    }

    pub fn set_spinner_style(&mut self, style: SpinnerStyle) {
        self.spinner_style = style;
    }

    pub fn spinner_style(&self) -> SpinnerStyle {
        self.spinner_style
    }

    /// Sets (or clears, with `None`) custom content for `state`.
    pub fn set_custom(&mut self, content: Option<V>, state: RefreshState) {
        if let Some(slot) = pull_slot(state) {
            self.custom[slot] = content;
        }
    }

    /// Applies one custom content value (or clears it, with `None`) for
    /// every state.
    pub fn set_custom_all(&mut self, content: Option<V>)
    where
        V: Clone,
    {
        self.custom = [content.clone(), content.clone(), content];
    }

    pub fn custom(&self, state: RefreshState) -> Option<&V> {
        pull_slot(state).and_then(|slot| self.custom[slot].as_ref())
    }

    pub fn title_for(&self, state: RefreshState) -> &str {
        let Some(slot) = pull_slot(state) else {
            return "";
        };
        self.titles[slot].as_deref().unwrap_or(DEFAULT_TITLES[slot])
    }

    pub fn subtitle_for(&self, state: RefreshState) -> Option<&str> {
        let slot = pull_slot(state)?;
        if self.online {
            self.subtitles[slot].as_deref()
        } else {
            Some(
                self.offline_subtitles[slot]
                    .as_deref()
                    .unwrap_or(DEFAULT_OFFLINE_SUBTITLE),
            )
        }
    }

    /// Resolves what to render for `state`. Returns `None` for `Disabled`
    /// (the overlay is hidden entirely).
    pub fn content_for(&self, state: RefreshState) -> Option<OverlayContent<'_, V>> {
        let slot = pull_slot(state)?;
        if let Some(custom) = self.custom[slot].as_ref() {
            return Some(OverlayContent::Custom(custom));
        }
        Some(OverlayContent::Labels {
            title: self.title_for(state),
            subtitle: self.subtitle_for(state),
            spinner: (state == RefreshState::Loading).then_some(self.spinner_style),
            text_color: self.text_color,
        })
    }
}

/// What a renderer should draw for the infinite-scrolling overlay in a state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InfiniteOverlayContent<'a, V> {
    Custom(&'a V),
    Spinner(SpinnerStyle),
    Hidden,
}

/// Presentation model for the infinite-scrolling overlay: a spinner while
/// loading, optionally replaced per state by custom content.
#[derive(Clone, Debug)]
pub struct InfiniteOverlay<V = ()> {
    custom: [Option<V>; 3],
    spinner_style: SpinnerStyle,
}

impl<V> Default for InfiniteOverlay<V> {
    fn default() -> Self {
        Self {
            custom: [None, None, None],
            spinner_style: SpinnerStyle::default(),
        }
    }
}

impl<V> InfiniteOverlay<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_spinner_style(&mut self, style: SpinnerStyle) {
        self.spinner_style = style;
    }

    pub fn spinner_style(&self) -> SpinnerStyle {
        self.spinner_style
    }

    /// Sets (or clears, with `None`) custom content for `state`.
    pub fn set_custom(&mut self, content: Option<V>, state: InfiniteState) {
        self.custom[infinite_slot(state)] = content;
    }

    /// Applies one custom content value (or clears it, with `None`) for
    /// every state.
    pub fn set_custom_all(&mut self, content: Option<V>)
    where
        V: Clone,
    {
        self.custom = [content.clone(), content.clone(), content];
    }

    pub fn custom(&self, state: InfiniteState) -> Option<&V> {
        self.custom[infinite_slot(state)].as_ref()
    }

    pub fn content_for(&self, state: InfiniteState) -> InfiniteOverlayContent<'_, V> {
        if let Some(custom) = self.custom[infinite_slot(state)].as_ref() {
            return InfiniteOverlayContent::Custom(custom);
        }
        if state == InfiniteState::Loading {
            return InfiniteOverlayContent::Spinner(self.spinner_style);
        }
        InfiniteOverlayContent::Hidden
    }
}
