use overscroll::Insets;

/// A small tween over content insets for adapter-driven inset animation.
///
/// Each edge is interpolated independently; [`Self::sample`] never
/// overshoots and [`Self::is_done`] tells the adapter when to snap to the
/// exact target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InsetTween {
    pub from: Insets,
    pub to: Insets,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl InsetTween {
    pub fn new(from: Insets, to: Insets, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    pub fn sample(&self, now_ms: u64) -> Insets {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = (elapsed as f32 / self.duration_ms as f32).clamp(0.0, 1.0);
        let eased = self.easing.sample(t);

        Insets {
            top: lerp_edge(self.from.top, self.to.top, eased),
            left: lerp_edge(self.from.left, self.to.left, eased),
            bottom: lerp_edge(self.from.bottom, self.to.bottom, eased),
            right: lerp_edge(self.from.right, self.to.right, eased),
        }
    }

    pub fn retarget(&mut self, now_ms: u64, new_to: Insets, duration_ms: u64) {
        let cur = self.sample(now_ms);
        *self = Self::new(cur, new_to, now_ms, duration_ms, self.easing);
    }
}

fn lerp_edge(from: u32, to: u32, t: f32) -> u32 {
    let from = from as f32;
    let to = to as f32;
    let v = from + (to - from) * t;
    v.max(0.0) as u32
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    EaseInOutCubic,
}

impl Easing {
    pub fn sample(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }
}
