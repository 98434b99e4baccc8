use serde::{Deserialize, Serialize};

/// Axis the carousel pages along.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum ScrollAxis {
    #[default]
    Horizontal,
    Vertical,
}

impl ScrollAxis {
    pub fn id(self) -> &'static str {
        match self {
            ScrollAxis::Horizontal => "horizontal",
            ScrollAxis::Vertical => "vertical",
        }
    }

    /// Only `vertical` selects the vertical axis.
    pub fn resolve(id: Option<&str>) -> Self {
        match id {
            Some("vertical") => ScrollAxis::Vertical,
            None | Some("") | Some("horizontal") => ScrollAxis::Horizontal,
            Some(other) => {
                log::warn!("unknown scroll direction {other:?}, using horizontal");
                ScrollAxis::Horizontal
            },
        }
    }
}

/// How the slider clips pages that overflow its bounds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum ClipBehavior {
    None,
    #[default]
    HardEdge,
    AntiAlias,
    AntiAliasWithSaveLayer,
}

impl ClipBehavior {
    pub const ALL: [ClipBehavior; 4] = [
        ClipBehavior::None,
        ClipBehavior::HardEdge,
        ClipBehavior::AntiAlias,
        ClipBehavior::AntiAliasWithSaveLayer,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ClipBehavior::None => "none",
            ClipBehavior::HardEdge => "hardEdge",
            ClipBehavior::AntiAlias => "antiAlias",
            ClipBehavior::AntiAliasWithSaveLayer => "antiAliasWithSaveLayer",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|clip| clip.id() == id)
    }

    pub fn resolve(id: Option<&str>) -> Self {
        resolve_with(id, Self::from_id, "clip behavior")
    }
}

/// Technique used to emphasize the centered page.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum EnlargeStrategy {
    #[default]
    Scale,
    Height,
    Zoom,
}

impl EnlargeStrategy {
    pub const ALL: [EnlargeStrategy; 3] = [
        EnlargeStrategy::Scale,
        EnlargeStrategy::Height,
        EnlargeStrategy::Zoom,
    ];

    pub fn id(self) -> &'static str {
        match self {
            EnlargeStrategy::Scale => "scale",
            EnlargeStrategy::Height => "height",
            EnlargeStrategy::Zoom => "zoom",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|strategy| strategy.id() == id)
    }

    pub fn resolve(id: Option<&str>) -> Self {
        resolve_with(id, Self::from_id, "enlarge strategy")
    }
}

fn resolve_with<T: Default + std::fmt::Debug>(
    id: Option<&str>,
    lookup: fn(&str) -> Option<T>,
    what: &str,
) -> T {
    match id {
        None | Some("") => T::default(),
        Some(id) => lookup(id).unwrap_or_else(|| {
            let fallback = T::default();
            log::warn!("unknown {what} {id:?}, using {fallback:?}");
            fallback
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_scroll_direction_when_resolving_then_only_vertical_is_vertical()
    {
        assert_eq!(ScrollAxis::resolve(Some("vertical")), ScrollAxis::Vertical);
        assert_eq!(
            ScrollAxis::resolve(Some("horizontal")),
            ScrollAxis::Horizontal
        );
        assert_eq!(ScrollAxis::resolve(Some("diagonal")), ScrollAxis::Horizontal);
        assert_eq!(ScrollAxis::resolve(None), ScrollAxis::Horizontal);
    }

    #[test]
    fn given_clip_ids_when_resolving_then_unknown_falls_back_to_hard_edge() {
        for clip in ClipBehavior::ALL {
            assert_eq!(ClipBehavior::resolve(Some(clip.id())), clip);
        }
        assert_eq!(ClipBehavior::resolve(Some("soft")), ClipBehavior::HardEdge);
        assert_eq!(ClipBehavior::resolve(None), ClipBehavior::HardEdge);
    }

    #[test]
    fn given_enlarge_ids_when_resolving_then_unknown_falls_back_to_scale() {
        assert_eq!(
            EnlargeStrategy::resolve(Some("height")),
            EnlargeStrategy::Height
        );
        assert_eq!(EnlargeStrategy::resolve(Some("zoom")), EnlargeStrategy::Zoom);
        assert_eq!(
            EnlargeStrategy::resolve(Some("stretch")),
            EnlargeStrategy::Scale
        );
        assert_eq!(EnlargeStrategy::resolve(None), EnlargeStrategy::Scale);
    }
}
