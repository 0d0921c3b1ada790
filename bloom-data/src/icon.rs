use serde::{Deserialize, Serialize};

/// Symbolic icon identifier attached to catalog entries.
///
/// Catalogs only name the icon; the rendering layer decides how it looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Leaf,
    Activity,
    Heart,
    TrendingUp,
    Target,
    Triangle,
    Satellite,
    MapPin,
    BarChart,
    Zap,
}

impl Icon {
    /// Text glyph used when rendering the icon inline.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Leaf => "🌿",
            Icon::Activity => "〽",
            Icon::Heart => "♥",
            Icon::TrendingUp => "📈",
            Icon::Target => "🎯",
            Icon::Triangle => "▲",
            Icon::Satellite => "🛰",
            Icon::MapPin => "📍",
            Icon::BarChart => "📊",
            Icon::Zap => "⚡",
        }
    }

    /// Accessible name, used as the `aria-label` of the rendered glyph.
    pub fn name(self) -> &'static str {
        match self {
            Icon::Leaf => "leaf",
            Icon::Activity => "activity",
            Icon::Heart => "heart",
            Icon::TrendingUp => "trending up",
            Icon::Target => "target",
            Icon::Triangle => "triangle",
            Icon::Satellite => "satellite",
            Icon::MapPin => "map pin",
            Icon::BarChart => "bar chart",
            Icon::Zap => "zap",
        }
    }
}
