//! Card color themes
//!
//! Fixed palettes shared by every render path. The hosted page, the
//! self-contained snippet and the reference frame all read the same table,
//! which is what keeps the three visually identical.

use serde::{Deserialize, Serialize};

/// Identifier of a built-in palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    #[default]
    Orange,
    Dark,
    Blue,
    Pink,
    Green,
    Minimal,
}

impl ThemeId {
    /// Every palette, in table order.
    pub const ALL: [ThemeId; 6] = [
        ThemeId::Orange,
        ThemeId::Dark,
        ThemeId::Blue,
        ThemeId::Pink,
        ThemeId::Green,
        ThemeId::Minimal,
    ];

    /// Wire name of this theme.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeId::Orange => "orange",
            ThemeId::Dark => "dark",
            ThemeId::Blue => "blue",
            ThemeId::Pink => "pink",
            ThemeId::Green => "green",
            ThemeId::Minimal => "minimal",
        }
    }

    /// Resolve a wire value. Unknown names fall back to the default palette
    /// instead of failing; published embeds may carry ids we no longer ship.
    pub fn from_param(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == value)
            .unwrap_or_default()
    }
}

/// One palette: colors for the card shell, digit blocks and text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub id: ThemeId,
    /// Page background behind the card (hosted render only).
    pub bg: &'static str,
    pub card_bg: &'static str,
    pub digit_bg: &'static str,
    pub digit_text: &'static str,
    pub label_text: &'static str,
    pub title_text: &'static str,
    pub border: &'static str,
    pub shadow: &'static str,
    pub accent: &'static str,
}

// Indexed by ThemeId discriminant; the table and the enum stay in the same
// order (checked by test).
const THEMES: [Theme; 6] = [
    Theme {
        id: ThemeId::Orange,
        bg: "transparent",
        card_bg: "#FFFBF5",
        digit_bg: "#FFF7ED",
        digit_text: "#EA580C",
        label_text: "#9A3412",
        title_text: "#9A3412",
        border: "#000000",
        shadow: "#000000",
        accent: "#F97316",
    },
    Theme {
        id: ThemeId::Dark,
        bg: "transparent",
        card_bg: "#1E1E2E",
        digit_bg: "#2A2A3E",
        digit_text: "#FFFFFF",
        label_text: "#A0A0B8",
        title_text: "#FFFFFF",
        border: "#3A3A50",
        shadow: "#000000",
        accent: "#818CF8",
    },
    Theme {
        id: ThemeId::Blue,
        bg: "transparent",
        card_bg: "#F0F7FF",
        digit_bg: "#DBEAFE",
        digit_text: "#1D4ED8",
        label_text: "#3B82F6",
        title_text: "#1E40AF",
        border: "#000000",
        shadow: "#000000",
        accent: "#3B82F6",
    },
    Theme {
        id: ThemeId::Pink,
        bg: "transparent",
        card_bg: "#FFF5F7",
        digit_bg: "#FFE4EC",
        digit_text: "#DB2777",
        label_text: "#EC4899",
        title_text: "#BE185D",
        border: "#000000",
        shadow: "#000000",
        accent: "#EC4899",
    },
    Theme {
        id: ThemeId::Green,
        bg: "transparent",
        card_bg: "#F0FDF4",
        digit_bg: "#DCFCE7",
        digit_text: "#16A34A",
        label_text: "#22C55E",
        title_text: "#166534",
        border: "#000000",
        shadow: "#000000",
        accent: "#22C55E",
    },
    Theme {
        id: ThemeId::Minimal,
        bg: "transparent",
        card_bg: "#FFFFFF",
        digit_bg: "#F3F4F6",
        digit_text: "#111827",
        label_text: "#6B7280",
        title_text: "#111827",
        border: "#000000",
        shadow: "#000000",
        accent: "#6B7280",
    },
];

impl Theme {
    /// Palette for an id.
    pub fn of(id: ThemeId) -> &'static Theme {
        &THEMES[id as usize]
    }
}
