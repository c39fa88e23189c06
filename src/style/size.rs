//! Card size presets

use serde::{Deserialize, Serialize};

/// Identifier of a built-in size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeId {
    Sm,
    #[default]
    Md,
    Lg,
}

impl SizeId {
    /// Every size, in table order.
    pub const ALL: [SizeId; 3] = [SizeId::Sm, SizeId::Md, SizeId::Lg];

    /// Wire name of this size.
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeId::Sm => "sm",
            SizeId::Md => "md",
            SizeId::Lg => "lg",
        }
    }

    /// Resolve a wire value, falling back to `md` for anything unknown.
    pub fn from_param(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == value)
            .unwrap_or_default()
    }
}

/// Fixed pixel metrics for one card size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpec {
    /// Digit font size.
    pub digit: u32,
    /// Unit label font size.
    pub label: u32,
    /// Title font size.
    pub title: u32,
    /// Flex gap between digit blocks.
    pub gap: u32,
    /// Card padding.
    pub padding: u32,
    /// Digit block padding shorthand.
    pub block_pad: &'static str,
    /// Card corner radius.
    pub radius: u32,
    /// Height of the reference frame pointing at the hosted page.
    pub frame_height: u32,
}

// Indexed by SizeId discriminant; table order matches the enum (checked by
// test).
const SIZES: [SizeSpec; 3] = [
    SizeSpec {
        digit: 28,
        label: 10,
        title: 13,
        gap: 8,
        padding: 16,
        block_pad: "8px 12px",
        radius: 12,
        frame_height: 140,
    },
    SizeSpec {
        digit: 40,
        label: 12,
        title: 16,
        gap: 12,
        padding: 24,
        block_pad: "12px 18px",
        radius: 16,
        frame_height: 190,
    },
    SizeSpec {
        digit: 56,
        label: 14,
        title: 20,
        gap: 16,
        padding: 32,
        block_pad: "16px 24px",
        radius: 20,
        frame_height: 240,
    },
];

impl SizeSpec {
    /// Metrics for an id.
    pub fn of(id: SizeId) -> &'static SizeSpec {
        &SIZES[id as usize]
    }

    /// Corner radius of the digit blocks: the card radius pulled in.
    pub fn block_radius(&self) -> u32 {
        self.radius - 4
    }

    /// Minimum digit block width, sized off the digit font.
    pub fn block_min_width(&self) -> u32 {
        self.digit + 20
    }

    /// Separator `:` font size, 70% of the digit font in whole pixels.
    pub fn separator_font(&self) -> u32 {
        self.digit * 7 / 10
    }

    /// Bottom padding that keeps separators level with the digits.
    pub fn separator_drop(&self) -> u32 {
        self.label + 8
    }

    /// Vertical gap under the title and above the attribution line.
    pub fn title_gap(&self) -> u32 {
        self.gap + 4
    }
}
