//! The closed set of style keys.

use std::fmt;

/// A recognized style key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleKey {
    /// `s`: font size.
    FontSize,
    /// `tc`: text color.
    TextColor,
    /// `bg`: background color.
    Background,
    /// `pad`: padding, one to four lengths.
    Padding,
    /// `br`: border radius.
    BorderRadius,
    /// `op`: opacity.
    Opacity,
    /// `maxw`: maximum width.
    MaxWidth,
    /// `minw`: minimum width.
    MinWidth,
    /// `w`: width.
    Width,
    /// `h`: height. On links the same key is the hyperlink target.
    Height,
    /// `gap`: flex/grid gap.
    Gap,
    /// `dir`: `col` or `row` flex direction.
    Direction,
    /// `align`: cross-axis alignment, `c` centers on both axes.
    Align,
    /// `anim`: `name [duration] [initial-state marker]`.
    Animation,
    /// `disp`: display.
    Display,
    /// `wrap`: flex wrapping.
    Wrap,
    /// `trf`: transform.
    Transform,
}

/// Coarse grouping used to combine declarations before class generation.
///
/// Declarations from keys in the same category end up in one generated
/// class, so e.g. `dir=col align=c` yields a single flex-layout class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleCategory {
    Typography,
    Color,
    Spacing,
    Border,
    Sizing,
    FlexLayout,
    Animation,
    Effects,
}

impl StyleKey {
    /// Every style key.
    pub const ALL: [StyleKey; 17] = [
        Self::FontSize,
        Self::TextColor,
        Self::Background,
        Self::Padding,
        Self::BorderRadius,
        Self::Opacity,
        Self::MaxWidth,
        Self::MinWidth,
        Self::Width,
        Self::Height,
        Self::Gap,
        Self::Direction,
        Self::Align,
        Self::Animation,
        Self::Display,
        Self::Wrap,
        Self::Transform,
    ];

    /// Look up a key by its DSL code.
    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.code() == code)
    }

    /// The DSL code of this key.
    pub fn code(self) -> &'static str {
        match self {
            Self::FontSize => "s",
            Self::TextColor => "tc",
            Self::Background => "bg",
            Self::Padding => "pad",
            Self::BorderRadius => "br",
            Self::Opacity => "op",
            Self::MaxWidth => "maxw",
            Self::MinWidth => "minw",
            Self::Width => "w",
            Self::Height => "h",
            Self::Gap => "gap",
            Self::Direction => "dir",
            Self::Align => "align",
            Self::Animation => "anim",
            Self::Display => "disp",
            Self::Wrap => "wrap",
            Self::Transform => "trf",
        }
    }

    /// The category this key's declarations are grouped under.
    pub fn category(self) -> StyleCategory {
        match self {
            Self::FontSize => StyleCategory::Typography,
            Self::TextColor | Self::Background => StyleCategory::Color,
            Self::Padding | Self::Gap => StyleCategory::Spacing,
            Self::BorderRadius => StyleCategory::Border,
            Self::MaxWidth | Self::MinWidth | Self::Width | Self::Height => StyleCategory::Sizing,
            Self::Direction | Self::Align | Self::Display | Self::Wrap => StyleCategory::FlexLayout,
            Self::Animation => StyleCategory::Animation,
            Self::Opacity | Self::Transform => StyleCategory::Effects,
        }
    }

    /// Whether bare digit values get a `px` unit.
    pub fn coerces_pixels(self) -> bool {
        matches!(
            self,
            Self::FontSize
                | Self::Padding
                | Self::BorderRadius
                | Self::MaxWidth
                | Self::MinWidth
                | Self::Gap
                | Self::Width
                | Self::Height
        )
    }

    /// Whether literal color values are normalized.
    pub fn is_color(self) -> bool {
        matches!(self, Self::TextColor | Self::Background)
    }

    /// Whether the value may span several whitespace-separated words.
    pub fn takes_words(self) -> bool {
        matches!(self, Self::Animation)
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
