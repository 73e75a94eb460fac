//! Computed style with all values resolved.

use tactile_core::{Color, CornerRadii, ShadowProfile};

use super::StyleProperties;
use crate::types::{
    Alignment, BorderStyle, EdgeValues, FlexDirection, FontWeight, Justify, TextAlign,
    TextOverflow,
};

/// Fully resolved style with concrete values.
///
/// This is the flattened description handed to the host renderer. Size
/// constraints that no layer set stay `None` so the host's layout decides.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedStyle {
    // === Layout ===
    pub flex_direction: FlexDirection,
    pub align_items: Alignment,
    pub justify_content: Justify,
    pub align_self: Alignment,

    // === Box Model ===
    pub padding: EdgeValues,
    pub border_width: f32,
    pub border_color: Color,
    pub border_style: BorderStyle,
    pub border_radius: CornerRadii,

    // === Background ===
    pub background_color: Color,

    // === Size Constraints ===
    pub min_width: Option<f32>,
    pub min_height: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,

    // === Effects ===
    /// Opacity (0.0 = transparent, 1.0 = opaque).
    pub opacity: f32,
    pub shadow: ShadowProfile,

    // === Typography ===
    pub font_size: f32,
    pub font_weight: FontWeight,
    pub color: Color,
    pub text_align: TextAlign,
    pub letter_spacing: f32,
    /// Line limit, `None` for unlimited.
    pub max_lines: Option<u32>,
    pub text_overflow: TextOverflow,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self {
            flex_direction: FlexDirection::Column,
            align_items: Alignment::Stretch,
            justify_content: Justify::Start,
            align_self: Alignment::Stretch,

            padding: EdgeValues::ZERO,
            border_width: 0.0,
            border_color: Color::TRANSPARENT,
            border_style: BorderStyle::Solid,
            border_radius: CornerRadii::ZERO,

            background_color: Color::TRANSPARENT,

            min_width: None,
            min_height: None,
            width: None,
            height: None,

            opacity: 1.0,
            shadow: ShadowProfile::None,

            font_size: 14.0,
            font_weight: FontWeight::NORMAL,
            color: Color::BLACK,
            text_align: TextAlign::Start,
            letter_spacing: 0.0,
            max_lines: None,
            text_overflow: TextOverflow::Clip,
        }
    }
}

impl ComputedStyle {
    /// Flatten a patch, filling every unset property with its initial value.
    pub fn from_properties(props: &StyleProperties) -> Self {
        let initial = Self::default();
        Self {
            flex_direction: props.flex_direction.resolve(&initial.flex_direction),
            align_items: props.align_items.resolve(&initial.align_items),
            justify_content: props.justify_content.resolve(&initial.justify_content),
            align_self: props.align_self.resolve(&initial.align_self),

            padding: props.padding.resolve(&initial.padding),
            border_width: props.border_width.resolve(&initial.border_width),
            border_color: props.border_color.resolve(&initial.border_color),
            border_style: props.border_style.resolve(&initial.border_style),
            border_radius: props.border_radius.resolve(&initial.border_radius),

            background_color: props.background_color.resolve(&initial.background_color),

            min_width: props.min_width.as_set().copied(),
            min_height: props.min_height.as_set().copied(),
            width: props.width.as_set().copied(),
            height: props.height.as_set().copied(),

            opacity: props.opacity.resolve(&initial.opacity),
            shadow: props.shadow.resolve(&initial.shadow),

            font_size: props.font_size.resolve(&initial.font_size),
            font_weight: props.font_weight.resolve(&initial.font_weight),
            color: props.color.resolve(&initial.color),
            text_align: props.text_align.resolve(&initial.text_align),
            letter_spacing: props.letter_spacing.resolve(&initial.letter_spacing),
            max_lines: props.max_lines.as_set().copied(),
            text_overflow: props.text_overflow.resolve(&initial.text_overflow),
        }
    }

    /// Check if the border should be drawn.
    pub fn has_border(&self) -> bool {
        self.border_width > 0.0 && !self.border_color.is_transparent()
    }

    /// Check if a shadow should be drawn.
    pub fn has_shadow(&self) -> bool {
        !self.shadow.is_none()
    }

    /// Check if the background should be drawn.
    pub fn has_background(&self) -> bool {
        !self.background_color.is_transparent()
    }

    /// Check whether the corners are round enough to form a pill for the
    /// box's minimum height.
    pub fn is_pill(&self) -> bool {
        match self.min_height {
            Some(height) => self.border_radius.min() >= height / 2.0,
            None => false,
        }
    }

    /// Whether text is limited to one line with a trailing ellipsis.
    pub fn is_single_line_tail_ellipsis(&self) -> bool {
        self.max_lines == Some(1) && self.text_overflow == TextOverflow::EllipsisTail
    }
}
