//! Fluent construction of style patches.

use tactile_core::{Color, CornerRadii, ShadowProfile};

use super::StyleProperties;
use crate::types::{
    Alignment, BorderStyle, EdgeValues, FlexDirection, FontWeight, Justify, StyleValue, TextAlign,
    TextOverflow,
};

/// Builder for style patches with a fluent API.
///
/// # Example
///
/// ```
/// use tactile_style::prelude::*;
/// use tactile_core::Color;
///
/// let patch = Style::new()
///     .padding(EdgeValues::symmetric(10.0, 16.0))
///     .background_color(Color::from_hex("#007AFF").unwrap())
///     .border_radius_all(8.0)
///     .build();
///
/// assert_eq!(patch.set_count(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Style {
    props: StyleProperties,
}

impl Style {
    /// Start an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the final patch.
    pub fn build(self) -> StyleProperties {
        self.props
    }

    // === Layout ===

    /// Set the main-axis direction for children.
    pub fn flex_direction(mut self, direction: FlexDirection) -> Self {
        self.props.flex_direction = StyleValue::Set(direction);
        self
    }

    /// Set cross-axis alignment of children.
    pub fn align_items(mut self, alignment: Alignment) -> Self {
        self.props.align_items = StyleValue::Set(alignment);
        self
    }

    /// Set main-axis distribution of children.
    pub fn justify_content(mut self, justify: Justify) -> Self {
        self.props.justify_content = StyleValue::Set(justify);
        self
    }

    /// Set this box's alignment inside its parent.
    pub fn align_self(mut self, alignment: Alignment) -> Self {
        self.props.align_self = StyleValue::Set(alignment);
        self
    }

    // === Box Model ===

    /// Set padding per edge.
    pub fn padding(mut self, value: EdgeValues) -> Self {
        self.props.padding = StyleValue::Set(value);
        self
    }

    /// Same padding on every side.
    pub fn padding_all(mut self, value: f32) -> Self {
        self.props.padding = StyleValue::Set(EdgeValues::uniform(value));
        self
    }

    /// Set border width.
    pub fn border_width(mut self, width: f32) -> Self {
        self.props.border_width = StyleValue::Set(width);
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.props.border_color = StyleValue::Set(color);
        self
    }

    pub fn border_style(mut self, style: BorderStyle) -> Self {
        self.props.border_style = StyleValue::Set(style);
        self
    }

    /// Set per-corner radii.
    pub fn border_radius(mut self, radii: CornerRadii) -> Self {
        self.props.border_radius = StyleValue::Set(radii);
        self
    }

    /// Round all four corners by the same amount.
    pub fn border_radius_all(mut self, radius: f32) -> Self {
        self.props.border_radius = StyleValue::Set(CornerRadii::uniform(radius));
        self
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.props.background_color = StyleValue::Set(color);
        self
    }

    // === Size ===

    pub fn min_width(mut self, value: f32) -> Self {
        self.props.min_width = StyleValue::Set(value);
        self
    }

    pub fn min_height(mut self, value: f32) -> Self {
        self.props.min_height = StyleValue::Set(value);
        self
    }

    pub fn width(mut self, value: f32) -> Self {
        self.props.width = StyleValue::Set(value);
        self
    }

    pub fn height(mut self, value: f32) -> Self {
        self.props.height = StyleValue::Set(value);
        self
    }

    // === Effects ===

    /// Set opacity. Not clamped; the renderer decides what to do with it.
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.props.opacity = StyleValue::Set(opacity);
        self
    }

    /// Set the shadow profile.
    pub fn shadow(mut self, shadow: ShadowProfile) -> Self {
        self.props.shadow = StyleValue::Set(shadow);
        self
    }

    /// Remove any shadow set by earlier layers.
    pub fn no_shadow(mut self) -> Self {
        self.props.shadow = StyleValue::Set(ShadowProfile::None);
        self
    }

    // === Typography ===

    pub fn font_size(mut self, size: f32) -> Self {
        self.props.font_size = StyleValue::Set(size);
        self
    }

    pub fn font_weight(mut self, weight: FontWeight) -> Self {
        self.props.font_weight = StyleValue::Set(weight);
        self
    }

    /// Set the text color.
    pub fn color(mut self, color: Color) -> Self {
        self.props.color = StyleValue::Set(color);
        self
    }

    pub fn text_align(mut self, align: TextAlign) -> Self {
        self.props.text_align = StyleValue::Set(align);
        self
    }

    pub fn letter_spacing(mut self, spacing: f32) -> Self {
        self.props.letter_spacing = StyleValue::Set(spacing);
        self
    }

    /// Limit text to a number of lines.
    pub fn max_lines(mut self, lines: u32) -> Self {
        self.props.max_lines = StyleValue::Set(lines);
        self
    }

    /// Set text overflow behavior.
    pub fn text_overflow(mut self, overflow: TextOverflow) -> Self {
        self.props.text_overflow = StyleValue::Set(overflow);
        self
    }

    /// Render on one line, truncating the tail with an ellipsis.
    pub fn single_line(self) -> Self {
        self.max_lines(1).text_overflow(TextOverflow::EllipsisTail)
    }
}

impl From<Style> for StyleProperties {
    fn from(style: Style) -> Self {
        style.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chained_setters_only_set_what_they_name() {
        let props = Style::new()
            .padding_all(12.0)
            .border_width(1.0)
            .min_height(44.0)
            .font_weight(FontWeight::BOLD)
            .build();

        assert_eq!(props.set_count(), 4);
        assert_eq!(props.padding.as_set(), Some(&EdgeValues::uniform(12.0)));
        assert_eq!(props.font_weight.as_set(), Some(&FontWeight::BOLD));
        assert!(!props.opacity.is_set());
    }

    #[test]
    fn single_line_sets_both_properties() {
        let props = Style::new().single_line().build();
        assert_eq!(props.max_lines.as_set(), Some(&1));
        assert_eq!(props.text_overflow.as_set(), Some(&TextOverflow::EllipsisTail));
    }

    #[test]
    fn no_shadow_is_an_explicit_value() {
        let props = Style::new().no_shadow().build();
        assert_eq!(props.shadow.as_set(), Some(&ShadowProfile::None));
    }
}
