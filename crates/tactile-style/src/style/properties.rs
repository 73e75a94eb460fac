//! Style property patches.

use tactile_core::{Color, CornerRadii, ShadowProfile};

use crate::types::{
    Alignment, BorderStyle, EdgeValues, FlexDirection, FontWeight, Justify, StyleValue, TextAlign,
    TextOverflow,
};

/// A partial style: the set of properties one layer wants to change.
///
/// Every field is a [`StyleValue`]; only fields that are explicitly `Set`
/// take part in [`merge`](Self::merge). The same type serves container
/// patches and text patches, a text renderer simply ignores box properties
/// and vice versa.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleProperties {
    // === Layout ===
    /// Main-axis direction for children.
    pub flex_direction: StyleValue<FlexDirection>,
    /// Cross-axis alignment of children.
    pub align_items: StyleValue<Alignment>,
    /// Main-axis distribution of children.
    pub justify_content: StyleValue<Justify>,
    /// Cross-axis alignment of this box inside its parent.
    pub align_self: StyleValue<Alignment>,

    // === Box Model ===
    /// Padding (inner spacing).
    pub padding: StyleValue<EdgeValues>,
    /// Border width.
    pub border_width: StyleValue<f32>,
    /// Border color.
    pub border_color: StyleValue<Color>,
    /// Border line style.
    pub border_style: StyleValue<BorderStyle>,
    /// Border radius (corner rounding).
    pub border_radius: StyleValue<CornerRadii>,

    // === Background ===
    /// Background fill color.
    pub background_color: StyleValue<Color>,

    // === Size Constraints ===
    /// Minimum width.
    pub min_width: StyleValue<f32>,
    /// Minimum height.
    pub min_height: StyleValue<f32>,
    /// Explicit width.
    pub width: StyleValue<f32>,
    /// Explicit height.
    pub height: StyleValue<f32>,

    // === Effects ===
    /// Opacity (0.0-1.0) applied to the whole box.
    pub opacity: StyleValue<f32>,
    /// Shadow profile.
    pub shadow: StyleValue<ShadowProfile>,

    // === Typography ===
    /// Font size.
    pub font_size: StyleValue<f32>,
    /// Font weight.
    pub font_weight: StyleValue<FontWeight>,
    /// Text color.
    pub color: StyleValue<Color>,
    /// Text alignment.
    pub text_align: StyleValue<TextAlign>,
    /// Letter spacing.
    pub letter_spacing: StyleValue<f32>,
    /// Maximum number of rendered lines.
    pub max_lines: StyleValue<u32>,
    /// Truncation behavior for text that does not fit.
    pub text_overflow: StyleValue<TextOverflow>,
}

macro_rules! for_each_property {
    ($mac:ident) => {
        $mac!(
            // Layout
            flex_direction, align_items, justify_content, align_self,
            // Box model
            padding, border_width, border_color, border_style, border_radius,
            // Background
            background_color,
            // Size
            min_width, min_height, width, height,
            // Effects
            opacity, shadow,
            // Typography
            font_size, font_weight, color, text_align, letter_spacing, max_lines, text_overflow,
        )
    };
}

impl StyleProperties {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlay another patch onto this one.
    ///
    /// Only explicitly set values from `other` are copied; everything else
    /// in `self` is left alone.
    pub fn merge(&mut self, other: &StyleProperties) {
        macro_rules! merge_if_set {
            ($($prop:ident),+ $(,)?) => {
                $(
                    if other.$prop.is_set() {
                        self.$prop = other.$prop.clone();
                    }
                )+
            };
        }

        for_each_property!(merge_if_set);
    }

    /// Number of explicitly set properties.
    pub fn set_count(&self) -> usize {
        let mut count = 0;
        macro_rules! count_set {
            ($($prop:ident),+ $(,)?) => {
                $(
                    if self.$prop.is_set() {
                        count += 1;
                    }
                )+
            };
        }

        for_each_property!(count_set);
        count
    }

    /// Check whether the patch sets nothing.
    pub fn is_empty(&self) -> bool {
        self.set_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn properties_default() {
        let props = StyleProperties::new();
        assert!(props.is_empty());
        assert!(!props.padding.is_set());
        assert!(!props.color.is_set());
    }

    #[test]
    fn properties_merge() {
        let mut base = StyleProperties::new();
        base.color = StyleValue::Set(Color::BLACK);
        base.border_width = StyleValue::Set(1.0);

        let mut overlay = StyleProperties::new();
        overlay.color = StyleValue::Set(Color::WHITE);
        overlay.opacity = StyleValue::Set(0.5);

        base.merge(&overlay);

        assert_eq!(base.color.as_set(), Some(&Color::WHITE));
        assert_eq!(base.opacity.as_set(), Some(&0.5));
        // Untouched by the overlay.
        assert_eq!(base.border_width.as_set(), Some(&1.0));
        assert_eq!(base.set_count(), 3);
    }

    #[test]
    fn merge_with_empty_is_identity() {
        let mut base = StyleProperties::new();
        base.min_height = StyleValue::Set(40.0);
        let before = base.clone();

        base.merge(&StyleProperties::new());
        assert_eq!(base, before);
    }
}
