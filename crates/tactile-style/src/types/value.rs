//! Style property value types.
//!
//! # Example
//!
//! ```
//! use tactile_style::prelude::*;
//!
//! // Explicitly set values win over the initial value.
//! let radius: StyleValue<f32> = StyleValue::Set(8.0);
//! assert_eq!(radius.resolve(&0.0), 8.0);
//!
//! // Unset values fall back to the initial value.
//! let opacity: StyleValue<f32> = StyleValue::Initial;
//! assert_eq!(opacity.resolve(&1.0), 1.0);
//!
//! let padding = EdgeValues::symmetric(10.0, 16.0);
//! assert_eq!(padding.horizontal(), 32.0);
//! ```

/// A style property value that is either explicitly set or left at its
/// initial value.
///
/// Layers in a style patch only override properties that are `Set`; an
/// `Initial` property lets whatever an earlier layer set show through.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum StyleValue<T> {
    /// An explicit value.
    Set(T),
    /// Not set by this patch; use the value from earlier layers, or the
    /// initial value if no layer sets it.
    #[default]
    Initial,
}

impl<T: Clone> StyleValue<T> {
    /// Resolve the value, falling back to `initial` when not set.
    pub fn resolve(&self, initial: &T) -> T {
        match self {
            StyleValue::Set(v) => v.clone(),
            StyleValue::Initial => initial.clone(),
        }
    }
}

impl<T> StyleValue<T> {
    /// Check if this value is explicitly set.
    pub fn is_set(&self) -> bool {
        matches!(self, StyleValue::Set(_))
    }

    /// Get the inner value if set.
    pub fn as_set(&self) -> Option<&T> {
        match self {
            StyleValue::Set(v) => Some(v),
            StyleValue::Initial => None,
        }
    }
}

impl<T> From<T> for StyleValue<T> {
    fn from(value: T) -> Self {
        StyleValue::Set(value)
    }
}

impl<T> From<Option<T>> for StyleValue<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => StyleValue::Set(v),
            None => StyleValue::Initial,
        }
    }
}

/// Edge values for padding, in density-independent units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeValues {
    /// Top edge value.
    pub top: f32,
    /// Right edge value.
    pub right: f32,
    /// Bottom edge value.
    pub bottom: f32,
    /// Left edge value.
    pub left: f32,
}

impl EdgeValues {
    /// Create uniform edge values.
    pub const fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create symmetric edge values (vertical, horizontal).
    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self {
            top: vertical,
            bottom: vertical,
            left: horizontal,
            right: horizontal,
        }
    }

    /// Create from 4 values (top, right, bottom, left).
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Zero on every edge.
    pub const ZERO: Self = Self::uniform(0.0);

    /// Get total horizontal space (left + right).
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Get total vertical space (top + bottom).
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Border line style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    /// Solid line border.
    #[default]
    Solid,
    /// Dotted line border.
    Dotted,
    /// Dashed line border.
    Dashed,
}

impl BorderStyle {
    /// Parse from a style name.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "solid" => Some(Self::Solid),
            "dotted" => Some(Self::Dotted),
            "dashed" => Some(Self::Dashed),
            _ => None,
        }
    }
}

/// Main-axis direction for a container's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexDirection {
    /// Children laid out left to right.
    #[default]
    Row,
    /// Children laid out top to bottom.
    Column,
}

/// Cross-axis alignment, used for both `align_items` and `align_self`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Align to the start of the cross axis.
    Start,
    /// Center on the cross axis.
    Center,
    /// Align to the end of the cross axis.
    End,
    /// Fill the cross axis.
    #[default]
    Stretch,
}

/// Main-axis distribution of a container's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify {
    /// Pack children at the start.
    #[default]
    Start,
    /// Center children.
    Center,
    /// Pack children at the end.
    End,
    /// Distribute free space between children.
    SpaceBetween,
}

/// Text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// Align to the start of the text direction.
    #[default]
    Start,
    /// Align to the end of the text direction.
    End,
    /// Center the text.
    Center,
}

/// How text that does not fit is cut off.
///
/// Truncation itself is done by the host's text renderer; this is the
/// request passed along to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextOverflow {
    /// Cut the text at the container edge.
    #[default]
    Clip,
    /// Replace the start of the text with an ellipsis.
    EllipsisHead,
    /// Replace the middle of the text with an ellipsis.
    EllipsisMiddle,
    /// Replace the end of the text with an ellipsis.
    EllipsisTail,
}

/// Font weight on the usual 100-900 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const NORMAL: Self = Self(400);
    pub const MEDIUM: Self = Self(500);
    pub const SEMIBOLD: Self = Self(600);
    pub const BOLD: Self = Self(700);
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_value_resolve() {
        let set: StyleValue<i32> = StyleValue::Set(42);
        assert_eq!(set.resolve(&0), 42);

        let initial: StyleValue<i32> = StyleValue::Initial;
        assert_eq!(initial.resolve(&7), 7);
    }

    #[test]
    fn style_value_from_option() {
        assert_eq!(StyleValue::<f32>::from(Some(1.5)), StyleValue::Set(1.5));
        assert_eq!(StyleValue::<f32>::from(None), StyleValue::Initial);
    }

    #[test]
    fn edge_values() {
        let edges = EdgeValues::symmetric(6.0, 12.0);
        assert_eq!(edges.vertical(), 12.0);
        assert_eq!(edges.horizontal(), 24.0);
        assert_eq!(EdgeValues::ZERO.horizontal(), 0.0);
    }

    #[test]
    fn border_style_names() {
        assert_eq!(BorderStyle::from_name("Dashed"), Some(BorderStyle::Dashed));
        assert_eq!(BorderStyle::from_name("dotted"), Some(BorderStyle::Dotted));
        assert_eq!(BorderStyle::from_name("double"), None);
    }

    #[test]
    fn font_weight_ordering() {
        assert!(FontWeight::BOLD > FontWeight::NORMAL);
        assert_eq!(FontWeight::default(), FontWeight::NORMAL);
    }
}
