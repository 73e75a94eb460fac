//! Size and shape design tokens.

/// Metrics for one size tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeMetrics {
    /// Top and bottom padding.
    pub padding_vertical: f32,
    /// Left and right padding.
    pub padding_horizontal: f32,
    /// Minimum container height.
    pub min_height: f32,
    /// Minimum container width.
    pub min_width: f32,
    /// Label font size.
    pub font_size: f32,
}

/// The three size tiers, strictly increasing from `small` to `large`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeScale {
    pub small: SizeMetrics,
    pub medium: SizeMetrics,
    pub large: SizeMetrics,
}

impl SizeScale {
    /// Check that every metric grows strictly from small to medium to large.
    pub fn is_strictly_increasing(&self) -> bool {
        let grows = |a: &SizeMetrics, b: &SizeMetrics| {
            a.padding_vertical < b.padding_vertical
                && a.padding_horizontal < b.padding_horizontal
                && a.min_height < b.min_height
                && a.min_width < b.min_width
                && a.font_size < b.font_size
        };
        grows(&self.small, &self.medium) && grows(&self.medium, &self.large)
    }
}

impl Default for SizeScale {
    fn default() -> Self {
        Self {
            small: SizeMetrics {
                padding_vertical: 6.0,
                padding_horizontal: 12.0,
                min_height: 32.0,
                min_width: 64.0,
                font_size: 14.0,
            },
            medium: SizeMetrics {
                padding_vertical: 10.0,
                padding_horizontal: 16.0,
                min_height: 44.0,
                min_width: 80.0,
                font_size: 16.0,
            },
            large: SizeMetrics {
                padding_vertical: 14.0,
                padding_horizontal: 24.0,
                min_height: 52.0,
                min_width: 96.0,
                font_size: 18.0,
            },
        }
    }
}

/// Shape and state tokens shared by every size tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeTokens {
    /// Default corner radius.
    pub corner_radius: f32,
    /// Radius used for pill-shaped controls. Must be at least half of the
    /// largest minimum height.
    pub pill_radius: f32,
    /// Border width of outlined controls.
    pub outline_border_width: f32,
    /// Opacity applied to disabled controls.
    pub disabled_opacity: f32,
}

impl Default for ShapeTokens {
    fn default() -> Self {
        Self {
            corner_radius: 8.0,
            pill_radius: 9999.0,
            outline_border_width: 1.0,
            disabled_opacity: 0.6,
        }
    }
}
