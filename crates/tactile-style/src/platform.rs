//! Platform tags and their shadow profiles.
//!
//! Hosts draw shadows differently: one family of platforms renders a
//! blurred, offset copy of the box, another asks the compositor for an
//! elevation level. Everything else gets a neutral blur + offset shadow.

use tactile_core::{BoxShadow, Color, ShadowProfile};

/// The host platform, as far as shadow rendering is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Platform {
    /// Blur + offset shadows.
    Ios,
    /// Compositor elevation shadows.
    Android,
    /// Unknown host: neutral blur + offset shadow.
    #[default]
    Other,
}

impl Platform {
    /// Detect the platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "ios") {
            Platform::Ios
        } else if cfg!(target_os = "android") {
            Platform::Android
        } else {
            Platform::Other
        }
    }

    /// Parse a platform tag. Unknown tags map to [`Platform::Other`].
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "ios" => Platform::Ios,
            "android" => Platform::Android,
            _ => Platform::Other,
        }
    }

    /// Get the platform tag.
    pub fn tag(self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
            Platform::Other => "other",
        }
    }

    /// The raised-control shadow for this platform, drawn in `color`.
    pub fn shadow_profile(self, color: Color) -> ShadowProfile {
        match self {
            Platform::Ios => ShadowProfile::Drop(
                BoxShadow::new(color.with_alpha(0.25))
                    .with_offset(0.0, 2.0)
                    .with_blur(3.84),
            ),
            Platform::Android => ShadowProfile::Elevation(5.0),
            Platform::Other => ShadowProfile::Drop(
                BoxShadow::new(color.with_alpha(0.15))
                    .with_offset(0.0, 1.0)
                    .with_blur(3.0),
            ),
        }
    }
}

/// Reports which platform's shadow profile to use.
pub trait PlatformProvider {
    /// The current platform.
    fn platform(&self) -> Platform;
}

/// A provider that always reports the same platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedPlatform(pub Platform);

impl PlatformProvider for FixedPlatform {
    fn platform(&self) -> Platform {
        self.0
    }
}

impl PlatformProvider for Platform {
    fn platform(&self) -> Platform {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_are_distinct() {
        let ios = Platform::Ios.shadow_profile(Color::BLACK);
        let android = Platform::Android.shadow_profile(Color::BLACK);
        let other = Platform::Other.shadow_profile(Color::BLACK);

        assert!(ios.drop_shadow().is_some());
        assert!(android.elevation().is_some());
        assert!(other.drop_shadow().is_some());
        assert_ne!(ios, other);
        assert!(!ios.is_none() && !android.is_none() && !other.is_none());
    }

    #[test]
    fn tags_round_trip() {
        for platform in [Platform::Ios, Platform::Android, Platform::Other] {
            assert_eq!(Platform::from_tag(platform.tag()), platform);
        }
        assert_eq!(Platform::from_tag("web"), Platform::Other);
        assert_eq!(Platform::from_tag("IOS"), Platform::Ios);
    }

    #[test]
    fn fixed_provider() {
        assert_eq!(FixedPlatform(Platform::Android).platform(), Platform::Android);
        assert_eq!(FixedPlatform::default().platform(), Platform::Other);
    }
}
