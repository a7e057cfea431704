//! Device platform detection and multi-platform target resolution.

use regex::Regex;
use std::sync::LazyLock;

static IOS_UA_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"iPad|iPhone|iPod").expect("valid iOS regex"));
static ANDROID_UA_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Android").expect("valid Android regex"));

/// Platform class derived from a `User-Agent` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Ios,
    Android,
    Desktop,
}

impl Platform {
    /// Classifies a user agent string.
    ///
    /// iOS signatures are checked before Android, and anything unrecognised
    /// (including an empty string) is treated as desktop.
    pub fn detect(user_agent: &str) -> Self {
        if IOS_UA_REGEX.is_match(user_agent) {
            Platform::Ios
        } else if ANDROID_UA_REGEX.is_match(user_agent) {
            Platform::Android
        } else {
            Platform::Desktop
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
            Platform::Desktop => "desktop",
        }
    }
}

/// Candidate destinations of a multi-platform link.
///
/// Empty strings are treated the same as absent values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedirectTargets {
    pub ios: Option<String>,
    pub android: Option<String>,
    pub desktop: Option<String>,
    pub fallback: Option<String>,
}

impl RedirectTargets {
    /// Picks the target for `platform`, falling back to `fallback`.
    ///
    /// Returns `None` when neither the platform URL nor the fallback is set.
    pub fn resolve(&self, platform: Platform) -> Option<&str> {
        let preferred = match platform {
            Platform::Ios => &self.ios,
            Platform::Android => &self.android,
            Platform::Desktop => &self.desktop,
        };

        non_empty(preferred).or_else(|| non_empty(&self.fallback))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
