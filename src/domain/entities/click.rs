//! Click counter entry for a tracked redirect target.

use serde::Serialize;

/// Number of redirects issued for one literal `to` value.
///
/// The key is the target exactly as received, before any UTM parameters are
/// merged into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClickCount {
    pub to: String,
    pub count: u64,
}

impl ClickCount {
    pub fn new(to: impl Into<String>, count: u64) -> Self {
        Self {
            to: to.into(),
            count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_count_serializes_as_pair() {
        let entry = ClickCount::new("https://x", 2);
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json, serde_json::json!({ "to": "https://x", "count": 2 }));
    }
}
