//! Closed set of payload kinds understood by the encoder registry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies which encoder produces the payload for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Url,
    Text,
    Email,
    Phone,
    Sms,
    Whatsapp,
    Skype,
    Zoom,
    Wifi,
    Vcard,
    Event,
    Pdf,
    Image,
    Video,
    App,
    Social,
    Crypto,
    Location,
    Multi,
}

/// Returned when a tag does not name a known [`ContentKind`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown content kind: {0}")]
pub struct UnknownKind(pub String);

impl ContentKind {
    /// Every kind, in presentation order.
    pub const ALL: [ContentKind; 19] = [
        ContentKind::Url,
        ContentKind::Text,
        ContentKind::Email,
        ContentKind::Phone,
        ContentKind::Sms,
        ContentKind::Whatsapp,
        ContentKind::Skype,
        ContentKind::Zoom,
        ContentKind::Wifi,
        ContentKind::Vcard,
        ContentKind::Event,
        ContentKind::Pdf,
        ContentKind::Image,
        ContentKind::Video,
        ContentKind::App,
        ContentKind::Social,
        ContentKind::Crypto,
        ContentKind::Location,
        ContentKind::Multi,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Url => "url",
            ContentKind::Text => "text",
            ContentKind::Email => "email",
            ContentKind::Phone => "phone",
            ContentKind::Sms => "sms",
            ContentKind::Whatsapp => "whatsapp",
            ContentKind::Skype => "skype",
            ContentKind::Zoom => "zoom",
            ContentKind::Wifi => "wifi",
            ContentKind::Vcard => "vcard",
            ContentKind::Event => "event",
            ContentKind::Pdf => "pdf",
            ContentKind::Image => "image",
            ContentKind::Video => "video",
            ContentKind::App => "app",
            ContentKind::Social => "social",
            ContentKind::Crypto => "crypto",
            ContentKind::Location => "location",
            ContentKind::Multi => "multi",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_every_kind() {
        for kind in ContentKind::ALL {
            assert_eq!(kind.as_str().parse::<ContentKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = "fax".parse::<ContentKind>().unwrap_err();
        assert_eq!(err, UnknownKind("fax".to_string()));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("VCARD".parse::<ContentKind>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ContentKind::Whatsapp).unwrap();
        assert_eq!(json, "\"whatsapp\"");

        let kind: ContentKind = serde_json::from_str("\"location\"").unwrap();
        assert_eq!(kind, ContentKind::Location);
    }
}
