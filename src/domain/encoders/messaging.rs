//! Communication URI schemes: mailto, tel, sms, WhatsApp, Skype and Zoom.

use super::{EncodeContext, pct, query_param};
use crate::domain::fields::FieldMap;

/// `mailto:<to>[?subject=..][&body=..]`.
///
/// The recipient itself is percent-encoded; `body` starts the query when no
/// subject is present.
pub fn encode_email(fields: &FieldMap, _ctx: &EncodeContext) -> String {
    let mut out = format!("mailto:{}", pct(fields.text("to")));
    let mut started = false;

    let subject = fields.text("subject");
    if !subject.is_empty() {
        out.push_str(&query_param(started, "subject", subject));
        started = true;
    }

    let body = fields.text("body");
    if !body.is_empty() {
        out.push_str(&query_param(started, "body", body));
    }

    out
}

pub fn encode_phone(fields: &FieldMap, _ctx: &EncodeContext) -> String {
    format!("tel:{}", strip_whitespace(fields.text("number")))
}

/// `sms:<number>[?body=..]`, whitespace removed from the number.
pub fn encode_sms(fields: &FieldMap, _ctx: &EncodeContext) -> String {
    let mut out = format!("sms:{}", strip_whitespace(fields.text("number")));

    let text = fields.text("text");
    if !text.is_empty() {
        out.push_str(&query_param(false, "body", text));
    }

    out
}

/// `https://wa.me/<digits>[?text=..]`.
///
/// wa.me only accepts the bare international number, so everything but
/// ASCII digits is dropped (`+`, spaces, dashes, parentheses).
pub fn encode_whatsapp(fields: &FieldMap, _ctx: &EncodeContext) -> String {
    let digits: String = fields
        .text("number")
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();
    let mut out = format!("https://wa.me/{digits}");

    let text = fields.text("text");
    if !text.is_empty() {
        out.push_str(&query_param(false, "text", text));
    }

    out
}

pub fn encode_skype(fields: &FieldMap, _ctx: &EncodeContext) -> String {
    format!("skype:{}?call", pct(fields.text("username")))
}

/// Zoom desktop-client join link; empty when no meeting number is given.
pub fn encode_zoom(fields: &FieldMap, _ctx: &EncodeContext) -> String {
    let meeting = fields.text("meeting");
    if meeting.is_empty() {
        return String::new();
    }
    format!(
        "zoommtg://zoom.us/join?action=join&confno={}",
        pct(meeting)
    )
}

fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> EncodeContext {
        EncodeContext::new("https://qr.example.com")
    }

    #[test]
    fn test_email_full() {
        let fields = FieldMap::new()
            .with_text("to", "ada@ex.com")
            .with_text("subject", "Hello there")
            .with_text("body", "See you & bye");

        assert_eq!(
            encode_email(&fields, &ctx()),
            "mailto:ada%40ex.com?subject=Hello%20there&body=See%20you%20%26%20bye"
        );
    }

    #[test]
    fn test_email_body_without_subject_uses_question_mark() {
        let fields = FieldMap::new()
            .with_text("to", "a@b.c")
            .with_text("body", "hi");

        assert_eq!(encode_email(&fields, &ctx()), "mailto:a%40b.c?body=hi");
    }

    #[test]
    fn test_email_empty() {
        assert_eq!(encode_email(&FieldMap::new(), &ctx()), "mailto:");
    }

    #[test]
    fn test_phone_strips_whitespace_only() {
        let fields = FieldMap::new().with_text("number", "+1 (555) 010-0000");
        assert_eq!(encode_phone(&fields, &ctx()), "tel:+1(555)010-0000");
    }

    #[test]
    fn test_sms() {
        let fields = FieldMap::new()
            .with_text("number", "+90 555 111 22 33")
            .with_text("text", "On my way");

        assert_eq!(
            encode_sms(&fields, &ctx()),
            "sms:+905551112233?body=On%20my%20way"
        );
    }

    #[test]
    fn test_sms_without_text() {
        let fields = FieldMap::new().with_text("number", "12 34");
        assert_eq!(encode_sms(&fields, &ctx()), "sms:1234");
    }

    #[test]
    fn test_whatsapp_keeps_digits_only() {
        let fields = FieldMap::new()
            .with_text("number", "+90 (555) 111-22-33")
            .with_text("text", "Merhaba!");

        assert_eq!(
            encode_whatsapp(&fields, &ctx()),
            "https://wa.me/905551112233?text=Merhaba!"
        );
    }

    #[test]
    fn test_skype() {
        let fields = FieldMap::new().with_text("username", "live:ada.l");
        assert_eq!(encode_skype(&fields, &ctx()), "skype:live%3Aada.l?call");
    }

    #[test]
    fn test_zoom() {
        let fields = FieldMap::new().with_text("meeting", "123 456 789");
        assert_eq!(
            encode_zoom(&fields, &ctx()),
            "zoommtg://zoom.us/join?action=join&confno=123%20456%20789"
        );
        assert_eq!(encode_zoom(&FieldMap::new(), &ctx()), "");
    }
}
