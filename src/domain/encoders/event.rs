//! iCalendar events (`VCALENDAR` with a single `VEVENT`).

use super::EncodeContext;
use crate::domain::fields::FieldMap;
use crate::utils::escape::escape_text;
use chrono::{DateTime, Local, NaiveDateTime};

/// Input formats accepted for `start` / `end`, interpreted as local time.
///
/// These are the shapes an HTML `datetime-local` input produces.
const LOCAL_INPUT_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Basic ICS local timestamp; seconds are always `00`.
const ICS_FORMAT: &str = "%Y%m%dT%H%M00";

/// Encodes a calendar event.
///
/// `UID` is derived from the context clock. Optional lines whose field is
/// empty, and timestamps that do not parse, are left out.
pub fn encode_event(fields: &FieldMap, ctx: &EncodeContext) -> String {
    let uid = format!("UID:QR-{}@local", ctx.now.timestamp_millis());

    let lines = [
        Some("BEGIN:VCALENDAR".to_string()),
        Some("VERSION:2.0".to_string()),
        Some("BEGIN:VEVENT".to_string()),
        Some(uid),
        text_line("SUMMARY", fields.text("summary")),
        text_line("LOCATION", fields.text("location")),
        text_line("DESCRIPTION", fields.text("description")),
        parse_local(fields.text("start")).map(|dt| format!("DTSTART:{}", dt.format(ICS_FORMAT))),
        parse_local(fields.text("end")).map(|dt| format!("DTEND:{}", dt.format(ICS_FORMAT))),
        Some("END:VEVENT".to_string()),
        Some("END:VCALENDAR".to_string()),
    ];

    lines.into_iter().flatten().collect::<Vec<_>>().join("\n")
}

fn text_line(property: &str, value: &str) -> Option<String> {
    (!value.is_empty()).then(|| format!("{property}:{}", escape_text(value)))
}

/// Parses a local datetime input, or an RFC 3339 timestamp converted to
/// local time.
fn parse_local(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    LOCAL_INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(input)
                .ok()
                .map(|dt| dt.with_timezone(&Local).naive_local())
        })
}
