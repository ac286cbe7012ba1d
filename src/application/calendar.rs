//! Calendar artifacts for a booked appointment: a Google Calendar template
//! link and an RFC 5545 `VCALENDAR` document.

use time::{OffsetDateTime, UtcOffset};
use url::form_urlencoded;
use uuid::Uuid;

const GOOGLE_RENDER_URL: &str = "https://calendar.google.com/calendar/render";
const PRODUCT_ID: &str = "-//Suncrest Finance//Appointment//EN";
const DEFAULT_LOCATION: &str = "Online";
const MAX_LINE_OCTETS: usize = 75;
const CRLF: &str = "\r\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub title: String,
    pub details: String,
    pub location: Option<String>,
    pub start: OffsetDateTime,
    pub end: OffsetDateTime,
}

impl CalendarEvent {
    pub fn location(&self) -> &str {
        self.location
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(DEFAULT_LOCATION)
    }
}

/// `20261019T083000Z`: the instant in UTC, basic format, whole seconds.
pub fn google_date_time(instant: OffsetDateTime) -> String {
    let utc = instant.to_offset(UtcOffset::UTC);
    format!(
        "{:04}{:02}{:02}T{:02}{:02}{:02}Z",
        utc.year(),
        u8::from(utc.month()),
        utc.day(),
        utc.hour(),
        utc.minute(),
        utc.second()
    )
}

pub fn google_calendar_url(event: &CalendarEvent) -> String {
    let dates = format!(
        "{}/{}",
        google_date_time(event.start),
        google_date_time(event.end)
    );
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("action", "TEMPLATE")
        .append_pair("text", &event.title)
        .append_pair("details", &event.details)
        .append_pair("location", event.location())
        .append_pair("dates", &dates)
        .finish();

    format!("{GOOGLE_RENDER_URL}?{query}")
}

/// Escapes a TEXT property value; bare CR and CRLF count as one newline.
pub fn escape_ics_text(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut escaped = String::with_capacity(normalized.len());
    for ch in normalized.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            ',' => escaped.push_str("\\,"),
            ';' => escaped.push_str("\\;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Folds a content line so no physical line exceeds 75 octets.
///
/// Continuation lines start with a single space, which counts toward their limit.
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let mut folded = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3);
    let mut used = 0;
    for ch in line.chars() {
        let width = ch.len_utf8();
        if used + width > MAX_LINE_OCTETS {
            folded.push_str(CRLF);
            folded.push(' ');
            used = 1;
        }
        folded.push(ch);
        used += width;
    }
    folded
}

pub fn new_uid(stamp: &str) -> String {
    format!("{stamp}-{}@suncrest", Uuid::new_v4().simple())
}

/// Renders the event as a single-event calendar, CRLF-terminated.
pub fn build_ics(event: &CalendarEvent, stamp: OffsetDateTime, uid: &str) -> String {
    let lines = [
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{PRODUCT_ID}"),
        "CALSCALE:GREGORIAN".to_string(),
        "METHOD:PUBLISH".to_string(),
        "BEGIN:VEVENT".to_string(),
        format!("UID:{uid}"),
        format!("DTSTAMP:{}", google_date_time(stamp)),
        format!("DTSTART:{}", google_date_time(event.start)),
        format!("DTEND:{}", google_date_time(event.end)),
        format!("SUMMARY:{}", escape_ics_text(&event.title)),
        format!("DESCRIPTION:{}", escape_ics_text(&event.details)),
        format!("LOCATION:{}", escape_ics_text(event.location())),
        "END:VEVENT".to_string(),
        "END:VCALENDAR".to_string(),
    ];

    let mut ics = String::new();
    for line in lines {
        ics.push_str(&fold_line(&line));
        ics.push_str(CRLF);
    }
    ics
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn event() -> CalendarEvent {
        CalendarEvent {
            title: "Consultation — Tax Services".to_string(),
            details: "Client: Asha Iyer\nEmail: asha@example.com\nPhone: 98200 00000".to_string(),
            location: None,
            start: datetime!(2026-10-19 14:00 +05:30),
            end: datetime!(2026-10-19 15:00 +05:30),
        }
    }

    #[test]
    fn google_date_time_is_utc_basic_format() {
        assert_eq!(
            google_date_time(datetime!(2026-10-19 14:00:07.250 +05:30)),
            "20261019T083007Z"
        );
    }

    #[test]
    fn google_url_encodes_every_parameter() {
        let url = google_calendar_url(&event());

        assert!(url.starts_with("https://calendar.google.com/calendar/render?action=TEMPLATE&"));
        assert!(url.contains("&location=Online&"));
        assert!(url.ends_with("&dates=20261019T083000Z%2F20261019T093000Z"));
        assert!(url.contains("details=Client%3A+Asha+Iyer%0AEmail%3A+asha%40example.com"));
    }

    #[test]
    fn google_url_dates_round_trip_through_query_parsing() {
        let url = google_calendar_url(&event());
        let (_, query) = url.split_once('?').expect("query string");
        let dates = form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == "dates")
            .map(|(_, value)| value.into_owned());

        assert_eq!(dates.as_deref(), Some("20261019T083000Z/20261019T093000Z"));
    }

    #[test]
    fn escapes_reserved_characters() {
        assert_eq!(escape_ics_text(r"a\b, c; d"), r"a\\b\, c\; d");
        assert_eq!(
            escape_ics_text("line one\r\nline two\rthree"),
            r"line one\nline two\nthree"
        );
    }

    #[test]
    fn folding_keeps_lines_within_limit_on_char_boundaries() {
        let line = format!("DESCRIPTION:{}", "₹".repeat(60));
        let folded = fold_line(&line);

        for physical in folded.split(CRLF) {
            assert!(physical.len() <= MAX_LINE_OCTETS, "{physical:?} too long");
        }
        assert!(folded.split(CRLF).skip(1).all(|part| part.starts_with(' ')));
        assert_eq!(folded.replace("\r\n ", ""), line);
    }

    #[test]
    fn short_lines_are_untouched() {
        assert_eq!(fold_line("VERSION:2.0"), "VERSION:2.0");
    }

    #[test]
    fn uid_embeds_stamp_and_domain() {
        let uid = new_uid("20261017T060000Z");
        assert!(uid.starts_with("20261017T060000Z-"));
        assert!(uid.ends_with("@suncrest"));
        assert_ne!(uid, new_uid("20261017T060000Z"));
    }

    #[test]
    fn ics_document_layout() {
        let ics = build_ics(
            &event(),
            datetime!(2026-10-17 06:00 UTC),
            "20261017T060000Z-test@suncrest",
        );

        assert!(ics.ends_with("END:VCALENDAR\r\n"));
        insta::assert_snapshot!(ics.replace("\r\n", "\n").trim_end(), @r"
        BEGIN:VCALENDAR
        VERSION:2.0
        PRODID:-//Suncrest Finance//Appointment//EN
        CALSCALE:GREGORIAN
        METHOD:PUBLISH
        BEGIN:VEVENT
        UID:20261017T060000Z-test@suncrest
        DTSTAMP:20261017T060000Z
        DTSTART:20261019T083000Z
        DTEND:20261019T093000Z
        SUMMARY:Consultation — Tax Services
        DESCRIPTION:Client: Asha Iyer\nEmail: asha@example.com\nPhone: 98200 00000
        LOCATION:Online
        END:VEVENT
        END:VCALENDAR
        ");
    }
}
