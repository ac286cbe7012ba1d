//! Appointment slots and booking requests.

use serde::{Deserialize, Serialize};
use time::{
    Date, Time, Weekday,
    format_description::FormatItem,
    macros::{format_description, time},
};

use super::validation::{self, FieldErrors};

/// `2026-10-19`, the value carried by the date picker.
pub const DATE_VALUE_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month padding:zero]-[day padding:zero]");
/// `Monday, Oct 19`, the label shown on the date picker.
pub const DATE_LABEL_FORMAT: &[FormatItem<'static>] =
    format_description!("[weekday], [month repr:short] [day padding:none]");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub value: &'static str,
    pub label: &'static str,
    pub time: Time,
}

pub static TIME_SLOTS: [TimeSlot; 7] = [
    TimeSlot {
        value: "09:00",
        label: "9:00 AM",
        time: time!(9:00),
    },
    TimeSlot {
        value: "10:00",
        label: "10:00 AM",
        time: time!(10:00),
    },
    TimeSlot {
        value: "11:00",
        label: "11:00 AM",
        time: time!(11:00),
    },
    TimeSlot {
        value: "14:00",
        label: "2:00 PM",
        time: time!(14:00),
    },
    TimeSlot {
        value: "15:00",
        label: "3:00 PM",
        time: time!(15:00),
    },
    TimeSlot {
        value: "16:00",
        label: "4:00 PM",
        time: time!(16:00),
    },
    TimeSlot {
        value: "17:00",
        label: "5:00 PM",
        time: time!(17:00),
    },
];

pub fn find_slot(value: &str) -> Option<&'static TimeSlot> {
    TIME_SLOTS.iter().find(|slot| slot.value == value)
}

pub fn is_business_day(date: Date) -> bool {
    !matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday)
}

/// The next `count` weekdays strictly after `today`, in ascending order.
pub fn next_business_days(today: Date, count: usize) -> Vec<Date> {
    let mut dates = Vec::with_capacity(count);
    let mut cursor = today;

    while dates.len() < count {
        let Some(next) = cursor.next_day() else {
            break;
        };
        cursor = next;
        if is_business_day(cursor) {
            dates.push(cursor);
        }
    }

    dates
}

pub fn date_value(date: Date) -> String {
    date.format(DATE_VALUE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

pub fn date_label(date: Date) -> String {
    date.format(DATE_LABEL_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

pub fn parse_date_value(value: &str) -> Option<Date> {
    Date::parse(value.trim(), DATE_VALUE_FORMAT).ok()
}

/// Which dates a booking may target.
#[derive(Debug, Clone, Copy)]
pub enum DateRule<'a> {
    /// One of the dates currently shown in the picker.
    Offered(&'a [Date]),
    /// Any weekday in `first..=last`; used when regenerating calendar files.
    BusinessDayBetween { first: Date, last: Date },
}

/// Raw booking form fields as posted by the browser.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppointmentForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub date: String,
    pub time: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub date: Date,
    pub slot: &'static TimeSlot,
    pub notes: Option<String>,
}

impl AppointmentForm {
    pub fn validate(
        &self,
        rule: DateRule<'_>,
        default_service: &str,
    ) -> Result<AppointmentRequest, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = validation::required(&mut errors, "name", &self.name, "Name is required");
        let email =
            validation::email(&mut errors, "email", &self.email, "Please enter a valid email");
        let phone = validation::required(&mut errors, "phone", &self.phone, "Phone is required");

        let schedule = self.schedule(rule, &mut errors);

        match schedule {
            Some((date, slot)) if errors.is_empty() => Ok(AppointmentRequest {
                name,
                email,
                phone,
                service: validation::optional(&self.service)
                    .unwrap_or_else(|| default_service.to_string()),
                date,
                slot,
                notes: validation::optional(&self.notes),
            }),
            _ => Err(errors),
        }
    }

    fn schedule(
        &self,
        rule: DateRule<'_>,
        errors: &mut FieldErrors,
    ) -> Option<(Date, &'static TimeSlot)> {
        if self.date.trim().is_empty() || self.time.trim().is_empty() {
            errors.insert("schedule", "Please select a date and time before booking.");
            return None;
        }

        let date = parse_date_value(&self.date).filter(|date| match rule {
            DateRule::Offered(offered) => offered.contains(date),
            DateRule::BusinessDayBetween { first, last } => {
                (first..=last).contains(date) && is_business_day(*date)
            }
        });
        if date.is_none() {
            errors.insert("date", "Please choose one of the available dates.");
        }

        let slot = find_slot(self.time.trim());
        if slot.is_none() {
            errors.insert("time", "Please choose one of the available times.");
        }

        date.zip(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn october() -> DateRule<'static> {
        DateRule::BusinessDayBetween {
            first: date!(2026 - 10 - 01),
            last: date!(2026 - 10 - 31),
        }
    }

    fn filled(date: &str, time: &str) -> AppointmentForm {
        AppointmentForm {
            name: "Rahul Mehta".to_string(),
            email: "rahul@example.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            service: String::new(),
            date: date.to_string(),
            time: time.to_string(),
            notes: "  ".to_string(),
        }
    }

    #[test]
    fn business_days_skip_weekends_and_start_tomorrow() {
        // Friday
        let today = date!(2026 - 10 - 16);
        let days = next_business_days(today, 3);

        assert_eq!(
            days,
            vec![
                date!(2026 - 10 - 19),
                date!(2026 - 10 - 20),
                date!(2026 - 10 - 21)
            ]
        );
    }

    #[test]
    fn business_days_return_exact_count_in_order() {
        let today = date!(2026 - 10 - 17);
        let days = next_business_days(today, 14);

        assert_eq!(days.len(), 14);
        assert!(days.iter().all(|day| *day > today));
        assert!(days.iter().all(|day| is_business_day(*day)));
        assert!(days.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(days.first().copied(), Some(date!(2026 - 10 - 19)));
        assert_eq!(days.last().copied(), Some(date!(2026 - 11 - 05)));
    }

    #[test]
    fn zero_business_days_is_empty() {
        assert!(next_business_days(date!(2026 - 10 - 17), 0).is_empty());
    }

    #[test]
    fn date_formats_match_picker() {
        let day = date!(2026 - 01 - 05);
        assert_eq!(date_value(day), "2026-01-05");
        assert_eq!(date_label(day), "Monday, Jan 5");
        assert_eq!(parse_date_value("2026-01-05"), Some(day));
        assert_eq!(parse_date_value("05/01/2026"), None);
    }

    #[test]
    fn valid_booking_uses_default_service_and_drops_blank_notes() {
        let offered = [date!(2026 - 10 - 19)];
        let request = filled("2026-10-19", "14:00")
            .validate(DateRule::Offered(&offered), "Consultation")
            .expect("valid booking");

        assert_eq!(request.service, "Consultation");
        assert_eq!(request.slot.label, "2:00 PM");
        assert_eq!(request.notes, None);
    }

    #[test]
    fn missing_schedule_is_reported_once() {
        let errors = filled("", "")
            .validate(october(), "Consultation")
            .expect_err("schedule required");

        assert_eq!(
            errors.get("schedule"),
            Some("Please select a date and time before booking.")
        );
        assert!(!errors.contains("date"));
    }

    #[test]
    fn dates_outside_the_offered_window_are_rejected() {
        let offered = [date!(2026 - 10 - 19)];
        let errors = filled("2026-10-20", "09:00")
            .validate(DateRule::Offered(&offered), "Consultation")
            .expect_err("date not offered");

        assert_eq!(
            errors.get("date"),
            Some("Please choose one of the available dates.")
        );
    }

    #[test]
    fn weekend_dates_fail_the_business_day_rule() {
        let errors = filled("2026-10-17", "09:00")
            .validate(october(), "Consultation")
            .expect_err("weekend");

        assert!(errors.contains("date"));
    }

    #[test]
    fn business_days_outside_the_range_are_rejected() {
        for value in ["2026-09-30", "2026-11-02", "9999-12-31"] {
            let errors = filled(value, "09:00")
                .validate(october(), "Consultation")
                .expect_err("outside range");
            assert!(errors.contains("date"), "{value}");
        }

        assert!(
            filled("2026-10-30", "09:00")
                .validate(october(), "Consultation")
                .is_ok()
        );
    }

    #[test]
    fn unknown_time_slot_is_rejected() {
        let errors = filled("2026-10-19", "13:00")
            .validate(october(), "Consultation")
            .expect_err("slot not offered");

        assert_eq!(
            errors.get("time"),
            Some("Please choose one of the available times.")
        );
    }
}
