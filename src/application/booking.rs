//! Appointment booking: offered dates, validation and calendar artifacts.

use std::sync::Arc;

use chrono_tz::Tz;
use metrics::counter;
use thiserror::Error;
use time::{Date, Duration, OffsetDateTime};
use tracing::{info, warn};
use url::form_urlencoded;

use crate::{
    application::{
        calendar::{self, CalendarEvent},
        counters,
    },
    config::{BookingSettings, SiteSettings},
    domain::{
        appointments::{
            self, AppointmentForm, AppointmentRequest, DateRule, TIME_SLOTS, TimeSlot,
        },
        validation::FieldErrors,
    },
    presentation::views::{BookingConfirmedView, BookingFormView, SelectOption},
    util::timezone,
};

const SOURCE: &str = "application::booking::BookingService";
pub const ICS_PATH: &str = "/contact/appointment.ics";
pub const ICS_FILENAME: &str = "appointment.ics";

pub type Clock = Arc<dyn Fn() -> OffsetDateTime + Send + Sync>;

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("appointment form has {} invalid field(s)", .0.len())]
    Invalid(FieldErrors),
    #[error("{date} {time} does not exist in {timezone}")]
    UnresolvableTime {
        date: Date,
        time: &'static str,
        timezone: Tz,
    },
    #[error("appointment starting {start} ends past the supported calendar range")]
    OutOfRange { start: OffsetDateTime },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableDate {
    pub date: Date,
    pub value: String,
    pub label: String,
}

impl AvailableDate {
    fn new(date: Date) -> Self {
        Self {
            date,
            value: appointments::date_value(date),
            label: appointments::date_label(date),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BookingConfirmation {
    pub request: AppointmentRequest,
    pub event: CalendarEvent,
    pub google_url: String,
    pub ics_href: String,
}

#[derive(Debug, Clone)]
pub struct BookingOptions {
    pub days_ahead: usize,
    pub duration: Duration,
    pub location: String,
    pub default_service: String,
}

impl From<&BookingSettings> for BookingOptions {
    fn from(settings: &BookingSettings) -> Self {
        Self {
            days_ahead: settings.days_ahead.get() as usize,
            duration: settings.duration,
            location: settings.location.clone(),
            default_service: settings.default_service.clone(),
        }
    }
}

#[derive(Clone)]
pub struct BookingService {
    clock: Clock,
    timezone: Tz,
    options: BookingOptions,
}

impl BookingService {
    pub fn new(timezone: Tz, options: BookingOptions) -> Self {
        Self {
            clock: Arc::new(OffsetDateTime::now_utc),
            timezone,
            options,
        }
    }

    pub fn from_settings(site: &SiteSettings, booking: &BookingSettings) -> Self {
        Self::new(site.timezone, BookingOptions::from(booking))
    }

    /// Replaces the wall clock, for tests and the `slots` command.
    pub fn with_clock(self, clock: impl Fn() -> OffsetDateTime + Send + Sync + 'static) -> Self {
        Self {
            clock: Arc::new(clock),
            ..self
        }
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Today's date on the site's wall clock.
    pub fn today(&self) -> Date {
        let now = (self.clock)();
        timezone::localized_date(now, self.timezone).unwrap_or_else(|| now.date())
    }

    pub fn available_dates(&self) -> Vec<AvailableDate> {
        appointments::next_business_days(self.today(), self.options.days_ahead)
            .into_iter()
            .map(AvailableDate::new)
            .collect()
    }

    pub fn time_slots(&self) -> &'static [TimeSlot] {
        &TIME_SLOTS
    }

    /// Form state for the booking widget; `values.date` preselects a day.
    pub fn form(&self, values: AppointmentForm, errors: FieldErrors) -> BookingFormView {
        let dates = self
            .available_dates()
            .into_iter()
            .map(|date| SelectOption {
                selected: values.date.trim() == date.value,
                value: date.value,
                label: date.label,
            })
            .collect();
        let slots = self
            .time_slots()
            .iter()
            .map(|slot| SelectOption {
                value: slot.value.to_string(),
                label: slot.label.to_string(),
                selected: values.time.trim() == slot.value,
            })
            .collect();

        BookingFormView {
            values,
            errors,
            dates,
            slots,
        }
    }

    pub fn book(&self, form: &AppointmentForm) -> Result<BookingConfirmation, BookingError> {
        let offered: Vec<Date> = self
            .available_dates()
            .into_iter()
            .map(|available| available.date)
            .collect();

        let request = form
            .validate(DateRule::Offered(&offered), &self.options.default_service)
            .map_err(|errors| {
                counter!(counters::FORM_REJECTIONS, "form" => "appointment").increment(1);
                BookingError::Invalid(errors)
            })?;

        let event = self.event_for(&request)?;
        let confirmation = BookingConfirmation {
            google_url: calendar::google_calendar_url(&event),
            ics_href: ics_href(&request),
            event,
            request,
        };

        counter!(counters::APPOINTMENTS_BOOKED).increment(1);
        info!(
            target = SOURCE,
            service = %confirmation.request.service,
            date = %confirmation.request.date,
            time = confirmation.request.slot.value,
            "appointment booked"
        );

        Ok(confirmation)
    }

    /// Regenerates the calendar file for a booking link.
    ///
    /// Accepts weekdays from today through the last offered date, so a link
    /// stays valid until its day has passed.
    pub fn ics_for(&self, form: &AppointmentForm) -> Result<String, BookingError> {
        let today = self.today();
        let last = appointments::next_business_days(today, self.options.days_ahead)
            .last()
            .copied()
            .unwrap_or(today);
        let request = form
            .validate(
                DateRule::BusinessDayBetween { first: today, last },
                &self.options.default_service,
            )
            .map_err(BookingError::Invalid)?;
        let event = self.event_for(&request)?;

        let stamp = (self.clock)();
        let uid = calendar::new_uid(&calendar::google_date_time(stamp));
        Ok(calendar::build_ics(&event, stamp, &uid))
    }

    pub fn confirmation_view(&self, confirmation: &BookingConfirmation) -> BookingConfirmedView {
        let request = &confirmation.request;
        BookingConfirmedView {
            name: request.name.clone(),
            service: request.service.clone(),
            date_label: appointments::date_label(request.date),
            time_label: request.slot.label.to_string(),
            duration_minutes: self.options.duration.whole_minutes(),
            location: confirmation.event.location().to_string(),
            google_url: confirmation.google_url.clone(),
            ics_href: confirmation.ics_href.clone(),
        }
    }

    fn event_for(&self, request: &AppointmentRequest) -> Result<CalendarEvent, BookingError> {
        let start = timezone::local_to_utc(request.date, request.slot.time, self.timezone)
            .ok_or_else(|| {
                warn!(
                    target = SOURCE,
                    date = %request.date,
                    time = request.slot.value,
                    timezone = %self.timezone,
                    "appointment time falls in a clock transition"
                );
                BookingError::UnresolvableTime {
                    date: request.date,
                    time: request.slot.value,
                    timezone: self.timezone,
                }
            })?;

        let end = start
            .checked_add(self.options.duration)
            .ok_or(BookingError::OutOfRange { start })?;

        Ok(CalendarEvent {
            title: format!("Consultation — {}", request.service),
            details: event_details(request),
            location: Some(self.options.location.clone()),
            start,
            end,
        })
    }
}

fn event_details(request: &AppointmentRequest) -> String {
    let mut details = format!(
        "Client: {}\nEmail: {}\nPhone: {}",
        request.name, request.email, request.phone
    );
    if let Some(notes) = request.notes.as_deref() {
        details.push_str("\n\nNotes:\n");
        details.push_str(notes);
    }
    details
}

/// Download link that carries the booking fields needed to rebuild the event.
fn ics_href(request: &AppointmentRequest) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query
        .append_pair("name", &request.name)
        .append_pair("email", &request.email)
        .append_pair("phone", &request.phone)
        .append_pair("service", &request.service)
        .append_pair("date", &appointments::date_value(request.date))
        .append_pair("time", request.slot.value);
    if let Some(notes) = request.notes.as_deref() {
        query.append_pair("notes", notes);
    }
    format!("{ICS_PATH}?{}", query.finish())
}
