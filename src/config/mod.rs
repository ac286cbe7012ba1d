//! Configuration layer: typed settings with layered precedence (file → env → CLI).

mod cli;

use std::{
    net::SocketAddr,
    num::NonZeroU32,
    str::FromStr,
    time::Duration,
};

use chrono_tz::Tz;
use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

pub use cli::{BookingOverrides, CliArgs, Command, ServeArgs, ServeOverrides, SlotsArgs};

const DEFAULT_CONFIG_BASENAME: &str = "config/default";
const LOCAL_CONFIG_BASENAME: &str = "suncrest";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_GRACEFUL_SHUTDOWN_SECS: u64 = 30;
const DEFAULT_PUBLIC_URL: &str = "http://localhost:3000/";
const DEFAULT_TIMEZONE: &str = "Asia/Kolkata";
const DEFAULT_BOOKING_DAYS_AHEAD: u32 = 14;
const MAX_BOOKING_DAYS_AHEAD: u32 = 60;
const DEFAULT_BOOKING_DURATION_MINUTES: u32 = 60;
const MAX_BOOKING_DURATION_MINUTES: u32 = 8 * 60;
const DEFAULT_BOOKING_LOCATION: &str = "Online";
const DEFAULT_BOOKING_SERVICE: &str = "Consultation";
pub(crate) const DEFAULT_MAIL_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
const DEFAULT_MAIL_TIMEOUT_SECS: u64 = 10;

/// Fully-resolved deployment settings after precedence resolution and validation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    pub site: SiteSettings,
    pub booking: BookingSettings,
    pub mail: MailSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub addr: SocketAddr,
    pub graceful_shutdown: Duration,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Json,
    Compact,
}

#[derive(Debug, Clone)]
pub struct SiteSettings {
    pub public_url: String,
    pub timezone: Tz,
}

#[derive(Debug, Clone)]
pub struct BookingSettings {
    pub days_ahead: NonZeroU32,
    pub duration: time::Duration,
    pub location: String,
    pub default_service: String,
}

#[derive(Debug, Clone)]
pub struct MailSettings {
    pub endpoint: String,
    /// `None` when delivery is not configured; submissions are then only logged.
    pub credentials: Option<MailCredentials>,
    pub timeout: Duration,
}

/// The three identifiers required by the transactional email service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailCredentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Load settings using the configured precedence (file → environment → CLI).
pub fn load(cli: &CliArgs) -> Result<Settings, LoadError> {
    let mut builder = Config::builder()
        .add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false))
        .add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

    if let Some(path) = cli.config_file.as_ref() {
        builder = builder.add_source(File::from(path.as_path()).required(true));
    }

    builder = builder.add_source(Environment::with_prefix("SUNCREST").separator("__"));

    let mut raw: RawSettings = builder.build()?.try_deserialize()?;

    match cli.command.as_ref() {
        Some(Command::Serve(args)) => raw.apply_serve_overrides(&args.overrides),
        Some(Command::Slots(args)) => raw.apply_booking_overrides(&args.booking),
        None => raw.apply_serve_overrides(&ServeOverrides::default()),
    }

    Settings::from_raw(raw)
}

/// Resolve configuration using the supplied CLI arguments, returning both for downstream use.
pub fn load_with_cli() -> Result<(CliArgs, Settings), LoadError> {
    let args = CliArgs::parse();
    let settings = load(&args)?;
    Ok((args, settings))
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    server: RawServerSettings,
    logging: RawLoggingSettings,
    site: RawSiteSettings,
    booking: RawBookingSettings,
    mail: RawMailSettings,
}

impl RawSettings {
    fn apply_serve_overrides(&mut self, overrides: &ServeOverrides) {
        if let Some(host) = overrides.server_host.as_ref() {
            self.server.host = Some(host.clone());
        }
        if let Some(port) = overrides.server_port {
            self.server.port = Some(port);
        }
        if let Some(seconds) = overrides.server_graceful_shutdown_seconds {
            self.server.graceful_shutdown_seconds = Some(seconds);
        }
        if let Some(level) = overrides.log_level.as_ref() {
            self.logging.level = Some(level.clone());
        }
        if let Some(json) = overrides.log_json {
            self.logging.json = Some(json);
        }
        if let Some(url) = overrides.public_url.as_ref() {
            self.site.public_url = Some(url.clone());
        }
        if let Some(endpoint) = overrides.mail_endpoint.as_ref() {
            self.mail.endpoint = Some(endpoint.clone());
        }

        self.apply_booking_overrides(&overrides.booking);
    }

    fn apply_booking_overrides(&mut self, overrides: &BookingOverrides) {
        if let Some(timezone) = overrides.timezone.as_ref() {
            self.site.timezone = Some(timezone.clone());
        }
        if let Some(days) = overrides.days_ahead {
            self.booking.days_ahead = Some(days);
        }
    }
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Self, LoadError> {
        let RawSettings {
            server,
            logging,
            site,
            booking,
            mail,
        } = raw;

        Ok(Self {
            server: build_server_settings(server)?,
            logging: build_logging_settings(logging)?,
            site: build_site_settings(site)?,
            booking: build_booking_settings(booking)?,
            mail: build_mail_settings(mail)?,
        })
    }
}

fn build_server_settings(server: RawServerSettings) -> Result<ServerSettings, LoadError> {
    let host = server.host.unwrap_or_else(|| DEFAULT_HOST.to_string());

    let port = server.port.unwrap_or(DEFAULT_PORT);
    if port == 0 {
        return Err(LoadError::invalid(
            "server.port",
            "port must be greater than zero",
        ));
    }

    let addr = parse_socket_addr(&host, port)
        .map_err(|reason| LoadError::invalid("server.addr", reason))?;

    let graceful_secs = server
        .graceful_shutdown_seconds
        .unwrap_or(DEFAULT_GRACEFUL_SHUTDOWN_SECS);
    if graceful_secs == 0 {
        return Err(LoadError::invalid(
            "server.graceful_shutdown_seconds",
            "must be greater than zero",
        ));
    }

    Ok(ServerSettings {
        addr,
        graceful_shutdown: Duration::from_secs(graceful_secs),
    })
}

fn build_logging_settings(logging: RawLoggingSettings) -> Result<LoggingSettings, LoadError> {
    let level = match logging.level {
        Some(level) => LevelFilter::from_str(level.as_str()).map_err(|err| {
            LoadError::invalid("logging.level", format!("failed to parse: {err}"))
        })?,
        None => LevelFilter::INFO,
    };

    let format = if logging.json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };

    Ok(LoggingSettings { level, format })
}

fn build_site_settings(site: RawSiteSettings) -> Result<SiteSettings, LoadError> {
    let public_url = non_empty(site.public_url).unwrap_or_else(|| DEFAULT_PUBLIC_URL.to_string());
    url::Url::parse(&public_url)
        .map_err(|err| LoadError::invalid("site.public_url", format!("invalid url: {err}")))?;

    let timezone_name = non_empty(site.timezone).unwrap_or_else(|| DEFAULT_TIMEZONE.to_string());
    let timezone = timezone_name.parse::<Tz>().map_err(|_| {
        LoadError::invalid("site.timezone", format!("unknown timezone `{timezone_name}`"))
    })?;

    Ok(SiteSettings {
        public_url,
        timezone,
    })
}

fn build_booking_settings(booking: RawBookingSettings) -> Result<BookingSettings, LoadError> {
    let days = booking.days_ahead.unwrap_or(DEFAULT_BOOKING_DAYS_AHEAD);
    if days > MAX_BOOKING_DAYS_AHEAD {
        return Err(LoadError::invalid(
            "booking.days_ahead",
            format!("must not exceed {MAX_BOOKING_DAYS_AHEAD}"),
        ));
    }
    let days_ahead = non_zero_u32(days.into(), "booking.days_ahead")?;

    let minutes = booking
        .duration_minutes
        .unwrap_or(DEFAULT_BOOKING_DURATION_MINUTES);
    if minutes == 0 || minutes > MAX_BOOKING_DURATION_MINUTES {
        return Err(LoadError::invalid(
            "booking.duration_minutes",
            format!("must be between 1 and {MAX_BOOKING_DURATION_MINUTES}"),
        ));
    }

    let location =
        non_empty(booking.location).unwrap_or_else(|| DEFAULT_BOOKING_LOCATION.to_string());
    let default_service =
        non_empty(booking.default_service).unwrap_or_else(|| DEFAULT_BOOKING_SERVICE.to_string());

    Ok(BookingSettings {
        days_ahead,
        duration: time::Duration::minutes(i64::from(minutes)),
        location,
        default_service,
    })
}

fn build_mail_settings(mail: RawMailSettings) -> Result<MailSettings, LoadError> {
    let endpoint = non_empty(mail.endpoint).unwrap_or_else(|| DEFAULT_MAIL_ENDPOINT.to_string());
    url::Url::parse(&endpoint)
        .map_err(|err| LoadError::invalid("mail.endpoint", format!("invalid url: {err}")))?;

    let credentials = match (
        non_empty(mail.service_id),
        non_empty(mail.template_id),
        non_empty(mail.public_key),
    ) {
        (Some(service_id), Some(template_id), Some(public_key)) => Some(MailCredentials {
            service_id,
            template_id,
            public_key,
        }),
        (None, None, None) => None,
        _ => {
            return Err(LoadError::invalid(
                "mail",
                "service_id, template_id and public_key must be configured together",
            ));
        }
    };

    let timeout_secs = mail.timeout_seconds.unwrap_or(DEFAULT_MAIL_TIMEOUT_SECS);
    if timeout_secs == 0 {
        return Err(LoadError::invalid(
            "mail.timeout_seconds",
            "must be greater than zero",
        ));
    }

    Ok(MailSettings {
        endpoint,
        credentials,
        timeout: Duration::from_secs(timeout_secs),
    })
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawServerSettings {
    host: Option<String>,
    port: Option<u16>,
    graceful_shutdown_seconds: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLoggingSettings {
    level: Option<String>,
    json: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSiteSettings {
    public_url: Option<String>,
    timezone: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawBookingSettings {
    days_ahead: Option<u32>,
    duration_minutes: Option<u32>,
    location: Option<String>,
    default_service: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawMailSettings {
    endpoint: Option<String>,
    service_id: Option<String>,
    template_id: Option<String>,
    public_key: Option<String>,
    timeout_seconds: Option<u64>,
}

fn parse_socket_addr(host: &str, port: u16) -> Result<SocketAddr, String> {
    let candidate = format!("{host}:{port}");
    candidate
        .parse()
        .map_err(|err| format!("invalid address `{candidate}`: {err}"))
}

fn non_zero_u32(value: u64, key: &'static str) -> Result<NonZeroU32, LoadError> {
    if value == 0 {
        return Err(LoadError::invalid(key, "must be greater than zero"));
    }
    let value_u32: u32 = value
        .try_into()
        .map_err(|_| LoadError::invalid(key, "value exceeds supported range for u32"))?;
    NonZeroU32::new(value_u32).ok_or_else(|| LoadError::invalid(key, "must be greater than zero"))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.and_then(|value| {
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}
