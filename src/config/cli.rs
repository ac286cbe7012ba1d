use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, builder::BoolishValueParser};

/// Command-line arguments for the Suncrest binary.
#[derive(Debug, Parser)]
#[command(name = "suncrest", version, about = "Suncrest Finance website server")]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(long = "config-file", env = "SUNCREST_CONFIG_FILE", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run the public HTTP server.
    Serve(Box<ServeArgs>),
    /// Print the business days currently offered for appointments.
    Slots(SlotsArgs),
}

#[derive(Debug, Args, Default, Clone)]
pub struct ServeArgs {
    #[command(flatten)]
    pub overrides: ServeOverrides,
}

#[derive(Debug, Args, Default, Clone)]
pub struct BookingOverrides {
    /// Override the IANA timezone used for appointment times.
    #[arg(long = "site-timezone", value_name = "TZ")]
    pub timezone: Option<String>,

    /// Override how many business days are offered for booking.
    #[arg(long = "booking-days-ahead", value_name = "COUNT")]
    pub days_ahead: Option<u32>,
}

#[derive(Debug, Args, Default, Clone)]
pub struct ServeOverrides {
    #[command(flatten)]
    pub booking: BookingOverrides,

    /// Override the listener host.
    #[arg(long = "server-host", value_name = "HOST")]
    pub server_host: Option<String>,

    /// Override the listener port.
    #[arg(long = "server-port", value_name = "PORT")]
    pub server_port: Option<u16>,

    /// Override the graceful shutdown timeout.
    #[arg(long = "server-graceful-shutdown-seconds", value_name = "SECONDS")]
    pub server_graceful_shutdown_seconds: Option<u64>,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub log_json: Option<bool>,

    /// Override the public site URL used for canonical links.
    #[arg(long = "site-public-url", value_name = "URL")]
    pub public_url: Option<String>,

    /// Override the mail delivery endpoint.
    #[arg(long = "mail-endpoint", value_name = "URL")]
    pub mail_endpoint: Option<String>,
}

#[derive(Debug, Args, Clone)]
pub struct SlotsArgs {
    #[command(flatten)]
    pub booking: BookingOverrides,

    /// Also list the time slots offered on each day.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub with_times: bool,
}
