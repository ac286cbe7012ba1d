use std::process;

use suncrest::{
    application::{booking::BookingService, error::AppError},
    config,
    infra::{
        error::InfraError,
        http::{self, HttpState},
        mail, telemetry,
    },
};
use tokio::signal;
use tracing::{Dispatch, Level, dispatcher, error, info, warn};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt().with_max_level(Level::ERROR).finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()
        .map_err(|err| AppError::unexpected(format!("failed to load configuration: {err}")))?;

    let command = cli_args
        .command
        .unwrap_or(config::Command::Serve(Box::<config::ServeArgs>::default()));

    telemetry::init(&settings.logging).map_err(AppError::from)?;

    match command {
        config::Command::Serve(_) => run_serve(settings).await,
        config::Command::Slots(args) => run_slots(settings, args),
    }
}

async fn run_serve(settings: config::Settings) -> Result<(), AppError> {
    let mailer = mail::build_mailer(&settings.mail)?;
    let state = HttpState::from_settings(&settings, mailer)?;
    let router = http::build_router(state);

    let listener = tokio::net::TcpListener::bind(settings.server.addr)
        .await
        .map_err(|err| AppError::from(InfraError::bind(settings.server.addr, err)))?;

    info!(
        target = "suncrest::serve",
        addr = %settings.server.addr,
        public_url = %settings.site.public_url,
        timezone = %settings.site.timezone,
        "listening"
    );

    let grace = settings.server.graceful_shutdown;
    let server = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal());

    // The grace period starts once the shutdown signal has been observed.
    tokio::select! {
        result = server => {
            result.map_err(|err| AppError::unexpected(format!("server error: {err}")))?;
        }
        () = async {
            shutdown_signal().await;
            tokio::time::sleep(grace).await;
        } => {
            warn!(
                target = "suncrest::serve",
                grace_seconds = grace.as_secs(),
                "graceful shutdown timed out; dropping open connections"
            );
        }
    }

    info!(target = "suncrest::serve", "server stopped");
    Ok(())
}

fn run_slots(settings: config::Settings, args: config::SlotsArgs) -> Result<(), AppError> {
    let booking = BookingService::from_settings(&settings.site, &settings.booking);

    println!(
        "Bookable days after {} ({}):",
        booking.today(),
        booking.timezone()
    );
    for available in booking.available_dates() {
        if args.with_times {
            let times = booking
                .time_slots()
                .iter()
                .map(|slot| slot.label)
                .collect::<Vec<_>>()
                .join(", ");
            println!("  {}  {}  [{times}]", available.value, available.label);
        } else {
            println!("  {}  {}", available.value, available.label);
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!(target = "suncrest::serve", error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                error!(target = "suncrest::serve", error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    info!(target = "suncrest::serve", "shutdown signal received");
}
