//! `superapp`: opens the persisted session and loads one screen.
//!
//! ```text
//! superapp [route]      # route defaults to "profile", e.g. "cart", "shops/3"
//! ```

use std::process::ExitCode;

use client::app::{Activation, App, Route, Screen};
use client::config::ClientConfig;
use client::core::error::Result;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();
    let _log_guard = client::logging::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "superapp failed");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let route: Route = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "profile".to_string())
        .parse()?;

    let config = ClientConfig::from_env()?;
    tracing::info!(api_url = %config.api_url, route = %route, "Starting superapp");
    let app = App::new(&config)?;

    let screen = app.screen(route);
    match screen.activate().await {
        Activation::Allowed(route) => {
            println!("{}: {}", route.title(), screen.summary());
        }
        Activation::Redirected { requested, to } => {
            println!(
                "{} requires login. Redirected to {}.",
                requested.title(),
                to.title()
            );
        }
    }

    for notification in app.take_notifications() {
        println!("[{}] {}", notification.level.as_str(), notification.message);
    }
    screen.unmount();
    Ok(())
}
