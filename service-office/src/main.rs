//! service-office: terminal dashboard for the hotel service office

use clap::Parser;
use service_office::cli::Cli;
use service_office::commands::App;
use service_office::core::{AppConfig, FileSessionStore, Route, SessionProvider};
use service_office::logging;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = AppConfig::from_env();
    if let Some(url) = cli.api_url.clone() {
        config.api_url = url;
    }
    if let Some(dir) = cli.work_dir.clone() {
        config.work_dir = dir;
    }

    let _guard = logging::init_logger(cli.log_level.as_deref(), config.log_dir.as_deref())?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        let store = FileSessionStore::new(&config.work_dir);
        let session = store.load();
        tracing::debug!(
            path = %store.path().display(),
            has_token = session.token().is_some(),
            "session loaded"
        );

        let app = App::new(config, session);
        let result = app.run(cli.command).await;

        // Let a scheduled session-expired redirect land before exiting
        app.navigator().wait_pending().await;
        if app.navigator().current() == Route::Login {
            eprintln!("Redirected to {}. Sign in again to continue.", Route::Login);
        }
        result
    })
}
