use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use prompt_refiner::catalog::IntentId;
use prompt_refiner::cli::{Cli, Command};
use prompt_refiner::client::HttpRefinementClient;
use prompt_refiner::clipboard::SystemClipboard;
use prompt_refiner::config::Config;
use prompt_refiner::logging::init_tracing;
use prompt_refiner::server::RefinementServer;
use prompt_refiner::ui::app::App;
use prompt_refiner::ui::render::{render_error, render_intents, render_output};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(matches!(cli.command, Command::Serve { .. }));

    let config = cli
        .load_config()
        .context("Failed to load configuration")?;

    match cli.command {
        Command::Generate {
            intent,
            copy,
            prompt,
        } => generate(&config, intent, copy, prompt).await,
        Command::Intents => {
            println!("{}", render_intents());
            Ok(ExitCode::SUCCESS)
        }
        Command::Health => health(&config).await,
        Command::Serve { .. } => serve(&config).await,
    }
}

async fn generate(
    config: &Config,
    intent: Option<IntentId>,
    copy: bool,
    prompt: String,
) -> anyhow::Result<ExitCode> {
    let client =
        HttpRefinementClient::new(&config.service).context("Failed to build HTTP client")?;
    let mut app = App::new(config, Arc::new(client), Box::new(SystemClipboard::new()));

    app.form_mut().set_prompt(prompt);
    if let Some(intent) = intent {
        app.form_mut().select_intent(intent);
    }

    let pending = match app.submit() {
        Ok(pending) => pending,
        Err(err) => {
            eprintln!("{}", render_error(&err.to_string()));
            return Ok(ExitCode::FAILURE);
        }
    };
    app.complete(pending).await;

    if let Some(message) = app.error_message() {
        eprintln!("{}", render_error(&message));
        return Ok(ExitCode::FAILURE);
    }

    // Clipboard failures are logged by the presenter and otherwise ignored.
    if copy {
        app.copy();
    }

    if let Some(view) = app.output() {
        println!("{}", render_output(&view));
    }
    Ok(ExitCode::SUCCESS)
}

async fn health(config: &Config) -> anyhow::Result<ExitCode> {
    let client =
        HttpRefinementClient::new(&config.service).context("Failed to build HTTP client")?;

    match client.health().await {
        Ok(status) if status.is_healthy() => {
            println!("{}: healthy", client.base_url());
            Ok(ExitCode::SUCCESS)
        }
        Ok(status) => {
            eprintln!("{}: unexpected status '{}'", client.base_url(), status.status);
            Ok(ExitCode::FAILURE)
        }
        Err(err) => {
            tracing::debug!("Health check failed: {}", err);
            eprintln!("{}", render_error(err.user_message()));
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn serve(config: &Config) -> anyhow::Result<ExitCode> {
    let server = RefinementServer::bind(&config.server.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind_addr))?;
    println!("Refinement service listening on {}", server.base_url());

    server.run(shutdown_signal()).await?;
    Ok(ExitCode::SUCCESS)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {}", err);
        std::future::pending::<()>().await;
    }
}
