use ai_image_detector::{cli, client, config, error, report, runner, scanner};
use clap::Parser;
use cli::{Cli, Commands, OutputFormat};
use client::PredictClient;
use config::Config;
use error::{DetectorError, Result};
use std::io::IsTerminal;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load()?;

    match cli.command {
        Commands::Detect { inputs, format } => {
            let endpoint = config.resolve_endpoint(cli.endpoint.as_deref())?;
            let client = PredictClient::new(endpoint, config.timeout())?;
            tracing::info!("エンドポイント: {}", client.endpoint());

            let files = scanner::expand_inputs(&inputs)?;
            let interactive = std::io::stderr().is_terminal() && format == OutputFormat::Text;
            let mut detect_runner = runner::DetectRunner::new(&client, interactive);
            let outcomes = detect_runner.run(&files).await;

            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&outcomes)?);
                }
                OutputFormat::Text => {
                    let color = std::io::stdout().is_terminal();
                    for outcome in &outcomes {
                        println!("{}", report::render_outcome(outcome, color));
                    }
                }
            }

            if outcomes.iter().all(|o| o.result().is_none()) {
                return Err(DetectorError::NoImagesAccepted);
            }
            let failures = outcomes.iter().filter(|o| o.is_failure()).count();
            if failures > 0 {
                return Err(DetectorError::SubmissionFailed(failures));
            }
        }

        Commands::Health => {
            let endpoint = config.resolve_endpoint(cli.endpoint.as_deref())?;
            let client = PredictClient::new(endpoint, config.timeout())?;
            let health = client.health().await?;
            println!("✔ {}: {}", client.endpoint(), health.status);
        }

        Commands::Config { set_endpoint, clear_endpoint, timeout, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(raw) = set_endpoint {
                config.set_endpoint(&raw)?;
                changed = true;
                println!("✔ エンドポイントを設定しました");
            }

            if clear_endpoint {
                config.endpoint = None;
                changed = true;
                println!("✔ エンドポイント設定を削除しました");
            }

            if let Some(seconds) = timeout {
                config.timeout_seconds = seconds;
                changed = true;
                println!("✔ タイムアウトを{}秒に設定しました", seconds);
            }

            if changed {
                config.save()?;
            }

            if show || !changed {
                let effective = config.resolve_endpoint(cli.endpoint.as_deref())?;
                println!("設定:");
                println!("  設定ファイル: {}", Config::config_path()?.display());
                println!("  エンドポイント: {}", config.endpoint.as_deref().unwrap_or("未設定"));
                println!("  使用するエンドポイント: {}", effective);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
            }
        }
    }

    Ok(())
}
