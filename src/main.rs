use clap::{Parser, Subcommand};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber;

use flyover_bot::application::services::{FlyOverService, Responder};
use flyover_bot::infrastructure::adapters::twitter::TwitterAdapter;
use flyover_bot::infrastructure::config::Config;
use flyover_bot::infrastructure::lookup::{Geocoder, PassPredictor, TimeLocalizer};

#[derive(Parser)]
#[command(name = "flyover-bot")]
#[command(about = "Replies to mentions with the next ISS pass over a location", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot
    Run,
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run => {
            run_bot(cli.config).await;
        }
        Commands::Version => {
            println!("flyover-bot v{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::InitConfig => {
            init_config();
        }
    }
}

async fn run_bot(config_path: String) {
    // Load config, fall back to defaults, then let the environment win
    let mut config = match Config::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Could not load {}: {}. Using defaults and environment.", config_path, e);
            Config::default()
        }
    };
    config.apply_env();

    let (access_token, geocode_key, timezone_key) = match config.required_keys() {
        Ok(keys) => keys,
        Err(e) => {
            tracing::error!("Incomplete configuration: {}", e);
            std::process::exit(1);
        }
    };

    let client = reqwest::Client::new();

    let service = FlyOverService::new(
        Geocoder::new(client.clone(), &config.lookups.geocode_base_url, geocode_key),
        PassPredictor::new(client.clone(), &config.lookups.pass_base_url),
        TimeLocalizer::new(client.clone(), &config.lookups.timezone_base_url, timezone_key),
    );

    let adapter = Arc::new(TwitterAdapter::new(
        client,
        &config.twitter.base_url,
        access_token,
        &config.twitter.handle,
    ));
    let responder = Arc::new(Responder::new(service, adapter.clone()));

    tracing::info!("Tracking mentions of @{}", adapter.handle());

    let mut since_id = 0u64;
    loop {
        match adapter.poll_mentions(since_id).await {
            Ok(mentions) => {
                since_id = TwitterAdapter::next_since_id(&mentions, since_id);
                for mention in mentions {
                    // One independent task per mention; pipelines overlap
                    // freely and replies may post out of arrival order.
                    let responder = responder.clone();
                    tokio::spawn(async move {
                        responder.handle_mention(mention).await;
                    });
                }
            }
            Err(e) => {
                // Polling hiccups never take the bot down
                tracing::warn!("mention poll failed: {}", e);
            }
        }

        tokio::time::sleep(Duration::from_secs(config.twitter.poll_interval_seconds)).await;
    }
}

fn init_config() {
    let config = Config::default();
    match serde_yaml::to_string(&config) {
        Ok(yaml) => {
            if let Err(e) = std::fs::write("config.yaml", yaml) {
                eprintln!("Failed to write config.yaml: {}", e);
                std::process::exit(1);
            }
            println!("Wrote default config to config.yaml");
        }
        Err(e) => {
            eprintln!("Failed to serialize default config: {}", e);
            std::process::exit(1);
        }
    }
}
