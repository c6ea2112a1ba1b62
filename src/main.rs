use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use voicedeals::voice::{ConsoleSynthesizer, RecognizerEvent, SpeechPlayback, StubRecognizer};
use voicedeals::{Catalog, Config, Deal, Notification, SearchCoordinator};

/// Voicedeals - voice-driven deal search
#[derive(Parser)]
#[command(name = "voicedeals", version, about)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, env = "VOICEDEALS_CONFIG")]
    config: Option<PathBuf>,

    /// Path to a JSON catalog file (overrides the config file)
    #[arg(long, env = "VOICEDEALS_CATALOG")]
    catalog: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search the catalog for matching deals
    Search {
        /// Query text; empty shows the whole catalog
        #[arg(default_value = "")]
        query: String,
    },
    /// List the loaded catalog
    Catalog,
    /// Speak a deal's description
    Describe {
        /// Deal identifier
        id: String,
    },
    /// Replay a scripted voice session through the search pipeline
    Listen {
        /// Transcript stages delivered in order, the way a continuous
        /// recognition engine refines its hypothesis
        #[arg(required = true)]
        stages: Vec<String>,

        /// Milliseconds between stages
        #[arg(long, default_value = "400")]
        interval: u64,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn,voicedeals=info",
        1 => "info,voicedeals=debug",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("fatal: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    let catalog_path = cli.catalog.or_else(|| config.catalog_path.clone());
    let catalog = Arc::new(match catalog_path {
        Some(path) => Catalog::from_json_file(&path)?,
        None => Catalog::sample(),
    });

    let playback = SpeechPlayback::with_voice(
        ConsoleSynthesizer,
        config.voice.locale.clone(),
        config.voice.rate,
    );
    let recognizer = if config.voice.enabled {
        StubRecognizer::supported()
    } else {
        StubRecognizer::unsupported()
    };

    let mut coordinator = SearchCoordinator::new(Arc::clone(&catalog), recognizer, playback);
    coordinator.on_notification(|notification| match notification {
        Notification::VoiceUnsupported => {
            println!("Speech recognition is not available on this host.");
        }
        Notification::ListeningStarted => println!("Listening... say what you're looking for."),
        Notification::ListeningStopped => println!("Stopped listening."),
        Notification::RecognitionError(reason) => println!("Recognition failed: {reason}"),
    });

    match cli.command {
        Command::Search { query } => {
            coordinator.set_query(&query);
            render_results(&coordinator);
        }
        Command::Catalog => {
            for deal in catalog.deals() {
                print_deal(deal);
            }
        }
        Command::Describe { id } => {
            let deal = catalog
                .get(&id)
                .ok_or_else(|| anyhow::anyhow!("no deal with id {id}"))?;
            let sentence = coordinator.describe(deal);
            println!("{sentence}");
        }
        Command::Listen { stages, interval } => {
            listen(&mut coordinator, stages, interval).await?;
        }
    }

    Ok(())
}

/// Drive a scripted capture session through the coordinator
///
/// Each stage is delivered as the engine's refined transcript for the live
/// utterance, paced like a real continuous recognition backend.
async fn listen(
    coordinator: &mut SearchCoordinator<StubRecognizer, ConsoleSynthesizer>,
    stages: Vec<String>,
    interval: u64,
) -> anyhow::Result<()> {
    let Some(handle) = coordinator.toggle_voice() else {
        anyhow::bail!("voice capture unavailable");
    };

    let mut ticker = tokio::time::interval(Duration::from_millis(interval));
    for stage in stages {
        ticker.tick().await;
        coordinator.handle_recognizer_event(handle, RecognizerEvent::Fragments(vec![stage]));
        println!("heard: {}", coordinator.transcript());
    }

    coordinator.toggle_voice();
    render_results(coordinator);
    Ok(())
}

fn render_results(coordinator: &SearchCoordinator<StubRecognizer, ConsoleSynthesizer>) {
    let query = coordinator.query();
    if query.is_empty() {
        println!("Hot deals today:");
    } else {
        println!("Results for \"{query}\":");
    }

    let results = coordinator.results();
    if results.is_empty() {
        println!("No deals found. Try a different search!");
        return;
    }

    for deal in results {
        print_deal(deal);
    }
}

fn print_deal(deal: &Deal) {
    let tag = if deal.featured { "  [hot]" } else { "" };
    println!(
        "{:>3}  {} ({})  Rs.{} -> Rs.{}  {}% off  [{}]{}",
        deal.id,
        deal.title,
        deal.brand,
        deal.original_price,
        deal.discounted_price,
        deal.discount,
        deal.platform,
        tag
    );
}
