use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ai_plan_diagnosis::{
    build_recommender,
    config::{Config, LogFormat, RecommenderKind},
    presentation::TerminalQuiz,
    quiz::builtin_questions,
    Catalog, QuizController,
};

/// Ten-question AI tool plan diagnosis
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Recommendation strategy (generative | rule_based); overrides RECOMMENDER
    #[arg(long, short)]
    recommender: Option<RecommenderKind>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = match Config::from_env_with(args.recommender) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    init_logging(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        recommender = %config.recommender,
        "AI plan diagnosis starting..."
    );

    let recommender = match build_recommender(&config) {
        Ok(r) => r,
        Err(e) => {
            error!(error = %e, "Failed to initialize recommender");
            return Err(e.into());
        }
    };

    let catalog = Arc::new(Catalog::builtin());
    let controller = QuizController::new(builtin_questions());
    let mut session = TerminalQuiz::new(controller, recommender, catalog);

    if let Err(e) = session.run().await {
        error!(error = %e, "Quiz session error");
        return Err(e.into());
    }

    info!("Session finished");
    Ok(())
}

/// Initialize tracing/logging
fn init_logging(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
