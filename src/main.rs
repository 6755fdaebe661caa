use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tripsmith::delivery::PlanMailer;
use tripsmith::render::render_text;
use tripsmith::{plan, SourceAggregator, TripRequest, TripSmithConfig, VERSION};

#[tokio::main]
async fn main() -> Result<()> {
    let config = TripSmithConfig::load()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tripsmith={}", config.logging.level)));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(version = VERSION, "tripsmith starting");

    let mut args = std::env::args().skip(1);
    let request_path: PathBuf = args
        .next()
        .map(PathBuf::from)
        .context("Usage: tripsmith <request.json> [output.txt]")?;
    let output_path = args.next().map(PathBuf::from);

    let request_json = std::fs::read_to_string(&request_path)
        .with_context(|| format!("Failed to read request file {}", request_path.display()))?;
    let request: TripRequest = serde_json::from_str(&request_json)
        .with_context(|| format!("Failed to parse request file {}", request_path.display()))?;

    let aggregator = SourceAggregator::new(config.providers.clone())?;
    let outcome = match plan(&request, &aggregator, None).await {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("{}", e.user_message());
            return Err(e.into());
        }
    };

    let text = render_text(&outcome.document);
    match &output_path {
        Some(path) => {
            std::fs::write(path, &text)
                .with_context(|| format!("Failed to write plan to {}", path.display()))?;
            info!(path = %path.display(), "plan written");
        }
        None => println!("{text}"),
    }

    // Delivery is opt-in twice over: credentials in config, address in request
    if let Some(recipient) = &request.email {
        if config.delivery_configured() {
            let mailer = PlanMailer::new(&config.email)?;
            if let Err(e) = mailer.send_plan(recipient, &request.destination, &text) {
                warn!(error = %e, "plan delivery failed; the plan above is still valid");
            }
        } else {
            info!("request carries an email address but delivery is not configured");
        }
    }

    Ok(())
}
