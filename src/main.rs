use anyhow::Result;
use tracing_subscriber::EnvFilter;

use tripwise::config::AppConfig;
use tripwise::llm::ModelClient;
use tripwise::planner::TripPlanner;
use tripwise::web;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let AppConfig { port, model } = AppConfig::from_env()?;
    let planner = TripPlanner::new(ModelClient::new(model));

    web::run(planner, port).await
}
