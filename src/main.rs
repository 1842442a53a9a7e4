use anyhow::Result;
use moodchat::{
    config::{get_config, initialize_config},
    logging::init_logging,
    ui::run_ui,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    initialize_config()?;

    let config = get_config();
    let _logger = init_logging(&config.log_level)?;
    log::info!("moodchat starting, endpoint {}", config.api_url);

    run_ui().await
}
