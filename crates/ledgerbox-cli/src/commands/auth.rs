//! Auth command - verify the configured API key.

use console::style;

use crate::client::LedgerBoxClient;

use super::config::load_config;

pub async fn run(config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let client = LedgerBoxClient::new(&config)?;

    client.test_auth().await?;

    println!(
        "{} API key accepted by {}",
        style("✓").green(),
        config.api.base_url
    );

    Ok(())
}
