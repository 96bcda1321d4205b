use anyhow::Context;

use folio_config::FolioConfig;

/// Load `.env` from the working directory (if any), then the layered config.
pub fn load_config() -> anyhow::Result<FolioConfig> {
    load_dotenv()?;
    let config = FolioConfig::load().context("failed to load folio configuration")?;
    if !config.chat.is_configured() {
        tracing::debug!("chat fallback has no API token; unmatched questions get the apology");
    }
    Ok(config)
}

fn load_dotenv() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let env_path = cwd.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}
