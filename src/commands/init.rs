use clap::Args;
use crate::core::config::{Credentials, StoredConfig};
use crate::core::error::{Result, TubeStatsError};
use crate::core::print_success;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// TfL application ID
    #[arg(long)]
    pub app_id: String,

    /// TfL application key
    #[arg(long)]
    pub api_key: String,
}

/// Save TfL credentials to the config file so later runs need no environment variables
pub fn execute_init(args: InitArgs) -> Result<()> {
    let app_id = args.app_id.trim();
    let app_key = args.api_key.trim();

    if app_id.is_empty() || app_key.is_empty() {
        return Err(TubeStatsError::MissingCredentials);
    }

    let config = StoredConfig::new(Credentials::new(app_id, app_key));
    let path = config.save()?;

    print_success(&format!("Saved TfL credentials to {}", path.display()));
    Ok(())
}
