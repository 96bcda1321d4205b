use folio_config::FolioConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: FolioConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Projects(args) => commands::projects::handle(&args, config, flags),
        Commands::Build(args) => commands::build::handle(&args, config, flags),
        Commands::Chat(args) => commands::chat::handle(&args, config, flags).await,
        Commands::Typing(args) => commands::typing::handle(&args, &config, flags).await,
        Commands::Theme { action } => commands::theme::handle(action.as_ref(), &config, flags),
        Commands::Contact(_) | Commands::Schema(_) => {
            unreachable!("contact/schema are pre-dispatched in main")
        }
    }
}
