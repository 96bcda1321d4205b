use folio_config::{FolioConfig, PreferenceStore};
use folio_core::enums::Theme;
use folio_core::responses::ThemeResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ThemeCommands;
use crate::output::output;

/// Handle `folio theme`. No action shows the stored theme.
pub fn handle(
    action: Option<&ThemeCommands>,
    config: &FolioConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let prefs = PreferenceStore::new(config.site.prefs_path());
    let response = apply(action, &prefs)?;
    output(&response, flags.format)
}

fn apply(action: Option<&ThemeCommands>, prefs: &PreferenceStore) -> anyhow::Result<ThemeResponse> {
    let before = prefs.theme();
    let theme = match action {
        None | Some(ThemeCommands::Show) => before,
        Some(ThemeCommands::Toggle) => prefs.toggle_theme()?,
        Some(ThemeCommands::Set { theme }) => {
            let theme = Theme::from(*theme);
            prefs.set_theme(theme)?;
            theme
        }
    };
    tracing::debug!(path = %prefs.path().display(), theme = %theme, "theme preference");
    Ok(ThemeResponse {
        theme,
        changed: theme != before,
    })
}
