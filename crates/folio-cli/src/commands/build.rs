use std::path::PathBuf;

use folio_config::FolioConfig;
use folio_core::responses::BuildResponse;
use folio_site::Portfolio;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::BuildArgs;
use crate::output::output;

/// Handle `folio build`.
pub fn handle(args: &BuildArgs, config: FolioConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let out_dir = PathBuf::from(
        args.out
            .clone()
            .unwrap_or_else(|| config.site.output_dir.clone()),
    );

    let mut portfolio = Portfolio::from_config(config)?;
    if args.all {
        portfolio.load_more()?;
    }
    let (path, bytes) = portfolio.write_site(&out_dir)?;

    output(
        &BuildResponse {
            path: path.display().to_string(),
            projects: portfolio.store().len(),
            bytes,
            theme: portfolio.theme(),
        },
        flags.format,
    )
}
