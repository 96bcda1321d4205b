use folio_config::FolioConfig;
use folio_core::responses::{ProjectListResponse, ProjectRow};
use folio_projects::{FilterOutcome, PlaceholderChange};
use folio_site::Portfolio;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ProjectsArgs;
use crate::output::output_rows;

/// Handle `folio projects`.
pub fn handle(args: &ProjectsArgs, config: FolioConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut portfolio = Portfolio::from_config(config)?;
    if args.all {
        let added = portfolio.load_more()?;
        tracing::debug!(added, "loaded additional projects");
    }

    let filter = portfolio.filter_mut();
    filter.set_category(&args.category);
    if let Some(term) = &args.search {
        filter.set_search_term(term);
    }
    let response = list_response(&filter.apply());
    output_rows(&response, &response.projects, flags.format)
}

fn list_response(outcome: &FilterOutcome) -> ProjectListResponse {
    let empty_message = match &outcome.placeholder {
        PlaceholderChange::Show(no_results) => Some(no_results.message.clone()),
        PlaceholderChange::Hide | PlaceholderChange::Unchanged => None,
    };
    ProjectListResponse {
        category: outcome.state.category.as_str().to_string(),
        search_term: outcome.state.search_term.clone(),
        count_text: outcome.count_text.clone(),
        search_info: outcome.search_info.as_ref().map(|info| info.message.clone()),
        empty_message,
        projects: outcome.visible.iter().map(ProjectRow::from).collect(),
    }
}
