//! Category and free-text filtering over the project store.
//!
//! [`ProjectFilter`] owns a [`FilterState`] and recomputes the visible
//! subset in full on every change. Results come back as a
//! [`FilterOutcome`] and can be pushed into any [`FilterView`]; the filter
//! never touches markup itself.

use std::time::Duration;

use serde::Serialize;

use folio_core::entities::Project;
use folio_core::enums::CategoryFilter;

use crate::store::{ProjectFeed, Snapshot};

/// Delay before the first card of a result set is revealed.
pub const REVEAL_BASE: Duration = Duration::from_millis(200);
/// Added per card so results cascade in.
pub const REVEAL_STEP: Duration = Duration::from_millis(100);

const NO_PROJECTS: &str = "No projects available";

/// Current filter inputs. Not persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    pub category: CategoryFilter,
    /// Trimmed, lower-cased search term. Empty means no text filter.
    pub search_term: String,
}

impl FilterState {
    /// Whether any predicate narrows the list.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.category.is_all() || !self.search_term.is_empty()
    }
}

/// Contents of the "no results" placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoResults {
    pub category: CategoryFilter,
    pub search_term: String,
    pub message: String,
}

/// What the view must do with the placeholder after an apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceholderChange {
    Show(NoResults),
    Hide,
    Unchanged,
}

/// Search feedback line shown under the search box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchInfo {
    pub message: String,
    /// True when the term matched nothing; views style this differently.
    pub empty: bool,
}

/// Result of one [`ProjectFilter::apply`].
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    /// Monotonic apply counter. Reveals scheduled for an older generation
    /// must be dropped.
    pub generation: u64,
    pub state: FilterState,
    /// Matching projects in store order.
    pub visible: Vec<Project>,
    pub total: usize,
    pub placeholder: PlaceholderChange,
    pub count_text: String,
    pub search_info: Option<SearchInfo>,
    /// Reveal delay for each entry of `visible`, same order.
    pub reveal: Vec<Duration>,
}

impl FilterOutcome {
    #[must_use]
    pub fn visible_ids(&self) -> Vec<&str> {
        self.visible.iter().map(|p| p.id.as_str()).collect()
    }
}

/// Display surface for filter results.
pub trait FilterView {
    /// Replace the grid contents. `reveal[i]` is when `visible[i]` should
    /// animate in.
    fn show_projects(&mut self, generation: u64, visible: &[Project], reveal: &[Duration]);
    fn show_placeholder(&mut self, no_results: &NoResults);
    fn hide_placeholder(&mut self);
    fn set_count(&mut self, text: &str);
    /// `None` hides the search feedback line.
    fn set_search_info(&mut self, info: Option<&SearchInfo>);
}

/// Category + search filter bound to a store feed.
#[derive(Debug)]
pub struct ProjectFilter {
    feed: ProjectFeed,
    projects: Snapshot,
    /// Lowercased search haystack per project, parallel to `projects`.
    index: Vec<String>,
    state: FilterState,
    generation: u64,
    placeholder_visible: bool,
}

impl ProjectFilter {
    #[must_use]
    pub fn new(feed: ProjectFeed) -> Self {
        let projects = feed.snapshot();
        let index = build_index(&projects);
        Self {
            feed,
            projects,
            index,
            state: FilterState::default(),
            generation: 0,
            placeholder_visible: false,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &FilterState {
        &self.state
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether `generation` is still the latest apply.
    #[must_use]
    pub const fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Select a category from a raw selector value. Unknown values select all.
    pub fn set_category(&mut self, raw: &str) {
        let category = CategoryFilter::parse_lenient(raw);
        if category.is_all() && !raw.trim().eq_ignore_ascii_case("all") {
            tracing::debug!(value = raw, "unknown category selector; showing all");
        }
        self.state.category = category;
    }

    pub fn set_category_filter(&mut self, category: CategoryFilter) {
        self.state.category = category;
    }

    /// Set the free-text term. Trimmed and lower-cased; blank clears it.
    pub fn set_search_term(&mut self, term: &str) {
        self.state.search_term = term.trim().to_lowercase();
    }

    pub fn clear_search(&mut self) {
        self.state.search_term.clear();
    }

    /// Reset both the term and the category.
    pub fn clear_filters(&mut self) {
        self.state = FilterState::default();
    }

    /// Recompute the visible subset from the current state.
    pub fn apply(&mut self) -> FilterOutcome {
        if let Some(snapshot) = self.feed.take_update() {
            self.index = build_index(&snapshot);
            self.projects = snapshot;
        }

        let term = self.state.search_term.as_str();
        let visible: Vec<Project> = self
            .projects
            .iter()
            .zip(&self.index)
            .filter(|(project, haystack)| {
                self.state.category.matches(project.category) && haystack.contains(term)
            })
            .map(|(project, _)| project.clone())
            .collect();

        self.generation += 1;
        let total = self.projects.len();

        let placeholder = if visible.is_empty() {
            self.placeholder_visible = true;
            PlaceholderChange::Show(self.no_results())
        } else if self.placeholder_visible {
            self.placeholder_visible = false;
            PlaceholderChange::Hide
        } else {
            PlaceholderChange::Unchanged
        };

        let reveal = reveal_schedule(visible.len());
        let count_text = count_text(&self.state, visible.len(), total);
        let search_info = search_info(&self.state.search_term, visible.len());

        tracing::debug!(
            generation = self.generation,
            category = %self.state.category,
            term = %self.state.search_term,
            visible = visible.len(),
            total,
            "filter applied"
        );

        FilterOutcome {
            generation: self.generation,
            state: self.state.clone(),
            visible,
            total,
            placeholder,
            count_text,
            search_info,
            reveal,
        }
    }

    /// Apply and push the result into `view`.
    pub fn render_into(&mut self, view: &mut dyn FilterView) -> FilterOutcome {
        let outcome = self.apply();
        match &outcome.placeholder {
            PlaceholderChange::Show(no_results) => view.show_placeholder(no_results),
            PlaceholderChange::Hide => view.hide_placeholder(),
            PlaceholderChange::Unchanged => {}
        }
        view.show_projects(outcome.generation, &outcome.visible, &outcome.reveal);
        view.set_count(&outcome.count_text);
        view.set_search_info(outcome.search_info.as_ref());
        outcome
    }

    fn no_results(&self) -> NoResults {
        let message = if !self.state.search_term.is_empty() {
            format!("No projects found matching \"{}\"", self.state.search_term)
        } else if self.state.category.is_all() {
            NO_PROJECTS.to_string()
        } else {
            format!("No projects found in \"{}\" category", self.state.category)
        };
        NoResults {
            category: self.state.category,
            search_term: self.state.search_term.clone(),
            message,
        }
    }
}

fn build_index(projects: &[Project]) -> Vec<String> {
    projects.iter().map(Project::search_text).collect()
}

/// Reveal delays for `count` cards: base delay plus one step per position.
#[must_use]
pub fn reveal_schedule(count: usize) -> Vec<Duration> {
    (0..count)
        .map(|i| REVEAL_BASE + REVEAL_STEP * u32::try_from(i).unwrap_or(u32::MAX))
        .collect()
}

fn plural(total: usize) -> &'static str {
    if total == 1 { "" } else { "s" }
}

fn count_text(state: &FilterState, shown: usize, total: usize) -> String {
    if state.is_active() {
        format!("Showing {shown} of {total} project{}", plural(total))
    } else {
        format!("{total} project{} total", plural(total))
    }
}

fn search_info(term: &str, count: usize) -> Option<SearchInfo> {
    if term.is_empty() {
        return None;
    }
    let message = match count {
        0 => format!("No projects found for \"{term}\""),
        1 => format!("Found 1 project matching \"{term}\""),
        n => format!("Found {n} projects matching \"{term}\""),
    };
    Some(SearchInfo {
        message,
        empty: count == 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ProjectStore;
    use folio_core::enums::Category;
    use pretty_assertions::assert_eq;

    fn filter() -> ProjectFilter {
        ProjectFilter::new(ProjectStore::with_defaults().subscribe())
    }

    #[test]
    fn search_term_is_normalized() {
        let mut filter = filter();
        filter.set_search_term("  WeaTHer ");
        assert_eq!(filter.state().search_term, "weather");
        filter.set_search_term("   ");
        assert!(filter.state().search_term.is_empty());
    }

    #[test]
    fn unknown_category_selects_all() {
        let mut filter = filter();
        filter.set_category("mobile");
        assert_eq!(filter.state().category, CategoryFilter::Only(Category::Mobile));
        filter.set_category("games");
        assert_eq!(filter.state().category, CategoryFilter::All);
    }

    #[test]
    fn count_text_reflects_filter_activity() {
        let mut filter = filter();
        assert_eq!(filter.apply().count_text, "3 projects total");
        filter.set_category("mobile");
        assert_eq!(filter.apply().count_text, "Showing 1 of 3 projects");
    }

    #[test]
    fn count_text_singular() {
        let state = FilterState::default();
        assert_eq!(count_text(&state, 1, 1), "1 project total");
    }

    #[test]
    fn search_info_messages() {
        assert_eq!(search_info("", 3), None);
        assert_eq!(
            search_info("css", 1).unwrap().message,
            "Found 1 project matching \"css\""
        );
        assert_eq!(
            search_info("css", 3).unwrap().message,
            "Found 3 projects matching \"css\""
        );
        let none = search_info("rust", 0).unwrap();
        assert_eq!(none.message, "No projects found for \"rust\"");
        assert!(none.empty);
    }

    #[test]
    fn reveal_schedule_staggers() {
        assert_eq!(
            reveal_schedule(3),
            [
                Duration::from_millis(200),
                Duration::from_millis(300),
                Duration::from_millis(400)
            ]
        );
        assert!(reveal_schedule(0).is_empty());
    }

    #[test]
    fn generation_increments_per_apply() {
        let mut filter = filter();
        let first = filter.apply().generation;
        let second = filter.apply().generation;
        assert_eq!(second, first + 1);
        assert!(!filter.is_current(first));
        assert!(filter.is_current(second));
    }
}
