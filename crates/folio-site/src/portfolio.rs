//! Composition root for the site.
//!
//! [`Portfolio`] is built once from its parts and owns them for the life
//! of the page: the project store, the filter subscribed to it, the chat
//! widget, and the preference store holding the theme flag.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use folio_chat::{ChatWidget, CompletionClient, HostedCompletionClient};
use folio_config::{FolioConfig, PreferenceStore};
use folio_core::enums::Theme;
use folio_projects::defaults::additional_projects;
use folio_projects::{FilterOutcome, ProjectFilter, ProjectStore};
use folio_typing::TypingEffect;

use crate::error::SiteError;
use crate::page::{PageContext, render_document};

#[derive(Debug)]
pub struct Portfolio<C> {
    config: FolioConfig,
    store: ProjectStore,
    filter: ProjectFilter,
    chat: ChatWidget<C>,
    prefs: PreferenceStore,
    theme: Theme,
}

impl Portfolio<HostedCompletionClient> {
    /// Assemble a portfolio from configuration: projects from
    /// `site.projects_file` (or the built-in list), the hosted chat client,
    /// and the preference file at `site.prefs_path`.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError`] if the projects file cannot be loaded or the
    /// HTTP client cannot be built.
    pub fn from_config(config: FolioConfig) -> Result<Self, SiteError> {
        let store = match config.site.projects_file() {
            Some(path) => ProjectStore::load(&path)?,
            None => ProjectStore::with_defaults(),
        };
        let client = HostedCompletionClient::new(config.chat.clone())?;
        let prefs = PreferenceStore::new(config.site.prefs_path());
        Ok(Self::new(config, store, client, prefs))
    }
}

impl<C: CompletionClient> Portfolio<C> {
    /// Wire the parts together. The stored theme is read once here.
    pub fn new(config: FolioConfig, store: ProjectStore, client: C, prefs: PreferenceStore) -> Self {
        let filter = ProjectFilter::new(store.subscribe());
        let mut chat = ChatWidget::new(config.owner.clone(), client);
        chat.open();
        let theme = prefs.theme();
        tracing::debug!(projects = store.len(), theme = %theme.as_str(), "portfolio assembled");
        Self {
            config,
            store,
            filter,
            chat,
            prefs,
            theme,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &FolioConfig {
        &self.config
    }

    #[must_use]
    pub const fn store(&self) -> &ProjectStore {
        &self.store
    }

    pub const fn filter_mut(&mut self) -> &mut ProjectFilter {
        &mut self.filter
    }

    #[must_use]
    pub const fn chat(&self) -> &ChatWidget<C> {
        &self.chat
    }

    pub const fn chat_mut(&mut self) -> &mut ChatWidget<C> {
        &mut self.chat
    }

    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip the theme and persist it.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Prefs`] if the preference file cannot be written.
    pub fn toggle_theme(&mut self) -> Result<Theme, SiteError> {
        self.set_theme(self.theme.toggled())?;
        Ok(self.theme)
    }

    /// # Errors
    ///
    /// Returns [`SiteError::Prefs`] if the preference file cannot be written.
    pub fn set_theme(&mut self, theme: Theme) -> Result<(), SiteError> {
        self.prefs.set_theme(theme)?;
        self.theme = theme;
        Ok(())
    }

    /// Append the "load more" projects not already present. Returns how
    /// many were added.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Store`] if the new records fail validation.
    pub fn load_more(&mut self) -> Result<usize, SiteError> {
        let existing: HashSet<String> = self.store.snapshot().iter().map(|p| p.id.clone()).collect();
        let fresh: Vec<_> = additional_projects()
            .into_iter()
            .filter(|p| !existing.contains(&p.id))
            .collect();
        let added = fresh.len();
        if added > 0 {
            self.store.extend(fresh)?;
        }
        Ok(added)
    }

    /// Hero typing effect from the `[typing]` section.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Typing`] when no texts are configured.
    pub fn typing_effect(&self) -> Result<TypingEffect, SiteError> {
        Ok(TypingEffect::from_config(&self.config.typing)?)
    }

    /// Apply the current filter and render the full document.
    pub fn render(&mut self) -> String {
        let outcome = self.filter.apply();
        self.render_with(&outcome)
    }

    /// Render the document around an existing filter result.
    #[must_use]
    pub fn render_with(&self, outcome: &FilterOutcome) -> String {
        let ctx = PageContext {
            config: &self.config,
            theme: self.theme,
            filter: outcome,
            transcript: self.chat.log().iter().collect(),
        };
        render_document(&ctx)
    }

    /// Render and write `index.html` into `out_dir`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Io`] if the directory or file cannot be written.
    pub fn write_site(&mut self, out_dir: &Path) -> Result<(PathBuf, usize), SiteError> {
        let html = self.render();
        std::fs::create_dir_all(out_dir).map_err(|source| SiteError::Io {
            path: out_dir.display().to_string(),
            source,
        })?;
        let path = out_dir.join("index.html");
        std::fs::write(&path, &html).map_err(|source| SiteError::Io {
            path: path.display().to_string(),
            source,
        })?;
        tracing::info!(path = %path.display(), bytes = html.len(), "site written");
        Ok((path, html.len()))
    }
}
