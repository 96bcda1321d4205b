//! Ordered project records and the subscription feed.
//!
//! The store owns the records and keeps them sorted by `created_at`,
//! newest first. Every mutation publishes a fresh snapshot on a
//! `tokio::sync::watch` channel; anything that derives state from the list
//! (the filter, a page renderer) holds a [`ProjectFeed`] and rebuilds when
//! the feed reports an update.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use tokio::sync::watch;

use folio_core::entities::Project;

use crate::defaults;
use crate::error::StoreError;

/// Shared, immutable view of the store contents at one point in time.
pub type Snapshot = Arc<Vec<Project>>;

#[derive(Debug)]
pub struct ProjectStore {
    tx: watch::Sender<Snapshot>,
}

impl ProjectStore {
    /// Build a store from arbitrary records.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Invalid`] for a record with a blank id or title,
    /// and [`StoreError::DuplicateId`] when two records share an id.
    pub fn new(projects: Vec<Project>) -> Result<Self, StoreError> {
        validate(&[], &projects)?;
        Ok(Self::from_records(projects))
    }

    /// Store holding the built-in portfolio entries.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::from_records(defaults::builtin_projects())
    }

    /// Load records from a JSON array on disk.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] or [`StoreError::Parse`] when the file
    /// cannot be read or decoded, plus the validation errors of [`Self::new`].
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let path_str = path.display().to_string();
        let raw = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path_str.clone(),
            source,
        })?;
        let projects: Vec<Project> = serde_json::from_str(&raw).map_err(|source| {
            StoreError::Parse {
                path: path_str.clone(),
                source,
            }
        })?;
        tracing::debug!(path = %path_str, count = projects.len(), "loaded projects file");
        Self::new(projects)
    }

    fn from_records(mut projects: Vec<Project>) -> Self {
        sort_newest_first(&mut projects);
        let (tx, _rx) = watch::channel(Arc::new(projects));
        Self { tx }
    }

    /// Current contents, newest first.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Arc::clone(&self.tx.borrow())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tx.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tx.borrow().is_empty()
    }

    /// Append records, re-sort, and notify subscribers.
    ///
    /// # Errors
    ///
    /// Same validation as [`Self::new`], including ids that collide with
    /// records already in the store. Nothing is appended on error.
    pub fn extend(&mut self, more: Vec<Project>) -> Result<(), StoreError> {
        let current = self.snapshot();
        validate(&current, &more)?;

        let mut next = Vec::with_capacity(current.len() + more.len());
        next.extend(current.iter().cloned());
        next.extend(more);
        self.publish(next);
        Ok(())
    }

    /// Replace every record and notify subscribers.
    ///
    /// # Errors
    ///
    /// Same validation as [`Self::new`].
    pub fn replace(&mut self, projects: Vec<Project>) -> Result<(), StoreError> {
        validate(&[], &projects)?;
        self.publish(projects);
        Ok(())
    }

    /// Register a listener. The returned feed starts with the current
    /// contents marked as seen.
    #[must_use]
    pub fn subscribe(&self) -> ProjectFeed {
        ProjectFeed {
            rx: self.tx.subscribe(),
        }
    }

    fn publish(&self, mut projects: Vec<Project>) {
        sort_newest_first(&mut projects);
        let count = projects.len();
        self.tx.send_replace(Arc::new(projects));
        tracing::debug!(count, subscribers = self.tx.receiver_count(), "projects updated");
    }
}

/// Subscriber end of the store's update channel.
#[derive(Debug, Clone)]
pub struct ProjectFeed {
    rx: watch::Receiver<Snapshot>,
}

impl ProjectFeed {
    /// Latest published contents without marking them seen.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Arc::clone(&self.rx.borrow())
    }

    /// Return the new contents if the store published since the last call.
    pub fn take_update(&mut self) -> Option<Snapshot> {
        match self.rx.has_changed() {
            Ok(true) => Some(Arc::clone(&self.rx.borrow_and_update())),
            // A dropped store cannot publish again; keep the last snapshot.
            Ok(false) | Err(_) => None,
        }
    }

    /// Wait for the next update. Returns `None` once the store is dropped.
    pub async fn updated(&mut self) -> Option<Snapshot> {
        self.rx.changed().await.ok()?;
        Some(Arc::clone(&self.rx.borrow_and_update()))
    }
}

fn sort_newest_first(projects: &mut [Project]) {
    projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

fn validate(existing: &[Project], incoming: &[Project]) -> Result<(), StoreError> {
    let mut seen: HashSet<&str> = existing.iter().map(|p| p.id.as_str()).collect();
    for project in incoming {
        project.validate()?;
        if !seen.insert(project.id.as_str()) {
            return Err(StoreError::DuplicateId(project.id.clone()));
        }
    }
    Ok(())
}
