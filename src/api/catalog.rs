//! Sections and tracks on top of a folder/object storage backend.

use crate::api::models::{folder_prefix, last_segment, Listing, StorageObject, Track};
use crate::error::ListingError;
use dioxus::logger::tracing::debug;
use futures_util::future::try_join_all;

/// Raw access to a hierarchical object store.
#[allow(async_fn_in_trait)]
pub trait StorageBackend {
    /// Lists one folder level, following pagination to the end.
    async fn list(&self, prefix: &str) -> Result<Listing, ListingError>;

    async fn download_url(&self, object: &StorageObject) -> Result<String, ListingError>;
}

#[allow(async_fn_in_trait)]
pub trait CatalogLister {
    async fn list_sections(&self) -> Result<Vec<String>, ListingError>;

    async fn list_tracks(&self, section: &str) -> Result<Vec<Track>, ListingError>;
}

/// Folders directly under `root` are sections, objects inside a section are tracks.
#[derive(Clone)]
pub struct StorageCatalog<B> {
    backend: B,
    root: String,
}

impl<B: StorageBackend> StorageCatalog<B> {
    pub fn new(backend: B, root: impl Into<String>) -> Self {
        Self {
            backend,
            root: root.into().trim_matches('/').to_string(),
        }
    }

    #[cfg(test)]
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: StorageBackend> CatalogLister for StorageCatalog<B> {
    async fn list_sections(&self) -> Result<Vec<String>, ListingError> {
        let listing = self.backend.list(&folder_prefix(&self.root, "")).await?;
        let sections = listing
            .prefixes
            .iter()
            .map(|prefix| last_segment(prefix).to_string())
            .filter(|name| !name.is_empty())
            .collect::<Vec<_>>();
        debug!(count = sections.len(), "listed sections");
        Ok(sections)
    }

    async fn list_tracks(&self, section: &str) -> Result<Vec<Track>, ListingError> {
        let section = section.trim().trim_matches('/');
        if section.is_empty() {
            return Err(ListingError::InvalidSection);
        }

        let listing = self.backend.list(&folder_prefix(&self.root, section)).await?;
        debug!(section, count = listing.items.len(), "resolving track urls");

        // One failed resolution fails the whole section.
        let tracks = try_join_all(listing.items.iter().map(|object| async move {
            let url = self.backend.download_url(object).await?;
            Ok::<_, ListingError>(Track::new(object.name(), url))
        }))
        .await?;

        Ok(tracks)
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;
    use std::cell::RefCell;
    use std::collections::{HashMap, HashSet};

    /// In-memory store keyed by folder prefix.
    #[derive(Default)]
    pub struct FakeStorage {
        pub folders: HashMap<String, Listing>,
        pub broken_objects: HashSet<String>,
        pub unreachable: bool,
        pub listed: RefCell<Vec<String>>,
    }

    impl FakeStorage {
        pub fn with_folder(mut self, prefix: &str, folders: &[&str], objects: &[&str]) -> Self {
            self.folders.insert(
                prefix.to_string(),
                Listing {
                    prefixes: folders.iter().map(|f| f.to_string()).collect(),
                    items: objects.iter().map(|o| StorageObject::new(*o)).collect(),
                },
            );
            self
        }

        pub fn breaking(mut self, full_path: &str) -> Self {
            self.broken_objects.insert(full_path.to_string());
            self
        }
    }

    impl StorageBackend for FakeStorage {
        async fn list(&self, prefix: &str) -> Result<Listing, ListingError> {
            self.listed.borrow_mut().push(prefix.to_string());
            if self.unreachable {
                return Err(ListingError::Transport("offline".to_string()));
            }
            Ok(self.folders.get(prefix).cloned().unwrap_or_default())
        }

        async fn download_url(&self, object: &StorageObject) -> Result<String, ListingError> {
            if self.broken_objects.contains(&object.full_path) {
                return Err(ListingError::NoDownloadUrl(object.full_path.clone()));
            }
            Ok(format!("https://cdn.test/{}?token=t", object.full_path))
        }
    }
}
