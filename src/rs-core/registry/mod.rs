mod catalog;

/// A single playable media, as rendered by one of the carousel's players.
///
/// Items have no persistent identifier: they are identified by their index in their
/// `Collection`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct MediaItem {
    pub url: String,
    pub title: String,
    pub description: String,
}

impl MediaItem {
    pub(crate) fn new(url: String, title: String, description: String) -> Self {
        Self {
            url,
            title,
            description,
        }
    }
}

/// A named, ordered group of `MediaItem`, e.g. the body of work done for one client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Collection {
    id: String,
    name: String,
    description: String,
    items: Vec<MediaItem>,
}

impl Collection {
    pub(crate) fn new(id: String, name: String, description: String) -> Self {
        Self {
            id,
            name,
            description,
            items: vec![],
        }
    }

    pub(crate) fn with_items(mut self, items: Vec<MediaItem>) -> Self {
        self.items = items;
        self
    }

    #[inline(always)]
    pub(crate) fn id(&self) -> &str {
        &self.id
    }

    #[inline(always)]
    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    #[inline(always)]
    pub(crate) fn description(&self) -> &str {
        &self.description
    }

    #[inline(always)]
    pub(crate) fn items(&self) -> &[MediaItem] {
        &self.items
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    #[inline(always)]
    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn item(&self, index: usize) -> Option<&MediaItem> {
        self.items.get(index)
    }
}

/// Every `Collection` which can be displayed by the carousel, in registration order.
#[derive(Debug, Default)]
pub(crate) struct Registry {
    collections: Vec<Collection>,
}

impl Registry {
    /// Create a new empty `Registry`.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Create a new `Registry` already containing the site's catalog of collections.
    pub(crate) fn with_builtin_catalog() -> Self {
        Self {
            collections: catalog::builtin_collections(),
        }
    }

    /// Add a new `Collection` to this `Registry`.
    ///
    /// Fails if a `Collection` with the same id was already registered, in which case
    /// the `Registry` is left untouched.
    pub(crate) fn register(&mut self, collection: Collection) -> Result<(), RegistryError> {
        if self.collections.iter().any(|c| c.id == collection.id) {
            return Err(RegistryError::DuplicateCollection(collection.id));
        }
        self.collections.push(collection);
        Ok(())
    }

    /// Append a `MediaItem` at the end of the `Collection` with the given id.
    ///
    /// Note that a carousel currently displaying that `Collection` keeps displaying the
    /// items it had when it was selected.
    pub(crate) fn add_item(
        &mut self,
        collection_id: &str,
        item: MediaItem,
    ) -> Result<(), RegistryError> {
        match self.collections.iter_mut().find(|c| c.id == collection_id) {
            Some(collection) => {
                collection.items.push(item);
                Ok(())
            }
            None => Err(RegistryError::UnknownCollection(collection_id.to_owned())),
        }
    }

    /// Returns the `Collection` with the given id.
    pub(crate) fn get(&self, collection_id: &str) -> Result<&Collection, RegistryError> {
        self.collections
            .iter()
            .find(|c| c.id == collection_id)
            .ok_or_else(|| RegistryError::UnknownCollection(collection_id.to_owned()))
    }

    pub(crate) fn collections(&self) -> &[Collection] {
        &self.collections
    }
}

use thiserror::Error;

/// Error that may be returned when looking up or updating the `Registry`.
#[derive(Error, Debug, PartialEq, Eq)]
pub(crate) enum RegistryError {
    #[error("No collection with the id \"{0}\" is registered.")]
    UnknownCollection(String),
    #[error("A collection with the id \"{0}\" is already registered.")]
    DuplicateCollection(String),
}
