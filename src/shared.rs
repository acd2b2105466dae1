use crate::entry::{Emotion, Entry, EntryId};
use crate::error::{DiaryError, SeedError};
use crate::event::Action;
use crate::seed::{SeedLoader, SeedSource};
use crate::store::EntryStore;
use crate::view::Analytics;
use std::sync::{Arc, Mutex};

/// A cloneable, thread-safe handle to one [`EntryStore`].
///
/// Every call takes the lock for the duration of a single action, so the
/// collection and its identity counter always see one writer at a time.
/// A poisoned lock is reported as [`DiaryError::Poisoned`].
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    inner: Arc<Mutex<EntryStore>>,
}

impl SharedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_store(store: EntryStore) -> Self {
        SharedStore {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Run `f` with exclusive access to the store.
    pub fn with<T>(&self, f: impl FnOnce(&mut EntryStore) -> T) -> Result<T, DiaryError> {
        let mut store = self.inner.lock().map_err(|_| DiaryError::Poisoned)?;
        Ok(f(&mut store))
    }

    pub fn dispatch(&self, action: Action) -> Result<(), DiaryError> {
        self.with(|store| {
            store.dispatch(action);
        })
    }

    pub fn create(
        &self,
        author: impl Into<String>,
        content: impl Into<String>,
        emotion: Emotion,
    ) -> Result<EntryId, DiaryError> {
        self.with(|store| store.create(author, content, emotion))
    }

    pub fn remove(&self, id: EntryId) -> Result<(), DiaryError> {
        self.with(|store| store.remove(id))
    }

    pub fn edit(&self, id: EntryId, new_content: impl Into<String>) -> Result<(), DiaryError> {
        self.with(|store| store.edit(id, new_content))
    }

    /// A copy of the live entries, newest first.
    pub fn entries(&self) -> Result<Vec<Entry>, DiaryError> {
        self.with(|store| store.entries().to_vec())
    }

    pub fn analytics(&self) -> Result<Analytics, DiaryError> {
        self.with(|store| *store.analytics())
    }

    /// Fetch seed records without holding the lock, then install them.
    ///
    /// # Errors
    ///
    /// Returns the fetch error, leaving the store untouched, or
    /// [`SeedError::Store`] if the lock was poisoned.
    pub async fn seed<S: SeedSource>(
        &self,
        loader: &mut SeedLoader,
        source: &S,
    ) -> Result<usize, SeedError> {
        let records = loader.fetch(source).await?;
        Ok(self.with(|store| loader.install(store, records))?)
    }
}
