//! One-shot seeding of the store from an external record source.
//!
//! A seed source yields raw `{sender, body}` records. The loader keeps the
//! first `batch_size` of them, numbers them from the store's own identity
//! counter, gives each a random mood, and installs the batch with a single
//! INIT. A failed fetch is reported once and leaves the store untouched.

use crate::config::SeedConfig;
use crate::entry::{Emotion, Entry, EntryId};
use crate::error::SeedError;
use crate::event::now_millis;
use crate::store::EntryStore;
use rand::distributions::Standard;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// A record as delivered by the seed source.
///
/// Only the sender and body are used. Sources that name the sender `email`
/// are accepted as is; any other fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(alias = "email")]
    pub sender: String,
    pub body: String,
}

impl RawRecord {
    pub fn new(sender: impl Into<String>, body: impl Into<String>) -> Self {
        RawRecord {
            sender: sender.into(),
            body: body.into(),
        }
    }
}

/// Something that can produce the seed records once.
pub trait SeedSource {
    fn fetch(&self) -> impl Future<Output = Result<Vec<RawRecord>, SeedError>> + Send;
}

/// Fetches seed records as a JSON array over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSeedSource {
    client: Client,
    url: String,
}

impl HttpSeedSource {
    pub fn new(url: impl Into<String>) -> Self {
        HttpSeedSource {
            client: Client::new(),
            url: url.into(),
        }
    }

    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        HttpSeedSource {
            client,
            url: url.into(),
        }
    }

    /// Build a source for `config.url` with the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &SeedConfig) -> Result<Self, SeedError> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(HttpSeedSource {
            client,
            url: config.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl SeedSource for HttpSeedSource {
    async fn fetch(&self) -> Result<Vec<RawRecord>, SeedError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SeedError::Status(status));
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// A fixed set of records, for offline use and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSeedSource {
    records: Vec<RawRecord>,
}

impl StaticSeedSource {
    pub fn new(records: Vec<RawRecord>) -> Self {
        StaticSeedSource { records }
    }
}

impl SeedSource for StaticSeedSource {
    async fn fetch(&self) -> Result<Vec<RawRecord>, SeedError> {
        Ok(self.records.clone())
    }
}

/// Maps raw records into entries and installs them as the initial collection.
#[derive(Debug)]
pub struct SeedLoader {
    batch_size: usize,
    rng: StdRng,
}

impl SeedLoader {
    /// A loader keeping at most `batch_size` records, with an OS-seeded RNG.
    pub fn new(batch_size: usize) -> Self {
        SeedLoader {
            batch_size,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn from_config(config: &SeedConfig) -> Self {
        Self::new(config.batch_size)
    }

    /// Use a fixed RNG seed so emotions are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Fetch the raw records. Not retried.
    ///
    /// # Errors
    ///
    /// Whatever the source reports.
    pub async fn fetch<S: SeedSource>(&self, source: &S) -> Result<Vec<RawRecord>, SeedError> {
        source
            .fetch()
            .await
            .inspect_err(|e| log::warn!("diaryfold: seed fetch failed: {e}"))
    }

    /// Map one record into an entry with the given id.
    ///
    /// The mood is drawn uniformly from 1..=5 and the creation date is now.
    pub fn map_record(&mut self, id: EntryId, record: RawRecord) -> Entry {
        Entry {
            id,
            author: record.sender,
            content: record.body,
            emotion: self.rng.sample::<Emotion, _>(Standard),
            created_date: now_millis(),
        }
    }

    /// Map the first `batch_size` records, drawing ids from the store's
    /// counter in order, and install them with a single INIT.
    ///
    /// Returns the number of entries installed.
    pub fn install(&mut self, store: &mut EntryStore, records: Vec<RawRecord>) -> usize {
        let mut batch = Vec::with_capacity(records.len().min(self.batch_size));
        for record in records.into_iter().take(self.batch_size) {
            let id = store.reserve_id();
            batch.push(self.map_record(id, record));
        }
        let installed = batch.len();
        store.init(batch);
        log::info!("diaryfold: seeded {installed} entries");
        installed
    }

    /// Fetch from `source` and install the result.
    ///
    /// # Errors
    ///
    /// On a failed fetch the store is left exactly as it was.
    pub async fn load<S: SeedSource>(
        &mut self,
        store: &mut EntryStore,
        source: &S,
    ) -> Result<usize, SeedError> {
        let records = self.fetch(source).await?;
        Ok(self.install(store, records))
    }
}

impl Default for SeedLoader {
    fn default() -> Self {
        Self::new(SeedConfig::DEFAULT_BATCH_SIZE)
    }
}
