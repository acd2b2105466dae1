#![allow(dead_code)]

use diaryfold::{Emotion, Entry, EntryId, RawRecord, SeedError, SeedSource};

pub fn mood(score: u8) -> Emotion {
    Emotion::new(score).unwrap()
}

pub fn entry(id: EntryId, author: &str, content: &str, score: u8) -> Entry {
    Entry {
        id,
        author: author.to_string(),
        content: content.to_string(),
        emotion: mood(score),
        created_date: 1_700_000_000_000 + id,
    }
}

pub fn sample_records(n: usize) -> Vec<RawRecord> {
    (0..n)
        .map(|i| RawRecord::new(format!("user{i}@example.com"), format!("comment body {i}")))
        .collect()
}

/// A seed source that is always down.
pub struct FailingSource;

impl SeedSource for FailingSource {
    async fn fetch(&self) -> Result<Vec<RawRecord>, SeedError> {
        Err(SeedError::Unavailable("offline".to_string()))
    }
}
