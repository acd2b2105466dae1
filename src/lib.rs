mod config;
mod entry;
mod error;
mod event;
mod input;
pub mod seed;
mod shared;
mod store;
mod view;

pub use config::SeedConfig;
pub use entry::{Emotion, Entry, EntryId};
pub use error::{ConfigError, DiaryError, SeedError};
pub use event::{Action, ActionKind, Event};
pub use input::{validate_edit_content, MIN_EDIT_CONTENT_LEN};
pub use seed::{HttpSeedSource, RawRecord, SeedLoader, SeedSource, StaticSeedSource};
pub use shared::SharedStore;
pub use store::{reduce, EntryStore, IdCounter, Journal};
pub use view::{analytics, Analytics, AnalyticsView};
