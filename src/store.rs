use crate::entry::{Emotion, Entry, EntryId};
use crate::error::DiaryError;
use crate::event::{Action, ActionKind, Event};
use crate::view::{Analytics, AnalyticsView};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Monotonic source of entry ids.
///
/// Starts at 0 and only ever moves forward, so an id is never handed out
/// twice even after its entry is removed. There is no way to rewind it.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdCounter(EntryId);

impl IdCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the current id and advance by one.
    pub fn advance(&mut self) -> EntryId {
        let id = self.0;
        self.0 += 1;
        id
    }

    /// The id the next [`advance`](IdCounter::advance) will return.
    pub fn peek(&self) -> EntryId {
        self.0
    }
}

/// The state folded by [`reduce`]: the collection plus the identity counter.
///
/// Entries are newest-first by insertion.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journal {
    pub entries: Vec<Entry>,
    pub counter: IdCounter,
}

/// Fold one event into the journal.
///
/// Pure: the only state besides the collection is the counter carried in the
/// journal itself. REMOVE and EDIT on an absent id return the journal as is.
///
/// # Examples
///
/// ```
/// use diaryfold::{reduce, Action, Emotion, Event, Journal};
///
/// let create = Action::Create {
///     author: "a".into(),
///     content: "hi".into(),
///     emotion: Emotion::BEST,
/// };
/// let journal = reduce(Journal::default(), Event::at(create, 1_000));
/// assert_eq!(journal.entries[0].id, 0);
/// assert_eq!(journal.entries[0].created_date, 1_000);
/// assert_eq!(journal.counter.peek(), 1);
/// ```
pub fn reduce(mut state: Journal, event: Event) -> Journal {
    match event.action {
        Action::Init { data } => {
            state.entries = data;
        }
        Action::Create {
            author,
            content,
            emotion,
        } => {
            let entry = Entry {
                id: state.counter.advance(),
                author,
                content,
                emotion,
                created_date: event.ts,
            };
            state.entries.insert(0, entry);
        }
        Action::Remove { target_id } => {
            state.entries.retain(|e| e.id != target_id);
        }
        Action::Edit {
            target_id,
            new_content,
        } => {
            if let Some(entry) = state.entries.iter_mut().find(|e| e.id == target_id) {
                entry.content = new_content;
            }
        }
    }
    state
}

/// Owner of the diary collection.
///
/// Every mutation goes through [`apply`](EntryStore::apply), which folds the
/// event with [`reduce`] and keeps the analytics cache honest: INIT and any
/// action that changed the collection length invalidate it, EDIT never does.
///
/// Single-writer: callers on several threads wrap it in a
/// [`SharedStore`](crate::SharedStore).
///
/// # Examples
///
/// ```
/// use diaryfold::{Emotion, EntryStore};
///
/// let mut store = EntryStore::new();
/// let first = store.create("a", "x", Emotion::WORST);
/// let second = store.create("b", "y", Emotion::BEST);
/// assert_eq!((first, second), (0, 1));
/// assert_eq!(store.entries()[0].id, second);
///
/// let stats = store.analytics();
/// assert_eq!((stats.good_count, stats.bad_count), (1, 1));
/// assert_eq!(stats.good_ratio, 50.0);
/// ```
#[derive(Debug, Default)]
pub struct EntryStore {
    journal: Journal,
    analytics: AnalyticsView,
    initialized: bool,
}

impl EntryStore {
    /// An empty store with the counter at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp `action` with the current time and apply it.
    pub fn dispatch(&mut self, action: Action) -> &[Entry] {
        self.apply(Event::new(action))
    }

    /// Parse a tagged JSON action and apply it.
    ///
    /// # Errors
    ///
    /// Returns the parse error from [`Action::from_value`]; the collection is
    /// untouched in that case.
    pub fn dispatch_value(&mut self, value: Value) -> Result<&[Entry], DiaryError> {
        let action = Action::from_value(value)?;
        Ok(self.dispatch(action))
    }

    /// Fold a pre-stamped event into the collection.
    pub fn apply(&mut self, event: Event) -> &[Entry] {
        let kind = event.action.kind();
        let before = self.journal.entries.len();

        match &event.action {
            Action::Init { data } => self.check_init(data),
            Action::Remove { target_id } | Action::Edit { target_id, .. }
                if self.get(*target_id).is_none() =>
            {
                log::debug!("diaryfold: {kind} of absent id {target_id} ignored");
            }
            _ => {}
        }

        let journal = std::mem::take(&mut self.journal);
        self.journal = reduce(journal, event);

        let after = self.journal.entries.len();
        if kind == ActionKind::Init || after != before {
            self.analytics.invalidate();
        }
        log::debug!("diaryfold: applied {kind}, {before} -> {after} entries");

        &self.journal.entries
    }

    /// Replace the collection with `batch`, order preserved.
    ///
    /// Does not touch the identity counter.
    pub fn init(&mut self, batch: Vec<Entry>) {
        self.dispatch(Action::Init { data: batch });
    }

    /// Prepend a new entry and return its id.
    pub fn create(
        &mut self,
        author: impl Into<String>,
        content: impl Into<String>,
        emotion: Emotion,
    ) -> EntryId {
        let id = self.journal.counter.peek();
        self.dispatch(Action::Create {
            author: author.into(),
            content: content.into(),
            emotion,
        });
        id
    }

    /// Remove the entry with `id`. No-op if there is none.
    pub fn remove(&mut self, id: EntryId) {
        self.dispatch(Action::Remove { target_id: id });
    }

    /// Replace the content of the entry with `id`. No-op if there is none.
    ///
    /// No length check happens here; see
    /// [`validate_edit_content`](crate::validate_edit_content).
    pub fn edit(&mut self, id: EntryId, new_content: impl Into<String>) {
        self.dispatch(Action::Edit {
            target_id: id,
            new_content: new_content.into(),
        });
    }

    /// Take the next id from the counter without creating an entry.
    ///
    /// Used to number seed entries before they are installed with INIT.
    pub fn reserve_id(&mut self) -> EntryId {
        self.journal.counter.advance()
    }

    /// The id the next CREATE will receive.
    pub fn next_id(&self) -> EntryId {
        self.journal.counter.peek()
    }

    /// Statistics for the current collection, recomputed only when the
    /// collection changed size since the last call.
    pub fn analytics(&mut self) -> &Analytics {
        self.analytics.refresh(&self.journal.entries)
    }

    /// The analytics cache, for inspecting how often it recomputed.
    pub fn analytics_view(&self) -> &AnalyticsView {
        &self.analytics
    }

    /// Live entries, newest first.
    pub fn entries(&self) -> &[Entry] {
        &self.journal.entries
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.journal.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.journal.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.journal.entries.is_empty()
    }

    /// The folded state: collection plus counter.
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    fn check_init(&mut self, batch: &[Entry]) {
        if self.initialized {
            log::warn!("diaryfold: INIT applied more than once, replacing the collection");
        }
        self.initialized = true;

        let next = self.journal.counter.peek();
        if let Some(entry) = batch.iter().find(|e| e.id >= next) {
            log::warn!(
                "diaryfold: INIT batch holds id {} but the counter is at {next}; a later CREATE may collide",
                entry.id
            );
        }
        let mut ids: Vec<EntryId> = batch.iter().map(|e| e.id).collect();
        ids.sort_unstable();
        if ids.windows(2).any(|w| w[0] == w[1]) {
            log::warn!("diaryfold: INIT batch contains duplicate ids");
        }
    }
}
