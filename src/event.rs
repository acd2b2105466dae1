use crate::entry::{Emotion, Entry, EntryId};
use crate::error::DiaryError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

/// A mutation request against the entry collection.
///
/// The set of kinds is closed. Actions that arrive as tagged JSON go through
/// [`Action::from_value`], which rejects unknown tags instead of guessing.
///
/// Serialized form is internally tagged with `"type"`:
///
/// ```text
/// {"type":"CREATE","author":"kim","content":"sunny day","emotion":5}
/// {"type":"REMOVE","targetId":3}
/// {"type":"EDIT","targetId":3,"newContent":"rainy after all"}
/// {"type":"INIT","data":[...entries...]}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Replace the whole collection with `data`, order preserved.
    Init { data: Vec<Entry> },

    /// Prepend a new entry with the next id and the event's timestamp.
    Create {
        author: String,
        content: String,
        emotion: Emotion,
    },

    #[serde(rename_all = "camelCase")]
    Remove { target_id: EntryId },

    #[serde(rename_all = "camelCase")]
    Edit {
        target_id: EntryId,
        new_content: String,
    },
}

impl Action {
    /// Parse a tagged JSON action.
    ///
    /// # Errors
    ///
    /// - [`DiaryError::MissingActionType`] if there is no string `"type"` field.
    /// - [`DiaryError::UnknownAction`] if the tag is not one of the four kinds.
    /// - [`DiaryError::MalformedAction`] if the payload does not fit the kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use diaryfold::{Action, DiaryError};
    /// use serde_json::json;
    ///
    /// let action = Action::from_value(json!({"type": "REMOVE", "targetId": 4})).unwrap();
    /// assert_eq!(action, Action::Remove { target_id: 4 });
    ///
    /// let err = Action::from_value(json!({"type": "ARCHIVE", "targetId": 4})).unwrap_err();
    /// assert!(matches!(err, DiaryError::UnknownAction(tag) if tag == "ARCHIVE"));
    /// ```
    pub fn from_value(value: Value) -> Result<Action, DiaryError> {
        let kind: ActionKind = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or(DiaryError::MissingActionType)?
            .parse()?;
        serde_json::from_value(value).map_err(|source| DiaryError::MalformedAction { kind, source })
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Init { .. } => ActionKind::Init,
            Action::Create { .. } => ActionKind::Create,
            Action::Remove { .. } => ActionKind::Remove,
            Action::Edit { .. } => ActionKind::Edit,
        }
    }
}

/// The tag of an [`Action`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Init,
    Create,
    Remove,
    Edit,
}

impl ActionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::Init => "INIT",
            ActionKind::Create => "CREATE",
            ActionKind::Remove => "REMOVE",
            ActionKind::Edit => "EDIT",
        }
    }
}

impl FromStr for ActionKind {
    type Err = DiaryError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "INIT" => Ok(ActionKind::Init),
            "CREATE" => Ok(ActionKind::Create),
            "REMOVE" => Ok(ActionKind::Remove),
            "EDIT" => Ok(ActionKind::Edit),
            other => Err(DiaryError::UnknownAction(other.to_string())),
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An [`Action`] stamped with the time it was issued.
///
/// The reducer is pure: CREATE takes its `created_date` from `ts` rather than
/// reading the clock, so replaying the same events yields the same entries.
///
/// # Examples
///
/// ```
/// use diaryfold::{Action, Event};
///
/// let event = Event::new(Action::Remove { target_id: 7 });
/// assert!(event.ts > 0);
///
/// let fixed = Event::at(Action::Remove { target_id: 7 }, 1_700_000_000_000);
/// assert_eq!(fixed.ts, 1_700_000_000_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub action: Action,

    /// Milliseconds since the Unix epoch.
    pub ts: u64,
}

impl Event {
    /// Stamp `action` with the current time.
    pub fn new(action: Action) -> Self {
        Event::at(action, now_millis())
    }

    /// Stamp `action` with an explicit time.
    pub fn at(action: Action, ts: u64) -> Self {
        Event { action, ts }
    }
}

/// Current time in milliseconds since the Unix epoch, or 0 if the clock is
/// set before it.
pub(crate) fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or_default()
}
