use crate::error::DiaryError;
use rand::Rng;
use rand::distributions::{Distribution, Standard};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of an entry. Assigned by the store's counter, never reused.
pub type EntryId = u64;

/// A mood score from 1 (worst) to 5 (best).
///
/// Scores of 3 and above count as "good" in [`Analytics`](crate::Analytics).
/// Out-of-range scores cannot be constructed, including through serde.
///
/// # Examples
///
/// ```
/// use diaryfold::Emotion;
///
/// let mood = Emotion::new(3).unwrap();
/// assert!(mood.is_good());
/// assert!(!Emotion::new(2).unwrap().is_good());
/// assert!(Emotion::new(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Emotion(u8);

impl Emotion {
    pub const WORST: Emotion = Emotion(1);
    pub const BEST: Emotion = Emotion(5);
    /// Lowest score classified as good.
    pub const GOOD_THRESHOLD: u8 = 3;

    /// # Errors
    ///
    /// Returns [`DiaryError::InvalidEmotion`] outside `1..=5`.
    pub fn new(score: u8) -> Result<Self, DiaryError> {
        if (Self::WORST.0..=Self::BEST.0).contains(&score) {
            Ok(Emotion(score))
        } else {
            Err(DiaryError::InvalidEmotion(score))
        }
    }

    pub fn score(self) -> u8 {
        self.0
    }

    pub fn is_good(self) -> bool {
        self.0 >= Self::GOOD_THRESHOLD
    }
}

impl TryFrom<u8> for Emotion {
    type Error = DiaryError;

    fn try_from(score: u8) -> Result<Self, Self::Error> {
        Emotion::new(score)
    }
}

impl From<Emotion> for u8 {
    fn from(emotion: Emotion) -> u8 {
        emotion.0
    }
}

/// Uniform over the five scores.
impl Distribution<Emotion> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Emotion {
        Emotion(rng.gen_range(Emotion::WORST.0..=Emotion::BEST.0))
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One diary record.
///
/// Only `content` ever changes after creation, and only through an EDIT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub author: String,
    pub content: String,
    pub emotion: Emotion,
    /// Milliseconds since the Unix epoch, stamped once at creation.
    pub created_date: u64,
}

impl Entry {
    pub fn is_good(&self) -> bool {
        self.emotion.is_good()
    }
}
