use crate::entry::Entry;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Good/bad mood statistics over a collection.
///
/// `good_ratio` is a percentage in `0.0..=100.0`, unrounded. For an empty
/// collection it is `NaN`: callers check [`Analytics::total`] (or use
/// [`Analytics::ratio_display`]) before showing it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Analytics {
    pub good_count: usize,
    pub bad_count: usize,
    /// Serialized as `null` when `NaN`.
    #[serde(with = "nan_as_null")]
    pub good_ratio: f64,
}

mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ratio: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if ratio.is_nan() {
            serializer.serialize_none()
        } else {
            serializer.serialize_f64(*ratio)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}

impl Analytics {
    /// Derive statistics from `entries`. Pure; no caching.
    pub fn compute(entries: &[Entry]) -> Self {
        let good_count = entries.iter().filter(|e| e.is_good()).count();
        let total = entries.len();
        let good_ratio = if total == 0 {
            f64::NAN
        } else {
            good_count as f64 / total as f64 * 100.0
        };
        Analytics {
            good_count,
            bad_count: total - good_count,
            good_ratio,
        }
    }

    pub fn total(&self) -> usize {
        self.good_count + self.bad_count
    }

    /// The ratio rounded to two decimals, or `None` when there are no entries.
    ///
    /// ```
    /// use diaryfold::Analytics;
    ///
    /// assert_eq!(Analytics::compute(&[]).ratio_display(), None);
    /// ```
    pub fn ratio_display(&self) -> Option<String> {
        if self.good_ratio.is_nan() {
            None
        } else {
            Some(format!("{:.2}", self.good_ratio))
        }
    }
}

impl fmt::Display for Analytics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "total: {}, good: {}, bad: {}, good ratio: ",
            self.total(),
            self.good_count,
            self.bad_count
        )?;
        match self.ratio_display() {
            Some(ratio) => write!(f, "{ratio}%"),
            None => f.write_str("n/a"),
        }
    }
}

/// Free-standing form of [`Analytics::compute`].
pub fn analytics(entries: &[Entry]) -> Analytics {
    Analytics::compute(entries)
}

/// Cached analytics over a collection.
///
/// Holds the last observed collection length together with the statistics
/// computed for it. [`refresh`](AnalyticsView::refresh) recomputes only when
/// the length differs or the cache was explicitly invalidated; an EDIT, which
/// leaves the length alone and cannot touch emotions, never pays for one.
#[derive(Debug, Default, Clone)]
pub struct AnalyticsView {
    cached: Option<(usize, Analytics)>,
    recomputes: u64,
}

impl AnalyticsView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return statistics for `entries`, recomputing only if the cached
    /// length no longer matches.
    pub fn refresh(&mut self, entries: &[Entry]) -> &Analytics {
        let len = entries.len();
        let fresh = matches!(self.cached, Some((observed, _)) if observed == len);
        if !fresh {
            self.cached = None;
            self.recomputes += 1;
            log::debug!("diaryfold: recomputing analytics over {len} entries");
        }
        let (_, stats) = self
            .cached
            .get_or_insert_with(|| (len, Analytics::compute(entries)));
        stats
    }

    /// The cached statistics, without touching the collection.
    ///
    /// `None` until the first [`refresh`](AnalyticsView::refresh) or after
    /// [`invalidate`](AnalyticsView::invalidate).
    pub fn state(&self) -> Option<&Analytics> {
        self.cached.as_ref().map(|(_, stats)| stats)
    }

    /// Drop the cache so the next refresh recomputes regardless of length.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// How many times the statistics have been computed.
    pub fn recompute_count(&self) -> u64 {
        self.recomputes
    }
}
