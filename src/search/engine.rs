use super::distance::field_distance;
use super::normalize::{normalize, normalize_query};
use super::types::{Record, SearchHit, Similarity};

/// Maximum best-field distance a record may have and still be returned.
pub const DEFAULT_THRESHOLD: f64 = 0.3;

struct IndexedRecord {
    record: Record,
    fields: Vec<Vec<char>>,
}

/// Fuzzy search over one snapshot of records.
///
/// Built per request from whatever the store returned; field values are
/// normalized once up front so repeated queries against the same engine do
/// not redo that work. The engine never mutates the snapshot.
pub struct SearchEngine {
    entries: Vec<IndexedRecord>,
    threshold: f64,
}

impl SearchEngine {
    pub fn new(records: Vec<Record>) -> Self {
        Self::with_threshold(records, DEFAULT_THRESHOLD)
    }

    pub fn with_threshold(records: Vec<Record>, threshold: f64) -> Self {
        let entries = records
            .into_iter()
            .map(|record| {
                let fields = record
                    .searchable_fields()
                    .iter()
                    .map(|value| normalize(value))
                    .collect();
                IndexedRecord { record, fields }
            })
            .collect();

        Self { entries, threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ranks the snapshot against `query`.
    ///
    /// Each record is scored by its best field. Records scoring above the
    /// threshold are dropped; the rest come back best first, with equal
    /// scores ordered by ascending id. A query with nothing but whitespace
    /// matches nothing.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let Some(normalized) = normalize_query(query) else {
            return Vec::new();
        };

        let mut hits: Vec<SearchHit> = self
            .entries
            .iter()
            .filter_map(|entry| {
                let score = best_field_distance(&normalized, &entry.fields)?;
                if score > self.threshold {
                    return None;
                }
                Some(SearchHit {
                    record: entry.record.clone(),
                    score,
                    similarity: Similarity::for_title(&entry.record.apptitle, query),
                })
            })
            .collect();

        hits.sort_by(|a, b| {
            a.score
                .total_cmp(&b.score)
                .then_with(|| a.record.id.cmp(&b.record.id))
        });

        tracing::debug!(
            "Query {:?} matched {} of {} records",
            query,
            hits.len(),
            self.entries.len()
        );
        hits
    }
}

/// Smallest distance across the given fields, ignoring empty ones.
///
/// `None` when no field produced a distance at all.
pub fn best_field_distance(query: &[char], fields: &[Vec<char>]) -> Option<f64> {
    fields
        .iter()
        .filter_map(|field| field_distance(query, field))
        .min_by(|a, b| a.total_cmp(b))
}
