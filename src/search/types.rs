use serde::{Deserialize, Serialize};

/// Attribution stored when a client does not say who submitted a record.
pub const DEFAULT_AUTHOR: &str = "unknown";
/// Connection type stamped on every record, regardless of client input.
pub const CORTYPE: &str = "https://";

/// A single directory entry.
///
/// Records are created once by the store and never modified afterwards.
/// The search engine only ever reads them from a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: u64,
    pub domain: String,
    pub apptitle: String,
    pub appdescription: String,
    #[serde(default = "default_author")]
    pub by: String,
    #[serde(default = "default_cortype")]
    pub cortype: String,
    #[serde(default)]
    pub icon: String,
}

impl Record {
    /// The fields a query is matched against, in match order.
    pub fn searchable_fields(&self) -> [&str; 4] {
        [&self.domain, &self.apptitle, &self.appdescription, &self.by]
    }
}

fn default_author() -> String {
    DEFAULT_AUTHOR.to_string()
}

fn default_cortype() -> String {
    CORTYPE.to_string()
}

/// Coarse presentation label for a hit.
///
/// `High` means the query text literally occurs in the title. It has no
/// effect on filtering or ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Similarity {
    High,
    Low,
}

impl Similarity {
    pub fn for_title(title: &str, query: &str) -> Self {
        if title.to_lowercase().contains(&query.to_lowercase()) {
            Similarity::High
        } else {
            Similarity::Low
        }
    }
}

/// A record that passed the threshold, with its best-field distance.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub record: Record,
    /// Distance in `[0, 1]`; lower is better.
    pub score: f64,
    pub similarity: Similarity,
}

/// Wire shape of one search result: the record fields plus `similarity`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResultItem {
    #[serde(flatten)]
    pub record: Record,
    pub similarity: Similarity,
}

impl From<SearchHit> for SearchResultItem {
    fn from(hit: SearchHit) -> Self {
        Self {
            record: hit.record,
            similarity: hit.similarity,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}
