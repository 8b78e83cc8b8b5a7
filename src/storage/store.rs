use super::icon::icon_for_domain;
use super::protocol::AddRequest;
use crate::error::{ApiError, StoreError};
use crate::search::types::{Record, CORTYPE, DEFAULT_AUTHOR};

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::{Mutex, RwLock};

/// A validated submission that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecord {
    pub domain: String,
    pub apptitle: String,
    pub appdescription: String,
    pub by: Option<String>,
    pub icon: Option<String>,
}

impl NewRecord {
    /// Builds the stored form: assigns `id`, defaults `by`, forces
    /// `cortype`, and synthesizes `icon` from the domain when absent.
    pub fn into_record(self, id: u64) -> Record {
        let icon = match self.icon {
            Some(icon) => icon,
            None => icon_for_domain(&self.domain),
        };

        Record {
            id,
            domain: self.domain,
            apptitle: self.apptitle,
            appdescription: self.appdescription,
            by: self.by.unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            cortype: CORTYPE.to_string(),
            icon,
        }
    }
}

impl TryFrom<AddRequest> for NewRecord {
    type Error = ApiError;

    fn try_from(req: AddRequest) -> Result<Self, Self::Error> {
        let (Some(domain), Some(apptitle), Some(appdescription)) = (
            present(req.domain),
            present(req.apptitle),
            present(req.appdescription),
        ) else {
            return Err(ApiError::MissingFields);
        };

        Ok(Self {
            domain,
            apptitle,
            appdescription,
            by: present(req.by),
            icon: present(req.icon),
        })
    }
}

/// Empty and whitespace-only strings count as absent.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Holds the full record collection.
///
/// `append` assigns `id = count + 1` and must serialize concurrent callers so
/// that no two records share an id and no write is lost.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn load_all(&self) -> Result<Vec<Record>, StoreError>;

    async fn append(&self, record: NewRecord) -> Result<Record, StoreError>;
}

/// Store backed by a single JSON array file.
///
/// Every read loads the whole file; every append rewrites it. Appends are
/// serialized by `write_lock` so the read-modify-write cycle cannot
/// interleave. A missing file reads as an empty collection.
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_records(&self) -> Result<Vec<Record>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("Data file {} does not exist yet", self.path.display());
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    async fn write_records(&self, records: &[Record]) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(records).map_err(StoreError::Serialize)?;

        // Write beside the target and rename so readers never see a torn file.
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &json)
            .await
            .map_err(|source| StoreError::Io {
                path: tmp.clone(),
                source,
            })?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })
    }
}

#[async_trait]
impl RecordStore for JsonFileStore {
    async fn load_all(&self) -> Result<Vec<Record>, StoreError> {
        self.read_records().await
    }

    async fn append(&self, record: NewRecord) -> Result<Record, StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.read_records().await?;
        let stored = record.into_record(records.len() as u64 + 1);
        records.push(stored.clone());
        self.write_records(&records).await?;

        tracing::info!("Stored record {} ({})", stored.id, stored.domain);
        Ok(stored)
    }
}

/// In-process store with the same id assignment as `JsonFileStore`.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<Vec<Record>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn load_all(&self) -> Result<Vec<Record>, StoreError> {
        Ok(self.records.read().await.clone())
    }

    async fn append(&self, record: NewRecord) -> Result<Record, StoreError> {
        let mut records = self.records.write().await;
        let stored = record.into_record(records.len() as u64 + 1);
        records.push(stored.clone());
        Ok(stored)
    }
}
