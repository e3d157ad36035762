use std::fmt;

use thiserror::Error;
use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::codec::{self, DecodeError, EncodeError};
use crate::model::ProjectRecord;
use crate::validate;

/// Message recorded when an import string cannot be decoded at all.
pub const UNPARSEABLE_MESSAGE: &str = "Invalid Data Package; unable to parse data.";
/// Message recorded when the current record cannot be exported.
pub const EXPORT_FAILED_MESSAGE: &str = "Unable to export data package";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreEvent {
    /// A data package replaced the current record.
    Imported,
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Invalid Data Package; unable to parse data.")]
    Decode(#[source] DecodeError),
    #[error("data package rejected with {} defect(s)", .0.len())]
    Invalid(Vec<String>),
}

impl ImportError {
    /// User-facing messages for this failure, in the order they were found.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Decode(_) => vec![UNPARSEABLE_MESSAGE.to_string()],
            Self::Invalid(defects) => defects.clone(),
        }
    }
}

/// Construction-time inputs for a [`PackageStore`].
#[derive(Clone, Debug)]
pub struct StoreConfig {
    pub initial_record: ProjectRecord,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            initial_record: ProjectRecord::new_session(OffsetDateTime::now_utc()),
        }
    }
}

type Observer = Box<dyn FnMut(&StoreEvent)>;

/// Holds the session's data package and mediates import/export through the codec.
pub struct PackageStore {
    record: ProjectRecord,
    import_errors: Vec<String>,
    export_errors: Vec<String>,
    observers: Vec<Observer>,
}

impl PackageStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            record: config.initial_record,
            import_errors: Vec::new(),
            export_errors: Vec::new(),
            observers: Vec::new(),
        }
    }

    pub fn record(&self) -> &ProjectRecord {
        &self.record
    }

    /// Mutable access for the drawing layer.
    pub fn record_mut(&mut self) -> &mut ProjectRecord {
        &mut self.record
    }

    /// Replaces the record without validation or notification.
    pub fn replace_record(&mut self, record: ProjectRecord) -> ProjectRecord {
        std::mem::replace(&mut self.record, record)
    }

    pub fn import_errors(&self) -> &[String] {
        &self.import_errors
    }

    pub fn export_errors(&self) -> &[String] {
        &self.export_errors
    }

    /// Registers an observer. Observers run synchronously, after the record swap.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&StoreEvent) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Imports a transport string. On any failure the current record is left untouched.
    pub fn import_from_encoded_string(&mut self, encoded: &str) -> Result<(), ImportError> {
        self.import_errors.clear();

        let raw = match codec::decode(encoded) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(error = %err, "failed to decode data package");
                self.import_errors.push(UNPARSEABLE_MESSAGE.to_string());
                return Err(ImportError::Decode(err));
            }
        };

        let record = match validate::narrow(raw) {
            Ok(record) => record,
            Err(defects) => {
                warn!(defects = defects.len(), "data package failed validation");
                for defect in &defects {
                    debug!(%defect, "validation defect");
                }
                self.import_errors.extend(defects.iter().cloned());
                return Err(ImportError::Invalid(defects));
            }
        };

        self.record = record;
        info!(
            regions = self.record.drawn_areas.len(),
            "imported data package"
        );
        self.notify(StoreEvent::Imported);
        Ok(())
    }

    /// Encodes the current record into a transport string.
    pub fn export_to_encoded_string(&mut self) -> Result<String, EncodeError> {
        self.export_errors.clear();

        match codec::encode(&self.record) {
            Ok(encoded) => {
                debug!(len = encoded.len(), "exported data package");
                Ok(encoded)
            }
            Err(err) => {
                warn!(error = %err, "failed to export data package");
                self.export_errors.push(EXPORT_FAILED_MESSAGE.to_string());
                Err(err)
            }
        }
    }

    fn notify(&mut self, event: StoreEvent) {
        for observer in &mut self.observers {
            observer(&event);
        }
    }
}

impl Default for PackageStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl fmt::Debug for PackageStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PackageStore")
            .field("record", &self.record)
            .field("import_errors", &self.import_errors)
            .field("export_errors", &self.export_errors)
            .field("observers", &self.observers.len())
            .finish()
    }
}
