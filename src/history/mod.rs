//! Append-only log of executed request/response exchanges.
//!
//! The pipeline writes records through [`HistoryRecorder::append`] after
//! every completed invocation; a viewer reads a full snapshot through
//! [`HistoryRecorder::read_all`] when it opens. Persistence beyond the
//! in-memory recorder is a collaborator's choice.

mod model;

use std::sync::Mutex;

pub use model::{ExchangeOutcome, HistoryRecord, RequestSnapshot, ResponseSnapshot};

use crate::error::Error;

pub trait HistoryRecorder: Send + Sync {
    /// Appends one record. The pipeline swallows errors from here; recording
    /// must never change a request's outcome.
    fn append(&self, record: HistoryRecord) -> Result<(), Error>;

    /// Returns an ordered snapshot of every record appended so far.
    fn read_all(&self) -> Vec<HistoryRecord>;
}

/// In-memory recorder. The mutex serializes concurrent appends so records
/// never interleave.
#[derive(Default)]
pub struct MemoryRecorder {
    records: Mutex<Vec<HistoryRecord>>,
}

impl MemoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryRecorder for MemoryRecorder {
    fn append(&self, record: HistoryRecord) -> Result<(), Error> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| Error::Recorder("history lock poisoned".to_string()))?;
        records.push(record);
        Ok(())
    }

    fn read_all(&self) -> Vec<HistoryRecord> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }
}
