use crate::domain::event::{CommitEvent, FspId, TransactionRole};
use crate::error::{CommitError, Result};
use serde::Deserialize;
use std::io::Read;

/// One CSV row of a commit-event stream.
///
/// The counterpart columns may be empty when the upstream lookup could not
/// resolve the other side.
#[derive(Debug, Deserialize)]
struct EventRecord {
    transaction_id: String,
    current_role: TransactionRole,
    transfer_role: TransactionRole,
    current_fsp: String,
    current_instance: String,
    counterpart_fsp: Option<String>,
    counterpart_instance: Option<String>,
}

impl From<EventRecord> for CommitEvent {
    fn from(record: EventRecord) -> Self {
        let counterpart_fsp = record
            .counterpart_fsp
            .zip(record.counterpart_instance)
            .map(|(id, instance)| FspId::new(id, instance));

        Self {
            transaction_id: record.transaction_id,
            current_role: record.current_role,
            transfer_role: record.transfer_role,
            current_fsp: FspId::new(record.current_fsp, record.current_instance),
            counterpart_fsp,
        }
    }
}

/// Reads commit events from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over
/// `Result<CommitEvent>`. It handles whitespace trimming and flexible record
/// lengths automatically, so large replay files stream without being loaded
/// into memory.
pub struct EventReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> EventReader<R> {
    /// Creates a new `EventReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes events.
    pub fn events(self) -> impl Iterator<Item = Result<CommitEvent>> {
        self.reader
            .into_deserialize::<EventRecord>()
            .map(|result| result.map(CommitEvent::from).map_err(CommitError::from))
    }
}
