//! Audit log adapters implementing [`crate::domain::ports::AuditSink`].
//!
//! Both adapters store one JSON document per line, so the log can be read
//! back line by line regardless of the order concurrent requests landed in.

mod json_lines;
mod memory;

pub use json_lines::JsonLinesAuditLog;
pub use memory::MemoryAuditSink;

use crate::domain::CreationRecord;
use crate::domain::ports::AuditSinkError;

/// Separator written after every document.
pub const RECORD_SEPARATOR: u8 = b'\n';

/// Encode `record` as a compact JSON document followed by [`RECORD_SEPARATOR`].
pub(crate) fn encode_line(record: &CreationRecord) -> Result<Vec<u8>, AuditSinkError> {
    let mut line = serde_json::to_vec(record)
        .map_err(|err| AuditSinkError::encode(format!("error marshaling data: {err}")))?;
    line.push(RECORD_SEPARATOR);
    Ok(line)
}
