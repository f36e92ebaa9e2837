//! Output of analysis records.

use crate::deviation::DeviationResult;
use crate::errors::Result;
use std::io::Write;
use tracing::warn;

/// Write `record` as one JSON line and flush so each token shows up as soon
/// as it is analyzed.
pub fn emit<W: Write>(out: &mut W, record: &DeviationResult) -> Result<()> {
    serde_json::to_writer(&mut *out, record)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

/// Log `record` at warn level when its deviation exceeds `max`.
pub fn alert_if_exceeds(record: &DeviationResult, max: f64) -> bool {
    if !record.exceeds(max) {
        return false;
    }
    warn!(
        token = %record.token,
        oracle = ?record.oracle,
        dex = ?record.dex,
        deviation = ?record.deviation,
        max,
        "[ALERT] oracle deviates from DEX spot price"
    );
    true
}
