//! Encode a snapshot and write it as one JSON line.
//!
//! The steps run strictly in order and the first failure aborts the rest,
//! so nothing reaches the output unless every step succeeded.

use std::io::Write;
use std::process::ExitCode;

use serde::Serialize;

use crate::error::Result;
use crate::system::snapshot::SnapshotSource;

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Reported,
    Failed,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Reported => ExitCode::SUCCESS,
            Outcome::Failed => ExitCode::FAILURE,
        }
    }
}

/// Compact JSON bytes for `value`.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    #[cfg(feature = "perf-tracing")]
    let _span = tracing::debug_span!("report.encode").entered();

    Ok(serde_json::to_vec(value)?)
}

pub fn decode_as_text(bytes: Vec<u8>) -> Result<String> {
    #[cfg(feature = "perf-tracing")]
    let _span = tracing::debug_span!("report.decode").entered();

    Ok(String::from_utf8(bytes)?)
}

/// Write `text` and a trailing newline in a single write, then flush.
pub fn emit<W: Write + ?Sized>(text: &str, out: &mut W) -> Result<()> {
    #[cfg(feature = "perf-tracing")]
    let _span = tracing::debug_span!("report.emit").entered();

    let mut line = String::with_capacity(text.len() + 1);
    line.push_str(text);
    line.push('\n');
    out.write_all(line.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Read a snapshot from `source` and write it to `out` as one JSON line.
pub fn report<S, W>(source: &S, out: &mut W) -> Result<()>
where
    S: SnapshotSource + ?Sized,
    W: Write + ?Sized,
{
    let snapshot = source.read()?;
    let bytes = encode(&snapshot)?;
    let text = decode_as_text(bytes)?;
    emit(&text, out)
}

/// [`report`], with any failure described on one line of `err`. Errors
/// writing to `err` itself are dropped.
pub fn run<S, W, E>(source: &S, out: &mut W, err: &mut E) -> Outcome
where
    S: SnapshotSource + ?Sized,
    W: Write + ?Sized,
    E: Write + ?Sized,
{
    match report(source, out) {
        Ok(()) => Outcome::Reported,
        Err(e) => {
            let _ = writeln!(err, "{e}");
            let _ = err.flush();
            Outcome::Failed
        }
    }
}
