use color_eyre::eyre::{Result, eyre};
use tracing_subscriber::fmt::format::FmtSpan;

/// JSON span timings on stderr; stdout carries only the report.
pub fn init_tracing_json() -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .json()
        .with_span_events(FmtSpan::CLOSE)
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| eyre!("failed to set tracing subscriber: {e}"))?;
    Ok(())
}
