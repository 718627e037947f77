//! stderr logging for the CLI (feature `with-tracing`, filtered by `RUST_LOG`).
//! Without the feature every hook here is a no-op.

use mailaddr_lib::AddressReport;

#[cfg(feature = "with-tracing")]
pub fn init() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(not(feature = "with-tracing"))]
pub fn init() {}

#[cfg_attr(not(feature = "with-tracing"), allow(unused_variables))]
pub fn report(report: &AddressReport) {
    #[cfg(feature = "with-tracing")]
    if report.valid {
        tracing::debug!(
            original = %report.original,
            canonical = report.canonical.as_deref().unwrap_or_default(),
            "address accepted"
        );
    } else {
        tracing::warn!(
            original = %report.original,
            reason = report.reason.as_deref().unwrap_or_default(),
            "address rejected"
        );
    }
}

#[cfg_attr(not(feature = "with-tracing"), allow(unused_variables))]
pub fn summary(total: usize, invalid: usize) {
    #[cfg(feature = "with-tracing")]
    tracing::info!(total, invalid, "batch checked");
}
