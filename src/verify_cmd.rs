//! Verify command: check an existing fixture against the configured spec.

use anyhow::{Context, Result};
use tracing::info_span;

use daystep_fixture::verify_fixture;

use crate::cli::VerifyArgs;
use crate::config::DaystepConfig;
use crate::convert;

/// Run the standalone verification.
pub fn run(args: &VerifyArgs, config: &DaystepConfig) -> Result<()> {
    let _cmd = info_span!("verify").entered();

    let spec = convert::build_fixture_spec(&config.fixture)?;
    let input = args.input.as_ref().unwrap_or(&config.fixture.output);

    let report = verify_fixture(input, &spec)
        .with_context(|| format!("fixture verification failed: {}", input.display()))?;
    println!("{}: {} records ok", input.display(), report.records());
    Ok(())
}
