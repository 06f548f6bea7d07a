use anyhow::{Context, Result};
use tracing::{info, info_span};

use daystep_fixture::write_fixture;

use crate::cli::GenerateArgs;
use crate::config::DaystepConfig;
use crate::convert;

/// Write the fixture file.
///
/// The output is created only after the configuration has been validated,
/// and nothing is generated if it cannot be created.
pub fn run(args: &GenerateArgs, config: &DaystepConfig) -> Result<()> {
    let _cmd = info_span!("generate").entered();

    let spec = convert::build_fixture_spec(&config.fixture)?;
    let output = args.output.as_ref().unwrap_or(&config.fixture.output);
    info!(
        path = %output.display(),
        expected_records = spec.expected_len()?,
        "generating fixture"
    );

    let summary = write_fixture(output, &spec).context("fixture generation failed")?;
    if let (Some(first), Some(last)) = (summary.first(), summary.last()) {
        info!(
            records = summary.count(),
            first = %first.formatted(),
            last = %last.formatted(),
            "fixture complete"
        );
    }
    Ok(())
}
