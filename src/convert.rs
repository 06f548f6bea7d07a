//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result};

use daystep_fixture::FixtureSpec;

use crate::config::FixtureToml;

/// Builds a validated [`FixtureSpec`] from the TOML fixture configuration.
pub fn build_fixture_spec(fixture: &FixtureToml) -> Result<FixtureSpec> {
    let spec = FixtureSpec::default()
        .with_start_unix_nanos(i128::from(fixture.start_unix_nanos))
        .with_step_secs(fixture.step_secs)
        .with_span_years(fixture.span_years);
    spec.validate().context("invalid [fixture] configuration")?;
    Ok(spec)
}
