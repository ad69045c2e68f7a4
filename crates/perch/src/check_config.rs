//! Implementation for the `check-config` subcommand.

use config::PlacementConfig;
use perch_place::{Positioner, Profile};
use ron::ser::PrettyConfig;

use crate::{cli::CheckConfigArgs, error::Result};

/// Load, validate and print a configuration with its starting placements.
pub fn run(args: &CheckConfigArgs) -> Result<()> {
    let config = config::load_from_path(&args.config)?;
    print!("{}", report(&config)?);
    Ok(())
}

/// The normalized configuration followed by one starting placement per profile.
fn report(config: &PlacementConfig) -> Result<String> {
    let mut out = ron::ser::to_string_pretty(config, PrettyConfig::default())?;
    out.push('\n');
    for (name, profile) in [("dropdown", Profile::DROPDOWN), ("tooltip", Profile::TOOLTIP)] {
        let positioner = Positioner::configure(config, profile)?;
        out.push_str(&format!("{name}: starts at {}\n", positioner.original()));
    }
    Ok(out)
}
