//! Organize a manifest by location

use super::input;
use macsep::core::services::organize as organize_manifest;
use macsep::output::{OrganizeOutput, OutputMode};
use macsep::shared::list::ListFormat;

/// List the manifest's MACs grouped by location
pub fn organize(manifest_path: &str, format: ListFormat, mode: OutputMode) -> anyhow::Result<()> {
    let manifest = input::read_input(manifest_path)?;

    let organized = organize_manifest(&manifest)?;
    let groups = organized.groups();
    let all_macs = organized.all_macs().into_iter().cloned().collect();

    let output = OrganizeOutput {
        organized,
        groups,
        all_macs,
        format,
    };
    output.render(mode);

    Ok(())
}
