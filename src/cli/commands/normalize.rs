//! Normalize a target MAC list

use anyhow::bail;

use super::input;
use macsep::core::services::normalizer;
use macsep::output::{NormalizeOutput, OutputMode};

/// Show normalized MACs and rejected lines
pub fn normalize(targets_path: &str, mode: OutputMode) -> anyhow::Result<()> {
    let text = input::read_input(targets_path)?;
    if text.trim().is_empty() {
        bail!("No MAC addresses to normalize");
    }

    let targets = normalizer::parse_targets(&text);
    let output = NormalizeOutput {
        loaded: normalizer::loaded_list(&text),
        lines: normalizer::count_lines(&text),
        valid: targets.entries,
        rejected: targets.rejected,
    };
    output.render(mode);

    Ok(())
}
