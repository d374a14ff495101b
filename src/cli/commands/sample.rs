//! Print example input

use macsep::core::services::sample as examples;
use macsep::output::OutputMode;

use crate::cli::app::SampleKind;

/// Print a sample manifest or target list
pub fn sample(kind: SampleKind, count: usize, mode: OutputMode) -> anyhow::Result<()> {
    let text = match kind {
        SampleKind::Random => examples::generate_sample(&mut rand::rng(), count),
        SampleKind::Valid => examples::EXAMPLE_MANIFEST.to_string(),
        SampleKind::Errors => examples::EXAMPLE_MANIFEST_WITH_ERRORS.to_string(),
        SampleKind::Export => examples::EXAMPLE_INVENTORY_EXPORT.to_string(),
        SampleKind::Targets => examples::EXAMPLE_TARGETS.to_string(),
    };

    if mode == OutputMode::Json {
        println!("{}", serde_json::json!({ "text": text }));
    } else {
        println!("{text}");
    }

    Ok(())
}
