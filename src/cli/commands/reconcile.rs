//! Reconcile a MAC list against a manifest

use chrono::Local;

use super::input;
use macsep::config::Config;
use macsep::core::services::{group_by_location, reconcile_texts, render_report};
use macsep::output::{OutputMode, ReconcileOutput};
use macsep::shared::list::ListFormat;

/// Reconcile the target file against the manifest file
pub fn reconcile(
    targets_path: &str,
    manifest_path: &str,
    with_report: bool,
    format: ListFormat,
    config: &Config,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let (targets, manifest) = input::read_pair(targets_path, manifest_path)?;

    let reconciliation = reconcile_texts(&targets, &manifest)?;
    let groups = group_by_location(&reconciliation.result.matched);
    let report = with_report.then(|| {
        render_report(
            &reconciliation.result,
            &config.report_options(),
            Local::now().naive_local(),
        )
    });

    let output = ReconcileOutput {
        reconciliation,
        groups,
        report,
        format,
        preview_limit: config.output.preview_limit,
    };
    output.render(mode);

    Ok(())
}
