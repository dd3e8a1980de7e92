//! Run command implementation
//!
//! Handles the `bundle-stats-diff run` command: the CI action entry point.
//! Inputs come from the action environment, the markdown report and the
//! `success` flag are published as action outputs. This is the pipeline's
//! single catch point: any failure publishes `success="false"` and the
//! failure reason before the error propagates for a non-zero exit.

use anyhow::Result;
use std::env;

use crate::cicd::ActionOutputs;
use crate::diff::diff_assets;
use crate::inputs::ActionInputs;
use crate::manifest::{filter_assets, load_manifest, ExcludeFilter, Side};
use crate::report::render_report;

/// Execute the action: resolve inputs, load, filter, diff, publish.
pub fn cmd_run() -> Result<()> {
    let outputs = ActionOutputs::from_env();

    match execute(&outputs) {
        Ok(()) => Ok(()),
        Err(err) => {
            // Failure flag first, then the failure reason
            if let Err(publish_err) = outputs.set("success", "false") {
                log::warn!("could not publish failure flag: {}", publish_err);
            }
            outputs.mark_failed(&err.to_string());
            Err(err)
        }
    }
}

fn execute(outputs: &ActionOutputs) -> Result<()> {
    let inputs = ActionInputs::from_env()?;
    let cwd = env::current_dir()?;
    let (base_path, pr_path) = inputs.resolve_paths(&cwd);
    log::debug!(
        "comparing {} against {}",
        base_path.display(),
        pr_path.display()
    );

    let filter = ExcludeFilter::from_input(inputs.excluded_assets.as_deref())?;
    let base = filter_assets(load_manifest(&base_path, Side::Base)?, filter.as_ref());
    let pr = filter_assets(load_manifest(&pr_path, Side::Pr)?, filter.as_ref());

    let stats = diff_assets(&base, &pr);
    let message = render_report(&stats)?;

    println!("{}", message);
    log::info!("stats message:\n{}", message);

    outputs.set("stats_message", &message)?;
    outputs.set("success", "true")?;

    Ok(())
}
