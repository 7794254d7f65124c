pub mod alert;
pub mod check;
pub mod serve;
pub mod villages;

use anyhow::Context;
use flood_core::{config::Config, Dataset};
use std::path::Path;

/// Load `flood.yaml` and both data files under `root`.
pub fn load(root: &Path) -> anyhow::Result<(Config, Dataset)> {
    let config = Config::load(root).context("failed to load flood.yaml")?;
    let dataset = Dataset::load(root, &config).context("failed to load flood data")?;
    Ok((config, dataset))
}
