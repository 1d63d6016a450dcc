use std::path::Path;

use crate::error::ScraperError;
use crate::model::ProductVariant;

/// Format variants as a pretty-printed JSON array
pub fn format_json(variants: &[ProductVariant]) -> Result<String, ScraperError> {
    Ok(serde_json::to_string_pretty(variants)?)
}

/// Write variants to `path`, replacing any previous snapshot
pub fn write_json(path: &Path, variants: &[ProductVariant]) -> Result<(), ScraperError> {
    let output_str = format_json(variants)?;
    std::fs::write(path, output_str).map_err(|source| ScraperError::Output {
        path: path.display().to_string(),
        source,
    })?;
    log::info!("💾 Output saved to: {}", path.display());
    Ok(())
}
