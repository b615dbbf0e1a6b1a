use crate::errors::{AppError, AppResult};
use std::path::Path;

/// Check whether a file can be created or overwritten.
///
/// - file does not exist → Ok
/// - file exists and `force` → Ok
/// - file exists otherwise → `confirm` decides.
pub(crate) fn ensure_writable(
    path: &Path,
    force: bool,
    confirm: &mut dyn FnMut(&str) -> bool,
) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    let prompt = format!("The file '{}' already exists. Overwrite?", path.display());
    if confirm(&prompt) {
        Ok(())
    } else {
        Err(AppError::Export(
            "export cancelled: existing file not overwritten".into(),
        ))
    }
}
