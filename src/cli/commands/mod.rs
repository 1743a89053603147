pub mod generate;
pub mod render;

use std::path::Path;

/// Write output to file with safe directory creation
pub(crate) fn write_output_to_file(
    path: &Path,
    content: &str,
    description: &str,
) -> crate::errors::AppResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    println!("{} written to: {}", description, path.display());
    Ok(())
}
