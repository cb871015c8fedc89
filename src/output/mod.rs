//! Presentation adapters. Each renders the assembled report (or a slice of
//! it) to a string or writer; none of them re-inspect raw feed structure.

pub mod csv;
pub mod json;
pub mod markdown;
pub mod terminal;

use std::path::Path;

use anyhow::Result;

/// Write rendered output to a file (creating parent directories) or stdout.
pub fn write_output(content: &str, output_file: Option<&Path>) -> Result<()> {
    match output_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(path, content)?;
        }
        None => println!("{content}"),
    }
    Ok(())
}
