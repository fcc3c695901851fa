use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

pub struct SourceLoader;

impl SourceLoader {
    /// Collect all C# source files under a directory.
    /// Returns (path, content) pairs sorted by path for a stable run order.
    pub fn load_directory(dir: &Path) -> Result<Vec<(String, String)>> {
        let mut files = Vec::new();
        Self::collect_cs_recursive(dir, &mut files)?;
        files.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(files)
    }

    fn collect_cs_recursive(dir: &Path, out: &mut Vec<(String, String)>) -> Result<()> {
        // Build output and VCS directories never hold checkable sources.
        if dir.ends_with("bin") || dir.ends_with("obj") || dir.ends_with(".git") {
            return Ok(());
        }
        if !dir.exists() {
            return Ok(());
        }

        if dir.is_file() {
            if let Some(ext) = dir.extension() {
                if ext == "cs" {
                    let content = fs::read_to_string(dir)
                        .with_context(|| format!("Failed to read file {}", dir.display()))?;
                    out.push((dir.display().to_string(), content));
                }
            }
            return Ok(());
        }

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_dir() {
                Self::collect_cs_recursive(&path, out)?;
            } else if let Some(ext) = path.extension() {
                if ext == "cs" {
                    let content = fs::read_to_string(&path)
                        .with_context(|| format!("Failed to read file {}", path.display()))?;
                    out.push((path.display().to_string(), content));
                }
            }
        }
        Ok(())
    }
}
