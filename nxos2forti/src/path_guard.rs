use std::path::{Component, Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Fail when writing `output` would replace `input`.
///
/// `output` usually does not exist yet and may route through directories that
/// `convert` creates later, so it is resolved lexically first and only its
/// longest existing ancestor is canonicalized.
pub fn ensure_output_not_same(output: &Path, input: &Path) -> Result<()> {
    let out_resolved = resolve(output)
        .with_context(|| format!("failed to resolve output path {}", output.display()))?;
    let in_resolved = resolve(input)
        .with_context(|| format!("failed to resolve input path {}", input.display()))?;

    if out_resolved == in_resolved {
        bail!(
            "refusing to overwrite input file: output {} resolves to input {}",
            output.display(),
            input.display()
        );
    }
    Ok(())
}

fn resolve(path: &Path) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().context("current_dir")?.join(path)
    };
    let lexical = lexically_normalize(&absolute);

    let mut existing = lexical.as_path();
    let mut missing = Vec::new();
    while !existing.exists() {
        let (Some(parent), Some(name)) = (existing.parent(), existing.file_name()) else {
            return Ok(lexical);
        };
        missing.push(name.to_os_string());
        existing = parent;
    }

    let mut resolved = existing
        .canonicalize()
        .with_context(|| format!("canonicalize {}", existing.display()))?;
    resolved.extend(missing.iter().rev());
    Ok(resolved)
}

// Drops `.` and folds `..` into its parent without touching the filesystem.
fn lexically_normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}
