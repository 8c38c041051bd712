//! Project scaffolding from the embedded gold-standard templates.
//!
//! Writes are transactional: if any file fails to write, everything
//! created so far is removed and the destination is left as it was.
//! Existing files are never overwritten; a conflicting destination fails
//! the whole operation before the first write.

pub mod templates;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use crate::models::ScaffoldResult;
use crate::scaffold::templates::{license_text, render, TemplateContext, TEMPLATE_FILES};

/// Inputs for one scaffold run.
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    pub name: String,
    pub description: String,
    pub org: String,
    pub author: String,
    pub email: String,
    pub license: String,
    /// Suppress the progress bar (JSON mode, tests).
    pub quiet: bool,
}

/// Tracks created paths so a failed run can be undone. Rolls back on drop
/// unless committed.
struct Transaction {
    created_files: Vec<PathBuf>,
    created_dirs: Vec<PathBuf>,
    committed: bool,
}

impl Transaction {
    fn new() -> Self {
        Self {
            created_files: Vec::new(),
            created_dirs: Vec::new(),
            committed: false,
        }
    }

    fn write_file(&mut self, path: &Path, contents: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            // Track each directory this write brings into existence,
            // innermost last, so rollback can remove them in reverse.
            let mut missing = Vec::new();
            let mut cursor = parent;
            while !cursor.exists() {
                missing.push(cursor.to_path_buf());
                match cursor.parent() {
                    Some(p) => cursor = p,
                    None => break,
                }
            }
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
            self.created_dirs.extend(missing.into_iter().rev());
        }
        std::fs::write(path, contents)
            .with_context(|| format!("failed to write {}", path.display()))?;
        self.created_files.push(path.to_path_buf());
        Ok(())
    }

    fn commit(mut self) {
        self.committed = true;
    }
}

impl Drop for Transaction {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        for file in self.created_files.iter().rev() {
            if let Err(err) = std::fs::remove_file(file) {
                warn!("rollback: failed to remove {}: {err}", file.display());
            }
        }
        for dir in self.created_dirs.iter().rev() {
            // Only remove directories we emptied; shared parents stay.
            if let Err(err) = std::fs::remove_dir(dir) {
                debug!("rollback: left {} in place: {err}", dir.display());
            }
        }
    }
}

/// Materialize the gold-standard template set into `destination`.
pub fn scaffold(destination: &Path, opts: &ScaffoldOptions) -> ScaffoldResult {
    let ctx = TemplateContext::new(
        &opts.name,
        &opts.description,
        &opts.org,
        &opts.author,
        &opts.email,
        &opts.license,
    );

    let mut planned: Vec<(PathBuf, String)> = TEMPLATE_FILES
        .iter()
        .map(|file| {
            (
                PathBuf::from(render(file.path, &ctx)),
                render(file.contents, &ctx),
            )
        })
        .collect();
    planned.push((
        PathBuf::from("LICENSE"),
        license_text(&opts.license, &opts.author),
    ));

    // Never overwrite: reject the run before the first write.
    let conflicts: Vec<String> = planned
        .iter()
        .filter(|(rel, _)| destination.join(rel).exists())
        .map(|(rel, _)| rel.display().to_string())
        .collect();
    if !conflicts.is_empty() {
        return ScaffoldResult {
            success: false,
            path: destination.to_path_buf(),
            message: format!("destination already contains: {}", conflicts.join(", ")),
            files_created: vec![],
        };
    }

    let progress = if opts.quiet {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(planned.len() as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar
    };

    let mut tx = Transaction::new();
    for (rel, contents) in &planned {
        progress.set_message(rel.display().to_string());
        if let Err(err) = tx.write_file(&destination.join(rel), contents) {
            progress.finish_and_clear();
            // Transaction drop rolls back everything written so far.
            return ScaffoldResult {
                success: false,
                path: destination.to_path_buf(),
                message: format!("scaffold failed: {err:#}"),
                files_created: vec![],
            };
        }
        progress.inc(1);
    }
    tx.commit();
    progress.finish_and_clear();

    let mut files_created: Vec<String> = planned
        .iter()
        .map(|(rel, _)| rel.display().to_string())
        .collect();
    files_created.sort();

    ScaffoldResult {
        success: true,
        path: destination.to_path_buf(),
        message: "Project scaffolded from gold-standard template".into(),
        files_created,
    }
}
