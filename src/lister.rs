//! Directory listing: filtering, ordering, and typed node construction.

use crate::classify::{classify_dir, classify_file, Category};
use crate::config::Config;
use crate::envs::{EnvironmentCache, EnvironmentSet, PropagatedContext};
use crate::ignore::should_ignore;
use std::io;
use std::path::{Path, PathBuf};

/// One enumerated child, before classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub path: PathBuf,
    pub name: String,
}

/// A listed subdirectory. `own` holds the environments detected in this
/// directory itself; `context` merges them with the inherited ones.
#[derive(Debug, Clone)]
pub struct DirectoryNode {
    pub entry: DirectoryEntry,
    pub category: Category,
    pub own: EnvironmentSet,
    pub context: PropagatedContext,
}

/// A listed file. Files never detect environments; `context` is the caller's
/// inherited context passed through unchanged, used only for power-flow
/// indicators.
#[derive(Debug, Clone)]
pub struct FileNode {
    pub entry: DirectoryEntry,
    pub extension: Option<String>,
    pub category: Category,
    pub context: PropagatedContext,
}

/// Typed listing result, directory or file
#[derive(Debug, Clone)]
pub enum TreeNode {
    Directory(DirectoryNode),
    File(FileNode),
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::Directory(d) => &d.entry.name,
            TreeNode::File(f) => &f.entry.name,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            TreeNode::Directory(d) => &d.entry.path,
            TreeNode::File(f) => &f.entry.path,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            TreeNode::Directory(d) => d.category,
            TreeNode::File(f) => f.category,
        }
    }

    pub fn context(&self) -> &PropagatedContext {
        match self {
            TreeNode::Directory(d) => &d.context,
            TreeNode::File(f) => &f.context,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Directory(_))
    }
}

/// Enumerate, filter, and order the children of a directory, surfacing the
/// enumeration error to the caller. Renderers that can display an error
/// marker use this directly; everyone else goes through [`list`].
pub fn children(
    dir: &Path,
    inherited: &PropagatedContext,
    cache: &mut EnvironmentCache,
    config: &Config,
) -> io::Result<Vec<TreeNode>> {
    let mut raw: Vec<(String, PathBuf, bool)> = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                eprintln!("Warning: Error reading entry in {}: {}", dir.display(), err);
                continue;
            }
        };

        let path = entry.path();
        if should_ignore(&path, &config.ignore) {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();

        // Symlinks are listed as files and never followed
        let is_dir = match entry.file_type() {
            Ok(ft) => ft.is_dir(),
            Err(err) => {
                eprintln!(
                    "Warning: Could not get file type for {}: {}",
                    path.display(),
                    err
                );
                continue;
            }
        };

        raw.push((name, path, is_dir));
    }

    // Directories first, then name order within each partition
    raw.sort_by(|a, b| b.2.cmp(&a.2).then_with(|| a.0.cmp(&b.0)));

    let nodes = raw
        .into_iter()
        .map(|(name, path, is_dir)| {
            if is_dir {
                let category = classify_dir(&name);
                let (own, context) = if config.environments {
                    let own = cache.get_or_detect(&path);
                    let context = PropagatedContext::propagate(&own, inherited);
                    (own, context)
                } else {
                    (EnvironmentSet::new(), PropagatedContext::root())
                };
                TreeNode::Directory(DirectoryNode {
                    entry: DirectoryEntry { path, name },
                    category,
                    own,
                    context,
                })
            } else {
                let category = classify_file(&name);
                let extension = path
                    .extension()
                    .map(|e| e.to_string_lossy().to_lowercase());
                TreeNode::File(FileNode {
                    entry: DirectoryEntry { path, name },
                    extension,
                    category,
                    context: inherited.clone(),
                })
            }
        })
        .collect();

    Ok(nodes)
}

/// Listing entry point for hosts: enumeration failures degrade to an empty
/// result plus a warning, never an error.
pub fn list(
    dir: &Path,
    inherited: &PropagatedContext,
    cache: &mut EnvironmentCache,
    config: &Config,
) -> Vec<TreeNode> {
    match children(dir, inherited, cache, config) {
        Ok(nodes) => nodes,
        Err(err) => {
            eprintln!("Warning: Failed to read directory {}: {}", dir.display(), err);
            Vec::new()
        }
    }
}
