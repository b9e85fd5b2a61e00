//! Tree presentation: the full-dump text renderer and the interactive
//! one-level data provider. Both consume the same listing model.

use crate::config::Config;
use crate::envs::{EnvironmentCache, PropagatedContext};
use crate::lister::{self, TreeNode};
use colored::{Color, Colorize};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Context for a directory entered at the top of a traversal: its own
/// detections propagated over an empty parent
fn root_level_context(
    dir: &Path,
    cache: &mut EnvironmentCache,
    config: &Config,
) -> PropagatedContext {
    if !config.environments {
        return PropagatedContext::root();
    }
    let own = cache.get_or_detect(dir);
    PropagatedContext::propagate(&own, &PropagatedContext::root())
}

const CONNECTOR: &str = "├── ";
const CONNECTOR_LAST: &str = "└── ";
const PREFIX_CONTINUE: &str = "│   ";
const PREFIX_BLANK: &str = "    ";

/// Display color for a category icon identifier, translated from the
/// original ANSI table
fn color_for(icon: &str) -> Option<Color> {
    match icon {
        "folder" | "folder-package" | "folder-test" | "folder-docs" | "folder-assets"
        | "folder-data" | "folder-build" => Some(Color::Blue),
        "python" => Some(Color::Green),
        "config" | "gitignore" => Some(Color::Yellow),
        "docs" => Some(Color::Cyan),
        "data" => Some(Color::Magenta),
        "lockfile" => Some(Color::Red),
        "image" => Some(Color::TrueColor {
            r: 255,
            g: 135,
            b: 215,
        }),
        "package" => Some(Color::TrueColor {
            r: 255,
            g: 135,
            b: 0,
        }),
        "web" => Some(Color::TrueColor { r: 255, g: 95, b: 0 }),
        "style" => Some(Color::TrueColor {
            r: 0,
            g: 175,
            b: 255,
        }),
        "javascript" | "react" => Some(Color::TrueColor {
            r: 255,
            g: 215,
            b: 0,
        }),
        "typescript" => Some(Color::TrueColor {
            r: 0,
            g: 215,
            b: 255,
        }),
        "yaml" => Some(Color::TrueColor {
            r: 215,
            g: 135,
            b: 255,
        }),
        "database" => Some(Color::TrueColor {
            r: 175,
            g: 175,
            b: 255,
        }),
        "table" => Some(Color::TrueColor {
            r: 135,
            g: 175,
            b: 95,
        }),
        _ => None,
    }
}

/// Environment decoration appended after the name: own-detection glyphs for
/// directories, plus a power indicator whenever the context carries any
fn environment_suffix(node: &TreeNode, config: &Config) -> String {
    if !config.environments {
        return String::new();
    }

    let mut suffix = String::new();
    if let TreeNode::Directory(d) = node {
        for info in d.own.values() {
            suffix.push(' ');
            suffix.push_str(info.glyph);
        }
    }
    let power = node.context().power;
    if power > 0 {
        suffix.push_str(&format!(" ⚡{}", power));
    }
    suffix
}

/// Format one node as marker + colored name + environment decoration
fn format_node(node: &TreeNode, config: &Config) -> String {
    let category = node.category();
    let name = match color_for(category.icon) {
        Some(color) if node.is_dir() => node.name().color(color).bold().to_string(),
        Some(color) => node.name().color(color).to_string(),
        None => node.name().to_string(),
    };
    format!(
        "{} {}{}",
        category.marker,
        name,
        environment_suffix(node, config)
    )
}

/// Plain-text label for host UIs: marker + name + environment decoration,
/// with no color escapes
fn plain_label(node: &TreeNode, config: &Config) -> String {
    format!(
        "{} {}{}",
        node.category().marker,
        node.name(),
        environment_suffix(node, config)
    )
}

fn render_nodes(
    nodes: Vec<TreeNode>,
    prefix: &str,
    cache: &mut EnvironmentCache,
    config: &Config,
    lines: &mut Vec<String>,
) {
    let count = nodes.len();
    for (index, node) in nodes.into_iter().enumerate() {
        let last = index + 1 == count;
        let connector = if last { CONNECTOR_LAST } else { CONNECTOR };
        lines.push(format!("{}{}{}", prefix, connector, format_node(&node, config)));

        if let TreeNode::Directory(dir) = node {
            let child_prefix = format!(
                "{}{}",
                prefix,
                if last { PREFIX_BLANK } else { PREFIX_CONTINUE }
            );
            match lister::children(&dir.entry.path, &dir.context, cache, config) {
                Ok(children) => render_nodes(children, &child_prefix, cache, config, lines),
                Err(err) => {
                    // Unreadable branch: visible marker, siblings continue
                    lines.push(format!("{}⛔ [cannot read: {}]", child_prefix, err));
                }
            }
        }
    }
}

/// Render the whole tree under `root` as formatted lines.
///
/// Recursion is eager and runs to completion; only an unreadable root is an
/// error. Unreadable branches below the root render a `⛔` marker line and
/// traversal continues with their siblings.
pub fn render_full_tree(
    root: &Path,
    cache: &mut EnvironmentCache,
    config: &Config,
) -> io::Result<Vec<String>> {
    // The root's own detections seed the context its children inherit from
    let root_context = root_level_context(root, cache, config);
    let nodes = lister::children(root, &root_context, cache, config)?;

    let mut lines = Vec::new();
    lines.push(format!("🌳 {}", "Project Structure".blue().bold()));
    lines.push("==================".to_string());
    render_nodes(nodes, "", cache, config, &mut lines);
    Ok(lines)
}

/// One entry handed to a host tree widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeItem {
    pub path: PathBuf,
    pub label: String,
    pub icon: String,
    pub collapsible: bool,
}

/// Interactive one-level-at-a-time listing contract for host UIs.
///
/// Owns the environment cache for its lifetime and remembers each listed
/// subdirectory's propagated context so a later expansion of that
/// subdirectory inherits correctly. `invalidate` drops both and the host
/// re-lists from its roots.
pub struct TreeDataProvider {
    config: Config,
    cache: EnvironmentCache,
    contexts: HashMap<PathBuf, PropagatedContext>,
}

impl TreeDataProvider {
    pub fn new(config: Config) -> Self {
        TreeDataProvider {
            config,
            cache: EnvironmentCache::new(),
            contexts: HashMap::new(),
        }
    }

    /// List one level. A directory never listed before is a view root: its
    /// own detections seed the context its children inherit from.
    pub fn children(&mut self, dir: &Path) -> Vec<TreeItem> {
        let inherited = match self.contexts.get(dir) {
            Some(context) => context.clone(),
            None => root_level_context(dir, &mut self.cache, &self.config),
        };
        let nodes = lister::list(dir, &inherited, &mut self.cache, &self.config);

        nodes
            .into_iter()
            .map(|node| {
                if let TreeNode::Directory(d) = &node {
                    self.contexts
                        .insert(d.entry.path.clone(), d.context.clone());
                }
                TreeItem {
                    path: node.path().to_path_buf(),
                    label: plain_label(&node, &self.config),
                    icon: node.category().icon.to_string(),
                    collapsible: node.is_dir(),
                }
            })
            .collect()
    }

    /// Full refresh: clear the environment cache and the context memo
    pub fn invalidate(&mut self) {
        self.cache.invalidate(None);
        self.contexts.clear();
    }
}
