//! Environment detection, caching, and power propagation.
//!
//! A directory's "environment" is the language/runtime ecosystem its marker
//! files indicate (a `package.json` means node, a `Gemfile` means ruby).
//! Each detection carries an integer power level that decays by one per
//! directory level as it is inherited by descendants.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

/// Ecosystems the detector knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Ecosystem {
    Python,
    Node,
    Docker,
    Ruby,
    Go,
    Java,
    Php,
}

impl Ecosystem {
    pub fn id(&self) -> &'static str {
        match self {
            Ecosystem::Python => "python",
            Ecosystem::Node => "node",
            Ecosystem::Docker => "docker",
            Ecosystem::Ruby => "ruby",
            Ecosystem::Go => "go",
            Ecosystem::Java => "java",
            Ecosystem::Php => "php",
        }
    }
}

/// One detected environment: the ecosystem, which marker variant triggered it,
/// a display glyph, and the power level fixed at detection time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvironmentInfo {
    pub ecosystem: Ecosystem,
    pub variant: &'static str,
    pub glyph: &'static str,
    pub power: u8,
}

const fn env(ecosystem: Ecosystem, variant: &'static str, glyph: &'static str, power: u8) -> EnvironmentInfo {
    EnvironmentInfo {
        ecosystem,
        variant,
        glyph,
        power,
    }
}

/// At most one environment per ecosystem per directory. BTreeMap keeps
/// iteration order deterministic for rendering.
pub type EnvironmentSet = BTreeMap<Ecosystem, EnvironmentInfo>;

/// Read a file's content for a marker check. Unreadable files count as "no
/// content": a failed check must never abort detection of other ecosystems.
fn read_marker(path: &Path) -> Option<String> {
    fs::read_to_string(path).ok()
}

/// Inspect a single directory's immediate contents for ecosystem markers.
/// Never recurses and never returns an error; absence of evidence is
/// indistinguishable from absence of the ecosystem.
pub fn detect(dir: &Path) -> EnvironmentSet {
    let mut detected = EnvironmentSet::new();
    let mut add = |info: EnvironmentInfo| {
        detected.insert(info.ecosystem, info);
    };

    // Python: a poetry manifest wins over plain venv markers
    let poetry = read_marker(&dir.join("pyproject.toml"))
        .map(|content| content.contains("[tool.poetry]"))
        .unwrap_or(false);
    if poetry {
        add(env(Ecosystem::Python, "poetry", "🐍", 3));
    } else if ["venv", "env", ".venv"].iter().any(|d| dir.join(d).is_dir())
        || dir.join("requirements.txt").is_file()
    {
        add(env(Ecosystem::Python, "venv", "🐍", 3));
    }

    if dir.join("package.json").is_file() {
        add(env(Ecosystem::Node, "npm", "📦", 3));
    }

    if dir.join("Dockerfile").is_file() {
        add(env(Ecosystem::Docker, "dockerfile", "🐳", 4));
    } else if [
        "docker-compose.yml",
        "docker-compose.yaml",
        "compose.yml",
        "compose.yaml",
    ]
    .iter()
    .any(|f| dir.join(f).is_file())
    {
        add(env(Ecosystem::Docker, "compose", "🐳", 4));
    }

    if dir.join("Gemfile").is_file() {
        add(env(Ecosystem::Ruby, "bundler", "💎", 2));
    }

    if dir.join("go.mod").is_file() {
        add(env(Ecosystem::Go, "modules", "🐹", 2));
    }

    if dir.join("pom.xml").is_file() {
        add(env(Ecosystem::Java, "maven", "☕", 3));
    } else if dir.join("build.gradle").is_file() || dir.join("build.gradle.kts").is_file() {
        add(env(Ecosystem::Java, "gradle", "☕", 3));
    }

    if dir.join("composer.json").is_file() {
        add(env(Ecosystem::Php, "composer", "🐘", 2));
    }

    detected
}

/// Memo of detection results keyed by directory path.
///
/// Created by the host and passed `&mut` into every traversal so that two
/// branches of one pass always share the same entries. There is no TTL, no
/// size bound, and no existence re-validation: a stale entry persists until
/// the host calls `invalidate`.
#[derive(Debug, Default)]
pub struct EnvironmentCache {
    entries: HashMap<PathBuf, EnvironmentSet>,
}

impl EnvironmentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached set for a directory, detecting on first access.
    /// Returns a clone so callers cannot mutate the stored entry.
    pub fn get_or_detect(&mut self, dir: &Path) -> EnvironmentSet {
        if let Some(set) = self.entries.get(dir) {
            return set.clone();
        }
        let set = detect(dir);
        self.entries.insert(dir.to_path_buf(), set.clone());
        set
    }

    /// Evict one path, or everything when no path is given
    pub fn invalidate(&mut self, path: Option<&Path>) {
        match path {
            Some(p) => {
                self.entries.remove(p);
            }
            None => self.entries.clear(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Merged view of a directory's own and inherited environments, with the
/// effective power level derived for this depth.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropagatedContext {
    pub environments: EnvironmentSet,
    pub power: u8,
}

impl PropagatedContext {
    /// Empty context for a traversal root
    pub fn root() -> Self {
        Self::default()
    }

    /// Combine a directory's own detections with its parent's context.
    ///
    /// Own entries overwrite inherited entries for the same ecosystem. The
    /// effective power is the strongest own detection when there is one;
    /// otherwise inherited power decays by exactly one per level, flooring
    /// at zero.
    pub fn propagate(own: &EnvironmentSet, parent: &PropagatedContext) -> Self {
        let mut environments = parent.environments.clone();
        for info in own.values() {
            environments.insert(info.ecosystem, *info);
        }

        let power = if !own.is_empty() {
            own.values().map(|info| info.power).max().unwrap_or(0)
        } else if !parent.environments.is_empty() {
            parent.power.saturating_sub(1)
        } else {
            0
        };

        PropagatedContext { environments, power }
    }
}
