//! SeesTrees - Annotated Project Tree Viewer
//!
//! SeesTrees builds a display model of a project's directory tree: every entry
//! is classified by type and decorated with a category marker, and directories
//! are tagged with the language/runtime environments their marker files
//! indicate (a `package.json` means node, a `Gemfile` means ruby). An
//! environment's power level decays by one per directory level as it
//! propagates to descendants, so deeply nested folders show a fading signal.
//!
//! Two presentation layers consume the same model: `render_full_tree`
//! produces a complete connector-drawn text dump, and `TreeDataProvider`
//! serves host UIs one expandable level at a time.

pub mod classify;
pub mod config;
pub mod envs;
pub mod ignore;
pub mod lister;
pub mod render;

// Re-export commonly used items
pub use classify::{classify_dir, classify_file, Category};
pub use config::Config;
pub use envs::{
    detect, Ecosystem, EnvironmentCache, EnvironmentInfo, EnvironmentSet, PropagatedContext,
};
pub use ignore::{default_patterns, should_ignore};
pub use lister::{list, DirectoryEntry, DirectoryNode, FileNode, TreeNode};
pub use render::{render_full_tree, TreeDataProvider, TreeItem};
