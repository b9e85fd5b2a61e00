//! Static filename/extension classification tables.

use std::path::Path;

/// Classification result for a single entry: an icon identifier for host UIs
/// and an emoji marker for text rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub icon: &'static str,
    pub marker: &'static str,
}

const fn cat(icon: &'static str, marker: &'static str) -> Category {
    Category { icon, marker }
}

/// Generic fallback for files that match no table entry
pub const UNKNOWN_FILE: Category = cat("file", "📄");

/// Generic folder category for directories that match no naming rule
pub const FOLDER: Category = cat("folder", "📂");

/// Special filenames checked before any extension lookup (manifests, lock
/// files, project metadata, well-known dotfiles)
const SPECIAL_FILES: &[(&str, Category)] = &[
    ("package.json", cat("package", "📦")),
    ("package-lock.json", cat("lockfile", "🔒")),
    ("pyproject.toml", cat("python", "🐍")),
    ("poetry.lock", cat("lockfile", "🔒")),
    ("Cargo.toml", cat("config", "⚙️")),
    ("Cargo.lock", cat("lockfile", "🔒")),
    (".gitignore", cat("gitignore", "👁️")),
    (".env", cat("config", "⚙️")),
];

/// Extension lookup, grouped by file family. Extensions are matched after
/// lower-casing, so the table only carries lower-case keys.
const EXTENSIONS: &[(&str, Category)] = &[
    // Programming languages
    ("py", cat("python", "🐍")),
    ("rs", cat("rust", "🦀")),
    ("js", cat("javascript", "📜")),
    ("jsx", cat("react", "⚛️")),
    ("ts", cat("typescript", "💠")),
    ("tsx", cat("react", "⚛️")),
    ("rb", cat("ruby", "💎")),
    ("go", cat("go", "🐹")),
    ("java", cat("java", "☕")),
    ("php", cat("php", "🐘")),
    // Web
    ("html", cat("web", "🌐")),
    ("css", cat("style", "🎨")),
    // Data
    ("json", cat("data", "📋")),
    ("yaml", cat("yaml", "📋")),
    ("yml", cat("yaml", "📋")),
    ("sql", cat("database", "💾")),
    ("csv", cat("table", "📊")),
    // Configuration
    ("toml", cat("config", "⚙️")),
    ("lock", cat("lockfile", "🔒")),
    // Documentation
    ("md", cat("docs", "📝")),
    ("txt", cat("docs", "📝")),
    ("rst", cat("docs", "📝")),
    // Images
    ("png", cat("image", "🖼️")),
    ("jpg", cat("image", "🖼️")),
    ("jpeg", cat("image", "🖼️")),
    ("gif", cat("image", "🖼️")),
    ("svg", cat("image", "🖼️")),
];

/// Directory naming rules. Matching is an unanchored substring check against
/// the lower-cased basename, so "testament" matches the "test" rule. That
/// looseness is intentional and preserved from the original behavior.
const DIR_RULES: &[(&str, Category)] = &[
    ("source", cat("folder-package", "📦")),
    ("src", cat("folder-package", "📦")),
    ("test", cat("folder-test", "🧪")),
    ("doc", cat("folder-docs", "📚")),
    ("images", cat("folder-assets", "🖼️")),
    ("img", cat("folder-assets", "🖼️")),
    ("data", cat("folder-data", "📊")),
    ("build", cat("folder-build", "🏗️")),
    ("dist", cat("folder-build", "🏗️")),
];

/// Classify a file by its basename: special filenames first, then the
/// case-insensitive extension table, then the generic file fallback.
pub fn classify_file(name: &str) -> Category {
    for (special, category) in SPECIAL_FILES {
        if name == *special {
            return *category;
        }
    }

    if let Some(ext) = Path::new(name).extension().and_then(|e| e.to_str()) {
        let ext = ext.to_lowercase();
        for (known, category) in EXTENSIONS {
            if ext == *known {
                return *category;
            }
        }
    }

    UNKNOWN_FILE
}

/// Classify a directory by substring rules on its basename
pub fn classify_dir(name: &str) -> Category {
    let name = name.to_lowercase();

    for (needle, category) in DIR_RULES {
        if name.contains(needle) {
            return *category;
        }
    }

    FOLDER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_files_beat_extensions() {
        // package.json would otherwise classify as generic JSON data
        assert_eq!(classify_file("package.json").icon, "package");
        assert_eq!(classify_file("other.json").icon, "data");
        assert_eq!(classify_file("pyproject.toml").icon, "python");
        assert_eq!(classify_file("config.toml").icon, "config");
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        assert_eq!(classify_file("main.py").marker, "🐍");
        assert_eq!(classify_file("MAIN.PY").marker, "🐍");
        assert_eq!(classify_file("photo.JPG").icon, "image");
    }

    #[test]
    fn test_unknown_file_fallback() {
        assert_eq!(classify_file("mystery.xyz"), UNKNOWN_FILE);
        assert_eq!(classify_file("no_extension"), UNKNOWN_FILE);
    }

    #[test]
    fn test_dotfile_has_no_extension() {
        // .gitignore is a special file; other dotfiles fall through
        assert_eq!(classify_file(".gitignore").icon, "gitignore");
        assert_eq!(classify_file(".bashrc"), UNKNOWN_FILE);
    }

    #[test]
    fn test_directory_rules() {
        assert_eq!(classify_dir("src").icon, "folder-package");
        assert_eq!(classify_dir("tests").icon, "folder-test");
        assert_eq!(classify_dir("docs").icon, "folder-docs");
        assert_eq!(classify_dir("images").icon, "folder-assets");
        assert_eq!(classify_dir("data").icon, "folder-data");
        assert_eq!(classify_dir("dist").icon, "folder-build");
        assert_eq!(classify_dir("misc"), FOLDER);
    }

    #[test]
    fn test_directory_substring_matching_is_loose() {
        // Unanchored substring rules, kept for compatibility
        assert_eq!(classify_dir("testament").icon, "folder-test");
        assert_eq!(classify_dir("database").icon, "folder-data");
        assert_eq!(classify_dir("MySrcTree").icon, "folder-package");
    }
}
