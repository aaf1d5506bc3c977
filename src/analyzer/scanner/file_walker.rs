use ignore::{DirEntry, WalkBuilder};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::constants::analysis::{DEFAULT_MAX_DEPTH, README_CANDIDATES, STRUCTURE_SKIP_DIRS};
use crate::types::{decode_lossy, log_filter_error};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// Renders the directory tree of a checkout and finds its README.
///
/// The root must be an existing directory; the walker never creates,
/// modifies or deletes anything beneath it.
pub struct FileWalker {
    root: PathBuf,
    max_depth: usize,
}

impl FileWalker {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Render the tree as text: the root name, then one line per entry.
    ///
    /// Entries are sorted by name. Hidden entries and the skip-listed
    /// directories are left out entirely. Directories at depth `max_depth`
    /// are listed but not expanded.
    pub fn render_structure(&self) -> String {
        let mut lines = vec![root_label(&self.root)];
        self.render_dir(&self.root, "", 0, &mut lines);
        lines.join("\n")
    }

    fn render_dir(&self, dir: &Path, prefix: &str, depth: usize, lines: &mut Vec<String>) {
        if depth > self.max_depth {
            return;
        }

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Skipping unreadable directory {}: {}", dir.display(), e);
                return;
            }
        };

        let mut items: Vec<(String, PathBuf)> = entries
            .filter_map(|e| log_filter_error(e, "reading directory entry"))
            .map(|e| (e.file_name().to_string_lossy().into_owned(), e.path()))
            .filter(|(name, _)| is_listed(name))
            .collect();
        items.sort_by(|a, b| a.0.cmp(&b.0));

        let count = items.len();
        for (i, (name, path)) in items.into_iter().enumerate() {
            let is_last = i + 1 == count;
            let connector = if is_last { LAST_BRANCH } else { BRANCH };
            lines.push(format!("{}{}{}", prefix, connector, name));

            if path.is_dir() && depth < self.max_depth {
                let next_prefix = format!("{}{}", prefix, if is_last { SPACE } else { PIPE });
                self.render_dir(&path, &next_prefix, depth + 1, lines);
            }
        }
    }

    /// Content of the first README variant present at the root, read verbatim.
    pub fn find_readme(&self) -> Option<String> {
        README_CANDIDATES
            .iter()
            .map(|name| self.root.join(name))
            .filter(|path| path.exists())
            .find_map(|path| read_text(&path))
    }
}

fn is_listed(name: &str) -> bool {
    !name.starts_with('.') && !STRUCTURE_SKIP_DIRS.contains(&name)
}

fn root_label(root: &Path) -> String {
    if let Some(name) = root.file_name() {
        return name.to_string_lossy().into_owned();
    }
    // "." and similar have no file name until canonicalized
    root.canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| root.display().to_string())
}

/// Read a file as text, substituting undecodable bytes.
///
/// Returns `None` when the file cannot be read; the handle is closed before
/// this returns on every path.
pub fn read_text(path: &Path) -> Option<String> {
    match fs::read(path) {
        Ok(bytes) => Some(decode_lossy(bytes)),
        Err(e) => {
            debug!("Could not read {}: {}", path.display(), e);
            None
        }
    }
}

/// Every entry below `root` (root excluded), in name order.
///
/// Hidden files and ignore files are not filtered and symlinks are not
/// followed, so this sees the whole checkout.
pub fn walk_all<P: AsRef<Path>>(root: P) -> impl Iterator<Item = DirEntry> {
    WalkBuilder::new(root)
        .standard_filters(false)
        .hidden(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build()
        .filter_map(|e| log_filter_error(e, "walking repository"))
        .filter(|entry| entry.depth() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "x").unwrap();
    }

    #[test]
    fn test_render_structure_tree_connectors() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "src/main.rs");
        touch(temp.path(), "src/lib.rs");
        touch(temp.path(), "Cargo.toml");

        let tree = FileWalker::new(temp.path()).render_structure();
        let lines: Vec<&str> = tree.lines().collect();

        assert_eq!(
            lines[0],
            temp.path().file_name().unwrap().to_string_lossy()
        );
        assert_eq!(
            &lines[1..],
            &[
                "├── Cargo.toml",
                "└── src",
                "    ├── lib.rs",
                "    └── main.rs",
            ]
        );
    }

    #[test]
    fn test_render_structure_continuation_prefix() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a/inner.txt");
        touch(temp.path(), "b.txt");

        let tree = FileWalker::new(temp.path()).render_structure();
        assert!(tree.contains("├── a\n│   └── inner.txt\n└── b.txt"));
    }

    #[test]
    fn test_render_structure_skips_hidden_and_denylisted() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), ".git/config");
        touch(temp.path(), ".env");
        touch(temp.path(), "node_modules/left-pad/index.js");
        touch(temp.path(), "__pycache__/a.pyc");
        touch(temp.path(), "venv/bin/python");
        touch(temp.path(), "env/bin/python");
        touch(temp.path(), "app.py");

        let tree = FileWalker::new(temp.path()).render_structure();
        let lines: Vec<&str> = tree.lines().skip(1).collect();
        assert_eq!(lines, vec!["└── app.py"]);
    }

    #[test]
    fn test_render_structure_depth_zero_lists_children_only() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "one/nested/deep.txt");
        touch(temp.path(), "two/file.txt");
        touch(temp.path(), "three.txt");

        let tree = FileWalker::new(temp.path())
            .with_max_depth(0)
            .render_structure();
        let lines: Vec<&str> = tree.lines().skip(1).collect();

        assert_eq!(lines, vec!["├── one", "├── three.txt", "└── two"]);
        assert_eq!(lines.iter().filter(|l| l.contains(LAST_BRANCH)).count(), 1);
    }

    #[test]
    fn test_render_structure_cutoff_directories_listed_not_expanded() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a/b/c/d/e.txt");

        let tree = FileWalker::new(temp.path())
            .with_max_depth(1)
            .render_structure();

        let lines: Vec<&str> = tree.lines().skip(1).collect();
        assert_eq!(lines, vec!["└── a", "    └── b"]);
    }

    #[test]
    fn test_render_structure_is_idempotent() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "x/y.txt");
        let walker = FileWalker::new(temp.path());
        assert_eq!(walker.render_structure(), walker.render_structure());
    }

    #[test]
    fn test_find_readme_priority() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("README.txt"), "txt").unwrap();
        fs::write(temp.path().join("README.md"), "md").unwrap();

        let readme = FileWalker::new(temp.path()).find_readme();
        assert_eq!(readme.as_deref(), Some("md"));
    }

    #[test]
    fn test_find_readme_absent() {
        let temp = TempDir::new().unwrap();
        assert!(FileWalker::new(temp.path()).find_readme().is_none());
    }

    #[test]
    fn test_find_readme_lossy_decoding() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("README"), [b'h', b'i', 0xfe]).unwrap();

        let readme = FileWalker::new(temp.path()).find_readme().unwrap();
        assert!(readme.starts_with("hi"));
    }

    #[test]
    fn test_walk_all_sees_hidden_entries() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), ".hidden/a.py");
        touch(temp.path(), "b.go");

        let names: Vec<String> = walk_all(temp.path())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        assert!(names.contains(&".hidden".to_string()));
        assert!(names.contains(&"a.py".to_string()));
        assert!(names.contains(&"b.go".to_string()));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;
        use std::collections::BTreeSet;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(32))]

            #[test]
            fn one_line_per_entry_and_single_last_connector(
                names in proptest::collection::btree_set("[a-z]{1,10}", 1..12),
                nested in 0usize..4,
            ) {
                let temp = TempDir::new().unwrap();
                let names: BTreeSet<String> = names
                    .into_iter()
                    .filter(|n| is_listed(n))
                    .collect();
                prop_assume!(!names.is_empty());
                for name in &names {
                    touch(temp.path(), &format!("{}.txt", name));
                }
                for i in 0..nested {
                    touch(temp.path(), &format!("zz_dir/f{}.txt", i));
                }

                let tree = FileWalker::new(temp.path()).render_structure();
                let top: Vec<&str> = tree
                    .lines()
                    .skip(1)
                    .filter(|l| l.starts_with(BRANCH) || l.starts_with(LAST_BRANCH))
                    .collect();

                let expected_top = names.len() + usize::from(nested > 0);
                prop_assert_eq!(top.len(), expected_top);
                prop_assert_eq!(tree.lines().count(), 1 + expected_top + nested);
                prop_assert!(top.last().unwrap().starts_with(LAST_BRANCH));
                prop_assert_eq!(
                    top.iter().filter(|l| l.starts_with(LAST_BRANCH)).count(),
                    1
                );
            }
        }
    }
}
