// Definition of the virtual file tree. The tree is fixed at construction and
// never mutated afterwards; commands that claim to create or remove entries
// report success without touching it. Directories own their children by name,
// files own their content directly.

use std::collections::BTreeMap;

use crate::errors::{Result, TerminalError, TerminalErrorType};

#[derive(Clone, Debug)]
pub(crate) enum VfsObject {
    File(VfsFile),
    Directory(VfsDirectory),
}

impl VfsObject {
    pub(crate) fn is_directory(&self) -> bool {
        matches!(self, VfsObject::Directory(_))
    }
}

#[derive(Clone, Debug)]
pub(crate) struct VfsFile {
    pub(crate) content: String,
}

#[derive(Clone, Debug)]
pub(crate) struct VfsDirectory {
    children: BTreeMap<String, VfsObject>,
}

impl VfsDirectory {
    pub(crate) fn children(&self) -> impl Iterator<Item = (&String, &VfsObject)> {
        self.children.iter()
    }

    fn child(&self, name: &str) -> Option<&VfsObject> {
        self.children.get(name)
    }
}

pub(crate) struct Vfs {
    root: VfsDirectory,
}

impl Vfs {
    pub(crate) fn new(root: VfsDirectory) -> Vfs {
        Vfs { root }
    }

    /// Walk from the root through each `/`-delimited segment of `path`. Every
    /// segment must name an existing directory; anything else is a lookup
    /// error carrying the full path the caller asked for.
    pub(crate) fn resolve_dir(&self, path: &str) -> Result<&VfsDirectory> {
        let mut current = &self.root;
        for segment in split_segments(path) {
            current = match current.child(segment) {
                Some(VfsObject::Directory(d)) => d,
                _ => {
                    return Err(TerminalError::new(
                        TerminalErrorType::NotFound,
                        format!("Directory not found: {}", path),
                    ))
                }
            };
        }
        Ok(current)
    }

    /// Read a file that is a direct child of the directory at `dir_path`.
    /// The filename is never treated as a path of its own. A dangling
    /// `dir_path` reports the file as missing, not the directory.
    pub(crate) fn read_file(&self, dir_path: &str, filename: &str) -> Result<&str> {
        let not_found = || {
            TerminalError::new(
                TerminalErrorType::NotFound,
                format!("File not found: {}", filename),
            )
        };
        let dir = self.resolve_dir(dir_path).map_err(|_| not_found())?;
        match dir.child(filename) {
            Some(VfsObject::File(f)) => Ok(&f.content),
            _ => Err(not_found()),
        }
    }
}

pub(crate) fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

fn file(content: &str) -> VfsObject {
    VfsObject::File(VfsFile {
        content: content.to_string(),
    })
}

fn directory(children: Vec<(&str, VfsObject)>) -> VfsObject {
    let children = children
        .into_iter()
        .map(|(name, child)| (name.to_string(), child))
        .collect();
    VfsObject::Directory(VfsDirectory { children })
}

/// The tree every terminal session starts with. Mirrors the dashboard's
/// simulated home directory.
pub(crate) fn default_tree() -> Vfs {
    let root = directory(vec![(
        "home",
        directory(vec![(
            "user",
            directory(vec![
                (
                    "documents",
                    directory(vec![(
                        "health-report.txt",
                        file("Latest health metrics and analysis..."),
                    )]),
                ),
                (
                    "config.json",
                    file("{\n  \"theme\": \"dark\",\n  \"notifications\": true\n}"),
                ),
            ]),
        )]),
    )]);
    match root {
        VfsObject::Directory(root) => Vfs::new(root),
        VfsObject::File(_) => unreachable!(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_nested_directories() {
        let vfs = default_tree();
        let dir = vfs.resolve_dir("/home/user/documents").unwrap();
        let names: Vec<&String> = dir.children().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["health-report.txt"]);
    }

    #[test]
    fn resolve_ignores_repeated_slashes() {
        let vfs = default_tree();
        assert!(vfs.resolve_dir("//home//user").is_ok());
    }

    #[test]
    fn missing_segment_is_a_lookup_error() {
        let vfs = default_tree();
        let err = vfs.resolve_dir("/nonexistent").unwrap_err();
        assert_eq!(err.error_type, TerminalErrorType::NotFound);
        assert_eq!(err.message, "Directory not found: /nonexistent");
    }

    #[test]
    fn file_segment_mid_path_is_a_lookup_error() {
        let vfs = default_tree();
        let err = vfs.resolve_dir("/home/user/config.json").unwrap_err();
        assert_eq!(err.message, "Directory not found: /home/user/config.json");
    }

    #[test]
    fn reads_file_content() {
        let vfs = default_tree();
        let content = vfs.read_file("/home/user", "config.json").unwrap();
        assert_eq!(content, "{\n  \"theme\": \"dark\",\n  \"notifications\": true\n}");
    }

    #[test]
    fn read_rejects_directories() {
        let vfs = default_tree();
        let err = vfs.read_file("/home/user", "documents").unwrap_err();
        assert_eq!(err.message, "File not found: documents");
    }

    #[test]
    fn read_through_dangling_directory_names_the_file() {
        let vfs = default_tree();
        let err = vfs.read_file("/home/user/ghost", "config.json").unwrap_err();
        assert_eq!(err.message, "File not found: config.json");
    }
}
