//! File System Types
//!
//! Core node types for the inode tree: the polymorphic `Content` payload,
//! the `Inode` identity wrapper, and the error type shared by every tree
//! operation.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Name of the self entry every directory carries.
pub const DOT: &str = ".";

/// Name of the parent entry every directory carries.
pub const DOT_DOT: &str = "..";

/// Returns true for `.` and `..`.
pub fn is_reserved(name: &str) -> bool {
    name == DOT || name == DOT_DOT
}

/// File system errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("{path}: is a directory")]
    NotAFile { path: String },

    #[error("{path}: not a directory")]
    NotADirectory { path: String },

    #[error("{path}: no such file or directory")]
    NoSuchPath { path: String },

    #[error("{path}: no such entry")]
    NoSuchEntry { path: String },

    #[error("{path}: file exists")]
    AlreadyExists { path: String },

    #[error("{path}: is a directory")]
    NameIsDirectory { path: String },

    #[error("{path}: directory not empty")]
    DirectoryNotEmpty { path: String },

    #[error("{path}: invalid name")]
    InvalidName { path: String },
}

impl FsError {
    /// Replace the path the error refers to.
    ///
    /// Content operations do not know the name their node lives under, so
    /// callers attach it once they do.
    pub fn on(self, path: impl Into<String>) -> Self {
        let path = path.into();
        match self {
            FsError::NotAFile { .. } => FsError::NotAFile { path },
            FsError::NotADirectory { .. } => FsError::NotADirectory { path },
            FsError::NoSuchPath { .. } => FsError::NoSuchPath { path },
            FsError::NoSuchEntry { .. } => FsError::NoSuchEntry { path },
            FsError::AlreadyExists { .. } => FsError::AlreadyExists { path },
            FsError::NameIsDirectory { .. } => FsError::NameIsDirectory { path },
            FsError::DirectoryNotEmpty { .. } => FsError::DirectoryNotEmpty { path },
            FsError::InvalidName { .. } => FsError::InvalidName { path },
        }
    }

    fn not_a_file() -> Self {
        FsError::NotAFile { path: String::new() }
    }

    fn not_a_directory() -> Self {
        FsError::NotADirectory { path: String::new() }
    }
}

/// Node kind discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    Plain,
    Directory,
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileType::Plain => write!(f, "PLAIN_TYPE"),
            FileType::Directory => write!(f, "DIRECTORY_TYPE"),
        }
    }
}

/// Handle to an inode slot in an [`InodeTable`](super::InodeTable).
///
/// Handles are plain indices: holding one does not keep the inode alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InodeRef(pub(crate) usize);

/// Textual file content, stored as a sequence of words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlainFile {
    words: Vec<String>,
}

impl PlainFile {
    /// Sum of word lengths plus one separator between each pair of words.
    pub fn size(&self) -> usize {
        if self.words.is_empty() {
            return 0;
        }
        let letters: usize = self.words.iter().map(String::len).sum();
        letters + self.words.len() - 1
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

/// Name table of a directory, including its `.` and `..` entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    entries: BTreeMap<String, InodeRef>,
}

impl Directory {
    /// A directory whose `.` points at `this` and `..` at `parent`.
    pub(crate) fn new(this: InodeRef, parent: InodeRef) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(DOT.to_string(), this);
        entries.insert(DOT_DOT.to_string(), parent);
        Self { entries }
    }

    pub fn lookup(&self, name: &str) -> Option<InodeRef> {
        self.entries.get(name).copied()
    }

    /// Number of entries, `.` and `..` included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when only the reserved entries remain.
    pub fn has_no_children(&self) -> bool {
        self.entries.keys().all(|name| is_reserved(name))
    }

    /// All entries sorted by name, `.` and `..` included.
    pub fn list(&self) -> Entries<'_> {
        Entries { inner: self.entries.iter() }
    }

    /// Entries this directory owns, in name order.
    pub fn children(&self) -> impl Iterator<Item = (&str, InodeRef)> + Clone + '_ {
        self.list().filter(|(name, _)| !is_reserved(name))
    }

    pub(crate) fn insert(&mut self, name: &str, inode: InodeRef) {
        self.entries.insert(name.to_string(), inode);
    }

    pub(crate) fn detach(&mut self, name: &str) -> Option<InodeRef> {
        self.entries.remove(name)
    }
}

/// Sorted, restartable listing of a directory.
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    inner: btree_map::Iter<'a, String, InodeRef>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (&'a str, InodeRef);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(name, inode)| (name.as_str(), *inode))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Entries<'_> {}

/// Polymorphic payload of an inode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Plain(PlainFile),
    Directory(Directory),
}

impl Content {
    pub fn kind(&self) -> FileType {
        match self {
            Content::Plain(_) => FileType::Plain,
            Content::Directory(_) => FileType::Directory,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Content::Directory(_))
    }

    /// Byte count for a file, entry count for a directory.
    pub fn size(&self) -> usize {
        match self {
            Content::Plain(file) => file.size(),
            Content::Directory(dir) => dir.len(),
        }
    }

    pub fn read(&self) -> Result<&[String], FsError> {
        match self {
            Content::Plain(file) => Ok(file.words()),
            Content::Directory(_) => Err(FsError::not_a_file()),
        }
    }

    /// Replace the file's words wholesale.
    pub fn write(&mut self, words: Vec<String>) -> Result<(), FsError> {
        match self {
            Content::Plain(file) => {
                file.words = words;
                Ok(())
            }
            Content::Directory(_) => Err(FsError::not_a_file()),
        }
    }

    pub fn lookup(&self, name: &str) -> Result<Option<InodeRef>, FsError> {
        Ok(self.as_directory()?.lookup(name))
    }

    pub fn list(&self) -> Result<Entries<'_>, FsError> {
        Ok(self.as_directory()?.list())
    }

    pub fn as_directory(&self) -> Result<&Directory, FsError> {
        match self {
            Content::Directory(dir) => Ok(dir),
            Content::Plain(_) => Err(FsError::not_a_directory()),
        }
    }

    pub(crate) fn as_directory_mut(&mut self) -> Result<&mut Directory, FsError> {
        match self {
            Content::Directory(dir) => Ok(dir),
            Content::Plain(_) => Err(FsError::not_a_directory()),
        }
    }
}

/// Identity wrapper: display number plus owned content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inode {
    nr: u64,
    content: Content,
}

impl Inode {
    pub(crate) fn new(nr: u64, content: Content) -> Self {
        Self { nr, content }
    }

    /// Inode number, unique for the lifetime of the table.
    pub fn nr(&self) -> u64 {
        self.nr
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub(crate) fn content_mut(&mut self) -> &mut Content {
        &mut self.content
    }
}

// ============================================================================
// Tests
// ============================================================================
