//! Inode Table
//!
//! Arena that owns every inode of one tree. Directories hold `InodeRef`
//! handles into the arena; only non-reserved entries count as ownership,
//! so `.` and `..` never keep anything alive and never get walked by the
//! recursive operations below.

use std::ops::Index;

use log::{debug, trace};

use super::types::*;

/// Arena of inodes with its own monotonic inode-number counter.
#[derive(Debug, Clone)]
pub struct InodeTable {
    slots: Vec<Option<Inode>>,
    free: Vec<usize>,
    next_nr: u64,
    root: InodeRef,
}

impl InodeTable {
    /// Create a table holding only the root directory, numbered 1.
    pub fn new() -> Self {
        let root = InodeRef(0);
        let content = Content::Directory(Directory::new(root, root));
        let mut table = Self {
            slots: Vec::new(),
            free: Vec::new(),
            next_nr: 1,
            root,
        };
        let allocated = table.alloc(content);
        debug_assert_eq!(allocated, root);
        table
    }

    pub fn root(&self) -> InodeRef {
        self.root
    }

    /// Number of live inodes, root included. Never zero.
    pub fn inode_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn get(&self, inode: InodeRef) -> Option<&Inode> {
        self.slots.get(inode.0).and_then(Option::as_ref)
    }

    pub fn content(&self, inode: InodeRef) -> &Content {
        self[inode].content()
    }

    pub fn lookup(&self, dir: InodeRef, name: &str) -> Result<Option<InodeRef>, FsError> {
        self.content(dir).lookup(name)
    }

    /// Target of the directory's `..` entry. The root is its own parent.
    pub fn parent_of(&self, dir: InodeRef) -> Result<InodeRef, FsError> {
        Ok(self.content(dir).lookup(DOT_DOT)?.unwrap_or(self.root))
    }

    pub fn read(&self, file: InodeRef) -> Result<&[String], FsError> {
        self.content(file).read()
    }

    pub fn write(&mut self, file: InodeRef, words: Vec<String>) -> Result<(), FsError> {
        trace!("write inode {}: {} words", self[file].nr(), words.len());
        self.content_mut(file).write(words)
    }

    /// Create an empty plain file under `name`, or return the file that is
    /// already there.
    pub fn make_file(&mut self, dir: InodeRef, name: &str) -> Result<InodeRef, FsError> {
        validate_name(name)?;
        if let Some(existing) = self.lookup(dir, name)? {
            if self.content(existing).is_directory() {
                return Err(FsError::NameIsDirectory { path: name.to_string() });
            }
            return Ok(existing);
        }
        let file = self.alloc(Content::Plain(PlainFile::default()));
        self.content_mut(dir).as_directory_mut()?.insert(name, file);
        debug!("mkfile {} -> inode {}", name, self[file].nr());
        Ok(file)
    }

    /// Create a new directory under `name` with `.` and `..` wired to itself
    /// and `dir`.
    pub fn make_dir(&mut self, dir: InodeRef, name: &str) -> Result<InodeRef, FsError> {
        validate_name(name)?;
        if self.lookup(dir, name)?.is_some() {
            return Err(FsError::AlreadyExists { path: name.to_string() });
        }
        let child = self.alloc(Content::Directory(Directory::default()));
        *self.content_mut(child) = Content::Directory(Directory::new(child, dir));
        self.content_mut(dir).as_directory_mut()?.insert(name, child);
        debug!("mkdir {} -> inode {}", name, self[child].nr());
        Ok(child)
    }

    /// Remove one entry. Directories must be empty.
    pub fn remove(&mut self, dir: InodeRef, name: &str) -> Result<(), FsError> {
        if is_reserved(name) {
            return Err(FsError::InvalidName { path: name.to_string() });
        }
        let target = self
            .lookup(dir, name)?
            .ok_or_else(|| FsError::NoSuchEntry { path: name.to_string() })?;
        if let Content::Directory(table) = self.content(target) {
            if !table.has_no_children() {
                return Err(FsError::DirectoryNotEmpty { path: name.to_string() });
            }
        }
        self.content_mut(dir).as_directory_mut()?.detach(name);
        self.release(target);
        debug!("rm {}", name);
        Ok(())
    }

    /// Remove an entry and, for a directory, everything beneath it.
    ///
    /// Returns the number of inodes released.
    pub fn remove_recursive(&mut self, dir: InodeRef, name: &str) -> Result<usize, FsError> {
        if is_reserved(name) {
            return Err(FsError::InvalidName { path: name.to_string() });
        }
        let target = self
            .lookup(dir, name)?
            .ok_or_else(|| FsError::NoSuchEntry { path: name.to_string() })?;
        let mut released = 0;
        if self.content(target).is_directory() {
            released += self.clear(target)?;
        }
        self.remove(dir, name)?;
        Ok(released + 1)
    }

    /// Remove every owned entry of `dir`, depth first.
    fn clear(&mut self, dir: InodeRef) -> Result<usize, FsError> {
        let children: Vec<(String, InodeRef)> = self
            .content(dir)
            .as_directory()?
            .children()
            .map(|(name, inode)| (name.to_string(), inode))
            .collect();

        let mut released = 0;
        for (name, child) in children {
            if self.content(child).is_directory() {
                released += self.clear(child)?;
            }
            self.remove(dir, &name)?;
            released += 1;
        }
        Ok(released)
    }

    /// True when `inode` is `ancestor` or lies beneath it.
    pub fn is_within(&self, inode: InodeRef, ancestor: InodeRef) -> bool {
        let mut current = inode;
        loop {
            if current == ancestor {
                return true;
            }
            if current == self.root {
                return false;
            }
            match self.parent_of(current) {
                Ok(parent) => current = parent,
                Err(_) => return false,
            }
        }
    }

    fn content_mut(&mut self, inode: InodeRef) -> &mut Content {
        match self.slots.get_mut(inode.0).and_then(Option::as_mut) {
            Some(node) => node.content_mut(),
            None => panic!("inode handle {:?} was released", inode),
        }
    }

    fn alloc(&mut self, content: Content) -> InodeRef {
        let nr = self.next_nr;
        self.next_nr += 1;
        let inode = Inode::new(nr, content);
        trace!("alloc inode {}, type = {}", nr, inode.content().kind());
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(inode);
                InodeRef(slot)
            }
            None => {
                self.slots.push(Some(inode));
                InodeRef(self.slots.len() - 1)
            }
        }
    }

    fn release(&mut self, inode: InodeRef) {
        if let Some(node) = self.slots.get_mut(inode.0).and_then(Option::take) {
            trace!("release inode {}", node.nr());
            self.free.push(inode.0);
        }
    }
}

impl Default for InodeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<InodeRef> for InodeTable {
    type Output = Inode;

    /// Panics if the handle was released.
    fn index(&self, inode: InodeRef) -> &Inode {
        match self.get(inode) {
            Some(node) => node,
            None => panic!("inode handle {:?} was released", inode),
        }
    }
}

/// Entry names must be non-empty and slash-free.
fn validate_name(name: &str) -> Result<(), FsError> {
    if name.is_empty() || name.contains('/') {
        return Err(FsError::InvalidName { path: name.to_string() });
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_root_is_its_own_parent() {
        let table = InodeTable::new();
        let root = table.root();
        assert_eq!(table[root].nr(), 1);
        assert_eq!(table.lookup(root, ".").unwrap(), Some(root));
        assert_eq!(table.lookup(root, "..").unwrap(), Some(root));
        assert_eq!(table.inode_count(), 1);
    }

    #[test]
    fn test_mkdir_wires_reserved_entries() {
        let mut table = InodeTable::new();
        let root = table.root();
        let a = table.make_dir(root, "a").unwrap();
        let b = table.make_dir(a, "b").unwrap();
        assert_eq!(table.lookup(a, ".").unwrap(), Some(a));
        assert_eq!(table.lookup(a, "..").unwrap(), Some(root));
        assert_eq!(table.lookup(b, ".").unwrap(), Some(b));
        assert_eq!(table.lookup(b, "..").unwrap(), Some(a));
        assert_eq!(table.content(a).size(), 3);
    }

    #[test]
    fn test_inode_numbers_ascend_and_are_not_reused() {
        let mut table = InodeTable::new();
        let root = table.root();
        let f = table.make_file(root, "f").unwrap();
        assert_eq!(table[f].nr(), 2);
        table.remove(root, "f").unwrap();
        let g = table.make_file(root, "g").unwrap();
        assert_eq!(table[g].nr(), 3);
    }

    #[test]
    fn test_make_file_is_idempotent() {
        let mut table = InodeTable::new();
        let root = table.root();
        let first = table.make_file(root, "f").unwrap();
        table.write(first, words("keep me")).unwrap();
        let second = table.make_file(root, "f").unwrap();
        assert_eq!(first, second);
        assert_eq!(table.read(second).unwrap(), words("keep me").as_slice());
    }

    #[test]
    fn test_make_file_over_directory_fails() {
        let mut table = InodeTable::new();
        let root = table.root();
        table.make_dir(root, "d").unwrap();
        let err = table.make_file(root, "d").unwrap_err();
        assert!(matches!(err, FsError::NameIsDirectory { .. }));
        assert!(matches!(table.make_file(root, "."), Err(FsError::NameIsDirectory { .. })));
    }

    #[test]
    fn test_make_dir_conflicts() {
        let mut table = InodeTable::new();
        let root = table.root();
        table.make_dir(root, "x").unwrap();
        table.make_file(root, "f").unwrap();
        assert!(matches!(table.make_dir(root, "x"), Err(FsError::AlreadyExists { .. })));
        assert!(matches!(table.make_dir(root, "f"), Err(FsError::AlreadyExists { .. })));
        assert!(matches!(table.make_dir(root, ".."), Err(FsError::AlreadyExists { .. })));
        assert_eq!(table.content(root).as_directory().unwrap().children().count(), 2);
    }

    #[test]
    fn test_invalid_names_rejected() {
        let mut table = InodeTable::new();
        let root = table.root();
        assert!(matches!(table.make_file(root, "a/b"), Err(FsError::InvalidName { .. })));
        assert!(matches!(table.make_dir(root, ""), Err(FsError::InvalidName { .. })));
        assert!(matches!(table.remove(root, "."), Err(FsError::InvalidName { .. })));
        assert!(matches!(table.remove(root, ".."), Err(FsError::InvalidName { .. })));
    }

    #[test]
    fn test_operations_on_plain_file_fail() {
        let mut table = InodeTable::new();
        let root = table.root();
        let f = table.make_file(root, "f").unwrap();
        assert!(matches!(table.make_file(f, "g"), Err(FsError::NotADirectory { .. })));
        assert!(matches!(table.make_dir(f, "g"), Err(FsError::NotADirectory { .. })));
        assert!(matches!(table.remove(f, "g"), Err(FsError::NotADirectory { .. })));
        assert!(matches!(table.read(root), Err(FsError::NotAFile { .. })));
    }

    #[test]
    fn test_remove_then_lookup_is_absent() {
        let mut table = InodeTable::new();
        let root = table.root();
        table.make_file(root, "f").unwrap();
        table.make_dir(root, "d").unwrap();
        table.remove(root, "f").unwrap();
        table.remove(root, "d").unwrap();
        assert_eq!(table.lookup(root, "f").unwrap(), None);
        assert_eq!(table.lookup(root, "d").unwrap(), None);
        assert_eq!(table.inode_count(), 1);
    }

    #[test]
    fn test_remove_missing_entry() {
        let mut table = InodeTable::new();
        let root = table.root();
        assert!(matches!(table.remove(root, "nope"), Err(FsError::NoSuchEntry { .. })));
    }

    #[test]
    fn test_remove_non_empty_directory_leaves_tree_unchanged() {
        let mut table = InodeTable::new();
        let root = table.root();
        let d = table.make_dir(root, "d").unwrap();
        table.make_file(d, "inner").unwrap();
        let before = table.inode_count();

        let err = table.remove(root, "d").unwrap_err();
        assert!(matches!(err, FsError::DirectoryNotEmpty { .. }));
        assert_eq!(table.inode_count(), before);
        assert_eq!(table.lookup(root, "d").unwrap(), Some(d));
        assert!(table.lookup(d, "inner").unwrap().is_some());
    }

    #[test]
    fn test_remove_recursive_releases_subtree() {
        let mut table = InodeTable::new();
        let root = table.root();
        let a = table.make_dir(root, "a").unwrap();
        let b = table.make_dir(a, "b").unwrap();
        table.make_file(a, "f1").unwrap();
        table.make_file(b, "f2").unwrap();
        table.make_dir(b, "c").unwrap();
        table.make_file(root, "keep").unwrap();

        let released = table.remove_recursive(root, "a").unwrap();
        assert_eq!(released, 5);
        assert_eq!(table.lookup(root, "a").unwrap(), None);
        assert!(table.lookup(root, "keep").unwrap().is_some());
        assert_eq!(table.inode_count(), 2);
    }

    #[test]
    fn test_is_within() {
        let mut table = InodeTable::new();
        let root = table.root();
        let a = table.make_dir(root, "a").unwrap();
        let b = table.make_dir(a, "b").unwrap();
        let c = table.make_dir(root, "c").unwrap();
        assert!(table.is_within(b, a));
        assert!(table.is_within(a, a));
        assert!(table.is_within(b, root));
        assert!(!table.is_within(c, a));
        assert!(!table.is_within(root, a));
    }
}
