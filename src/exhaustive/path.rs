//! Persistent selection paths.

use std::sync::Arc;

#[derive(Debug)]
struct Node {
    id: usize,
    parent: Path,
}

/// An immutable, structurally shared list of selected option ids.
///
/// [`Path::with`] returns a new path and leaves the receiver untouched,
/// so the include and exclude branches of a node can both hold the
/// parent's prefix without observing each other's choices.
#[derive(Debug, Clone, Default)]
pub(crate) struct Path {
    head: Option<Arc<Node>>,
    len: usize,
}

impl Path {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a path holding `ids` in order.
    pub fn from_ids<I: IntoIterator<Item = usize>>(ids: I) -> Self {
        ids.into_iter().fold(Self::empty(), |path, id| path.with(id))
    }

    /// Returns this path extended by `id`.
    pub fn with(&self, id: usize) -> Self {
        Self {
            head: Some(Arc::new(Node {
                id,
                parent: self.clone(),
            })),
            len: self.len + 1,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Ids from first to last selected.
    pub fn to_vec(&self) -> Vec<usize> {
        let mut ids = Vec::with_capacity(self.len());
        let mut cursor = self.head.as_deref();
        while let Some(node) = cursor {
            ids.push(node.id);
            cursor = node.parent.head.as_deref();
        }
        ids.reverse();
        ids
    }
}

// Unlinks uniquely owned ancestors one by one so long paths do not
// recurse on drop.
impl Drop for Node {
    fn drop(&mut self) {
        let mut next = self.parent.head.take();
        while let Some(node) = next {
            match Arc::try_unwrap(node) {
                Ok(mut node) => next = node.parent.head.take(),
                Err(_) => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_keeps_parent() {
        let root = Path::empty().with(3);
        let include = root.with(7);
        let exclude = root.clone();

        assert_eq!(root.to_vec(), vec![3]);
        assert_eq!(include.to_vec(), vec![3, 7]);
        assert_eq!(exclude.to_vec(), vec![3]);
        assert_eq!(include.len(), 2);
    }

    #[test]
    fn test_siblings_isolated() {
        let prefix = Path::from_ids([1, 2]);
        let left = prefix.with(4);
        let right = prefix.with(5).with(6);

        assert_eq!(left.to_vec(), vec![1, 2, 4]);
        assert_eq!(right.to_vec(), vec![1, 2, 5, 6]);
        assert_eq!(prefix.to_vec(), vec![1, 2]);
    }

    #[test]
    fn test_empty() {
        let path = Path::empty();
        assert_eq!(path.len(), 0);
        assert!(path.to_vec().is_empty());
    }

    #[test]
    fn test_long_path_drop() {
        let path = Path::from_ids(0..200_000);
        assert_eq!(path.len(), 200_000);
        drop(path);
    }

    #[test]
    fn test_drop_keeps_shared_prefix() {
        let prefix = Path::from_ids(0..10);
        let branch = prefix.with(99);
        drop(branch);
        assert_eq!(prefix.to_vec(), (0..10).collect::<Vec<_>>());
    }
}
