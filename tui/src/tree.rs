//! Explorer tree state: which files are expanded and which single node is
//! active. Pure data, no terminal involvement, reset by restarting the
//! session. The catalog itself is never written to from here.

use docdex_catalog::FileId;
use std::collections::HashSet;

/// Key of a selectable tree node, by fully-qualified name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKey {
    File(String),
    Symbol(String),
}

#[derive(Clone, Debug, Default)]
pub struct TreeState {
    expanded: HashSet<FileId>,
    active: Option<NodeKey>,
}

impl TreeState {
    /// Flips expansion of a file's subtree. Presentation only; symbol
    /// membership is untouched.
    pub fn toggle(&mut self, id: FileId) {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }

    /// Idempotent force-expand, used when a symbol selection or a search
    /// match must keep a subtree reachable.
    pub fn expand(&mut self, id: FileId) {
        self.expanded.insert(id);
    }

    pub fn is_expanded(&self, id: FileId) -> bool {
        self.expanded.contains(&id)
    }

    /// Single winner: exactly one node is active at a time.
    pub fn set_active(&mut self, key: NodeKey) {
        self.active = Some(key);
    }

    pub fn active(&self) -> Option<&NodeKey> {
        self.active.as_ref()
    }

    pub fn is_active(&self, key: &NodeKey) -> bool {
        self.active.as_ref() == Some(key)
    }
}
