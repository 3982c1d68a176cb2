/// Ambient state for one level of the recursive walk.
///
/// Passed by value down the recursion: a directory derives a fresh
/// context for its children and its own is never mutated, so sibling
/// subtrees cannot observe each other's state. Exists only for the
/// duration of one call chain.
#[derive(Debug, Clone, Default)]
pub struct WalkContext {
    /// Distance from the walk root. Root = 0.
    pub depth: usize,

    /// Accumulated, case-normalized folder name context. Empty at the
    /// walk root; the root's own name contributes nothing.
    pub prefix: String,
}

impl WalkContext {
    /// Context for the walk root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Context handed to the children of a directory whose combined name
    /// context is `prefix`.
    pub fn descend(&self, prefix: String) -> Self {
        Self {
            depth: self.depth + 1,
            prefix,
        }
    }
}
