//! Scoped selection buffer for depth-first search.

/// The items chosen along the current search path, as input indices.
///
/// A search owns exactly one `Selection`, pushes an index when it descends
/// into an include branch and pops it when it backtracks. Indices are always
/// strictly increasing, so the buffer is an ordered subsequence of the input.
///
/// # Example
///
/// ```
/// use knapforge_core::Selection;
///
/// let mut selection = Selection::with_capacity(3);
/// selection.push(0);
/// selection.push(2);
/// assert_eq!(selection.indices(), &[0, 2]);
/// assert_eq!(selection.pop(), Some(2));
/// assert_eq!(selection.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    indices: Vec<usize>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty selection able to hold `n` indices without reallocating.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            indices: Vec::with_capacity(n),
        }
    }

    /// Includes the item at `index`. Must be greater than every index already held.
    #[inline]
    pub fn push(&mut self, index: usize) {
        debug_assert!(
            self.indices.last().map_or(true, |&last| last < index),
            "selection indices must be strictly increasing"
        );
        self.indices.push(index);
    }

    /// Undoes the most recent include.
    #[inline]
    pub fn pop(&mut self) -> Option<usize> {
        self.indices.pop()
    }

    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn clear(&mut self) {
        self.indices.clear();
    }

    /// Copies the current path into `target`, reusing its allocation.
    pub fn copy_into(&self, target: &mut Vec<usize>) {
        target.clear();
        target.extend_from_slice(&self.indices);
    }
}
