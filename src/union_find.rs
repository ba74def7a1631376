/// A disjoint-set forest over the elements `0..n` with path compression and union by rank.
///
/// Every element starts as the root of its own singleton set. Two elements are
/// connected iff [`UnionFind::find`] returns the same root for both.
///
/// # Panics
///
/// Every operation panics when handed an element outside `0..n`. An out-of-range
/// element is a caller bug, not an expected runtime condition.
///
/// # Example
///
/// ```
/// use site_mst::UnionFind;
///
/// let mut sets = UnionFind::new(3);
/// assert!(sets.union(0, 2));
/// assert!(!sets.union(2, 0));
/// assert!(sets.connected(0, 2));
/// assert_eq!(sets.set_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct UnionFind {
    /// Parent of each element; a root points at itself.
    parents: Vec<usize>,
    /// Upper bound on the height of the tree rooted at each element.
    ranks: Vec<u32>,
    sets: usize,
}

impl UnionFind {
    /// Creates `size` singleton sets.
    pub fn new(size: usize) -> UnionFind {
        UnionFind {
            parents: (0..size).collect(),
            ranks: vec![0; size],
            sets: size,
        }
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Number of disjoint sets currently in the forest.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Returns the root of `element`'s set.
    ///
    /// Runs in two passes: the first walks up to the root, the second relinks every
    /// element visited on the way directly under it. Stack usage does not depend on
    /// the length of the chain.
    pub fn find(&mut self, element: usize) -> usize {
        self.check_bounds(element);

        let mut root = element;
        while self.parents[root] != root {
            root = self.parents[root];
        }

        let mut current = element;
        while current != root {
            let next = self.parents[current];
            self.parents[current] = root;
            current = next;
        }
        root
    }

    /// Merges the sets containing `x` and `y`.
    ///
    /// Returns `false` and leaves the forest untouched if they already share a root.
    /// The lower-rank root goes under the higher-rank one; on a tie `y`'s root goes
    /// under `x`'s root, whose rank grows by one.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let x_root = self.find(x);
        let y_root = self.find(y);
        if x_root == y_root {
            return false;
        }

        match self.ranks[x_root].cmp(&self.ranks[y_root]) {
            std::cmp::Ordering::Less => self.parents[x_root] = y_root,
            std::cmp::Ordering::Greater => self.parents[y_root] = x_root,
            std::cmp::Ordering::Equal => {
                self.parents[y_root] = x_root;
                self.ranks[x_root] += 1;
            }
        }
        self.sets -= 1;
        true
    }

    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    fn check_bounds(&self, element: usize) {
        assert!(
            element < self.parents.len(),
            "union-find element {element} out of range 0..{}",
            self.parents.len()
        );
    }
}
