//! Union-find (disjoint set) forest used by Kruskal's algorithm.
//!
//! Every element owns one [`Slot`]: roots record the size of their set and all
//! other elements record the id of their parent. Parents are plain indices
//! into the slot arena, so the forest never holds owning back-links.
//! [`DisjointSetForest::find`] compresses every path it walks and
//! [`DisjointSetForest::join`] hangs the smaller tree under the larger root,
//! keeping set sizes current without rescanning the arena.

use crate::{
    error::{GraphError, Result},
    vertex::{VertexId, slot_index, vertex_slots},
};

/// State of a single element in the forest.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Slot {
    /// The element represents its set.
    Root {
        /// Number of elements in the set.
        size: usize,
    },
    /// The element hangs below another element of the same set.
    Child {
        /// Id of the parent element.
        parent: VertexId,
    },
}

/// Disjoint sets over the elements `1..=len`.
///
/// # Examples
/// ```
/// use spanwise_core::DisjointSetForest;
///
/// let mut forest = DisjointSetForest::new(4)?;
/// let root = forest.join(1, 2)?;
/// assert_eq!(forest.find(1)?, root);
/// assert_eq!(forest.find(2)?, root);
/// assert_eq!(forest.set_count(), 3);
/// # Ok::<(), spanwise_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DisjointSetForest {
    slots: Vec<Slot>,
}

impl DisjointSetForest {
    /// Creates a forest in which every element is its own singleton set.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidSize`] when `len == 0` and
    /// [`GraphError::TooLarge`] when the slots cannot be allocated.
    pub fn new(len: usize) -> Result<Self> {
        Ok(Self {
            slots: vertex_slots(len, Slot::Root { size: 1 })?,
        })
    }

    /// Returns the number of elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always `false`: a forest holds at least one element.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the raw slots, element `1` first.
    #[must_use]
    pub const fn slots(&self) -> &[Slot] {
        self.slots.as_slice()
    }

    /// Returns the number of disjoint sets.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Root { .. }))
            .count()
    }

    /// Returns the representative of the set containing `element`, pointing
    /// every element visited on the way directly at it.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] when `element` is outside
    /// `1..=len`.
    pub fn find(&mut self, element: VertexId) -> Result<VertexId> {
        slot_index(element, self.len())?;
        let root = self.root_of(element);

        let mut current = element;
        while let Slot::Child { parent } = self.slot(current) {
            self.set_slot(current, Slot::Child { parent: root });
            current = parent;
        }
        Ok(root)
    }

    /// Returns the size of the set containing `element`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] when `element` is outside
    /// `1..=len`.
    pub fn set_size(&self, element: VertexId) -> Result<usize> {
        slot_index(element, self.len())?;
        match self.slot(self.root_of(element)) {
            Slot::Root { size } => Ok(size),
            Slot::Child { parent } => Err(GraphError::PreconditionViolation {
                invariant: "root walk must end at a root slot",
                left: element,
                right: parent,
            }),
        }
    }

    /// Merges the sets represented by the roots `left` and `right`.
    ///
    /// The root of the smaller set is attached below the root of the larger
    /// one; on equal sizes `left` goes below `right`. Returns the surviving
    /// root.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] for ids outside `1..=len` and
    /// [`GraphError::PreconditionViolation`] when the arguments are equal or
    /// either is not a root.
    pub fn join(&mut self, left: VertexId, right: VertexId) -> Result<VertexId> {
        slot_index(left, self.len())?;
        slot_index(right, self.len())?;
        if left == right {
            return Err(GraphError::PreconditionViolation {
                invariant: "join requires two distinct roots",
                left,
                right,
            });
        }
        let (Slot::Root { size: left_size }, Slot::Root { size: right_size }) =
            (self.slot(left), self.slot(right))
        else {
            return Err(GraphError::PreconditionViolation {
                invariant: "join arguments must both be roots",
                left,
                right,
            });
        };

        let (parent, child) = if left_size > right_size {
            (left, right)
        } else {
            (right, left)
        };
        self.set_slot(child, Slot::Child { parent });
        self.set_slot(
            parent,
            Slot::Root {
                size: left_size.saturating_add(right_size),
            },
        );
        Ok(parent)
    }

    fn root_of(&self, element: VertexId) -> VertexId {
        let mut root = element;
        while let Slot::Child { parent } = self.slot(root) {
            root = parent;
        }
        root
    }

    fn slot(&self, element: VertexId) -> Slot {
        self.slots[element - 1]
    }

    fn set_slot(&mut self, element: VertexId, slot: Slot) {
        self.slots[element - 1] = slot;
    }
}
