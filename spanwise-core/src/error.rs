//! Error types for the spanwise core library.
//!
//! Defines the error enum shared by every graph operation, its stable
//! machine-readable codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::vertex::VertexId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error produced by graph construction, mutation, queries, and the internal
/// structures driven by the algorithms.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A vertex id fell outside `1..=vertex_count`.
    #[error("vertex {vertex} is outside the valid range 1..={vertex_count}")]
    InvalidVertex {
        /// The rejected vertex id.
        vertex: VertexId,
        /// Number of vertices declared for the structure.
        vertex_count: usize,
    },
    /// A graph or disjoint-set forest was requested with no vertices.
    #[error("vertex count must be at least 1 (got {got})")]
    InvalidSize {
        /// The rejected vertex count.
        got: usize,
    },
    /// Storage for the requested vertex count could not be allocated.
    #[error("cannot allocate storage for {got} vertices")]
    TooLarge {
        /// The rejected vertex count.
        got: usize,
    },
    /// A shortest-path query was issued before any shortest-path run.
    #[error("no shortest-path computation has been run on this graph")]
    NoShortestPaths,
    /// The minimum was requested from an exhausted priority queue.
    #[error("cannot extract the minimum of an empty priority queue")]
    EmptyQueue,
    /// An internal contract was broken, indicating a logic error.
    #[error("precondition violated: {invariant} (left {left}, right {right})")]
    PreconditionViolation {
        /// Name of the violated contract to assist debugging.
        invariant: &'static str,
        /// First argument of the offending call.
        left: usize,
        /// Second argument of the offending call.
        right: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A vertex id fell outside `1..=vertex_count`.
        InvalidVertex => InvalidVertex { .. } => "GRAPH_INVALID_VERTEX",
        /// A graph or forest was requested with no vertices.
        InvalidSize => InvalidSize { .. } => "GRAPH_INVALID_SIZE",
        /// Storage for the requested vertex count could not be allocated.
        TooLarge => TooLarge { .. } => "GRAPH_TOO_LARGE",
        /// A shortest-path query preceded any shortest-path run.
        NoShortestPaths => NoShortestPaths => "GRAPH_NO_SHORTEST_PATHS",
        /// The minimum was requested from an exhausted priority queue.
        EmptyQueue => EmptyQueue => "GRAPH_EMPTY_QUEUE",
        /// An internal contract was broken.
        PreconditionViolation => PreconditionViolation { .. } => "GRAPH_PRECONDITION_VIOLATION",
    }
}

impl GraphError {
    /// Returns `true` when the error signals a defect in the algorithms rather
    /// than bad caller input.
    ///
    /// Input errors leave the graph untouched and may be retried with
    /// corrected arguments; logic errors abort the running operation.
    ///
    /// # Examples
    /// ```
    /// use spanwise_core::GraphError;
    ///
    /// assert!(GraphError::EmptyQueue.is_logic_error());
    /// assert!(!GraphError::InvalidSize { got: 0 }.is_logic_error());
    /// ```
    #[must_use]
    pub const fn is_logic_error(&self) -> bool {
        matches!(self, Self::EmptyQueue | Self::PreconditionViolation { .. })
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;
