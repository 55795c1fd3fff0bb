//! Error types for the spanwood core library.
//!
//! Failures fall into three families. Precondition violations and invalid
//! state surface as `Err` values; business no-ops (adding something that
//! already exists, removing something absent) are reported as `Ok(false)` or
//! plain `false` by the operation itself and never appear here.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
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
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::Graph`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An edge was added to a labelled graph without a label.
    #[error("a labelled graph requires a label for every edge")]
    MissingLabel,
    /// The requested node is not part of the graph.
    #[error("the graph does not contain the requested node")]
    NodeNotFound,
    /// A label accessor was used on a graph that does not carry labels.
    #[error("cannot retrieve a label from an unlabelled graph")]
    NotLabelled,
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge was added to a labelled graph without a label.
        MissingLabel => MissingLabel => "GRAPH_MISSING_LABEL",
        /// The requested node is not part of the graph.
        NodeNotFound => NodeNotFound => "GRAPH_NODE_NOT_FOUND",
        /// A label accessor was used on an unlabelled graph.
        NotLabelled => NotLabelled => "GRAPH_NOT_LABELLED",
    }
}

impl GraphError {
    /// Returns `true` for malformed calls, as opposed to calls made against
    /// a graph in the wrong state.
    #[must_use]
    pub const fn is_precondition(&self) -> bool {
        matches!(self, Self::MissingLabel)
    }
}

/// An error produced by [`crate::IndexedPriorityQueue`] operations.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum QueueError {
    /// `pop` was called on a queue with no elements.
    #[error("cannot pop from an empty priority queue")]
    Empty,
}

define_error_codes! {
    /// Stable codes describing [`QueueError`] variants.
    enum QueueErrorCode for QueueError {
        /// `pop` was called on a queue with no elements.
        Empty => Empty => "QUEUE_EMPTY",
    }
}

/// An error produced while computing a minimum spanning forest.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MsfError {
    /// Prim's algorithm is only defined for undirected graphs.
    #[error("a minimum spanning forest requires an undirected graph")]
    DirectedGraph,
    /// Edge weights are read from labels, so the graph must be labelled.
    #[error("a minimum spanning forest requires a labelled graph")]
    UnlabelledGraph,
    /// A graph accessor failed while the forest was being grown.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

define_error_codes! {
    /// Stable codes describing [`MsfError`] variants.
    enum MsfErrorCode for MsfError {
        /// Prim's algorithm is only defined for undirected graphs.
        DirectedGraph => DirectedGraph => "MSF_DIRECTED_GRAPH",
        /// The graph carries no labels to use as weights.
        UnlabelledGraph => UnlabelledGraph => "MSF_UNLABELLED_GRAPH",
        /// A graph accessor failed while the forest was being grown.
        GraphFailure => Graph(..) => "MSF_GRAPH_FAILURE",
    }
}

impl MsfError {
    /// Retrieve the inner [`GraphErrorCode`] when the failure came from the
    /// graph itself.
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph(error) => Some(error.code()),
            _ => None,
        }
    }
}
