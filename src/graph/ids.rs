//! Dense node and edge identifiers.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::index_vec::Idx;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        #[repr(transparent)]
        pub struct $name(pub u32);

        impl $name {
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            pub const fn raw(self) -> u32 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl Idx for $name {
            fn index(self) -> usize {
                self.0 as usize
            }

            /// Only for positions of an existing table; external indices go
            /// through a checked conversion such as `WeightedGraph::node`.
            fn from_index(index: usize) -> Self {
                debug_assert!(u32::try_from(index).is_ok(), "id {index} exceeds u32");
                Self(index as u32)
            }
        }
    };
}

define_id!(NodeId, "n");
define_id!(EdgeId, "e");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_usize() {
        let node = NodeId::from_index(7);
        assert_eq!(node.index(), 7);
        assert_eq!(node.raw(), 7);
        assert_eq!(format!("{node:?}"), "n7");
        assert_eq!(format!("{}", EdgeId::new(3)), "3");
    }

    #[test]
    fn ids_serialize_as_plain_integers() {
        let json = serde_json::to_string(&NodeId::new(4)).unwrap();
        assert_eq!(json, "4");
        let back: NodeId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, NodeId::new(4));
    }
}
