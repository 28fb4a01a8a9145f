//! Ordered segment chains
//!
//! An `ItemLocator` is an immutable, possibly-empty sequence of segments.
//! The empty locator denotes the namespace root itself; a one-segment
//! locator is a direct child reference; longer locators are paths through
//! intermediate nodes.

use crate::segment::ItemSegment;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered chain of address segments, owned as a single immutable value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemLocator {
    segments: Vec<ItemSegment>,
}

impl ItemLocator {
    /// Returns the empty locator, denoting the root itself
    pub fn empty() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Creates a simple (single-segment) locator
    pub fn simple(segment: ItemSegment) -> Self {
        Self {
            segments: vec![segment],
        }
    }

    /// Creates a locator from an ordered list of segments
    pub fn from_segments(segments: Vec<ItemSegment>) -> Self {
        Self { segments }
    }

    /// Returns true for the empty locator
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Returns the leading segment, if any
    pub fn first(&self) -> Option<&ItemSegment> {
        self.segments.first()
    }

    /// Returns the segments as a slice
    pub fn segments(&self) -> &[ItemSegment] {
        &self.segments
    }

    /// Composes two locators by concatenation (`parent ++ child`)
    pub fn concat(&self, other: &ItemLocator) -> ItemLocator {
        let mut segments = Vec::with_capacity(self.segments.len() + other.segments.len());
        segments.extend_from_slice(&self.segments);
        segments.extend_from_slice(&other.segments);
        Self { segments }
    }

    /// Decomposes into `(first_segment, remainder)`; `None` for the empty
    /// locator. Inverse of [`concat`](Self::concat) with a simple prefix.
    pub fn split_first(&self) -> Option<(ItemSegment, ItemLocator)> {
        let (first, rest) = self.segments.split_first()?;
        Some((
            first.clone(),
            ItemLocator {
                segments: rest.to_vec(),
            },
        ))
    }
}

impl fmt::Display for ItemLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "<empty>");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}
