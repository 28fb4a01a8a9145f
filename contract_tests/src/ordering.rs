//! Ordering contract
//!
//! Sorted views persist positions derived from this order, so the kind
//! ranks and collation rules are stable contracts.
