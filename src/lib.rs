//! Public library API for the typed, hierarchical configuration store.

/// Tagged values, configuration tree, document round-trip, and flat export.
pub mod config;
