//! Umbrella crate re-exporting the workspace members.

pub use spgr_array_types as array_types;
pub use spgr_symmetry as symmetry;
