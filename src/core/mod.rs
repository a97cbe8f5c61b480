//! Core data types for peak-calling configuration.
//!
//! - [`SampleId`], [`GroupName`]: opaque, case-sensitive text tokens
//! - [`PeakCallSheet`]: ChIP-to-input pairings and group membership
//! - [`ContrastPair`], [`Contrasts`]: ordered group comparisons
//! - [`KnownGroups`]: the lookup used to validate contrast group names
//!
//! Both tables keep insertion order, so iterating a parsed sheet or contrast
//! list yields entries in the order they were first seen in the file.

pub mod contrast;
pub mod sheet;
pub mod types;

pub use contrast::{ContrastPair, Contrasts, KnownGroups};
pub use sheet::PeakCallSheet;
pub use types::{GroupName, SampleId};
