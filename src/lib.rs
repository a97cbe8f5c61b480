//! # peakcall-config
//!
//! A library for reading the configuration files of a ChIP-seq peak-calling
//! pipeline.
//!
//! Two tab-delimited files drive the pipeline:
//!
//! - a **peakcall sample sheet** pairing each ChIP sample with its input
//!   (control) sample and assigning it to one or more named groups
//! - a **contrasts file** listing ordered pairs of groups to compare in
//!   differential analysis
//!
//! The sample sheet is parsed first; its groups are then used to validate the
//! contrasts file, so a misspelt group is caught before the pipeline runs.
//!
//! ## Example
//!
//! ```rust
//! use peakcall_config::parsing::contrasts::parse_contrasts_text;
//! use peakcall_config::parsing::peakcall::parse_peakcall_text;
//!
//! let sheet_text = "ChIP\tInput\tGroup\ncfChIP_001\tInput_001\tG1,G4\ncfChIP_002\t\tG2\n";
//! let sheet = parse_peakcall_text(sheet_text, '\t', None).unwrap().into_inner();
//!
//! assert_eq!(sheet.input_for("cfChIP_001").unwrap().as_str(), "Input_001");
//! assert!(sheet.is_chip_only("cfChIP_002"));
//!
//! let contrasts = parse_contrasts_text("G2\tG1\nG4\tG1\n", &sheet, '\t', None)
//!     .unwrap()
//!     .into_inner();
//! assert_eq!(contrasts.len(), 2);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Sample, group and contrast types
//! - [`parsing`]: Sample sheet and contrast parsers
//! - [`utils`]: Option validation helpers
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::contrast::{ContrastPair, Contrasts, KnownGroups};
pub use crate::core::sheet::PeakCallSheet;
pub use crate::core::types::{GroupName, SampleId};
pub use crate::parsing::contrasts::{parse_contrasts_file, parse_contrasts_text};
pub use crate::parsing::peakcall::{parse_peakcall_file, parse_peakcall_text};
pub use crate::parsing::{ParseError, ParseWarning, Parsed, DEFAULT_DELIMITER};
