//! Element lookup and isotope identifier parsing
//!
//! This crate resolves free-form isotope notation into an unambiguous
//! nuclide identity, and carries the element and decay properties needed
//! for activity calculations.
//!
//! Identifiers follow `EE[-]AAA[m[M]]` or `AAA[m[M]][-]EE`, with the
//! hyphen optional and token order auto-detected. The element may be a
//! symbol or full name, matched case-insensitively, and an embedded `m`
//! marks a metastable state with an optional level.
//!
//! ## Quickstart example
//!
//! ```rust
//! # use radtools_nuclide::{Isotope, IsomerState};
//! // All of these resolve to the same nuclide
//! let a: Isotope = "Tc-99m".parse().unwrap();
//! let b: Isotope = "TC99M".parse().unwrap();
//! let c: Isotope = "99m-Tc".parse().unwrap();
//! assert_eq!(a, b);
//! assert_eq!(a, c);
//!
//! // With the identity and derived data available directly
//! assert_eq!(a.symbol(), "Tc");
//! assert_eq!(a.z(), 43);
//! assert_eq!(a.n(), 56);
//! assert_eq!(a.state(), IsomerState::Excited(1));
//! ```
//!
//! ## Ambiguity
//!
//! Shorter substrings of a valid symbol or name can spuriously resolve to
//! an element, so identifiers without a hyphen are resolved by scoring
//! every possible split and keeping the longest element token. For
//! example, `"178M2HF"` is Hf-178m2 rather than anything involving
//! hydrogen, and `"104mn"` is Mn-104 rather than N-104m.
//!
//! ## Decay data
//!
//! Parsed isotopes carry a halflife from a small built-in table of common
//! nuclides, with [STABLE] (infinity) marking the stable ones. Unknown
//! nuclides are left as `None` and may be given an explicit value:
//!
//! ```rust
//! # use radtools_nuclide::Isotope;
//! let exotic = "Db-268".parse::<Isotope>().unwrap()
//!     .with_halflife(1.0e5)
//!     .unwrap();
//! assert_eq!(exotic.halflife(), Some(1.0e5));
//! ```

// Modules
mod data;
mod element;
mod error;
mod isotope;
mod parsers;

// Re-exports of anything important with in-lined documentation for simplicity
#[doc(inline)]
pub use element::Element;

#[doc(inline)]
pub use isotope::{IsomerState, Isotope};

#[doc(inline)]
pub use parsers::parse_isotope;

#[doc(inline)]
pub use error::{Error, Result};

pub use data::STABLE;
