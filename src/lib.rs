//! `radtools` is a semi-modular toolkit of fast and reliable libraries for
//! radionuclide identification and decay calculations
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use radtools_utils as utils;

#[cfg(feature = "nuclide")]
#[cfg_attr(docsrs, doc(cfg(feature = "nuclide")))]
#[doc(inline)]
pub use radtools_nuclide as nuclide;

#[cfg(feature = "activity")]
#[cfg_attr(docsrs, doc(cfg(feature = "activity")))]
#[doc(inline)]
pub use radtools_activity as activity;
