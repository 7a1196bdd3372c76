//! Decay quantities, decay-law inversion, and neutron activation
//!
//! This crate models the time-dependent amount of a radionuclide sample.
//! An [IsotopeQuantity] anchors an amount of an
//! [Isotope](radtools_nuclide::Isotope) to a reference date, after which
//! activity (Bq, uCi), mass, and atom count follow the exponential decay
//! law at any time of interest. The inverse problem, the time at which a
//! target quantity occurs, is solved by [time_when](IsotopeQuantity::time_when).
//!
//! A [NeutronIrradiation] links quantities of two nuclides across an
//! irradiation window, computing the unknown side of an activation
//! reaction in either direction.
//!
//! ## Quickstart example
//!
//! ```rust
//! # use radtools_activity::{IsotopeQuantity, QuantitySpec};
//! # use radtools_nuclide::Isotope;
//! # use chrono::{Duration, TimeZone, Utc};
//! let tc99m: Isotope = "Tc-99m".parse().unwrap();
//! let calibrated = Utc.with_ymd_and_hms(2023, 6, 1, 12, 0, 0).unwrap();
//!
//! // 500 uCi at calibration
//! let dose = IsotopeQuantity::new(
//!     tc99m,
//!     calibrated,
//!     QuantitySpec::Microcuries(500.0),
//! ).unwrap();
//!
//! // Six hours later roughly half remains
//! let later = calibrated + Duration::hours(6);
//! let remaining = dose.uci_at(later).unwrap();
//! assert!(remaining > 249.0 && remaining < 251.0);
//! ```
//!
//! ## Design
//!
//! All types are immutable after construction and evaluation is pure, so
//! quantities may be shared across threads and evaluated repeatedly
//! without coordination. The only wall-clock access is in the `*_now()`
//! conveniences, which simply delegate to the `*_at()` forms taking an
//! explicit time.

// Modules
mod datetime;
mod error;
mod irradiation;
mod quantity;

// Re-exports of anything important with in-lined documentation for simplicity
#[doc(inline)]
pub use quantity::{AcquisitionWindow, IsotopeQuantity, QuantitySpec, N_AV, UCI_TO_BQ};

#[doc(inline)]
pub use irradiation::{Fluence, NeutronIrradiation};

#[doc(inline)]
pub use datetime::normalise_datetime;

#[doc(inline)]
pub use error::{Error, Result};
