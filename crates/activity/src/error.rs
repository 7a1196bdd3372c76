//! Result and Error types for the activity module

use chrono::{DateTime, Utc};

/// Type alias for `Result<T, activity::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
/// The error type for `radtools-activity`
pub enum Error {
    /// Underlying nuclide identity problem
    #[error("invalid nuclide")]
    Nuclide(#[from] radtools_nuclide::Error),

    /// Physical quantities are never negative
    #[error("{unit} must be a non-negative quantity, found {value}")]
    NegativeQuantity { value: f64, unit: &'static str },

    /// A stable quantity can only be specified in atoms or grams
    #[error("cannot express a quantity of stable {isotope} as an activity")]
    StableActivity { isotope: String },

    /// No halflife data available to convert between quantities
    #[error("no halflife data for {isotope}")]
    MissingHalflife { isotope: String },

    /// Evaluation requested before the source existed
    #[error("source created {reference} did not exist at {requested}")]
    BeforeCreation {
        reference: DateTime<Utc>,
        requested: DateTime<Utc>,
    },

    /// The decay law has no inverse for an infinite halflife
    #[error("cannot invert the decay law for stable {isotope}")]
    StableInversion { isotope: String },

    /// Target quantity outside the range of the decay curve
    #[error("a quantity of {target} atoms is never reached")]
    UnreachableQuantity { target: f64 },

    /// Solved time offset beyond the representable date range
    #[error("a time offset of {seconds} s is outside the representable date range")]
    TimeOutOfRange { seconds: f64 },

    /// Average activity over a zero-length interval is undefined
    #[error("interval starting {start} has zero duration")]
    ZeroLengthInterval { start: DateTime<Utc> },

    /// Irradiation windows run forwards in time
    #[error("irradiation stop {stop} precedes start {start}")]
    TimestampsOutOfOrder {
        start: DateTime<Utc>,
        stop: DateTime<Utc>,
    },

    /// Activation from an already-radioactive initial isotope is out of scope
    #[error("activation from radioactive initial isotope {isotope} is not supported")]
    RadioactiveInitial { isotope: String },

    /// Activation must produce a radioactive nuclide
    #[error("activation product {isotope} must be radioactive")]
    StableActivation { isotope: String },

    /// None of the supported date-time layouts matched
    #[error("could not interpret \"{text}\" as a date-time")]
    UnparsedDatetime { text: String },
}
