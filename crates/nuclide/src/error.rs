//! Result and Error types for the nuclide module

/// Type alias for `Result<T, nuclide::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
/// The error type for `radtools-nuclide`
pub enum Error {
    /// No split of the identifier resolves to a known element
    #[error("could not resolve \"{text}\" to an element and mass number")]
    UnresolvedIdentifier { text: String },

    /// Hyphenated identifiers must be exactly two tokens
    #[error("expected exactly one hyphen in \"{text}\"")]
    MalformedHyphenation { text: String },

    /// Mass number token is not an unsigned integer
    #[error("mass number in \"{text}\" is not an integer")]
    MalformedMassNumber { text: String },

    /// More than one metastable marker in the mass token
    #[error("expected at most one isomer marker in \"{text}\"")]
    MultipleIsomerMarkers { text: String },

    /// Anything following the metastable marker must be numeric
    #[error("metastable level in \"{text}\" must be numeric")]
    MalformedIsomerLevel { text: String },

    /// Lookup failure for an element symbol, name, or atomic number
    #[error("could not find element \"{hint}\"")]
    UnknownElement { hint: String },

    /// Mass numbers start at a single proton
    #[error("mass number must be >= 1")]
    InvalidMassNumber,

    /// More protons than nucleons
    #[error("neutron number cannot be negative (A={a}, Z={z})")]
    NegativeNeutronNumber { a: u32, z: u32 },

    /// Halflives must be positive and non-zero
    #[error("halflife must be positive, found {seconds} s")]
    InvalidHalflife { seconds: f64 },
}
