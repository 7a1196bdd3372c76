//! The validated nuclear species identity

// external crates
use serde::Serialize;

// internal modules
use crate::data;
use crate::element::Element;
use crate::error::{Error, Result};
use crate::parsers::parse_isotope;

/// Variants of excited states
///
/// A nuclide is either in the ground state or some metastable excited
/// state, with `Excited(1)` the first excited state, `Excited(2)` the
/// second, and so on.
///
/// The display form follows the usual convention of an empty string for
/// the ground state, a bare `m` for the first excited state, and `m2`,
/// `m3`, etc... beyond that.
///
/// ```rust
/// # use radtools_nuclide::IsomerState;
/// assert_eq!(IsomerState::Ground.to_string(), "");
/// assert_eq!(IsomerState::Excited(1).to_string(), "m");
/// assert_eq!(IsomerState::Excited(2).to_string(), "m2");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub enum IsomerState {
    /// Ground state
    #[default]
    Ground,
    /// Metastable state at the given level
    Excited(u32),
}

impl IsomerState {
    /// Normalise a numeric level, with 0 meaning the ground state
    pub fn from_level(level: u32) -> Self {
        match level {
            0 => IsomerState::Ground,
            n => IsomerState::Excited(n),
        }
    }

    /// Numeric level, with 0 meaning the ground state
    pub fn level(&self) -> u32 {
        match self {
            IsomerState::Ground => 0,
            IsomerState::Excited(n) => *n,
        }
    }
}

impl std::str::FromStr for IsomerState {
    type Err = Error;

    /// Accepts the display forms: empty, `m`, or `m` with a numeric level
    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Ok(IsomerState::Ground);
        }
        let level = match s.strip_prefix(['m', 'M']) {
            Some("") => 1,
            Some(digits) => digits
                .parse::<u32>()
                .map_err(|_| Error::MalformedIsomerLevel { text: s.to_string() })?,
            None => {
                return Err(Error::MalformedIsomerLevel {
                    text: s.to_string(),
                })
            }
        };
        Ok(Self::from_level(level))
    }
}

impl std::fmt::Display for IsomerState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            IsomerState::Ground => Ok(()),
            IsomerState::Excited(1) => write!(f, "m"),
            IsomerState::Excited(n) => write!(f, "m{n}"),
        }
    }
}

/// Identity of a nuclide, including isomers
///
/// An element identity plus a mass number and isomer state, validated on
/// construction so that A >= 1 and the neutron number is never negative.
///
/// The `FromStr` trait runs the full identifier parser, which handles
/// optional hyphens, either token order, and embedded metastable tags:
///
/// ```rust
/// # use radtools_nuclide::{Isotope, IsomerState};
/// let tc99m: Isotope = "Tc-99m".parse().unwrap();
///
/// assert_eq!(tc99m.symbol(), "Tc");
/// assert_eq!(tc99m.a(), 99);
/// assert_eq!(tc99m.n(), 56);
/// assert_eq!(tc99m.state(), IsomerState::Excited(1));
/// ```
///
/// Construction fills in the halflife from the built-in data table where
/// the nuclide is known. Anything else is `None` rather than silently
/// stable, and may be supplied through [with_halflife](Isotope::with_halflife).
///
/// ## String formatting
///
/// Beyond the standard `Display` implementation, a small template
/// language is available through [format_with](Isotope::format_with):
///
/// ```rust
/// # use radtools_nuclide::Isotope;
/// let iso: Isotope = "178M2HF".parse().unwrap();
/// assert_eq!(
///     iso.format_with("%n(%s)-%a%m Z=%z A=%a"),
///     "Hafnium(Hf)-178m2 Z=72 A=178"
/// );
/// ```
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Isotope {
    element: Element,
    a: u32,
    state: IsomerState,
    halflife: Option<f64>,
}

/// Default display template
const DEFAULT_TEMPLATE: &str = "%s-%a%m";

impl Isotope {
    /// A ground state isotope of an element
    ///
    /// Fails when the mass number is zero or smaller than the atomic
    /// number.
    pub fn new(element: Element, a: u32) -> Result<Self> {
        Self::with_state(element, a, IsomerState::Ground)
    }

    /// An isotope in an explicit isomer state
    pub fn with_state(element: Element, a: u32, state: IsomerState) -> Result<Self> {
        if a < 1 {
            return Err(Error::InvalidMassNumber);
        }
        if a < element.z() {
            return Err(Error::NegativeNeutronNumber { a, z: element.z() });
        }
        let halflife = data::halflife(element.symbol(), a, state.level());
        Ok(Self {
            element,
            a,
            state,
            halflife,
        })
    }

    /// Resolve the element identifier before construction
    ///
    /// The identifier may be a symbol, name, or atomic number, and the
    /// isomer anything accepted by the [IsomerState] string forms.
    ///
    /// ```rust
    /// # use radtools_nuclide::Isotope;
    /// let a = Isotope::from_id("Tc", 99, "m").unwrap();
    /// let b = Isotope::from_id("43", 99, "m1").unwrap();
    /// assert_eq!(a, b);
    /// ```
    pub fn from_id(id: &str, a: u32, isomer: &str) -> Result<Self> {
        Self::with_state(Element::from_id(id)?, a, isomer.parse()?)
    }

    /// Override the halflife (s) with an explicit value
    ///
    /// Use [STABLE](crate::STABLE) for stable nuclides. Fails for anything
    /// zero, negative, or NaN.
    pub fn with_halflife(mut self, seconds: f64) -> Result<Self> {
        if !(seconds > 0.0) {
            return Err(Error::InvalidHalflife { seconds });
        }
        self.halflife = Some(seconds);
        Ok(self)
    }

    /// The element identity
    pub fn element(&self) -> Element {
        self.element
    }

    /// Canonical mixed-case element symbol, e.g. "Hf"
    pub fn symbol(&self) -> &'static str {
        self.element.symbol()
    }

    /// Atomic number
    pub fn z(&self) -> u32 {
        self.element.z()
    }

    /// Mass number
    pub fn a(&self) -> u32 {
        self.a
    }

    /// Neutron number
    pub fn n(&self) -> u32 {
        self.a - self.element.z()
    }

    /// Standard atomic weight of the element (amu)
    pub fn atomic_mass(&self) -> f64 {
        self.element.atomic_mass()
    }

    /// Isomer state
    pub fn state(&self) -> IsomerState {
        self.state
    }

    /// Numeric isomer level, with 0 the ground state
    pub fn level(&self) -> u32 {
        self.state.level()
    }

    /// Halflife (s), infinite for stable and `None` when unknown
    pub fn halflife(&self) -> Option<f64> {
        self.halflife
    }

    /// Decay constant ln2/halflife (1/s), zero for stable
    pub fn decay_const(&self) -> Option<f64> {
        self.halflife.map(|t| std::f64::consts::LN_2 / t)
    }

    /// True for a known infinite halflife
    pub fn is_stable(&self) -> bool {
        self.halflife == Some(f64::INFINITY)
    }

    /// A name for the isotope with consistent formatting
    ///
    /// ```rust
    /// # use radtools_nuclide::Isotope;
    /// let iso: Isotope = "TC99M".parse().unwrap();
    /// assert_eq!(iso.name(), "Tc-99m");
    /// ```
    pub fn name(&self) -> String {
        self.format_with(DEFAULT_TEMPLATE)
    }

    /// Render the isotope through a display template
    ///
    /// Tokens are substituted literally, with anything else passed
    /// through. An empty template falls back to `"%s-%a%m"`.
    ///
    /// | Token | Substitution   |
    /// | ----- | -------------- |
    /// | `%s`  | element symbol |
    /// | `%n`  | element name   |
    /// | `%z`  | atomic number  |
    /// | `%a`  | mass number    |
    /// | `%m`  | isomer code    |
    pub fn format_with(&self, template: &str) -> String {
        let template = if template.is_empty() {
            DEFAULT_TEMPLATE
        } else {
            template
        };
        template
            .replace("%s", self.symbol())
            .replace("%n", self.element.name())
            .replace("%z", &self.z().to_string())
            .replace("%a", &self.a.to_string())
            .replace("%m", &self.state.to_string())
    }
}

impl std::str::FromStr for Isotope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (element, a, state) = parse_isotope(s)?;
        Self::with_state(element, a, state)
    }
}

impl std::fmt::Display for Isotope {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Identity comparison over element, mass number, and isomer level only
impl PartialEq for Isotope {
    fn eq(&self, other: &Self) -> bool {
        self.element.z() == other.element.z() && self.a == other.a && self.state == other.state
    }
}
