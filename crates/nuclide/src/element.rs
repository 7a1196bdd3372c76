//! Chemical element definitions and lookup

// external crates
use serde::Serialize;

// internal modules
use crate::error::{Error, Result};

/// Identity of a chemical element
///
/// Carries the canonical symbol, full name, atomic number, and standard
/// atomic weight. Values are `Copy` and backed by a static table covering
/// Z = 1 to 118, so lookups never allocate on success.
///
/// Lookup is case-insensitive on both the symbol and the name, and will
/// also accept a decimal atomic number:
///
/// ```rust
/// # use radtools_nuclide::Element;
/// let hafnium = Element::from_id("hf").unwrap();
/// assert_eq!(hafnium.name(), "Hafnium");
/// assert_eq!(hafnium.z(), 72);
///
/// assert_eq!(Element::from_id("technetium").unwrap().symbol(), "Tc");
/// assert_eq!(Element::from_id("92").unwrap().symbol(), "U");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Element {
    symbol: &'static str,
    name: &'static str,
    z: u32,
    atomic_mass: f64,
}

impl Element {
    /// Find an element by symbol, name, or decimal atomic number
    ///
    /// The identifier is trimmed and matched case-insensitively. Fails with
    /// [Error::UnknownElement] when nothing in the periodic table matches.
    pub fn from_id(id: &str) -> Result<Self> {
        let id = id.trim();

        if let Ok(z) = id.parse::<u32>() {
            return Self::from_z(z);
        }

        ELEMENTS
            .iter()
            .find(|e| e.symbol.eq_ignore_ascii_case(id) || e.name.eq_ignore_ascii_case(id))
            .copied()
            .ok_or_else(|| Error::UnknownElement {
                hint: id.to_string(),
            })
    }

    /// Find an element by atomic number
    pub fn from_z(z: u32) -> Result<Self> {
        // Table is ordered by Z starting from hydrogen
        z.checked_sub(1)
            .and_then(|i| ELEMENTS.get(i as usize))
            .copied()
            .ok_or_else(|| Error::UnknownElement {
                hint: z.to_string(),
            })
    }

    /// Canonical mixed-case symbol, e.g. "Hf"
    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Full element name, e.g. "Hafnium"
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Atomic number
    pub fn z(&self) -> u32 {
        self.z
    }

    /// Standard atomic weight (amu)
    pub fn atomic_mass(&self) -> f64 {
        self.atomic_mass
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// Convenience constructor for the static table
const fn element(z: u32, symbol: &'static str, name: &'static str, atomic_mass: f64) -> Element {
    Element {
        symbol,
        name,
        z,
        atomic_mass,
    }
}

/// Periodic table, ordered by atomic number
///
/// Standard atomic weights from the IUPAC abridged values, with the
/// conventional mass number of the most stable isotope for elements
/// without a characteristic terrestrial composition.
static ELEMENTS: [Element; 118] = [
    element(1, "H", "Hydrogen", 1.008),
    element(2, "He", "Helium", 4.0026),
    element(3, "Li", "Lithium", 6.94),
    element(4, "Be", "Beryllium", 9.0122),
    element(5, "B", "Boron", 10.81),
    element(6, "C", "Carbon", 12.011),
    element(7, "N", "Nitrogen", 14.007),
    element(8, "O", "Oxygen", 15.999),
    element(9, "F", "Fluorine", 18.998),
    element(10, "Ne", "Neon", 20.180),
    element(11, "Na", "Sodium", 22.990),
    element(12, "Mg", "Magnesium", 24.305),
    element(13, "Al", "Aluminium", 26.982),
    element(14, "Si", "Silicon", 28.085),
    element(15, "P", "Phosphorus", 30.974),
    element(16, "S", "Sulfur", 32.06),
    element(17, "Cl", "Chlorine", 35.45),
    element(18, "Ar", "Argon", 39.948),
    element(19, "K", "Potassium", 39.098),
    element(20, "Ca", "Calcium", 40.078),
    element(21, "Sc", "Scandium", 44.956),
    element(22, "Ti", "Titanium", 47.867),
    element(23, "V", "Vanadium", 50.942),
    element(24, "Cr", "Chromium", 51.996),
    element(25, "Mn", "Manganese", 54.938),
    element(26, "Fe", "Iron", 55.845),
    element(27, "Co", "Cobalt", 58.933),
    element(28, "Ni", "Nickel", 58.693),
    element(29, "Cu", "Copper", 63.546),
    element(30, "Zn", "Zinc", 65.38),
    element(31, "Ga", "Gallium", 69.723),
    element(32, "Ge", "Germanium", 72.630),
    element(33, "As", "Arsenic", 74.922),
    element(34, "Se", "Selenium", 78.971),
    element(35, "Br", "Bromine", 79.904),
    element(36, "Kr", "Krypton", 83.798),
    element(37, "Rb", "Rubidium", 85.468),
    element(38, "Sr", "Strontium", 87.62),
    element(39, "Y", "Yttrium", 88.906),
    element(40, "Zr", "Zirconium", 91.224),
    element(41, "Nb", "Niobium", 92.906),
    element(42, "Mo", "Molybdenum", 95.95),
    element(43, "Tc", "Technetium", 98.0),
    element(44, "Ru", "Ruthenium", 101.07),
    element(45, "Rh", "Rhodium", 102.91),
    element(46, "Pd", "Palladium", 106.42),
    element(47, "Ag", "Silver", 107.87),
    element(48, "Cd", "Cadmium", 112.41),
    element(49, "In", "Indium", 114.82),
    element(50, "Sn", "Tin", 118.71),
    element(51, "Sb", "Antimony", 121.76),
    element(52, "Te", "Tellurium", 127.60),
    element(53, "I", "Iodine", 126.90),
    element(54, "Xe", "Xenon", 131.29),
    element(55, "Cs", "Caesium", 132.91),
    element(56, "Ba", "Barium", 137.33),
    element(57, "La", "Lanthanum", 138.91),
    element(58, "Ce", "Cerium", 140.12),
    element(59, "Pr", "Praseodymium", 140.91),
    element(60, "Nd", "Neodymium", 144.24),
    element(61, "Pm", "Promethium", 145.0),
    element(62, "Sm", "Samarium", 150.36),
    element(63, "Eu", "Europium", 151.96),
    element(64, "Gd", "Gadolinium", 157.25),
    element(65, "Tb", "Terbium", 158.93),
    element(66, "Dy", "Dysprosium", 162.50),
    element(67, "Ho", "Holmium", 164.93),
    element(68, "Er", "Erbium", 167.26),
    element(69, "Tm", "Thulium", 168.93),
    element(70, "Yb", "Ytterbium", 173.05),
    element(71, "Lu", "Lutetium", 174.97),
    element(72, "Hf", "Hafnium", 178.49),
    element(73, "Ta", "Tantalum", 180.95),
    element(74, "W", "Tungsten", 183.84),
    element(75, "Re", "Rhenium", 186.21),
    element(76, "Os", "Osmium", 190.23),
    element(77, "Ir", "Iridium", 192.22),
    element(78, "Pt", "Platinum", 195.08),
    element(79, "Au", "Gold", 196.97),
    element(80, "Hg", "Mercury", 200.59),
    element(81, "Tl", "Thallium", 204.38),
    element(82, "Pb", "Lead", 207.2),
    element(83, "Bi", "Bismuth", 208.98),
    element(84, "Po", "Polonium", 209.0),
    element(85, "At", "Astatine", 210.0),
    element(86, "Rn", "Radon", 222.0),
    element(87, "Fr", "Francium", 223.0),
    element(88, "Ra", "Radium", 226.0),
    element(89, "Ac", "Actinium", 227.0),
    element(90, "Th", "Thorium", 232.04),
    element(91, "Pa", "Protactinium", 231.04),
    element(92, "U", "Uranium", 238.03),
    element(93, "Np", "Neptunium", 237.0),
    element(94, "Pu", "Plutonium", 244.0),
    element(95, "Am", "Americium", 243.0),
    element(96, "Cm", "Curium", 247.0),
    element(97, "Bk", "Berkelium", 247.0),
    element(98, "Cf", "Californium", 251.0),
    element(99, "Es", "Einsteinium", 252.0),
    element(100, "Fm", "Fermium", 257.0),
    element(101, "Md", "Mendelevium", 258.0),
    element(102, "No", "Nobelium", 259.0),
    element(103, "Lr", "Lawrencium", 262.0),
    element(104, "Rf", "Rutherfordium", 267.0),
    element(105, "Db", "Dubnium", 268.0),
    element(106, "Sg", "Seaborgium", 269.0),
    element(107, "Bh", "Bohrium", 270.0),
    element(108, "Hs", "Hassium", 277.0),
    element(109, "Mt", "Meitnerium", 278.0),
    element(110, "Ds", "Darmstadtium", 281.0),
    element(111, "Rg", "Roentgenium", 282.0),
    element(112, "Cn", "Copernicium", 285.0),
    element(113, "Nh", "Nihonium", 286.0),
    element(114, "Fl", "Flerovium", 289.0),
    element(115, "Mc", "Moscovium", 290.0),
    element(116, "Lv", "Livermorium", 293.0),
    element(117, "Ts", "Tennessine", 294.0),
    element(118, "Og", "Oganesson", 294.0),
];

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("H", 1)]
    #[case("co", 27)]
    #[case("CO", 27)]
    #[case("Cobalt", 27)]
    #[case("technetium", 43)]
    #[case("U", 92)]
    #[case("uranium", 92)]
    #[case("og", 118)]
    fn lookup_by_id(#[case] id: &str, #[case] z: u32) {
        assert_eq!(Element::from_id(id).unwrap().z(), z);
    }

    #[test]
    fn lookup_by_atomic_number() {
        assert_eq!(Element::from_z(43).unwrap().symbol(), "Tc");
        assert_eq!(Element::from_id("43").unwrap().symbol(), "Tc");
    }

    #[rstest]
    #[case("")]
    #[case("X")]
    #[case("Xy")]
    #[case("0")]
    #[case("119")]
    fn lookup_failures(#[case] id: &str) {
        assert!(matches!(
            Element::from_id(id),
            Err(Error::UnknownElement { .. })
        ));
    }

    #[test]
    fn table_is_ordered_by_z() {
        for (i, element) in ELEMENTS.iter().enumerate() {
            assert_eq!(element.z, i as u32 + 1);
        }
    }
}
