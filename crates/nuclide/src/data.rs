//! Built-in halflife data for common nuclides
//!
//! Far from exhaustive, this covers the stable nuclides and common
//! radionuclides seen in calibration sources, activation products, and
//! fuel-cycle work. Anything missing may be set explicitly on the
//! [Isotope](crate::Isotope) with
//! [with_halflife](crate::Isotope::with_halflife).

// external crates
use log::debug;

/// Halflife marker for stable nuclides
pub const STABLE: f64 = f64::INFINITY;

struct NuclideEntry {
    symbol: &'static str,
    a: u32,
    level: u32,
    halflife: f64,
}

const fn entry(symbol: &'static str, a: u32, level: u32, halflife: f64) -> NuclideEntry {
    NuclideEntry {
        symbol,
        a,
        level,
        halflife,
    }
}

/// Find the halflife (s) for a nuclide, if known
pub(crate) fn halflife(symbol: &str, a: u32, level: u32) -> Option<f64> {
    let found = NUCLIDES
        .iter()
        .find(|n| n.a == a && n.level == level && n.symbol.eq_ignore_ascii_case(symbol))
        .map(|n| n.halflife);

    if found.is_none() {
        debug!("no built-in halflife for {symbol}-{a} (level {level})");
    }

    found
}

/// Known halflives in seconds, evaluated data from the IAEA chart of nuclides
static NUCLIDES: &[NuclideEntry] = &[
    entry("H", 1, 0, STABLE),
    entry("H", 2, 0, STABLE),
    entry("H", 3, 0, 3.8878e8),
    entry("C", 12, 0, STABLE),
    entry("C", 13, 0, STABLE),
    entry("C", 14, 0, 1.7987e11),
    entry("N", 14, 0, STABLE),
    entry("N", 15, 0, STABLE),
    entry("O", 16, 0, STABLE),
    entry("F", 18, 0, 6586.2),
    entry("Na", 23, 0, STABLE),
    entry("Na", 24, 0, 53989.2),
    entry("Al", 27, 0, STABLE),
    entry("K", 40, 0, 3.938e16),
    entry("Mn", 55, 0, STABLE),
    entry("Mn", 56, 0, 9284.0),
    entry("Fe", 56, 0, STABLE),
    entry("Co", 59, 0, STABLE),
    entry("Co", 60, 0, 1.663442e8),
    entry("Ni", 58, 0, STABLE),
    entry("Sr", 90, 0, 9.0856e8),
    entry("Tc", 99, 0, 6.66e12),
    entry("Tc", 99, 1, 21624.12),
    entry("I", 131, 0, 693386.0),
    entry("Cs", 133, 0, STABLE),
    entry("Cs", 137, 0, 9.4923e8),
    entry("Ba", 137, 0, STABLE),
    entry("Ba", 137, 1, 153.12),
    entry("Eu", 151, 0, STABLE),
    entry("Eu", 152, 0, 4.2657e8),
    entry("Eu", 153, 0, STABLE),
    entry("Hf", 178, 0, STABLE),
    entry("Hf", 178, 2, 9.783e8),
    entry("Au", 197, 0, STABLE),
    entry("Au", 198, 0, 232770.0),
    entry("Th", 232, 0, 4.434e17),
    entry("U", 235, 0, 2.2216e16),
    entry("U", 238, 0, 1.40996e17),
];
