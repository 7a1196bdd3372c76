//! Time-anchored quantities of a radionuclide

// external crates
use chrono::{DateTime, Duration, Utc};

// radtools modules
use radtools_nuclide::Isotope;
use radtools_utils::ValueExt;

// internal modules
use crate::datetime::elapsed_seconds;
use crate::error::{Error, Result};

/// Conversion factor from microcuries to becquerels
pub const UCI_TO_BQ: f64 = 3.7e4;

/// Avogadro constant (1/mol)
pub const N_AV: f64 = 6.022141e23;

/// The ways to specify an amount of an isotope
///
/// Exactly one representation is carried, so an ambiguous quantity is
/// unrepresentable. Grams convert through the mass number and Avogadro
/// constant, activities through the decay constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuantitySpec {
    /// Number of atoms
    Atoms(f64),
    /// Mass (g)
    Grams(f64),
    /// Activity (Bq)
    Becquerels(f64),
    /// Activity (uCi)
    Microcuries(f64),
}

/// A window of data acquisition with a start and stop time
///
/// Implemented by anything exposing a measurement interval, such as a
/// measured spectrum record, for use with the `*_during()` evaluations.
/// A plain `(start, stop)` tuple works directly.
pub trait AcquisitionWindow {
    /// Start of the acquisition
    fn start_time(&self) -> DateTime<Utc>;
    /// End of the acquisition
    fn stop_time(&self) -> DateTime<Utc>;
}

impl AcquisitionWindow for (DateTime<Utc>, DateTime<Utc>) {
    fn start_time(&self) -> DateTime<Utc> {
        self.0
    }

    fn stop_time(&self) -> DateTime<Utc> {
        self.1
    }
}

/// An amount of an isotope anchored to a reference date
///
/// Evaluation at any time of interest follows the exponential decay law
/// from the reference atom count, so activity, mass, and atom count are
/// all available at arbitrary dates without mutating the quantity.
///
/// ```rust
/// # use radtools_activity::{IsotopeQuantity, QuantitySpec};
/// # use radtools_nuclide::Isotope;
/// # use chrono::{Duration, TimeZone, Utc};
/// let co60: Isotope = "Co-60".parse().unwrap();
/// let reference = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
///
/// // A 1 uCi check source on its calibration date
/// let sample = IsotopeQuantity::new(co60, reference, QuantitySpec::Microcuries(1.0)).unwrap();
///
/// // Down to ~half the activity one halflife later
/// let later = reference + Duration::seconds(166_344_200);
/// assert!((sample.uci_at(later).unwrap() - 0.5).abs() < 1e-6);
/// ```
///
/// By default the reference date is treated as a creation date, and
/// evaluation before it fails because the source did not exist yet. Use
/// [without_creation_date](IsotopeQuantity::without_creation_date) for
/// sources with no meaningful creation time.
#[derive(Debug, Clone, Copy)]
pub struct IsotopeQuantity {
    isotope: Isotope,
    ref_date: DateTime<Utc>,
    ref_atoms: f64,
    creation_date: bool,
    halflife: f64,
    decay_const: f64,
}

impl IsotopeQuantity {
    /// An amount of `isotope` at the reference date
    ///
    /// The isotope must carry halflife data. Grams convert through the
    /// mass number, activities through the decay constant, and an
    /// activity of a stable isotope is rejected outright.
    pub fn new(isotope: Isotope, ref_date: DateTime<Utc>, spec: QuantitySpec) -> Result<Self> {
        let halflife = isotope.halflife().ok_or_else(|| Error::MissingHalflife {
            isotope: isotope.name(),
        })?;

        let mut quantity = Self {
            isotope,
            ref_date,
            ref_atoms: 0.0,
            creation_date: true,
            halflife,
            decay_const: std::f64::consts::LN_2 / halflife,
        };
        quantity.ref_atoms = quantity.atoms_from_spec(spec)?;
        Ok(quantity)
    }

    /// An amount of `isotope` referenced to the current time
    ///
    /// Intended for stable or long-lived sources where no meaningful
    /// creation time exists. Chain
    /// [without_creation_date](Self::without_creation_date) to also allow
    /// evaluation at earlier dates.
    pub fn new_now(isotope: Isotope, spec: QuantitySpec) -> Result<Self> {
        Self::new(isotope, Utc::now(), spec)
    }

    /// Stop treating the reference date as a hard existence boundary
    pub fn without_creation_date(mut self) -> Self {
        self.creation_date = false;
        self
    }

    /// Convert any quantity specification to an atom count at the reference
    fn atoms_from_spec(&self, spec: QuantitySpec) -> Result<f64> {
        match spec {
            QuantitySpec::Atoms(atoms) => check_non_negative(atoms, "atoms"),
            QuantitySpec::Grams(g) => {
                Ok(check_non_negative(g, "mass")? / self.isotope.a() as f64 * N_AV)
            }
            QuantitySpec::Becquerels(bq) if self.decay_const > 0.0 => {
                Ok(check_non_negative(bq, "activity")? / self.decay_const)
            }
            QuantitySpec::Microcuries(uci) if self.decay_const > 0.0 => {
                Ok(check_non_negative(uci, "activity")? * UCI_TO_BQ / self.decay_const)
            }
            QuantitySpec::Becquerels(_) | QuantitySpec::Microcuries(_) => {
                Err(Error::StableActivity {
                    isotope: self.isotope.name(),
                })
            }
        }
    }

    /// The isotope this is a quantity of
    pub fn isotope(&self) -> Isotope {
        self.isotope
    }

    /// Reference date
    pub fn ref_date(&self) -> DateTime<Utc> {
        self.ref_date
    }

    /// Atom count at the reference date
    pub fn ref_atoms(&self) -> f64 {
        self.ref_atoms
    }

    /// Whether the reference date is a hard existence boundary
    pub fn creation_date(&self) -> bool {
        self.creation_date
    }

    /// Halflife (s) of the isotope
    pub fn halflife(&self) -> f64 {
        self.halflife
    }

    /// Decay constant (1/s) of the isotope
    pub fn decay_const(&self) -> f64 {
        self.decay_const
    }

    /// Number of atoms at a given date
    ///
    /// Fails when the date precedes the reference and the reference is a
    /// creation date, because the source did not exist then.
    pub fn atoms_at(&self, date: DateTime<Utc>) -> Result<f64> {
        let dt = elapsed_seconds(self.ref_date, date);
        if dt < 0.0 && self.creation_date {
            return Err(Error::BeforeCreation {
                reference: self.ref_date,
                requested: date,
            });
        }
        Ok(self.ref_atoms * f64::powf(2.0, -dt / self.halflife))
    }

    /// Activity (Bq) at a given date
    pub fn bq_at(&self, date: DateTime<Utc>) -> Result<f64> {
        Ok(self.atoms_at(date)? * self.decay_const)
    }

    /// Activity (uCi) at a given date
    pub fn uci_at(&self, date: DateTime<Utc>) -> Result<f64> {
        Ok(self.bq_at(date)? / UCI_TO_BQ)
    }

    /// Mass (g) at a given date
    pub fn g_at(&self, date: DateTime<Utc>) -> Result<f64> {
        Ok(self.atoms_at(date)? / N_AV * self.isotope.a() as f64)
    }

    /// Number of atoms at the current time
    ///
    /// All of the `*_now()` conveniences are thin wrappers over the pure
    /// `*_at()` evaluations, which take the time of interest explicitly
    /// and are the ones to use for anything deterministic.
    pub fn atoms_now(&self) -> Result<f64> {
        self.atoms_at(Utc::now())
    }

    /// Activity (Bq) at the current time
    pub fn bq_now(&self) -> Result<f64> {
        self.bq_at(Utc::now())
    }

    /// Activity (uCi) at the current time
    pub fn uci_now(&self) -> Result<f64> {
        self.uci_at(Utc::now())
    }

    /// Mass (g) at the current time
    pub fn g_now(&self) -> Result<f64> {
        self.g_at(Utc::now())
    }

    /// Expected number of decays over `[start, stop]`
    pub fn decays_from(&self, start: DateTime<Utc>, stop: DateTime<Utc>) -> Result<f64> {
        Ok(self.atoms_at(start)? - self.atoms_at(stop)?)
    }

    /// Average activity (Bq) over `[start, stop]`
    ///
    /// Fails for a zero-length interval, which has no average.
    pub fn bq_from(&self, start: DateTime<Utc>, stop: DateTime<Utc>) -> Result<f64> {
        let elapsed = elapsed_seconds(start, stop);
        if elapsed == 0.0 {
            return Err(Error::ZeroLengthInterval { start });
        }
        Ok(self.decays_from(start, stop)? / elapsed)
    }

    /// Average activity (uCi) over `[start, stop]`
    pub fn uci_from(&self, start: DateTime<Utc>, stop: DateTime<Utc>) -> Result<f64> {
        Ok(self.bq_from(start, stop)? / UCI_TO_BQ)
    }

    /// Expected number of decays during an acquisition
    pub fn decays_during<W: AcquisitionWindow>(&self, window: &W) -> Result<f64> {
        self.decays_from(window.start_time(), window.stop_time())
    }

    /// Average activity (Bq) during an acquisition
    pub fn bq_during<W: AcquisitionWindow>(&self, window: &W) -> Result<f64> {
        self.bq_from(window.start_time(), window.stop_time())
    }

    /// Average activity (uCi) during an acquisition
    pub fn uci_during<W: AcquisitionWindow>(&self, window: &W) -> Result<f64> {
        self.uci_from(window.start_time(), window.stop_time())
    }

    /// The date at which the quantity reaches a target value
    ///
    /// Algebraic inverse of the decay law, so a stable isotope has
    /// nothing to invert and fails. A solution falling before an asserted
    /// creation date is not an error, the condition simply never held, so
    /// the result is `Ok(None)`.
    ///
    /// ```rust
    /// # use radtools_activity::{IsotopeQuantity, QuantitySpec};
    /// # use radtools_nuclide::Isotope;
    /// # use chrono::{Duration, TimeZone, Utc};
    /// let tc99m: Isotope = "Tc-99m".parse().unwrap();
    /// let reference = Utc.with_ymd_and_hms(2023, 6, 1, 12, 0, 0).unwrap();
    /// let sample =
    ///     IsotopeQuantity::new(tc99m, reference, QuantitySpec::Atoms(8.0e9)).unwrap();
    ///
    /// // One quarter remains after exactly two halflives
    /// let when = sample.time_when(QuantitySpec::Atoms(2.0e9)).unwrap().unwrap();
    /// assert_eq!(when - reference, Duration::milliseconds(43_248_240));
    ///
    /// // More atoms than the reference means a time before creation
    /// assert_eq!(sample.time_when(QuantitySpec::Atoms(9.0e9)).unwrap(), None);
    /// ```
    pub fn time_when(&self, spec: QuantitySpec) -> Result<Option<DateTime<Utc>>> {
        if !self.halflife.is_finite() {
            return Err(Error::StableInversion {
                isotope: self.isotope.name(),
            });
        }

        let target = self.atoms_from_spec(spec)?;
        let dt = -self.halflife * f64::log2(target / self.ref_atoms);
        if dt < 0.0 && self.creation_date {
            return Ok(None);
        }
        if !dt.is_finite() {
            return Err(Error::UnreachableQuantity { target });
        }

        // Long-lived isotopes can solve to offsets chrono cannot represent
        let milliseconds = (dt * 1.0e3).round();
        if milliseconds >= i64::MAX as f64 || milliseconds <= i64::MIN as f64 {
            return Err(Error::TimeOutOfRange { seconds: dt });
        }
        self.ref_date
            .checked_add_signed(Duration::milliseconds(milliseconds as i64))
            .map(Some)
            .ok_or(Error::TimeOutOfRange { seconds: dt })
    }
}

impl std::fmt::Display for IsotopeQuantity {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} atoms of {} at {}",
            self.ref_atoms.sci(5, 2),
            self.isotope,
            self.ref_date.format("%Y-%m-%d %H:%M:%S UTC")
        )
    }
}

/// Physical quantities are never negative
fn check_non_negative(value: f64, unit: &'static str) -> Result<f64> {
    if value < 0.0 {
        return Err(Error::NegativeQuantity { value, unit });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use radtools_utils::FloatExt;
    use rstest::rstest;

    const RTOL: f64 = 1e-9;

    fn reference() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 6, 1, 12, 0, 0).unwrap()
    }

    /// Halflife of 3600 s keeps the arithmetic easy to follow
    fn test_isotope() -> Isotope {
        "Co-61"
            .parse::<Isotope>()
            .unwrap()
            .with_halflife(3600.0)
            .unwrap()
    }

    fn stable_isotope() -> Isotope {
        "Fe-56".parse().unwrap()
    }

    fn quantity(spec: QuantitySpec) -> IsotopeQuantity {
        IsotopeQuantity::new(test_isotope(), reference(), spec).unwrap()
    }

    #[test]
    fn atoms_at_reference_is_ref_atoms() {
        let sample = quantity(QuantitySpec::Atoms(1.0e10));
        assert!(sample.atoms_at(reference()).unwrap().approx_eq(1.0e10, RTOL));
    }

    #[test]
    fn halves_every_halflife() {
        let sample = quantity(QuantitySpec::Atoms(1.0e10));
        let after_one = sample.atoms_at(reference() + Duration::seconds(3600)).unwrap();
        let after_two = sample.atoms_at(reference() + Duration::seconds(7200)).unwrap();
        assert!(after_one.approx_eq(5.0e9, RTOL));
        assert!(after_two.approx_eq(2.5e9, RTOL));
    }

    #[test]
    fn conversions_are_consistent() {
        let sample = quantity(QuantitySpec::Becquerels(3.7e4));
        let lambda = std::f64::consts::LN_2 / 3600.0;
        assert!(sample.ref_atoms().approx_eq(3.7e4 / lambda, RTOL));
        assert!(sample.bq_at(reference()).unwrap().approx_eq(3.7e4, RTOL));
        assert!(sample.uci_at(reference()).unwrap().approx_eq(1.0, RTOL));

        let expected_g = sample.ref_atoms() / N_AV * 61.0;
        assert!(sample.g_at(reference()).unwrap().approx_eq(expected_g, RTOL));
    }

    #[test]
    fn grams_convert_through_mass_number() {
        let sample = quantity(QuantitySpec::Grams(61.0));
        assert!(sample.ref_atoms().approx_eq(N_AV, RTOL));
    }

    #[test]
    fn microcuries_convert_through_bq() {
        let uci = quantity(QuantitySpec::Microcuries(2.0));
        let bq = quantity(QuantitySpec::Becquerels(2.0 * UCI_TO_BQ));
        assert!(uci.ref_atoms().approx_eq(bq.ref_atoms(), RTOL));
    }

    #[rstest]
    #[case(QuantitySpec::Atoms(-1.0))]
    #[case(QuantitySpec::Grams(-0.5))]
    #[case(QuantitySpec::Becquerels(-10.0))]
    #[case(QuantitySpec::Microcuries(-2.0))]
    fn negative_quantities_rejected(#[case] spec: QuantitySpec) {
        assert!(matches!(
            IsotopeQuantity::new(test_isotope(), reference(), spec),
            Err(Error::NegativeQuantity { .. })
        ));
    }

    #[rstest]
    #[case(QuantitySpec::Becquerels(100.0))]
    #[case(QuantitySpec::Microcuries(1.0))]
    fn stable_activity_rejected(#[case] spec: QuantitySpec) {
        assert!(matches!(
            IsotopeQuantity::new(stable_isotope(), reference(), spec),
            Err(Error::StableActivity { .. })
        ));
    }

    #[test]
    fn stable_quantity_from_atoms() {
        let sample =
            IsotopeQuantity::new(stable_isotope(), reference(), QuantitySpec::Atoms(1.0e20))
                .unwrap();
        // No decay over any finite interval
        let much_later = reference() + Duration::days(365_000);
        assert_eq!(sample.atoms_at(much_later).unwrap(), 1.0e20);
        assert_eq!(sample.bq_at(much_later).unwrap(), 0.0);
    }

    #[test]
    fn missing_halflife_rejected() {
        let unknown: Isotope = "Co-61".parse().unwrap();
        assert!(matches!(
            IsotopeQuantity::new(unknown, reference(), QuantitySpec::Atoms(1.0)),
            Err(Error::MissingHalflife { .. })
        ));
    }

    #[test]
    fn creation_date_is_a_hard_boundary() {
        let sample = quantity(QuantitySpec::Atoms(1.0e10));
        let earlier = reference() - Duration::seconds(1);
        assert!(matches!(
            sample.atoms_at(earlier),
            Err(Error::BeforeCreation { .. })
        ));

        // Relaxing the boundary back-extrapolates instead
        let relaxed = sample.without_creation_date();
        let hour_before = reference() - Duration::seconds(3600);
        assert!(relaxed.atoms_at(hour_before).unwrap().approx_eq(2.0e10, RTOL));
    }

    #[test]
    fn decays_over_interval() {
        let sample = quantity(QuantitySpec::Atoms(1.0e10));
        let stop = reference() + Duration::seconds(3600);
        let decays = sample.decays_from(reference(), stop).unwrap();
        assert!(decays.approx_eq(5.0e9, RTOL));

        let average_bq = sample.bq_from(reference(), stop).unwrap();
        assert!(average_bq.approx_eq(5.0e9 / 3600.0, RTOL));
        let average_uci = sample.uci_from(reference(), stop).unwrap();
        assert!(average_uci.approx_eq(5.0e9 / 3600.0 / UCI_TO_BQ, RTOL));
    }

    #[test]
    fn zero_length_interval_has_no_average() {
        let sample = quantity(QuantitySpec::Atoms(1.0e10));
        assert!(matches!(
            sample.bq_from(reference(), reference()),
            Err(Error::ZeroLengthInterval { .. })
        ));
        assert!(matches!(
            sample.uci_from(reference(), reference()),
            Err(Error::ZeroLengthInterval { .. })
        ));
        // Decay counts over the empty interval are still well defined
        assert_eq!(sample.decays_from(reference(), reference()).unwrap(), 0.0);
    }

    #[test]
    fn during_acquisition_window() {
        let sample = quantity(QuantitySpec::Atoms(1.0e10));
        let window = (reference(), reference() + Duration::seconds(3600));
        assert_eq!(
            sample.decays_during(&window).unwrap(),
            sample.decays_from(window.0, window.1).unwrap()
        );
        assert_eq!(
            sample.bq_during(&window).unwrap(),
            sample.bq_from(window.0, window.1).unwrap()
        );
    }

    #[rstest]
    #[case(QuantitySpec::Atoms(2.5e9))]
    #[case(QuantitySpec::Becquerels(1.0e4))]
    #[case(QuantitySpec::Grams(1.0e-13))]
    fn inversion_matches_evaluation(#[case] target: QuantitySpec) {
        let sample = quantity(QuantitySpec::Atoms(1.0e10));
        let target_atoms = sample.atoms_from_spec(target).unwrap();
        assert!(target_atoms < sample.ref_atoms());

        let when = sample.time_when(target).unwrap().unwrap();
        assert!(sample.atoms_at(when).unwrap().approx_eq(target_atoms, 1e-6));
    }

    #[test]
    fn inversion_before_creation_is_none() {
        let sample = quantity(QuantitySpec::Atoms(1.0e10));
        assert_eq!(sample.time_when(QuantitySpec::Atoms(2.0e10)).unwrap(), None);

        // Without the boundary the same target is a date in the past
        let relaxed = sample.without_creation_date();
        let when = relaxed.time_when(QuantitySpec::Atoms(2.0e10)).unwrap().unwrap();
        assert_eq!(when, reference() - Duration::seconds(3600));
    }

    #[test]
    fn inversion_of_stable_fails() {
        let sample =
            IsotopeQuantity::new(stable_isotope(), reference(), QuantitySpec::Atoms(1.0e20))
                .unwrap();
        assert!(matches!(
            sample.time_when(QuantitySpec::Atoms(1.0e19)),
            Err(Error::StableInversion { .. })
        ));
    }

    // Geological halflives solve to offsets far beyond any representable
    // date and must error rather than panic
    #[test]
    fn inversion_beyond_date_range() {
        let u238: Isotope = "U-238".parse().unwrap();
        let sample =
            IsotopeQuantity::new(u238, reference(), QuantitySpec::Atoms(1.0e10)).unwrap();
        assert!(matches!(
            sample.time_when(QuantitySpec::Atoms(5.0e9)),
            Err(Error::TimeOutOfRange { .. })
        ));
    }

    #[test]
    fn inversion_of_zero_never_reached() {
        let sample = quantity(QuantitySpec::Atoms(1.0e10));
        assert!(matches!(
            sample.time_when(QuantitySpec::Atoms(0.0)),
            Err(Error::UnreachableQuantity { .. })
        ));
    }

    #[test]
    fn display_summary() {
        let sample = quantity(QuantitySpec::Atoms(1.0e10));
        assert_eq!(
            sample.to_string(),
            "1.00000e+10 atoms of Co-61 at 2023-06-01 12:00:00 UTC"
        );
    }
}
