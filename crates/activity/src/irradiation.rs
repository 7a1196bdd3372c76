//! Thermal neutron irradiation windows and activation arithmetic

// external crates
use chrono::{DateTime, Utc};
use serde::Serialize;

// radtools modules
use radtools_nuclide::Isotope;
use radtools_utils::ValueExt;

// internal modules
use crate::datetime::{elapsed_seconds, normalise_datetime};
use crate::error::{Error, Result};
use crate::quantity::{AcquisitionWindow, IsotopeQuantity, QuantitySpec};

/// Conversion factor from barns to cm2
const BARNS_TO_CM2: f64 = 1.0e-24;

/// The ways to characterise the neutron exposure of a window
///
/// Exactly one of the total fluence or the constant fluence rate is
/// given, the other is derived from the window duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Fluence {
    /// Total fluence over the window (neutrons/cm2)
    Total(f64),
    /// Constant fluence rate (neutrons/cm2/s)
    Rate(f64),
}

/// A fixed window of thermal neutron exposure
///
/// Relates a pre-irradiation parent quantity to a post-irradiation
/// activated quantity through the usual thin-target activation
/// equations, in either direction.
///
/// Forward, with the known side before the window:
///
/// - `A1 = phi * sigma * N0 * (1 - exp(-lambda * t_irr))`
/// - `A1 = n * sigma * N0 * lambda` for a zero-duration pulse
///
/// and backward, solving the same equations for `N0` from a known
/// activated activity `A1` at the end of the window.
///
/// ```rust
/// # use radtools_activity::{Fluence, NeutronIrradiation};
/// let irradiation = NeutronIrradiation::from_timestamps(
///     "2023-06-01T06:00:00Z",
///     "2023-06-01T07:00:00Z",
///     Fluence::Rate(1.0e11),
/// ).unwrap();
///
/// assert_eq!(irradiation.duration(), 3600.0);
/// assert_eq!(irradiation.n_cm2(), 3.6e14);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NeutronIrradiation {
    start_time: DateTime<Utc>,
    stop_time: DateTime<Utc>,
    duration: f64,
    n_cm2: f64,
    n_cm2_s: Option<f64>,
}

impl NeutronIrradiation {
    /// An irradiation window between two timestamps
    ///
    /// Fails when the stop precedes the start.
    pub fn new(
        start_time: DateTime<Utc>,
        stop_time: DateTime<Utc>,
        fluence: Fluence,
    ) -> Result<Self> {
        if stop_time < start_time {
            return Err(Error::TimestampsOutOfOrder {
                start: start_time,
                stop: stop_time,
            });
        }
        let duration = elapsed_seconds(start_time, stop_time);

        // Derive whichever characterisation was not supplied
        let (n_cm2, n_cm2_s) = match fluence {
            Fluence::Rate(rate) => (rate * duration, Some(rate)),
            Fluence::Total(n) if duration > 0.0 => (n, Some(n / duration)),
            Fluence::Total(n) => (n, None),
        };

        Ok(Self {
            start_time,
            stop_time,
            duration,
            n_cm2,
            n_cm2_s,
        })
    }

    /// An irradiation window between two date strings
    ///
    /// Anything accepted by
    /// [normalise_datetime](crate::normalise_datetime) works.
    pub fn from_timestamps(start: &str, stop: &str, fluence: Fluence) -> Result<Self> {
        Self::new(normalise_datetime(start)?, normalise_datetime(stop)?, fluence)
    }

    /// Start of the irradiation
    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    /// End of the irradiation
    pub fn stop_time(&self) -> DateTime<Utc> {
        self.stop_time
    }

    /// Window duration (s)
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Total fluence over the window (neutrons/cm2)
    pub fn n_cm2(&self) -> f64 {
        self.n_cm2
    }

    /// Fluence rate (neutrons/cm2/s), undefined for a zero-duration pulse
    /// specified by total fluence
    pub fn n_cm2_s(&self) -> Option<f64> {
        self.n_cm2_s
    }

    /// Activity of the product nuclide induced from a known parent quantity
    ///
    /// The `initial` quantity is evaluated at the end of the window, and
    /// the result is a quantity of `activated` anchored there by the
    /// computed activity. The parent must be stable, activation from an
    /// already-radioactive source is unsupported.
    ///
    /// ```rust
    /// # use radtools_activity::{Fluence, IsotopeQuantity, NeutronIrradiation, QuantitySpec};
    /// # use radtools_nuclide::Isotope;
    /// # use chrono::{TimeZone, Utc};
    /// let mn55: Isotope = "Mn-55".parse().unwrap();
    /// let mn56: Isotope = "Mn-56".parse().unwrap();
    ///
    /// let start = Utc.with_ymd_and_hms(2023, 6, 1, 6, 0, 0).unwrap();
    /// let stop = Utc.with_ymd_and_hms(2023, 6, 1, 7, 0, 0).unwrap();
    /// let irradiation =
    ///     NeutronIrradiation::new(start, stop, Fluence::Rate(1.0e12)).unwrap();
    ///
    /// // A milligram foil of Mn-55 in the beam
    /// let foil = IsotopeQuantity::new(mn55, start, QuantitySpec::Grams(1.0e-3)).unwrap();
    /// let product = irradiation
    ///     .activate_forward(13.3, &foil, mn56)
    ///     .unwrap();
    ///
    /// assert_eq!(product.ref_date(), stop);
    /// assert!(product.bq_at(stop).unwrap() > 0.0);
    /// ```
    pub fn activate_forward(
        &self,
        barns: f64,
        initial: &IsotopeQuantity,
        activated: Isotope,
    ) -> Result<IsotopeQuantity> {
        self.check_initial(initial.isotope())?;
        let lambda = activated
            .decay_const()
            .ok_or_else(|| Error::MissingHalflife {
                isotope: activated.name(),
            })?;
        if lambda == 0.0 {
            return Err(Error::StableActivation {
                isotope: activated.name(),
            });
        }

        let sigma = barns * BARNS_TO_CM2;
        let parent_atoms = initial.atoms_at(self.stop_time)?;

        let activated_bq = if self.duration == 0.0 {
            self.n_cm2 * sigma * parent_atoms * lambda
        } else {
            let rate = self.n_cm2 / self.duration;
            rate * sigma * parent_atoms * (1.0 - f64::exp(-lambda * self.duration))
        };

        IsotopeQuantity::new(activated, self.stop_time, QuantitySpec::Becquerels(activated_bq))
    }

    /// Parent atom count consistent with a known activated quantity
    ///
    /// Algebraic inverse of [activate_forward](Self::activate_forward),
    /// solving the parent atom count from the activated activity at the
    /// end of the window. The result is a quantity of `initial` anchored
    /// at the window stop time.
    pub fn activate_backward(
        &self,
        barns: f64,
        activated: &IsotopeQuantity,
        initial: Isotope,
    ) -> Result<IsotopeQuantity> {
        self.check_initial(initial)?;
        let lambda = activated.decay_const();
        if lambda == 0.0 {
            return Err(Error::StableActivation {
                isotope: activated.isotope().name(),
            });
        }

        let sigma = barns * BARNS_TO_CM2;
        let activated_bq = activated.bq_at(self.stop_time)?;

        let parent_atoms = if self.duration == 0.0 {
            activated_bq / (self.n_cm2 * sigma * lambda)
        } else {
            let rate = self.n_cm2 / self.duration;
            activated_bq / (rate * sigma * (1.0 - f64::exp(-lambda * self.duration)))
        };

        IsotopeQuantity::new(initial, self.stop_time, QuantitySpec::Atoms(parent_atoms))
    }

    /// The initial isotope must be stable, and verifiably so
    fn check_initial(&self, isotope: Isotope) -> Result<()> {
        match isotope.halflife() {
            Some(f64::INFINITY) => Ok(()),
            Some(_) => Err(Error::RadioactiveInitial {
                isotope: isotope.name(),
            }),
            None => Err(Error::MissingHalflife {
                isotope: isotope.name(),
            }),
        }
    }
}

/// An irradiation is itself a start/stop window
impl AcquisitionWindow for NeutronIrradiation {
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    fn stop_time(&self) -> DateTime<Utc> {
        self.stop_time
    }
}

impl std::fmt::Display for NeutronIrradiation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} n/cm2 over {} s from {}",
            self.n_cm2.sci(5, 2),
            self.duration,
            self.start_time.format("%Y-%m-%d %H:%M:%S UTC")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use radtools_utils::FloatExt;
    use rstest::rstest;

    const RTOL: f64 = 1e-9;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 6, 1, 6, 0, 0).unwrap()
    }

    fn stop() -> DateTime<Utc> {
        start() + Duration::seconds(3600)
    }

    fn mn55() -> Isotope {
        "Mn-55".parse().unwrap()
    }

    fn mn56() -> Isotope {
        "Mn-56".parse().unwrap()
    }

    #[test]
    fn derives_total_from_rate() {
        let irr = NeutronIrradiation::new(start(), stop(), Fluence::Rate(1.0e11)).unwrap();
        assert_eq!(irr.duration(), 3600.0);
        assert_eq!(irr.n_cm2(), 3.6e14);
        assert_eq!(irr.n_cm2_s(), Some(1.0e11));
    }

    #[test]
    fn derives_rate_from_total() {
        let irr = NeutronIrradiation::new(start(), stop(), Fluence::Total(3.6e14)).unwrap();
        assert_eq!(irr.n_cm2_s(), Some(1.0e11));
    }

    #[test]
    fn zero_duration_pulse() {
        let irr = NeutronIrradiation::new(start(), start(), Fluence::Total(1.0e15)).unwrap();
        assert_eq!(irr.duration(), 0.0);
        assert_eq!(irr.n_cm2(), 1.0e15);
        assert_eq!(irr.n_cm2_s(), None);
    }

    #[test]
    fn timestamps_out_of_order() {
        assert!(matches!(
            NeutronIrradiation::new(stop(), start(), Fluence::Rate(1.0e11)),
            Err(Error::TimestampsOutOfOrder { .. })
        ));
    }

    #[test]
    fn forward_finite_duration() {
        let irr = NeutronIrradiation::new(start(), stop(), Fluence::Rate(1.0e12)).unwrap();
        let foil = IsotopeQuantity::new(mn55(), start(), QuantitySpec::Atoms(1.0e20)).unwrap();

        let product = irr.activate_forward(13.3, &foil, mn56()).unwrap();
        assert_eq!(product.isotope(), mn56());
        assert_eq!(product.ref_date(), stop());

        let lambda = mn56().decay_const().unwrap();
        let expected =
            1.0e12 * 13.3e-24 * 1.0e20 * (1.0 - f64::exp(-lambda * 3600.0));
        assert!(product.bq_at(stop()).unwrap().approx_eq(expected, RTOL));
    }

    #[test]
    fn forward_zero_duration() {
        let irr = NeutronIrradiation::new(start(), start(), Fluence::Total(1.0e15)).unwrap();
        let foil = IsotopeQuantity::new(mn55(), start(), QuantitySpec::Atoms(1.0e20)).unwrap();

        let product = irr.activate_forward(13.3, &foil, mn56()).unwrap();
        let lambda = mn56().decay_const().unwrap();
        let expected = 1.0e15 * 13.3e-24 * 1.0e20 * lambda;
        assert!(product.bq_at(start()).unwrap().approx_eq(expected, RTOL));
    }

    // Backward must recover what forward would produce, in both regimes
    #[rstest]
    #[case(Fluence::Rate(1.0e12), 3600)]
    #[case(Fluence::Total(1.0e15), 0)]
    fn round_trip_through_both_directions(#[case] fluence: Fluence, #[case] seconds: i64) {
        let stop = start() + Duration::seconds(seconds);
        let irr = NeutronIrradiation::new(start(), stop, fluence).unwrap();

        let foil = IsotopeQuantity::new(mn55(), start(), QuantitySpec::Atoms(1.0e20)).unwrap();
        let product = irr.activate_forward(13.3, &foil, mn56()).unwrap();
        let recovered = irr.activate_backward(13.3, &product, mn55()).unwrap();

        assert_eq!(recovered.isotope(), mn55());
        assert!(recovered.ref_atoms().approx_eq(1.0e20, RTOL));
    }

    #[test]
    fn radioactive_initial_unsupported() {
        let irr = NeutronIrradiation::new(start(), stop(), Fluence::Rate(1.0e12)).unwrap();
        let co60: Isotope = "Co-60".parse().unwrap();
        let source = IsotopeQuantity::new(co60, start(), QuantitySpec::Becquerels(1.0)).unwrap();

        assert!(matches!(
            irr.activate_forward(2.0, &source, mn56()),
            Err(Error::RadioactiveInitial { .. })
        ));
    }

    #[test]
    fn unknown_initial_halflife_rejected() {
        let irr = NeutronIrradiation::new(start(), stop(), Fluence::Rate(1.0e12)).unwrap();
        let product = IsotopeQuantity::new(mn56(), stop(), QuantitySpec::Becquerels(1.0)).unwrap();
        let unknown: Isotope = "Co-61".parse().unwrap();

        assert!(matches!(
            irr.activate_backward(2.0, &product, unknown),
            Err(Error::MissingHalflife { .. })
        ));
    }

    #[test]
    fn stable_activation_product_rejected() {
        let irr = NeutronIrradiation::new(start(), stop(), Fluence::Rate(1.0e12)).unwrap();
        let foil = IsotopeQuantity::new(mn55(), start(), QuantitySpec::Atoms(1.0e20)).unwrap();
        let fe56: Isotope = "Fe-56".parse().unwrap();

        assert!(matches!(
            irr.activate_forward(2.0, &foil, fe56),
            Err(Error::StableActivation { .. })
        ));
    }

    #[test]
    fn zero_duration_window_has_no_average_activity() {
        let irr = NeutronIrradiation::new(start(), start(), Fluence::Total(1.0e15)).unwrap();
        let product =
            IsotopeQuantity::new(mn56(), start(), QuantitySpec::Becquerels(100.0)).unwrap();
        assert!(matches!(
            product.bq_during(&irr),
            Err(Error::ZeroLengthInterval { .. })
        ));
    }

    #[test]
    fn window_exposes_acquisition_interval() {
        let irr = NeutronIrradiation::new(start(), stop(), Fluence::Rate(1.0e12)).unwrap();
        let product = IsotopeQuantity::new(mn56(), stop(), QuantitySpec::Becquerels(100.0))
            .unwrap()
            .without_creation_date();
        assert!(product.bq_during(&irr).unwrap() > 0.0);
    }
}
