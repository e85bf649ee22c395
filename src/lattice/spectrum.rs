//! Spatial Power Spectrum of Lattice Snapshots
//!
//! For a snapshot x₀…x_{n−1} and wavenumber k = 0…⌊n/2⌋−1:
//!
//!   Re_k = Σⱼ xⱼ·cos(2πkj/n),   Im_k = Σⱼ xⱼ·sin(2πkj/n)
//!   S(k) = (Re_k² + Im_k²) / n
//!
//! Direct O(n²) summation. Lattices here are tens to a few hundred sites.

use ndarray::{Array1, ArrayView1, ArrayView2, Axis};
use std::f64::consts::TAU;

use crate::error::{ChaosError, ChaosResult};

/// Power spectrum of one lattice state, length ⌊n/2⌋
pub fn power_spectrum(lattice: ArrayView1<f64>) -> ChaosResult<Array1<f64>> {
    let n = lattice.len();
    if n == 0 {
        return Err(ChaosError::EmptyLattice);
    }

    let n_f = n as f64;
    let spectrum = Array1::from_shape_fn(n / 2, |k| {
        let (re, im) = lattice.iter().enumerate().fold((0.0, 0.0), |(re, im), (j, &x)| {
            let angle = TAU * (k * j) as f64 / n_f;
            (re + x * angle.cos(), im + x * angle.sin())
        });
        (re * re + im * im) / n_f
    });

    Ok(spectrum)
}

/// Mean power spectrum over the rows of a lattice history
///
/// The first `skip` rows are treated as transient and ignored. At least
/// one row must remain.
pub fn mean_power_spectrum(history: ArrayView2<f64>, skip: usize) -> ChaosResult<Array1<f64>> {
    let (rows, n) = history.dim();
    if n == 0 {
        return Err(ChaosError::EmptyLattice);
    }
    if skip >= rows {
        return Err(ChaosError::InvalidCount {
            name: "retained history rows",
            min: 1,
            got: rows.saturating_sub(skip),
        });
    }

    let mut total = Array1::<f64>::zeros(n / 2);
    for row in history.axis_iter(Axis(0)).skip(skip) {
        total += &power_spectrum(row)?;
    }

    Ok(total / (rows - skip) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array2};

    #[test]
    fn test_spectrum_length() {
        for n in 1..12 {
            let lattice = Array1::from_elem(n, 0.5);
            assert_eq!(power_spectrum(lattice.view()).unwrap().len(), n / 2);
        }
    }

    #[test]
    fn test_constant_lattice_has_only_dc() {
        let lattice = Array1::from_elem(16, 0.5);
        let spectrum = power_spectrum(lattice.view()).unwrap();
        // S(0) = (n·c)² / n = n·c²
        assert!((spectrum[0] - 16.0 * 0.25).abs() < 1e-12);
        for k in 1..spectrum.len() {
            assert!(spectrum[k].abs() < 1e-20, "S({}) = {}", k, spectrum[k]);
        }
    }

    #[test]
    fn test_pure_mode_peaks_at_its_wavenumber() {
        let n = 32;
        let mode = 5;
        let lattice = Array1::from_shape_fn(n, |j| (TAU * (mode * j) as f64 / n as f64).cos());
        let spectrum = power_spectrum(lattice.view()).unwrap();

        // |Σ cos²| = n/2, so S = (n/2)² / n = n/4
        assert!((spectrum[mode] - n as f64 / 4.0).abs() < 1e-9, "S = {}", spectrum[mode]);
        for k in (0..spectrum.len()).filter(|&k| k != mode) {
            assert!(spectrum[k] < 1e-9, "leak at k = {}: {}", k, spectrum[k]);
        }
    }

    #[test]
    fn test_alternating_lattice() {
        let lattice = array![1.0, 0.0, 1.0, 0.0];
        let spectrum = power_spectrum(lattice.view()).unwrap();
        assert_eq!(spectrum.len(), 2);
        assert!((spectrum[0] - 1.0).abs() < 1e-12);
        assert!(spectrum[1].abs() < 1e-12);
    }

    #[test]
    fn test_empty_lattice_rejected() {
        let empty = Array1::<f64>::zeros(0);
        assert_eq!(power_spectrum(empty.view()), Err(ChaosError::EmptyLattice));
    }

    #[test]
    fn test_mean_spectrum() {
        let mut history = Array2::<f64>::zeros((3, 4));
        history.row_mut(1).fill(1.0);
        history.row_mut(2).fill(0.5);

        let mean = mean_power_spectrum(history.view(), 1).unwrap();
        // S(0) = n·c²: 4.0 and 1.0
        assert!((mean[0] - 2.5).abs() < 1e-12, "mean S(0) = {}", mean[0]);

        assert!(mean_power_spectrum(history.view(), 3).is_err());
    }
}
