//! Schmidt quasi-normalized associated Legendre functions and longitude harmonics.
//!
//! Terms are stored in the canonical (n, m) order at index `n(n+1)/2 + m`, so `(1,0)` sits
//! at index 1 and slot 0 is unused. The stored `P(n,m)` values carry an extra `(n+1)` factor,
//! the radial derivative weight of the potential, which the Z and Y sums rely on; `Q(n,m)` is
//! the colatitude derivative.

use crate::constants::{Radian, LEGENDRE_TABLE_SIZE, MAX_SUPPORTED_DEGREE};

#[inline]
pub(crate) const fn term_index(n: usize, m: usize) -> usize {
    n * (n + 1) / 2 + m
}

/// `P(n,m)` and `Q(n,m)` for every term up to a truncation degree.
#[derive(Debug, Clone)]
pub(crate) struct LegendreTable {
    p: [f64; LEGENDRE_TABLE_SIZE],
    q: [f64; LEGENDRE_TABLE_SIZE],
}

impl LegendreTable {
    /// Fill the table up to degree `nmax` for a geocentric latitude given by its sine and
    /// cosine (cosine and sine of the colatitude).
    ///
    /// Degrees 1 and 2 (orders 0 and 1) are seeded in closed form. Every further term comes
    /// from the diagonal recurrence `(n-1, n-1) → (n, n)` or from the three-term recurrence
    /// `(n-1, m), (n-2, m) → (n, m)`.
    pub(crate) fn new(nmax: usize, sin_lat: f64, cos_lat: f64) -> Self {
        debug_assert!(nmax <= MAX_SUPPORTED_DEGREE);

        let mut p = [0.0; LEGENDRE_TABLE_SIZE];
        let mut q = [0.0; LEGENDRE_TABLE_SIZE];
        let sqrt3 = 3.0_f64.sqrt();

        p[1] = 2.0 * sin_lat;
        p[2] = 2.0 * cos_lat;
        p[3] = 4.5 * sin_lat * sin_lat - 1.5;
        p[4] = 3.0 * sqrt3 * cos_lat * sin_lat;
        q[1] = -cos_lat;
        q[2] = sin_lat;
        q[3] = -3.0 * cos_lat * sin_lat;
        q[4] = sqrt3 * (sin_lat * sin_lat - cos_lat * cos_lat);

        for n in 2..=nmax {
            let fn_ = n as f64;
            let first_order = if n == 2 { 2 } else { 0 };

            for m in first_order..=n {
                let fm = m as f64;
                let k = term_index(n, m);

                if m == n {
                    let j = term_index(n - 1, m - 1);
                    let aa = (1.0 - 0.5 / fm).sqrt();
                    p[k] = (1.0 + 1.0 / fm) * aa * cos_lat * p[j];
                    q[k] = aa * (cos_lat * q[j] + sin_lat / fm * p[j]);
                } else {
                    let prev = term_index(n - 1, m);
                    // (n-2, m) only exists for m <= n-2; otherwise its weight bb is zero
                    let (p2, q2) = if m + 2 <= n {
                        let j = term_index(n - 2, m);
                        (p[j], q[j])
                    } else {
                        (0.0, 0.0)
                    };

                    let aa = (fn_ * fn_ - fm * fm).sqrt();
                    let bb = ((fn_ - 1.0) * (fn_ - 1.0) - fm * fm).sqrt() / aa;
                    let cc = (2.0 * fn_ - 1.0) / aa;

                    p[k] = (fn_ + 1.0) * (cc * sin_lat / fn_ * p[prev] - bb / (fn_ - 1.0) * p2);
                    q[k] = cc * (sin_lat * q[prev] - cos_lat / fn_ * p[prev]) - bb * q2;
                }
            }
        }

        LegendreTable { p, q }
    }

    #[inline]
    pub(crate) fn p(&self, n: usize, m: usize) -> f64 {
        self.p[term_index(n, m)]
    }

    #[inline]
    pub(crate) fn q(&self, n: usize, m: usize) -> f64 {
        self.q[term_index(n, m)]
    }
}

/// `cos(mλ)` and `sin(mλ)` for `m = 0..=nmax`.
#[derive(Debug, Clone)]
pub(crate) struct LongitudeHarmonics {
    cos: [f64; MAX_SUPPORTED_DEGREE + 1],
    sin: [f64; MAX_SUPPORTED_DEGREE + 1],
}

impl LongitudeHarmonics {
    /// Only `m = 1` calls the trigonometric functions; higher orders use angle addition.
    pub(crate) fn new(nmax: usize, lon: Radian) -> Self {
        let mut cos = [0.0; MAX_SUPPORTED_DEGREE + 1];
        let mut sin = [0.0; MAX_SUPPORTED_DEGREE + 1];
        cos[0] = 1.0;
        cos[1] = lon.cos();
        sin[1] = lon.sin();

        for m in 2..=nmax {
            sin[m] = sin[m - 1] * cos[1] + cos[m - 1] * sin[1];
            cos[m] = cos[m - 1] * cos[1] - sin[m - 1] * sin[1];
        }

        LongitudeHarmonics { cos, sin }
    }

    #[inline]
    pub(crate) fn cos(&self, m: usize) -> f64 {
        self.cos[m]
    }

    #[inline]
    pub(crate) fn sin(&self, m: usize) -> f64 {
        self.sin[m]
    }
}
