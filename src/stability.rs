use crate::CoefficientSet;

/// Root of a section's characteristic polynomial.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pole {
    pub re: f64,
    pub im: f64,
}
impl Pole {
    pub fn norm(&self) -> f64 {
        self.re.hypot(self.im)
    }
}

/// Pole placement of one section. Recomputed on demand, never stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StabilityVerdict {
    pub poles: [Pole; 2],
    pub magnitudes: [f64; 2],
    /// Both poles lie strictly inside the unit circle.
    pub stable: bool,
}
impl StabilityVerdict {
    /// Largest pole magnitude, the distance to instability is `1 - max_magnitude`.
    pub fn max_magnitude(&self) -> f64 {
        self.magnitudes[0].max(self.magnitudes[1])
    }
}

/// Locates the poles of a coefficient set.
pub fn check(coeffs: &CoefficientSet) -> StabilityVerdict {
    check_denominator(coeffs.a1, coeffs.a2)
}

/// Solves `z^2 + a1 z + a2 = 0` in closed form.
///
/// Total over every input: non-finite values produce non-finite magnitudes,
/// which never compare below one, so the verdict is unstable.
pub fn check_denominator(a1: f64, a2: f64) -> StabilityVerdict {
    let discriminant = a1 * a1 - 4. * a2;
    let poles = if discriminant < 0. {
        let re = -a1 / 2.;
        let im = (-discriminant).sqrt() / 2.;
        [Pole { re, im }, Pole { re, im: -im }]
    } else {
        let root = discriminant.sqrt();
        [
            Pole {
                re: (-a1 + root) / 2.,
                im: 0.,
            },
            Pole {
                re: (-a1 - root) / 2.,
                im: 0.,
            },
        ]
    };
    let magnitudes = [poles[0].norm(), poles[1].norm()];
    StabilityVerdict {
        poles,
        magnitudes,
        stable: magnitudes.iter().all(|magnitude| *magnitude < 1.),
    }
}
