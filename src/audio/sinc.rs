use core::f32::consts::PI;

#[allow(unused_imports)]
use micromath::F32Ext;

/// Below this `|tau2 - tau1|` the two delays are treated as the same delay.
pub const DELTA_TOLERANCE: f64 = f64::EPSILON * 100.0;

/// Below this `|x|` the sinc is taken at its limit, 1.
pub const SINC_TOLERANCE: f32 = f32::EPSILON;

/// Normalized sinc, `sin(πx) / πx` with `sinc(0) = 1`.
///
/// Zero at every non-zero integer, which is what makes taps spaced by whole
/// multiples of the delay distance vanish when the blend lands on one of them.
pub fn sinc(x: f32) -> f32 {
    if x.abs() < SINC_TOLERANCE {
        return 1.0;
    }
    let pi_x = PI * x;
    pi_x.sin() / pi_x
}

/// Whether two delays are close enough to be read as one.
#[inline(always)]
pub fn coincide(tau1: f64, tau2: f64) -> bool {
    let d = tau2 - tau1;
    d > -DELTA_TOLERANCE && d < DELTA_TOLERANCE
}
