//! Impulse sweep through a sinc delay.
//!
//! Feeds a unit impulse while moving `alpha` linearly from 0 to 1, one step per
//! sample, and records what comes out. This is the usage a host driving the
//! delay from an automation lane would see.

use crate::audio::{Delay, MultiTapSincDelay};

#[derive(Debug, Clone, Copy)]
pub struct Frame {
    pub input: f32,
    pub output: f32,
    pub alpha: f32,
}

/// `alpha` at step `i` of a sweep over `samples` steps.
pub fn alpha_at(i: usize, samples: usize) -> f32 {
    if samples < 2 {
        return 0.0;
    }
    i as f32 / (samples - 1) as f32
}

pub fn sweep<D: Delay>(delay: &mut MultiTapSincDelay<D>, samples: usize) -> Vec<Frame> {
    (0..samples)
        .map(|i| {
            let alpha = alpha_at(i, samples);
            delay.set_alpha(alpha).expect("sweep alpha in [0, 1]");

            let input = if i == 0 { 1.0 } else { 0.0 };
            let output = delay.process(input);

            Frame {
                input,
                output,
                alpha,
            }
        })
        .collect()
}

/// Impulse response at a fixed `alpha`.
pub fn impulse_response<D: Delay>(delay: &mut MultiTapSincDelay<D>, samples: usize) -> Vec<f32> {
    (0..samples)
        .map(|i| delay.process(if i == 0 { 1.0 } else { 0.0 }))
        .collect()
}

/// Index of the first largest magnitude.
pub fn peak_lag(output: &[f32]) -> usize {
    let mut best = 0;
    for (i, v) in output.iter().enumerate() {
        if v.abs() > output[best].abs() {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::audio::{sinc, MemorySincDelay};
    use crate::f32cmp::F32Cmp;

    type Sd = MemorySincDelay<4096>;

    fn scenario() -> Sd {
        let mut d = Sd::new(4096, 2, 44_100.0).unwrap();
        d.set_tau1(100.5).unwrap();
        d.set_tau2(500.7).unwrap();
        d
    }

    #[test]
    fn sweep_alpha_goes_zero_to_one() {
        let mut d = scenario();
        let frames = sweep(&mut d, 1000);
        assert_eq!(frames.len(), 1000);
        assert_eq!(frames[0].alpha, 0.0);
        assert_eq!(frames[999].alpha, 1.0);
        assert_eq!(frames[0].input, 1.0);
        assert!(frames[1..].iter().all(|f| f.input == 0.0));
        assert_eq!(d.alpha(), 1.0);
    }

    #[test]
    fn sweep_output_is_finite() {
        let mut d = scenario();
        for (i, f) in sweep(&mut d, 1000).iter().enumerate() {
            assert!(f.output.is_finite(), "at {}", i);
        }
    }

    #[test]
    fn sweep_responds_only_near_taps() {
        let mut d = scenario();
        let frames = sweep(&mut d, 1000);

        // The impulse passes the taps at 100.5, 500.7 and 900.9 samples.
        let near_tap = |i: usize| matches!(i, 100 | 101 | 500 | 501 | 900 | 901);

        for (i, f) in frames.iter().enumerate() {
            if !near_tap(i) {
                assert_eq!(f.output, F32Cmp(0.0), "at {}", i);
            }
        }
    }

    #[test]
    fn sweep_response_follows_alpha() {
        let mut d = scenario();
        let frames = sweep(&mut d, 1000);

        // Half the impulse falls on each side of a .5 delay, weighted by the
        // tau1 tap at the alpha of that moment.
        let a = alpha_at(100, 1000);
        assert_eq!(frames[100].output, F32Cmp(0.5 * sinc(-a)));
        let a = alpha_at(101, 1000);
        assert_eq!(frames[101].output, F32Cmp(0.5 * sinc(-a)));

        // 0.3/0.7 split around 500.7, weighted by the tau2 tap.
        let a = alpha_at(500, 1000);
        assert_eq!(frames[500].output, F32Cmp(0.3 * sinc(1.0 - a)));
        let a = alpha_at(501, 1000);
        assert_eq!(frames[501].output, F32Cmp(0.7 * sinc(1.0 - a)));

        // Early on the tau1 tap dominates, mid sweep the two are comparable.
        assert!(frames[100].output > 0.45);
        assert!(frames[501].output > 0.4);
    }

    #[test]
    fn peak_moves_from_tau1_to_tau2() {
        let mut last = 0;
        let mut peaks = Vec::new();

        for step in 0..=10 {
            let mut d = scenario();
            d.set_alpha(step as f32 / 10.0).unwrap();

            let peak = peak_lag(&impulse_response(&mut d, 2000));

            // Never moves back more than the interpolation neighbour.
            assert!(peak + 1 >= last, "alpha step {}: {} after {}", step, peak, last);
            last = peak;
            peaks.push(peak);
        }

        assert!(peaks[0] == 100 || peaks[0] == 101, "{:?}", peaks);
        assert!(peaks[10] == 500 || peaks[10] == 501, "{:?}", peaks);
    }

    #[test]
    fn peak_lag_first_max() {
        assert_eq!(peak_lag(&[0.0, 0.5, -0.5, 0.2]), 1);
        assert_eq!(peak_lag(&[0.0, 0.1, -0.9]), 2);
        assert_eq!(peak_lag(&[]), 0);
    }
}
