//! Property-based tests for granula-core primitives.
//!
//! Covers position wrapping, parameter convergence, random source ranges,
//! and descriptor normalization using proptest for randomized inputs.

use granula_core::{ParamDescriptor, ParamScale, RandomSource, SmoothedParam, Xorshift32, wrap_unit};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Any finite position wraps into [0, 1) and stays congruent modulo 1.
    #[test]
    fn wrap_unit_lands_in_range(x in -8.0f32..8.0f32) {
        let wrapped = wrap_unit(x);
        prop_assert!((0.0..1.0).contains(&wrapped), "wrap_unit({}) = {}", x, wrapped);

        let diff = x - wrapped;
        let nearest = diff.round();
        prop_assert!(
            (diff - nearest).abs() < 1e-5 || (diff - nearest).abs() > 1.0 - 1e-5,
            "wrap_unit({}) = {} is not an integer shift", x, wrapped
        );
    }

    /// Wrapping is idempotent.
    #[test]
    fn wrap_unit_idempotent(x in -1000.0f32..1000.0f32) {
        let once = wrap_unit(x);
        prop_assert_eq!(wrap_unit(once), once);
    }

    /// SmoothedParam converges toward its target value.
    ///
    /// The one-pole step stalls once it rounds to zero in f32, so the bound
    /// is the precision floor `ULP(target) / coeff` plus a small constant.
    #[test]
    fn smoothed_param_convergence(
        initial in -100.0f32..100.0f32,
        target in -100.0f32..100.0f32,
    ) {
        let mut param = SmoothedParam::standard(initial, 48000.0);
        param.set_target(target);

        for _ in 0..10000 {
            param.advance();
        }

        let ulp_estimate = target.abs() * f32::EPSILON;
        let precision_floor = ulp_estimate / 0.002 + 1e-4;
        let diff = (param.get() - target).abs();
        prop_assert!(
            diff < precision_floor,
            "SmoothedParam did not converge: initial={}, target={}, got={}, diff={}, tol={}",
            initial, target, param.get(), diff, precision_floor
        );
    }

    /// Block smoothing never overshoots the target.
    #[test]
    fn smoothed_param_advance_by_bounded(
        initial in 0.0f32..1.0f32,
        target in 0.0f32..1.0f32,
        block in 1usize..4096,
    ) {
        let mut param = SmoothedParam::standard(initial, 48000.0);
        param.set_target(target);
        let value = param.advance_by(block);
        let (lo, hi) = if initial < target { (initial, target) } else { (target, initial) };
        prop_assert!(value >= lo - 1e-6 && value <= hi + 1e-6,
            "advance_by({}) gave {} outside [{}, {}]", block, value, lo, hi);
    }

    /// Every seed produces draws in [0, 1).
    #[test]
    fn xorshift_unit_range(seed in any::<u32>()) {
        let mut rng = Xorshift32::new(seed);
        for _ in 0..256 {
            let x = rng.next_unit();
            prop_assert!((0.0..1.0).contains(&x), "seed {} drew {}", seed, x);
        }
    }

    /// normalize and denormalize invert each other for power scales.
    #[test]
    fn descriptor_power_roundtrip(value in 0.0f32..=100.0f32, exp in 0.25f32..4.0f32) {
        let desc = ParamDescriptor::percent("Amount", "Amt", 50.0).with_scale(ParamScale::Power(exp));
        let back = desc.denormalize(desc.normalize(value));
        prop_assert!((back - value).abs() < 0.05, "value {} exp {} -> {}", value, exp, back);
    }
}
