mod common;

use common::synthetic_image::{brute_force_distance, disc_mask, ellipse_mask, point_mask};
use distance_field::jfa::{
    generate_distance_field, generate_distance_field_with, generate_packed_sdf, invert_mask,
    min_iterations, unreachable_distance, DistanceField, JfaOptions, JumpSchedule,
};
use distance_field::{Error, Field2D};

#[test]
fn single_seed_corner_distance_within_one_percent() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mask = point_mask(64, 64, 32, 32);
    let df = generate_distance_field(&mask, false).unwrap();

    let expected = 32.0 * std::f32::consts::SQRT_2 / 64.0;
    let got = df.get(0, 0);
    assert!(
        (got - expected).abs() <= 0.01 * expected,
        "corner distance {got} vs {expected}"
    );
    assert_eq!(df.get(32, 32), 0.0);
    assert_eq!(df.normalization, 64.0);
}

#[test]
fn single_seed_distance_grows_with_radius() {
    let mask = point_mask(48, 40, 17, 23);
    let df = generate_distance_field(&mask, false).unwrap();
    for y in 0..df.height() {
        for x in 1..df.width() {
            let d_prev = df.get(x - 1, y);
            let d = df.get(x, y);
            if x > 17 {
                assert!(d >= d_prev, "row {y}: {d_prev} -> {d} at x={x}");
            } else {
                assert!(d <= d_prev, "row {y}: {d_prev} -> {d} at x={x}");
            }
        }
    }
    assert!(df.get(47, 0) > df.get(30, 10));
}

#[test]
fn disc_unsigned_close_to_brute_force() {
    let mask = disc_mask(40, 40, 19.5, 19.5, 7.0);
    let level = generate_distance_field(&mask, false).unwrap();
    let halving = generate_distance_field_with(
        &mask,
        false,
        &JfaOptions::default().with_schedule(JumpSchedule::Halving),
    )
    .unwrap();
    for y in 0..mask.h {
        for x in 0..mask.w {
            let truth = brute_force_distance(&mask, x, y);
            let got = level.get_pixels(x, y);
            assert!(got >= truth - 1e-3, "JFA cannot beat the exact distance");
            assert!(got - truth < 1.0, "({x},{y}) got {got} truth {truth}");
            assert!((halving.get_pixels(x, y) - truth).abs() < 1e-3);
        }
    }
    for &(x, y) in &[(0, 0), (39, 39), (19, 2), (35, 20), (5, 30)] {
        let truth = brute_force_distance(&mask, x, y);
        assert!((level.get_pixels(x, y) - truth).abs() < 1e-3);
    }
}

#[test]
fn signed_sign_follows_membership() {
    let mask = ellipse_mask(50, 36, (24.0, 18.0), 14.0, 6.0, 0.4);
    let df = generate_distance_field(&mask, true).unwrap();
    let half_texel = 0.5 / df.normalization;
    for y in 0..mask.h {
        for x in 0..mask.w {
            let v = df.get(x, y);
            if mask.get(x, y) {
                assert!(v < 0.0, "inside pixel ({x},{y}) = {v}");
            } else {
                assert!(v > 0.0, "outside pixel ({x},{y}) = {v}");
            }
            let on_boundary = mask.get(x, y)
                && [(-1i64, 0i64), (1, 0), (0, -1), (0, 1)].iter().any(|&(dx, dy)| {
                    !mask.get_clamped(x as i64 + dx, y as i64 + dy)
                });
            if on_boundary {
                assert!((v + half_texel).abs() < 1e-6, "boundary seed ({x},{y}) = {v}");
            }
        }
    }
}

#[test]
fn signed_interior_depth_matches_inverted_transform() {
    let mask = disc_mask(32, 32, 15.5, 15.5, 9.0);
    let signed = generate_distance_field(&mask, true).unwrap();
    let inside = generate_distance_field(&invert_mask(&mask), false).unwrap();
    let half = 0.5 / signed.normalization;
    let v = signed.get(15, 15);
    assert!((v + inside.get(15, 15) - half).abs() < 1e-6);
    assert!(v < -7.0 / 32.0);
}

#[test]
fn halving_schedule_agrees_on_single_seed() {
    let mask = point_mask(70, 33, 5, 30);
    let level = generate_distance_field(&mask, false).unwrap();
    let halving = generate_distance_field_with(
        &mask,
        false,
        &JfaOptions::default().with_schedule(JumpSchedule::Halving),
    )
    .unwrap();
    assert_eq!(level, halving);
}

#[test]
fn empty_mask_policy_is_unreachable_distance() {
    let mask = Field2D::filled(10, 10, false);
    let df = generate_distance_field(&mask, false).unwrap();
    let expected = unreachable_distance(10, 10);
    assert!((expected - std::f32::consts::SQRT_2).abs() < 1e-6);
    assert!(df.values.pixels().all(|v| v == expected));
}

#[test]
fn packed_sdf_round_trips() {
    let mask = disc_mask(30, 22, 12.0, 11.0, 6.5);
    let opts = JfaOptions::default();
    let packed = generate_packed_sdf(&mask, &opts).unwrap();
    let signed = generate_distance_field_with(&mask, true, &opts).unwrap();
    let rebuilt = DistanceField::from_packed(&packed).unwrap();
    assert_eq!(rebuilt, signed);
    assert!(packed.pixels().all(|c| c.b == 0.0 && c.a == 1.0));
}

#[test]
fn zero_iterations_are_rejected_at_entry() {
    let mask = point_mask(32, 32, 16, 16);
    let opts = JfaOptions::default().with_iterations(0);
    assert!(matches!(
        generate_distance_field_with(&mask, false, &opts),
        Err(Error::InvalidInput(_))
    ));
    assert!(matches!(
        generate_packed_sdf(&mask, &opts),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn minimal_iteration_count_reaches_far_corner() {
    let mask = point_mask(64, 64, 0, 0);
    let passes = min_iterations(64, 64);
    let enough = JfaOptions::default().with_iterations(passes);
    let df = generate_distance_field_with(&mask, false, &enough).unwrap();
    let expected = 63.0 * std::f32::consts::SQRT_2;
    assert!((df.get_pixels(63, 63) - expected).abs() < 1e-3);

    let short = JfaOptions::default().with_iterations(passes - 1);
    assert!(!short.covers(64, 64));
    let df = generate_distance_field_with(&mask, false, &short).unwrap();
    assert_eq!(df.get(63, 63), unreachable_distance(64, 64));
}
