use vizij_easing_core::*;

fn approx(a: f64, b: f64, eps: f64) {
    assert!(
        (a - b).abs() <= eps,
        "approx failed: left={a} right={b} eps={eps}"
    );
}

const DEFAULTS: ShapeParams = ShapeParams {
    amplitude: None,
    period: None,
    overshoot: None,
};

/// Sample times across `[0, 1]`, avoiding the bounce arc seams.
const TIMES: [f64; 9] = [0.0, 0.1, 0.25, 0.4, 0.5, 0.6, 0.75, 0.9, 1.0];

#[test]
fn quad_scenarios_in_both_precisions() {
    assert_eq!(linear_unit(0.5f32).unwrap(), 0.5);
    assert_eq!(in_quad_unit(0.25f32).unwrap(), 0.0625);
    assert_eq!(out_quad_unit(0.75f64).unwrap(), 0.9375);
    assert_eq!(in_out_quad_unit(0.25f32).unwrap(), 0.125);
    assert_eq!(in_out_quad_unit(0.75f64).unwrap(), 0.875);
    assert_eq!(out_in_quad_unit(0.25f64).unwrap(), 0.375);
    assert_eq!(out_in_quad_unit(0.75f32).unwrap(), 0.625);
}

#[test]
fn out_in_quad_ranged_scenarios() {
    assert_eq!(out_in_quad_range(3.0f64, 2.0, 6.0).unwrap(), 3.5);
    assert_eq!(out_in_quad_range(4.0f32, 2.0, 6.0).unwrap(), 4.0);
    assert_eq!(out_in_quad_range(5.0f64, 2.0, 6.0).unwrap(), 4.5);
    assert!(out_in_quad_range(1.5f64, 2.0, 6.0).is_ok());
    assert!(out_in_quad_range(7.0f32, 2.0, 6.0).is_err());
}

#[test]
fn normalized_form_equals_raw_on_unit_interval() {
    for kind in EasingKind::ALL {
        for &t in &TIMES {
            let raw: f64 = kind.ease(t, 0.0, 1.0, 1.0, &DEFAULTS).unwrap();
            let unit: f64 = kind.ease_unit(t, &DEFAULTS).unwrap();
            assert_eq!(raw, unit, "{kind} t={t}");
        }
    }
}

#[test]
fn ranged_form_rescales_time_and_value() {
    let (start, end) = (2.0f64, 6.0f64);
    for kind in EasingKind::ALL {
        for &u in &TIMES {
            let time = start + (end - start) * u;
            let rescaled = (time - start) / (end - start);
            let unit: f64 = kind.ease_unit(rescaled, &DEFAULTS).unwrap();
            let ranged: f64 = kind.ease_range(time, start, end, &DEFAULTS).unwrap();
            approx(ranged, start + (end - start) * unit, 1e-12);
        }
    }
}

#[test]
fn raw_form_scales_with_begin_change_and_duration() {
    let (b, c, d) = (-3.0f64, 5.0, 2.5);
    for kind in EasingKind::ALL {
        for &u in &TIMES {
            let raw: f64 = kind.ease(u * d, b, c, d, &DEFAULTS).unwrap();
            let unit: f64 = kind.ease_unit(u, &DEFAULTS).unwrap();
            approx(raw, b + c * unit, 1e-9);
        }
    }
}

#[test]
fn out_in_kinds_follow_the_combinator() {
    let (b, c, d) = (1.0f64, 4.0, 2.0);
    for kind in EasingKind::ALL {
        let Some((out, inn)) = kind.out_in_pair() else {
            continue;
        };
        let half = c / 2.0;
        for &u in &TIMES {
            let t = u * d;
            let expected = if t < d / 2.0 {
                out.ease(2.0 * t, b, half, d, &DEFAULTS).unwrap()
            } else {
                inn.ease(2.0 * t - d, b + half, half, d, &DEFAULTS).unwrap()
            };
            let got: f64 = kind.ease(t, b, c, d, &DEFAULTS).unwrap();
            assert_eq!(got, expected, "{kind} t={t}");
        }
    }
}

#[test]
fn out_in_kinds_pass_through_the_midpoint() {
    for kind in EasingKind::ALL {
        if kind.out_in_pair().is_none() {
            continue;
        }
        let mid: f64 = kind.ease_unit(0.5, &DEFAULTS).unwrap();
        // second half starts at in_*(0), which is exact for every family
        approx(mid, 0.5, 1e-12);
    }
}

#[test]
fn curves_start_at_begin_and_end_at_begin_plus_change() {
    let (b, c, d) = (2.0f64, 3.0, 4.0);
    for kind in EasingKind::ALL {
        // in_expo stops 0.1% short; out_in_expo inherits half of that
        let end_eps = match kind {
            EasingKind::InExpo | EasingKind::OutInExpo => 2e-3 * c,
            _ => 1e-9,
        };
        approx(kind.ease(0.0, b, c, d, &DEFAULTS).unwrap(), b, 1e-9);
        approx(kind.ease(d, b, c, d, &DEFAULTS).unwrap(), b + c, end_eps);
    }
}

#[test]
fn reference_values_for_shaped_families() {
    approx(in_sine_unit(0.25f64).unwrap(), 0.0761204674887, 1e-9);
    approx(out_cubic_unit(0.25f64).unwrap(), 0.578125, 1e-12);
    approx(in_elastic_unit(0.25f64).unwrap(), -0.00552427172802, 1e-3);
    approx(in_back_unit(0.25f64).unwrap(), -0.0641365625, 1e-3);
    assert_eq!(in_bounce_unit(0.0f64).unwrap(), 0.0);
    assert_eq!(out_bounce_unit(1.0f64).unwrap(), 1.0);
}

#[test]
fn expo_in_out_approaches_its_endpoint() {
    // the 1.0005 scale lands the second half on b + c
    let near_end = in_out_expo_unit(1.0f64 - 1e-9).unwrap();
    approx(near_end, 1.0, 1e-4);
    assert_eq!(in_out_expo_unit(1.0f64).unwrap(), 1.0);
}

type Raw<F> = fn(F, F, F, F) -> Result<F, InvalidTimeError>;
type Unit<F> = fn(F) -> Result<F, InvalidTimeError>;
type Range<F> = fn(F, F, F) -> Result<F, InvalidTimeError>;

/// The three public tiers of one easing, as free functions.
struct Tiers<F> {
    name: &'static str,
    raw: Raw<F>,
    unit: Unit<F>,
    range: Range<F>,
}

macro_rules! tiers {
    ($($raw:expr, $name:ident => $unit:ident, $range:ident;)+) => {
        vec![$(Tiers {
            name: stringify!($name),
            raw: $raw,
            unit: $unit::<F>,
            range: $range::<F>,
        },)+]
    };
}

fn all_tiers<F: EaseFloat>() -> Vec<Tiers<F>> {
    tiers! {
        linear::<F>, linear => linear_unit, linear_range;
        in_quad::<F>, in_quad => in_quad_unit, in_quad_range;
        out_quad::<F>, out_quad => out_quad_unit, out_quad_range;
        in_out_quad::<F>, in_out_quad => in_out_quad_unit, in_out_quad_range;
        out_in_quad::<F>, out_in_quad => out_in_quad_unit, out_in_quad_range;
        in_cubic::<F>, in_cubic => in_cubic_unit, in_cubic_range;
        out_cubic::<F>, out_cubic => out_cubic_unit, out_cubic_range;
        in_out_cubic::<F>, in_out_cubic => in_out_cubic_unit, in_out_cubic_range;
        out_in_cubic::<F>, out_in_cubic => out_in_cubic_unit, out_in_cubic_range;
        in_quart::<F>, in_quart => in_quart_unit, in_quart_range;
        out_quart::<F>, out_quart => out_quart_unit, out_quart_range;
        in_out_quart::<F>, in_out_quart => in_out_quart_unit, in_out_quart_range;
        out_in_quart::<F>, out_in_quart => out_in_quart_unit, out_in_quart_range;
        in_quint::<F>, in_quint => in_quint_unit, in_quint_range;
        out_quint::<F>, out_quint => out_quint_unit, out_quint_range;
        in_out_quint::<F>, in_out_quint => in_out_quint_unit, in_out_quint_range;
        out_in_quint::<F>, out_in_quint => out_in_quint_unit, out_in_quint_range;
        in_sine::<F>, in_sine => in_sine_unit, in_sine_range;
        out_sine::<F>, out_sine => out_sine_unit, out_sine_range;
        in_out_sine::<F>, in_out_sine => in_out_sine_unit, in_out_sine_range;
        out_in_sine::<F>, out_in_sine => out_in_sine_unit, out_in_sine_range;
        in_expo::<F>, in_expo => in_expo_unit, in_expo_range;
        out_expo::<F>, out_expo => out_expo_unit, out_expo_range;
        in_out_expo::<F>, in_out_expo => in_out_expo_unit, in_out_expo_range;
        out_in_expo::<F>, out_in_expo => out_in_expo_unit, out_in_expo_range;
        in_circ::<F>, in_circ => in_circ_unit, in_circ_range;
        out_circ::<F>, out_circ => out_circ_unit, out_circ_range;
        in_out_circ::<F>, in_out_circ => in_out_circ_unit, in_out_circ_range;
        out_in_circ::<F>, out_in_circ => out_in_circ_unit, out_in_circ_range;
        |t, b, c, d| in_elastic(t, b, c, d, None, None),
            in_elastic => in_elastic_unit, in_elastic_range;
        |t, b, c, d| out_elastic(t, b, c, d, None, None),
            out_elastic => out_elastic_unit, out_elastic_range;
        |t, b, c, d| in_out_elastic(t, b, c, d, None, None),
            in_out_elastic => in_out_elastic_unit, in_out_elastic_range;
        |t, b, c, d| out_in_elastic(t, b, c, d, None, None),
            out_in_elastic => out_in_elastic_unit, out_in_elastic_range;
        |t, b, c, d| in_back(t, b, c, d, None),
            in_back => in_back_unit, in_back_range;
        |t, b, c, d| out_back(t, b, c, d, None),
            out_back => out_back_unit, out_back_range;
        |t, b, c, d| in_out_back(t, b, c, d, None),
            in_out_back => in_out_back_unit, in_out_back_range;
        |t, b, c, d| out_in_back(t, b, c, d, None),
            out_in_back => out_in_back_unit, out_in_back_range;
        in_bounce::<F>, in_bounce => in_bounce_unit, in_bounce_range;
        out_bounce::<F>, out_bounce => out_bounce_unit, out_bounce_range;
        in_out_bounce::<F>, in_out_bounce => in_out_bounce_unit, in_out_bounce_range;
        out_in_bounce::<F>, out_in_bounce => out_in_bounce_unit, out_in_bounce_range;
    }
}

fn check_free_tiers<F: EaseFloat>() {
    let (zero, one) = (F::zero(), F::one());
    let (start, end) = (F::lit(2.0), F::lit(6.0));
    let span = end - start;
    for tiers in all_tiers::<F>() {
        let name = tiers.name;
        for &u in &TIMES {
            let t = F::lit(u);
            let raw = (tiers.raw)(t, zero, one, one).unwrap();
            let unit = (tiers.unit)(t).unwrap();
            assert_eq!(unit, raw, "{name} t={u}");

            let time = start + span * t;
            let rescaled = (tiers.unit)((time - start) / span).unwrap();
            let ranged = (tiers.range)(time, start, end).unwrap();
            assert_eq!(ranged, start + span * rescaled, "{name} t={u}");
        }
        assert!((tiers.unit)(F::lit(1.5)).is_err(), "{name}");
        assert!((tiers.range)(F::lit(7.0), start, end).is_err(), "{name}");
    }
}

#[test]
fn free_tiers_agree_in_f64() {
    check_free_tiers::<f64>();
}

#[test]
fn free_tiers_agree_in_f32() {
    check_free_tiers::<f32>();
}

#[test]
fn free_tiers_cover_the_catalog_and_match_dispatch() {
    let tiers = all_tiers::<f64>();
    assert_eq!(tiers.len(), EasingKind::ALL.len());
    for entry in tiers {
        let kind: EasingKind = entry.name.parse().unwrap();
        assert_eq!(kind.name(), entry.name);
        for &t in &TIMES {
            let direct = (entry.raw)(t, 2.0, 3.0, 1.0).unwrap();
            let dispatched = kind.ease(t, 2.0, 3.0, 1.0, &DEFAULTS).unwrap();
            assert_eq!(direct, dispatched, "{kind} t={t}");
        }
    }
}
