use super::*;
use crate::geom::{Point, Stroke, Weight};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::f64::consts::{FRAC_PI_2, PI};

const TOL: f64 = crate::geom::cfg::POINT_EPS;

fn ihf() -> Diagram {
    generate(&MeasurementSet::default()).unwrap()
}

/// Valid measurement sets across a broad range, including near-coincident 6 m / 9 m radii.
fn valid_measurements() -> impl Strategy<Value = MeasurementSet> {
    (
        10_000.0..40_000.0f64,
        10_000.0..40_000.0f64,
        0.05..0.9f64,
        0.05..0.6f64,
        0.0..1.0f64,
        0.05..0.5f64,
    )
        .prop_map(|(w, h, gw_frac, r6_frac, r9_frac, cc_frac)| {
            let r6 = r6_frac * h;
            MeasurementSet {
                court_width: w,
                court_length: h,
                goal_width: gw_frac * w,
                goal_area_radius: r6,
                free_throw_radius: r6 + 1e-6 + r9_frac * (0.95 * h - r6),
                penalty_offset: 0.35 * h,
                penalty_length: 0.05 * w,
                gk_line_offset: 0.2 * h,
                gk_line_length: 0.0075 * w,
                center_circle_radius: cc_frac * w,
                post_radius: 0.005 * w,
            }
        })
}

fn assert_tangent(d: &Diagram, line: Feature, left: Feature, right: Feature) {
    let seg = d.segment(line).expect("straight piece");
    let la = d.arc(left).expect("left arc");
    let ra = d.arc(right).expect("right arc");
    assert!((la.start_point() - seg.a).norm() < TOL);
    assert!((ra.end_point() - seg.b).norm() < TOL);
    // Arc tangent at the junction is parallel to the straight piece.
    let t = nalgebra::Vector2::new(-la.start.sin(), la.start.cos());
    assert!(t.perp(&seg.direction()).abs() < TOL * seg.length());
}

fn assert_mirror_symmetric(d: &Diagram) {
    assert!(d.is_symmetric());
    for it in d.mirrored().items() {
        if matches!(it.shape, Shape::Label(_)) {
            continue;
        }
        let found = d
            .items()
            .iter()
            .any(|o| o.feature == it.feature && o.shape.approx_eq(&it.shape, TOL));
        assert!(found, "no mirrored counterpart for {}", it.feature);
    }
}

#[test]
fn ihf_goal_and_goal_area_coordinates() {
    let d = ihf();
    let goal = d.segment(Feature::GoalLine).unwrap();
    assert_eq!(goal.a, Point::new(8500.0, 0.0));
    assert_eq!(goal.b, Point::new(11500.0, 0.0));
    assert_eq!(goal.weight, Weight::Heavy);

    let six = d.segment(Feature::GoalAreaLine).unwrap();
    assert_eq!(six.a, Point::new(8500.0, 6000.0));
    assert_eq!(six.b, Point::new(11500.0, 6000.0));

    let left = d.arc(Feature::GoalAreaArc(Side::Left)).unwrap();
    assert_eq!(left.center, Point::new(8500.0, 0.0));
    assert_eq!(left.radius, 6000.0);
    assert_eq!(left.start, FRAC_PI_2);
    assert_eq!(left.end, PI);
    assert_eq!(left.stroke, Stroke::Solid);
}

#[test]
fn ihf_boundary_is_exact_closed_loop() {
    let d = ihf();
    let edges: Vec<_> = d
        .shapes(Feature::Boundary)
        .map(|s| match s {
            Shape::Segment(seg) => *seg,
            other => panic!("unexpected boundary shape {other:?}"),
        })
        .collect();
    assert_eq!(edges.len(), 4);
    assert_eq!(edges[0].a, Point::new(0.0, 0.0));
    assert_eq!(edges[1].a, Point::new(20000.0, 0.0));
    assert_eq!(edges[2].a, Point::new(20000.0, 20000.0));
    assert_eq!(edges[3].a, Point::new(0.0, 20000.0));
    for k in 0..4 {
        assert_eq!(edges[k].b, edges[(k + 1) % 4].a);
    }
}

#[test]
fn ihf_marks_half_line_and_posts() {
    let d = ihf();
    assert_eq!(d.len(), 19);
    let seven = d.segment(Feature::PenaltyLine).unwrap();
    assert_eq!((seven.a.x, seven.b.x, seven.a.y), (9500.0, 10500.0, 7000.0));
    let label = d.label(Feature::PenaltyLabel).unwrap();
    assert_eq!(label.anchor, Point::new(10700.0, 7150.0));
    assert_eq!(label.text, "7m");
    let gk = d.segment(Feature::GoalkeeperLine).unwrap();
    assert_eq!((gk.a.x, gk.b.x, gk.a.y), (9925.0, 10075.0, 4000.0));
    let half = d.segment(Feature::HalfLine).unwrap();
    assert_eq!(half.a, Point::new(0.0, 20000.0));
    assert_eq!(half.b, Point::new(20000.0, 20000.0));
    let cc = d.arc(Feature::CenterCircle).unwrap();
    assert_eq!(cc.center, Point::new(10000.0, 20000.0));
    assert_eq!((cc.radius, cc.start, cc.end), (2000.0, 0.0, PI));
    for (side, x) in [(Side::Left, 8500.0), (Side::Right, 11500.0)] {
        match d.get(Feature::Post(side)) {
            Some(Shape::Disc(disc)) => {
                assert_eq!(disc.center, Point::new(x, 0.0));
                assert_eq!(disc.radius, 100.0);
            }
            other => panic!("post {side:?}: {other:?}"),
        }
    }
    let title = d.label(Feature::Title).unwrap();
    assert!((title.anchor - Point::new(800.0, 19000.0)).norm() < 1e-9);
}

#[test]
fn ihf_free_throw_arc_stops_at_sideline() {
    let d = ihf();
    let left = d.arc(Feature::FreeThrowArc(Side::Left)).unwrap();
    assert_eq!(left.stroke, Stroke::Dashed);
    assert!(left.clip_below_baseline);
    let end = left.end_point();
    assert!(end.x.abs() < TOL);
    assert!((end.y - (9000f64.powi(2) - 8500f64.powi(2)).sqrt()).abs() < TOL);
    let right = d.arc(Feature::FreeThrowArc(Side::Right)).unwrap();
    assert!((right.start_point().x - 20000.0).abs() < TOL);
    let nine = d.segment(Feature::FreeThrowLine).unwrap();
    assert_eq!(nine.stroke, Stroke::Dashed);
    assert_eq!(nine.a, Point::new(8500.0, 9000.0));
}

#[test]
fn narrow_free_throw_radius_keeps_full_quarter() {
    let m = MeasurementSet {
        free_throw_radius: 8000.0,
        ..MeasurementSet::default()
    };
    let d = generate(&m).unwrap();
    let left = d.arc(Feature::FreeThrowArc(Side::Left)).unwrap();
    assert_eq!((left.start, left.end), (FRAC_PI_2, PI));
    let right = d.arc(Feature::FreeThrowArc(Side::Right)).unwrap();
    assert_eq!((right.start, right.end), (0.0, FRAC_PI_2));
}

#[test]
fn narrow_court_goal_area_arc_stops_at_sideline() {
    let m = MeasurementSet {
        court_width: 12_000.0,
        goal_width: 3_000.0,
        ..MeasurementSet::default()
    };
    let d = generate(&m).unwrap();
    let left = d.arc(Feature::GoalAreaArc(Side::Left)).unwrap();
    assert_eq!(left.start, FRAC_PI_2);
    let end = left.end_point();
    assert!(end.x.abs() < TOL);
    assert!((end.y - (6000f64.powi(2) - 4500f64.powi(2)).sqrt()).abs() < TOL);
    assert!(left.polyline(200).iter().all(|p| p.x >= -TOL));

    let right = d.arc(Feature::GoalAreaArc(Side::Right)).unwrap();
    assert_eq!(right.end, FRAC_PI_2);
    assert!((right.start_point().x - 12_000.0).abs() < TOL);
    assert!(right.polyline(200).iter().all(|p| p.x <= 12_000.0 + TOL));

    assert_tangent(
        &d,
        Feature::GoalAreaLine,
        Feature::GoalAreaArc(Side::Left),
        Feature::GoalAreaArc(Side::Right),
    );
    assert_mirror_symmetric(&d);
}

#[test]
fn tangency_ihf() {
    let d = ihf();
    assert_tangent(
        &d,
        Feature::GoalAreaLine,
        Feature::GoalAreaArc(Side::Left),
        Feature::GoalAreaArc(Side::Right),
    );
    assert_tangent(
        &d,
        Feature::FreeThrowLine,
        Feature::FreeThrowArc(Side::Left),
        Feature::FreeThrowArc(Side::Right),
    );
}

#[test]
fn symmetric_about_midline() {
    assert_mirror_symmetric(&ihf());
}

#[test]
fn generation_is_idempotent() {
    let m = MeasurementSet::default();
    assert_eq!(generate(&m), generate(&m));
}

#[test]
fn invalid_radii_fail_without_diagram() {
    for r9 in [6000.0, 5000.0] {
        let m = MeasurementSet {
            free_throw_radius: r9,
            ..MeasurementSet::default()
        };
        assert!(matches!(
            generate(&m),
            Err(InvalidMeasurementError::Ordering { .. })
        ));
    }
}

#[test]
fn sampling_density_keeps_arc_endpoints() {
    let d = ihf();
    for it in d.items() {
        if let Shape::Arc(a) = &it.shape {
            for n in [2usize, 50, 300] {
                let pts = it.shape.polyline(n).unwrap();
                assert_eq!(pts.first().copied(), Some(a.start_point()), "{}", it.feature);
                assert_eq!(pts.last().copied(), Some(a.end_point()), "{}", it.feature);
            }
        }
    }
}

#[test]
fn bounds_cover_centre_circle_and_posts() {
    let (lo, hi) = ihf().bounds();
    assert!((lo.x - 0.0).abs() < 1e-9);
    assert!((lo.y + 100.0).abs() < 1e-9);
    assert!((hi.x - 20000.0).abs() < 1e-9);
    assert!((hi.y - 22000.0).abs() < 1e-9);
}

#[test]
fn custom_annotations() {
    let notes = AnnotationCfg {
        penalty_label: "7 m".to_string(),
        penalty_label_offset: (0.0, 0.0),
        ..AnnotationCfg::default()
    };
    let d = generate_with(&MeasurementSet::default(), &notes).unwrap();
    let label = d.label(Feature::PenaltyLabel).unwrap();
    assert_eq!(label.anchor, Point::new(10500.0, 7000.0));
    assert_eq!(label.text, "7 m");
}

#[test]
fn diagram_json_roundtrip_keeps_tags() {
    let d = ihf();
    let json = serde_json::to_value(&d).unwrap();
    assert_eq!(json["items"][4]["feature"], "goal_line");
    let back: Diagram = serde_json::from_value(json).unwrap();
    assert_eq!(back.len(), d.len());
    for (a, b) in back.items().iter().zip(d.items()) {
        assert_eq!(a.feature, b.feature);
        assert!(a.shape.approx_eq(&b.shape, 1e-9));
    }
}

#[test]
fn seeded_random_courts_stay_inside() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..64 {
        let w = rng.gen_range(12_000.0..30_000.0);
        let h = rng.gen_range(12_000.0..30_000.0);
        let r6 = rng.gen_range(0.1..0.4) * h;
        let m = MeasurementSet {
            court_width: w,
            court_length: h,
            goal_width: rng.gen_range(0.05..0.5) * w,
            goal_area_radius: r6,
            free_throw_radius: rng.gen_range(r6 * 1.01..0.9 * h),
            ..MeasurementSet::default()
        };
        let d = generate(&m).unwrap();
        for it in d.items() {
            if it.feature == Feature::CenterCircle {
                continue;
            }
            let (lo, hi) = match &it.shape {
                Shape::Disc(disc) => (disc.center, disc.center),
                s => s.extent(),
            };
            assert!(lo.x >= -TOL && lo.y >= -TOL, "{} below/left of court", it.feature);
            assert!(hi.x <= w + TOL && hi.y <= h + TOL, "{} beyond court", it.feature);
        }
    }
}

proptest! {
    #[test]
    fn prop_free_throw_samples_never_below_goal_line(m in valid_measurements(), n in 2usize..400) {
        let d = generate(&m).unwrap();
        for side in [Side::Left, Side::Right] {
            if let Some(arc) = d.arc(Feature::FreeThrowArc(side)) {
                let pts = arc.polyline(n);
                prop_assert!(pts.iter().all(|p| p.y >= 0.0));
                prop_assert!(pts.iter().all(|p| p.x >= -TOL && p.x <= m.court_width + TOL));
            }
        }
    }

    #[test]
    fn prop_all_primitives_inside_court(m in valid_measurements()) {
        let d = generate(&m).unwrap();
        let (w, h) = (m.court_width, m.court_length);
        for it in d.items() {
            let (lo, hi) = match &it.shape {
                _ if it.feature == Feature::CenterCircle => continue,
                Shape::Label(_) => continue,
                Shape::Disc(disc) => (disc.center, disc.center),
                s => s.extent(),
            };
            prop_assert!(lo.x >= -TOL && lo.y >= -TOL, "{} below/left of court", it.feature);
            prop_assert!(hi.x <= w + TOL && hi.y <= h + TOL, "{} beyond court", it.feature);
        }
    }

    #[test]
    fn prop_goal_area_is_tangent(m in valid_measurements()) {
        let d = generate(&m).unwrap();
        assert_tangent(
            &d,
            Feature::GoalAreaLine,
            Feature::GoalAreaArc(Side::Left),
            Feature::GoalAreaArc(Side::Right),
        );
    }

    #[test]
    fn prop_mirror_symmetric(m in valid_measurements()) {
        assert_mirror_symmetric(&generate(&m).unwrap());
    }

    #[test]
    fn prop_idempotent(m in valid_measurements()) {
        prop_assert_eq!(generate(&m), generate(&m));
    }

    #[test]
    fn prop_swapped_radii_rejected(m in valid_measurements()) {
        let swapped = MeasurementSet {
            goal_area_radius: m.free_throw_radius,
            free_throw_radius: m.goal_area_radius,
            ..m
        };
        prop_assert!(generate(&swapped).is_err());
    }
}
