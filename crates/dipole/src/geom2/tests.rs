use super::*;
use nalgebra::vector;
use proptest::prelude::*;

fn approx(a: Vec2, b: Vec2) -> bool {
    (a - b).norm() < 1e-9
}

#[test]
fn ray_hits_segment_in_front() {
    let cfg = GeomCfg::default();
    let ray = Ray::new(vector![0.0, 0.0], vector![1.0, 0.0]);
    let seg = LineSegment::new(vector![5.0, -5.0], vector![5.0, 5.0]);
    let hit = ray.segment_intersection(&seg, None, &cfg).expect("hit");
    assert!(approx(hit, vector![5.0, 0.0]));
}

#[test]
fn ray_misses_segment_behind() {
    let cfg = GeomCfg::default();
    let ray = Ray::new(vector![0.0, 0.0], vector![1.0, 0.0]);
    let seg = LineSegment::new(vector![-5.0, -5.0], vector![-5.0, 5.0]);
    assert!(ray.segment_intersection(&seg, None, &cfg).is_none());
}

#[test]
fn ray_misses_past_segment_end_and_parallel() {
    let cfg = GeomCfg::default();
    let ray = Ray::new(vector![0.0, 0.0], vector![1.0, 1.0]);
    let short = LineSegment::new(vector![5.0, -5.0], vector![5.0, 4.0]);
    assert!(ray.segment_intersection(&short, None, &cfg).is_none());

    let along = Ray::new(vector![0.0, 1.0], vector![1.0, 0.0]);
    let floor = LineSegment::new(vector![-5.0, 0.0], vector![5.0, 0.0]);
    assert!(along.segment_intersection(&floor, None, &cfg).is_none());
}

#[test]
fn non_unit_direction_gives_same_point() {
    let cfg = GeomCfg::default();
    let seg = LineSegment::new(vector![5.0, -5.0], vector![5.0, 5.0]);
    let unit = Ray::new(vector![0.0, 1.0], vector![1.0, 0.2]);
    let long = unit.with_direction(unit.direction * 37.0);
    let a = unit.segment_intersection(&seg, None, &cfg).unwrap();
    let b = long.segment_intersection(&seg, None, &cfg).unwrap();
    assert!(approx(a, b));
}

#[test]
fn culling_keeps_only_the_exit_wall() {
    let cfg = GeomCfg::default();
    let room = Boundary::room(vector![10.0, 10.0]);
    // Start on the bottom wall heading up: the bottom wall is touched at t=0 but culled.
    let ray = Ray::from_degrees(vector![5.0, 0.0], 90.0);
    let hits: Vec<(Wall, Vec2)> = room
        .walls()
        .filter_map(|(w, seg)| {
            ray.segment_intersection(seg, Some(w.inward_normal()), &cfg)
                .map(|p| (w, p))
        })
        .collect();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].0, Wall::Top);
    assert!(approx(hits[0].1, vector![5.0, 10.0]));

    // Without culling the bottom wall is reported too.
    let bottom = ray.segment_intersection(&room.bottom, None, &cfg);
    assert!(bottom.is_some());
}

#[test]
fn inset_boundary_corners() {
    let offsets = WallOffsets {
        top: 1.0,
        right: 2.0,
        bottom: 3.0,
        left: 4.0,
    };
    let b = Boundary::inset(vector![15.0, 17.0], &offsets);
    let [bl, br, tr, tl] = b.corners();
    assert!(approx(bl, vector![4.0, 3.0]));
    assert!(approx(br, vector![13.0, 3.0]));
    assert!(approx(tr, vector![13.0, 16.0]));
    assert!(approx(tl, vector![4.0, 16.0]));
    assert!(b.left.is_vertical() && b.right.is_vertical());
    assert!(!b.top.is_vertical() && !b.bottom.is_vertical());
    assert!((b.top.length() - 9.0).abs() < 1e-12);
}

#[test]
fn offsets_update_single_wall() {
    let o = WallOffsets::uniform(2.0).with(Wall::Right, 0.5);
    assert_eq!(o.get(Wall::Right), 0.5);
    assert_eq!(o.get(Wall::Top), 2.0);
    assert_eq!(
        o.map(|v| v.min(1.0)),
        WallOffsets {
            top: 1.0,
            right: 0.5,
            bottom: 1.0,
            left: 1.0
        }
    );
}

#[test]
fn vector_helpers() {
    let v = Vec2::from_degrees(90.0);
    assert!(approx(v, vector![0.0, 1.0]));
    assert_eq!(v.angle_deg_rounded(), 90.0);
    assert!((vector![1.0, 0.0].cross2(&vector![0.0, 1.0]) - 1.0).abs() < 1e-12);
    let r = vector![2.0, 0.0].rotated(std::f64::consts::FRAC_PI_2);
    assert!(approx(r, vector![0.0, 2.0]));
    assert_eq!(
        vector![20.0, 3.0].clamp_to(&vector![15.0, 17.0]),
        vector![15.0, 3.0]
    );
    assert_eq!(vector![15.0, 17.0].min_component(), 15.0);
    assert_eq!(vector![1.0, -1.0].angle_deg_rounded(), -45.0);
}

#[test]
fn listener_line_spans_both_sides() {
    let ray = Ray::from_degrees(vector![8.0, 2.0], 90.0);
    let seg = ray.line_segment(100.0);
    assert!(approx(seg.a, vector![8.0, -98.0]));
    assert!(approx(seg.b, vector![8.0, 102.0]));
}

proptest! {
    #[test]
    fn angle_diff_identities(a in -180.0f64..180.0) {
        prop_assert!(angle_diff(a, a).abs() < 1e-12);
        prop_assert!((angle_diff(a, a + 180.0) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn angle_diff_in_range(a in -180.0f64..=180.0, b in -180.0f64..=180.0) {
        let d = angle_diff(a, b);
        prop_assert!((0.0..=180.0).contains(&d));
        prop_assert!((d - angle_diff(b, a)).abs() < 1e-12);
    }

    #[test]
    fn normalize_lands_in_half_open_range(d in -2000.0f64..2000.0) {
        let n = normalize_degrees(d);
        prop_assert!(n > -180.0 && n <= 180.0);
        let k = (d - n) / 360.0;
        prop_assert!((k - k.round()).abs() < 1e-9);
    }

    #[test]
    fn zero_offsets_give_room_corners(w in 0.1f64..100.0, h in 0.1f64..100.0) {
        let b = Boundary::inset(vector![w, h], &WallOffsets::default());
        let [bl, br, tr, tl] = b.corners();
        prop_assert_eq!(bl, vector![0.0, 0.0]);
        prop_assert_eq!(br, vector![w, 0.0]);
        prop_assert_eq!(tr, vector![w, h]);
        prop_assert_eq!(tl, vector![0.0, h]);
        prop_assert_eq!(b, Boundary::room(vector![w, h]));
    }

    #[test]
    fn from_degrees_is_unit(deg in -720.0f64..720.0) {
        prop_assert!((Vec2::from_degrees(deg).norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn interior_ray_finds_an_exit_wall(
        x in 0.5f64..9.5,
        y in 0.5f64..9.5,
        deg in -179.0f64..180.0,
    ) {
        let cfg = GeomCfg::default();
        let room = Boundary::room(vector![10.0, 10.0]);
        let ray = Ray::from_degrees(vector![x, y], deg);
        let hits = room
            .walls()
            .filter_map(|(w, seg)| ray.segment_intersection(seg, Some(w.inward_normal()), &cfg))
            .count();
        // Corner exits may touch two walls; never zero.
        prop_assert!((1..=2).contains(&hits));
    }
}
