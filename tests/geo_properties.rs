use fundi_backend::utils::geo::{
    distance_km, filter_by_service_area, format_distance, rank_by_distance, Coordinate,
    LocatedEntity,
};
use proptest::prelude::*;
use proptest::test_runner::Config;

fn coordinate() -> impl Strategy<Value = Coordinate> {
    (-90.0_f64..=90.0, -180.0_f64..=180.0)
        .prop_map(|(lat, lng)| Coordinate::new(lat, lng).expect("in range"))
}

/// Points around Nairobi, where the marketplace operates.
fn nearby_entities() -> impl Strategy<Value = Vec<LocatedEntity<usize>>> {
    prop::collection::vec((-1.8_f64..-0.8, 36.3_f64..37.3), 0..40).prop_map(|points| {
        points
            .into_iter()
            .enumerate()
            .map(|(i, (lat, lng))| {
                LocatedEntity::new(Coordinate::new(lat, lng).expect("in range"), i)
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn distance_is_symmetric(a in coordinate(), b in coordinate()) {
        let ab = a.distance_to(&b);
        let ba = b.distance_to(&a);
        prop_assert!((ab - ba).abs() < 1e-6, "{} vs {}", ab, ba);
    }

    #[test]
    fn distance_to_self_is_zero(a in coordinate()) {
        prop_assert!(a.distance_to(&a) < 1e-9);
    }

    #[test]
    fn distance_is_bounded(a in coordinate(), b in coordinate()) {
        let d = a.distance_to(&b);
        prop_assert!(d >= 0.0);
        // Half the circumference
        prop_assert!(d <= std::f64::consts::PI * 6371.0 + 1e-6);
    }

    #[test]
    fn triangle_inequality_holds_for_regional_points(
        a in (-5.0_f64..5.0, 30.0_f64..40.0),
        b in (-5.0_f64..5.0, 30.0_f64..40.0),
        c in (-5.0_f64..5.0, 30.0_f64..40.0),
    ) {
        let ac = distance_km(a.0, a.1, c.0, c.1);
        let ab = distance_km(a.0, a.1, b.0, b.1);
        let bc = distance_km(b.0, b.1, c.0, c.1);
        prop_assert!(ac <= ab + bc + 1e-6);
    }

    #[test]
    fn filter_then_rank_stays_inside_and_sorted(
        entities in nearby_entities(),
        radius in 0.0_f64..60.0,
    ) {
        let (lat, lng) = (-1.2921, 36.8219);
        let ranked = rank_by_distance(filter_by_service_area(&entities, lat, lng, radius), lat, lng);

        for r in &ranked {
            prop_assert!(r.distance_km <= radius);
        }
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].distance_km <= pair[1].distance_km);
        }
    }

    #[test]
    fn filter_preserves_input_order(entities in nearby_entities(), radius in 0.0_f64..60.0) {
        let kept = filter_by_service_area(&entities, -1.2921, 36.8219, radius);
        let ids: Vec<_> = kept.iter().map(|e| e.payload).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        prop_assert_eq!(ids, sorted);
    }

    #[test]
    fn rank_keeps_every_entity_once(entities in nearby_entities()) {
        let ranked = rank_by_distance(&entities, -1.2921, 36.8219);
        prop_assert_eq!(ranked.len(), entities.len());

        let mut ids: Vec<_> = ranked.iter().map(|r| r.entity.payload).collect();
        ids.sort_unstable();
        prop_assert_eq!(ids, (0..entities.len()).collect::<Vec<_>>());
    }

    #[test]
    fn rank_ties_keep_input_order(point in coordinate(), copies in 2_usize..10) {
        let entities: Vec<_> = (0..copies).map(|i| LocatedEntity::new(point, i)).collect();
        let ranked = rank_by_distance(&entities, 0.0, 0.0);
        let ids: Vec<_> = ranked.iter().map(|r| r.entity.payload).collect();
        prop_assert_eq!(ids, (0..copies).collect::<Vec<_>>());
    }

    #[test]
    fn format_picks_unit_by_magnitude(km in 0.0_f64..500.0) {
        let label = format_distance(km);
        if km < 1.0 {
            prop_assert!(label.ends_with('m') && !label.ends_with("km"), "{}", label);
        } else {
            prop_assert!(label.ends_with("km"), "{}", label);
            let digits = label.trim_end_matches("km");
            prop_assert_eq!(digits.split('.').nth(1).map(str::len), Some(1));
        }
    }
}

#[test]
fn nairobi_scenarios() {
    assert_eq!(distance_km(-1.2921, 36.8219, -1.2921, 36.8219), 0.0);

    let one_km = distance_km(-1.2921, 36.8219, -1.2921 + 0.009, 36.8219);
    assert!((one_km - 1.0).abs() <= 0.05);

    let empty: Vec<LocatedEntity<()>> = Vec::new();
    assert!(filter_by_service_area(&empty, -1.2921, 36.8219, 15.0).is_empty());
}
