//! Integration tests for the search engine
//!
//! These tests cover the full query contract:
//! - Filter validation (empty tiers, bad distance bounds)
//! - Tier membership and required-material subset matching
//! - Distance computation, boundary handling, and stable ranking

use planetfinder_core::{
    Catalog, Error, Exchange, GalaxyConfig, Material, MaterialAbundance, MaterialId, Planet,
    PlanetId, System, SystemId,
};
use planetfinder_search::{FilterSpec, SearchEngine};

/// Helper to create a test planet
fn make_planet(id: u32, tier: u8, x: f64, y: f64, materials: &[u32]) -> Planet {
    Planet {
        id: PlanetId(id),
        system_id: SystemId(1),
        name: format!("Planet {id}"),
        type_code: 4,
        fertility: 0.5,
        x,
        y,
        size: 1.0,
        tier,
        materials: materials
            .iter()
            .map(|&m| MaterialAbundance {
                material_id: MaterialId(m),
                abundance: 1.0,
            })
            .collect(),
    }
}

/// Helper to create a single-system catalog
fn make_catalog(px_to_ly: f64, planets: Vec<Planet>) -> Catalog {
    Catalog {
        galaxy_config: GalaxyConfig { px_to_ly },
        materials: vec![
            Material { id: MaterialId(5), name: "Iridium".into() },
            Material { id: MaterialId(7), name: "Water".into() },
        ],
        systems: vec![System {
            id: Some(SystemId(1)),
            planets,
        }],
    }
}

/// The two-planet scenario: A sits on the exchange point, B is 100 px
/// (one light-year) east of it.
fn scenario_catalog() -> Catalog {
    make_catalog(
        100.0,
        vec![
            make_planet(1, 1, 3301.0, 1409.0, &[5]),
            make_planet(2, 2, 3401.0, 1409.0, &[]),
        ],
    )
}

mod scenario_tests {
    use super::*;

    #[test]
    fn test_unbounded_query_ranks_by_distance() {
        let catalog = scenario_catalog();
        let filter = FilterSpec::new().with_tiers([1, 2]);

        let hits = SearchEngine::new().search(&catalog, &filter).unwrap();

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].planet.id, PlanetId(1));
        assert!(hits[0].distance.abs() < 1e-9);
        assert!(hits[0].light_years.abs() < 1e-9);
        assert_eq!(hits[1].planet.id, PlanetId(2));
        assert!((hits[1].distance - 100.0).abs() < 1e-9);
        assert!((hits[1].light_years - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_tier_and_material_query() {
        let catalog = scenario_catalog();
        let filter = FilterSpec::new().with_tier(1).with_material(MaterialId(5));

        let hits = SearchEngine::new().search(&catalog, &filter).unwrap();

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].planet.id, PlanetId(1));
    }

    #[test]
    fn test_distance_bound_excludes() {
        let catalog = scenario_catalog();
        let filter = FilterSpec::new().with_tier(2).with_max_light_years(0.5);

        let hits = SearchEngine::new().search(&catalog, &filter).unwrap();

        assert!(hits.is_empty());
    }
}

mod validation_tests {
    use super::*;

    #[test]
    fn test_empty_tiers_fails_before_searching() {
        let catalog = scenario_catalog();
        let err = SearchEngine::new()
            .search(&catalog, &FilterSpec::new())
            .unwrap_err();

        assert!(matches!(err, Error::EmptyTierFilter));
        assert!(err.is_validation());
    }

    #[test]
    fn test_negative_bound_fails() {
        let catalog = scenario_catalog();
        let filter = FilterSpec::all_tiers().with_max_light_years(-1.0);
        let err = SearchEngine::new().search(&catalog, &filter).unwrap_err();

        assert!(matches!(err, Error::InvalidDistance { .. }));
    }

    #[test]
    fn test_out_of_range_tier_fails() {
        let catalog = scenario_catalog();
        let filter = FilterSpec::new().with_tier(9);
        let err = SearchEngine::new().search(&catalog, &filter).unwrap_err();

        assert!(matches!(err, Error::TierOutOfRange { tier: 9, .. }));
    }
}

mod filter_tests {
    use super::*;

    #[test]
    fn test_tier_membership() {
        let catalog = make_catalog(
            100.0,
            vec![
                make_planet(1, 1, 0.0, 0.0, &[]),
                make_planet(2, 2, 0.0, 0.0, &[]),
                make_planet(3, 3, 0.0, 0.0, &[]),
                make_planet(4, 4, 0.0, 0.0, &[]),
            ],
        );
        let filter = FilterSpec::new().with_tiers([2, 4]);

        let hits = SearchEngine::new().search(&catalog, &filter).unwrap();

        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|h| filter.tiers.contains(&h.planet.tier)));
    }

    #[test]
    fn test_extra_materials_still_match() {
        let catalog = make_catalog(100.0, vec![make_planet(1, 1, 0.0, 0.0, &[5, 7, 9])]);
        let filter = FilterSpec::new().with_tier(1).with_material(MaterialId(5));

        let hits = SearchEngine::new().search(&catalog, &filter).unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_all_required_materials_must_be_present() {
        let catalog = make_catalog(100.0, vec![make_planet(1, 1, 0.0, 0.0, &[5])]);
        let filter = FilterSpec::new()
            .with_tier(1)
            .with_materials([MaterialId(5), MaterialId(7)]);

        let hits = SearchEngine::new().search(&catalog, &filter).unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn test_bare_planet_never_matches_material_requirement() {
        let catalog = make_catalog(100.0, vec![make_planet(1, 1, 0.0, 0.0, &[])]);
        let filter = FilterSpec::new().with_tier(1).with_material(MaterialId(5));

        let hits = SearchEngine::new().search(&catalog, &filter).unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn test_boundary_distance_is_inclusive() {
        // exactly 100 px = 1.0 LY from the exchange
        let catalog = scenario_catalog();
        let filter = FilterSpec::new().with_tier(2).with_max_light_years(1.0);

        let hits = SearchEngine::new().search(&catalog, &filter).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].planet.id, PlanetId(2));
    }

    #[test]
    fn test_empty_result_is_ok() {
        let catalog = make_catalog(100.0, vec![]);
        let hits = SearchEngine::new()
            .search(&catalog, &FilterSpec::all_tiers())
            .unwrap();
        assert!(hits.is_empty());
    }
}

mod ranking_tests {
    use super::*;

    #[test]
    fn test_sorted_ascending_by_distance() {
        let catalog = make_catalog(
            100.0,
            vec![
                make_planet(1, 1, 3601.0, 1409.0, &[]),
                make_planet(2, 1, 3301.0, 1409.0, &[]),
                make_planet(3, 1, 3451.0, 1409.0, &[]),
            ],
        );

        let hits = SearchEngine::new()
            .search(&catalog, &FilterSpec::all_tiers())
            .unwrap();

        let ids: Vec<_> = hits.iter().map(|h| h.planet.id.value()).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        for pair in hits.windows(2) {
            assert!(pair[0].distance <= pair[1].distance);
        }
    }

    #[test]
    fn test_equal_distances_keep_catalog_order() {
        // four planets on the same circle around the exchange
        let catalog = make_catalog(
            100.0,
            vec![
                make_planet(9, 1, 3351.0, 1409.0, &[]),
                make_planet(3, 1, 3251.0, 1409.0, &[]),
                make_planet(7, 1, 3301.0, 1459.0, &[]),
                make_planet(1, 1, 3301.0, 1359.0, &[]),
            ],
        );

        let hits = SearchEngine::new()
            .search(&catalog, &FilterSpec::all_tiers())
            .unwrap();

        let ids: Vec<_> = hits.iter().map(|h| h.planet.id.value()).collect();
        assert_eq!(ids, vec![9, 3, 7, 1]);
    }

    #[test]
    fn test_custom_exchange_point() {
        let catalog = make_catalog(
            100.0,
            vec![
                make_planet(1, 1, 0.0, 0.0, &[]),
                make_planet(2, 1, 30.0, 40.0, &[]),
            ],
        );
        let engine = SearchEngine::with_exchange(Exchange::new(30.0, 40.0));

        let hits = engine.search(&catalog, &FilterSpec::all_tiers()).unwrap();

        assert_eq!(hits[0].planet.id, PlanetId(2));
        assert!((hits[1].distance - 50.0).abs() < 1e-9);
        assert!((hits[1].light_years - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_catalog_not_mutated() {
        let catalog = scenario_catalog();
        let before = catalog.clone();

        let _ = SearchEngine::new()
            .search(&catalog, &FilterSpec::all_tiers())
            .unwrap();

        assert_eq!(catalog, before);
    }
}

// Property-based tests using proptest
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_planets() -> impl Strategy<Value = Vec<Planet>> {
        proptest::collection::vec(
            (
                -5000.0f64..5000.0,
                -5000.0f64..5000.0,
                1u8..=4,
                proptest::bool::ANY,
            ),
            0..40,
        )
        .prop_map(|specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(i, (x, y, tier, has_material))| {
                    let materials: &[u32] = if has_material { &[5] } else { &[] };
                    make_planet(i as u32, tier, x, y, materials)
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn test_hits_respect_tier_filter(planets in arb_planets(), tier in 1u8..=4) {
            let catalog = make_catalog(100.0, planets);
            let filter = FilterSpec::new().with_tier(tier);
            let hits = SearchEngine::new().search(&catalog, &filter).unwrap();

            prop_assert!(hits.iter().all(|h| h.planet.tier == tier));
        }

        #[test]
        fn test_hits_sorted_by_distance(planets in arb_planets()) {
            let catalog = make_catalog(100.0, planets);
            let hits = SearchEngine::new()
                .search(&catalog, &FilterSpec::all_tiers())
                .unwrap();

            prop_assert!(hits.windows(2).all(|p| p[0].distance <= p[1].distance));
        }

        #[test]
        fn test_hits_superset_of_required_materials(planets in arb_planets()) {
            let catalog = make_catalog(100.0, planets);
            let filter = FilterSpec::all_tiers().with_material(MaterialId(5));
            let hits = SearchEngine::new().search(&catalog, &filter).unwrap();

            prop_assert!(hits.iter().all(|h| h.planet.has_material(MaterialId(5))));
        }

        #[test]
        fn test_hits_within_distance_bound(planets in arb_planets(), max_ly in 0.0f64..100.0) {
            let catalog = make_catalog(100.0, planets);
            let filter = FilterSpec::all_tiers().with_max_light_years(max_ly);
            let hits = SearchEngine::new().search(&catalog, &filter).unwrap();

            prop_assert!(hits.iter().all(|h| h.light_years <= max_ly));
        }

        #[test]
        fn test_light_years_consistent_with_distance(planets in arb_planets()) {
            let catalog = make_catalog(250.0, planets);
            let hits = SearchEngine::new()
                .search(&catalog, &FilterSpec::all_tiers())
                .unwrap();

            prop_assert!(hits.iter().all(|h| (h.light_years - h.distance / 250.0).abs() < 1e-9));
        }
    }
}
