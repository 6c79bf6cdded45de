//! Unit tests for tf-network.

#[cfg(test)]
mod catalog_tests {
    use crate::{city_or_default, find_city, roads_for, roads_or_default, CITIES, DEFAULT_CITY_KEY};

    #[test]
    fn built_in_catalog_sizes() {
        assert_eq!(roads_for("ankara").unwrap().len(), 20);
        assert_eq!(roads_for("istanbul").unwrap().len(), 20);
        assert_eq!(roads_for("izmir").unwrap().len(), 20);
        assert!(roads_for("bursa").is_none());
    }

    #[test]
    fn base_flows_on_scale() {
        for city in &CITIES {
            for road in roads_for(city.key).unwrap() {
                assert!((0.0..=100.0).contains(&road.base_flow), "{}", road.name);
            }
        }
    }

    #[test]
    fn unknown_city_falls_back_to_default() {
        assert_eq!(city_or_default("bursa").key, DEFAULT_CITY_KEY);
        assert_eq!(roads_or_default("bursa"), roads_for(DEFAULT_CITY_KEY).unwrap());
        assert_eq!(find_city("izmir").unwrap().zoom, 12);
    }
}

#[cfg(test)]
mod factory_tests {
    use tf_core::{SegmentId, SimRng};

    use crate::{average_intensity, create_segments, roads_for};

    #[test]
    fn one_segment_per_road_in_catalog_order() {
        let mut rng = SimRng::new(1);
        let segments = create_segments("istanbul", &mut rng);
        let roads = roads_for("istanbul").unwrap();
        assert_eq!(segments.len(), roads.len());
        for (i, (seg, road)) in segments.iter().zip(roads).enumerate() {
            assert_eq!(seg.id, SegmentId(i as u32));
            assert_eq!(seg.name, road.name);
            assert_eq!(seg.base_flow, road.base_flow);
            assert_eq!(seg.length_m, road.start.distance_m(road.end).floor() as u64);
        }
    }

    #[test]
    fn first_ankara_segment_length() {
        let segments = create_segments("ankara", &mut SimRng::new(0));
        assert_eq!(segments[0].name, "Atatürk Bulvarı");
        assert_eq!(segments[0].length_m, 1480);
    }

    #[test]
    fn initial_intensity_below_base_flow() {
        for seed in 0..50 {
            let mut rng = SimRng::new(seed);
            for seg in create_segments("izmir", &mut rng) {
                assert!(seg.current_intensity >= seg.base_flow * 0.6);
                assert!(seg.current_intensity < seg.base_flow);
            }
        }
    }

    #[test]
    fn deterministic_for_fixed_seed() {
        let a = create_segments("ankara", &mut SimRng::new(99));
        let b = create_segments("ankara", &mut SimRng::new(99));
        assert_eq!(a, b);
    }

    #[test]
    fn unknown_city_uses_default_catalog() {
        let fallback = create_segments("bursa", &mut SimRng::new(3));
        let ankara = create_segments("ankara", &mut SimRng::new(3));
        assert_eq!(fallback, ankara);
    }

    #[test]
    fn average_of_empty_is_zero() {
        assert_eq!(average_intensity(&[]), 0.0);
    }

    #[test]
    fn average_is_arithmetic_mean() {
        let segments = create_segments("ankara", &mut SimRng::new(5));
        let sum: f64 = segments.iter().map(|s| s.current_intensity).sum();
        let avg = average_intensity(&segments);
        assert!((avg - sum / 20.0).abs() < 1e-9);
    }
}

#[cfg(test)]
mod index_tests {
    use tf_core::{GeoPoint, SegmentId, SimRng};

    use crate::{create_segments, SegmentIndex};

    #[test]
    fn nearest_to_own_midpoint() {
        let segments = create_segments("ankara", &mut SimRng::new(0));
        let index = SegmentIndex::build(&segments);
        assert_eq!(index.len(), 20);
        for seg in &segments {
            assert_eq!(index.nearest(seg.midpoint()), Some(seg.id));
        }
    }

    #[test]
    fn radius_query_matches_haversine() {
        let segments = create_segments("ankara", &mut SimRng::new(0));
        let index = SegmentIndex::build(&segments);
        let center = segments[0].midpoint();

        let hits = index.within_radius(center, 1_000.0);
        assert_eq!(hits, [SegmentId(0), SegmentId(7), SegmentId(8), SegmentId(11)]);

        let brute: Vec<SegmentId> = segments
            .iter()
            .filter(|s| s.midpoint().distance_m(center) <= 1_000.0)
            .map(|s| s.id)
            .collect();
        assert_eq!(hits, brute);
    }

    #[test]
    fn empty_index() {
        let index = SegmentIndex::build(&[]);
        assert!(index.is_empty());
        assert!(index.nearest(GeoPoint::new(0.0, 0.0)).is_none());
        assert!(index.within_radius(GeoPoint::new(0.0, 0.0), 500.0).is_empty());
    }
}

#[cfg(test)]
mod loader_tests {
    use std::io::Cursor;

    use crate::load_roads_reader;

    const GOOD: &str = "\
name,start_lat,start_lng,end_lat,end_lng,base_flow\n\
Atatürk Bulvarı,39.9208,32.8541,39.9334,32.8597,75\n\
Eskişehir Yolu,39.9334,32.8597,39.9500,32.7800,70\n\
";

    #[test]
    fn parses_rows() {
        let roads = load_roads_reader(Cursor::new(GOOD)).unwrap();
        assert_eq!(roads.len(), 2);
        assert_eq!(roads[1].name, "Eskişehir Yolu");
        assert_eq!(roads[1].end.lng, 32.78);
        assert_eq!(roads[0].base_flow, 75.0);
    }

    #[test]
    fn base_flow_out_of_range_rejected() {
        let csv = "name,start_lat,start_lng,end_lat,end_lng,base_flow\nX,1,1,2,2,120\n";
        let err = load_roads_reader(Cursor::new(csv)).unwrap_err();
        assert!(err.to_string().contains("base_flow"), "{err}");
    }

    #[test]
    fn bad_coordinate_rejected() {
        let csv = "name,start_lat,start_lng,end_lat,end_lng,base_flow\nX,95,1,2,2,50\n";
        assert!(load_roads_reader(Cursor::new(csv)).is_err());
    }

    #[test]
    fn malformed_number_rejected() {
        let csv = "name,start_lat,start_lng,end_lat,end_lng,base_flow\nX,abc,1,2,2,50\n";
        assert!(load_roads_reader(Cursor::new(csv)).is_err());
    }
}
