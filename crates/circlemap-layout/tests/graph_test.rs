use circlemap_layout::{Error, LayoutConfig, RegionGraph, RegionId, UpdateMode};

#[test]
fn adjacency_is_symmetric_and_deduplicated() {
    let mut g = RegionGraph::new();
    let a = g.add_region("A", 0.0, 0.0, 1.0).expect("A");
    let b = g.add_region("B", 3.0, 0.0, 1.0).expect("B");

    assert!(g.add_adjacency(a, b).expect("a-b"));
    assert!(!g.add_adjacency(b, a).expect("b-a again"));

    assert!(g.are_adjacent(a, b));
    assert!(g.are_adjacent(b, a));
    assert_eq!(g.adjacency_count(), 1);
    g.validate().expect("valid graph");
}

#[test]
fn duplicate_names_are_rejected() {
    let mut g = RegionGraph::new();
    g.add_region("D", 10.0, 51.3, 2.0).expect("D");
    let err = g.add_region("D", 5.3, 52.2, 1.0).expect_err("duplicate");
    assert!(matches!(err, Error::DuplicateRegion { .. }), "{err}");
    assert_eq!(g.len(), 1);
}

#[test]
fn radius_must_be_positive_and_finite() {
    let mut g = RegionGraph::new();
    for radius in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err = g.add_region("X", 0.0, 0.0, radius).expect_err("bad radius");
        assert!(matches!(err, Error::InvalidRadius { .. }), "{err}");
    }
    assert!(g.is_empty());
}

#[test]
fn self_and_unknown_adjacency_are_rejected() {
    let mut g = RegionGraph::new();
    let a = g.add_region("A", 0.0, 0.0, 1.0).expect("A");

    let err = g.add_adjacency(a, a).expect_err("self");
    assert!(matches!(err, Error::SelfAdjacency { .. }), "{err}");

    let err = g.add_adjacency(a, RegionId(4)).expect_err("unknown");
    assert!(
        matches!(err, Error::UnknownRegion { index: 4, len: 1 }),
        "{err}"
    );
}

#[test]
fn lookup_by_name_follows_insertion_order() {
    let mut g = RegionGraph::with_capacity(2);
    g.add_region("NL", 5.3, 52.2, 1.0).expect("NL");
    g.add_region("B", 4.8, 50.7, 1.0).expect("B");

    assert_eq!(g.index_of("B"), Some(RegionId(1)));
    assert_eq!(g.index_of("F"), None);
    let nl = g.region_by_name("NL").expect("NL");
    assert_eq!((nl.x(), nl.y()), (5.3, 52.2));
}

#[test]
fn layout_config_reads_partial_json() {
    let cfg: LayoutConfig =
        serde_json::from_str(r#"{ "maxIterations": 50, "updateMode": "simultaneous" }"#)
            .expect("config json");
    assert_eq!(cfg.max_iterations, 50);
    assert_eq!(cfg.update_mode, UpdateMode::Simultaneous);
    assert_eq!(cfg.step_factor, LayoutConfig::default().step_factor);
    cfg.validate().expect("valid config");
}
