use astar_engine::heuristic::{parse_xy, BuiltinHeuristic, Heuristic, HeuristicRegistry};
use astar_engine::Error;

#[test]
fn test_builtin_names_resolve() {
    let registry = HeuristicRegistry::default();
    for name in ["zero", "none", "manhattan", "euclidean"] {
        assert!(registry.resolve(name).is_ok(), "{} should resolve", name);
    }
    assert_eq!(
        registry.names().collect::<Vec<_>>(),
        vec!["euclidean", "manhattan", "none", "zero"]
    );
}

#[test]
fn test_unknown_heuristic_is_an_error() {
    let registry = HeuristicRegistry::default();
    match registry.resolve("chebyshev") {
        Err(Error::UnknownHeuristic(name)) => assert_eq!(name, "chebyshev"),
        Err(other) => panic!("unexpected error {:?}", other),
        Ok(_) => panic!("chebyshev should not be registered"),
    }
    assert!(HeuristicRegistry::empty().resolve("zero").is_err());
}

#[test]
fn test_zero_is_always_zero() {
    let zero = HeuristicRegistry::default().resolve("zero").unwrap();
    assert_eq!(zero.estimate("0,0", "5,5"), 0.0);
    assert_eq!(zero.estimate("A", "B"), 0.0);
}

#[test]
fn test_manhattan_distance() {
    let h = BuiltinHeuristic::Manhattan;
    assert_eq!(h.estimate("0,0", "2,2"), 4.0);
    assert_eq!(h.estimate("3,-1", "-2,4"), 10.0);
    assert_eq!(h.estimate("7,7", "7,7"), 0.0);
}

#[test]
fn test_manhattan_at_coordinate_extremes() {
    let h = BuiltinHeuristic::Manhattan;
    let low = format!("{},{}", i64::MIN, i64::MIN);
    let high = format!("{},{}", i64::MAX, i64::MAX);

    let estimate = h.estimate(&low, &high);
    assert!(estimate.is_finite());
    assert_eq!(estimate, 2.0 * u64::MAX as f64);
    assert_eq!(h.estimate(&high, &low), estimate);
}

#[test]
fn test_euclidean_distance() {
    let h = BuiltinHeuristic::Euclidean;
    assert_eq!(h.estimate("0,0", "3,4"), 5.0);
    assert!(h.estimate("0,0", "1,1") <= BuiltinHeuristic::Manhattan.estimate("0,0", "1,1"));
}

#[test]
fn test_coordinate_heuristics_fall_back_to_zero() {
    for h in [BuiltinHeuristic::Manhattan, BuiltinHeuristic::Euclidean] {
        assert_eq!(h.estimate("A", "2,2"), 0.0);
        assert_eq!(h.estimate("0,0", "x,1"), 0.0);
        assert_eq!(h.estimate("1.5,2", "0,0"), 0.0);
        assert_eq!(h.estimate("1,2,3", "0,0"), 0.0);
        assert_eq!(h.estimate("", ""), 0.0);
    }
}

#[test]
fn test_parse_xy() {
    assert_eq!(parse_xy("3,4"), Some((3, 4)));
    assert_eq!(parse_xy("-3, 4"), Some((-3, 4)));
    assert_eq!(parse_xy("3"), None);
    assert_eq!(parse_xy("a,b"), None);
}

#[test]
fn test_register_custom_heuristic() {
    let mut registry = HeuristicRegistry::default();
    registry.register("constant", |_: &str, _: &str| 2.5);
    registry.register("manhattan", BuiltinHeuristic::Zero);

    assert_eq!(registry.resolve("constant").unwrap().estimate("a", "b"), 2.5);
    assert_eq!(registry.resolve("manhattan").unwrap().estimate("0,0", "9,9"), 0.0);
}
