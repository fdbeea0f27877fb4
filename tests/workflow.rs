//! Input workflow and evaluation properties.

use fourier_fun::series::evaluator::evaluate;
use fourier_fun::series::{
    ComponentStore, EvaluationSettings, SeriesError, SeriesSpec, SessionState, SineComponent,
};
use proptest::prelude::*;

fn spec(pairs: &[(f64, f64)]) -> SeriesSpec {
    SeriesSpec::from_components(
        pairs
            .iter()
            .map(|&(a, f)| SineComponent::new(a, f).expect("valid component"))
            .collect(),
    )
}

fn component_pairs(max: usize) -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((-10.0f64..10.0, 0.0f64..50.0), 0..max)
}

proptest! {
    #[test]
    fn complete_after_declared_count(pairs in component_pairs(16)) {
        let mut store = ComponentStore::new();
        store.declare_count(pairs.len() as i64).unwrap();
        for &(a, f) in &pairs {
            prop_assert!(!store.is_complete());
            store.add_component(a, f).unwrap();
        }
        prop_assert!(store.is_complete());

        let collected = store.components().unwrap();
        let got: Vec<(f64, f64)> = collected
            .iter()
            .map(|c| (c.amplitude(), c.frequency()))
            .collect();
        prop_assert_eq!(got, pairs);
    }

    #[test]
    fn overflow_leaves_components_unchanged(
        pairs in component_pairs(8),
        extra in (-10.0f64..10.0, 0.0f64..50.0),
    ) {
        let mut store = ComponentStore::new();
        store.declare_count(pairs.len() as i64).unwrap();
        for &(a, f) in &pairs {
            store.add_component(a, f).unwrap();
        }
        let before = store.components().unwrap();

        let err = store.add_component(extra.0, extra.1).unwrap_err();
        prop_assert!(matches!(err, SeriesError::CapacityExceeded(_)));
        prop_assert_eq!(store.components().unwrap(), before);
    }

    #[test]
    fn evaluation_is_linear(
        a1 in -5.0f64..5.0,
        a2 in -5.0f64..5.0,
        f in 0.0f64..20.0,
        count in 2usize..200,
    ) {
        let both = evaluate(&spec(&[(a1, f), (a2, f)]), 0.0, 1.0, count).unwrap();
        let first = evaluate(&spec(&[(a1, f)]), 0.0, 1.0, count).unwrap();
        let second = evaluate(&spec(&[(a2, f)]), 0.0, 1.0, count).unwrap();

        for ((b, x), y) in both.iter().zip(first.iter()).zip(second.iter()) {
            prop_assert_eq!(b.t, x.t);
            prop_assert!((b.value - (x.value + y.value)).abs() < 1e-12);
        }
    }

    #[test]
    fn zero_frequency_is_zero_everywhere(
        a in -100.0f64..100.0,
        start in -10.0f64..10.0,
        width in 0.001f64..10.0,
    ) {
        let samples = evaluate(&spec(&[(a, 0.0)]), start, start + width, 17).unwrap();
        prop_assert!(samples.iter().all(|s| s.value == 0.0));
    }
}

#[test]
fn redeclaring_discards_collected_components() {
    let mut store = ComponentStore::new();
    store.declare_count(3).unwrap();
    store.add_component(1.0, 1.0).unwrap();
    store.add_component(2.0, 2.0).unwrap();

    store.declare_count(1).unwrap();
    assert_eq!(store.collected_count(), 0);
    assert_eq!(store.state(), SessionState::CountDeclared);

    store.add_component(3.0, 3.0).unwrap();
    let only = store.components().unwrap();
    assert_eq!(only.len(), 1);
    assert_eq!(only.components()[0].amplitude(), 3.0);
}

#[test]
fn evaluate_before_complete_yields_nothing() {
    let mut store = ComponentStore::new();
    store.declare_count(2).unwrap();
    store.add_component(1.0, 1.0).unwrap();

    let result = store.evaluate(&EvaluationSettings::default());
    assert!(matches!(result, Err(SeriesError::NotReady(_))));
}

#[test]
fn unit_sine_at_five_points() {
    let mut store = ComponentStore::new();
    store.declare_count(1).unwrap();
    store.add_component(1.0, 1.0).unwrap();

    let settings = EvaluationSettings {
        domain_start: 0.0,
        domain_end: 1.0,
        sample_count: 5,
    };
    let samples = store.evaluate(&settings).unwrap();
    let expected = [(0.0, 0.0), (0.25, 1.0), (0.5, 0.0), (0.75, -1.0), (1.0, 0.0)];
    for (s, (t, v)) in samples.iter().zip(expected) {
        assert_eq!(s.t, t);
        assert!((s.value - v).abs() < 1e-9);
    }
    assert_eq!(store.state(), SessionState::Evaluated);
}
