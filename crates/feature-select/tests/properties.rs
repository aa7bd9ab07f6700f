//! Property tests shared by both selectors

use feature_select::{
    Cmim, Disr, FeatureSelector, FeatureView, InformationOracle, UnweightedOracle, WeightedOracle,
};
use proptest::prelude::*;

#[derive(Debug, Clone)]
struct Problem {
    n_samples: usize,
    n_features: usize,
    matrix: Vec<f64>,
    class: Vec<f64>,
    weights: Vec<f64>,
    k: usize,
}

impl Problem {
    fn view(&self) -> FeatureView<'_> {
        FeatureView::from_column_major(&self.matrix, self.n_samples, self.n_features).unwrap()
    }
}

fn problem() -> impl Strategy<Value = Problem> {
    (1usize..24, 1usize..8).prop_flat_map(|(n_samples, n_features)| {
        (
            prop::collection::vec((0u8..3).prop_map(f64::from), n_samples * n_features),
            prop::collection::vec((0u8..2).prop_map(f64::from), n_samples),
            prop::collection::vec(prop_oneof![Just(0.0), 0.0f64..5.0], n_samples),
            1..=n_features,
        )
            .prop_map(move |(matrix, class, weights, k)| Problem {
                n_samples,
                n_features,
                matrix,
                class,
                weights,
                k,
            })
    })
}

fn selectors() -> Vec<Box<dyn FeatureSelector>> {
    vec![Box::new(Cmim::new()), Box::new(Disr::new())]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn returns_k_distinct_indices_in_range(p in problem()) {
        for selector in selectors() {
            let selection = selector.select(p.k, &p.view(), &p.class, &p.weights).unwrap();
            prop_assert_eq!(selection.features.len(), p.k);
            prop_assert_eq!(selection.scores.len(), p.k);

            let mut seen = vec![false; p.n_features];
            for &j in &selection.features {
                prop_assert!(j < p.n_features, "{} returned index {}", selector.name(), j);
                prop_assert!(!seen[j], "{} returned {} twice", selector.name(), j);
                seen[j] = true;
            }
            prop_assert!(selection.scores.iter().all(|s| s.is_finite()));
        }
    }

    #[test]
    fn selection_is_idempotent(p in problem()) {
        for selector in selectors() {
            let first = selector.select(p.k, &p.view(), &p.class, &p.weights).unwrap();
            let second = selector.select(p.k, &p.view(), &p.class, &p.weights).unwrap();
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn single_feature_is_mutual_information_argmax(p in problem()) {
        let view = p.view();
        let mut best = 0;
        let mut best_mi = f64::NEG_INFINITY;
        for (j, column) in view.columns().enumerate() {
            let mi = WeightedOracle.mutual_information(column, &p.class, &p.weights).unwrap();
            if mi > best_mi {
                best_mi = mi;
                best = j;
            }
        }
        for selector in selectors() {
            let selection = selector.select(1, &view, &p.class, &p.weights).unwrap();
            prop_assert_eq!(selection.features, vec![best]);
        }
    }

    #[test]
    fn unit_weights_match_unweighted_bit_for_bit(p in problem()) {
        let ones = vec![1.0; p.n_samples];
        let view = p.view();

        let pairs: [(Box<dyn FeatureSelector>, Box<dyn FeatureSelector>); 2] = [
            (Box::new(Cmim::new()), Box::new(Cmim::with_oracle(UnweightedOracle))),
            (Box::new(Disr::new()), Box::new(Disr::with_oracle(UnweightedOracle))),
        ];
        for (weighted, unweighted) in pairs {
            let a = weighted.select(p.k, &view, &p.class, &ones).unwrap();
            let b = unweighted.select(p.k, &view, &p.class, &ones).unwrap();
            prop_assert_eq!(&a.features, &b.features);
            let bits = |s: &[f64]| s.iter().map(|v| v.to_bits()).collect::<Vec<_>>();
            prop_assert_eq!(bits(&a.scores), bits(&b.scores));
        }
    }

    #[test]
    fn oracle_work_is_linear_in_k(p in problem()) {
        let view = p.view();
        let cmim = Cmim::new().select(p.k, &view, &p.class, &p.weights).unwrap();
        prop_assert!(cmim.stats.cmi_evaluations <= (p.k - 1) * p.n_features);

        let disr = Disr::new().select(p.k, &view, &p.class, &p.weights).unwrap();
        prop_assert!(disr.stats.relevance_evaluations <= p.k * p.n_features);
        prop_assert_eq!(disr.stats.mi_evaluations, p.n_features);
    }
}
