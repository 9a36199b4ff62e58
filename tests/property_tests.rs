use proptest::prelude::*;
use structure_validator::{Engine, EngineConfig, Rule, RuleError, Validator};

proptest! {
    /// `rules()` is sorted by non-decreasing priority and returns exactly
    /// the set of rules added, whatever the insertion order.
    #[test]
    fn rules_sorted_and_complete(priorities in prop::collection::vec(-100i32..100, 0..20)) {
        let config = EngineConfig::new().with_max_rules(priorities.len().max(1));
        let rules = priorities.iter().enumerate().map(|(index, &priority)| {
            Rule::new(move |_: &u8| Some(RuleError::new(format!("rule-{index}"))))
                .with_priority(priority)
        });
        let engine = Engine::with_rules(config, rules);

        let sorted = engine.rules();
        prop_assert_eq!(sorted.len(), priorities.len());

        for pair in sorted.windows(2) {
            prop_assert!(pair[0].priority() <= pair[1].priority());
        }

        let mut seen: Vec<String> = sorted
            .iter()
            .map(|r| r.check(&0).unwrap().message.into_owned())
            .collect();
        seen.sort();
        let mut expected: Vec<String> =
            (0..priorities.len()).map(|i| format!("rule-{i}")).collect();
        expected.sort();
        prop_assert_eq!(seen, expected);
    }

    /// Without a timeout, analysis reports one error per violated rule, in
    /// priority order.
    #[test]
    fn analysis_reports_each_violation_once(thresholds in prop::collection::vec(0u8..=255, 1..10)) {
        let config = EngineConfig::new().with_max_rules(thresholds.len());
        let rules = thresholds.iter().enumerate().map(|(index, &threshold)| {
            Rule::new(move |v: &u8| {
                (*v < threshold).then(|| RuleError::new(format!("below-{threshold}")))
            })
            .with_priority(index as i32)
        });
        let engine = Engine::with_rules(config, rules);

        let value = 128u8;
        let errors = Validator::new(engine).analyze(value);
        let expected: Vec<String> = thresholds
            .iter()
            .filter(|&&t| value < t)
            .map(|t| format!("below-{t}"))
            .collect();

        let reported: Vec<String> = errors
            .into_iter()
            .map(|e| e.message.into_owned())
            .collect();
        prop_assert_eq!(reported, expected);
    }

    /// Any capacity request is coerced to at least one rule.
    #[test]
    fn capacity_is_always_positive(requested in 0usize..10_000) {
        let config = EngineConfig::new().with_max_rules(requested);
        prop_assert!(config.max_rules() >= 1);
        prop_assert_eq!(config.max_rules(), requested.max(1));
    }
}
