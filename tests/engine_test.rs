use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Duration;

use rstest::rstest;
use structure_validator::{DEFAULT_MAX_RULES, Engine, EngineConfig, Rule, RuleError};

fn noop() -> Rule<String> {
    Rule::new(|_: &String| None)
}

#[rstest]
#[case(0, 1)]
#[case(1, 1)]
#[case(10, 10)]
#[case(25, 25)]
fn max_rules_coercion(#[case] requested: usize, #[case] effective: usize) {
    let config = EngineConfig::new().with_max_rules(requested);
    assert_eq!(config.max_rules(), effective);
}

#[test]
fn config_defaults_to_unbounded_analysis() {
    let config = EngineConfig::new();
    assert_eq!(config.max_rules(), DEFAULT_MAX_RULES);
    assert_eq!(config.timeout(), None);
}

#[test]
fn timeout_round_trips_through_builder() {
    let config = EngineConfig::new().with_timeout(Duration::from_secs(30));
    assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
    assert_eq!(config.without_timeout().timeout(), None);
}

#[test]
fn rules_returns_every_rule_added() {
    let config = EngineConfig::new().with_max_rules(3);
    let mut engine = Engine::new(config.clone());
    engine.add_rule(noop().with_priority(3));
    engine.add_rule(noop().with_priority(1));
    engine.add_rule(noop().with_priority(2));

    let priorities: Vec<i32> = engine.rules().iter().map(Rule::priority).collect();
    assert_eq!(priorities, vec![1, 2, 3]);
    assert_eq!(engine.config(), &config);
}

#[test]
fn overflow_panics_and_preserves_existing_rules() {
    let mut engine = Engine::with_rules(
        EngineConfig::new().with_max_rules(2),
        vec![
            Rule::new(|_: &String| Some(RuleError::new("kept 1"))),
            Rule::new(|_: &String| Some(RuleError::new("kept 2"))),
        ],
    );

    let result = catch_unwind(AssertUnwindSafe(|| engine.add_rule(noop())));
    assert!(result.is_err());

    // The failed add must not have disturbed the collection.
    let messages: Vec<String> = engine
        .rules()
        .iter()
        .map(|r| r.check(&String::new()).unwrap().message.into_owned())
        .collect();
    assert_eq!(messages, vec!["kept 1", "kept 2"]);
}

#[test]
fn overflow_panics_every_time() {
    let mut engine = Engine::with_rules(EngineConfig::new().with_max_rules(1), vec![noop()]);

    for _ in 0..3 {
        let result = catch_unwind(AssertUnwindSafe(|| engine.add_rule(noop())));
        assert!(result.is_err());
        assert_eq!(engine.len(), 1);
    }
}
