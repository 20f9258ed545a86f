use livescore_core::{EventCatalog, Format, FormatLookup, RoundRules, ScoringConfig};
use serde_json::{Value, json};

#[test]
fn scoring_config_serializes_with_stable_keys() {
    let value = serde_json::to_value(ScoringConfig::default()).unwrap();
    assert_eq!(
        value,
        json!({
            "max_moves": 80,
            "packed_budget": {
                "per_item_centiseconds": 60000,
                "cap_centiseconds": 360000,
                "grace_per_item_centiseconds": 500
            },
            "analyzer": {
                "packed_pace_floor_centiseconds": 3000,
                "spread_factor": 4
            }
        })
    );
}

#[test]
fn event_catalog_ids_are_unique_and_formats_known() {
    let catalog = EventCatalog::load_from_static();
    let mut ids: Vec<&str> = catalog.iter().map(|event| event.id.as_str()).collect();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total, "duplicate event ids in events.json");

    let packed: Vec<&str> = catalog
        .iter()
        .filter(|event| event.format == Format::Packed)
        .map(|event| event.id.as_str())
        .collect();
    assert_eq!(packed, vec!["333mbf"]);
    assert_eq!(catalog.format_for("333fm"), Some(Format::MoveCount));
}

#[test]
fn round_rules_deserialize_from_competition_data() {
    let rules: RoundRules = serde_json::from_value(json!({
        "cutoff": { "number_of_attempts": 2, "attempt_result": 6000 },
        "time_limit": { "centiseconds": 60000, "cumulative_round_ids": ["333bf-r1"] }
    }))
    .unwrap();
    let cutoff = rules.cutoff.unwrap();
    assert_eq!(cutoff.number_of_attempts, 2);
    assert!(rules.time_limit.unwrap().is_cumulative());

    let empty: RoundRules = serde_json::from_value(Value::Object(Default::default())).unwrap();
    assert_eq!(empty, RoundRules::default());

    let limit_only: RoundRules =
        serde_json::from_value(json!({ "time_limit": { "centiseconds": 1000 } })).unwrap();
    assert!(!limit_only.time_limit.unwrap().is_cumulative());
}
