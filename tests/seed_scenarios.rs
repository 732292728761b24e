//! Black-box scenario tests mirroring the seed scenarios and testable
//! properties this crate is required to satisfy, independent of its
//! internal module layout.

use jsonrescue::{Parser, RescueError, Schema};
use serde_json::json;

fn contact_schema() -> Schema {
    Schema::object_with_required(
        [
            ("name", Schema::String),
            ("age", Schema::Number),
            ("emails", Schema::array(Schema::String)),
        ],
        ["name", "age"],
    )
}

#[test]
fn seed_1_well_formed_with_required_fields() {
    let parser = Parser::new(contact_schema());
    let text = r#"{"name": "John Doe", "age": 30, "emails": ["john@example.com"]}"#;
    assert_eq!(
        parser.parse(text).unwrap(),
        json!({"name": "John Doe", "age": 30, "emails": ["john@example.com"]})
    );
}

#[test]
fn seed_2_missing_required_field_is_no_match() {
    let parser = Parser::new(contact_schema());
    let text = r#"{"name": "Test", "emails": ["test@example.com"]}"#;
    assert!(matches!(parser.parse(text), Err(RescueError::NoMatch)));
}

#[test]
fn seed_3_surrounding_prose_is_ignored() {
    let parser = Parser::new(contact_schema());
    let text = r#"Here is the data: {"name":"Jane","age":25,"emails":["jane@example.com"]} Thanks!"#;
    assert_eq!(
        parser.parse(text).unwrap(),
        json!({"name": "Jane", "age": 25, "emails": ["jane@example.com"]})
    );
}

#[test]
fn seed_4_array_unwrap_for_object_schema() {
    let parser = Parser::new(contact_schema());
    let text = r#"[{"name":"Alice","age":28,"emails":["alice@example.com"]}]"#;
    assert_eq!(
        parser.parse(text).unwrap(),
        json!({"name": "Alice", "age": 28, "emails": ["alice@example.com"]})
    );
}

#[test]
fn seed_5_single_quoted_key_and_unquoted_multi_word_value() {
    let parser = Parser::new(contact_schema());
    let text = r#"{"name": "John Doe", "age": 22, 'emails': ["john.doe@example.com"], "test": Hello World}"#;
    let result = parser.parse(text).unwrap();
    assert_eq!(result["name"], "John Doe");
    assert_eq!(result["age"], 22);
    assert_eq!(result["emails"], json!(["john.doe@example.com"]));
    assert_eq!(result["test"], "Hello World");
}

#[test]
fn seed_6_bracket_closure_recovers_truncated_input() {
    let parser = Parser::new(contact_schema());
    let text = r#"Start {"name": "Bob", "age": 35, "emails": ["bob@example.com""#;
    assert_eq!(
        parser.parse(text).unwrap(),
        json!({"name": "Bob", "age": 35, "emails": ["bob@example.com"]})
    );
}

#[test]
fn no_required_fields_rejects_object_with_no_recognized_property() {
    let schema = Schema::object([("name", Schema::String), ("age", Schema::Number)]);
    let parser = Parser::new(schema);
    let text = r#"{"unrelated": 1, "other": 2}"#;
    assert!(matches!(parser.parse(text), Err(RescueError::NoMatch)));
}

#[test]
fn idempotent_on_well_formed_input() {
    let parser = Parser::new(contact_schema());
    let text = r#"{"name": "John Doe", "age": 30, "emails": ["john@example.com"]}"#;
    let canonical: serde_json::Value = serde_json::from_str(text).unwrap();
    assert_eq!(parser.parse(text).unwrap(), canonical);
}

#[test]
fn prose_tolerance_holds_for_arbitrary_bracket_free_affixes() {
    let parser = Parser::new(contact_schema());
    let payload = r#"{"name": "Grace Hopper", "age": 85, "emails": ["grace@example.com"]}"#;
    let bare = parser.parse(payload).unwrap();

    let prefix = "The assistant replied with the following structured answer: ";
    let suffix = " Let me know if you need anything else regarding this record.";
    let wrapped = format!("{prefix}{payload}{suffix}");
    assert_eq!(parser.parse(&wrapped).unwrap(), bare);
}

#[test]
fn leftmost_candidate_wins_regardless_of_separator() {
    let parser = Parser::new(contact_schema());
    let first = r#"{"name":"Charlie","age":40,"emails":["charlie@example.com"]}"#;
    let second = r#"{"name":"Dana","age":27,"emails":["dana@example.com"]}"#;
    let expected = json!({"name": "Charlie", "age": 40, "emails": ["charlie@example.com"]});

    assert_eq!(
        parser.parse(&format!("{first}{second}")).unwrap(),
        expected
    );
    assert_eq!(
        parser.parse(&format!("{first},{second}")).unwrap(),
        expected
    );
}

#[test]
fn required_field_enforcement_holds_for_every_returned_mapping() {
    let schema = Schema::object_with_required([("id", Schema::Number)], ["id"]);
    let parser = Parser::new(schema);
    assert!(parser.parse(r#"{"id": 1}"#).is_ok());
    assert!(matches!(
        parser.parse(r#"{"other": 1}"#),
        Err(RescueError::NoMatch)
    ));
}

#[test]
fn selective_property_recursion_passes_unknown_keys_through() {
    let schema = Schema::object([("name", Schema::String)]);
    let parser = Parser::new(schema);
    let text = r#"{"name": "Ada", "internal_note": {"flag": true}}"#;
    let result = parser.parse(text).unwrap();
    assert_eq!(result["name"], "Ada");
    assert_eq!(result["internal_note"], json!({"flag": true}));
}

#[test]
fn round_trips_through_canonical_serialization() {
    let parser = Parser::new(contact_schema());
    let text = r#"{name: Ada Lovelace, age: 36, emails: ["ada@example.com"]}"#;
    let first = parser.parse(text).unwrap();

    let canonical = serde_json::to_string(&first).unwrap();
    let second = parser.parse(&canonical).unwrap();
    assert_eq!(first, second);
}

#[test]
fn incomplete_array_input_is_recovered() {
    let parser = Parser::new(contact_schema());
    let text = r#"[{"name": "Frank", "age": 33, "emails": ["frank@example.com"]"#;
    assert_eq!(
        parser.parse(text).unwrap(),
        json!({"name": "Frank", "age": 33, "emails": ["frank@example.com"]})
    );
}
