#![cfg(feature = "serde")]

//! Integration tests for serde support of `Optional`.
//!
//! `Optional<T>` must serialize exactly like `Option<T>`.

use optional_fp::optional::Optional;
use proptest::prelude::*;
use rstest::rstest;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Profile {
    name: String,
    nickname: Optional<String>,
    age: Optional<u32>,
}

#[rstest]
#[case(Optional::Present(42), "42")]
#[case(Optional::Absent, "null")]
fn test_json_representation(#[case] value: Optional<i32>, #[case] expected: &str) {
    assert_eq!(serde_json::to_string(&value).unwrap(), expected);
}

#[rstest]
fn test_struct_field_roundtrip() {
    let profile = Profile {
        name: "Ada".to_string(),
        nickname: Optional::Absent,
        age: Optional::Present(36),
    };

    let json = serde_json::to_string(&profile).unwrap();
    assert_eq!(json, r#"{"name":"Ada","nickname":null,"age":36}"#);

    let restored: Profile = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, profile);
}

#[rstest]
fn test_nested_optional_in_vector() {
    let values = vec![Optional::Present(1), Optional::Absent, Optional::Present(3)];

    let json = serde_json::to_string(&values).unwrap();
    assert_eq!(json, "[1,null,3]");

    let restored: Vec<Optional<i32>> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, values);
}

proptest! {
    /// Serialized form equals that of the equivalent Option
    #[test]
    fn prop_serializes_like_option(value in any::<Option<String>>()) {
        let from_optional = serde_json::to_string(&Optional::from(value.clone())).unwrap();
        let from_option = serde_json::to_string(&value).unwrap();
        prop_assert_eq!(from_optional, from_option);
    }

    /// Deserializing Option's output gives back the same value
    #[test]
    fn prop_deserializes_option_output(value in any::<Option<i64>>()) {
        let json = serde_json::to_string(&value).unwrap();
        let restored: Optional<i64> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(restored, Optional::from(value));
    }
}
