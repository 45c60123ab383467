//! Serialization of capability metadata.

#![cfg(feature = "serde")]

use flatview::prelude::*;
use rstest::rstest;

#[rstest]
fn capabilities_serialize_as_struct() {
    let capabilities = <Flatten<&[Vec<i32>]> as Sequence>::CAPABILITIES;
    let json = serde_json::to_string(&capabilities).unwrap();
    assert_eq!(
        json,
        r#"{"tier":"RandomAccess","sized":true,"borrowed":true}"#
    );

    let restored: Capabilities = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, capabilities);
}

#[rstest]
fn unknown_tier_is_rejected() {
    let result = serde_json::from_str::<Tier>(r#""Sorted""#);
    assert!(result.is_err());
}
