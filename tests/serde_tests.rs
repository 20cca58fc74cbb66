#![cfg(feature = "serde")]

use polyvariant::{Monostate, Variant};
use std::panic::{self, AssertUnwindSafe};

type Message = Variant<(Monostate, u32, String)>;

#[test]
fn test_serializes_as_ordinal_payload_pair() -> anyhow::Result<()> {
    assert_eq!(serde_json::to_string(&Message::new(7u32))?, "[1,7]");
    assert_eq!(serde_json::to_string(&Message::new(String::from("hi")))?, r#"[2,"hi"]"#);
    assert_eq!(serde_json::to_string(&Message::default())?, "[0,null]");
    Ok(())
}

#[test]
fn test_deserializes_same_shape() -> anyhow::Result<()> {
    let text: Message = serde_json::from_str(r#"[2,"back"]"#)?;
    assert_eq!(text.get::<String, _>().map(String::as_str), Ok("back"));

    let number: Message = serde_json::from_str("[1, 42]")?;
    assert_eq!(number, Message::new(42u32));
    Ok(())
}

#[test]
fn test_rejects_bad_input() {
    assert!(serde_json::from_str::<Message>("[3, 1]").is_err());
    assert!(serde_json::from_str::<Message>("[1]").is_err());
    assert!(serde_json::from_str::<Message>(r#"[1, "not a number"]"#).is_err());
}

#[derive(Debug)]
struct Brittle;

impl Clone for Brittle {
    fn clone(&self) -> Self {
        panic!("Brittle::clone");
    }
}

impl serde::Serialize for Brittle {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_unit()
    }
}

#[test]
fn test_valueless_does_not_serialize() {
    let mut v = Variant::<(u8, Brittle)>::new(1u8);
    let result = panic::catch_unwind(AssertUnwindSafe(|| v.set_cloned(&Brittle)));
    assert!(result.is_err());
    assert!(serde_json::to_string(&v).is_err());
}
