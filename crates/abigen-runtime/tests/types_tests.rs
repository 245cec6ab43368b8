//! Tests for the ABI fragment model

use abigen_runtime::{Fragment, FragmentKind, Param};
use serde_json::json;

// ============================================================================
// DESERIALIZATION TESTS
// ============================================================================

#[test]
fn test_deserialize_function() {
    let value = json!({
        "inputs": [
            { "internalType": "address", "name": "to", "type": "address" },
            { "internalType": "uint256", "name": "amount", "type": "uint256" }
        ],
        "name": "transfer",
        "outputs": [{ "internalType": "bool", "name": "", "type": "bool" }],
        "stateMutability": "nonpayable",
        "type": "function"
    });

    let fragment: Fragment = serde_json::from_value(value).unwrap();
    assert_eq!(fragment.name.as_deref(), Some("transfer"));
    assert_eq!(fragment.kind, FragmentKind::Function);
    assert_eq!(fragment.inputs.len(), 2);
    assert_eq!(fragment.inputs[1].internal_type.as_deref(), Some("uint256"));
    assert_eq!(fragment.output_types().collect::<Vec<_>>(), vec!["bool"]);
    assert_eq!(fragment.state_mutability.as_deref(), Some("nonpayable"));
    assert!(fragment.extra.is_empty());
}

#[test]
fn test_deserialize_event_with_indexed() {
    let value = json!({
        "anonymous": false,
        "inputs": [
            { "indexed": true, "name": "from", "type": "address" },
            { "indexed": false, "name": "value", "type": "uint256" }
        ],
        "name": "Transfer",
        "type": "event"
    });

    let fragment: Fragment = serde_json::from_value(value).unwrap();
    assert_eq!(fragment.kind, FragmentKind::Event);
    assert_eq!(fragment.anonymous, Some(false));
    assert_eq!(fragment.inputs[0].indexed, Some(true));
    assert_eq!(fragment.outputs, None);
}

#[test]
fn test_deserialize_receive_without_inputs() {
    let value = json!({ "stateMutability": "payable", "type": "receive" });

    let fragment: Fragment = serde_json::from_value(value).unwrap();
    assert_eq!(fragment.kind, FragmentKind::Receive);
    assert!(fragment.inputs.is_empty());
    assert!(!fragment.is_nameable());
}

#[test]
fn test_deserialize_tuple_components() {
    let value = json!({
        "name": "submit",
        "type": "function",
        "inputs": [{
            "name": "order",
            "type": "tuple",
            "components": [
                { "name": "maker", "type": "address" },
                { "name": "amounts", "type": "uint256[]" }
            ]
        }]
    });

    let fragment: Fragment = serde_json::from_value(value).unwrap();
    let components = fragment.inputs[0].components.as_ref().unwrap();
    assert_eq!(components.len(), 2);
    assert_eq!(components[1].type_name, "uint256[]");
}

#[test]
fn test_unknown_fields_pass_through() {
    let value = json!({
        "name": "legacy",
        "type": "function",
        "inputs": [{ "name": "x", "type": "uint8", "note": "kept" }],
        "constant": true,
        "payable": false
    });

    let fragment: Fragment = serde_json::from_value(value).unwrap();
    assert_eq!(fragment.extra.get("constant"), Some(&json!(true)));
    assert_eq!(fragment.inputs[0].extra.get("note"), Some(&json!("kept")));

    let back = serde_json::to_value(&fragment).unwrap();
    assert_eq!(back["constant"], json!(true));
    assert_eq!(back["inputs"][0]["note"], json!("kept"));
}

#[test]
fn test_missing_type_is_rejected() {
    let value = json!({ "name": "broken", "inputs": [] });
    assert!(serde_json::from_value::<Fragment>(value).is_err());
}

// ============================================================================
// SERIALIZATION TESTS
// ============================================================================

#[test]
fn test_serialize_omits_absent_fields() {
    let fragment = Fragment::new(FragmentKind::Event)
        .with_name("Paused")
        .with_inputs(vec![Param::named("account", "address")]);

    let value = serde_json::to_value(&fragment).unwrap();
    assert_eq!(
        value,
        json!({
            "name": "Paused",
            "type": "event",
            "inputs": [{ "name": "account", "type": "address" }]
        })
    );
}

#[test]
fn test_serialize_uses_camel_case() {
    let fragment = Fragment::new(FragmentKind::Function)
        .with_name("owner")
        .with_outputs(vec![Param::new("address")])
        .with_state_mutability("view");

    let value = serde_json::to_value(&fragment).unwrap();
    assert_eq!(value["stateMutability"], json!("view"));
    assert!(value.get("state_mutability").is_none());
}

#[test]
fn test_serialize_field_order_is_stable() {
    let value = json!({
        "type": "function",
        "stateMutability": "view",
        "outputs": [],
        "name": "totalSupply",
        "inputs": []
    });

    let fragment: Fragment = serde_json::from_value(value).unwrap();
    let keys: Vec<String> =
        serde_json::to_value(&fragment).unwrap().as_object().unwrap().keys().cloned().collect();

    assert_eq!(keys, vec!["name", "type", "inputs", "outputs", "stateMutability"]);
}
