//! Tests for the tool system through the public API.

use std::sync::Arc;

use serde_json::json;

use tallyloop::error::AgentError;
use tallyloop::tools::arithmetic::{add_tool, divide_tool, multiply_tool};
use tallyloop::tools::*;

#[test]
fn parameter_builder_constructs_schema() {
    let params = AgentToolParameters::object()
        .integer("a", "First int", true)
        .number("scale", "Scale factor", false)
        .string("label", "Label", false)
        .build();

    let schema = &params.schema;
    assert_eq!(schema["type"], "object");
    assert_eq!(schema["properties"]["a"]["type"], "integer");
    assert_eq!(schema["properties"]["scale"]["type"], "number");
    assert_eq!(schema["properties"]["label"]["description"], "Label");
    assert_eq!(schema["required"], json!(["a"]));
    assert_eq!(schema["additionalProperties"], json!(false));
}

#[test]
fn empty_parameters() {
    let params = AgentToolParameters::empty();
    assert_eq!(params.schema["type"], "object");
    assert_eq!(params.schema["required"], json!([]));
}

#[test]
fn arithmetic_tools_describe_themselves() {
    let add = add_tool();
    let multiply = multiply_tool();
    let divide = divide_tool();

    assert_eq!(add.name(), "add");
    assert_eq!(add.description(), "Adds `a` and `b`.");
    assert_eq!(multiply.description(), "Multiply `a` and `b`.");
    assert_eq!(divide.description(), "Divide `a` and `b`.");
    assert_eq!(add.parameters(), divide.parameters());
}

#[tokio::test]
async fn custom_tools_join_the_arithmetic_registry() {
    let mut registry = arithmetic_registry().unwrap();
    registry
        .register_fn(
            "square",
            "Square `x`.",
            AgentToolParameters::object().integer("x", "Value", true).build(),
            |args| async move {
                let x = args.get_i64("x")?;
                Ok(json!(x * x))
            },
        )
        .unwrap();

    assert_eq!(registry.len(), 4);
    assert_eq!(registry.invoke("square", json!({"x": 9})).await.unwrap(), json!(81));
}

#[test]
fn registering_an_arithmetic_name_twice_fails() {
    let mut registry = arithmetic_registry().unwrap();

    let err = registry.register(Arc::new(add_tool())).unwrap_err();

    assert!(matches!(err, AgentError::Configuration(_)));
    assert_eq!(registry.names(), vec!["add", "multiply", "divide"]);
}

#[tokio::test]
async fn string_encoded_arguments_are_accepted() {
    let registry = arithmetic_registry().unwrap();

    let out = registry.invoke("multiply", json!("{\"a\": 6, \"b\": 7}")).await.unwrap();

    assert_eq!(out, json!(42));
}

#[tokio::test]
async fn wrong_argument_count_is_invalid_arguments() {
    let registry = arithmetic_registry().unwrap();

    let cases = [
        ("add", json!({"a": 1}), "missing required field 'b'"),
        ("add", json!({"a": 3, "b": 4, "c": 100}), "unexpected field 'c'"),
        ("divide", json!({}), "missing required field 'a'"),
        ("multiply", json!({"a": 2, "b": 3, "scale": 1}), "unexpected field 'scale'"),
    ];

    for (name, args, expected) in cases {
        match registry.invoke(name, args).await.unwrap_err() {
            AgentError::InvalidArguments { tool, message } => {
                assert_eq!(tool, name);
                assert_eq!(message, expected);
            }
            other => panic!("expected InvalidArguments, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn integral_float_operands_are_decoded_as_integers() {
    let registry = arithmetic_registry().unwrap();

    let out = registry.invoke("multiply", json!({"a": 5.0, "b": 6.0})).await.unwrap();

    assert_eq!(out, json!(30));
    assert!(out.is_i64());
}

#[tokio::test]
async fn arithmetic_results_over_a_grid() {
    let registry = arithmetic_registry().unwrap();

    for a in [-7i64, 0, 3, 1_000_000] {
        for b in [-2i64, 1, 4] {
            let sum = registry.invoke("add", json!({"a": a, "b": b})).await.unwrap();
            let product = registry.invoke("multiply", json!({"a": a, "b": b})).await.unwrap();
            let quotient = registry.invoke("divide", json!({"a": a, "b": b})).await.unwrap();

            assert_eq!(sum, json!(a + b));
            assert_eq!(product, json!(a * b));
            assert_eq!(quotient, json!(a as f64 / b as f64));
        }
    }
}
