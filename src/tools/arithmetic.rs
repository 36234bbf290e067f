//! The arithmetic tools bound to the model: `add`, `multiply`, `divide`.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::json;

use super::arguments::ToolArguments;
use super::registry::ToolRegistry;
use super::tool::AgentTool;
use super::types::AgentToolParameters;
use crate::error::Result;

#[derive(Debug, Deserialize)]
struct Operands {
    a: i64,
    b: i64,
}

fn operands_schema() -> AgentToolParameters {
    AgentToolParameters::object()
        .integer("a", "First int", true)
        .integer("b", "Second int", true)
        .build()
}

/// `add(a, b) -> a + b`
pub fn add_tool() -> AgentTool {
    AgentTool::new("add", "Adds `a` and `b`.", operands_schema(), |args| async move {
        let Operands { a, b } = args.deserialize()?;
        let sum = a
            .checked_add(b)
            .ok_or_else(|| overflow(&args, "addition"))?;
        Ok(json!(sum))
    })
}

/// `multiply(a, b) -> a * b`
pub fn multiply_tool() -> AgentTool {
    AgentTool::new("multiply", "Multiply `a` and `b`.", operands_schema(), |args| async move {
        let Operands { a, b } = args.deserialize()?;
        let product = a
            .checked_mul(b)
            .ok_or_else(|| overflow(&args, "multiplication"))?;
        Ok(json!(product))
    })
}

/// `divide(a, b) -> a / b` as a float. Dividing by zero is an argument error.
pub fn divide_tool() -> AgentTool {
    AgentTool::new("divide", "Divide `a` and `b`.", operands_schema(), |args| async move {
        let Operands { a, b } = args.deserialize()?;
        if b == 0 {
            return Err(args.invalid("division by zero: `b` must be non-zero"));
        }
        Ok(json!(a as f64 / b as f64))
    })
}

fn overflow(args: &ToolArguments, op: &str) -> crate::error::AgentError {
    args.invalid(format!("integer overflow in {op}"))
}

/// Registry holding `add`, `multiply` and `divide`, in that order.
pub fn arithmetic_registry() -> Result<ToolRegistry> {
    ToolRegistry::new()
        .with_tool(Arc::new(add_tool()))?
        .with_tool(Arc::new(multiply_tool()))?
        .with_tool(Arc::new(divide_tool()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AgentError;

    async fn call(name: &str, args: serde_json::Value) -> Result<serde_json::Value> {
        arithmetic_registry().unwrap().invoke(name, args).await
    }

    #[tokio::test]
    async fn add_multiply_divide() {
        assert_eq!(call("add", json!({"a": 3, "b": 4})).await.unwrap(), json!(7));
        assert_eq!(call("multiply", json!({"a": 5, "b": 6})).await.unwrap(), json!(30));
        assert_eq!(call("divide", json!({"a": 10, "b": 2})).await.unwrap(), json!(5.0));
        assert_eq!(call("divide", json!({"a": 1, "b": 4})).await.unwrap(), json!(0.25));
        assert_eq!(call("add", json!({"a": -8, "b": 3})).await.unwrap(), json!(-5));
    }

    #[tokio::test]
    async fn divide_by_zero_is_invalid_arguments() {
        let err = call("divide", json!({"a": 10, "b": 0})).await.unwrap_err();

        match err {
            AgentError::InvalidArguments { tool, message } => {
                assert_eq!(tool, "divide");
                assert!(message.contains("division by zero"));
            }
            other => panic!("expected InvalidArguments, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn overflow_is_invalid_arguments() {
        let err = call("multiply", json!({"a": i64::MAX, "b": 2})).await.unwrap_err();
        assert!(matches!(err, AgentError::InvalidArguments { .. }));

        let err = call("add", json!({"a": i64::MAX, "b": 1})).await.unwrap_err();
        assert!(matches!(err, AgentError::InvalidArguments { .. }));
    }

    #[tokio::test]
    async fn integral_floats_are_accepted_as_operands() {
        assert_eq!(call("add", json!({"a": 3.0, "b": 4})).await.unwrap(), json!(7));
        assert_eq!(call("divide", json!({"a": 9, "b": 2.0})).await.unwrap(), json!(4.5));
    }

    #[tokio::test]
    async fn extra_operand_is_invalid_arguments() {
        let err = call("add", json!({"a": 3, "b": 4, "c": 100})).await.unwrap_err();

        assert!(matches!(
            err,
            AgentError::InvalidArguments { ref message, .. } if message == "unexpected field 'c'"
        ));
    }

    #[tokio::test]
    async fn same_call_twice_gives_same_result() {
        let registry = arithmetic_registry().unwrap();

        let first = registry.invoke("divide", json!({"a": 7, "b": 3})).await.unwrap();
        let second = registry.invoke("divide", json!({"a": 7, "b": 3})).await.unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn registry_exposes_three_tools_in_order() {
        let registry = arithmetic_registry().unwrap();

        assert_eq!(registry.names(), vec!["add", "multiply", "divide"]);
        let defs = registry.definitions();
        assert_eq!(defs[0].parameters["required"], json!(["a", "b"]));
        assert_eq!(defs[2].parameters["properties"]["b"]["type"], "integer");
        assert_eq!(defs[1].parameters["additionalProperties"], json!(false));
    }
}
