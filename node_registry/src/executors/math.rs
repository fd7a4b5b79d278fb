// Copyright 2026 the Execution Graph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use execution_graph::{GraphError, NodeExecutor, NodeEvalError, Scope};
use graph_model::{MathOp, Node, NodeKind};
use graph_value::{Value, Widened};
use std::fmt;
use std::sync::Arc;

/// An arithmetic failure: division by zero, or an operation not defined for the widened class.
#[derive(Debug)]
struct MathError(String);

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for MathError {}

fn apply(op: MathOp, widened: Widened) -> Result<Value, MathError> {
    macro_rules! checked_div {
        ($a:expr, $b:expr, $zero:expr) => {
            if $b == $zero {
                return Err(MathError("division by zero".into()));
            } else {
                $a / $b
            }
        };
    }

    Ok(match (op, widened) {
        (MathOp::Add, Widened::Byte(a, b)) => Value::Byte(a.wrapping_add(b)),
        (MathOp::Add, Widened::Short(a, b)) => Value::Short(a.wrapping_add(b)),
        (MathOp::Add, Widened::Int(a, b)) => Value::Int(a.wrapping_add(b)),
        (MathOp::Add, Widened::Long(a, b)) => Value::Long(a.wrapping_add(b)),
        (MathOp::Add, Widened::Float(a, b)) => Value::Float(a + b),
        (MathOp::Add, Widened::Double(a, b)) => Value::Double(a + b),

        (MathOp::Sub, Widened::Byte(a, b)) => Value::Byte(a.wrapping_sub(b)),
        (MathOp::Sub, Widened::Short(a, b)) => Value::Short(a.wrapping_sub(b)),
        (MathOp::Sub, Widened::Int(a, b)) => Value::Int(a.wrapping_sub(b)),
        (MathOp::Sub, Widened::Long(a, b)) => Value::Long(a.wrapping_sub(b)),
        (MathOp::Sub, Widened::Float(a, b)) => Value::Float(a - b),
        (MathOp::Sub, Widened::Double(a, b)) => Value::Double(a - b),

        (MathOp::Mul, Widened::Byte(a, b)) => Value::Byte(a.wrapping_mul(b)),
        (MathOp::Mul, Widened::Short(a, b)) => Value::Short(a.wrapping_mul(b)),
        (MathOp::Mul, Widened::Int(a, b)) => Value::Int(a.wrapping_mul(b)),
        (MathOp::Mul, Widened::Long(a, b)) => Value::Long(a.wrapping_mul(b)),
        (MathOp::Mul, Widened::Float(a, b)) => Value::Float(a * b),
        (MathOp::Mul, Widened::Double(a, b)) => Value::Double(a * b),

        (MathOp::Div, Widened::Byte(a, b)) => Value::Byte(checked_div!(a, b, 0)),
        (MathOp::Div, Widened::Short(a, b)) => Value::Short(checked_div!(a, b, 0)),
        (MathOp::Div, Widened::Int(a, b)) => Value::Int(checked_div!(a, b, 0)),
        (MathOp::Div, Widened::Long(a, b)) => Value::Long(checked_div!(a, b, 0)),
        (MathOp::Div, Widened::Float(a, b)) => Value::Float(a / b),
        (MathOp::Div, Widened::Double(a, b)) => Value::Double(a / b),
    })
}

/// Binds `Math` nodes (`Add`/`Sub`/`Mul`/`Div`): installs a producer on `out` that pulls both
/// operands, widens them to a common numeric class per the ladder `Byte < Short < Int < Long <
/// Float < Double`, and applies the operator at that width.
#[derive(Debug, Default)]
pub struct MathExecutor;

impl NodeExecutor for MathExecutor {
    fn bind(&self, scope: &Arc<Scope>, node: &Node) -> Result<bool, GraphError> {
        let NodeKind::Math { op, in_a, in_b, out } = node.kind() else {
            return Ok(false);
        };

        let op = *op;
        let in_a = scope.data_path(*in_a);
        let in_b = scope.data_path(*in_b);
        let out = scope.data_path(*out);

        out.bind(Arc::new(move || {
            let a = in_a.get().map_err(|e| e.into_node_eval_error("Math"))?;
            let b = in_b.get().map_err(|e| e.into_node_eval_error("Math"))?;

            let widened = a.widen_with(&b).map_err(|not_numeric| {
                GraphError::TypeMismatchError {
                    expected: "a numeric value",
                    got: not_numeric.0.kind_name(),
                }
                .into_node_eval_error("Math")
            })?;

            apply(op, widened).map_err(|e| NodeEvalError::new("Math", e))
        }))?;

        Ok(true)
    }
}
