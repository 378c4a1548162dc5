/*
 * ==========================================================================
 * PAWSCAL - Pascal with Paws!
 * ==========================================================================
 *
 * Expression Evaluation Engine
 * -----------------------------
 * Converts AST `Expr` nodes into concrete runtime `Value`s:
 *   - Numeric literals, typed per their lexical form
 *   - Variable lookups against the runtime environment
 *   - Binary arithmetic with integer/real promotion
 *   - Unary plus and minus
 *
 * This module is pure evaluation and never executes statements; all
 * statement control flow is handled by `statements.rs`.
 *
 * ---------------------------------------------------------------------------
 * Author:   Sam Wilcox
 * Email:    sam@pawscal-lang.com
 * Website:  https://www.pawscal-lang.com
 * Github:   https://github.com/samwilcox/pawscal
 *
 * License:
 * This file is part of the PAWSCAL programming language project.
 *
 * PAWSCAL is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 * Full license text available at:
 *    https://license.pawscal-lang.com
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use crate::ast::{BinOp, Expr, NumberKind, UnaryOp};
use crate::error::PawscalError;
use crate::interpreter::environment::Environment;
use crate::span::Span;
use crate::value::Value;

/// Evaluates a single PAWSCAL expression and returns its runtime value.
///
/// This is the core expression dispatcher: every expression in the
/// language eventually passes through here. Name lookups are checked
/// against the environment at this point regardless of what the resolver
/// concluded earlier; the runtime does not trust the static pass.
pub fn eval_expr(expr: &Expr, env: &Environment) -> Result<Value, PawscalError> {
    match expr {
        // ---------------------------------------------------------------------
        // Numeric Literals
        // ---------------------------------------------------------------------
        Expr::Number {
            literal,
            kind,
            span,
        } => match kind {
            NumberKind::Integer => {
                let n = literal.parse::<i64>().map_err(|_| {
                    PawscalError::arithmetic_error(
                        format!("integer literal '{}' out of range", literal),
                        *span,
                    )
                })?;
                Ok(Value::Integer(n))
            }
            NumberKind::Real => {
                // The lexer guarantees digits '.' digits, which always
                // parses as an f64.
                let x = literal.parse::<f64>().map_err(|_| {
                    PawscalError::arithmetic_error(
                        format!("malformed real literal '{}'", literal),
                        *span,
                    )
                })?;
                Ok(Value::Real(x))
            }
        },

        // ---------------------------------------------------------------------
        // Variable Lookup
        // ---------------------------------------------------------------------
        Expr::Var { name, span } => env.get(name).ok_or_else(|| {
            PawscalError::name_error(format!("variable '{}' has no value", name), *span)
        }),

        // ---------------------------------------------------------------------
        // Unary Operators
        // ---------------------------------------------------------------------
        Expr::Unary { op, operand, .. } => {
            let value = eval_expr(operand, env)?;
            match op {
                UnaryOp::Plus => Ok(value),
                UnaryOp::Minus => match value {
                    Value::Integer(n) => Ok(Value::Integer(-n)),
                    Value::Real(x) => Ok(Value::Real(-x)),
                },
            }
        }

        // ---------------------------------------------------------------------
        // Binary Operators
        // ---------------------------------------------------------------------
        Expr::Binary {
            left,
            op,
            right,
            span,
        } => {
            let lhs = eval_expr(left, env)?;
            let rhs = eval_expr(right, env)?;
            apply_binary(*op, lhs, rhs, *span)
        }
    }
}

/// Applies a binary operator to two evaluated operands.
///
/// `+ - *` preserve the integer kind when both operands are integers and
/// otherwise promote to real. `/` always yields a real and follows IEEE
/// semantics for a zero divisor. `DIV` is integer-only truncating
/// division; a zero divisor is an arithmetic error.
fn apply_binary(op: BinOp, lhs: Value, rhs: Value, span: Span) -> Result<Value, PawscalError> {
    match op {
        BinOp::Add => numeric(lhs, rhs, span, i64::checked_add, |a, b| a + b),
        BinOp::Sub => numeric(lhs, rhs, span, i64::checked_sub, |a, b| a - b),
        BinOp::Mul => numeric(lhs, rhs, span, i64::checked_mul, |a, b| a * b),

        // Float division always produces a real; x / 0 yields inf or NaN.
        BinOp::FloatDiv => Ok(Value::Real(lhs.as_real() / rhs.as_real())),

        BinOp::IntDiv => {
            let (Some(a), Some(b)) = (lhs.as_integer(), rhs.as_integer()) else {
                return Err(PawscalError::type_error(
                    format!(
                        "'DIV' expects integer operands, got {} and {}",
                        lhs.type_name(),
                        rhs.type_name()
                    ),
                    span,
                )
                .with_help("use '/' for real division"));
            };

            if b == 0 {
                return Err(PawscalError::arithmetic_error("division by zero", span));
            }

            // Rust's i64 division truncates toward zero, which is exactly
            // the required DIV semantics.
            a.checked_div(b).map(Value::Integer).ok_or_else(|| {
                PawscalError::arithmetic_error("integer overflow in 'DIV'", span)
            })
        }
    }
}

/// Shared arithmetic for the type-preserving operators.
fn numeric(
    lhs: Value,
    rhs: Value,
    span: Span,
    int_op: fn(i64, i64) -> Option<i64>,
    real_op: fn(f64, f64) -> f64,
) -> Result<Value, PawscalError> {
    match (lhs, rhs) {
        (Value::Integer(a), Value::Integer(b)) => int_op(a, b).map(Value::Integer).ok_or_else(|| {
            PawscalError::arithmetic_error("integer overflow", span)
        }),
        _ => Ok(Value::Real(real_op(lhs.as_real(), rhs.as_real()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Expr;

    fn num(literal: &str, kind: NumberKind) -> Expr {
        Expr::Number {
            literal: literal.to_string(),
            kind,
            span: Span::default(),
        }
    }

    fn binary(left: Expr, op: BinOp, right: Expr) -> Expr {
        Expr::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
            span: Span::default(),
        }
    }

    #[test]
    fn same_kind_arithmetic_preserves_integers() {
        let env = Environment::new();
        let expr = binary(
            num("2", NumberKind::Integer),
            BinOp::Add,
            num("3", NumberKind::Integer),
        );
        assert_eq!(eval_expr(&expr, &env).unwrap(), Value::Integer(5));
    }

    #[test]
    fn mixed_operands_promote_to_real() {
        let env = Environment::new();
        let expr = binary(
            num("1", NumberKind::Integer),
            BinOp::Add,
            num("2.5", NumberKind::Real),
        );
        assert_eq!(eval_expr(&expr, &env).unwrap(), Value::Real(3.5));
    }

    #[test]
    fn float_division_is_always_real() {
        let env = Environment::new();
        let expr = binary(
            num("7", NumberKind::Integer),
            BinOp::FloatDiv,
            num("2", NumberKind::Integer),
        );
        assert_eq!(eval_expr(&expr, &env).unwrap(), Value::Real(3.5));
    }

    #[test]
    fn float_division_by_zero_follows_ieee() {
        let env = Environment::new();
        let expr = binary(
            num("1", NumberKind::Integer),
            BinOp::FloatDiv,
            num("0", NumberKind::Integer),
        );
        let Value::Real(x) = eval_expr(&expr, &env).unwrap() else {
            panic!("expected a real");
        };
        assert!(x.is_infinite());
    }

    #[test]
    fn integer_division_truncates_toward_zero() {
        let env = Environment::new();
        let expr = binary(
            num("7", NumberKind::Integer),
            BinOp::IntDiv,
            num("2", NumberKind::Integer),
        );
        assert_eq!(eval_expr(&expr, &env).unwrap(), Value::Integer(3));

        let negative = Expr::Binary {
            left: Box::new(Expr::Unary {
                op: UnaryOp::Minus,
                operand: Box::new(num("7", NumberKind::Integer)),
                span: Span::default(),
            }),
            op: BinOp::IntDiv,
            right: Box::new(num("2", NumberKind::Integer)),
            span: Span::default(),
        };
        assert_eq!(eval_expr(&negative, &env).unwrap(), Value::Integer(-3));
    }

    #[test]
    fn integer_division_by_zero_is_an_arithmetic_error() {
        let env = Environment::new();
        let expr = binary(
            num("7", NumberKind::Integer),
            BinOp::IntDiv,
            num("0", NumberKind::Integer),
        );
        let err = eval_expr(&expr, &env).unwrap_err();
        assert_eq!(err.code, "E_ARITH");
    }

    #[test]
    fn integer_division_rejects_real_operands() {
        let env = Environment::new();
        let expr = binary(
            num("7.5", NumberKind::Real),
            BinOp::IntDiv,
            num("2", NumberKind::Integer),
        );
        let err = eval_expr(&expr, &env).unwrap_err();
        assert_eq!(err.code, "E_TYPE");
    }

    #[test]
    fn unbound_variable_is_a_runtime_name_error() {
        let env = Environment::new();
        let expr = Expr::Var {
            name: "ghost".to_string(),
            span: Span::default(),
        };
        let err = eval_expr(&expr, &env).unwrap_err();
        assert_eq!(err.code, "E_NAME");
    }

    #[test]
    fn oversized_integer_literal_is_reported() {
        let env = Environment::new();
        let expr = num("99999999999999999999", NumberKind::Integer);
        let err = eval_expr(&expr, &env).unwrap_err();
        assert_eq!(err.code, "E_ARITH");
    }
}
