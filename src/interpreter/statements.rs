/*
 * ==========================================================================
 * PAWSCAL - Pascal with Paws!
 * ==========================================================================
 *
 * Statement Executor
 * ------------------
 * Executes all PAWSCAL statements against the runtime environment:
 *
 *  • Compound blocks, in source order
 *  • Assignments (evaluate first, bind second)
 *  • Bounded-range loops (`FOR ... TO ... DO`)
 *  • Count loops (`LOOP ... DO ... END`)
 *  • The empty statement
 *
 * Expression evaluation is handled by `expressions.rs`; this file never
 * computes values itself.
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

use crate::ast::Stmt;
use crate::error::PawscalError;
use crate::interpreter::environment::Environment;
use crate::interpreter::expressions::eval_expr;
use crate::value::Value;

/// Executes a single PAWSCAL statement inside the given environment.
///
/// This is the core dispatch function for all statement execution. Any
/// error aborts the run at the statement it occurred in; there is no
/// recovery and no partial-result mode.
pub fn exec_stmt(stmt: &Stmt, env: &mut Environment) -> Result<(), PawscalError> {
    match stmt {
        /* ------------------------------------------------------------------
         * Compound Block
         * ---------------------------------------------------------------- */
        Stmt::Compound(stmts) => {
            for s in stmts {
                exec_stmt(s, env)?;
            }
            Ok(())
        }

        /* ------------------------------------------------------------------
         * Assignment
         * ---------------------------------------------------------------- */
        Stmt::Assign { name, value, .. } => {
            // Evaluate fully before touching the binding: a failed
            // right-hand side must leave the target unbound.
            let result = eval_expr(value, env)?;
            env.set(name, result);
            Ok(())
        }

        /* ------------------------------------------------------------------
         * Bounded-Range Loop
         * ---------------------------------------------------------------- */
        Stmt::ForRange {
            var,
            start,
            end,
            body,
            ..
        } => {
            // Inclusive ascending range; start > end runs zero times and
            // leaves the loop variable untouched. After a non-empty range
            // the variable stays bound to the final value.
            for i in *start..=*end {
                env.set(var, Value::Integer(i));
                for s in body {
                    exec_stmt(s, env)?;
                }
            }
            Ok(())
        }

        /* ------------------------------------------------------------------
         * Count Loop
         * ---------------------------------------------------------------- */
        Stmt::RepeatCount {
            count_var,
            body,
            span,
        } => {
            // The named variable is a pure trip count: read once at loop
            // entry, never rebound by the loop.
            let count = env.get(count_var).ok_or_else(|| {
                PawscalError::name_error(
                    format!("loop count variable '{}' has no value", count_var),
                    *span,
                )
            })?;

            let trips = count.as_integer().ok_or_else(|| {
                PawscalError::type_error(
                    format!(
                        "loop count variable '{}' must be an INTEGER, got {}",
                        count_var,
                        count.type_name()
                    ),
                    *span,
                )
            })?;

            for _ in 0..trips.max(0) {
                for s in body {
                    exec_stmt(s, env)?;
                }
            }
            Ok(())
        }

        /* ------------------------------------------------------------------
         * Empty Statement
         * ---------------------------------------------------------------- */
        Stmt::Empty => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Expr, NumberKind};
    use crate::span::Span;

    fn assign(name: &str, value: Expr) -> Stmt {
        Stmt::Assign {
            name: name.to_string(),
            value,
            span: Span::default(),
        }
    }

    fn var(name: &str) -> Expr {
        Expr::Var {
            name: name.to_string(),
            span: Span::default(),
        }
    }

    #[test]
    fn failed_assignment_leaves_no_partial_binding() {
        let mut env = Environment::new();
        let stmt = assign("x", var("y"));

        let err = exec_stmt(&stmt, &mut env).unwrap_err();
        assert_eq!(err.code, "E_NAME");
        assert!(!env.contains("x"));
    }

    #[test]
    fn empty_range_leaves_loop_variable_untouched() {
        let mut env = Environment::new();
        let stmt = Stmt::ForRange {
            var: "i".to_string(),
            start: 5,
            end: 1,
            body: vec![assign(
                "x",
                Expr::Number {
                    literal: "1".to_string(),
                    kind: NumberKind::Integer,
                    span: Span::default(),
                },
            )],
            span: Span::default(),
        };

        exec_stmt(&stmt, &mut env).unwrap();
        assert!(!env.contains("i"));
        assert!(!env.contains("x"));
    }

    #[test]
    fn range_loop_leaves_variable_at_final_value() {
        let mut env = Environment::new();
        let stmt = Stmt::ForRange {
            var: "i".to_string(),
            start: 1,
            end: 4,
            body: vec![Stmt::Empty],
            span: Span::default(),
        };

        exec_stmt(&stmt, &mut env).unwrap();
        assert_eq!(env.get("i"), Some(Value::Integer(4)));
    }

    #[test]
    fn count_loop_never_rebinds_its_variable() {
        let mut env = Environment::new();
        env.set("n", Value::Integer(3));

        let stmt = Stmt::RepeatCount {
            count_var: "n".to_string(),
            body: vec![assign(
                "total",
                Expr::Binary {
                    left: Box::new(var("total")),
                    op: crate::ast::BinOp::Add,
                    right: Box::new(Expr::Number {
                        literal: "1".to_string(),
                        kind: NumberKind::Integer,
                        span: Span::default(),
                    }),
                    span: Span::default(),
                },
            )],
            span: Span::default(),
        };

        env.set("total", Value::Integer(0));
        exec_stmt(&stmt, &mut env).unwrap();
        assert_eq!(env.get("total"), Some(Value::Integer(3)));
        assert_eq!(env.get("n"), Some(Value::Integer(3)));
    }

    #[test]
    fn count_loop_requires_a_bound_integer() {
        let mut env = Environment::new();
        let stmt = Stmt::RepeatCount {
            count_var: "n".to_string(),
            body: vec![],
            span: Span::default(),
        };
        assert_eq!(exec_stmt(&stmt, &mut env).unwrap_err().code, "E_NAME");

        env.set("n", Value::Real(2.5));
        assert_eq!(exec_stmt(&stmt, &mut env).unwrap_err().code, "E_TYPE");
    }

    #[test]
    fn negative_count_runs_zero_times() {
        let mut env = Environment::new();
        env.set("n", Value::Integer(-2));
        env.set("hits", Value::Integer(0));

        let stmt = Stmt::RepeatCount {
            count_var: "n".to_string(),
            body: vec![assign(
                "hits",
                Expr::Number {
                    literal: "1".to_string(),
                    kind: NumberKind::Integer,
                    span: Span::default(),
                },
            )],
            span: Span::default(),
        };

        exec_stmt(&stmt, &mut env).unwrap();
        assert_eq!(env.get("hits"), Some(Value::Integer(0)));
    }
}
