/*
 * ==========================================================================
 * PAWSCAL - Pascal with Paws!
 * ==========================================================================
 *
 * Recursive-Descent Parser
 *
 * One token of lookahead, one method per grammar rule, the whole stream
 * consumed or a syntax error raised.
 * - `parser.rs`      → Parser struct and `parse()` driver
 * - `statements.rs`  → Program structure and statement grammar
 * - `expressions.rs` → Expression grammar and precedence
 * - `helpers.rs`     → Token checking/consumption utilities
 *
 * --------------------------------------------------------------------------
 * Author:   Sam Wilcox
 * Email:    sam@pawscal-lang.com
 * Website:  https://www.pawscal-lang.com
 * Github:   https://github.com/samwilcox/pawscal
 *
 * License:
 * This file is part of the PAWSCAL programming language project.
 *
 * PAWSCAL is dual-licensed under the terms of:
 *   - The MIT license
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

pub mod expressions;
pub mod helpers;
pub mod parser;
pub mod statements;

pub use parser::{parse, Parser};

#[cfg(test)]
mod tests {
    use crate::ast::{BinOp, Expr, NumberKind, Stmt};
    use crate::parser::parse;
    use crate::Dialect;

    fn parse_script(source: &str) -> Vec<Stmt> {
        parse(source, Dialect::Untyped)
            .expect("parse failure")
            .block
            .body
    }

    #[test]
    fn precedence_multiplication_binds_tighter() {
        // 2 + 3 * 4 must parse as 2 + (3 * 4)
        let stmts = parse_script("x := 2 + 3 * 4");
        let Stmt::Assign { value, .. } = &stmts[0] else {
            panic!("expected assignment");
        };
        let Expr::Binary { op, right, .. } = value else {
            panic!("expected binary expression");
        };
        assert_eq!(*op, BinOp::Add);
        assert!(matches!(
            **right,
            Expr::Binary {
                op: BinOp::Mul,
                ..
            }
        ));
    }

    #[test]
    fn parentheses_reset_precedence() {
        // (2 + 3) * 4 must parse as (2 + 3) * 4
        let stmts = parse_script("x := (2 + 3) * 4");
        let Stmt::Assign { value, .. } = &stmts[0] else {
            panic!("expected assignment");
        };
        let Expr::Binary { op, left, .. } = value else {
            panic!("expected binary expression");
        };
        assert_eq!(*op, BinOp::Mul);
        assert!(matches!(
            **left,
            Expr::Binary {
                op: BinOp::Add,
                ..
            }
        ));
    }

    #[test]
    fn chained_unary_is_right_recursive() {
        let stmts = parse_script("x := --5");
        let Stmt::Assign { value, .. } = &stmts[0] else {
            panic!("expected assignment");
        };
        let Expr::Unary { operand, .. } = value else {
            panic!("expected unary expression");
        };
        assert!(matches!(**operand, Expr::Unary { .. }));
    }

    #[test]
    fn number_literal_keeps_source_text() {
        let stmts = parse_script("x := 007");
        let Stmt::Assign { value, .. } = &stmts[0] else {
            panic!("expected assignment");
        };
        assert_eq!(
            *value,
            Expr::Number {
                literal: "007".to_string(),
                kind: NumberKind::Integer,
                span: crate::span::Span::new(1, 5),
            }
        );
    }

    #[test]
    fn typed_program_shape() {
        let program = parse(
            "PROGRAM demo; VAR a, b : INTEGER; r : REAL; BEGIN a := 1 END.",
            Dialect::Typed,
        )
        .expect("parse failure");

        assert_eq!(program.name.as_deref(), Some("demo"));
        assert_eq!(program.block.declarations.len(), 3);
        assert_eq!(program.block.declarations[0].name, "a");
        assert_eq!(program.block.declarations[0].type_name, "INTEGER");
        assert_eq!(program.block.declarations[2].type_name, "REAL");
        assert_eq!(program.block.body.len(), 1);
    }

    #[test]
    fn both_loop_forms_stay_distinct() {
        let stmts = parse_script("n := 3; LOOP n DO x := 1 END; FOR i := 1 TO 5 DO BEGIN y := 2 END");
        assert!(matches!(stmts[1], Stmt::RepeatCount { .. }));
        assert!(matches!(
            stmts[2],
            Stmt::ForRange { start: 1, end: 5, .. }
        ));
    }

    #[test]
    fn empty_statement_is_allowed() {
        let program = parse("PROGRAM p; BEGIN END.", Dialect::Typed).expect("parse failure");
        assert_eq!(program.block.body, vec![Stmt::Empty]);
    }

    #[test]
    fn missing_semicolon_between_statements() {
        let err = parse("x := 1 y := 2", Dialect::Untyped).unwrap_err();
        assert_eq!(err.code, "E_SYNTAX");
    }

    #[test]
    fn trailing_input_after_program() {
        let err = parse("PROGRAM p; BEGIN x := 1 END. leftover", Dialect::Typed).unwrap_err();
        assert_eq!(err.code, "E_SYNTAX");
    }

    #[test]
    fn eat_mismatch_reports_expectation() {
        let err = parse("PROGRAM p BEGIN END.", Dialect::Typed).unwrap_err();
        assert_eq!(err.code, "E_SYNTAX");
        assert!(err.message.contains("';'"));
    }
}
