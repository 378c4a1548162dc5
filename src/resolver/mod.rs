/*
 * ==========================================================================
 * PAWSCAL - Pascal with Paws!
 * ==========================================================================
 *
 * Static Name & Type Resolution
 *
 * The first of the two tree walks. Declarations are registered in a fresh
 * symbol table, then the executable body is checked: every assignment
 * target, variable reference, and loop variable must resolve, and every
 * declared type must name a known built-in. The walk computes no values;
 * it is pure validation, and the interpreter deliberately does not trust
 * it (unbound names are re-checked at runtime).
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

pub mod symbols;

pub use symbols::{Symbol, SymbolTable};

use crate::ast::{Expr, Program, Stmt, VarDecl};
use crate::error::PawscalError;
use crate::span::Span;
use crate::Dialect;

/// Resolves a parsed program, returning the populated symbol table.
///
/// The table is handed back so the caller can report it; nothing else in
/// the pipeline reads it.
pub fn resolve(program: &Program, dialect: Dialect) -> Result<SymbolTable, PawscalError> {
    let mut resolver = Resolver::new(dialect);
    resolver.resolve(program)?;
    Ok(resolver.table)
}

/// Walks the AST once before execution, registering declared variables and
/// rejecting references to unknown names.
pub struct Resolver {
    table: SymbolTable,
    dialect: Dialect,
}

impl Resolver {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            table: SymbolTable::new(),
            dialect,
        }
    }

    /// Declarations first, then the executable body.
    pub fn resolve(&mut self, program: &Program) -> Result<(), PawscalError> {
        for decl in &program.block.declarations {
            self.declare(decl)?;
        }
        for stmt in &program.block.body {
            self.check_stmt(stmt)?;
        }
        Ok(())
    }

    /// Registers one declaration after validating its type name against
    /// the built-in type symbols.
    fn declare(&mut self, decl: &VarDecl) -> Result<(), PawscalError> {
        match self.table.lookup(&decl.type_name) {
            Some(Symbol::BuiltInType { .. }) => {}
            _ => {
                return Err(PawscalError::type_error(
                    format!("unknown type '{}'", decl.type_name),
                    decl.span,
                ));
            }
        }

        self.table.define(
            &decl.name,
            Symbol::Variable {
                name: decl.name.clone(),
                ty: Some(decl.type_name.clone()),
            },
        );
        Ok(())
    }

    fn check_stmt(&mut self, stmt: &Stmt) -> Result<(), PawscalError> {
        match stmt {
            Stmt::Compound(stmts) => {
                for s in stmts {
                    self.check_stmt(s)?;
                }
                Ok(())
            }

            Stmt::Assign { name, value, span } => {
                // The right-hand side resolves against the names known so
                // far, so `x := x` on an unbound `x` fails even in the
                // implicit-declaration dialect.
                self.check_expr(value)?;
                match self.dialect {
                    Dialect::Typed => self.require_known(name, *span),
                    Dialect::Untyped => {
                        self.implicitly_declare(name);
                        Ok(())
                    }
                }
            }

            Stmt::ForRange { var, body, span, .. } => {
                match self.dialect {
                    Dialect::Typed => self.require_known(var, *span)?,
                    Dialect::Untyped => self.implicitly_declare(var),
                }
                for s in body {
                    self.check_stmt(s)?;
                }
                Ok(())
            }

            Stmt::RepeatCount {
                count_var,
                body,
                span,
            } => {
                // The trip count must already be bound in both dialects.
                self.require_known(count_var, *span)?;
                for s in body {
                    self.check_stmt(s)?;
                }
                Ok(())
            }

            Stmt::Empty => Ok(()),
        }
    }

    fn check_expr(&self, expr: &Expr) -> Result<(), PawscalError> {
        match expr {
            Expr::Number { .. } => Ok(()),

            Expr::Var { name, span } => self.require_known(name, *span),

            Expr::Binary { left, right, .. } => {
                self.check_expr(left)?;
                self.check_expr(right)
            }

            Expr::Unary { operand, .. } => self.check_expr(operand),
        }
    }

    fn require_known(&self, name: &str, span: Span) -> Result<(), PawscalError> {
        match self.table.lookup(name) {
            Some(Symbol::Variable { .. }) => Ok(()),
            _ => Err(PawscalError::name_error(
                format!("undeclared variable '{}'", name),
                span,
            )),
        }
    }

    fn implicitly_declare(&mut self, name: &str) {
        self.table.define(
            name,
            Symbol::Variable {
                name: name.to_string(),
                ty: None,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::span::Span;

    #[test]
    fn declared_names_resolve() {
        let program = parse(
            "PROGRAM p; VAR x : INTEGER; BEGIN x := 1 END.",
            Dialect::Typed,
        )
        .unwrap();
        assert!(resolve(&program, Dialect::Typed).is_ok());
    }

    #[test]
    fn undeclared_assignment_target_is_rejected() {
        let program = parse("PROGRAM p; BEGIN x := 1 END.", Dialect::Typed).unwrap();
        let err = resolve(&program, Dialect::Typed).unwrap_err();
        assert_eq!(err.code, "E_NAME");
    }

    #[test]
    fn removing_a_needed_declaration_turns_acceptance_into_name_error() {
        // Resolution success is monotonic in declaration order.
        let with_decl = parse(
            "PROGRAM p; VAR x, y : INTEGER; BEGIN x := 1; y := x END.",
            Dialect::Typed,
        )
        .unwrap();
        assert!(resolve(&with_decl, Dialect::Typed).is_ok());

        let without_decl = parse(
            "PROGRAM p; VAR y : INTEGER; BEGIN x := 1; y := x END.",
            Dialect::Typed,
        )
        .unwrap();
        let err = resolve(&without_decl, Dialect::Typed).unwrap_err();
        assert_eq!(err.code, "E_NAME");
    }

    #[test]
    fn unknown_type_name_is_a_type_error() {
        // The parser only ever emits INTEGER/REAL, so exercise the check
        // straight through the resolver with a hand-built declaration.
        let mut resolver = Resolver::new(Dialect::Typed);
        let err = resolver
            .declare(&VarDecl {
                name: "s".to_string(),
                type_name: "STRING".to_string(),
                span: Span::default(),
            })
            .unwrap_err();
        assert_eq!(err.code, "E_TYPE");
    }

    #[test]
    fn untyped_dialect_declares_on_first_assignment() {
        let program = parse("x := 1; y := x + 2", Dialect::Untyped).unwrap();
        let table = resolve(&program, Dialect::Untyped).unwrap();
        let names: Vec<&str> = table.variables().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["x", "y"]);
    }

    #[test]
    fn untyped_self_reference_before_binding_is_rejected() {
        let program = parse("x := x + 1", Dialect::Untyped).unwrap();
        let err = resolve(&program, Dialect::Untyped).unwrap_err();
        assert_eq!(err.code, "E_NAME");
    }

    #[test]
    fn loop_count_variable_must_already_be_bound() {
        let program = parse("LOOP n DO x := 1 END", Dialect::Untyped).unwrap();
        let err = resolve(&program, Dialect::Untyped).unwrap_err();
        assert_eq!(err.code, "E_NAME");
    }

    #[test]
    fn redeclaration_is_silently_overwritten() {
        let program = parse(
            "PROGRAM p; VAR x : INTEGER; x : REAL; BEGIN x := 1 END.",
            Dialect::Typed,
        )
        .unwrap();
        let table = resolve(&program, Dialect::Typed).unwrap();
        let Some(Symbol::Variable { ty, .. }) = table.lookup("x") else {
            panic!("expected variable symbol");
        };
        assert_eq!(ty.as_deref(), Some("REAL"));
    }
}
