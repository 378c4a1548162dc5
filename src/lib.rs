/*
 * ==========================================================================
 * PAWSCAL - Pascal with Paws!
 * ==========================================================================
 *
 * Pipeline Orchestration
 *
 * Source text flows through four stages, each running to completion
 * before the next begins:
 *
 *   Source → Lexer → Parser → AST → Resolver → Interpreter → Bindings
 *
 * The whole pipeline is single-threaded and synchronous; every stage's
 * state is exclusively owned. The only shared, read-only data is the
 * reserved-keyword table.
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

pub mod ast;
pub mod diagnostics;
pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod resolver;
pub mod span;
pub mod value;

pub use error::PawscalError;
pub use interpreter::Environment;
pub use value::Value;

/// Which of the two PAWSCAL language dialects to parse and resolve.
///
/// The dialects share the lexer, the grammar machinery, and the
/// interpreter; they differ in program structure and in how names come
/// into existence. They are two clearly named pipelines, selected once
/// per compilation unit and never mixed within one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// `PROGRAM name; VAR ... BEGIN ... END.`: variables must be declared
    /// with a type before use.
    Typed,

    /// A bare statement list; a variable comes into existence at its
    /// first assignment.
    Untyped,
}

/// Runs the full pipeline over `source` and returns the final variable
/// bindings.
///
/// Lex, parse, resolve, interpret: any stage's error aborts the run and
/// is returned as-is; a completed run yields the fully bound environment.
/// The resolver's table is validated and discarded here; callers that want
/// to report it drive the stages individually.
///
/// # Examples
/// ```
/// use pawscal::{execute, Dialect, Value};
///
/// let env = execute("x := 2 + 3 * 4", Dialect::Untyped).unwrap();
/// assert_eq!(env.get("x"), Some(Value::Integer(14)));
///
/// // 'y' is never bound, so the run fails and yields nothing.
/// assert!(execute("x := y", Dialect::Untyped).is_err());
/// ```
pub fn execute(source: &str, dialect: Dialect) -> Result<Environment, PawscalError> {
    let program = parser::parse(source, dialect)?;
    resolver::resolve(&program, dialect)?;
    interpreter::run(&program)
}
