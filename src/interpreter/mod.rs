/*
 * ==========================================================================
 * PAWSCAL - Pascal with Paws!
 * ==========================================================================
 *
 * Interpreter Entry & Runtime Driver
 * ----------------------------------
 * The second of the two tree walks. Maintains the runtime variable
 * environment, executes the program body, and returns the final bindings
 * as the run's observable result.
 *
 * Evaluation logic is delegated to the submodules:
 *
 *  - environment.rs → The flat runtime variable environment
 *  - statements.rs  → Statement execution (exec_stmt)
 *  - expressions.rs → Expression evaluation (eval_expr)
 *  - display.rs     → Result reporting (text and JSON)
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

pub mod display;
pub mod environment;
pub mod expressions;
pub mod statements;

pub use environment::Environment;
pub use expressions::eval_expr;
pub use statements::exec_stmt;

use crate::ast::Program;
use crate::error::PawscalError;

/// Executes a parsed PAWSCAL program and returns the final environment.
///
/// Declarations have no runtime effect (they were the resolver's input),
/// so execution is simply the program body in source order. The run either
/// completes with a fully bound environment or fails with the error that
/// aborted it; there is no partial result.
pub fn run(program: &Program) -> Result<Environment, PawscalError> {
    let mut env = Environment::new();

    for stmt in &program.block.body {
        exec_stmt(stmt, &mut env)?;
    }

    Ok(env)
}
