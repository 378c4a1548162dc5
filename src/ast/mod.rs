/*
 * ==========================================================================
 * PAWSCAL - Pascal with Paws!
 * ==========================================================================
 *
 * Abstract Syntax Tree
 *
 * Pure data produced by the parser and consumed by the resolver and the
 * interpreter. No behavior lives here beyond trivial accessors.
 * - `expr.rs` → expressions and operators
 * - `stmt.rs` → statements, declarations, and the program root
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

pub mod expr;
pub mod stmt;

pub use expr::{BinOp, Expr, NumberKind, UnaryOp};
pub use stmt::{Block, Program, Stmt, VarDecl};
