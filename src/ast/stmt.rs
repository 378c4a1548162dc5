/*
 * ==========================================================================
 * PAWSCAL - Pascal with Paws!
 * ==========================================================================
 *
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

use crate::ast::Expr;
use crate::span::Span;

/// Root of a parsed PAWSCAL compilation unit.
///
/// `name` comes from the `PROGRAM name;` header and is `None` in the
/// declaration-free dialect, which has no header.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub name: Option<String>,
    pub block: Block,
}

/// A declaration section followed by the executable compound statement.
///
/// `body` holds the compound statement's children in source order. In the
/// declaration-free dialect `declarations` is always empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub declarations: Vec<VarDecl>,
    pub body: Vec<Stmt>,
}

/// One declared variable.
///
/// `type_name` is the declared type's source lexeme (`INTEGER`, `REAL`).
/// Validating it against the built-in types is the resolver's job, not the
/// parser's; the parser records exactly what was written.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub name: String,
    pub type_name: String,
    pub span: Span,
}

/// All executable PAWSCAL statements.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// A `BEGIN ... END` block; children run in source order.
    Compound(Vec<Stmt>),

    /// `name := expr`. The right-hand side is evaluated before the binding
    /// is touched, so a failed evaluation leaves no partial binding.
    Assign {
        name: String,
        value: Expr,
        span: Span,
    },

    /// `FOR var := start TO end DO <compound>`.
    ///
    /// Bounds are literal integers fixed at parse time; the range is
    /// inclusive and ascending. `var` is an induction variable, rebound on
    /// every iteration.
    ForRange {
        var: String,
        start: i64,
        end: i64,
        body: Vec<Stmt>,
        span: Span,
    },

    /// `LOOP var DO <stmts> END`.
    ///
    /// `var` is a pure trip count read once at loop entry, a materially
    /// different construct from `ForRange`, and kept separate so the two
    /// loop semantics can never be conflated.
    RepeatCount {
        count_var: String,
        body: Vec<Stmt>,
        span: Span,
    },

    /// No-op placeholder for an elided statement.
    Empty,
}
