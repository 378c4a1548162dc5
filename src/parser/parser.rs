/*
 * ==========================================================================
 * PAWSCAL - Pascal with Paws!
 * ==========================================================================
 *
 * Core Recursive-Descent Parser Entry Point
 *
 * This file defines the primary `Parser` structure and the public `parse()`
 * driver used to transform PAWSCAL source text into an abstract syntax
 * tree. The parsing implementation itself is split across multiple modules:
 * - `statements.rs`   → Program structure and statement-level grammar
 * - `expressions.rs`  → Expression grammar & operator precedence
 * - `helpers.rs`      → Token checking and consumption utilities
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

use crate::ast::Program;
use crate::error::PawscalError;
use crate::lexer::{Lexer, Token, TokenKind};
use crate::Dialect;

/// The core PAWSCAL recursive-descent parser.
///
/// The parser pulls tokens from the lexer one at a time and keeps exactly
/// one token of lookahead in `current`. Grammar rules are implemented
/// through extension modules (`statements`, `expressions`, `helpers`) via
/// additional `impl Parser` blocks.
pub struct Parser {
    /// Source of tokens; consumed on demand, one per `eat`.
    pub(crate) lexer: Lexer,

    /// The single lookahead token.
    pub(crate) current: Token,

    /// Which language dialect this parse targets.
    pub(crate) dialect: Dialect,
}

/// Public entry point for the PAWSCAL parsing phase.
///
/// Creates a lexer over `source`, runs the full recursive descent for the
/// requested dialect, and returns the program root.
///
/// # Pipeline
/// ```text
/// Source → Lexer → Tokens → Parser → AST → Resolver → Interpreter
/// ```
pub fn parse(source: &str, dialect: Dialect) -> Result<Program, PawscalError> {
    let mut parser = Parser::new(Lexer::new(source), dialect)?;
    parser.parse()
}

impl Parser {
    /// Creates a parser and primes the lookahead with the first token.
    pub fn new(mut lexer: Lexer, dialect: Dialect) -> Result<Self, PawscalError> {
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            dialect,
        })
    }

    /// Parses the entire token stream into a program.
    ///
    /// After the top-level construct, anything other than end-of-input is
    /// a syntax error; the grammar consumes the whole stream or fails.
    pub fn parse(&mut self) -> Result<Program, PawscalError> {
        let program = match self.dialect {
            Dialect::Typed => self.program()?,
            Dialect::Untyped => self.script()?,
        };

        if self.current.kind != TokenKind::Eof {
            return Err(PawscalError::syntax_error(
                format!("unexpected {} after end of program", self.current.kind),
                self.current.span,
            ));
        }

        Ok(program)
    }
}
