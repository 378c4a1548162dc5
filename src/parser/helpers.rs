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

use crate::error::PawscalError;
use crate::lexer::{Token, TokenKind};
use crate::parser::parser::Parser;

impl Parser {
    /// Checks the lookahead token's kind without consuming it.
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Consumes the lookahead token unconditionally and returns it,
    /// pulling the next token from the lexer into its place.
    pub(crate) fn advance(&mut self) -> Result<Token, PawscalError> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Consumes the lookahead token if it has the expected kind, or fails
    /// with a syntax error naming both the expectation and the offender.
    ///
    /// Every grammar rule advances through the token stream with this.
    pub(crate) fn eat(&mut self, kind: TokenKind) -> Result<Token, PawscalError> {
        if self.current.kind == kind {
            self.advance()
        } else {
            Err(PawscalError::syntax_error(
                format!("expected {}, found {}", kind, self.current.kind),
                self.current.span,
            ))
        }
    }

    /// Consumes an identifier and returns its name.
    pub(crate) fn variable_name(&mut self) -> Result<String, PawscalError> {
        Ok(self.eat(TokenKind::Identifier)?.lexeme)
    }
}
