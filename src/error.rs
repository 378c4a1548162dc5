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

use crate::span::Span;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct PawscalError {
    /// Stable error code (E_LEX, E_SYNTAX, …)
    pub code: &'static str,

    /// Human-readable error message
    pub message: String,

    /// Primary source location
    pub span: Span,

    /// Optional note / help text
    pub help: Option<String>,
}

impl PawscalError {
    /// Generic constructor
    pub fn new(code: &'static str, message: impl Into<String>, span: Span) -> Self {
        Self {
            code,
            message: message.into(),
            span,
            help: None,
        }
    }

    /// Lexical error (unrecognized character, unterminated comment)
    pub fn lex_error(message: impl Into<String>, span: Span) -> Self {
        Self::new("E_LEX", message, span)
    }

    /// Syntax error (token-kind mismatch, trailing input)
    pub fn syntax_error(message: impl Into<String>, span: Span) -> Self {
        Self::new("E_SYNTAX", message, span)
    }

    /// Name error (undeclared or unbound variable, static or runtime)
    pub fn name_error(message: impl Into<String>, span: Span) -> Self {
        Self::new("E_NAME", message, span)
    }

    /// Type error (unknown declared type, non-integer operand where one is required)
    pub fn type_error(message: impl Into<String>, span: Span) -> Self {
        Self::new("E_TYPE", message, span)
    }

    /// Arithmetic error (integer division by zero, integer overflow)
    pub fn arithmetic_error(message: impl Into<String>, span: Span) -> Self {
        Self::new("E_ARITH", message, span)
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for PawscalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error[{}]: {} (line {}, column {})",
            self.code,
            self.message,
            self.span.line,
            self.span.column + 1
        )
    }
}

impl std::error::Error for PawscalError {}
