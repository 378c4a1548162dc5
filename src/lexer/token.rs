/*
 * ==========================================================================
 * PAWSCAL - Pascal with Paws!
 * ==========================================================================
 *
 * File:      token.rs
 * Purpose:   Defines the fundamental lexical token types used by the
 *            PAWSCAL front end during the lexing and parsing stages.
 *
 * Author:    Sam Wilcox
 * Email:     sam@pawscal-lang.com
 * Website:   https://www.pawscal-lang.com
 * GitHub:    https://github.com/samwilcox/pawscal
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

use crate::span::Span;
use std::fmt;

/// The **category of a lexical token** in the PAWSCAL language.
///
/// The vocabulary is a closed enumeration: the parser matches on these
/// variants exhaustively, so adding a token kind is a compile-time-checked
/// change everywhere it is handled.
///
/// # Pipeline Role
/// ```text
/// Source Code → Lexer → TokenKind → Parser → AST
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A user-defined name: a variable or the program name.
    Identifier,

    /// An integer literal such as `42`.
    IntegerConst,

    /// A real literal such as `3.14`.
    RealConst,

    // Reserved keywords. Case-sensitive; see `keywords.rs`.
    Program,
    Var,
    Begin,
    End,
    Loop,
    For,
    To,
    Do,
    Integer,
    Real,

    // Operators.
    Plus,
    Minus,
    Star,
    /// The `DIV` keyword: truncating integer division.
    IntDiv,
    /// The `/` operator: float division, always yields a real.
    Slash,

    // Punctuation.
    /// The `:=` assignment operator.
    Assign,
    Semi,
    Colon,
    Comma,
    Dot,
    LParen,
    RParen,

    /// End-of-file marker.
    ///
    /// Always produced once the input is exhausted; the lexer keeps
    /// returning it on every further call, so the parser can rely on it
    /// to detect fully consumed input.
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenKind::Identifier => "identifier",
            TokenKind::IntegerConst => "integer literal",
            TokenKind::RealConst => "real literal",
            TokenKind::Program => "'PROGRAM'",
            TokenKind::Var => "'VAR'",
            TokenKind::Begin => "'BEGIN'",
            TokenKind::End => "'END'",
            TokenKind::Loop => "'LOOP'",
            TokenKind::For => "'FOR'",
            TokenKind::To => "'TO'",
            TokenKind::Do => "'DO'",
            TokenKind::Integer => "'INTEGER'",
            TokenKind::Real => "'REAL'",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::IntDiv => "'DIV'",
            TokenKind::Slash => "'/'",
            TokenKind::Assign => "':='",
            TokenKind::Semi => "';'",
            TokenKind::Colon => "':'",
            TokenKind::Comma => "','",
            TokenKind::Dot => "'.'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::Eof => "end of input",
        };
        write!(f, "{}", text)
    }
}

/// A **single lexical token** produced by the PAWSCAL lexer.
///
/// A token pairs a category with the exact source text that produced it,
/// plus the source position for error reporting. Tokens are created on
/// demand by the lexer, consumed by the parser, and never mutated.
///
/// The lexeme of a numeric token preserves the source digit sequence
/// verbatim, so re-rendering a literal recovers exactly what was written.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The exact source text that produced this token.
    pub lexeme: String,

    /// Where the token starts in the source.
    pub span: Span,
}

impl fmt::Display for Token {
    /// Prints only the token's lexeme; error messages care about what the
    /// user wrote, not the internal structure.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}
