/*
 * ==========================================================================
 * PAWSCAL - Pascal with Paws!
 * ==========================================================================
 *
 * Lexical Analysis Entry Point
 *
 * This module turns raw PAWSCAL source text into a stream of typed tokens.
 * The implementation is split across:
 * - `token.rs`     → Token and TokenKind definitions
 * - `keywords.rs`  → The reserved-word table
 * - `lexer.rs`     → The character-level scanner
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

pub mod keywords;
pub mod lexer;
pub mod token;

pub use lexer::Lexer;
pub use token::{Token, TokenKind};

use crate::error::PawscalError;

/// Tokenizes an entire source string in one shot.
///
/// Drives [`Lexer::next_token`] until the `Eof` marker, which is included
/// as the final element. The parser pulls tokens one at a time instead of
/// using this; it exists for tooling and tests.
pub fn tokenize(source: &str) -> Result<Vec<Token>, PawscalError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token()?;
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}
