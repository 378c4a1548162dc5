/*
 * ==========================================================================
 * PAWSCAL - Pascal with Paws!
 * ==========================================================================
 *
 * File:      keywords.rs
 * Purpose:   Defines all reserved keywords for the PAWSCAL language.
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

use crate::lexer::token::TokenKind;

/// Looks up a scanned identifier in the **reserved keyword table**.
///
/// Used exclusively by the lexer after maximal-munch identifier scanning:
/// if the lexeme matches a reserved word the specific keyword kind is
/// returned, otherwise the word is an ordinary `Identifier`.
///
/// Matching is case-sensitive and exact: `begin` is an identifier,
/// `BEGIN` is the keyword. This is the only shared, read-only table in the
/// whole pipeline.
pub fn keyword_kind(word: &str) -> Option<TokenKind> {
    let kind = match word {
        "PROGRAM" => TokenKind::Program,
        "VAR" => TokenKind::Var,
        "BEGIN" => TokenKind::Begin,
        "END" => TokenKind::End,
        "LOOP" => TokenKind::Loop,
        "FOR" => TokenKind::For,
        "TO" => TokenKind::To,
        "DO" => TokenKind::Do,
        "DIV" => TokenKind::IntDiv,
        "INTEGER" => TokenKind::Integer,
        "REAL" => TokenKind::Real,
        _ => return None,
    };
    Some(kind)
}
