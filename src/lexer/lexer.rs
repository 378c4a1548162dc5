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
use crate::lexer::keywords::keyword_kind;
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;

pub struct Lexer {
    chars: Vec<char>,
    current: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Creates a new PAWSCAL lexer over raw source text.
    ///
    /// The full program text is supplied up front; there is no streaming
    /// input. The cursor starts at position 0, line 1, column 0.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            current: 0,
            line: 1,
            column: 0,
        }
    }

    /// Returns the next token, or the `Eof` token once input is exhausted.
    ///
    /// This is the pull-based heart of the lexer: the parser calls it once
    /// per token it consumes. Repeated calls after end of input keep
    /// returning `Eof`.
    ///
    /// Skips whitespace and `{ ... }` comments. Fails with an `E_LEX` error
    /// on an unrecognized character or an unterminated comment.
    pub fn next_token(&mut self) -> Result<Token, PawscalError> {
        loop {
            if self.is_at_end() {
                return Ok(self.make_token(TokenKind::Eof, String::new(), self.here()));
            }

            let span = self.here();
            let ch = self.advance();

            match ch {
                // Whitespace
                ' ' | '\r' | '\t' | '\n' => continue,

                // Comment: { ... }. Bodies do not nest; the first '}' ends it
                '{' => {
                    self.comment(span)?;
                    continue;
                }

                'a'..='z' | 'A'..='Z' => return Ok(self.identifier(span)),

                '0'..='9' => return Ok(self.number(span)),

                // ':=' needs one character of lookahead to disambiguate ':'
                ':' => {
                    if self.peek() == '=' {
                        self.advance();
                        return Ok(self.make_token(TokenKind::Assign, ":=".to_string(), span));
                    }
                    return Ok(self.make_token(TokenKind::Colon, ":".to_string(), span));
                }

                ';' => return Ok(self.make_token(TokenKind::Semi, ";".to_string(), span)),
                ',' => return Ok(self.make_token(TokenKind::Comma, ",".to_string(), span)),
                '.' => return Ok(self.make_token(TokenKind::Dot, ".".to_string(), span)),
                '(' => return Ok(self.make_token(TokenKind::LParen, "(".to_string(), span)),
                ')' => return Ok(self.make_token(TokenKind::RParen, ")".to_string(), span)),
                '+' => return Ok(self.make_token(TokenKind::Plus, "+".to_string(), span)),
                '-' => return Ok(self.make_token(TokenKind::Minus, "-".to_string(), span)),
                '*' => return Ok(self.make_token(TokenKind::Star, "*".to_string(), span)),
                '/' => return Ok(self.make_token(TokenKind::Slash, "/".to_string(), span)),

                other => {
                    return Err(PawscalError::lex_error(
                        format!("unrecognized character '{}'", other),
                        span,
                    ));
                }
            }
        }
    }

    /// Skips a `{ ... }` comment. The opening brace has already been
    /// consumed; the first `}` closes the comment regardless of nesting.
    fn comment(&mut self, open: Span) -> Result<(), PawscalError> {
        while !self.is_at_end() {
            if self.advance() == '}' {
                return Ok(());
            }
        }
        Err(PawscalError::lex_error("unterminated comment", open)
            .with_help("add a closing '}' before the end of the file"))
    }

    /// Scans an identifier or keyword.
    ///
    /// Maximal munch: a letter followed by any run of letters and digits.
    /// The finished lexeme is checked against the reserved-word table
    /// before defaulting to a generic identifier token.
    fn identifier(&mut self, span: Span) -> Token {
        let start = self.current - 1;

        while self.peek().is_ascii_alphanumeric() {
            self.advance();
        }

        let text: String = self.chars[start..self.current].iter().collect();
        let kind = keyword_kind(&text).unwrap_or(TokenKind::Identifier);

        self.make_token(kind, text, span)
    }

    /// Scans an integer or real numeric literal.
    ///
    /// Maximal-munch digit scanning; a `.` immediately followed by a digit
    /// continues the literal as a real, otherwise the `.` is left for the
    /// parser (it terminates a typed program).
    fn number(&mut self, span: Span) -> Token {
        let start = self.current - 1;

        while self.peek().is_ascii_digit() {
            self.advance();
        }

        let mut kind = TokenKind::IntegerConst;

        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            kind = TokenKind::RealConst;
            self.advance(); // consume '.'
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let text: String = self.chars[start..self.current].iter().collect();
        self.make_token(kind, text, span)
    }

    fn make_token(&self, kind: TokenKind, lexeme: String, span: Span) -> Token {
        Token { kind, lexeme, span }
    }

    fn here(&self) -> Span {
        Span::new(self.line, self.column)
    }

    /// Advances the cursor by one character and returns it.
    ///
    /// The cursor only ever moves forward.
    fn advance(&mut self) -> char {
        let ch = self.chars[self.current];
        self.current += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        ch
    }

    /// Returns the current character without consuming it, `'\0'` at EOF.
    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.current]
        }
    }

    /// Returns the character after the current one, `'\0'` past the end.
    fn peek_next(&self) -> char {
        if self.current + 1 >= self.chars.len() {
            '\0'
        } else {
            self.chars[self.current + 1]
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let mut lexer = Lexer::new(source);
        let mut out = Vec::new();
        loop {
            let token = lexer.next_token().expect("lex failure");
            let kind = token.kind;
            out.push(kind);
            if kind == TokenKind::Eof {
                return out;
            }
        }
    }

    #[test]
    fn assignment_statement_tokens() {
        assert_eq!(
            kinds("x := 2 + 3 * 4"),
            vec![
                TokenKind::Identifier,
                TokenKind::Assign,
                TokenKind::IntegerConst,
                TokenKind::Plus,
                TokenKind::IntegerConst,
                TokenKind::Star,
                TokenKind::IntegerConst,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn colon_versus_assign() {
        assert_eq!(
            kinds("x : INTEGER; x := 1"),
            vec![
                TokenKind::Identifier,
                TokenKind::Colon,
                TokenKind::Integer,
                TokenKind::Semi,
                TokenKind::Identifier,
                TokenKind::Assign,
                TokenKind::IntegerConst,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn keywords_are_case_sensitive() {
        let mut lexer = Lexer::new("BEGIN begin");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Begin);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Identifier);
    }

    #[test]
    fn integer_lexeme_round_trips() {
        let mut lexer = Lexer::new("00420 7");
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::IntegerConst);
        assert_eq!(token.lexeme, "00420");
        assert_eq!(lexer.next_token().unwrap().lexeme, "7");
    }

    #[test]
    fn real_literal_needs_digit_after_dot() {
        // '3.14' is a real; '3.' is an integer followed by a dot.
        let mut lexer = Lexer::new("3.14 3.");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::RealConst);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::IntegerConst);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Dot);
    }

    #[test]
    fn eof_is_idempotent() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Identifier);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
    }

    #[test]
    fn comments_are_skipped() {
        assert_eq!(
            kinds("x { this is ignored } := { twice } 1"),
            vec![
                TokenKind::Identifier,
                TokenKind::Assign,
                TokenKind::IntegerConst,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn unterminated_comment_is_a_lex_error() {
        let mut lexer = Lexer::new("x := 1 { no close");
        lexer.next_token().unwrap();
        lexer.next_token().unwrap();
        lexer.next_token().unwrap();
        let err = lexer.next_token().unwrap_err();
        assert_eq!(err.code, "E_LEX");
    }

    #[test]
    fn unknown_character_is_a_lex_error() {
        let mut lexer = Lexer::new("x := 1 @");
        lexer.next_token().unwrap();
        lexer.next_token().unwrap();
        lexer.next_token().unwrap();
        let err = lexer.next_token().unwrap_err();
        assert_eq!(err.code, "E_LEX");
        assert_eq!(err.span, Span::new(1, 7));
    }
}
