/*
 * ==========================================================================
 * PAWSCAL - Pascal with Paws!
 * ==========================================================================
 *
 * Expression Grammar & Operator Precedence
 *
 * expr   : term ((PLUS | MINUS) term)*
 * term   : factor ((MUL | INTEGER_DIV | FLOAT_DIV) factor)*
 * factor : (PLUS | MINUS) factor
 *        | INTEGER_CONST
 *        | REAL_CONST
 *        | LPAREN expr RPAREN
 *        | variable
 *
 * Unary operators bind tighter than any binary operator and are
 * right-recursive, so chained unary (`--5`) parses naturally.
 * Parenthesized sub-expressions reset precedence.
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

use crate::ast::{BinOp, Expr, NumberKind, UnaryOp};
use crate::error::PawscalError;
use crate::lexer::TokenKind;
use crate::parser::parser::Parser;

impl Parser {
    /// expr : term ((PLUS | MINUS) term)*
    pub(crate) fn expr(&mut self) -> Result<Expr, PawscalError> {
        let mut node = self.term()?;

        while matches!(self.current.kind, TokenKind::Plus | TokenKind::Minus) {
            let token = self.advance()?;
            let op = match token.kind {
                TokenKind::Plus => BinOp::Add,
                _ => BinOp::Sub,
            };
            let right = self.term()?;
            let span = node.span();
            node = Expr::Binary {
                left: Box::new(node),
                op,
                right: Box::new(right),
                span,
            };
        }

        Ok(node)
    }

    /// term : factor ((MUL | INTEGER_DIV | FLOAT_DIV) factor)*
    fn term(&mut self) -> Result<Expr, PawscalError> {
        let mut node = self.factor()?;

        while matches!(
            self.current.kind,
            TokenKind::Star | TokenKind::IntDiv | TokenKind::Slash
        ) {
            let token = self.advance()?;
            let op = match token.kind {
                TokenKind::Star => BinOp::Mul,
                TokenKind::IntDiv => BinOp::IntDiv,
                _ => BinOp::FloatDiv,
            };
            let right = self.factor()?;
            let span = node.span();
            node = Expr::Binary {
                left: Box::new(node),
                op,
                right: Box::new(right),
                span,
            };
        }

        Ok(node)
    }

    /// factor : (PLUS | MINUS) factor | INTEGER_CONST | REAL_CONST
    ///        | LPAREN expr RPAREN | variable
    fn factor(&mut self) -> Result<Expr, PawscalError> {
        match self.current.kind {
            TokenKind::Plus | TokenKind::Minus => {
                let token = self.advance()?;
                let op = match token.kind {
                    TokenKind::Plus => UnaryOp::Plus,
                    _ => UnaryOp::Minus,
                };
                let operand = self.factor()?;
                Ok(Expr::Unary {
                    op,
                    operand: Box::new(operand),
                    span: token.span,
                })
            }

            TokenKind::IntegerConst => {
                let token = self.advance()?;
                Ok(Expr::Number {
                    literal: token.lexeme,
                    kind: NumberKind::Integer,
                    span: token.span,
                })
            }

            TokenKind::RealConst => {
                let token = self.advance()?;
                Ok(Expr::Number {
                    literal: token.lexeme,
                    kind: NumberKind::Real,
                    span: token.span,
                })
            }

            TokenKind::LParen => {
                self.eat(TokenKind::LParen)?;
                let node = self.expr()?;
                self.eat(TokenKind::RParen)?;
                Ok(node)
            }

            TokenKind::Identifier => {
                let token = self.advance()?;
                Ok(Expr::Var {
                    name: token.lexeme,
                    span: token.span,
                })
            }

            other => Err(PawscalError::syntax_error(
                format!("expected an expression, found {}", other),
                self.current.span,
            )),
        }
    }
}
