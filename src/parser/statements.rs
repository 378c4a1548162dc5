/*
 * ==========================================================================
 * PAWSCAL - Pascal with Paws!
 * ==========================================================================
 *
 * Statement-Level Parsing Logic
 *
 * This file contains the grammar rules for **PAWSCAL program structure and
 * statements**:
 * - Program headers (`PROGRAM name;` ... `.`) and bare scripts
 * - Declaration sections (`VAR a, b : INTEGER;`)
 * - Compound statements (`BEGIN ... END`)
 * - Statement lists and the statement dispatcher
 * - Both loop forms (`FOR ... TO ... DO`, `LOOP ... DO ... END`)
 * - Assignment statements
 *
 * Expression grammar lives in `expressions.rs`.
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

use crate::ast::{Block, Program, Stmt, VarDecl};
use crate::error::PawscalError;
use crate::lexer::TokenKind;
use crate::parser::parser::Parser;

impl Parser {
    /// program : PROGRAM variable SEMI block DOT
    pub(crate) fn program(&mut self) -> Result<Program, PawscalError> {
        self.eat(TokenKind::Program)?;
        let name = self.variable_name()?;
        self.eat(TokenKind::Semi)?;
        let block = self.block()?;
        self.eat(TokenKind::Dot)?;

        Ok(Program {
            name: Some(name),
            block,
        })
    }

    /// program : statement_list
    ///
    /// The declaration-free dialect: the whole program is a bare statement
    /// list with no header, no declaration section, and no closing dot.
    pub(crate) fn script(&mut self) -> Result<Program, PawscalError> {
        let body = self.statement_list()?;

        Ok(Program {
            name: None,
            block: Block {
                declarations: Vec::new(),
                body,
            },
        })
    }

    /// block : declarations compound_statement
    fn block(&mut self) -> Result<Block, PawscalError> {
        let declarations = self.declarations()?;
        let body = self.compound_statement()?;

        Ok(Block { declarations, body })
    }

    /// declarations : (VAR (variable_declaration SEMI)+)?
    fn declarations(&mut self) -> Result<Vec<VarDecl>, PawscalError> {
        let mut declarations = Vec::new();

        if self.check(TokenKind::Var) {
            self.eat(TokenKind::Var)?;
            while self.check(TokenKind::Identifier) {
                declarations.extend(self.variable_declaration()?);
                self.eat(TokenKind::Semi)?;
            }
        }

        Ok(declarations)
    }

    /// variable_declaration : ID (COMMA ID)* COLON type_spec
    ///
    /// Every name in the comma list shares the one declared type.
    fn variable_declaration(&mut self) -> Result<Vec<VarDecl>, PawscalError> {
        let mut names = Vec::new();

        let first = self.eat(TokenKind::Identifier)?;
        names.push((first.lexeme, first.span));

        while self.check(TokenKind::Comma) {
            self.eat(TokenKind::Comma)?;
            let id = self.eat(TokenKind::Identifier)?;
            names.push((id.lexeme, id.span));
        }

        self.eat(TokenKind::Colon)?;
        let type_name = self.type_spec()?;

        Ok(names
            .into_iter()
            .map(|(name, span)| VarDecl {
                name,
                type_name: type_name.clone(),
                span,
            })
            .collect())
    }

    /// type_spec : INTEGER | REAL
    ///
    /// Returns the type's source lexeme; whether it names a known built-in
    /// type is the resolver's question.
    fn type_spec(&mut self) -> Result<String, PawscalError> {
        if self.check(TokenKind::Integer) {
            Ok(self.eat(TokenKind::Integer)?.lexeme)
        } else if self.check(TokenKind::Real) {
            Ok(self.eat(TokenKind::Real)?.lexeme)
        } else {
            Err(PawscalError::syntax_error(
                format!("expected a type name, found {}", self.current.kind),
                self.current.span,
            )
            .with_help("declared types are 'INTEGER' or 'REAL'"))
        }
    }

    /// compound_statement : BEGIN statement_list END
    pub(crate) fn compound_statement(&mut self) -> Result<Vec<Stmt>, PawscalError> {
        self.eat(TokenKind::Begin)?;
        let stmts = self.statement_list()?;
        self.eat(TokenKind::End)?;

        Ok(stmts)
    }

    /// statement_list : statement (SEMI statement)*
    pub(crate) fn statement_list(&mut self) -> Result<Vec<Stmt>, PawscalError> {
        let mut stmts = vec![self.statement()?];

        while self.check(TokenKind::Semi) {
            self.eat(TokenKind::Semi)?;
            stmts.push(self.statement()?);
        }

        // An identifier here means two statements with no ';' between them.
        if self.check(TokenKind::Identifier) {
            return Err(PawscalError::syntax_error(
                format!("unexpected identifier '{}' after statement", self.current),
                self.current.span,
            )
            .with_help("statements must be separated by ';'"));
        }

        Ok(stmts)
    }

    /// statement : compound_statement
    ///           | for_statement
    ///           | loop_statement
    ///           | assign_statement
    ///           | empty
    fn statement(&mut self) -> Result<Stmt, PawscalError> {
        match self.current.kind {
            TokenKind::Begin => Ok(Stmt::Compound(self.compound_statement()?)),
            TokenKind::Identifier => self.assign_statement(),
            TokenKind::For => self.for_statement(),
            TokenKind::Loop => self.loop_statement(),
            _ => Ok(Stmt::Empty),
        }
    }

    /// for_statement : FOR variable ASSIGN INTEGER_CONST TO INTEGER_CONST
    ///                 DO compound_statement
    ///
    /// The bounded-range loop. Both bounds are literal integers fixed at
    /// parse time; the range is inclusive.
    fn for_statement(&mut self) -> Result<Stmt, PawscalError> {
        let span = self.current.span;
        self.eat(TokenKind::For)?;
        let var = self.variable_name()?;
        self.eat(TokenKind::Assign)?;
        let start = self.integer_bound()?;
        self.eat(TokenKind::To)?;
        let end = self.integer_bound()?;
        self.eat(TokenKind::Do)?;
        let body = self.compound_statement()?;

        Ok(Stmt::ForRange {
            var,
            start,
            end,
            body,
            span,
        })
    }

    /// loop_statement : LOOP variable DO statement_list END
    ///
    /// The count loop: the named variable's runtime value at loop entry is
    /// the trip count. Distinct from `for_statement` by design.
    fn loop_statement(&mut self) -> Result<Stmt, PawscalError> {
        let span = self.current.span;
        self.eat(TokenKind::Loop)?;
        let count_var = self.variable_name()?;
        self.eat(TokenKind::Do)?;
        let body = self.statement_list()?;
        self.eat(TokenKind::End)?;

        Ok(Stmt::RepeatCount {
            count_var,
            body,
            span,
        })
    }

    /// assign_statement : variable ASSIGN expr
    fn assign_statement(&mut self) -> Result<Stmt, PawscalError> {
        let target = self.eat(TokenKind::Identifier)?;
        self.eat(TokenKind::Assign)?;
        let value = self.expr()?;

        Ok(Stmt::Assign {
            name: target.lexeme,
            value,
            span: target.span,
        })
    }

    /// A loop bound: a plain integer literal, parsed here and now.
    fn integer_bound(&mut self) -> Result<i64, PawscalError> {
        let token = self.eat(TokenKind::IntegerConst)?;
        token.lexeme.parse::<i64>().map_err(|_| {
            PawscalError::syntax_error(
                format!("integer literal '{}' out of range", token.lexeme),
                token.span,
            )
        })
    }
}
