use std::iter::Peekable;
use std::str::CharIndices;

use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;
use crate::expression::operator::Operator;

impl Expression {
    /// Read an expression written in either notation.
    ///
    /// Accepts integers, `+ - * / × ÷`, parentheses and a leading minus on a
    /// literal. The tree is rebuilt through [`Expression::combine`], so the
    /// result is canonical and its value can be checked against a target.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed text or when a divisor evaluates to zero.
    pub fn parse(text: &str) -> Result<Expression, ExpressionError> {
        debug!("Parsing expression: '{}'", text);

        let mut parser = Parser {
            chars: text.char_indices().peekable(),
        };
        let expr = parser.sum()?;

        match parser.peek() {
            None => Ok(expr),
            Some((_, ')')) => Err(ExpressionError::UnbalancedParentheses),
            Some((position, character)) => Err(ExpressionError::UnexpectedCharacter {
                character,
                position,
            }),
        }
    }
}

struct Parser<'a> {
    chars: Peekable<CharIndices<'a>>,
}

impl Parser<'_> {
    fn peek(&mut self) -> Option<(usize, char)> {
        while let Some(&(_, c)) = self.chars.peek()
            && c.is_whitespace()
        {
            self.chars.next();
        }
        self.chars.peek().copied()
    }

    fn sum(&mut self) -> Result<Expression, ExpressionError> {
        let mut left = self.product()?;
        loop {
            let operator = match self.peek() {
                Some((_, '+')) => Operator::Add,
                Some((_, '-')) => Operator::Subtract,
                _ => return Ok(left),
            };
            self.chars.next();
            let right = self.product()?;
            left = Expression::combine(operator, left, right);
        }
    }

    fn product(&mut self) -> Result<Expression, ExpressionError> {
        let mut left = self.factor()?;
        loop {
            let operator = match self.peek() {
                Some((_, '*' | '×')) => Operator::Multiply,
                Some((_, '/' | '÷')) => Operator::Divide,
                _ => return Ok(left),
            };
            self.chars.next();
            let right = self.factor()?;
            if operator == Operator::Divide && right.value() == 0.0 {
                return Err(ExpressionError::DivisionByZero);
            }
            left = Expression::combine(operator, left, right);
        }
    }

    fn factor(&mut self) -> Result<Expression, ExpressionError> {
        match self.peek() {
            None => Err(ExpressionError::UnexpectedEnd),
            Some((_, '(')) => {
                self.chars.next();
                let inner = self.sum()?;
                match self.peek() {
                    Some((_, ')')) => {
                        self.chars.next();
                        Ok(inner)
                    }
                    None => Err(ExpressionError::UnbalancedParentheses),
                    Some((position, character)) => Err(ExpressionError::UnexpectedCharacter {
                        character,
                        position,
                    }),
                }
            }
            Some((_, '-')) => {
                self.chars.next();
                self.number(true)
            }
            Some((_, c)) if c.is_ascii_digit() => self.number(false),
            Some((position, character)) => Err(ExpressionError::UnexpectedCharacter {
                character,
                position,
            }),
        }
    }

    fn number(&mut self, negative: bool) -> Result<Expression, ExpressionError> {
        let mut literal = String::new();
        if negative {
            literal.push('-');
        }

        match self.chars.peek() {
            Some(&(_, c)) if c.is_ascii_digit() => {}
            Some(&(position, character)) => {
                return Err(ExpressionError::UnexpectedCharacter {
                    character,
                    position,
                });
            }
            None => return Err(ExpressionError::UnexpectedEnd),
        }

        while let Some(&(_, c)) = self.chars.peek()
            && c.is_ascii_digit()
        {
            literal.push(c);
            self.chars.next();
        }

        literal
            .parse::<i64>()
            .map(Expression::leaf)
            .map_err(|_| ExpressionError::InvalidNumber(literal))
    }
}
