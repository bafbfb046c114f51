//! Recursive-descent parser and tree evaluator
//!
//! Precedence, lowest to highest:
//! - `+`, `-` (left-associative)
//! - `*`, `/`, and implicit multiplication before `(` (left-associative)
//! - unary `+`, `-`
//! - `^` (right-associative; its right operand may carry a unary sign)
//!
//! So `- 2 ^ 2` is `-(2 ^ 2)` and `2 ^ 3 ^ 2` is `2 ^ (3 ^ 2)`.

use super::error::{EvalError, Result};
use super::lexer::{Token, TokenKind};
use crate::catalog::Operand;

/// Binary operators of the grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

/// Parsed expression tree
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Negate(Box<Expr>),
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    fn binary(op: BinaryOp, lhs: Self, rhs: Self) -> Self {
        Self::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// Compute the value of the tree
    ///
    /// Left-associative chains are walked in a loop, so a long sum costs no
    /// extra stack. Only parenthesized groups, signs and exponents recurse, and
    /// the parser bounds how deeply those nest.
    ///
    /// # Errors
    /// Returns `EvalError::DivisionByZero` when a divisor is zero and
    /// `EvalError::NonFinite` when an intermediate value overflows or is NaN.
    pub fn evaluate(&self) -> Result<f64> {
        let mut spine = Vec::new();
        let mut node = self;
        let mut value = loop {
            match node {
                Self::Binary { op, lhs, rhs } => {
                    spine.push((*op, rhs));
                    node = &**lhs;
                }
                Self::Number(n) => break finite(*n)?,
                Self::Negate(inner) => break finite(-inner.evaluate()?)?,
            }
        };

        for (op, rhs) in spine.into_iter().rev() {
            let r = rhs.evaluate()?;
            value = finite(apply(op, value, r)?)?;
        }
        Ok(value)
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        // Detach left children one by one; dropping them in place would
        // recurse once per link of a long chain
        let mut pending = Vec::new();
        if let Self::Binary { lhs, .. } = self {
            pending.push(std::mem::replace(lhs.as_mut(), Self::Number(0.0)));
        }
        while let Some(mut node) = pending.pop() {
            if let Self::Binary { lhs, .. } = &mut node {
                pending.push(std::mem::replace(lhs.as_mut(), Self::Number(0.0)));
            }
        }
    }
}

fn apply(op: BinaryOp, l: f64, r: f64) -> Result<f64> {
    Ok(match op {
        BinaryOp::Add => l + r,
        BinaryOp::Subtract => l - r,
        BinaryOp::Multiply => l * r,
        BinaryOp::Divide => {
            if r == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            l / r
        }
        BinaryOp::Power => l.powf(r),
    })
}

fn finite(value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFinite(value))
    }
}

/// Deepest nesting of groups, signs and exponents the parser accepts
pub const MAX_DEPTH: usize = 256;

/// Parse a token stream into an expression tree
///
/// # Errors
/// Returns `EvalError::Empty` for an empty stream, `EvalError::TooDeep` when
/// groups, signs or exponents nest past [`MAX_DEPTH`], and a positional error
/// for any dangling operator, stray token or unbalanced parenthesis.
pub fn parse(tokens: &[Token]) -> Result<Expr> {
    if tokens.is_empty() {
        return Err(EvalError::Empty);
    }

    let mut parser = Parser::new(tokens);
    let expr = parser.parse_sum()?;

    match parser.peek() {
        None => Ok(expr),
        Some(Token {
            kind: TokenKind::Op(Operand::CloseParen),
            pos,
        }) => Err(EvalError::UnbalancedParen { pos: *pos }),
        Some(token) => Err(unexpected(token)),
    }
}

fn unexpected(token: &Token) -> EvalError {
    EvalError::UnexpectedToken {
        token: token.kind.to_string(),
        pos: token.pos,
    }
}

struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
    depth: usize,
}

impl<'t> Parser<'t> {
    const fn new(tokens: &'t [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    fn peek_op(&self) -> Option<Operand> {
        match self.peek()?.kind {
            TokenKind::Op(op) => Some(op),
            TokenKind::Number(_) => None,
        }
    }

    fn advance(&mut self) -> Option<&'t Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    fn enter(&mut self, pos: usize) -> Result<()> {
        if self.depth >= MAX_DEPTH {
            return Err(EvalError::TooDeep { pos });
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn parse_sum(&mut self) -> Result<Expr> {
        let mut lhs = self.parse_product()?;
        loop {
            let op = match self.peek_op() {
                Some(Operand::Add) => BinaryOp::Add,
                Some(Operand::Subtract) => BinaryOp::Subtract,
                _ => return Ok(lhs),
            };
            self.advance();
            let rhs = self.parse_product()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
    }

    fn parse_product(&mut self) -> Result<Expr> {
        let mut lhs = self.parse_unary()?;
        loop {
            let op = match self.peek_op() {
                Some(Operand::Multiply) => {
                    self.advance();
                    BinaryOp::Multiply
                }
                Some(Operand::Divide) => {
                    self.advance();
                    BinaryOp::Divide
                }
                // `2 ( 3 )` and `( 1 ) ( 2 )`: the group is consumed by parse_unary
                Some(Operand::OpenParen) => BinaryOp::Multiply,
                _ => return Ok(lhs),
            };
            let rhs = self.parse_unary()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
    }

    fn parse_unary(&mut self) -> Result<Expr> {
        let Some(token) = self.peek() else {
            return self.parse_power();
        };
        let negate = match token.kind {
            TokenKind::Op(Operand::Subtract) => true,
            TokenKind::Op(Operand::Add) => false,
            _ => return self.parse_power(),
        };
        self.advance();

        self.enter(token.pos)?;
        let operand = self.parse_unary();
        self.leave();

        if negate {
            Ok(Expr::Negate(Box::new(operand?)))
        } else {
            operand
        }
    }

    fn parse_power(&mut self) -> Result<Expr> {
        let base = self.parse_primary()?;
        match self.peek() {
            Some(token) if token.kind == TokenKind::Op(Operand::Power) => {
                self.advance();
                self.enter(token.pos)?;
                let exponent = self.parse_unary();
                self.leave();
                Ok(Expr::binary(BinaryOp::Power, base, exponent?))
            }
            _ => Ok(base),
        }
    }

    fn parse_primary(&mut self) -> Result<Expr> {
        let token = self.advance().ok_or(EvalError::UnexpectedEnd {
            expected: "a number or '('",
        })?;

        match token.kind {
            TokenKind::Number(n) => Ok(Expr::Number(n)),
            TokenKind::Op(Operand::OpenParen) => {
                self.enter(token.pos)?;
                let inner = self.parse_sum();
                self.leave();
                let inner = inner?;
                match self.advance() {
                    Some(Token {
                        kind: TokenKind::Op(Operand::CloseParen),
                        ..
                    }) => Ok(inner),
                    None => Err(EvalError::UnbalancedParen { pos: token.pos }),
                    Some(other) => Err(unexpected(other)),
                }
            }
            TokenKind::Op(Operand::CloseParen) => {
                Err(EvalError::UnbalancedParen { pos: token.pos })
            }
            TokenKind::Op(_) => Err(unexpected(token)),
        }
    }
}
