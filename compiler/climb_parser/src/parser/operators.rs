//! Binary operator table: precedence, associativity and integer semantics.

use std::fmt;

use climb_lexer::TokenKind;

use super::error::ArithmeticError;

/// Threshold below every real operator; a subexpression parsed with it accepts
/// any operator.
pub const ACCEPT_ANY: u8 = 0;

/// Grouping of equal-precedence operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    /// Written `^`. Computes bitwise XOR, not a power: `2^4` is 6.
    ///
    /// This matches the behaviour the calculator has always had and is kept on
    /// purpose; callers that want exponentiation must not rely on `^`.
    Xor,
}

impl BinaryOperator {
    /// Operator for a token kind, if the kind is one.
    pub fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(BinaryOperator::Add),
            TokenKind::Minus => Some(BinaryOperator::Sub),
            TokenKind::Mul => Some(BinaryOperator::Mul),
            TokenKind::Div => Some(BinaryOperator::Div),
            TokenKind::Mod => Some(BinaryOperator::Mod),
            TokenKind::Exp => Some(BinaryOperator::Xor),
            _ => None,
        }
    }

    /// Binding strength; larger binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Sub => 10,
            BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod => 20,
            BinaryOperator::Xor => 30,
        }
    }

    pub fn associativity(self) -> Associativity {
        match self {
            BinaryOperator::Xor => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    /// Threshold for the operator's right-hand operand.
    ///
    /// Left-associative operators raise it by one so an operator of the same
    /// precedence ends the operand; right-associative ones keep it so the
    /// operand may absorb the next one.
    pub fn next_min_precedence(self) -> u8 {
        match self.associativity() {
            Associativity::Left => self.precedence() + 1,
            Associativity::Right => self.precedence(),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Sub => '-',
            BinaryOperator::Mul => '*',
            BinaryOperator::Div => '/',
            BinaryOperator::Mod => '%',
            BinaryOperator::Xor => '^',
        }
    }

    /// Apply the operator to two 32-bit operands.
    ///
    /// Division and remainder truncate toward zero. Overflow wraps, including
    /// `i32::MIN / -1`.
    pub fn apply(self, lhs: i32, rhs: i32) -> Result<i32, ArithmeticError> {
        match self {
            BinaryOperator::Add => Ok(lhs.wrapping_add(rhs)),
            BinaryOperator::Sub => Ok(lhs.wrapping_sub(rhs)),
            BinaryOperator::Mul => Ok(lhs.wrapping_mul(rhs)),
            BinaryOperator::Div if rhs == 0 => Err(ArithmeticError::DivisionByZero),
            BinaryOperator::Div => Ok(lhs.wrapping_div(rhs)),
            BinaryOperator::Mod if rhs == 0 => Err(ArithmeticError::ModuloByZero),
            BinaryOperator::Mod => Ok(lhs.wrapping_rem(rhs)),
            BinaryOperator::Xor => Ok(lhs ^ rhs),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
