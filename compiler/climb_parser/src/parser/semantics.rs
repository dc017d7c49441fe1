//! What the precedence climber computes.
//!
//! The climber decides *how* an expression groups; a [`Semantics`]
//! implementation decides what each node turns into. [`Arithmetic`] produces
//! the integer value, [`Grouping`] produces the fully parenthesized text, which
//! makes precedence and associativity decisions visible.

use climb_lexer::Token;
use log::debug;

use super::error::{EvalError, EvalResult};
use super::operators::BinaryOperator;

/// Node-level callbacks invoked by the evaluator.
pub trait Semantics {
    /// The value each subexpression turns into.
    type Value;

    /// A number literal.
    fn number(&mut self, token: &Token) -> Self::Value;

    /// A unary minus applied to an operand.
    fn negate(&mut self, operand: Self::Value) -> Self::Value;

    /// A binary operator applied to two operands. `token` is the operator.
    fn apply(
        &mut self,
        op: BinaryOperator,
        lhs: Self::Value,
        rhs: Self::Value,
        token: &Token,
    ) -> EvalResult<Self::Value>;
}

/// 32-bit integer evaluation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Arithmetic;

impl Semantics for Arithmetic {
    type Value = i32;

    fn number(&mut self, token: &Token) -> i32 {
        token.value
    }

    fn negate(&mut self, operand: i32) -> i32 {
        operand.wrapping_neg()
    }

    fn apply(&mut self, op: BinaryOperator, lhs: i32, rhs: i32, token: &Token) -> EvalResult<i32> {
        let value = op.apply(lhs, rhs).map_err(|kind| EvalError::Arithmetic {
            kind,
            index: token.offset,
        })?;
        debug!("{lhs} {op} {rhs} = {value}");
        Ok(value)
    }
}

/// Renders the grouping the evaluator chose, e.g. `1-2-3` as `((1 - 2) - 3)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Grouping;

impl Semantics for Grouping {
    type Value = String;

    fn number(&mut self, token: &Token) -> String {
        token.value.to_string()
    }

    fn negate(&mut self, operand: String) -> String {
        // "--x" would not parse back
        if operand.starts_with('-') {
            format!("-({operand})")
        } else {
            format!("-{operand}")
        }
    }

    fn apply(
        &mut self,
        op: BinaryOperator,
        lhs: String,
        rhs: String,
        _token: &Token,
    ) -> EvalResult<String> {
        Ok(format!("({lhs} {op} {rhs})"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use climb_lexer::TokenKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn arithmetic_reports_the_operator_index() {
        let slash = Token::operator(TokenKind::Div, true, 5);
        let err = Arithmetic
            .apply(BinaryOperator::Div, 1, 0, &slash)
            .unwrap_err();
        assert_eq!(err.index(), 5);
    }

    #[test]
    fn arithmetic_negation_wraps() {
        assert_eq!(Arithmetic.negate(i32::MIN), i32::MIN);
        assert_eq!(Arithmetic.negate(7), -7);
    }

    #[test]
    fn grouping_renders_nodes() {
        let mut g = Grouping;
        let two = g.number(&Token::number(2, 0));
        let three = g.number(&Token::number(3, 2));
        let plus = Token::operator(TokenKind::Plus, true, 1);
        let sum = g.apply(BinaryOperator::Add, two, three, &plus).unwrap();
        assert_eq!(sum, "(2 + 3)");
        assert_eq!(g.negate(sum), "-(2 + 3)");
        assert_eq!(g.negate("-4".to_string()), "-(-4)");
    }

    #[test]
    fn grouping_never_divides() {
        let slash = Token::operator(TokenKind::Div, true, 1);
        let rendered = Grouping
            .apply(BinaryOperator::Div, "1".into(), "0".into(), &slash)
            .unwrap();
        assert_eq!(rendered, "(1 / 0)");
    }
}
