use climb_lexer::{strip_whitespace, tokenize, LexError, Token, TokenKind};
use climb_parser::parser::{ErrorKind, MalformedKind};
use climb_parser::{evaluate, evaluate_tokens, explain, EvalError};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::{evaluate_all, init_test_logger, spaced_out};

const REFERENCE: &str = "-5 + 3 * -(2 ^ 4) / (7 % 3) - -(-8 * 2) + 10 / -2";

#[test]
fn reference_expression_through_every_stage() {
    init_test_logger();
    let stripped = strip_whitespace(REFERENCE);
    assert_eq!(stripped.as_str(), "-5+3*-(2^4)/(7%3)--(-8*2)+10/-2");

    let tokens = tokenize(&stripped).unwrap();
    let rendered: Vec<String> = tokens.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered.join(" "),
        "-(unary) 5 + 3 * -(unary) ( 2 ^ 4 ) / ( 7 % 3 ) - -(unary) ( -(unary) 8 * 2 ) + 10 / -(unary) 2"
    );

    assert_eq!(evaluate_tokens(&tokens), Ok(-44));
    assert_eq!(evaluate(REFERENCE), Ok(-44));
}

#[test]
fn reference_grouping() {
    assert_eq!(
        explain(REFERENCE),
        Ok("(((-5 + ((3 * -(2 ^ 4)) / (7 % 3))) - -(-8 * 2)) + (10 / -2))".to_string())
    );
}

#[test]
fn table_of_values() {
    let results = evaluate_all(&["8-3-2", "2+3*4", "(2+3)*4", "7%3", "7/-2", "0", "0000000042"]);
    let values: Vec<(&str, i32)> = results
        .into_iter()
        .map(|(input, result)| (input, result.unwrap()))
        .collect();
    assert_eq!(
        values,
        vec![
            ("8-3-2", 3),
            ("2+3*4", 14),
            ("(2+3)*4", 20),
            ("7%3", 1),
            ("7/-2", -3),
            ("0", 0),
            ("0000000042", 42),
        ]
    );
}

#[test]
fn eleventh_digit_is_dropped() {
    assert_eq!(evaluate("12345678901"), evaluate("1234567890"));
    assert_eq!(evaluate("12345678901+1"), Ok(1_234_567_891));
}

#[test]
fn each_error_category() {
    let results = evaluate_all(&["3+@", "(1+2", "1%0"]);
    let kinds: Vec<ErrorKind> = results
        .into_iter()
        .map(|(_, result)| result.unwrap_err().kind())
        .collect();
    assert_eq!(
        kinds,
        vec![ErrorKind::Lexical, ErrorKind::Structural, ErrorKind::Arithmetic]
    );
}

#[test]
fn error_index_counts_stripped_characters() {
    assert_eq!(
        evaluate(" 3 +\t@"),
        Err(EvalError::Lex(LexError::UnexpectedChar { ch: '@', index: 2 }))
    );
    assert_eq!(
        evaluate("( 1 + 2"),
        Err(EvalError::Malformed {
            kind: MalformedKind::UnclosedParen { open: 0 },
            index: 4
        })
    );
}

#[test]
fn tokens_built_by_hand_evaluate() {
    let tokens = [
        Token::operator(TokenKind::Minus, false, 0),
        Token::number(6, 1),
        Token::operator(TokenKind::Exp, true, 2),
        Token::number(3, 3),
    ];
    assert_eq!(evaluate_tokens(&tokens), Ok(-6 ^ 3));
}

#[test]
fn token_evaluation_reports_the_same_index_as_text_evaluation() {
    for input in ["(12+345", "1+2345", "(1)*(67", "98765+"] {
        let tokens = tokenize(&strip_whitespace(input)).unwrap();
        assert_eq!(evaluate_tokens(&tokens), evaluate(input), "input: {input:?}");
    }
}

#[test]
fn caret_chains_group_to_the_right() {
    assert_eq!(explain("1^2^3^4"), Ok("(1 ^ (2 ^ (3 ^ 4)))".to_string()));
    assert_eq!(
        explain("1 ^ 2 * 3 ^ 4 ^ 5"),
        Ok("((1 ^ 2) * (3 ^ (4 ^ 5)))".to_string())
    );
}

#[test]
fn spacing_every_character_changes_nothing() {
    assert_eq!(evaluate(&spaced_out(REFERENCE)), Ok(-44));
    assert_eq!(spaced_out("1+2"), "1 + 2");
}

proptest! {
    #[test]
    fn whitespace_never_changes_the_result(
        a in 0i32..10_000,
        b in 1i32..10_000,
        ops in "[-+*/%^]{2}",
        pad in "[ \t\r\n]{0,3}",
    ) {
        let ops: Vec<char> = ops.chars().collect();
        let tight = format!("{a}{}{b}{}{a}", ops[0], ops[1]);
        let loose = format!("{pad}{a}{pad}{}{pad}{b}{pad}{}{pad}{a}{pad}", ops[0], ops[1]);
        prop_assert_eq!(evaluate(&loose), evaluate(&tight));
    }

    #[test]
    fn any_foreign_character_is_lexical(c in "[a-zA-Z=!.,&|<>]") {
        let input = format!("1+{c}");
        let err = evaluate(&input).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Lexical);
        prop_assert_eq!(err.index(), 2);
    }
}
