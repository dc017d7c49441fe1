use std::io::Cursor;

use climb::{read_expression_line, InputError, ReplSession, Report, Settings};
use pretty_assertions::assert_eq;

#[test]
fn stdin_line_is_evaluated_like_an_argument() {
    let settings = Settings::default();
    let stdin = Cursor::new("-5 + 3 * -(2 ^ 4) / (7 % 3) - -(-8 * 2) + 10 / -2\n");
    let line = read_expression_line(stdin, &settings).unwrap();
    let report = Report::evaluate(&line, &settings);
    assert_eq!(report.result, Some(-44));
    assert!(report.error.is_none());
}

#[test]
fn default_limit_accepts_256_characters() {
    let settings = Settings::default();
    let longest = format!("1{}", "+1".repeat(127)) + " ";
    assert_eq!(longest.chars().count(), 256);
    let line = read_expression_line(Cursor::new(longest.as_str()), &settings).unwrap();
    assert_eq!(Report::evaluate(&line, &settings).result, Some(128));

    let too_long = format!("{longest}1");
    let err = read_expression_line(Cursor::new(too_long.as_str()), &settings).unwrap_err();
    assert!(matches!(err, InputError::TooLong { len: 257, limit: 256 }));
}

#[test]
fn json_reports_for_every_command() {
    let settings = Settings::default();

    let value: serde_json::Value =
        serde_json::from_str(&Report::explain("8-3-2", &settings).to_json().unwrap()).unwrap();
    assert_eq!(value["grouping"], "((8 - 3) - 2)");

    let value: serde_json::Value =
        serde_json::from_str(&Report::tokens("1 - -2", &settings).to_json().unwrap()).unwrap();
    assert_eq!(value["tokens"], serde_json::json!(["1", "-", "-(unary)", "2"]));

    let value: serde_json::Value =
        serde_json::from_str(&Report::evaluate("(1+2", &settings).to_json().unwrap()).unwrap();
    assert_eq!(value["error"]["kind"], "structural");
    assert_eq!(value["error"]["index"], 4);
    assert!(value.get("result").is_none());
}

#[test]
fn repl_session_transcript() {
    let mut session = ReplSession::new(Settings::default());
    let transcript: Vec<String> = ["2 ^ 3 ^ 4", ":explain 2^3^4", "1/0", ":quit"]
        .iter()
        .flat_map(|line| session.handle_line(line).0)
        .collect();
    assert_eq!(transcript[0], "Result: 5");
    assert_eq!(transcript[1], "(2 ^ (3 ^ 4))");
    assert_eq!(transcript[2], "error: arithmetic error: division by zero (index 1)");
    assert_eq!(transcript[3], "  | 1/0");
    assert_eq!(transcript[4], "  |  ^");
    assert_eq!(transcript.len(), 6);
}
