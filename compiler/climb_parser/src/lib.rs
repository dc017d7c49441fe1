//! climb evaluator
//!
//! Evaluates single-line integer expressions (`+ - * / % ^`, unary minus,
//! parentheses) to an `i32` by precedence climbing. `^` is bitwise XOR.

pub mod parser;

pub use parser::{
    evaluate, evaluate_tokens, evaluate_with, explain, explain_with, EvalConfig, EvalError,
    EvalResult,
};

#[cfg(test)]
mod tests {
    use std::sync::Once;
    use log::LevelFilter;
    use env_logger::Builder;
    use std::io::Write;

    static INIT: Once = Once::new();

    /// Initialize the logger for tests
    pub fn init_test_logger() {
        INIT.call_once(|| {
            Builder::new()
                .is_test(true)
                .filter_level(LevelFilter::Debug)
                .format(|buf, record| {
                    writeln!(
                        buf,
                        "[{}] {}: {}",
                        record.level(),
                        record.target(),
                        record.args()
                    )
                })
                .init();
            log::info!("Test logger initialized");
        });
    }

    #[test]
    fn reference_expression_with_logging() {
        init_test_logger();
        assert_eq!(
            crate::evaluate("-5 + 3 * -(2 ^ 4) / (7 % 3) - -(-8 * 2) + 10 / -2"),
            Ok(-44)
        );
    }
}
