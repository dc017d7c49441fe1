//! Scenarios that run the stripper, tokenizer, evaluator and front end
//! together.

use climb_parser::{evaluate, EvalResult};

/// Evaluate every case and pair it with its input.
pub fn evaluate_all<'a>(inputs: &[&'a str]) -> Vec<(&'a str, EvalResult<i32>)> {
    inputs.iter().map(|input| (*input, evaluate(input))).collect()
}

/// Insert a space between every character of `input`.
pub fn spaced_out(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 2);
    for (i, c) in input.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod pipeline;
#[cfg(test)]
mod front_end;

#[cfg(test)]
pub(crate) fn init_test_logger() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}
