//! Rev Pow \
//! Evaluates `X = I^R + I^3 - R^2 + (I*R)` for `0 <= I <= 99999`, where `R` is `I` with its
//! decimal digits reversed. `I^R` is far outside any native integer, so the arithmetic runs on
//! decimal digit strings from [`big_dec`].

mod cli;
mod eval;
mod input;
mod self_check;

pub use cli::{invalid_input_message, prompt_input, respond, RevPowCommand};
pub use eval::{evaluate, Evaluation};
pub use input::{parse_input, InputError, Request, INPUT_MAX, INPUT_MIN, RUN_TESTS};
pub use self_check::run_self_check;

#[cfg(test)]
mod tests {
    use crate::{evaluate, parse_input, Evaluation, Request};

    #[test]
    fn it_works() {
        let Ok(Request::Evaluate(input)) = parse_input("12") else {
            panic!("12 should be accepted");
        };
        let eval = Evaluation::new(input);
        println!("{}", eval);
        assert_eq!(eval.result, evaluate(12));
        assert_eq!(eval.result, "46005119909369701467651");
    }
}
