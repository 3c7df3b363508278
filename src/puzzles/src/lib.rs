pub mod digits;
pub mod input;
pub mod leap;
pub mod taxi;
mod common;

pub use common::set_debug;

use {
    anyhow::Context,
    common::debug_println,
    derive_more::Display,
    std::{
        fmt,
        io::{BufRead, Write},
        str::FromStr,
    },
};

/// A one-value-in, one-line-out computation.
pub trait Puzzle {
    type Input: input::StreamValue + fmt::Debug;
    type Output: fmt::Display;

    const NAME: &'static str;

    fn solve(input: Self::Input) -> Self::Output;
}

pub struct TaxiFare;

impl Puzzle for TaxiFare {
    type Input = i64;
    type Output = taxi::Fare;

    const NAME: &'static str = "taxi_fare";

    fn solve(distance: i64) -> taxi::Fare {
        taxi::compute_taxi_fare(distance)
    }
}

pub struct LeapYear;

impl Puzzle for LeapYear {
    type Input = i64;
    type Output = leap::Verdict;

    const NAME: &'static str = "leap_year";

    fn solve(year: i64) -> leap::Verdict {
        leap::Verdict::from(leap::is_leap_year(year))
    }
}

pub struct ReverseDigits;

impl Puzzle for ReverseDigits {
    type Input = u64;
    type Output = u64;

    const NAME: &'static str = "reverse_digits";

    fn solve(n: u64) -> u64 {
        digits::reverse_digits(n)
    }
}

/// Reads one value, solves `P` for it and writes the answer on its own line.
///
/// Missing or unparseable input writes nothing and still returns `Ok`.
pub fn execute<P: Puzzle>(stdin: &mut impl BufRead, stdout: &mut impl Write) -> anyhow::Result<()> {
    let Some(value) = input::read_value::<P::Input>(stdin) else {
        debug_println!("{}: no valid input, nothing to do", P::NAME);
        return Ok(());
    };
    debug_println!("{}: input {value:?}", P::NAME);
    let answer = P::solve(value);
    debug_println!("{}: answer {answer}", P::NAME);
    writeln!(stdout, "{answer}").context("failed to write answer to stdout")?;
    stdout.flush().context("failed to flush stdout")?;
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Task {
    #[display("{}", TaxiFare::NAME)]
    TaxiFare,
    #[display("{}", LeapYear::NAME)]
    LeapYear,
    #[display("{}", ReverseDigits::NAME)]
    ReverseDigits,
}

impl Task {
    pub const ALL: [Task; 3] = [Task::TaxiFare, Task::LeapYear, Task::ReverseDigits];

    pub fn execute(self, stdin: &mut impl BufRead, stdout: &mut impl Write) -> anyhow::Result<()> {
        match self {
            Task::TaxiFare => execute::<TaxiFare>(stdin, stdout),
            Task::LeapYear => execute::<LeapYear>(stdin, stdout),
            Task::ReverseDigits => execute::<ReverseDigits>(stdin, stdout),
        }
    }
}

impl FromStr for Task {
    type Err = anyhow::Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Task::ALL
            .into_iter()
            .find(|task| task.to_string() == name)
            .with_context(|| format!("unknown task {name:?}"))
    }
}
