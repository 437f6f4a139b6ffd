//! Command line input handling

use crate::{algorithms::Order, data::PositiveInt};

/// Command line arguments
#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    args_conflicts_with_subcommands = true,
    subcommand_value_name = "mode",
    subcommand_help_heading = "Modes",
    disable_help_subcommand = true
)]
pub struct Args {
    /// Run a benchmark on generated data instead of sorting the given values
    #[command(subcommand)]
    pub mode: Option<Mode>,
    /// The positive integers to sort, negative numbers are rejected after parsing
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<String>,
    /// The order pending elements are inserted in
    #[arg(short, long, default_value_t = Order::Sequential)]
    pub order: Order,
    /// Increase logging verbosity, can be repeated
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Args {
    /// The log level selected by `--verbose`
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, clap::Subcommand)]
pub enum Mode {
    /// Time both container strategies on generated data
    Bench(Bench),
}

/// Benchmark arguments
#[derive(Debug, clap::Args)]
pub struct Bench {
    /// The number of runs to do
    #[arg(short, long, default_value_t = 1_000)]
    pub runs: usize,
    /// The size of the sequences to sort
    #[arg(short, long, default_value_t = 3_000)]
    pub size: usize,
    /// The data type to use for sorting
    #[arg(short, long, default_value_t = DataType::Permutation)]
    pub data: DataType,
    /// The order pending elements are inserted in
    #[arg(short, long, default_value_t = Order::Sequential)]
    pub order: Order,
    /// Seed for the rng
    #[arg(long)]
    pub seed: Option<u64>,
    /// The output file to write the samples to
    pub output: Option<std::path::PathBuf>,
}

/// Available data types for sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DataType {
    /// Uniformly distributed values
    Uniform,
    /// A permutation of `1..=size`
    Permutation,
    /// Zipf distributed values with many duplicates
    Zipf,
    /// Descending values
    Reversed,
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            DataType::Uniform => "uniform",
            DataType::Permutation => "permutation",
            DataType::Zipf => "zipf",
            DataType::Reversed => "reversed",
        })
    }
}

/// Reasons a token is not a valid [`PositiveInt`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The token has no digits
    Empty,
    /// The token contains something other than an ASCII digit
    InvalidDigit,
    /// The token has a superfluous leading zero
    LeadingZero,
    /// The token is zero
    Zero,
    /// The token is larger than [`PositiveInt::MAX_VALUE`]
    Overflow,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ParseError::Empty => "no digits",
            ParseError::InvalidDigit => "invalid digit",
            ParseError::LeadingZero => "leading zero",
            ParseError::Zero => "not positive",
            ParseError::Overflow => "too large",
        })
    }
}

impl std::error::Error for ParseError {}

/// Strictly parse a positive integer, allowing a single leading `+`
pub fn parse_positive_int(token: &str) -> Result<PositiveInt, ParseError> {
    let digits = token.strip_prefix('+').unwrap_or(token);

    if digits.is_empty() {
        return Err(ParseError::Empty);
    }
    if !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(ParseError::InvalidDigit);
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return Err(ParseError::LeadingZero);
    }

    let value = digits.bytes().try_fold(0u32, |value, byte| {
        value
            .checked_mul(10)
            .and_then(|value| value.checked_add(u32::from(byte - b'0')))
            .filter(|&value| value <= PositiveInt::MAX_VALUE)
            .ok_or(ParseError::Overflow)
    })?;

    PositiveInt::new(value).ok_or(ParseError::Zero)
}

/// Parse every token, failing on the first invalid one
pub fn parse_values(tokens: &[String]) -> Result<Vec<PositiveInt>, (usize, ParseError)> {
    tokens
        .iter()
        .enumerate()
        .map(|(index, token)| parse_positive_int(token).map_err(|error| (index, error)))
        .collect()
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;

    use super::*;

    fn parse(token: &str) -> Result<u32, ParseError> {
        parse_positive_int(token).map(PositiveInt::get)
    }

    #[test]
    pub fn accepts() {
        assert_eq!(parse("1"), Ok(1));
        assert_eq!(parse("+42"), Ok(42));
        assert_eq!(parse("2147483647"), Ok(2_147_483_647));
        assert_eq!("17".parse::<PositiveInt>().map(PositiveInt::get), Ok(17));
    }

    #[test]
    pub fn rejects() {
        assert_eq!(parse(""), Err(ParseError::Empty));
        assert_eq!(parse("+"), Err(ParseError::Empty));
        assert_eq!(parse("-3"), Err(ParseError::InvalidDigit));
        assert_eq!(parse("++3"), Err(ParseError::InvalidDigit));
        assert_eq!(parse("1.5"), Err(ParseError::InvalidDigit));
        assert_eq!(parse(" 4"), Err(ParseError::InvalidDigit));
        assert_eq!(parse("abc"), Err(ParseError::InvalidDigit));
        assert_eq!(parse("007"), Err(ParseError::LeadingZero));
        assert_eq!(parse("00"), Err(ParseError::LeadingZero));
        assert_eq!(parse("0"), Err(ParseError::Zero));
        assert_eq!(parse("+0"), Err(ParseError::Zero));
        assert_eq!(parse("2147483648"), Err(ParseError::Overflow));
        assert_eq!(parse("99999999999999999999"), Err(ParseError::Overflow));
    }

    #[test]
    pub fn values() {
        let tokens: Vec<String> = ["3", "5", "1"].map(String::from).into();
        let values = parse_values(&tokens).unwrap();
        assert_eq!(values.iter().map(|value| value.get()).collect::<Vec<_>>(), [3, 5, 1]);

        let tokens: Vec<String> = ["3", "x", "0"].map(String::from).into();
        assert_eq!(parse_values(&tokens), Err((1, ParseError::InvalidDigit)));

        assert_eq!(parse_values(&[]), Ok(Vec::new()));
    }

    #[test]
    pub fn args_sort_mode() {
        let args = Args::try_parse_from(["pmerge", "-o", "jacobsthal", "3", "-4", "5"]).unwrap();

        assert!(args.mode.is_none());
        assert_eq!(args.order, Order::Jacobsthal);
        assert_eq!(args.values, ["3", "-4", "5"]);
        assert_eq!(args.log_level(), log::LevelFilter::Warn);
    }

    #[test]
    pub fn args_options_after_values() {
        let args = Args::try_parse_from(["pmerge", "3", "5", "1", "-v"]).unwrap();

        assert_eq!(args.values, ["3", "5", "1"]);
        assert_eq!(args.log_level(), log::LevelFilter::Info);

        let args =
            Args::try_parse_from(["pmerge", "3", "-4", "--order", "jacobsthal", "-vv"]).unwrap();

        assert_eq!(args.values, ["3", "-4"]);
        assert_eq!(args.order, Order::Jacobsthal);
        assert_eq!(args.log_level(), log::LevelFilter::Debug);

        assert!(Args::try_parse_from(["pmerge", "3", "--unknown"]).is_err());
    }

    #[test]
    pub fn args_bench_mode() {
        let args = Args::try_parse_from([
            "pmerge", "bench", "-vv", "--runs", "5", "--size", "10", "--data", "zipf", "--seed",
            "7",
        ])
        .unwrap();

        let Some(Mode::Bench(ref bench)) = args.mode else {
            panic!("expected bench mode");
        };
        assert_eq!(bench.runs, 5);
        assert_eq!(bench.size, 10);
        assert_eq!(bench.data, DataType::Zipf);
        assert_eq!(bench.order, Order::Sequential);
        assert_eq!(bench.seed, Some(7));
        assert_eq!(bench.output, None);
        assert_eq!(args.log_level(), log::LevelFilter::Debug);
    }
}
