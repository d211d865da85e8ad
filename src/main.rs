//! Command-line front end evaluating a single vector expression.
use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use srcvec::{dispatch, init_logging, OpKind, Value, Vector3};

/// Evaluate `<LHS> <OP> <RHS>` with vector operator semantics
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Left operand: a JSON value (`5`, `[1,2,3]`) or an editor vector (`"1 2 3"`)
    #[arg(allow_hyphen_values = true)]
    lhs: String,

    /// Operator symbol or name: + - * / // % or add sub mul truediv floordiv mod
    op: String,

    /// Right operand, in the same forms as the left
    #[arg(allow_hyphen_values = true)]
    rhs: String,
}

/// Interpret a command-line operand.
///
/// JSON is tried first so numbers and arrays keep their dynamic type; text
/// that reads as three numbers becomes a vector; anything else stays text and
/// is rejected by the dispatcher.
fn parse_operand(raw: &str) -> Value {
    if let Ok(value) = serde_json::from_str::<Value>(raw) {
        return value;
    }
    raw.parse::<Vector3>()
        .map_or_else(|_| Value::Text(raw.to_owned()), Value::Vector)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let op: OpKind = args.op.parse().context("parsing operator")?;
    let lhs = parse_operand(&args.lhs);
    let rhs = parse_operand(&args.rhs);
    debug!("evaluating {lhs:?} {op} {rhs:?}");

    let result = dispatch(op, &lhs, &rhs)
        .with_context(|| format!("evaluating {} {op} {}", args.lhs, args.rhs))?;
    println!("{result}");
    Ok(())
}
