//! Subex CLI
//!
//! Evaluates arithmetic expressions with scalar and array variables.

use subexc::commands::{
    eval_expression, explain_error, parse_options, print_symbols, run_batch, EvalOptions,
};

fn main() {
    subexc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "eval" => {
            let (expression, options) = expect_one_positional(&args[2..], "eval <expression>");
            eval_expression(&expression, &options);
        }
        "symbols" => {
            let (expression, options) =
                expect_one_positional(&args[2..], "symbols <expression>");
            print_symbols(&expression, &options);
        }
        "batch" => {
            let (path, options) = expect_one_positional(&args[2..], "batch <file>");
            run_batch(&path, &options);
        }
        "explain" | "--explain" => {
            if args.len() < 3 {
                eprintln!("Usage: subex explain <ERROR_CODE>");
                eprintln!("Example: subex explain E2003");
                std::process::exit(1);
            }
            explain_error(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("subex {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

/// Parse options and require exactly one positional argument.
fn expect_one_positional(args: &[String], usage: &str) -> (String, EvalOptions) {
    let (mut positional, options) = match parse_options(args) {
        Ok(parsed) => parsed,
        Err(msg) => {
            eprintln!("error: {msg}");
            eprintln!("Usage: subex {usage} [options]");
            std::process::exit(1);
        }
    };

    if positional.len() != 1 {
        eprintln!("Usage: subex {usage} [options]");
        eprintln!();
        eprintln!("Run `subex help` for the list of options.");
        std::process::exit(1);
    }

    (positional.remove(0), options)
}

fn print_usage() {
    println!("Subex - arithmetic expression evaluator");
    println!();
    println!("Usage: subex <command> [options]");
    println!();
    println!("Commands:");
    println!("  eval <expression>    Evaluate an expression and print the result");
    println!("  symbols <expression> List the scalars and arrays in an expression");
    println!("  batch <file>         Evaluate every line of a file");
    println!("  explain <code>       Explain an error code (e.g., E2003)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --values=<file>      Value records: `name value` or `name count (i,v) ...`");
    println!("  --max-depth=<n>      Deepest nesting of groups and subscripts (default: 256)");
    println!("  --show-substituted   Print the expression with scalar values filled in");
    println!();
    println!("Examples:");
    println!("  subex eval \"a - varx + arrayA[2]\" --values=values.txt");
    println!("  subex symbols \"A[i] * x\"");
    println!("  subex batch exprs.txt --values=values.txt");
    println!("  subex explain E2005");
    println!();
    println!("Set RUST_LOG=subex_eval=trace to trace evaluation.");
}
