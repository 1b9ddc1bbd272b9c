//! The `explain` command: display documentation for error codes.

use subex_eval::ErrorCode;

/// Display the explanation for a given error code string.
pub fn explain_error(code_str: &str) {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format EXXXX where X is a digit.");
        eprintln!("E1xxx codes are value record errors, E2xxx are evaluation errors.");
        std::process::exit(1);
    };

    println!("{code}: {}", code.explanation());
}
