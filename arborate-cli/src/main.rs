//! Arborate CLI: list, verify and run catalog programs.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Usage error
//! - 2: Validation failure
//! - 3: Runtime error

mod commands;

use std::process;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "list" => commands::list(&args[2..]),
        "verify" => commands::verify(&args[2..]),
        "run" => commands::run(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            process::exit(0);
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            process::exit(1);
        }
    };

    if let Err(code) = result {
        process::exit(code);
    }
}

fn print_usage() {
    eprintln!("Usage: arborate <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  list                                   List catalog programs");
    eprintln!("  verify <name>                          Report every validation error");
    eprintln!("  run <name> [options] [ARG...]          Validate and execute a program");
    eprintln!();
    eprintln!("Run options:");
    eprintln!("  --entry N        Entry function index (default 0)");
    eprintln!("  --max-depth N    Call frame limit (default 1024)");
    eprintln!("  --max-stack N    Operand stack limit (default 4096)");
    eprintln!();
    eprintln!("ARG is true, false or a decimal integer, pushed in order.");
}
