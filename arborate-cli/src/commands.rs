//! CLI command implementations.

use arborate_cli::catalog::{self, ProgramSpec};
use arborate_common::VmValue;
use arborate_vm::{ExecutionLimits, Machine};

/// Print every catalog program with its intent.
pub fn list(args: &[String]) -> Result<(), i32> {
    if !args.is_empty() {
        eprintln!("error: list takes no arguments");
        eprintln!("Usage: arborate list");
        return Err(1);
    }

    for spec in catalog::all_programs() {
        println!("{:<16}{}", spec.name, spec.intent);
    }
    Ok(())
}

/// Validate a catalog program and report every violation.
pub fn verify(args: &[String]) -> Result<(), i32> {
    let spec = lookup(args, "verify")?;

    let errors = arborate_validator::diagnose(&spec.functions);
    if errors.is_empty() {
        println!("OK: {} ({} functions)", spec.name, spec.functions.len());
        return Ok(());
    }
    for e in &errors {
        eprintln!("error: {e}");
    }
    Err(2)
}

/// Validate and execute a catalog program.
pub fn run(args: &[String]) -> Result<(), i32> {
    let spec = lookup(args, "run")?;
    let options = RunOptions::parse(&args[1..]).map_err(|msg| {
        eprintln!("error: {msg}");
        eprintln!("Usage: arborate run <name> [--entry N] [--max-depth N] [--max-stack N] [ARG...]");
        1
    })?;

    let machine = Machine::new(spec.functions)
        .map_err(|e| {
            eprintln!("error: {e}");
            2
        })?
        .with_limits(options.limits);

    log::info!(
        "running {} from function {} with {} argument(s)",
        spec.name,
        options.entry,
        options.args.len()
    );
    match machine.execute_function(options.entry, options.args) {
        Ok(values) => {
            for value in values {
                println!("{value}");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("runtime error: {e}");
            Err(3)
        }
    }
}

/// Find the program named by the first argument.
fn lookup(args: &[String], command: &str) -> Result<ProgramSpec, i32> {
    let Some(name) = args.first() else {
        eprintln!("error: {command} requires a program name");
        eprintln!("Usage: arborate {command} <name>");
        return Err(1);
    };

    catalog::find(name).ok_or_else(|| {
        eprintln!("error: unknown program '{name}' (see 'arborate list')");
        1
    })
}

#[derive(Debug, PartialEq)]
struct RunOptions {
    entry: usize,
    limits: ExecutionLimits,
    args: Vec<VmValue>,
}

impl RunOptions {
    fn parse(args: &[String]) -> Result<Self, String> {
        let mut options = RunOptions {
            entry: 0,
            limits: ExecutionLimits::default(),
            args: Vec::new(),
        };

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--entry" => options.entry = flag_value(arg, iter.next())?,
                "--max-depth" => {
                    let depth = flag_value(arg, iter.next())?;
                    options.limits = options.limits.with_max_call_depth(depth);
                }
                "--max-stack" => {
                    let depth = flag_value(arg, iter.next())?;
                    options.limits = options.limits.with_max_stack_depth(depth);
                }
                flag if flag.starts_with("--") => return Err(format!("unknown option '{flag}'")),
                value => options.args.push(parse_value(value)?),
            }
        }

        Ok(options)
    }
}

fn flag_value(flag: &str, value: Option<&String>) -> Result<usize, String> {
    let value = value.ok_or_else(|| format!("{flag} requires a value"))?;
    value
        .parse()
        .map_err(|_| format!("{flag} expects a non-negative integer, got '{value}'"))
}

fn parse_value(text: &str) -> Result<VmValue, String> {
    match text {
        "true" => Ok(VmValue::Boolean(true)),
        "false" => Ok(VmValue::Boolean(false)),
        _ => text
            .parse::<i64>()
            .map(VmValue::Integer)
            .map_err(|_| format!("'{text}' is not true, false or an integer")),
    }
}
