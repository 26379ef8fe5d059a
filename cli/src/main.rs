use std::process;

use clap::Parser;
use owo_colors::OwoColorize;

mod render;
mod repl;

/// sysexits.h: command line usage error
const EX_USAGE: i32 = 64;
/// sysexits.h: input data was incorrect
const EX_DATAERR: i32 = 65;

#[derive(Parser)]
#[command(name = "loxscan", about = "Print the token stream of a Lox script")]
struct Cli {
    /// Path to a .lox file to scan
    scripts: Vec<String>,
    /// Scan inline Lox source instead of a file
    #[arg(long, conflicts_with = "scripts")]
    eval: Option<String>,
    /// Render errors with the offending source labelled
    #[arg(long)]
    pretty: bool,
    /// Print version and exit
    #[arg(long)]
    version: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.version {
        println!(
            "{} {}",
            "loxscan".bright_cyan().bold(),
            env!("CARGO_PKG_VERSION").bright_black()
        );
        return;
    }

    if cli.scripts.len() > 1 {
        println!("Usage: loxscan [script]");
        process::exit(EX_USAGE);
    }

    let (name, source, result) = if let Some(code) = cli.eval {
        let result = loxscan::run(&code);
        ("<eval>".to_string(), code, result)
    } else if let Some(path) = cli.scripts.into_iter().next() {
        match loxscan::run_file(&path) {
            Ok((source, result)) => (path, source, result),
            Err(err) => {
                eprintln!("{} {err}", "error:".red().bold());
                process::exit(1);
            }
        }
    } else {
        if let Err(err) = repl::run(cli.pretty) {
            eprintln!("{} {err}", "repl error:".red().bold());
            process::exit(1);
        }
        return;
    };

    render::print_tokens(&result.tokens);
    render::print_errors(&name, &source, &result.diagnostics, cli.pretty);

    if result.had_error() {
        process::exit(EX_DATAERR);
    }
}
