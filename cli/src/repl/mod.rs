mod completer;
mod helper;
mod highlighter;

use owo_colors::OwoColorize;
use rustyline::error::ReadlineError;
use rustyline::{Config, EditMode, Editor};

use self::helper::ReplHelper;
use crate::render;

/// Read one line at a time and print its tokens. Errors never carry over
/// from one line to the next.
pub fn run(pretty: bool) -> rustyline::Result<()> {
    let config = Config::builder()
        .history_ignore_dups(true)?
        .completion_type(rustyline::CompletionType::List)
        .edit_mode(EditMode::Emacs)
        .build();

    let mut rl: Editor<ReplHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(config)?;
    rl.set_helper(Some(ReplHelper));

    println!(
        "{} {}",
        "loxscan".bright_cyan().bold(),
        env!("CARGO_PKG_VERSION").bright_black()
    );
    println!("{}", "Type .help for REPL commands".bright_black());

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let trimmed = line.trim();
                match handle_command(trimmed, pretty) {
                    Command::Exit => break,
                    Command::Handled => continue,
                    Command::NotACommand => {}
                }

                if !trimmed.is_empty() {
                    let _ = rl.add_history_entry(trimmed);
                }
                scan_snippet("<repl>", &line, pretty);
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".yellow());
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err),
        }
    }

    Ok(())
}

enum Command {
    Exit,
    Handled,
    NotACommand,
}

fn handle_command(trimmed: &str, pretty: bool) -> Command {
    if trimmed == ".exit" {
        return Command::Exit;
    }
    if trimmed == ".help" {
        println!("{}", ".help                show commands".bright_blue());
        println!("{}", ".load <file.lox>     scan a whole file".bright_blue());
        println!("{}", ".exit                exit REPL".bright_blue());
        return Command::Handled;
    }
    if let Some(path) = trimmed.strip_prefix(".load ") {
        let path = path.trim();
        match loxscan::run_file(path) {
            Ok((source, result)) => {
                render::print_tokens(&result.tokens);
                render::print_errors(path, &source, &result.diagnostics, pretty);
            }
            Err(err) => eprintln!("{} {err}", "load error:".red().bold()),
        }
        return Command::Handled;
    }
    Command::NotACommand
}

fn scan_snippet(name: &str, source: &str, pretty: bool) {
    let result = loxscan::run(source);
    render::print_tokens(&result.tokens);
    render::print_errors(name, source, &result.diagnostics, pretty);
}
