//! Tally CLI
//!
//! Drives one calculator session from the terminal: either a token
//! sequence on the command line (`tally eval 5 + 2 =`) or a
//! line-oriented REPL.

use std::io::{self, BufRead, Write};

use tally::token::parse_line;
use tally_eval::Calculator;

fn main() {
    tally::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("eval") => {
            if args.len() < 3 {
                eprintln!("Usage: tally eval <tokens...>");
                eprintln!();
                eprintln!("Example: tally eval 5 + 2 x 3 =");
                std::process::exit(1);
            }
            let line = args[2..].join(" ");
            eval_line(&line);
        }
        Some("repl") | None => repl(),
        Some("help" | "--help" | "-h") => print_usage(),
        Some(other) => {
            eprintln!("error: unknown command `{other}`");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

/// Applies one token line to a fresh session and prints the result.
fn eval_line(line: &str) {
    let keys = match parse_line(line) {
        Ok(keys) => keys,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let mut calc = Calculator::new();
    for key in keys {
        calc.apply(key);
    }

    let view = calc.view();
    println!("{}", view.display_text);
    if view.is_error {
        std::process::exit(1);
    }
}

/// Line-oriented REPL: one token line in, the display out.
fn repl() {
    println!("tally — type key tokens separated by spaces; :q to quit");
    let stdin = io::stdin();
    let mut calc = Calculator::new();

    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == ":q" || line == "quit" {
            break;
        }

        match parse_line(line) {
            Ok(keys) => {
                for key in keys {
                    calc.apply(key);
                }
                print_view(&calc);
            }
            Err(err) => eprintln!("error: {err}"),
        }
    }
}

fn print_view(calc: &Calculator) {
    let view = calc.view();
    let mut flags = String::new();
    flags.push_str(view.angle_mode.label());
    if view.inverse_active {
        flags.push_str(" INV");
    }
    if view.has_memory {
        flags.push_str(" M");
    }
    if view.history.is_empty() {
        println!("[{flags}] {}", view.display_text);
    } else {
        println!("[{flags}] {}  ({})", view.display_text, view.history);
    }
}

fn print_usage() {
    println!("Usage: tally [command]");
    println!();
    println!("Commands:");
    println!("  eval <tokens...>   Apply a key sequence, print the final display");
    println!("  repl               Interactive session (default)");
    println!("  help               Show this message");
    println!();
    println!("Key tokens:");
    println!("  numerals           203.5, -7 (entered digit by digit)");
    println!("  operators          + - * / ^ (and − × ÷), = to commit");
    println!("  editing            . neg back clear ee");
    println!("  functions          sqr cube sqrt cbrt recip abs % ! exp exp10");
    println!("                     ln log sin cos tan asin acos atan");
    println!("  constants          pi e");
    println!("  toggles            drg (DEG/RAD), inv (inverse functions)");
    println!("  memory             mc mr ms m+ m-");
}
