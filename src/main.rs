use std::{fs,
          io::{self, BufRead}};

use clap::Parser;
use varith::{interpreter::session::Session, run_script};

/// varith is an easy to use, command driven calculator with variables and
/// derived functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells varith to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// The command script to run. Commands are read from standard input when
    /// this is omitted.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        run_interactive();
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    let stdout = io::stdout();
    if let Err(e) = run_script(&script, &mut stdout.lock()) {
        eprintln!("{e}");
    }
}

/// Handles commands from standard input until end of input.
fn run_interactive() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("{e}");
                break;
            },
        };
        if let Err(e) = session.handle_line(&line) {
            eprintln!("{e}");
            break;
        }
    }
}
