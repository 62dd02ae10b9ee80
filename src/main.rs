use std::{fs::read_to_string, path::PathBuf, process, time::Instant};

use clap::Parser;
use grant::{display_error, lexer::lexer::tokenize};

/// Tokenize a grant source file and print the token stream.
#[derive(Parser, Debug)]
#[command(name = "grant", version)]
struct Args {
    /// Source file to tokenize
    file: PathBuf,

    /// Print tokens as JSON instead of one per line
    #[arg(long)]
    json: bool,

    /// Report how long tokenizing took
    #[arg(long)]
    time: bool,
}

fn main() {
    let args = Args::parse();

    let file_name = args
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());

    let file_contents = match read_to_string(&args.file) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!("Failed to read {}: {}", args.file.display(), err);
            process::exit(1);
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(&file_contents, file_name) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error);
            process::exit(1);
        }
    };

    if args.time {
        eprintln!("Tokenized in {:?}", start.elapsed());
    }

    if args.json {
        match serde_json::to_string_pretty(&tokens) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("Failed to serialize tokens: {}", err);
                process::exit(1);
            }
        }
    } else {
        for token in &tokens {
            token.debug();
        }
    }
}
