use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

use digparse::DigParser;

fn run() -> Result<(), Box<dyn Error>> {
    let parser = DigParser::new();
    let stdin = io::stdin();
    let messages = match std::env::args().nth(1) {
        Some(path) => parser.parse_reader(BufReader::new(File::open(path)?))?,
        None => parser.parse_reader(stdin.lock())?,
    };

    for message in &messages {
        println!("{}", message);
    }
    println!(
        ";; {} message(s), {} answer(s)",
        messages.len(),
        messages.iter().map(|m| m.answers.len()).sum::<usize>()
    );
    Ok(())
}

pub fn main() {
    let mut builder = env_logger::Builder::new();
    builder.parse_filters("digparse=info");
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();

    if let Err(err) = run() {
        eprintln!("error: {}", err);
        let mut source = err.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {}", cause);
            source = cause.source();
        }
        process::exit(1);
    }
}
