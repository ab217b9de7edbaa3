//! Demo console binary: registers a couple of sample commands and runs the
//! interactive loop.

use std::io::Write;
use std::process;

use anyhow::bail;
use clap::Parser;
use colored::Colorize;

use rigel::analysis::AnalysisCase;
use rigel::{Command, Flow, shell};

#[derive(Parser, Debug)]
#[command(about = "Rigel: an interactive command console", version)]
struct Cli {
    /// Prompt printed before each input line
    #[clap(long, default_value = shell::PROMPT)]
    prompt: String,
}

fn main() {
    #[cfg(debug_assertions)]
    {
        tracing::subscriber::set_global_default(
            tracing_subscriber::fmt()
                .with_max_level(tracing::Level::INFO)
                .finish(),
        )
        .unwrap();
    }

    let cli = Cli::parse();

    let commands = vec![
        Command::new("echo", "print the arguments back", |args, out| {
            writeln!(out, "{}", args.join(" "))?;
            Ok(Flow::Continue)
        }),
        Command::new("case", "parse an analysis case (avg|best|worst)", |args, out| {
            let Some(raw) = args.first() else {
                bail!("expected one of avg, best, worst");
            };
            let case: AnalysisCase = raw.parse()?;
            writeln!(out, "selected the {} case", case)?;
            Ok(Flow::Continue)
        }),
    ];

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    match shell::run_with(commands, &cli.prompt, stdin.lock(), stdout.lock()) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("{}", format!("fatal: {}", e).red());
            process::exit(1);
        }
    }
}
