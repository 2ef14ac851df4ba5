extern crate clap;
extern crate thiserror;

pub mod codegen;
pub mod lexer;

use std::time::Instant;

use clap::Parser;
use colored::Colorize;

use crate::{codegen::codegen::emit_program, lexer::lexer::Lexer};

/// Brainf**k to x86-64 NASM translator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The brainf**k source file to translate
    #[arg()]
    file: String,

    /// Where to write the generated assembly (defaults to 'out.asm')
    #[arg()]
    output: Option<String>,
}

fn main() -> Result<(), ()> {
    let args = Args::parse();
    let output = args.output.unwrap_or_else(|| {
        println!(
            "{} No output file specified, using 'out.asm'",
            "Warning:".yellow()
        );
        String::from("out.asm")
    });

    println!("Translating {}", args.file);

    let text = std::fs::read_to_string(&args.file).map_err(|e| {
        eprintln!("{} Failed to open input file: {}", "Error:".red(), e);
    })?;

    println!("{}", "Starting lexing".blue());
    let now = Instant::now();
    let instructions = Lexer::new(&text).collect_instructions();
    println!("{} {:.2?}", "Finished lexing in".green(), now.elapsed());

    println!("{}", "Starting codegen".blue());
    let now = Instant::now();
    let program = emit_program(&instructions).map_err(|e| {
        eprintln!("{} {}", "Error:".red(), e);
    })?;
    println!("{} {:.2?}", "Finished codegen in".green(), now.elapsed());

    std::fs::write(&output, program).map_err(|e| {
        eprintln!("{} Failed to write output file: {}", "Error:".red(), e);
    })?;
    println!("{} {}", "Wrote".green(), output);

    Ok(())
}
