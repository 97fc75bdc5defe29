//! `zhuanc` — the command-line front-end for the `zhuan` translator. It
//! owns file I/O and terminal reporting only; the pipeline itself lives in
//! the library crate.

mod cli;

use std::process::ExitCode;
use std::{fs, path::Path};

use log::{error, info};

use cli::{Cli, CheckArgs, Commands, CompileArgs};
use zhuan::error::CompileError;

fn main() -> ExitCode {
    let args = Cli::init();
    simple_logger::init_with_level((&args.verbosity).into()).unwrap();

    let result = match args.command {
        Commands::Compile(args) => run_compile(&args),
        Commands::Check(args) => run_check(&args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run_compile(args: &CompileArgs) -> Result<(), CompileError> {
    let source = read_source(&args.input)?;

    if args.show_tokens {
        let tokens = zhuan::tokens_of(&source)?;
        println!("{}", serde_json::to_string_pretty(&tokens).unwrap());
    }

    if args.show_ast {
        let program = zhuan::ast_of(&source)?;
        println!("{program:#?}");
    }

    let solidity = zhuan::compile(&source)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &solidity).map_err(io_error)?;
            info!("wrote {}", path.display());
        }
        None => print!("{solidity}"),
    }

    Ok(())
}

fn run_check(args: &CheckArgs) -> Result<(), CompileError> {
    let source = read_source(&args.input)?;
    zhuan::ast_of(&source)?;
    info!("{} is syntactically valid", args.input.display());
    Ok(())
}

fn read_source(path: &Path) -> Result<String, CompileError> {
    fs::read_to_string(path).map_err(io_error)
}

/// File I/O failures have no source position to report; they are surfaced
/// the same way a `CodeGenError` without one would be.
fn io_error(err: std::io::Error) -> CompileError {
    CompileError::CodeGen(zhuan::error::CodeGenError {
        message: err.to_string(),
        position: None,
    })
}
