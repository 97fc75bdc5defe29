//! CLI argument parsing for `zhuanc`, the command-line front-end around
//! the `zhuan` library's `compile`/`tokens_of`/`ast_of` pipeline.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Specify the log level of the compiler.
    #[arg(value_enum, short, long, default_value_t = LogLevel::default())]
    pub verbosity: LogLevel,
}

impl Cli {
    pub fn init() -> Self {
        Cli::parse()
    }
}

#[derive(ValueEnum, Clone, Default, Debug)]
pub enum LogLevel {
    #[default]
    #[value(alias("0"))]
    Error,
    #[value(alias("1"))]
    Warn,
    #[value(alias("2"))]
    Info,
    #[value(alias("3"))]
    Debug,
    #[value(alias("4"))]
    Trace,
}

impl From<&LogLevel> for log::Level {
    fn from(value: &LogLevel) -> Self {
        match value {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Translate a `.zhs` source file into Solidity.
    Compile(CompileArgs),

    /// Parse a `.zhs` source file without emitting output, reporting only
    /// the first lexical or syntactic error.
    Check(CheckArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CompileArgs {
    /// The path to the `.zhs` source file.
    #[arg(index = 1)]
    pub input: PathBuf,

    /// The path to write the generated Solidity to. Defaults to stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the lexer's token stream before compiling.
    #[arg(long)]
    pub show_tokens: bool,

    /// Print the parsed AST before compiling.
    #[arg(long)]
    pub show_ast: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// The path to the `.zhs` source file.
    #[arg(index = 1)]
    pub input: PathBuf,
}
