//! # alanc
//!
//! The `alanc` binary wires the `alanc` library's pipeline — parse, analyze, emit —
//! to a command line: a program is read either from a named file or from standard
//! input, and the resulting LLVM IR module is written to standard output (or to a
//! file named with `-o`).
extern crate alanc;
extern crate pest;

use std::io::{Read, Write};
use std::path::PathBuf;

use clap::{Parser as CParser, ValueEnum};
use inkwell::context::Context;

use alanc::diagnostics::Diagnostics;

#[derive(CParser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Alan source file to compile. Omit, or pass "-", to read from standard input;
    /// in that case the emitted module is named "stdin".
    #[arg(index = 1)]
    file: Option<PathBuf>,

    /// Log level for compiler diagnostics below the fatal-error threshold.
    #[arg(value_enum, short, long, default_value_t = LogLevel::default())]
    verbosity: LogLevel,

    /// Where to write the emitted LLVM IR. Defaults to standard output.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the parsed AST (debug representation) to stderr and exit without
    /// running semantic analysis.
    #[arg(long)]
    dump_ast: bool,

    /// Print the type-annotated AST (debug representation) to stderr and exit
    /// without emitting IR.
    #[arg(long)]
    dump_typed: bool,
}

#[derive(ValueEnum, Clone, Copy, Default, Debug)]
enum LogLevel {
    #[default]
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

fn main() {
    let args = Cli::parse();
    simple_logger::init_with_level(args.verbosity.into()).ok();

    let read_stdin = match &args.file {
        None => true,
        Some(p) => p.as_os_str() == "-",
    };
    let (source, module_name, diag_name) = if read_stdin {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source).unwrap_or_else(|e| {
            log::error!("could not read standard input: {e}");
            std::process::exit(1);
        });
        (source, "stdin".to_string(), "stdin".to_string())
    } else {
        let path = args.file.clone().unwrap();
        let source = std::fs::read_to_string(&path).unwrap_or_else(|e| {
            log::error!("could not read '{}': {e}", path.display());
            std::process::exit(1);
        });
        let module_name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "a".to_string());
        (source, module_name, path.display().to_string())
    };

    let diagnostics = Diagnostics::new(diag_name);

    if args.dump_ast {
        let ast = alanc::parse_only(&source, &diagnostics);
        eprintln!("{ast:#?}");
        std::process::exit(if diagnostics.had_error() { 1 } else { 0 });
    }

    if args.dump_typed {
        let mut ast = alanc::parse_only(&source, &diagnostics);
        alanc::semantic::analyze(&mut ast, &diagnostics);
        eprintln!("{ast:#?}");
        std::process::exit(if diagnostics.had_error() { 1 } else { 0 });
    }

    let context = Context::create();
    let module = alanc::compile(&source, &context, &module_name, &diagnostics);

    if diagnostics.had_error() || module.is_none() {
        std::process::exit(1);
    }
    let ir = module.unwrap().print_to_string().to_string();

    match args.output {
        Some(path) => {
            std::fs::write(&path, ir).unwrap_or_else(|e| {
                log::error!("could not write '{}': {e}", path.display());
                std::process::exit(1);
            });
        }
        None => {
            let mut stdout = std::io::stdout();
            stdout.write_all(ir.as_bytes()).ok();
        }
    }
}
