//! Whitespace command-line front end.
//!
//! This binary drives one VM per invocation. It provides:
//! 1. **Batch run:** Load a source file once and run it against stdin/stdout.
//! 2. **REPL:** Feed source line by line into a persistent session, running each completed chunk.
//! 3. **Disassembly:** Print the decoded program with segment and offset of every instruction.

mod console;

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::{fs, process};

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;

use wspace_core::isa::disasm::disassemble;
use wspace_core::{CancelToken, Config, LoadError, Vm};

use crate::console::{Console, visualize};

#[derive(Parser, Debug)]
#[command(
    name = "wspace",
    author,
    version,
    about = "Whitespace interpreter",
    long_about = "Run, explore or disassemble Whitespace programs.\n\nExamples:\n  wspace run hello.ws\n  wspace repl\n  wspace --trace run loop.ws\n  wspace disasm hello.ws"
)]
struct Cli {
    /// JSON configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit a trace event for every executed instruction.
    #[arg(long, global = true)]
    trace: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load a program and run it to completion.
    Run {
        /// Whitespace source file.
        file: PathBuf,
    },

    /// Interactive session; `:state`, `:program` and `:quit` are meta commands.
    Repl,

    /// Print the decoded program.
    Disasm {
        /// Whitespace source file.
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => {
            Config::from_file(path).unwrap_or_else(|e| fail(&format!("{}: {e}", path.display())))
        }
        None => Config::default(),
    };
    if cli.trace {
        config.general.trace_instructions = true;
    }
    init_tracing(&config);

    match &cli.command {
        Commands::Run { file } => cmd_run(file, &config),
        Commands::Repl => cmd_repl(&config),
        Commands::Disasm { file } => cmd_disasm(file),
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins over the configured filter.
fn init_tracing(config: &Config) {
    let mut filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_filter));
    let trace = config
        .general
        .trace_instructions
        .then(|| "wspace_core=trace".parse::<Directive>())
        .and_then(Result::ok);
    if let Some(directive) = trace {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn fail(message: &str) -> ! {
    eprintln!("{message}");
    process::exit(1);
}

fn read_source(file: &Path) -> Vec<u8> {
    fs::read(file).unwrap_or_else(|e| fail(&format!("{}: {e}", file.display())))
}

/// Loads `file` in one segment and runs it against the process's stdin/stdout.
fn cmd_run(file: &Path, config: &Config) {
    let code = read_source(file);
    let mut vm = Vm::from_config(config);

    if let Err(failure) = vm.load(&code).into_result() {
        fail(&format!("{}:{}: {}", file.display(), failure.offset, failure.error));
    }
    debug!(file = %file.display(), instructions = vm.program.len(), "program loaded");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = BufWriter::new(io::stdout().lock());

    let result = vm.run(&CancelToken::new(), &mut input, &mut output);
    let flushed = output.flush();

    if let Err(e) = result {
        let (offset, name) = vm
            .current_instruction()
            .map_or((0, "?"), |inst| (inst.offset, inst.command.name()));
        fail(&format!("{}:{offset}: {name}: {e}", file.display()));
    }
    if let Err(e) = flushed {
        fail(&format!("stdout: {e}"));
    }
    if !vm.terminated {
        fail("program is not terminated");
    }
}

/// Loads `file` and prints its disassembly.
fn cmd_disasm(file: &Path) {
    let code = read_source(file);
    let mut vm = Vm::new();

    if let Err(failure) = vm.load(&code).into_result() {
        fail(&format!("{}:{}: {}", file.display(), failure.offset, failure.error));
    }
    print!("{}", disassemble(vm.program.as_slice()));
}

/// What a REPL line asked for.
enum Meta {
    State,
    Program,
    Quit,
    Unknown(String),
}

/// Recognizes `:command` lines. Anything else is source.
fn parse_meta(line: &[u8]) -> Option<Meta> {
    let text = std::str::from_utf8(line).ok()?.trim();
    let name = text.strip_prefix(':')?;
    Some(match name {
        "state" => Meta::State,
        "program" => Meta::Program,
        "quit" | "q" => Meta::Quit,
        other => Meta::Unknown(other.to_owned()),
    })
}

/// Prompt for the next REPL line.
fn prompt(config: &Config, segment: u32, pending: &[u8]) -> String {
    let suffix = if pending.is_empty() {
        &config.repl.prompt
    } else {
        &config.repl.continuation_prompt
    };
    if config.repl.show_pending {
        format!("[{segment}]{}{suffix}", visualize(pending))
    } else {
        suffix.clone()
    }
}

/// Interactive session over stdin/stdout.
///
/// Source and program input share stdin, one line at a time. A line read by
/// `ReadChar` or `ReadNum` belongs to the program: what the program leaves
/// of it is kept for its next read and never parsed as source. The session
/// ends at end of input, on `:quit`, or once the program executes `End`.
fn cmd_repl(config: &Config) {
    let mut vm = Vm::from_config(config);
    let mut console = Console::new(io::stdin().lock());
    let mut output = io::stdout().lock();
    let mut pending: Vec<u8> = Vec::new();

    while !vm.terminated {
        let text = prompt(config, vm.program.segment(), &pending);
        if write!(output, "{text}").and_then(|()| output.flush()).is_err() {
            break;
        }

        let mut line = Vec::new();
        match console.read_source_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => fail(&format!("stdin: {e}")),
        }

        let meta = if pending.is_empty() {
            parse_meta(&line)
        } else {
            None
        };
        if let Some(meta) = meta {
            match meta {
                Meta::State => print!("{}", vm.state()),
                Meta::Program => print!("{}", disassemble(vm.program.as_slice())),
                Meta::Quit => break,
                Meta::Unknown(name) => eprintln!("unknown command :{name}"),
            }
            continue;
        }

        pending.extend_from_slice(&line);
        let before = vm.program.len();
        let outcome = vm.load(&pending);

        if config.repl.show_segments && outcome.consumed > 0 {
            println!("[segment {}]", outcome.segment);
        }
        match outcome.result {
            Ok(()) => pending.clear(),
            Err(LoadError::IncompleteCode) => {
                let _ = pending.drain(..outcome.consumed);
            }
            Err(error) => {
                eprintln!("{}:{}: {error}", outcome.segment, outcome.consumed);
                pending.clear();
                vm.reset_control();
                continue;
            }
        }

        if vm.program.len() == before {
            continue;
        }
        if let Err(e) = vm.run(&CancelToken::new(), &mut console, &mut output) {
            match vm.current_instruction() {
                Some(inst) => eprintln!("{inst}: {e}"),
                None => eprintln!("{e}"),
            }
            vm.reset_control();
        }
        let _ = output.flush();
    }

    if !pending.is_empty() {
        eprintln!("discarding {} byte(s) of incomplete input", pending.len());
    }
}
