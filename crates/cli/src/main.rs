//! LS-8 command-line runner.
//!
//! Loads a program image and runs it until `HLT`. It performs:
//! 1. **Load:** Parses the image file; malformed lines stop the run before it starts.
//! 2. **Run:** Executes with `PRN` output on stdout and optional tracing on stderr.
//! 3. **Report:** On a fault, prints the fault, the faulting instruction and the
//!    machine state, and exits with status 1.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ls8_core::config::{Config, ConfigError};
use ls8_core::isa::disasm;
use ls8_core::sim::{LoadError, Simulator, loader};

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    author,
    version,
    about = "Run an LS-8 program image",
    long_about = "Run an LS-8 program image until it halts.\n\nThe image holds one byte per line as eight binary digits; '#' starts a comment.\n\nExamples:\n  ls8 programs/print8.ls8\n  ls8 --trace --max-steps 1000 programs/call.ls8"
)]
struct Cli {
    /// Program image to run.
    program: PathBuf,

    /// Print a trace line for every instruction to stderr.
    #[arg(long)]
    trace: bool,

    /// Fail if the program has not halted after this many instructions.
    #[arg(long, value_name = "N")]
    max_steps: Option<u64>,

    /// JSON configuration file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print run statistics to stderr after the run.
    #[arg(long)]
    stats: bool,
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[!] FATAL: {e}");
            return ExitCode::FAILURE;
        }
    };

    let program = match loader::load_program_file(&cli.program) {
        Ok(program) => program,
        Err(e) => return report_load_error(&e),
    };

    cmd_run(&config, &program, cli.stats)
}

/// Installs the stderr log subscriber; `RUST_LOG` overrides the `warn` default.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Reads the config file, if any, and applies command-line overrides.
fn build_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if cli.trace {
        config.general.trace_instructions = true;
    }
    if cli.max_steps.is_some() {
        config.general.max_steps = cli.max_steps;
    }
    Ok(config)
}

fn report_load_error(e: &LoadError) -> ExitCode {
    eprintln!("[!] FATAL: {e}");
    ExitCode::FAILURE
}

/// Runs a loaded program to completion.
///
/// On a fault, prints the fault, the instruction at the faulting PC and a
/// state dump to stderr, and returns a failure status.
fn cmd_run(config: &Config, program: &[u8], show_stats: bool) -> ExitCode {
    let mut sim = Simulator::new(config);
    if let Err(e) = sim.load(program) {
        return report_load_error(&e);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = sim.run(&mut out);
    let _ = out.flush();

    let code = match result {
        Ok(steps) => {
            tracing::info!(steps, "program halted");
            ExitCode::SUCCESS
        }
        Err(fault) => {
            let stderr = io::stderr();
            let mut err = stderr.lock();
            let _ = writeln!(err, "\n[!] FATAL: {fault}");
            if let Some(pc) = fault.pc() {
                let memory = sim.cpu.memory.as_slice();
                let (text, width) = memory.get(pc..).map_or_else(
                    || (String::new(), 0),
                    disasm::disassemble,
                );
                if width > 0 {
                    let _ = writeln!(err, "    at {pc:02X}: {text}");
                }
            }
            let _ = sim.cpu.dump_state(&mut err);
            ExitCode::FAILURE
        }
    };

    if show_stats {
        sim.stats.print();
    }
    code
}
