//! MIPS pipeline timing simulator CLI.
//!
//! This binary provides a single entry point for running programs. It performs:
//! 1. **Program run:** Load a hex-word program, simulate to halt or a cycle bound, report stats.
//! 2. **Config check:** Validate a JSON configuration file and echo the effective settings.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use mipsim_core::Simulator;
use mipsim_core::common::SimError;
use mipsim_core::config::Config;
use mipsim_core::sim::loader;
use mipsim_core::soc::MainMemory;

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    author,
    version,
    about = "Cycle-accurate five-stage MIPS pipeline simulator",
    long_about = "Run a MIPS program (one hex word per line) through the pipeline model and report timing statistics.\n\nExamples:\n  sim run -f programs/fib.x\n  sim run -f programs/fib.x --config cfg.json --stats-json\n  sim check-config cfg.json"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program until it halts.
    Run {
        /// Program file: one 32-bit hex word per line.
        #[arg(short, long)]
        file: PathBuf,

        /// JSON configuration; built-in defaults otherwise.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Simulate exactly this many cycles (or fewer, on halt) instead of running to halt.
        #[arg(long)]
        cycles: Option<u64>,

        /// Give up after this many cycles without a halt.
        #[arg(long)]
        max_cycles: Option<u64>,

        /// Log every stage event and the per-cycle pipeline diagram.
        #[arg(long)]
        trace: bool,

        /// Print statistics as JSON instead of the text report.
        #[arg(long)]
        stats_json: bool,

        /// Print the register file after the run.
        #[arg(long)]
        dump_regs: bool,
    },

    /// Validate a configuration file and print the effective configuration.
    CheckConfig {
        /// JSON configuration file.
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            file,
            config,
            cycles,
            max_cycles,
            trace,
            stats_json,
            dump_regs,
        } => {
            init_logging(trace);
            cmd_run(&RunArgs {
                file,
                config,
                cycles,
                max_cycles,
                stats_json,
                dump_regs,
            })
        }
        Commands::CheckConfig { path } => {
            init_logging(false);
            cmd_check_config(&path)
        }
    };

    if let Err(e) = result {
        eprintln!("\n[!] {e}");
        process::exit(1);
    }
}

/// Installs the fmt subscriber; `--trace` overrides `RUST_LOG`.
fn init_logging(trace: bool) {
    let filter = if trace {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

struct RunArgs {
    file: PathBuf,
    config: Option<PathBuf>,
    cycles: Option<u64>,
    max_cycles: Option<u64>,
    stats_json: bool,
    dump_regs: bool,
}

fn load_config(path: Option<&Path>) -> Result<Config, SimError> {
    Ok(match path {
        Some(p) => Config::from_file(p)?,
        None => Config::default(),
    })
}

/// Loads the program, runs it and prints the report.
///
/// Reaching `--max-cycles` without a halt is reported as an error after the
/// statistics have been printed.
fn cmd_run(args: &RunArgs) -> Result<(), SimError> {
    let config = load_config(args.config.as_deref())?;
    let words = loader::load_program(&args.file)?;

    let mut sim = Simulator::new(config, MainMemory::new())?;
    sim.load_program(&words)?;
    info!(file = %args.file.display(), words = words.len(), "starting simulation");

    let outcome = match args.cycles {
        Some(n) => {
            let _ = sim.run(n);
            Ok(())
        }
        None => sim.go(args.max_cycles).map(|_| ()),
    };

    if args.stats_json {
        println!("{}", sim.stats().to_json());
    } else {
        sim.stats().print();
    }
    if args.dump_regs {
        sim.rdump();
    }
    if !sim.is_running() {
        println!("\n[*] Halted at PC {:#010x}", sim.cpu.pc);
    }
    outcome
}

fn cmd_check_config(path: &Path) -> Result<(), SimError> {
    let config = Config::from_file(path)?;
    match serde_json::to_string_pretty(&config) {
        Ok(text) => println!("{text}"),
        Err(e) => eprintln!("[!] could not render config: {e}"),
    }
    Ok(())
}
