//! 8-bit byte machine CLI.
//!
//! Installs a program image into a fresh machine and runs the clock until
//! the machine halts. It performs:
//! 1. **Image loading:** Raw byte images or text listings.
//! 2. **Execution:** Clocked run with optional per-instruction tracing.
//! 3. **Reporting:** State dump on a fault, optional statistics summary.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use bytevm_core::common::HaltReason;
use bytevm_core::sim::loader;
use bytevm_core::{Clock, Config, Machine};

#[derive(Parser, Debug)]
#[command(
    name = "bytevm",
    author,
    version,
    about = "8-bit byte-addressable virtual processor",
    long_about = "Install a program image into a zeroed machine and run it to halt.\n\nPrograms are raw byte images or text listings (8 binary digits per line, '#' comments).\n\nExamples:\n  bytevm program.bin\n  bytevm -l program.txt --trace\n  bytevm -l program.txt --interval-ms 0 --stats"
)]
struct Cli {
    /// Program image to execute.
    file: PathBuf,

    /// Parse the image as a text listing instead of raw bytes.
    #[arg(short, long)]
    listing: bool,

    /// Address at which to install the image.
    #[arg(long, default_value_t = 0)]
    base: u8,

    /// Clock period in milliseconds (0 runs unpaced).
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Trace each executed instruction.
    #[arg(short, long)]
    trace: bool,

    /// Print execution statistics after the run.
    #[arg(long)]
    stats: bool,
}

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.trace {
            "bytevm_core=trace"
        } else {
            "info"
        })
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = Config::default();
    config.general.trace_instructions = cli.trace;
    if let Some(ms) = cli.interval_ms {
        config.clock.interval_ms = ms;
    }

    let image = load_image(&cli);

    let mut machine = Machine::new(&config);
    if let Err(e) = loader::install(&mut machine, &image, cli.base) {
        eprintln!("[!] FATAL: {e}");
        process::exit(1);
    }

    let mut clock = Clock::new(&config);
    let reason = clock.start(&mut machine);

    match reason {
        HaltReason::Requested => {
            if cli.stats {
                machine.stats.print();
            }
        }
        HaltReason::Fault(fault) => {
            eprintln!("\n[!] FATAL: {fault}");
            machine.dump_state();
            if cli.stats {
                machine.stats.print();
            }
            process::exit(1);
        }
    }
}

/// Reads and, for listings, parses the program image; exits on failure.
fn load_image(cli: &Cli) -> Vec<u8> {
    let bytes = loader::load_binary(&cli.file).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: could not read '{}': {e}", cli.file.display());
        process::exit(1);
    });
    if !cli.listing {
        return bytes;
    }
    let text = String::from_utf8_lossy(&bytes);
    loader::parse_listing(&text).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: {e}");
        process::exit(1);
    })
}
