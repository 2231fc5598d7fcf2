use std::path::PathBuf;

use structopt::StructOpt;

/// Command-line surface for the harness around the core interpreter. None
/// of these flags are architectural state — they govern the driver loop
/// only (tracing, throttling, a runaway-program ceiling).
///
/// Grounded on `ppu-tool/src/main.rs`'s `#[derive(StructOpt)] CliOptions`
/// pattern.
#[derive(Debug, StructOpt)]
#[structopt(
    name = "cdp1802",
    about = "An RCA CDP1802 (COSMAC) instruction-set emulator"
)]
pub struct CliOptions {
    /// Path to a flat binary memory image, loaded at address 0x0000.
    #[structopt(parse(from_os_str))]
    pub image: PathBuf,

    /// Print a trace line after every executed instruction.
    #[structopt(long)]
    pub debug: bool,

    /// Milliseconds to sleep between instructions. 0 runs at full speed.
    #[structopt(long, default_value = "0")]
    pub delay_ms: u64,

    /// Stop after this many instructions even if IDL was never reached.
    /// Absent by default, matching real hardware, which a human simply
    /// watches and halts by hand.
    #[structopt(long)]
    pub max_steps: Option<u64>,
}
