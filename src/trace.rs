use colored::Colorize;

use crate::machine_state::MachineState;

/// A snapshot of architectural state taken right after an instruction has
/// executed, handed to a `TraceSink` for rendering.
pub struct Snapshot {
    pub pc_before: u16,
    pub opcode: u8,
    pub i: u8,
    pub n: u8,
    pub d: u8,
    pub df: bool,
    pub p: u8,
    pub x: u8,
    pub t: u8,
    pub ie: bool,
    pub q: bool,
    pub r: [u16; 16],
    pub m_at_x: u8,
}

impl Snapshot {
    pub fn capture(state: &MachineState, pc_before: u16, opcode: u8) -> Self {
        let mut r = [0u16; 16];
        for (i, reg) in state.r.iter().enumerate() {
            r[i] = reg.get();
        }
        Snapshot {
            pc_before,
            opcode,
            i: opcode >> 4,
            n: opcode & 0x0F,
            d: state.d,
            df: state.df,
            p: state.p,
            x: state.x,
            t: state.t,
            ie: state.ie,
            q: state.q,
            r,
            m_at_x: state.read_at_x(),
        }
    }
}

/// Observes one `Snapshot` per executed instruction, plus unsupported-I/O
/// notices. Mirrors the teacher's use of `colored` to set semantically
/// meaningful fields apart from plain text rather than printing an
/// undifferentiated string.
pub trait TraceSink {
    fn on_step(&mut self, snapshot: &Snapshot);
    fn on_unsupported_io(&mut self, direction: &str, port: u8);

    /// `INP` on the console port returned a byte that couldn't be parsed as
    /// two hex digits.
    fn on_invalid_input(&mut self, port: u8);

    /// The driver loop reached `max_steps` without the program halting.
    fn on_max_steps_exceeded(&mut self, max_steps: u64);
}

/// Default sink: a colorized line per instruction to stdout.
pub struct ConsoleTrace;

impl TraceSink for ConsoleTrace {
    fn on_step(&mut self, s: &Snapshot) {
        println!(
            "{} {}  {}={:02X} {}={:02X} {}={} {}={} {}={} D={:02X} M(X)={:02X}",
            format!("{:04X}", s.pc_before).dimmed(),
            format!("{:02X}", s.opcode).bold(),
            "I".cyan(),
            s.i,
            "N".cyan(),
            s.n,
            "DF".yellow(),
            s.df as u8,
            "IE".yellow(),
            s.ie as u8,
            "Q".yellow(),
            s.q as u8,
            s.d,
            s.m_at_x,
        );
    }

    fn on_unsupported_io(&mut self, direction: &str, port: u8) {
        println!(
            "{} {} port {:X} not supported",
            "warning:".red().bold(),
            direction,
            port
        );
    }

    fn on_invalid_input(&mut self, port: u8) {
        println!(
            "{} INP port {:X} did not return two hex digits",
            "warning:".red().bold(),
            port
        );
    }

    fn on_max_steps_exceeded(&mut self, max_steps: u64) {
        println!(
            "{} reached max_steps ({}) without halting",
            "warning:".red().bold(),
            max_steps
        );
    }
}

/// Discards everything; used when `--debug` is off.
pub struct NullTrace;

impl TraceSink for NullTrace {
    fn on_step(&mut self, _snapshot: &Snapshot) {}
    fn on_unsupported_io(&mut self, _direction: &str, _port: u8) {}
    fn on_invalid_input(&mut self, _port: u8) {}
    fn on_max_steps_exceeded(&mut self, _max_steps: u64) {}
}

/// Records snapshots in memory; used by tests that want to assert on trace
/// content without touching stdout.
#[derive(Default)]
pub struct RecordingTrace {
    pub steps: Vec<u8>,
    pub unsupported: Vec<(String, u8)>,
    pub invalid_input: Vec<u8>,
    pub max_steps_exceeded: Vec<u64>,
}

impl TraceSink for RecordingTrace {
    fn on_step(&mut self, snapshot: &Snapshot) {
        self.steps.push(snapshot.opcode);
    }

    fn on_unsupported_io(&mut self, direction: &str, port: u8) {
        self.unsupported.push((direction.to_string(), port));
    }

    fn on_invalid_input(&mut self, port: u8) {
        self.invalid_input.push(port);
    }

    fn on_max_steps_exceeded(&mut self, max_steps: u64) {
        self.max_steps_exceeded.push(max_steps);
    }
}
