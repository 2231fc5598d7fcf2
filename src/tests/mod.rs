//! Integration-style tests that build a `Cpu` from a raw byte image and run
//! it to completion, the way `cpu_6502/test.rs` runs an assembled program
//! and inspects the resulting `Cpu6502`. There is no assembler here, so
//! programs are written directly as opcode bytes.

mod scenarios;

use crate::cpu::{Cpu, StepOutcome};
use crate::io::RecordingIo;
use crate::machine_state::MachineState;
use crate::trace::RecordingTrace;

pub fn run_program(image: &[u8]) -> Cpu {
    let mut cpu = Cpu::new(
        MachineState::with_image(image),
        Box::new(RecordingIo::default()),
        Box::new(RecordingTrace::default()),
    );
    let mut steps = 0;
    while cpu.step() != StepOutcome::Halted {
        steps += 1;
        if steps > 10_000 {
            panic!("program did not halt within 10,000 steps");
        }
    }
    cpu
}
