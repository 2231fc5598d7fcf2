use crate::io::IoDevice;
use crate::machine_state::MachineState;
use crate::ops::{alu_ops, control_ops, io_ops, register_ops, subroutine_ops};
use crate::trace::{Snapshot, TraceSink};

/// Result of executing one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    Halted,
}

/// An opcode handler. Takes the nibble `N` alongside the CPU so one
/// function can serve a whole opcode row (e.g. `INC` for all sixteen
/// registers) instead of generating sixteen near-identical functions.
pub type OperationFn = fn(&mut Cpu, u8);

/// The fetch/decode/execute engine. Owns the architectural state plus the
/// two narrow collaborators (`IoDevice`, `TraceSink`); nothing else reaches
/// into the outside world.
///
/// Grounded on `cpu_6502.rs`'s `Cpu6502`: a struct gluing state to a
/// byte-indexed dispatch table, with `step`/`run_until` driving it.
pub struct Cpu {
    pub state: MachineState,
    pub io: Box<dyn IoDevice>,
    pub trace: Box<dyn TraceSink>,
}

impl Cpu {
    pub fn new(state: MachineState, io: Box<dyn IoDevice>, trace: Box<dyn TraceSink>) -> Self {
        Cpu { state, io, trace }
    }

    /// Fetches the byte at `R(P)`, advances `R(P)` by one (the default
    /// advance every opcode gets; multi-byte opcodes advance further
    /// themselves), and dispatches to the matching `OperationFn`.
    pub fn step(&mut self) -> StepOutcome {
        let pc_before = self.state.rp().get();
        let opcode = self.state.read_at_pc();

        if opcode == 0x00 {
            // IDL does not advance R(P) on real hardware — it idles in
            // place waiting for DMA or an interrupt. We have neither, so
            // it simply halts here without touching any register.
            let snapshot = Snapshot::capture(&self.state, pc_before, opcode);
            self.trace.on_step(&snapshot);
            return StepOutcome::Halted;
        }

        self.state.r[self.state.p as usize].incr();
        let n = opcode & 0x0F;
        let operation = OPERATION_FN_TABLE[opcode as usize];
        operation(self, n);

        let snapshot = Snapshot::capture(&self.state, pc_before, opcode);
        self.trace.on_step(&snapshot);
        StepOutcome::Continue
    }

    /// Runs until `step` reports `Halted` or `max_steps` instructions have
    /// executed, whichever comes first. Mirrors `Cpu6502::run_until`,
    /// generalized from a predicate over cycle count to the 1802's
    /// IDL-terminated model plus an ambient safety ceiling.
    pub fn run_until(&mut self, max_steps: Option<u64>) -> StepOutcome {
        let mut steps = 0u64;
        loop {
            if let Some(max) = max_steps {
                if steps >= max {
                    return StepOutcome::Continue;
                }
            }
            if self.step() == StepOutcome::Halted {
                return StepOutcome::Halted;
            }
            steps += 1;
        }
    }
}

fn idl(cpu: &mut Cpu, n: u8) {
    control_ops::idl(cpu, n);
}

/// Byte-indexed dispatch table, one entry per possible opcode. Populated
/// row by row (`I` = high nibble) the way `opcodes.rs`'s
/// `OPERATION_FN_TABLE: [OperationFn; 256]` is: a flat array literal, not a
/// runtime match or string lookup.
#[rustfmt::skip]
pub const OPERATION_FN_TABLE: [OperationFn; 256] = [
    // I = 0: IDL, LDN (N=0 never occurs in a valid program since 0x00 halts
    // in `step` before this table is even consulted; kept for completeness)
    idl,               register_ops::ldn, register_ops::ldn, register_ops::ldn,
    register_ops::ldn, register_ops::ldn, register_ops::ldn, register_ops::ldn,
    register_ops::ldn, register_ops::ldn, register_ops::ldn, register_ops::ldn,
    register_ops::ldn, register_ops::ldn, register_ops::ldn, register_ops::ldn,
    // I = 1: INC
    register_ops::inc, register_ops::inc, register_ops::inc, register_ops::inc,
    register_ops::inc, register_ops::inc, register_ops::inc, register_ops::inc,
    register_ops::inc, register_ops::inc, register_ops::inc, register_ops::inc,
    register_ops::inc, register_ops::inc, register_ops::inc, register_ops::inc,
    // I = 2: DEC
    register_ops::dec, register_ops::dec, register_ops::dec, register_ops::dec,
    register_ops::dec, register_ops::dec, register_ops::dec, register_ops::dec,
    register_ops::dec, register_ops::dec, register_ops::dec, register_ops::dec,
    register_ops::dec, register_ops::dec, register_ops::dec, register_ops::dec,
    // I = 3: short branch, predicate table indexed by N
    control_ops::short_branch, control_ops::short_branch, control_ops::short_branch, control_ops::short_branch,
    control_ops::short_branch, control_ops::short_branch, control_ops::short_branch, control_ops::short_branch,
    control_ops::short_branch, control_ops::short_branch, control_ops::short_branch, control_ops::short_branch,
    control_ops::short_branch, control_ops::short_branch, control_ops::short_branch, control_ops::short_branch,
    // I = 4: LDA
    register_ops::lda, register_ops::lda, register_ops::lda, register_ops::lda,
    register_ops::lda, register_ops::lda, register_ops::lda, register_ops::lda,
    register_ops::lda, register_ops::lda, register_ops::lda, register_ops::lda,
    register_ops::lda, register_ops::lda, register_ops::lda, register_ops::lda,
    // I = 5: STR
    register_ops::str_, register_ops::str_, register_ops::str_, register_ops::str_,
    register_ops::str_, register_ops::str_, register_ops::str_, register_ops::str_,
    register_ops::str_, register_ops::str_, register_ops::str_, register_ops::str_,
    register_ops::str_, register_ops::str_, register_ops::str_, register_ops::str_,
    // I = 6: N=0 IRX, N=1..7 OUT, N=8 unused, N=9..F INP
    io_ops::irx, io_ops::out, io_ops::out, io_ops::out,
    io_ops::out, io_ops::out, io_ops::out, io_ops::out,
    io_ops::unused, io_ops::inp, io_ops::inp, io_ops::inp,
    io_ops::inp, io_ops::inp, io_ops::inp, io_ops::inp,
    // I = 7: RET, DIS, LDXA, STXD, ADC, SDB, SHRC, SMB, SAV, MARK, REQ, SEQ, ADCI, SDBI, SHLC, SMBI
    subroutine_ops::ret_dis, subroutine_ops::ret_dis, subroutine_ops::ldxa, subroutine_ops::stxd,
    alu_ops::adc, alu_ops::sdb, alu_ops::shrc, alu_ops::smb,
    subroutine_ops::sav, subroutine_ops::mark, subroutine_ops::req, subroutine_ops::seq,
    alu_ops::adci, alu_ops::sdbi, alu_ops::shlc, alu_ops::smbi,
    // I = 8: GLO
    register_ops::glo, register_ops::glo, register_ops::glo, register_ops::glo,
    register_ops::glo, register_ops::glo, register_ops::glo, register_ops::glo,
    register_ops::glo, register_ops::glo, register_ops::glo, register_ops::glo,
    register_ops::glo, register_ops::glo, register_ops::glo, register_ops::glo,
    // I = 9: GHI
    register_ops::ghi, register_ops::ghi, register_ops::ghi, register_ops::ghi,
    register_ops::ghi, register_ops::ghi, register_ops::ghi, register_ops::ghi,
    register_ops::ghi, register_ops::ghi, register_ops::ghi, register_ops::ghi,
    register_ops::ghi, register_ops::ghi, register_ops::ghi, register_ops::ghi,
    // I = A: PLO
    register_ops::plo, register_ops::plo, register_ops::plo, register_ops::plo,
    register_ops::plo, register_ops::plo, register_ops::plo, register_ops::plo,
    register_ops::plo, register_ops::plo, register_ops::plo, register_ops::plo,
    register_ops::plo, register_ops::plo, register_ops::plo, register_ops::plo,
    // I = B: PHI
    register_ops::phi, register_ops::phi, register_ops::phi, register_ops::phi,
    register_ops::phi, register_ops::phi, register_ops::phi, register_ops::phi,
    register_ops::phi, register_ops::phi, register_ops::phi, register_ops::phi,
    register_ops::phi, register_ops::phi, register_ops::phi, register_ops::phi,
    // I = C: long branch (0..3,9..B), NOP (4), long skip (5..8,C..F)
    control_ops::long_branch, control_ops::long_branch, control_ops::long_branch, control_ops::long_branch,
    control_ops::nop, control_ops::long_skip, control_ops::long_skip, control_ops::long_skip,
    control_ops::long_skip, control_ops::long_branch, control_ops::long_branch, control_ops::long_branch,
    control_ops::long_skip, control_ops::long_skip, control_ops::long_skip, control_ops::long_skip,
    // I = D: SEP
    control_ops::sep, control_ops::sep, control_ops::sep, control_ops::sep,
    control_ops::sep, control_ops::sep, control_ops::sep, control_ops::sep,
    control_ops::sep, control_ops::sep, control_ops::sep, control_ops::sep,
    control_ops::sep, control_ops::sep, control_ops::sep, control_ops::sep,
    // I = E: SEX
    control_ops::sex, control_ops::sex, control_ops::sex, control_ops::sex,
    control_ops::sex, control_ops::sex, control_ops::sex, control_ops::sex,
    control_ops::sex, control_ops::sex, control_ops::sex, control_ops::sex,
    control_ops::sex, control_ops::sex, control_ops::sex, control_ops::sex,
    // I = F: LDX, OR, AND, XOR, ADD, SD, SHR, SM, LDI, ORI, ANI, XRI, ADI, SDI, SHL, SMI
    alu_ops::ldx, alu_ops::or_, alu_ops::and_, alu_ops::xor,
    alu_ops::add, alu_ops::sd, alu_ops::shr, alu_ops::sm,
    alu_ops::ldi, alu_ops::ori, alu_ops::ani, alu_ops::xri,
    alu_ops::adi, alu_ops::sdi, alu_ops::shl, alu_ops::smi,
];
