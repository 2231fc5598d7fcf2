use crate::cpu::Cpu;

/// Load via N: `D := M(R(N))`. `N` must be nonzero on real hardware (N=0
/// is IDL); dispatch never reaches this function with N=0 since opcode
/// 0x00 halts before the table is consulted.
pub fn ldn(cpu: &mut Cpu, n: u8) {
    cpu.state.d = cpu.state.read(cpu.state.r[n as usize].get());
}

/// `R(N) := R(N) + 1`.
pub fn inc(cpu: &mut Cpu, n: u8) {
    cpu.state.r[n as usize].incr();
}

/// `R(N) := R(N) - 1`.
pub fn dec(cpu: &mut Cpu, n: u8) {
    cpu.state.r[n as usize].decr();
}

/// Load and advance: `D := M(R(N)); R(N) := R(N) + 1`.
pub fn lda(cpu: &mut Cpu, n: u8) {
    let addr = cpu.state.r[n as usize].get();
    cpu.state.d = cpu.state.read(addr);
    cpu.state.r[n as usize].incr();
}

/// Store: `M(R(N)) := D`.
pub fn str_(cpu: &mut Cpu, n: u8) {
    let addr = cpu.state.r[n as usize].get();
    cpu.state.write(addr, cpu.state.d);
}

/// `D := R(N).low`.
pub fn glo(cpu: &mut Cpu, n: u8) {
    cpu.state.d = cpu.state.r[n as usize].glo();
}

/// `D := R(N).high`.
pub fn ghi(cpu: &mut Cpu, n: u8) {
    cpu.state.d = cpu.state.r[n as usize].ghi();
}

/// `R(N).low := D`.
pub fn plo(cpu: &mut Cpu, n: u8) {
    let d = cpu.state.d;
    cpu.state.r[n as usize].plo(d);
}

/// `R(N).high := D`.
pub fn phi(cpu: &mut Cpu, n: u8) {
    let d = cpu.state.d;
    cpu.state.r[n as usize].phi(d);
}
