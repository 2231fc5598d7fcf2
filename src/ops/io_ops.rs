use crate::cpu::Cpu;

/// `R(X) := R(X) + 1`.
pub fn irx(cpu: &mut Cpu, _n: u8) {
    cpu.state.r[cpu.state.x as usize].incr();
}

/// `OUT n` (n = 1..7): emit `M(R(X))` on port `n`, then advance `R(X)`.
/// The increment happens whether or not the port is wired — it's a side
/// effect of the bus cycle, not of a successful transfer.
pub fn out(cpu: &mut Cpu, n: u8) {
    let byte = cpu.state.read_at_x();
    if !cpu.io.out(n, byte) {
        cpu.trace.on_unsupported_io("OUT", n);
    }
    cpu.state.r[cpu.state.x as usize].incr();
}

/// `INP n` (opcode nibble 9..F, port = n - 8): read a byte and store it to
/// both `D` and `M(R(X))`. `R(X)` is deliberately *not* incremented — see
/// design notes.
pub fn inp(cpu: &mut Cpu, n: u8) {
    let port = n - 8;
    let byte = match cpu.io.inp(port) {
        Ok(Some(byte)) => byte,
        Ok(None) => {
            cpu.trace.on_unsupported_io("INP", port);
            0
        }
        Err(()) => {
            cpu.trace.on_invalid_input(port);
            0
        }
    };
    cpu.state.d = byte;
    cpu.state.write_at_x(byte);
}

/// Opcode `0x68` is reserved on real hardware; treated as a no-op here.
pub fn unused(_cpu: &mut Cpu, _n: u8) {}
