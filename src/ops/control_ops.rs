use crate::branch::{LONG_BRANCH_SKIP_TABLE, SHORT_BRANCH_TABLE};
use crate::cpu::Cpu;

/// `IDL` itself is handled in `Cpu::step` before the dispatch table is even
/// consulted (opcode 0x00 halts outright); this stub exists only so the
/// table has an entry at index 0 and stays a total function.
pub fn idl(_cpu: &mut Cpu, _n: u8) {}

/// `NOP`. `R(P)` was already advanced by `Cpu::step`'s fetch; nothing else
/// happens.
pub fn nop(_cpu: &mut Cpu, _n: u8) {}

/// Short branch (`I=3`): taken replaces only `R(P).low`, so the target
/// must live on the same 256-byte page as the branch instruction. Not
/// taken skips the one-byte target.
pub fn short_branch(cpu: &mut Cpu, n: u8) {
    let target_low = cpu.state.read_at_pc();
    if SHORT_BRANCH_TABLE[n as usize](&cpu.state) {
        cpu.state.r[cpu.state.p as usize].plo(target_low);
    } else {
        cpu.state.r[cpu.state.p as usize].incr();
    }
}

/// Long branch (`I=C`, `N` in `{0,1,2,3,9,A,B}`): taken loads both bytes
/// of the two-byte target into `R(P)`; not taken skips past them.
pub fn long_branch(cpu: &mut Cpu, n: u8) {
    let p = cpu.state.p as usize;
    let hi_addr = cpu.state.r[p].get();
    let hi = cpu.state.read(hi_addr);
    let lo = cpu.state.read(hi_addr.wrapping_add(1));
    if LONG_BRANCH_SKIP_TABLE[n as usize](&cpu.state) {
        cpu.state.r[p].set(((hi as u16) << 8) | lo as u16);
    } else {
        cpu.state.r[p].set(hi_addr.wrapping_add(2));
    }
}

/// Long skip (`I=C`, `N` in `{5,6,7,8,C,D,E,F}`): taken skips the
/// following two bytes; not taken leaves `R(P)` where the default
/// one-byte advance already put it.
pub fn long_skip(cpu: &mut Cpu, n: u8) {
    if LONG_BRANCH_SKIP_TABLE[n as usize](&cpu.state) {
        let p = cpu.state.p as usize;
        let pc = cpu.state.r[p].get();
        cpu.state.r[p].set(pc.wrapping_add(2));
    }
}

/// `P := N`. Does not touch `R(P)` itself — the register the old `P`
/// pointed at keeps whatever `Cpu::step`'s fetch advance left it at, so a
/// later `SEP` back to it resumes correctly.
pub fn sep(cpu: &mut Cpu, n: u8) {
    cpu.state.p = n;
}

/// `X := N`.
pub fn sex(cpu: &mut Cpu, n: u8) {
    cpu.state.x = n;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::RecordingIo;
    use crate::machine_state::MachineState;
    use crate::trace::RecordingTrace;

    fn cpu() -> Cpu {
        Cpu::new(
            MachineState::new(),
            Box::new(RecordingIo::default()),
            Box::new(RecordingTrace::default()),
        )
    }

    #[test]
    fn sep_switches_p_without_touching_registers() {
        let mut c = cpu();
        c.state.r[3].set(0x9999);
        sep(&mut c, 3);
        assert_eq!(c.state.p, 3);
        assert_eq!(c.state.r[3].get(), 0x9999);
    }

    #[test]
    fn long_skip_lsnz_taken_when_d_nonzero() {
        let mut c = cpu();
        c.state.r[0].set(0x0010);
        c.state.d = 1;
        long_skip(&mut c, 0x6); // LSNZ
        assert_eq!(c.state.r[0].get(), 0x0012);
    }

    #[test]
    fn long_skip_lsnz_not_taken_when_d_zero() {
        let mut c = cpu();
        c.state.r[0].set(0x0010);
        c.state.d = 0;
        long_skip(&mut c, 0x6); // LSNZ
        assert_eq!(c.state.r[0].get(), 0x0010);
    }

    #[test]
    fn long_skip_lskp_always_taken() {
        let mut c = cpu();
        c.state.r[0].set(0x0010);
        long_skip(&mut c, 0x8); // LSKP
        assert_eq!(c.state.r[0].get(), 0x0012);
    }

    #[test]
    fn long_skip_lsie_tracks_ie() {
        let mut c = cpu();
        c.state.r[0].set(0x0010);
        c.state.ie = false;
        long_skip(&mut c, 0xC); // LSIE
        assert_eq!(c.state.r[0].get(), 0x0010);

        c.state.ie = true;
        long_skip(&mut c, 0xC); // LSIE
        assert_eq!(c.state.r[0].get(), 0x0012);
    }

    #[test]
    fn long_skip_lsq_tracks_q() {
        let mut c = cpu();
        c.state.r[0].set(0x0010);
        c.state.q = false;
        long_skip(&mut c, 0xD); // LSQ
        assert_eq!(c.state.r[0].get(), 0x0010);

        c.state.q = true;
        long_skip(&mut c, 0xD); // LSQ
        assert_eq!(c.state.r[0].get(), 0x0012);
    }

    #[test]
    fn long_skip_lsz_tracks_d_zero() {
        let mut c = cpu();
        c.state.r[0].set(0x0010);
        c.state.d = 1;
        long_skip(&mut c, 0xE); // LSZ
        assert_eq!(c.state.r[0].get(), 0x0010);

        c.state.d = 0;
        long_skip(&mut c, 0xE); // LSZ
        assert_eq!(c.state.r[0].get(), 0x0012);
    }

    #[test]
    fn long_skip_lsdf_tracks_df() {
        let mut c = cpu();
        c.state.r[0].set(0x0010);
        c.state.df = false;
        long_skip(&mut c, 0xF); // LSDF
        assert_eq!(c.state.r[0].get(), 0x0010);

        c.state.df = true;
        long_skip(&mut c, 0xF); // LSDF
        assert_eq!(c.state.r[0].get(), 0x0012);
    }
}
