//! Fixed dispatch tables for the short-branch (`I=3`) and long-branch/skip
//! (`I=C`) predicate families.
//!
//! The original source evaluates a string expression per branch. That is
//! replaced here with two fixed arrays of function pointers, indexed by
//! `N`, in the same spirit as the teacher's own byte-indexed operation
//! tables.

use crate::machine_state::MachineState;

pub type Predicate = fn(&MachineState) -> bool;

fn always(_s: &MachineState) -> bool {
    true
}
fn never(_s: &MachineState) -> bool {
    false
}
fn q_set(s: &MachineState) -> bool {
    s.q
}
fn q_clear(s: &MachineState) -> bool {
    !s.q
}
fn d_zero(s: &MachineState) -> bool {
    s.d == 0
}
fn d_nonzero(s: &MachineState) -> bool {
    s.d != 0
}
fn df_set(s: &MachineState) -> bool {
    s.df
}
fn df_clear(s: &MachineState) -> bool {
    !s.df
}
fn ef1_set(s: &MachineState) -> bool {
    s.ef[0]
}
fn ef1_clear(s: &MachineState) -> bool {
    !s.ef[0]
}
fn ef2_set(s: &MachineState) -> bool {
    s.ef[1]
}
fn ef2_clear(s: &MachineState) -> bool {
    !s.ef[1]
}
fn ef3_set(s: &MachineState) -> bool {
    s.ef[2]
}
fn ef3_clear(s: &MachineState) -> bool {
    !s.ef[2]
}
fn ef4_set(s: &MachineState) -> bool {
    s.ef[3]
}
fn ef4_clear(s: &MachineState) -> bool {
    !s.ef[3]
}
fn ie_set(s: &MachineState) -> bool {
    s.ie
}

/// Indexed by `N` for `I=3` (short branch).
pub const SHORT_BRANCH_TABLE: [Predicate; 16] = [
    always,    // 0: BR
    q_set,     // 1: BQ
    d_zero,    // 2: BZ
    df_set,    // 3: BDF
    ef1_set,   // 4: B1
    ef2_set,   // 5: B2
    ef3_set,   // 6: B3
    ef4_set,   // 7: B4
    never,     // 8: NBR / SKP (handled by caller: never branches)
    q_clear,   // 9: BNQ
    d_nonzero, // A: BNZ
    df_clear,  // B: BNF
    ef1_clear, // C: BN1
    ef2_clear, // D: BN2
    ef3_clear, // E: BN3
    ef4_clear, // F: BN4
];

/// Indexed by `N` for `I=C` (long branch / long skip). `N=0..3,9..B` are
/// long branches (predicate true -> jump to the 2-byte target); `N=4` is
/// `NOP` and is dispatched specially in `cpu.rs`, never consulting this
/// table; `N=5..8,C..F` are long skips (predicate true -> skip the 2-byte
/// target, advancing `R(P)` by 3 either way).
pub const LONG_BRANCH_SKIP_TABLE: [Predicate; 16] = [
    always,     // 0: LBR
    q_set,      // 1: LBQ
    d_zero,     // 2: LBZ
    df_set,     // 3: LBDF
    never,      // 4: NOP (unused; dispatched specially)
    q_clear,    // 5: LSNQ
    d_nonzero,  // 6: LSNZ
    df_clear,   // 7: LSNF
    always,     // 8: LSKP (unconditional skip)
    q_clear,    // 9: LBNQ
    d_nonzero,  // A: LBNZ
    df_clear,   // B: LBNF
    ie_set,     // C: LSIE
    q_set,      // D: LSQ
    d_zero,     // E: LSZ
    df_set,     // F: LSDF
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_branch_always_and_never_agree_with_table_slots() {
        let state = MachineState::new();
        assert!(SHORT_BRANCH_TABLE[0](&state));
        assert!(!SHORT_BRANCH_TABLE[8](&state));
    }

    #[test]
    fn short_branch_d_zero_tracks_d() {
        let mut state = MachineState::new();
        assert!(SHORT_BRANCH_TABLE[2](&state));
        state.d = 1;
        assert!(!SHORT_BRANCH_TABLE[2](&state));
    }

    #[test]
    fn short_branch_df_set_tracks_df() {
        let mut state = MachineState::new();
        assert!(!SHORT_BRANCH_TABLE[3](&state));
        state.df = true;
        assert!(SHORT_BRANCH_TABLE[3](&state));
    }
}
