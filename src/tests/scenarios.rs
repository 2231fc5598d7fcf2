//! The six concrete end-to-end programs from the system design, each
//! built as a raw byte image and run to completion (or single-stepped,
//! where the scenario cares about intermediate state).

use super::run_program;
use crate::cpu::{Cpu, StepOutcome};
use crate::io::RecordingIo;
use crate::machine_state::MachineState;
use crate::trace::RecordingTrace;

#[test]
fn idle_immediately() {
    let cpu = run_program(&[0x00]);
    assert_eq!(cpu.state.d, 0x00);
    assert_eq!(cpu.state.r[0].get(), 0);
}

#[test]
fn ldi_then_out_emits_expected_byte_and_advances_pointer() {
    // LDI 0x00; PHI R1; LDI 0x10; PLO R1; SEX 1; LDI 0x41; STR R1; OUT 4; IDL
    // Points R1 at a scratch cell, loads D, stores it there, points X at
    // the same cell, then emits it via OUT.
    let image = [
        0xF8, 0x00, // LDI 0x00
        0xB1, // PHI R1
        0xF8, 0x10, // LDI 0x10
        0xA1, // PLO R1
        0xE1, // SEX 1
        0xF8, 0x41, // LDI 0x41
        0x51, // STR R1
        0x64, // OUT 4
        0x00, // IDL
    ];
    let cpu = run_program(&image);
    assert_eq!(cpu.state.r[1].get(), 0x0011); // R(X) advanced by OUT
    assert_eq!(cpu.state.read(0x0010), 0x41);
}

#[test]
fn subtract_no_borrow() {
    // SD computes M(R(X)) - D; D holds the smaller value so no borrow
    // occurs.
    let mut image = vec![0u8; 0x11];
    let program = [
        0xF8, 0x00, // LDI 0x00
        0xB1, // PHI R1
        0xF8, 0x10, // LDI 0x10
        0xA1, // PLO R1
        0xE1, // SEX 1
        0xF8, 0x0E, // LDI 0x0E   (D := 0x0E)
        0xF5, // SD
        0x00, // IDL
    ];
    image[..program.len()].copy_from_slice(&program);
    image[0x10] = 0x42;
    let cpu = run_program(&image);
    assert_eq!(cpu.state.d, 0x34);
    assert!(cpu.state.df);
}

#[test]
fn subtract_with_borrow_set() {
    let mut image = vec![0u8; 0x11];
    let program = [
        0xF8, 0x00, // LDI 0x00
        0xB1, // PHI R1
        0xF8, 0x10, // LDI 0x10
        0xA1, // PLO R1
        0xE1, // SEX 1
        0xF8, 0x20, // LDI 0x20   (D := 0x20)
        0x75, // SDB (DF starts clear)
        0x00, // IDL
    ];
    image[..program.len()].copy_from_slice(&program);
    image[0x10] = 0x40;
    let cpu = run_program(&image);
    assert_eq!(cpu.state.d, 0x1F);
    assert!(cpu.state.df);
}

#[test]
fn long_branch_taken() {
    let image = [0xC0, 0x00, 0x06, 0x00, 0x00, 0x00, 0x00];
    let mut cpu = Cpu::new(
        MachineState::with_image(&image),
        Box::new(RecordingIo::default()),
        Box::new(RecordingTrace::default()),
    );
    let before_d = cpu.state.d;
    assert_eq!(cpu.step(), StepOutcome::Continue);
    assert_eq!(cpu.state.r[0].get(), 0x0006);
    assert_eq!(cpu.state.d, before_d);
}

#[test]
fn mark_ret_pair_round_trips_through_memory() {
    // SEP 1 switches the active program counter to R1 so MARK's write to
    // R(2) and RET's read from R(X) don't alias the register doing the
    // fetching.
    let mut cpu = Cpu::new(
        MachineState::with_image(&[]),
        Box::new(RecordingIo::default()),
        Box::new(RecordingTrace::default()),
    );
    cpu.state.r[1].set(0x0000);
    cpu.state.p = 1;
    cpu.state.x = 3;
    cpu.state.r[2].set(0x0200);
    cpu.state.write(0x0000, 0x79); // MARK
    cpu.step();
    assert_eq!(cpu.state.x, 1);
    assert_eq!(cpu.state.r[2].get(), 0x01FF);
    assert_eq!(cpu.state.read(0x0200), 0x31); // packed X=3, P=1

    cpu.state.r[4].set(0x0300);
    cpu.state.x = 4;
    cpu.state.write(0x0300, 0x31); // the value MARK just packed
    cpu.state.write(0x0001, 0x70); // RET, fetched next via R(1)
    cpu.step();
    assert_eq!(cpu.state.x, 3);
    assert_eq!(cpu.state.p, 1);
    assert!(cpu.state.ie);
}
