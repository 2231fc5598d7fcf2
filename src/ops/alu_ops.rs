use crate::alu;
use crate::cpu::Cpu;

fn immediate(cpu: &mut Cpu) -> u8 {
    let byte = cpu.state.read_at_pc();
    cpu.state.r[cpu.state.p as usize].incr();
    byte
}

pub fn adc(cpu: &mut Cpu, _n: u8) {
    let (result, df) = alu::add_with_carry(cpu.state.read_at_x(), cpu.state.d, cpu.state.df);
    cpu.state.d = result;
    cpu.state.df = df;
}

pub fn adci(cpu: &mut Cpu, _n: u8) {
    let byte = immediate(cpu);
    let (result, df) = alu::add_with_carry(byte, cpu.state.d, cpu.state.df);
    cpu.state.d = result;
    cpu.state.df = df;
}

pub fn sdb(cpu: &mut Cpu, _n: u8) {
    let (result, df) = alu::subtract_with_borrow(cpu.state.read_at_x(), cpu.state.d, cpu.state.df);
    cpu.state.d = result;
    cpu.state.df = df;
}

pub fn sdbi(cpu: &mut Cpu, _n: u8) {
    let byte = immediate(cpu);
    let (result, df) = alu::subtract_with_borrow(byte, cpu.state.d, cpu.state.df);
    cpu.state.d = result;
    cpu.state.df = df;
}

pub fn smb(cpu: &mut Cpu, _n: u8) {
    let (result, df) = alu::subtract_with_borrow(cpu.state.d, cpu.state.read_at_x(), cpu.state.df);
    cpu.state.d = result;
    cpu.state.df = df;
}

pub fn smbi(cpu: &mut Cpu, _n: u8) {
    let byte = immediate(cpu);
    let (result, df) = alu::subtract_with_borrow(cpu.state.d, byte, cpu.state.df);
    cpu.state.d = result;
    cpu.state.df = df;
}

pub fn shrc(cpu: &mut Cpu, _n: u8) {
    let (result, df) = alu::shr_with_carry(cpu.state.d, cpu.state.df);
    cpu.state.d = result;
    cpu.state.df = df;
}

pub fn shlc(cpu: &mut Cpu, _n: u8) {
    let (result, df) = alu::shl_with_carry(cpu.state.d, cpu.state.df);
    cpu.state.d = result;
    cpu.state.df = df;
}

pub fn ldx(cpu: &mut Cpu, _n: u8) {
    cpu.state.d = cpu.state.read_at_x();
}

pub fn or_(cpu: &mut Cpu, _n: u8) {
    cpu.state.d = alu::or(cpu.state.read_at_x(), cpu.state.d);
}

pub fn and_(cpu: &mut Cpu, _n: u8) {
    cpu.state.d = alu::and(cpu.state.read_at_x(), cpu.state.d);
}

pub fn xor(cpu: &mut Cpu, _n: u8) {
    cpu.state.d = alu::xor(cpu.state.read_at_x(), cpu.state.d);
}

pub fn add(cpu: &mut Cpu, _n: u8) {
    let (result, df) = alu::add(cpu.state.read_at_x(), cpu.state.d);
    cpu.state.d = result;
    cpu.state.df = df;
}

pub fn sd(cpu: &mut Cpu, _n: u8) {
    let (result, df) = alu::subtract(cpu.state.read_at_x(), cpu.state.d);
    cpu.state.d = result;
    cpu.state.df = df;
}

pub fn shr(cpu: &mut Cpu, _n: u8) {
    let (result, df) = alu::shr(cpu.state.d);
    cpu.state.d = result;
    cpu.state.df = df;
}

pub fn sm(cpu: &mut Cpu, _n: u8) {
    let (result, df) = alu::subtract(cpu.state.d, cpu.state.read_at_x());
    cpu.state.d = result;
    cpu.state.df = df;
}

pub fn ldi(cpu: &mut Cpu, _n: u8) {
    cpu.state.d = immediate(cpu);
}

pub fn ori(cpu: &mut Cpu, _n: u8) {
    let byte = immediate(cpu);
    cpu.state.d = alu::or(byte, cpu.state.d);
}

pub fn ani(cpu: &mut Cpu, _n: u8) {
    let byte = immediate(cpu);
    cpu.state.d = alu::and(byte, cpu.state.d);
}

pub fn xri(cpu: &mut Cpu, _n: u8) {
    let byte = immediate(cpu);
    cpu.state.d = alu::xor(byte, cpu.state.d);
}

pub fn adi(cpu: &mut Cpu, _n: u8) {
    let byte = immediate(cpu);
    let (result, df) = alu::add(byte, cpu.state.d);
    cpu.state.d = result;
    cpu.state.df = df;
}

pub fn sdi(cpu: &mut Cpu, _n: u8) {
    let byte = immediate(cpu);
    let (result, df) = alu::subtract(byte, cpu.state.d);
    cpu.state.d = result;
    cpu.state.df = df;
}

pub fn shl(cpu: &mut Cpu, _n: u8) {
    let (result, df) = alu::shl(cpu.state.d);
    cpu.state.d = result;
    cpu.state.df = df;
}

pub fn smi(cpu: &mut Cpu, _n: u8) {
    let byte = immediate(cpu);
    let (result, df) = alu::subtract(cpu.state.d, byte);
    cpu.state.d = result;
    cpu.state.df = df;
}
