use std::io::{self, Read, Write};

/// The narrow I/O surface opcodes `OUT`/`INP` call through. Grounded on the
/// same "two methods, no retained state" shape as the teacher's `Mapper`
/// trait, adapted from memory-mapped bytes to numbered I/O ports.
pub trait IoDevice {
    /// Emit `byte` on `port` (1..=7). Return `false` if the port is not
    /// wired to anything; the caller reports that via the trace sink but
    /// keeps running.
    fn out(&mut self, port: u8, byte: u8) -> bool;

    /// Read a byte from `port` (1..=7). Returns `Ok(None)` if the port is
    /// not wired; the caller substitutes 0 and reports via the trace sink.
    /// Returns `Err(())` if the port is wired but the input couldn't be
    /// decoded into a byte (the console port expects two hex digits); the
    /// caller substitutes 0 and reports that via the trace sink too.
    fn inp(&mut self, port: u8) -> Result<Option<u8>, ()>;
}

/// Default binding: port 4 writes a byte to stdout and reads a byte from
/// stdin (`OUT 64` / `INP 6C` both decode to port 4, per the reference
/// wiring). The console port reads two ASCII hex-digit characters and
/// parses them into the data byte. Every other port is unsupported.
pub struct StdIo;

impl IoDevice for StdIo {
    fn out(&mut self, port: u8, byte: u8) -> bool {
        if port == 4 {
            let mut stdout = io::stdout();
            let _ = stdout.write_all(&[byte]);
            let _ = stdout.flush();
            true
        } else {
            false
        }
    }

    fn inp(&mut self, port: u8) -> Result<Option<u8>, ()> {
        if port == 4 {
            let mut buf = [0u8; 2];
            if io::stdin().read_exact(&mut buf).is_err() {
                return Err(());
            }
            let digits = match std::str::from_utf8(&buf) {
                Ok(digits) => digits,
                Err(_) => return Err(()),
            };
            match u8::from_str_radix(digits, 16) {
                Ok(byte) => Ok(Some(byte)),
                Err(_) => Err(()),
            }
        } else {
            Ok(None)
        }
    }
}

/// An `IoDevice` with no external effects, useful for tests: records what
/// was written and serves canned input.
#[derive(Default)]
pub struct RecordingIo {
    pub written: Vec<(u8, u8)>,
    pub input_queue: Vec<u8>,
    /// When set, `inp` on the wired port reports undecodable input instead
    /// of serving `input_queue`, for exercising `on_invalid_input`.
    pub force_invalid_input: bool,
}

impl IoDevice for RecordingIo {
    fn out(&mut self, port: u8, byte: u8) -> bool {
        if port == 4 {
            self.written.push((port, byte));
            true
        } else {
            false
        }
    }

    fn inp(&mut self, port: u8) -> Result<Option<u8>, ()> {
        if port == 4 {
            if self.force_invalid_input {
                Err(())
            } else {
                Ok(Some(self.input_queue.pop().unwrap_or(0)))
            }
        } else {
            Ok(None)
        }
    }
}
