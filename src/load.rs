use std::fmt;
use std::fs;
use std::path::Path;

use crate::machine_state::RAM_SIZE;

/// The one error the ambient layer surfaces to a caller. The ISA
/// interpreter itself never raises out-of-band errors (see `cpu::Cpu`); a
/// memory image is a host-level input and can simply be too big for the
/// machine's 64 KiB address space.
#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    TooLarge(usize),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(err) => write!(f, "could not read memory image: {}", err),
            LoadError::TooLarge(len) => write!(
                f,
                "memory image is {} bytes, but the machine only has {} bytes of RAM",
                len, RAM_SIZE
            ),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err)
    }
}

/// Reads a memory image off disk and validates it fits in the 1802's
/// address space.
pub fn load_image(path: &Path) -> Result<Vec<u8>, LoadError> {
    let bytes = fs::read(path)?;
    if bytes.len() > RAM_SIZE {
        return Err(LoadError::TooLarge(bytes.len()));
    }
    Ok(bytes)
}
