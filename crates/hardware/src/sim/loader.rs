//! Program Image Loader.
//!
//! This module turns an LS-8 program image into the bytes placed in memory. It performs:
//! 1. **Comment stripping:** Everything from `#` to the end of a line is ignored.
//! 2. **Token parsing:** Each remaining non-blank line must be exactly eight binary
//!    digits, most significant bit first.
//! 3. **Size check:** The result must fit in the 256-byte memory.
//!
//! ```text
//! # print8.ls8
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! 01000111 # PRN R0
//! 00000000
//! 00000001 # HLT
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::common::MEMORY_SIZE;

/// Number of binary digits in one program byte.
const TOKEN_WIDTH: usize = 8;

/// Errors raised before any instruction executes.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be read.
    #[error("could not read program '{}': {source}", path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A line held something other than eight binary digits.
    #[error("line {line}: malformed byte '{token}' (expected 8 binary digits)")]
    MalformedToken {
        /// 1-based line number.
        line: usize,
        /// The offending text, comment stripped and trimmed.
        token: String,
    },

    /// The image does not fit in memory.
    #[error("program is {len} bytes but memory holds only 256")]
    ProgramTooLarge {
        /// Number of bytes in the image.
        len: usize,
    },
}

/// Parses program image text into bytes.
///
/// # Errors
///
/// [`LoadError::MalformedToken`] for the first bad line and
/// [`LoadError::ProgramTooLarge`] if more than 256 bytes result.
///
/// # Examples
///
/// ```
/// use ls8_core::sim::loader::parse_program;
///
/// let text = "# comment\n10000010 # LDI\n\n00000000\n00001000\n";
/// assert_eq!(parse_program(text).unwrap(), vec![0b1000_0010, 0, 8]);
/// ```
pub fn parse_program(source: &str) -> Result<Vec<u8>, LoadError> {
    let mut program = Vec::new();
    for (idx, raw) in source.lines().enumerate() {
        let token = strip_comment(raw);
        if token.is_empty() {
            continue;
        }
        let byte = parse_byte(token).ok_or_else(|| LoadError::MalformedToken {
            line: idx + 1,
            token: token.to_string(),
        })?;
        program.push(byte);
    }

    if program.len() > MEMORY_SIZE {
        return Err(LoadError::ProgramTooLarge { len: program.len() });
    }
    Ok(program)
}

/// Reads and parses a program image file.
///
/// # Errors
///
/// [`LoadError::Io`] if the file cannot be read, otherwise as [`parse_program`].
pub fn load_program_file(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let program = parse_program(&source)?;
    tracing::debug!(path = %path.display(), bytes = program.len(), "parsed program image");
    Ok(program)
}

fn strip_comment(line: &str) -> &str {
    line.split_once('#').map_or(line, |(code, _)| code).trim()
}

fn parse_byte(token: &str) -> Option<u8> {
    if token.len() != TOKEN_WIDTH || !token.bytes().all(|b| b == b'0' || b == b'1') {
        return None;
    }
    u8::from_str_radix(token, 2).ok()
}
