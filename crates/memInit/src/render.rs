//! Text rendering of the memory-initialization format.
//!
//! ```text
//! DEPTH = 512;
//! WIDTH = 64;
//! ADDRESS_RADIX = HEX;
//! DATA_RADIX = DEC;
//! CONTENT BEGIN
//!     0 : 0;
//!     ...
//! END;
//! ```
//!
//! Addresses are uppercase hexadecimal without prefix or padding; values are decimal.

use std::{fmt, io};

use crate::{
    config::MemoryConfig,
    constant::{ADDRESS_RADIX, CONTENT_BEGIN, CONTENT_END, DATA_RADIX, RECORD_INDENT},
    layout::MemoryWord,
};

/// Displays a full file for a configuration and its address assignment.
#[derive(Clone, Copy, Debug)]
pub struct MifDocument<'a> {
    config: &'a MemoryConfig,
    words: &'a [MemoryWord],
}

impl<'a> MifDocument<'a> {
    #[must_use]
    pub const fn new(config: &'a MemoryConfig, words: &'a [MemoryWord]) -> Self {
        Self { config, words }
    }
}

impl fmt::Display for MifDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DEPTH = {};", self.config.depth())?;
        writeln!(f, "WIDTH = {};", self.config.width())?;
        writeln!(f, "ADDRESS_RADIX = {ADDRESS_RADIX};")?;
        writeln!(f, "DATA_RADIX = {DATA_RADIX};")?;
        writeln!(f, "{CONTENT_BEGIN}")?;
        for word in self.words {
            writeln!(f, "{}", Record(word))?;
        }
        writeln!(f, "{CONTENT_END}")
    }
}

/// A single content line, indentation included.
struct Record<'a>(&'a MemoryWord);

impl fmt::Display for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{RECORD_INDENT}{:X} : {};", self.0.address, self.0.value)
    }
}

/// Renders one content line, e.g. `    1FF : 0;`.
#[must_use]
pub fn format_word(word: &MemoryWord) -> String {
    Record(word).to_string()
}

/// Renders the complete file text.
#[must_use]
pub fn render(config: &MemoryConfig, words: &[MemoryWord]) -> String {
    MifDocument::new(config, words).to_string()
}

/// Streams the same bytes as [`render`] into `writer`.
pub fn write_mif<W>(writer: &mut W, config: &MemoryConfig, words: &[MemoryWord]) -> io::Result<()>
where
    W: io::Write,
{
    write!(writer, "{}", MifDocument::new(config, words))?;
    writer.flush()
}
