/// Number of addressable words in the reference memory.
pub const DEFAULT_DEPTH: usize = 512;
/// Bit width of each word in the reference memory.
pub const DEFAULT_WIDTH: u32 = 64;
/// Length of each input vector in the reference workload.
pub const DEFAULT_VECTOR_LENGTH: usize = 8;
/// Number of partial-sum accumulators (one per processing element).
pub const PARTIAL_SUMS_LEN: usize = 4;

/// File written by the `gen-mem` binary.
pub const DEFAULT_OUTPUT_FILE: &str = "mem.mif";

pub(crate) const ADDRESS_RADIX: &str = "HEX";
pub(crate) const DATA_RADIX: &str = "DEC";
pub(crate) const CONTENT_BEGIN: &str = "CONTENT BEGIN";
pub(crate) const CONTENT_END: &str = "END;";
/// Indentation in front of every content record.
pub(crate) const RECORD_INDENT: &str = "    ";
