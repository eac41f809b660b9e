use tracing::warn;

use crate::{
    constant::{DEFAULT_DEPTH, DEFAULT_VECTOR_LENGTH, DEFAULT_WIDTH, PARTIAL_SUMS_LEN},
    errors::ConfigError,
    layout::region::RegionKind,
};

/// Geometry of the target memory.
///
/// The width is header metadata only; values are never checked against it.
#[derive(Eq, PartialEq, Hash, Clone, Copy, Debug)]
pub struct MemoryConfig {
    depth: usize,
    width: u32,
}

impl MemoryConfig {
    /// Creates a configuration for a memory of `depth` words, each `width` bits wide.
    ///
    /// # Errors
    /// * `ConfigError::ZeroDepth` if `depth == 0`.
    /// * `ConfigError::ZeroWidth` if `width == 0`.
    pub fn new(depth: usize, width: u32) -> Result<Self, ConfigError> {
        let err = if depth == 0 {
            ConfigError::ZeroDepth
        } else if width == 0 {
            ConfigError::ZeroWidth
        } else {
            return Ok(Self { depth, width });
        };

        warn!(depth, width, %err, "rejecting memory configuration");
        Err(err)
    }

    /// Total number of addressable words.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Bits per word.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            width: DEFAULT_WIDTH,
        }
    }
}

/// Data preloaded for the dot-product workload.
///
/// `vector_length` is declared independently of the vectors and is itself
/// stored in memory, so both vectors must match it exactly.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct DotProductInputs {
    pub vector_length: usize,
    pub partial_sums: Vec<i64>,
    pub vector_a: Vec<i64>,
    pub vector_b: Vec<i64>,
}

impl DotProductInputs {
    /// Builds inputs for two vectors with zeroed partial-sum accumulators.
    ///
    /// The declared vector length is taken from `vector_a`; a mismatching
    /// `vector_b` is reported later by [`Self::check_vector_lengths`].
    #[must_use]
    pub fn new(vector_a: Vec<i64>, vector_b: Vec<i64>) -> Self {
        Self {
            vector_length: vector_a.len(),
            partial_sums: vec![0; PARTIAL_SUMS_LEN],
            vector_a,
            vector_b,
        }
    }

    /// Checks that both input vectors hold exactly `vector_length` values.
    pub fn check_vector_lengths(&self) -> Result<(), ConfigError> {
        for (region, values) in [
            (RegionKind::VectorA, &self.vector_a),
            (RegionKind::VectorB, &self.vector_b),
        ] {
            if values.len() != self.vector_length {
                return Err(ConfigError::VectorLengthMismatch {
                    region,
                    expected: self.vector_length,
                    actual: values.len(),
                });
            }
        }
        Ok(())
    }
}

impl Default for DotProductInputs {
    /// A = [1, 2, ..., 8], B = [10, 20, ..., 80], four zeroed partial sums.
    fn default() -> Self {
        let n = DEFAULT_VECTOR_LENGTH as i64;
        Self::new((1..=n).collect(), (1..=n).map(|i| i * 10).collect())
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use tracing::Level;

    use super::*;

    /// Collects formatted log output in memory.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn logs_of<T>(f: impl FnOnce() -> T) -> (T, String) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let out = tracing::subscriber::with_default(subscriber, f);
        (out, logs.contents())
    }

    #[test]
    fn test_rejected_dimensions_are_logged() {
        let (result, logs) = logs_of(|| MemoryConfig::new(0, 64));
        assert_eq!(result, Err(ConfigError::ZeroDepth));
        assert!(logs.contains("WARN"));
        assert!(logs.contains("rejecting memory configuration"));
        assert!(logs.contains("Memory depth must be at least one word."));

        let (result, logs) = logs_of(|| MemoryConfig::new(512, 0));
        assert_eq!(result, Err(ConfigError::ZeroWidth));
        assert!(logs.contains("Memory word width must be at least one bit."));

        // Accepted configurations stay silent.
        let (result, logs) = logs_of(|| MemoryConfig::new(512, 64));
        assert!(result.is_ok());
        assert!(logs.is_empty());
    }

    #[test]
    fn test_memory_config_rejects_zero_dimensions() {
        assert_eq!(MemoryConfig::new(0, 64), Err(ConfigError::ZeroDepth));
        assert_eq!(MemoryConfig::new(512, 0), Err(ConfigError::ZeroWidth));

        let config = MemoryConfig::new(16, 8).unwrap();
        assert_eq!(config.depth(), 16);
        assert_eq!(config.width(), 8);
    }

    #[test]
    fn test_defaults_match_reference_workload() {
        let config = MemoryConfig::default();
        assert_eq!(config.depth(), 512);
        assert_eq!(config.width(), 64);

        let inputs = DotProductInputs::default();
        assert_eq!(inputs.vector_length, 8);
        assert_eq!(inputs.partial_sums, vec![0; 4]);
        assert_eq!(inputs.vector_a, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(inputs.vector_b, vec![10, 20, 30, 40, 50, 60, 70, 80]);
        assert_eq!(inputs.check_vector_lengths(), Ok(()));
    }

    #[test]
    fn test_check_vector_lengths_reports_first_mismatch() {
        // Declared length disagrees with vector A.
        let mut inputs = DotProductInputs::default();
        inputs.vector_length = 9;
        assert_eq!(
            inputs.check_vector_lengths(),
            Err(ConfigError::VectorLengthMismatch {
                region: RegionKind::VectorA,
                expected: 9,
                actual: 8,
            })
        );

        // Only vector B is short.
        let inputs = DotProductInputs::new(vec![1, 2, 3], vec![4, 5]);
        assert_eq!(
            inputs.check_vector_lengths(),
            Err(ConfigError::VectorLengthMismatch {
                region: RegionKind::VectorB,
                expected: 3,
                actual: 2,
            })
        );
    }
}
