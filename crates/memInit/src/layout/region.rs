use std::fmt;

use crate::config::DotProductInputs;

/// The logical data structures placed in memory, in emission order.
#[derive(Eq, Ord, Hash, PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum RegionKind {
    /// Reserved output slot, always initialized to 0.
    Result,
    /// The declared vector length `N`.
    VectorLength,
    /// Accumulator slots, one per processing element.
    PartialSums,
    /// Input operand A.
    VectorA,
    /// Input operand B.
    VectorB,
}

impl RegionKind {
    /// Every region, in the order it is laid out from address 0.
    pub const ALL: [Self; 5] = [
        Self::Result,
        Self::VectorLength,
        Self::PartialSums,
        Self::VectorA,
        Self::VectorB,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Result => "result",
            Self::VectorLength => "vector_length",
            Self::PartialSums => "partial_sums",
            Self::VectorA => "vector_a",
            Self::VectorB => "vector_b",
        }
    }
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named, ordered run of values placed contiguously in memory.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Region {
    pub kind: RegionKind,
    pub values: Vec<i64>,
}

impl Region {
    #[must_use]
    pub const fn new(kind: RegionKind, values: Vec<i64>) -> Self {
        Self { kind, values }
    }

    /// Number of words the region occupies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Builds the fixed region sequence for a dot-product workload.
    ///
    /// The result slot is always 0 and the length slot holds the declared
    /// `vector_length`, not the length of either vector.
    #[must_use]
    pub fn sequence(inputs: &DotProductInputs) -> [Self; 5] {
        RegionKind::ALL.map(|kind| {
            let values = match kind {
                RegionKind::Result => vec![0],
                RegionKind::VectorLength => vec![inputs.vector_length as i64],
                RegionKind::PartialSums => inputs.partial_sums.clone(),
                RegionKind::VectorA => inputs.vector_a.clone(),
                RegionKind::VectorB => inputs.vector_b.clone(),
            };
            Self::new(kind, values)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_follows_declared_order() {
        let inputs = DotProductInputs::new(vec![1, 2], vec![3, 4]);
        let regions = Region::sequence(&inputs);

        let kinds: Vec<_> = regions.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, RegionKind::ALL);

        assert_eq!(regions[0].values, vec![0]);
        assert_eq!(regions[1].values, vec![2]);
        assert_eq!(regions[2].values, vec![0, 0, 0, 0]);
        assert_eq!(regions[3].values, vec![1, 2]);
        assert_eq!(regions[4].values, vec![3, 4]);
    }

    #[test]
    fn test_length_slot_uses_declared_length() {
        // The declared length is written as-is, even when it disagrees with the vectors.
        let mut inputs = DotProductInputs::new(vec![1, 2, 3], vec![4, 5, 6]);
        inputs.vector_length = 5;
        let regions = Region::sequence(&inputs);
        assert_eq!(regions[1].values, vec![5]);
        assert_eq!(regions[3].len(), 3);
    }

    #[test]
    fn test_region_names() {
        let names: Vec<_> = RegionKind::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(
            names,
            ["result", "vector_length", "partial_sums", "vector_a", "vector_b"]
        );
    }
}
