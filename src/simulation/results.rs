// src/simulation/results.rs
use crate::core::Bitstring;
use std::collections::HashSet;
use std::fmt;

/// The bitstrings produced by a run, in the order the samples were requested.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SampleCollection {
    /// Index `k` holds sample `k`.
    samples: Vec<Bitstring>,
}

impl SampleCollection {
    /// Wraps already ordered samples. (Internal visibility)
    pub(crate) fn from_ordered(samples: Vec<Bitstring>) -> Self {
        Self { samples }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if the run produced no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample `index`, if present.
    pub fn get(&self, index: usize) -> Option<&Bitstring> {
        self.samples.get(index)
    }

    /// All samples in generation order.
    pub fn samples(&self) -> &[Bitstring] {
        &self.samples
    }

    /// Iterates samples in generation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Bitstring> {
        self.samples.iter()
    }

    /// Number of distinct bitstrings. Always 1 for a non-empty deterministic run.
    pub fn distinct_count(&self) -> usize {
        self.samples.iter().collect::<HashSet<_>>().len()
    }

    /// Consumes the collection, returning the ordered samples.
    pub fn into_samples(self) -> Vec<Bitstring> {
        self.samples
    }
}

impl<'a> IntoIterator for &'a SampleCollection {
    type Item = &'a Bitstring;
    type IntoIter = std::slice::Iter<'a, Bitstring>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

impl fmt::Display for SampleCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sample Collection:")?;
        if self.samples.is_empty() {
            writeln!(f, "  No samples were generated.")?;
        } else {
            writeln!(f, "  {} samples, {} distinct", self.samples.len(), self.distinct_count())?;
            for (index, sample) in self.samples.iter().enumerate() {
                writeln!(f, "    {}: {}", index, sample)?;
            }
        }
        Ok(())
    }
}
