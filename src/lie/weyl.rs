//! Reduced words in the Weyl group

use super::root_system::RootSystem;
use super::weight::Root;
use crate::error::{BasisError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A reduced word s_{i₁}⋯s_{iₖ}, stored 0-based
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct WeylWord(Vec<usize>);

impl WeylWord {
    /// Validates a 1-based word: every letter is a node, and the word is reduced
    pub fn new(root_system: &RootSystem, one_based: &[usize]) -> Result<Self> {
        let r = root_system.rank();
        if let Some(&bad) = one_based.iter().find(|&&i| i == 0 || i > r) {
            return Err(BasisError::word(
                one_based,
                format!("letter {} is outside 1..={}", bad, r),
            ));
        }
        let letters: Vec<usize> = one_based.iter().map(|&i| i - 1).collect();
        if !root_system.is_reduced_word(&letters) {
            return Err(BasisError::word(one_based, "word is not reduced"));
        }
        Ok(WeylWord(letters))
    }

    /// A reduced word of the longest element w₀
    pub fn longest(root_system: &RootSystem) -> Self {
        WeylWord(root_system.longest_word())
    }

    pub fn identity() -> Self {
        WeylWord(Vec::new())
    }

    /// 0-based letters
    pub fn letters(&self) -> &[usize] {
        &self.0
    }

    pub fn one_based(&self) -> Vec<usize> {
        self.0.iter().map(|&i| i + 1).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if the word has length ℓ(w₀)
    pub fn is_longest(&self, root_system: &RootSystem) -> bool {
        self.0.len() == root_system.longest_length()
    }

    /// Inversion roots βₖ = s_{i₁}⋯s_{iₖ₋₁}(α_{iₖ})
    pub fn roots(&self, root_system: &RootSystem) -> Vec<Root> {
        root_system.word_roots(&self.0)
    }
}

impl fmt::Display for WeylWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "id");
        }
        for (k, i) in self.0.iter().enumerate() {
            if k > 0 {
                write!(f, "*")?;
            }
            write!(f, "s{}", i + 1)?;
        }
        Ok(())
    }
}
