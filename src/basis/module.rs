//! Module descriptors: simple modules V(λ) and Demazure modules V_w(λ)
//!
//! A descriptor knows its algebra and highest weight and computes its
//! dimension and character on first use. Both caches are write-once.

use crate::error::Result;
use crate::lie::character::{character_dimension, demazure_character, simple_character, Character};
use crate::lie::weight::Weight;
use crate::lie::weyl::WeylWord;
use crate::lie::LieAlgebra;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Simple or Demazure
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ModuleKind {
    Simple,
    /// Demazure module for the Weyl group element given by a reduced word
    Demazure(WeylWord),
}

/// A highest weight module together with lazily computed invariants
#[derive(Clone, Debug)]
pub struct ModuleDescriptor {
    algebra: Arc<LieAlgebra>,
    highest_weight: Weight,
    kind: ModuleKind,
    dimension: OnceLock<usize>,
    character: OnceLock<Character>,
}

impl ModuleDescriptor {
    /// V(λ); `highest_weight` must be dominant with one coordinate per node
    pub fn simple(algebra: Arc<LieAlgebra>, highest_weight: &[i64]) -> Result<Self> {
        let highest_weight = algebra.root_system().check_dominant(highest_weight)?;
        Ok(Self::with_kind(algebra, highest_weight, ModuleKind::Simple))
    }

    /// V_w(λ) for a validated reduced word of w
    pub fn demazure(
        algebra: Arc<LieAlgebra>,
        highest_weight: &[i64],
        word: WeylWord,
    ) -> Result<Self> {
        let highest_weight = algebra.root_system().check_dominant(highest_weight)?;
        Ok(Self::with_kind(
            algebra,
            highest_weight,
            ModuleKind::Demazure(word),
        ))
    }

    fn with_kind(algebra: Arc<LieAlgebra>, highest_weight: Weight, kind: ModuleKind) -> Self {
        ModuleDescriptor {
            algebra,
            highest_weight,
            kind,
            dimension: OnceLock::new(),
            character: OnceLock::new(),
        }
    }

    /// Same variant (and Weyl group element) at another dominant weight
    pub fn similar(&self, highest_weight: Weight) -> Self {
        Self::with_kind(self.algebra.clone(), highest_weight, self.kind.clone())
    }

    pub fn base_algebra(&self) -> &Arc<LieAlgebra> {
        &self.algebra
    }

    pub fn highest_weight(&self) -> &Weight {
        &self.highest_weight
    }

    pub fn kind(&self) -> &ModuleKind {
        &self.kind
    }

    pub fn is_demazure(&self) -> bool {
        matches!(self.kind, ModuleKind::Demazure(_))
    }

    /// Total number of basis monomials
    pub fn dimension(&self) -> Result<usize> {
        if let Some(&dim) = self.dimension.get() {
            return Ok(dim);
        }
        let dim = match &self.kind {
            ModuleKind::Simple => self.algebra.root_system().dimension(&self.highest_weight),
            ModuleKind::Demazure(_) => character_dimension(self.character()?) as usize,
        };
        Ok(*self.dimension.get_or_init(|| dim))
    }

    /// Weight multiplicities, i.e. the number of basis monomials per weight
    pub fn character(&self) -> Result<&Character> {
        if let Some(character) = self.character.get() {
            return Ok(character);
        }
        let root_system = self.algebra.root_system();
        let character = match &self.kind {
            ModuleKind::Simple => simple_character(root_system, &self.highest_weight)?,
            ModuleKind::Demazure(word) => {
                demazure_character(root_system, &self.highest_weight, word.letters())?
            }
        };
        Ok(self.character.get_or_init(|| character))
    }
}

impl PartialEq for ModuleDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.algebra == other.algebra
            && self.highest_weight == other.highest_weight
            && self.kind == other.kind
    }
}

impl Eq for ModuleDescriptor {}

impl fmt::Display for ModuleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ModuleKind::Simple => write!(
                f,
                "simple module of {} with highest weight {}",
                self.algebra.cartan_type(),
                self.highest_weight
            ),
            ModuleKind::Demazure(word) => write!(
                f,
                "Demazure module of {} with highest weight {} and Weyl group element {}",
                self.algebra.cartan_type(),
                self.highest_weight,
                word
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BasisError;
    use crate::lie::cartan::LieType;

    fn algebra(t: LieType, n: usize) -> Arc<LieAlgebra> {
        Arc::new(LieAlgebra::new(t, n).unwrap())
    }

    #[test]
    fn test_dimension_matches_character() {
        let g2 = algebra(LieType::G, 2);
        let module = ModuleDescriptor::simple(g2, &[1, 1]).unwrap();
        let dim = module.dimension().unwrap();
        assert_eq!(dim, 64);
        assert_eq!(character_dimension(module.character().unwrap()) as usize, dim);
    }

    #[test]
    fn test_demazure_dimension() {
        let a2 = algebra(LieType::A, 2);
        let identity = ModuleDescriptor::demazure(a2.clone(), &[1, 1], WeylWord::identity()).unwrap();
        assert_eq!(identity.dimension().unwrap(), 1);

        let word = WeylWord::new(a2.root_system(), &[1]).unwrap();
        let s1 = ModuleDescriptor::demazure(a2.clone(), &[1, 1], word).unwrap();
        assert_eq!(s1.dimension().unwrap(), 2);

        let longest = WeylWord::longest(a2.root_system());
        let full = ModuleDescriptor::demazure(a2, &[1, 1], longest).unwrap();
        assert_eq!(full.dimension().unwrap(), 8);
    }

    #[test]
    fn test_similar_keeps_variant() {
        let a2 = algebra(LieType::A, 2);
        let word = WeylWord::new(a2.root_system(), &[2, 1]).unwrap();
        let module = ModuleDescriptor::demazure(a2, &[1, 1], word.clone()).unwrap();
        let other = module.similar(Weight::new(vec![1, 0]));
        assert_eq!(other.kind(), &ModuleKind::Demazure(word));
        assert_eq!(other.highest_weight(), &Weight::new(vec![1, 0]));
    }

    #[test]
    fn test_rejects_bad_weights() {
        let a2 = algebra(LieType::A, 2);
        assert!(matches!(
            ModuleDescriptor::simple(a2.clone(), &[1, -1]),
            Err(BasisError::InvalidWeight { .. })
        ));
        assert!(ModuleDescriptor::simple(a2, &[1, 0, 0]).is_err());
    }
}
