//! Monomial orderings
//!
//! Greedy basis selection walks candidates from smallest to largest under the
//! active ordering, so the ordering decides which monomials end up in a basis.
//!
//! Conventions (variables x₁ > x₂ > ⋯ > x_N where that matters):
//!
//! - `lex`: first differing exponent decides, larger exponent is larger
//! - `invlex`: last differing exponent decides, larger exponent is larger
//! - `revlex` tiebreak (used by the `degrevlex` family): last differing
//!   exponent decides, *smaller* exponent is larger
//! - `neg*`: local orderings in which 1 is the largest monomial
//! - `w*`: degree replaced by the weighted degree Σ eᵢwᵢ, with wᵢ the height of
//!   the i-th operator root

use super::monomial::Monomial;
use crate::error::{BasisError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A named monomial ordering
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonomialOrderingKind {
    Lex,
    Invlex,
    Deglex,
    #[default]
    Degrevlex,
    Deginvlex,
    Neglex,
    Neginvlex,
    Negdeglex,
    Negdegrevlex,
    Wdeglex,
    Wdegrevlex,
}

impl MonomialOrderingKind {
    pub const ALL: [MonomialOrderingKind; 11] = [
        MonomialOrderingKind::Lex,
        MonomialOrderingKind::Invlex,
        MonomialOrderingKind::Deglex,
        MonomialOrderingKind::Degrevlex,
        MonomialOrderingKind::Deginvlex,
        MonomialOrderingKind::Neglex,
        MonomialOrderingKind::Neginvlex,
        MonomialOrderingKind::Negdeglex,
        MonomialOrderingKind::Negdegrevlex,
        MonomialOrderingKind::Wdeglex,
        MonomialOrderingKind::Wdegrevlex,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            MonomialOrderingKind::Lex => "lex",
            MonomialOrderingKind::Invlex => "invlex",
            MonomialOrderingKind::Deglex => "deglex",
            MonomialOrderingKind::Degrevlex => "degrevlex",
            MonomialOrderingKind::Deginvlex => "deginvlex",
            MonomialOrderingKind::Neglex => "neglex",
            MonomialOrderingKind::Neginvlex => "neginvlex",
            MonomialOrderingKind::Negdeglex => "negdeglex",
            MonomialOrderingKind::Negdegrevlex => "negdegrevlex",
            MonomialOrderingKind::Wdeglex => "wdeglex",
            MonomialOrderingKind::Wdegrevlex => "wdegrevlex",
        }
    }

    /// True for the orderings that use operator heights
    pub const fn is_weighted(&self) -> bool {
        matches!(
            self,
            MonomialOrderingKind::Wdeglex | MonomialOrderingKind::Wdegrevlex
        )
    }

    /// True for local orderings (1 is the largest monomial)
    pub const fn is_local(&self) -> bool {
        matches!(
            self,
            MonomialOrderingKind::Neglex
                | MonomialOrderingKind::Neginvlex
                | MonomialOrderingKind::Negdeglex
                | MonomialOrderingKind::Negdegrevlex
        )
    }
}

impl FromStr for MonomialOrderingKind {
    type Err = BasisError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        MonomialOrderingKind::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| BasisError::UnknownOrdering(s.to_string()))
    }
}

impl fmt::Display for MonomialOrderingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn cmp_lex(a: &[u32], b: &[u32]) -> Ordering {
    a.iter()
        .zip(b)
        .find(|(x, y)| x != y)
        .map_or(Ordering::Equal, |(x, y)| x.cmp(y))
}

fn cmp_invlex(a: &[u32], b: &[u32]) -> Ordering {
    a.iter()
        .zip(b)
        .rev()
        .find(|(x, y)| x != y)
        .map_or(Ordering::Equal, |(x, y)| x.cmp(y))
}

fn cmp_revlex(a: &[u32], b: &[u32]) -> Ordering {
    cmp_invlex(b, a)
}

/// A monomial ordering bound to the variables of one birational sequence
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MonomialOrdering {
    kind: MonomialOrderingKind,
    /// Variable weights for the `w*` orderings (operator heights)
    weights: Vec<i64>,
}

impl MonomialOrdering {
    pub fn new(kind: MonomialOrderingKind, weights: Vec<i64>) -> Self {
        MonomialOrdering { kind, weights }
    }

    pub fn kind(&self) -> MonomialOrderingKind {
        self.kind
    }

    pub fn weights(&self) -> &[i64] {
        &self.weights
    }

    pub fn compare(&self, a: &Monomial, b: &Monomial) -> Ordering {
        let (x, y) = (a.exponents(), b.exponents());
        let degree = || a.degree().cmp(&b.degree());
        let weighted = || {
            a.weighted_degree(&self.weights)
                .cmp(&b.weighted_degree(&self.weights))
        };
        match self.kind {
            MonomialOrderingKind::Lex => cmp_lex(x, y),
            MonomialOrderingKind::Invlex => cmp_invlex(x, y),
            MonomialOrderingKind::Deglex => degree().then_with(|| cmp_lex(x, y)),
            MonomialOrderingKind::Degrevlex => degree().then_with(|| cmp_revlex(x, y)),
            MonomialOrderingKind::Deginvlex => degree().then_with(|| cmp_invlex(x, y)),
            MonomialOrderingKind::Neglex => cmp_lex(y, x),
            MonomialOrderingKind::Neginvlex => cmp_invlex(y, x),
            MonomialOrderingKind::Negdeglex => degree().reverse().then_with(|| cmp_lex(x, y)),
            MonomialOrderingKind::Negdegrevlex => {
                degree().reverse().then_with(|| cmp_revlex(x, y))
            }
            MonomialOrderingKind::Wdeglex => weighted().then_with(|| cmp_lex(x, y)),
            MonomialOrderingKind::Wdegrevlex => weighted().then_with(|| cmp_revlex(x, y)),
        }
    }

    /// Sorts ascending; the first entries are tried first during selection
    pub fn sort(&self, monomials: &mut [Monomial]) {
        monomials.sort_by(|a, b| self.compare(a, b));
    }

    pub fn sorted<'a>(&self, monomials: impl IntoIterator<Item = &'a Monomial>) -> Vec<Monomial> {
        let mut result: Vec<Monomial> = monomials.into_iter().cloned().collect();
        self.sort(&mut result);
        result
    }
}

impl fmt::Display for MonomialOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind.is_weighted() {
            write!(f, "{}({:?})", self.kind, self.weights)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(e: &[u32]) -> Monomial {
        Monomial::from_exponents(e.to_vec())
    }

    fn ordering(kind: MonomialOrderingKind) -> MonomialOrdering {
        MonomialOrdering::new(kind, vec![1, 1, 2])
    }

    #[test]
    fn test_parse_names() {
        for kind in MonomialOrderingKind::ALL {
            assert_eq!(kind.name().parse::<MonomialOrderingKind>().unwrap(), kind);
        }
        assert_eq!(
            "DegRevLex".parse::<MonomialOrderingKind>().unwrap(),
            MonomialOrderingKind::Degrevlex
        );
        assert_eq!(
            "grevlex".parse::<MonomialOrderingKind>(),
            Err(BasisError::UnknownOrdering("grevlex".to_string()))
        );
    }

    #[test]
    fn test_lex_and_invlex() {
        let lex = ordering(MonomialOrderingKind::Lex);
        assert_eq!(lex.compare(&m(&[1, 0, 0]), &m(&[0, 5, 5])), Ordering::Greater);
        let invlex = ordering(MonomialOrderingKind::Invlex);
        assert_eq!(invlex.compare(&m(&[1, 0, 0]), &m(&[0, 0, 1])), Ordering::Less);
    }

    #[test]
    fn test_degrevlex_ties() {
        let o = ordering(MonomialOrderingKind::Degrevlex);
        // same degree: the monomial with the smaller last exponent is larger
        assert_eq!(o.compare(&m(&[1, 0, 0]), &m(&[0, 0, 1])), Ordering::Greater);
        assert_eq!(o.compare(&m(&[1, 1, 0]), &m(&[0, 1, 1])), Ordering::Greater);
        assert_eq!(o.compare(&m(&[0, 0, 1]), &m(&[1, 1, 0])), Ordering::Less);
    }

    #[test]
    fn test_local_orderings_put_one_last() {
        for kind in MonomialOrderingKind::ALL.into_iter().filter(|k| k.is_local()) {
            let o = ordering(kind);
            assert_eq!(
                o.compare(&m(&[0, 0, 0]), &m(&[0, 1, 0])),
                Ordering::Greater,
                "{}",
                kind
            );
        }
    }

    #[test]
    fn test_weighted_degree_decides_first() {
        let o = ordering(MonomialOrderingKind::Wdegrevlex);
        // x3 has weight 2, x1 weight 1
        assert_eq!(o.compare(&m(&[0, 0, 1]), &m(&[1, 0, 0])), Ordering::Greater);
        assert_eq!(o.compare(&m(&[0, 0, 1]), &m(&[1, 1, 0])), Ordering::Greater);
        assert_eq!(o.to_string(), "wdegrevlex([1, 1, 2])");
    }

    #[test]
    fn test_sort_ascending() {
        let o = ordering(MonomialOrderingKind::Degrevlex);
        let mut v = vec![m(&[1, 1, 0]), m(&[0, 0, 1]), m(&[0, 0, 0]), m(&[0, 1, 1])];
        o.sort(&mut v);
        assert_eq!(v, vec![m(&[0, 0, 0]), m(&[0, 0, 1]), m(&[0, 1, 1]), m(&[1, 1, 0])]);
    }
}
