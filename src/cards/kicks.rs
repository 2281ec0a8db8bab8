use super::rank::Rank;

/// A hand's kicker ranks, as a 13-bit rank mask.
///
/// Two kicker sets of the same size compare correctly as integers:
/// the first position where the masks differ is the highest
/// non-shared rank. Hands of the same category always carry the
/// same number of kickers, so the integer Ord is the lexicographic
/// descending comparison the rules ask for.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Kickers(u16);

/// u16 isomorphism
impl From<Kickers> for u16 {
    fn from(k: Kickers) -> Self {
        k.0
    }
}
impl From<u16> for Kickers {
    fn from(n: u16) -> Self {
        Self(n)
    }
}

/// Vec<Rank> isomorphism, descending
impl From<Kickers> for Vec<Rank> {
    fn from(k: Kickers) -> Self {
        let mut bits = k.0;
        let mut ranks = Vec::new();
        while bits > 0 {
            let rank = Rank::from(bits);
            bits &= !u16::from(rank);
            ranks.push(rank);
        }
        ranks
    }
}
impl From<Vec<Rank>> for Kickers {
    fn from(ranks: Vec<Rank>) -> Self {
        Self(ranks.iter().map(|r| u16::from(*r)).fold(0u16, |a, b| a | b))
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in Vec::<Rank>::from(*self) {
            write!(f, "{} ", rank)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descending_order() {
        let kicks = Kickers::from(vec![Rank::Five, Rank::Ace, Rank::Nine]);
        assert!(Vec::<Rank>::from(kicks) == vec![Rank::Ace, Rank::Nine, Rank::Five]);
    }

    #[test]
    fn lexicographic_compare() {
        let a = Kickers::from(vec![Rank::Ace, Rank::Three]);
        let b = Kickers::from(vec![Rank::King, Rank::Queen]);
        assert!(a > b);
    }
}
