use serde::Serialize;

/// Card rank carrying its poker value: Two is 2, Ace is 14.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub const fn all() -> [Self; 13] {
        [
            Self::Two,
            Self::Three,
            Self::Four,
            Self::Five,
            Self::Six,
            Self::Seven,
            Self::Eight,
            Self::Nine,
            Self::Ten,
            Self::Jack,
            Self::Queen,
            Self::King,
            Self::Ace,
        ]
    }

    /// position in the 13-bit rank plane
    pub const fn bit(&self) -> u8 {
        *self as u8 - 2
    }

    const fn plane() -> u16 {
        0b1111111111111
    }
}

/// u8 isomorphism over the poker value 2..=14
impl From<u8> for Rank {
    fn from(n: u8) -> Rank {
        match n {
            2 => Rank::Two,
            3 => Rank::Three,
            4 => Rank::Four,
            5 => Rank::Five,
            6 => Rank::Six,
            7 => Rank::Seven,
            8 => Rank::Eight,
            9 => Rank::Nine,
            10 => Rank::Ten,
            11 => Rank::Jack,
            12 => Rank::Queen,
            13 => Rank::King,
            14 => Rank::Ace,
            _ => panic!("invalid rank u8: {}", n),
        }
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r as u8
    }
}

/// u16 isomorphism
///
/// One bit per rank, Two at bit 0. Converting back takes the
/// highest set bit, which is what straight detection wants.
impl From<u16> for Rank {
    fn from(n: u16) -> Rank {
        let msb = (16 - 1 - (n & Self::plane()).leading_zeros()) as u8;
        Rank::from(msb + 2)
    }
}
impl From<Rank> for u16 {
    fn from(r: Rank) -> u16 {
        1 << r.bit()
    }
}

/// u64 injection
///
/// The same rank bit turned on in each of the four suit planes.
impl From<Rank> for u64 {
    fn from(r: Rank) -> u64 {
        (1 | 1 << 13 | 1 << 26 | 1 << 39) << r.bit()
    }
}

/// str isomorphism
impl From<&str> for Rank {
    fn from(s: &str) -> Self {
        match s {
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => panic!("invalid rank str: {}", s),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rank::Two => "2",
                Rank::Three => "3",
                Rank::Four => "4",
                Rank::Five => "5",
                Rank::Six => "6",
                Rank::Seven => "7",
                Rank::Eight => "8",
                Rank::Nine => "9",
                Rank::Ten => "T",
                Rank::Jack => "J",
                Rank::Queen => "Q",
                Rank::King => "K",
                Rank::Ace => "A",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for rank in Rank::all() {
            assert!(rank == Rank::from(u8::from(rank)));
        }
    }

    #[test]
    fn bijective_u16() {
        for rank in Rank::all() {
            assert!(rank == Rank::from(u16::from(rank)));
        }
    }

    #[test]
    fn injective_u64() {
        assert!(u64::from(Rank::Two) == 0b1_0000000000001_0000000000001_0000000000001);
    }

    #[test]
    fn msb_wins() {
        let both = u16::from(Rank::Jack) | u16::from(Rank::Five);
        assert!(Rank::from(both) == Rank::Jack);
    }
}
