use super::hand::Hand;
use super::kicks::Kickers;
use super::rank::Rank;
use super::ranking::Ranking;
use super::suit::Suit;

/// A-2-3-4-5, the only straight where the ace plays low.
const WHEEL: u16 = 0b_1000000001111;

/// Finds the best 5-card interpretation of a set of 2 to 7 cards.
///
/// Works directly on the bitset rather than enumerating 5-card
/// combinations: flushes are suit-plane popcounts, straights are
/// shifted ANDs over the rank union, n-of-a-kinds are descending
/// scans of rank multiplicity. With fewer than 5 cards it returns
/// the best category the available cards can make, which is what an
/// early all-in showdown against a partial board needs.
pub struct Evaluator(Hand);

impl From<Hand> for Evaluator {
    fn from(h: Hand) -> Self {
        Self(h)
    }
}

impl Evaluator {
    pub fn ranking(&self) -> Ranking {
        None.or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_full_house())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_two_pair())
            .or_else(|| self.find_1_pair())
            .or_else(|| self.find_high_card())
            .expect("at least one card in Hand")
    }

    pub fn kickers(&self, ranking: Ranking) -> Kickers {
        match ranking {
            // flush ties break on all five flush cards, so kickers
            // come from the flush suit's plane, not the rank union
            Ranking::Flush(hi) => {
                let suit = self.flush_suit().expect("flush ranking implies a flush suit");
                let plane = Self::keep_top(self.0.of(&suit), 5);
                Kickers::from(plane & !u16::from(hi))
            }
            _ => match ranking.n_kickers() {
                0 => Kickers::default(),
                n => Kickers::from(Self::keep_top(self.0.ranks() & ranking.mask(), n)),
            },
        }
    }

    //

    fn find_high_card(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(1, None).map(Ranking::HighCard)
    }
    fn find_1_pair(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2, None).map(Ranking::OnePair)
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3, None).map(Ranking::ThreeOAK)
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(4, None).map(Ranking::FourOAK)
    }
    fn find_two_pair(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2, None).and_then(|hi| {
            self.find_rank_of_n_oak(2, Some(hi))
                .map(|lo| Ranking::TwoPair(hi, lo))
        })
    }
    fn find_full_house(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3, None).and_then(|trips| {
            self.find_rank_of_n_oak(2, Some(trips))
                .map(|pair| Ranking::FullHouse(trips, pair))
        })
    }
    fn find_straight(&self) -> Option<Ranking> {
        Self::find_rank_of_straight(self.0.ranks()).map(Ranking::Straight)
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.flush_suit().map(|suit| {
            let plane = self.0.of(&suit);
            Ranking::Flush(Rank::from(plane))
        })
    }
    fn find_straight_flush(&self) -> Option<Ranking> {
        self.flush_suit().and_then(|suit| {
            Self::find_rank_of_straight(self.0.of(&suit)).map(Ranking::StraightFlush)
        })
    }

    //

    fn find_rank_of_straight(ranks: u16) -> Option<Rank> {
        let mut bits = ranks;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        if bits > 0 {
            Some(Rank::from(bits))
        } else if WHEEL == (WHEEL & ranks) {
            Some(Rank::Five)
        } else {
            None
        }
    }
    fn flush_suit(&self) -> Option<Suit> {
        Suit::all()
            .into_iter()
            .find(|suit| self.0.of(suit).count_ones() >= 5)
    }
    /// highest rank present at least n times, optionally skipping
    /// one already-counted rank
    fn find_rank_of_n_oak(&self, n: usize, skip: Option<Rank>) -> Option<Rank> {
        Rank::all()
            .into_iter()
            .rev()
            .filter(|rank| Some(*rank) != skip)
            .find(|rank| self.0.count(*rank) >= n)
    }
    /// clear low bits until at most n remain
    fn keep_top(mut bits: u16, n: usize) -> u16 {
        while bits.count_ones() as usize > n {
            bits &= bits - 1;
        }
        bits
    }
}
