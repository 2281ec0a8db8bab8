use super::evaluator::Evaluator;
use super::hand::Hand;
use super::kicks::Kickers;
use super::ranking::Ranking;

/// A fully evaluated hand: category plus kickers.
///
/// The derived Ord is the showdown comparator: category first, then
/// the ranks embedded in the category, then kickers. Equal values
/// mean a genuine chop.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    ranking: Ranking,
    kicks: Kickers,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.ranking
    }
    pub fn kickers(&self) -> Kickers {
        self.kicks
    }
}

impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        let eval = Evaluator::from(hand);
        let ranking = eval.ranking();
        let kicks = eval.kickers(ranking);
        Self { ranking, kicks }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.ranking, self.kicks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strength(s: &str) -> Strength {
        Strength::from(Hand::try_from(s).unwrap())
    }

    #[test]
    fn reflexive_tie() {
        let a = strength("As Kh Qd Jc 9s");
        let b = strength("As Kh Qd Jc 9s");
        assert!(a.cmp(&b) == std::cmp::Ordering::Equal);
    }

    #[test]
    fn suits_do_not_matter() {
        let a = strength("As Kh Qd Jc 9s");
        let b = strength("Ah Ks Qc Jd 9h");
        assert!(a == b);
    }

    #[test]
    fn kicker_decides() {
        let a = strength("As Ah Kd Qc Js");
        let b = strength("Ad Ac Kh Qs Ts");
        assert!(a > b);
    }

    #[test]
    fn flush_fifth_card_decides() {
        let a = strength("As Ks Qs Js 9s");
        let b = strength("Ah Kh Qh Jh 8h");
        assert!(a > b);
    }

    #[test]
    fn wheel_below_six_high() {
        let wheel = strength("As 2h 3d 4c 5s");
        let six = strength("2s 3h 4d 5c 6s");
        assert!(six > wheel);
    }

    #[test]
    fn transitive_sample() {
        let quads = strength("As Ah Ad Ac Ks");
        let boat = strength("Ks Kh Kd Qc Qs");
        let pair = strength("2s 2h Ad Kc Qs");
        assert!(quads > boat);
        assert!(boat > pair);
        assert!(quads > pair);
    }
}
