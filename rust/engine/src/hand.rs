use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

/// Hand categories with their fixed scores. Only the score is compared between hands
/// unless the kicker extension is selected via [`TieBreak::Kickers`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Fewer than seven resolvable cards; never rankable.
    IncompleteHand = 0,
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    pub fn score(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::IncompleteHand => "Incomplete Hand",
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

/// How showdown breaks ties between equal categories.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    /// Compare categories only; the first player evaluated wins a tie.
    #[default]
    #[serde(alias = "category")]
    CategoryOnly,
    /// Compare kickers within a category.
    Kickers,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandStrength {
    pub category: Category,
    pub strength: u32,
}

impl HandStrength {
    pub const INCOMPLETE: HandStrength = HandStrength {
        category: Category::IncompleteHand,
        strength: 0,
    };

    fn of(category: Category) -> Self {
        Self {
            category,
            strength: category.score() as u32,
        }
    }

    pub fn is_rankable(&self) -> bool {
        self.category != Category::IncompleteHand
    }
}

/// Category plus kicker ranks, high to low, for the tie-break extension.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RankedHand {
    pub category: Category,
    pub kickers: [u8; 5],
}

/// Evaluates a seven-card hand where some slots may still be unassigned placeholders.
/// Placeholders are filtered out; anything short of seven real cards is
/// [`Category::IncompleteHand`].
pub fn evaluate(cards: &[Option<Card>]) -> HandStrength {
    match resolve_seven(cards) {
        Some(seven) => evaluate_hand(&seven),
        None => HandStrength::INCOMPLETE,
    }
}

/// Best category over all 21 five-card subsets of `cards`.
pub fn evaluate_hand(cards: &[Card; 7]) -> HandStrength {
    let best = combinations(cards, 5)
        .iter()
        .map(|five| score_five(five))
        .max()
        .unwrap_or(Category::IncompleteHand);
    HandStrength::of(best)
}

/// Kicker-aware variant of [`evaluate`]; `None` when the hand is incomplete.
pub fn evaluate_ranked(cards: &[Option<Card>]) -> Option<RankedHand> {
    let seven = resolve_seven(cards)?;
    combinations(&seven, 5)
        .iter()
        .map(|five| rank_five(five))
        .max_by(compare_ranked)
}

pub fn compare_ranked(a: &RankedHand, b: &RankedHand) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.kickers.cmp(&b.kickers),
        ord => ord,
    }
}

fn resolve_seven(cards: &[Option<Card>]) -> Option<[Card; 7]> {
    let resolved: Vec<Card> = cards.iter().flatten().copied().collect();
    resolved.try_into().ok()
}

/// All `size`-element subsets of `items`, preserving input order within each subset.
pub fn combinations<T: Copy>(items: &[T], size: usize) -> Vec<Vec<T>> {
    fn combine<T: Copy>(
        items: &[T],
        size: usize,
        start: usize,
        chosen: &mut Vec<T>,
        out: &mut Vec<Vec<T>>,
    ) {
        if chosen.len() == size {
            out.push(chosen.clone());
            return;
        }
        for i in start..items.len() {
            chosen.push(items[i]);
            combine(items, size, i + 1, chosen, out);
            chosen.pop();
        }
    }

    let mut out = Vec::new();
    if size <= items.len() {
        combine(items, size, 0, &mut Vec::with_capacity(size), &mut out);
    }
    out
}

struct FiveShape {
    // (count, rank) sorted by count desc then rank desc
    groups: Vec<(u8, u8)>,
    flush: bool,
    straight_high: Option<u8>,
}

fn shape(cards: &[Card]) -> FiveShape {
    let mut rank_counts = [0u8; 15];
    for c in cards {
        rank_counts[c.rank.value() as usize] += 1;
    }
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .rev()
        .filter(|&r| rank_counts[r as usize] > 0)
        .map(|r| (rank_counts[r as usize], r))
        .collect();
    groups.sort_by(|a, b| b.cmp(a));

    let flush = cards.windows(2).all(|w| w[0].suit == w[1].suit);

    let mut unique: Vec<u8> = groups.iter().map(|&(_, r)| r).collect();
    unique.sort_unstable_by(|a, b| b.cmp(a));
    let straight_high = if unique.len() == 5 {
        if unique[0] - unique[4] == 4 {
            Some(unique[0])
        } else if unique == [14, 5, 4, 3, 2] {
            // wheel: ace plays low
            Some(5)
        } else {
            None
        }
    } else {
        None
    };

    FiveShape {
        groups,
        flush,
        straight_high,
    }
}

/// Category of exactly five cards.
pub fn score_five(cards: &[Card]) -> Category {
    debug_assert_eq!(cards.len(), 5);
    category_of(&shape(cards), cards)
}

fn category_of(s: &FiveShape, cards: &[Card]) -> Category {
    let counts: Vec<u8> = s.groups.iter().map(|&(c, _)| c).collect();
    let straight = s.straight_high.is_some();
    let has = |rank: Rank| cards.iter().any(|c| c.rank == rank);

    if s.flush && straight && has(Rank::Ace) && has(Rank::King) {
        Category::RoyalFlush
    } else if s.flush && straight {
        Category::StraightFlush
    } else if counts[0] == 4 {
        Category::FourOfAKind
    } else if counts[0] == 3 && counts.get(1) == Some(&2) {
        Category::FullHouse
    } else if s.flush {
        Category::Flush
    } else if straight {
        Category::Straight
    } else if counts[0] == 3 {
        Category::ThreeOfAKind
    } else if counts[0] == 2 && counts.get(1) == Some(&2) {
        Category::TwoPair
    } else if counts[0] == 2 {
        Category::OnePair
    } else {
        Category::HighCard
    }
}

fn rank_five(cards: &[Card]) -> RankedHand {
    let s = shape(cards);
    let category = category_of(&s, cards);
    let mut kickers = [0u8; 5];
    match s.straight_high {
        Some(high)
            if matches!(
                category,
                Category::Straight | Category::StraightFlush | Category::RoyalFlush
            ) =>
        {
            kickers[0] = high;
        }
        _ => {
            for (slot, &(_, rank)) in kickers.iter_mut().zip(s.groups.iter()) {
                *slot = rank;
            }
        }
    }
    RankedHand { category, kickers }
}
