use crate::card::{sort_by_strength, Card, Rank};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

/// 牌型 (Shape)，不含"非法"。非法组合由 [`classify`] 返回 `None` 表示。
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum Shape {
    Single,
    Pair,
    Triple,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
}

/// 已识别的出牌组合 (Combination)
///
/// 每个变体只保存同牌型之间比较所需的信息：
/// - 单张保存整张牌（点数相同时还要比花色）；
/// - 对子、三条、四条只比点数；
/// - 顺子、同花、葫芦保存组合中牌力最大的那张牌，先比点数再比花色。
///
/// 不同牌型之间不可比较，`partial_cmp` 返回 `None`，因此 `>` 永远为假。
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum Combination {
    Single(Card),
    Pair(Rank),
    Triple(Rank),
    Straight(Card),
    Flush(Card),
    FullHouse(Card),
    FourOfAKind(Rank),
}

impl Combination {
    pub fn shape(&self) -> Shape {
        match self {
            Combination::Single(_) => Shape::Single,
            Combination::Pair(_) => Shape::Pair,
            Combination::Triple(_) => Shape::Triple,
            Combination::Straight(_) => Shape::Straight,
            Combination::Flush(_) => Shape::Flush,
            Combination::FullHouse(_) => Shape::FullHouse,
            Combination::FourOfAKind(_) => Shape::FourOfAKind,
        }
    }

    /// 该牌型需要的张数
    pub fn card_count(&self) -> usize {
        match self.shape() {
            Shape::Single => 1,
            Shape::Pair => 2,
            Shape::Triple => 3,
            Shape::Straight | Shape::Flush | Shape::FullHouse | Shape::FourOfAKind => 5,
        }
    }
}

impl PartialOrd for Combination {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        use Combination::*;
        match (self, other) {
            (Single(a), Single(b)) => Some(a.cmp_strength(b)),
            (Pair(a), Pair(b)) | (Triple(a), Triple(b)) | (FourOfAKind(a), FourOfAKind(b)) => {
                Some(a.strength().cmp(&b.strength()))
            }
            (Straight(a), Straight(b)) | (Flush(a), Flush(b)) | (FullHouse(a), FullHouse(b)) => {
                Some(a.cmp_strength(b))
            }
            _ => None,
        }
    }
}

// --- 牌型识别 ---

/// 识别一组牌的牌型
///
/// 只看牌本身，不关心这些牌是否属于某位玩家（那是状态机的职责）。
/// 5 张牌按以下优先级判断：顺子 > 同花 > 葫芦 > 四条，
/// 因此同花顺会被识别为顺子。
pub fn classify(cards: &[Card]) -> Option<Combination> {
    match cards {
        [single] => Some(Combination::Single(*single)),
        [a, b] => (a.rank == b.rank).then_some(Combination::Pair(a.rank)),
        [a, b, c] => (a.rank == b.rank && b.rank == c.rank).then_some(Combination::Triple(a.rank)),
        [_, _, _, _, _] => classify_five(cards),
        _ => None,
    }
}

fn classify_five(hand: &[Card]) -> Option<Combination> {
    let mut cards = hand.to_vec();
    // 按牌力从小到大排序，最后一张就是最大的牌
    sort_by_strength(&mut cards);
    let highest = cards[cards.len() - 1];

    // 顺子只看点数是否连续（牌力顺序下），花色无关
    let is_straight = cards.windows(2).all(|w| w[0].rank.strength() + 1 == w[1].rank.strength());
    if is_straight {
        return Some(Combination::Straight(highest));
    }

    if cards.windows(2).all(|w| w[0].suit == w[1].suit) {
        return Some(Combination::Flush(highest));
    }

    // 统计点数出现次数
    let mut counts: HashMap<Rank, u8> = HashMap::new();
    for card in &cards {
        *counts.entry(card.rank).or_insert(0) += 1;
    }
    let mut sorted_counts: Vec<(u8, Rank)> = counts.into_iter().map(|(r, c)| (c, r)).collect();
    sorted_counts.sort_by(|a, b| b.0.cmp(&a.0));

    match sorted_counts.as_slice() {
        [(3, _), (2, _)] => Some(Combination::FullHouse(highest)),
        [(4, quad), ..] => Some(Combination::FourOfAKind(*quad)),
        _ => None,
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match self {
            Shape::Single => "单张",
            Shape::Pair => "对子",
            Shape::Triple => "三条",
            Shape::Straight => "顺子",
            Shape::Flush => "同花",
            Shape::FullHouse => "葫芦",
            Shape::FourOfAKind => "四条",
        })
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Combination::Single(c) => write!(f, "单张({})", c),
            Combination::Pair(r) => write!(f, "对子({})", r),
            Combination::Triple(r) => write!(f, "三条({})", r),
            Combination::FourOfAKind(r) => write!(f, "四条({})", r),
            Combination::Straight(c) | Combination::Flush(c) | Combination::FullHouse(c) => {
                write!(f, "{}({}最大)", self.shape(), c)
            }
        }
    }
}

// --- 单元测试 ---
