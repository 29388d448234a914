use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

// --- 核心数据结构定义 ---

/// 花色 (Suit)
///
/// 花色本身没有"天然"大小，这里的变体顺序就是出牌时的比较顺序：
/// 黑桃 < 梅花 < 方块 < 红心。故意不派生 `Ord`，比较时请调用 [`Suit::strength`]。
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum Suit {
    Spade,   // 黑桃 ♠️
    Club,    // 梅花 ♣️
    Diamond, // 方块 ♦️
    Heart,   // 红心 ♥️
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spade, Suit::Club, Suit::Diamond, Suit::Heart];

    /// 花色大小，0 最小，3 最大
    pub fn strength(self) -> u8 {
        self as u8
    }

    /// 用于卡牌标识符的英文名
    pub fn name(self) -> &'static str {
        match self {
            Suit::Spade => "spades",
            Suit::Club => "clubs",
            Suit::Diamond => "diamonds",
            Suit::Heart => "hearts",
        }
    }
}

/// 点数 (Rank)
///
/// 变体按牌力从小到大排列：3 最小，2 最大（游戏的核心规则）。
/// 同时存在两套互不相干的顺序：
/// - 牌力顺序 [`Rank::strength`]：3 < 4 < ... < K < A < 2，所有出牌比较都用它；
/// - 显示顺序 [`Rank::display_index`]：2 < 3 < ... < K < A，只用于手牌排序展示。
///
/// 为了避免两者被混用，`Rank` 不派生 `Ord`。
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum Rank {
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Two,
}

impl Rank {
    /// 按牌力顺序排列的全部点数
    pub const ALL: [Rank; 13] = [
        Rank::Three, Rank::Four, Rank::Five, Rank::Six, Rank::Seven, Rank::Eight, Rank::Nine,
        Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace, Rank::Two,
    ];

    /// 牌力顺序下的位置，3 为 0，2 为 12
    pub fn strength(self) -> u8 {
        self as u8
    }

    /// 显示顺序下的位置，2 为 0，A 为 12
    pub fn display_index(self) -> u8 {
        (self.strength() + 1) % 13
    }
}

/// 单张扑克牌 (Card)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// 稳定的卡牌标识符，形如 `"10-spades"`
    pub fn id(&self) -> String {
        format!("{}-{}", self.rank, self.suit.name())
    }

    /// 牌力比较：先比点数（2 最大），点数相同再比花色
    pub fn cmp_strength(&self, other: &Card) -> Ordering {
        self.rank
            .strength()
            .cmp(&other.rank.strength())
            .then(self.suit.strength().cmp(&other.suit.strength()))
    }

    /// 显示比较：先比点数（2 最小），点数相同再比花色
    pub fn cmp_display(&self, other: &Card) -> Ordering {
        self.rank
            .display_index()
            .cmp(&other.rank.display_index())
            .then(self.suit.strength().cmp(&other.suit.strength()))
    }
}

/// 按显示顺序排序手牌（仅供展示）
pub fn sort_for_display(cards: &mut [Card]) {
    cards.sort_by(Card::cmp_display);
}

/// 按牌力从小到大排序
pub fn sort_by_strength(cards: &mut [Card]) {
    cards.sort_by(Card::cmp_strength);
}

// --- 实现辅助功能 ---

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match self {
            Suit::Spade => "♠️",
            Suit::Club => "♣️",
            Suit::Diamond => "♦️",
            Suit::Heart => "♥️",
        })
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

// --- 单元测试 ---
