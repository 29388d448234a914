use crate::card::{Card, Rank, Suit};
use rand::Rng;
use rand::prelude::SliceRandom;
use serde::{Deserialize, Serialize};

/// 一副牌的张数
pub const DECK_SIZE: usize = 52;

/// 牌堆 (Deck)
///
/// 牌从末尾抽出。牌堆只会变小，抽空之后 [`Deck::draw`] 返回 `None` 而不是报错，
/// 调用方需要自己控制抽牌数量（4 人各 13 张正好用完 52 张）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// 创建一副完整的、未洗的 52 张牌，每个 (花色, 点数) 恰好出现一次
    pub fn new() -> Deck {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for &suit in &Suit::ALL {
            for &rank in &Rank::ALL {
                cards.push(Card { rank, suit });
            }
        }
        Deck { cards }
    }

    /// 创建并洗好一副新牌
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Deck {
        let mut deck = Deck::new();
        deck.shuffle(rng);
        deck
    }

    /// Fisher–Yates 洗牌；需要可复现时传入带种子的 rng
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// 抽一张牌，牌堆已空时返回 `None`
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// 最多抽 `count` 张，牌不够时返回的数量会少于 `count`
    pub fn draw_many(&mut self, count: usize) -> Vec<Card> {
        let mut drawn = Vec::with_capacity(count);
        for _ in 0..count {
            match self.draw() {
                Some(card) => drawn.push(card),
                None => break,
            }
        }
        drawn
    }

    /// 轮流给 `seats` 个座位发牌，每人 `count` 张。
    /// 牌堆耗尽时提前停止，此时部分座位拿到的牌会少于 `count`。
    pub fn deal(&mut self, seats: usize, count: usize) -> Vec<Vec<Card>> {
        let mut hands = vec![Vec::with_capacity(count); seats];
        'dealing: for _ in 0..count {
            for hand in hands.iter_mut() {
                match self.draw() {
                    Some(card) => hand.push(card),
                    None => break 'dealing,
                }
            }
        }
        hands
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Deck::new()
    }
}
