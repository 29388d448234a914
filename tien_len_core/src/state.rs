use crate::card::Card;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type GameId = Uuid;
pub type PlayerId = Uuid;

/// 一局游戏的完整状态
///
/// 只有 [`crate::play_cards`] 和 [`crate::pass_move`]（以及它们的 `try_` 版本）会修改它。
/// 游戏进行中 `current_player_index` 始终指向一个仍在局中的座位。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub game_id: GameId,
    pub players: Vec<Seat>,  // 按座位顺序排列，出牌顺序也按这个顺序轮转
    pub current_player_index: usize,
    // 最近一次被接受的出牌；为空表示新一轮，可以出任意合法牌型
    pub table: Vec<Card>,
    pub phase: GamePhase,
    pub winner: Option<PlayerId>,  // 第一个出完手牌的座位
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub id: PlayerId,
    pub name: String,
    pub hand: Vec<Card>,
    pub is_active: bool,  // 是否仍在局中；基础玩法里所有座位一直在局中
    pub passed: bool,  // 本轮是否已经选择不出
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    Finished, // 有人出完了手牌，游戏不可再继续
}

impl Seat {
    pub fn new(name: impl Into<String>, hand: Vec<Card>) -> Seat {
        Seat {
            id: Uuid::new_v4(),
            name: name.into(),
            hand,
            is_active: true,
            passed: false,
        }
    }

    pub fn holds(&self, card: &Card) -> bool {
        self.hand.contains(card)
    }
}

// --- GameState 的查询方法 ---

impl GameState {
    /// 当前行动的座位
    pub fn current_player(&self) -> &Seat {
        &self.players[self.current_player_index]
    }

    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    /// 某个座位的手牌，座位不存在时返回 `None`
    pub fn hand(&self, seat_index: usize) -> Option<&[Card]> {
        self.players.get(seat_index).map(|seat| seat.hand.as_slice())
    }

    pub fn table(&self) -> &[Card] {
        &self.table
    }

    pub fn is_finished(&self) -> bool {
        self.phase == GamePhase::Finished
    }

    /// 获胜座位 (如果游戏已结束)
    pub fn winning_seat(&self) -> Option<&Seat> {
        self.winner.and_then(|id| self.players.iter().find(|seat| seat.id == id))
    }

    pub fn active_seat_count(&self) -> usize {
        self.players.iter().filter(|seat| seat.is_active).count()
    }

    /// 本轮已经选择不出的、仍在局中的座位数
    pub fn passed_count(&self) -> usize {
        self.players.iter().filter(|seat| seat.is_active && seat.passed).count()
    }
}
