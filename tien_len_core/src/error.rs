//! 出牌、回合与配置相关的错误类型。
//!
//! 所有"拒绝"都是普通的返回值：调用方（UI）收到后重新提示同一位玩家即可，
//! 不会改变任何游戏状态。

use crate::card::Card;
use crate::combination::Shape;
use thiserror::Error;

/// 规则层面的非法出牌
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IllegalPlay {
    #[error("没有选择任何牌")]
    Empty,
    #[error("同一张牌 {0} 被选择了多次")]
    DuplicateCard(Card),
    #[error("这些牌不能组成合法牌型")]
    InvalidShape,
    #[error("张数不符：桌面上是 {table} 张，出了 {played} 张")]
    SizeMismatch { played: usize, table: usize },
    #[error("牌型不符：桌面上是{table}，出的是{played}")]
    ShapeMismatch { played: Shape, table: Shape },
    #[error("出的牌没有大过桌面上的牌")]
    NotStronger,
}

/// 状态机拒绝一次操作的原因
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("游戏已经结束")]
    GameOver,
    #[error("座位 {0} 不存在")]
    NoSuchSeat(usize),
    #[error("还没轮到座位 {seat}，当前行动的是座位 {current}")]
    NotYourTurn { seat: usize, current: usize },
    #[error("手牌中没有 {0}")]
    CardNotInHand(Card),
    #[error(transparent)]
    Illegal(#[from] IllegalPlay),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("需要恰好 {expected} 个座位，实际配置了 {actual} 个")]
    SeatCount { expected: usize, actual: usize },
    #[error("无法解析配置: {0}")]
    Parse(#[from] serde_json::Error),
}
