//! # 越南"前进" (Tiến Lên) 规则核心库
//!
//! 这个 `core` crate 包含四人 Tiến Lên 的牌组与发牌、牌型识别、
//! 出牌合法性判断，以及回合状态机（轮转、不出、胜负判定）。
//! 它与具体的展示层（渲染、布局、输入）解耦：展示层只读取状态，
//! 并且只调用 [`play_cards`] 和 [`pass_move`] 两个修改操作。
//!
//! 日志通过 `tracing` 输出，本库不会安装任何 subscriber。

mod card;
mod combination;
mod config;
mod deck;
mod error;
mod logic;
mod state;
mod validator;

pub use card::*;

pub use combination::*;

pub use config::*;

pub use deck::*;

pub use error::*;

pub use logic::{new_game, new_game_with_rng, pass_move, play_cards, try_pass_move, try_play_cards};

pub use state::*;

pub use validator::*;
