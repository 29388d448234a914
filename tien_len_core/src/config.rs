use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// 一局游戏的座位数
pub const SEAT_COUNT: usize = 4;
/// 每人发牌张数
pub const HAND_SIZE: usize = 13;

/// 开局配置
///
/// 字段:
/// - seat_names: 四个座位的显示名，按座位顺序排列
/// - seed: 可选的洗牌种子；给定时发牌结果可以复现
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub seat_names: Vec<String>,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            seat_names: (1..=SEAT_COUNT).map(|i| format!("Player {}", i)).collect(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// 从 JSON 文本读取配置，缺省字段使用默认值
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.seat_names.len() != SEAT_COUNT {
            return Err(ConfigError::SeatCount {
                expected: SEAT_COUNT,
                actual: self.seat_names.len(),
            });
        }
        Ok(())
    }
}
