use crate::card::Card;
use crate::combination::{classify, Combination};
use crate::error::IllegalPlay;
use std::collections::HashSet;

/// 判断一次出牌相对于桌面上的牌是否合法，并返回识别出的牌型
///
/// 1. 不能不出牌，也不能重复选择同一张牌；
/// 2. 桌面为空时，只要是合法牌型就可以出（任意张数，开启新一轮）；
/// 3. 否则张数必须相同、牌型必须相同，并且要严格大过桌面上的牌。
pub fn check_play(played: &[Card], table: &[Card]) -> Result<Combination, IllegalPlay> {
    if played.is_empty() {
        return Err(IllegalPlay::Empty);
    }

    let mut seen = HashSet::with_capacity(played.len());
    if let Some(dup) = played.iter().find(|c| !seen.insert(**c)) {
        return Err(IllegalPlay::DuplicateCard(*dup));
    }

    let combination = classify(played).ok_or(IllegalPlay::InvalidShape)?;
    if table.is_empty() {
        return Ok(combination);
    }

    if played.len() != table.len() {
        return Err(IllegalPlay::SizeMismatch { played: played.len(), table: table.len() });
    }

    // 桌面上的牌一定是之前被接受过的组合
    let on_table = classify(table).ok_or(IllegalPlay::InvalidShape)?;
    if combination.shape() != on_table.shape() {
        return Err(IllegalPlay::ShapeMismatch {
            played: combination.shape(),
            table: on_table.shape(),
        });
    }

    if combination > on_table {
        Ok(combination)
    } else {
        Err(IllegalPlay::NotStronger)
    }
}

/// [`check_play`] 的布尔版本
pub fn is_legal(played: &[Card], table: &[Card]) -> bool {
    check_play(played, table).is_ok()
}
