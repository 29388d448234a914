use crate::card::{sort_for_display, Card};
use crate::combination::Combination;
use crate::config::{GameConfig, HAND_SIZE, SEAT_COUNT};
use crate::deck::Deck;
use crate::error::{ConfigError, MoveError};
use crate::state::*;
use crate::validator::check_play;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};
use uuid::Uuid;

// --- 开局 ---

/// 开始一局新游戏
///
/// 洗一副新牌，轮流给四个座位各发 13 张，并按显示顺序整理手牌。
/// 座位 0 先行动，桌面为空。
pub fn new_game(seat_names: [&str; SEAT_COUNT]) -> GameState {
    new_game_with_rng(seat_names, &mut rand::rng())
}

/// 与 [`new_game`] 相同，但使用调用方提供的随机数生成器（传入带种子的 rng 可复现发牌）
pub fn new_game_with_rng<R: Rng + ?Sized>(
    seat_names: [&str; SEAT_COUNT],
    rng: &mut R,
) -> GameState {
    let mut deck = Deck::shuffled(rng);
    let hands = deck.deal(SEAT_COUNT, HAND_SIZE);

    let players: Vec<Seat> = seat_names
        .iter()
        .zip(hands)
        .map(|(name, mut hand)| {
            sort_for_display(&mut hand);
            Seat::new(*name, hand)
        })
        .collect();

    let state = GameState {
        game_id: Uuid::new_v4(),
        players,
        current_player_index: 0,
        table: Vec::new(),
        phase: GamePhase::Playing,
        winner: None,
    };
    info!(game_id = %state.game_id, remaining = deck.len(), "新的一局已发牌");
    state
}

impl GameState {
    /// 按配置开局；配置中有种子时发牌可复现
    pub fn from_config(config: &GameConfig) -> Result<GameState, ConfigError> {
        config.validate()?;
        let mut names = [""; SEAT_COUNT];
        for (slot, name) in names.iter_mut().zip(&config.seat_names) {
            *slot = name.as_str();
        }

        Ok(match config.seed {
            Some(seed) => new_game_with_rng(names, &mut StdRng::seed_from_u64(seed)),
            None => new_game(names),
        })
    }
}

// --- 核心游戏流程函数 ---

/// 出牌
///
/// 成功的前提：轮到该座位、所出的牌都在手牌中、并且按规则可以压过桌面。
/// 成功后这些牌从手牌移到桌面，该座位的"不出"标记被清除，行动权交给下一位，
/// 然后检查是否有人出完手牌。
/// 失败时状态完全不变，返回拒绝原因。
pub fn try_play_cards(
    state: &mut GameState,
    seat_index: usize,
    cards: &[Card],
) -> Result<Combination, MoveError> {
    let result = apply_play(state, seat_index, cards);
    if let Err(e) = &result {
        debug!(seat = seat_index, error = %e, "出牌被拒绝");
    }
    result
}

/// [`try_play_cards`] 的布尔版本，供 UI 直接使用
pub fn play_cards(state: &mut GameState, seat_index: usize, cards: &[Card]) -> bool {
    try_play_cards(state, seat_index, cards).is_ok()
}

/// 选择不出
///
/// 除最后出牌的人以外所有仍在局中的座位都不出之后，本轮结束：
/// 清空桌面并重置所有人的"不出"标记。
/// 注意本轮结束后行动权照常轮转到下一个座位，赢得本轮的人不会额外获得一次出牌机会。
pub fn try_pass_move(state: &mut GameState, seat_index: usize) -> Result<(), MoveError> {
    if let Err(e) = check_turn(state, seat_index) {
        debug!(seat = seat_index, error = %e, "不出被拒绝");
        return Err(e);
    }

    state.players[seat_index].passed = true;
    debug!(seat = seat_index, "不出");

    if state.passed_count() == state.active_seat_count().saturating_sub(1) {
        state.table.clear();
        state.players.iter_mut().filter(|p| p.is_active).for_each(|p| p.passed = false);
        info!(seat = seat_index, "其他人都不出，本轮结束，桌面清空");
    }

    advance_to_next_player(state);
    evaluate_winner(state);
    Ok(())
}

/// [`try_pass_move`] 的布尔版本
pub fn pass_move(state: &mut GameState, seat_index: usize) -> bool {
    try_pass_move(state, seat_index).is_ok()
}

// --- 辅助逻辑函数 ---

fn apply_play(
    state: &mut GameState,
    seat_index: usize,
    cards: &[Card],
) -> Result<Combination, MoveError> {
    check_turn(state, seat_index)?;

    let seat = &state.players[seat_index];
    if let Some(missing) = cards.iter().find(|c| !seat.holds(c)) {
        return Err(MoveError::CardNotInHand(*missing));
    }

    let combination = check_play(cards, &state.table)?;

    let seat = &mut state.players[seat_index];
    seat.hand.retain(|c| !cards.contains(c));
    seat.passed = false;
    let left = seat.hand.len();
    state.table = cards.to_vec();
    debug!(seat = seat_index, play = %combination, left, "出牌");

    advance_to_next_player(state);
    evaluate_winner(state);
    Ok(combination)
}

/// 检查是否轮到该座位行动
fn check_turn(state: &GameState, seat_index: usize) -> Result<(), MoveError> {
    if state.phase == GamePhase::Finished {
        return Err(MoveError::GameOver);
    }
    if seat_index >= state.players.len() {
        return Err(MoveError::NoSuchSeat(seat_index));
    }
    if seat_index != state.current_player_index {
        return Err(MoveError::NotYourTurn {
            seat: seat_index,
            current: state.current_player_index,
        });
    }
    Ok(())
}

/// 将行动权转移给下一位仍在局中的玩家
///
/// # Panics
/// 如果没有任何座位仍在局中则 panic：这只可能是程序错误。
fn advance_to_next_player(state: &mut GameState) {
    assert!(state.players.iter().any(|p| p.is_active), "没有仍在局中的座位，无法轮转");

    let mut next = state.current_player_index;
    loop {
        next = (next + 1) % state.players.len();
        if state.players[next].is_active {
            state.current_player_index = next;
            return;
        }
    }
}

/// 按座位顺序找到第一个出完手牌的在局座位，结束游戏。
/// 即使同时有多个座位没有手牌，也只记录第一个。
fn evaluate_winner(state: &mut GameState) {
    if state.phase == GamePhase::Finished {
        return;
    }
    if let Some(seat) = state.players.iter().find(|p| p.is_active && p.hand.is_empty()) {
        state.phase = GamePhase::Finished;
        state.winner = Some(seat.id);
        info!(winner = %seat.id, name = %seat.name, "游戏结束");
    }
}

// --- 单元测试 ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};
    use crate::error::IllegalPlay;
    use std::collections::HashSet;
    use tracing_subscriber::EnvFilter;
    use Rank::*;
    use Suit::*;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn card(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    // 辅助函数：用指定手牌创建用于测试的GameState，座位 0 先行动
    fn setup_test_game(hands: Vec<Vec<Card>>) -> GameState {
        init_tracing();
        let players = hands
            .into_iter()
            .enumerate()
            .map(|(i, hand)| Seat::new(format!("Seat_{}", i), hand))
            .collect();
        GameState {
            game_id: Uuid::new_v4(),
            players,
            current_player_index: 0,
            table: vec![],
            phase: GamePhase::Playing,
            winner: None,
        }
    }

    fn default_hands() -> Vec<Vec<Card>> {
        vec![
            vec![card(Three, Spade), card(Seven, Spade), card(Seven, Club), card(King, Heart)],
            vec![card(Four, Club), card(Nine, Spade), card(Nine, Diamond), card(Ace, Heart)],
            vec![card(Five, Diamond), card(Seven, Diamond), card(Seven, Heart), card(Two, Spade)],
            vec![card(Six, Heart), card(Ten, Club), card(Jack, Club), card(Two, Heart)],
        ]
    }

    #[test]
    fn test_new_game_deals_sorted_hands() {
        init_tracing();
        let state = new_game(["An", "Bình", "Chi", "Dũng"]);

        assert_eq!(state.players.len(), SEAT_COUNT);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.current_player_index, 0);
        assert!(state.table.is_empty());
        assert_eq!(state.players[3].name, "Dũng");

        let mut all = HashSet::new();
        for seat in &state.players {
            assert_eq!(seat.hand.len(), HAND_SIZE);
            assert!(seat.is_active && !seat.passed);
            let sorted = seat.hand.windows(2).all(|w| w[0].cmp_display(&w[1]).is_lt());
            assert!(sorted, "手牌应按显示顺序排列");
            all.extend(seat.hand.iter().copied());
        }
        assert_eq!(all.len(), 52);
    }

    #[test]
    fn test_seeded_config_is_reproducible() {
        let config = GameConfig { seed: Some(2024), ..GameConfig::default() };
        let a = GameState::from_config(&config).unwrap();
        let b = GameState::from_config(&config).unwrap();
        for (x, y) in a.players.iter().zip(&b.players) {
            assert_eq!(x.hand, y.hand);
            assert_eq!(x.name, y.name);
        }
    }

    #[test]
    fn test_from_config_rejects_wrong_seat_count() {
        let config = GameConfig { seat_names: vec!["An".into()], seed: None };
        assert!(matches!(GameState::from_config(&config), Err(ConfigError::SeatCount { .. })));
    }

    #[test]
    fn test_playing_last_card_wins() {
        let mut state = setup_test_game(vec![
            vec![card(Three, Spade)],
            vec![card(Four, Club)],
            vec![card(Five, Club)],
            vec![card(Six, Club)],
        ]);

        assert!(play_cards(&mut state, 0, &[card(Three, Spade)]));
        assert_eq!(state.table, vec![card(Three, Spade)]);
        assert!(state.players[0].hand.is_empty());
        assert_eq!(state.phase, GamePhase::Finished);
        assert_eq!(state.winner, Some(state.players[0].id));

        // 游戏结束后不能再行动，状态保持不变
        let current = state.current_player_index;
        let finished = state.clone();
        assert_eq!(try_pass_move(&mut state, current), Err(MoveError::GameOver));
        assert_eq!(
            try_play_cards(&mut state, current, &[card(Four, Club)]),
            Err(MoveError::GameOver)
        );
        assert_eq!(state, finished);
    }

    #[test]
    fn test_play_moves_cards_and_advances_turn() {
        let mut state = setup_test_game(default_hands());
        let result = try_play_cards(&mut state, 0, &[card(Seven, Spade), card(Seven, Club)]);

        assert_eq!(result, Ok(Combination::Pair(Seven)));
        assert_eq!(state.players[0].hand, vec![card(Three, Spade), card(King, Heart)]);
        assert_eq!(state.table, vec![card(Seven, Spade), card(Seven, Club)]);
        assert_eq!(state.current_player_index, 1);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_refused_moves_leave_state_untouched() {
        let mut state = setup_test_game(default_hands());
        assert!(play_cards(&mut state, 0, &[card(Seven, Spade), card(Seven, Club)]));
        let before = state.clone();

        // 没轮到
        assert_eq!(
            try_play_cards(&mut state, 2, &[card(Seven, Diamond), card(Seven, Heart)]),
            Err(MoveError::NotYourTurn { seat: 2, current: 1 })
        );
        assert!(!pass_move(&mut state, 3));
        // 手牌中没有
        assert_eq!(
            try_play_cards(&mut state, 1, &[card(Two, Spade), card(Two, Heart)]),
            Err(MoveError::CardNotInHand(card(Two, Spade)))
        );
        // 张数不符
        assert_eq!(
            try_play_cards(&mut state, 1, &[card(Ace, Heart)]),
            Err(MoveError::Illegal(IllegalPlay::SizeMismatch { played: 1, table: 2 }))
        );
        // 座位不存在
        assert_eq!(
            try_play_cards(&mut state, 9, &[card(Ace, Heart)]),
            Err(MoveError::NoSuchSeat(9))
        );

        assert_eq!(state, before);
    }

    #[test]
    fn test_pair_must_beat_pair() {
        let mut state = setup_test_game(default_hands());
        assert!(play_cards(&mut state, 0, &[card(Seven, Spade), card(Seven, Club)]));
        assert!(play_cards(&mut state, 1, &[card(Nine, Spade), card(Nine, Diamond)]));
        // 对7压不过对9
        assert!(!play_cards(&mut state, 2, &[card(Seven, Diamond), card(Seven, Heart)]));
        assert_eq!(state.current_player_index, 2);
    }

    #[test]
    fn test_everyone_else_passing_clears_the_table() {
        let mut state = setup_test_game(default_hands());
        assert!(play_cards(&mut state, 0, &[card(King, Heart)]));

        assert!(pass_move(&mut state, 1));
        assert!(pass_move(&mut state, 2));
        assert_eq!(state.passed_count(), 2);
        assert_eq!(state.table, vec![card(King, Heart)]);

        assert!(pass_move(&mut state, 3));
        assert!(state.table.is_empty(), "第三个人不出后桌面应清空");
        assert!(state.players.iter().all(|p| !p.passed));
        assert_eq!(state.current_player_index, 0);

        // 新一轮可以出任意合法牌型
        assert!(play_cards(&mut state, 0, &[card(Seven, Spade), card(Seven, Club)]));
    }

    #[test]
    fn test_playing_clears_only_own_pass_flag() {
        let mut state = setup_test_game(default_hands());
        assert!(play_cards(&mut state, 0, &[card(Three, Spade)]));
        assert!(pass_move(&mut state, 1));
        assert!(play_cards(&mut state, 2, &[card(Five, Diamond)]));
        assert!(pass_move(&mut state, 3));
        assert!(pass_move(&mut state, 0));

        // 座位 1 之前的"不出"仍然有效：1、3、0 共三人不出，本轮结束
        assert!(state.table.is_empty());
        assert_eq!(state.current_player_index, 1);
    }

    #[test]
    fn test_turn_rotation_skips_inactive_seats() {
        let mut state = setup_test_game(default_hands());
        state.players[1].is_active = false;
        state.players[2].is_active = false;

        assert!(play_cards(&mut state, 0, &[card(Three, Spade)]));
        assert_eq!(state.current_player_index, 3);

        // 只有两个在局座位时，一人不出即结束本轮
        assert!(pass_move(&mut state, 3));
        assert!(state.table.is_empty());
        assert_eq!(state.current_player_index, 0);
    }

    #[test]
    fn test_first_empty_hand_in_seat_order_wins() {
        let mut hands = default_hands();
        hands[0] = vec![card(Three, Spade)];
        hands[2].clear();
        let mut state = setup_test_game(hands);

        assert!(pass_move(&mut state, 0));
        // 座位 2 的手牌本来就是空的，是第一个被发现的
        assert_eq!(state.phase, GamePhase::Finished);
        assert_eq!(state.winner, Some(state.players[2].id));
    }

    #[test]
    #[should_panic]
    fn test_no_active_seat_is_a_programming_error() {
        let mut state = setup_test_game(default_hands());
        state.players.iter_mut().for_each(|p| p.is_active = false);
        let _ = try_pass_move(&mut state, 0);
    }
}
