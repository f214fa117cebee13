//! Game state management for the Lines of Action GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, error};

use crate::error::{EngineError, GameError};
use crate::rules::{game_result, moves_from, WinType};
use crate::{AIEngine, Board, EngineConfig, Move, MoveResult, Pos, Side};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human: Side },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human: Side::Black }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<Result<MoveResult, EngineError>>,
        start_time: Instant,
    },
}

/// Why the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    Connection,
    Immobilization,
    Concession,
}

impl From<WinType> for EndReason {
    fn from(win: WinType) -> Self {
        match win {
            WinType::Connection => EndReason::Connection,
            WinType::Immobilization => EndReason::Immobilization,
        }
    }
}

/// Game result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Side,
    pub reason: EndReason,
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Main game state
///
/// `history` holds every move played; `cursor` is how many of them are
/// currently applied to `board`. The two differ only while stepping back
/// through the game for review.
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub game_over: Option<GameResult>,
    pub selected: Option<Pos>,
    pub destinations: Vec<Move>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub message: Option<String>,
    /// Undo is refused while this is off; stepping through history still works
    pub undo_enabled: bool,
    history: Vec<Move>,
    cursor: usize,
    config: EngineConfig,
}

impl GameState {
    pub fn new(mode: GameMode, config: EngineConfig) -> Self {
        Self {
            board: Board::new(),
            mode,
            game_over: None,
            selected: None,
            destinations: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            message: None,
            undo_enabled: true,
            history: Vec::new(),
            cursor: 0,
            config,
        }
    }

    pub fn reset(&mut self) {
        let undo_enabled = self.undo_enabled;
        *self = Self::new(self.mode, self.config);
        self.undo_enabled = undo_enabled;
    }

    #[inline]
    pub fn current_turn(&self) -> Side {
        self.board.side_to_move()
    }

    #[inline]
    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Moves played so far, including any stepped back over
    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Number of moves currently applied to the board
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The move that produced the displayed position
    pub fn last_move(&self) -> Option<Move> {
        self.cursor.checked_sub(1).map(|i| self.history[i])
    }

    /// True while the board shows an earlier position than the latest one
    #[inline]
    pub fn is_reviewing(&self) -> bool {
        self.cursor < self.history.len()
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.current_turn() == human,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.current_turn() != human,
            GameMode::PvP => false,
        }
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Whether the AI should be started this frame
    pub fn wants_ai_move(&self) -> bool {
        self.is_ai_turn()
            && !self.is_ai_thinking()
            && self.game_over.is_none()
            && !self.is_reviewing()
    }

    fn check_can_move(&self) -> Result<(), GameError> {
        if self.game_over.is_some() {
            return Err(GameError::GameOver);
        }
        if self.is_ai_thinking() {
            return Err(GameError::AiThinking);
        }
        if self.is_reviewing() {
            return Err(GameError::Reviewing);
        }
        if !self.is_human_turn() {
            return Err(GameError::NotYourTurn);
        }
        Ok(())
    }

    /// Handle a click on a square.
    ///
    /// Clicking an own piece selects it and lists its destinations. Clicking
    /// one of those destinations plays the move. Anything else clears the
    /// selection.
    pub fn click(&mut self, pos: Pos) -> Result<(), GameError> {
        self.check_can_move()?;

        if let Some(mv) = self.destinations.iter().find(|m| m.to == pos).copied() {
            self.execute_move(mv);
            return Ok(());
        }

        if self.board.side_at(pos) == Some(self.current_turn()) {
            self.selected = Some(pos);
            self.destinations = moves_from(&self.board, pos);
            return Ok(());
        }

        let had_selection = self.selected.is_some();
        self.clear_selection();
        if had_selection {
            Err(GameError::IllegalMove)
        } else {
            Ok(())
        }
    }

    /// Play a move from `from` to `to` for the human side
    pub fn try_move(&mut self, from: Pos, to: Pos) -> Result<(), GameError> {
        self.check_can_move()?;
        let mv = moves_from(&self.board, from)
            .into_iter()
            .find(|m| m.to == to)
            .ok_or(GameError::IllegalMove)?;
        if self.board.side_at(from) != Some(self.current_turn()) {
            return Err(GameError::IllegalMove);
        }
        self.execute_move(mv);
        Ok(())
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.destinations.clear();
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, mv: Move) {
        let mover = self.current_turn();
        self.board.apply_move(mv);
        self.history.truncate(self.cursor);
        self.history.push(mv);
        self.cursor += 1;
        self.clear_selection();
        self.move_timer.stop();
        self.message = None;
        debug!(%mover, %mv, "move played");

        if let Some((winner, win)) = game_result(&self.board, mover) {
            self.game_over = Some(GameResult {
                winner,
                reason: win.into(),
            });
            return;
        }

        self.move_timer.start();
    }

    /// Start AI thinking
    pub fn start_ai_thinking(&mut self) {
        if !self.wants_ai_move() {
            return;
        }

        let board = self.board.clone();
        let config = self.config;
        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::from_config(config);
            let _ = tx.send(engine.get_move(&board));
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
            } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            if self.game_over.is_some() {
                return;
            }
            self.move_timer.set_ai_time(elapsed);

            match result {
                Ok(move_result) => {
                    let mv = move_result.best_move;
                    self.last_ai_result = Some(move_result);
                    self.execute_move(mv);
                }
                Err(err) => {
                    error!(%err, "AI search failed");
                    self.message = Some(err.to_string());
                }
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Take back the last move, or the last human and AI moves in PvE.
    pub fn undo(&mut self) {
        if !self.undo_enabled || self.is_ai_thinking() {
            return;
        }
        while self.step_forward() {}
        if self.history.is_empty() {
            return;
        }

        // For PvE, undo back to the human's turn
        let undo_count = match self.mode {
            GameMode::PvE { human } => {
                let last_mover = self.current_turn().opponent();
                if last_mover != human && self.history.len() >= 2 {
                    2
                } else {
                    1
                }
            }
            GameMode::PvP => 1,
        };

        for _ in 0..undo_count {
            if let Some(mv) = self.history.pop() {
                self.board.undo_move(mv);
                self.cursor -= 1;
            }
        }

        self.game_over = None;
        self.clear_selection();
        self.message = None;
        self.move_timer.start();
    }

    /// Show the position one move earlier. Returns false at the start.
    pub fn step_back(&mut self) -> bool {
        if self.is_ai_thinking() || self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.board.undo_move(self.history[self.cursor]);
        self.clear_selection();
        true
    }

    /// Show the position one move later. Returns false at the latest position.
    pub fn step_forward(&mut self) -> bool {
        if self.is_ai_thinking() || !self.is_reviewing() {
            return false;
        }
        self.board.apply_move(self.history[self.cursor]);
        self.cursor += 1;
        self.clear_selection();
        true
    }

    /// The human side resigns (the side to move in PvP).
    ///
    /// A search still running is abandoned; its reply is never played.
    pub fn concede(&mut self) {
        if self.game_over.is_some() {
            return;
        }
        self.ai_state = AiState::Idle;
        let loser = match self.mode {
            GameMode::PvE { human } => human,
            GameMode::PvP => self.current_turn(),
        };
        self.game_over = Some(GameResult {
            winner: loser.opponent(),
            reason: EndReason::Concession,
        });
        self.clear_selection();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pvp() -> GameState {
        GameState::new(GameMode::PvP, EngineConfig::new(1, 100))
    }

    #[test]
    fn test_select_then_move() {
        let mut state = pvp();
        state.click(Pos::new(1, 0)).unwrap();
        assert_eq!(state.selected, Some(Pos::new(1, 0)));
        assert!(state.destinations.iter().any(|m| m.to == Pos::new(1, 2)));

        state.click(Pos::new(1, 2)).unwrap();
        assert_eq!(state.board.side_at(Pos::new(1, 2)), Some(Side::Black));
        assert_eq!(state.current_turn(), Side::White);
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_enemy_piece_is_not_selectable() {
        let mut state = pvp();
        state.click(Pos::new(0, 1)).unwrap();
        assert_eq!(state.selected, None);

        state.click(Pos::new(1, 0)).unwrap();
        assert_eq!(state.click(Pos::new(5, 5)), Err(GameError::IllegalMove));
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_try_move_rejects_illegal() {
        let mut state = pvp();
        assert_eq!(
            state.try_move(Pos::new(1, 0), Pos::new(1, 5)),
            Err(GameError::IllegalMove)
        );
        assert!(state.try_move(Pos::new(1, 0), Pos::new(1, 2)).is_ok());
    }

    #[test]
    fn test_undo_pvp_restores_board() {
        let mut state = pvp();
        state.try_move(Pos::new(1, 0), Pos::new(1, 2)).unwrap();
        state.try_move(Pos::new(0, 1), Pos::new(2, 1)).unwrap();
        state.undo();
        assert_eq!(state.history().len(), 1);
        state.undo();
        assert_eq!(state.board, Board::new());
        assert_eq!(state.last_move(), None);
    }

    #[test]
    fn test_undo_pve_takes_back_both_moves() {
        let mut state = GameState::new(GameMode::PvE { human: Side::Black }, EngineConfig::new(1, 100));
        state.try_move(Pos::new(1, 0), Pos::new(1, 2)).unwrap();
        // Stand in for the AI reply
        state.execute_move(moves_from(&state.board, Pos::new(0, 1))[0]);
        assert!(state.is_human_turn());

        state.undo();
        assert_eq!(state.board, Board::new());
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_undo_disabled() {
        let mut state = pvp();
        state.undo_enabled = false;
        state.try_move(Pos::new(1, 0), Pos::new(1, 2)).unwrap();
        state.undo();
        assert_eq!(state.history().len(), 1);

        state.reset();
        assert!(!state.undo_enabled);
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_review_steps_and_blocks_moves() {
        let mut state = pvp();
        state.try_move(Pos::new(1, 0), Pos::new(1, 2)).unwrap();
        let after_one = state.board.clone();
        state.try_move(Pos::new(0, 1), Pos::new(2, 1)).unwrap();

        assert!(state.step_back());
        assert_eq!(state.board, after_one);
        assert!(state.is_reviewing());
        assert_eq!(
            state.try_move(Pos::new(0, 2), Pos::new(2, 2)),
            Err(GameError::Reviewing)
        );

        assert!(state.step_back());
        assert!(!state.step_back());
        assert_eq!(state.board, Board::new());

        while state.step_forward() {}
        assert_eq!(state.cursor(), 2);
        assert!(!state.is_reviewing());
    }

    #[test]
    fn test_concede() {
        let mut state = GameState::new(GameMode::PvE { human: Side::White }, EngineConfig::new(1, 100));
        state.concede();
        assert_eq!(
            state.game_over,
            Some(GameResult {
                winner: Side::Black,
                reason: EndReason::Concession
            })
        );
        assert_eq!(state.click(Pos::new(0, 1)), Err(GameError::GameOver));
    }

    #[test]
    fn test_concede_while_ai_thinking() {
        let mut state = GameState::new(GameMode::PvE { human: Side::White }, EngineConfig::new(1, 100));
        state.start_ai_thinking();
        assert!(state.is_ai_thinking());

        state.concede();
        assert!(!state.is_ai_thinking());
        for _ in 0..40 {
            thread::sleep(Duration::from_millis(5));
            state.check_ai_result();
        }

        assert!(state.history().is_empty());
        assert_eq!(state.board, Board::new());
        assert_eq!(state.game_over.map(|r| r.reason), Some(EndReason::Concession));
    }

    #[test]
    fn test_late_ai_reply_is_dropped_after_game_over() {
        let mut state = GameState::new(GameMode::PvE { human: Side::White }, EngineConfig::new(1, 100));
        let (tx, rx) = channel();
        state.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
        state.game_over = Some(GameResult {
            winner: Side::Black,
            reason: EndReason::Concession,
        });
        tx.send(AIEngine::with_config(1, 100).get_move(&Board::new())).unwrap();

        state.check_ai_result();
        assert!(!state.is_ai_thinking());
        assert!(state.history().is_empty());
        assert!(state.last_ai_result.is_none());
    }

    #[test]
    fn test_connecting_move_ends_game() {
        let mut state = pvp();
        state.board = Board::from_pieces(&[(3, 3), (5, 3)], &[(0, 7), (7, 7)], Side::Black)
            .expect("valid position");
        state.try_move(Pos::new(3, 3), Pos::new(4, 2)).unwrap();
        assert_eq!(
            state.game_over,
            Some(GameResult {
                winner: Side::Black,
                reason: EndReason::Connection
            })
        );
    }

    #[test]
    fn test_ai_moves_first_as_black() {
        let mut state = GameState::new(GameMode::PvE { human: Side::White }, EngineConfig::new(1, 100));
        assert!(state.wants_ai_move());
        assert_eq!(state.click(Pos::new(0, 1)), Err(GameError::NotYourTurn));

        state.start_ai_thinking();
        assert!(state.is_ai_thinking());
        let deadline = Instant::now() + Duration::from_secs(30);
        while state.is_ai_thinking() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
            state.check_ai_result();
        }

        assert_eq!(state.history().len(), 1);
        assert_eq!(state.current_turn(), Side::White);
        assert!(state.last_ai_result.is_some());
    }
}
