//! Engine controller implementation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::{info, warn};
use parking_lot::Mutex;

use crate::board::{search, Board, Difficulty, Move};

/// Search thread stack size (32 MB). The legality filter and quiescence
/// recurse per ply, so the worker gets a generous stack of its own.
const SEARCH_STACK_SIZE: usize = 32 * 1024 * 1024;

/// Owns a game board and runs searches for it on a background thread.
///
/// At most one search runs at a time: `think` starts one, `collect` joins
/// it and returns the move that was played. Starting a search while one is
/// already running is refused.
pub struct EngineController {
    board: Arc<Mutex<Board>>,
    difficulty: Difficulty,
    busy: Arc<AtomicBool>,
    pending: Option<JoinHandle<Option<(Move, String)>>>,
}

impl EngineController {
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        EngineController {
            board: Arc::new(Mutex::new(Board::new())),
            difficulty,
            busy: Arc::new(AtomicBool::new(false)),
            pending: None,
        }
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Run a closure with exclusive access to the game board. Blocks while
    /// a search holds the board.
    pub fn with_board<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Board) -> R,
    {
        f(&mut self.board.lock())
    }

    /// Start a new game, discarding any finished search result.
    pub fn new_game(&mut self) {
        let _ = self.collect();
        self.board.lock().reset();
    }

    #[must_use]
    pub fn is_thinking(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Start searching the current position at this controller's
    /// difficulty. The chosen move is played on the board by the worker;
    /// retrieve it with [`EngineController::collect`].
    ///
    /// Returns false without starting anything if a search is already
    /// running.
    pub fn think(&mut self) -> bool {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("search refused: a search is already running");
            return false;
        }

        let board = Arc::clone(&self.board);
        let busy = Arc::clone(&self.busy);
        let depth = self.difficulty.depth();
        info!("starting search at depth {depth}");

        let handle = thread::Builder::new()
            .name("search".to_string())
            .stack_size(SEARCH_STACK_SIZE)
            .spawn(move || {
                let mut board = board.lock();
                let result = search::find_best_move(&mut board, depth)
                    .map(|m| (m, board.play(m)));
                busy.store(false, Ordering::Release);
                result
            })
            .expect("failed to spawn search thread");

        self.pending = Some(handle);
        true
    }

    /// Wait for the running search and return the move it played, with its
    /// SAN string. Returns `None` if no search was started or the side to
    /// move had no legal moves.
    pub fn collect(&mut self) -> Option<(Move, String)> {
        let handle = self.pending.take()?;
        match handle.join() {
            Ok(result) => result,
            Err(_) => {
                self.busy.store(false, Ordering::Release);
                warn!("search thread panicked");
                None
            }
        }
    }
}

impl Drop for EngineController {
    fn drop(&mut self) {
        let _ = self.collect();
    }
}
