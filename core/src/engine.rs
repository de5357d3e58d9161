use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    InProgress,
    Terminal,
}

impl EngineState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Terminal)
    }
}

/// Player input fed into [`GameState::apply`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Click the tile at `(row, col)`.
    ClickCell(Coord2),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The coordinates were outside the board.
    OutOfBounds,
    NoChange,
    /// Tiles were removed and moves remain.
    Removed(CellCount),
    /// Tiles were removed and the board is now terminal.
    Finished(CellCount),
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        use MoveOutcome::*;
        match self {
            OutOfBounds => false,
            NoChange => false,
            Removed(_) => true,
            Finished(_) => true,
        }
    }
}

/// Immutable snapshot of a game: the board and whether any move is left on it.
///
/// Deserializing only reads the board; the terminal flag is always recomputed from it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "GameStateRepr")]
pub struct GameState {
    grid: Grid,
    is_terminal: bool,
}

#[derive(Deserialize)]
struct GameStateRepr {
    grid: Grid,
}

impl From<GameStateRepr> for GameState {
    fn from(repr: GameStateRepr) -> Self {
        Self::new(repr.grid)
    }
}

impl GameState {
    /// Settles floating tiles before computing the terminal flag, so every state the engine holds is
    /// already compacted and a click that removes nothing leaves it equal.
    pub fn new(grid: Grid) -> Self {
        let grid = compact(&grid);
        let is_terminal = is_terminal(&grid);
        Self { grid, is_terminal }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    pub fn phase(&self) -> EngineState {
        if self.is_terminal {
            EngineState::Terminal
        } else {
            EngineState::InProgress
        }
    }

    /// Computes the state that follows `action`, leaving `self` untouched.
    ///
    /// Clicks outside the board, on empty tiles, or on tiles without a like-colored neighbor produce a state
    /// equal to this one. Terminal states are not special-cased: no click can remove anything there.
    pub fn apply(&self, action: Action) -> GameState {
        match action {
            Action::ClickCell(coords) => {
                if !self.grid.contains(coords) {
                    return self.clone();
                }
                let removed = remove_region(&self.grid, coords);
                let compacted = compact(&removed);
                let is_terminal = is_terminal(&compacted);

                debug_assert_eq!(compacted.size(), self.grid.size());
                Self {
                    grid: compacted,
                    is_terminal,
                }
            }
        }
    }
}

/// Owns the current [`GameState`] and advances it one action at a time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayEngine {
    state: GameState,
    move_count: u32,
}

impl PlayEngine {
    /// Starts a game on a freshly dealt board.
    pub fn new(config: GameConfig, source: &mut impl ColorSource) -> Result<Self> {
        let grid = Grid::generate(config, source)?;
        let engine = Self::from_grid(grid);
        log::info!(
            "new {}x{} game, terminal at start: {}",
            config.width,
            config.height,
            engine.is_finished()
        );
        Ok(engine)
    }

    pub fn from_grid(grid: Grid) -> Self {
        Self {
            state: GameState::new(grid),
            move_count: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    pub fn grid(&self) -> &Grid {
        self.state.grid()
    }

    pub fn size(&self) -> Coord2 {
        self.state.grid().size()
    }

    pub fn phase(&self) -> EngineState {
        self.state.phase()
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }

    /// Number of clicks that actually removed tiles.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn click(&mut self, coords: Coord2) -> MoveOutcome {
        self.dispatch(Action::ClickCell(coords))
    }

    pub fn dispatch(&mut self, action: Action) -> MoveOutcome {
        use MoveOutcome::*;

        let Action::ClickCell(coords) = action;
        if !self.state.grid().contains(coords) {
            log::debug!("click at {:?} is outside {:?}, ignored", coords, self.size());
            return OutOfBounds;
        }

        let next = self.state.apply(action);
        let removed = next.grid().empty_count() - self.state.grid().empty_count();
        let outcome = match (next == self.state, next.is_terminal()) {
            (true, _) => NoChange,
            (false, false) => Removed(removed),
            (false, true) => Finished(removed),
        };
        log::debug!("click at {:?}: {:?}", coords, outcome);

        if outcome.has_update() {
            self.move_count += 1;
        }
        if let Removed(_) = outcome {
            log::debug!("{} tiles still removable", removable_count(next.grid()));
        }
        if let Finished(_) = outcome {
            log::info!(
                "game over after {} moves, {} tiles left",
                self.move_count,
                next.grid().filled_count()
            );
        }
        self.state = next;
        outcome
    }
}
