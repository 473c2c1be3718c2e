use crate::game_state::game_state::GameState;

/// Stack of complete board snapshots, one per committed ply.
///
/// The root snapshot (the position the game was created from) is never
/// discarded, so `current` is always available.
#[derive(Debug, Clone)]
pub struct PositionHistory {
    root: GameState,
    plies: Vec<GameState>,
}

impl PositionHistory {
    pub fn new(root: GameState) -> Self {
        Self {
            root,
            plies: Vec::new(),
        }
    }

    #[inline]
    pub fn current(&self) -> &GameState {
        self.plies.last().unwrap_or(&self.root)
    }

    #[inline]
    pub fn current_mut(&mut self) -> &mut GameState {
        self.plies.last_mut().unwrap_or(&mut self.root)
    }

    #[inline]
    pub fn push(&mut self, snapshot: GameState) {
        self.plies.push(snapshot);
    }

    /// Drop the newest snapshot. Returns `false` when only the root is left.
    #[inline]
    pub fn pop(&mut self) -> bool {
        self.plies.pop().is_some()
    }

    /// Number of snapshots, root included.
    #[inline]
    pub fn len(&self) -> usize {
        self.plies.len() + 1
    }

    #[inline]
    pub fn is_at_root(&self) -> bool {
        self.plies.is_empty()
    }
}
