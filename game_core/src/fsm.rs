//! Game State Machine
//!
//! Two states: waiting for the serve, and a point in progress.

/// Game states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    Start,
    Play,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Launch,
    Score,
}

/// Game Finite State Machine
#[derive(Debug, Clone, Default)]
pub struct GameFsm {
    state: GameState,
}

impl GameFsm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current state
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Apply `action`, returning false when the current state ignores it
    #[must_use]
    pub fn transition(&mut self, action: GameAction) -> bool {
        let Some(to_state) = self.next_state(action) else {
            return false;
        };
        tracing::debug!(from_state = ?self.state, ?to_state, ?action, "game state transition");
        self.state = to_state;
        true
    }

    fn next_state(&self, action: GameAction) -> Option<GameState> {
        match (self.state, action) {
            (GameState::Start, GameAction::Launch) => Some(GameState::Play),
            (GameState::Play, GameAction::Score) => Some(GameState::Start),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let fsm = GameFsm::new();
        assert_eq!(fsm.state(), GameState::Start);
    }

    #[test]
    fn test_valid_transition() {
        let mut fsm = GameFsm::new();
        assert!(fsm.transition(GameAction::Launch));
        assert_eq!(fsm.state(), GameState::Play);
    }

    #[test]
    fn test_invalid_transition() {
        let mut fsm = GameFsm::new();
        assert!(!fsm.transition(GameAction::Score), "No point to score before the serve");
        assert_eq!(fsm.state(), GameState::Start);
    }

    #[test]
    fn test_launch_while_playing_is_ignored() {
        let mut fsm = GameFsm::new();
        assert!(fsm.transition(GameAction::Launch));
        assert!(!fsm.transition(GameAction::Launch));
        assert_eq!(fsm.state(), GameState::Play);
    }

    #[test]
    fn test_point_flow() {
        let mut fsm = GameFsm::new();
        assert!(fsm.transition(GameAction::Launch));
        assert!(fsm.transition(GameAction::Score));
        assert_eq!(fsm.state(), GameState::Start);
        assert!(fsm.transition(GameAction::Launch));
        assert_eq!(fsm.state(), GameState::Play);
    }
}
