//! Driver presentation settings.

use derive_getters::Getters;
use derive_setters::Setters;
use tracing::instrument;

/// Text the driver prints around the game.
///
/// The defaults reproduce the standard terminal session; the binary never
/// changes them.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters)]
#[setters(prefix = "with_", into)]
pub struct DriverConfig {
    /// Banner printed once before the first board.
    header: String,
    /// Prompt printed after the "<player>'s turn" line.
    prompt: String,
}

impl DriverConfig {
    /// Creates a `DriverConfig` with defaults.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            header: "=== Tic-Tac-Toe ===".to_string(),
            prompt: "Enter row and column (0-2), e.g., '1 1': ".to_string(),
        }
    }
}
