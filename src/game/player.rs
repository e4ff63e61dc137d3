/// Stable identity of one of the two seats at the table.
///
/// Cells, the current turn and the winner all store this id rather than a
/// copy of the player record, so two players sharing a name or avatar are
/// still told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// Get the other player
    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

/// Display identity of a player. Created once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
    avatar: String,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, avatar: impl Into<String>) -> Self {
        Player {
            id,
            name: name.into(),
            avatar: avatar.into(),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Get player name for display
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Marker drawn in the cells this player owns
    pub fn avatar(&self) -> &str {
        &self.avatar
    }
}
