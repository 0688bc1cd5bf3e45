use serde::{Deserialize, Serialize};

use crate::game::grid::{CLOSED_CAN, OPEN_CAN, PLAYER, RACCOON, RACCOON_IN_CAN, RECYCLING_BIN, SMART_RACCOON};

/// A tile coordinate on the board, with (0, 0) the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// One step in `direction`, or `None` if that would leave the grid on
    /// the negative side. The positive bounds are the board's to check.
    pub fn step(self, direction: Direction) -> Option<Position> {
        let (dx, dy) = direction.offset();
        let x = self.x.checked_add_signed(dx as isize)?;
        let y = self.y.checked_add_signed(dy as isize)?;
        Some(Position { x, y })
    }
}

/// The four directions a character can move in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Canonical priority order. Raccoon decision logic that scans the four
    /// directions always does so in this order, and ties break toward the
    /// earlier entry.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    /// The (dx, dy) unit vector for this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Stable handle into the board's entity registry. Ids are never reused for
/// the lifetime of a board population.
pub type EntityId = usize;

/// Which behavior a raccoon uses when it takes a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RaccoonKind {
    /// Wanders in a uniformly random legal direction.
    Plain,
    /// Homes in on the nearest open garbage can in its line of sight.
    Smart,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Position,
    /// The last direction the user asked for, consumed on the player's next
    /// turn. A newer event overwrites an unconsumed one.
    pub last_event: Option<Direction>,
}

impl Player {
    pub fn new(pos: Position) -> Self {
        Self {
            pos,
            last_event: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Raccoon {
    pub pos: Position,
    pub kind: RaccoonKind,
    /// True iff this raccoon shares its tile with an open garbage can.
    pub inside_can: bool,
}

impl Raccoon {
    pub fn new(pos: Position, kind: RaccoonKind) -> Self {
        Self {
            pos,
            kind,
            inside_can: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecyclingBin {
    pub pos: Position,
}

impl RecyclingBin {
    pub fn new(pos: Position) -> Self {
        Self { pos }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GarbageCan {
    pub pos: Position,
    /// A locked can traps nothing; a raccoon can spend a turn unlocking it,
    /// and the player can lock an open one shut.
    pub locked: bool,
}

impl GarbageCan {
    pub fn new(pos: Position, locked: bool) -> Self {
        Self { pos, locked }
    }
}

/// A character placed on the board.
///
/// The set is closed: rule code dispatches by pattern matching on the
/// variant rather than by runtime type inspection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Entity {
    Player(Player),
    Raccoon(Raccoon),
    RecyclingBin(RecyclingBin),
    GarbageCan(GarbageCan),
}

impl Entity {
    pub fn pos(&self) -> Position {
        match self {
            Entity::Player(player) => player.pos,
            Entity::Raccoon(raccoon) => raccoon.pos,
            Entity::RecyclingBin(bin) => bin.pos,
            Entity::GarbageCan(can) => can.pos,
        }
    }

    pub fn set_pos(&mut self, pos: Position) {
        match self {
            Entity::Player(player) => player.pos = pos,
            Entity::Raccoon(raccoon) => raccoon.pos = pos,
            Entity::RecyclingBin(bin) => bin.pos = pos,
            Entity::GarbageCan(can) => can.pos = pos,
        }
    }

    /// The single-character display symbol for this entity on its own
    /// (see the symbol table in `game::grid`).
    pub fn symbol(&self) -> char {
        match self {
            Entity::Player(_) => PLAYER,
            Entity::Raccoon(raccoon) if raccoon.inside_can => RACCOON_IN_CAN,
            Entity::Raccoon(raccoon) => match raccoon.kind {
                RaccoonKind::Plain => RACCOON,
                RaccoonKind::Smart => SMART_RACCOON,
            },
            Entity::RecyclingBin(_) => RECYCLING_BIN,
            Entity::GarbageCan(can) => {
                if can.locked {
                    CLOSED_CAN
                } else {
                    OPEN_CAN
                }
            }
        }
    }
}
