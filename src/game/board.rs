//! The game board: entity registry, occupancy queries, placement invariants,
//! and the turn scheduler.

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::game::RACCOON_TURN_FREQUENCY;
use crate::game::entities::{player, raccoon, recycling_bin};
use crate::game::error::GameError;
use crate::game::systems::scoring::adjacent_bin_score;
use crate::game::types::{
    Direction, Entity, EntityId, GarbageCan, Player, Position, Raccoon, RaccoonKind, RecyclingBin,
};

/// A game board on which the game is played.
///
/// The board owns every character through its registry; entities refer to
/// each other with [`EntityId`] handles rather than references. No tile ever
/// holds more than one character, except that a raccoon may share a tile
/// with an open garbage can.
#[derive(Debug)]
pub struct GameBoard {
    /// Number of tiles wide, fixed for the board's lifetime.
    pub width: usize,
    /// Number of tiles high, fixed for the board's lifetime.
    pub height: usize,
    /// How many turns have passed in the game.
    pub turns: u32,
    /// Whether this game has ended.
    pub ended: bool,
    entities: Vec<Entity>,
    player: Option<EntityId>,
    raccoons: Vec<EntityId>,
    recycling_bins: Vec<EntityId>,
    garbage_cans: Vec<EntityId>,
    score: Option<u32>,
    rng: StdRng,
}

impl GameBoard {
    /// Create an empty board of the given dimensions. No characters are
    /// placed and no turns have been taken. Raccoon moves draw from an
    /// OS-seeded RNG.
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_rng(width, height, StdRng::from_os_rng())
    }

    /// Create an empty board whose raccoon moves are reproducible from
    /// `seed`, for deterministic tests and replays.
    pub fn with_seed(width: usize, height: usize, seed: u64) -> Self {
        Self::with_rng(width, height, StdRng::seed_from_u64(seed))
    }

    fn with_rng(width: usize, height: usize, rng: StdRng) -> Self {
        debug_assert!(width > 0 && height > 0);
        Self {
            width,
            height,
            turns: 0,
            ended: false,
            entities: Vec::new(),
            player: None,
            raccoons: Vec::new(),
            recycling_bins: Vec::new(),
            garbage_cans: Vec::new(),
            score: None,
            rng,
        }
    }

    /// Clear all characters and counters, keeping the RNG. Used by grid
    /// import after the text has been validated.
    pub(crate) fn reset(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.turns = 0;
        self.ended = false;
        self.entities.clear();
        self.player = None;
        self.raccoons.clear();
        self.recycling_bins.clear();
        self.garbage_cans.clear();
        self.score = None;
    }

    /// Place the player at (x, y). There can be only one player;
    /// construction time is placement time.
    pub fn place_player(&mut self, x: usize, y: usize) -> Result<EntityId, GameError> {
        if self.player.is_some() {
            return Err(GameError::PlayerAlreadyPlaced);
        }
        self.place(Entity::Player(Player::new(Position::new(x, y))))
    }

    /// Place a wandering raccoon at (x, y). Placing it onto an open garbage
    /// can puts it inside the can.
    pub fn place_raccoon(&mut self, x: usize, y: usize) -> Result<EntityId, GameError> {
        self.place(Entity::Raccoon(Raccoon::new(
            Position::new(x, y),
            RaccoonKind::Plain,
        )))
    }

    /// Place a smart raccoon at (x, y).
    pub fn place_smart_raccoon(&mut self, x: usize, y: usize) -> Result<EntityId, GameError> {
        self.place(Entity::Raccoon(Raccoon::new(
            Position::new(x, y),
            RaccoonKind::Smart,
        )))
    }

    /// Place a recycling bin at (x, y).
    pub fn place_recycling_bin(&mut self, x: usize, y: usize) -> Result<EntityId, GameError> {
        self.place(Entity::RecyclingBin(RecyclingBin::new(Position::new(x, y))))
    }

    /// Place a garbage can at (x, y). An open can may be placed onto a tile
    /// already holding a lone raccoon (grid import places the raccoon
    /// first); the raccoon ends up inside the can.
    pub fn place_garbage_can(
        &mut self,
        x: usize,
        y: usize,
        locked: bool,
    ) -> Result<EntityId, GameError> {
        self.place(Entity::GarbageCan(GarbageCan::new(
            Position::new(x, y),
            locked,
        )))
    }

    /// Register a character at its current coordinates, enforcing the tile
    /// invariant.
    fn place(&mut self, entity: Entity) -> Result<EntityId, GameError> {
        let pos = entity.pos();
        if !self.on_board(pos.x, pos.y) {
            return Err(GameError::OffBoard { x: pos.x, y: pos.y });
        }
        let occupants = self.at(pos.x, pos.y);
        let compatible = match (&entity, occupants.as_slice()) {
            (_, []) => true,
            // A raccoon may climb into an open can standing alone.
            (Entity::Raccoon(_), [other]) => {
                matches!(self.entity(*other), Entity::GarbageCan(can) if !can.locked)
            }
            // An open can may land on a lone raccoon not already in a can.
            (Entity::GarbageCan(can), [other]) if !can.locked => {
                matches!(self.entity(*other), Entity::Raccoon(raccoon) if !raccoon.inside_can)
            }
            _ => false,
        };
        if !compatible {
            return Err(GameError::TileOccupied { x: pos.x, y: pos.y });
        }

        let mut entity = entity;
        if let Entity::Raccoon(raccoon) = &mut entity {
            raccoon.inside_can = !occupants.is_empty();
        }

        let id = self.entities.len();
        match &entity {
            Entity::Player(_) => self.player = Some(id),
            Entity::Raccoon(_) => self.raccoons.push(id),
            Entity::RecyclingBin(_) => self.recycling_bins.push(id),
            Entity::GarbageCan(can) => {
                if !can.locked {
                    // The raccoon already on the tile is now inside this can.
                    for &other in &occupants {
                        if let Entity::Raccoon(raccoon) = self.entity_mut(other) {
                            raccoon.inside_can = true;
                        }
                    }
                }
                self.garbage_cans.push(id);
            }
        }
        self.entities.push(entity);
        Ok(id)
    }

    /// Return the ids of the characters at tile (x, y), in stable display
    /// order: the player first, then raccoons, recycling bins, and garbage
    /// cans, each in registration order. Off-board and vacant tiles give an
    /// empty list.
    pub fn at(&self, x: usize, y: usize) -> Vec<EntityId> {
        let mut found = Vec::new();
        if !self.on_board(x, y) {
            return found;
        }
        let here = |id: &EntityId| {
            let pos = self.entities[*id].pos();
            pos.x == x && pos.y == y
        };
        if let Some(id) = self.player {
            if here(&id) {
                found.push(id);
            }
        }
        found.extend(self.raccoons.iter().copied().filter(here));
        found.extend(self.recycling_bins.iter().copied().filter(here));
        found.extend(self.garbage_cans.iter().copied().filter(here));
        found
    }

    /// Look up a character by id. Ids come from the placement methods and
    /// from `at`, so an out-of-range id is a caller bug and panics.
    pub fn entity(&self, id: EntityId) -> &Entity {
        &self.entities[id]
    }

    pub fn entity_mut(&mut self, id: EntityId) -> &mut Entity {
        &mut self.entities[id]
    }

    /// The player's id, if one has been placed.
    pub fn player_id(&self) -> Option<EntityId> {
        self.player
    }

    /// All raccoon ids in registration order.
    pub fn raccoon_ids(&self) -> &[EntityId] {
        &self.raccoons
    }

    /// All recycling bin ids in registration order.
    pub fn recycling_bin_ids(&self) -> &[EntityId] {
        &self.recycling_bins
    }

    /// Whether (x, y) is within the boundaries of this board.
    pub fn on_board(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// The tile one step from `pos` in `direction`, or `None` if that tile
    /// is off the board.
    pub fn neighbour(&self, pos: Position, direction: Direction) -> Option<Position> {
        let next = pos.step(direction)?;
        self.on_board(next.x, next.y).then_some(next)
    }

    pub(crate) fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Record a user-input direction for the player to act on next turn.
    pub fn handle_event(&mut self, direction: Direction) -> Result<(), GameError> {
        let id = self.player.ok_or(GameError::NoPlayer)?;
        player::record_event(self, id, direction);
        Ok(())
    }

    /// Attempt to move any character one tile in `direction`, under the
    /// rules of its variant. Returns whether the move had an effect; a
    /// rule-blocked move is not an error.
    pub fn move_entity(&mut self, id: EntityId, direction: Direction) -> bool {
        if matches!(self.entity(id), Entity::Player(_)) {
            player::move_player(self, id, direction)
        } else if matches!(self.entity(id), Entity::Raccoon(_)) {
            raccoon::move_raccoon(self, id, direction)
        } else if matches!(self.entity(id), Entity::RecyclingBin(_)) {
            recycling_bin::move_bin(self, id, direction)
        } else {
            // Garbage cans never move.
            false
        }
    }

    /// Give every turn-taking character one turn.
    ///
    /// The player acts first and the turn counter increments. Every
    /// `RACCOON_TURN_FREQUENCY` turns, each raccoon then takes a turn in
    /// registration order. Finally the end condition is evaluated; the
    /// score is returned if the game just ended.
    pub fn give_turns(&mut self) -> Result<Option<u32>, GameError> {
        let player_id = self.player.ok_or(GameError::NoPlayer)?;
        player::take_turn(self, player_id);
        self.turns += 1;

        if self.turns % RACCOON_TURN_FREQUENCY == 0 {
            debug!("turn {}: raccoons take their turn", self.turns);
            for id in self.raccoons.clone() {
                raccoon::take_turn(self, id);
            }
        }
        Ok(self.check_game_end())
    }

    /// Check whether the game has ended, updating the `ended` flag.
    ///
    /// The game ends when every raccoon is either trapped outside a can or
    /// inside one. All trapped scores `10 × raccoons + adjacent_bin_score`;
    /// all inside cans scores the bin score alone; a mixed state (or any
    /// free raccoon) means the game continues.
    pub fn check_game_end(&mut self) -> Option<u32> {
        let ids = self.raccoons.clone();
        let mut trapped = 0;
        let mut inside = 0;
        for &id in &ids {
            // check_trapped also refreshes the raccoon's inside_can flag.
            let is_trapped = raccoon::check_trapped(self, id);
            if let Entity::Raccoon(raccoon) = self.entity(id) {
                if raccoon.inside_can {
                    inside += 1;
                } else if is_trapped {
                    trapped += 1;
                }
            }
        }

        let score = if trapped == ids.len() {
            Some(ids.len() as u32 * 10 + adjacent_bin_score(self))
        } else if inside == ids.len() {
            Some(adjacent_bin_score(self))
        } else {
            None
        };

        self.ended = score.is_some();
        self.score = score;
        if let Some(score) = score {
            info!("game over after {} turns, score {}", self.turns, score);
        }
        score
    }

    /// The score computed when the game ended, if it has.
    pub fn score(&self) -> Option<u32> {
        self.score
    }
}
