use serde::{Deserialize, Serialize};

use super::entity::EntityId;

/// A structured record of something that happened in the game
/// simulation. Events are the input the narrator turns into sentences;
/// the engine never produces or interprets them beyond that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// An actor moved to a location.
    Moved { actor: EntityId, to: EntityId },
    /// An actor picked up an item.
    TookItem { actor: EntityId, item: EntityId },
    /// An actor equipped an item.
    Equipped { actor: EntityId, item: EntityId },
    /// An actor attacked a target, optionally with a weapon.
    Attacked {
        actor: EntityId,
        target: EntityId,
        weapon: Option<EntityId>,
    },
    /// An actor passed their turn.
    Waited { actor: EntityId },
    /// An actor looked around, or at something specific.
    Looked {
        actor: EntityId,
        at: Option<EntityId>,
    },
    /// An actor checked what they are carrying.
    CheckedInventory {
        actor: EntityId,
        items: Vec<EntityId>,
    },
}

impl GameEvent {
    /// The verb-lexicon key for this event.
    pub fn verb_key(&self) -> &'static str {
        match self {
            Self::Moved { .. } => "move",
            Self::TookItem { .. } => "take",
            Self::Equipped { .. } => "equip",
            Self::Attacked { .. } => "attack",
            Self::Waited { .. } => "wait",
            Self::Looked { .. } => "look",
            Self::CheckedInventory { .. } => "carry",
        }
    }

    /// The acting entity — the subject of every sentence this event
    /// produces.
    pub fn actor(&self) -> EntityId {
        match self {
            Self::Moved { actor, .. }
            | Self::TookItem { actor, .. }
            | Self::Equipped { actor, .. }
            | Self::Attacked { actor, .. }
            | Self::Waited { actor }
            | Self::Looked { actor, .. }
            | Self::CheckedInventory { actor, .. } => *actor,
        }
    }
}
