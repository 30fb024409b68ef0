/// Narrative context — which entities this narration stream has already
/// introduced to its audience.
use rustc_hash::FxHashSet;

use crate::schema::entity::EntityId;

/// The running record of known entities for one narration stream.
///
/// One instance per independently-paced discourse (one per player, one
/// per narrated NPC). Grows monotonically for the life of the session;
/// there is no removal.
#[derive(Debug, Clone, Default)]
pub struct NarrativeContext {
    known: FxHashSet<EntityId>,
}

impl NarrativeContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks an entity as introduced. Idempotent.
    pub fn add_known_entity(&mut self, entity: EntityId) {
        self.known.insert(entity);
    }

    /// Whether the audience has already met this entity. Entities never
    /// seen before simply report false; there is no error case.
    pub fn is_known_entity(&self, entity: EntityId) -> bool {
        self.known.contains(&entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_by_default() {
        let ctx = NarrativeContext::new();
        assert!(!ctx.is_known_entity(EntityId(1)));
    }

    #[test]
    fn add_is_idempotent() {
        let mut ctx = NarrativeContext::new();
        ctx.add_known_entity(EntityId(1));
        ctx.add_known_entity(EntityId(1));
        assert!(ctx.is_known_entity(EntityId(1)));
        assert!(!ctx.is_known_entity(EntityId(2)));
    }

    #[test]
    fn contexts_are_independent() {
        let mut a = NarrativeContext::new();
        let b = NarrativeContext::new();
        a.add_known_entity(EntityId(1));
        assert!(!b.is_known_entity(EntityId(1)));
    }
}
