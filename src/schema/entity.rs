use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::phrase::NounPhrase;

/// Newtype wrapper for entity IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u64);

/// Pronoun set for an entity, used by the realizer to resolve
/// pronominal references, possessive determiners, and reflexives.
///
/// The variant itself is the pronoun-identity key: two entities carrying
/// the same variant are pronoun-ambiguous with each other, which is what
/// the realizer's recent-pronoun map keys on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pronouns {
    /// she/her/hers/her/herself
    SheHer,
    /// he/him/his/his/himself
    HeHim,
    /// it/it/its/its/itself
    ItIts,
    /// they/them/theirs/their/themselves — also used for unknown gender
    TheyThem,
    /// you/you/yours/your/yourself
    SecondSingular,
    /// I/me/mine/my/myself
    FirstSingular,
}

impl Default for Pronouns {
    fn default() -> Self {
        Self::TheyThem
    }
}

impl Pronouns {
    /// Nominative/subject form: "she", "he", "it", "they", "you", "I".
    pub fn nominative(&self) -> &'static str {
        match self {
            Self::SheHer => "she",
            Self::HeHim => "he",
            Self::ItIts => "it",
            Self::TheyThem => "they",
            Self::SecondSingular => "you",
            Self::FirstSingular => "I",
        }
    }

    /// Accusative/object form: "her", "him", "it", "them", "you", "me".
    pub fn accusative(&self) -> &'static str {
        match self {
            Self::SheHer => "her",
            Self::HeHim => "him",
            Self::ItIts => "it",
            Self::TheyThem => "them",
            Self::SecondSingular => "you",
            Self::FirstSingular => "me",
        }
    }

    /// Possessive determiner, the modifier form used before a noun:
    /// "her", "his", "its", "their", "your", "my".
    pub fn possessive_determiner(&self) -> &'static str {
        match self {
            Self::SheHer => "her",
            Self::HeHim => "his",
            Self::ItIts => "its",
            Self::TheyThem => "their",
            Self::SecondSingular => "your",
            Self::FirstSingular => "my",
        }
    }

    /// Possessive standalone: "hers", "his", "its", "theirs", "yours", "mine".
    pub fn possessive_standalone(&self) -> &'static str {
        match self {
            Self::SheHer => "hers",
            Self::HeHim => "his",
            Self::ItIts => "its",
            Self::TheyThem => "theirs",
            Self::SecondSingular => "yours",
            Self::FirstSingular => "mine",
        }
    }

    /// Reflexive: "herself", "himself", "itself", "themselves",
    /// "yourself", "myself".
    pub fn reflexive(&self) -> &'static str {
        match self {
            Self::SheHer => "herself",
            Self::HeHim => "himself",
            Self::ItIts => "itself",
            Self::TheyThem => "themselves",
            Self::SecondSingular => "yourself",
            Self::FirstSingular => "myself",
        }
    }

    /// Whether a subject with this pronoun set conjugates verbs in the
    /// third person singular ("she eats") rather than the base form
    /// ("they eat", "you eat", "I eat").
    pub fn third_singular(&self) -> bool {
        matches!(self, Self::SheHer | Self::HeHim | Self::ItIts)
    }
}

/// Runtime kind of an entity. The grammar never inspects this; it exists
/// for presentation-layer dispatch (e.g. a decorator coloring item names
/// differently from creature names).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Creature,
    Item,
    Door,
    Location,
    Container,
}

/// An entity is anything the narration can refer to: a creature, item,
/// door, location, or container.
///
/// Entities are created and owned by the surrounding game systems; the
/// engine only reads their name, pronouns, and owner relation. Identity
/// is the `id` field — two entities with identical names are still
/// distinct referents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub name: NounPhrase,
    pub pronouns: Pronouns,
    pub kind: EntityKind,
    /// Back-references to owning entities, for possessive rendering
    /// ("his bone"). Many-to-many; the owner keeps no forward list.
    pub owners: FxHashSet<EntityId>,
}

impl Entity {
    pub fn new(id: EntityId, name: NounPhrase, pronouns: Pronouns, kind: EntityKind) -> Self {
        Self {
            id,
            name,
            pronouns,
            kind,
            owners: FxHashSet::default(),
        }
    }

    /// Records `owner` as an owner of this entity. Idempotent.
    pub fn add_owner(&mut self, owner: EntityId) {
        self.owners.insert(owner);
    }

    pub fn remove_owner(&mut self, owner: EntityId) {
        self.owners.remove(&owner);
    }

    pub fn is_owned_by(&self, owner: EntityId) -> bool {
        self.owners.contains(&owner)
    }
}
