/// The sentence realizer: Subject + Predicate → punctuated English.
///
/// Decides, per participant, whether to say a name, an indefinite or
/// definite noun phrase, a possessive, or a pronoun, based on the
/// narrative context and what was said most recently.
use std::collections::HashMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::context::NarrativeContext;
use crate::core::format::{join_list, PhraseFormatter};
use crate::schema::entity::{Entity, EntityId, Pronouns};
use crate::schema::phrase::NounPhrase;
use crate::schema::sentence::{Predicate, Sentence, Tense, Verb, VerbClause};

#[derive(Debug, Error)]
pub enum RealizeError {
    #[error("entity not found: {0:?}")]
    EntityNotFound(EntityId),
    #[error("unsupported tense: {0:?}")]
    UnsupportedTense(Tense),
}

/// World state passed by the game to the realizer. Entity lifetime and
/// mutation stay with the game; the engine only reads through this.
pub struct WorldState<'a> {
    pub entities: &'a HashMap<EntityId, Entity>,
}

impl<'a> WorldState<'a> {
    pub fn new(entities: &'a HashMap<EntityId, Entity>) -> Self {
        Self { entities }
    }

    fn get(&self, id: EntityId) -> Result<&Entity, RealizeError> {
        self.entities.get(&id).ok_or(RealizeError::EntityNotFound(id))
    }
}

/// Grammatical person forced onto an entity, e.g. second person for the
/// player-controlled entity so its narration reads "You draw a sword."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Person {
    First,
    Second,
    Third,
}

impl Person {
    /// The fixed pronoun set for this person, falling back to the
    /// entity's own set in the third person.
    fn pronouns(self, native: Pronouns) -> Pronouns {
        match self {
            Self::First => Pronouns::FirstSingular,
            Self::Second => Pronouns::SecondSingular,
            Self::Third => native,
        }
    }
}

/// Grammatical position of a participant within its sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Subject,
    DirectObject,
    /// Too weak a discourse position to claim a pronoun for later reuse.
    PrepObject,
}

/// Realizes abstract sentences against a [`NarrativeContext`].
///
/// Holds the short-term discourse state: per-entity person overrides and
/// the most recent holder of each pronoun class. One realizer pairs with
/// one context for the life of a narration stream; sharing either across
/// streams corrupts pronoun disambiguation.
pub struct SentenceRealizer {
    formatter: PhraseFormatter,
    overrides: FxHashMap<EntityId, Person>,
    recent: FxHashMap<Pronouns, EntityId>,
}

impl Default for SentenceRealizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceRealizer {
    pub fn new() -> Self {
        Self::with_formatter(PhraseFormatter::plain())
    }

    /// A realizer whose phrase output passes through the given
    /// formatter, e.g. one carrying a presentation decorator.
    pub fn with_formatter(formatter: PhraseFormatter) -> Self {
        Self {
            formatter,
            overrides: FxHashMap::default(),
            recent: FxHashMap::default(),
        }
    }

    /// Forces a grammatical person for an entity, overriding its native
    /// pronoun gender in every later realization.
    pub fn override_person(&mut self, entity: EntityId, person: Person) {
        self.overrides.insert(entity, person);
    }

    /// Forgets which entity most recently held each pronoun. Callers
    /// invoke this at discourse breaks; it never happens implicitly.
    pub fn reset_recent_pronouns(&mut self) {
        self.recent.clear();
    }

    /// Realizes a sentence in the simple present.
    pub fn realize(
        &mut self,
        sentence: &Sentence,
        world: &WorldState<'_>,
        ctx: &mut NarrativeContext,
    ) -> Result<String, RealizeError> {
        self.realize_tensed(sentence, Tense::SimplePresent, world, ctx)
    }

    /// Realizes a sentence in the requested tense. Everything but the
    /// simple present is unimplemented and fails loudly.
    pub fn realize_tensed(
        &mut self,
        sentence: &Sentence,
        tense: Tense,
        world: &WorldState<'_>,
        ctx: &mut NarrativeContext,
    ) -> Result<String, RealizeError> {
        match sentence {
            Sentence::Simple { subject, predicate } => {
                let subject_text = self.refer(*subject, Role::Subject, *subject, world, ctx, true)?;
                let predicate_text = self.realize_predicate(predicate, *subject, tense, world, ctx)?;
                Ok(format!("{subject_text} {predicate_text}."))
            }
            Sentence::MultiClause { subject, clauses } => {
                let subject_text = self.refer(*subject, Role::Subject, *subject, world, ctx, true)?;
                let mut parts = Vec::with_capacity(clauses.len());
                for clause in clauses {
                    parts.push(self.realize_clause(clause, *subject, tense, world, ctx)?);
                }
                Ok(format!("{subject_text} {}.", join_list(&parts, "and")))
            }
        }
    }

    fn realize_predicate(
        &mut self,
        predicate: &Predicate,
        subject: EntityId,
        tense: Tense,
        world: &WorldState<'_>,
        ctx: &mut NarrativeContext,
    ) -> Result<String, RealizeError> {
        match predicate {
            Predicate::Clause(clause) => self.realize_clause(clause, subject, tense, world, ctx),
            Predicate::Clauses(clauses) => {
                let mut parts = Vec::with_capacity(clauses.len());
                for clause in clauses {
                    parts.push(self.realize_clause(clause, subject, tense, world, ctx)?);
                }
                Ok(join_list(&parts, "and"))
            }
            Predicate::VerbObjects {
                verb,
                objects,
                prep,
            } => {
                let mut out = self.conjugate(verb, subject, tense, world)?.to_string();
                let mut parts = Vec::with_capacity(objects.len());
                for object in objects {
                    parts.push(self.refer(*object, Role::DirectObject, subject, world, ctx, false)?);
                }
                out.push(' ');
                out.push_str(&join_list(&parts, "and"));
                if let Some(prep) = prep {
                    let object_text =
                        self.refer(prep.object, Role::PrepObject, subject, world, ctx, false)?;
                    out.push(' ');
                    out.push_str(&prep.preposition);
                    out.push(' ');
                    out.push_str(&object_text);
                }
                Ok(out)
            }
        }
    }

    fn realize_clause(
        &mut self,
        clause: &VerbClause,
        subject: EntityId,
        tense: Tense,
        world: &WorldState<'_>,
        ctx: &mut NarrativeContext,
    ) -> Result<String, RealizeError> {
        let mut out = self.conjugate(&clause.verb, subject, tense, world)?.to_string();
        if let Some(object) = clause.object {
            let object_text = self.refer(object, Role::DirectObject, subject, world, ctx, false)?;
            out.push(' ');
            out.push_str(&object_text);
        }
        if let Some(prep) = &clause.prep {
            let object_text =
                self.refer(prep.object, Role::PrepObject, subject, world, ctx, false)?;
            out.push(' ');
            out.push_str(&prep.preposition);
            out.push(' ');
            out.push_str(&object_text);
        }
        Ok(out)
    }

    fn conjugate<'v>(
        &self,
        verb: &'v Verb,
        subject: EntityId,
        tense: Tense,
        world: &WorldState<'_>,
    ) -> Result<&'v str, RealizeError> {
        if tense != Tense::SimplePresent {
            return Err(RealizeError::UnsupportedTense(tense));
        }
        let subject_entity = world.get(subject)?;
        let pronouns = self.effective_pronouns(subject_entity);
        Ok(verb.form(pronouns.third_singular()))
    }

    /// The pronoun set that governs an entity's agreement and pronoun
    /// surface forms: the person override's fixed set if one exists,
    /// else the entity's own.
    fn effective_pronouns(&self, entity: &Entity) -> Pronouns {
        match self.overrides.get(&entity.id) {
            Some(person) => person.pronouns(entity.pronouns),
            None => entity.pronouns,
        }
    }

    /// Resolves how to refer to one participant, in strict priority
    /// order: reflexive, recent pronoun, possessive of the subject,
    /// person override, known definite, indefinite fallback.
    ///
    /// Side effects: the entity is unconditionally marked known, and —
    /// for subjects and direct objects only — claims its pronoun class
    /// in the recent-pronoun map, overwriting any previous claim.
    fn refer(
        &mut self,
        id: EntityId,
        role: Role,
        subject: EntityId,
        world: &WorldState<'_>,
        ctx: &mut NarrativeContext,
        capitalize: bool,
    ) -> Result<String, RealizeError> {
        let entity = world.get(id)?;
        let pronouns = self.effective_pronouns(entity);
        let accusative = role != Role::Subject;

        let phrase = if accusative && id == subject {
            NounPhrase::pronoun(pronouns.reflexive())
        } else if self.recent.get(&pronouns) == Some(&id) {
            let form = if accusative {
                pronouns.accusative()
            } else {
                pronouns.nominative()
            };
            NounPhrase::pronoun(form)
        } else if ctx.is_known_entity(id) && entity.is_owned_by(subject) {
            let subject_entity = world.get(subject)?;
            let determiner = self.effective_pronouns(subject_entity).possessive_determiner();
            NounPhrase::possessive(determiner, entity.name.clone())
        } else if self.overrides.contains_key(&id) {
            let form = if accusative {
                pronouns.accusative()
            } else {
                pronouns.nominative()
            };
            NounPhrase::pronoun(form)
        } else if ctx.is_known_entity(id) {
            entity.name.head_noun().to_definite()
        } else {
            entity.name.to_indefinite()
        };

        // First-mention side effect happens even on the pronoun paths.
        ctx.add_known_entity(id);
        if role != Role::PrepObject {
            self.recent.insert(pronouns, id);
        }

        Ok(self.formatter.format(&phrase, Some(entity), capitalize, false))
    }
}
