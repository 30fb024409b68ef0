/// The narrator: Event → Sentence → Paragraph orchestration.
///
/// Buffers abstract sentences so transformers can merge them before any
/// surface text is committed, then realizes whole paragraphs on flush.
use thiserror::Error;

use crate::core::context::NarrativeContext;
use crate::core::lexicon::VerbLexicon;
use crate::core::realizer::{Person, RealizeError, SentenceRealizer, WorldState};
use crate::core::transform::SentenceTransformer;
use crate::schema::entity::EntityId;
use crate::schema::event::GameEvent;
use crate::schema::sentence::{Predicate, PrepPhrase, Sentence, Verb, VerbClause};

#[derive(Debug, Error)]
pub enum NarrateError {
    #[error("realize error: {0}")]
    Realize(#[from] RealizeError),
    #[error("no verb in lexicon for event kind: {0}")]
    MissingVerb(String),
}

/// An ordered run of realized sentences meant to print together. The
/// output layer owns wrapping and presentation; these are plain strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub sentences: Vec<String>,
}

/// Buffers sentences for one narration stream and realizes them into
/// paragraphs on demand.
///
/// A narrator owns its realizer + context pair; independent streams
/// (one per player, one per narrated NPC) each construct their own.
/// Buffered content becomes visible only through [`flush_paragraphs`] —
/// callers must flush before sharing the output channel or ending a
/// session, or buffered narration is lost.
///
/// [`flush_paragraphs`]: Narrator::flush_paragraphs
pub struct Narrator {
    lexicon: VerbLexicon,
    realizer: SentenceRealizer,
    context: NarrativeContext,
    buffer: Vec<Sentence>,
    pending: Vec<Paragraph>,
}

/// Builder for constructing a `Narrator`.
pub struct NarratorBuilder {
    lexicon: Option<VerbLexicon>,
    realizer: Option<SentenceRealizer>,
}

impl Default for Narrator {
    fn default() -> Self {
        Self::new()
    }
}

impl Narrator {
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> NarratorBuilder {
        NarratorBuilder {
            lexicon: None,
            realizer: None,
        }
    }

    /// Buffers a sentence. Nothing is realized until a paragraph is
    /// closed, which is what lets transformers rewrite the raw window.
    pub fn narrate(&mut self, sentence: Sentence) {
        self.buffer.push(sentence);
    }

    /// Converts a game event to its sentences and buffers them.
    pub fn narrate_event(&mut self, event: &GameEvent) -> Result<(), NarrateError> {
        for sentence in self.sentences_for_event(event)? {
            self.narrate(sentence);
        }
        Ok(())
    }

    /// Applies a transformer to the buffered window. If its
    /// preconditions hold the window collapses to the single rewritten
    /// sentence; otherwise the buffer is untouched. Transformers are
    /// never chained automatically — ordering is the caller's policy.
    pub fn apply_transform(&mut self, transformer: &dyn SentenceTransformer) {
        if let Some(merged) = transformer.apply(&self.buffer) {
            self.buffer = vec![merged];
        }
    }

    /// Closes the current paragraph: realizes every buffered sentence,
    /// in order, and queues the result for the next flush. A no-op when
    /// nothing is buffered.
    pub fn end_paragraph(&mut self, world: &WorldState<'_>) -> Result<(), NarrateError> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        let mut sentences = Vec::with_capacity(self.buffer.len());
        for sentence in std::mem::take(&mut self.buffer) {
            sentences.push(self.realizer.realize(&sentence, world, &mut self.context)?);
        }
        self.pending.push(Paragraph { sentences });
        Ok(())
    }

    /// Closes the trailing paragraph and returns everything accumulated
    /// since the last flush. Empty when nothing was narrated in between.
    pub fn flush_paragraphs(
        &mut self,
        world: &WorldState<'_>,
    ) -> Result<Vec<Paragraph>, NarrateError> {
        self.end_paragraph(world)?;
        Ok(std::mem::take(&mut self.pending))
    }

    /// Forces a grammatical person for an entity, e.g. second person
    /// for the narration's designated "self" participant.
    pub fn override_person(&mut self, entity: EntityId, person: Person) {
        self.realizer.override_person(entity, person);
    }

    /// Forgets recent pronoun claims at a discourse break.
    pub fn reset_recent_pronouns(&mut self) {
        self.realizer.reset_recent_pronouns();
    }

    pub fn context(&self) -> &NarrativeContext {
        &self.context
    }

    fn verb(&self, key: &str) -> Result<Verb, NarrateError> {
        self.lexicon
            .get(key)
            .cloned()
            .ok_or_else(|| NarrateError::MissingVerb(key.to_string()))
    }

    /// The fixed event-to-sentence mapping. One sentence per event,
    /// except an empty inventory, which narrates nothing.
    fn sentences_for_event(&self, event: &GameEvent) -> Result<Vec<Sentence>, NarrateError> {
        let verb = self.verb(event.verb_key())?;
        let sentence = match event {
            GameEvent::Moved { actor, to } => Sentence::Simple {
                subject: *actor,
                predicate: Predicate::Clause(
                    VerbClause::bare(verb).with_prep(PrepPhrase::new("to", *to)),
                ),
            },
            GameEvent::TookItem { actor, item } | GameEvent::Equipped { actor, item } => {
                Sentence::subject_verb_object(*actor, verb, *item)
            }
            GameEvent::Attacked {
                actor,
                target,
                weapon,
            } => {
                let mut clause = VerbClause::with_object(verb, *target);
                if let Some(weapon) = weapon {
                    clause = clause.with_prep(PrepPhrase::new("with", *weapon));
                }
                Sentence::Simple {
                    subject: *actor,
                    predicate: Predicate::Clause(clause),
                }
            }
            GameEvent::Waited { actor } => Sentence::Simple {
                subject: *actor,
                predicate: Predicate::Clause(VerbClause::bare(verb)),
            },
            GameEvent::Looked { actor, at } => {
                let mut clause = VerbClause::bare(verb);
                if let Some(target) = at {
                    clause = clause.with_prep(PrepPhrase::new("at", *target));
                }
                Sentence::Simple {
                    subject: *actor,
                    predicate: Predicate::Clause(clause),
                }
            }
            GameEvent::CheckedInventory { actor, items } => {
                if items.is_empty() {
                    return Ok(Vec::new());
                }
                Sentence::Simple {
                    subject: *actor,
                    predicate: Predicate::VerbObjects {
                        verb,
                        objects: items.clone(),
                        prep: None,
                    },
                }
            }
        };
        Ok(vec![sentence])
    }
}

impl NarratorBuilder {
    /// Replace the default verb table.
    pub fn lexicon(mut self, lexicon: VerbLexicon) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    /// Provide a realizer directly, e.g. one built with a decorating
    /// formatter.
    pub fn realizer(mut self, realizer: SentenceRealizer) -> Self {
        self.realizer = Some(realizer);
        self
    }

    pub fn build(self) -> Narrator {
        Narrator {
            lexicon: self.lexicon.unwrap_or_default(),
            realizer: self.realizer.unwrap_or_default(),
            context: NarrativeContext::new(),
            buffer: Vec::new(),
            pending: Vec::new(),
        }
    }
}
