use serde::{Deserialize, Serialize};

use super::entity::EntityId;

/// A verb with its two simple-present surface forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verb {
    /// Third person singular: "eats", "catches", "carries".
    pub third_singular: String,
    /// Every other person and number: "eat", "catch", "carry".
    pub other: String,
}

impl Verb {
    /// Builds a verb from its base form, deriving the third person
    /// singular by English inflection rules: -es after a sibilant or -o
    /// ("catch" → "catches", "go" → "goes"), consonant+y → -ies
    /// ("carry" → "carries"), plain -s otherwise.
    pub fn regular(base: &str) -> Self {
        Self {
            third_singular: inflect_third_singular(base),
            other: base.to_string(),
        }
    }

    /// Builds a verb with an explicit third person singular, for verbs
    /// the inflection rules get wrong ("have" → "has").
    pub fn irregular(base: &str, third_singular: &str) -> Self {
        Self {
            third_singular: third_singular.to_string(),
            other: base.to_string(),
        }
    }

    /// Selects the surface form for a subject's agreement class.
    pub fn form(&self, third_singular: bool) -> &str {
        if third_singular {
            &self.third_singular
        } else {
            &self.other
        }
    }
}

fn inflect_third_singular(base: &str) -> String {
    const SIBILANT_ENDINGS: [&str; 6] = ["s", "x", "z", "ch", "sh", "o"];
    if SIBILANT_ENDINGS.iter().any(|s| base.ends_with(s)) {
        return format!("{base}es");
    }
    if let Some(stem) = base.strip_suffix('y') {
        let penultimate = stem.chars().last();
        let after_consonant = penultimate
            .map(|c| !matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
            .unwrap_or(false);
        if after_consonant {
            return format!("{stem}ies");
        }
    }
    format!("{base}s")
}

/// Grammatical tense requested of the conjugator. Only the simple
/// present is implemented; the realizer fails loudly on the others
/// rather than guessing a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tense {
    SimplePresent,
    SimplePast,
    SimpleFuture,
}

/// "with the sword", "to the hall" — a preposition plus its object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepPhrase {
    pub preposition: String,
    pub object: EntityId,
}

impl PrepPhrase {
    pub fn new(preposition: &str, object: EntityId) -> Self {
        Self {
            preposition: preposition.to_string(),
            object,
        }
    }
}

/// A single verb with an optional direct object and an optional
/// prepositional phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbClause {
    pub verb: Verb,
    pub object: Option<EntityId>,
    pub prep: Option<PrepPhrase>,
}

impl VerbClause {
    pub fn bare(verb: Verb) -> Self {
        Self {
            verb,
            object: None,
            prep: None,
        }
    }

    pub fn with_object(verb: Verb, object: EntityId) -> Self {
        Self {
            verb,
            object: Some(object),
            prep: None,
        }
    }

    pub fn with_prep(mut self, prep: PrepPhrase) -> Self {
        self.prep = Some(prep);
        self
    }
}

/// What a sentence says about its subject. Pure data; the transformers
/// build new predicates rather than mutating these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Predicate {
    /// One verb clause: "eats a bone".
    Clause(VerbClause),
    /// Several clauses sharing the subject, each with its own verb:
    /// "finds a bone and eats it".
    Clauses(Vec<VerbClause>),
    /// One verb with several direct objects:
    /// "eats a steak, a potato, and a salad".
    VerbObjects {
        verb: Verb,
        objects: Vec<EntityId>,
        prep: Option<PrepPhrase>,
    },
}

/// An abstract sentence awaiting realization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentence {
    Simple {
        subject: EntityId,
        predicate: Predicate,
    },
    /// Clause-level variant of a compound sentence; structurally
    /// equivalent outcome to `Predicate::Clauses`, different
    /// intermediate representation.
    MultiClause {
        subject: EntityId,
        clauses: Vec<VerbClause>,
    },
}

impl Sentence {
    pub fn simple(subject: EntityId, predicate: Predicate) -> Self {
        Self::Simple { subject, predicate }
    }

    /// Shorthand for the most common shape: subject, verb, direct object.
    pub fn subject_verb_object(subject: EntityId, verb: Verb, object: EntityId) -> Self {
        Self::Simple {
            subject,
            predicate: Predicate::Clause(VerbClause::with_object(verb, object)),
        }
    }
}
