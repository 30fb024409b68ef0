use serde::{Deserialize, Serialize};

/// A composable noun phrase referring to an entity.
///
/// The variant set is closed; the formatter and realizer match it
/// exhaustively, so adding a variant is a compile-time-checked,
/// all-call-sites-updated operation.
///
/// All queries on a phrase are pure — no variant mutates another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NounPhrase {
    /// A name. Always definite; never takes an article.
    Proper(String),
    /// A common noun. The vowel flag is decided once at construction
    /// from the literal's first letter, not recomputed per query.
    Noun { word: String, vowel_initial: bool },
    /// An adjective modifying a stem phrase. Article and vowel behavior
    /// delegate to the adjective's own word, not the stem.
    Adjective { word: String, stem: Box<NounPhrase> },
    /// "the X"
    Definite(Box<NounPhrase>),
    /// "a X" or "an X", chosen by the stem's vowel flag.
    Indefinite(Box<NounPhrase>),
    /// A terminal pronoun. Definite by construction.
    Pronoun(String),
    /// "his X", "her X", "their X".
    Possessive {
        determiner: String,
        head: Box<NounPhrase>,
    },
}

fn starts_with_vowel(word: &str) -> bool {
    word.chars()
        .next()
        .map(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
        .unwrap_or(false)
}

impl NounPhrase {
    pub fn proper(name: &str) -> Self {
        Self::Proper(name.to_string())
    }

    pub fn noun(word: &str) -> Self {
        Self::Noun {
            word: word.to_string(),
            vowel_initial: starts_with_vowel(word),
        }
    }

    pub fn adjective(word: &str, stem: NounPhrase) -> Self {
        Self::Adjective {
            word: word.to_string(),
            stem: Box::new(stem),
        }
    }

    pub fn pronoun(word: &str) -> Self {
        Self::Pronoun(word.to_string())
    }

    pub fn possessive(determiner: &str, head: NounPhrase) -> Self {
        Self::Possessive {
            determiner: determiner.to_string(),
            head: Box::new(head),
        }
    }

    /// The definite form of this phrase: "the dog". Phrases that are
    /// already definite (proper nouns, pronouns, possessives) are
    /// returned unchanged.
    pub fn to_definite(&self) -> NounPhrase {
        match self {
            Self::Proper(_) | Self::Pronoun(_) | Self::Possessive { .. } | Self::Definite(_) => {
                self.clone()
            }
            Self::Indefinite(stem) => Self::Definite(stem.clone()),
            Self::Noun { .. } | Self::Adjective { .. } => Self::Definite(Box::new(self.clone())),
        }
    }

    /// The indefinite form of this phrase: "a dog" / "an apple". The
    /// article is recomputed from the stem, so an unwrapped Definite
    /// reproduces the stem's own indefinite form. Inherently definite
    /// phrases are returned unchanged.
    pub fn to_indefinite(&self) -> NounPhrase {
        match self {
            Self::Proper(_) | Self::Pronoun(_) | Self::Possessive { .. } | Self::Indefinite(_) => {
                self.clone()
            }
            Self::Definite(stem) => Self::Indefinite(stem.clone()),
            Self::Noun { .. } | Self::Adjective { .. } => Self::Indefinite(Box::new(self.clone())),
        }
    }

    /// The innermost Noun, Proper, or Pronoun of this phrase.
    pub fn head_noun(&self) -> &NounPhrase {
        match self {
            Self::Proper(_) | Self::Noun { .. } | Self::Pronoun(_) => self,
            Self::Adjective { stem, .. } => stem.head_noun(),
            Self::Definite(stem) | Self::Indefinite(stem) => stem.head_noun(),
            Self::Possessive { head, .. } => head.head_noun(),
        }
    }

    /// Whether the first spoken word of this phrase starts with a vowel
    /// sound — the query that selects "a" versus "an".
    pub fn starts_with_vowel_sound(&self) -> bool {
        match self {
            Self::Noun { vowel_initial, .. } => *vowel_initial,
            Self::Proper(v) | Self::Pronoun(v) => starts_with_vowel(v),
            // An adjective speaks its own word first, not the stem's.
            Self::Adjective { word, .. } => starts_with_vowel(word),
            Self::Definite(stem) | Self::Indefinite(stem) => stem.starts_with_vowel_sound(),
            Self::Possessive { determiner, .. } => starts_with_vowel(determiner),
        }
    }
}
