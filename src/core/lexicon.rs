/// Verb lexicon — the fixed event-to-verb table, loadable and
/// overridable from RON.
use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::schema::sentence::Verb;

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Named verbs keyed by event kind ("attack", "take", ...). The default
/// table covers the engine's built-in events; games extend or override
/// it from RON files.
#[derive(Debug, Clone)]
pub struct VerbLexicon {
    verbs: HashMap<String, Verb>,
}

impl Default for VerbLexicon {
    fn default() -> Self {
        let mut verbs = HashMap::new();
        for base in ["move", "take", "equip", "attack", "wait", "look", "carry"] {
            verbs.insert(base.to_string(), Verb::regular(base));
        }
        Self { verbs }
    }
}

// RON deserialization helper — the file format spells out the base form
// and optionally a third person singular for irregular verbs.

#[derive(Debug, Deserialize)]
#[serde(rename = "Verb")]
struct RonVerb {
    base: String,
    #[serde(default)]
    third: Option<String>,
}

impl VerbLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// A lexicon with no entries at all, for callers supplying the
    /// whole table themselves.
    pub fn empty() -> Self {
        Self {
            verbs: HashMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Verb> {
        self.verbs.get(key)
    }

    pub fn insert(&mut self, key: &str, verb: Verb) {
        self.verbs.insert(key.to_string(), verb);
    }

    /// Load a verb table from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<VerbLexicon, LexiconError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a verb table from a RON string.
    pub fn parse_ron(input: &str) -> Result<VerbLexicon, LexiconError> {
        let raw: HashMap<String, RonVerb> = ron::from_str(input)?;
        let mut verbs = HashMap::new();
        for (key, entry) in raw {
            let verb = match entry.third {
                Some(third) => Verb::irregular(&entry.base, &third),
                None => Verb::regular(&entry.base),
            };
            verbs.insert(key, verb);
        }
        Ok(VerbLexicon { verbs })
    }

    /// Merge another lexicon into this one. Entries from `other`
    /// override entries in `self` with the same key.
    pub fn merge(&mut self, other: VerbLexicon) {
        for (key, verb) in other.verbs {
            self.verbs.insert(key, verb);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_covers_builtin_events() {
        let lexicon = VerbLexicon::default();
        for key in ["move", "take", "equip", "attack", "wait", "look", "carry"] {
            assert!(lexicon.get(key).is_some(), "missing verb for {key}");
        }
        assert_eq!(lexicon.get("attack").unwrap().third_singular, "attacks");
        assert_eq!(lexicon.get("carry").unwrap().third_singular, "carries");
    }

    #[test]
    fn parse_ron_regular_and_irregular() {
        let input = r#"{
            "attack": Verb(base: "strike"),
            "take": Verb(base: "snatch", third: Some("snatcheth")),
        }"#;
        let lexicon = VerbLexicon::parse_ron(input).unwrap();
        assert_eq!(lexicon.get("attack").unwrap().third_singular, "strikes");
        assert_eq!(lexicon.get("take").unwrap().third_singular, "snatcheth");
        assert_eq!(lexicon.get("take").unwrap().other, "snatch");
    }

    #[test]
    fn merge_precedence() {
        let mut base = VerbLexicon::default();
        let overrides = VerbLexicon::parse_ron(r#"{ "attack": Verb(base: "smite") }"#).unwrap();
        base.merge(overrides);

        // Override took precedence
        assert_eq!(base.get("attack").unwrap().other, "smite");
        // Base-only entry still present
        assert!(base.get("wait").is_some());
    }

    #[test]
    fn empty_lexicon_has_no_entries() {
        assert!(VerbLexicon::empty().get("attack").is_none());
    }

    #[test]
    fn insert_overrides_in_place() {
        let mut lexicon = VerbLexicon::empty();
        lexicon.insert("have", Verb::irregular("have", "has"));
        assert_eq!(lexicon.get("have").unwrap().third_singular, "has");
    }

    #[test]
    fn load_test_verbs_from_ron() {
        let path = std::path::PathBuf::from("tests/fixtures/test_verbs.ron");
        let lexicon = VerbLexicon::load_from_ron(&path).unwrap();
        assert_eq!(lexicon.get("attack").unwrap().other, "assail");
        assert_eq!(lexicon.get("have").unwrap().third_singular, "has");
    }
}
