/// Sentence transformers — pure rewrites that merge a run of buffered
/// atomic sentences sharing structure into one compound sentence.
use crate::schema::entity::EntityId;
use crate::schema::sentence::{Predicate, Sentence, Verb, VerbClause};

/// A predicate + rewrite pair over a contiguous window of buffered
/// sentences. Returns `None` when the preconditions do not hold; the
/// window is then left as it was.
///
/// Transformers never mutate their input, and every transformer here is
/// idempotent: a single already-merged sentence fails the "at least two
/// sentences" precondition.
pub trait SentenceTransformer {
    fn apply(&self, sentences: &[Sentence]) -> Option<Sentence>;
}

/// Merges sentences sharing subject and verb into one sentence with a
/// joined object list: "a girl eats a steak" + "a girl eats a potato"
/// → "a girl eats a steak and a potato".
///
/// Requires every sentence to be a single clause with a direct object,
/// no prepositional phrase, and pairwise-distinct objects.
pub struct SameSubjectVerb;

impl SentenceTransformer for SameSubjectVerb {
    fn apply(&self, sentences: &[Sentence]) -> Option<Sentence> {
        if sentences.len() < 2 {
            return None;
        }
        let mut subject: Option<EntityId> = None;
        let mut verb: Option<Verb> = None;
        let mut objects: Vec<EntityId> = Vec::with_capacity(sentences.len());

        for sentence in sentences {
            let Sentence::Simple {
                subject: this_subject,
                predicate: Predicate::Clause(clause),
            } = sentence
            else {
                return None;
            };
            let object = clause.object?;
            if clause.prep.is_some() {
                return None;
            }
            match subject {
                None => subject = Some(*this_subject),
                Some(prev) if prev == *this_subject => {}
                Some(_) => return None,
            }
            match &verb {
                None => verb = Some(clause.verb.clone()),
                Some(prev) if *prev == clause.verb => {}
                Some(_) => return None,
            }
            if objects.contains(&object) {
                return None;
            }
            objects.push(object);
        }

        Some(Sentence::Simple {
            subject: subject?,
            predicate: Predicate::VerbObjects {
                verb: verb?,
                objects,
                prep: None,
            },
        })
    }
}

/// Collects the clauses of a same-subject run with pairwise-distinct
/// verbs, the shared precondition of the two clause-joining
/// transformers.
fn collect_same_subject_clauses(sentences: &[Sentence]) -> Option<(EntityId, Vec<VerbClause>)> {
    if sentences.len() < 2 {
        return None;
    }
    let mut subject: Option<EntityId> = None;
    let mut clauses: Vec<VerbClause> = Vec::with_capacity(sentences.len());

    for sentence in sentences {
        let Sentence::Simple {
            subject: this_subject,
            predicate: Predicate::Clause(clause),
        } = sentence
        else {
            return None;
        };
        match subject {
            None => subject = Some(*this_subject),
            Some(prev) if prev == *this_subject => {}
            Some(_) => return None,
        }
        if clauses.iter().any(|existing| existing.verb == clause.verb) {
            return None;
        }
        clauses.push(clause.clone());
    }

    Some((subject?, clauses))
}

/// Merges same-subject sentences with distinct verbs into one sentence
/// whose predicate joins the clauses: "a dog finds a bone" + "a dog
/// eats a bone" → "a dog finds a bone and eats it" (the pronoun falls
/// out of realization, not of this rewrite).
pub struct SameSubject;

impl SentenceTransformer for SameSubject {
    fn apply(&self, sentences: &[Sentence]) -> Option<Sentence> {
        let (subject, clauses) = collect_same_subject_clauses(sentences)?;
        Some(Sentence::Simple {
            subject,
            predicate: Predicate::Clauses(clauses),
        })
    }
}

/// Clause-level variant of [`SameSubject`], producing a
/// [`Sentence::MultiClause`] for callers that want clause-level
/// realization. Structurally equivalent surface outcome.
pub struct MultipleVerbalClause;

impl SentenceTransformer for MultipleVerbalClause {
    fn apply(&self, sentences: &[Sentence]) -> Option<Sentence> {
        let (subject, clauses) = collect_same_subject_clauses(sentences)?;
        Some(Sentence::MultiClause { subject, clauses })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::sentence::PrepPhrase;

    fn svo(subject: u64, verb: &str, object: u64) -> Sentence {
        Sentence::subject_verb_object(EntityId(subject), Verb::regular(verb), EntityId(object))
    }

    #[test]
    fn same_subject_verb_merges_objects_in_order() {
        let sentences = vec![svo(1, "eat", 2), svo(1, "eat", 3), svo(1, "eat", 4)];
        let merged = SameSubjectVerb.apply(&sentences).unwrap();
        match merged {
            Sentence::Simple {
                subject,
                predicate: Predicate::VerbObjects { objects, prep, .. },
            } => {
                assert_eq!(subject, EntityId(1));
                assert_eq!(objects, vec![EntityId(2), EntityId(3), EntityId(4)]);
                assert!(prep.is_none());
            }
            other => panic!("unexpected shape: {other:?}"),
        }
    }

    #[test]
    fn same_subject_verb_rejects_single_sentence() {
        assert!(SameSubjectVerb.apply(&[svo(1, "eat", 2)]).is_none());
    }

    #[test]
    fn same_subject_verb_rejects_different_subjects() {
        let sentences = vec![svo(1, "eat", 2), svo(9, "eat", 3)];
        assert!(SameSubjectVerb.apply(&sentences).is_none());
    }

    #[test]
    fn same_subject_verb_rejects_different_verbs() {
        let sentences = vec![svo(1, "eat", 2), svo(1, "drop", 3)];
        assert!(SameSubjectVerb.apply(&sentences).is_none());
    }

    #[test]
    fn same_subject_verb_rejects_repeated_object() {
        let sentences = vec![svo(1, "eat", 2), svo(1, "eat", 2)];
        assert!(SameSubjectVerb.apply(&sentences).is_none());
    }

    #[test]
    fn same_subject_verb_rejects_prep_phrase() {
        let with_prep = Sentence::Simple {
            subject: EntityId(1),
            predicate: Predicate::Clause(
                VerbClause::with_object(Verb::regular("eat"), EntityId(2))
                    .with_prep(PrepPhrase::new("with", EntityId(3))),
            ),
        };
        let sentences = vec![svo(1, "eat", 4), with_prep];
        assert!(SameSubjectVerb.apply(&sentences).is_none());
    }

    #[test]
    fn same_subject_verb_rejects_missing_object() {
        let bare = Sentence::Simple {
            subject: EntityId(1),
            predicate: Predicate::Clause(VerbClause::bare(Verb::regular("eat"))),
        };
        let sentences = vec![svo(1, "eat", 2), bare];
        assert!(SameSubjectVerb.apply(&sentences).is_none());
    }

    #[test]
    fn same_subject_merges_clauses_in_order() {
        let sentences = vec![svo(1, "find", 2), svo(1, "eat", 2)];
        let merged = SameSubject.apply(&sentences).unwrap();
        match merged {
            Sentence::Simple {
                subject,
                predicate: Predicate::Clauses(clauses),
            } => {
                assert_eq!(subject, EntityId(1));
                assert_eq!(clauses.len(), 2);
                assert_eq!(clauses[0].verb, Verb::regular("find"));
                assert_eq!(clauses[1].verb, Verb::regular("eat"));
            }
            other => panic!("unexpected shape: {other:?}"),
        }
    }

    #[test]
    fn same_subject_rejects_repeated_verb() {
        let sentences = vec![svo(1, "eat", 2), svo(1, "eat", 3)];
        assert!(SameSubject.apply(&sentences).is_none());
    }

    #[test]
    fn same_subject_allows_prep_phrases() {
        let with_prep = Sentence::Simple {
            subject: EntityId(1),
            predicate: Predicate::Clause(
                VerbClause::with_object(Verb::regular("attack"), EntityId(2))
                    .with_prep(PrepPhrase::new("with", EntityId(3))),
            ),
        };
        let sentences = vec![svo(1, "find", 3), with_prep];
        assert!(SameSubject.apply(&sentences).is_some());
    }

    #[test]
    fn multiple_verbal_clause_produces_multi_clause() {
        let sentences = vec![svo(1, "find", 2), svo(1, "eat", 2)];
        let merged = MultipleVerbalClause.apply(&sentences).unwrap();
        assert!(matches!(merged, Sentence::MultiClause { .. }));
    }

    #[test]
    fn transformers_are_idempotent_on_merged_output() {
        let sentences = vec![svo(1, "eat", 2), svo(1, "eat", 3)];
        let merged = SameSubjectVerb.apply(&sentences).unwrap();
        assert!(SameSubjectVerb.apply(std::slice::from_ref(&merged)).is_none());

        let sentences = vec![svo(1, "find", 2), svo(1, "eat", 2)];
        let merged = SameSubject.apply(&sentences).unwrap();
        assert!(SameSubject.apply(std::slice::from_ref(&merged)).is_none());
    }

    #[test]
    fn transformers_do_not_mutate_input() {
        let sentences = vec![svo(1, "eat", 2), svo(1, "eat", 3)];
        let before = sentences.clone();
        let _ = SameSubjectVerb.apply(&sentences);
        assert_eq!(sentences, before);
    }
}
