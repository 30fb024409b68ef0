/// Noun phrase formatting — surface rendering of phrase trees, article
/// selection, capitalization, and the presentation decorator seam.
use crate::schema::entity::Entity;
use crate::schema::phrase::NounPhrase;

/// Presentation hook applied after a phrase is rendered. Implementors
/// typically dispatch on `Entity::kind` to color creature names
/// differently from item names; the grammar output they receive is
/// final and must be returned intact apart from markup.
pub trait Decorator {
    fn decorate(&self, rendered: &str, referent: &Entity) -> String;
}

/// Renders a noun phrase tree to a surface string.
///
/// Grammar logic (articles, capitalization, recursion) lives here;
/// presentation is delegated to an optional [`Decorator`] so a display
/// layer can highlight referents without touching grammar code.
#[derive(Default)]
pub struct PhraseFormatter {
    decorator: Option<Box<dyn Decorator>>,
}

impl std::fmt::Debug for PhraseFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhraseFormatter")
            .field("decorated", &self.decorator.is_some())
            .finish()
    }
}

impl PhraseFormatter {
    /// A formatter with no presentation layer.
    pub fn plain() -> Self {
        Self { decorator: None }
    }

    pub fn with_decorator(decorator: Box<dyn Decorator>) -> Self {
        Self {
            decorator: Some(decorator),
        }
    }

    /// Renders `phrase`, optionally decorating the result for
    /// `referent`.
    ///
    /// `capitalize` capitalizes the first word, articles included.
    /// `title_case` capitalizes the significant words but leaves
    /// articles lowercase unless `capitalize` also holds.
    pub fn format(
        &self,
        phrase: &NounPhrase,
        referent: Option<&Entity>,
        capitalize: bool,
        title_case: bool,
    ) -> String {
        let rendered = render(phrase, capitalize, title_case);
        match (&self.decorator, referent) {
            (Some(decorator), Some(entity)) => decorator.decorate(&rendered, entity),
            _ => rendered,
        }
    }
}

fn render(phrase: &NounPhrase, capitalize: bool, title_case: bool) -> String {
    match phrase {
        NounPhrase::Proper(word) | NounPhrase::Pronoun(word) => {
            cap_if(word, capitalize || title_case)
        }
        NounPhrase::Noun { word, .. } => cap_if(word, capitalize || title_case),
        NounPhrase::Definite(stem) => {
            format!("{} {}", cap_if("the", capitalize), render(stem, false, title_case))
        }
        NounPhrase::Indefinite(stem) => {
            let article = if stem.starts_with_vowel_sound() { "an" } else { "a" };
            format!(
                "{} {}",
                cap_if(article, capitalize),
                render(stem, false, title_case)
            )
        }
        NounPhrase::Adjective { word, stem } => {
            format!(
                "{} {}",
                cap_if(word, capitalize || title_case),
                render(stem, false, title_case)
            )
        }
        NounPhrase::Possessive { determiner, head } => {
            format!(
                "{} {}",
                cap_if(determiner, capitalize || title_case),
                render(head, false, title_case)
            )
        }
    }
}

fn cap_if(word: &str, capitalize: bool) -> String {
    if !capitalize {
        return word.to_string();
    }
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Joins formatted items with a conjunction: one item stands alone, two
/// are joined by the conjunction, three or more take commas with an
/// Oxford comma before the conjunction.
pub fn join_list(items: &[String], conjunction: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} {conjunction} {second}"),
        [head @ .., last] => {
            format!("{}, {conjunction} {last}", head.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::entity::{EntityId, EntityKind, Pronouns};

    fn fmt(phrase: &NounPhrase, capitalize: bool, title_case: bool) -> String {
        PhraseFormatter::plain().format(phrase, None, capitalize, title_case)
    }

    #[test]
    fn renders_literals() {
        assert_eq!(fmt(&NounPhrase::noun("dog"), false, false), "dog");
        assert_eq!(fmt(&NounPhrase::proper("Rex"), false, false), "Rex");
        assert_eq!(fmt(&NounPhrase::pronoun("it"), false, false), "it");
    }

    #[test]
    fn definite_article() {
        let the_dog = NounPhrase::noun("dog").to_definite();
        assert_eq!(fmt(&the_dog, false, false), "the dog");
        assert_eq!(fmt(&the_dog, true, false), "The dog");
    }

    #[test]
    fn indefinite_article_by_vowel_sound() {
        assert_eq!(fmt(&NounPhrase::noun("dog").to_indefinite(), false, false), "a dog");
        assert_eq!(
            fmt(&NounPhrase::noun("apple").to_indefinite(), false, false),
            "an apple"
        );
        assert_eq!(
            fmt(&NounPhrase::noun("apple").to_indefinite(), true, false),
            "An apple"
        );
    }

    #[test]
    fn adjective_takes_the_article() {
        // Article is chosen by the adjective's word, not the stem's
        let old_sword = NounPhrase::adjective("old", NounPhrase::noun("sword")).to_indefinite();
        assert_eq!(fmt(&old_sword, false, false), "an old sword");
        let rusty_apple = NounPhrase::adjective("rusty", NounPhrase::noun("apple")).to_indefinite();
        assert_eq!(fmt(&rusty_apple, false, false), "a rusty apple");
    }

    #[test]
    fn title_case_skips_articles() {
        let the_dog = NounPhrase::noun("dog").to_definite();
        assert_eq!(fmt(&the_dog, false, true), "the Dog");
        // capitalize still wins for the article itself
        assert_eq!(fmt(&the_dog, true, true), "The Dog");

        let an_old_sword =
            NounPhrase::adjective("old", NounPhrase::noun("sword")).to_indefinite();
        assert_eq!(fmt(&an_old_sword, false, true), "an Old Sword");
    }

    #[test]
    fn possessive_rendering() {
        let his_bone = NounPhrase::possessive("his", NounPhrase::noun("bone"));
        assert_eq!(fmt(&his_bone, false, false), "his bone");
        assert_eq!(fmt(&his_bone, true, false), "His bone");
    }

    #[test]
    fn inner_words_never_capitalized_by_sentence_caps() {
        let the_dog = NounPhrase::noun("dog").to_definite();
        assert_eq!(fmt(&the_dog, true, false), "The dog");
    }

    struct BracketDecorator;

    impl Decorator for BracketDecorator {
        fn decorate(&self, rendered: &str, referent: &Entity) -> String {
            match referent.kind {
                EntityKind::Item => format!("[{rendered}]"),
                _ => rendered.to_string(),
            }
        }
    }

    #[test]
    fn decorator_wraps_without_altering_grammar() {
        let sword = Entity::new(
            EntityId(1),
            NounPhrase::noun("sword"),
            Pronouns::ItIts,
            EntityKind::Item,
        );
        let formatter = PhraseFormatter::with_decorator(Box::new(BracketDecorator));
        let out = formatter.format(&sword.name.to_indefinite(), Some(&sword), true, false);
        assert_eq!(out, "[A sword]");

        let dog = Entity::new(
            EntityId(2),
            NounPhrase::noun("dog"),
            Pronouns::HeHim,
            EntityKind::Creature,
        );
        let out = formatter.format(&dog.name.to_indefinite(), Some(&dog), false, false);
        assert_eq!(out, "a dog");
    }

    #[test]
    fn join_list_shapes() {
        let one = vec!["a steak".to_string()];
        assert_eq!(join_list(&one, "and"), "a steak");

        let two = vec!["a steak".to_string(), "a potato".to_string()];
        assert_eq!(join_list(&two, "and"), "a steak and a potato");

        let three = vec![
            "a steak".to_string(),
            "a potato".to_string(),
            "a salad".to_string(),
        ];
        assert_eq!(join_list(&three, "and"), "a steak, a potato, and a salad");
    }

    #[test]
    fn join_list_other_conjunction() {
        let two = vec!["north".to_string(), "south".to_string()];
        assert_eq!(join_list(&two, "or"), "north or south");
    }

    #[test]
    fn join_list_empty() {
        assert_eq!(join_list(&[], "and"), "");
    }
}
