//! A short second-person dungeon walk: game events in, paragraphs out.
//!
//! Run with: cargo run --example dungeon_walk

use std::collections::HashMap;

use discourse_engine::core::narrator::Narrator;
use discourse_engine::core::realizer::{Person, WorldState};
use discourse_engine::core::transform::SameSubjectVerb;
use discourse_engine::schema::entity::{Entity, EntityId, EntityKind, Pronouns};
use discourse_engine::schema::event::GameEvent;
use discourse_engine::schema::phrase::NounPhrase;

const PLAYER: EntityId = EntityId(1);
const CELLAR: EntityId = EntityId(2);
const SWORD: EntityId = EntityId(3);
const APPLE: EntityId = EntityId(4);
const GOBLIN: EntityId = EntityId(5);

fn build_world() -> HashMap<EntityId, Entity> {
    let mut entities = HashMap::new();
    entities.insert(
        PLAYER,
        Entity::new(
            PLAYER,
            NounPhrase::noun("adventurer"),
            Pronouns::SheHer,
            EntityKind::Creature,
        ),
    );
    entities.insert(
        CELLAR,
        Entity::new(
            CELLAR,
            NounPhrase::adjective("dank", NounPhrase::noun("cellar")),
            Pronouns::ItIts,
            EntityKind::Location,
        ),
    );
    entities.insert(
        SWORD,
        Entity::new(
            SWORD,
            NounPhrase::adjective("rusty", NounPhrase::noun("sword")),
            Pronouns::ItIts,
            EntityKind::Item,
        ),
    );
    entities.insert(
        APPLE,
        Entity::new(APPLE, NounPhrase::noun("apple"), Pronouns::ItIts, EntityKind::Item),
    );
    entities.insert(
        GOBLIN,
        Entity::new(
            GOBLIN,
            NounPhrase::noun("goblin"),
            Pronouns::HeHim,
            EntityKind::Creature,
        ),
    );
    entities
}

fn print_paragraphs(narrator: &mut Narrator, world: &WorldState<'_>) {
    for paragraph in narrator.flush_paragraphs(world).expect("realization failed") {
        println!("{}", paragraph.sentences.join(" "));
        println!();
    }
}

fn main() {
    let entities = build_world();
    let world = WorldState::new(&entities);

    let mut narrator = Narrator::new();
    narrator.override_person(PLAYER, Person::Second);

    narrator
        .narrate_event(&GameEvent::Moved {
            actor: PLAYER,
            to: CELLAR,
        })
        .unwrap();
    narrator
        .narrate_event(&GameEvent::Looked {
            actor: PLAYER,
            at: None,
        })
        .unwrap();
    print_paragraphs(&mut narrator, &world);

    // Two pickups share subject and verb; merge them into one sentence.
    narrator
        .narrate_event(&GameEvent::TookItem {
            actor: PLAYER,
            item: SWORD,
        })
        .unwrap();
    narrator
        .narrate_event(&GameEvent::TookItem {
            actor: PLAYER,
            item: APPLE,
        })
        .unwrap();
    narrator.apply_transform(&SameSubjectVerb);
    print_paragraphs(&mut narrator, &world);

    narrator
        .narrate_event(&GameEvent::Equipped {
            actor: PLAYER,
            item: SWORD,
        })
        .unwrap();
    narrator
        .narrate_event(&GameEvent::Attacked {
            actor: PLAYER,
            target: GOBLIN,
            weapon: Some(SWORD),
        })
        .unwrap();
    print_paragraphs(&mut narrator, &world);
}
