use assert_matches::assert_matches;
use wildbattle::{
    Move,
    legal_moves,
};
use wildbattle_data::{
    Accuracy,
    Creature,
    Id,
    LearnableMove,
    StatTable,
};
use wildbattle_test_utils::{
    TestDataStore,
    test_creature,
};

fn learnable(name: &str, rulesets: &[&str]) -> LearnableMove {
    LearnableMove {
        name: name.to_owned(),
        rulesets: rulesets.iter().map(|ruleset| Id::from(*ruleset)).collect(),
    }
}

fn stats() -> StatTable {
    StatTable {
        hp: 45,
        atk: 49,
        def: 49,
        ..Default::default()
    }
}

#[test]
fn keeps_only_moves_in_ruleset_in_catalog_order() {
    let creature = Creature {
        number: 1,
        name: "bulbasaur".to_owned(),
        stats: stats(),
        moves: Vec::from_iter([
            learnable("razor-wind", &["gold-silver"]),
            learnable("tackle", &["red-blue", "yellow"]),
            learnable("seed-bomb", &["diamond-pearl"]),
            learnable("vine-whip", &["yellow", "red-blue"]),
            learnable("growl", &["red-blue"]),
        ]),
    };
    let data = TestDataStore::new()
        .with_move_details("tackle", Some(40), Some(100), Some(35))
        .with_move_details("vine-whip", Some(45), Some(100), Some(25))
        .with_move_details("growl", None, Some(100), Some(40));

    let moves = legal_moves(&creature, &data);
    pretty_assertions::assert_eq!(
        moves.names().collect::<Vec<_>>(),
        vec!["tackle", "vine-whip", "growl"]
    );
}

#[test]
fn removes_duplicate_moves() {
    let creature = test_creature(1, "bulbasaur", stats(), &["tackle", "Tackle", "growl"]);
    let data = TestDataStore::new();
    let moves = legal_moves(&creature, &data);
    pretty_assertions::assert_eq!(moves.names().collect::<Vec<_>>(), vec!["tackle", "growl"]);
}

#[test]
fn attaches_move_details() {
    let creature = test_creature(1, "bulbasaur", stats(), &["tackle"]);
    let data = TestDataStore::new().with_move_details("tackle", Some(40), Some(100), Some(35));
    let moves = legal_moves(&creature, &data);
    pretty_assertions::assert_eq!(
        moves.get("tackle"),
        Some(&Move {
            id: Id::from("tackle"),
            name: "tackle".to_owned(),
            power: Some(40),
            accuracy: Accuracy::Chance(100),
            pp: Some(35),
        })
    );
}

#[test]
fn degrades_moves_with_unavailable_details() {
    let creature = test_creature(1, "bulbasaur", stats(), &["tackle", "bind", "vine-whip"]);
    let data = TestDataStore::new()
        .with_move_details("tackle", Some(40), Some(100), Some(35))
        .with_failing_move("vine-whip");

    let moves = legal_moves(&creature, &data);
    assert_eq!(moves.len(), 3);
    assert_matches!(
        moves.get("bind"),
        Some(Move {
            power: None,
            accuracy: Accuracy::Unavailable,
            pp: None,
            ..
        })
    );
    assert_matches!(
        moves.get("vine-whip"),
        Some(Move {
            power: None,
            accuracy: Accuracy::Unavailable,
            pp: None,
            ..
        })
    );
    assert_matches!(moves.get("tackle"), Some(Move { power: Some(40), .. }));
}

#[test]
fn looks_up_moves_ignoring_case_and_punctuation() {
    let creature = test_creature(1, "bulbasaur", stats(), &["vine-whip"]);
    let data = TestDataStore::new();
    let moves = legal_moves(&creature, &data);
    assert_matches!(moves.get("Vine Whip"), Some(mov) => assert_eq!(mov.name, "vine-whip"));
    assert_matches!(moves.get("ember"), None);
}

#[test]
fn creature_without_ruleset_moves_has_empty_move_set() {
    let creature = Creature {
        number: 1,
        name: "bulbasaur".to_owned(),
        stats: stats(),
        moves: Vec::from_iter([learnable("seed-bomb", &["diamond-pearl"])]),
    };
    let data = TestDataStore::new();
    assert!(legal_moves(&creature, &data).is_empty());
}
