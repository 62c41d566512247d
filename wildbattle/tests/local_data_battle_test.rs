use assert_matches::assert_matches;
use wildbattle::{
    Move,
    Phase,
    SideAction,
};
use wildbattle_data::{
    Accuracy,
    LocalDataStore,
};
use wildbattle_test_utils::{
    TestSessionBuilder,
    assert_new_logs_eq,
    get_controlled_rng_for_session,
};

fn local_data_store() -> LocalDataStore {
    LocalDataStore::new(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../wildbattle-data/test-data"
    ))
    .unwrap()
}

#[test]
fn player_gets_legal_moves_from_catalog() {
    let data = local_data_store();
    let session = TestSessionBuilder::new("Bulbasaur").build(&data).unwrap();
    let moves = session.player().moves();
    pretty_assertions::assert_eq!(
        moves.names().collect::<Vec<_>>(),
        vec!["tackle", "vine-whip", "growl", "bind"]
    );
    assert_matches!(
        moves.get("bind"),
        Some(Move {
            power: None,
            accuracy: Accuracy::Unavailable,
            ..
        })
    );
    assert_matches!(moves.get("growl"), Some(Move { power: None, .. }));
}

#[test]
fn battles_random_opponent_from_catalog() {
    let data = local_data_store();
    let mut session = TestSessionBuilder::new("bulbasaur")
        .with_seed(0)
        .with_controlled_rng(true)
        .build(&data)
        .unwrap();

    get_controlled_rng_for_session(&mut session)
        .unwrap()
        .insert_fake_values_relative_to_sequence_count([(1, 3)]);
    session.new_encounter().unwrap();
    session.select_move("Tackle").unwrap();

    get_controlled_rng_for_session(&mut session)
        .unwrap()
        .insert_fake_values_relative_to_sequence_count([(1, 0), (2, 0), (3, 0)]);
    let outcome = session.confirm_move().unwrap();
    assert_matches!(outcome.opponent_action, SideAction::Move(_));
    assert_eq!(outcome.opponent_health, 17);
    assert_eq!(outcome.player_health, 25);
    assert_eq!(session.phase(), Phase::TurnResolved);

    assert_new_logs_eq(
        &mut session,
        &[
            "player|name:bulbasaur|health:45/45",
            "encounter|name:charmander|health:39/39",
            "select|move:tackle",
            "turn|turn:1",
            "move|side:player|name:bulbasaur|move:tackle",
            "damage|side:opponent|damage:22|health:17/39",
            "move|side:opponent|name:charmander|move:scratch",
            "damage|side:player|damage:20|health:25/45",
        ],
    );
}
