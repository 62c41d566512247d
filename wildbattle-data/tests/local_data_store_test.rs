use std::path::PathBuf;

use assert_matches::assert_matches;
use wildbattle_data::{
    Accuracy,
    CreatureRef,
    DataStore,
    Id,
    LocalDataStore,
    MoveData,
    roster_options,
};

fn test_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test-data")
}

fn local_data_store() -> LocalDataStore {
    LocalDataStore::new(test_data_dir()).unwrap()
}

#[test]
fn fails_for_missing_root() {
    assert_matches!(
        LocalDataStore::new(test_data_dir().join("missing")),
        Err(err) => assert!(err.to_string().contains("does not exist"))
    );
}

#[test]
fn fails_for_undefined_env_var() {
    assert_matches!(
        LocalDataStore::new_from_env("WILDBATTLE_DATA_DIR_THAT_IS_NEVER_SET"),
        Err(err) => assert!(err.to_string().contains("not defined"))
    );
}

#[test]
fn reads_roster_in_order() {
    let store = local_data_store();
    assert_eq!(store.root(), test_data_dir().as_path());
    let roster = store.roster().unwrap();
    assert_eq!(roster.len(), 9);
    pretty_assertions::assert_eq!(
        roster_options(&roster[..4]),
        vec![
            "Bulbasaur (1)",
            "Ivysaur (2)",
            "Venusaur (3)",
            "Charmander (4)"
        ]
    );
}

#[test]
fn looks_up_creature_by_name_and_number() {
    let store = local_data_store();
    let by_name = store
        .get_creature_by_ref(&CreatureRef::name("Bulbasaur"))
        .unwrap()
        .unwrap();
    let by_number = store
        .get_creature_by_ref(&CreatureRef::number(1).unwrap())
        .unwrap()
        .unwrap();
    pretty_assertions::assert_eq!(by_name, by_number);
    assert_eq!(by_name.number, 1);
    assert_eq!(by_name.stats.hp, 45);
    assert_eq!(by_name.stats.atk, 49);
    assert_eq!(by_name.stats.def, 49);
    assert_eq!(by_name.stats.spe, 45);
    assert_eq!(by_name.moves.len(), 6);
}

#[test]
fn returns_none_for_roster_entry_without_record() {
    let store = local_data_store();
    assert_matches!(store.get_creature(&Id::from("ivysaur")), Ok(None));
    assert_matches!(store.get_creature_by_number(2), Ok(None));
}

#[test]
fn reads_move_details() {
    let store = local_data_store();
    pretty_assertions::assert_eq!(
        store.get_move(&Id::from("Vine Whip")).unwrap(),
        Some(MoveData {
            name: "vine-whip".to_owned(),
            power: Some(45),
            accuracy: Accuracy::Chance(100),
            pp: Some(25),
        })
    );
    assert_matches!(
        store.get_move(&Id::from("growl")),
        Ok(Some(MoveData { power: None, .. }))
    );
    assert_matches!(store.get_move(&Id::from("bind")), Ok(None));
}
