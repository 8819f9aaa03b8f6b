use std::fs;

use lampskills::core::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn missing_file_opens_empty() {
    let tmp = TempDir::new().unwrap();

    let store = FileStore::open(tmp.path());

    assert!(store.chosen().is_empty());
    assert!(load_choices(tmp.path()).is_none());
}

#[test]
fn set_chosen_writes_json_in_set_order() {
    let tmp = TempDir::new().unwrap();
    let mut store = FileStore::open(tmp.path());

    let set: ChosenSet<Skill> = [Skill::Woodcutting, Skill::Magic].into_iter().collect();
    store.set_chosen(&set);

    let loaded = load_choices(tmp.path()).expect("choices file");
    assert_eq!(loaded.version, CHOICES_VERSION);
    assert_eq!(loaded.lamp_skills, vec![Skill::Woodcutting, Skill::Magic]);
    assert!(!choices_file(tmp.path()).with_extension("json.tmp").exists());

    let reopened = FileStore::open(tmp.path());
    let order: Vec<Skill> = reopened.chosen().into_iter().collect();
    assert_eq!(order, vec![Skill::Woodcutting, Skill::Magic]);
}

#[test]
fn file_uses_skill_names() {
    let tmp = TempDir::new().unwrap();
    save_choices(
        tmp.path(),
        &ChoicesFile {
            version: CHOICES_VERSION,
            lamp_skills: vec![Skill::Runecrafting],
        },
    )
    .unwrap();

    let raw = fs::read_to_string(choices_file(tmp.path())).unwrap();
    assert!(raw.contains("\"Runecrafting\""), "{raw}");
}

#[test]
fn corrupt_file_opens_empty() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(choices_dir(tmp.path())).unwrap();
    fs::write(choices_file(tmp.path()), "{ not json").unwrap();

    let store = FileStore::open(tmp.path());
    assert!(store.chosen().is_empty());
}

#[test]
fn missing_skill_list_defaults_to_empty() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(choices_dir(tmp.path())).unwrap();
    fs::write(choices_file(tmp.path()), r#"{ "version": 1 }"#).unwrap();

    let loaded = load_choices(tmp.path()).expect("parses");
    assert!(loaded.lamp_skills.is_empty());
}

#[test]
fn unwritable_root_keeps_value_in_memory() {
    let tmp = TempDir::new().unwrap();
    // A plain file where the choices directory should go.
    let root = tmp.path().join("blocked");
    fs::write(&root, "").unwrap();

    let mut store = FileStore::open(&root);
    let set: ChosenSet<Skill> = [Skill::Cooking].into_iter().collect();
    store.set_chosen(&set);

    assert_eq!(store.chosen(), set);
    assert!(load_choices(&root).is_none());
}

#[test]
fn session_over_file_store_persists_toggles() {
    let tmp = TempDir::new().unwrap();
    save_choices(
        tmp.path(),
        &ChoicesFile {
            version: CHOICES_VERSION,
            lamp_skills: vec![Skill::Prayer],
        },
    )
    .unwrap();

    let mut session = LampChoiceSession::open(
        SelectionList::new(Skill::domain()),
        FileStore::open(tmp.path()),
        String::new(),
    );
    assert_eq!(session.sink(), "1. Prayer");

    let fishing = Skill::domain().position(&Skill::Fishing).unwrap();
    session.surface_mut().toggle(fishing);
    session.pump();
    drop(session);

    let loaded = load_choices(tmp.path()).unwrap();
    assert_eq!(loaded.lamp_skills, vec![Skill::Prayer, Skill::Fishing]);
}
