use product_store::domain::programming_language::NewProgrammingLanguage;
use product_store::repository::{
    DieselRepository, ProgrammingLanguageReader, ProgrammingLanguageWriter,
};

mod common;

#[test]
fn test_lists_only_languages_rated_above_threshold() {
    let test_db = common::TestDb::new("test_programming_languages.db");
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_programming_languages(&[
            NewProgrammingLanguage::new("Java", 7),
            NewProgrammingLanguage::new("Go", 5),
            NewProgrammingLanguage::new("Rust", 9),
            NewProgrammingLanguage::new("PHP", 2),
        ])
        .unwrap();
    assert_eq!(created, 4);

    let names: Vec<String> = repo
        .list_programming_languages_rated_above(5)
        .unwrap()
        .into_iter()
        .map(|language| language.name)
        .collect();
    assert_eq!(names, vec!["Java".to_string(), "Rust".to_string()]);
}

#[test]
fn test_empty_batch_creates_nothing() {
    let test_db = common::TestDb::new("test_programming_languages_empty.db");
    let repo = DieselRepository::new(test_db.pool());

    assert_eq!(repo.create_programming_languages(&[]).unwrap(), 0);
    assert!(repo.list_programming_languages_rated_above(-1).unwrap().is_empty());
}
