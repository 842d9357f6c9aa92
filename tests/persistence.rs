use addrbook::book::ContactBook;
use addrbook::error::BookError;
use addrbook::model::Contact;
use std::fs;
use tempfile::TempDir;

fn sample_book() -> ContactBook {
    let mut book = ContactBook::new();

    let mut ann = Contact::new("Ann").unwrap();
    ann.add_phone("5551234567").unwrap();
    ann.add_phone("5551234567").unwrap();
    ann.set_birthday("29-02-2000").unwrap();
    book.add_record(ann);

    let mut bo = Contact::new("Bo").unwrap();
    bo.add_phone("1234567890").unwrap();
    book.add_record(bo);

    book.add_record(Contact::new("Cy Young").unwrap());
    book
}

#[test]
fn save_then_load_reproduces_the_book() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contacts.json");
    let book = sample_book();

    book.save(&path).unwrap();

    let mut restored = ContactBook::new();
    restored.load(&path).unwrap();
    assert_eq!(restored, book);
    assert_eq!(
        restored.find("Ann").unwrap().birthday().unwrap().to_string(),
        "29-02-2000"
    );
    assert_eq!(restored.find("Ann").unwrap().phones().len(), 2);
}

#[test]
fn load_replaces_existing_contents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contacts.json");
    sample_book().save(&path).unwrap();

    let mut book = ContactBook::new();
    book.add_record(Contact::new("Zed").unwrap());
    book.load(&path).unwrap();

    assert!(book.find("Zed").is_none());
    assert_eq!(book.len(), 3);
}

#[test]
fn file_holds_only_the_mapping() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contacts.json");
    sample_book().save(&path).unwrap();

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let object = raw.as_object().unwrap();
    let keys: Vec<&str> = object.keys().map(String::as_str).collect();
    assert_eq!(keys, ["Ann", "Bo", "Cy Young"]);
    assert_eq!(object["Bo"]["phones"][0], "1234567890");
}

#[test]
fn save_to_missing_directory_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no-such-dir").join("contacts.json");
    let err = sample_book().save(&path).unwrap_err();
    assert!(matches!(err, BookError::Io(_)));
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let mut book = ContactBook::new();
    let err = book.load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, BookError::Io(_)));
}

#[test]
fn corrupt_file_leaves_book_unchanged() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contacts.json");
    fs::write(
        &path,
        r#"{"Ann": {"name": "Ann", "phones": ["5551234567"]}, "Bo": {"name": "Bo", "phones": ["55"]}}"#,
    )
    .unwrap();

    let mut book = sample_book();
    let err = book.load(&path).unwrap_err();
    assert!(matches!(err, BookError::CorruptData(_)));
    assert_eq!(book, sample_book());
}

#[test]
fn overwriting_save_replaces_previous_snapshot() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contacts.json");
    sample_book().save(&path).unwrap();

    let mut smaller = sample_book();
    smaller.delete("Bo");
    smaller.save(&path).unwrap();

    let mut restored = ContactBook::new();
    restored.load(&path).unwrap();
    assert_eq!(restored.names().collect::<Vec<_>>(), ["Ann", "Cy Young"]);
}
