use rolodex_core::CoreError;
use rolodex_store::{ContactStore, StoreError, StoreErrorKind};

#[test]
fn add_then_read_back() {
    let mut store = ContactStore::new();
    let added = store
        .add("Ada", "0123456789", Some("10.12.1815"))
        .expect("add contact");
    assert_eq!(added.name().as_str(), "Ada");

    let phone = store.find_phone("Ada").expect("phone");
    assert_eq!(phone.as_str(), "0123456789");
    let birthday = store.show_birthday("Ada").expect("contact").expect("birthday");
    assert_eq!(birthday.to_string(), "10.12.1815");
}

#[test]
fn re_add_overwrites_whole_record() {
    let mut store = ContactStore::new();
    store
        .add("Ada", "0123456789", Some("10.12.1815"))
        .expect("add contact");
    store.add("Ada", "9876543210", None).expect("re-add contact");

    assert_eq!(store.len(), 1);
    assert_eq!(store.find_phone("Ada").expect("phone").as_str(), "9876543210");
    assert_eq!(store.show_birthday("Ada"), Some(None));
}

#[test]
fn add_reports_specific_validation_errors() {
    let mut store = ContactStore::new();
    let err = store.add("", "0123456789", None).unwrap_err();
    assert_eq!(err, StoreError::Core(CoreError::InvalidName));
    assert_eq!(err.kind(), StoreErrorKind::InvalidName);

    let err = store.add("Ada", "12-34", None).unwrap_err();
    assert_eq!(err.kind(), StoreErrorKind::InvalidPhone);

    let err = store.add("Ada", "0123456789", Some("2024-01-01")).unwrap_err();
    assert_eq!(err.kind(), StoreErrorKind::InvalidBirthday);
    assert!(store.is_empty());
}

#[test]
fn edit_phone_updates_existing_contact() {
    let mut store = ContactStore::new();
    store.add("Ada", "0123456789", None).expect("add contact");
    let updated = store.edit_phone("Ada", "1111111111").expect("edit phone");
    assert_eq!(updated.phone().as_str(), "1111111111");
    assert_eq!(store.find_phone("Ada").expect("phone").as_str(), "1111111111");
}

#[test]
fn edit_phone_rejects_invalid_phone_and_keeps_old_value() {
    let mut store = ContactStore::new();
    store.add("Ada", "0123456789", None).expect("add contact");
    let err = store.edit_phone("Ada", "123").unwrap_err();
    assert_eq!(err.kind(), StoreErrorKind::InvalidPhone);
    assert_eq!(store.find_phone("Ada").expect("phone").as_str(), "0123456789");
}

#[test]
fn add_birthday_sets_and_validates() {
    let mut store = ContactStore::new();
    store.add("Ada", "0123456789", None).expect("add contact");
    store.add_birthday("Ada", "10.12.1815").expect("add birthday");
    assert_eq!(
        store.show_birthday("Ada").flatten().map(|b| b.to_string()),
        Some("10.12.1815".to_string())
    );

    let err = store.add_birthday("Ada", "31.02.1815").unwrap_err();
    assert_eq!(err.kind(), StoreErrorKind::InvalidBirthday);
    assert_eq!(
        store.show_birthday("Ada").flatten().map(|b| b.to_string()),
        Some("10.12.1815".to_string())
    );
}

#[test]
fn missing_names_are_not_found() {
    let mut store = ContactStore::new();
    assert_eq!(
        store.edit_phone("Nobody", "0123456789").unwrap_err(),
        StoreError::NotFound("Nobody".to_string())
    );
    assert_eq!(
        store.add_birthday("Nobody", "01.01.2000").unwrap_err().kind(),
        StoreErrorKind::NotFound
    );
    assert!(store.find_phone("Nobody").is_none());
    assert!(store.show_birthday("Nobody").is_none());
}

#[test]
fn names_are_case_sensitive_keys() {
    let mut store = ContactStore::new();
    store.add("ada", "0123456789", None).expect("add contact");
    assert!(store.get("Ada").is_none());
    assert!(store.get("ada").is_some());
}

#[test]
fn all_lists_records_in_insertion_order() {
    let mut store = ContactStore::new();
    store.add("Grace", "0000000001", None).expect("add");
    store.add("Ada", "0000000002", Some("10.12.1815")).expect("add");
    let lines: Vec<String> = store.all().map(|record| record.to_string()).collect();
    assert_eq!(
        lines,
        vec![
            "Contact name: Grace, phone: 0000000001, birthday: ".to_string(),
            "Contact name: Ada, phone: 0000000002, birthday: 10.12.1815".to_string(),
        ]
    );
}
