//! Unit tests for the BirdRecord entity

use birdsearch_domain::{BirdRecord, Presence};

fn peafowl() -> BirdRecord {
    BirdRecord::new(
        "Indian Peafowl",
        "Pavo cristatus",
        "R",
        "Galliformes",
        "Phasianidae",
    )
}

#[test]
fn test_full_text_uses_raw_presence_code() {
    let record = BirdRecord::new(
        "Northern Pintail",
        "Anas acuta",
        "W",
        "Anseriformes",
        "Anatidae",
    );

    assert_eq!(
        record.full_text(),
        "Northern Pintail (Anas acuta) - W - Order: Anseriformes, Family: Anatidae"
    );
}

#[test]
fn test_searchable_text_for_resident() {
    assert_eq!(
        peafowl().searchable_text(),
        "Indian Peafowl, scientific name Pavo cristatus, resident species that breeds in India, \
         belongs to order Galliformes and family Phasianidae"
    );
}

#[test]
fn test_searchable_text_for_winter_visitor() {
    let record = BirdRecord::new("Bar-headed Goose", "Anser indicus", "W", "Anseriformes", "Anatidae");

    assert!(
        record
            .searchable_text()
            .contains("winter visitor migratory species")
    );
}

#[test]
fn test_presence_decoding() {
    assert_eq!(Presence::from_code("R"), Presence::Resident);
    assert_eq!(Presence::from_code("W"), Presence::WinterVisitor);
    // Anything that is not the resident code counts as a visitor
    assert_eq!(Presence::from_code(""), Presence::WinterVisitor);
    assert_eq!(Presence::from_code("r"), Presence::WinterVisitor);
}

#[test]
fn test_has_name_rejects_blank_names() {
    assert!(peafowl().has_name());

    let mut blank = peafowl();
    blank.name = String::new();
    assert!(!blank.has_name());

    blank.name = "  \t ".to_string();
    assert!(!blank.has_name());
}

#[test]
fn test_display_shows_common_and_scientific_name() {
    assert_eq!(peafowl().to_string(), "Indian Peafowl (Pavo cristatus)");
}
