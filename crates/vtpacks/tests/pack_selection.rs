use std::fs;
use vtpacks::archive::packs_payload;
use vtpacks::catalog::parse_catalog;
use vtpacks::selection::{partition, read_requested};

const CATALOG: &str = r#"{
    "categories": [
        {"category": "Mobs", "packs": [{"name": "villager trading"}]},
        {"category": "Dragon Fight", "packs": [{"name": "dragon fight"}]},
        {"category": "Items/Blocks", "packs": [{"name": "armored elytra"}]}
    ]
}"#;

#[test]
fn pack_file_to_payload_end_to_end() {
    let dir = tempfile::tempdir().expect("temp dir");
    let list = dir.path().join("datapacks.txt");
    fs::write(&list, "Villager Trading\n\narmored elytra\ndragon fight\n").expect("write list");

    let index = parse_catalog(CATALOG).expect("parse catalog");
    let requested = read_requested(&list).expect("read list");
    let part = partition(&requested, &index);

    assert!(part.invalid.is_empty());
    assert_eq!(part.selection.len(), 3);
    assert_eq!(part.selection.pack_count(), 3);

    // Categories appear in the order the pack list reached them; multi-word
    // category names collapse to hyphenated identifiers.
    let payload = packs_payload(&part.selection).expect("build payload");
    let decoded = urlencoding::decode(&payload).expect("decode payload");
    assert_eq!(
        decoded,
        r#"{"mobs":["villager+trading"],"items-blocks":["armored+elytra"],"dragon-fight":["dragon+fight"]}"#
    );
}

#[test]
fn invalid_names_are_reported_but_do_not_block_the_valid_ones() {
    let dir = tempfile::tempdir().expect("temp dir");
    let list = dir.path().join("datapacks.txt");
    fs::write(&list, "villager trading\nnot a pack\n").expect("write list");

    let index = parse_catalog(CATALOG).expect("parse catalog");
    let requested = read_requested(&list).expect("read list");
    let part = partition(&requested, &index);

    assert_eq!(part.invalid, vec!["not a pack"]);
    assert_eq!(part.selection.pack_count(), 1);
    assert_eq!(
        part.selection.pack_count() + part.invalid.len(),
        requested.len()
    );
}

#[test]
fn all_invalid_names_leave_nothing_to_request() {
    let dir = tempfile::tempdir().expect("temp dir");
    let list = dir.path().join("datapacks.txt");
    fs::write(&list, "ghost pack\nother ghost\n").expect("write list");

    let index = parse_catalog(CATALOG).expect("parse catalog");
    let requested = read_requested(&list).expect("read list");
    let part = partition(&requested, &index);

    // The caller maps an empty selection to the fatal no-valid-packs error
    // and never reaches the locate stage.
    assert!(part.selection.is_empty());
    assert_eq!(part.invalid.len(), 2);
}
