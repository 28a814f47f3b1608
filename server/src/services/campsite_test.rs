use campsite_client::net::types::Rating;
use campsite_client::util::validation::Field;

use super::*;

fn submission(campsite_id: CampsiteId, author: &str, text: &str) -> CommentSubmission {
    CommentSubmission { campsite_id, rating: Rating::Four, author: author.to_owned(), text: text.to_owned() }
}

// =============================================================================
// Seeding
// =============================================================================

#[test]
fn builtin_seed_parses() {
    let store = load_seed(None).unwrap();
    assert_eq!(store.list_campsites().len(), 4);
    assert_eq!(store.campsite(0).unwrap().name, "React Lake");
}

#[test]
fn parse_seed_defaults_missing_comments() {
    let raw = "campsites:\n  - id: 7\n    name: Test Camp\n    image: images/t.jpg\n    description: Flat ground.\n";
    let store = parse_seed(raw).unwrap();
    assert!(store.comments_for(7).unwrap().is_empty());
}

#[test]
fn parse_seed_rejects_malformed_yaml() {
    let err = parse_seed("campsites: [").unwrap_err();
    assert!(matches!(err, SeedError::Parse(_)));
}

#[test]
fn load_seed_reports_missing_file() {
    let err = load_seed(Some(Path::new("/nonexistent/campsites.yaml"))).unwrap_err();
    assert!(matches!(err, SeedError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/campsites.yaml"));
}

// =============================================================================
// Queries
// =============================================================================

#[test]
fn campsite_lookup_unknown_id_is_not_found() {
    let store = load_seed(None).unwrap();
    assert!(matches!(store.campsite(99), Err(CampsiteError::NotFound(99))));
}

#[test]
fn comments_for_filters_by_campsite_in_order() {
    let store = load_seed(None).unwrap();
    let ids: Vec<_> = store.comments_for(0).unwrap().iter().map(|c| c.id).collect();
    assert_eq!(ids, [0, 1, 2]);
    assert!(store.comments_for(0).unwrap().iter().all(|c| c.campsite_id == 0));
}

// =============================================================================
// add_comment
// =============================================================================

#[test]
fn add_comment_appends_with_next_id() {
    let mut store = load_seed(None).unwrap();
    let comment = store
        .add_comment(submission(0, "Alice", "Great spot"), "2026-10-19T08:00:00Z".to_owned())
        .unwrap();
    assert_eq!(comment.id, 7);
    assert_eq!(comment.rating, 4);
    assert_eq!(comment.date, "2026-10-19T08:00:00Z");

    let last = store.comments_for(0).unwrap().pop().unwrap();
    assert_eq!(last, comment);
}

#[test]
fn add_comment_ids_keep_increasing() {
    let mut store = CampsiteStore::new(load_seed(None).unwrap().list_campsites().to_vec(), Vec::new());
    let a = store.add_comment(submission(1, "Al", "ok"), String::new()).unwrap();
    let b = store.add_comment(submission(1, "Bo", "ok"), String::new()).unwrap();
    assert_eq!((a.id, b.id), (0, 1));
}

#[test]
fn add_comment_stops_at_last_comment_id() {
    let campsites = load_seed(None).unwrap().list_campsites().to_vec();
    let seeded = Comment {
        id: u32::MAX - 1,
        campsite_id: 1,
        rating: 3,
        text: "ok".to_owned(),
        author: "Al".to_owned(),
        date: String::new(),
    };
    let mut store = CampsiteStore::new(campsites, vec![seeded]);

    let last = store.add_comment(submission(1, "Bo", "ok"), String::new()).unwrap();
    assert_eq!(last.id, u32::MAX);

    let err = store.add_comment(submission(1, "Cy", "ok"), String::new()).unwrap_err();
    assert!(matches!(err, CampsiteError::IdsExhausted));
    assert_eq!(store.comments_for(1).unwrap().len(), 2);
}

#[test]
fn seed_with_max_comment_id_rejects_new_comments() {
    let raw = "campsites:\n  - id: 0\n    name: Test Camp\n    image: images/t.svg\n    description: Flat ground.\ncomments:\n  - id: 4294967295\n    campsite_id: 0\n    rating: 5\n    text: Full\n    author: Ada\n    date: 2018-10-25T16:30Z\n";
    let mut store = parse_seed(raw).unwrap();
    let err = store.add_comment(submission(0, "Bo", "ok"), String::new()).unwrap_err();
    assert!(matches!(err, CampsiteError::IdsExhausted));
}

#[test]
fn add_comment_rejects_invalid_fields_without_storing() {
    let mut store = load_seed(None).unwrap();
    let before = store.comments_for(2).unwrap().len();

    let err = store.add_comment(submission(2, "A", "hi"), String::new()).unwrap_err();
    let CampsiteError::Invalid(errors) = err else {
        panic!("expected validation failure");
    };
    assert_eq!(errors.for_field(Field::Author), ["Must be at least 2 characters"]);
    assert_eq!(store.comments_for(2).unwrap().len(), before);
}

#[test]
fn add_comment_unknown_campsite_is_not_found() {
    let mut store = load_seed(None).unwrap();
    let err = store.add_comment(submission(42, "Alice", "Great spot"), String::new()).unwrap_err();
    assert!(matches!(err, CampsiteError::NotFound(42)));
}

#[test]
fn now_timestamp_is_rfc3339() {
    let ts = now_timestamp();
    assert!(OffsetDateTime::parse(&ts, &Rfc3339).is_ok());
}
