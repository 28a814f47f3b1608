use super::*;

#[test]
fn rating_parse_accepts_one_through_five() {
    for (raw, expected) in ["1", "2", "3", "4", "5"].iter().zip(Rating::ALL) {
        assert_eq!(Rating::parse(raw), Some(expected));
        assert_eq!(expected.as_str(), *raw);
    }
}

#[test]
fn rating_parse_rejects_empty_and_out_of_range() {
    assert_eq!(Rating::parse(""), None);
    assert_eq!(Rating::parse("0"), None);
    assert_eq!(Rating::parse("6"), None);
    assert_eq!(Rating::parse(" 3"), None);
}

#[test]
fn rating_serializes_as_integer() {
    let submission = CommentSubmission {
        campsite_id: 2,
        rating: Rating::Four,
        author: "Alice".to_owned(),
        text: "Great spot".to_owned(),
    };
    let json = serde_json::to_value(&submission).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "campsite_id": 2, "rating": 4, "author": "Alice", "text": "Great spot" })
    );
}

#[test]
fn rating_deserialize_rejects_out_of_range() {
    let raw = r#"{"campsite_id":1,"rating":9,"author":"Al","text":"ok"}"#;
    assert!(serde_json::from_str::<CommentSubmission>(raw).is_err());
}

#[test]
fn campsite_defaults_optional_fields() {
    let raw = r#"{"id":0,"name":"React Lake","image":"images/react-lake.jpg","description":"Nestled"}"#;
    let campsite: Campsite = serde_json::from_str(raw).unwrap();
    assert_eq!(campsite.elevation, 0);
    assert!(!campsite.featured);
    assert_eq!(campsite.image, "images/react-lake.jpg");
}
