// Rust guideline compliant 2026-02-06

//! Unit tests for detail record decoding.

use filmcheck_core::{DetailRecord, KindFilter, PersonDetail, Query, TitleDetail};
use serde_json::json;

#[test]
fn test_title_detail_decodes_full_record() {
    let value = json!({
        "id": "tt0816692",
        "type": "movie",
        "is_adult": false,
        "primary_title": "Interstellar",
        "original_title": "Interstellar",
        "start_year": 2014,
        "end_year": null,
        "runtime_minutes": 169,
        "plot": "A team of explorers travel through a wormhole in space.",
        "rating": { "aggregate_rating": 8.7, "votes_count": 2100000 },
        "genres": ["Adventure", "Drama", "Sci-Fi"],
        "certificates": [
            { "country": { "code": "US", "name": "United States" }, "rating": "PG-13" }
        ],
        "spoken_languages": [{ "code": "en", "name": "English" }],
        "origin_countries": [{ "code": "US", "name": "United States" }],
        "critic_review": { "score": 74, "review_count": 46 },
        "directors": [{ "name": { "id": "nm0634240", "display_name": "Christopher Nolan" } }],
        "writers": [],
        "casts": [{
            "name": { "id": "nm0000190", "display_name": "Matthew McConaughey" },
            "characters": ["Cooper"]
        }]
    });

    let title: TitleDetail = serde_json::from_value(value).expect("title should decode");
    assert_eq!(title.kind.as_deref(), Some("movie"));
    assert_eq!(title.runtime_minutes, Some(169));
    assert_eq!(title.genres.len(), 3);
    assert_eq!(
        title.directors[0].name.as_ref().map(|n| n.id.as_str()),
        Some("nm0634240")
    );
    assert!(title.directors[0].characters.is_empty());
    assert_eq!(title.casts[0].characters, vec!["Cooper".to_string()]);
    assert_eq!(title.critic_review.and_then(|c| c.score), Some(74.0));
}

#[test]
fn test_title_detail_null_lists_decode_empty() {
    let value = json!({
        "id": "tt0000001",
        "genres": null,
        "certificates": null,
        "directors": null,
        "casts": [{ "name": { "id": "nm1", "display_name": null }, "characters": null }]
    });

    let title: TitleDetail = serde_json::from_value(value).expect("title should decode");
    assert!(title.genres.is_empty());
    assert!(title.certificates.is_empty());
    assert!(title.directors.is_empty());
    assert!(title.writers.is_empty());
    assert!(title.casts[0].characters.is_empty());
    assert!(title.rating.is_none());
}

#[test]
fn test_person_detail_decodes_with_missing_fields() {
    let value = json!({
        "id": "nm0000138",
        "display_name": "Leonardo DiCaprio",
        "alternate_names": null,
        "birth_year": 1974,
        "birth_location": "Hollywood, Los Angeles, California, USA",
        "known_for": [{ "id": "tt1375666", "primary_title": "Inception" }]
    });

    let person: PersonDetail = serde_json::from_value(value).expect("person should decode");
    assert!(person.alternate_names.is_empty());
    assert_eq!(person.birth_year, Some(1974));
    assert!(person.death_year.is_none());
    assert_eq!(person.known_for[0].primary_title.as_deref(), Some("Inception"));
}

#[test]
fn test_title_detail_tolerates_nameless_credits_and_null_entries() {
    let value = json!({
        "id": "tt1",
        "directors": [{ "name": null }],
        "writers": [null, { "name": { "id": "nm2", "display_name": "Writer" } }],
        "genres": ["Drama", null],
        "certificates": [null]
    });

    let title: TitleDetail = serde_json::from_value(value).expect("title should decode");
    assert_eq!(title.directors.len(), 1);
    assert!(title.directors[0].name.is_none());
    assert_eq!(title.writers.len(), 1);
    assert_eq!(title.writers[0].name.as_ref().map(|n| n.id.as_str()), Some("nm2"));
    assert_eq!(title.genres, vec!["Drama".to_string()]);
    assert!(title.certificates.is_empty());
}

#[test]
fn test_person_detail_skips_null_known_for_entries() {
    let value = json!({
        "id": "nm1",
        "alternate_names": [null, "Alias"],
        "known_for": [null, { "id": "tt1375666", "primary_title": null }]
    });

    let person: PersonDetail = serde_json::from_value(value).expect("person should decode");
    assert_eq!(person.alternate_names, vec!["Alias".to_string()]);
    assert_eq!(person.known_for.len(), 1);
    assert_eq!(person.known_for[0].id, "tt1375666");
}

#[test]
fn test_detail_record_serializes_with_kind_tag() {
    let person = PersonDetail {
        id: "nm0000138".to_string(),
        display_name: Some("Leonardo DiCaprio".to_string()),
        alternate_names: vec![],
        birth_year: None,
        birth_location: None,
        death_year: None,
        death_location: None,
        dead_reason: None,
        known_for: vec![],
    };
    let record = DetailRecord::Person(person);
    assert_eq!(record.id(), "nm0000138");

    let value = serde_json::to_value(&record).expect("record should serialize");
    assert_eq!(value["kind"], "person");
    assert_eq!(value["record"]["display_name"], "Leonardo DiCaprio");
}

#[test]
fn test_kind_filter_prefixes() {
    assert_eq!(KindFilter::None.prefix(), "");
    assert_eq!(KindFilter::Title.prefix(), "tt");
    assert_eq!(KindFilter::Person.prefix(), "nm");
}

#[test]
fn test_kind_filter_from_flags_prefers_title() {
    assert_eq!(KindFilter::from_flags(true, true), KindFilter::Title);
    assert_eq!(KindFilter::from_flags(false, true), KindFilter::Person);
    assert_eq!(KindFilter::from_flags(false, false), KindFilter::None);
}

#[test]
fn test_query_builder_defaults() {
    let query = Query::new("Heat");
    assert!(!query.exact_only);
    assert_eq!(query.kind_filter, KindFilter::None);

    let query = query.with_exact_only(true).with_kind_filter(KindFilter::Title);
    assert!(query.exact_only);
    assert_eq!(query.kind_filter, KindFilter::Title);
}
