// Rust guideline compliant 2026-02-09

//! GraphQL documents and response envelopes for the detail endpoint.

use filmcheck_core::{Error, PersonDetail, Result, TitleDetail};
use serde::{Deserialize, Serialize};

/// Fetches a title with its credits; `$credits` caps each credit category.
pub const TITLE_BY_ID: &str = r#"
query titleById($id: ID!, $credits: Int!) {
    title(id: $id) {
        id
        type
        is_adult
        primary_title
        original_title
        start_year
        end_year
        runtime_minutes
        plot
        rating {
            aggregate_rating
            votes_count
        }
        genres
        certificates {
            country {
                code
                name
            }
            rating
        }
        spoken_languages {
            code
            name
        }
        origin_countries {
            code
            name
        }
        critic_review {
            score
            review_count
        }
        directors: credits(first: $credits, categories: ["director"]) {
            name {
                id
                display_name
            }
        }
        writers: credits(first: $credits, categories: ["writer"]) {
            name {
                id
                display_name
            }
        }
        casts: credits(first: $credits, categories: ["actor", "actress"]) {
            name {
                id
                display_name
            }
            characters
        }
    }
}
"#;

/// Fetches a person and the titles they are known for.
pub const PERSON_BY_ID: &str = r#"
query nameById($id: ID!) {
    name(id: $id) {
        id
        display_name
        alternate_names
        birth_year
        birth_location
        death_year
        death_location
        dead_reason
        known_for {
            id
            primary_title
        }
    }
}
"#;

/// Request body sent to the GraphQL endpoint.
#[derive(Debug, Serialize)]
pub struct GraphqlRequest<'a> {
    /// GraphQL document.
    pub query: &'a str,
    /// Operation variables.
    pub variables: serde_json::Value,
}

impl<'a> GraphqlRequest<'a> {
    /// Builds the title request for `id`.
    #[must_use]
    pub fn title(id: &str, credit_limit: u32) -> Self {
        Self {
            query: TITLE_BY_ID,
            variables: serde_json::json!({ "id": id, "credits": credit_limit }),
        }
    }

    /// Builds the person request for `id`.
    #[must_use]
    pub fn person(id: &str) -> Self {
        Self {
            query: PERSON_BY_ID,
            variables: serde_json::json!({ "id": id }),
        }
    }
}

/// A single entry of the GraphQL `errors` array.
#[derive(Debug, Deserialize)]
pub struct GraphqlError {
    /// Human-readable error message.
    pub message: String,
}

/// Standard GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub struct GraphqlResponse<T> {
    /// Query result; absent when the query failed.
    pub data: Option<T>,
    /// Errors reported by the endpoint.
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

impl<T> GraphqlResponse<T> {
    /// Extracts the data payload.
    ///
    /// # Errors
    ///
    /// Returns `Error::Graphql` when the response lists errors, or
    /// `Error::NoData` when it has no data.
    pub fn into_data(self) -> Result<T> {
        if !self.errors.is_empty() {
            return Err(Error::Graphql(
                self.errors.into_iter().map(|e| e.message).collect(),
            ));
        }
        self.data
            .ok_or_else(|| Error::NoData("GraphQL response has no data".to_string()))
    }
}

/// `data` payload of the title query.
#[derive(Debug, Deserialize)]
pub struct TitleData {
    /// Title record, `null` for an unknown id.
    pub title: Option<TitleDetail>,
}

/// `data` payload of the person query.
#[derive(Debug, Deserialize)]
pub struct NameData {
    /// Person record, `null` for an unknown id.
    pub name: Option<PersonDetail>,
}

/// Decodes a title query response body.
///
/// # Errors
///
/// Returns an error if the body is not valid JSON, carries GraphQL errors,
/// or has no title for the requested id.
pub fn parse_title(body: &str, id: &str) -> Result<TitleDetail> {
    let response: GraphqlResponse<TitleData> = serde_json::from_str(body)?;
    response
        .into_data()?
        .title
        .ok_or_else(|| Error::NoData(format!("no title with id {}", id)))
}

/// Decodes a person query response body.
///
/// # Errors
///
/// Returns an error if the body is not valid JSON, carries GraphQL errors,
/// or has no person for the requested id.
pub fn parse_person(body: &str, id: &str) -> Result<PersonDetail> {
    let response: GraphqlResponse<NameData> = serde_json::from_str(body)?;
    response
        .into_data()?
        .name
        .ok_or_else(|| Error::NoData(format!("no person with id {}", id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_request_variables() {
        let request = GraphqlRequest::title("tt0816692", 5);
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["variables"]["id"], "tt0816692");
        assert_eq!(body["variables"]["credits"], 5);
        assert!(body["query"].as_str().unwrap().contains("titleById"));
    }

    #[test]
    fn test_person_request_variables() {
        let request = GraphqlRequest::person("nm0000138");
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["variables"], serde_json::json!({ "id": "nm0000138" }));
        assert!(body["query"].as_str().unwrap().contains("nameById"));
    }

    #[test]
    fn test_parse_title_success() {
        let body = r#"{"data": {"title": {"id": "tt0816692", "primary_title": "Interstellar"}}}"#;
        let title = parse_title(body, "tt0816692").unwrap();
        assert_eq!(title.primary_title.as_deref(), Some("Interstellar"));
    }

    #[test]
    fn test_parse_title_null_record_is_no_data() {
        let body = r#"{"data": {"title": null}}"#;
        let result = parse_title(body, "tt0000000");
        assert!(matches!(result, Err(Error::NoData(msg)) if msg.contains("tt0000000")));
    }

    #[test]
    fn test_parse_person_graphql_errors() {
        let body = r#"{"data": null, "errors": [{"message": "invalid id"}, {"message": "try again"}]}"#;
        let result = parse_person(body, "nm0");
        assert!(matches!(result, Err(Error::Graphql(messages)) if messages.len() == 2));
    }

    #[test]
    fn test_parse_person_missing_data() {
        let result = parse_person("{}", "nm0000138");
        assert!(matches!(result, Err(Error::NoData(_))));
    }
}
