// Rust guideline compliant 2026-02-06

//! Core data models for Film Checker.

use serde::{Deserialize, Deserializer, Serialize};

/// A single search suggestion returned by the suggestion source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Identifier such as `tt0816692` or `nm0000138`.
    pub id: String,
    /// Display label (title or person name).
    pub label: String,
    /// Short summary (year, main cast, ...).
    pub summary: String,
}

impl Candidate {
    /// Creates a new candidate.
    pub fn new(id: impl Into<String>, label: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            summary: summary.into(),
        }
    }
}

/// Restricts which identifiers count as exact matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KindFilter {
    /// Any identifier is accepted.
    #[default]
    None,
    /// Only title identifiers (`tt` prefix).
    Title,
    /// Only person identifiers (`nm` prefix).
    Person,
}

impl KindFilter {
    /// Returns the identifier prefix required by this filter.
    ///
    /// The empty prefix matches every identifier.
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            KindFilter::None => "",
            KindFilter::Title => "tt",
            KindFilter::Person => "nm",
        }
    }

    /// Builds a filter from the `--title` / `--person` flags.
    ///
    /// `title` takes precedence when both flags are set.
    #[must_use]
    pub fn from_flags(title: bool, person: bool) -> Self {
        if title {
            KindFilter::Title
        } else if person {
            KindFilter::Person
        } else {
            KindFilter::None
        }
    }
}

/// A free-text lookup request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Text entered by the user.
    pub text: String,
    /// Skip the exact match scan and always offer every candidate.
    pub exact_only: bool,
    /// Identifier prefix constraint for exact matches.
    pub kind_filter: KindFilter,
}

impl Query {
    /// Creates a query with the exact match scan enabled and no kind filter.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exact_only: false,
            kind_filter: KindFilter::None,
        }
    }

    /// Sets the `exact_only` flag.
    #[must_use]
    pub fn with_exact_only(mut self, exact_only: bool) -> Self {
        self.exact_only = exact_only;
        self
    }

    /// Sets the kind filter.
    #[must_use]
    pub fn with_kind_filter(mut self, kind_filter: KindFilter) -> Self {
        self.kind_filter = kind_filter;
        self
    }
}

/// Decodes a list that may itself be `null` or contain `null` entries,
/// dropping the `null` entries.
fn compact_list<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items = Option::<Vec<Option<T>>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(items.into_iter().flatten().collect())
}

/// Aggregate user rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average rating out of ten.
    pub aggregate_rating: Option<f64>,
    /// Number of votes.
    pub votes_count: Option<u64>,
}

/// Country reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// ISO 3166 country code.
    pub code: Option<String>,
    /// Display name.
    pub name: Option<String>,
}

/// Spoken language reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// ISO 639 language code.
    pub code: Option<String>,
    /// Display name.
    pub name: Option<String>,
}

/// Age certificate issued in a country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    /// Issuing country.
    pub country: Option<Country>,
    /// Certificate label (PG-13, 16, ...).
    pub rating: Option<String>,
}

/// Critic review summary (Metacritic style).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriticReview {
    /// Weighted score out of one hundred.
    pub score: Option<f64>,
    /// Number of reviews behind the score.
    pub review_count: Option<u64>,
}

/// Reference to a person inside a credit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRef {
    /// Person identifier (`nm...`).
    pub id: String,
    /// Display name.
    pub display_name: Option<String>,
}

/// A director, writer or cast credit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameCredit {
    /// Credited person; absent when the source has no record of them.
    #[serde(default)]
    pub name: Option<NameRef>,
    /// Characters played; only present for cast credits.
    #[serde(default, deserialize_with = "compact_list")]
    pub characters: Vec<String>,
}

/// Detailed title record from the detail source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleDetail {
    /// Title identifier (`tt...`).
    pub id: String,
    /// Title type (movie, tvSeries, ...).
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Adult content flag.
    pub is_adult: Option<bool>,
    /// Title as usually displayed.
    pub primary_title: Option<String>,
    /// Title in the original language.
    pub original_title: Option<String>,
    /// Release year, or first year of a series.
    pub start_year: Option<i32>,
    /// Last year of a series.
    pub end_year: Option<i32>,
    /// Runtime in minutes.
    pub runtime_minutes: Option<u32>,
    /// Plot summary.
    pub plot: Option<String>,
    /// User rating.
    pub rating: Option<Rating>,
    /// Genre names.
    #[serde(default, deserialize_with = "compact_list")]
    pub genres: Vec<String>,
    /// Age certificates per country.
    #[serde(default, deserialize_with = "compact_list")]
    pub certificates: Vec<Certificate>,
    /// Spoken languages.
    #[serde(default, deserialize_with = "compact_list")]
    pub spoken_languages: Vec<Language>,
    /// Countries of origin.
    #[serde(default, deserialize_with = "compact_list")]
    pub origin_countries: Vec<Country>,
    /// Critic review summary.
    pub critic_review: Option<CriticReview>,
    /// Director credits, at most the configured credit limit.
    #[serde(default, deserialize_with = "compact_list")]
    pub directors: Vec<NameCredit>,
    /// Writer credits, at most the configured credit limit.
    #[serde(default, deserialize_with = "compact_list")]
    pub writers: Vec<NameCredit>,
    /// Actor and actress credits, at most the configured credit limit.
    #[serde(default, deserialize_with = "compact_list")]
    pub casts: Vec<NameCredit>,
}

/// A title a person is known for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownFor {
    /// Title identifier (`tt...`).
    pub id: String,
    /// Title as usually displayed.
    pub primary_title: Option<String>,
}

/// Detailed person record from the detail source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonDetail {
    /// Person identifier (`nm...`).
    pub id: String,
    /// Name as usually displayed.
    pub display_name: Option<String>,
    /// Other names the person is credited under.
    #[serde(default, deserialize_with = "compact_list")]
    pub alternate_names: Vec<String>,
    /// Year of birth.
    pub birth_year: Option<i32>,
    /// Place of birth.
    pub birth_location: Option<String>,
    /// Year of death.
    pub death_year: Option<i32>,
    /// Place of death.
    pub death_location: Option<String>,
    /// Cause of death.
    pub dead_reason: Option<String>,
    /// Titles the person is best known for.
    #[serde(default, deserialize_with = "compact_list")]
    pub known_for: Vec<KnownFor>,
}

/// A resolved detail record, either a title or a person.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "record", rename_all = "snake_case")]
pub enum DetailRecord {
    /// Title record (`tt` identifier).
    Title(TitleDetail),
    /// Person record (`nm` identifier).
    Person(PersonDetail),
}

impl DetailRecord {
    /// Returns the identifier of the record.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            DetailRecord::Title(title) => &title.id,
            DetailRecord::Person(person) => &person.id,
        }
    }
}
