// SPDX-License-Identifier: GPL-3.0-or-later

use serde::{Deserialize, Serialize};

/// Envelope common to every Comic Vine endpoint.
///
/// `results` is an object for entity lookups and an array for collection
/// endpoints; the client decodes it into the matching record type.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    /// "OK" on success, otherwise a failure reason.
    #[serde(default)]
    pub error: String,
    /// Provider status code (1 on success).
    #[serde(default)]
    pub status_code: Option<u32>,
    #[serde(default)]
    pub number_of_page_results: Option<u32>,
    #[serde(default)]
    pub number_of_total_results: Option<u32>,
    /// Missing or null decodes as `None`; no `default` attribute here, which
    /// would pin a `Default` bound on `T` in the derived `Deserialize` impl.
    pub results: Option<T>,
}

/// Character record from a character search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Character {
    /// Comic Vine character ID.
    pub id: u64,
    /// Character name.
    pub name: String,
    /// Short description.
    #[serde(default)]
    pub deck: Option<String>,
    /// Character portrait.
    #[serde(default)]
    pub image: Option<Image>,
    /// Owning publisher.
    #[serde(default)]
    pub publisher: Option<PublisherRef>,
    /// Issue the character first appeared in.
    #[serde(default)]
    pub first_appeared_in_issue: Option<IssueRef>,
}

/// Image URLs attached to a record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Image {
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub thumb_url: Option<String>,
    #[serde(default)]
    pub original_url: Option<String>,
}

/// Issue record (entity lookup and issue search).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Issue {
    /// Comic Vine issue ID.
    pub id: u64,
    /// Issue title, often absent for numbered issues.
    #[serde(default)]
    pub name: Option<String>,
    /// Issue number within its volume (a string; "300", "Annual 1" etc.).
    #[serde(default)]
    pub issue_number: Option<String>,
    /// Volume the issue belongs to.
    #[serde(default)]
    pub volume: Option<VolumeRef>,
    /// Cover date (YYYY-MM-DD).
    #[serde(default)]
    pub cover_date: Option<String>,
    /// Long-form description (HTML).
    #[serde(default)]
    pub description: Option<String>,
    /// Characters appearing in the issue.
    #[serde(default)]
    pub character_credits: Vec<CharacterRef>,
    /// People credited on the issue.
    #[serde(default)]
    pub person_credits: Vec<PersonRef>,
}

/// Volume record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Volume {
    /// Comic Vine volume ID.
    pub id: u64,
    /// Volume name.
    #[serde(default)]
    pub name: Option<String>,
    /// Owning publisher.
    #[serde(default)]
    pub publisher: Option<PublisherRef>,
    /// First year of publication.
    #[serde(default)]
    pub start_year: Option<String>,
    /// Last year of publication, absent for ongoing volumes.
    #[serde(default)]
    pub end_year: Option<String>,
    #[serde(default)]
    pub count_of_issues: Option<u32>,
}

/// Publisher record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Publisher {
    /// Comic Vine publisher ID.
    pub id: u64,
    /// Publisher name.
    pub name: String,
    #[serde(default)]
    pub deck: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Characters owned by the publisher.
    #[serde(default)]
    pub characters: Vec<CharacterRef>,
    /// Volumes released by the publisher.
    #[serde(default)]
    pub volumes: Vec<VolumeRef>,
}

/// Creator (person) record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Creator {
    /// Comic Vine person ID.
    pub id: u64,
    /// Creator name.
    pub name: String,
    #[serde(default)]
    pub deck: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Characters this person created.
    #[serde(default)]
    pub created: Vec<CharacterRef>,
    /// Issues this person worked on.
    #[serde(default)]
    pub issues: Vec<IssueRef>,
}

/// Reference to a publisher (minimal info).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PublisherRef {
    pub id: u64,
    pub name: String,
}

/// Reference to a volume (minimal info).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VolumeRef {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
}

/// Reference to an issue (minimal info).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IssueRef {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub issue_number: Option<String>,
}

/// Reference to a character (minimal info).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CharacterRef {
    pub id: u64,
    pub name: String,
}

/// Reference to a credited person.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonRef {
    pub id: u64,
    pub name: String,
    /// Comma-separated roles (e.g. "writer, artist").
    #[serde(default)]
    pub role: Option<String>,
}

/// Filters for an issue search.
///
/// Comic Vine accepts a single `filter` query parameter. Setting more than
/// one filter keeps only the highest-precedence one, in the fixed order
/// name < publisher < creator < cover date.
#[derive(Debug, Clone, Default)]
pub struct IssueQuery {
    /// Filter by issue name.
    pub name: Option<String>,
    /// Filter by publisher name.
    pub publisher: Option<String>,
    /// Filter by credited creator name.
    pub creator: Option<String>,
    /// Filter by cover date (YYYY-MM-DD).
    pub cover_date: Option<String>,
    /// Maximum number of results (default 10, max 100).
    pub limit: Option<u32>,
}

impl IssueQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = Some(publisher.into());
        self
    }

    pub fn creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = Some(creator.into());
        self
    }

    pub fn cover_date(mut self, cover_date: impl Into<String>) -> Self {
        self.cover_date = Some(cover_date.into());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The value of the single `filter` parameter, if any filter is set.
    pub(crate) fn filter(&self) -> Option<String> {
        let mut filter = None;
        if let Some(name) = &self.name {
            filter = Some(format!("name:{name}"));
        }
        if let Some(publisher) = &self.publisher {
            filter = Some(format!("publisher:{publisher}"));
        }
        if let Some(creator) = &self.creator {
            filter = Some(format!("person_credits:{creator}"));
        }
        if let Some(cover_date) = &self.cover_date {
            filter = Some(format!("cover_date:{cover_date}"));
        }
        filter
    }
}
