//! Article transfer types and input validation.
//!
//! [`ArticleDto`] is the JSON shape exchanged over HTTP for a full record and
//! [`ArticleInput`] is the shape accepted by create and update. Both are
//! decoupled from the persisted row so the storage layer can change without
//! breaking clients.

use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Entity name used in `NotFound` errors.
pub const ARTICLE_ENTITY: &str = "Article";

/// Maximum length of an article title in characters.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length of article content in characters.
pub const MAX_CONTENT_LENGTH: usize = 5_000;

// ---------------------------------------------------------------------------
// Transfer types
// ---------------------------------------------------------------------------

/// Full article record as exposed over HTTP.
///
/// Serialized with camelCase names. Field names are matched without regard
/// to ASCII case or underscores on read, so `createdAt`, `CreatedAt`,
/// `CREATEDAT` and `created_at` all decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

/// Payload for creating or updating an article.
///
/// Missing and `null` fields decode as `None`, which
/// [`validate_article_input`] reports as blank instead of failing JSON
/// extraction. Field names are matched the same way as [`ArticleDto`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArticleInput {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl ArticleInput {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }
}

/// Validated, trimmed title and content ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleFields {
    pub title: String,
    pub content: String,
}

impl ArticleFields {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Case-insensitive decoding
// ---------------------------------------------------------------------------

const DTO_FIELDS: &[&str] = &["id", "title", "content", "createdAt", "updatedAt"];
const INPUT_FIELDS: &[&str] = &["title", "content"];

/// A transfer field name, normalized by dropping underscores and folding
/// ASCII case.
enum Field {
    Id,
    Title,
    Content,
    CreatedAt,
    UpdatedAt,
    Other,
}

impl Field {
    fn from_name(name: &str) -> Self {
        let key: String = name
            .chars()
            .filter(|c| *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "id" => Field::Id,
            "title" => Field::Title,
            "content" => Field::Content,
            "createdat" => Field::CreatedAt,
            "updatedat" => Field::UpdatedAt,
            _ => Field::Other,
        }
    }
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FieldVisitor;

        impl Visitor<'_> for FieldVisitor {
            type Value = Field;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an article field name")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Field, E> {
                Ok(Field::from_name(value))
            }
        }

        deserializer.deserialize_identifier(FieldVisitor)
    }
}

/// Decode the next map value into `slot`, rejecting a second occurrence of
/// the same field under any spelling.
fn read_once<'de, A, T>(
    map: &mut A,
    slot: &mut Option<T>,
    name: &'static str,
) -> Result<(), A::Error>
where
    A: MapAccess<'de>,
    T: Deserialize<'de>,
{
    if slot.is_some() {
        return Err(de::Error::duplicate_field(name));
    }
    *slot = Some(map.next_value()?);
    Ok(())
}

impl<'de> Deserialize<'de> for ArticleDto {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DtoVisitor;

        impl<'de> Visitor<'de> for DtoVisitor {
            type Value = ArticleDto;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an article object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<ArticleDto, A::Error> {
                let mut id: Option<DbId> = None;
                let mut title: Option<String> = None;
                let mut content: Option<String> = None;
                let mut created_at: Option<Timestamp> = None;
                let mut updated_at: Option<Option<Timestamp>> = None;

                while let Some(field) = map.next_key::<Field>()? {
                    match field {
                        Field::Id => read_once(&mut map, &mut id, "id")?,
                        Field::Title => read_once(&mut map, &mut title, "title")?,
                        Field::Content => read_once(&mut map, &mut content, "content")?,
                        Field::CreatedAt => read_once(&mut map, &mut created_at, "createdAt")?,
                        Field::UpdatedAt => read_once(&mut map, &mut updated_at, "updatedAt")?,
                        Field::Other => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }

                let missing = <A::Error as de::Error>::missing_field;
                Ok(ArticleDto {
                    id: id.ok_or_else(|| missing("id"))?,
                    title: title.ok_or_else(|| missing("title"))?,
                    content: content.ok_or_else(|| missing("content"))?,
                    created_at: created_at.ok_or_else(|| missing("createdAt"))?,
                    updated_at: updated_at.flatten(),
                })
            }
        }

        deserializer.deserialize_struct("ArticleDto", DTO_FIELDS, DtoVisitor)
    }
}

impl<'de> Deserialize<'de> for ArticleInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct InputVisitor;

        impl<'de> Visitor<'de> for InputVisitor {
            type Value = ArticleInput;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an article payload object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<ArticleInput, A::Error> {
                let mut title: Option<Option<String>> = None;
                let mut content: Option<Option<String>> = None;

                while let Some(field) = map.next_key::<Field>()? {
                    match field {
                        Field::Title => read_once(&mut map, &mut title, "title")?,
                        Field::Content => read_once(&mut map, &mut content, "content")?,
                        // Server-assigned fields are ignored on input.
                        Field::Id | Field::CreatedAt | Field::UpdatedAt | Field::Other => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }

                Ok(ArticleInput {
                    title: title.flatten(),
                    content: content.flatten(),
                })
            }
        }

        deserializer.deserialize_struct("ArticleInput", INPUT_FIELDS, InputVisitor)
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate an article payload and return its trimmed fields.
///
/// Checks run in a fixed order so the reported error is deterministic:
/// blank title, blank content, title length, content length. A missing
/// field counts as blank. Lengths are counted in characters on the raw
/// input.
pub fn validate_article_input(input: &ArticleInput) -> Result<ArticleFields, CoreError> {
    let title = input.title.as_deref().unwrap_or_default();
    let content = input.content.as_deref().unwrap_or_default();

    if title.trim().is_empty() {
        return Err(CoreError::Validation("Title must not be empty".to_string()));
    }
    if content.trim().is_empty() {
        return Err(CoreError::Validation("Content must not be empty".to_string()));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Title must not exceed {MAX_TITLE_LENGTH} characters"
        )));
    }
    if content.chars().count() > MAX_CONTENT_LENGTH {
        return Err(CoreError::Validation(format!(
            "Content must not exceed {MAX_CONTENT_LENGTH} characters"
        )));
    }

    Ok(ArticleFields::new(title.trim(), content.trim()))
}
