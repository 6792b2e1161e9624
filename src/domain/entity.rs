//! Typed entities for the six tables, each with a validating constructor and
//! a conversion into an [`InsertSpec`] carrying the schema's fixed column
//! order.
//!
//! Validation here is local and cheap: required fields non-empty, emails
//! contain `@`, article/image links carry an http(s) scheme, datetimes parse.
//! Referential integrity stays with the store; a dangling foreign key comes
//! back as a failed execution, not a validation error.

use chrono::NaiveDateTime;

use super::insert_spec::{InsertSpec, InvalidSpecError};
use super::schema;
use super::value::SqlValue;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn require_non_empty(
    field: &'static str,
    value: impl Into<String>,
) -> Result<String, InvalidSpecError> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(InvalidSpecError::EmptyField { field });
    }
    Ok(trimmed.to_string())
}

fn require_email(field: &'static str, value: impl Into<String>) -> Result<String, InvalidSpecError> {
    let value = require_non_empty(field, value)?;
    if !value.contains('@') {
        return Err(InvalidSpecError::InvalidEmail(value));
    }
    Ok(value)
}

fn require_url(field: &'static str, value: impl Into<String>) -> Result<String, InvalidSpecError> {
    let value = require_non_empty(field, value)?;
    if !value.starts_with("http://") && !value.starts_with("https://") {
        return Err(InvalidSpecError::InvalidUrl(value));
    }
    Ok(value)
}

fn require_datetime(value: impl Into<String>) -> Result<String, InvalidSpecError> {
    let value = require_non_empty("datetime", value)?;
    NaiveDateTime::parse_from_str(&value, DATETIME_FORMAT)
        .map_err(|_| InvalidSpecError::InvalidTimestamp(value.clone()))?;
    Ok(value)
}

fn require_positive_id(field: &'static str, value: i64) -> Result<i64, InvalidSpecError> {
    if value <= 0 {
        return Err(InvalidSpecError::NonPositiveId { field, value });
    }
    Ok(value)
}

fn spec_for(table: &schema::TableDef, values: Vec<SqlValue>) -> InsertSpec {
    InsertSpec::new(
        table.name,
        table.columns.iter().map(|c| (*c).to_string()).collect(),
        values,
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub description: String,
}

impl Category {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, InvalidSpecError> {
        Ok(Self {
            name: require_non_empty("name", name)?,
            description: require_non_empty("description", description)?,
        })
    }

    pub fn into_spec(self) -> InsertSpec {
        spec_for(
            &schema::CATEGORIES,
            vec![self.name.into(), self.description.into()],
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reporter {
    pub name: String,
    pub email: String,
}

impl Reporter {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, InvalidSpecError> {
        Ok(Self {
            name: require_non_empty("name", name)?,
            email: require_email("email", email)?,
        })
    }

    pub fn into_spec(self) -> InsertSpec {
        spec_for(&schema::REPORTERS, vec![self.name.into(), self.email.into()])
    }
}

/// Website and social-media fields are free-form text rather than validated
/// URLs; production rows store bare hostnames like `www.fb.com/palooo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Publisher {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub head_office_add: String,
    pub website: String,
    pub facebook: String,
    pub twitter: String,
    pub linkedin: String,
    pub instagram: String,
}

pub struct PublisherFields {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub head_office_add: String,
    pub website: String,
    pub facebook: String,
    pub twitter: String,
    pub linkedin: String,
    pub instagram: String,
}

impl Publisher {
    pub fn new(fields: PublisherFields) -> Result<Self, InvalidSpecError> {
        Ok(Self {
            name: require_non_empty("name", fields.name)?,
            email: require_email("email", fields.email)?,
            phone_number: require_non_empty("phone_number", fields.phone_number)?,
            head_office_add: require_non_empty("head_office_add", fields.head_office_add)?,
            website: require_non_empty("website", fields.website)?,
            facebook: fields.facebook,
            twitter: fields.twitter,
            linkedin: fields.linkedin,
            instagram: fields.instagram,
        })
    }

    pub fn into_spec(self) -> InsertSpec {
        spec_for(
            &schema::PUBLISHERS,
            vec![
                self.name.into(),
                self.email.into(),
                self.phone_number.into(),
                self.head_office_add.into(),
                self.website.into(),
                self.facebook.into(),
                self.twitter.into(),
                self.linkedin.into(),
                self.instagram.into(),
            ],
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsArticle {
    pub category_id: i64,
    pub reporter_id: i64,
    pub publisher_id: i64,
    pub datetime: String,
    pub title: String,
    pub body: String,
    pub link: String,
}

impl NewsArticle {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        category_id: i64,
        reporter_id: i64,
        publisher_id: i64,
        datetime: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
        link: impl Into<String>,
    ) -> Result<Self, InvalidSpecError> {
        Ok(Self {
            category_id: require_positive_id("category_id", category_id)?,
            reporter_id: require_positive_id("reporter_id", reporter_id)?,
            publisher_id: require_positive_id("publisher_id", publisher_id)?,
            datetime: require_datetime(datetime)?,
            title: require_non_empty("title", title)?,
            body: require_non_empty("body", body)?,
            link: require_url("link", link)?,
        })
    }

    pub fn into_spec(self) -> InsertSpec {
        spec_for(
            &schema::NEWS,
            vec![
                self.category_id.into(),
                self.reporter_id.into(),
                self.publisher_id.into(),
                self.datetime.into(),
                self.title.into(),
                self.body.into(),
                self.link.into(),
            ],
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsImage {
    pub news_id: i64,
    pub image_url: String,
}

impl NewsImage {
    pub fn new(news_id: i64, image_url: impl Into<String>) -> Result<Self, InvalidSpecError> {
        Ok(Self {
            news_id: require_positive_id("news_id", news_id)?,
            image_url: require_url("image_url", image_url)?,
        })
    }

    pub fn into_spec(self) -> InsertSpec {
        spec_for(
            &schema::IMAGES,
            vec![self.news_id.into(), self.image_url.into()],
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsSummary {
    pub news_id: i64,
    pub summary_text: String,
}

impl NewsSummary {
    pub fn new(news_id: i64, summary_text: impl Into<String>) -> Result<Self, InvalidSpecError> {
        Ok(Self {
            news_id: require_positive_id("news_id", news_id)?,
            summary_text: require_non_empty("summary_text", summary_text)?,
        })
    }

    pub fn into_spec(self) -> InsertSpec {
        spec_for(
            &schema::SUMMARIES,
            vec![self.news_id.into(), self.summary_text.into()],
        )
    }
}
