use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fixed set of posting categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Events & Gigs")]
    EventsAndGigs,
    #[serde(rename = "Creative & Design")]
    CreativeAndDesign,
    #[serde(rename = "Home & Labor")]
    HomeAndLabor,
    #[serde(rename = "Tech & Digital")]
    TechAndDigital,
    #[serde(rename = "Quirky & Miscellaneous")]
    QuirkyAndMiscellaneous,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::EventsAndGigs,
        Category::CreativeAndDesign,
        Category::HomeAndLabor,
        Category::TechAndDigital,
        Category::QuirkyAndMiscellaneous,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::EventsAndGigs => "Events & Gigs",
            Category::CreativeAndDesign => "Creative & Design",
            Category::HomeAndLabor => "Home & Labor",
            Category::TechAndDigital => "Tech & Digital",
            Category::QuirkyAndMiscellaneous => "Quirky & Miscellaneous",
        }
    }

    pub fn parse(value: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.as_str() == value)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayType {
    #[serde(rename = "Flat Rate")]
    FlatRate,
    #[serde(rename = "Hourly")]
    Hourly,
    #[serde(rename = "Per Item")]
    PerItem,
    #[serde(rename = "Negotiable")]
    Negotiable,
}

impl PayType {
    pub const ALL: [PayType; 4] = [
        PayType::FlatRate,
        PayType::Hourly,
        PayType::PerItem,
        PayType::Negotiable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PayType::FlatRate => "Flat Rate",
            PayType::Hourly => "Hourly",
            PayType::PerItem => "Per Item",
            PayType::Negotiable => "Negotiable",
        }
    }

    pub fn parse(value: &str) -> Option<PayType> {
        PayType::ALL.iter().copied().find(|p| p.as_str() == value)
    }
}

impl std::fmt::Display for PayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compensation comes in two shapes: a structured amount + type from the
/// posting form, or a free-text salary line on the built-in samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Pay {
    Rate {
        pay_amount: Decimal,
        pay_type: PayType,
    },
    Text {
        salary: String,
    },
}

/// A job posting, either user-submitted (draft store) or built-in sample.
/// Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: i64,
    pub title: String,
    /// Company name for samples, the poster's username for drafts.
    pub company: String,
    #[serde(default = "default_location")]
    pub location: String,
    pub description: String,
    #[serde(flatten)]
    pub pay: Pay,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_method: Option<String>,
    pub created_at: DateTime<Utc>,
}

fn default_location() -> String {
    "Remote".to_string()
}
