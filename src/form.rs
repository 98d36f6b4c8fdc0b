//! Posting-form validation. Input arrives as raw strings, exactly as a form
//! submits them; every rule produces at most one message per field and a
//! failing form is never partially submitted.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::dto::job_dto::CreateJobPayload;
use crate::models::job::{Category, JobPosting, Pay, PayType};

/// Field name to human-readable message, one entry per failing field.
pub type FormErrors = BTreeMap<&'static str, String>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobForm {
    pub title: String,
    pub category: String,
    pub location: String,
    pub pay_amount: String,
    pub pay_type: String,
    pub description: String,
    pub contact_method: String,
    pub username: String,
    /// Optional employment type; feeds the tags default on local drafts.
    pub job_type: Option<String>,
}

/// A form that passed every rule, with typed pay and category.
#[derive(Debug, Clone)]
pub struct ValidatedJob {
    pub title: String,
    pub category: Category,
    pub location: String,
    pub pay_amount: Decimal,
    pub pay_type: PayType,
    pub description: String,
    pub contact_method: String,
    pub username: String,
    pub job_type: Option<String>,
}

impl JobForm {
    /// Runs all field rules; returns the typed form or one message per
    /// failing field.
    pub fn validate(&self) -> Result<ValidatedJob, FormErrors> {
        let mut errors = FormErrors::new();

        let title = self.title.trim();
        if title.is_empty() {
            errors.insert("title", "Job title is required".into());
        } else if title.chars().count() > 100 {
            errors.insert("title", "Job title must be 100 characters or less".into());
        }

        let category = Category::parse(self.category.trim());
        if category.is_none() {
            errors.insert("category", "Please select a category".into());
        }

        let location = self.location.trim();
        if location.is_empty() {
            errors.insert("location", "Location is required".into());
        }

        let pay_amount = self.pay_amount.trim();
        let mut amount = None;
        if pay_amount.is_empty() {
            errors.insert("pay_amount", "Pay amount is required".into());
        } else {
            match Decimal::from_str(pay_amount) {
                Ok(parsed) if parsed >= Decimal::ZERO => amount = Some(parsed),
                _ => {
                    errors.insert("pay_amount", "Please enter a valid pay amount".into());
                }
            }
        }

        let pay_type = PayType::parse(self.pay_type.trim());
        if pay_type.is_none() {
            errors.insert("pay_type", "Please select a pay type".into());
        }

        let description = self.description.trim();
        if description.is_empty() {
            errors.insert("description", "Job description is required".into());
        } else if description.chars().count() < 50 {
            errors.insert(
                "description",
                "Description should be at least 50 characters".into(),
            );
        }

        let contact_method = self.contact_method.trim();
        if contact_method.is_empty() {
            errors.insert("contact_method", "Contact method is required".into());
        }

        let username = self.username.trim();
        if username.is_empty() {
            errors.insert("username", "Username is required".into());
        }

        match (category, amount, pay_type) {
            (Some(category), Some(pay_amount), Some(pay_type)) if errors.is_empty() => {
                Ok(ValidatedJob {
                    title: title.to_string(),
                    category,
                    location: location.to_string(),
                    pay_amount,
                    pay_type,
                    description: description.to_string(),
                    contact_method: contact_method.to_string(),
                    username: username.to_string(),
                    job_type: self
                        .job_type
                        .as_deref()
                        .map(str::trim)
                        .filter(|t| !t.is_empty())
                        .map(str::to_string),
                })
            }
            _ => Err(errors),
        }
    }
}

impl ValidatedJob {
    /// The structured record the proxy forwards to the backend.
    pub fn into_payload(self) -> CreateJobPayload {
        CreateJobPayload {
            title: self.title,
            description: self.description,
            category: self.category,
            location: self.location,
            pay_amount: self.pay_amount,
            pay_type: self.pay_type,
            contact_method: self.contact_method,
            username: self.username,
        }
    }

    /// A locally stored posting: timestamp-derived id, tags defaulted from
    /// the employment type.
    pub fn into_draft(self, created_at: DateTime<Utc>) -> JobPosting {
        let tags = vec![self.job_type.unwrap_or_else(|| "Full-time".to_string())];
        JobPosting {
            id: created_at.timestamp_millis(),
            title: self.title,
            company: self.username,
            location: self.location,
            description: self.description,
            pay: Pay::Rate {
                pay_amount: self.pay_amount,
                pay_type: self.pay_type,
            },
            category: Some(self.category),
            tags,
            contact_method: Some(self.contact_method),
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> JobForm {
        JobForm {
            title: "Need a Fake Date for a Wedding".into(),
            category: "Events & Gigs".into(),
            location: "Downtown Portland, OR".into(),
            pay_amount: "150.00".into(),
            pay_type: "Flat Rate".into(),
            description:
                "Pretend to be my plus-one for an evening wedding, light small talk required."
                    .into(),
            contact_method: "Message me on the platform".into(),
            username: "totally_real_date".into(),
            job_type: None,
        }
    }

    #[test]
    fn a_fully_filled_form_passes() {
        let validated = filled_form().validate().expect("valid form");
        assert_eq!(validated.category, Category::EventsAndGigs);
        assert_eq!(validated.pay_type, PayType::FlatRate);
    }

    #[test]
    fn every_empty_field_gets_its_own_message() {
        let errors = JobForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 8);
        assert_eq!(errors["title"], "Job title is required");
        assert_eq!(errors["category"], "Please select a category");
        assert_eq!(errors["pay_amount"], "Pay amount is required");
        assert_eq!(errors["username"], "Username is required");
    }

    #[test]
    fn description_length_boundary_is_fifty_characters() {
        let mut form = filled_form();
        form.description = "x".repeat(49);
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors["description"],
            "Description should be at least 50 characters"
        );

        form.description = "x".repeat(50);
        assert!(form.validate().is_ok());
    }

    #[test]
    fn title_length_boundary_is_one_hundred_characters() {
        let mut form = filled_form();
        form.title = "t".repeat(101);
        let errors = form.validate().unwrap_err();
        assert_eq!(errors["title"], "Job title must be 100 characters or less");

        form.title = "t".repeat(100);
        assert!(form.validate().is_ok());
    }

    #[test]
    fn negative_pay_is_rejected_and_zero_is_accepted() {
        let mut form = filled_form();
        form.pay_amount = "-5".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors["pay_amount"], "Please enter a valid pay amount");

        form.pay_amount = "0".into();
        assert!(form.validate().is_ok());

        form.pay_amount = "lots".into();
        assert!(form.validate().is_err());
    }

    #[test]
    fn unknown_category_or_pay_type_is_rejected() {
        let mut form = filled_form();
        form.category = "Finance".into();
        form.pay_type = "Stock options".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors["category"], "Please select a category");
        assert_eq!(errors["pay_type"], "Please select a pay type");
    }

    #[test]
    fn draft_conversion_defaults_tags_and_derives_id_from_timestamp() {
        let now = Utc::now();
        let draft = filled_form().validate().unwrap().into_draft(now);
        assert_eq!(draft.id, now.timestamp_millis());
        assert_eq!(draft.tags, vec!["Full-time".to_string()]);
        assert_eq!(draft.company, "totally_real_date");
        assert_eq!(draft.created_at, now);

        let mut form = filled_form();
        form.job_type = Some("Contract".into());
        let draft = form.validate().unwrap().into_draft(now);
        assert_eq!(draft.tags, vec!["Contract".to_string()]);
    }
}
