use chrono::{DateTime, Utc};

use crate::models::job::{Category, JobPosting, Pay};

fn sample(
    id: i64,
    title: &str,
    company: &str,
    location: &str,
    salary: &str,
    category: Category,
    tags: &[&str],
    description: &str,
) -> JobPosting {
    // Fixed timestamps keep sample ids and ordering stable across runs.
    let created_at = DateTime::<Utc>::from_timestamp(1_746_000_000 + id * 86_400, 0)
        .unwrap_or_default();
    JobPosting {
        id,
        title: title.into(),
        company: company.into(),
        location: location.into(),
        description: description.into(),
        pay: Pay::Text {
            salary: salary.into(),
        },
        category: Some(category),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        contact_method: None,
        created_at,
    }
}

/// Built-in postings shown under any user drafts on the browse page.
pub fn sample_postings() -> Vec<JobPosting> {
    vec![
        sample(
            1,
            "Professional Wedding Seat Filler",
            "EventCrowd Co",
            "Remote in Hayward, CA",
            "From $40 an hour",
            Category::EventsAndGigs,
            &["Contract", "Flexible schedule"],
            "Occupy empty seats at wedding ceremonies so the venue photographs \
             well. Formal attire provided, mild clapping expected.",
        ),
        sample(
            2,
            "Custom Pet Portrait Painter",
            "brushes_4_paws",
            "Remote in Santa Clara, CA",
            "From $40 an hour",
            Category::CreativeAndDesign,
            &["Contract", "Flexible schedule"],
            "Paint renaissance-style portraits of clients' pets in costume. \
             Must be comfortable with unusually specific reference photos.",
        ),
        sample(
            3,
            "IKEA Furniture Whisperer",
            "FlatPack Rescue",
            "Remote in Palo Alto, CA",
            "From $40 an hour",
            Category::HomeAndLabor,
            &["Contract", "Flexible schedule"],
            "Assemble furniture other people gave up on. Bring your own hex \
             keys and an unreasonable amount of patience.",
        ),
    ]
}

/// User drafts first, built-in samples after, in that order.
pub fn combined_listing(drafts: Vec<JobPosting>) -> Vec<JobPosting> {
    let mut items = drafts;
    items.extend(sample_postings());
    items
}
