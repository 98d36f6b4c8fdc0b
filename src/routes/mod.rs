pub mod drafts;
pub mod health;
pub mod jobs;
pub mod misdeeds;
