pub mod job;
pub mod misdeed;
