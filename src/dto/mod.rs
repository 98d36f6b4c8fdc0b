pub mod job_dto;
pub mod misdeed_dto;
