pub mod backend_client;
pub mod draft_store;
pub mod samples;
