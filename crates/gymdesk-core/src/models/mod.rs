pub mod assessment;
pub mod client;
pub mod measurements;
