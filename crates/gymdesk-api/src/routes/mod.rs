pub mod assessments;
pub mod estimate;
pub mod health;
