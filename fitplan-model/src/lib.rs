pub mod calculator;
pub mod plan;
pub mod profile;
pub mod templates;
