pub mod models;
pub mod options;
pub mod questionnaire;
pub mod symptoms;
pub mod tips;
