pub mod navigation;
pub mod portfolio;
pub mod settings;
pub mod underwriting;
