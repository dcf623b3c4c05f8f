pub mod abbreviations;
pub mod defaults;
pub mod settings;

pub use abbreviations::{AbbrEntry, AbbreviationTable, DEFAULT_ABBREVIATIONS_PATH};
pub use settings::Settings;
