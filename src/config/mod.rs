pub mod settings;

pub use settings::{AppConfig, LoaderSettings, RatingSettings, ServerSettings};
