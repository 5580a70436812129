use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid Google Analytics measurement id: {0}")]
    InvalidMeasurementId(String),

    #[error("Invalid URL for {field}: {value}")]
    InvalidUrl { field: String, value: String },
}

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Missing frontmatter block")]
    MissingFrontmatter,

    #[error("Unterminated frontmatter block")]
    UnterminatedFrontmatter,

    #[error("Invalid frontmatter: {0}")]
    InvalidFrontmatter(#[from] serde_yaml::Error),

    #[error("Unknown collection: {0}")]
    UnknownCollection(String),
}
