use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnilistError {
    #[error("{constraints}")]
    InvalidFormat { constraints: &'static str },

    #[error("Invalid index '{0}': index must be a positive integer")]
    InvalidIndex(String),

    #[error("The anime index {index} is invalid: {}", describe_range(.size))]
    IndexOutOfRange { index: usize, size: usize },

    #[error("At least one field to edit must be provided")]
    EmptyEdit,

    #[error("Anime not found in list: {0}")]
    AnimeNotFound(String),

    #[error("This anime already exists in the list: {0}")]
    DuplicateAnime(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

fn describe_range(size: &usize) -> String {
    match *size {
        0 => "no anime is currently displayed".to_string(),
        1 => "only index 1 is currently displayed".to_string(),
        n => format!("displayed indexes are 1 to {}", n),
    }
}

pub type Result<T> = std::result::Result<T, AnilistError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_out_of_range_names_displayed_range() {
        let err = AnilistError::IndexOutOfRange { index: 4, size: 3 };
        assert_eq!(
            err.to_string(),
            "The anime index 4 is invalid: displayed indexes are 1 to 3"
        );

        let err = AnilistError::IndexOutOfRange { index: 1, size: 0 };
        assert!(err.to_string().contains("no anime is currently displayed"));
    }

    #[test]
    fn invalid_format_is_the_constraint_verbatim() {
        let err = AnilistError::InvalidFormat {
            constraints: "Names should not be blank",
        };
        assert_eq!(err.to_string(), "Names should not be blank");
    }
}
