//! Shared error type and exit-code mapping for command handlers.

/// CLI-level error type to distinguish validation from operational failures.
#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn validation_errors_map_to_exit_code_two() {
        let err = CliError::validation("bad flag");
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.display_message(), "bad flag");
    }

    #[test]
    fn failures_map_to_exit_code_three_and_render_the_chain() {
        let err = CliError::failure(anyhow!("boom").context("outer"));
        assert_eq!(err.exit_code(), 3);
        assert!(err.display_message().contains("outer"));
        assert!(err.display_message().contains("boom"));
    }
}
