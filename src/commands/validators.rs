//! Command argument validation utilities
//!
//! This module provides validation logic for command arguments after clap
//! parsing and after configured defaults have been applied.

use anyhow::{Result, anyhow};

/// Validation errors for command arguments
#[derive(Debug, PartialEq)]
pub enum CommandValidationError {
    /// Required argument was not provided
    MissingRequired {
        argument: String,
        alternatives: Vec<String>,
    },
    /// Invalid argument value
    InvalidValue {
        argument: String,
        value: String,
        reason: String,
    },
}

impl std::fmt::Display for CommandValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandValidationError::MissingRequired {
                argument,
                alternatives,
            } => {
                if alternatives.is_empty() {
                    write!(f, "{} is required", argument)
                } else {
                    write!(
                        f,
                        "Either {} or {} must be provided",
                        alternatives.join(", "),
                        argument
                    )
                }
            }
            CommandValidationError::InvalidValue {
                argument,
                value,
                reason,
            } => {
                write!(f, "Invalid value '{}' for {}: {}", value, argument, reason)
            }
        }
    }
}

impl std::error::Error for CommandValidationError {}

/// Convert validation error to anyhow::Error
pub fn validation_error_to_anyhow(error: CommandValidationError) -> anyhow::Error {
    anyhow!(error.to_string())
}

/// Ensure at least one repository URL is available, from arguments or configuration
pub fn validate_repository_urls(urls: &[String]) -> Result<()> {
    if urls.is_empty() {
        return Err(validation_error_to_anyhow(
            CommandValidationError::MissingRequired {
                argument: "a repository URL".to_string(),
                alternatives: vec!["`repositories` in the config file".to_string()],
            },
        ));
    }

    for url in urls {
        if url.trim().is_empty() {
            return Err(validation_error_to_anyhow(
                CommandValidationError::InvalidValue {
                    argument: "repository URL".to_string(),
                    value: url.clone(),
                    reason: "repository URL cannot be empty or whitespace only".to_string(),
                },
            ));
        }
    }

    Ok(())
}

/// Ensure an organization is available, from arguments or configuration
pub fn validate_organization(organization: Option<String>) -> Result<String> {
    match organization {
        Some(org) if !org.trim().is_empty() => Ok(org),
        Some(org) => Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: "organization".to_string(),
                value: org,
                reason: "organization cannot be empty or whitespace only".to_string(),
            },
        )),
        None => Err(validation_error_to_anyhow(
            CommandValidationError::MissingRequired {
                argument: "an organization".to_string(),
                alternatives: vec!["`organization` in the config file".to_string()],
            },
        )),
    }
}

/// Weekly histograms need at least one week
pub fn validate_weeks(weeks: usize) -> Result<()> {
    if weeks == 0 {
        return Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: "weeks".to_string(),
                value: weeks.to_string(),
                reason: "at least one week is required".to_string(),
            },
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_repository_urls_empty_list() {
        let err = validate_repository_urls(&[]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Either `repositories` in the config file or a repository URL must be provided"
        );
    }

    #[test]
    fn test_validate_repository_urls_blank_entry() {
        let err = validate_repository_urls(&["  ".to_string()]).unwrap_err();
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_validate_repository_urls_ok() {
        assert!(validate_repository_urls(&["https://github.com/o/r".to_string()]).is_ok());
    }

    #[test]
    fn test_validate_organization() {
        assert_eq!(
            validate_organization(Some("octo".to_string())).unwrap(),
            "octo"
        );
        assert!(validate_organization(Some(" ".to_string())).is_err());
        assert!(validate_organization(None).is_err());
    }

    #[test]
    fn test_validate_weeks() {
        assert!(validate_weeks(1).is_ok());
        assert!(validate_weeks(0).is_err());
    }
}
