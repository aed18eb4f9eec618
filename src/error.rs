use crate::auth::AuthError;
use crate::graph::GraphError;
use crate::import::{CsvError, ImportError};
use config::ConfigError;
use thiserror::Error;

pub mod exit_codes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const AUTH_ERROR: u8 = 2;
    pub const API_ERROR: u8 = 3;
    pub const INVALID_INPUT: u8 = 4;
    pub const IMPORT_INCOMPLETE: u8 = 5;
    pub const INTERRUPTED: u8 = 130;
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("authentication failed: {0}")]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error("invalid device file: {0}")]
    Csv(#[from] CsvError),
    #[error(transparent)]
    Import(#[from] ImportError),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Config(_) | CliError::Csv(_) | CliError::InvalidArgument(_) => exit_codes::INVALID_INPUT,
            CliError::Auth(AuthError::MissingSetting(_)) => exit_codes::INVALID_INPUT,
            CliError::Auth(_) => exit_codes::AUTH_ERROR,
            CliError::Graph(GraphError::SessionExpired) => exit_codes::AUTH_ERROR,
            CliError::Graph(_) | CliError::Import(ImportError::Graph(_)) => exit_codes::API_ERROR,
            CliError::Import(ImportError::TimedOut { .. } | ImportError::Cancelled) => exit_codes::IMPORT_INCOMPLETE,
            CliError::Json(_) | CliError::Io(_) => exit_codes::GENERAL_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::time::Duration;

    #[rstest]
    #[case::missing_tenant(CliError::Auth(AuthError::MissingSetting("tenant id")), exit_codes::INVALID_INPUT)]
    #[case::rejected(CliError::Auth(AuthError::DeviceCodeExpired), exit_codes::AUTH_ERROR)]
    #[case::expired_session(CliError::Graph(GraphError::SessionExpired), exit_codes::AUTH_ERROR)]
    #[case::not_found(CliError::Graph(GraphError::NotFound("organization".to_string())), exit_codes::API_ERROR)]
    #[case::empty_file(CliError::Csv(CsvError::Empty), exit_codes::INVALID_INPUT)]
    #[case::timed_out(CliError::Import(ImportError::TimedOut { timeout: Duration::from_secs(1) }), exit_codes::IMPORT_INCOMPLETE)]
    #[case::cancelled(CliError::Import(ImportError::Cancelled), exit_codes::IMPORT_INCOMPLETE)]
    #[case::bad_argument(CliError::InvalidArgument("nothing to update".to_string()), exit_codes::INVALID_INPUT)]
    fn errors_map_to_exit_codes(#[case] error: CliError, #[case] expected: u8) {
        assert_eq!(error.exit_code(), expected);
    }
}
