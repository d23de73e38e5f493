//! Advisor backends.
//!
//! The pipeline talks to an [`AdvisorBackend`] capability; the production
//! implementation shells out to an external tuning tool, and tests supply
//! a fake.

use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::process::Command;

use fleetmeta_common::MetaError;

/// Connection target for the online analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dsn {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: i32,
    pub db_name: String,
}

impl Display for Dsn {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.db_name
        )
    }
}

/// Outcome of one advisory run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advice {
    /// Structured advice document, stored verbatim.
    pub payload: String,
    /// Optional diagnostics emitted alongside the advice.
    pub message: Option<String>,
}

#[async_trait]
pub trait AdvisorBackend: Send + Sync {
    async fn advise(&self, dsn: &Dsn, sql: &str) -> Result<Advice, MetaError>;
}

/// Backend invoking an external command-line analyzer.
///
/// The tool is called with its config-file path, the online DSN and the SQL
/// text; stdout must be a structured (JSON) advice document. Non-zero exit
/// or malformed output is an Advisor error.
pub struct CommandBackend {
    command: PathBuf,
    config_file: PathBuf,
}

impl CommandBackend {
    pub fn new(command: impl Into<PathBuf>, config_file: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
            config_file: config_file.into(),
        }
    }
}

#[async_trait]
impl AdvisorBackend for CommandBackend {
    async fn advise(&self, dsn: &Dsn, sql: &str) -> Result<Advice, MetaError> {
        let output = Command::new(&self.command)
            .arg("-config")
            .arg(&self.config_file)
            .arg("-online-dsn")
            .arg(dsn.to_string())
            .arg("-query")
            .arg(sql)
            .output()
            .await
            .map_err(|err| {
                MetaError::Advisor(format!(
                    "failed to invoke '{}': {err}",
                    self.command.display()
                ))
            })?;

        if !output.status.success() {
            return Err(MetaError::Advisor(format!(
                "advisor exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let payload = String::from_utf8_lossy(&output.stdout).trim().to_string();
        serde_json::from_str::<serde_json::Value>(&payload)
            .map_err(|err| MetaError::Advisor(format!("unparsable advisor output: {err}")))?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let message = if stderr.is_empty() { None } else { Some(stderr) };

        Ok(Advice { payload, message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dsn_display() {
        let dsn = Dsn {
            user: "tuner".to_string(),
            password: "secret".to_string(),
            host: "10.0.0.5".to_string(),
            port: 3306,
            db_name: "orders".to_string(),
        };
        assert_eq!(dsn.to_string(), "tuner:secret@10.0.0.5:3306/orders");
    }
}
