use anyhow::{Context, Result};
use log::debug;
use std::io::Write;

use crate::app_config::{Config, OutputFormat};
use crate::output::{self, VersionInfo};
use crate::query::{Operation, QueryResult};
use crate::session::SessionManager;

// @module: Application controller for lookups

/// Outcome of a lookup, as reported through the exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStatus {
    Found,
    NotFound,
}

/// Main application controller for database lookups
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Database handles per session
    sessions: SessionManager,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;

        let sessions = SessionManager::new(
            Some(config.database_path.clone()),
            config.required_version(),
        );

        Ok(Self { config, sessions })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }

    /// Run one lookup in its own session
    pub async fn lookup(
        &self,
        operation: Operation,
        query: &str,
        param: Option<&str>,
    ) -> Result<QueryResult> {
        let session = self.sessions.session();
        debug!("Running {} in session {}", operation, session.id());

        let result = session
            .run_query_async(operation, query.to_string(), param.map(str::to_string))
            .await?;

        Ok(result)
    }

    /// Run one lookup and print its result
    ///
    /// An empty result is reported on `err`, independent of the log level.
    pub async fn run<W: Write, E: Write>(
        &self,
        out: &mut W,
        err: &mut E,
        operation: Operation,
        query: &str,
        param: Option<&str>,
    ) -> Result<LookupStatus> {
        let result = self.lookup(operation, query, param).await?;

        match self.config.output {
            OutputFormat::Json => writeln!(out, "{}", output::result_to_json(&result))?,
            OutputFormat::Text => output::write_result(out, &result)?,
        }

        if result.is_empty() {
            debug!("{} '{}' found nothing", operation, query);
            writeln!(err, "{}", output::NO_RESULTS)?;
            Ok(LookupStatus::NotFound)
        } else {
            Ok(LookupStatus::Found)
        }
    }

    /// Print application and database version information
    pub fn print_version<W: Write>(&self, out: &mut W) -> Result<()> {
        let info = VersionInfo::new(self.sessions.database_info());

        match self.config.output {
            OutputFormat::Json => writeln!(out, "{}", output::version_to_json(&info))?,
            OutputFormat::Text => output::write_version(out, &info)?,
        }

        Ok(())
    }
}
