//! # Database Probe
//!
//! Opens a single PostgreSQL connection from `DB_*` environment values, runs
//! `SELECT 1` and closes the connection. No pool is involved: every probe pays
//! for its own connection so that the result reflects reachability right now.

use sqlx::postgres::{PgConnectOptions, PgSslMode};
use sqlx::{Connection, PgConnection};
use std::fmt;
use tracing::debug;

use crate::constants::{database_env, PROBE_QUERY};
use crate::environment::EnvironmentSource;
use crate::error::{ProbeError, ProbeResult};

const APPLICATION_NAME: &str = "probe-service";

/// Raw connection parameters as found in the environment
#[derive(Clone, Default, PartialEq, Eq)]
pub struct DatabaseParameters {
    pub host: Option<String>,
    pub port: Option<String>,
    pub name: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
}

impl fmt::Debug for DatabaseParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseParameters")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

impl DatabaseParameters {
    /// Read the five `DB_*` values. Empty values count as unset.
    pub fn from_environment(env: &dyn EnvironmentSource) -> Self {
        let read = |key: &str| env.var(key).filter(|value| !value.is_empty());

        Self {
            host: read(database_env::HOST),
            port: read(database_env::PORT),
            name: read(database_env::NAME),
            user: read(database_env::USER),
            password: read(database_env::PASSWORD),
        }
    }

    /// Build connect options; host, port, name and user are required
    ///
    /// sqlx pre-fills options from `PG*` process variables. Every field that
    /// can affect authentication is overwritten here so only `DB_*` values
    /// reach the connection.
    pub fn connect_options(&self) -> ProbeResult<PgConnectOptions> {
        let host = required(&self.host, database_env::HOST)?;
        let port = required(&self.port, database_env::PORT)?;
        let name = required(&self.name, database_env::NAME)?;
        let user = required(&self.user, database_env::USER)?;

        let port: u16 = port
            .trim()
            .parse()
            .map_err(|_| ProbeError::InvalidDatabasePort {
                value: port.to_string(),
            })?;

        let options = PgConnectOptions::new_without_pgpass()
            .host(host)
            .port(port)
            .database(name)
            .username(user)
            .password(self.password.as_deref().unwrap_or(""))
            .ssl_mode(PgSslMode::Prefer)
            .application_name(APPLICATION_NAME);

        Ok(options)
    }

    /// Connection URL with the password masked, for logging
    pub fn redacted_url(&self) -> String {
        let show = |value: &Option<String>| value.clone().unwrap_or_else(|| "<unset>".to_string());
        let password = if self.password.is_some() { ":***" } else { "" };

        format!(
            "postgresql://{}{}@{}:{}/{}",
            show(&self.user),
            password,
            show(&self.host),
            show(&self.port),
            show(&self.name)
        )
    }
}

fn required<'a>(value: &'a Option<String>, variable: &'static str) -> ProbeResult<&'a str> {
    value
        .as_deref()
        .ok_or(ProbeError::MissingDatabaseParameter { variable })
}

/// Connect, run the probe query, disconnect
///
/// The connection is closed whether or not the query succeeded. A query error
/// takes precedence over a close error when both occur.
pub async fn probe_database(params: &DatabaseParameters) -> ProbeResult<()> {
    let options = params.connect_options()?;

    debug!(url = %params.redacted_url(), "Opening probe connection");
    let mut conn = PgConnection::connect_with(&options).await?;

    let query_result = sqlx::query(PROBE_QUERY).execute(&mut conn).await;
    let close_result = conn.close().await;

    query_result?;
    close_result?;

    debug!(url = %params.redacted_url(), "Probe connection closed");
    Ok(())
}
