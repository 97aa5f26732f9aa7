//! Database probe against a real PostgreSQL server.
//!
//! Reads `DB_HOST`, `DB_PORT`, `DB_NAME`, `DB_USER` and `DB_PASSWORD` from the
//! process environment. Run with `cargo test -- --ignored` once they point at a
//! reachable server.

use probe_service::environment::ProcessEnvironment;
use probe_service::probes::{probe_database, DatabaseParameters};

#[tokio::test]
#[ignore = "requires a reachable PostgreSQL configured through DB_* variables"]
async fn test_probe_connects_to_configured_database() {
    let params = DatabaseParameters::from_environment(&ProcessEnvironment);

    probe_database(&params)
        .await
        .expect("probe should connect with the configured credentials");

    // Probing twice gives the same answer; nothing was written
    probe_database(&params)
        .await
        .expect("second probe should also connect");
}
