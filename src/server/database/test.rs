use super::*;
use test_utils::{context::IN_MEMORY_DATABASE_URL, net};

/// Tests connecting to a reachable database.
///
/// Verifies that connect returns a usable handle and that the client records the
/// open connection.
///
/// Expected: Ok with a handle that answers ping
#[tokio::test]
async fn connects_to_reachable_database() -> Result<(), DatabaseError> {
    let database = SeaOrmDatabase::new(IN_MEMORY_DATABASE_URL, Duration::from_secs(5));

    let db = database.connect().await?;

    assert!(db.ping().await.is_ok());
    assert!(database.is_connected().await);

    Ok(())
}

/// Tests that a second connect reuses the held connection.
///
/// Expected: Ok twice, one connection held
#[tokio::test]
async fn connect_is_reentrant() -> Result<(), DatabaseError> {
    let database = SeaOrmDatabase::new(IN_MEMORY_DATABASE_URL, Duration::from_secs(5));

    database.connect().await?;
    database.connect().await?;

    assert!(database.is_connected().await);

    Ok(())
}

/// Tests connecting to an endpoint where nothing is listening.
///
/// Expected: Err(DatabaseError::Connect) and no connection held
#[tokio::test]
async fn unreachable_database_fails_to_connect() {
    let url = net::unreachable_postgres_url().unwrap();
    let database = SeaOrmDatabase::new(&url, Duration::from_secs(2));

    let result = database.connect().await;

    assert!(matches!(result, Err(DatabaseError::Connect(_))));
    assert!(!database.is_connected().await);
}

/// Tests connecting with a connection string no driver understands.
///
/// Expected: Err(DatabaseError::Connect)
#[tokio::test]
async fn unsupported_scheme_fails_to_connect() {
    let database = SeaOrmDatabase::new("unknown://localhost/db", Duration::from_secs(2));

    let result = database.connect().await;

    assert!(matches!(result, Err(DatabaseError::Connect(_))));
}

/// Tests disconnecting a client that never connected.
///
/// Expected: Ok, no-op
#[tokio::test]
async fn disconnect_without_connect_is_noop() -> Result<(), DatabaseError> {
    let database = SeaOrmDatabase::new(IN_MEMORY_DATABASE_URL, Duration::from_secs(5));

    database.disconnect().await?;

    assert!(!database.is_connected().await);

    Ok(())
}

/// Tests disconnecting twice after a successful connect.
///
/// Verifies that the first call releases the connection and the second finds
/// nothing to release.
///
/// Expected: Ok for both calls
#[tokio::test]
async fn double_disconnect_is_tolerated() -> Result<(), DatabaseError> {
    let database = SeaOrmDatabase::new(IN_MEMORY_DATABASE_URL, Duration::from_secs(5));
    database.connect().await?;

    database.disconnect().await?;
    assert!(!database.is_connected().await);

    database.disconnect().await?;
    assert!(!database.is_connected().await);

    Ok(())
}

/// Tests disconnecting after a failed connect attempt.
///
/// Expected: Ok, no-op
#[tokio::test]
async fn disconnect_after_failed_connect_is_noop() -> Result<(), DatabaseError> {
    let database = SeaOrmDatabase::new("unknown://localhost/db", Duration::from_secs(2));
    assert!(database.connect().await.is_err());

    database.disconnect().await?;

    Ok(())
}
