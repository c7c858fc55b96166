use sqlbook_dispatch::{InterfaceError, Queries};
use sqlbook_parser::segment;
use sqlbook_pg::{PgConnection, PgParam};

#[tokio::test]
async fn detached_connection_fails_with_interface_error() {
    let queries = Queries::from(segment(
        "-- name: by_id\nSELECT * FROM example WHERE id = $1;",
    ));
    let conn = PgConnection::detached();

    let result = queries
        .get("by_id")
        .unwrap()
        .call(&conn, vec![PgParam::Int(1)]);

    match result {
        Err(InterfaceError::MissingQueryCapability { query }) => assert_eq!(query, "by_id"),
        Ok(_) => panic!("detached connection must not issue queries"),
    }
}

#[tokio::test]
async fn closed_connection_loses_capability() {
    let mut conn = PgConnection::detached();
    conn.close().await;

    let queries = Queries::from(segment("SELECT 1;"));
    let err = queries
        .call("default", &conn, Vec::<PgParam>::new())
        .unwrap()
        .err();
    assert!(err.is_some());
}

#[tokio::test]
async fn runs_against_live_database_when_configured() {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        return;
    };

    let mut conn = PgConnection::connect(&database_url).await.unwrap();
    let queries = Queries::from(segment(
        "-- name: add\nSELECT $1::bigint + $2::bigint AS total;",
    ));

    let rows = queries
        .call("add", &conn, vec![PgParam::Int(2), PgParam::Int(40)])
        .unwrap()
        .unwrap()
        .await
        .unwrap();

    use sqlx::Row;
    let total: i64 = rows[0].get("total");
    assert_eq!(total, 42);

    conn.close().await;
}
