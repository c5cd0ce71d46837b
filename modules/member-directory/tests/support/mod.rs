//! Shared SQLite test support: connection, schema and seed data.

use member_directory::MemberTeamRow;
use member_directory::infra::storage::entity::{member, team};
use member_directory::infra::storage::options::{self, StorageOptions};
use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait, Set};

/// In-memory SQLite store. Pool size 1: every pooled connection of an
/// in-memory SQLite DSN would otherwise see its own empty database.
pub async fn connect_sqlite() -> DatabaseConnection {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
    options::connect(&StorageOptions::new("sqlite::memory:").with_max_conns(1))
        .await
        .unwrap()
}

pub async fn setup_db() -> DatabaseConnection {
    let conn = connect_sqlite().await;
    conn.execute_unprepared(
        "CREATE TABLE team (
id INTEGER PRIMARY KEY NOT NULL,
name TEXT NOT NULL
)",
    )
    .await
    .unwrap();
    conn.execute_unprepared(
        "CREATE TABLE member (
id INTEGER PRIMARY KEY NOT NULL,
username TEXT NOT NULL,
age INTEGER NOT NULL,
team_id INTEGER NULL REFERENCES team (id)
)",
    )
    .await
    .unwrap();
    conn
}

pub async fn seed_member(
    conn: &DatabaseConnection,
    id: i64,
    username: &str,
    age: i32,
    team_id: Option<i64>,
) {
    member::Entity::insert(member::ActiveModel {
        id: Set(id),
        username: Set(username.to_owned()),
        age: Set(age),
        team_id: Set(team_id),
    })
    .exec(conn)
    .await
    .unwrap();
}

/// The standard fixture: teamA(member1 10, member2 20), teamB(member3 30,
/// member4 40).
pub async fn seed_default(conn: &DatabaseConnection) {
    for (id, name) in [(1_i64, "teamA"), (2, "teamB")] {
        team::Entity::insert(team::ActiveModel {
            id: Set(id),
            name: Set(name.to_owned()),
        })
        .exec(conn)
        .await
        .unwrap();
    }
    seed_member(conn, 1, "member1", 10, Some(1)).await;
    seed_member(conn, 2, "member2", 20, Some(1)).await;
    seed_member(conn, 3, "member3", 30, Some(2)).await;
    seed_member(conn, 4, "member4", 40, Some(2)).await;
}

pub fn usernames(rows: &[MemberTeamRow]) -> Vec<&str> {
    rows.iter().map(|r| r.username.as_str()).collect()
}
