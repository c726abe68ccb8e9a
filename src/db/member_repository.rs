use crate::db::models::{MemberRow, NewMemberRow};
use crate::db::Database;
use crate::errors::StoreError;
use crate::store::{Member, MemberStore};
use async_trait::async_trait;
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::BigInt;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations};
use tracing::debug;

/// Schema of the members database
pub const MEMBER_MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations/members");

/// Repository for member records in the SQLite database
pub struct MemberRepository<'a> {
    /// Database connection
    pub conn: &'a mut SqliteConnection,
}

impl<'a> MemberRepository<'a> {
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        MemberRepository { conn }
    }

    /// Loads every member ordered by id
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn list_members(&mut self) -> Result<Vec<Member>, StoreError> {
        use crate::schema::members::dsl::*;

        let rows = members
            .order(id.asc())
            .select(MemberRow::as_select())
            .load::<MemberRow>(self.conn)?;

        Ok(rows.into_iter().map(Member::from).collect())
    }

    /// Inserts a member and returns the rowid SQLite assigned to it
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn insert_member(&mut self, member: &Member) -> Result<i64, StoreError> {
        use crate::schema::members;

        diesel::insert_into(members::table)
            .values(NewMemberRow { name: &member.name })
            .execute(self.conn)?;

        let row_id: i64 = diesel::select(sql::<BigInt>("last_insert_rowid()")).get_result(self.conn)?;
        Ok(row_id)
    }
}

/// Member store backed by its own SQLite database
#[derive(Clone, Debug)]
pub struct SqliteMemberStore {
    database: Database,
}

impl SqliteMemberStore {
    /// Wraps `database`, creating the members table if needed
    pub fn open(database: Database) -> Result<Self, StoreError> {
        database.migrate(MEMBER_MIGRATIONS)?;
        Ok(SqliteMemberStore { database })
    }
}

#[async_trait]
impl MemberStore for SqliteMemberStore {
    async fn list_members(&self) -> Result<Vec<Member>, StoreError> {
        self.database
            .run(|conn| MemberRepository::new(conn).list_members())
            .await
    }

    async fn add_member(&self, member: &Member) -> Result<i64, StoreError> {
        let member = member.clone();
        let id = self
            .database
            .run(move |conn| MemberRepository::new(conn).insert_member(&member))
            .await?;
        debug!("Inserted member {}", id);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn store() -> SqliteMemberStore {
        SqliteMemberStore::open(Database::in_memory().unwrap()).unwrap()
    }

    #[tokio::test]
    async fn lists_inserted_members_with_generated_ids() {
        let store = store();
        let alice = store.add_member(&Member::new("Alice")).await.unwrap();
        let bob = store.add_member(&Member::new("Bob")).await.unwrap();
        assert!(bob > alice);

        let members = store.list_members().await.unwrap();
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].id, Some(alice));
        assert_eq!(members[0].name, "Alice");
        assert_eq!(members[1].id, Some(bob));
        assert_eq!(members[1].name, "Bob");
    }

    #[tokio::test]
    async fn fresh_database_has_no_members() {
        assert!(store().list_members().await.unwrap().is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn concurrent_adds_on_a_file_database_all_succeed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("members.db");
        let database = Database::new(path.to_str().unwrap(), 4).unwrap();
        let store = Arc::new(SqliteMemberStore::open(database).unwrap());

        let tasks: Vec<_> = (0..200)
            .map(|n| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.add_member(&Member::new(format!("member {n}"))).await })
            })
            .collect();

        let mut ids = Vec::new();
        for task in tasks {
            ids.push(task.await.unwrap().unwrap());
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 200);
        assert_eq!(store.list_members().await.unwrap().len(), 200);
    }

    #[tokio::test]
    async fn reopening_keeps_existing_rows() {
        let database = Database::in_memory().unwrap();
        let first = SqliteMemberStore::open(database.clone()).unwrap();
        first.add_member(&Member::new("Alice")).await.unwrap();

        let second = SqliteMemberStore::open(database).unwrap();
        assert_eq!(second.list_members().await.unwrap().len(), 1);
    }
}
