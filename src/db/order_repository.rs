use crate::db::models::{NewOrderRow, OrderRow};
use crate::db::Database;
use crate::errors::StoreError;
use crate::store::{Order, OrderStore};
use async_trait::async_trait;
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::BigInt;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations};
use tracing::debug;

/// Schema of the orders database
pub const ORDER_MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations/orders");

/// Repository for order records in the SQLite database
pub struct OrderRepository<'a> {
    /// Database connection
    pub conn: &'a mut SqliteConnection,
}

impl<'a> OrderRepository<'a> {
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        OrderRepository { conn }
    }

    pub fn list_orders(&mut self) -> Result<Vec<Order>, StoreError> {
        use crate::schema::orders::dsl::*;

        let rows = orders
            .order(id.asc())
            .select(OrderRow::as_select())
            .load::<OrderRow>(self.conn)?;

        Ok(rows.into_iter().map(Order::from).collect())
    }

    pub fn insert_order(&mut self, order: &Order) -> Result<i64, StoreError> {
        use crate::schema::orders;

        diesel::insert_into(orders::table)
            .values(NewOrderRow { name: &order.name })
            .execute(self.conn)?;

        let row_id: i64 = diesel::select(sql::<BigInt>("last_insert_rowid()")).get_result(self.conn)?;
        Ok(row_id)
    }
}

/// Order store backed by its own SQLite database, separate from members
#[derive(Clone, Debug)]
pub struct SqliteOrderStore {
    database: Database,
}

impl SqliteOrderStore {
    pub fn open(database: Database) -> Result<Self, StoreError> {
        database.migrate(ORDER_MIGRATIONS)?;
        Ok(SqliteOrderStore { database })
    }
}

#[async_trait]
impl OrderStore for SqliteOrderStore {
    async fn list_orders(&self) -> Result<Vec<Order>, StoreError> {
        self.database
            .run(|conn| OrderRepository::new(conn).list_orders())
            .await
    }

    async fn add_order(&self, order: &Order) -> Result<i64, StoreError> {
        let order = order.clone();
        let id = self
            .database
            .run(move |conn| OrderRepository::new(conn).insert_order(&order))
            .await?;
        debug!("Inserted order {}", id);
        Ok(id)
    }
}
