use crate::schema::{members, orders};
use crate::store::{Member, Order};
use diesel::{Insertable, Queryable, Selectable};

/// Represents a member row in the members database
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = members)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MemberRow {
    /// Rowid assigned by SQLite
    pub id: i64,
    /// Display name of the member
    pub name: String,
}

/// Insertable form of a member, the id is left to SQLite
#[derive(Debug, Insertable)]
#[diesel(table_name = members)]
pub struct NewMemberRow<'a> {
    pub name: &'a str,
}

/// Represents an order row in the orders database
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct OrderRow {
    /// Rowid assigned by SQLite
    pub id: i64,
    /// Name of the order
    pub name: String,
}

/// Insertable form of an order, the id is left to SQLite
#[derive(Debug, Insertable)]
#[diesel(table_name = orders)]
pub struct NewOrderRow<'a> {
    pub name: &'a str,
}

impl From<MemberRow> for Member {
    fn from(row: MemberRow) -> Self {
        Member {
            id: Some(row.id),
            name: row.name,
        }
    }
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Order {
            id: Some(row.id),
            name: row.name,
        }
    }
}
