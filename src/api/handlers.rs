use crate::api::errors::AppError;
use crate::api::extract::NumericId;
use crate::api::pipeline::{
    convert, created, decode, empty_json, json, null_as_default, HandlerResult, IntoDomain,
};
use crate::api::state::AppState;
use crate::constants::REJECTED_MEMBER_ID;
use crate::store::{Member, Order};
use axum::body::Bytes;
use axum::extract::Extension;
use serde::Deserialize;
use std::convert::Infallible;
use tracing::info;

/// Represents the request payload for creating a new member
#[derive(Debug, Default, Deserialize)]
pub struct MemberRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

impl IntoDomain for MemberRequest {
    type Entity = Member;
    type Error = Infallible;

    fn into_domain(self) -> Result<Member, Infallible> {
        Ok(Member::new(self.name))
    }
}

/// Represents the request payload for creating a new order
#[derive(Debug, Default, Deserialize)]
pub struct OrderRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

impl IntoDomain for OrderRequest {
    type Entity = Order;
    type Error = Infallible;

    fn into_domain(self) -> Result<Order, Infallible> {
        Ok(Order::new(self.name))
    }
}

/// Lists every stored member
#[axum::debug_handler]
pub async fn list_members(Extension(state): Extension<AppState>) -> HandlerResult {
    let members = state.members.list_members().await.map_err(AppError::store)?;
    json(&members)
}

/// Creates a new member
///
/// Responds `201 Created` with the stored member and a `Location` header.
#[axum::debug_handler]
pub async fn create_member(Extension(state): Extension<AppState>, body: Bytes) -> HandlerResult {
    let request: MemberRequest = decode(&body)?;
    let mut member = convert(request)?;

    let id = state
        .members
        .add_member(&member)
        .await
        .map_err(AppError::store_add)?;
    info!("Created member {}", id);

    member.id = Some(id);
    created(format!("/members/{}", id), &member)
}

/// Answers with a synthesized member named after `id`.
///
/// Nothing is read from or written to the member store.
#[axum::debug_handler]
pub async fn update_member(NumericId(id): NumericId) -> HandlerResult {
    json(&[Member::new(format!("updated Name {}", id))])
}

/// Deletes a member
///
/// The store is not touched. Id `2` is always refused; any other id gets an
/// empty `200 OK`.
#[axum::debug_handler]
pub async fn delete_member(NumericId(id): NumericId) -> HandlerResult {
    if id == REJECTED_MEMBER_ID {
        return Err(AppError::rejected_id(&id));
    }
    Ok(empty_json())
}

/// Lists every stored order
#[axum::debug_handler]
pub async fn list_orders(Extension(state): Extension<AppState>) -> HandlerResult {
    let orders = state.orders.list_orders().await.map_err(AppError::store)?;
    json(&orders)
}

/// Creates a new order
#[axum::debug_handler]
pub async fn create_order(Extension(state): Extension<AppState>, body: Bytes) -> HandlerResult {
    let request: OrderRequest = decode(&body)?;
    let mut order = convert(request)?;

    let id = state
        .orders
        .add_order(&order)
        .await
        .map_err(AppError::store_add)?;
    info!("Created order {}", id);

    order.id = Some(id);
    created(format!("/orders/{}", id), &order)
}
