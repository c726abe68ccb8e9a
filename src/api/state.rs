use crate::store::{MemberStore, OrderStore};
use std::sync::Arc;

/// Store handles shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub members: Arc<dyn MemberStore>,
    pub orders: Arc<dyn OrderStore>,
}

impl AppState {
    pub fn new(members: Arc<dyn MemberStore>, orders: Arc<dyn OrderStore>) -> Self {
        AppState { members, orders }
    }
}
