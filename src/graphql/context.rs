use std::sync::Arc;

use crate::store::RecordStore;

#[derive(Clone)]
pub struct GraphQLContext {
    pub store: Arc<RecordStore>,
}

impl GraphQLContext {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }
}
