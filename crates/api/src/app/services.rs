use std::sync::Arc;

use rust_decimal::Decimal;

use stockroom_products::{ProductFields, ProductStore, StoreError};

use crate::render::Renderer;

/// Handles shared by every request. The store is the only shared state.
#[derive(Clone)]
pub struct AppServices {
    store: Arc<dyn ProductStore>,
    renderer: Arc<dyn Renderer>,
}

impl AppServices {
    pub fn new(store: Arc<dyn ProductStore>, renderer: Arc<dyn Renderer>) -> Self {
        Self { store, renderer }
    }

    pub fn store(&self) -> &dyn ProductStore {
        self.store.as_ref()
    }

    pub fn renderer(&self) -> &dyn Renderer {
        self.renderer.as_ref()
    }
}

/// Insert a few demo products; returns how many were created.
pub fn seed_demo<S>(store: &S) -> Result<usize, StoreError>
where
    S: ProductStore + ?Sized,
{
    let demo = [
        ProductFields::new("Desk Lamp", "Adjustable arm, warm white LED.", Decimal::new(3499, 2), 12),
        ProductFields::new("Notebook A5", "Dotted, 120 pages.", Decimal::new(650, 2), 80),
        ProductFields::new("USB-C Cable", "", Decimal::new(999, 2), 0),
    ];
    let count = demo.len();
    for fields in demo {
        store.create(fields)?;
    }
    Ok(count)
}
