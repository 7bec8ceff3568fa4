use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use stockroom_products::{
    Entity, Product, ProductFields, ProductId, ProductStore, StoreError, StoreResult,
};

#[derive(Debug, Default)]
struct Records {
    /// Insertion counter; gives `list()` a stable creation order.
    next_seq: u64,
    by_id: HashMap<ProductId, (u64, Product)>,
}

/// In-memory product store for tests/dev.
///
/// A single `RwLock` serializes writers, so every operation is atomic per record.
/// Records are only swapped in after passing the stored-record constraints, so a
/// poisoned lock still guards consistent data and is recovered rather than
/// propagated.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    inner: RwLock<Records>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Records> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Records> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ProductStore for InMemoryProductStore {
    fn create(&self, fields: ProductFields) -> StoreResult<Product> {
        let product = Product::create(ProductId::new(), fields, Utc::now())?;

        let mut records = self.write();
        let seq = records.next_seq;
        records.next_seq += 1;
        records.by_id.insert(*product.id(), (seq, product.clone()));

        tracing::debug!(product_id = %product.id_typed(), "product inserted");
        Ok(product)
    }

    fn get(&self, id: ProductId) -> StoreResult<Product> {
        self.read()
            .by_id
            .get(&id)
            .map(|(_, p)| p.clone())
            .ok_or(StoreError::NotFound(id))
    }

    fn list(&self) -> Vec<Product> {
        let records = self.read();
        let mut items: Vec<&(u64, Product)> = records.by_id.values().collect();
        items.sort_by_key(|(seq, _)| *seq);
        items.into_iter().map(|(_, p)| p.clone()).collect()
    }

    fn update(&self, id: ProductId, fields: ProductFields) -> StoreResult<Product> {
        let mut records = self.write();
        let (_, product) = records.by_id.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        product.replace_fields(fields, Utc::now())?;

        tracing::debug!(product_id = %id, "product replaced");
        Ok(product.clone())
    }

    fn delete(&self, id: ProductId) -> StoreResult<()> {
        let removed = self.write().by_id.remove(&id);
        match removed {
            Some(_) => {
                tracing::debug!(product_id = %id, "product deleted");
                Ok(())
            }
            None => Err(StoreError::NotFound(id)),
        }
    }
}
