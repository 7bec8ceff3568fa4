//! Storage port for product records.

use std::sync::Arc;

use thiserror::Error;

use stockroom_core::{DomainError, ProductId};

use crate::product::{Product, ProductFields};

pub type StoreResult<T> = Result<T, StoreError>;

/// Product store operation error.
///
/// `ConstraintViolation` means a write reached the store with values no stored
/// record may hold. Input that went through [`crate::ProductForm`] never does.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("product not found: {0}")]
    NotFound(ProductId),

    #[error("constraint violated: {0}")]
    ConstraintViolation(String),
}

impl From<DomainError> for StoreError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::ConstraintViolation(msg) => StoreError::ConstraintViolation(msg),
            other => StoreError::ConstraintViolation(other.to_string()),
        }
    }
}

/// Keyed storage of product records.
///
/// Implementations enforce stored-record constraints on every write (via
/// [`Product::create`] / [`Product::replace_fields`]), assign ids on create and
/// make each single-record operation atomic: a reader sees either the old record
/// or the new one, never a mix.
pub trait ProductStore: Send + Sync {
    /// Persist a new product under a freshly assigned id.
    fn create(&self, fields: ProductFields) -> StoreResult<Product>;

    fn get(&self, id: ProductId) -> StoreResult<Product>;

    /// Snapshot of all products in creation order.
    fn list(&self) -> Vec<Product>;

    /// Replace all editable fields of an existing product.
    fn update(&self, id: ProductId, fields: ProductFields) -> StoreResult<Product>;

    /// Permanently remove a product.
    fn delete(&self, id: ProductId) -> StoreResult<()>;
}

impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    fn create(&self, fields: ProductFields) -> StoreResult<Product> {
        (**self).create(fields)
    }

    fn get(&self, id: ProductId) -> StoreResult<Product> {
        (**self).get(id)
    }

    fn list(&self) -> Vec<Product> {
        (**self).list()
    }

    fn update(&self, id: ProductId, fields: ProductFields) -> StoreResult<Product> {
        (**self).update(id, fields)
    }

    fn delete(&self, id: ProductId) -> StoreResult<()> {
        (**self).delete(id)
    }
}
