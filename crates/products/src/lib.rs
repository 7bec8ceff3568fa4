//! Products domain module.
//!
//! This crate contains the product record, the constraints every stored product
//! must satisfy, the storage port, and the form validator that turns untrusted
//! client input into a product (no IO, no HTTP).

pub mod form;
pub mod product;
pub mod store;

pub use form::{Field, FieldErrors, FormData, ProductForm, SaveError};
pub use product::{NAME_MAX_LENGTH, Price, Product, ProductFields};
pub use store::{ProductStore, StoreError, StoreResult};
pub use stockroom_core::{Entity, ProductId};
