//! Product workflows: list, create, update, delete.
//!
//! Each function is one request → one [`Outcome`]. They only talk to the store
//! through [`ProductStore`] and know nothing about HTTP; `app::errors` maps the
//! outcome onto a status code and body.

use stockroom_products::{FormData, Product, ProductForm, ProductId, ProductStore, SaveError, StoreError};

/// Where successful writes redirect to.
pub const LIST_PATH: &str = "/products";

/// A page to render, with its context.
#[derive(Debug, Clone)]
pub enum Page {
    ProductList { products: Vec<Product> },
    ProductForm { form: ProductForm },
    ProductConfirmDelete { product: Product },
}

#[cfg(test)]
impl Page {
    fn template_name(&self) -> &'static str {
        match self {
            Page::ProductList { .. } => "inventory/product_list.html",
            Page::ProductForm { .. } => "inventory/product_form.html",
            Page::ProductConfirmDelete { .. } => "inventory/product_confirm_delete.html",
        }
    }
}

/// Terminal state of a workflow.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Render a page (validation failures land here too).
    Render(Page),
    /// Redirect after a successful write.
    Redirect(&'static str),
    NotFound,
    /// The store refused a write that passed validation.
    Failure(String),
}

pub fn list<S>(store: &S) -> Outcome
where
    S: ProductStore + ?Sized,
{
    Outcome::Render(Page::ProductList {
        products: store.list(),
    })
}

/// Blank create form.
pub fn new_form() -> Outcome {
    Outcome::Render(Page::ProductForm {
        form: ProductForm::empty(),
    })
}

pub fn create<S>(store: &S, data: FormData) -> Outcome
where
    S: ProductStore + ?Sized,
{
    let form = ProductForm::new(data);
    save_or_render(store, form)
}

/// Edit form pre-filled from the stored product.
pub fn edit_form<S>(store: &S, id: ProductId) -> Outcome
where
    S: ProductStore + ?Sized,
{
    match store.get(id) {
        Ok(product) => Outcome::Render(Page::ProductForm {
            form: ProductForm::from_instance(&product),
        }),
        Err(e) => store_failure(e),
    }
}

pub fn update<S>(store: &S, id: ProductId, data: FormData) -> Outcome
where
    S: ProductStore + ?Sized,
{
    if let Err(e) = store.get(id) {
        return store_failure(e);
    }
    let form = ProductForm::for_instance(id, data);
    save_or_render(store, form)
}

/// Confirmation page shown before deleting.
pub fn confirm_delete<S>(store: &S, id: ProductId) -> Outcome
where
    S: ProductStore + ?Sized,
{
    match store.get(id) {
        Ok(product) => Outcome::Render(Page::ProductConfirmDelete { product }),
        Err(e) => store_failure(e),
    }
}

pub fn delete<S>(store: &S, id: ProductId) -> Outcome
where
    S: ProductStore + ?Sized,
{
    match store.delete(id) {
        Ok(()) => {
            tracing::info!(product_id = %id, "product deleted");
            Outcome::Redirect(LIST_PATH)
        }
        Err(e) => store_failure(e),
    }
}

fn save_or_render<S>(store: &S, form: ProductForm) -> Outcome
where
    S: ProductStore + ?Sized,
{
    if !form.is_valid() {
        tracing::debug!(errors = %form.errors(), "product form rejected");
        return Outcome::Render(Page::ProductForm { form });
    }

    match form.save(store) {
        Ok(product) => {
            tracing::info!(product_id = %product.id_typed(), name = product.name(), "product saved");
            Outcome::Redirect(LIST_PATH)
        }
        Err(SaveError::Store(e)) => store_failure(e),
        // is_valid() was checked above
        Err(SaveError::Invalid(_) | SaveError::Unbound) => Outcome::Render(Page::ProductForm { form }),
    }
}

fn store_failure(err: StoreError) -> Outcome {
    match err {
        StoreError::NotFound(id) => {
            tracing::info!(product_id = %id, "product not found");
            Outcome::NotFound
        }
        StoreError::ConstraintViolation(msg) => {
            tracing::error!(error = %msg, "store rejected a validated product");
            Outcome::Failure(msg)
        }
    }
}
