use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use stockroom_core::{DomainError, DomainResult, Entity, ProductId, ValueObject};

/// Maximum number of characters in a product name.
pub const NAME_MAX_LENGTH: usize = 100;

/// Unit price of a product.
///
/// Fixed-point with [`Price::DECIMAL_PLACES`] fractional digits and at most
/// [`Price::MAX_DIGITS`] digits overall. Never negative.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Price(Decimal);

impl ValueObject for Price {}

impl Price {
    pub const DECIMAL_PLACES: u32 = 2;
    pub const MAX_DIGITS: u32 = 10;

    /// Build a price, enforcing the stored-record constraints.
    ///
    /// The amount is rescaled to two fractional digits, so `7.5` is kept as `7.50`.
    pub fn new(amount: Decimal) -> DomainResult<Self> {
        if amount < Decimal::ZERO {
            return Err(DomainError::constraint("price must not be negative"));
        }

        let (digits, decimals) = digit_counts(amount);
        if decimals > Self::DECIMAL_PLACES {
            return Err(DomainError::constraint(format!(
                "price has more than {} decimal places",
                Self::DECIMAL_PLACES
            )));
        }
        if digits > Self::MAX_DIGITS || digits - decimals > Self::MAX_DIGITS - Self::DECIMAL_PLACES {
            return Err(DomainError::constraint(format!(
                "price has more than {} digits",
                Self::MAX_DIGITS
            )));
        }

        let mut amount = amount;
        amount.rescale(Self::DECIMAL_PLACES);
        // "-0.00" parses with a negative sign.
        amount.set_sign_positive(true);
        Ok(Self(amount))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Count `(total digits, fractional digits)` of a decimal as written.
///
/// `0.00` counts as two digits, both fractional; `100` counts as three whole digits.
fn digit_counts(amount: Decimal) -> (u32, u32) {
    let mantissa = amount.mantissa().unsigned_abs();
    let len = mantissa.checked_ilog10().map_or(1, |d| d + 1);
    split_digits(len, amount.scale())
}

/// `(total digits, fractional digits)` for a mantissa of `len` significant
/// digits scaled down by `scale`.
pub(crate) fn split_digits(len: u32, scale: u32) -> (u32, u32) {
    if scale == 0 {
        (len, 0)
    } else if scale > len {
        (scale, scale)
    } else {
        (len, scale)
    }
}

/// The editable fields of a product, as handed to the store.
///
/// Nothing here is checked yet; the store runs [`Product::create`] /
/// [`Product::replace_fields`], which reject values no stored record may hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFields {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl ProductFields {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        quantity: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            quantity,
        }
    }

    fn check(&self) -> DomainResult<Price> {
        if self.name.trim().is_empty() {
            return Err(DomainError::constraint("name must not be empty"));
        }
        let len = self.name.chars().count();
        if len > NAME_MAX_LENGTH {
            return Err(DomainError::constraint(format!(
                "name has {len} characters (max {NAME_MAX_LENGTH})"
            )));
        }
        Price::new(self.price)
    }
}

/// Stored product record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    price: Price,
    quantity: u32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Product {
    /// Build a new record from unchecked fields.
    ///
    /// Fails with [`DomainError::ConstraintViolation`] when the fields break a
    /// stored-record constraint.
    pub fn create(id: ProductId, fields: ProductFields, at: DateTime<Utc>) -> DomainResult<Self> {
        let price = fields.check()?;
        Ok(Self {
            id,
            name: fields.name,
            description: fields.description,
            price,
            quantity: fields.quantity,
            created_at: at,
            updated_at: at,
        })
    }

    /// Replace all editable fields at once.
    ///
    /// On error the record is left untouched. `id` and `created_at` never change.
    pub fn replace_fields(&mut self, fields: ProductFields, at: DateTime<Utc>) -> DomainResult<()> {
        let price = fields.check()?;
        self.name = fields.name;
        self.description = fields.description;
        self.price = price;
        self.quantity = fields.quantity;
        self.updated_at = at;
        Ok(())
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Snapshot of the editable fields (e.g. to pre-fill an edit form).
    pub fn fields(&self) -> ProductFields {
        ProductFields {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price.amount(),
            quantity: self.quantity,
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name)
    }
}
