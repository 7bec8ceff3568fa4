//! Product form: validation of untrusted client input.
//!
//! Every field is cleaned independently and all errors are collected, so a
//! submission with a blank name and a negative price reports both. Malformed
//! input is never a system fault; it always ends up as field errors.

use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use stockroom_core::ProductId;

use crate::product::{NAME_MAX_LENGTH, Price, Product, ProductFields, split_digits};
use crate::store::{ProductStore, StoreError};

/// Raw submitted values, keyed by field name.
pub type FormData = HashMap<String, String>;

pub const REQUIRED: &str = "This field is required.";
pub const PRICE_NEGATIVE: &str = "Price cannot be negative.";
pub const QUANTITY_NEGATIVE: &str = "Quantity cannot be negative.";
pub const INVALID_NUMBER: &str = "Enter a number.";
pub const INVALID_WHOLE_NUMBER: &str = "Enter a whole number.";

/// Editable product fields, in display order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Description,
    Price,
    Quantity,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Description, Field::Price, Field::Quantity];

    /// Key used in submitted form data.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
            Field::Price => "price",
            Field::Quantity => "quantity",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Description => "Description",
            Field::Price => "Price",
            Field::Quantity => "Quantity",
        }
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field name -> human-readable messages. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: Field, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Messages for one field (empty slice when it has none).
    pub fn get(&self, field: Field) -> &[String] {
        self.0.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &[String])> {
        self.0.iter().map(|(f, msgs)| (*f, msgs.as_slice()))
    }
}

impl core::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut first = true;
        for (field, messages) in self.iter() {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SaveError {
    #[error("cannot save an unbound form")]
    Unbound,

    #[error("form has errors: {0}")]
    Invalid(FieldErrors),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Validate raw input into product fields, or collect every field error.
pub fn validate(data: &FormData) -> Result<ProductFields, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = clean_name(submitted(data, Field::Name)).map_err(|e| errors.add(Field::Name, e));
    let description = clean_description(submitted(data, Field::Description));
    let price = clean_price(submitted(data, Field::Price)).map_err(|e| errors.add(Field::Price, e));
    let quantity =
        clean_quantity(submitted(data, Field::Quantity)).map_err(|e| errors.add(Field::Quantity, e));

    match (name, price, quantity) {
        (Ok(name), Ok(price), Ok(quantity)) if errors.is_empty() => {
            Ok(ProductFields::new(name, description, price, quantity))
        }
        _ => Err(errors),
    }
}

/// Trimmed submitted value; blank counts as missing.
fn submitted(data: &FormData, field: Field) -> Option<&str> {
    data.get(field.as_str())
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

fn clean_name(raw: Option<&str>) -> Result<String, String> {
    let name = raw.ok_or(REQUIRED)?;
    let len = name.chars().count();
    if len > NAME_MAX_LENGTH {
        return Err(format!(
            "Ensure this value has at most {NAME_MAX_LENGTH} characters (it has {len})."
        ));
    }
    Ok(name.to_string())
}

fn clean_description(raw: Option<&str>) -> String {
    raw.unwrap_or_default().to_string()
}

fn clean_price(raw: Option<&str>) -> Result<Decimal, String> {
    let raw = raw.ok_or(REQUIRED)?;
    let numeral = Numeral::parse(raw).ok_or(INVALID_NUMBER)?;

    let (digits, decimals) = numeral.digit_counts();
    let max_whole = Price::MAX_DIGITS - Price::DECIMAL_PLACES;
    if digits > Price::MAX_DIGITS {
        return Err(format!(
            "Ensure that there are no more than {} digits in total.",
            Price::MAX_DIGITS
        ));
    }
    if decimals > Price::DECIMAL_PLACES {
        return Err(format!(
            "Ensure that there are no more than {} decimal places.",
            Price::DECIMAL_PLACES
        ));
    }
    if digits - decimals > max_whole {
        return Err(format!(
            "Ensure that there are no more than {max_whole} digits before the decimal point."
        ));
    }

    if numeral.is_negative() {
        return Err(PRICE_NEGATIVE.to_string());
    }
    Decimal::from_str(&numeral.unsigned()).map_err(|_| INVALID_NUMBER.to_string())
}

fn clean_quantity(raw: Option<&str>) -> Result<u32, String> {
    let raw = raw.ok_or(REQUIRED)?;
    let numeral = Numeral::parse(raw)
        .filter(Numeral::is_integer)
        .ok_or(INVALID_WHOLE_NUMBER)?;

    if numeral.is_negative() {
        return Err(QUANTITY_NEGATIVE.to_string());
    }
    numeral
        .unsigned()
        .parse::<u32>()
        .map_err(|_| format!("Ensure this value is less than or equal to {}.", u32::MAX))
}

/// A plain decimal literal: optional sign, ASCII digits, at most one point.
///
/// Classified on the text, so an out-of-range number still gets a range
/// message instead of being reported as malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Numeral<'a> {
    negative: bool,
    whole: &'a str,
    fraction: &'a str,
    has_point: bool,
}

impl<'a> Numeral<'a> {
    fn parse(raw: &'a str) -> Option<Self> {
        let (negative, unsigned) = match raw.as_bytes().first() {
            Some(b'-') => (true, &raw[1..]),
            Some(b'+') => (false, &raw[1..]),
            _ => (false, raw),
        };
        let (whole, fraction, has_point) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, fraction, true),
            None => (unsigned, "", false),
        };

        let digits_only = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !digits_only(whole) || !digits_only(fraction) {
            return None;
        }
        Some(Self {
            negative,
            whole,
            fraction,
            has_point,
        })
    }

    fn is_integer(&self) -> bool {
        !self.has_point
    }

    fn is_zero(&self) -> bool {
        self.whole.bytes().chain(self.fraction.bytes()).all(|b| b == b'0')
    }

    /// Below zero; `-0` and `-0.00` are not.
    fn is_negative(&self) -> bool {
        self.negative && !self.is_zero()
    }

    /// `(total digits, fractional digits)` of the digits as written, leading zeros
    /// dropped.
    fn digit_counts(&self) -> (u32, u32) {
        let whole = self.whole.trim_start_matches('0');
        let len = if whole.is_empty() {
            self.fraction.trim_start_matches('0').len().max(1)
        } else {
            whole.len() + self.fraction.len()
        };
        let count = |n: usize| u32::try_from(n).unwrap_or(u32::MAX);
        split_digits(count(len), count(self.fraction.len()))
    }

    /// Magnitude without sign or leading zeros, e.g. `007.50` -> `7.50`.
    fn unsigned(&self) -> String {
        let whole = match self.whole.trim_start_matches('0') {
            "" => "0",
            whole => whole,
        };
        if self.fraction.is_empty() {
            whole.to_string()
        } else {
            format!("{whole}.{}", self.fraction)
        }
    }
}

/// Create/edit form for a product.
///
/// A bound form carries submitted data and its validation result. An unbound
/// form only carries initial values for display and can never be saved.
#[derive(Debug, Clone)]
pub struct ProductForm {
    instance: Option<ProductId>,
    data: FormData,
    bound: bool,
    cleaned: Option<ProductFields>,
    errors: FieldErrors,
}

impl ProductForm {
    /// Bind submitted data in create mode.
    pub fn new(data: FormData) -> Self {
        Self::bind(None, data)
    }

    /// Bind submitted data in edit mode for an existing product.
    pub fn for_instance(id: ProductId, data: FormData) -> Self {
        Self::bind(Some(id), data)
    }

    /// Unbound, blank create form.
    pub fn empty() -> Self {
        Self {
            instance: None,
            data: FormData::new(),
            bound: false,
            cleaned: None,
            errors: FieldErrors::new(),
        }
    }

    /// Unbound edit form pre-filled from a stored product.
    pub fn from_instance(product: &Product) -> Self {
        let data = FormData::from([
            (Field::Name.as_str().to_string(), product.name().to_string()),
            (Field::Description.as_str().to_string(), product.description().to_string()),
            (Field::Price.as_str().to_string(), product.price().to_string()),
            (Field::Quantity.as_str().to_string(), product.quantity().to_string()),
        ]);
        Self {
            instance: Some(product.id_typed()),
            data,
            bound: false,
            cleaned: None,
            errors: FieldErrors::new(),
        }
    }

    fn bind(instance: Option<ProductId>, data: FormData) -> Self {
        let (cleaned, errors) = match validate(&data) {
            Ok(fields) => (Some(fields), FieldErrors::new()),
            Err(errors) => (None, errors),
        };
        Self {
            instance,
            data,
            bound: true,
            cleaned,
            errors,
        }
    }

    pub fn is_bound(&self) -> bool {
        self.bound
    }

    pub fn is_valid(&self) -> bool {
        self.bound && self.errors.is_empty()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn cleaned_data(&self) -> Option<&ProductFields> {
        self.cleaned.as_ref()
    }

    /// Product being edited, if any.
    pub fn instance_id(&self) -> Option<ProductId> {
        self.instance
    }

    /// Value to show in the field's input: as submitted, or the initial value.
    pub fn value(&self, field: Field) -> &str {
        self.data.get(field.as_str()).map(String::as_str).unwrap_or("")
    }

    /// Write the cleaned fields: insert in create mode, replace in edit mode.
    pub fn save<S>(&self, store: &S) -> Result<Product, SaveError>
    where
        S: ProductStore + ?Sized,
    {
        if !self.bound {
            return Err(SaveError::Unbound);
        }
        let fields = match &self.cleaned {
            Some(fields) if self.errors.is_empty() => fields.clone(),
            _ => return Err(SaveError::Invalid(self.errors.clone())),
        };

        let product = match self.instance {
            None => store.create(fields)?,
            Some(id) => store.update(id, fields)?,
        };
        tracing::debug!(product_id = %product.id_typed(), "product form saved");
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use chrono::Utc;

    /// Minimal store so the form can be saved without the infra crate.
    #[derive(Default)]
    struct VecStore {
        items: Mutex<Vec<Product>>,
    }

    impl ProductStore for VecStore {
        fn create(&self, fields: ProductFields) -> crate::StoreResult<Product> {
            let product = Product::create(ProductId::new(), fields, Utc::now())?;
            self.items.lock().unwrap().push(product.clone());
            Ok(product)
        }

        fn get(&self, id: ProductId) -> crate::StoreResult<Product> {
            self.items
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.id_typed() == id)
                .cloned()
                .ok_or(StoreError::NotFound(id))
        }

        fn list(&self) -> Vec<Product> {
            self.items.lock().unwrap().clone()
        }

        fn update(&self, id: ProductId, fields: ProductFields) -> crate::StoreResult<Product> {
            let mut items = self.items.lock().unwrap();
            let product = items
                .iter_mut()
                .find(|p| p.id_typed() == id)
                .ok_or(StoreError::NotFound(id))?;
            product.replace_fields(fields, Utc::now())?;
            Ok(product.clone())
        }

        fn delete(&self, id: ProductId) -> crate::StoreResult<()> {
            let mut items = self.items.lock().unwrap();
            let before = items.len();
            items.retain(|p| p.id_typed() != id);
            if items.len() == before {
                return Err(StoreError::NotFound(id));
            }
            Ok(())
        }
    }

    fn data(pairs: &[(&str, &str)]) -> FormData {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn valid(name: &str, price: &str, quantity: &str) -> FormData {
        data(&[
            ("name", name),
            ("description", "All fields valid."),
            ("price", price),
            ("quantity", quantity),
        ])
    }

    #[test]
    fn negative_price_is_invalid() {
        let form = ProductForm::new(valid("Test Product", "-1", "1"));
        assert!(!form.is_valid());
        assert_eq!(form.errors().get(Field::Price), [PRICE_NEGATIVE]);
        assert!(!form.errors().contains(Field::Quantity));
    }

    #[test]
    fn negative_quantity_is_invalid() {
        let form = ProductForm::new(valid("Test Product", "1", "-1"));
        assert!(!form.is_valid());
        assert_eq!(form.errors().get(Field::Quantity), [QUANTITY_NEGATIVE]);
    }

    #[test]
    fn missing_name_is_required() {
        let form = ProductForm::new(data(&[("description", "No name"), ("price", "1"), ("quantity", "1")]));
        assert!(!form.is_valid());
        assert_eq!(form.errors().get(Field::Name), [REQUIRED]);
    }

    #[test]
    fn empty_name_is_required() {
        let form = ProductForm::new(valid("", "1", "1"));
        assert!(!form.is_valid());
        assert!(form.errors().contains(Field::Name));
    }

    #[test]
    fn whitespace_name_is_required() {
        let form = ProductForm::new(valid("   ", "10", "5"));
        assert!(!form.is_valid());
        assert_eq!(form.errors().get(Field::Name), [REQUIRED]);
    }

    #[test]
    fn name_over_max_length_is_rejected() {
        let form = ProductForm::new(valid(&"A".repeat(101), "1", "1"));
        assert_eq!(
            form.errors().get(Field::Name),
            ["Ensure this value has at most 100 characters (it has 101)."]
        );
    }

    #[test]
    fn name_is_trimmed() {
        let form = ProductForm::new(valid("  Padded  ", "1", "1"));
        assert_eq!(form.cleaned_data().unwrap().name, "Padded");
    }

    #[test]
    fn description_is_optional() {
        let form = ProductForm::new(data(&[("name", "No description"), ("price", "1"), ("quantity", "1")]));
        assert!(form.is_valid());
        assert_eq!(form.cleaned_data().unwrap().description, "");
    }

    #[test]
    fn non_numeric_values_are_reported_per_field() {
        let form = ProductForm::new(valid("Typo", "abc", "1.5"));
        assert_eq!(form.errors().get(Field::Price), [INVALID_NUMBER]);
        assert_eq!(form.errors().get(Field::Quantity), [INVALID_WHOLE_NUMBER]);
    }

    #[test]
    fn all_errors_are_collected() {
        let form = ProductForm::new(data(&[("name", " "), ("price", "-3"), ("quantity", "-2")]));
        assert_eq!(form.errors().len(), 3);
        assert!(form.errors().contains(Field::Name));
        assert!(form.errors().contains(Field::Price));
        assert!(form.errors().contains(Field::Quantity));
    }

    #[test]
    fn price_precision_is_checked() {
        let form = ProductForm::new(valid("Precise", "1.001", "1"));
        assert_eq!(
            form.errors().get(Field::Price),
            ["Ensure that there are no more than 2 decimal places."]
        );

        let form = ProductForm::new(valid("Pricey", "123456789", "1"));
        assert_eq!(
            form.errors().get(Field::Price),
            ["Ensure that there are no more than 8 digits before the decimal point."]
        );

        let form = ProductForm::new(valid("Pricey", "12345678901", "1"));
        assert_eq!(
            form.errors().get(Field::Price),
            ["Ensure that there are no more than 10 digits in total."]
        );
    }

    #[test]
    fn quantity_above_u32_is_rejected() {
        let form = ProductForm::new(valid("Too many", "1", "4294967296"));
        assert_eq!(
            form.errors().get(Field::Quantity),
            ["Ensure this value is less than or equal to 4294967295."]
        );
    }

    #[test]
    fn quantity_out_of_integer_range_keeps_range_messages() {
        let form = ProductForm::new(valid("Huge", "1", "-99999999999999999999"));
        assert_eq!(form.errors().get(Field::Quantity), [QUANTITY_NEGATIVE]);

        let form = ProductForm::new(valid("Huge", "1", "99999999999999999999"));
        assert_eq!(
            form.errors().get(Field::Quantity),
            ["Ensure this value is less than or equal to 4294967295."]
        );
    }

    #[test]
    fn quantity_sign_and_zero_padding() {
        let form = ProductForm::new(valid("Padded", "1", "+0007"));
        assert_eq!(form.cleaned_data().unwrap().quantity, 7);

        let form = ProductForm::new(valid("Negative zero", "1", "-0"));
        assert_eq!(form.cleaned_data().unwrap().quantity, 0);
    }

    #[test]
    fn price_beyond_decimal_range_reports_digit_count() {
        let form = ProductForm::new(valid("Huge", "-123456789012345678901234567890123", "1"));
        assert_eq!(
            form.errors().get(Field::Price),
            ["Ensure that there are no more than 10 digits in total."]
        );

        let form = ProductForm::new(valid("Tiny", "0.0000000000000000000000000000001", "1"));
        assert_eq!(
            form.errors().get(Field::Price),
            ["Ensure that there are no more than 10 digits in total."]
        );
    }

    #[test]
    fn price_leading_zeros_do_not_count() {
        let form = ProductForm::new(valid("Padded", &format!("{}12.50", "0".repeat(40)), "1"));
        assert_eq!(form.cleaned_data().unwrap().price, Decimal::new(1250, 2));
    }

    #[test]
    fn price_accepts_bare_point_forms() {
        let form = ProductForm::new(valid("Half", ".5", "1"));
        assert_eq!(form.cleaned_data().unwrap().price, Decimal::new(5, 1));

        let form = ProductForm::new(valid("Whole", "3.", "1"));
        assert_eq!(form.cleaned_data().unwrap().price, Decimal::from(3));
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        for price in ["1__0", "1_0", "1e2", "1.2.3", ".", "-", "NaN", "inf", "0x10"] {
            let form = ProductForm::new(valid("Malformed", price, "1"));
            assert_eq!(form.errors().get(Field::Price), [INVALID_NUMBER], "price {price:?}");
        }
        for quantity in ["1_000", "1.", "1.0", "+", "--1", "1e3"] {
            let form = ProductForm::new(valid("Malformed", "1", quantity));
            assert_eq!(
                form.errors().get(Field::Quantity),
                [INVALID_WHOLE_NUMBER],
                "quantity {quantity:?}"
            );
        }
    }

    #[test]
    fn negative_zero_price_is_zero() {
        let form = ProductForm::new(valid("Free", "-0.00", "1"));
        assert!(form.is_valid());
        assert_eq!(form.cleaned_data().unwrap().price, Decimal::ZERO);
    }

    #[test]
    fn valid_form_saves_a_product() {
        let store = VecStore::default();
        let form = ProductForm::new(valid("Valid Product", "10", "5"));
        assert!(form.is_valid());

        let product = form.save(&store).unwrap();
        assert_eq!(product.name(), "Valid Product");
        assert_eq!(product.description(), "All fields valid.");
        assert_eq!(product.price().amount(), Decimal::from(10));
        assert_eq!(product.quantity(), 5);
        assert_eq!(store.get(product.id_typed()).unwrap(), product);
    }

    #[test]
    fn zero_quantity_and_price_save() {
        let store = VecStore::default();
        let product = ProductForm::new(valid("Zero Product", "0", "0")).save(&store).unwrap();
        assert_eq!(product.price().amount(), Decimal::ZERO);
        assert_eq!(product.quantity(), 0);
    }

    #[test]
    fn large_quantity_saves() {
        let store = VecStore::default();
        let product = ProductForm::new(valid("Large Quantity Product", "15", "1000000"))
            .save(&store)
            .unwrap();
        assert_eq!(product.quantity(), 1_000_000);
    }

    #[test]
    fn large_price_keeps_exact_value() {
        let store = VecStore::default();
        let product = ProductForm::new(valid("Large Price Product", "9999999.99", "10"))
            .save(&store)
            .unwrap();
        assert_eq!(product.price().amount(), Decimal::new(999_999_999, 2));
    }

    #[test]
    fn edit_mode_replaces_the_bound_instance() {
        let store = VecStore::default();
        let original = ProductForm::new(valid("Update Product", "10.00", "1")).save(&store).unwrap();

        let form = ProductForm::for_instance(original.id_typed(), valid("Updated Product", "12.00", "4"));
        let updated = form.save(&store).unwrap();

        assert_eq!(updated.id_typed(), original.id_typed());
        assert_eq!(updated.name(), "Updated Product");
        assert_eq!(updated.price().amount(), Decimal::new(1200, 2));
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn edit_mode_on_missing_instance_is_not_found() {
        let store = VecStore::default();
        let id = ProductId::new();
        let err = ProductForm::for_instance(id, valid("Ghost", "1", "1")).save(&store).unwrap_err();
        assert_eq!(err, SaveError::Store(StoreError::NotFound(id)));
    }

    #[test]
    fn invalid_form_cannot_be_saved() {
        let store = VecStore::default();
        let form = ProductForm::new(valid("", "1", "1"));
        let err = form.save(&store).unwrap_err();
        assert_eq!(err, SaveError::Invalid(form.errors().clone()));
        assert!(store.list().is_empty());
    }

    #[test]
    fn unbound_forms_are_never_valid() {
        let store = VecStore::default();
        let form = ProductForm::empty();
        assert!(!form.is_bound());
        assert!(!form.is_valid());
        assert_eq!(form.save(&store).unwrap_err(), SaveError::Unbound);
    }

    #[test]
    fn from_instance_prefills_values() {
        let store = VecStore::default();
        let product = ProductForm::new(valid("View Product", "5", "2")).save(&store).unwrap();

        let form = ProductForm::from_instance(&product);
        assert_eq!(form.instance_id(), Some(product.id_typed()));
        assert_eq!(form.value(Field::Name), "View Product");
        assert_eq!(form.value(Field::Price), "5.00");
        assert_eq!(form.value(Field::Quantity), "2");
    }

    #[test]
    fn submitted_values_are_kept_for_redisplay() {
        let form = ProductForm::new(valid("Keep", "-4", "oops"));
        assert_eq!(form.value(Field::Price), "-4");
        assert_eq!(form.value(Field::Quantity), "oops");
    }

    #[test]
    fn error_display_lists_field_and_message() {
        let form = ProductForm::new(data(&[("name", "x"), ("price", "-1"), ("quantity", "1")]));
        assert_eq!(form.errors().to_string(), "price: Price cannot be negative.");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: a negative price or quantity is never valid.
            #[test]
            fn negative_numbers_are_always_rejected(
                name in "[A-Za-z][A-Za-z0-9 ]{0,99}",
                price_cents in -99_999_999i64..0,
                quantity in -1_000_000i64..0,
            ) {
                let price = Decimal::new(price_cents, 2).to_string();

                let form = ProductForm::new(valid(&name, &price, "1"));
                prop_assert!(!form.is_valid());
                prop_assert!(form.errors().contains(Field::Price));

                let form = ProductForm::new(valid(&name, "1", &quantity.to_string()));
                prop_assert!(!form.is_valid());
                prop_assert!(form.errors().contains(Field::Quantity));
            }

            /// Property: valid input persists the exact parsed values.
            #[test]
            fn valid_input_is_stored_exactly(
                name in "[A-Za-z][A-Za-z0-9]{0,99}",
                price_cents in 0i64..10_000_000_000,
                quantity in 0u32..=u32::MAX,
            ) {
                let store = VecStore::default();
                let price = Decimal::new(price_cents, 2);

                let form = ProductForm::new(valid(&name, &price.to_string(), &quantity.to_string()));
                prop_assert!(form.is_valid(), "errors: {}", form.errors());

                let product = form.save(&store).unwrap();
                prop_assert_eq!(product.name(), name.as_str());
                prop_assert_eq!(product.price().amount(), price);
                prop_assert_eq!(product.quantity(), quantity);
            }

            /// Property: a blank name fails whatever the other fields hold.
            #[test]
            fn blank_name_is_always_rejected(
                name in "[ \t]{0,10}",
                price_cents in 0i64..1_000_000,
                quantity in 0u32..1000,
            ) {
                let price = Decimal::new(price_cents, 2).to_string();
                let form = ProductForm::new(valid(&name, &price, &quantity.to_string()));
                prop_assert!(!form.is_valid());
                prop_assert!(form.errors().contains(Field::Name));
            }
        }
    }
}
