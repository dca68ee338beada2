//! Commerce-flavored domain rows: products, departments, prices.
//!
//! The word tables are the candidate lists the sampling layer picks
//! from; the core never inspects their content. Prices follow retail
//! psychology: the final decimal digit is biased heavily toward 9 and
//! 5, but a substitution that would escape the requested range is
//! discarded in favor of the plain rounded draw.

use crate::gen::Generator;
use crate::generators::{BoolWithProb, DateBetween, UniformFloat, UniformInt, UuidGen};
use chrono::NaiveDate;
use crucible_core::{choice, digits, number, MersenneTwister, SampleError};
use serde::Serialize;
use uuid::Uuid;

pub const PRODUCT_ADJECTIVES: &[&str] = &[
    "Small",
    "Ergonomic",
    "Rustic",
    "Intelligent",
    "Gorgeous",
    "Incredible",
    "Fantastic",
    "Practical",
    "Sleek",
    "Awesome",
    "Generic",
    "Handcrafted",
    "Handmade",
    "Licensed",
    "Refined",
    "Unbranded",
    "Tasty",
    "Modern",
    "Recycled",
    "Luxurious",
    "Oriental",
    "Bespoke",
    "Elegant",
];

pub const PRODUCT_MATERIALS: &[&str] = &[
    "Steel", "Wooden", "Concrete", "Plastic", "Cotton", "Granite", "Rubber", "Metal", "Soft",
    "Fresh", "Frozen", "Bronze", "Ceramic", "Bamboo", "Aluminum", "Marble", "Silk", "Leather",
];

pub const PRODUCT_NAMES: &[&str] = &[
    "Chair", "Car", "Computer", "Keyboard", "Mouse", "Bike", "Ball", "Gloves", "Pants", "Shirt",
    "Table", "Shoes", "Hat", "Towels", "Soap", "Tuna", "Chicken", "Fish", "Cheese", "Bacon",
    "Pizza", "Salad", "Sausages", "Chips",
];

pub const DEPARTMENTS: &[&str] = &[
    "Books",
    "Movies",
    "Music",
    "Games",
    "Electronics",
    "Computers",
    "Home",
    "Garden",
    "Tools",
    "Grocery",
    "Health",
    "Beauty",
    "Toys",
    "Kids",
    "Baby",
    "Clothing",
    "Shoes",
    "Jewelry",
    "Sports",
    "Outdoors",
    "Automotive",
    "Industrial",
];

/// Options for [`price`], every field defaulted.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceOptions {
    /// Minimum price. Defaults to 1.
    pub min: f64,
    /// Maximum price. Defaults to 1000.
    pub max: f64,
    /// Number of decimal places. Defaults to 2.
    pub dec: u8,
    /// Currency symbol prefix. Defaults to none.
    pub symbol: String,
}

impl Default for PriceOptions {
    fn default() -> Self {
        Self {
            min: 1.0,
            max: 1000.0,
            dec: 2,
            symbol: String::new(),
        }
    }
}

/// A price string between `min` and `max`, inclusive.
///
/// When `dec > 0` the final decimal digit is redrawn to look like a
/// shelf price: 9 half the time, 5 three times in ten, 0 once in ten,
/// and a uniform digit the remaining tenth. The uniform digit is drawn
/// before the weighted selection, and both draws happen even when the
/// substitution is later discarded — the draw sequence is part of the
/// reproducibility contract. If the substituted value leaves
/// `[min, max]`, the unsubstituted rounded draw is kept instead.
///
/// Negative bounds short-circuit to `"0"` (with the symbol prefix),
/// and `min == max` yields that exact value without consuming draws.
pub fn price(rng: &mut MersenneTwister, options: &PriceOptions) -> Result<String, SampleError> {
    let PriceOptions { min, max, dec, .. } = *options;
    let symbol = &options.symbol;
    let precision = usize::from(dec);

    if min < 0.0 || max < 0.0 {
        return Ok(format!("{symbol}0"));
    }
    if min == max {
        return Ok(format!("{symbol}{min:.precision$}"));
    }

    let generated = number::float_in_range(rng, min, max, dec)?;
    if dec == 0 {
        return Ok(format!("{symbol}{generated:.0}"));
    }

    let scale = 10f64.powi(i32::from(dec));
    let old_last_digit = ((generated * scale).round() as i64).rem_euclid(10);
    let uniform_digit = number::int_in_range(rng, 0, 9)?;
    let last_digit_policy = [
        (9i64, 5.0),
        (5, 3.0),
        (0, 1.0),
        (uniform_digit, 1.0),
    ];
    let new_last_digit = *choice::pick_weighted(rng, &last_digit_policy)?;

    let fraction = 1.0 / scale;
    let substituted =
        generated - old_last_digit as f64 * fraction + new_last_digit as f64 * fraction;

    let value = if (min..=max).contains(&substituted) {
        substituted
    } else {
        generated
    };
    Ok(format!("{symbol}{value:.precision$}"))
}

/// An 8-digit stock keeping unit with a non-zero leading digit.
pub fn sku(rng: &mut MersenneTwister) -> String {
    digits::numeric_string(rng, 8, false)
}

/// A descriptive product name: adjective, material, product.
pub fn product_name(rng: &mut MersenneTwister) -> String {
    format!(
        "{} {} {}",
        table_pick(rng, PRODUCT_ADJECTIVES),
        table_pick(rng, PRODUCT_MATERIALS),
        table_pick(rng, PRODUCT_NAMES),
    )
}

/// A department label.
pub fn department(rng: &mut MersenneTwister) -> &'static str {
    table_pick(rng, DEPARTMENTS)
}

fn table_pick<'a>(rng: &mut MersenneTwister, table: &'a [&'a str]) -> &'a str {
    *choice::pick(rng, table).expect("word tables are non-empty")
}

/// One generated product row.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: Uuid,
    pub sku: String,
    pub name: String,
    pub department: String,
    pub unit_price: String,
    pub quantity: i64,
    pub stocked_on: NaiveDate,
    pub in_stock: bool,
}

/// Generates [`Product`] rows; field draw order is fixed.
pub struct ProductGenerator {
    price_options: PriceOptions,
    stocked_window: DateBetween,
    quantity: UniformInt,
    availability: BoolWithProb,
    id_gen: UuidGen,
}

impl ProductGenerator {
    /// Build a product generator, validating every embedded request up
    /// front so row generation itself cannot fail.
    pub fn new(
        price_options: PriceOptions,
        stocked_from: NaiveDate,
        stocked_until: NaiveDate,
    ) -> Result<Self, SampleError> {
        // Dry-validate the price bounds with the same rules price() uses.
        UniformFloat::new(price_options.min, price_options.max, price_options.dec)?;
        Ok(Self {
            price_options,
            stocked_window: DateBetween::new(stocked_from, stocked_until)?,
            quantity: UniformInt::new(1, 500)?,
            availability: BoolWithProb::new(0.85),
            id_gen: UuidGen,
        })
    }
}

impl Generator<Product> for ProductGenerator {
    fn generate(&self, rng: &mut MersenneTwister) -> Product {
        Product {
            id: self.id_gen.generate(rng),
            sku: sku(rng),
            name: product_name(rng),
            department: department(rng).to_string(),
            unit_price: price(rng, &self.price_options).expect("options validated at construction"),
            quantity: self.quantity.generate(rng),
            stocked_on: self.stocked_window.generate(rng),
            in_stock: self.availability.generate(rng),
        }
    }
}
