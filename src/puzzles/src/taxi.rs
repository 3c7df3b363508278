use derive_more::{Display, From};

/// Covers the first `BASE_DISTANCE` units.
pub const BASE_FARE: f64 = 4.00;
pub const BASE_DISTANCE: i64 = 2;
/// Charged for every started unit past `BASE_DISTANCE`.
pub const RATE_PER_UNIT: f64 = 1.50;

/// A fare, always shown with two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From)]
#[display("{_0:.2}")]
pub struct Fare(pub f64);

fn fare_past_base(extra: f64) -> Fare {
    Fare::from(BASE_FARE + RATE_PER_UNIT * extra.ceil())
}

pub fn fare_for_distance(distance: f64) -> Fare {
    let base = BASE_DISTANCE as f64;
    match distance > base {
        true => fare_past_base(distance - base),
        false => Fare::from(BASE_FARE),
    }
}

/// The units past the base are counted in integers before the conversion, so
/// distances beyond 2^53 lose precision only once.
pub fn compute_taxi_fare(distance: i64) -> Fare {
    match distance > BASE_DISTANCE {
        true => fare_past_base((distance - BASE_DISTANCE) as f64),
        false => Fare::from(BASE_FARE),
    }
}
