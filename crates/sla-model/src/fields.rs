//! Semantic business fields a spreadsheet column can be mapped onto.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// The fixed set of semantic shipment fields.
///
/// Wire names are the snake_case strings used by mapping files and presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    OrderDate,
    ShippingDate,
    RequiredArrivalDate,
    Status,
    Method,
    Product,
    DestinationCountry,
    OrderId,
    Customer,
}

impl FieldKey {
    /// Every field, in presentation order.
    pub const ALL: [FieldKey; 9] = [
        Self::OrderDate,
        Self::ShippingDate,
        Self::RequiredArrivalDate,
        Self::Status,
        Self::Method,
        Self::Product,
        Self::DestinationCountry,
        Self::OrderId,
        Self::Customer,
    ];

    /// Fields a row must carry to be usable at all. `order_id` and
    /// `customer` are informational and never required.
    pub const REQUIRED: [FieldKey; 7] = [
        Self::OrderDate,
        Self::ShippingDate,
        Self::RequiredArrivalDate,
        Self::Status,
        Self::Method,
        Self::Product,
        Self::DestinationCountry,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OrderDate => "order_date",
            Self::ShippingDate => "shipping_date",
            Self::RequiredArrivalDate => "required_arrival_date",
            Self::Status => "status",
            Self::Method => "method",
            Self::Product => "product",
            Self::DestinationCountry => "destination_country",
            Self::OrderId => "order_id",
            Self::Customer => "customer",
        }
    }

    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKey {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|key| key.as_str() == value)
            .copied()
            .ok_or_else(|| ModelError::UnknownField(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        for key in FieldKey::ALL {
            assert_eq!(key.as_str().parse::<FieldKey>().unwrap(), key);
        }
        assert!("shipment_date".parse::<FieldKey>().is_err());
    }

    #[test]
    fn required_excludes_informational_fields() {
        assert!(!FieldKey::OrderId.is_required());
        assert!(!FieldKey::Customer.is_required());
        assert!(FieldKey::ShippingDate.is_required());
    }
}
