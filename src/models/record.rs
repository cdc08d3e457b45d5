//! Normalized row representation
//!
//! Source rows are schema-flexible: headers vary by case and spelling
//! (including Estonian exports: `Seriaalinumber`, `Nimi`, `hind`). Each row
//! is normalized once at load time into a `Record` with canonical fields
//! merged into the served mapping.

use serde::{Serialize, Serializer};

use super::value::FieldValue;

/// Header variants probed for the canonical serial, in priority order.
const SERIAL_FIELDS: &[&str] = &[
    "serial",
    "Serial",
    "SERIAL",
    "seerianumber",
    "Seerianumber",
    "seriaalinumber",
    "Seriaalinumber",
];

/// Header variants probed for the canonical name, in priority order.
const NAME_FIELDS: &[&str] = &["name", "Name", "Nimi", "nimi"];

/// Header variants probed for the canonical price, in priority order.
const PRICE_FIELDS: &[&str] = &["price", "Price", "hind"];

/// Header variants probed for the canonical quantity, in priority order.
const QTY_FIELDS: &[&str] = &["qty", "Qty", "quantity", "Quantity"];

/// A normalized source row.
///
/// The served view is a flat, ordered field mapping with the canonical
/// fields merged in. `serial` and `name` are additionally stored directly
/// for index and search access; both may be absent.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    serial: Option<String>,
    name: Option<String>,
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    /// Normalize one source row given as (header, value) pairs.
    ///
    /// Headers and values are trimmed. Canonical `serial` and `name` take
    /// the first non-empty value among their header variants; `price` and
    /// `qty` are additionally numeric-coerced. A source column whose name
    /// is exactly a canonical name is replaced in place by the canonical
    /// value (or dropped when the probe found nothing non-empty); canonical
    /// names without a source column are appended after the row's own
    /// columns.
    pub fn from_row(row: &[(&str, &str)]) -> Self {
        // Duplicate headers keep their first position with the last value.
        let mut cells: Vec<(String, String)> = Vec::with_capacity(row.len());
        for (key, value) in row {
            let key = key.trim();
            let value = value.trim();
            match cells.iter_mut().find(|(k, _)| k == key) {
                Some((_, v)) => *v = value.to_string(),
                None => cells.push((key.to_string(), value.to_string())),
            }
        }

        let serial = probe(&cells, SERIAL_FIELDS).map(str::to_string);
        let name = probe(&cells, NAME_FIELDS).map(str::to_string);
        let price = probe(&cells, PRICE_FIELDS).map(FieldValue::coerce);
        let qty = probe(&cells, QTY_FIELDS).map(FieldValue::coerce);

        let canonicals = [
            ("serial", serial.clone().map(FieldValue::Text)),
            ("name", name.clone().map(FieldValue::Text)),
            ("price", price),
            ("qty", qty),
        ];

        let mut fields: Vec<(String, FieldValue)> =
            Vec::with_capacity(cells.len() + canonicals.len());
        for (key, value) in &cells {
            match canonicals.iter().find(|(n, _)| key.as_str() == *n) {
                Some((_, canonical)) => {
                    if let Some(v) = canonical {
                        fields.push((key.clone(), v.clone()));
                    }
                }
                None => fields.push((key.clone(), FieldValue::text(value.as_str()))),
            }
        }
        for (key, canonical) in canonicals {
            if cells.iter().any(|(k, _)| k == key) {
                continue;
            }
            if let Some(v) = canonical {
                fields.push((key.to_string(), v));
            }
        }

        Record {
            serial,
            name,
            fields,
        }
    }

    /// Canonical serial number, if any source variant carried one
    pub fn serial(&self) -> Option<&str> {
        self.serial.as_deref()
    }

    /// Canonical display name, if any source variant carried one
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Canonical price (numeric when the source value was entirely numeric)
    pub fn price(&self) -> Option<&FieldValue> {
        self.field("price")
    }

    /// Canonical quantity (numeric when the source value was entirely numeric)
    pub fn qty(&self) -> Option<&FieldValue> {
        self.field("qty")
    }

    /// Exact-name lookup in the served mapping, canonical fields included.
    ///
    /// Field names are case-sensitive: `"Price"` finds a source column of
    /// that exact spelling, not the canonical `price`.
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    /// Iterate the served mapping in order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// First non-empty cell value among the given header variants.
fn probe<'a>(cells: &'a [(String, String)], variants: &[&str]) -> Option<&'a str> {
    variants.iter().find_map(|variant| {
        cells
            .iter()
            .find(|(k, _)| k == variant)
            .map(|(_, v)| v.as_str())
            .filter(|v| !v.is_empty())
    })
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
