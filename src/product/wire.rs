//! Key-based navigation of the card response.
//!
//! Every step looks a key up in a JSON object; arrays or scalars where an
//! object is expected resolve to "absent", never to positional fields.
//!
//! Shape: `{ "data": { "products": [ { "name", "sizes": [ { "price": { "product" } } ] } ] } }`

use serde_json::Value;

use crate::core::{WbError, wire::minor_units};

/// `data.products[0]`, if present.
pub(crate) fn first_product(root: &Value) -> Option<&Value> {
    root.get("data")?
        .get("products")?
        .as_array()?
        .first()
}

/// The product's `name`: missing → `""`, `null` → `None`.
pub(crate) fn title(product: &Value) -> Result<Option<String>, WbError> {
    let Some(obj) = product.as_object() else {
        return Err(WbError::Data(format!("product is not an object: {product}")));
    };
    match obj.get("name") {
        None => Ok(Some(String::new())),
        Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(WbError::Data(format!("name is not a string: {other}"))),
    }
}

/// `sizes[0].price.product` in kopecks; any missing step is `None`.
pub(crate) fn minor_price(product: &Value) -> Result<Option<i64>, WbError> {
    let raw = product
        .get("sizes")
        .and_then(Value::as_array)
        .and_then(|sizes| sizes.first())
        .and_then(|size| size.get("price"))
        .and_then(|price| price.get("product"));
    match raw {
        Some(v) => minor_units(v),
        None => Ok(None),
    }
}
