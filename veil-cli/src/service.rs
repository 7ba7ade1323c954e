use tracing::info;
use veil::SanitizedExt;

use crate::domain::Item;

/// Creates a new item after logging the request.
pub fn create_item(
    id: i64,
    name: &str,
    price: f64,
    description: Option<String>,
) -> veil::Result<Item> {
    info!(id, price, name = %name.sanitized(), "creating item");
    Item::new(id, name, price, description)
}
