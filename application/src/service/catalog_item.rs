use tracing::{debug, warn};

use kernel::prelude::entity::CatalogItem;
use kernel::KernelError;

use crate::transfer::{CatalogItemView, UpdateCatalogItemDto};

/// Applies every supplied field through the item's setters.
///
/// The changes are made on a copy and committed together, so a rejected
/// field leaves the item exactly as it was.
#[tracing::instrument(skip(item))]
pub fn update_catalog_item(
    item: &mut CatalogItem,
    dto: UpdateCatalogItemDto,
) -> error_stack::Result<(), KernelError> {
    if dto.is_empty() {
        debug!("nothing to update");
        return Ok(());
    }

    let mut updated = item.clone();
    match apply(&mut updated, dto) {
        Ok(()) => {
            *item = updated;
            debug!("catalog item updated: {item}");
            Ok(())
        }
        Err(report) => {
            warn!("{report:?}");
            Err(report)
        }
    }
}

fn apply(item: &mut CatalogItem, dto: UpdateCatalogItemDto) -> error_stack::Result<(), KernelError> {
    let UpdateCatalogItemDto {
        published,
        book_binding,
        price,
        currency,
        amount,
    } = dto;
    if let Some(published) = published {
        item.set_published(published);
    }
    if let Some(book_binding) = book_binding {
        item.set_book_binding(book_binding);
    }
    if let Some(price) = price {
        item.set_price(price)?;
    }
    if let Some(currency) = currency {
        item.set_currency(currency)?;
    }
    if let Some(amount) = amount {
        item.set_amount(amount)?;
    }
    Ok(())
}

pub fn describe_catalog_item(item: &CatalogItem) -> CatalogItemView {
    CatalogItemView {
        rendered: item.to_string(),
        isbn_search_uri: item.isbn_search_uri(),
        isni_uri: item.isni_uri().ok(),
    }
}
