use error_stack::Report;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::Date;

use kernel::prelude::entity::{CatalogItem, DestructCatalogItem, DEFAULT_CURRENCY};
use kernel::KernelError;

/// Plain-data form of a catalog item. Fields left out of the input take the
/// same defaults as the minimal constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItemDto {
    pub author_name: String,
    #[serde(default)]
    pub isni: Option<String>,
    pub title: String,
    pub publisher: String,
    pub isbn: String,
    #[serde(default)]
    pub published: Option<Date>,
    #[serde(default)]
    pub book_binding: String,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub amount: i32,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl TryFrom<CatalogItemDto> for CatalogItem {
    type Error = Report<KernelError>;
    fn try_from(value: CatalogItemDto) -> Result<Self, Self::Error> {
        CatalogItem::create(
            value.author_name,
            value.isni,
            value.title,
            value.publisher,
            value.isbn,
            value.published,
            value.book_binding,
            value.price,
            value.currency,
            value.amount,
        )
    }
}

impl From<CatalogItem> for CatalogItemDto {
    fn from(value: CatalogItem) -> Self {
        let DestructCatalogItem {
            author_name,
            isni,
            title,
            publisher,
            isbn,
            published,
            book_binding,
            price,
            currency,
            amount,
        } = value.into_destruct();
        Self {
            author_name: author_name.into(),
            isni: isni.map(Into::into),
            title: title.into(),
            publisher: publisher.into(),
            isbn: isbn.into(),
            published: published.map(Into::into),
            book_binding: book_binding.into(),
            price: price.into(),
            currency: currency.into(),
            amount: amount.into(),
        }
    }
}

/// New values for the mutable fields. `None` leaves a field as it is;
/// `published: Some(None)` clears the publication date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateCatalogItemDto {
    pub published: Option<Option<Date>>,
    pub book_binding: Option<String>,
    pub price: Option<Decimal>,
    pub currency: Option<String>,
    pub amount: Option<i32>,
}

impl UpdateCatalogItemDto {
    pub fn is_empty(&self) -> bool {
        self.published.is_none()
            && self.book_binding.is_none()
            && self.price.is_none()
            && self.currency.is_none()
            && self.amount.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogItemView {
    pub rendered: String,
    pub isbn_search_uri: String,
    pub isni_uri: Option<String>,
}
