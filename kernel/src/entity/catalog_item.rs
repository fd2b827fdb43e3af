mod amount;
mod author_name;
mod binding;
mod currency;
mod isbn;
mod isni;
mod price;
mod published;
mod publisher;
mod title;

pub use self::{
    amount::*, author_name::*, binding::*, currency::*, isbn::*, isni::*, price::*, published::*,
    publisher::*, title::*,
};
use destructure::Destructure;
use error_stack::Report;
use rust_decimal::Decimal;
use std::fmt::{Display, Formatter};
use time::Date;
use vodca::References;

use crate::KernelError;

/// A book offered by the store.
///
/// Author, ISNI, title, publisher and ISBN are fixed once the item exists.
/// Publication date, binding, price, currency and stock amount can change,
/// but only through setters that validate the new value first.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct CatalogItem {
    author_name: AuthorName,
    isni: Option<Isni>,
    title: BookTitle,
    publisher: Publisher,
    isbn: Isbn,
    published: Option<PublishedOn>,
    book_binding: BookBinding,
    price: Price,
    currency: Currency,
    amount: StockAmount,
}

impl CatalogItem {
    pub fn new(
        author_name: impl Into<String>,
        title: impl Into<String>,
        publisher: impl Into<String>,
        isbn: impl Into<String>,
    ) -> error_stack::Result<Self, KernelError> {
        Self::create(
            author_name,
            None,
            title,
            publisher,
            isbn,
            None,
            String::new(),
            Decimal::ZERO,
            DEFAULT_CURRENCY,
            0,
        )
    }

    pub fn with_isni(
        author_name: impl Into<String>,
        isni: impl Into<String>,
        title: impl Into<String>,
        publisher: impl Into<String>,
        isbn: impl Into<String>,
    ) -> error_stack::Result<Self, KernelError> {
        Self::create(
            author_name,
            Some(isni.into()),
            title,
            publisher,
            isbn,
            None,
            String::new(),
            Decimal::ZERO,
            DEFAULT_CURRENCY,
            0,
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn with_stock(
        author_name: impl Into<String>,
        title: impl Into<String>,
        publisher: impl Into<String>,
        isbn: impl Into<String>,
        published: Option<Date>,
        book_binding: impl Into<String>,
        price: impl Into<Decimal>,
        currency: impl Into<String>,
        amount: i32,
    ) -> error_stack::Result<Self, KernelError> {
        Self::create(
            author_name,
            None,
            title,
            publisher,
            isbn,
            published,
            book_binding,
            price,
            currency,
            amount,
        )
    }

    /// Validates every argument and builds the item.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// author, title, publisher, ISNI, ISBN, currency, price, amount.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        author_name: impl Into<String>,
        isni: Option<String>,
        title: impl Into<String>,
        publisher: impl Into<String>,
        isbn: impl Into<String>,
        published: Option<Date>,
        book_binding: impl Into<String>,
        price: impl Into<Decimal>,
        currency: impl Into<String>,
        amount: i32,
    ) -> error_stack::Result<Self, KernelError> {
        let author_name = AuthorName::new(author_name)?;
        let title = BookTitle::new(title)?;
        let publisher = Publisher::new(publisher)?;
        let isni = match isni {
            Some(isni) => Some(Isni::new(isni)?),
            None => None,
        };
        let isbn = Isbn::new(isbn)?;
        let currency = Currency::new(currency)?;
        let price = Price::new(price)?;
        let amount = StockAmount::new(amount)?;

        Ok(Self {
            author_name,
            isni,
            title,
            publisher,
            isbn,
            published: published.map(PublishedOn::new),
            book_binding: BookBinding::new(book_binding),
            price,
            currency,
            amount,
        })
    }

    pub fn has_isni(&self) -> bool {
        self.isni.is_some()
    }

    pub fn set_published(&mut self, published: Option<Date>) {
        self.published = published.map(PublishedOn::new);
    }

    pub fn set_book_binding(&mut self, book_binding: impl Into<String>) {
        self.book_binding = BookBinding::new(book_binding);
    }

    pub fn set_price(&mut self, price: impl Into<Decimal>) -> error_stack::Result<(), KernelError> {
        self.price = Price::new(price)?;
        Ok(())
    }

    pub fn set_currency(
        &mut self,
        currency: impl Into<String>,
    ) -> error_stack::Result<(), KernelError> {
        self.currency = Currency::new(currency)?;
        Ok(())
    }

    pub fn set_amount(&mut self, amount: i32) -> error_stack::Result<(), KernelError> {
        self.amount = StockAmount::new(amount)?;
        Ok(())
    }

    /// Contributor page at isni.org.
    pub fn isni_uri(&self) -> error_stack::Result<String, KernelError> {
        self.isni.as_ref().map(Isni::uri).ok_or_else(|| {
            Report::new(KernelError::InvalidState {
                reason: "ISNI is not set",
            })
        })
    }

    /// Publication page at isbnsearch.org.
    pub fn isbn_search_uri(&self) -> String {
        self.isbn.search_uri()
    }
}

impl Display for CatalogItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let title: &String = self.title.as_ref();
        let author_name: &String = self.author_name.as_ref();
        let currency: &String = self.currency.as_ref();
        let amount: &i32 = self.amount.as_ref();
        let price = self.price.display_with(currency);
        match &self.isni {
            Some(isni) => {
                let isni: &String = isni.as_ref();
                write!(f, "{title}, {author_name}, {isni}, {price}, {amount}")
            }
            None => write!(f, "{title}, {author_name}, ISNI IS NOT SET, {price}, {amount}"),
        }
    }
}
