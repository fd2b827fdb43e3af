use crate::config::LogConfig;
use crate::error::{CliError, StackTrace};
use application::service::{describe_catalog_item, update_catalog_item};
use application::transfer::{CatalogItemDto, UpdateCatalogItemDto};
use clap::Parser;
use error_stack::ResultExt;
use kernel::prelude::entity::CatalogItem;
use rust_decimal::Decimal;
use std::path::PathBuf;
use time::macros::format_description;
use time::Date;
use tracing::{debug, error};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

mod config;
mod error;

/// Validate a book store catalog item and print how it renders.
#[derive(Debug, Parser)]
#[command(name = "bookstore", version)]
struct Args {
    /// JSON file holding the catalog item
    file: PathBuf,

    /// Replace the price
    #[arg(long, allow_negative_numbers = true)]
    price: Option<Decimal>,

    /// Replace the currency code
    #[arg(long)]
    currency: Option<String>,

    /// Replace the stock amount
    #[arg(long, allow_negative_numbers = true)]
    amount: Option<i32>,

    /// Replace the binding
    #[arg(long)]
    binding: Option<String>,

    /// Replace the publication date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    published: Option<Date>,

    /// Remove the publication date
    #[arg(long, conflicts_with = "published")]
    clear_published: bool,

    /// Print the resulting item as JSON
    #[arg(long)]
    json: bool,
}

fn parse_date(value: &str) -> Result<Date, time::error::Parse> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
}

fn main() -> Result<(), StackTrace> {
    let args = Args::parse();
    let config = LogConfig::from_env()?;
    let _guard = init_tracing(&config);

    if let Err(report) = run(args) {
        error!("{report:?}");
        return Err(report.into());
    }
    Ok(())
}

fn init_tracing(config: &LogConfig) -> WorkerGuard {
    let appender = tracing_appender::rolling::daily(&config.directory, &config.file_prefix);
    let (non_blocking_appender, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(tracing_subscriber::EnvFilter::new(&config.filter)),
        )
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_writer(non_blocking_appender)
                .with_ansi(false)
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .init();
    guard
}

impl Args {
    fn update(&self) -> UpdateCatalogItemDto {
        let published = if self.clear_published {
            Some(None)
        } else {
            self.published.map(Some)
        };
        UpdateCatalogItemDto {
            published,
            book_binding: self.binding.clone(),
            price: self.price,
            currency: self.currency.clone(),
            amount: self.amount,
        }
    }
}

#[tracing::instrument]
fn run(args: Args) -> error_stack::Result<(), CliError> {
    let update = args.update();
    let Args { file, json, .. } = args;

    let raw = std::fs::read_to_string(&file)
        .change_context_lazy(|| CliError::Io)
        .attach_printable_lazy(|| format!("Failed to read {}", file.display()))?;
    let dto: CatalogItemDto = serde_json::from_str(&raw)
        .change_context_lazy(|| CliError::Parse)
        .attach_printable_lazy(|| format!("Failed to parse {}", file.display()))?;
    debug!("loaded catalog item from {}", file.display());

    let mut item = CatalogItem::try_from(dto).change_context_lazy(|| CliError::Catalog)?;
    update_catalog_item(&mut item, update).change_context_lazy(|| CliError::Catalog)?;

    if json {
        let out = serde_json::to_string_pretty(&CatalogItemDto::from(item))
            .change_context_lazy(|| CliError::Output)?;
        println!("{out}");
        return Ok(());
    }

    let view = describe_catalog_item(&item);
    println!("{}", view.rendered);
    println!("ISBN search: {}", view.isbn_search_uri);
    if let Some(isni_uri) = view.isni_uri {
        println!("ISNI: {isni_uri}");
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::{parse_date, run, Args};
    use crate::error::CliError;
    use clap::Parser;
    use rust_decimal::Decimal;
    use time::macros::date;

    #[test]
    fn parses_overrides() {
        let args = Args::try_parse_from([
            "bookstore",
            "item.json",
            "--price",
            "12.50",
            "--amount",
            "-1",
            "--published",
            "2019-03-23",
            "--json",
        ])
        .expect("valid arguments");
        assert_eq!(args.price, Some(Decimal::new(1250, 2)));
        assert_eq!(args.amount, Some(-1));
        assert_eq!(args.published, Some(date!(2019 - 03 - 23)));
        assert!(args.json);
        assert_eq!(args.currency, None);
    }

    #[test]
    fn builds_update_from_overrides() {
        let args = Args::try_parse_from(["bookstore", "item.json", "--clear-published"])
            .expect("valid arguments");
        let update = args.update();
        assert_eq!(update.published, Some(None));
        assert_eq!(update.amount, None);

        let args = Args::try_parse_from(["bookstore", "item.json", "--published", "2019-03-23"])
            .expect("valid arguments");
        assert_eq!(args.update().published, Some(Some(date!(2019 - 03 - 23))));

        assert!(Args::try_parse_from([
            "bookstore",
            "item.json",
            "--published",
            "2019-03-23",
            "--clear-published",
        ])
        .is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let args = Args::try_parse_from(["bookstore", "does/not/exist.json"])
            .expect("valid arguments");
        let report = run(args).unwrap_err();
        assert!(matches!(report.current_context(), CliError::Io));
    }

    #[test]
    fn rejects_malformed_date() {
        assert!(parse_date("23/03/2019").is_err());
    }
}
