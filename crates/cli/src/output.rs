//! Terminal rendering

use std::io;

use serde::Serialize;
use storefront::products::{Product, ProductCard, cards::format_price};
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

use crate::errors::CliError;

const TRENDING_BADGE: &str = "Trending";

/// Write product cards as a table.
pub(crate) fn write_cards(out: &mut impl io::Write, cards: &[ProductCard]) -> io::Result<()> {
    let mut builder = Builder::default();

    builder.push_record(["ID", "Name", "Category", "Price", "Compare at", ""]);

    for card in cards {
        builder.push_record([
            card.id.as_str(),
            card.name.as_str(),
            card.category.as_str(),
            card.price.as_str(),
            card.compare_at_price.as_str(),
            if card.trending { TRENDING_BADGE } else { "" },
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(3..5), Alignment::right());

    writeln!(out, "{table}")
}

/// Write a single product as labelled lines.
pub(crate) fn write_product(
    out: &mut impl io::Write,
    product: &Product,
    image_url: &str,
) -> io::Result<()> {
    writeln!(out, "{}", product.name)?;
    writeln!(out, "Category: {}", product.category)?;
    writeln!(out, "Price:    {}", format_price(product.price))?;
    writeln!(out, "Image:    {image_url}")?;
    writeln!(out)?;
    writeln!(out, "{}", product.description)
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T>(out: &mut impl io::Write, value: &T) -> Result<(), CliError>
where
    T: Serialize + ?Sized,
{
    serde_json::to_writer_pretty(&mut *out, value)?;

    writeln!(out)?;

    Ok(())
}
