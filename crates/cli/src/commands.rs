//! Command dispatch
//!
//! Each command drives one page model and renders its final state.

use std::io;

use storefront::{
    catalog::CatalogClient,
    listing::SortKey,
    pages::{
        HomePage, LoadOutcome, NotFoundPage, PageState, ProductDetailPage, SearchPage,
        SubmissionStatus, SubmitOutcome, SuggestProductPage, home::EMPTY_MESSAGE,
        suggest::SUBMITTED_MESSAGE,
    },
    products::{
        DraftField, Product, ProductId, cards::DETAIL_PLACEHOLDER_IMAGE,
        drafts::SUGGESTED_CATEGORIES,
    },
    routes::{Resolution, Route},
};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::{
    config::{Command, suggest::SuggestArgs},
    errors::CliError,
    output::{write_cards, write_json, write_product},
};

/// Run `command` and write its page to `out`.
pub(crate) async fn run(
    command: &Command,
    client: &CatalogClient,
    cancel: &CancellationToken,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    match command {
        Command::List { term, sort, json } => list(client, cancel, term, *sort, *json, out).await,
        Command::Show { id, json } => {
            show(client, cancel, ProductId::new(id.as_str()), *json, out).await
        }
        Command::Search { query, json } => search(client, cancel, query, *json, out).await,
        Command::Suggest(args) => suggest(client, cancel, args, out).await,
        Command::Open { path } => open(client, cancel, path, out).await,
    }
}

fn ready<T>(outcome: LoadOutcome, state: &PageState<T>) -> Result<&T, CliError> {
    if outcome == LoadOutcome::Cancelled {
        return Err(CliError::Cancelled);
    }

    match state {
        PageState::Ready(data) => Ok(data),
        PageState::Failed(failure) => Err(CliError::Page(failure.clone())),
        PageState::Loading => Err(CliError::Cancelled),
    }
}

async fn list(
    client: &CatalogClient,
    cancel: &CancellationToken,
    term: &str,
    sort: SortKey,
    json: bool,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    let mut page = HomePage::new();

    page.set_term(term);
    page.set_sort(sort);

    let outcome = page.load(client, cancel).await;
    let listing = ready(outcome, page.state())?;

    if json {
        let products: Vec<&Product> = listing.projection().collect();

        return write_json(out, &products);
    }

    writeln!(out, "{}", listing.sort().label())?;

    if listing.is_empty() {
        writeln!(out, "{EMPTY_MESSAGE}")?;
    } else {
        write_cards(out, &page.cards())?;
    }

    Ok(())
}

async fn show(
    client: &CatalogClient,
    cancel: &CancellationToken,
    id: ProductId,
    json: bool,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    let mut page = ProductDetailPage::new(id);

    let outcome = page.load(client, cancel).await;
    let product = ready(outcome, page.state())?;

    if json {
        return write_json(out, product);
    }

    write_product(
        out,
        product,
        page.image_url().unwrap_or(DETAIL_PLACEHOLDER_IMAGE),
    )?;

    Ok(())
}

async fn search(
    client: &CatalogClient,
    cancel: &CancellationToken,
    query: &str,
    json: bool,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    let mut page = SearchPage::new(query);

    let outcome = page.load(client, cancel).await;
    let products = ready(outcome, page.state())?;

    if json {
        return write_json(out, products);
    }

    writeln!(out, "{}", page.heading())?;

    match page.empty_message() {
        Some(message) => writeln!(out, "{message}")?,
        None => write_cards(out, &page.cards())?,
    }

    Ok(())
}

async fn suggest(
    client: &CatalogClient,
    cancel: &CancellationToken,
    args: &SuggestArgs,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    let mut page = SuggestProductPage::new();

    for (field, value) in args.fields() {
        page.set_field(field, value);
    }

    match page.submit(client, cancel).await {
        SubmitOutcome::Submitted(navigation) => {
            debug!(?navigation, "suggestion accepted");

            writeln!(out, "{SUBMITTED_MESSAGE}")?;

            Ok(())
        }
        SubmitOutcome::Ignored => Ok(()),
        SubmitOutcome::Cancelled => Err(CliError::Cancelled),
        SubmitOutcome::Rejected | SubmitOutcome::Failed => match page.status() {
            SubmissionStatus::Rejected(error) => {
                for violation in error.violations() {
                    writeln!(out, "  - {violation}")?;
                }

                Err(CliError::Rejected(error.clone()))
            }
            SubmissionStatus::Failed(failure) => Err(CliError::Page(failure.clone())),
            SubmissionStatus::Editing | SubmissionStatus::Submitted => Ok(()),
        },
    }
}

fn write_suggest_form(out: &mut impl io::Write) -> io::Result<()> {
    writeln!(out, "Suggest a Product")?;

    for field in DraftField::ALL {
        writeln!(out, "  {field}")?;
    }

    writeln!(out)?;
    writeln!(out, "Categories: {}", SUGGESTED_CATEGORIES.join(", "))
}

async fn open(
    client: &CatalogClient,
    cancel: &CancellationToken,
    path: &str,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    let route = match Route::resolve(path) {
        Resolution::Render(route) => route,
        Resolution::Redirect(route) => {
            debug!(from = path, to = %route, "following redirect");

            route
        }
    };

    match route {
        Route::Home => list(client, cancel, "", SortKey::default(), false, out).await,
        Route::Product(id) => show(client, cancel, id, false, out).await,
        Route::Search { query } => search(client, cancel, &query, false, out).await,
        Route::SuggestProduct => write_suggest_form(out).map_err(CliError::from),
        Route::NotFound => {
            writeln!(out, "{}", NotFoundPage::HEADING)?;
            writeln!(out, "{}", NotFoundPage::MESSAGE)?;

            Err(CliError::UnknownPath(path.to_owned()))
        }
    }
}
