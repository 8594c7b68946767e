//! Routes
//!
//! Route table for the storefront pages:
//!
//! | path                   | page                       |
//! |------------------------|----------------------------|
//! | `/`                    | redirect to `/home`        |
//! | `/home`                | product list               |
//! | `/product/{id}`        | product detail             |
//! | `/suggestproduct`      | product suggestion form    |
//! | `/search?query={term}` | search results             |
//! | anything else          | not found                  |

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    time::Duration,
};

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};
use smallvec::SmallVec;
use url::form_urlencoded;

use crate::products::ProductId;

/// Characters escaped when an id is written as a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// A page the storefront can render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Product list
    Home,

    /// Product detail
    Product(ProductId),

    /// Product suggestion form
    SuggestProduct,

    /// Search results for `query`
    Search {
        /// Search term, possibly blank
        query: String,
    },

    /// Catch-all
    NotFound,
}

/// Result of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Render the route at this path.
    Render(Route),

    /// Replace the current location with the route.
    Redirect(Route),
}

/// Navigation requested by a page in response to a user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Go to the route.
    Push(Route),

    /// Go back in history.
    Back,

    /// Go to the route once `delay` has elapsed.
    Delayed {
        /// Wait before navigating
        delay: Duration,

        /// Destination
        route: Route,
    },
}

impl Route {
    /// Resolve a path with optional query string, e.g. `/search?query=lamp`.
    pub fn resolve(target: &str) -> Resolution {
        let (path, query) = target.split_once('?').unwrap_or((target, ""));

        let segments: SmallVec<[&str; 4]> = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        let route = match segments.as_slice() {
            [] => return Resolution::Redirect(Route::Home),
            ["home"] => Route::Home,
            ["product", id] => {
                Route::Product(ProductId::new(percent_decode_str(id).decode_utf8_lossy()))
            }
            ["suggestproduct"] => Route::SuggestProduct,
            ["search"] => Route::Search {
                query: query_param(query, "query").unwrap_or_default(),
            },
            _ => Route::NotFound,
        };

        Resolution::Render(route)
    }

    /// Search route for a user-entered term, `None` when the term is blank.
    pub fn search(term: &str) -> Option<Route> {
        let term = term.trim();

        (!term.is_empty()).then(|| Route::Search {
            query: term.to_string(),
        })
    }
}

fn query_param(query: &str, name: &str) -> Option<String> {
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Route::Home => f.write_str("/home"),
            Route::Product(id) => {
                write!(f, "/product/{}", utf8_percent_encode(id.as_str(), PATH_SEGMENT))
            }
            Route::SuggestProduct => f.write_str("/suggestproduct"),
            Route::Search { query } => {
                let encoded = form_urlencoded::Serializer::new(String::new())
                    .append_pair("query", query)
                    .finish();

                write!(f, "/search?{encoded}")
            }
            Route::NotFound => f.write_str("/notfound"),
        }
    }
}
