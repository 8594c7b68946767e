//! Not Found Page

use crate::routes::{Navigation, Route};

/// Catch-all page for unknown paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotFoundPage;

impl NotFoundPage {
    /// Page heading.
    pub const HEADING: &'static str = "Page not found";

    /// Explanatory copy.
    pub const MESSAGE: &'static str = "The page you are looking for does not exist or has been moved.";

    /// The page's only action.
    pub fn home(self) -> Navigation {
        Navigation::Push(Route::Home)
    }
}
