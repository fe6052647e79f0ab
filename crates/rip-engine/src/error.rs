//! Engine errors

use rip_css::CssError;
use rip_html::HtmlError;

/// Errors that abort a build unit
#[derive(Debug, thiserror::Error)]
pub enum RipError {
    #[error(transparent)]
    Html(#[from] HtmlError),

    #[error("Failed to parse stylesheet {identifier}: {source}")]
    Css {
        identifier: String,
        #[source]
        source: CssError,
    },

    #[error("Failed to minify CSS bundle: {0}")]
    Minify(#[source] CssError),

    /// A class selector survived pruning although no document uses it.
    /// Always a bug in the eliminator, never bad input.
    #[error("internal error: class selector `.{class}` survived dead-rule elimination")]
    InvariantViolation { class: String },
}
