//! Parser options for article views.

use parser_migration_application::{ParsoidOracle, QueryParams};
use parser_migration_domain::{PageIdentity, RenderOptions, UserIdentity};
use tracing::debug;

/// Switches an article view's parser options to Parsoid when the oracle
/// says so.
#[derive(Clone)]
pub struct ArticleParserOptionsHook {
    oracle: ParsoidOracle,
}

impl ArticleParserOptionsHook {
    pub fn new(oracle: ParsoidOracle) -> Self {
        Self { oracle }
    }

    /// Options to render this view with. `options` is returned unchanged
    /// unless Parsoid is selected.
    pub fn on_article_parser_options(
        &self,
        user: &UserIdentity,
        request: &dyn QueryParams,
        page: &PageIdentity,
        options: RenderOptions,
    ) -> RenderOptions {
        if self.oracle.should_use_parsoid(user, request, page) {
            debug!("Article view of {} uses Parsoid", page);
            options.with_parsoid()
        } else {
            options
        }
    }
}
