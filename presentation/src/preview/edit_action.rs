//! The `parsermigration-edit` action: an edit form whose preview shows both
//! renderers side by side.

use super::side_by_side::SideBySidePreview;
use crate::hooks::EDIT_ACTION;
use crate::request::LinkBuilder;
use parser_migration_application::{CompareError, PreviewSideBySideUseCase};
use parser_migration_domain::{Content, PageIdentity, RenderOptions, RenderedOutput, UserIdentity};
use tracing::info;

/// Style module loaded on the edit form
pub const EDIT_STYLES_MODULE: &str = "ext.parsermigration.edit";

/// Preview result handed back to the edit form.
#[derive(Debug, Clone, PartialEq)]
pub struct EditPreview {
    /// Side-by-side table markup
    pub html: String,
    /// Output the form uses for metadata (categories, modules, ...)
    pub parser_output: RenderedOutput,
}

/// Side-by-side edit action.
#[derive(Clone)]
pub struct EditAction {
    preview: PreviewSideBySideUseCase,
    layout: SideBySidePreview,
}

impl EditAction {
    pub const NAME: &'static str = EDIT_ACTION;

    /// Message key of the page subtitle
    pub const DESCRIPTION_MESSAGE: &'static str = "parsermigration-edit-subtitle";

    pub fn new(preview: PreviewSideBySideUseCase, layout: SideBySidePreview) -> Self {
        Self { preview, layout }
    }

    /// The form previews on open, so the comparison shows without a click.
    pub fn preview_on_open(&self) -> bool {
        true
    }

    /// Form target for `page`.
    pub fn action_url(links: &LinkBuilder, page: &PageIdentity) -> Option<String> {
        links.local_url(page, &[("action", Self::NAME)])
    }

    pub async fn preview(
        &self,
        content: &Content,
        page: &PageIdentity,
        options: &RenderOptions,
        user: &UserIdentity,
    ) -> Result<EditPreview, CompareError> {
        info!("Side-by-side preview of {} for {}", page, user);
        let outputs = self.preview.execute(content, page, options, user).await?;
        let html = self.layout.render(&outputs);
        Ok(EditPreview {
            html,
            parser_output: outputs.parsoid,
        })
    }
}
