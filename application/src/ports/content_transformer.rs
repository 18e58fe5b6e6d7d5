//! Content transformer port
//!
//! Applies the host's pre-save transform (signature expansion, `subst:`,
//! pipe tricks, ...) to content before previewing it.

use parser_migration_domain::{Content, PageIdentity, RenderOptions, UserIdentity};

/// Port for pre-save transforms.
pub trait ContentTransformer: Send + Sync {
    fn pre_save_transform(
        &self,
        content: &Content,
        page: &PageIdentity,
        user: &UserIdentity,
        options: &RenderOptions,
    ) -> Content;
}

/// Transformer that returns content unchanged.
pub struct IdentityTransform;

impl ContentTransformer for IdentityTransform {
    fn pre_save_transform(
        &self,
        content: &Content,
        _page: &PageIdentity,
        _user: &UserIdentity,
        _options: &RenderOptions,
    ) -> Content {
        content.clone()
    }
}
