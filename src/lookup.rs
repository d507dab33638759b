// ABOUTME: Read-only existence queries against the Canvas course
// ABOUTME: A lookup failure is an error, never evidence of absence

use crate::api::CanvasClient;
use crate::model::{Module, ModuleItem, Page};
use crate::util::slugify;
use crate::Result;

/// Case-insensitive exact match over the full (paginated) module listing.
pub fn find_module(client: &CanvasClient, name: &str) -> Result<Option<Module>> {
    let target = name.trim().to_lowercase();

    Ok(client
        .list_modules()?
        .into_iter()
        .find(|module| module.name.trim().to_lowercase() == target))
}

/// Direct lookup by the slug computed from the title. The remote url on the
/// returned page is the authoritative identifier from then on.
pub fn find_page(client: &CanvasClient, title: &str) -> Result<Option<Page>> {
    client.get_page(&slugify(title))
}

/// Whether the module already links the page at `page_url`.
pub fn find_module_item(
    client: &CanvasClient,
    module_id: u64,
    page_url: &str,
) -> Result<Option<ModuleItem>> {
    Ok(client
        .list_module_items(module_id)?
        .into_iter()
        .find(|item| item.page_url.as_deref() == Some(page_url)))
}
