// ABOUTME: Upsert orchestrator: resolve-or-create module, upsert page, link into module
// ABOUTME: Short-circuits on first failure with no rollback; re-runs converge

use crate::api::CanvasClient;
use crate::format::Formatter;
use crate::lookup;
use crate::transform::transform;
use crate::Result;

#[derive(Debug, Clone)]
pub struct PublishRequest {
    pub module_name: String,
    pub page_title: String,
    /// Final markup body. Callers go through [`publish_document`] to get
    /// transformation and optional AI formatting applied.
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleAction {
    Found,
    Created,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    Created,
    Updated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkAction {
    Created,
    AlreadyLinked,
}

/// What one publish run did at each step. Callers inspecting a partial
/// failure get the step name from the error; a success gets this record.
#[derive(Debug, Clone)]
pub struct PublishOutcome {
    pub module_id: u64,
    pub module_action: ModuleAction,
    /// Canonical slug assigned by Canvas.
    pub page_url: String,
    pub page_action: PageAction,
    pub link_action: LinkAction,
}

/// Run the three-step pipeline. Each step looks up before writing, so a
/// re-run after a partial failure reuses whatever the earlier run created
/// instead of duplicating it. There is deliberately no rollback: a module
/// created here stays if a later step fails.
pub fn publish(client: &CanvasClient, request: &PublishRequest) -> Result<PublishOutcome> {
    // Step 1: resolve-or-create module by case-insensitive name
    let (module_id, module_action) = match lookup::find_module(client, &request.module_name)? {
        Some(module) => (module.id, ModuleAction::Found),
        None => {
            let created = client.create_module(&request.module_name)?;
            (created.id, ModuleAction::Created)
        }
    };

    // Step 2: resolve-or-update-or-create page by slug
    let (page_url, page_action) = match lookup::find_page(client, &request.page_title)? {
        Some(existing) => {
            let updated = client.update_page(&existing.url, &request.body)?;
            (updated.url, PageAction::Updated)
        }
        None => {
            let created = client.create_page(&request.page_title, &request.body)?;
            (created.url, PageAction::Created)
        }
    };

    // Step 3: link the page into the module unless already linked
    let link_action = match lookup::find_module_item(client, module_id, &page_url)? {
        Some(_) => LinkAction::AlreadyLinked,
        None => {
            client.create_module_item(module_id, &request.page_title, &page_url)?;
            LinkAction::Created
        }
    };

    Ok(PublishOutcome {
        module_id,
        module_action,
        page_url,
        page_action,
        link_action,
    })
}

/// Full pipeline from raw extracted text: transform placeholder tokens,
/// optionally pass through the AI formatter, transform again as a
/// normalization safety net (idempotent, so harmless), then upsert.
/// A formatting failure aborts before any remote write happens.
pub fn publish_document(
    client: &CanvasClient,
    formatter: Option<&Formatter>,
    module_name: &str,
    page_title: &str,
    raw_text: &str,
) -> Result<PublishOutcome> {
    let markup = transform(raw_text);

    let body = match formatter {
        Some(formatter) => transform(&formatter.format(module_name, page_title, &markup)?),
        None => markup,
    };

    publish(
        client,
        &PublishRequest {
            module_name: module_name.to_string(),
            page_title: page_title.to_string(),
            body,
        },
    )
}
