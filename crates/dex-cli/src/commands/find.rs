use crate::cli::{FindArgs, GlobalFlags};
use crate::commands::shared::limit::apply_limit;
use crate::commands::shared::load::load_listing;
use crate::context::AppContext;
use crate::output::output;
use crate::views::{EntityRow, NotFound};

/// Handle `dex find <name>`.
pub async fn handle(args: &FindArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    load_listing(&ctx.repository).await;
    match matching_rows(&args.name, ctx, flags).await? {
        Some(rows) => output(&rows, flags.format),
        None => output(&NotFound::new(&args.name), flags.format),
    }
}

async fn matching_rows(
    name: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<Option<Vec<EntityRow>>> {
    let Some(handles) = ctx.repository.find(name).await else {
        return Ok(None);
    };

    let mut rows = Vec::with_capacity(handles.len());
    for handle in &handles {
        rows.push(EntityRow::from(&*handle.read().await));
    }
    apply_limit(&mut rows, flags.limit)?;
    Ok(Some(rows))
}
