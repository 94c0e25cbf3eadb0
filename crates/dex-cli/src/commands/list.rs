use crate::cli::GlobalFlags;
use crate::commands::shared::limit::apply_limit;
use crate::commands::shared::load::load_listing;
use crate::context::AppContext;
use crate::output::output;
use crate::views::EntityRow;

/// Handle `dex list`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rows = collect(ctx, flags).await?;
    output(&rows, flags.format)
}

async fn collect(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<Vec<EntityRow>> {
    load_listing(&ctx.repository).await;
    let mut rows = ctx
        .repository
        .snapshot()
        .await
        .iter()
        .map(EntityRow::from)
        .collect::<Vec<_>>();
    apply_limit(&mut rows, flags.limit)?;
    Ok(rows)
}
