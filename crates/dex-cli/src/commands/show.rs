use dex_core::CoreError;

use crate::cli::{GlobalFlags, ShowArgs};
use crate::commands::shared::limit::apply_limit;
use crate::commands::shared::load::{load_entity_details, load_listing};
use crate::context::AppContext;
use crate::output::output;
use crate::views::EntityCard;

/// Handle `dex show <name>`.
pub async fn handle(args: &ShowArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    load_listing(&ctx.repository).await;
    let cards = detail_cards(&args.name, ctx, flags).await?;
    output(&cards, flags.format)
}

/// Load details for every entity named `name` and build their cards.
///
/// An entity whose detail load fails is still printed, summary-only.
async fn detail_cards(
    name: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<Vec<EntityCard>> {
    let mut handles = ctx
        .repository
        .find(name)
        .await
        .ok_or_else(|| CoreError::NotFound {
            entity_type: String::from("entity"),
            id: name.to_string(),
        })?;
    apply_limit(&mut handles, flags.limit)?;

    let mut cards = Vec::with_capacity(handles.len());
    for handle in &handles {
        load_entity_details(&ctx.repository, handle).await;
        cards.push(EntityCard::from(&*handle.read().await));
    }
    Ok(cards)
}
