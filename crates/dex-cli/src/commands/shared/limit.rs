/// Truncate `items` to the global `--limit`, if one was given.
pub fn apply_limit<T>(items: &mut Vec<T>, limit: Option<u32>) -> anyhow::Result<()> {
    if let Some(limit) = limit {
        items.truncate(usize::try_from(limit)?);
    }
    Ok(())
}
