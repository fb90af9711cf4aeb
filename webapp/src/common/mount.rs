use anyhow::Context;

// the renderer needs its anchor element before launch, there is nothing to
// fall back to without it
pub fn check_mount_anchor(mount_id: &str) -> anyhow::Result<()> {
    let document = web_sys::window()
        .context("no window object")?
        .document()
        .context("no document in window")?;

    document
        .get_element_by_id(mount_id)
        .with_context(|| format!("mount anchor #{mount_id} is missing from the page"))?;

    Ok(())
}
