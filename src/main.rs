use anyhow::Context;
use style_organizer::EditorConfig;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    style_organizer::run_gui(EditorConfig::default())
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("running editor window")
}
