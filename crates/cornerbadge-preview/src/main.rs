//! Renders one badge from a style file to a PNG.

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use cornerbadge_engine::coords::{Vec2, Viewport};
use cornerbadge_engine::logging::{LoggingConfig, init_logging};
use cornerbadge_engine::render::{Pixmap, RenderCtx, RenderTarget, Renderer};
use cornerbadge_ui::prelude::*;
use image::RgbaImage;

#[derive(Parser)]
#[command(name = "cornerbadge-preview", version, about = "Render a corner badge from a style file to a PNG")]
struct Args {
    /// Style file holding the badge definition.
    #[arg(value_name = "STYLE")]
    style: PathBuf,

    /// Name of the `badge` block to render.
    #[arg(value_name = "BADGE")]
    badge: String,

    /// TrueType / OpenType font used for the label.
    #[arg(value_name = "FONT")]
    font: PathBuf,

    /// Output PNG path.
    #[arg(value_name = "OUT")]
    out: PathBuf,

    /// Viewport size as WIDTHxHEIGHT.
    #[arg(value_name = "WxH", default_value = "96x96", value_parser = parse_size)]
    size: (u32, u32),

    /// Label to apply after construction, replacing the style's `status_text`.
    #[arg(long)]
    text: Option<String>,

    /// Log filter in `env_logger` syntax (overrides RUST_LOG).
    #[arg(long = "log", value_name = "FILTER")]
    log: Option<String>,
}

fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got `{s}`"))?;
    let dim = |v: &str| v.trim().parse::<u32>().map_err(|e| format!("invalid dimension `{v}`: {e}"));
    let (w, h) = (dim(w)?, dim(h)?);
    if w == 0 || h == 0 {
        return Err(format!("size must be non-zero, got {w}x{h}"));
    }
    Ok((w, h))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(LoggingConfig { env_filter: args.log.clone(), ..LoggingConfig::default() });
    run(args)
}

fn run(args: Args) -> Result<()> {
    let src = std::fs::read_to_string(&args.style)
        .with_context(|| format!("failed to read style file {}", args.style.display()))?;
    let sheet = cornerbadge_style::parse_str(&src).with_context(|| format!("in {}", args.style.display()))?;
    let style = sheet
        .badge(&args.badge)
        .ok_or_else(|| anyhow!("no badge named `{}` in {}", args.badge, args.style.display()))?;
    let resources = Resources::from_sheet(&sheet);

    let mut ui = UiScene::new();
    let font_bytes = std::fs::read(&args.font).with_context(|| format!("failed to read font {}", args.font.display()))?;
    let font = ui.load_font(&font_bytes).with_context(|| format!("failed to load font {}", args.font.display()))?;

    let config = BadgeConfig::from_style(style, &resources)
        .with_context(|| format!("invalid badge `{}`", args.badge))?
        .font(font);
    log::info!("badge `{}`: gravity {}, text {:?}", args.badge, config.gravity, config.text);

    let mut badge = CornerBadge::new(config, &ui.layout_ctx());
    if let Some(text) = args.text.as_deref() {
        badge.set_text(Some(text), &ui.layout_ctx());
    }
    let mut root = Element::from(badge);

    let (width, height) = args.size;
    let viewport = Vec2::new(width as f32, height as f32);
    let items = ui.frame(&mut root, viewport).len();
    log::info!("recorded {} draw items for {}x{}", items, width, height);

    let mut pixmap = Pixmap::new(width, height);
    {
        let ctx = RenderCtx::new(&ui.font_system, Viewport::from(viewport));
        let mut target = RenderTarget::new(&mut pixmap);
        Renderer::new().render(&ctx, &mut target, &mut ui.draw_list);
    }

    let image = RgbaImage::from_raw(width, height, pixmap.to_rgba8())
        .ok_or_else(|| anyhow!("pixel buffer does not match {}x{}", width, height))?;
    image
        .save(&args.out)
        .with_context(|| format!("failed to write {}", args.out.display()))?;
    log::info!("wrote {}", args.out.display());
    Ok(())
}
