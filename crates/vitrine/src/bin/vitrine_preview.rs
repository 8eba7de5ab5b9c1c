//! # VITRINE Preview
//!
//! Runs the whole page headless against a synthetic layout: scrolls from
//! top to bottom, switches the project filter, flips the language, copies
//! the email and logs what every effect did.
//!
//! ```text
//! RUST_LOG=vitrine=debug vitrine_preview --config crates/vitrine/config/vitrine.toml
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use parking_lot::Mutex;
use tracing_subscriber::EnvFilter;
use vitrine::content::Category;
use vitrine::{HostContext, Language, LanguageContext, Layout, MemoryClipboard, Page, ProjectFilter, SiteConfig, StaticLayout};
use vitrine_core::{HostEvent, VitrineResult};
use vitrine_fx::{RecordingSurface, Surface, Viewport};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Site configuration (TOML). Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Frames to simulate
    #[arg(short, long)]
    frames: Option<u32>,

    /// Initial language (es, en)
    #[arg(short, long)]
    lang: Option<Language>,

    /// Simulate a touch device
    #[arg(long)]
    touch: bool,
}

fn main() -> VitrineResult<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut config = match &cli.config {
        Some(path) => SiteConfig::load(path)?,
        None => SiteConfig::default(),
    };
    if let Some(frames) = cli.frames {
        config.preview.frames = frames;
    }
    if let Some(language) = cli.lang {
        config.preview.language = language;
    }
    config.preview.touch |= cli.touch;
    config.validate()?;

    let preview = config.preview.clone();
    let mut layout = StaticLayout::portfolio(preview.width, preview.height, ProjectFilter::All);
    let max_scroll = (layout.document_height() - preview.height).max(0.0);

    let recording = Arc::new(Mutex::new(RecordingSurface::new(preview.width, preview.height)));
    let surface: Arc<Mutex<dyn Surface>> = recording.clone();

    let mut page = Page::mount(
        config,
        HostContext {
            layout: &layout,
            surface: Some(surface),
            viewport: Viewport::new(preview.width, preview.height),
            touch_device: preview.touch,
        },
        LanguageContext::new(preview.language),
        0.0,
    );

    let mut clipboard = MemoryClipboard::new();
    let frames = preview.frames;
    let mut now = 0.0;
    for frame in 0..frames {
        now = f64::from(frame) / preview.fps;
        let scroll = (frame as f32 * preview.scroll_speed).min(max_scroll);
        page.push_event(HostEvent::Scroll { y: scroll });
        page.push_event(HostEvent::PointerMove {
            x: preview.width / 2.0,
            y: preview.height / 2.0,
        });

        if frame == frames / 2 {
            layout = StaticLayout::portfolio(preview.width, preview.height, ProjectFilter::Only(Category::Real));
            page.set_filter(ProjectFilter::Only(Category::Real), &layout, now);
            page.relayout(&layout);
        }
        if frame == frames * 3 / 4 {
            let language = page.toggle_language();
            tracing::info!("language switched to {}", language);
            page.copy_email(&mut clipboard, now);
        }

        page.frame(now);

        if preview.fps > 0.0 && frame % (preview.fps as u32).max(1) == 0 {
            if let Some(sections) = page.sections() {
                tracing::debug!(
                    "t={:.1}s scroll={:.0} typed={:?} navbar={}",
                    now,
                    scroll,
                    sections.hero.typed_text(),
                    sections.navbar.class_list()
                );
            }
        }
    }

    let revealed = layout
        .elements()
        .into_iter()
        .filter(|(element, _)| page.style(*element, now).is_some_and(|style| style.is_rest()))
        .count();
    tracing::info!("{} frames, {} elements at rest", frames, revealed);

    if let Some(sections) = page.sections() {
        let language = page.language();
        let metrics: Vec<String> = sections
            .about
            .metrics(language)
            .into_iter()
            .map(|(value, label)| format!("{label}: {value}"))
            .collect();
        tracing::info!("metrics: {}", metrics.join(", "));
        tracing::info!(
            "projects shown: {}, marquee offsets: {:?} / {:?}",
            sections.projects.visible().count(),
            sections.tech_stack.row_offset(0),
            sections.tech_stack.row_offset(1)
        );
        if let Some(particles) = sections.contact.particles() {
            tracing::info!("particles: {}", particles.network().lock().particles().len());
        }
        tracing::info!("copy button: {}", sections.contact.copy_label(language));
    }
    if let Some(buffer) = recording.lock().buffer() {
        tracing::info!(
            "last canvas frame: {} links, {} discs",
            buffer.line_count(),
            buffer.disc_count()
        );
    }
    if let Some(glow) = page.glow() {
        tracing::info!("cursor glow at ({:.0}, {:.0})", glow.position.x, glow.position.y);
    }

    page.unmount();
    tracing::info!("{} frame callbacks left after unmount", page.scheduler().pending());
    Ok(())
}
