use convo_header::adapters::{ChannelDispatcher, MemoryStore};
use convo_header::cli::{parse_args, usage, version_string, CliCommand};
use convo_header::feature_flags::FeatureFlags;
use convo_header::header::HeaderContainer;
use convo_header::models::ConversationIdKey;
use convo_header::ui;

use color_eyre::{eyre::WrapErr, Result};
use ratatui::{buffer::Buffer, layout::Rect};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match parse_args(std::env::args()) {
        CliCommand::Version => println!("{}", version_string()),
        CliCommand::Flags => print_flags(),
        CliCommand::Render {
            snapshot,
            conversation_id,
            info_panel_open,
            width,
        } => render_header(&snapshot, &conversation_id, info_panel_open, width)?,
        CliCommand::Usage(None) => println!("{}", usage()),
        CliCommand::Usage(Some(message)) => {
            eprintln!("Error: {}\n{}", message, usage());
            std::process::exit(2);
        }
    }
    Ok(())
}

/// Print every process-wide feature flag and its value.
fn print_flags() {
    for (name, on) in FeatureFlags::global().entries() {
        println!("{:<40} {}", name, on);
    }
}

/// Render one conversation's header from a snapshot and print it.
fn render_header(
    snapshot: &Path,
    conversation_id: &str,
    info_panel_open: bool,
    width: u16,
) -> Result<()> {
    let store = Arc::new(
        MemoryStore::from_file(snapshot)
            .wrap_err_with(|| format!("Failed to load snapshot {:?}", snapshot))?,
    );
    let (dispatcher, _actions) = ChannelDispatcher::channel();
    let container = HeaderContainer::new(store.clone(), store, Arc::new(dispatcher));

    let id = ConversationIdKey::new(conversation_id);
    let view = container.view(&id, info_panel_open, Arc::new(|| {}));
    tracing::info!(
        conversation_id = %id,
        variant = view.variant.name(),
        "rendering header"
    );

    let area = Rect::new(0, 0, width, 1);
    let mut buf = Buffer::empty(area);
    ui::render_to_buffer(&mut buf, area, &view);

    let line: String = buf.content().iter().map(|cell| cell.symbol()).collect();
    println!("{}", line.trim_end());
    Ok(())
}
