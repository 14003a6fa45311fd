//! # Hero Preview
//!
//! Mounts the hero against a logging backdrop, runs it for a few seconds on
//! the frame driver and prints the resulting view tree.
//!
//! Usage: `hero_preview [overrides.toml] [--seconds N]`

use std::time::Duration;

use chrono::Utc;
use launchpad_hero::driver::{self, DEFAULT_FRAME_INTERVAL};
use launchpad_hero::{resolve, HeroConfig, HeroOverrides, HeroResult, HeroSection, LoggingBackdrop};
use launchpad_ui::{NodeKind, ViewTree};
use tokio::sync::oneshot;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_SECONDS: u64 = 3;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hero_preview=info,launchpad_hero=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("Usage: hero_preview [overrides.toml] [--seconds N]");
        return;
    }

    let seconds = args
        .iter()
        .position(|a| a == "--seconds")
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SECONDS);
    let overrides_path = args
        .iter()
        .skip(1)
        .enumerate()
        .find(|(i, a)| !a.starts_with("--") && args[*i] != "--seconds")
        .map(|(_, a)| a.clone());

    let config = match load_config(overrides_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("could not load overrides: {e}");
            std::process::exit(1);
        }
    };

    let mut backdrop = LoggingBackdrop::default();
    let section = HeroSection::mount(config, Utc::now(), &mut backdrop);

    let (stop, shutdown) = oneshot::channel();
    let frames = tokio::spawn(driver::run(section, DEFAULT_FRAME_INTERVAL, shutdown));

    tokio::time::sleep(Duration::from_secs(seconds)).await;
    let _ = stop.send(());

    let section = match frames.await {
        Ok(section) => section,
        Err(e) => {
            error!("frame driver failed: {e}");
            std::process::exit(1);
        }
    };

    info!(elapsed = ?section.elapsed(), "preview finished");
    print_tree(&section.view());
}

fn load_config(path: Option<&str>) -> HeroResult<HeroConfig> {
    let overrides = match path {
        Some(path) => {
            info!(path, "loading overrides");
            HeroOverrides::load(path)?
        }
        None => HeroOverrides::default(),
    };
    Ok(resolve(HeroConfig::default(), overrides))
}

fn print_tree(tree: &ViewTree) {
    println!();
    println!("┌─ VIEW TREE ──────────────────────────────────────────────────────┐");
    for id in tree.iter_dfs() {
        let Some(node) = tree.get(id) else { continue };

        let mut depth = 0;
        let mut cursor = tree.parent(id);
        while let Some(parent) = cursor {
            depth += 1;
            cursor = tree.parent(parent);
        }

        let what = match &node.kind {
            NodeKind::Container => "container".to_string(),
            NodeKind::Text(text) => format!("{text:?}"),
            NodeKind::Icon(name) => format!("icon:{name}"),
            NodeKind::Link { label, destination, .. } => format!("link {label:?} -> {destination}"),
            NodeKind::Layer(name) => format!("layer:{name}"),
        };
        let tag = node.tag.map(|t| format!(" [{t}]")).unwrap_or_default();
        println!("│ {:indent$}{what}{tag}  (opacity {:.2})", "", node.visual.opacity, indent = depth * 2);
    }
    println!("└──────────────────────────────────────────────────────────────────┘");
}
