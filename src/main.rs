// src/main.rs

use anyhow::Context;
use log::{info, warn};

use galleryhub::application::{list_galleries, refresh_galleries, FilterRequestDto, GalleryViewDto};
use galleryhub::application::state::AppState;
use galleryhub::config::EngineConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 1. CONFIGURATION
    let config = EngineConfig::load().context("loading configuration")?;

    // 2. APPLICATION STATE
    let state = AppState::build(config).context("initializing engine")?;

    // 3. INITIAL LOAD
    // An unavailable source is reported through the notice board below
    if let Ok(count) = refresh_galleries(&state).await {
        info!("{} galleries available", count);
    }

    // 4. RENDER
    let request = FilterRequestDto {
        category: std::env::args().nth(1),
        year: std::env::args().nth(2),
        ..Default::default()
    };
    print_view(&list_galleries(&state, &request));

    for notice in state.notices.drain() {
        warn!("{}: {}", notice.message, notice.details.unwrap_or_default());
    }

    Ok(())
}

fn print_view(view: &GalleryViewDto) {
    match view {
        GalleryViewDto::Grouped { groups, total } => {
            println!("{} galleries", total);
            for group in groups {
                println!("\n== {} ==", group.title);
                for card in &group.galleries {
                    println!("  [{}] {} ({}, {} files)", card.id, card.title, card.year, card.file_count);
                }
            }
        }
        GalleryViewDto::Flat { galleries } => {
            println!("{} galleries", galleries.len());
            for card in galleries {
                println!(
                    "  [{}] {} - {} ({}, {} files)",
                    card.id, card.title, card.category_name, card.year, card.file_count
                );
            }
        }
    }
}
