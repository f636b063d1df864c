//! Card Flip Demo
//!
//! Headless run of a small card table driven by the action scheduler:
//! - Each card flips by squashing flat, toggling its face, and springing back
//! - Flips share a blocking group, so cards flip one after another
//! - A scripted keystroke fires once the last flip is done
//! - Meanwhile a fade runs in its own group, unaffected by the flips
//!
//! Run with: cargo run -p cadence_actions --example card_flip [config.toml]

use anyhow::Context;
use cadence_actions::{ActionId, ActionParams, ActionScheduler, Easing, SchedulerConfig};
use cadence_core::{Color, Entity, KeyCode, Shared, Vec3};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"
time_scale = 1.0
block_all = false
capacity = 16
"#;

const FLIP_GROUP: u32 = 1;
const FADE_GROUP: u32 = 2;
const FRAME_DT: f32 = 1.0 / 60.0;

/// Squash the card flat, swap its face, and restore its scale
///
/// Returns the handle of the final step.
fn flip_card(scheduler: &mut ActionScheduler, card: &Shared<Entity>, duration: f32) -> ActionId {
    let (start, show_face) = {
        let card = card.borrow();
        (card.scale, card.face_color != Color::WHITE)
    };
    let flat = Vec3::new(0.0, start.y * 1.2, start.z);
    let half = ActionParams::new(duration * 0.5)
        .group(FLIP_GROUP)
        .blocking(true)
        .easing(Easing::EaseOut);

    scheduler.scale_between(card, start, flat, half);
    scheduler.display_face(
        card,
        show_face,
        Color::BLUE,
        ActionParams::instant().group(FLIP_GROUP),
    );
    scheduler.scale_between(card, flat, start, half.easing(Easing::EaseIn))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => SchedulerConfig::load(Path::new(&path))
            .with_context(|| format!("Failed to load {path}"))?,
        None => SchedulerConfig::from_toml_str(DEFAULT_CONFIG)?,
    };
    let mut scheduler = ActionScheduler::with_config(&config)?;

    let hand: Vec<Shared<Entity>> = (0..3)
        .map(|i| {
            Entity::new()
                .with_position(Vec3::new(i as f32 * 2.0, 0.0, 0.0))
                .with_label()
                .into_shared()
        })
        .collect();

    let mut last_flip = None;
    for card in &hand {
        last_flip = Some(flip_card(&mut scheduler, card, 0.5));
    }

    scheduler.key_stroke(
        KeyCode::SPACE,
        |key| tracing::info!(%key, "all cards flipped"),
        ActionParams::instant().group(FLIP_GROUP),
    );

    if let Some(table) = hand.first() {
        scheduler.fade_to(table, 0.4, ActionParams::new(1.0).group(FADE_GROUP));
    }

    let mut frames = 0u32;
    while scheduler.has_active_actions() {
        let report = scheduler.tick(FRAME_DT);
        if let Some(id) = last_flip {
            if report.did_finish(id) {
                tracing::info!(frames, "last flip finished");
            }
        }

        frames += 1;
        if frames > 600 {
            anyhow::bail!("actions still running after {frames} frames");
        }
    }

    for (i, card) in hand.iter().enumerate() {
        let card = card.borrow();
        tracing::info!(
            card = i,
            face = ?card.face_color,
            scale = ?card.scale,
            opacity = card.opacity,
            "final state"
        );
    }

    Ok(())
}
