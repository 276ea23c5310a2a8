//! Headless adapter: play a scripted sequence and report the view.

use anyhow::{Context, Result, anyhow};
use strictly_timetravel::{Game, GameView, Position, SortOrder};
use tracing::{info, instrument};

/// Plays `moves`, optionally jumps, and renders the resulting view.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn run(moves: &[String], jump: Option<usize>, json: bool, sort: SortOrder) -> Result<String> {
    let positions = moves
        .iter()
        .map(|raw| {
            Position::from_label_or_number(raw).ok_or_else(|| anyhow!("Unknown cell `{}`", raw))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut game = Game::replay(&positions)?;
    if game.sort_order() != sort {
        game.toggle_sort();
    }
    if let Some(target) = jump {
        game.jump_to(target)?;
    }
    info!(position = game.position(), "Replay finished");

    let view = game.view();
    if json {
        serde_json::to_string_pretty(&view).context("Failed to serialize view")
    } else {
        Ok(render_text(&view))
    }
}

fn render_text(view: &GameView) -> String {
    let mut out = view.board().display();
    out.push_str("\n\n");
    out.push_str(&view.status_line());
    out.push_str("\n\n");
    out.push_str(&format!("History ({:?}):", view.sort()));
    for entry in view.moves() {
        let marker = if *entry.is_current() { '>' } else { ' ' };
        out.push_str(&format!("\n{} {}", marker, entry.label()));
    }
    out
}
