//! Text dump of the world for terminal output.

use std::io;

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use iveria_core::{Event, Rgba, Tile, TileKind, Vec2};
use iveria_world::{query, World};

/// Renders the grid one glyph per cell, drawing the player on top.
pub(crate) fn render(world: &World) -> String {
    let width = usize::try_from(query::tile_grid(world).width()).unwrap_or(0);
    let mut out = String::with_capacity((width + 1) * rows(world).len());

    for row in rows(world) {
        out.extend(row.iter().map(|tile| tile.glyph));
        out.push('\n');
    }
    out
}

/// Encodes the grid with each glyph in its tile colour.
pub(crate) fn render_colored(world: &World) -> io::Result<Vec<u8>> {
    let mut out = Vec::new();
    for row in rows(world) {
        for tile in row {
            match rgba_to_color(tile.color) {
                Some(color) => queue!(out, SetForegroundColor(color), Print(tile.glyph))?,
                None => queue!(out, ResetColor, Print(tile.glyph))?,
            }
        }
        queue!(out, ResetColor, Print('\n'))?;
    }
    Ok(out)
}

fn rows(world: &World) -> Vec<Vec<Tile>> {
    let player = query::player(world);
    (0..)
        .zip(query::tile_grid(world).rows())
        .map(|(row, cells)| {
            (0..)
                .zip(cells)
                .map(|(column, kind)| {
                    if Vec2::new(column, row) == player {
                        TileKind::Player.tile()
                    } else {
                        kind.tile()
                    }
                })
                .collect()
        })
        .collect()
}

fn rgba_to_color(color: Rgba) -> Option<Color> {
    (color.alpha() != 0).then(|| Color::Rgb {
        r: color.red(),
        g: color.green(),
        b: color.blue(),
    })
}

/// One-line summary of the session.
pub(crate) fn status_line(world: &World, events: &[Event]) -> String {
    let accepted = events
        .iter()
        .filter(|event| matches!(event, Event::PlayerMoved { .. }))
        .count();
    let rejected = events
        .iter()
        .filter(|event| matches!(event, Event::PlayerMoveRejected { .. }))
        .count();
    let player = query::player(world);

    match query::last_generation(world) {
        Some(summary) => format!(
            "seed={} rooms={} passes={} converged={} player=({}, {}) moves={}/{}",
            summary.seed(),
            summary.rooms(),
            summary.passes(),
            summary.converged(),
            player.x(),
            player.y(),
            accepted,
            accepted + rejected,
        ),
        None => format!(
            "no map generated player=({}, {}) moves={}/{}",
            player.x(),
            player.y(),
            accepted,
            accepted + rejected,
        ),
    }
}
