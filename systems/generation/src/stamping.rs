use std::ops::Range;

use iveria_core::{Rect, TileGrid, TileKind, Vec2};

/// Resets `grid` to solid wall and carves every room into ground.
///
/// Rooms are carved in order, so later rooms overwrite earlier ones where
/// they overlap.
pub fn stamp_rooms(grid: &mut TileGrid, rooms: &[Rect]) {
    grid.fill(TileKind::Wall);
    for room in rooms {
        stamp_room(grid, room);
    }
}

/// Carves the cells covered by `room` into ground, skipping cells off the grid.
pub fn stamp_room(grid: &mut TileGrid, room: &Rect) {
    let columns = clamped_span(room.top_left().x(), room.bottom_right().x(), grid.width());
    let rows = clamped_span(room.top_left().y(), room.bottom_right().y(), grid.height());

    for y in rows {
        for x in columns.clone() {
            let _ = grid.set(Vec2::new(x, y), TileKind::Ground);
        }
    }
}

fn clamped_span(start: i32, end: i32, extent: u32) -> Range<i32> {
    let upper = i32::try_from(extent).unwrap_or(i32::MAX);
    start.max(0)..end.min(upper)
}
