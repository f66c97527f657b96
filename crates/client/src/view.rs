//! Plain-text dump of the plane around the camera.

use std::fmt::Write;

use game_core::{EntityRecord, Position, TerrainKind, World};

fn terrain_glyph(terrain: Option<TerrainKind>) -> char {
    match terrain {
        Some(TerrainKind::Floor) => '.',
        Some(TerrainKind::Space) | None => ' ',
        Some(TerrainKind::Wall) => '#',
        Some(TerrainKind::ReinforcedWall) => '=',
        Some(TerrainKind::Hull) => 'X',
    }
}

/// Draw priority: actors over obstacles over everything else.
fn layer(record: &EntityRecord) -> u8 {
    if record.actor.is_some() {
        2
    } else if record.is_blocking() {
        1
    } else {
        0
    }
}

/// Renders a `(2r+1)`-square window centred on the camera, followed by a
/// status line.
pub fn render(world: &World, radius: u32) -> String {
    let camera = world.camera;
    let radius = radius as i32;
    let mut out = String::new();

    for y in camera.y - radius..=camera.y + radius {
        for x in camera.x - radius..=camera.x + radius {
            let position = Position::new(x, y, camera.z);
            let glyph = world
                .entities
                .at(position)
                .filter_map(|(_, record)| record.glyph.map(|glyph| (layer(record), glyph)))
                .max_by_key(|(layer, _)| *layer)
                .map(|(_, glyph)| glyph)
                .unwrap_or_else(|| terrain_glyph(world.grid.terrain(position)));
            out.push(glyph);
        }
        out.push('\n');
    }

    let name = world
        .controlled()
        .and_then(|id| world.entities.get(id))
        .map_or("nobody", EntityRecord::display_name);
    let _ = writeln!(out, "[t={}] controlling {}", world.clock(), name);
    out
}
