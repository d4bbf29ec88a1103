use iveria_core::{ConfigError, GenerationConfig, Rect, Vec2};
use rand::Rng;

/// Draws the candidate rooms for a generation pass.
///
/// Rooms start clustered inside the configured placement band and are
/// expected to overlap heavily until [`crate::separate_rooms`] runs.
pub fn seed_rooms<R>(config: &GenerationConfig, rng: &mut R) -> Result<Vec<Rect>, ConfigError>
where
    R: Rng + ?Sized,
{
    config.validate()?;

    let count = rng.gen_range(config.room_count.clone());
    let (column_origin, column_span) = config.placement.along(config.width);
    let (row_origin, row_span) = config.placement.along(config.height);

    let rooms = (0..count)
        .map(|_| {
            let x = column_origin + rng.gen_range(0..column_span);
            let y = row_origin + rng.gen_range(0..row_span);
            let width = rng.gen_range(config.room_size.clone()) + config.width_bias;
            let height = rng.gen_range(config.room_size.clone());
            Rect::new(
                Vec2::new(to_coordinate(x), to_coordinate(y)),
                Vec2::new(width, height),
            )
        })
        .collect();

    Ok(rooms)
}

fn to_coordinate(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
