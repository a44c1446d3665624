//! Player domain: ground contact probe.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::player::{GameLayer, GroundContact, Player};

/// Cast a short ray downward from the character's feet. The hit result is
/// the grounded signal everything downstream reads this tick.
pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &Collider, &mut GroundContact), With<Player>>,
) {
    // Only walkable surfaces count as ground
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, collider, mut contact) in &mut query {
        let was_on_ground = contact.on_ground;

        let half_height = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.y,
            None => 24.0,
        };

        let ray_origin = transform.translation.truncate() - Vec2::new(0.0, half_height);
        let hit = spatial_query.cast_ray(ray_origin, Dir2::NEG_Y, 4.0, true, &ground_filter);

        contact.on_ground = hit.is_some();

        if contact.on_ground != was_on_ground {
            debug!("Ground contact: {} -> {}", was_on_ground, contact.on_ground);
        }
    }
}
