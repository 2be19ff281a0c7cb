//! Transform propagation system.

use crate::ecs::components::transform::{GlobalTransform, Transform};

/// Write `Transform::to_matrix()` into every entity's `GlobalTransform`.
///
/// Scene objects are flat, so there is no parent chain to walk. Returns the
/// number of entities updated.
pub fn transform_system(world: &mut hecs::World) -> usize {
    let mut updated = 0;
    for (_, (transform, global)) in world.query_mut::<(&Transform, &mut GlobalTransform)>() {
        global.0 = transform.to_matrix();
        updated += 1;
    }
    updated
}
