//! A single white cube lit by a sun. Useful for checking materials.

use anyhow::Result;
use glam::Vec3;
use scenery::{DirectionalLight, GameObject, Scene, SceneScript};

use crate::level::create_sandbox_material;

#[derive(Default)]
pub struct SandboxScene;

impl SceneScript for SandboxScene {
    fn setup(&mut self, scene: &mut Scene) -> Result<()> {
        let mut cube = GameObject::create_cube(Vec3::ZERO);
        cube.set_tag("Cube");
        if let Some(mat) = cube.material_mut() {
            mat.set_material(create_sandbox_material());
        }
        scene.add_object(cube);
        Ok(())
    }

    fn on_initialized(&mut self, scene: &mut Scene) -> Result<()> {
        let sun = DirectionalLight::new(2.0, [1.0, 0.98, 0.95], Vec3::new(-0.4, -0.8, -0.4));
        scene.add_object(GameObject::directional_light("Sun", sun));

        if let Some(lm) = scene.light_manager_mut() {
            lm.set_ambient_color(0.15, 0.15, 0.2);
            lm.set_ambient_intensity(1.0);
        }
        Ok(())
    }
}
