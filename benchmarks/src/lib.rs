//! Shared setup helpers for scenery benchmarks.
//!
//! ## Running
//!
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench scene
//!
//! Filter by group:
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench scene -- extract

use glam::Vec3;
use scenery::{
    DirectionalLight, GameObject, Material, MaterialHandle, Scene, SceneScript, ShadowSettings,
};

/// Grid of `n` cubes sharing `materials` round-robin, plus one shadowed sun.
pub struct CubeGrid {
    pub n: usize,
    pub materials: usize,
}

impl SceneScript for CubeGrid {
    fn setup(&mut self, scene: &mut Scene) -> anyhow::Result<()> {
        let handles: Vec<MaterialHandle> = (0..self.materials.max(1))
            .map(|i| {
                let mut mat = Material::new();
                let shade = (i * 37 % 256) as u8;
                mat.set_diffuse_color(shade, 255 - shade, 128);
                MaterialHandle::new(mat)
            })
            .collect();

        let cols = (self.n as f32).sqrt().ceil() as usize;
        for i in 0..self.n {
            let x = (i % cols) as f32 * 1.5;
            let z = (i / cols) as f32 * 1.5;
            let mut cube = GameObject::create_cube(Vec3::new(x, 0.5, z));
            cube.set_tag(format!("Cube{i}"));
            if let Some(mat) = cube.material_mut() {
                mat.set_material(handles[i % handles.len()].clone());
            }
            scene.add_object(cube);
        }
        Ok(())
    }

    fn on_initialized(&mut self, scene: &mut Scene) -> anyhow::Result<()> {
        let sun = DirectionalLight::white(1.5, Vec3::new(-0.4, -0.8, -0.4)).with_shadow(
            ShadowSettings {
                cast_shadows: true,
                ..Default::default()
            },
        );
        scene.add_object(GameObject::directional_light("Sun", sun));
        Ok(())
    }
}

/// Build and initialize a cube grid scene.
pub fn setup_grid_scene(n: usize, materials: usize) -> Scene {
    let mut scene = Scene::with_script("Grid", CubeGrid { n, materials });
    scene
        .initialize()
        .expect("grid scene initialization cannot fail");
    scene
}
