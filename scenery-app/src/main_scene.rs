//! Walled arena: a floor, four walls and a few obstacle boxes under a sun.

use anyhow::Result;
use glam::Vec3;
use scenery::{
    DirectionalLight, GameObject, MaterialHandle, Scene, SceneScript, ShadowSettings, Skybox,
};

use crate::level::{create_level_cube, create_level_material};

#[derive(Default)]
pub struct MainScene {
    floor_material: Option<MaterialHandle>,
    wall_material: Option<MaterialHandle>,
    box_material: Option<MaterialHandle>,
}

impl MainScene {
    pub fn new() -> Self {
        Self::default()
    }

    fn setup_materials(&mut self) {
        self.floor_material = Some(create_level_material(180, 180, 180)); // light gray
        self.wall_material = Some(create_level_material(140, 150, 160)); // blue-gray
        self.box_material = Some(create_level_material(200, 160, 100)); // warm tan
    }

    fn setup_level(&self, scene: &mut Scene) -> Result<()> {
        let (Some(floor), Some(wall), Some(boxes)) = (
            &self.floor_material,
            &self.wall_material,
            &self.box_material,
        ) else {
            anyhow::bail!("arena materials must be built before the level");
        };

        // 20x20 platform
        scene.add_object(create_level_cube(
            Vec3::new(0.0, -0.5, 0.0),
            Vec3::new(20.0, 1.0, 20.0),
            floor,
            "Floor",
        ));

        let walls = [
            ("WallNorth", Vec3::new(0.0, 1.0, 10.5), Vec3::new(20.0, 3.0, 1.0)),
            ("WallSouth", Vec3::new(0.0, 1.0, -10.5), Vec3::new(20.0, 3.0, 1.0)),
            ("WallEast", Vec3::new(10.5, 1.0, 0.0), Vec3::new(1.0, 3.0, 20.0)),
            ("WallWest", Vec3::new(-10.5, 1.0, 0.0), Vec3::new(1.0, 3.0, 20.0)),
        ];
        for (name, position, scale) in walls {
            scene.add_object(create_level_cube(position, scale, wall, name));
        }

        let obstacles = [
            ("Box1", Vec3::new(3.0, 0.5, 3.0), Vec3::new(1.0, 1.0, 1.0)),
            ("Box2", Vec3::new(-4.0, 0.5, -2.0), Vec3::new(1.5, 1.0, 1.5)),
            ("Box3", Vec3::new(6.0, 0.5, -5.0), Vec3::new(2.0, 1.0, 1.0)),
            ("Box4", Vec3::new(-2.0, 1.0, 5.0), Vec3::new(1.0, 2.0, 1.0)),
        ];
        for (name, position, scale) in obstacles {
            scene.add_object(create_level_cube(position, scale, boxes, name));
        }

        Ok(())
    }

    fn setup_skybox(&self, scene: &mut Scene) {
        scene.set_skybox(Skybox::new());
    }

    fn setup_lighting(&self, scene: &mut Scene) {
        let sun = DirectionalLight::new(1.8, [1.0, 0.98, 0.92], Vec3::new(-0.4, -0.8, -0.4))
            .with_shadow(ShadowSettings {
                cast_shadows: true,
                bias: 0.003,
                normal_bias: 0.04,
                light_size: 1.5,
                frustum_size: 20.0,
                distance: 30.0,
                near_plane: 0.1,
                far_plane: 70.0,
            });
        scene.add_object(GameObject::directional_light("Sun", sun));

        if let Some(lm) = scene.light_manager_mut() {
            lm.set_ambient_color(0.6, 0.65, 0.75);
            lm.set_ambient_intensity(0.25);
        }
    }
}

impl SceneScript for MainScene {
    fn setup(&mut self, scene: &mut Scene) -> Result<()> {
        self.setup_materials();
        self.setup_level(scene)?;
        self.setup_skybox(scene);
        Ok(())
    }

    fn on_initialized(&mut self, scene: &mut Scene) -> Result<()> {
        self.setup_lighting(scene);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> Scene {
        let mut scene = Scene::with_script("MainScene", MainScene::new());
        scene.initialize().unwrap();
        scene
    }

    #[test]
    fn test_object_count() {
        let scene = arena();
        // floor + 4 walls + 4 boxes + sun
        assert_eq!(scene.object_count(), 10);
        let tags: Vec<_> = scene
            .objects()
            .iter()
            .map(|&e| scene.tag(e).unwrap())
            .collect();
        assert_eq!(
            tags,
            [
                "Floor",
                "WallNorth",
                "WallSouth",
                "WallEast",
                "WallWest",
                "Box1",
                "Box2",
                "Box3",
                "Box4",
                "Sun"
            ]
        );
    }

    #[test]
    fn test_literal_transforms() {
        let scene = arena();
        let check = |tag: &str, position: Vec3, scale: Vec3| {
            let t = scene.transform(scene.find_by_tag(tag).unwrap()).unwrap();
            assert_eq!(t.position, position, "{tag} position");
            assert_eq!(t.scale, scale, "{tag} scale");
        };
        check("Floor", Vec3::new(0.0, -0.5, 0.0), Vec3::new(20.0, 1.0, 20.0));
        check("WallNorth", Vec3::new(0.0, 1.0, 10.5), Vec3::new(20.0, 3.0, 1.0));
        check("WallSouth", Vec3::new(0.0, 1.0, -10.5), Vec3::new(20.0, 3.0, 1.0));
        check("WallEast", Vec3::new(10.5, 1.0, 0.0), Vec3::new(1.0, 3.0, 20.0));
        check("WallWest", Vec3::new(-10.5, 1.0, 0.0), Vec3::new(1.0, 3.0, 20.0));
        check("Box1", Vec3::new(3.0, 0.5, 3.0), Vec3::new(1.0, 1.0, 1.0));
        check("Box2", Vec3::new(-4.0, 0.5, -2.0), Vec3::new(1.5, 1.0, 1.5));
        check("Box3", Vec3::new(6.0, 0.5, -5.0), Vec3::new(2.0, 1.0, 1.0));
        check("Box4", Vec3::new(-2.0, 1.0, 5.0), Vec3::new(1.0, 2.0, 1.0));
    }

    #[test]
    fn test_walls_share_one_material() {
        let scene = arena();
        let walls: Vec<_> = ["WallNorth", "WallSouth", "WallEast", "WallWest"]
            .iter()
            .map(|tag| scene.material(scene.find_by_tag(tag).unwrap()).unwrap())
            .collect();
        for wall in &walls[1..] {
            assert!(walls[0].ptr_eq(wall));
        }

        let floor = scene.material(scene.find_by_tag("Floor").unwrap()).unwrap();
        let box1 = scene.material(scene.find_by_tag("Box1").unwrap()).unwrap();
        assert!(!floor.ptr_eq(&walls[0]));
        assert!(!box1.ptr_eq(&walls[0]));
        assert_eq!(box1.diffuse_color(), [200.0 / 255.0, 160.0 / 255.0, 100.0 / 255.0]);
    }

    #[test]
    fn test_lighting_configured_after_base_init() {
        let scene = arena();
        let lm = scene.light_manager().unwrap();
        assert_eq!(lm.ambient().color, [0.6, 0.65, 0.75]);
        assert_eq!(lm.ambient().intensity, 0.25);

        let sun_entity = scene.find_by_tag("Sun").unwrap();
        assert_eq!(lm.lights(), &[sun_entity]);
        let sun = scene.light(sun_entity).unwrap();
        assert_eq!(sun.direction, Vec3::new(-0.4, -0.8, -0.4));
        assert_eq!(sun.intensity, 1.8);
        assert_eq!(sun.color, [1.0, 0.98, 0.92]);
        assert!(sun.casts_shadows());
        assert_eq!(
            sun.shadow,
            ShadowSettings {
                cast_shadows: true,
                bias: 0.003,
                normal_bias: 0.04,
                light_size: 1.5,
                frustum_size: 20.0,
                distance: 30.0,
                near_plane: 0.1,
                far_plane: 70.0,
            }
        );
    }

    #[test]
    fn test_lighting_before_base_init_is_noop() {
        let mut scene = Scene::new("Early");
        MainScene::new().setup_lighting(&mut scene);
        // The sun is added, but there is no light manager to configure yet.
        assert_eq!(scene.object_count(), 1);
        assert!(scene.light_manager().is_none());
    }

    #[test]
    fn test_level_requires_materials() {
        let mut scene = Scene::new("Bare");
        assert!(MainScene::new().setup_level(&mut scene).is_err());
        assert_eq!(scene.object_count(), 0);
    }

    #[test]
    fn test_extract() {
        let scene = arena();
        let frame = scene.extract();
        assert_eq!(frame.draws.len(), 9);
        assert_eq!(frame.shadow_casters().count(), 9);
        assert!(frame.shadow.is_some());
        assert!(frame.skybox.is_some());
        let bounds = frame.bounds().unwrap();
        assert_eq!(bounds.min, Vec3::new(-11.0, -1.0, -11.0));
        assert_eq!(bounds.max, Vec3::new(11.0, 2.5, 11.0));
    }
}
