use std::f32::consts::FRAC_PI_4;

use vislab::{
    Light, Material, Mesh, MeshAnimator, MeshIn, MeshOut, Processor, Ray, RayIntersection, Vec3,
    VislabConfig, World, WorldTransform, run_processor,
};

const ROTATION_STEPS: usize = 8;

fn main() -> vislab::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => VislabConfig::load(path)?,
        None => VislabConfig::default(),
    };

    // Animator: sweep the rotation property over a cube entity
    let mut animator = MeshAnimator::from_settings(&config.animator)?;
    let info = animator.info();
    log::info!(
        "{} ({}) [{}]",
        info.display_name,
        info.class_identifier,
        info.category
    );

    let mut world = World::new();
    let cube = world.spawn((MeshIn(Mesh::cube()),));

    for step in 0..ROTATION_STEPS {
        animator.rotation.set(step as f32 * FRAC_PI_4)?;
        run_processor(&mut world, &animator);

        if let Ok(out) = world.get::<&MeshOut>(cube) {
            let origin = out.0.world_matrix().transform_point3(Vec3::ZERO);
            log::info!(
                "rotation {:.3} -> cube origin at ({:.3}, {:.3}, {:.3})",
                animator.rotation.get(),
                origin.x,
                origin.y,
                origin.z
            );
        }
    }

    // Phong: shade a row of hits on a +Z facing plane
    let material = config.material.build()?;
    let lights = if config.lights.is_empty() {
        vec![Light::uniform(Vec3::new(0.0, 0.0, 4.0), Vec3::ONE)]
    } else {
        config.lights
    };

    let eye = Vec3::new(0.0, 0.0, 6.0);
    for i in -2..=2 {
        let target = Vec3::new(i as f32, 0.0, 0.0);
        let ray = Ray::new(eye, target - eye);
        let hit = RayIntersection::at(ray, target, Vec3::Z);
        let color = material.shade_lights(&hit, &lights);
        log::info!(
            "hit x={:+} -> rgb ({:.4}, {:.4}, {:.4})",
            i,
            color.x,
            color.y,
            color.z
        );
    }

    Ok(())
}
