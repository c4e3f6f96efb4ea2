use bevy::prelude::*;

use crate::engine::assets::particle_assets::ParticleAssets;
use crate::engine::parameters::ParticleParameters;
use crate::engine::shaders::{ParticleMaterial, ParticleUniforms};

/// Copy the shader parameter set into the particle material when it changes.
/// Runs after every writer (panel, RPC, timeline, resize) in the frame.
pub fn sync_particle_uniforms(
    params: Res<ParticleParameters>,
    assets: Res<ParticleAssets>,
    mut materials: ResMut<Assets<ParticleMaterial>>,
) {
    if !params.is_changed() {
        return;
    }
    let Some(handle) = assets.material.as_ref() else {
        return;
    };
    if let Some(material) = materials.get_mut(handle) {
        material.uniforms = ParticleUniforms::from(params.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn parameter_changes_reach_the_material() {
        let mut world = World::new();
        let mut materials = Assets::<ParticleMaterial>::default();
        let handle = materials.add(ParticleMaterial {
            uniforms: ParticleUniforms::from(&ParticleParameters::default()),
        });
        world.insert_resource(materials);
        world.insert_resource(ParticleAssets {
            material: Some(handle.clone()),
            ..default()
        });
        world.insert_resource(ParticleParameters {
            progress: 0.75,
            size: 0.2,
            ..default()
        });

        world.run_system_once(sync_particle_uniforms).unwrap();

        let material = world.resource::<Assets<ParticleMaterial>>().get(&handle).unwrap();
        assert_eq!(material.uniforms.progress, 0.75);
        assert_eq!(material.uniforms.size, 0.2);
    }
}
