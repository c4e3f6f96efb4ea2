/// Particle morph shader material
use bevy::color::ColorToComponents;
use bevy::pbr::{MaterialPipeline, MaterialPipelineKey};
use bevy::render::mesh::MeshVertexBufferLayoutRef;
use bevy::render::render_resource::{
    RenderPipelineDescriptor, ShaderType, SpecializedMeshPipelineError,
};
use bevy::{
    prelude::*,
    reflect::TypePath,
    render::render_resource::{AsBindGroup, ShaderRef},
};

use constants::path::PARTICLE_SHADER_PATH;

use crate::engine::mesh::particle_mesh::{ATTRIBUTE_PARTICLE_SIZE, ATTRIBUTE_POSITION_TARGET};
use crate::engine::parameters::ParticleParameters;

/// Uniform block mirrored by `ParticleUniforms` in `particles.wgsl`.
#[derive(Debug, Clone, Copy, ShaderType)]
#[repr(C)]
pub struct ParticleUniforms {
    pub color_a: Vec4,
    pub color_b: Vec4,
    pub resolution: Vec2,
    pub size: f32,
    pub progress: f32,
}

impl From<&ParticleParameters> for ParticleUniforms {
    fn from(params: &ParticleParameters) -> Self {
        Self {
            color_a: LinearRgba::from(params.color_a).to_vec4(),
            color_b: LinearRgba::from(params.color_b).to_vec4(),
            resolution: params.resolution,
            size: params.size,
            progress: params.progress,
        }
    }
}

/// Additive, depth-write-free particle material.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct ParticleMaterial {
    #[uniform(0)]
    pub uniforms: ParticleUniforms,
}

impl Material for ParticleMaterial {
    fn vertex_shader() -> ShaderRef {
        PARTICLE_SHADER_PATH.into()
    }

    fn fragment_shader() -> ShaderRef {
        PARTICLE_SHADER_PATH.into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Add
    }

    fn specialize(
        _pipeline: &MaterialPipeline<Self>,
        descriptor: &mut RenderPipelineDescriptor,
        layout: &MeshVertexBufferLayoutRef,
        _key: MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        let vertex_layout = layout.0.get_layout(&[
            Mesh::ATTRIBUTE_POSITION.at_shader_location(0),
            Mesh::ATTRIBUTE_UV_0.at_shader_location(1),
            ATTRIBUTE_POSITION_TARGET.at_shader_location(2),
            ATTRIBUTE_PARTICLE_SIZE.at_shader_location(3),
        ])?;
        descriptor.vertex.buffers = vec![vertex_layout];
        descriptor.primitive.cull_mode = None;

        if let Some(depth_stencil) = descriptor.depth_stencil.as_mut() {
            depth_stencil.depth_write_enabled = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniforms_carry_linear_colours() {
        let params = ParticleParameters {
            color_a: Srgba::rgb(1.0, 0.0, 0.0),
            color_b: Srgba::rgb(0.5, 0.5, 0.5),
            resolution: Vec2::new(1600.0, 900.0),
            size: 0.08,
            progress: -2.0,
        };

        let uniforms = ParticleUniforms::from(&params);

        assert_eq!(uniforms.color_a, Vec4::new(1.0, 0.0, 0.0, 1.0));
        // sRGB mid grey is darker in linear space.
        assert!(uniforms.color_b.x < 0.25);
        assert_eq!(uniforms.resolution, Vec2::new(1600.0, 900.0));
        assert_eq!(uniforms.progress, -2.0);
    }

    #[test]
    fn blending_is_additive() {
        let material = ParticleMaterial {
            uniforms: ParticleUniforms::from(&ParticleParameters::default()),
        };
        assert_eq!(material.alpha_mode(), AlphaMode::Add);

        // The add pipeline only sums colours when the fragment alpha is zero.
        let source = include_str!("../../assets/shaders/particles.wgsl");
        assert!(source.contains("return vec4<f32>(in.color * alpha, 0.0);"));
    }
}
