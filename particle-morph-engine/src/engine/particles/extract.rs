use bevy::gltf::{Gltf, GltfMesh};
use bevy::prelude::*;
use bevy::render::mesh::VertexAttributeValues;

use crate::engine::error::ParticleError;

/// Collect the raw vertex positions of every mesh in a loaded glTF, in document order.
///
/// Primitives of the same mesh are concatenated. Node transforms are ignored; the
/// particle entity carries its own transform.
pub fn extract_mesh_positions(
    gltf: &Gltf,
    gltf_meshes: &Assets<GltfMesh>,
    meshes: &Assets<Mesh>,
) -> Result<Vec<Vec<[f32; 3]>>, ParticleError> {
    if gltf.meshes.is_empty() {
        return Err(ParticleError::EmptyModel);
    }

    gltf.meshes
        .iter()
        .map(|handle| {
            let gltf_mesh = gltf_meshes
                .get(handle)
                .ok_or_else(|| ParticleError::MissingAsset(format!("{handle:?}")))?;
            let primitives = gltf_mesh
                .primitives
                .iter()
                .map(|primitive| meshes.get(&primitive.mesh));
            concat_positions(&gltf_mesh.name, primitives)
        })
        .collect()
}

/// Positions of a mesh's primitives back to back. `None` marks a primitive whose mesh
/// asset is gone.
fn concat_positions<'a>(
    name: &str,
    primitives: impl IntoIterator<Item = Option<&'a Mesh>>,
) -> Result<Vec<[f32; 3]>, ParticleError> {
    let mut positions = Vec::new();
    for (index, mesh) in primitives.into_iter().enumerate() {
        let mesh = mesh
            .ok_or_else(|| ParticleError::MissingAsset(format!("{name} primitive {index}")))?;
        positions.extend(mesh_positions(mesh, name)?);
    }
    Ok(positions)
}

/// Read the `POSITION` attribute of a single mesh.
pub fn mesh_positions(mesh: &Mesh, name: &str) -> Result<Vec<[f32; 3]>, ParticleError> {
    mesh.attribute(Mesh::ATTRIBUTE_POSITION)
        .and_then(VertexAttributeValues::as_float3)
        .map(<[[f32; 3]]>::to_vec)
        .ok_or_else(|| ParticleError::MissingPositions {
            mesh: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::asset::RenderAssetUsages;
    use bevy::render::mesh::PrimitiveTopology;

    #[test]
    fn reads_float3_positions() {
        let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::MAIN_WORLD);
        let source = vec![[0.0, 1.0, 2.0], [3.0, 4.0, 5.0], [6.0, 7.0, 8.0]];
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, source.clone());

        assert_eq!(mesh_positions(&mesh, "statue").unwrap(), source);
    }

    #[test]
    fn mesh_without_positions_is_reported_by_name() {
        let mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::MAIN_WORLD);

        assert_eq!(
            mesh_positions(&mesh, "bust").unwrap_err(),
            ParticleError::MissingPositions {
                mesh: "bust".to_string()
            }
        );
    }

    fn mesh_with(positions: Vec<[f32; 3]>) -> Mesh {
        let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::MAIN_WORLD);
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
        mesh
    }

    #[test]
    fn primitives_are_concatenated_in_order() {
        let first = mesh_with(vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]]);
        let second = mesh_with(vec![[2.0, 0.0, 0.0]]);

        let positions = concat_positions("statue", [Some(&first), Some(&second)]).unwrap();

        assert_eq!(positions, vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]]);
    }

    #[test]
    fn one_bad_primitive_fails_the_whole_mesh() {
        let good = mesh_with(vec![[0.0, 0.0, 0.0]]);
        let bare = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::MAIN_WORLD);

        assert_eq!(
            concat_positions("bust", [Some(&good), Some(&bare)]).unwrap_err(),
            ParticleError::MissingPositions {
                mesh: "bust".to_string()
            }
        );
        assert_eq!(
            concat_positions("bust", [Some(&good), None]).unwrap_err(),
            ParticleError::MissingAsset("bust primitive 1".to_string())
        );
    }
}
