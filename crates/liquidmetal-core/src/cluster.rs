//! Cluster construction and the per-frame update.
//!
//! A cluster is the full set of placed instances for one geometry variant.
//! It is built whole and replaced whole: changing the variant, count or
//! seed discards the cluster and builds a fresh one, never diffs it.

use thiserror::Error;

use crate::layout::{ring_layout, Placement};
use crate::mesh::MeshData;
use crate::mode::ShapeVariant;
use crate::shapes::deform::{self, MorphTargets};
use crate::shapes::motion::{self, Transform};

pub const MIN_COUNT: usize = 3;
pub const MAX_COUNT: usize = 15;

/// Construction precondition violations. Nothing else in the core fails.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("instance count {count} outside {MIN_COUNT}..={MAX_COUNT}")]
    CountOutOfRange { count: usize },
}

/// One placed, animated copy of the shape.
#[derive(Clone, Debug)]
pub struct Instance {
    /// Stable for the instance's lifetime; sole source of its phase offset
    pub index: usize,
    /// Initial ring placement; `placement.scale` feeds the scale pulse
    pub placement: Placement,
    pub transform: Transform,
    /// Live morph-target weights, non-zero only for MorphingPoly
    pub morph: [f32; 2],
}

/// Base geometry ownership: one mesh for everyone, or one per instance.
///
/// FluidChunks deformation is keyed by instance index, so each chunk owns
/// its own vertices; the other variants share a single mesh. All meshes of
/// a cluster share one triangulation either way.
#[derive(Debug)]
pub enum ClusterMesh {
    Shared(MeshData),
    PerInstance(Vec<MeshData>),
}

impl ClusterMesh {
    pub fn mesh_for(&self, index: usize) -> &MeshData {
        match self {
            ClusterMesh::Shared(mesh) => mesh,
            ClusterMesh::PerInstance(meshes) => &meshes[index],
        }
    }

    /// Number of distinct meshes backing the cluster.
    pub fn mesh_count(&self) -> usize {
        match self {
            ClusterMesh::Shared(_) => 1,
            ClusterMesh::PerInstance(meshes) => meshes.len(),
        }
    }
}

#[derive(Debug)]
pub struct Cluster {
    variant: ShapeVariant,
    seed: u32,
    instances: Vec<Instance>,
    mesh: ClusterMesh,
    morph_targets: Option<MorphTargets>,
    group_rotation_y: f32,
}

impl Cluster {
    /// Build `count` instances of `variant` with their base geometry and
    /// initial ring layout.
    ///
    /// The only precondition is the count range; the material lives with
    /// the composition layer and cannot be absent by construction.
    pub fn build(variant: ShapeVariant, count: usize, seed: u32) -> Result<Self, BuildError> {
        if !(MIN_COUNT..=MAX_COUNT).contains(&count) {
            return Err(BuildError::CountOutOfRange { count });
        }

        let (mesh, morph_targets) = match variant {
            ShapeVariant::Metaballs => {
                // Undeformed spheres; the motion model does all the work
                (ClusterMesh::Shared(MeshData::uv_sphere(1.0, 32, 32)), None)
            }
            ShapeVariant::Teardrops => {
                let mut base = MeshData::uv_sphere(1.0, 32, 32);
                deform::teardrop(&mut base);
                (ClusterMesh::Shared(base), None)
            }
            ShapeVariant::FluidChunks => {
                let meshes = (0..count)
                    .map(|i| {
                        let mut mesh = MeshData::uv_sphere(1.0, 24, 24);
                        deform::fluid_chunk(&mut mesh, i);
                        mesh
                    })
                    .collect();
                (ClusterMesh::PerInstance(meshes), None)
            }
            ShapeVariant::MorphingPoly => {
                let base = MeshData::uv_sphere(1.0, 16, 16);
                let targets = deform::morph_targets(&base);
                (ClusterMesh::Shared(base), Some(targets))
            }
        };

        let instances = ring_layout(variant, count, seed)
            .into_iter()
            .enumerate()
            .map(|(index, placement)| Instance {
                index,
                placement,
                transform: Transform {
                    position: placement.position,
                    scale: placement.scale,
                    ..Transform::default()
                },
                morph: [0.0, 0.0],
            })
            .collect();

        log::debug!(
            "built {} cluster: {count} instances, seed {seed}",
            variant.name()
        );

        Ok(Self {
            variant,
            seed,
            instances,
            mesh,
            morph_targets,
            group_rotation_y: 0.0,
        })
    }

    /// Update every instance's transform in place for simulation time
    /// `time` (seconds). Never fails; pure in `time`.
    pub fn advance(&mut self, time: f32) {
        self.group_rotation_y = time * motion::group_spin(self.variant);
        let is_morph = self.variant == ShapeVariant::MorphingPoly;

        for instance in &mut self.instances {
            instance.transform = motion::instance_transform(
                self.variant,
                time,
                instance.index,
                instance.placement.scale,
            );
            if is_morph {
                instance.morph = motion::morph_weights(time, instance.index);
            }
        }
    }

    pub fn variant(&self) -> ShapeVariant {
        self.variant
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    pub fn mesh(&self) -> &ClusterMesh {
        &self.mesh
    }

    pub fn mesh_for(&self, index: usize) -> &MeshData {
        self.mesh.mesh_for(index)
    }

    /// Present only for MorphingPoly clusters.
    pub fn morph_targets(&self) -> Option<&MorphTargets> {
        self.morph_targets.as_ref()
    }

    /// Y rotation of the enclosing group, applied on top of per-instance
    /// transforms by the renderer.
    pub fn group_rotation_y(&self) -> f32 {
        self.group_rotation_y
    }
}
