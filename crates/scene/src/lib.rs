//! Scene model: a character assembled from primitive parts, plus the ground.
//!
//! Parts are stored in a BTreeMap for deterministic iteration order. A part
//! may be parented to another part; world transforms are resolved by walking
//! parent chains against a caller-supplied root transform. The rig is static
//! after construction; only the root moves per tick.
//!
//! # Invariants
//! - A part's parent must exist before the part is added.
//! - Handles are allocated sequentially, so iteration in id order always
//!   visits parents before children.

use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};
use spindash_common::{Color, Transform};
use std::collections::BTreeMap;

/// A handle referencing a part within a rig.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PartId(pub u64);

/// Built-in primitive shapes the renderer knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Primitive {
    Sphere,
    Cube,
    Cone,
    Plane,
}

/// One primitive part of the scene: shape, color, local transform, and an
/// optional parent the local transform is relative to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub primitive: Primitive,
    pub color: Color,
    pub local: Transform,
    pub parent: Option<PartId>,
}

/// Errors from rig construction.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RigError {
    #[error("unknown parent part {0:?}")]
    UnknownParent(PartId),
}

/// A part's transform resolved into world space, ready for the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedPart {
    pub id: PartId,
    pub primitive: Primitive,
    pub color: Color,
    pub world: Transform,
}

/// A composite figure built from primitive parts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Rig {
    parts: BTreeMap<PartId, Part>,
    next_id: u64,
}

impl Rig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    pub fn get(&self, id: PartId) -> Option<&Part> {
        self.parts.get(&id)
    }

    pub fn parts(&self) -> &BTreeMap<PartId, Part> {
        &self.parts
    }

    /// Add a part, validating its parent handle. Returns the new handle.
    pub fn add_part(&mut self, part: Part) -> Result<PartId, RigError> {
        if let Some(parent) = part.parent {
            if !self.parts.contains_key(&parent) {
                return Err(RigError::UnknownParent(parent));
            }
        }
        let id = PartId(self.next_id);
        self.next_id += 1;
        self.parts.insert(id, part);
        Ok(id)
    }

    /// Resolve every part into world space against a root transform.
    ///
    /// Iteration in id order visits parents before children, so a single
    /// pass with a memo table handles arbitrary nesting depth.
    pub fn resolve(&self, root: Transform) -> Vec<ResolvedPart> {
        let mut worlds: BTreeMap<PartId, Transform> = BTreeMap::new();
        let mut out = Vec::with_capacity(self.parts.len());
        for (id, part) in &self.parts {
            let base = match part.parent {
                Some(parent) => worlds[&parent],
                None => root,
            };
            let world = base.mul(&part.local);
            worlds.insert(*id, world);
            out.push(ResolvedPart {
                id: *id,
                primitive: part.primitive,
                color: part.color,
                world,
            });
        }
        out
    }

    /// The demo character: a blue spiky figure assembled from spheres, cubes,
    /// and cones. Local offsets, scales, and colors follow the original scene
    /// layout (torso at the root origin, head one unit up, spikes swept back).
    pub fn hedgehog() -> Rig {
        let mut rig = Rig::new();

        let sphere = |color, position: Vec3, scale: Vec3| Part {
            primitive: Primitive::Sphere,
            color,
            local: Transform {
                position,
                rotation: Quat::IDENTITY,
                scale,
            },
            parent: None,
        };
        let cube = |color, position: Vec3, scale: Vec3| Part {
            primitive: Primitive::Cube,
            color,
            local: Transform {
                position,
                rotation: Quat::IDENTITY,
                scale,
            },
            parent: None,
        };

        // These adds cannot fail: every parent handle comes from a preceding
        // successful add.
        let add = |rig: &mut Rig, part| rig.add_part(part).expect("valid parent");

        // Torso and head
        add(
            &mut rig,
            sphere(Color::BLUE, Vec3::ZERO, Vec3::splat(0.8)),
        );
        let head = add(
            &mut rig,
            sphere(Color::BLUE, Vec3::new(0.0, 1.0, 0.0), Vec3::splat(1.0)),
        );

        // Arms and legs
        let limb = Vec3::new(0.2, 0.5, 0.2);
        add(&mut rig, cube(Color::BLUE, Vec3::new(-0.5, 0.5, 0.0), limb));
        add(&mut rig, cube(Color::BLUE, Vec3::new(0.5, 0.5, 0.0), limb));
        add(&mut rig, cube(Color::BLUE, Vec3::new(-0.3, -0.5, 0.0), limb));
        add(&mut rig, cube(Color::BLUE, Vec3::new(0.3, -0.5, 0.0), limb));

        // Shoes
        let shoe = Vec3::new(0.3, 0.1, 0.3);
        add(&mut rig, cube(Color::RED, Vec3::new(-0.3, -1.0, 0.0), shoe));
        add(&mut rig, cube(Color::RED, Vec3::new(0.3, -1.0, 0.0), shoe));

        // Head spikes, swept 30 degrees back with a 15 degree splay
        let spike = |yaw_deg: f32, position: Vec3| Part {
            primitive: Primitive::Cone,
            color: Color::BLUE,
            local: Transform {
                position,
                rotation: Quat::from_euler(
                    EulerRot::XYZ,
                    30.0_f32.to_radians(),
                    yaw_deg.to_radians(),
                    0.0,
                ),
                scale: Vec3::new(0.3, 0.6, 0.3),
            },
            parent: Some(head),
        };
        add(&mut rig, spike(0.0, Vec3::new(0.0, 0.3, -0.5)));
        add(&mut rig, spike(-15.0, Vec3::new(-0.2, 0.3, -0.5)));
        add(&mut rig, spike(15.0, Vec3::new(0.2, 0.3, -0.5)));

        // Eyes and nose
        let face = |color, position: Vec3, scale: f32| Part {
            primitive: Primitive::Sphere,
            color,
            local: Transform {
                position,
                rotation: Quat::IDENTITY,
                scale: Vec3::splat(scale),
            },
            parent: Some(head),
        };
        add(&mut rig, face(Color::WHITE, Vec3::new(-0.15, 0.1, 0.4), 0.1));
        add(&mut rig, face(Color::WHITE, Vec3::new(0.15, 0.1, 0.4), 0.1));
        add(&mut rig, face(Color::BLACK, Vec3::new(0.0, 0.0, 0.5), 0.05));

        rig
    }
}

/// The green reference ground: a 10x10 plane one unit below the collision
/// plane, matching the original scene. Collision itself lives in the kernel
/// at y = 0.
pub fn ground_plane() -> Part {
    Part {
        primitive: Primitive::Plane,
        color: Color::GREEN,
        local: Transform {
            position: Vec3::new(0.0, -1.0, 0.0),
            rotation: Quat::IDENTITY,
            scale: Vec3::new(10.0, 1.0, 10.0),
        },
        parent: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hedgehog_has_all_parts() {
        let rig = Rig::hedgehog();
        // torso + head + 2 arms + 2 legs + 2 shoes + 3 spikes + 2 eyes + nose
        assert_eq!(rig.part_count(), 15);
    }

    #[test]
    fn unknown_parent_is_rejected() {
        let mut rig = Rig::new();
        let err = rig
            .add_part(Part {
                primitive: Primitive::Cube,
                color: Color::BLUE,
                local: Transform::default(),
                parent: Some(PartId(99)),
            })
            .unwrap_err();
        assert_eq!(err, RigError::UnknownParent(PartId(99)));
    }

    #[test]
    fn resolve_translates_by_root() {
        let rig = Rig::hedgehog();
        let root = Transform::from_position(Vec3::new(5.0, 0.0, -2.0));
        let resolved = rig.resolve(root);
        assert_eq!(resolved.len(), rig.part_count());
        // The torso sits at the root origin.
        assert_eq!(resolved[0].world.position, Vec3::new(5.0, 0.0, -2.0));
    }

    #[test]
    fn parented_parts_resolve_through_parent() {
        let rig = Rig::hedgehog();
        let resolved = rig.resolve(Transform::default());
        // The nose is parented to the head at (0, 1, 0) with offset (0, 0, 0.5).
        let nose = resolved
            .iter()
            .find(|p| p.color == Color::BLACK)
            .expect("nose present");
        assert_eq!(nose.world.position, Vec3::new(0.0, 1.0, 0.5));
    }

    #[test]
    fn root_yaw_rotates_child_offsets() {
        let rig = Rig::hedgehog();
        let root = Transform {
            rotation: Quat::from_rotation_y(std::f32::consts::PI),
            ..Transform::default()
        };
        let resolved = rig.resolve(root);
        let nose = resolved
            .iter()
            .find(|p| p.color == Color::BLACK)
            .expect("nose present");
        // Facing flipped 180 degrees: the nose points down -z now.
        assert!((nose.world.position.z + 0.5).abs() < 1e-6);
        assert!((nose.world.position.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn iteration_order_is_deterministic() {
        let rig = Rig::hedgehog();
        let ids: Vec<PartId> = rig.parts().keys().copied().collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn ground_plane_matches_scene_layout() {
        let ground = ground_plane();
        assert_eq!(ground.primitive, Primitive::Plane);
        assert_eq!(ground.local.position.y, -1.0);
        assert_eq!(ground.color, Color::GREEN);
    }
}
