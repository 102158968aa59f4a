use bytemuck::{Pod, Zeroable};
use std::f32::consts::TAU;

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct GridVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

/// Unit cube, half extent 0.5.
pub fn cube() -> (Vec<Vertex>, Vec<u16>) {
    let p = 0.5_f32;
    #[rustfmt::skip]
    let vertices = vec![
        // +Z face
        Vertex { position: [-p, -p,  p], normal: [0.0, 0.0, 1.0] },
        Vertex { position: [ p, -p,  p], normal: [0.0, 0.0, 1.0] },
        Vertex { position: [ p,  p,  p], normal: [0.0, 0.0, 1.0] },
        Vertex { position: [-p,  p,  p], normal: [0.0, 0.0, 1.0] },
        // -Z face
        Vertex { position: [ p, -p, -p], normal: [0.0, 0.0, -1.0] },
        Vertex { position: [-p, -p, -p], normal: [0.0, 0.0, -1.0] },
        Vertex { position: [-p,  p, -p], normal: [0.0, 0.0, -1.0] },
        Vertex { position: [ p,  p, -p], normal: [0.0, 0.0, -1.0] },
        // +X face
        Vertex { position: [ p, -p,  p], normal: [1.0, 0.0, 0.0] },
        Vertex { position: [ p, -p, -p], normal: [1.0, 0.0, 0.0] },
        Vertex { position: [ p,  p, -p], normal: [1.0, 0.0, 0.0] },
        Vertex { position: [ p,  p,  p], normal: [1.0, 0.0, 0.0] },
        // -X face
        Vertex { position: [-p, -p, -p], normal: [-1.0, 0.0, 0.0] },
        Vertex { position: [-p, -p,  p], normal: [-1.0, 0.0, 0.0] },
        Vertex { position: [-p,  p,  p], normal: [-1.0, 0.0, 0.0] },
        Vertex { position: [-p,  p, -p], normal: [-1.0, 0.0, 0.0] },
        // +Y face
        Vertex { position: [-p,  p,  p], normal: [0.0, 1.0, 0.0] },
        Vertex { position: [ p,  p,  p], normal: [0.0, 1.0, 0.0] },
        Vertex { position: [ p,  p, -p], normal: [0.0, 1.0, 0.0] },
        Vertex { position: [-p,  p, -p], normal: [0.0, 1.0, 0.0] },
        // -Y face
        Vertex { position: [-p, -p, -p], normal: [0.0, -1.0, 0.0] },
        Vertex { position: [ p, -p, -p], normal: [0.0, -1.0, 0.0] },
        Vertex { position: [ p, -p,  p], normal: [0.0, -1.0, 0.0] },
        Vertex { position: [-p, -p,  p], normal: [0.0, -1.0, 0.0] },
    ];
    #[rustfmt::skip]
    let indices: Vec<u16> = vec![
        0,1,2, 2,3,0,       // +Z
        4,5,6, 6,7,4,       // -Z
        8,9,10, 10,11,8,    // +X
        12,13,14, 14,15,12, // -X
        16,17,18, 18,19,16, // +Y
        20,21,22, 22,23,20, // -Y
    ];
    (vertices, indices)
}

/// UV sphere, diameter 1, centered at the origin.
pub fn sphere(rings: u16, sectors: u16) -> (Vec<Vertex>, Vec<u16>) {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();
    let r = 0.5_f32;

    for ring in 0..=rings {
        // phi sweeps pole to pole
        let phi = std::f32::consts::PI * ring as f32 / rings as f32;
        let (sin_phi, cos_phi) = phi.sin_cos();
        for sector in 0..=sectors {
            let theta = TAU * sector as f32 / sectors as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();
            let n = [sin_phi * cos_theta, cos_phi, sin_phi * sin_theta];
            vertices.push(Vertex {
                position: [n[0] * r, n[1] * r, n[2] * r],
                normal: n,
            });
        }
    }

    let stride = sectors + 1;
    for ring in 0..rings {
        for sector in 0..sectors {
            let a = ring * stride + sector;
            let b = a + stride;
            indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }
    (vertices, indices)
}

/// Cone, apex at +0.5 y, base disk of radius 0.5 at -0.5 y.
pub fn cone(segments: u16) -> (Vec<Vertex>, Vec<u16>) {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();
    let r = 0.5_f32;

    // Side: one apex vertex per segment so slant normals stay per-face smooth.
    for segment in 0..=segments {
        let theta = TAU * segment as f32 / segments as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();
        // Slant normal for height 1, radius 0.5
        let n = glam::Vec3::new(cos_theta, r, sin_theta).normalize();
        vertices.push(Vertex {
            position: [0.0, 0.5, 0.0],
            normal: n.into(),
        });
        vertices.push(Vertex {
            position: [cos_theta * r, -0.5, sin_theta * r],
            normal: n.into(),
        });
    }
    for segment in 0..segments {
        let a = segment * 2;
        indices.extend_from_slice(&[a, a + 1, a + 3]);
    }

    // Base disk, facing down.
    let base_start = vertices.len() as u16;
    vertices.push(Vertex {
        position: [0.0, -0.5, 0.0],
        normal: [0.0, -1.0, 0.0],
    });
    for segment in 0..=segments {
        let theta = TAU * segment as f32 / segments as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();
        vertices.push(Vertex {
            position: [cos_theta * r, -0.5, sin_theta * r],
            normal: [0.0, -1.0, 0.0],
        });
    }
    for segment in 0..segments {
        indices.extend_from_slice(&[
            base_start,
            base_start + 1 + segment,
            base_start + 2 + segment,
        ]);
    }
    (vertices, indices)
}

/// Unit quad in the XZ plane at y = 0, facing up. Drawn double-sided by the
/// pipeline state, so the underside is visible from below too.
pub fn plane() -> (Vec<Vertex>, Vec<u16>) {
    let p = 0.5_f32;
    let n = [0.0, 1.0, 0.0];
    let vertices = vec![
        Vertex { position: [-p, 0.0, -p], normal: n },
        Vertex { position: [-p, 0.0,  p], normal: n },
        Vertex { position: [ p, 0.0,  p], normal: n },
        Vertex { position: [ p, 0.0, -p], normal: n },
    ];
    let indices = vec![0, 1, 2, 2, 3, 0];
    (vertices, indices)
}

/// Grid floor line vertices at y = 0.
pub fn grid(half_extent: i32, spacing: f32) -> Vec<GridVertex> {
    let mut verts = Vec::new();
    let color = [0.35, 0.35, 0.35, 1.0];
    let extent = half_extent as f32 * spacing;

    for i in -half_extent..=half_extent {
        let offset = i as f32 * spacing;
        // Lines along X
        verts.push(GridVertex {
            position: [-extent, 0.0, offset],
            color,
        });
        verts.push(GridVertex {
            position: [extent, 0.0, offset],
            color,
        });
        // Lines along Z
        verts.push(GridVertex {
            position: [offset, 0.0, -extent],
            color,
        });
        verts.push(GridVertex {
            position: [offset, 0.0, extent],
            color,
        });
    }
    verts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_unit_normals(vertices: &[Vertex]) {
        for v in vertices {
            let len =
                (v.normal[0].powi(2) + v.normal[1].powi(2) + v.normal[2].powi(2)).sqrt();
            assert!((len - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn cube_is_closed() {
        let (vertices, indices) = cube();
        assert_eq!(vertices.len(), 24);
        assert_eq!(indices.len(), 36);
        assert_unit_normals(&vertices);
    }

    #[test]
    fn sphere_counts_and_bounds() {
        let (vertices, indices) = sphere(12, 24);
        assert_eq!(vertices.len(), 13 * 25);
        assert_eq!(indices.len() % 3, 0);
        assert_unit_normals(&vertices);
        for v in &vertices {
            let len =
                (v.position[0].powi(2) + v.position[1].powi(2) + v.position[2].powi(2)).sqrt();
            assert!((len - 0.5).abs() < 1e-4);
        }
    }

    #[test]
    fn sphere_indices_in_range() {
        let (vertices, indices) = sphere(12, 24);
        assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));
    }

    #[test]
    fn cone_spans_unit_height() {
        let (vertices, indices) = cone(16);
        assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));
        let min_y = vertices.iter().map(|v| v.position[1]).fold(f32::MAX, f32::min);
        let max_y = vertices.iter().map(|v| v.position[1]).fold(f32::MIN, f32::max);
        assert_eq!(min_y, -0.5);
        assert_eq!(max_y, 0.5);
        assert_unit_normals(&vertices);
    }

    #[test]
    fn plane_is_flat() {
        let (vertices, indices) = plane();
        assert_eq!(indices.len(), 6);
        assert!(vertices.iter().all(|v| v.position[1] == 0.0));
    }

    #[test]
    fn grid_line_count() {
        let verts = grid(10, 1.0);
        // (2 * 10 + 1) lines in each direction, 2 vertices per line
        assert_eq!(verts.len(), 21 * 4);
    }
}
