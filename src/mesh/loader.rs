//! Wavefront-OBJ-subset parser producing a deduplicated indexed mesh.
//!
//! Handles the four directives the demo needs — `v`, `vn`, `vt`, `f` —
//! and ignores everything else (comments, groups, materials). Faces are
//! assumed pre-triangulated; corner tokens may reference
//! position/texcoord/normal (`p/t/n`) or skip fields (`p//n`, `p/t`,
//! `p`), and both styles may appear in one file. All indices in the file
//! are 1-based and must refer to data declared on an earlier line.
//!
//! Corners sharing a (position, texcoord) pair collapse to a single
//! vertex through a hash map keyed on the float bit patterns, so the
//! output index buffer references each unique vertex exactly once.

use std::fmt;
use std::fs;
use std::path::Path;

use glam::{Vec2, Vec3};
use rustc_hash::FxHashMap;

use super::{MeshData, Vertex};

/// Errors produced while loading a mesh file.
#[derive(Debug)]
pub enum MeshError {
    /// The file could not be opened or read.
    Io(std::io::Error),
    /// A line failed to parse; no partial mesh is returned.
    Parse {
        /// 1-based source line the error was found on.
        line: usize,
        /// Human-readable description of the problem.
        msg: String,
    },
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read mesh file: {e}"),
            Self::Parse { line, msg } => {
                write!(f, "parse error on line {line}: {msg}")
            }
        }
    }
}

impl std::error::Error for MeshError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse { .. } => None,
        }
    }
}

impl From<std::io::Error> for MeshError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Dedup identity of a vertex: position + texcoord bit patterns.
/// The normal is deliberately left out (see [`Vertex`]).
type DedupKey = [u32; 5];

fn dedup_key(position: Vec3, tex_coord: Vec2) -> DedupKey {
    [
        position.x.to_bits(),
        position.y.to_bits(),
        position.z.to_bits(),
        tex_coord.x.to_bits(),
        tex_coord.y.to_bits(),
    ]
}

/// Load and parse a mesh file.
///
/// # Errors
///
/// [`MeshError::Io`] when the file cannot be read; [`MeshError::Parse`]
/// for malformed numeric tokens or out-of-range indices.
pub fn load(path: &Path) -> Result<MeshData, MeshError> {
    let source = fs::read_to_string(path)?;
    let mesh = parse(&source)?;
    log::info!(
        "loaded {}: {} unique vertices, {} triangles",
        path.display(),
        mesh.vertices.len(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

/// Parse mesh source text. Separate from [`load`] so the parser is
/// testable without touching the filesystem.
///
/// # Errors
///
/// [`MeshError::Parse`] with the offending line number; never returns a
/// partial mesh.
pub fn parse(source: &str) -> Result<MeshData, MeshError> {
    let mut positions: Vec<Vec3> = Vec::new();
    let mut normals: Vec<Vec3> = Vec::new();
    let mut texcoords: Vec<Vec2> = Vec::new();

    let mut vertices: Vec<Vertex> = Vec::new();
    let mut indices: Vec<u32> = Vec::new();
    let mut seen: FxHashMap<DedupKey, u32> = FxHashMap::default();

    for (line_idx, raw) in source.lines().enumerate() {
        let line_no = line_idx + 1;
        let line = raw.trim_end();

        if let Some(rest) = line.strip_prefix("v ") {
            let [x, y, z] = parse_fields::<3>(rest, line_no)?;
            positions.push(Vec3::new(x, y, z));
        } else if let Some(rest) = line.strip_prefix("vn ") {
            let [x, y, z] = parse_fields::<3>(rest, line_no)?;
            normals.push(Vec3::new(x, y, z));
        } else if let Some(rest) = line.strip_prefix("vt ") {
            let [u, v] = parse_fields::<2>(rest, line_no)?;
            texcoords.push(Vec2::new(u, v));
        } else if let Some(rest) = line.strip_prefix("f ") {
            for token in rest.split_whitespace() {
                let vertex = resolve_corner(
                    token, &positions, &texcoords, &normals, line_no,
                )?;

                let key = dedup_key(
                    Vec3::from_array(vertex.position),
                    Vec2::from_array(vertex.tex_coord),
                );
                let index = if let Some(&existing) = seen.get(&key) {
                    existing
                } else {
                    let fresh = vertices.len() as u32;
                    vertices.push(vertex);
                    let _ = seen.insert(key, fresh);
                    fresh
                };
                indices.push(index);
            }
        }
        // Every other directive (comments, o/g/s, usemtl, ...) is ignored.
    }

    Ok(MeshData { vertices, indices })
}

/// Parse `N` whitespace-separated floats. Trailing fields (e.g. an OBJ
/// `w` component) are tolerated and ignored; missing or non-numeric
/// fields are fatal.
fn parse_fields<const N: usize>(
    text: &str,
    line: usize,
) -> Result<[f32; N], MeshError> {
    let mut out = [0.0_f32; N];
    let mut fields = text.split_whitespace();
    for slot in &mut out {
        let token = fields.next().ok_or_else(|| MeshError::Parse {
            line,
            msg: format!("expected {N} numeric fields, got fewer"),
        })?;
        *slot = token.parse().map_err(|_| MeshError::Parse {
            line,
            msg: format!("invalid number `{token}`"),
        })?;
    }
    Ok(out)
}

/// Resolve one face-corner token (`p`, `p/t`, `p//n`, or `p/t/n`) into a
/// candidate vertex. Omitted texcoord/normal references resolve to zero.
fn resolve_corner(
    token: &str,
    positions: &[Vec3],
    texcoords: &[Vec2],
    normals: &[Vec3],
    line: usize,
) -> Result<Vertex, MeshError> {
    let mut fields = token.splitn(3, '/');

    // splitn always yields at least one (possibly empty) field.
    let position = match fields.next() {
        Some(p) if !p.is_empty() => {
            positions[resolve_index(p, positions.len(), "position", line)?]
        }
        _ => {
            return Err(MeshError::Parse {
                line,
                msg: format!("face corner `{token}` has no position index"),
            })
        }
    };

    let tex_coord = match fields.next() {
        Some(t) if !t.is_empty() => {
            texcoords[resolve_index(t, texcoords.len(), "texcoord", line)?]
        }
        _ => Vec2::ZERO,
    };

    let normal = match fields.next() {
        Some(n) if !n.is_empty() => {
            normals[resolve_index(n, normals.len(), "normal", line)?]
        }
        _ => Vec3::ZERO,
    };

    Ok(Vertex {
        position: position.to_array(),
        normal: normal.to_array(),
        tex_coord: tex_coord.to_array(),
    })
}

/// Convert a 1-based index field to a 0-based offset, rejecting zero,
/// non-numeric, and forward references (indices past what has been
/// declared so far).
fn resolve_index(
    field: &str,
    declared: usize,
    what: &str,
    line: usize,
) -> Result<usize, MeshError> {
    let index: usize = field.parse().map_err(|_| MeshError::Parse {
        line,
        msg: format!("invalid {what} index `{field}`"),
    })?;
    if index == 0 || index > declared {
        return Err(MeshError::Parse {
            line,
            msg: format!(
                "{what} index {index} out of range ({declared} declared)"
            ),
        });
    }
    Ok(index - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIANGLE: &str = "\
v 0 0 0
v 1 0 0
v 0 1 0
vt 0 0
vt 1 0
vt 0 1
vn 0 0 1
vn 0 0 1
vn 0 0 1
f 1/1/1 2/2/1 3/3/1
";

    #[test]
    fn single_triangle_yields_three_unique_vertices() {
        let mesh = parse(TRIANGLE).unwrap();
        assert_eq!(mesh.vertices.len(), 3);
        assert_eq!(mesh.indices, vec![0, 1, 2]);
        assert_eq!(mesh.vertices[1].position, [1.0, 0.0, 0.0]);
        assert_eq!(mesh.vertices[1].tex_coord, [1.0, 0.0]);
        assert_eq!(mesh.vertices[1].normal, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn shared_corners_are_deduplicated() {
        // Two triangles sharing the edge 2-3: six corner tokens, four
        // unique (position, texcoord) pairs.
        let source = "\
v 0 0 0
v 1 0 0
v 0 1 0
v 1 1 0
vt 0 0
vt 1 0
vt 0 1
vt 1 1
vn 0 0 1
f 1/1/1 2/2/1 3/3/1
f 2/2/1 4/4/1 3/3/1
";
        let mesh = parse(source).unwrap();
        assert_eq!(mesh.indices.len(), 6);
        assert!(mesh.vertices.len() < mesh.indices.len());
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices, vec![0, 1, 2, 1, 3, 2]);
    }

    #[test]
    fn vertices_keep_first_seen_order() {
        let mesh = parse(TRIANGLE).unwrap();
        assert_eq!(mesh.vertices[0].position, [0.0, 0.0, 0.0]);
        assert_eq!(mesh.vertices[2].position, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn same_position_different_uv_stays_distinct() {
        // A seam: one position referenced with two texcoords must yield
        // two vertices (normal is excluded from identity, uv is not).
        let source = "\
v 0 0 0
v 1 0 0
v 0 1 0
vt 0 0
vt 1 1
vn 0 0 1
f 1/1/1 2/1/1 3/1/1
f 1/2/1 2/1/1 3/1/1
";
        let mesh = parse(source).unwrap();
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices, vec![0, 1, 2, 3, 1, 2]);
    }

    #[test]
    fn position_normal_corners_parse_without_texcoords() {
        let source = "\
v 0 0 0
v 1 0 0
v 0 1 0
vn 0 0 1
f 1//1 2//1 3//1
";
        let mesh = parse(source).unwrap();
        assert_eq!(mesh.vertices.len(), 3);
        assert_eq!(mesh.indices, vec![0, 1, 2]);
        assert_eq!(mesh.vertices[0].normal, [0.0, 0.0, 1.0]);
        assert_eq!(mesh.vertices[0].tex_coord, [0.0, 0.0]);
    }

    #[test]
    fn mixed_corner_styles_share_one_file() {
        let source = "\
v 0 0 0
v 1 0 0
v 0 1 0
v 1 1 0
vt 0 0
vt 1 0
vt 0 1
vn 0 0 1
f 1/1/1 2/2/1 3/3/1
f 2//1 4//1 3//1
";
        let mesh = parse(source).unwrap();
        assert_eq!(mesh.indices.len(), 6);
        for &index in &mesh.indices {
            assert!((index as usize) < mesh.vertices.len());
        }
        // Position 2 appears once with uv (1,0) and once with uv (0,0):
        // different dedup keys, so both survive.
        assert_eq!(mesh.vertices.len(), 6);
    }

    #[test]
    fn triangle_input_produces_index_multiple_of_three() {
        let mesh = parse(TRIANGLE).unwrap();
        assert_eq!(mesh.indices.len() % 3, 0);
    }

    #[test]
    fn unknown_directives_are_ignored() {
        let source = "\
# a comment
mtllib scene.mtl
o triangle
v 0 0 0
v 1 0 0
v 0 1 0
s off
f 1 2 3
";
        let mesh = parse(source).unwrap();
        assert_eq!(mesh.vertices.len(), 3);
        assert_eq!(mesh.indices, vec![0, 1, 2]);
    }

    #[test]
    fn malformed_float_is_fatal() {
        let source = "v 0 zero 0\n";
        match parse(source) {
            Err(MeshError::Parse { line, .. }) => assert_eq!(line, 1),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn missing_vertex_component_is_fatal() {
        let source = "v 0 1\n";
        assert!(matches!(
            parse(source),
            Err(MeshError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn extra_vertex_component_is_tolerated() {
        // OBJ allows `v x y z w`; the w component is ignored.
        let source = "\
v 0 0 0 1
v 1 0 0 1
v 0 1 0 1
f 1 2 3
";
        let mesh = parse(source).unwrap();
        assert_eq!(mesh.vertices.len(), 3);
    }

    #[test]
    fn forward_reference_is_fatal() {
        // The face references position 4 before it is declared.
        let source = "\
v 0 0 0
v 1 0 0
v 0 1 0
f 1 2 4
";
        match parse(source) {
            Err(MeshError::Parse { line, msg }) => {
                assert_eq!(line, 4);
                assert!(msg.contains("out of range"), "{msg}");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn zero_index_is_fatal() {
        let source = "\
v 0 0 0
f 0 1 1
";
        assert!(matches!(
            parse(source),
            Err(MeshError::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn malformed_index_is_fatal() {
        let source = "\
v 0 0 0
f 1 x 1
";
        assert!(matches!(
            parse(source),
            Err(MeshError::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn missing_file_reports_io_error() {
        let result = load(Path::new("does/not/exist.obj"));
        assert!(matches!(result, Err(MeshError::Io(_))));
    }
}
