//! Mesh geometry and the line-oriented text format it is loaded from.
//!
//! # Format
//!
//! ```text
//! # comment
//! v <x> <y> <z>          vertex, order-significant
//! f <i1> <i2> ... <ik>   face, k >= 3, 1-based vertex indices
//! ```
//!
//! Faces with more than three vertices are fan-triangulated around their first
//! vertex. Records with any other leading token are logged and skipped.
//! Everything else that is malformed is fatal: no partial mesh is returned.

use std::path::Path;
use std::str::FromStr;

use crate::error::LoadError;
use crate::math::vec3::Vec3;

/// Three 0-based indices into the vertex list.
///
/// Index order defines the winding and hence the face normal direction via
/// the right-hand rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Triangle {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl Triangle {
    pub const fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }

    pub const fn indices(&self) -> [usize; 3] {
        [self.a, self.b, self.c]
    }
}

/// A wireframe segment between two 0-based vertex indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

/// Axis-aligned bounding box of a mesh's vertices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

/// Immutable vertex/triangle/edge mesh.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    triangles: Vec<Triangle>,
    edges: Vec<Edge>,
}

impl Mesh {
    /// Reads and parses a mesh file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mesh = Self::parse(&source)?;
        log::info!(
            "loaded {}: {} vertices, {} triangles",
            path.display(),
            mesh.vertices.len(),
            mesh.triangles.len()
        );
        Ok(mesh)
    }

    /// Parses a mesh from its text description.
    pub fn parse(source: &str) -> Result<Self, LoadError> {
        let mut vertices = Vec::new();
        // Faces are checked against the final vertex count, so keep their
        // line numbers until the whole source has been read.
        let mut faces: Vec<(usize, Vec<usize>)> = Vec::new();

        let source = source.strip_prefix('\u{feff}').unwrap_or(source);
        for (i, row) in source.lines().enumerate() {
            let line = i + 1;
            let mut fields = row.split_whitespace();
            let Some(tag) = fields.next() else {
                continue;
            };
            if tag.starts_with('#') {
                continue;
            }

            match tag {
                "v" => {
                    let coords: Vec<&str> = fields.collect();
                    if coords.len() != 3 {
                        return Err(LoadError::VertexArity {
                            line,
                            found: coords.len(),
                        });
                    }
                    vertices.push(Vec3::new(
                        parse_coord(coords[0], line)?,
                        parse_coord(coords[1], line)?,
                        parse_coord(coords[2], line)?,
                    ));
                }
                "f" => {
                    let indices = fields
                        .map(|token| parse_index(token, line))
                        .collect::<Result<Vec<_>, _>>()?;
                    if indices.len() < 3 {
                        return Err(LoadError::FaceArity {
                            line,
                            found: indices.len(),
                        });
                    }
                    faces.push((line, indices));
                }
                _ => log::warn!("ignoring line {line}: {}", row.trim()),
            }
        }

        let mut triangles = Vec::new();
        let mut edges = Vec::new();
        for (line, indices) in &faces {
            if let Some(&index) = indices.iter().find(|&&i| i >= vertices.len()) {
                return Err(LoadError::IndexOutOfRange {
                    line: *line,
                    index: index + 1,
                    vertex_count: vertices.len(),
                });
            }
            triangles.extend(fan_triangulate(indices));
            edges.extend(outline(indices));
        }

        let mesh = Self {
            vertices,
            triangles,
            edges,
        };
        log::debug!(
            "parsed mesh: {} vertices, {} triangles, {} edges",
            mesh.vertices.len(),
            mesh.triangles.len(),
            mesh.edges.len()
        );
        Ok(mesh)
    }

    /// Builds a mesh from 0-based indices, rejecting any that point past the
    /// vertex list.
    pub fn new(
        vertices: Vec<Vec3>,
        triangles: Vec<Triangle>,
        edges: Vec<Edge>,
    ) -> Result<Self, LoadError> {
        let vertex_count = vertices.len();
        let dangling = triangles
            .iter()
            .flat_map(|t| t.indices())
            .chain(edges.iter().flat_map(|e| [e.a, e.b]))
            .find(|&i| i >= vertex_count);
        if let Some(index) = dangling {
            return Err(LoadError::DanglingIndex {
                index,
                vertex_count,
            });
        }
        Ok(Self {
            vertices,
            triangles,
            edges,
        })
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Bounding box of all vertices, or `None` for a mesh without vertices.
    pub fn bounds(&self) -> Option<Bounds> {
        let (first, rest) = self.vertices.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)));
        Some(Bounds { min, max })
    }
}

impl FromStr for Mesh {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Splits a k-gon into k-2 triangles that all share its first vertex.
fn fan_triangulate(indices: &[usize]) -> impl Iterator<Item = Triangle> + '_ {
    let first = indices[0];
    indices[1..]
        .windows(2)
        .map(move |pair| Triangle::new(first, pair[0], pair[1]))
}

/// Closed outline of a face: (i1,i2), (i2,i3), ..., (ik,i1).
fn outline(indices: &[usize]) -> impl Iterator<Item = Edge> + '_ {
    indices
        .iter()
        .zip(indices.iter().cycle().skip(1))
        .map(|(&a, &b)| Edge { a, b })
}

fn parse_coord(token: &str, line: usize) -> Result<f64, LoadError> {
    token.parse().map_err(|_| LoadError::InvalidNumber {
        line,
        token: token.to_string(),
    })
}

/// Parses a 1-based index and converts it to 0-based.
fn parse_index(token: &str, line: usize) -> Result<usize, LoadError> {
    token
        .parse::<usize>()
        .ok()
        .and_then(|i| i.checked_sub(1))
        .ok_or_else(|| LoadError::InvalidNumber {
            line,
            token: token.to_string(),
        })
}

/// Unit cube centered on the origin: 8 vertices, 6 quad faces.
#[cfg(test)]
pub(crate) const CUBE_SOURCE: &str = "\
# unit cube
v -1 -1 -1
v -1  1 -1
v  1  1 -1
v  1 -1 -1
v  1  1  1
v  1 -1  1
v -1  1  1
v -1 -1  1
f 1 2 3 4
f 4 3 5 6
f 6 5 7 8
f 8 7 2 1
f 2 7 5 3
f 6 8 1 4
";
