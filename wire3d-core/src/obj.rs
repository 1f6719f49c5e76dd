/// Wavefront OBJ parser for the vertex/face subset
///
/// Parsing is best-effort: unknown records are ignored, malformed `v`/`f`
/// records are skipped, and the result is never an error. Each face
/// contributes one triangle built from its first three vertices.
use nalgebra::Point3;
use nom::{
    bytes::complete::{tag, take_till},
    character::complete::{char, digit1, space0, space1},
    combinator::{all_consuming, map_res, opt},
    multi::many0,
    number::complete::float,
    sequence::{preceded, terminated},
    IResult,
};

use crate::geometry::{Mesh, Triangle};

/// What a parse pass saw besides the triangles it produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjReport {
    /// Vertex records appended to the vertex table
    pub vertices: usize,
    /// Faces that became triangles
    pub triangles: usize,
    /// Faces with fewer than three indices
    pub short_faces: usize,
    /// Blank lines, comments and record types this parser does not read
    pub ignored_lines: usize,
    /// 1-based line numbers of `v`/`f` records that could not be used
    pub malformed_lines: Vec<usize>,
}

enum Record {
    Vertex(Point3<f32>),
    Face(Vec<usize>),
    Ignored,
    Malformed,
}

/// Parse OBJ text into a mesh, ignoring anything that is not a usable `v` or `f` record
pub fn parse_obj(input: &str) -> Mesh {
    parse_obj_with_report(input).0
}

/// Parse OBJ text and also report which lines were ignored or malformed
///
/// A malformed `v` line adds no vertex, so every later face index resolves one
/// vertex early. A non-empty `malformed_lines` means the mesh may be corrupt
/// even when it parsed into triangles.
pub fn parse_obj_with_report(input: &str) -> (Mesh, ObjReport) {
    let mut vertices: Vec<Point3<f32>> = Vec::new();
    let mut mesh = Mesh::new();
    let mut report = ObjReport::default();

    for (number, line) in input.lines().enumerate() {
        let number = number + 1;
        match parse_record(line) {
            Record::Vertex(p) => {
                vertices.push(p);
                report.vertices += 1;
            }
            Record::Face(indices) if indices.len() < 3 => {
                report.short_faces += 1;
            }
            Record::Face(indices) => {
                // Indices are 1-based and must refer to vertices already read
                let resolve = |i: usize| i.checked_sub(1).and_then(|i| vertices.get(i)).copied();
                match (resolve(indices[0]), resolve(indices[1]), resolve(indices[2])) {
                    (Some(a), Some(b), Some(c)) => {
                        mesh.add_triangle(Triangle::new(a, b, c));
                        report.triangles += 1;
                    }
                    _ => {
                        log::debug!("line {}: face references a missing vertex", number);
                        report.malformed_lines.push(number);
                    }
                }
            }
            Record::Ignored => report.ignored_lines += 1,
            Record::Malformed => {
                log::debug!("line {}: malformed record {:?}", number, line.trim());
                report.malformed_lines.push(number);
            }
        }
    }

    (mesh, report)
}

fn parse_record(line: &str) -> Record {
    let line = match line.find('#') {
        Some(start) => &line[..start],
        None => line,
    };
    let line = line.trim();

    match line.split_whitespace().next() {
        Some("v") => match all_consuming(vertex_record)(line) {
            Ok((_, p)) => Record::Vertex(p),
            Err(_) => Record::Malformed,
        },
        Some("f") => match all_consuming(face_record)(line) {
            Ok((_, indices)) => Record::Face(indices),
            Err(_) => Record::Malformed,
        },
        _ => Record::Ignored,
    }
}

fn vertex_record(input: &str) -> IResult<&str, Point3<f32>> {
    let (input, _) = tag("v")(input)?;
    let (input, x) = preceded(space1, float)(input)?;
    let (input, y) = preceded(space1, float)(input)?;
    let (input, z) = preceded(space1, float)(input)?;
    // Optional w and vertex colour components
    let (input, _) = many0(preceded(space1, float))(input)?;
    let (input, _) = space0(input)?;
    Ok((input, Point3::new(x, y, z)))
}

fn face_record(input: &str) -> IResult<&str, Vec<usize>> {
    let (input, _) = tag("f")(input)?;
    let (input, indices) = many0(preceded(space1, face_index))(input)?;
    let (input, _) = space0(input)?;
    Ok((input, indices))
}

/// A vertex index with optional `/texture/normal` attributes, which are skipped
fn face_index(input: &str) -> IResult<&str, usize> {
    terminated(
        map_res(digit1, str::parse::<usize>),
        opt(preceded(char('/'), take_till(|c: char| c.is_whitespace()))),
    )(input)
}
