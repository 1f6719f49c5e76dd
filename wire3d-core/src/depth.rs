/// Painter's-algorithm ordering of projected triangles
use crate::pipeline::ProjectedTriangle;

/// Sort farthest (largest depth) first so nearer triangles are drawn last
///
/// The sort is stable and uses a total order, so NaN depths cannot panic and
/// equal depths keep their input order.
pub fn sort_back_to_front(triangles: &mut [ProjectedTriangle]) {
    triangles.sort_by(|a, b| b.depth.total_cmp(&a.depth));
}
