use super::{four_sided_template, Extent, Lattice, LatticeMode, LatticeOutcome, Placer};
use crate::error::Result;
use crate::math::advance;
use crate::polygon::Polygon;

/// Lays `rows` by `columns` copies of a four-sided polygon on a grid.
///
/// Rows advance along the polygon's fourth edge and columns along its third,
/// starting from the polygon itself.
pub(crate) fn stacked(polygon: &Polygon, rows: usize, columns: usize) -> Result<LatticeOutcome> {
    let kind = polygon.kind();
    if !polygon.spec().is_four_sided() {
        return Ok(LatticeOutcome::infeasible(kind, LatticeMode::Stacked));
    }
    let template = four_sided_template(polygon)?;
    let (row_step, column_step) = (template[3], template[2]);

    let mut placer = Placer::new(polygon.shape().merge_tolerance())?;
    let mut row_start = polygon.spec().start();
    for row in 0..rows {
        let mut origin = row_start;
        for _ in 0..columns {
            placer.place(origin, &template)?;
            origin = advance(&origin, &column_step);
        }
        tracing::debug!(%kind, row, vertices = placer.shape.vertex_count(), "placed lattice row");
        row_start = advance(&row_start, &row_step);
    }

    Ok(LatticeOutcome::Built(Lattice {
        shape: placer.shape,
        kind,
        extent: Extent::Stacked { rows, columns },
        cells: rows * columns,
    }))
}
