// src/math/geometry/warp/grid.rs

use crate::math::{error::*, types::*, utils::comparison};
use std::fmt;

/// Warp-Gitter mit fester Topologie: (columns + 1) x (rows + 1) Kontrollpunkte im Einheitsquadrat.
///
/// Jeder Vertex hat eine Quellposition (das reguläre Ausgangsgitter, ändert sich nie)
/// und eine Zielposition (die aktuelle, ggf. deformierte Lage).
/// Indizierung ist zeilenweise: `index = row * (columns + 1) + column`, Zeile 0 liegt bei y = 0.
#[derive(Debug, Clone, PartialEq)]
pub struct WarpGrid {
    columns: usize,
    rows: usize,
    source_positions: Vec<Point2D>,
    dest_positions: Vec<Point2D>,
}

impl WarpGrid {
    /// Erstellt ein reguläres, undeformiertes Gitter
    pub fn new(columns: usize, rows: usize) -> MathResult<Self> {
        if columns == 0 || rows == 0 {
            return Err(MathError::InvalidGridDimensions { columns, rows });
        }

        let mut source_positions = Vec::with_capacity((columns + 1) * (rows + 1));
        for row in 0..=rows {
            for column in 0..=columns {
                source_positions.push(Point2D::new(
                    column as f32 / columns as f32,
                    row as f32 / rows as f32,
                ));
            }
        }

        Ok(Self {
            columns,
            rows,
            dest_positions: source_positions.clone(),
            source_positions,
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Anzahl der Kontrollpunkte
    pub fn vertex_count(&self) -> usize {
        self.source_positions.len()
    }

    /// Index eines Gitterpunkts, `None` außerhalb des Gitters
    pub fn index(&self, column: usize, row: usize) -> Option<usize> {
        (column <= self.columns && row <= self.rows).then(|| row * (self.columns + 1) + column)
    }

    pub fn source_position(&self, index: usize) -> Option<Point2D> {
        self.source_positions.get(index).copied()
    }

    pub fn dest_position(&self, index: usize) -> Option<Point2D> {
        self.dest_positions.get(index).copied()
    }

    pub fn source_positions(&self) -> &[Point2D] {
        &self.source_positions
    }

    pub fn dest_positions(&self) -> &[Point2D] {
        &self.dest_positions
    }

    /// Neues Gitter mit gleichem Ausgangsgitter und den übergebenen Zielpositionen
    pub fn replacing_by_destination_positions(&self, positions: Vec<Point2D>) -> MathResult<Self> {
        if positions.len() != self.vertex_count() {
            return Err(MathError::VertexCountMismatch {
                expected: self.vertex_count(),
                actual: positions.len(),
            });
        }

        Ok(Self {
            columns: self.columns,
            rows: self.rows,
            source_positions: self.source_positions.clone(),
            dest_positions: positions,
        })
    }

    /// Undeformierte Kopie (Ziel = Quelle)
    pub fn reset(&self) -> Self {
        Self {
            columns: self.columns,
            rows: self.rows,
            source_positions: self.source_positions.clone(),
            dest_positions: self.source_positions.clone(),
        }
    }

    /// Interpoliert die Zielpositionen linear zwischen `self` (t = 0) und `target` (t = 1)
    pub fn interpolate(&self, target: &WarpGrid, t: f32) -> MathResult<Self> {
        if self.columns != target.columns || self.rows != target.rows {
            return Err(MathError::GridDimensionMismatch {
                left_columns: self.columns,
                left_rows: self.rows,
                right_columns: target.columns,
                right_rows: target.rows,
            });
        }

        let t = t.clamp(0.0, 1.0);
        let positions = self
            .dest_positions
            .iter()
            .zip(target.dest_positions.iter())
            .map(|(from, to)| {
                Point2D::new(
                    comparison::lerp(from.x, to.x, t),
                    comparison::lerp(from.y, to.y, t),
                )
            })
            .collect();

        self.replacing_by_destination_positions(positions)
    }

    /// Sind alle Zielpositionen identisch mit den Quellpositionen?
    pub fn is_identity(&self) -> bool {
        self.source_positions == self.dest_positions
    }

    /// Größte Verschiebung eines Vertex gegenüber dem Ausgangsgitter
    pub fn max_offset(&self) -> f32 {
        self.source_positions
            .iter()
            .zip(self.dest_positions.iter())
            .map(|(source, dest)| source.distance(*dest))
            .fold(0.0, f32::max)
    }

    /// Kanten des Gitters als Indexpaare (horizontal, dann vertikal)
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let stride = self.columns + 1;
        let (columns, rows) = (self.columns, self.rows);
        let horizontal = (0..=rows).flat_map(move |row| {
            (0..columns).map(move |col| (row * stride + col, row * stride + col + 1))
        });
        let vertical = (0..rows).flat_map(move |row| {
            (0..=columns).map(move |col| (row * stride + col, (row + 1) * stride + col))
        });
        horizontal.chain(vertical)
    }
}

/// Display-Implementierung für Debugging
impl fmt::Display for WarpGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WarpGrid({}x{}, {} vertices",
            self.columns,
            self.rows,
            self.vertex_count()
        )?;
        if !self.is_identity() {
            write!(f, ", deformed")?;
        }
        write!(f, ")")
    }
}
