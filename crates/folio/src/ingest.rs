//! Initial placement of introspected schemas.
//!
//! Newly ingested tables and views carry no meaningful position. They are
//! laid out left to right, top to bottom on a fixed grid, tables first, with
//! views continuing the same running index.

use log::info;

use folio_core::{geometry::Point, model::DatabaseSchema};

/// Left and top margin of the placement grid.
pub const GRID_START: Point = Point::new(30.0, 30.0);

/// Horizontal distance between placed boxes.
pub const GRID_SPACING_X: f64 = 280.0;

/// Vertical distance between placed rows.
pub const GRID_SPACING_Y: f64 = 350.0;

/// Boxes per placement row.
pub const ITEMS_PER_ROW: usize = 5;

/// Position of the `index`-th placed box.
///
/// # Examples
///
/// ```
/// # use folio::ingest::grid_position;
/// assert_eq!(grid_position(0).x(), 30.0);
/// assert_eq!(grid_position(6).x(), 310.0);
/// assert_eq!(grid_position(6).y(), 380.0);
/// ```
pub fn grid_position(index: usize) -> Point {
    let col = (index % ITEMS_PER_ROW) as f64;
    let row = (index / ITEMS_PER_ROW) as f64;
    Point::new(
        GRID_START.x() + col * GRID_SPACING_X,
        GRID_START.y() + row * GRID_SPACING_Y,
    )
}

/// Assigns grid positions to every table, then every view.
///
/// Shapes, labels and relationships are left untouched.
pub fn place_on_grid(schema: &mut DatabaseSchema) {
    let mut index = 0;

    for table in &mut schema.tables {
        let position = grid_position(index);
        table.x = position.x();
        table.y = position.y();
        index += 1;
    }

    for view in &mut schema.views {
        let position = grid_position(index);
        view.x = position.x();
        view.y = position.y();
        index += 1;
    }

    info!(placed = index; "Initial grid placement applied");
}

#[cfg(test)]
mod tests {
    use folio_core::model::{Relationship, Shape, Table, View};

    use super::*;

    #[test]
    fn test_views_continue_after_tables() {
        let mut schema = DatabaseSchema::new();
        for name in ["A", "B", "C", "D", "E", "F"] {
            schema.tables.push(Table::new("dbo", name).with_position(999.0, 999.0));
        }
        schema.views.push(View::new("dbo", "V"));
        schema
            .relationships
            .push(Relationship::new("dbo.A", "Id", "dbo.B", "AId"));
        schema.add_shape(Shape::new(5.0, 5.0));

        place_on_grid(&mut schema);

        assert_eq!((schema.tables[0].x, schema.tables[0].y), (30.0, 30.0));
        assert_eq!((schema.tables[4].x, schema.tables[4].y), (1150.0, 30.0));
        assert_eq!((schema.tables[5].x, schema.tables[5].y), (30.0, 380.0));
        assert_eq!((schema.views[0].x, schema.views[0].y), (310.0, 380.0));

        assert_eq!(schema.shapes[0].x, 5.0);
        assert_eq!(schema.relationships[0].from_table, "dbo.A");
    }
}
