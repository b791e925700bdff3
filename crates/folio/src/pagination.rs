//! Pagination engine.
//!
//! The canvas is tiled by an unbounded grid of fixed-size pages separated by
//! a gap band. Page `(row, col)` has its top-left corner at
//! `(col * (page_width + gap), row * (page_height + gap))`.
//!
//! [`paginate`] decides, for every page in the grid extent, which entities
//! are visible on it and where they are drawn relative to the page origin.
//! An entity straddling a page boundary is emitted uncropped on every page it
//! overlaps; a relationship line is emitted on every page holding either of
//! its anchor points.

use std::fmt;

use log::{debug, info, trace, warn};

use folio_core::{
    geometry::{Bounds, Point, Size},
    model::{Boundable, DatabaseSchema, Entity, EntityKey, Relationship},
};

use crate::{graph::RelationshipGraph, transform};

/// Default gap between adjacent pages, in canvas units.
pub const PAGE_GAP: f64 = 20.0;

/// Distance from a page's far edge that gap snapping pulls back to.
pub const GAP_SNAP_INSET: f64 = 50.0;

/// Largest number of page columns, and of page rows, a grid may span.
///
/// Content reaching beyond the capped grid is not paginated.
pub const MAX_PAGES_PER_AXIS: usize = 64;

/// The page grid: page size and the gap between pages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    page_width: f64,
    page_height: f64,
    gap: f64,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::from_inches(32.0, 36.0)
    }
}

impl PageGeometry {
    /// Creates a page grid. Page dimensions are floored to one inch and the
    /// gap to zero.
    pub fn new(page_width: f64, page_height: f64, gap: f64) -> Self {
        let min_page = transform::inches_to_units(1.0);
        Self {
            page_width: finite_or(page_width, min_page).max(min_page),
            page_height: finite_or(page_height, min_page).max(min_page),
            gap: finite_or(gap, 0.0).max(0.0),
        }
    }

    /// A page grid for pages of the given size in inches, with [`PAGE_GAP`]
    pub fn from_inches(width_inches: f64, height_inches: f64) -> Self {
        Self::new(
            transform::inches_to_units(width_inches),
            transform::inches_to_units(height_inches),
            PAGE_GAP,
        )
    }

    pub fn page_width(&self) -> f64 {
        self.page_width
    }

    pub fn page_height(&self) -> f64 {
        self.page_height
    }

    pub fn gap(&self) -> f64 {
        self.gap
    }

    pub fn page_size(&self) -> Size {
        Size::new(self.page_width, self.page_height)
    }

    /// Horizontal pitch of the grid: one page plus one gap
    pub fn cell_width(&self) -> f64 {
        self.page_width + self.gap
    }

    /// Vertical pitch of the grid: one page plus one gap
    pub fn cell_height(&self) -> f64 {
        self.page_height + self.gap
    }

    /// Logical top-left corner of a page
    pub fn page_origin(&self, index: PageIndex) -> Point {
        Point::new(
            index.col as f64 * self.cell_width(),
            index.row as f64 * self.cell_height(),
        )
    }

    /// Logical rectangle of a page, excluding the surrounding gap
    pub fn page_bounds(&self, index: PageIndex) -> Bounds {
        Bounds::new_from_top_left(self.page_origin(index), self.page_size())
    }

    /// Number of page columns and rows needed to cover content reaching `max`.
    ///
    /// Both counts are at least one and at most [`MAX_PAGES_PER_AXIS`].
    pub fn grid_extent(&self, max: Point) -> (usize, usize) {
        let columns = (max.x() / self.cell_width()).ceil();
        let rows = (max.y() / self.cell_height()).ceil();
        let extent = (page_count(columns), page_count(rows));

        let limit = MAX_PAGES_PER_AXIS as f64;
        if columns > limit || rows > limit {
            warn!(
                max_x = max.x(),
                max_y = max.y(),
                limit = MAX_PAGES_PER_AXIS;
                "Content exceeds the page grid limit, outlying entities are not paginated"
            );
        }
        extent
    }

    /// Moves a point that lies in a gap band onto the nearer page edge.
    ///
    /// Per axis: a coordinate past the page's far edge snaps forward to the
    /// next page's near edge when that is closer, otherwise back to
    /// [`GAP_SNAP_INSET`] inside the current page's far edge. Coordinates on
    /// a page are returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use folio::pagination::PageGeometry;
    /// # use folio_core::geometry::Point;
    /// let geometry = PageGeometry::new(1000.0, 1000.0, 20.0);
    ///
    /// let forward = geometry.snap_to_page_area(Point::new(1015.0, 500.0));
    /// assert_eq!(forward.x(), 1020.0);
    ///
    /// let back = geometry.snap_to_page_area(Point::new(1004.0, 500.0));
    /// assert_eq!(back.x(), 950.0);
    /// ```
    pub fn snap_to_page_area(&self, point: Point) -> Point {
        Point::new(
            snap_axis(point.x(), self.page_width, self.gap),
            snap_axis(point.y(), self.page_height, self.gap),
        )
    }
}

fn snap_axis(value: f64, page: f64, gap: f64) -> f64 {
    let total = page + gap;
    let cell = (value / total).floor();
    let within = value - cell * total;

    if within <= page {
        return value;
    }

    let to_next = total - within;
    let to_previous = within - page;
    if to_next < to_previous {
        (cell + 1.0) * total
    } else {
        cell * total + (page - GAP_SNAP_INSET).max(0.0)
    }
}

fn page_count(value: f64) -> usize {
    if value.is_nan() || value < 1.0 {
        1
    } else if value >= MAX_PAGES_PER_AXIS as f64 {
        MAX_PAGES_PER_AXIS
    } else {
        value as usize
    }
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value } else { fallback }
}

/// Row and column of a page in the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageIndex {
    pub row: usize,
    pub col: usize,
}

impl PageIndex {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for PageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row, self.col)
    }
}

/// An entity visible on a page.
#[derive(Debug, Clone, Copy)]
pub struct PlacedItem<'a> {
    entity: Entity<'a>,
    bounds: Bounds,
}

impl<'a> PlacedItem<'a> {
    pub fn entity(&self) -> Entity<'a> {
        self.entity
    }

    /// Page-relative top-left drawing position
    pub fn position(&self) -> Point {
        self.bounds.min_point()
    }

    /// Page-relative bounds, translated but not cropped
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

/// A relationship line drawn on a page.
#[derive(Debug, Clone, Copy)]
pub struct PlacedLine<'a> {
    relationship: &'a Relationship,
    index: usize,
    from: Point,
    to: Point,
}

impl<'a> PlacedLine<'a> {
    pub fn relationship(&self) -> &'a Relationship {
        self.relationship
    }

    /// Position of the relationship in the schema's relationship list
    pub fn index(&self) -> usize {
        self.index
    }

    /// Page-relative anchor of the `from` endpoint
    pub fn from(&self) -> Point {
        self.from
    }

    /// Page-relative anchor of the `to` endpoint
    pub fn to(&self) -> Point {
        self.to
    }
}

/// One physical page and its visible content.
#[derive(Debug, Clone)]
pub struct Page<'a> {
    index: PageIndex,
    bounds: Bounds,
    items: Vec<PlacedItem<'a>>,
    lines: Vec<PlacedLine<'a>>,
}

impl<'a> Page<'a> {
    pub fn index(&self) -> PageIndex {
        self.index
    }

    /// Logical top-left corner of the page
    pub fn origin(&self) -> Point {
        self.bounds.min_point()
    }

    /// Logical rectangle of the page
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Visible entities in schema order: tables, views, shapes, labels
    pub fn items(&self) -> &[PlacedItem<'a>] {
        &self.items
    }

    pub fn lines(&self) -> &[PlacedLine<'a>] {
        &self.lines
    }

    /// Returns true if the entity named by `key` is visible on this page
    pub fn contains(&self, key: &EntityKey) -> bool {
        self.items.iter().any(|item| item.entity.key() == *key)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.lines.is_empty()
    }
}

/// The paginated view of a schema snapshot.
#[derive(Debug, Clone)]
pub struct Pagination<'a> {
    geometry: PageGeometry,
    columns: usize,
    rows: usize,
    pages: Vec<Page<'a>>,
}

impl<'a> Pagination<'a> {
    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Pages in row-major order
    pub fn pages(&self) -> &[Page<'a>] {
        &self.pages
    }

    pub fn page(&self, index: PageIndex) -> Option<&Page<'a>> {
        if index.row >= self.rows || index.col >= self.columns {
            return None;
        }
        self.pages.get(index.row * self.columns + index.col)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always false: every pagination holds at least one page
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Pages on which the entity named by `key` is visible
    pub fn pages_containing(&self, key: &EntityKey) -> impl Iterator<Item = PageIndex> + '_ {
        let key = key.clone();
        self.pages
            .iter()
            .filter(move |page| page.contains(&key))
            .map(|page| page.index)
    }
}

/// Partitions a schema snapshot into pages.
///
/// The grid extent is derived from the bottom-right corner of the content,
/// so an empty schema still yields exactly one page.
pub fn paginate<'a>(schema: &'a DatabaseSchema, geometry: &PageGeometry) -> Pagination<'a> {
    let entities: Vec<(Entity<'a>, Bounds)> = schema
        .entities()
        .map(|entity| (entity, entity.bounds()))
        .collect();

    let max = entities.iter().fold(Point::default(), |acc, (_, bounds)| {
        Point::new(acc.x().max(bounds.max_x()), acc.y().max(bounds.max_y()))
    });
    let (columns, rows) = geometry.grid_extent(max);

    let graph = RelationshipGraph::build(schema);

    let mut pages = Vec::with_capacity(columns.checked_mul(rows).unwrap_or_default());
    for row in 0..rows {
        for col in 0..columns {
            let index = PageIndex::new(row, col);
            let bounds = geometry.page_bounds(index);
            let origin = bounds.min_point();

            let items: Vec<PlacedItem<'a>> = entities
                .iter()
                .filter(|(_, entity_bounds)| entity_bounds.intersects(&bounds))
                .map(|(entity, entity_bounds)| PlacedItem {
                    entity: *entity,
                    bounds: entity_bounds.inverse_translate(origin),
                })
                .collect();

            let lines: Vec<PlacedLine<'a>> = graph
                .resolved()
                .iter()
                .filter(|resolved| {
                    bounds.contains_point(resolved.from_anchor())
                        || bounds.contains_point(resolved.to_anchor())
                })
                .map(|resolved| PlacedLine {
                    relationship: resolved.relationship(),
                    index: resolved.index(),
                    from: resolved.from_anchor().sub_point(origin),
                    to: resolved.to_anchor().sub_point(origin),
                })
                .collect();

            trace!(page:% = index, items = items.len(), lines = lines.len(); "Page populated");
            pages.push(Page {
                index,
                bounds,
                items,
                lines,
            });
        }
    }

    debug!(columns, rows; "Page grid computed");
    info!(pages = pages.len(); "Pagination computed");

    Pagination {
        geometry: *geometry,
        columns,
        rows,
        pages,
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use folio_core::model::{Column, Label, Shape, Table};

    use super::*;

    fn cp_custom() -> PageGeometry {
        PageGeometry::new(3072.0, 3456.0, 20.0)
    }

    #[test]
    fn test_geometry_floors_degenerate_pages() {
        let geometry = PageGeometry::new(0.0, -5.0, -1.0);
        assert_approx_eq!(f64, geometry.page_width(), 96.0);
        assert_approx_eq!(f64, geometry.page_height(), 96.0);
        assert_approx_eq!(f64, geometry.gap(), 0.0);
    }

    #[test]
    fn test_page_origin() {
        let geometry = cp_custom();
        let origin = geometry.page_origin(PageIndex::new(1, 2));
        assert_approx_eq!(f64, origin.x(), 2.0 * 3092.0);
        assert_approx_eq!(f64, origin.y(), 3476.0);
    }

    #[test]
    fn test_grid_extent() {
        let geometry = cp_custom();
        assert_eq!(geometry.grid_extent(Point::default()), (1, 1));
        assert_eq!(geometry.grid_extent(Point::new(3092.0, 10.0)), (1, 1));
        assert_eq!(geometry.grid_extent(Point::new(3093.0, 3477.0)), (2, 2));
    }

    #[test]
    fn test_grid_extent_is_capped() {
        let geometry = cp_custom();
        assert_eq!(
            geometry.grid_extent(Point::new(1e300, 10.0)),
            (MAX_PAGES_PER_AXIS, 1)
        );
        assert_eq!(
            geometry.grid_extent(Point::new(f64::INFINITY, f64::MAX)),
            (MAX_PAGES_PER_AXIS, MAX_PAGES_PER_AXIS)
        );
        assert_eq!(geometry.grid_extent(Point::new(f64::NAN, 10.0)), (1, 1));
    }

    #[test]
    fn test_far_away_table_does_not_blow_up_pagination() {
        let mut schema = DatabaseSchema::new();
        schema
            .tables
            .push(Table::new("dbo", "Orders").with_position(30.0, 30.0));
        schema
            .tables
            .push(Table::new("dbo", "Far").with_position(1e300, 10.0));

        let pagination = paginate(&schema, &cp_custom());
        assert_eq!(pagination.columns(), MAX_PAGES_PER_AXIS);
        assert_eq!(pagination.rows(), 1);
        assert_eq!(pagination.len(), MAX_PAGES_PER_AXIS);

        let first = &pagination.pages()[0];
        assert!(first.contains(&EntityKey::Table("dbo.Orders".to_string())));
        let far = EntityKey::Table("dbo.Far".to_string());
        assert!(pagination.pages().iter().all(|page| !page.contains(&far)));
    }

    #[test]
    fn test_empty_schema_has_one_page() {
        let schema = DatabaseSchema::new();
        let pagination = paginate(&schema, &cp_custom());

        assert_eq!(pagination.len(), 1);
        assert!(pagination.pages()[0].is_empty());
    }

    #[test]
    fn test_straddling_shape_on_both_columns() {
        let mut schema = DatabaseSchema::new();
        let key = schema.add_shape(Shape::new(3090.0, 10.0).with_size(100.0, 100.0));

        let pagination = paginate(&schema, &cp_custom());
        assert_eq!(pagination.columns(), 2);
        assert_eq!(pagination.rows(), 1);

        let pages: Vec<PageIndex> = pagination.pages_containing(&key).collect();
        assert_eq!(pages, vec![PageIndex::new(0, 0), PageIndex::new(0, 1)]);

        let right = pagination.page(PageIndex::new(0, 1)).unwrap();
        let item = right.items()[0];
        assert_approx_eq!(f64, item.position().x(), -2.0);
        assert_approx_eq!(f64, item.bounds().width(), 100.0);
    }

    #[test]
    fn test_entity_in_gap_is_on_no_page() {
        let mut schema = DatabaseSchema::new();
        let label = schema.add_label(Label::new(3074.0, 10.0).with_size(10.0, 10.0));
        // Push the grid out so a second column exists
        schema.add_shape(Shape::new(3200.0, 10.0));

        let pagination = paginate(&schema, &cp_custom());
        assert_eq!(pagination.pages_containing(&label).count(), 0);
    }

    #[test]
    fn test_touching_edge_is_not_overlap() {
        let mut schema = DatabaseSchema::new();
        // Right edge exactly at x = 3092, the left edge of column 1
        schema.add_shape(Shape::new(2992.0, 10.0).with_size(100.0, 100.0));
        schema.add_shape(Shape::new(3200.0, 10.0));

        let pagination = paginate(&schema, &cp_custom());
        let right = pagination.page(PageIndex::new(0, 1)).unwrap();
        assert_eq!(right.items().len(), 1);
    }

    #[test]
    fn test_line_emitted_when_either_anchor_on_page() {
        let mut schema = DatabaseSchema::new();
        schema.tables.push(
            Table::new("dbo", "Left")
                .with_position(100.0, 100.0)
                .add_column(Column::new("Id", "int")),
        );
        schema
            .tables
            .push(Table::new("dbo", "Right").with_position(3200.0, 100.0));
        schema.relationships.push(Relationship::new(
            "dbo.Left", "Id", "dbo.Right", "LeftId",
        ));

        let pagination = paginate(&schema, &cp_custom());
        let left = pagination.page(PageIndex::new(0, 0)).unwrap();
        let right = pagination.page(PageIndex::new(0, 1)).unwrap();
        assert_eq!(left.lines().len(), 1);
        assert_eq!(right.lines().len(), 1);

        // Both endpoints in page coordinates, even the off-page one
        let line = right.lines()[0];
        assert_approx_eq!(f64, line.from().x(), 200.0 - 3092.0);
        assert_approx_eq!(f64, line.to().x(), 3300.0 - 3092.0);
        assert_approx_eq!(f64, line.to().y(), 150.0);
    }

    #[test]
    fn test_snap_to_page_area_leaves_page_points() {
        let geometry = cp_custom();
        let point = Point::new(3072.0, 3456.0);
        assert_eq!(geometry.snap_to_page_area(point), point);
    }

    #[test]
    fn test_snap_to_page_area_vertical_gap() {
        let geometry = cp_custom();
        let snapped = geometry.snap_to_page_area(Point::new(40.0, 3470.0));
        assert_approx_eq!(f64, snapped.x(), 40.0);
        assert_approx_eq!(f64, snapped.y(), 3476.0);

        let snapped = geometry.snap_to_page_area(Point::new(40.0, 3460.0));
        assert_approx_eq!(f64, snapped.y(), 3406.0);
    }

    #[test]
    fn test_snap_to_page_area_tie_goes_back() {
        let geometry = PageGeometry::new(1000.0, 1000.0, 20.0);
        let snapped = geometry.snap_to_page_area(Point::new(1010.0, 0.0));
        assert_approx_eq!(f64, snapped.x(), 950.0);
    }
}
