//! Drawing instructions shared by both export modes.

use chrono::NaiveDateTime;

use folio_core::{
    color::Color,
    draw::{DrawCommand, RenderLayer, StrokeCap, StrokeDefinition, TextAnchor, TextStyle},
    geometry::{Bounds, Point, Size},
    model::{BoxMetrics, Column, Entity, EntityKind, Label, Shape},
};

use super::wrap::{LABEL_LINE_HEIGHT, LABEL_PADDING, wrap_label_text};

const LINE_COLOR: &str = "#8AB4FF";
const BRAND_COLOR: &str = "#3B82F6";
const TABLE_BORDER: &str = "#0f4c8a";
const TABLE_HEADER: &str = "#084298";
const VIEW_BORDER: &str = "#0b5e3a";
const VIEW_HEADER: &str = "#0a462f";
const TEXT_COLOR: &str = "#07203A";
const HEADER_TEXT_COLOR: &str = "#ffffff";
const DOCUMENT_NAME_COLOR: &str = "#0f4c8a";
const FOOTER_DATE_COLOR: &str = "#6B7280";
const LABEL_BORDER: &str = "#D1D5DB";
const BACKGROUND: &str = "#ffffff";

const BOX_BORDER_WIDTH: f64 = 1.2;
const HEADER_OPACITY: f64 = 0.98;
const TEXT_INSET: f64 = 6.0;
const LINE_DASH: &str = "6,4";
const LABEL_FONT: f64 = 10.0;

const FOOTER_FONT: f64 = 9.0;
const FOOTER_INSET: f64 = 12.0;

fn color(hex: &str) -> Color {
    Color::parse_or(hex, Color::default())
}

/// Layer an entity kind is drawn on
pub(super) fn entity_layer(kind: EntityKind) -> RenderLayer {
    match kind {
        EntityKind::Table => RenderLayer::Table,
        EntityKind::View => RenderLayer::View,
        EntityKind::Shape => RenderLayer::Shape,
        EntityKind::Label => RenderLayer::Label,
    }
}

/// The strings of the footer title block.
#[derive(Debug, Clone)]
pub(super) struct TitleBlock {
    brand: String,
    document_name: String,
    printed: String,
}

impl TitleBlock {
    pub(super) fn new(brand: &str, document_name: &str, printed_at: NaiveDateTime) -> Self {
        Self {
            brand: brand.to_string(),
            document_name: document_name.to_string(),
            printed: format!("Printed: {}", printed_at.format("%Y-%m-%d %H:%M")),
        }
    }

    /// Brand left, document name centered, print time right
    pub(super) fn commands(&self, page: Size) -> Vec<DrawCommand> {
        let baseline = page.height() - FOOTER_INSET;
        vec![
            DrawCommand::text(
                Point::new(FOOTER_INSET, baseline),
                self.brand.as_str(),
                TextStyle::new(FOOTER_FONT, color(BRAND_COLOR)).bold(),
            ),
            DrawCommand::text(
                Point::new(page.width() / 2.0, baseline),
                self.document_name.as_str(),
                TextStyle::new(FOOTER_FONT, color(DOCUMENT_NAME_COLOR)).with_anchor(TextAnchor::Middle),
            ),
            DrawCommand::text(
                Point::new(page.width() - FOOTER_INSET, baseline),
                self.printed.as_str(),
                TextStyle::new(FOOTER_FONT, color(FOOTER_DATE_COLOR)).with_anchor(TextAnchor::End),
            ),
        ]
    }
}

/// Full-page white backdrop
pub(super) fn background(page: Size) -> DrawCommand {
    DrawCommand::filled_rect(Bounds::new_from_top_left(Point::default(), page), color(BACKGROUND))
}

/// A dashed relationship line
pub(super) fn relationship_line(from: Point, to: Point) -> DrawCommand {
    let stroke = StrokeDefinition::dashed(color(LINE_COLOR), 1.0, LINE_DASH).with_cap(StrokeCap::Round);
    DrawCommand::line(from, to, stroke)
}

/// Header, border and one text row per column of a table or view.
///
/// Other entity kinds produce no commands.
pub(super) fn box_commands(entity: Entity<'_>, origin: Point, metrics: &BoxMetrics) -> Vec<DrawCommand> {
    let (full_name, columns, is_table) = match entity {
        Entity::Table(table) => (table.full_name(), table.columns.as_slice(), true),
        Entity::View(view) => (view.full_name(), view.columns.as_slice(), false),
        Entity::Shape(_) | Entity::Label(_) => return Vec::new(),
    };
    let (border, header, tag) = if is_table {
        (TABLE_BORDER, TABLE_HEADER, "TABLE")
    } else {
        (VIEW_BORDER, VIEW_HEADER, "VIEW")
    };

    let (x, y) = (origin.x(), origin.y());
    let width = metrics.width();
    let header_height = metrics.header_height();
    let row_height = metrics.row_height();
    let header_font = metrics.header_font();
    let column_font = metrics.column_font();
    let total = Size::new(width, metrics.box_height(columns.len()));

    let mut commands = Vec::with_capacity(4 + 2 * columns.len());
    commands.push(DrawCommand::outlined_rect(
        Bounds::new_from_top_left(origin, total),
        StrokeDefinition::solid(color(border), BOX_BORDER_WIDTH),
    ));
    commands.push(DrawCommand::Rect {
        bounds: Bounds::new_from_top_left(origin, Size::new(width, header_height)),
        fill: Some(color(header)),
        fill_opacity: HEADER_OPACITY,
        stroke: None,
    });

    let header_baseline = y + header_height / 2.0 + header_font / 3.0 - 1.0;
    let header_text = color(HEADER_TEXT_COLOR);
    commands.push(DrawCommand::text(
        Point::new(x + TEXT_INSET, header_baseline),
        full_name,
        TextStyle::new(header_font, header_text).bold(),
    ));
    commands.push(DrawCommand::text(
        Point::new(x + width - TEXT_INSET, header_baseline),
        tag,
        TextStyle::new(column_font, header_text).with_anchor(TextAnchor::End),
    ));

    let text = color(TEXT_COLOR);
    let mut baseline = y + header_height + row_height / 2.0 + column_font / 3.0;
    for column in columns {
        commands.push(DrawCommand::text(
            Point::new(x + TEXT_INSET, baseline),
            column_label(column, is_table),
            TextStyle::new(column_font, text),
        ));
        commands.push(DrawCommand::text(
            Point::new(x + width - TEXT_INSET, baseline),
            column.display_type(),
            TextStyle::new(column_font, text).with_anchor(TextAnchor::End),
        ));
        baseline += row_height;
    }

    commands
}

fn column_label(column: &Column, is_table: bool) -> String {
    let mut label = String::new();
    if is_table && column.is_primary_key {
        label.push_str("PK ");
    }
    label.push_str(&column.name);
    if !column.is_nullable {
        label.push_str(" *");
    }
    label
}

/// A shape drawn as its bounding rectangle
pub(super) fn shape_commands(shape: &Shape, bounds: Bounds) -> Vec<DrawCommand> {
    let stroke = (shape.border_width > 0).then(|| {
        StrokeDefinition::solid(
            Color::parse_or(&shape.border_color, Color::default()),
            f64::from(shape.border_width),
        )
    });

    vec![DrawCommand::Rect {
        bounds,
        fill: shape.fill_color.to_color(),
        fill_opacity: 1.0,
        stroke,
    }]
}

/// A label's colored rectangle and its wrapped text lines.
///
/// `scale` multiplies the text metrics; wrapping always uses the label's
/// stored size so both modes break lines identically.
pub(super) fn label_commands(label: &Label, bounds: Bounds, scale: f64) -> Vec<DrawCommand> {
    let mut commands = vec![DrawCommand::Rect {
        bounds,
        fill: Some(label.color.to_color()),
        fill_opacity: 1.0,
        stroke: Some(StrokeDefinition::solid(color(LABEL_BORDER), 1.0)),
    }];

    let padding = LABEL_PADDING * scale;
    let font = LABEL_FONT * scale;
    let line_height = LABEL_LINE_HEIGHT * scale;
    let text = color(TEXT_COLOR);

    let lines = wrap_label_text(&label.text, label.width, label.height);
    for (row, line) in lines.into_iter().enumerate() {
        let baseline = bounds.min_y() + padding + font + row as f64 * line_height;
        commands.push(DrawCommand::text(
            Point::new(bounds.min_x() + padding, baseline),
            line,
            TextStyle::new(font, text),
        ));
    }

    commands
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use float_cmp::assert_approx_eq;

    use folio_core::{
        color::Fill,
        model::{Table, View},
    };

    use super::*;

    fn text_at(command: &DrawCommand) -> (Point, &str) {
        match command {
            DrawCommand::Text { position, content, .. } => (*position, content.as_str()),
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_table_box_layout() {
        let table = Table::new("dbo", "Orders")
            .add_column(Column::new("Id", "int").primary_key())
            .add_column(Column::new("Note", "nvarchar").nullable());
        let commands = box_commands(Entity::Table(&table), Point::new(100.0, 200.0), &BoxMetrics::actual_size());
        assert_eq!(commands.len(), 8);

        let DrawCommand::Rect { bounds, fill, .. } = &commands[0] else {
            panic!("expected border rect");
        };
        assert!(fill.is_none());
        assert_approx_eq!(f64, bounds.height(), 49.0);

        let (position, name) = text_at(&commands[2]);
        assert_eq!(name, "dbo.Orders");
        assert_approx_eq!(f64, position.x(), 106.0);
        assert_approx_eq!(f64, position.y(), 200.0 + 8.5 + 11.0 / 3.0 - 1.0);

        assert_eq!(text_at(&commands[3]).1, "TABLE");
        assert_approx_eq!(f64, text_at(&commands[3]).0.x(), 294.0);

        let (position, first) = text_at(&commands[4]);
        assert_eq!(first, "PK Id *");
        assert_approx_eq!(f64, position.y(), 200.0 + 17.0 + 8.0 + 8.0 / 3.0);
        assert_eq!(text_at(&commands[5]).1, "int");

        let (position, second) = text_at(&commands[6]);
        assert_eq!(second, "Note");
        assert_approx_eq!(f64, position.y(), 200.0 + 17.0 + 8.0 + 8.0 / 3.0 + 16.0);
        assert_eq!(text_at(&commands[7]).1, "nvarchar(max)");
    }

    #[test]
    fn test_view_columns_never_marked_primary() {
        let view = View::new("dbo", "Recent").add_column(Column::new("Id", "int").primary_key());
        let commands = box_commands(Entity::View(&view), Point::default(), &BoxMetrics::actual_size());
        assert_eq!(text_at(&commands[3]).1, "VIEW");
        assert_eq!(text_at(&commands[4]).1, "Id *");
    }

    #[test]
    fn test_shape_without_border() {
        let mut shape = Shape::new(0.0, 0.0).with_fill(Fill::Solid("#ff0000".to_string()));
        shape.border_width = 0;
        let commands = shape_commands(&shape, shape_bounds(&shape));

        let DrawCommand::Rect { fill, stroke, .. } = &commands[0] else {
            panic!("expected rect");
        };
        assert!(fill.is_some());
        assert!(stroke.is_none());
    }

    #[test]
    fn test_transparent_shape_has_no_fill() {
        let shape = Shape::new(0.0, 0.0);
        let commands = shape_commands(&shape, shape_bounds(&shape));
        let DrawCommand::Rect { fill, stroke, .. } = &commands[0] else {
            panic!("expected rect");
        };
        assert!(fill.is_none());
        assert_eq!(stroke.as_ref().map(StrokeDefinition::width), Some(1.0));
    }

    #[test]
    fn test_label_text_lines() {
        let label = Label::new(10.0, 20.0).with_text("one two").with_size(50.0, 60.0);
        let bounds = Bounds::new_from_top_left(Point::new(10.0, 20.0), Size::new(50.0, 60.0));
        let commands = label_commands(&label, bounds, 1.0);

        let lines: Vec<(Point, &str)> = commands[1..].iter().map(text_at).collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], (Point::new(16.0, 36.0), "one"));
        assert_eq!(lines[1], (Point::new(16.0, 50.0), "two"));
    }

    #[test]
    fn test_footer_positions() {
        let printed = NaiveDate::from_ymd_opt(2026, 1, 2)
            .and_then(|date| date.and_hms_opt(3, 4, 5))
            .unwrap();
        let title = TitleBlock::new("Folio", "Sales", printed);
        let commands = title.commands(Size::new(800.0, 600.0));

        assert_eq!(text_at(&commands[0]), (Point::new(12.0, 588.0), "Folio"));
        assert_eq!(text_at(&commands[1]), (Point::new(400.0, 588.0), "Sales"));
        assert_eq!(text_at(&commands[2]), (Point::new(788.0, 588.0), "Printed: 2026-01-02 03:04"));
    }

    fn shape_bounds(shape: &Shape) -> Bounds {
        Bounds::new_from_top_left(Point::new(shape.x, shape.y), Size::new(shape.width, shape.height))
    }
}
