//! Scaled single-sheet export.
//!
//! Every entity is measured with the coarse sheet-bounds metrics, the padded
//! union is fitted into the sheet, and boxes are drawn with fonts that
//! never shrink below a legible floor.

use log::{debug, trace};

use folio_core::{
    draw::{LayeredOutput, RenderLayer},
    geometry::{Bounds, Point, Size},
    model::{Boundable, BoxMetrics, DatabaseSchema, Entity},
};

use super::{
    ExportPage,
    render::{self, TitleBlock},
};
use crate::{graph::RelationshipGraph, transform::ScaledSheet};

/// Renders the whole schema onto one sheet of `sheet` points.
pub(super) fn render_sheet(schema: &DatabaseSchema, title: &TitleBlock, sheet: Size) -> ExportPage {
    let content = content_bounds(schema);
    let fit = ScaledSheet::fit(content, sheet);
    let metrics = BoxMetrics::scaled_sheet(fit.scale());
    debug!(scale = fit.scale(); "Scaled sheet fitted");

    let mut output = LayeredOutput::new();
    output.add_to_layer(RenderLayer::Background, render::background(sheet));

    let graph = RelationshipGraph::build(schema);
    for resolved in graph.resolved() {
        output.add_to_layer(
            RenderLayer::Relationship,
            render::relationship_line(fit.to_sheet(resolved.from_anchor()), fit.to_sheet(resolved.to_anchor())),
        );
    }

    let mut entities: Vec<Entity<'_>> = schema.entities().collect();
    entities.sort_by_key(Entity::z_index);
    for entity in entities {
        let origin = fit.to_sheet(entity.position());
        let drawn = match entity {
            Entity::Table(_) | Entity::View(_) => origin.to_bounds(entity.size_with(&metrics)),
            Entity::Shape(_) | Entity::Label(_) => {
                origin.to_bounds(entity.bounds().to_size().scale(fit.scale()))
            }
        };

        if is_off_sheet(drawn, sheet) {
            trace!(entity:% = entity.key(); "Skipping entity outside the sheet");
            continue;
        }

        let commands = match entity {
            Entity::Table(_) | Entity::View(_) => render::box_commands(entity, origin, &metrics),
            Entity::Shape(shape) => render::shape_commands(shape, drawn),
            Entity::Label(label) => render::label_commands(label, drawn, fit.scale()),
        };
        output.extend_layer(render::entity_layer(entity.kind()), commands);
    }

    output.extend_layer(RenderLayer::Footer, title.commands(sheet));

    ExportPage {
        index: None,
        width_points: sheet.width(),
        height_points: sheet.height(),
        content_size: sheet,
        layers: output.into_groups(),
    }
}

/// Union of every entity under the sheet-bounds metrics
fn content_bounds(schema: &DatabaseSchema) -> Bounds {
    let metrics = BoxMetrics::sheet_bounds();
    schema
        .entities()
        .map(|entity| entity.bounds_with(&metrics))
        .reduce(|acc, bounds| acc.merge(&bounds))
        .unwrap_or_else(|| Point::default().to_bounds(Size::default()))
}

fn is_off_sheet(drawn: Bounds, sheet: Size) -> bool {
    drawn.max_x() < 0.0
        || drawn.max_y() < 0.0
        || drawn.min_x() > sheet.width()
        || drawn.min_y() > sheet.height()
}
