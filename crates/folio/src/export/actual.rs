//! Actual-size multi-page export.

use log::debug;

use folio_core::{
    draw::{LayeredOutput, RenderLayer},
    geometry::Size,
    model::{BoxMetrics, Entity},
};

use super::{
    ExportPage,
    render::{self, TitleBlock},
};
use crate::pagination::{Page, Pagination, PlacedItem};

/// One export page per pagination cell, row-major.
///
/// Content is authored in canvas units relative to each page origin; the
/// physical size is `sheet` points.
pub(super) fn render_pages(pagination: &Pagination<'_>, title: &TitleBlock, sheet: Size) -> Vec<ExportPage> {
    let page_size = pagination.geometry().page_size();
    pagination
        .pages()
        .iter()
        .map(|page| render_page(page, page_size, title, sheet))
        .collect()
}

fn render_page(page: &Page<'_>, page_size: Size, title: &TitleBlock, sheet: Size) -> ExportPage {
    let metrics = BoxMetrics::actual_size();
    let mut output = LayeredOutput::new();

    output.add_to_layer(RenderLayer::Background, render::background(page_size));

    for line in page.lines() {
        output.add_to_layer(RenderLayer::Relationship, render::relationship_line(line.from(), line.to()));
    }

    let mut items: Vec<&PlacedItem<'_>> = page.items().iter().collect();
    items.sort_by_key(|item| item.entity().z_index());
    for item in items {
        let entity = item.entity();
        let commands = match entity {
            Entity::Table(_) | Entity::View(_) => render::box_commands(entity, item.position(), &metrics),
            Entity::Shape(shape) => render::shape_commands(shape, item.bounds()),
            Entity::Label(label) => render::label_commands(label, item.bounds(), 1.0),
        };
        output.extend_layer(render::entity_layer(entity.kind()), commands);
    }

    output.extend_layer(RenderLayer::Footer, title.commands(page_size));

    debug!(page:% = page.index(), commands = output.len(); "Page rendered");
    ExportPage {
        index: Some(page.index()),
        width_points: sheet.width(),
        height_points: sheet.height(),
        content_size: page_size,
        layers: output.into_groups(),
    }
}
