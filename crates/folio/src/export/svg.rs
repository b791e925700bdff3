//! SVG encoding of export pages.
//!
//! Each page becomes one standalone SVG document. `width` and `height` carry
//! the physical size in points while `viewBox` spans the content units the
//! commands were authored in, so a print engine reconciles the two scales.

use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use log::{debug, error, info};
use svg::{
    Document,
    node::{Text as SvgText, element as svg_element},
};

use folio_core::draw::{DrawCommand, FONT_FAMILY, FontWeight, StrokeCap, StrokeDefinition, TextAnchor};

use super::{Error, ExportDocument, ExportPage, Exporter};

/// Encodes one page as an SVG document string.
///
/// # Errors
///
/// Returns [`Error::Render`] when the page size or any coordinate is not a
/// finite number.
pub fn encode_page(page: &ExportPage) -> Result<String, Error> {
    Ok(render_page(page)?.to_string())
}

/// Builds the SVG document tree for one page
pub fn render_page(page: &ExportPage) -> Result<Document, Error> {
    let content = page.content_size();
    ensure_finite(
        "page size",
        &[content.width(), content.height(), page.width_points(), page.height_points()],
    )?;

    let mut doc = Document::new()
        .set("viewBox", format!("0 0 {} {}", content.width(), content.height()))
        .set("width", format!("{}pt", page.width_points()))
        .set("height", format!("{}pt", page.height_points()));

    for (layer, commands) in page.layers() {
        let mut group = svg_element::Group::new().set("data-layer", layer.name());
        for command in commands {
            group = add_command(group, command)?;
        }
        doc = doc.add(group);
    }

    Ok(doc)
}

fn add_command(group: svg_element::Group, command: &DrawCommand) -> Result<svg_element::Group, Error> {
    match command {
        DrawCommand::Rect {
            bounds,
            fill,
            fill_opacity,
            stroke,
        } => {
            ensure_finite(
                "rectangle",
                &[bounds.min_x(), bounds.min_y(), bounds.width(), bounds.height(), *fill_opacity],
            )?;

            let mut rect = svg_element::Rectangle::new()
                .set("x", bounds.min_x())
                .set("y", bounds.min_y())
                .set("width", bounds.width())
                .set("height", bounds.height());

            rect = match fill {
                Some(color) => rect
                    .set("fill", color.to_string())
                    .set("fill-opacity", f64::from(color.alpha()) * fill_opacity),
                None => rect.set("fill", "none"),
            };
            if let Some(stroke) = stroke {
                rect = apply_stroke(rect, stroke)?;
            }
            Ok(group.add(rect))
        }
        DrawCommand::Line { from, to, stroke } => {
            ensure_finite("line", &[from.x(), from.y(), to.x(), to.y()])?;

            let line = svg_element::Line::new()
                .set("x1", from.x())
                .set("y1", from.y())
                .set("x2", to.x())
                .set("y2", to.y());
            Ok(group.add(apply_stroke(line, stroke)?))
        }
        DrawCommand::Text {
            position,
            content,
            style,
        } => {
            ensure_finite("text", &[position.x(), position.y(), style.font_size()])?;

            let mut text = svg_element::Text::new("")
                .set("x", position.x())
                .set("y", position.y())
                .set("font-family", FONT_FAMILY)
                .set("font-size", style.font_size())
                .set("fill", style.color().to_string());
            if style.anchor() != TextAnchor::Start {
                text = text.set("text-anchor", style.anchor().name());
            }
            if style.weight() == FontWeight::Bold {
                text = text.set("font-weight", style.weight().name());
            }
            Ok(group.add(text.add(SvgText::new(content.as_str()))))
        }
    }
}

fn apply_stroke<T>(element: T, stroke: &StrokeDefinition) -> Result<T, Error>
where
    T: svg::Node,
{
    ensure_finite("stroke width", &[stroke.width()])?;

    let mut element = element;
    element.assign("stroke", stroke.color().to_string());
    element.assign("stroke-width", stroke.width());
    if let Some(dasharray) = stroke.style().dasharray() {
        element.assign("stroke-dasharray", dasharray);
    }
    if stroke.cap() != StrokeCap::Butt {
        element.assign("stroke-linecap", stroke.cap().name());
    }
    Ok(element)
}

fn ensure_finite(what: &str, values: &[f64]) -> Result<(), Error> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(Error::Render(format!("{what} has a non-finite coordinate")))
    }
}

/// SVG exporter writing one file per page into a directory.
///
/// Files are named `{stem}-page-{n}.svg`, numbered from one in row-major
/// page order.
#[derive(Debug)]
pub struct Svg {
    output_dir: PathBuf,
    file_stem: String,
    written: Vec<PathBuf>,
}

impl Svg {
    pub fn new(output_dir: impl Into<PathBuf>, file_stem: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            file_stem: file_stem.into(),
            written: Vec::new(),
        }
    }

    /// Paths written so far
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// The path page `number` (one based) is written to
    pub fn page_path(&self, number: usize) -> PathBuf {
        self.output_dir
            .join(format!("{}-page-{number}.svg", self.file_stem))
    }

    /// Writes an SVG document to `path`
    pub fn write_document(&self, path: &Path, doc: &Document) -> Result<(), Error> {
        info!(file_name:% = path.display(); "Creating SVG file");
        let mut file = match File::create(path) {
            Ok(file) => file,
            Err(err) => {
                error!(file_name:% = path.display(), err:err; "Failed to create SVG file");
                return Err(Error::Io(err));
            }
        };

        if let Err(err) = write!(file, "{doc}") {
            error!(file_name:% = path.display(), err:err; "Failed to write SVG content");
            return Err(Error::Io(err));
        }

        Ok(())
    }
}

impl Exporter for Svg {
    fn export_document(&mut self, document: &ExportDocument) -> Result<(), Error> {
        for (offset, page) in document.pages().iter().enumerate() {
            let doc = render_page(page)?;
            debug!(page = offset + 1; "SVG document rendered");

            let path = self.page_path(offset + 1);
            self.write_document(&path, &doc)?;
            self.written.push(path);
        }
        Ok(())
    }
}
