//! Layer-based ordering for the drawing instruction stream.
//!
//! Each exported page is assembled out of order (a box can be emitted before
//! the relationship lines beneath it), so commands are tagged with a
//! [`RenderLayer`] and sorted when the page is finished.
//!
//! # Example
//!
//! ```
//! # use folio_core::color::Color;
//! # use folio_core::draw::{DrawCommand, LayeredOutput, RenderLayer, TextStyle};
//! # use folio_core::geometry::Point;
//! let mut output = LayeredOutput::new();
//!
//! let style = TextStyle::new(9.0, Color::default());
//! output.add_to_layer(RenderLayer::Footer, DrawCommand::text(Point::new(12.0, 100.0), "Folio", style));
//! output.add_to_layer(RenderLayer::Background, DrawCommand::text(Point::default(), "bg", TextStyle::new(9.0, Color::default())));
//!
//! let commands = output.render();
//! assert_eq!(commands[0].as_text(), Some("bg"));
//! ```

use crate::draw::DrawCommand;

/// The z-order layers of an exported page.
///
/// Layers are rendered from bottom to top in the order defined by variant
/// declaration. The `Ord` derive uses declaration order, so the first variant
/// renders first (bottom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Page background - renders first
    Background,
    /// Relationship lines between boxes
    Relationship,
    Table,
    View,
    Shape,
    Label,
    /// Title block - renders last
    Footer,
}

impl RenderLayer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Relationship => "relationship",
            Self::Table => "table",
            Self::View => "view",
            Self::Shape => "shape",
            Self::Label => "label",
            Self::Footer => "footer",
        }
    }
}

/// Drawing commands grouped by rendering layer.
///
/// Commands within one layer keep their insertion order.
#[derive(Debug, Default, Clone)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, DrawCommand)>,
}

impl LayeredOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single command to the specified layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, command: DrawCommand) {
        self.items.push((layer, command));
    }

    /// Adds several commands to one layer, preserving their order.
    pub fn extend_layer(
        &mut self,
        layer: RenderLayer,
        commands: impl IntoIterator<Item = DrawCommand>,
    ) {
        self.items
            .extend(commands.into_iter().map(|command| (layer, command)));
    }

    /// Merges all layers from another `LayeredOutput` into this one.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    /// Returns `true` if there are no commands in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the commands tagged with `layer`, in insertion order.
    pub fn layer(&self, layer: RenderLayer) -> impl Iterator<Item = &DrawCommand> {
        self.items
            .iter()
            .filter(move |(item_layer, _)| *item_layer == layer)
            .map(|(_, command)| command)
    }

    /// Groups the commands by layer, bottom layer first, consuming the output.
    ///
    /// Empty layers are skipped.
    pub fn into_groups(mut self) -> Vec<(RenderLayer, Vec<DrawCommand>)> {
        // Stable sort keeps insertion order within a layer
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut groups: Vec<(RenderLayer, Vec<DrawCommand>)> = Vec::new();
        for (layer, command) in self.items {
            match groups.last_mut() {
                Some((current, commands)) if *current == layer => commands.push(command),
                _ => groups.push((layer, vec![command])),
            }
        }
        groups
    }

    /// Flattens all layers into one command stream, bottom layer first.
    pub fn render(self) -> Vec<DrawCommand> {
        self.into_groups()
            .into_iter()
            .flat_map(|(_, commands)| commands)
            .collect()
    }
}
