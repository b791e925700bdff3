//! Connected-component highlighting for a hovered table or view.

use indexmap::IndexSet;

use folio_core::model::EntityKey;

use crate::graph::RelationshipGraph;

/// Dim and highlight flags for the current hover focus.
///
/// While a focus is set, every table, view and resolved relationship line is
/// dimmed except the focused box, the lines touching it and the boxes at the
/// far end of those lines. Shapes and labels are never dimmed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HighlightState {
    focus: Option<EntityKey>,
    entities: IndexSet<EntityKey>,
    relationships: IndexSet<usize>,
}

impl HighlightState {
    /// Computes the highlight set around `focus`
    pub fn focus_on(graph: &RelationshipGraph<'_>, focus: &EntityKey) -> Self {
        let name = focus.id();

        let mut entities = IndexSet::new();
        entities.insert(focus.clone());
        entities.extend(graph.neighbors(name));

        let relationships = graph
            .connections(name)
            .into_iter()
            .map(|resolved| resolved.index())
            .collect();

        Self {
            focus: Some(focus.clone()),
            entities,
            relationships,
        }
    }

    pub fn is_active(&self) -> bool {
        self.focus.is_some()
    }

    pub fn focus(&self) -> Option<&EntityKey> {
        self.focus.as_ref()
    }

    /// Clears every dim and highlight flag
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_entity_highlighted(&self, key: &EntityKey) -> bool {
        self.entities.contains(key)
    }

    pub fn is_entity_dimmed(&self, key: &EntityKey) -> bool {
        self.is_active() && key.is_box() && !self.entities.contains(key)
    }

    /// Whether the relationship at `index` in the schema is highlighted
    pub fn is_relationship_highlighted(&self, index: usize) -> bool {
        self.relationships.contains(&index)
    }

    pub fn is_relationship_dimmed(&self, index: usize) -> bool {
        self.is_active() && !self.relationships.contains(&index)
    }

    /// Highlighted boxes, the focus first
    pub fn highlighted_entities(&self) -> impl Iterator<Item = &EntityKey> {
        self.entities.iter()
    }
}

#[cfg(test)]
mod tests {
    use folio_core::model::{DatabaseSchema, Relationship, Table};

    use super::*;

    fn key(name: &str) -> EntityKey {
        EntityKey::Table(name.to_string())
    }

    fn schema() -> DatabaseSchema {
        let mut schema = DatabaseSchema::new();
        for name in ["A", "B", "C", "D"] {
            schema.tables.push(Table::new("dbo", name));
        }
        schema
            .relationships
            .push(Relationship::new("dbo.A", "BId", "dbo.B", "Id"));
        schema
            .relationships
            .push(Relationship::new("dbo.C", "AId", "dbo.A", "Id"));
        schema
            .relationships
            .push(Relationship::new("dbo.C", "DId", "dbo.D", "Id"));
        schema
            .relationships
            .push(Relationship::new("dbo.A", "XId", "dbo.Missing", "Id"));
        schema
    }

    #[test]
    fn test_focus_lights_direct_neighbors_only() {
        let schema = schema();
        let graph = RelationshipGraph::build(&schema);
        let state = HighlightState::focus_on(&graph, &key("dbo.A"));

        assert!(state.is_active());
        assert!(state.is_entity_highlighted(&key("dbo.A")));
        assert!(state.is_entity_highlighted(&key("dbo.B")));
        assert!(state.is_entity_highlighted(&key("dbo.C")));
        assert!(state.is_entity_dimmed(&key("dbo.D")));

        assert!(state.is_relationship_highlighted(0));
        assert!(state.is_relationship_highlighted(1));
        assert!(state.is_relationship_dimmed(2));
        // Dangling relationships are never highlighted
        assert!(!state.is_relationship_highlighted(3));
    }

    #[test]
    fn test_annotations_never_dimmed() {
        let schema = schema();
        let graph = RelationshipGraph::build(&schema);
        let state = HighlightState::focus_on(&graph, &key("dbo.D"));

        assert!(!state.is_entity_dimmed(&EntityKey::Shape("s1".to_string())));
        assert!(!state.is_entity_dimmed(&EntityKey::Label("l1".to_string())));
    }

    #[test]
    fn test_clear() {
        let schema = schema();
        let graph = RelationshipGraph::build(&schema);
        let mut state = HighlightState::focus_on(&graph, &key("dbo.A"));
        state.clear();

        assert!(!state.is_active());
        assert!(!state.is_entity_dimmed(&key("dbo.D")));
        assert!(!state.is_relationship_dimmed(2));
        assert_eq!(state.highlighted_entities().count(), 0);
    }
}
