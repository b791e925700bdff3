//! Relationship graph resolver.
//!
//! Relationships name their endpoints by `schema.name` strings rather than
//! holding handles. [`RelationshipGraph`] performs the lookup against a
//! schema snapshot once, keeping the relationships whose both endpoints
//! resolve to a live table or view. Unresolved relationships are skipped for
//! every consumer; they are never an error.

use indexmap::{IndexMap, IndexSet};
use log::{debug, warn};
use petgraph::{
    graph::{NodeIndex, UnGraph},
    visit::EdgeRef,
};

use folio_core::{
    geometry::Point,
    model::{ANCHOR_OFFSET, Boundable, DatabaseSchema, Entity, EntityKey, Relationship},
};

/// A relationship whose endpoints both resolved.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedRelationship<'a> {
    index: usize,
    relationship: &'a Relationship,
    from: Entity<'a>,
    to: Entity<'a>,
}

impl<'a> ResolvedRelationship<'a> {
    /// Position of the relationship in the schema's relationship list
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn relationship(&self) -> &'a Relationship {
        self.relationship
    }

    pub fn from(&self) -> Entity<'a> {
        self.from
    }

    pub fn to(&self) -> Entity<'a> {
        self.to
    }

    /// Logical line endpoint on the `from` box
    pub fn from_anchor(&self) -> Point {
        self.from.position().add_point(ANCHOR_OFFSET)
    }

    /// Logical line endpoint on the `to` box
    pub fn to_anchor(&self) -> Point {
        self.to.position().add_point(ANCHOR_OFFSET)
    }

    /// Returns the endpoint opposite to `name`, if `name` is an endpoint
    pub fn other_end(&self, name: &str) -> Option<Entity<'a>> {
        self.relationship
            .other_end(name)
            .map(|other| if other == self.relationship.from_table { self.from } else { self.to })
    }
}

/// Name-indexed view of the tables, views and relationships of a schema.
#[derive(Debug)]
pub struct RelationshipGraph<'a> {
    names: IndexMap<String, Entity<'a>>,
    nodes: Vec<NodeIndex>,
    graph: UnGraph<usize, usize>,
    resolved: Vec<ResolvedRelationship<'a>>,
    skipped: usize,
}

impl<'a> RelationshipGraph<'a> {
    /// Resolves every relationship in `schema` by exact full-name match.
    ///
    /// When a table and a view share a full name the table wins.
    pub fn build(schema: &'a DatabaseSchema) -> Self {
        let mut names: IndexMap<String, Entity<'a>> = IndexMap::new();
        for entity in schema.boxes() {
            let key = entity.key();
            if names.contains_key(key.id()) {
                warn!(name = key.id(); "Duplicate full name, keeping the first entity");
                continue;
            }
            names.insert(key.id().to_string(), entity);
        }

        let mut graph = UnGraph::with_capacity(names.len(), schema.relationships.len());
        let nodes: Vec<NodeIndex> = (0..names.len()).map(|slot| graph.add_node(slot)).collect();

        let mut resolved = Vec::new();
        let mut skipped = 0;
        for (index, relationship) in schema.relationships.iter().enumerate() {
            let from = names.get_full(relationship.from_table.as_str());
            let to = names.get_full(relationship.to_table.as_str());

            match (from, to) {
                (Some((from_slot, _, from)), Some((to_slot, _, to))) => {
                    graph.add_edge(nodes[from_slot], nodes[to_slot], resolved.len());
                    resolved.push(ResolvedRelationship {
                        index,
                        relationship,
                        from: *from,
                        to: *to,
                    });
                }
                _ => {
                    skipped += 1;
                    warn!(
                        from = relationship.from_table,
                        to = relationship.to_table;
                        "Skipping relationship with unresolved endpoint"
                    );
                }
            }
        }

        debug!(resolved = resolved.len(), skipped; "Relationship graph built");

        Self {
            names,
            nodes,
            graph,
            resolved,
            skipped,
        }
    }

    /// Finds the live table or view named `name`
    pub fn lookup(&self, name: &str) -> Option<Entity<'a>> {
        self.names.get(name).copied()
    }

    /// Resolves both endpoints of `relationship`, or `None` to skip it
    pub fn resolve(&self, relationship: &Relationship) -> Option<(Entity<'a>, Entity<'a>)> {
        let from = self.lookup(&relationship.from_table)?;
        let to = self.lookup(&relationship.to_table)?;
        Some((from, to))
    }

    /// Resolved relationships in schema order
    pub fn resolved(&self) -> &[ResolvedRelationship<'a>] {
        &self.resolved
    }

    /// Number of relationships skipped for an unresolved endpoint
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Resolved relationships with `name` at either end, in schema order
    pub fn connections(&self, name: &str) -> Vec<&ResolvedRelationship<'a>> {
        let Some(slot) = self.names.get_index_of(name) else {
            return Vec::new();
        };

        let mut edges: IndexSet<usize> = self
            .graph
            .edges(self.nodes[slot])
            .map(|edge| *edge.weight())
            .collect();
        edges.sort();

        edges.iter().map(|&edge| &self.resolved[edge]).collect()
    }

    /// Entities at the far end of every connection of `name`, without repeats
    pub fn neighbors(&self, name: &str) -> Vec<EntityKey> {
        let Some(slot) = self.names.get_index_of(name) else {
            return Vec::new();
        };
        let node = self.nodes[slot];

        let mut keys: IndexSet<EntityKey> = IndexSet::new();
        for edge in self.graph.edges(node) {
            let other = if edge.source() == node {
                edge.target()
            } else {
                edge.source()
            };
            let other_slot = self.graph[other];
            if let Some((_, entity)) = self.names.get_index(other_slot) {
                keys.insert(entity.key());
            }
        }
        keys.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use folio_core::model::{Table, View};

    use super::*;

    fn schema() -> DatabaseSchema {
        let mut schema = DatabaseSchema::new();
        schema
            .tables
            .push(Table::new("dbo", "Orders").with_position(30.0, 30.0));
        schema
            .tables
            .push(Table::new("dbo", "Customers").with_position(310.0, 30.0));
        schema
            .tables
            .push(Table::new("dbo", "Products").with_position(590.0, 30.0));
        schema.views.push(View::new("dbo", "OpenOrders"));
        schema.relationships.push(Relationship::new(
            "dbo.Orders",
            "CustomerId",
            "dbo.Customers",
            "Id",
        ));
        schema.relationships.push(Relationship::new(
            "dbo.Orders",
            "ProductId",
            "dbo.Gone",
            "Id",
        ));
        schema.relationships.push(Relationship::new(
            "dbo.OpenOrders",
            "OrderId",
            "dbo.Orders",
            "Id",
        ));
        schema
    }

    #[test]
    fn test_resolution_skips_dangling() {
        let schema = schema();
        let graph = RelationshipGraph::build(&schema);

        assert_eq!(graph.resolved().len(), 2);
        assert_eq!(graph.skipped(), 1);
        assert_eq!(graph.resolved()[0].index(), 0);
        assert_eq!(graph.resolved()[1].index(), 2);
        assert!(graph.resolve(&schema.relationships[1]).is_none());
    }

    #[test]
    fn test_anchors() {
        let schema = schema();
        let graph = RelationshipGraph::build(&schema);
        let first = graph.resolved()[0];

        assert_eq!(first.from_anchor(), Point::new(130.0, 80.0));
        assert_eq!(first.to_anchor(), Point::new(410.0, 80.0));
    }

    #[test]
    fn test_connections_and_neighbors() {
        let schema = schema();
        let graph = RelationshipGraph::build(&schema);

        let connections = graph.connections("dbo.Orders");
        assert_eq!(connections.len(), 2);

        let neighbors = graph.neighbors("dbo.Orders");
        assert_eq!(neighbors.len(), 2);
        assert!(neighbors.contains(&EntityKey::Table("dbo.Customers".to_string())));
        assert!(neighbors.contains(&EntityKey::View("dbo.OpenOrders".to_string())));

        assert!(graph.connections("dbo.Products").is_empty());
        assert!(graph.neighbors("dbo.Missing").is_empty());
    }

    #[test]
    fn test_self_reference() {
        let mut schema = DatabaseSchema::new();
        schema.tables.push(Table::new("hr", "Employees"));
        schema.relationships.push(Relationship::new(
            "hr.Employees",
            "ManagerId",
            "hr.Employees",
            "Id",
        ));

        let graph = RelationshipGraph::build(&schema);
        assert_eq!(graph.connections("hr.Employees").len(), 1);
        assert_eq!(
            graph.neighbors("hr.Employees"),
            vec![EntityKey::Table("hr.Employees".to_string())]
        );
    }

    #[test]
    fn test_table_wins_name_clash() {
        let mut schema = DatabaseSchema::new();
        schema.views.push(View::new("dbo", "Orders"));
        schema.tables.push(Table::new("dbo", "Orders"));

        let graph = RelationshipGraph::build(&schema);
        assert!(matches!(graph.lookup("dbo.Orders"), Some(Entity::Table(_))));
    }

    #[test]
    fn test_other_end() {
        let schema = schema();
        let graph = RelationshipGraph::build(&schema);
        let first = graph.resolved()[0];

        let other = first.other_end("dbo.Orders").unwrap();
        assert_eq!(other.key(), EntityKey::Table("dbo.Customers".to_string()));
        assert!(first.other_end("dbo.Products").is_none());
    }
}
