use crate::Recipe;
use biofed_model::{Entity, Repository};
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::{HashMap, VecDeque};

/// The schema of a single repository: its entities and the recipes connecting them.
///
/// An edge `(source, target, recipe)` states that `target` can be bound by `recipe` once
/// `source` is bound. The recipe may require further entities, which is why the required
/// entities live on the recipe and not on the edge.
#[derive(Debug, Clone)]
pub struct RepositoryGraph {
    repository: Repository,
    entities: Vec<Entity>,
    edges: Vec<(Entity, Entity, Recipe)>,
}

impl RepositoryGraph {
    pub fn new(repository: Repository) -> Self {
        Self {
            repository,
            entities: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn repository(&self) -> Repository {
        self.repository
    }

    pub fn add_entity(&mut self, entity: impl Into<Entity>) -> &mut Self {
        let entity = entity.into();
        if !self.entities.contains(&entity) {
            self.entities.push(entity);
        }
        self
    }

    pub fn add_entities<E: Into<Entity>>(
        &mut self,
        entities: impl IntoIterator<Item = E>,
    ) -> &mut Self {
        for entity in entities {
            self.add_entity(entity);
        }
        self
    }

    /// Registers `recipe` as a way to produce `target` from `source`. Both ends are added as
    /// entities if they are not registered yet.
    pub fn add_recipe(
        &mut self,
        source: impl Into<Entity>,
        target: impl Into<Entity>,
        recipe: Recipe,
    ) -> &mut Self {
        let source = source.into();
        let target = target.into();
        self.add_entity(source);
        self.add_entity(target);
        self.edges.push((source, target, recipe));
        self
    }

    /// Registers a [`Recipe::triple`] owned by this repository.
    pub fn add_triple(
        &mut self,
        source: impl Into<Entity>,
        predicate: &str,
        target: impl Into<Entity>,
    ) -> &mut Self {
        let source = source.into();
        let target = target.into();
        let recipe = Recipe::triple(self.repository, source, predicate, target);
        self.add_recipe(source, target, recipe)
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }
}

/// The merged schema of all repositories.
///
/// Nodes are keyed by entity identity, so an entity registered by several repositories (a
/// bridge) becomes a single node that connects their recipes. The graph is built once and only
/// read afterwards.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeGraph {
    graph: DiGraph<Entity, Recipe>,
    nodes: HashMap<Entity, NodeIndex>,
}

impl KnowledgeGraph {
    /// Merges `graphs` into one graph. Edge indices follow registration order, which makes
    /// the path search deterministic.
    pub fn compose(graphs: impl IntoIterator<Item = RepositoryGraph>) -> Self {
        let mut result = Self::default();
        for repository_graph in graphs {
            for entity in &repository_graph.entities {
                result.node(*entity);
            }
            for (source, target, recipe) in repository_graph.edges {
                let source = result.node(source);
                let target = result.node(target);
                result.graph.add_edge(source, target, recipe);
            }
            tracing::debug!(
                repository = %repository_graph.repository,
                nodes = result.graph.node_count(),
                edges = result.graph.edge_count(),
                "Composed repository graph"
            );
        }
        result
    }

    fn node(&mut self, entity: Entity) -> NodeIndex {
        *self
            .nodes
            .entry(entity)
            .or_insert_with(|| self.graph.add_node(entity))
    }

    pub fn contains(&self, entity: impl Into<Entity>) -> bool {
        self.nodes.contains_key(&entity.into())
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Breadth-first shortest paths from `root`, or [`None`] if `root` is not part of the
    /// graph.
    ///
    /// Outgoing edges are visited in registration order and the first discovery of a node
    /// wins, so every reachable entity has exactly one shortest path.
    pub fn shortest_paths(&self, root: impl Into<Entity>) -> Option<ShortestPaths<'_>> {
        let root = root.into();
        let start = *self.nodes.get(&root)?;

        let mut parents = HashMap::new();
        let mut depths = HashMap::from([(start, 0)]);
        let mut queue = VecDeque::from([start]);
        while let Some(node) = queue.pop_front() {
            let depth = depths[&node];
            let mut edges: Vec<_> = self.graph.edges(node).collect();
            edges.sort_by_key(|edge| edge.id());
            for edge in edges {
                let target = edge.target();
                if depths.contains_key(&target) {
                    continue;
                }
                depths.insert(target, depth + 1);
                parents.insert(target, edge.id());
                queue.push_back(target);
            }
        }

        Some(ShortestPaths {
            graph: self,
            root,
            parents,
            depths,
        })
    }
}

/// The shortest path tree of a [`KnowledgeGraph`] rooted at one entity.
#[derive(Debug)]
pub struct ShortestPaths<'graph> {
    graph: &'graph KnowledgeGraph,
    root: Entity,
    parents: HashMap<NodeIndex, EdgeIndex>,
    depths: HashMap<NodeIndex, usize>,
}

/// A recipe edge selected by the path search.
#[derive(Debug, Clone, Copy)]
pub struct PathEdge<'graph> {
    pub id: EdgeIndex,
    pub source: Entity,
    pub target: Entity,
    pub recipe: &'graph Recipe,
}

impl<'graph> ShortestPaths<'graph> {
    pub fn root(&self) -> Entity {
        self.root
    }

    /// The number of recipe hops from the root to `entity`.
    pub fn depth(&self, entity: Entity) -> Option<usize> {
        let node = self.graph.nodes.get(&entity)?;
        self.depths.get(node).copied()
    }

    /// The edges leading from the root to `entity`, root side first. The path to the root
    /// itself is empty. Returns [`None`] for unreachable entities.
    pub fn path_to(&self, entity: Entity) -> Option<Vec<PathEdge<'graph>>> {
        let mut node = *self.graph.nodes.get(&entity)?;
        if !self.depths.contains_key(&node) {
            return None;
        }

        let mut path = Vec::new();
        while let Some(&id) = self.parents.get(&node) {
            let (source, target) = self.graph.graph.edge_endpoints(id)?;
            path.push(PathEdge {
                id,
                source: self.graph.graph[source],
                target: self.graph.graph[target],
                recipe: &self.graph.graph[id],
            });
            node = source;
        }
        path.reverse();
        Some(path)
    }
}
