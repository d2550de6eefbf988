use crate::{KnowledgeGraph, PlanError, PlanResult, PlannerOptions, Recipe, VariableMapping};
use biofed_model::{vocab, Entity, Repository};
use biofed_sparql::{GraphPattern, GroupPattern, Prefix, SelectQuery};
use itertools::Itertools;
use petgraph::graph::EdgeIndex;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

/// A typed request against one repository.
///
/// Implementations only declare what the query must contain. Reaching the requested entities
/// from the root is up to the [`QueryPlanner`].
pub trait RepositoryQuery {
    /// The repository the query is sent to.
    fn repository(&self) -> Repository;

    /// The anchor all paths start from.
    fn root_entity(&self) -> Entity;

    /// The entities that become result columns, in column order.
    fn projected_entities(&self) -> Vec<Entity>;

    /// Recipes restricting the results. Their required entities are reached from the root like
    /// the projected ones.
    fn filter_recipes(&self) -> Vec<Recipe>;
}

/// Turns requests into federated `SELECT` queries using a shared [`KnowledgeGraph`].
///
/// The planner holds no mutable state. One instance can serve any number of concurrent
/// requests.
#[derive(Debug, Clone)]
pub struct QueryPlanner {
    graph: Arc<KnowledgeGraph>,
    options: PlannerOptions,
}

impl QueryPlanner {
    pub fn new(graph: Arc<KnowledgeGraph>) -> Self {
        Self::with_options(graph, PlannerOptions::default())
    }

    pub fn with_options(graph: Arc<KnowledgeGraph>, options: PlannerOptions) -> Self {
        Self { graph, options }
    }

    pub fn graph(&self) -> &KnowledgeGraph {
        &self.graph
    }

    pub fn options(&self) -> &PlannerOptions {
        &self.options
    }

    /// Plans and builds the query for `query`.
    pub fn plan(&self, query: &impl RepositoryQuery) -> PlanResult<SelectQuery> {
        self.resolve(
            query.repository(),
            query.root_entity(),
            &query.projected_entities(),
            query.filter_recipes(),
        )?
        .build()
    }

    /// Plans and builds a query from its raw ingredients.
    pub fn plan_entities(
        &self,
        home: Repository,
        root: Entity,
        projected: &[Entity],
        filters: Vec<Recipe>,
    ) -> PlanResult<SelectQuery> {
        self.resolve(home, root, projected, filters)?.build()
    }

    /// Selects the recipes of a query and orders them, without building any pattern yet.
    ///
    /// Every projected entity and every entity required by a filter is reached over its
    /// shortest path from `root`. The recipes on these paths, followed by the filters, are
    /// grouped by repository. Groups are ordered so that a group producing an entity comes
    /// before the groups consuming it.
    pub fn resolve(
        &self,
        home: Repository,
        root: Entity,
        projected: &[Entity],
        filters: Vec<Recipe>,
    ) -> PlanResult<QueryPlan> {
        let projected: Vec<Entity> = projected.iter().copied().unique().collect();
        let targets: Vec<Entity> = projected
            .iter()
            .copied()
            .chain(
                filters
                    .iter()
                    .flat_map(|filter| filter.required_entities().iter().copied()),
            )
            .unique()
            .collect();
        tracing::debug!(%home, %root, targets = %targets.iter().join(", "), "Planning query");

        let paths = self
            .graph
            .shortest_paths(root)
            .ok_or(PlanError::UnreachableEntity { entity: root, root })?;

        // Keyed by edge so shared path prefixes are only included once.
        let mut induced = BTreeMap::new();
        for target in &targets {
            let path = paths
                .path_to(*target)
                .ok_or(PlanError::UnreachableEntity {
                    entity: *target,
                    root,
                })?;
            for edge in path {
                induced.entry(edge.id).or_insert(edge);
            }
        }

        let mut edges: Vec<_> = induced.into_values().collect();
        edges.sort_by_key(|edge| (paths.depth(edge.target), edge.id));
        tracing::debug!(
            edges = %edges
                .iter()
                .map(|edge| format!("{} -> {}", edge.source, edge.target))
                .join(", "),
            "Selected recipes"
        );

        let mut producers = HashMap::new();
        let mut recipes = Vec::with_capacity(edges.len() + filters.len());
        for edge in &edges {
            producers.insert(edge.target, edge.recipe.repository());
            recipes.push(PlannedRecipe {
                recipe: edge.recipe.clone(),
                produced: Some(edge.target),
                edge: Some(edge.id),
            });
        }
        recipes.extend(filters.into_iter().map(|recipe| PlannedRecipe {
            recipe,
            produced: None,
            edge: None,
        }));

        let mapping = VariableMapping::try_new(
            projected.iter().copied().chain(
                recipes
                    .iter()
                    .flat_map(|planned| planned.recipe.required_entities().iter().copied()),
            ),
        )?;

        let groups = order_groups(recipes, &producers)?;
        tracing::debug!(
            order = %groups.iter().map(|group| group.repository).join(", "),
            "Ordered repository groups"
        );

        Ok(QueryPlan {
            home,
            projected,
            groups,
            mapping,
            options: self.options.clone(),
        })
    }
}

#[derive(Debug, Clone)]
struct PlannedRecipe {
    recipe: Recipe,
    /// The entity bound by this recipe. Filters bind nothing.
    produced: Option<Entity>,
    edge: Option<EdgeIndex>,
}

impl PlannedRecipe {
    fn consumed(&self) -> impl Iterator<Item = Entity> + '_ {
        self.recipe
            .required_entities()
            .iter()
            .copied()
            .filter(move |entity| Some(*entity) != self.produced)
    }
}

/// The recipes of one repository, in emission order.
#[derive(Debug, Clone)]
pub struct RecipeGroup {
    repository: Repository,
    recipes: Vec<PlannedRecipe>,
}

impl RecipeGroup {
    pub fn repository(&self) -> Repository {
        self.repository
    }

    pub fn recipes(&self) -> impl Iterator<Item = &Recipe> + '_ {
        self.recipes.iter().map(|planned| &planned.recipe)
    }

    /// The knowledge graph edges of the group, without the filters.
    pub fn edges(&self) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.recipes.iter().filter_map(|planned| planned.edge)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

/// Partitions `recipes` by repository and orders the partitions topologically.
///
/// A group depends on another if one of its recipes consumes an entity the other produces.
/// Among the groups that are ready, the first repository in declaration order is emitted
/// first.
fn order_groups(
    recipes: Vec<PlannedRecipe>,
    producers: &HashMap<Entity, Repository>,
) -> PlanResult<Vec<RecipeGroup>> {
    let mut partitions: BTreeMap<Repository, Vec<PlannedRecipe>> = BTreeMap::new();
    for planned in recipes {
        partitions
            .entry(planned.recipe.repository())
            .or_default()
            .push(planned);
    }

    let mut dependencies: BTreeMap<Repository, BTreeSet<Repository>> = BTreeMap::new();
    for (repository, planned) in &partitions {
        let upstream = planned
            .iter()
            .flat_map(|planned| planned.consumed())
            .filter_map(|entity| producers.get(&entity).copied())
            .filter(|producer| producer != repository)
            .collect();
        dependencies.insert(*repository, upstream);
    }

    let mut groups = Vec::with_capacity(partitions.len());
    let mut ready: BTreeSet<Repository> = dependencies
        .iter()
        .filter(|(_, upstream)| upstream.is_empty())
        .map(|(repository, _)| *repository)
        .collect();
    while let Some(repository) = ready.pop_first() {
        dependencies.remove(&repository);
        for (downstream, upstream) in &mut dependencies {
            if upstream.remove(&repository) && upstream.is_empty() {
                ready.insert(*downstream);
            }
        }
        if let Some(recipes) = partitions.remove(&repository) {
            groups.push(RecipeGroup {
                repository,
                recipes,
            });
        }
    }

    if !dependencies.is_empty() {
        return Err(PlanError::CyclicFederation(
            dependencies.into_keys().collect(),
        ));
    }
    Ok(groups)
}

/// The resolved plan of a query: ordered recipe groups plus the variable of every entity.
#[derive(Debug, Clone)]
pub struct QueryPlan {
    home: Repository,
    projected: Vec<Entity>,
    groups: Vec<RecipeGroup>,
    mapping: VariableMapping,
    options: PlannerOptions,
}

impl QueryPlan {
    /// The repository the query is sent to.
    pub fn home(&self) -> Repository {
        self.home
    }

    /// The projected entities, without duplicates.
    pub fn projected_entities(&self) -> &[Entity] {
        &self.projected
    }

    pub fn groups(&self) -> &[RecipeGroup] {
        &self.groups
    }

    /// The repositories of the groups, in emission order.
    pub fn repositories(&self) -> Vec<Repository> {
        self.groups.iter().map(RecipeGroup::repository).collect()
    }

    pub fn recipe_count(&self) -> usize {
        self.groups.iter().map(RecipeGroup::len).sum()
    }

    pub fn mapping(&self) -> &VariableMapping {
        &self.mapping
    }

    /// Builds the query.
    ///
    /// Groups of the home repository are emitted as plain groups. Every other group is wrapped
    /// in a `SERVICE` block targeting the endpoint of its repository.
    pub fn build(&self) -> PlanResult<SelectQuery> {
        let mut root = GroupPattern::default();
        for group in &self.groups {
            let pattern: GroupPattern = group
                .recipes()
                .map(|recipe| recipe.build(&self.mapping))
                .collect::<PlanResult<_>>()?;
            if group.repository == self.home {
                root.push(pattern);
            } else {
                root.push(GraphPattern::service(
                    self.options.endpoints.get(group.repository),
                    pattern,
                ));
            }
        }

        let variables: Vec<_> = self
            .projected
            .iter()
            .map(|entity| self.mapping.variable(*entity).cloned())
            .collect::<PlanResult<_>>()?;
        let prefixes: Vec<_> = vocab::PREFIXES
            .iter()
            .map(|(name, namespace)| Prefix::new(*name, *namespace))
            .collect();

        let query = SelectQuery::new(prefixes, variables, root, self.options.distinct);
        tracing::trace!(lines = query.render().len(), "Built query");
        Ok(query)
    }
}
