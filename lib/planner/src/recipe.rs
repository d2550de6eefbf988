use crate::{PlanResult, VariableMapping};
use biofed_model::{Entity, Repository};
use biofed_sparql::{GraphPattern, Triple};
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Builds the pattern fragment of a [`Recipe`] from the variables of a plan.
pub type RecipeConstructor = dyn Fn(&VariableMapping) -> PlanResult<GraphPattern> + Send + Sync;

/// A way to bind an entity, or to restrict already bound entities.
///
/// A recipe declares every entity whose variable its constructor uses. The planner guarantees
/// that each of them has a variable in the mapping handed to the constructor. Constructors must
/// be pure: the same mapping always yields the same fragment.
#[derive(Clone)]
pub struct Recipe {
    repository: Repository,
    required: Vec<Entity>,
    constructor: Arc<RecipeConstructor>,
}

impl Recipe {
    pub fn new(
        repository: Repository,
        required: Vec<Entity>,
        constructor: impl Fn(&VariableMapping) -> PlanResult<GraphPattern> + Send + Sync + 'static,
    ) -> Self {
        Self {
            repository,
            required,
            constructor: Arc::new(constructor),
        }
    }

    /// A recipe producing the single triple `?source predicate ?target`.
    pub fn triple(
        repository: Repository,
        source: impl Into<Entity>,
        predicate: &str,
        target: impl Into<Entity>,
    ) -> Self {
        let source = source.into();
        let target = target.into();
        let predicate = predicate.to_owned();
        Self::new(repository, vec![source, target], move |mapping| {
            Ok(Triple::new(
                mapping.variable(source)?,
                predicate.as_str(),
                mapping.variable(target)?,
            )
            .into())
        })
    }

    /// The repository that must evaluate the fragment.
    pub fn repository(&self) -> Repository {
        self.repository
    }

    /// The entities whose variables the fragment uses.
    pub fn required_entities(&self) -> &[Entity] {
        &self.required
    }

    /// Builds the pattern fragment.
    pub fn build(&self, mapping: &VariableMapping) -> PlanResult<GraphPattern> {
        (self.constructor)(mapping)
    }
}

impl Debug for Recipe {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recipe")
            .field("repository", &self.repository)
            .field("required", &self.required)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlanError;
    use biofed_model::UniprotEntity;

    #[test]
    fn triple_recipe_requires_both_ends() {
        let recipe = Recipe::triple(
            Repository::Uniprot,
            UniprotEntity::Protein,
            "up:organism",
            UniprotEntity::Organism,
        );
        assert_eq!(
            recipe.required_entities(),
            [
                Entity::Uniprot(UniprotEntity::Protein),
                Entity::Uniprot(UniprotEntity::Organism)
            ]
        );
    }

    #[test]
    fn triple_recipe_builds_triple() {
        let recipe = Recipe::triple(
            Repository::Uniprot,
            UniprotEntity::Protein,
            "up:organism",
            UniprotEntity::Organism,
        );
        let mapping = VariableMapping::try_new(recipe.required_entities().iter().copied()).unwrap();
        let pattern = recipe.build(&mapping).unwrap();
        assert_eq!(pattern.render(), ["?protein up:organism ?organism ."]);
    }

    #[test]
    fn building_with_missing_variable_fails() {
        let recipe = Recipe::triple(
            Repository::Uniprot,
            UniprotEntity::Protein,
            "up:organism",
            UniprotEntity::Organism,
        );
        let mapping = VariableMapping::try_new([Entity::from(UniprotEntity::Protein)]).unwrap();
        assert!(matches!(
            recipe.build(&mapping),
            Err(PlanError::UnboundEntity(Entity::Uniprot(UniprotEntity::Organism)))
        ));
    }
}
