use crate::{PlanError, PlanResult};
use biofed_model::Entity;
use biofed_sparql::Variable;
use std::collections::{BTreeMap, HashMap};

/// Assigns one SPARQL variable to each entity of a plan.
///
/// The variable is named after the stable name of the entity, so the columns of the query
/// results carry the entity names. Two distinct entities with the same name cannot share a
/// mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableMapping {
    variables: BTreeMap<Entity, Variable>,
}

impl VariableMapping {
    /// Creates a mapping for `entities`. Duplicates are allowed and mapped once.
    pub fn try_new(entities: impl IntoIterator<Item = Entity>) -> PlanResult<Self> {
        let mut variables = BTreeMap::new();
        let mut owners: HashMap<&'static str, Entity> = HashMap::new();
        for entity in entities {
            let name = entity.as_str();
            match owners.get(name) {
                Some(&owner) if owner == entity => continue,
                Some(&owner) => {
                    return Err(PlanError::VariableCollision {
                        name: name.to_owned(),
                        first: owner,
                        second: entity,
                    })
                }
                None => {
                    owners.insert(name, entity);
                    variables.insert(entity, biofed_sparql::variable(name)?);
                }
            }
        }
        Ok(Self { variables })
    }

    /// The variable of `entity`, failing if the entity is not part of the mapping.
    pub fn variable(&self, entity: impl Into<Entity>) -> PlanResult<&Variable> {
        let entity = entity.into();
        self.variables
            .get(&entity)
            .ok_or(PlanError::UnboundEntity(entity))
    }

    pub fn get(&self, entity: impl Into<Entity>) -> Option<&Variable> {
        self.variables.get(&entity.into())
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Entity, &Variable)> {
        self.variables.iter().map(|(entity, variable)| (*entity, variable))
    }
}
