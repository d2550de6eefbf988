use biofed_model::{vocab, Entity, Repository};
use biofed_planner::Recipe;
use biofed_sparql::{BindExpression, InlineValues, Triple};

/// `?entity a class .`, the recipe binding a root's first entity.
pub(crate) fn instance_of(
    repository: Repository,
    entity: impl Into<Entity>,
    predicate: &'static str,
    class: &'static str,
) -> Recipe {
    let entity = entity.into();
    Recipe::new(repository, vec![entity], move |mapping| {
        Ok(Triple::new(mapping.variable(entity)?, predicate, class).into())
    })
}

/// Binds `target` to the part of the IRI of `source` following `namespace`.
pub(crate) fn iri_suffix(
    repository: Repository,
    source: impl Into<Entity>,
    target: impl Into<Entity>,
    namespace: &'static str,
) -> Recipe {
    let source = source.into();
    let target = target.into();
    // SPARQL substrings are 1-based.
    let template = format!("substr(str({{}}), {})", namespace.len() + 1);
    Recipe::new(repository, vec![source, target], move |mapping| {
        Ok(BindExpression::try_new(
            mapping.variable(target)?.clone(),
            vec![mapping.variable(source)?.clone()],
            &template,
        )?
        .into())
    })
}

/// Restricts `entity` to the IRIs `namespace` + id, in the given order.
pub(crate) fn inline_iris(
    repository: Repository,
    entity: impl Into<Entity>,
    namespace: &'static str,
    ids: &[String],
) -> Recipe {
    let entity = entity.into();
    let values: Vec<String> = ids.iter().map(|id| vocab::iri(namespace, id)).collect();
    Recipe::new(repository, vec![entity], move |mapping| {
        Ok(InlineValues::new(mapping.variable(entity)?.clone(), values.clone()).into())
    })
}
