use crate::{BindExpression, FilterExpression, INDENT};
use oxrdf::Variable;
use std::fmt::{Display, Formatter};

/// A member of a triple pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TripleTerm {
    Variable(Variable),
    /// Any other term, rendered verbatim: an IRI reference, a prefixed name, a literal or a
    /// property path.
    Text(String),
}

impl Display for TripleTerm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TripleTerm::Variable(variable) => variable.fmt(f),
            TripleTerm::Text(text) => f.write_str(text),
        }
    }
}

impl From<Variable> for TripleTerm {
    fn from(variable: Variable) -> Self {
        TripleTerm::Variable(variable)
    }
}

impl From<&Variable> for TripleTerm {
    fn from(variable: &Variable) -> Self {
        TripleTerm::Variable(variable.clone())
    }
}

impl From<&str> for TripleTerm {
    fn from(text: &str) -> Self {
        TripleTerm::Text(text.to_owned())
    }
}

impl From<String> for TripleTerm {
    fn from(text: String) -> Self {
        TripleTerm::Text(text)
    }
}

/// A triple pattern, rendered as `subject predicate object .`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triple {
    pub subject: TripleTerm,
    pub predicate: TripleTerm,
    pub object: TripleTerm,
}

impl Triple {
    pub fn new(
        subject: impl Into<TripleTerm>,
        predicate: impl Into<TripleTerm>,
        object: impl Into<TripleTerm>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}

impl Display for Triple {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

/// A brace-delimited group `{ ... }` of patterns.
///
/// The first rendered line of a group is always `{`. Wrapping nodes ([`GraphPattern::Optional`],
/// [`GraphPattern::Service`]) and the `WHERE` clause rely on that and therefore only accept
/// groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupPattern {
    patterns: Vec<GraphPattern>,
}

impl GroupPattern {
    pub fn new(patterns: Vec<GraphPattern>) -> Self {
        Self { patterns }
    }

    pub fn push(&mut self, pattern: impl Into<GraphPattern>) {
        self.patterns.push(pattern.into());
    }

    pub fn patterns(&self) -> &[GraphPattern] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn render(&self) -> Vec<String> {
        let mut lines = vec!["{".to_owned()];
        lines.extend(
            self.patterns
                .iter()
                .flat_map(GraphPattern::render)
                .map(|line| format!("{INDENT}{line}")),
        );
        lines.push("}".to_owned());
        lines
    }
}

impl FromIterator<GraphPattern> for GroupPattern {
    fn from_iter<T: IntoIterator<Item = GraphPattern>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A `VALUES ?variable { ... }` block with one value per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineValues {
    pub variable: Variable,
    pub values: Vec<String>,
}

impl InlineValues {
    pub fn new(variable: Variable, values: Vec<String>) -> Self {
        Self { variable, values }
    }

    pub fn render(&self) -> Vec<String> {
        let mut lines = vec![format!("VALUES {} {{", self.variable)];
        lines.extend(self.values.iter().map(|value| format!("{INDENT}{value}")));
        lines.push("}".to_owned());
        lines
    }
}

/// A `SERVICE <endpoint> { ... }` block evaluated by a remote endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServicePattern {
    /// The endpoint URL, without angle brackets.
    pub endpoint: String,
    pub pattern: GroupPattern,
}

impl ServicePattern {
    pub fn new(endpoint: impl Into<String>, pattern: GroupPattern) -> Self {
        Self {
            endpoint: endpoint.into(),
            pattern,
        }
    }

    pub fn render(&self) -> Vec<String> {
        prefix_first_line(&format!("SERVICE <{}> ", self.endpoint), &self.pattern)
    }
}

/// A node of the pattern tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphPattern {
    Triple(Triple),
    Group(GroupPattern),
    Optional(GroupPattern),
    /// Alternatives, rendered with a `UNION` line between consecutive groups.
    Union(Vec<GroupPattern>),
    Values(InlineValues),
    Service(ServicePattern),
    Bind(BindExpression),
    Filter(FilterExpression),
}

impl GraphPattern {
    /// Creates an `OPTIONAL` block around `pattern`.
    pub fn optional(pattern: impl Into<GraphPattern>) -> Self {
        GraphPattern::Optional(pattern.into().into_group())
    }

    /// Creates a `SERVICE` block around `pattern`.
    pub fn service(endpoint: impl Into<String>, pattern: impl Into<GraphPattern>) -> Self {
        GraphPattern::Service(ServicePattern::new(endpoint, pattern.into().into_group()))
    }

    /// Returns the pattern as a group, lifting any other node into a one-element group.
    pub fn into_group(self) -> GroupPattern {
        match self {
            GraphPattern::Group(group) => group,
            other => GroupPattern::new(vec![other]),
        }
    }

    /// Renders the pattern to text lines.
    pub fn render(&self) -> Vec<String> {
        match self {
            GraphPattern::Triple(triple) => vec![triple.to_string()],
            GraphPattern::Group(group) => group.render(),
            GraphPattern::Optional(group) => prefix_first_line("OPTIONAL ", group),
            GraphPattern::Union(groups) => {
                let mut lines = Vec::new();
                for (i, group) in groups.iter().enumerate() {
                    if i > 0 {
                        lines.push("UNION".to_owned());
                    }
                    lines.extend(group.render());
                }
                lines
            }
            GraphPattern::Values(values) => values.render(),
            GraphPattern::Service(service) => service.render(),
            GraphPattern::Bind(bind) => bind.render(),
            GraphPattern::Filter(filter) => filter.render(),
        }
    }
}

impl Display for GraphPattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render().join("\n"))
    }
}

impl From<Triple> for GraphPattern {
    fn from(triple: Triple) -> Self {
        GraphPattern::Triple(triple)
    }
}

impl From<GroupPattern> for GraphPattern {
    fn from(group: GroupPattern) -> Self {
        GraphPattern::Group(group)
    }
}

impl From<InlineValues> for GraphPattern {
    fn from(values: InlineValues) -> Self {
        GraphPattern::Values(values)
    }
}

impl From<ServicePattern> for GraphPattern {
    fn from(service: ServicePattern) -> Self {
        GraphPattern::Service(service)
    }
}

impl From<BindExpression> for GraphPattern {
    fn from(bind: BindExpression) -> Self {
        GraphPattern::Bind(bind)
    }
}

impl From<FilterExpression> for GraphPattern {
    fn from(filter: FilterExpression) -> Self {
        GraphPattern::Filter(filter)
    }
}

/// Renders `group` and fuses `keyword` onto its opening brace.
fn prefix_first_line(keyword: &str, group: &GroupPattern) -> Vec<String> {
    let mut lines = group.render();
    lines[0] = format!("{keyword}{}", lines[0]);
    lines
}
