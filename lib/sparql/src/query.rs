use crate::GroupPattern;
use oxrdf::Variable;
use std::fmt::{Display, Formatter};

/// A `PREFIX name: <namespace>` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix {
    pub name: String,
    pub namespace: String,
}

impl Prefix {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
        }
    }
}

impl Display for Prefix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "PREFIX {}: <{}>", self.name, self.namespace)
    }
}

/// A complete `SELECT` query.
///
/// Rendering yields the prefix declarations, one `SELECT` line and the `WHERE` clause whose
/// opening brace is fused onto the `WHERE` keyword. A query without projected variables selects
/// `*`, which keeps the text valid SPARQL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectQuery {
    pub prefixes: Vec<Prefix>,
    pub variables: Vec<Variable>,
    pub pattern: GroupPattern,
    pub distinct: bool,
}

impl SelectQuery {
    pub fn new(
        prefixes: Vec<Prefix>,
        variables: Vec<Variable>,
        pattern: GroupPattern,
        distinct: bool,
    ) -> Self {
        Self {
            prefixes,
            variables,
            pattern,
            distinct,
        }
    }

    /// The names of the projected variables, in projection order.
    ///
    /// These are the column names of the tabular results of the query.
    pub fn projected_names(&self) -> Vec<&str> {
        self.variables.iter().map(Variable::as_str).collect()
    }

    pub fn render(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.prefixes.iter().map(ToString::to_string).collect();

        let mut select = String::from(if self.distinct {
            "SELECT DISTINCT"
        } else {
            "SELECT"
        });
        if self.variables.is_empty() {
            select.push_str(" *");
        }
        for variable in &self.variables {
            select.push(' ');
            select.push_str(&variable.to_string());
        }
        lines.push(select);

        let mut pattern = self.pattern.render().into_iter();
        let opening = pattern.next().unwrap_or_default();
        lines.push(format!("WHERE {opening}"));
        lines.extend(pattern);
        lines
    }
}

impl Display for SelectQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render().join("\n"))
    }
}
