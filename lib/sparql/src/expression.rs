use crate::SparqlError;
use oxrdf::Variable;

/// An expression with positional `{}` placeholders.
///
/// The i-th placeholder is replaced by the i-th input variable. `{{` and `}}` stand for literal
/// braces.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ExpressionTemplate {
    /// The literal text around the placeholders. Always one element longer than the number of
    /// placeholders.
    segments: Vec<String>,
}

impl ExpressionTemplate {
    fn parse(template: &str, arguments: usize) -> Result<Self, SparqlError> {
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut chars = template.chars().peekable();
        while let Some(c) = chars.next() {
            match (c, chars.peek()) {
                ('{', Some('{')) | ('}', Some('}')) => {
                    chars.next();
                    current.push(c);
                }
                ('{', Some('}')) => {
                    chars.next();
                    segments.push(std::mem::take(&mut current));
                }
                _ => current.push(c),
            }
        }
        segments.push(current);

        let placeholders = segments.len() - 1;
        if placeholders != arguments {
            return Err(SparqlError::MalformedTemplate {
                template: template.to_owned(),
                placeholders,
                arguments,
            });
        }
        Ok(Self { segments })
    }

    fn substitute(&self, inputs: &[Variable]) -> String {
        let mut result = String::new();
        for (i, segment) in self.segments.iter().enumerate() {
            result.push_str(segment);
            if let Some(input) = inputs.get(i) {
                result.push_str(&input.to_string());
            }
        }
        result
    }
}

/// A `BIND((expression) AS ?output)` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindExpression {
    output: Variable,
    inputs: Vec<Variable>,
    template: ExpressionTemplate,
}

impl BindExpression {
    /// Creates a bind clause. Fails if the placeholder count of `template` differs from the
    /// number of `inputs`.
    pub fn try_new(
        output: Variable,
        inputs: Vec<Variable>,
        template: &str,
    ) -> Result<Self, SparqlError> {
        let template = ExpressionTemplate::parse(template, inputs.len())?;
        Ok(Self {
            output,
            inputs,
            template,
        })
    }

    /// The variable bound by this clause.
    pub fn output(&self) -> &Variable {
        &self.output
    }

    pub fn render(&self) -> Vec<String> {
        vec![format!(
            "BIND(({}) AS {})",
            self.template.substitute(&self.inputs),
            self.output
        )]
    }
}

/// A `FILTER( expression )` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterExpression {
    inputs: Vec<Variable>,
    template: ExpressionTemplate,
}

impl FilterExpression {
    /// Creates a filter clause. Fails if the placeholder count of `template` differs from the
    /// number of `inputs`.
    pub fn try_new(inputs: Vec<Variable>, template: &str) -> Result<Self, SparqlError> {
        let template = ExpressionTemplate::parse(template, inputs.len())?;
        Ok(Self { inputs, template })
    }

    pub fn render(&self) -> Vec<String> {
        vec![format!("FILTER( {} )", self.template.substitute(&self.inputs))]
    }
}
