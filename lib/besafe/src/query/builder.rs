use oxigraph::model::{Literal, NamedNode, NamedNodeRef, Variable};
use oxigraph::sparql::{Query, SparqlSyntaxError};
use std::fmt;

/// The object of a [`TriplePattern`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternTerm {
    Variable(Variable),
    NamedNode(NamedNode),
}

impl fmt::Display for PatternTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternTerm::Variable(variable) => variable.fmt(f),
            PatternTerm::NamedNode(node) => node.fmt(f),
        }
    }
}

impl From<Variable> for PatternTerm {
    fn from(variable: Variable) -> Self {
        PatternTerm::Variable(variable)
    }
}

impl From<NamedNode> for PatternTerm {
    fn from(node: NamedNode) -> Self {
        PatternTerm::NamedNode(node)
    }
}

impl From<NamedNodeRef<'_>> for PatternTerm {
    fn from(node: NamedNodeRef<'_>) -> Self {
        PatternTerm::NamedNode(node.into_owned())
    }
}

/// A triple pattern whose subject is always a variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriplePattern {
    subject: Variable,
    predicate: NamedNode,
    object: PatternTerm,
}

impl TriplePattern {
    pub fn new(
        subject: Variable,
        predicate: impl Into<NamedNode>,
        object: impl Into<PatternTerm>,
    ) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}

impl fmt::Display for TriplePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

/// A SPARQL aggregate function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregate {
    Count,
    Avg,
    Max,
    Min,
}

impl fmt::Display for Aggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Aggregate::Count => "COUNT",
            Aggregate::Avg => "AVG",
            Aggregate::Max => "MAX",
            Aggregate::Min => "MIN",
        })
    }
}

/// An element of the `SELECT` clause.
#[derive(Debug, Clone, PartialEq)]
enum Projection {
    Variable(Variable),
    Aggregate {
        function: Aggregate,
        argument: Variable,
        alias: Variable,
    },
    GroupConcat {
        argument: Variable,
        separator: Literal,
        alias: Variable,
    },
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Projection::Variable(variable) => variable.fmt(f),
            Projection::Aggregate {
                function,
                argument,
                alias,
            } => write!(f, "({function}({argument}) AS {alias})"),
            Projection::GroupConcat {
                argument,
                separator,
                alias,
            } => write!(
                f,
                "(GROUP_CONCAT(DISTINCT {argument}; SEPARATOR={separator}) AS {alias})"
            ),
        }
    }
}

/// A comparison operator usable in a filter condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Equal,
    GreaterOrEqual,
    LessOrEqual,
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Comparison::Equal => "=",
            Comparison::GreaterOrEqual => ">=",
            Comparison::LessOrEqual => "<=",
        })
    }
}

/// Compares a variable against a literal.
///
/// The literal is written in its N-Triples form, so quotes and backslashes inside the value
/// are escaped and can never terminate the literal early.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Condition {
    variable: Variable,
    comparison: Comparison,
    value: Literal,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.variable, self.comparison, self.value)
    }
}

/// A sort key of the `ORDER BY` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
struct OrderKey {
    variable: Variable,
    descending: bool,
}

impl fmt::Display for OrderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.descending {
            write!(f, "DESC({})", self.variable)
        } else {
            self.variable.fmt(f)
        }
    }
}

/// Assembles a SPARQL `SELECT` query from its parts.
///
/// All conditions added with [`SelectQueryBuilder::filter`] end up conjoined in a single
/// `FILTER` clause. If no condition is added, no `FILTER` clause is written.
///
/// ```
/// use besafe::query::{Comparison, SelectQueryBuilder};
/// use oxigraph::model::{Literal, NamedNode, Variable};
///
/// let station = Variable::new_unchecked("station");
/// let query = SelectQueryBuilder::new()
///     .select(station.clone())
///     .pattern(
///         Variable::new_unchecked("m"),
///         NamedNode::new_unchecked("http://example.org/vocab#estacion"),
///         station.clone(),
///     )
///     .filter(station, Comparison::Equal, Some(Literal::new_simple_literal("11")))
///     .limit(10);
/// assert!(query.to_string().contains("FILTER (?station = \"11\")"));
/// assert!(query.build().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectQueryBuilder {
    distinct: bool,
    projection: Vec<Projection>,
    patterns: Vec<TriplePattern>,
    optionals: Vec<Vec<TriplePattern>>,
    conditions: Vec<Condition>,
    group_by: Vec<Variable>,
    order_by: Vec<OrderKey>,
    limit: Option<usize>,
}

impl SelectQueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes duplicate solutions.
    #[must_use]
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Projects `variable`.
    #[must_use]
    pub fn select(mut self, variable: Variable) -> Self {
        self.projection.push(Projection::Variable(variable));
        self
    }

    /// Projects `function(argument)` as `alias`.
    #[must_use]
    pub fn select_aggregate(
        mut self,
        function: Aggregate,
        argument: Variable,
        alias: Variable,
    ) -> Self {
        self.projection.push(Projection::Aggregate {
            function,
            argument,
            alias,
        });
        self
    }

    /// Projects the distinct values of `argument` joined by `separator` as `alias`.
    #[must_use]
    pub fn select_group_concat(
        mut self,
        argument: Variable,
        separator: &str,
        alias: Variable,
    ) -> Self {
        self.projection.push(Projection::GroupConcat {
            argument,
            separator: Literal::new_simple_literal(separator),
            alias,
        });
        self
    }

    /// Adds a required triple pattern.
    #[must_use]
    pub fn pattern(
        mut self,
        subject: Variable,
        predicate: impl Into<NamedNode>,
        object: impl Into<PatternTerm>,
    ) -> Self {
        self.patterns
            .push(TriplePattern::new(subject, predicate, object));
        self
    }

    /// Adds an `OPTIONAL` group made of `patterns`.
    #[must_use]
    pub fn optional(mut self, patterns: impl IntoIterator<Item = TriplePattern>) -> Self {
        let patterns: Vec<_> = patterns.into_iter().collect();
        if !patterns.is_empty() {
            self.optionals.push(patterns);
        }
        self
    }

    /// Adds `variable comparison value` to the filter, if a value is given.
    #[must_use]
    pub fn filter(
        mut self,
        variable: Variable,
        comparison: Comparison,
        value: Option<Literal>,
    ) -> Self {
        if let Some(value) = value {
            self.conditions.push(Condition {
                variable,
                comparison,
                value,
            });
        }
        self
    }

    #[must_use]
    pub fn group_by(mut self, variable: Variable) -> Self {
        self.group_by.push(variable);
        self
    }

    #[must_use]
    pub fn order_by(mut self, variable: Variable) -> Self {
        self.order_by.push(OrderKey {
            variable,
            descending: false,
        });
        self
    }

    #[must_use]
    pub fn order_by_desc(mut self, variable: Variable) -> Self {
        self.order_by.push(OrderKey {
            variable,
            descending: true,
        });
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Returns `true` if the query has a `FILTER` clause.
    pub fn has_filter(&self) -> bool {
        !self.conditions.is_empty()
    }

    /// Parses the assembled query text.
    pub fn build(&self) -> Result<Query, SparqlSyntaxError> {
        Query::parse(&self.to_string(), None)
    }
}

impl fmt::Display for SelectQueryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SELECT")?;
        if self.distinct {
            f.write_str(" DISTINCT")?;
        }
        if self.projection.is_empty() {
            f.write_str(" *")?;
        }
        for projection in &self.projection {
            write!(f, " {projection}")?;
        }
        f.write_str("\nWHERE {\n")?;
        for pattern in &self.patterns {
            writeln!(f, "  {pattern}")?;
        }
        for optional in &self.optionals {
            f.write_str("  OPTIONAL {")?;
            for pattern in optional {
                write!(f, " {pattern}")?;
            }
            f.write_str(" }\n")?;
        }
        if let Some((first, rest)) = self.conditions.split_first() {
            write!(f, "  FILTER ({first}")?;
            for condition in rest {
                write!(f, " && {condition}")?;
            }
            f.write_str(")\n")?;
        }
        f.write_str("}")?;
        if !self.group_by.is_empty() {
            f.write_str("\nGROUP BY")?;
            for variable in &self.group_by {
                write!(f, " {variable}")?;
            }
        }
        if !self.order_by.is_empty() {
            f.write_str("\nORDER BY")?;
            for key in &self.order_by {
                write!(f, " {key}")?;
            }
        }
        if let Some(limit) = self.limit {
            write!(f, "\nLIMIT {limit}")?;
        }
        Ok(())
    }
}
