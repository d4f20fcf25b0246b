use std::fmt;

use apollo_compiler::ast;
use indexmap::IndexMap;
use itertools::Itertools;
use serde::Serialize;

use crate::QueryFacts;

/// Flat, serializable projection of [`QueryFacts`] for UI layers and the CLI.
///
/// Only names survive the projection. Consumers that need the operation ASTs
/// or the full schema types keep using [`QueryFacts`] directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactsSummary {
    pub operations: Vec<OperationSummary>,
    /// Variable name to the name of its resolved type; `None` when no schema
    /// was supplied.
    pub variable_types: Option<IndexMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationSummary {
    pub kind: &'static str,
    pub name: Option<String>,
    pub variables: usize,
}

impl From<&QueryFacts> for FactsSummary {
    fn from(facts: &QueryFacts) -> Self {
        let operations = facts
            .operations
            .iter()
            .map(|operation| OperationSummary {
                kind: operation_kind(operation.operation_type),
                name: operation.name.as_ref().map(|name| name.to_string()),
                variables: operation.variables.len(),
            })
            .collect();
        let variable_types = facts.variable_to_type.as_ref().map(|variable_to_type| {
            variable_to_type
                .iter()
                .map(|(name, ty)| (name.to_string(), ty.name().to_string()))
                .collect()
        });
        FactsSummary {
            operations,
            variable_types,
        }
    }
}

fn operation_kind(operation_type: ast::OperationType) -> &'static str {
    match operation_type {
        ast::OperationType::Query => "query",
        ast::OperationType::Mutation => "mutation",
        ast::OperationType::Subscription => "subscription",
    }
}

impl fmt::Display for FactsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.operations.is_empty() {
            writeln!(f, "no operations")?;
        }
        for operation in &self.operations {
            writeln!(
                f,
                "{} {} (variables: {})",
                operation.kind,
                operation.name.as_deref().unwrap_or("(anonymous)"),
                operation.variables,
            )?;
        }
        if let Some(variable_types) = &self.variable_types {
            if variable_types.is_empty() {
                writeln!(f, "variables: none")?;
            } else {
                writeln!(
                    f,
                    "variables: {}",
                    variable_types
                        .iter()
                        .map(|(name, ty)| format!("${name}: {ty}"))
                        .join(", "),
                )?;
            }
        }
        Ok(())
    }
}
