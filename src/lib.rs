//! Derives editor-facing facts from GraphQL query documents.
//!
//! Given an optional [`Schema`] and the raw text of an executable document,
//! [`QueryFacts::extract`] parses the text and pulls out the two things an
//! editor needs while the user types: the operations defined in the document
//! and, when a schema is available, the resolved schema type of every
//! declared variable. Extraction is best-effort by design: text that does not
//! parse yields no facts rather than an error, since a live-edited document
//! is transiently invalid on most keystrokes.

use apollo_compiler::ast;
use apollo_compiler::Node;
use apollo_compiler::Schema;

pub mod error;
pub mod operations;
pub mod summary;
pub mod variables;

pub use crate::error::TypeResolutionError;
pub use crate::operations::selected_operation_name;
pub use crate::summary::FactsSummary;
pub use crate::variables::collect_variables;
pub use crate::variables::collect_variables_with_diagnostics;
pub use crate::variables::innermost_named_type;
pub use crate::variables::VariableTypeMap;

/// Facts derived from a single parse of a query document.
///
/// `operations` preserves source order. `variable_to_type` is `None` when no
/// schema was supplied to [`QueryFacts::extract`]; otherwise it maps each
/// declared variable name to its resolved schema type, and variables whose
/// type could not be resolved are simply missing from it.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryFacts {
    pub variable_to_type: Option<VariableTypeMap>,
    pub operations: Vec<Node<ast::OperationDefinition>>,
}

impl QueryFacts {
    /// Parses `document_text` and derives facts from it.
    ///
    /// Returns `None` when the text is empty or does not parse. Syntax
    /// diagnostics are not surfaced to the caller: while the user is
    /// mid-keystroke, whatever the caller derived from the last good parse
    /// remains the best thing to display.
    pub fn extract(schema: Option<&Schema>, document_text: &str) -> Option<Self> {
        if document_text.is_empty() {
            return None;
        }
        let document = match ast::Document::parse(document_text, "document.graphql") {
            Ok(document) => document,
            Err(invalid) => {
                tracing::debug!("discarding unparseable document: {}", invalid.errors);
                return None;
            }
        };

        let variable_to_type = schema.map(|schema| variables::collect_variables(schema, &document));
        let operations = operations::collect_operations(&document);

        Some(QueryFacts {
            variable_to_type,
            operations,
        })
    }

    /// Names of the collected operations, in source order. Anonymous
    /// operations contribute `None`.
    pub fn operation_names(&self) -> Vec<Option<&ast::Name>> {
        self.operations
            .iter()
            .map(|operation| operation.name.as_ref())
            .collect()
    }
}
