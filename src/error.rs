use apollo_compiler::ast;

/// Failure to resolve one variable's declared type against the schema.
///
/// These never escape the extraction entry points. They are either dropped,
/// leaving the variable out of the mapping, or handed back through
/// [`collect_variables_with_diagnostics`](crate::collect_variables_with_diagnostics).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeResolutionError {
    #[error("variable `${variable}` references type `{ty}`, which is not defined by the schema")]
    UndefinedType {
        variable: ast::Name,
        ty: ast::NamedType,
    },
}

impl TypeResolutionError {
    /// The variable whose declared type failed to resolve.
    pub fn variable(&self) -> &ast::Name {
        match self {
            TypeResolutionError::UndefinedType { variable, .. } => variable,
        }
    }
}
