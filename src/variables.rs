use apollo_compiler::ast;
use apollo_compiler::schema::ExtendedType;
use apollo_compiler::Node;
use apollo_compiler::Schema;
use indexmap::IndexMap;

use crate::error::TypeResolutionError;

/// Variable name to resolved schema type, in declaration order.
pub type VariableTypeMap = IndexMap<ast::Name, ExtendedType>;

/// Collected variables plus the per-variable failures whose entries were
/// dropped from the mapping.
#[derive(Debug, Clone, Default)]
pub struct CollectedVariables {
    pub variable_to_type: VariableTypeMap,
    pub diagnostics: Vec<TypeResolutionError>,
}

/// Builds the variable name → resolved type mapping for every operation in
/// `document`.
///
/// Collection is best-effort: a variable whose declared type is not defined
/// by the schema is left out, and a variable name declared more than once
/// (within one operation or across several) keeps the last resolved type.
pub fn collect_variables(schema: &Schema, document: &ast::Document) -> VariableTypeMap {
    let collected = collect_variables_with_diagnostics(schema, document);
    for diagnostic in &collected.diagnostics {
        tracing::debug!("skipping variable: {diagnostic}");
    }
    collected.variable_to_type
}

/// Like [`collect_variables`], but also returns the resolution failures that
/// the mapping silently omits.
pub fn collect_variables_with_diagnostics(
    schema: &Schema,
    document: &ast::Document,
) -> CollectedVariables {
    let mut collected = CollectedVariables::default();
    for definition in &document.definitions {
        let ast::Definition::OperationDefinition(operation) = definition else {
            continue;
        };
        for variable in &operation.variables {
            match resolve_variable_type(schema, variable) {
                Ok(ty) => {
                    collected
                        .variable_to_type
                        .insert(variable.name.clone(), ty.clone());
                }
                Err(diagnostic) => collected.diagnostics.push(diagnostic),
            }
        }
    }
    collected
}

fn resolve_variable_type<'schema>(
    schema: &'schema Schema,
    variable: &Node<ast::VariableDefinition>,
) -> Result<&'schema ExtendedType, TypeResolutionError> {
    let name = innermost_named_type(&variable.ty);
    schema
        .types
        .get(name)
        .ok_or_else(|| TypeResolutionError::UndefinedType {
            variable: variable.name.clone(),
            ty: name.clone(),
        })
}

/// Strips list and non-null wrappers down to the named type they apply to.
///
/// `[Int!]!` and `Int` both unwrap to `Int`; a bare named type is returned
/// as-is.
pub fn innermost_named_type(ty: &ast::Type) -> &ast::NamedType {
    match ty {
        ast::Type::Named(name) | ast::Type::NonNullNamed(name) => name,
        ast::Type::List(inner) | ast::Type::NonNullList(inner) => innermost_named_type(inner),
    }
}
