use apollo_compiler::ast;
use apollo_compiler::Node;

/// Collects the top-level operation definitions of `document`, preserving
/// source order. Fragment and type system definitions are ignored.
pub fn collect_operations(document: &ast::Document) -> Vec<Node<ast::OperationDefinition>> {
    document
        .definitions
        .iter()
        .filter_map(|definition| match definition {
            ast::Definition::OperationDefinition(operation) => Some(operation.clone()),
            _ => None,
        })
        .collect()
}

/// Decides which operation an editor should keep selected after the document
/// changed.
///
/// Priority order: the previously selected name if an operation with that
/// name still exists, then the operation at the previously selected position,
/// then the first operation. Returns `None` when the new document has no
/// operations; the result can also be `None` when the winning operation is
/// anonymous.
pub fn selected_operation_name(
    prev_operations: &[Node<ast::OperationDefinition>],
    prev_selected: Option<&str>,
    operations: &[Node<ast::OperationDefinition>],
) -> Option<ast::Name> {
    let first = operations.first()?;
    if let Some(prev_selected) = prev_selected {
        if let Some(kept) = operations
            .iter()
            .filter_map(|operation| operation.name.as_ref())
            .find(|name| name.as_str() == prev_selected)
        {
            return Some(kept.clone());
        }
        let prev_index = prev_operations.iter().position(|operation| {
            operation
                .name
                .as_ref()
                .is_some_and(|name| name.as_str() == prev_selected)
        });
        if let Some(operation) = prev_index.and_then(|index| operations.get(index)) {
            return operation.name.clone();
        }
    }
    first.name.clone()
}
