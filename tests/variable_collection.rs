use apollo_compiler::ast;
use apollo_compiler::schema::ExtendedType;
use apollo_compiler::Schema;
use graphql_query_facts::collect_variables;
use graphql_query_facts::collect_variables_with_diagnostics;

fn schema(sdl: &str) -> Schema {
    Schema::parse(sdl, "schema.graphql").expect("test schema parses")
}

fn document(text: &str) -> ast::Document {
    ast::Document::parse(text, "document.graphql").expect("test document parses")
}

#[test]
fn resolves_through_list_and_non_null_wrappers() {
    let schema = schema("type Query { field(x: [Int!]!): Int }");
    let document = document("query($x: [Int!]!) { field }");

    let variable_to_type = collect_variables(&schema, &document);
    assert_eq!(variable_to_type.len(), 1);
    let ty = variable_to_type.get("x").expect("x resolves");
    assert!(matches!(ty, ExtendedType::Scalar(_)));
    assert_eq!(ty.name().as_str(), "Int");
}

#[test]
fn undefined_type_omits_the_variable_and_keeps_the_rest() {
    let schema = schema("type Query { field: Int }");
    let document = document("query($x: Unknown, $y: Int) { field }");

    let variable_to_type = collect_variables(&schema, &document);
    assert!(!variable_to_type.contains_key("x"));
    assert_eq!(
        variable_to_type.get("y").map(|ty| ty.name().as_str()),
        Some("Int")
    );
}

#[test]
fn diagnostics_report_what_the_mapping_omits() {
    let schema = schema("type Query { field: Int }");
    let document = document("query($x: [Unknown!], $y: Int) { field }");

    let collected = collect_variables_with_diagnostics(&schema, &document);
    assert_eq!(
        collected.variable_to_type,
        collect_variables(&schema, &document)
    );
    assert_eq!(collected.diagnostics.len(), 1);
    assert_eq!(collected.diagnostics[0].variable().as_str(), "x");
    assert_eq!(
        collected.diagnostics[0].to_string(),
        "variable `$x` references type `Unknown`, which is not defined by the schema"
    );
}

#[test]
fn later_declarations_overwrite_earlier_ones() {
    let schema = schema("type Query { field: Int }");
    let document = document("query A($x: Int) { field } query B($x: String) { field }");

    let variable_to_type = collect_variables(&schema, &document);
    assert_eq!(variable_to_type.len(), 1);
    assert_eq!(
        variable_to_type.get("x").map(|ty| ty.name().as_str()),
        Some("String")
    );
}

#[test]
fn variables_from_all_operations_are_merged() {
    let schema = schema("type Query { field: Int }");
    let document = document("query A($x: Int) { field } query B($y: Boolean) { field }");

    let variable_to_type = collect_variables(&schema, &document);
    let resolved: Vec<_> = variable_to_type
        .iter()
        .map(|(name, ty)| (name.as_str(), ty.name().as_str()))
        .collect();
    assert_eq!(resolved, [("x", "Int"), ("y", "Boolean")]);
}

#[test]
fn document_without_operations_yields_an_empty_mapping() {
    let schema = schema("type Query { field: Int }");
    let document = document("fragment F on Query { field }");

    let variable_to_type = collect_variables(&schema, &document);
    assert!(variable_to_type.is_empty());
}
