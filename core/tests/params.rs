use pretty_assertions::assert_eq;
use serde_json::json;
use specgen_core::{
    AppError, Definitions, ParameterBuilder, RecordType, SchemaResolver, TypeCatalog,
    TypeDescriptor,
};

#[test]
fn test_param_location() {
    let catalog = TypeCatalog::new();
    let resolver = SchemaResolver::new(&catalog);

    for location in ["query", "path", "header", "cookie"] {
        let param = ParameterBuilder::new("test_param", location)
            .schema_type(TypeDescriptor::string())
            .build(&resolver, &mut Definitions::new())
            .unwrap();
        assert_eq!(
            param.to_value(),
            json!({
                "required": true,
                "schema": {"title": "Test_Param", "type": "string"},
                "name": "test_param",
                "in": location
            })
        );
    }
}

#[test]
fn test_param_optional() {
    let catalog = TypeCatalog::new();
    let param = ParameterBuilder::new("test_param", "path")
        .schema_type(TypeDescriptor::string())
        .required(false)
        .build(&SchemaResolver::new(&catalog), &mut Definitions::new())
        .unwrap();
    assert_eq!(
        param.to_value(),
        json!({
            "required": false,
            "schema": {"title": "Test_Param", "type": "string"},
            "name": "test_param",
            "in": "path"
        })
    );
}

#[test]
fn test_param_default() {
    let catalog = TypeCatalog::new();
    let param = ParameterBuilder::new("test_param", "path")
        .schema_type(TypeDescriptor::string())
        .default_value(json!("default_value"))
        .build(&SchemaResolver::new(&catalog), &mut Definitions::new())
        .unwrap();
    assert_eq!(
        param.to_value(),
        json!({
            "required": true,
            "schema": {"title": "Test_Param", "type": "string", "default": "default_value"},
            "name": "test_param",
            "in": "path"
        })
    );
}

#[test]
fn test_param_any_type() {
    let catalog = TypeCatalog::new();
    let param = ParameterBuilder::new("test_param", "path")
        .build(&SchemaResolver::new(&catalog), &mut Definitions::new())
        .unwrap();
    assert_eq!(
        param.to_value(),
        json!({
            "required": true,
            "schema": {"title": "Test_Param"},
            "name": "test_param",
            "in": "path"
        })
    );
}

#[test]
fn test_param_integer_path() {
    let catalog = TypeCatalog::new();
    let param = ParameterBuilder::new("id", "path")
        .schema_type(TypeDescriptor::integer())
        .build(&SchemaResolver::new(&catalog), &mut Definitions::new())
        .unwrap();
    assert_eq!(
        param.to_value(),
        json!({"name": "id", "in": "path", "required": true,
               "schema": {"title": "Id", "type": "integer"}})
    );
}

#[test]
fn test_param_list_keeps_item_refs_in_shared_table() {
    let mut catalog = TypeCatalog::new();
    catalog
        .insert(RecordType::new("Tag").field("label", TypeDescriptor::string()))
        .unwrap();
    let mut defs = Definitions::new();

    let param = ParameterBuilder::new("tags", "query")
        .schema_type(TypeDescriptor::list_of(TypeDescriptor::named("Tag")))
        .default_value(json!([]))
        .build(&SchemaResolver::new(&catalog), &mut defs)
        .unwrap();

    assert_eq!(
        param.schema.to_value(),
        json!({
            "title": "Tags",
            "type": "array",
            "items": {"$ref": "#/components/schemas/Tag"},
            "default": []
        })
    );
    assert_eq!(defs.len(), 1);
}

#[test]
fn test_param_unrecognized_location() {
    let catalog = TypeCatalog::new();
    let err = ParameterBuilder::new("id", "body")
        .schema_type(TypeDescriptor::integer())
        .build(&SchemaResolver::new(&catalog), &mut Definitions::new())
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidLocation(_)));
}
