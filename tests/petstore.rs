use oas_model::{
    ApiKeyLocation, ApiKeyScheme, ComponentKind, Components, Content, Extensions, Info,
    MediaType, OpenApi, Operation, Parameter, PathItem, RefOr, RequestBody, Resolver, Response,
    Responses, Schema, SecurityRequirement, SecurityScheme, Server, Tag,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn petstore() -> OpenApi {
    let pet = Schema::object()
        .property("id", Schema::integer().format("int64"))
        .unwrap()
        .property("name", Schema::string())
        .unwrap()
        .property("tag", Schema::string())
        .unwrap()
        .required_name("id")
        .unwrap()
        .required_name("name")
        .unwrap();

    let new_pet = Schema::object()
        .property("name", Schema::string())
        .unwrap()
        .property("tag", Schema::string())
        .unwrap()
        .required_name("name")
        .unwrap();

    let error = Schema::object()
        .property("code", Schema::integer().format("int32"))
        .unwrap()
        .property("message", Schema::string())
        .unwrap()
        .required_name("code")
        .unwrap()
        .required_name("message")
        .unwrap();

    let components = Components::new()
        .schema("Pet", pet)
        .unwrap()
        .schema("NewPet", new_pet)
        .unwrap()
        .schema("Error", error)
        .unwrap()
        .response(
            "ErrorResponse",
            RefOr::Item(
                Response::new("unexpected error")
                    .content(Content::json(MediaType::new().schema(Schema::reference("Error")))),
            ),
        )
        .unwrap()
        .security_scheme(
            "api_key",
            SecurityScheme::ApiKey(ApiKeyScheme {
                name: "api_key".to_string(),
                location: ApiKeyLocation::Header,
                description: None,
                extensions: Extensions::new(),
            }),
        )
        .unwrap();

    let list_pets = Operation::new()
        .tag("pets")
        .operation_id("findPets")
        .parameter(RefOr::Item(
            Parameter::query("limit")
                .description("maximum number of results to return")
                .schema(Schema::integer().format("int32")),
        ))
        .responses(
            Responses::new()
                .response(
                    "200",
                    Response::new("pet response")
                        .content(Content::json(
                            MediaType::new().schema(Schema::array(Schema::reference("Pet"))),
                        ))
                        .into(),
                )
                .unwrap()
                .default_response(RefOr::reference(ComponentKind::Response, "ErrorResponse"))
                .unwrap(),
        );

    let create_pet = Operation::new()
        .tag("pets")
        .operation_id("addPet")
        .request_body(RefOr::Item(
            RequestBody::new()
                .required(true)
                .content(Content::json(MediaType::new().schema(Schema::reference("NewPet")))),
        ))
        .responses(
            Responses::new()
                .response(
                    "200",
                    Response::new("pet response")
                        .content(Content::json(
                            MediaType::new().schema(Schema::reference("Pet")),
                        ))
                        .into(),
                )
                .unwrap()
                .default_response(RefOr::reference(ComponentKind::Response, "ErrorResponse"))
                .unwrap(),
        );

    let get_pet = Operation::new()
        .tag("pets")
        .operation_id("findPetById")
        .parameter(RefOr::Item(
            Parameter::path("petId").schema(Schema::integer().format("int64")),
        ))
        .responses(
            Responses::new()
                .response(
                    "200",
                    Response::new("pet response")
                        .content(Content::json(
                            MediaType::new().schema(Schema::reference("Pet")),
                        ))
                        .into(),
                )
                .unwrap()
                .default_response(RefOr::reference(ComponentKind::Response, "ErrorResponse"))
                .unwrap(),
        );

    let delete_pet = Operation::new()
        .tag("pets")
        .operation_id("deletePet")
        .parameter(RefOr::Item(
            Parameter::path("petId").schema(Schema::integer().format("int64")),
        ))
        .responses(
            Responses::new()
                .response("204", Response::new("pet deleted").into())
                .unwrap()
                .default_response(RefOr::reference(ComponentKind::Response, "ErrorResponse"))
                .unwrap(),
        );

    OpenApi::new(
        Info::new("Swagger Petstore", "1.0.0")
            .description("A sample API that uses a petstore as an example"),
    )
    .server(Server::new("https://petstore.example.com/api"))
    .tag(Tag::new("pets").description("Pet operations"))
    .components(components)
    .security_requirement(SecurityRequirement::new().scheme("api_key", vec![]))
    .path("/pets", PathItem::new().get(list_pets).post(create_pet))
    .unwrap()
    .path("/pets/{petId}", PathItem::new().get(get_pet).delete(delete_pet))
    .unwrap()
    .extension("x-audience", json!("external"))
    .unwrap()
}

#[test]
fn test_petstore_validates() {
    assert_eq!(oas_model::validate_document(&petstore()), Ok(()));
}

#[test]
fn test_json_round_trip_is_lossless() {
    let doc = petstore();
    let first = doc.to_json_string().unwrap();
    let reparsed = OpenApi::from_json_str(&first).unwrap();
    let second = reparsed.to_json_string().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_yaml_round_trip_is_lossless() {
    let doc = petstore();
    let first = doc.to_yaml().unwrap();
    let reparsed = OpenApi::from_yaml(&first).unwrap();
    let second = reparsed.to_yaml().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_serialization_is_idempotent() {
    let doc = petstore();
    assert_eq!(doc.to_json_value().unwrap(), doc.to_json_value().unwrap());
    assert_eq!(doc.to_yaml().unwrap(), doc.to_yaml().unwrap());
}

#[test]
fn test_top_level_key_order_preserved() {
    let value = petstore().to_json_value().unwrap();
    let keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(
        keys,
        vec![
            "openapi",
            "info",
            "servers",
            "paths",
            "components",
            "security",
            "tags",
            "x-audience",
        ]
    );
}

#[test]
fn test_parse_external_yaml_document() {
    let yaml = r#"
openapi: 3.0.0
info:
  title: Test API
  version: 1.0.0
paths:
  /pets:
    get:
      operationId: listPets
      responses:
        '200':
          description: a list of pets
          content:
            application/json:
              schema:
                type: array
                items:
                  $ref: '#/components/schemas/Pet'
components:
  schemas:
    Pet:
      type: object
      properties:
        id:
          type: integer
          format: int64
        name:
          type: string
      required:
        - id
        - name
"#;

    let doc = OpenApi::from_yaml(yaml).unwrap();
    assert_eq!(doc.info.title, "Test API");

    let item = doc.paths.get("/pets").unwrap();
    let op = item.get.as_ref().unwrap();
    assert_eq!(op.operation_id.as_deref(), Some("listPets"));

    let components = doc.components.as_ref().unwrap();
    let pet = components.get_schema("Pet").unwrap();
    assert_eq!(pet.required, vec!["id", "name"]);
    assert_eq!(pet.properties.keys().collect::<Vec<_>>(), vec!["id", "name"]);

    assert_eq!(oas_model::validate_document(&doc), Ok(()));
}

#[test]
fn test_lenient_parse_preserves_unknown_fields() {
    let yaml = r#"
openapi: 3.0.0
info:
  title: Test API
  version: 1.0.0
  x-team: platform
  internalTracking: 42
paths: {}
"#;

    let doc = OpenApi::from_yaml(yaml).unwrap();
    let value = doc.to_json_value().unwrap();
    assert_eq!(value["info"]["internalTracking"], json!(42));
    assert_eq!(value["info"]["x-team"], json!("platform"));
}

#[test]
fn test_strict_parse_rejects_unknown_fields() {
    let yaml = r#"
openapi: 3.0.0
info:
  title: Test API
  version: 1.0.0
  internalTracking: 42
paths: {}
"#;

    let err = OpenApi::from_yaml_strict(yaml).unwrap_err();
    assert!(format!("{}", err).contains("internalTracking"));
}

#[test]
fn test_reference_integrity_of_valid_document() {
    let doc = petstore();
    let components = doc.components.as_ref().unwrap();
    let resolver = Resolver::new(components);

    let pet = resolver.schema("#/components/schemas/Pet", "test").unwrap();
    assert!(pet.properties.contains_key("name"));

    assert!(resolver
        .check(ComponentKind::Response, "#/components/responses/ErrorResponse", "test")
        .is_ok());
    assert!(resolver
        .check(ComponentKind::Response, "#/components/responses/Missing", "test")
        .is_err());
}

#[test]
fn test_self_referencing_schema_round_trips() {
    let node = Schema::object()
        .property("value", Schema::string())
        .unwrap()
        .property("next", Schema::reference("Node"))
        .unwrap();
    let doc = OpenApi::new(Info::new("Linked", "1.0"))
        .components(Components::new().schema("Node", node).unwrap());

    assert_eq!(oas_model::validate_document(&doc), Ok(()));

    // Serialization emits the reference token, not a re-expansion.
    let yaml = doc.to_yaml().unwrap();
    assert_eq!(yaml.matches("#/components/schemas/Node").count(), 1);

    let reparsed = OpenApi::from_yaml(&yaml).unwrap();
    assert_eq!(reparsed.to_yaml().unwrap(), yaml);
}

#[test]
fn test_mutually_recursive_schemas_terminate() {
    let a = Schema::object()
        .property("b", Schema::reference("B"))
        .unwrap();
    let b = Schema::object()
        .property("a", Schema::reference("A"))
        .unwrap();
    let components = Components::new()
        .schema("A", a)
        .unwrap()
        .schema("B", b)
        .unwrap();

    let resolver = Resolver::new(&components);
    let closure = resolver.schema_closure("A").unwrap();
    assert_eq!(closure.iter().collect::<Vec<_>>(), vec!["A", "B"]);

    let doc = OpenApi::new(Info::new("Mutual", "1.0")).components(components);
    assert_eq!(oas_model::validate_document(&doc), Ok(()));
    assert!(doc.to_yaml().is_ok());
}

#[test]
fn test_unresolved_reference_reported_with_path() {
    let doc = OpenApi::new(Info::new("Broken", "1.0")).components(
        Components::new()
            .schema(
                "Pet",
                Schema::object()
                    .property("owner", Schema::reference("Owner"))
                    .unwrap(),
            )
            .unwrap(),
    );

    let errors = oas_model::validate_document(&doc).unwrap_err();
    assert_eq!(
        errors,
        vec![oas_model::ModelError::unresolved(
            "#/components/schemas/Owner",
            "components.schemas.Pet.properties.owner"
        )]
    );
}
