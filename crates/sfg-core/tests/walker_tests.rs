use sfg_core::config::NamingTables;
use sfg_core::ir::{FieldType, GeneratedEnum, GeneratedRecord, GeneratedType};
use sfg_core::parse;
use sfg_core::transform;

const STOREFRONT: &str = include_str!("fixtures/storefront_subset.json");
const WIDGET: &str = include_str!("fixtures/widget.json");

fn walk(input: &str) -> Vec<GeneratedType> {
    let doc = parse::from_json(input).expect("fixture should parse");
    transform::emit(&doc, &NamingTables::default()).expect("fixture should walk")
}

fn record<'a>(types: &'a [GeneratedType], name: &str) -> &'a GeneratedRecord {
    types
        .iter()
        .find_map(|t| match t {
            GeneratedType::Record(r) if r.name == name => Some(r),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no record named {name}"))
}

fn enumeration<'a>(types: &'a [GeneratedType], name: &str) -> &'a GeneratedEnum {
    types
        .iter()
        .find_map(|t| match t {
            GeneratedType::Enum(e) if e.name == name => Some(e),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no enum named {name}"))
}

#[test]
fn widget_end_to_end() {
    let types = walk(WIDGET);
    assert_eq!(types.len(), 2);

    let widget = record(&types, "Widget");
    assert_eq!(widget.fields.len(), 1);

    let title = &widget.fields[0];
    assert_eq!(title.property_name, "Title");
    assert_eq!(title.source_name, "title");
    assert_eq!(title.field_type, FieldType::String);
    assert_eq!(title.doc.as_deref(), Some("Title is the widget's title."));

    let color = enumeration(&types, "Color");
    let members: Vec<(&str, &str)> = color
        .members
        .iter()
        .map(|m| (m.name.as_str(), m.literal.as_str()))
        .collect();
    assert_eq!(members, [("Red", "RED"), ("Green", "GREEN")]);
}

#[test]
fn declarations_follow_schema_order() {
    let types = walk(STOREFRONT);
    let names: Vec<&str> = types.iter().map(|t| t.name()).collect();
    assert_eq!(
        names,
        [
            "QueryRoot",
            "Node",
            "Shop",
            "Domain",
            "Blog",
            "Article",
            "Image",
            "Product",
            "ProductVariant",
            "PageInfo",
            "ArticleSortKeys",
            "MediaContentType"
        ]
    );
}

#[test]
fn pagination_and_meta_types_are_not_emitted() {
    let types = walk(STOREFRONT);
    for t in &types {
        assert!(!t.name().starts_with("__"));
        assert!(!t.name().ends_with("Connection"));
        assert!(!t.name().ends_with("Edge"));
    }
    // Deny-listed enums, unions, scalars, and input objects are absent too.
    for skipped in ["CountryCode", "WeightUnit", "MetafieldParentResource", "ProductFilter"] {
        assert!(types.iter().all(|t| t.name() != skipped));
    }
}

#[test]
fn connection_fields_collapse_to_the_generic_container() {
    let types = walk(STOREFRONT);
    let query_root = record(&types, "QueryRoot");

    let articles = query_root
        .fields
        .iter()
        .find(|f| f.source_name == "articles")
        .unwrap();
    assert_eq!(
        articles.field_type,
        FieldType::Connection(Box::new(FieldType::Ref("Article".to_string())))
    );

    let product_tags = query_root
        .fields
        .iter()
        .find(|f| f.source_name == "productTags")
        .unwrap();
    assert_eq!(
        product_tags.field_type,
        FieldType::Connection(Box::new(FieldType::String))
    );
}

#[test]
fn list_fields_resolve_their_element_type() {
    let types = walk(STOREFRONT);

    let nodes = record(&types, "QueryRoot")
        .fields
        .iter()
        .find(|f| f.source_name == "nodes")
        .unwrap()
        .clone();
    assert_eq!(
        nodes.field_type,
        FieldType::List(Box::new(FieldType::Ref("Node".to_string())))
    );

    let tags = record(&types, "Article")
        .fields
        .iter()
        .find(|f| f.source_name == "tags")
        .unwrap()
        .clone();
    assert_eq!(tags.field_type, FieldType::List(Box::new(FieldType::String)));

    // Elements referencing a deny-listed enum fall back to strings.
    let ships_to = record(&types, "Shop")
        .fields
        .iter()
        .find(|f| f.source_name == "shipsToCountries")
        .unwrap()
        .clone();
    assert_eq!(ships_to.field_type, FieldType::List(Box::new(FieldType::String)));
}

#[test]
fn cycle_overrides_are_opaque() {
    let types = walk(STOREFRONT);

    let blog = record(&types, "Article")
        .fields
        .iter()
        .find(|f| f.source_name == "blog")
        .unwrap()
        .clone();
    assert_eq!(blog.field_type, FieldType::Opaque);

    let product = record(&types, "ProductVariant")
        .fields
        .iter()
        .find(|f| f.source_name == "product")
        .unwrap()
        .clone();
    assert_eq!(product.field_type, FieldType::Opaque);
}

#[test]
fn acronyms_are_cased_in_property_names() {
    let types = walk(STOREFRONT);

    let content = record(&types, "Article")
        .fields
        .iter()
        .find(|f| f.source_name == "contentHtml")
        .unwrap()
        .clone();
    assert_eq!(content.property_name, "ContentHTML");
    assert_eq!(content.field_type, FieldType::String);

    let domain = record(&types, "Domain");
    let ssl = domain.fields.iter().find(|f| f.source_name == "sslEnabled").unwrap();
    assert_eq!(ssl.property_name, "SSLEnabled");
    let url = domain.fields.iter().find(|f| f.source_name == "url").unwrap();
    assert_eq!(url.property_name, "URL");

    let sku = record(&types, "ProductVariant")
        .fields
        .iter()
        .find(|f| f.source_name == "sku")
        .unwrap()
        .clone();
    assert_eq!(sku.property_name, "SKU");
}

#[test]
fn scalars_map_to_target_primitives() {
    let types = walk(STOREFRONT);
    let product = record(&types, "Product");

    let available = product
        .fields
        .iter()
        .find(|f| f.source_name == "availableForSale")
        .unwrap();
    assert_eq!(available.field_type, FieldType::Bool);

    let created = product
        .fields
        .iter()
        .find(|f| f.source_name == "createdAt")
        .unwrap();
    assert_eq!(created.field_type, FieldType::DateTime);

    let variant = record(&types, "ProductVariant");
    let price = variant.fields.iter().find(|f| f.source_name == "price").unwrap();
    assert_eq!(price.field_type, FieldType::String);
    assert!(price.deprecated);

    // Deny-listed enum references degrade to strings.
    let unit = variant
        .fields
        .iter()
        .find(|f| f.source_name == "weightUnit")
        .unwrap();
    assert_eq!(unit.field_type, FieldType::String);
}

#[test]
fn field_docs_are_synthesized() {
    let types = walk(STOREFRONT);

    let blog = record(&types, "QueryRoot")
        .fields
        .iter()
        .find(|f| f.source_name == "blog")
        .unwrap()
        .clone();
    assert_eq!(
        blog.doc.as_deref(),
        Some("Blog is a specific `Blog` by one of its unique attributes.")
    );

    let has_next = record(&types, "PageInfo")
        .fields
        .iter()
        .find(|f| f.source_name == "hasNextPage")
        .unwrap()
        .clone();
    assert_eq!(
        has_next.doc.as_deref(),
        Some("HasNextPage is whether there are more pages to fetch.")
    );
}

#[test]
fn enum_members_keep_wire_literals() {
    let types = walk(STOREFRONT);

    let sort_keys = enumeration(&types, "ArticleSortKeys");
    assert_eq!(sort_keys.members.len(), 7);
    let literals: Vec<&str> = sort_keys.members.iter().map(|m| m.literal.as_str()).collect();
    assert_eq!(
        literals,
        ["TITLE", "BLOG_TITLE", "AUTHOR", "UPDATED_AT", "PUBLISHED_AT", "ID", "RELEVANCE"]
    );
    assert_eq!(sort_keys.members[3].name, "UpdatedAt");

    let media = enumeration(&types, "MediaContentType");
    let model = media.members.iter().find(|m| m.literal == "MODEL_3D").unwrap();
    assert_eq!(model.name, "Model3D");
}

#[test]
fn walking_twice_is_identical() {
    let a = walk(STOREFRONT);
    let b = walk(STOREFRONT);
    assert_eq!(a, b);
}
