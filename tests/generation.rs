//! Generation behaviour through the public facade.

use schema_mock::{
    FieldOverride, GenerateOptions, GeneratorError, LocaleDefinition, MockConfig, MockValue,
    Mocker, OverrideConfig, Provider, SeedValue, TypeNode,
};

fn person() -> TypeNode {
    TypeNode::object([("name", TypeNode::string()), ("age", TypeNode::number())])
}

fn no_overrides() -> OverrideConfig {
    OverrideConfig::new()
}

#[test]
fn test_same_seed_same_output() {
    let options = GenerateOptions::new().with_seed("test-seed").with_count(2);

    let first = Mocker::new()
        .generate_sync(&person(), &no_overrides(), options.clone())
        .unwrap();
    let second = Mocker::new()
        .generate_sync(&person(), &no_overrides(), options)
        .unwrap();

    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
    for item in &first {
        let age = item.get("age").and_then(MockValue::as_i64).unwrap();
        assert!((18..=80).contains(&age));
    }
}

#[test]
fn test_integer_and_string_seeds() {
    let schema = TypeNode::string();

    let by_int = |seed: i64| {
        Mocker::new()
            .generate_sync(&schema, &no_overrides(), GenerateOptions::new().with_seed(seed).with_count(5))
            .unwrap()
    };
    assert_eq!(by_int(99), by_int(99));

    // A string seed behaves exactly like its hashed integer
    let hashed = schema_mock::MockGenerator::new().set_seed(&SeedValue::from("hello"));
    let by_text = Mocker::new()
        .generate_sync(&schema, &no_overrides(), GenerateOptions::new().with_seed("hello").with_count(5))
        .unwrap();
    assert_eq!(by_text, by_int(hashed));
}

#[test]
fn test_same_seed_per_locale() {
    for locale in Mocker::available_locales() {
        let options = GenerateOptions::new()
            .with_seed(7)
            .with_locale(locale.as_str())
            .with_count(3);

        let a = Mocker::new()
            .generate_sync(&person(), &no_overrides(), options.clone())
            .unwrap();
        let b = Mocker::new()
            .generate_sync(&person(), &no_overrides(), options)
            .unwrap();
        assert_eq!(a, b, "locale {locale} should be deterministic");
    }
}

#[test]
fn test_explicit_seed_persists_across_calls_and_locales() {
    let schema = TypeNode::object([("city", TypeNode::string())]);
    let fr = GenerateOptions::new().with_locale("fr");

    let mut reference = Mocker::new();
    reference.seed("persist");
    let expected = reference.generate_sync(&schema, &no_overrides(), fr.clone()).unwrap();

    let mut switched = Mocker::new();
    switched.seed("persist");
    switched
        .generate_sync(&schema, &no_overrides(), GenerateOptions::new().with_locale("de"))
        .unwrap();
    switched
        .generate_sync(&schema, &no_overrides(), GenerateOptions::new().with_locale("es"))
        .unwrap();
    let actual = switched.generate_sync(&schema, &no_overrides(), fr).unwrap();

    assert_eq!(expected, actual);
}

#[test]
fn test_count() {
    let mut mocker = Mocker::new();

    let default = mocker
        .generate_sync(&person(), &no_overrides(), GenerateOptions::new())
        .unwrap();
    assert_eq!(default.len(), 1);

    let none = mocker
        .generate_sync(&person(), &no_overrides(), GenerateOptions::new().with_count(0))
        .unwrap();
    assert!(none.is_empty());

    let many = mocker
        .generate_sync(&person(), &no_overrides(), GenerateOptions::new().with_count(25))
        .unwrap();
    assert_eq!(many.len(), 25);
}

#[test]
fn test_object_keys() {
    let mut mocker = Mocker::new();

    let value = mocker
        .generate_sync(&person(), &no_overrides(), GenerateOptions::new())
        .unwrap()
        .remove(0);
    let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["name", "age"]);

    let empty = mocker
        .generate_sync(&TypeNode::Object(vec![]), &no_overrides(), GenerateOptions::new())
        .unwrap()
        .remove(0);
    assert!(empty.as_object().unwrap().is_empty());
}

#[test]
fn test_union_literals_stay_in_set() {
    let schema = TypeNode::union([
        TypeNode::literal("red"),
        TypeNode::literal("green"),
        TypeNode::literal("blue"),
    ]);
    let values = Mocker::new()
        .generate_sync(&schema, &no_overrides(), GenerateOptions::new().with_count(100))
        .unwrap();

    let allowed: Vec<MockValue> = ["red", "green", "blue"].into_iter().map(MockValue::from).collect();
    assert!(values.iter().all(|v| allowed.contains(v)));
}

#[test]
fn test_tuple_arity_and_kinds() {
    let schema = TypeNode::tuple([TypeNode::string(), TypeNode::number(), TypeNode::boolean()]);
    let value = Mocker::new()
        .generate_sync(&schema, &no_overrides(), GenerateOptions::new())
        .unwrap()
        .remove(0);

    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert!(items[0].as_str().is_some());
    assert!(items[1].is_number());
    assert!(items[2].as_bool().is_some());
}

#[test]
fn test_override_precedence() {
    let schema = TypeNode::object([
        ("email", TypeNode::string()),
        ("age", TypeNode::number()),
        ("title", TypeNode::string()),
        ("count", TypeNode::number()),
    ]);
    let overrides = OverrideConfig::new()
        .with("email", FieldOverride::value(|| MockValue::from("fixed@example.com")))
        .with("age", FieldOverride::method(r#"number.int({"min": 500, "max": 600})"#))
        .with(
            "title",
            FieldOverride::transformed("lorem.word", |v| {
                MockValue::from(v.as_str().unwrap_or_default().to_uppercase())
            }),
        );

    let value = Mocker::new()
        .generate_sync(&schema, &overrides, GenerateOptions::new().with_seed(1))
        .unwrap()
        .remove(0);

    assert_eq!(value.get("email"), Some(&MockValue::from("fixed@example.com")));
    let age = value.get("age").and_then(MockValue::as_i64).unwrap();
    assert!((500..=600).contains(&age));
    let title = value.get("title").and_then(MockValue::as_str).unwrap();
    assert_eq!(title, title.to_uppercase());
    assert!(!title.contains(' '));
    // No override: the heuristic still applies
    let count = value.get("count").and_then(MockValue::as_i64).unwrap();
    assert!((1..=100).contains(&count));
}

#[test]
fn test_override_keys_match_last_segment() {
    let schema = TypeNode::object([
        ("name", TypeNode::string()),
        ("company", TypeNode::object([("name", TypeNode::string())])),
    ]);
    let overrides = OverrideConfig::new().with("name", FieldOverride::constant("shared"));

    let value = Mocker::new()
        .generate_sync(&schema, &overrides, GenerateOptions::new())
        .unwrap()
        .remove(0);

    assert_eq!(value.get("name"), Some(&MockValue::from("shared")));
    assert_eq!(
        value.get("company").and_then(|c| c.get("name")),
        Some(&MockValue::from("shared"))
    );
}

#[test]
fn test_malformed_method_specs_match_kind() {
    let schema = TypeNode::object([
        ("text", TypeNode::string()),
        ("amount", TypeNode::number()),
        ("enabled", TypeNode::boolean()),
    ]);
    let overrides = OverrideConfig::new()
        .with("text", FieldOverride::method("invalid.faker.method()"))
        .with("amount", FieldOverride::method("number.int({broken json)"))
        .with("enabled", FieldOverride::method("not a spec at all"));

    let values = Mocker::new()
        .generate_sync(&schema, &overrides, GenerateOptions::new().with_count(10))
        .unwrap();

    for value in values {
        assert!(value.get("text").unwrap().as_str().is_some());
        assert!(value.get("amount").unwrap().is_number());
        assert!(value.get("enabled").unwrap().as_bool().is_some());
    }
}

#[test]
fn test_unknown_locale() {
    let err = Mocker::new()
        .generate_sync(&person(), &no_overrides(), GenerateOptions::new().with_locale("tlh"))
        .unwrap_err();

    assert!(matches!(err, GeneratorError::InvalidLocale(_)));
    assert_eq!(
        err.to_string(),
        "Invalid locale 'tlh'. Available locales: en, de, fr, es"
    );
}

#[test]
fn test_price_has_two_fraction_digits() {
    let schema = TypeNode::object([("price", TypeNode::number())]);
    let values = Mocker::new()
        .generate_sync(&schema, &no_overrides(), GenerateOptions::new().with_count(50))
        .unwrap();

    for value in values {
        let price = value.get("price").and_then(MockValue::as_f64).unwrap();
        assert!((10.0..=1000.0).contains(&price));
        let text = price.to_string();
        let decimals = text.split('.').nth(1).map(str::len).unwrap_or(0);
        assert!(decimals <= 2, "{text} has more than two decimals");
    }
}

#[test]
fn test_custom_locale_definition() {
    let mut definition = LocaleDefinition::default();
    definition.code = "tiny".to_string();
    definition.cities = vec!["Smallville".to_string()];

    let schema = TypeNode::object([("city", TypeNode::string())]);
    let value = Mocker::new()
        .generate_sync(&schema, &no_overrides(), GenerateOptions::new().with_locale(definition))
        .unwrap()
        .remove(0);

    assert_eq!(value.get("city"), Some(&MockValue::from("Smallville")));
}

#[test]
fn test_prebuilt_provider_locale() {
    let provider = Provider::for_locale("de").unwrap();
    let mut mocker = Mocker::new();
    mocker
        .generate_sync(&person(), &no_overrides(), GenerateOptions::new().with_locale(provider))
        .unwrap();

    assert_eq!(mocker.engine().provider().locale_code(), "de");
}

#[test]
fn test_async_generate_is_lazy_and_wraps_faults() {
    let schema = TypeNode::object([("secret", TypeNode::string())]);
    let overrides = OverrideConfig::new().with(
        "secret",
        FieldOverride::try_value(|| Err("backend offline".into())),
    );

    let mut mocker = Mocker::new();
    mocker.seed(3);
    let err = tokio_test::block_on(mocker.generate(&schema, &overrides, GenerateOptions::new()))
        .unwrap_err();

    assert_eq!(err.to_string(), schema_mock::GENERATION_FAILED);
    let source = err.downcast_ref::<GeneratorError>().unwrap();
    assert!(matches!(source, GeneratorError::Fault { path, .. } if path == "secret"));

    // The sync form returns the engine error directly
    let err = mocker
        .generate_sync(&schema, &overrides, GenerateOptions::new())
        .unwrap_err();
    assert!(matches!(err, GeneratorError::Fault { .. }));
}

#[test]
fn test_async_generate_matches_sync() {
    let options = GenerateOptions::new().with_seed("same").with_count(4);

    let sync = Mocker::new()
        .generate_sync(&person(), &no_overrides(), options.clone())
        .unwrap();
    let mut mocker = Mocker::new();
    let deferred = tokio_test::block_on(mocker.generate(&person(), &no_overrides(), options)).unwrap();

    assert_eq!(sync, deferred);
}

#[test]
fn test_bound_generator() {
    let config = MockConfig::new(
        OverrideConfig::new().with("name", FieldOverride::method("person.firstName")),
    )
    .with_options(GenerateOptions::new().with_seed("bound").with_count(3));

    let mut bound = Mocker::new().create(person(), config);
    assert_eq!(bound.schema(), &person());

    let first = bound.generate_sync(GenerateOptions::new()).unwrap();
    let again = tokio_test::block_on(bound.generate(GenerateOptions::new())).unwrap();
    assert_eq!(first.len(), 3);
    assert_eq!(first, again);

    let single = bound.generate_sync(GenerateOptions::new().with_count(1)).unwrap();
    assert_eq!(single.len(), 1);
    assert_eq!(single[0], first[0]);
}

#[test]
fn test_registry_through_facade() {
    let mocker = Mocker::new();
    mocker.register_faker("facade-test-sku", || MockValue::from("SKU-42"));
    mocker.register_faker("facade-test-sku", || MockValue::from("SKU-43"));

    assert!(mocker.registry().has("facade-test-sku"));
    assert!(mocker.registry().list().contains(&"facade-test-sku".to_string()));

    // Registered generators are used through explicit overrides
    let sku = mocker.registry().get("facade-test-sku").unwrap();
    let overrides = OverrideConfig::new().with("sku", FieldOverride::value(move || sku()));
    let value = Mocker::new()
        .generate_sync(
            &TypeNode::object([("sku", TypeNode::string())]),
            &overrides,
            GenerateOptions::new(),
        )
        .unwrap()
        .remove(0);
    assert_eq!(value.get("sku"), Some(&MockValue::from("SKU-43")));
}
