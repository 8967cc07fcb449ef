//! End-to-end rewrite tests against a music-catalog fixture schema.

use emend_core::Value;
use emend_schema::{
    ConstValue, FieldDef, Schema, SchemaBuilder, TypeDef, TypeRef,
};
use emend_transform::{RewriteEngine, TransformPipeline};

/// Build the fixture: one query type, one entity type, one input type, one
/// enum, and one locally defined scalar.
fn catalog_schema() -> Schema {
    let mut builder = SchemaBuilder::new();
    builder
        .object("Track")
        .description("A single audio track")
        .field("id", FieldDef::new(TypeRef::non_null(TypeRef::named("ID"))))
        .field(
            "title",
            FieldDef::new(TypeRef::named("String")).description("Original title"),
        )
        .field(
            "genre",
            FieldDef::new(TypeRef::non_null(TypeRef::named("Genre"))),
        )
        .field("addedAt", FieldDef::new(TypeRef::named("DateTime")))
        .done()
        .unwrap();
    builder
        .object("Query")
        .field(
            "tracks",
            FieldDef::new(TypeRef::list(TypeRef::named("Track")))
                .argument("limit", FieldDef::new(TypeRef::named("Int")))
                .argument("genre", FieldDef::new(TypeRef::named("Genre"))),
        )
        .field(
            "track",
            FieldDef::new(TypeRef::named("Track"))
                .argument("id", FieldDef::new(TypeRef::non_null(TypeRef::named("ID")))),
        )
        .done()
        .unwrap();
    builder
        .input_object("TrackFilter")
        .field("genre", FieldDef::new(TypeRef::named("Genre")))
        .field(
            "search",
            FieldDef::new(TypeRef::named("String")).description("Full-text query"),
        )
        .field("limit", FieldDef::new(TypeRef::named("Int")))
        .done()
        .unwrap();
    builder
        .enum_type("Genre")
        .value("ROCK")
        .value("JAZZ")
        .value("AMBIENT")
        .done()
        .unwrap();
    builder
        .scalar("Slug")
        .description("URL-safe identifier")
        .done()
        .unwrap();
    builder.build()
}

fn engine(rules_json: &str) -> RewriteEngine {
    RewriteEngine::from_json(rules_json).unwrap()
}

fn object_field<'a>(schema: &'a Schema, type_name: &str, field: &str) -> &'a FieldDef {
    &schema
        .get_type(type_name)
        .and_then(TypeDef::as_object)
        .unwrap()
        .fields[field]
}

fn input_field<'a>(schema: &'a Schema, type_name: &str, field: &str) -> &'a FieldDef {
    &schema
        .get_type(type_name)
        .and_then(TypeDef::as_input_object)
        .unwrap()
        .fields[field]
}

fn enum_value<'a>(schema: &'a Schema, type_name: &str, value: &str) -> &'a FieldDef {
    &schema
        .get_type(type_name)
        .and_then(TypeDef::as_enum)
        .unwrap()
        .values[value]
}

mod description {
    use super::*;

    #[test]
    fn test_clear_and_set() {
        let rewritten = engine(
            r#"[
                {"typeName": "Track", "fields": ["title"],
                 "replacers": [{"description": false}]},
                {"typeName": "Track", "fields": ["genre"],
                 "replacers": [{"description": "The track's genre"}]}
            ]"#,
        )
        .apply(catalog_schema())
        .unwrap();

        assert_eq!(object_field(&rewritten, "Track", "title").description, None);

        let genre = object_field(&rewritten, "Track", "genre");
        assert_eq!(genre.description.as_deref(), Some("The track's genre"));
        assert_eq!(
            genre.extensions.get("description"),
            Some(&Value::String("The track's genre".into()))
        );
    }

    #[test]
    fn test_boolean_enable_aborts_the_transform() {
        let err = engine(
            r#"[{"typeName": "Track", "fields": ["title"],
                 "replacers": [{"description": true}]}]"#,
        )
        .apply(catalog_schema())
        .unwrap_err();

        assert!(err.to_string().contains("string or false"));
    }

    #[test]
    fn test_applies_to_enum_values() {
        let rewritten = engine(
            r#"[{"typeName": "Genre", "fields": ["ROCK"],
                 "replacers": [{"description": "Guitar music"}]}]"#,
        )
        .apply(catalog_schema())
        .unwrap();

        assert_eq!(
            enum_value(&rewritten, "Genre", "ROCK").description.as_deref(),
            Some("Guitar music")
        );
    }
}

mod deprecated {
    use super::*;

    #[test]
    fn test_toggle_reason_and_clear() {
        let rewritten = engine(
            r#"[
                {"typeName": "TrackFilter", "fields": ["genre"],
                 "replacers": [{"deprecated": false}]},
                {"typeName": "TrackFilter", "fields": ["search"],
                 "replacers": [{"deprecated": true}]},
                {"typeName": "TrackFilter", "fields": ["limit"],
                 "replacers": [{"deprecated": "use pagination"}]}
            ]"#,
        )
        .apply(catalog_schema())
        .unwrap();

        assert_eq!(input_field(&rewritten, "TrackFilter", "genre").deprecation_reason, None);
        assert_eq!(
            input_field(&rewritten, "TrackFilter", "search")
                .deprecation_reason
                .as_deref(),
            Some("Deprecated")
        );
        assert_eq!(
            input_field(&rewritten, "TrackFilter", "limit")
                .deprecation_reason
                .as_deref(),
            Some("use pagination")
        );
    }

    #[test]
    fn test_applies_to_enum_values() {
        let rewritten = engine(
            r#"[{"typeName": "Genre", "fields": ["AMBIENT"],
                 "replacers": [{"deprecated": "folded into ELECTRONIC"}]}]"#,
        )
        .apply(catalog_schema())
        .unwrap();

        assert_eq!(
            enum_value(&rewritten, "Genre", "AMBIENT")
                .deprecation_reason
                .as_deref(),
            Some("folded into ELECTRONIC")
        );
    }
}

mod nullable {
    use super::*;

    #[test]
    fn test_wrap_and_unwrap() {
        let rewritten = engine(
            r#"[
                {"typeName": "Track", "fields": ["title"],
                 "replacers": [{"nullable": false}]},
                {"typeName": "Track", "fields": ["genre"],
                 "replacers": [{"nullable": true}]}
            ]"#,
        )
        .apply(catalog_schema())
        .unwrap();

        let title = object_field(&rewritten, "Track", "title");
        assert_eq!(title.ty, Some(TypeRef::non_null(TypeRef::named("String"))));
        assert_eq!(title.extensions.get("nullable"), Some(&Value::Bool(false)));

        let genre = object_field(&rewritten, "Track", "genre");
        assert_eq!(genre.ty, Some(TypeRef::named("Genre")));
        assert_eq!(genre.extensions.get("nullable"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_enum_value_kind_is_illegal() {
        let err = engine(
            r#"[{"typeName": "Genre", "fields": ["ROCK"],
                 "replacers": [{"nullable": false}]}]"#,
        )
        .apply(catalog_schema())
        .unwrap_err();

        assert!(err.to_string().contains("Nullable can only be set"));
    }
}

mod defaults {
    use super::*;

    #[test]
    fn test_input_field_and_argument() {
        let rewritten = engine(
            r#"[
                {"typeName": "TrackFilter", "fields": ["limit"],
                 "replacers": [{"default": 10}]},
                {"typeName": "Query", "fields": ["tracks.limit"],
                 "replacers": [{"default": 25}]}
            ]"#,
        )
        .apply(catalog_schema())
        .unwrap();

        assert_eq!(
            input_field(&rewritten, "TrackFilter", "limit").default_value,
            Some(Value::Int(10))
        );
        assert_eq!(
            object_field(&rewritten, "Query", "tracks").arguments["limit"].default_value,
            Some(Value::Int(25))
        );
    }

    #[test]
    fn test_non_scalar_default_is_stored_verbatim() {
        let rewritten = engine(
            r#"[{"typeName": "TrackFilter", "fields": ["genre"],
                 "replacers": [{"default": "ROCK"}]}]"#,
        )
        .apply(catalog_schema())
        .unwrap();

        assert_eq!(
            input_field(&rewritten, "TrackFilter", "genre").default_value,
            Some(Value::String("ROCK".into()))
        );
    }

    #[test]
    fn test_composite_field_is_illegal() {
        let err = engine(
            r#"[{"typeName": "Track", "fields": ["title"],
                 "replacers": [{"default": "untitled"}]}]"#,
        )
        .apply(catalog_schema())
        .unwrap_err();

        assert!(err
            .to_string()
            .contains("input fields and arguments"));
    }
}

mod extensions {
    use super::*;

    #[test]
    fn test_merge_is_last_write_wins() {
        let rewritten = engine(
            r#"[
                {"typeName": "Track", "fields": ["title"],
                 "replacers": [{"extensions": {"owner": "catalog-team", "weight": 1}}]},
                {"typeName": "Track", "fields": ["title"],
                 "replacers": [{"extensions": {"weight": 2}}]}
            ]"#,
        )
        .apply(catalog_schema())
        .unwrap();

        let title = object_field(&rewritten, "Track", "title");
        assert_eq!(
            title.extensions.get("owner"),
            Some(&Value::String("catalog-team".into()))
        );
        assert_eq!(title.extensions.get("weight"), Some(&Value::Int(2)));
    }

    #[test]
    fn test_empty_payload_is_a_noop() {
        let rewritten = engine(
            r#"[{"typeName": "Track", "fields": ["title"],
                 "replacers": [{"extensions": {}}]}]"#,
        )
        .apply(catalog_schema())
        .unwrap();

        assert!(object_field(&rewritten, "Track", "title").extensions.is_empty());
    }
}

mod directives {
    use super::*;

    #[test]
    fn test_bare_directive() {
        let rewritten = engine(
            r#"[{"typeName": "Track", "fields": ["id"],
                 "replacers": [{"directive": {"name": "internal"}}]}]"#,
        )
        .apply(catalog_schema())
        .unwrap();

        let directives = object_field(&rewritten, "Track", "id").directives();
        assert_eq!(directives.len(), 1);
        assert_eq!(directives[0].name, "internal");
        assert!(directives[0].arguments.is_empty());
    }

    #[test]
    fn test_argument_encoding() {
        let rewritten = engine(
            r#"[{"typeName": "Track", "fields": ["title"],
                 "replacers": [{"directive": {"name": "constraint", "args": {
                     "minLength": 2,
                     "contains": "test",
                     "min": 0.1,
                     "required": false,
                     "nullable": null,
                     "arr": [1, 2]
                 }}}]}]"#,
        )
        .apply(catalog_schema())
        .unwrap();

        let directives = object_field(&rewritten, "Track", "title").directives();
        assert_eq!(directives.len(), 1);
        assert_eq!(directives[0].name, "constraint");

        let args = &directives[0].arguments;
        assert_eq!(args[0].name, "minLength");
        assert_eq!(args[0].value, ConstValue::Int("2".into()));
        assert_eq!(args[1].name, "contains");
        assert_eq!(args[1].value, ConstValue::String("test".into()));
        assert_eq!(args[2].name, "min");
        assert_eq!(args[2].value, ConstValue::Float("0.1".into()));
        assert_eq!(args[3].name, "required");
        assert_eq!(args[3].value, ConstValue::Boolean(false));
        assert_eq!(args[4].name, "nullable");
        assert_eq!(args[4].value, ConstValue::Null);
        assert_eq!(args[5].name, "arr");
        assert_eq!(args[5].value, ConstValue::String("[1,2]".into()));
    }

    #[test]
    fn test_directives_accumulate_across_rules() {
        let rewritten = engine(
            r#"[
                {"typeName": "Track", "fields": ["title"],
                 "replacers": [{"directive": {"name": "first"}}]},
                {"typeName": "Track", "fields": ["title"],
                 "replacers": [{"directive": {"name": "second"}}]}
            ]"#,
        )
        .apply(catalog_schema())
        .unwrap();

        let directives = object_field(&rewritten, "Track", "title").directives();
        let names: Vec<_> = directives.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }
}

mod retype {
    use super::*;

    #[test]
    fn test_catalogue_scalar_is_registered_and_used() {
        let rewritten = engine(
            r#"[{"typeName": "Track", "fields": ["id"],
                 "replacers": [{"type": "UUID"}]}]"#,
        )
        .apply(catalog_schema())
        .unwrap();

        // The scalar was registered during the extension phase...
        let uuid = rewritten.get_type("UUID").and_then(TypeDef::as_scalar).unwrap();
        assert!(uuid.description.is_some());

        // ...and the non-null wrapper survived the substitution.
        assert_eq!(
            object_field(&rewritten, "Track", "id").ty,
            Some(TypeRef::non_null(TypeRef::named("UUID")))
        );
    }

    #[test]
    fn test_existing_schema_type_wins_over_catalogue() {
        let rewritten = engine(
            r#"[{"typeName": "Track", "fields": ["title"],
                 "replacers": [{"type": "Slug"}]}]"#,
        )
        .apply(catalog_schema())
        .unwrap();

        assert_eq!(
            object_field(&rewritten, "Track", "title").ty,
            Some(TypeRef::named("Slug"))
        );
        // Still the fixture's own definition.
        let slug = rewritten.get_type("Slug").and_then(TypeDef::as_scalar).unwrap();
        assert_eq!(slug.description.as_deref(), Some("URL-safe identifier"));
    }

    #[test]
    fn test_argument_retype() {
        let rewritten = engine(
            r#"[{"typeName": "Query", "fields": ["track.id"],
                 "replacers": [{"type": "UUID"}]}]"#,
        )
        .apply(catalog_schema())
        .unwrap();

        assert_eq!(
            object_field(&rewritten, "Query", "track").arguments["id"].ty,
            Some(TypeRef::non_null(TypeRef::named("UUID")))
        );
    }

    #[test]
    fn test_unresolved_target_fails_when_referenced() {
        let err = engine(
            r#"[{"typeName": "Track", "fields": ["title"],
                 "replacers": [{"type": "Mystery"}]}]"#,
        )
        .apply(catalog_schema())
        .unwrap_err();

        assert_eq!(err.to_string(), "Type not found: Mystery");
    }

    #[test]
    fn test_unresolved_target_is_tolerated_when_unreferenced() {
        // The rule never matches a field, so the dangling name is ignored.
        let rewritten = engine(
            r#"[{"typeName": "Ghost", "fields": ["nothing"],
                 "replacers": [{"type": "Mystery"}]}]"#,
        )
        .apply(catalog_schema())
        .unwrap();

        assert!(!rewritten.contains_type("Mystery"));
    }
}

mod matching {
    use super::*;

    #[test]
    fn test_wildcard_field_pattern() {
        let rewritten = engine(
            r#"[{"typeName": "Track", "fields": ["*"],
                 "replacers": [{"deprecated": true}]}]"#,
        )
        .apply(catalog_schema())
        .unwrap();

        for field in ["id", "title", "genre", "addedAt"] {
            assert_eq!(
                object_field(&rewritten, "Track", field)
                    .deprecation_reason
                    .as_deref(),
                Some("Deprecated"),
                "field {} should be deprecated",
                field
            );
        }
        // Other types are untouched.
        assert_eq!(object_field(&rewritten, "Query", "tracks").deprecation_reason, None);
    }

    #[test]
    fn test_wildcard_type_pattern_crosses_kinds() {
        let rewritten = engine(
            r#"[{"typeName": "*", "fields": ["genre"],
                 "replacers": [{"extensions": {"reviewed": true}}]}]"#,
        )
        .apply(catalog_schema())
        .unwrap();

        assert_eq!(
            object_field(&rewritten, "Track", "genre").extensions.get("reviewed"),
            Some(&Value::Bool(true))
        );
        assert_eq!(
            input_field(&rewritten, "TrackFilter", "genre").extensions.get("reviewed"),
            Some(&Value::Bool(true))
        );
    }

    #[test]
    fn test_argument_wildcard_pattern() {
        let rewritten = engine(
            r#"[{"typeName": "Query", "fields": ["*.limit"],
                 "replacers": [{"default": 50}]}]"#,
        )
        .apply(catalog_schema())
        .unwrap();

        assert_eq!(
            object_field(&rewritten, "Query", "tracks").arguments["limit"].default_value,
            Some(Value::Int(50))
        );
        // Arguments with other names are untouched.
        assert_eq!(
            object_field(&rewritten, "Query", "tracks").arguments["genre"].default_value,
            None
        );
    }

    #[test]
    fn test_type_fallback_applies_by_return_type() {
        let rewritten = engine(
            r#"[{"typeName": "DateTime",
                 "replacers": [{"deprecated": "switching to Timestamp"}]}]"#,
        )
        .apply(catalog_schema())
        .unwrap();

        // Applies to the one field returning DateTime, whatever its name.
        assert_eq!(
            object_field(&rewritten, "Track", "addedAt")
                .deprecation_reason
                .as_deref(),
            Some("switching to Timestamp")
        );
        // Fields of other types are untouched.
        assert_eq!(object_field(&rewritten, "Track", "title").deprecation_reason, None);
        assert_eq!(object_field(&rewritten, "Track", "id").deprecation_reason, None);
    }

    #[test]
    fn test_all_matching_rules_fold_in_order() {
        let rewritten = engine(
            r#"[
                {"typeName": "Track", "fields": ["title"],
                 "replacers": [{"description": "first pass"}]},
                {"typeName": "Track", "fields": ["*"],
                 "replacers": [{"description": "second pass"}]}
            ]"#,
        )
        .apply(catalog_schema())
        .unwrap();

        // Both rules matched; the later one folded last.
        assert_eq!(
            object_field(&rewritten, "Track", "title").description.as_deref(),
            Some("second pass")
        );
    }
}

mod determinism {
    use super::*;

    const RULES: &str = r#"[
        {"typeName": "Track", "fields": ["*"],
         "replacers": [{"extensions": {"audited": true}}]},
        {"typeName": "Track", "fields": ["id"],
         "replacers": [{"type": "UUID"}, {"nullable": true}]},
        {"typeName": "DateTime",
         "replacers": [{"deprecated": true}]},
        {"typeName": "Query", "fields": ["*.limit"],
         "replacers": [{"default": 50}]}
    ]"#;

    #[test]
    fn test_two_copies_rewrite_identically() {
        let engine = engine(RULES);
        let first = engine.apply(catalog_schema()).unwrap();
        let second = engine.apply(catalog_schema()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_separate_engines_agree() {
        let first = engine(RULES).apply(catalog_schema()).unwrap();
        let second = engine(RULES).apply(catalog_schema()).unwrap();
        assert_eq!(first, second);
    }
}

mod pipeline {
    use super::*;

    #[test]
    fn test_engine_runs_as_a_stage() {
        let stage_one = engine(
            r#"[{"typeName": "Track", "fields": ["id"],
                 "replacers": [{"type": "UUID"}]}]"#,
        );
        let stage_two = engine(
            r#"[{"typeName": "Track", "fields": ["id"],
                 "replacers": [{"deprecated": "use uuid instead"}]}]"#,
        );

        let pipeline = TransformPipeline::new().stage(stage_one).stage(stage_two);
        let rewritten = pipeline.run(catalog_schema()).unwrap();

        let id = object_field(&rewritten, "Track", "id");
        assert_eq!(id.ty, Some(TypeRef::non_null(TypeRef::named("UUID"))));
        assert_eq!(id.deprecation_reason.as_deref(), Some("use uuid instead"));
    }
}

#[test]
fn test_untouched_schema_round_trips() {
    let rewritten = engine("[]").apply(catalog_schema()).unwrap();
    assert_eq!(rewritten, catalog_schema());
}

#[test]
fn test_visit_covers_every_kind() {
    // One rule per kind, all through a single apply.
    let rewritten = engine(
        r#"[
            {"typeName": "Track", "fields": ["title"],
             "replacers": [{"extensions": {"kind": "composite"}}]},
            {"typeName": "TrackFilter", "fields": ["search"],
             "replacers": [{"extensions": {"kind": "input"}}]},
            {"typeName": "Genre", "fields": ["JAZZ"],
             "replacers": [{"extensions": {"kind": "enum"}}]},
            {"typeName": "Query", "fields": ["tracks.genre"],
             "replacers": [{"extensions": {"kind": "argument"}}]}
        ]"#,
    )
    .apply(catalog_schema())
    .unwrap();

    assert_eq!(
        object_field(&rewritten, "Track", "title").extensions.get("kind"),
        Some(&Value::String("composite".into()))
    );
    assert_eq!(
        input_field(&rewritten, "TrackFilter", "search").extensions.get("kind"),
        Some(&Value::String("input".into()))
    );
    assert_eq!(
        enum_value(&rewritten, "Genre", "JAZZ").extensions.get("kind"),
        Some(&Value::String("enum".into()))
    );
    assert_eq!(
        object_field(&rewritten, "Query", "tracks").arguments["genre"]
            .extensions
            .get("kind"),
        Some(&Value::String("argument".into()))
    );
}
