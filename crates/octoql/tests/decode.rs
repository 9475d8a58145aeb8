//! GraphQL-aware response decoding into derived result shapes.

use chrono::{DateTime, TimeZone, Utc};
use octoql::{from_json, DecodeError, GraphQLType};

#[test]
fn object_into_nested_struct() {
    #[derive(Debug, Default, PartialEq, GraphQLType)]
    struct Query {
        viewer: Viewer,
    }

    #[derive(Debug, Default, PartialEq, GraphQLType)]
    struct Viewer {
        login: String,
        created_at: DateTime<Utc>,
    }

    let mut got = Query::default();
    from_json(
        r#"{
            "viewer": {
                "login": "shurcooL-test",
                "createdAt": "2017-06-29T04:12:01Z"
            }
        }"#,
        &mut got,
    )
    .unwrap();

    assert_eq!(
        got,
        Query {
            viewer: Viewer {
                login: "shurcooL-test".to_owned(),
                created_at: Utc.timestamp_opt(1498709521, 0).unwrap(),
            }
        }
    );
}

#[test]
fn selector_alias_matches_response_key() {
    #[derive(Debug, Default, PartialEq, GraphQLType)]
    struct Query {
        #[graphql(selector = "baz")]
        foo: String,
    }

    let mut got = Query::default();
    from_json(r#"{"baz": "bar"}"#, &mut got).unwrap();
    assert_eq!(got.foo, "bar");
}

#[test]
fn unknown_keys_are_ignored() {
    #[derive(Debug, Default, PartialEq, GraphQLType)]
    struct Query {
        foo: String,
    }

    let mut got = Query::default();
    from_json(r#"{"unrequested": 42, "foo": "bar"}"#, &mut got).unwrap();
    assert_eq!(got.foo, "bar");
}

#[test]
fn scalar_array() {
    #[derive(Debug, Default, PartialEq, GraphQLType)]
    struct Query {
        foo: Vec<String>,
    }

    let mut got = Query::default();
    from_json(
        r#"{
            "foo": [
                "bar",
                "baz"
            ]
        }"#,
        &mut got,
    )
    .unwrap();
    assert_eq!(got.foo, vec!["bar".to_owned(), "baz".to_owned()]);
}

#[test]
fn object_array() {
    #[derive(Debug, Default, PartialEq, GraphQLType)]
    struct Query {
        foo: Vec<Named>,
    }

    #[derive(Debug, Default, PartialEq, GraphQLType)]
    struct Named {
        name: String,
    }

    let mut got = Query::default();
    from_json(
        r#"{
            "foo": [
                {"name": "bar"},
                {"name": "baz"}
            ]
        }"#,
        &mut got,
    )
    .unwrap();
    assert_eq!(
        got.foo,
        vec![
            Named {
                name: "bar".to_owned()
            },
            Named {
                name: "baz".to_owned()
            },
        ]
    );
}

#[test]
fn null_resets_populated_option() {
    #[derive(Debug, Default, PartialEq, GraphQLType)]
    struct Query {
        foo: Option<String>,
        bar: Option<String>,
    }

    let mut got = Query {
        foo: None,
        bar: Some("prior".to_owned()),
    };
    from_json(r#"{"foo": "foo", "bar": null}"#, &mut got).unwrap();
    assert_eq!(
        got,
        Query {
            foo: Some("foo".to_owned()),
            bar: None,
        }
    );
}

#[test]
fn array_of_nullable_objects() {
    #[derive(Debug, Default, PartialEq, GraphQLType)]
    struct Query {
        foo: Vec<Option<Named>>,
    }

    #[derive(Debug, Default, PartialEq, GraphQLType)]
    struct Named {
        name: String,
    }

    let mut got = Query::default();
    from_json(
        r#"{
            "foo": [
                {"name": "bar"},
                null,
                {"name": "baz"}
            ]
        }"#,
        &mut got,
    )
    .unwrap();
    assert_eq!(
        got.foo,
        vec![
            Some(Named {
                name: "bar".to_owned()
            }),
            None,
            Some(Named {
                name: "baz".to_owned()
            }),
        ]
    );
}

#[test]
fn multiple_top_level_values_are_rejected() {
    #[derive(Debug, Default, PartialEq, GraphQLType)]
    struct Query {
        foo: String,
    }

    let mut got = Query::default();
    let err = from_json(r#"{"foo": "bar"}{"foo": "baz"}"#, &mut got).unwrap_err();
    assert!(matches!(err, DecodeError::TrailingData));
    assert_eq!(err.to_string(), "unexpected token after top-level value");
}

#[test]
fn union_populates_every_matching_fragment() {
    #[derive(Debug, Default, PartialEq, GraphQLType)]
    struct Actor {
        login: String,
    }

    #[derive(Debug, Default, PartialEq, GraphQLType)]
    struct ClosedEvent {
        actor: Actor,
        created_at: DateTime<Utc>,
    }

    #[derive(Debug, Default, PartialEq, GraphQLType)]
    struct ReopenedEvent {
        actor: Actor,
        created_at: DateTime<Utc>,
    }

    #[derive(Debug, Default, PartialEq, GraphQLType)]
    struct IssueTimelineItem {
        #[graphql(selector = "__typename")]
        typename: String,
        #[graphql(selector = "... on ClosedEvent")]
        closed_event: ClosedEvent,
        #[graphql(selector = "... on ReopenedEvent")]
        reopened_event: ReopenedEvent,
    }

    let mut got = IssueTimelineItem::default();
    from_json(
        r#"{
            "__typename": "ClosedEvent",
            "createdAt": "2017-06-29T04:12:01Z",
            "actor": {
                "login": "shurcooL-test"
            }
        }"#,
        &mut got,
    )
    .unwrap();

    // The response holds the union of the requested fragments' fields, so
    // every fragment declaring a matching child is populated from it.
    let created_at = Utc.timestamp_opt(1498709521, 0).unwrap();
    assert_eq!(
        got,
        IssueTimelineItem {
            typename: "ClosedEvent".to_owned(),
            closed_event: ClosedEvent {
                actor: Actor {
                    login: "shurcooL-test".to_owned()
                },
                created_at,
            },
            reopened_event: ReopenedEvent {
                actor: Actor {
                    login: "shurcooL-test".to_owned()
                },
                created_at,
            },
        }
    );
}

#[test]
fn flattened_base_fields_share_the_parent_namespace() {
    #[derive(Debug, Default, PartialEq, GraphQLType)]
    struct EventCommon {
        #[graphql(selector = "__typename")]
        typename: String,
        created_at: DateTime<Utc>,
    }

    #[derive(Debug, Default, PartialEq, GraphQLType)]
    struct ClosedEvent {
        #[graphql(flatten)]
        common: EventCommon,
        #[graphql(selector = "closer:actor")]
        closer: Actor,
    }

    #[derive(Debug, Default, PartialEq, GraphQLType)]
    struct Actor {
        login: String,
    }

    let mut got = ClosedEvent::default();
    from_json(
        r#"{
            "__typename": "ClosedEvent",
            "createdAt": "2017-06-29T04:12:01Z",
            "closer": {
                "login": "shurcooL-test"
            }
        }"#,
        &mut got,
    )
    .unwrap();

    assert_eq!(got.common.typename, "ClosedEvent");
    assert_eq!(
        got.common.created_at,
        Utc.timestamp_opt(1498709521, 0).unwrap()
    );
    assert_eq!(got.closer.login, "shurcooL-test");
}

#[test]
fn flatten_contributes_fields_to_the_selection() {
    #[derive(Debug, Default, PartialEq, GraphQLType)]
    struct EventCommon {
        #[graphql(selector = "__typename")]
        typename: String,
        created_at: DateTime<Utc>,
    }

    #[derive(Debug, Default, PartialEq, GraphQLType)]
    struct ClosedEvent {
        #[graphql(flatten)]
        common: EventCommon,
        actor: Actor,
    }

    #[derive(Debug, Default, PartialEq, GraphQLType)]
    struct Actor {
        login: String,
    }

    assert_eq!(
        octoql::build_query::<ClosedEvent>(&octoql::Variables::new()),
        "{__typename,createdAt,actor{login}}"
    );
}

#[test]
fn type_mismatch_reports_the_field_path() {
    #[derive(Debug, Default, PartialEq, GraphQLType)]
    struct Query {
        viewer: Viewer,
    }

    #[derive(Debug, Default, PartialEq, GraphQLType)]
    struct Viewer {
        created_at: DateTime<Utc>,
    }

    let mut got = Query::default();
    let err = from_json(r#"{"viewer": {"createdAt": 123}}"#, &mut got).unwrap_err();
    match err {
        DecodeError::SchemaMismatch { path, message } => {
            assert_eq!(path, "viewer.createdAt");
            assert!(message.contains("123"), "message: {message}");
        }
        other => panic!("expected SchemaMismatch, got {other:?}"),
    }
}

#[test]
fn array_mismatch_reports_the_element_index() {
    #[derive(Debug, Default, PartialEq, GraphQLType)]
    struct Query {
        comments: Vec<Comment>,
    }

    #[derive(Debug, Default, PartialEq, GraphQLType)]
    struct Comment {
        body: String,
    }

    let mut got = Query::default();
    let err = from_json(
        r#"{"comments": [{"body": "ok"}, {"body": 5}]}"#,
        &mut got,
    )
    .unwrap_err();
    match err {
        DecodeError::SchemaMismatch { path, .. } => {
            assert_eq!(path, "comments[1].body");
        }
        other => panic!("expected SchemaMismatch, got {other:?}"),
    }
}

#[test]
fn direct_field_after_fragment_sharing_its_key() {
    #[derive(Debug, Default, PartialEq, GraphQLType)]
    struct ClosedEvent {
        created_at: DateTime<Utc>,
    }

    #[derive(Debug, Default, PartialEq, GraphQLType)]
    struct TimelineItem {
        #[graphql(selector = "... on ClosedEvent")]
        closed_event: ClosedEvent,
        created_at: DateTime<Utc>,
    }

    let mut got = TimelineItem::default();
    from_json(r#"{"createdAt": "2017-06-29T04:12:01Z"}"#, &mut got).unwrap();

    // Both the fragment member and the direct field select `createdAt`;
    // declaration order must not decide which of them gets the value.
    let want = Utc.timestamp_opt(1498709521, 0).unwrap();
    assert_eq!(got.closed_event.created_at, want);
    assert_eq!(got.created_at, want);
}

#[test]
fn optional_fragment_member_allocates_only_on_match() {
    #[derive(Debug, Default, PartialEq, GraphQLType)]
    struct ClosedEvent {
        reason: String,
    }

    #[derive(Debug, Default, PartialEq, GraphQLType)]
    struct ReopenedEvent {
        opener: String,
    }

    #[derive(Debug, Default, PartialEq, GraphQLType)]
    struct TimelineItem {
        #[graphql(selector = "__typename")]
        typename: String,
        #[graphql(selector = "... on ClosedEvent")]
        closed: Option<ClosedEvent>,
        #[graphql(selector = "... on ReopenedEvent")]
        reopened: Option<ReopenedEvent>,
    }

    let mut got = TimelineItem::default();
    from_json(
        r#"{"__typename": "ClosedEvent", "reason": "completed"}"#,
        &mut got,
    )
    .unwrap();

    assert_eq!(got.typename, "ClosedEvent");
    assert_eq!(
        got.closed,
        Some(ClosedEvent {
            reason: "completed".to_owned()
        })
    );
    assert_eq!(got.reopened, None);
}

#[test]
fn raw_string_field_names_decode() {
    #[derive(Debug, Default, PartialEq, GraphQLType)]
    struct Query {
        r#type: String,
    }

    let mut got = Query::default();
    from_json(r#"{"type": "ISSUE"}"#, &mut got).unwrap();
    assert_eq!(got.r#type, "ISSUE");
}
