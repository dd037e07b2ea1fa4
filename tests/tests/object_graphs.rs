//! Object graph traversal: cascades, cycles and shared references.

use assay_tests::prelude::*;

mod valid_library {
    use super::*;

    pub fn scenario() -> Scenario {
        let library = fixtures::library();
        let (alice, dune, acme) = (library.alice, library.dune, library.acme);

        Scenario::new("valid_library")
            .validator(fixtures::library_validator())
            .graph(library.graph)
            .step("validate_author", move |v, g| v.validate_object(g, alice, GroupSpec::default()), |a| a.none())
            .step("validate_book", move |v, g| v.validate_object(g, dune, GroupSpec::default()), |a| a.none())
            .step("validate_publisher", move |v, g| v.validate_object(g, acme, GroupSpec::default()), |a| a.none())
    }

    #[test]
    fn test_valid_library_is_clean() {
        scenario().run().unwrap();
    }
}

mod cycles {
    use super::*;

    pub fn scenario() -> Scenario {
        let mut library = fixtures::library();
        library.graph.set(library.dune, "title", Value::from(""));
        let (alice, dune) = (library.alice, library.dune);

        Scenario::new("cycles")
            .validator(fixtures::library_validator())
            .graph(library.graph)
            .step(
                "from_author",
                move |v, g| v.validate_object(g, alice, GroupSpec::default()),
                |a| a.violations(1).code_at("books[0].title", IS_BLANK_ERROR),
            )
            .step(
                "from_book",
                move |v, g| v.validate_object(g, dune, GroupSpec::default()),
                |a| a.violations(1).paths(["title"]),
            )
    }

    #[test]
    fn test_cycle_reports_each_violation_once() {
        scenario().run().unwrap();
    }

    #[test]
    fn test_self_reference() {
        let mut graph = ObjectGraph::new();
        let narcissus = fixtures::author(&mut graph, "N", "narcissus@example.com");
        graph.set(narcissus, "friend", Value::Ref(narcissus));

        let violations = fixtures::library_validator()
            .validate_object(&graph, narcissus, GroupSpec::default())
            .unwrap();

        assert_eq!(violations.len(), 1);
        assert!(violations.has(TOO_SHORT_ERROR));
    }
}

mod shared_references {
    use super::*;

    pub fn scenario() -> Scenario {
        let mut library = fixtures::library();
        let graph = &mut library.graph;
        // Alice and Bob both reach Dune
        graph.set(library.dune, "pages", Value::from(0));
        graph.set(library.alice, "friend", Value::Ref(library.bob));
        graph.set(library.bob, "books", Value::from(vec![Value::Ref(library.dune)]));
        let alice = library.alice;

        Scenario::new("shared_references")
            .validator(fixtures::library_validator())
            .graph(library.graph)
            .step(
                "diamond",
                move |v, g| v.validate_object(g, alice, GroupSpec::default()),
                |a| {
                    a.violations(1)
                        .code_at("books[0].pages", TOO_LOW_ERROR)
                        .clean_at("friend.books[0].pages")
                },
            )
    }

    #[test]
    fn test_shared_object_is_checked_once() {
        scenario().run().unwrap();
    }
}

mod collections {
    use super::*;

    #[test]
    fn test_deep_collection_reaches_nested_lists() {
        // GIVEN
        let mut graph = ObjectGraph::new();
        let first = fixtures::book(&mut graph, "First", 10);
        let second = fixtures::book(&mut graph, "Second", 0);
        let acme = fixtures::publisher(&mut graph, "Acme Books");
        graph.set(
            acme,
            "catalog",
            Value::from(vec![
                Value::from(vec![Value::Ref(first)]),
                Value::from(vec![Value::Ref(second)]),
            ]),
        );

        // WHEN
        let violations = fixtures::library_validator()
            .validate_object(&graph, acme, GroupSpec::default())
            .unwrap();

        // THEN
        assert_eq!(violations.len(), 1);
        assert_eq!(violations.all()[0].property_path, "catalog[1][0].pages");
    }

    #[test]
    fn test_shallow_collection_skips_nested_lists() {
        let mut graph = ObjectGraph::new();
        let bad = fixtures::book(&mut graph, "", 10);
        let alice = fixtures::author(&mut graph, "Alice", "alice@example.com");
        graph.set(alice, "books", Value::from(vec![Value::from(vec![Value::Ref(bad)])]));

        let violations = fixtures::library_validator()
            .validate_object(&graph, alice, GroupSpec::default())
            .unwrap();

        assert!(violations.is_empty());
    }

    #[test]
    fn test_object_cascade_over_list() {
        let mut graph = ObjectGraph::new();
        let dune = fixtures::book(&mut graph, "Dune", 412);
        let draft = fixtures::book(&mut graph, "", 12);
        graph.set(dune, "related", Value::from(vec![Value::Ref(draft)]));

        let violations = fixtures::library_validator()
            .validate_object(&graph, dune, GroupSpec::default())
            .unwrap();

        assert_eq!(violations.len(), 1);
        assert_eq!(violations.all()[0].property_path, "related[0].title");
    }

    #[test]
    fn test_map_collection_uses_keys() {
        let mut graph = ObjectGraph::new();
        let dune = fixtures::book(&mut graph, "", 412);
        let alice = fixtures::author(&mut graph, "Alice", "alice@example.com");
        graph.set(alice, "books", Value::Map(map! { "favourite" => dune }));

        let violations = fixtures::library_validator()
            .validate_object(&graph, alice, GroupSpec::default())
            .unwrap();

        assert_eq!(violations.all()[0].property_path, "books[favourite].title");
    }

    #[test]
    fn test_null_elements_and_missing_properties_are_skipped() {
        let mut graph = ObjectGraph::new();
        let alice = fixtures::author(&mut graph, "Alice", "alice@example.com");
        graph.set(alice, "books", Value::from(vec![Value::Null, Value::from(3)]));

        let violations = fixtures::library_validator()
            .validate_object(&graph, alice, GroupSpec::default())
            .unwrap();

        assert!(violations.is_empty());
    }
}

mod traversal_order {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_subtree_finishes_before_next_sibling() {
        // GIVEN
        let mut graph = ObjectGraph::new();
        let alice = fixtures::author(&mut graph, "", "alice@example.com");
        let first = fixtures::book(&mut graph, "", 1);
        let second = fixtures::book(&mut graph, "Second", 0);
        fixtures::link_books(&mut graph, alice, &[first, second]);
        graph.set(first, "tags", Value::from(vec!["a-very-long-tag"]));

        // WHEN
        let violations = fixtures::library_validator()
            .validate_object(&graph, alice, GroupSpec::default())
            .unwrap();

        // THEN
        let paths: Vec<_> = violations.iter().map(|v| v.property_path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "name",
                "name",
                "books[0].title",
                "books[0].tags[0]",
                "books[1].pages",
            ]
        );
    }
}
