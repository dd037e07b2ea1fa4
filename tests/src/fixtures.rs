//! Shared schemas and object graphs.
//!
//! The library schema:
//!
//! - `Author { name, email, books*, friend }`
//! - `Book { title, pages, author, tags, related }`
//! - `Publisher { name, address, authors*, catalog** }` validated through the
//!   group sequence `[Publisher, Strict]`
//!
//! `*` cascades into each element, `**` also into nested lists.

use assay_core::{map, GroupSequence, Map, ObjectGraph, ObjectId, Value};
use assay_registry::kinds::LENGTH;
use assay_registry::{rules, Cascade, Constraint, Field, MetadataRegistry, PropertyMetadata, RegistryBuilder};
use assay_validator::{Validator, ValidatorConfig};

/// Group holding the publisher's second-pass rules.
pub const STRICT: &str = "Strict";

pub fn library_registry() -> MetadataRegistry {
    let mut builder = RegistryBuilder::new();

    builder
        .add_class("Author")
        .property(
            PropertyMetadata::new("name")
                .constraint(rules::not_blank())
                .constraint(rules::length(2, 50)),
        )
        .property(PropertyMetadata::new("email").constraint(rules::regex(r"^[^@\s]+@[^@\s]+$")))
        .property(PropertyMetadata::new("books").cascade(Cascade::Collection { deep: false }))
        .property(PropertyMetadata::new("friend").cascade(Cascade::Object))
        .done()
        .expect("Author");

    builder
        .add_class("Book")
        .property(PropertyMetadata::new("title").constraint(rules::not_blank()))
        .property(PropertyMetadata::new("pages").constraint(rules::range(1, 5000)))
        .property(PropertyMetadata::new("author").cascade(Cascade::Object))
        .property(
            PropertyMetadata::new("tags").constraint(rules::all(vec![rules::max_length(10)])),
        )
        .property(PropertyMetadata::new("related").cascade(Cascade::Object))
        .done()
        .expect("Book");

    builder
        .add_class("Publisher")
        .property(
            PropertyMetadata::new("name")
                .constraint(rules::not_blank())
                .constraint(strict_min_length(5)),
        )
        .property(PropertyMetadata::new("address").constraint(address_rule()))
        .property(PropertyMetadata::new("authors").cascade(Cascade::Collection { deep: false }))
        .property(PropertyMetadata::new("catalog").cascade(Cascade::Collection { deep: true }))
        .group_sequence(GroupSequence::new(["Publisher", STRICT]))
        .done()
        .expect("Publisher");

    builder.build()
}

fn strict_min_length(min: i64) -> Constraint {
    Constraint::builder(&LENGTH)
        .option("min", min)
        .groups([STRICT])
        .build()
        .expect("strict length")
}

/// Structured-map rule for postal addresses.
pub fn address_rule() -> Constraint {
    rules::collection(vec![
        Field::required("street", vec![rules::not_blank()]),
        Field::new("city", vec![rules::not_blank()]),
        Field::optional("zip", vec![rules::regex(r"^\d{5}$")]),
    ])
}

pub fn library_validator() -> Validator {
    library_validator_with(ValidatorConfig::default())
}

pub fn library_validator_with(config: ValidatorConfig) -> Validator {
    Validator::builder()
        .metadata(library_registry())
        .config(config)
        .build()
        .expect("library validator")
}

pub fn valid_address() -> Map {
    map! { "street" => "1 Main St", "city" => "Springfield", "zip" => "12345" }
}

pub fn author(graph: &mut ObjectGraph, name: &str, email: &str) -> ObjectId {
    graph.insert("Author", map! { "name" => name, "email" => email })
}

pub fn book(graph: &mut ObjectGraph, title: &str, pages: i64) -> ObjectId {
    graph.insert("Book", map! { "title" => title, "pages" => pages })
}

pub fn publisher(graph: &mut ObjectGraph, name: &str) -> ObjectId {
    graph.insert(
        "Publisher",
        map! { "name" => name, "address" => valid_address() },
    )
}

/// Give `author` the `books` and point each book back at its author.
pub fn link_books(graph: &mut ObjectGraph, author: ObjectId, books: &[ObjectId]) {
    let refs: Vec<Value> = books.iter().map(|&b| Value::Ref(b)).collect();
    graph.set(author, "books", Value::List(refs));
    for &book in books {
        graph.set(book, "author", Value::Ref(author));
    }
}

/// A small valid library with a cycle between Alice and her books.
pub struct Library {
    pub graph: ObjectGraph,
    pub alice: ObjectId,
    pub bob: ObjectId,
    pub dune: ObjectId,
    pub emma: ObjectId,
    pub acme: ObjectId,
}

pub fn library() -> Library {
    let mut graph = ObjectGraph::new();
    let alice = author(&mut graph, "Alice", "alice@example.com");
    let bob = author(&mut graph, "Bob", "bob@example.com");
    let dune = book(&mut graph, "Dune", 412);
    let emma = book(&mut graph, "Emma", 320);
    link_books(&mut graph, alice, &[dune, emma]);

    let acme = publisher(&mut graph, "Acme Books");
    graph.set(acme, "authors", Value::from(vec![Value::Ref(alice), Value::Ref(bob)]));

    Library {
        graph,
        alice,
        bob,
        dune,
        emma,
        acme,
    }
}
