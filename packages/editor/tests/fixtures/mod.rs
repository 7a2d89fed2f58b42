//! Shared documents for the integration tests

#![allow(dead_code)]

use form_editor::{FormDocument, Node};

/// Five root nodes; 3, 4 and 5 are structures with three children each
pub fn filled() -> FormDocument {
    FormDocument::from_json(
        r#"{
            "id": "filled",
            "components": [
                { "cid": "1", "type": "Input", "config": {} },
                { "cid": "2", "type": "Button", "config": {} },
                { "cid": "3", "type": "Layout", "config": { "components": [
                    { "cid": "31", "type": "Text", "config": { "content": "Hello" } },
                    { "cid": "32", "type": "Button", "config": {} },
                    { "cid": "33", "type": "Input", "config": {} }
                ] } },
                { "cid": "4", "type": "Fieldset", "config": {
                    "legend": "Legend", "collapsible": true, "disabled": "false", "collapsed": false,
                    "components": [
                        { "cid": "41", "type": "Text", "config": { "content": "Hello" } },
                        { "cid": "42", "type": "Button", "config": {} },
                        { "cid": "43", "type": "Input", "config": {} }
                    ]
                } },
                { "cid": "5", "type": "Panel", "config": {
                    "title": "Title", "collapsible": true, "collapsed": false,
                    "components": [
                        { "cid": "51", "type": "Text", "config": { "content": "Hello" } },
                        { "cid": "52", "type": "Button", "config": {} },
                        { "cid": "53", "type": "Input", "config": {} }
                    ]
                } }
            ]
        }"#,
    )
    .expect("fixture parses")
}

/// One table with three columns; the last one holds a button
pub fn table() -> FormDocument {
    FormDocument::from_json(
        r#"{
            "id": "table",
            "components": [
                { "cid": "1", "type": "DataTable", "config": { "components": [
                    { "cid": "11", "type": "DataTableColumn", "config": { "value": "Hello", "components": [] } },
                    { "cid": "12", "type": "DataTableColumn", "config": { "components": [] } },
                    { "cid": "13", "type": "DataTableColumn", "config": { "asActionColumn": true, "components": [
                        { "cid": "14", "type": "Button", "config": {} }
                    ] } }
                ] } }
            ]
        }"#,
    )
    .expect("fixture parses")
}

pub fn order(doc: &FormDocument) -> Vec<&str> {
    ids(&doc.components)
}

pub fn order_deep<'a>(doc: &'a FormDocument, id: &str) -> Vec<&'a str> {
    let node = doc
        .components
        .iter()
        .find(|node| node.id == id)
        .expect("root node present");
    ids(node.children().expect("container"))
}

pub fn ids(nodes: &[Node]) -> Vec<&str> {
    nodes.iter().map(|node| node.id.as_str()).collect()
}

pub fn node<'a>(doc: &'a FormDocument, id: &str) -> &'a Node {
    let location = form_editor::find_deep(&doc.components, id).expect("node present");
    let mut nodes = &doc.components;
    for index in &location.parent_path {
        nodes = nodes[*index].children().expect("container");
    }
    &nodes[location.index]
}
