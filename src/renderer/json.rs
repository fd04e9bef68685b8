use serde_json::{Map, Value};

use crate::syntax::{NodeId, NodeValue, Tree};

/// Builds a JSON value for the whole document.
///
/// Every node becomes an object with a `type` field. Node data is flattened
/// into the object, text content goes under `literal` and child nodes under
/// `children`.
pub fn to_json_value(tree: &Tree) -> Value {
    node_to_value(tree, tree.root())
}

fn node_to_value(tree: &Tree, id: NodeId) -> Value {
    let value = tree.value(id);
    let mut object = Map::new();
    object.insert("type".into(), Value::from(value.kind_name()));

    let data = match value {
        NodeValue::List(data) | NodeValue::ListItem(data) => serde_json::to_value(data),
        NodeValue::Heading(data) => serde_json::to_value(data),
        NodeValue::Link(data) => serde_json::to_value(data),
        NodeValue::Image(data) => serde_json::to_value(data),
        NodeValue::CodeBlock(code) => {
            object.insert("fenced".into(), Value::from(code.fenced));
            object.insert("info".into(), Value::from(code.info.as_str()));
            object.insert("literal".into(), Value::from(code.literal()));
            Ok(Value::Null)
        }
        NodeValue::Text(text)
        | NodeValue::CodeSpan(text)
        | NodeValue::HtmlSpan(text)
        | NodeValue::HtmlBlock(text) => {
            object.insert("literal".into(), Value::from(text.as_str()));
            Ok(Value::Null)
        }
        _ => Ok(Value::Null),
    };
    match data {
        Ok(Value::Object(fields)) => object.extend(fields),
        Ok(_) => {}
        Err(e) => log::warn!("Failed to serialize {} data: {e}", value.kind_name()),
    }

    let children: Vec<Value> = tree
        .children(id)
        .map(|child| node_to_value(tree, child))
        .collect();
    if !children.is_empty() {
        object.insert("children".into(), Value::Array(children));
    }
    Value::Object(object)
}
