// Copyright 2026 the Execution Graph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use execution_graph::{GraphError, NodeExecutor, Scope};
use graph_model::{Node, NodeKind};
use graph_value::{FromValue, MapValue};
use std::sync::Arc;

/// Binds `Map.Remove` nodes: installs a producer on `out` that pulls the map and the key, and
/// returns the map without that key.
///
/// The pulled map is never mutated — [`MapValue::without`] returns a new map, so a second pull of
/// the original map's path still sees every key.
#[derive(Debug, Default)]
pub struct MapRemoveExecutor;

impl NodeExecutor for MapRemoveExecutor {
    fn bind(&self, scope: &Arc<Scope>, node: &Node) -> Result<bool, GraphError> {
        let NodeKind::MapRemove { in_, in_key, out } = node.kind() else {
            return Ok(false);
        };

        let in_ = scope.data_path(*in_);
        let in_key = scope.data_path(*in_key);
        let out = scope.data_path(*out);

        out.bind(Arc::new(move || {
            let map = in_
                .get_of_type::<MapValue>()
                .map_err(|e| e.into_node_eval_error("Map.Remove"))?;
            let key = in_key.get().map_err(|e| e.into_node_eval_error("Map.Remove"))?;
            Ok(map.without(&key).into())
        }))?;

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{bind_const, NoopHost};
    use execution_graph::NodeExecutorSet;
    use graph_model::{EdgeId, Graph};
    use graph_value::Value;

    #[test]
    fn removes_only_the_given_key_and_leaves_the_input_unchanged() {
        let graph = Arc::new(Graph::new(
            "g",
            vec![NodeKind::MapRemove {
                in_: EdgeId(1),
                in_key: EdgeId(2),
                out: EdgeId(3),
            }],
        ));
        let executors: NodeExecutorSet =
            Arc::from(vec![Arc::new(MapRemoveExecutor) as Arc<dyn NodeExecutor>]);
        let scope = Scope::bind(graph, &executors, Arc::new(NoopHost)).unwrap();

        let map = MapValue::from_pairs(vec![
            (Value::Str("x".into()), Value::Int(1)),
            (Value::Str("y".into()), Value::Int(2)),
        ]);
        bind_const(&scope, EdgeId(1), Value::Map(map.clone()));
        bind_const(&scope, EdgeId(2), Value::Str("x".into()));

        let result = scope.data_path(EdgeId(3)).get_of_type::<MapValue>().unwrap();
        assert!(!result.contains_key(&Value::Str("x".into())));
        assert_eq!(result.get(&Value::Str("y".into())), Some(&Value::Int(2)));

        // A second pull of the original map path is unaffected.
        let original_again = scope.data_path(EdgeId(1)).get_of_type::<MapValue>().unwrap();
        assert!(original_again.contains_key(&Value::Str("x".into())));
        assert_eq!(original_again.len(), 2);
    }
}
