// Copyright 2026 the Execution Graph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end and law-level conformance tests against the builtin node kinds and the scope
//! lifecycle, run as a black box against the public API of `execution_graph`, `execution_host`,
//! and `node_registry` together.

use execution_graph::{ControlBody, GraphError, NodeExecutor, RuntimeHost, Scope, ScopeState};
use execution_host::TokioRuntimeHost;
use graph_model::{EdgeId, Graph, MathOp, Node, NodeKind};
use graph_value::{MapValue, NumericClass, Value};
use node_registry::builtin_executors;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

fn bound_scope(graph: Graph) -> Arc<Scope> {
    let host = Arc::new(TokioRuntimeHost::new());
    Scope::bind(Arc::new(graph), &builtin_executors(), host as Arc<dyn RuntimeHost>).unwrap()
}

/// Declares a fixed body on each entry's own outgoing control path at bind time, standing in for
/// the downstream consumer a real graph would have wired there. Lets tests exercise an entry's
/// control path in isolation without fabricating a consuming node.
struct DeclaringEntry {
    bodies: HashMap<EdgeId, ControlBody>,
}

impl DeclaringEntry {
    fn new(bodies: Vec<(EdgeId, ControlBody)>) -> Self {
        Self {
            bodies: bodies.into_iter().collect(),
        }
    }
}

impl NodeExecutor for DeclaringEntry {
    fn bind(&self, scope: &Arc<Scope>, node: &Node) -> Result<bool, GraphError> {
        let NodeKind::Entry { out } = node.kind() else {
            return Ok(false);
        };
        if let Some(body) = self.bodies.get(out) {
            scope.control_path(*out).declare(Arc::clone(body))?;
        }
        Ok(true)
    }
}

fn bound_scope_with(graph: Graph, entry_bodies: Vec<(EdgeId, ControlBody)>) -> Arc<Scope> {
    let host = Arc::new(TokioRuntimeHost::new());
    let mut executors = vec![Arc::new(DeclaringEntry::new(entry_bodies)) as Arc<dyn NodeExecutor>];
    executors.extend(builtin_executors().iter().cloned());
    let executors: Arc<[Arc<dyn NodeExecutor>]> = Arc::from(executors);
    Scope::bind(Arc::new(graph), &executors, host as Arc<dyn RuntimeHost>).unwrap()
}

// Scenario 1: Entry -> Mul -> Sink. 3 * 4 = 12, as Int (neither operand widens past Int).
#[tokio::test]
async fn entry_mul_sink_produces_twelve_as_int() {
    let result = Arc::new(Mutex::new(None));
    let log = Arc::clone(&result);

    let graph = Graph::new(
        "entry_mul_sink",
        vec![
            NodeKind::Entry { out: EdgeId(1) },
            NodeKind::Const { value: Value::Int(3), out: EdgeId(10) },
            NodeKind::Const { value: Value::Int(4), out: EdgeId(11) },
            NodeKind::Math { op: MathOp::Mul, in_a: EdgeId(10), in_b: EdgeId(11), out: EdgeId(12) },
            NodeKind::Log { in_: EdgeId(1), in_value: Some(EdgeId(12)), out: EdgeId(2) },
        ],
    );
    let scope = bound_scope(graph);
    scope
        .control_path(EdgeId(2))
        .declare(Arc::new(move |scope: Arc<Scope>| {
            let log = Arc::clone(&log);
            Box::pin(async move {
                *log.lock().unwrap() = Some(scope.data_path(EdgeId(12)).get().unwrap());
                Ok(())
            })
        }))
        .unwrap();

    Scope::run(&scope);
    scope.join().await.unwrap();

    assert_eq!(*result.lock().unwrap(), Some(Value::Int(12)));
}

// Scenario 2: a matched branch case invokes only that case.
#[tokio::test]
async fn branch_invokes_only_the_matched_case() {
    let fired = Arc::new(Mutex::new(Vec::new()));

    let graph = Graph::new(
        "branch_match",
        vec![
            NodeKind::Entry { out: EdgeId(1) },
            NodeKind::Const { value: Value::Str("b".into()), out: EdgeId(2) },
            NodeKind::Branch {
                in_: EdgeId(1),
                in_value: EdgeId(2),
                cases: vec![(Value::Str("a".into()), EdgeId(20)), (Value::Str("b".into()), EdgeId(21))],
                out_default: EdgeId(22),
            },
        ],
    );
    let scope = bound_scope(graph);
    for id in [EdgeId(20), EdgeId(21), EdgeId(22)] {
        let fired = Arc::clone(&fired);
        scope
            .control_path(id)
            .declare(Arc::new(move |_scope| {
                let fired = Arc::clone(&fired);
                Box::pin(async move {
                    fired.lock().unwrap().push(id);
                    Ok(())
                })
            }))
            .unwrap();
    }

    Scope::run(&scope);
    scope.join().await.unwrap();

    assert_eq!(*fired.lock().unwrap(), vec![EdgeId(21)]);
}

// Scenario 3: an unmatched branch key falls through to outDefault, never the named cases.
#[tokio::test]
async fn branch_falls_through_to_default_when_nothing_matches() {
    let fired = Arc::new(Mutex::new(Vec::new()));

    let graph = Graph::new(
        "branch_default",
        vec![
            NodeKind::Entry { out: EdgeId(1) },
            NodeKind::Const { value: Value::Str("z".into()), out: EdgeId(2) },
            NodeKind::Branch {
                in_: EdgeId(1),
                in_value: EdgeId(2),
                cases: vec![(Value::Str("a".into()), EdgeId(20))],
                out_default: EdgeId(22),
            },
        ],
    );
    let scope = bound_scope(graph);
    for id in [EdgeId(20), EdgeId(22)] {
        let fired = Arc::clone(&fired);
        scope
            .control_path(id)
            .declare(Arc::new(move |_scope| {
                let fired = Arc::clone(&fired);
                Box::pin(async move {
                    fired.lock().unwrap().push(id);
                    Ok(())
                })
            }))
            .unwrap();
    }

    Scope::run(&scope);
    scope.join().await.unwrap();

    assert_eq!(*fired.lock().unwrap(), vec![EdgeId(22)]);
}

// Scenario 4: Select forwards the matched source, and re-pulling after the key changes forwards
// the new source — no memoization across pulls.
#[test]
fn select_forwards_and_re_pulls_reflect_a_changed_key() {
    use std::sync::atomic::AtomicI32;

    let graph = Graph::new(
        "select_forward",
        vec![NodeKind::Select {
            in_: EdgeId(1),
            cases: vec![(Value::Int(0), EdgeId(10)), (Value::Int(1), EdgeId(11))],
            in_default: EdgeId(12),
            out: EdgeId(2),
        }],
    );
    let scope = bound_scope(graph);

    let key = Arc::new(AtomicI32::new(1));
    let k = Arc::clone(&key);
    scope.data_path(EdgeId(1)).bind(Arc::new(move || Ok(Value::Int(k.load(Ordering::SeqCst))))).unwrap();
    scope.data_path(EdgeId(10)).bind(Arc::new(|| Ok(Value::Str("A".into())))).unwrap();
    scope.data_path(EdgeId(11)).bind(Arc::new(|| Ok(Value::Str("B".into())))).unwrap();
    scope.data_path(EdgeId(12)).bind(Arc::new(|| Ok(Value::Str("D".into())))).unwrap();

    assert_eq!(scope.data_path(EdgeId(2)).get().unwrap(), Value::Str("B".into()));
    key.store(0, Ordering::SeqCst);
    assert_eq!(scope.data_path(EdgeId(2)).get().unwrap(), Value::Str("A".into()));
    key.store(9, Ordering::SeqCst);
    assert_eq!(scope.data_path(EdgeId(2)).get().unwrap(), Value::Str("D".into()));
}

// An empty case table is equivalent to a direct wire from inDefault.
#[test]
fn select_with_no_cases_behaves_as_a_direct_wire_from_default() {
    let graph = Graph::new(
        "select_empty_cases",
        vec![NodeKind::Select { in_: EdgeId(1), cases: vec![], in_default: EdgeId(12), out: EdgeId(2) }],
    );
    let scope = bound_scope(graph);
    scope.data_path(EdgeId(1)).bind(Arc::new(|| Ok(Value::Int(0)))).unwrap();
    scope.data_path(EdgeId(12)).bind(Arc::new(|| Ok(Value::Str("D".into())))).unwrap();

    assert_eq!(scope.data_path(EdgeId(2)).get().unwrap(), Value::Str("D".into()));
}

// Scenario 5: Map.Remove returns a map without the key, and never mutates the original.
#[test]
fn map_remove_leaves_the_source_map_unchanged() {
    let graph = Graph::new(
        "map_remove",
        vec![NodeKind::MapRemove { in_: EdgeId(1), in_key: EdgeId(2), out: EdgeId(3) }],
    );
    let scope = bound_scope(graph);

    let map = MapValue::from_pairs(vec![
        (Value::Str("x".into()), Value::Int(1)),
        (Value::Str("y".into()), Value::Int(2)),
    ]);
    scope.data_path(EdgeId(1)).bind(Arc::new({
        let map = map.clone();
        move || Ok(Value::Map(map.clone()))
    })).unwrap();
    scope.data_path(EdgeId(2)).bind(Arc::new(|| Ok(Value::Str("x".into())))).unwrap();

    let result = scope.data_path(EdgeId(3)).get_of_type::<MapValue>().unwrap();
    assert!(!result.contains_key(&Value::Str("x".into())));
    assert_eq!(result.len(), 1);

    let original_again = scope.data_path(EdgeId(1)).get_of_type::<MapValue>().unwrap();
    assert_eq!(original_again.len(), 2);
}

// Scenario 6: two entries in the same scope both run, with Scope::join waiting for both.
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_entries_both_run_before_join_resolves() {
    let log: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));

    let graph = Graph::new(
        "concurrent_entries",
        vec![NodeKind::Entry { out: EdgeId(1) }, NodeKind::Entry { out: EdgeId(2) }],
    );

    let bodies = [(EdgeId(1), "first"), (EdgeId(2), "second")]
        .into_iter()
        .map(|(id, token)| {
            let log = Arc::clone(&log);
            let body: ControlBody = Arc::new(move |_scope| {
                let log = Arc::clone(&log);
                Box::pin(async move {
                    log.lock().unwrap().push(token);
                    Ok(())
                })
            });
            (id, body)
        })
        .collect();
    let scope = bound_scope_with(graph, bodies);

    Scope::run(&scope);
    scope.join().await.unwrap();

    let mut tokens = log.lock().unwrap().clone();
    tokens.sort_unstable();
    assert_eq!(tokens, vec!["first", "second"]);
}

// Invariant: a node kind unknown to every registered executor fails binding, not execution.
#[test]
fn binding_fails_fast_when_no_executor_matches() {
    let graph = Graph::new("orphan_entry", vec![NodeKind::Entry { out: EdgeId(1) }]);
    let no_executors: Arc<[Arc<dyn NodeExecutor>]> = Arc::from(Vec::new());
    let err = Scope::bind(Arc::new(graph), &no_executors, Arc::new(TokioRuntimeHost::new())).unwrap_err();
    assert!(matches!(err, GraphError::NoExecutorError("Entry")));
}

// Invariant: an entry whose control output nothing declares a body for fails binding outright,
// rather than binding successfully and silently no-oping when the scope later runs it.
#[test]
fn binding_fails_when_an_entry_has_no_declared_consumer() {
    let graph = Graph::new("orphan_entry", vec![NodeKind::Entry { out: EdgeId(1) }]);
    let err = Scope::bind(Arc::new(graph), &builtin_executors(), Arc::new(TokioRuntimeHost::new()))
        .unwrap_err();
    assert!(matches!(err, GraphError::UndeclaredEntryError(EdgeId(1))));
}

// Invariant: pulling a data path that was never bound is a distinct, reachability-level error.
#[test]
fn pulling_an_unbound_data_path_is_a_distinct_error() {
    let graph = Graph::new("empty", vec![]);
    let scope = bound_scope(graph);
    let err = scope.data_path(EdgeId(99)).get().unwrap_err();
    assert!(matches!(err, GraphError::UnboundPathError(EdgeId(99))));
}

// Invariant: binding the same data path twice is rejected rather than silently overwritten.
#[test]
fn double_binding_a_data_path_is_rejected() {
    let graph = Graph::new("empty", vec![]);
    let scope = bound_scope(graph);
    let path = scope.data_path(EdgeId(1));
    path.bind(Arc::new(|| Ok(Value::Int(1)))).unwrap();
    let err = path.bind(Arc::new(|| Ok(Value::Int(2)))).unwrap_err();
    assert!(matches!(err, GraphError::DoubleBindError(EdgeId(1))));
}

// Invariant: a scope moves Constructed -> Bound -> Running -> Stopped -> Collected, in order.
#[tokio::test]
async fn scope_lifecycle_progresses_in_order() {
    let graph = Graph::new("lifecycle", vec![NodeKind::Entry { out: EdgeId(1) }]);
    let body: ControlBody = Arc::new(|_scope| Box::pin(async { Ok(()) }));
    let scope = bound_scope_with(graph, vec![(EdgeId(1), body)]);
    assert_eq!(scope.state(), ScopeState::Bound);

    Scope::run(&scope);
    assert_eq!(scope.state(), ScopeState::Running);

    scope.stop();
    assert_eq!(scope.state(), ScopeState::Stopped);
    assert!(scope.is_stopped());

    scope.join().await.unwrap();
    assert_eq!(scope.state(), ScopeState::Collected);
}

// Law: numeric widening is associative regardless of which operand order a Math node sees.
#[test]
fn numeric_widening_ladder_is_associative() {
    use NumericClass::{Byte, Double, Float, Int, Long, Short};
    let ladder = [Byte, Short, Int, Long, Float, Double];
    for &a in &ladder {
        for &b in &ladder {
            assert_eq!(a.widen(b), b.widen(a));
        }
    }
}

// Cooperative stop flips the flag without forcing already-launched tasks to abort.
#[tokio::test]
async fn stop_is_cooperative_not_forced() {
    let completed = Arc::new(AtomicBool::new(false));
    let graph = Graph::new("stoppable", vec![NodeKind::Entry { out: EdgeId(1) }]);

    let flag = Arc::clone(&completed);
    let body: ControlBody = Arc::new(move |_scope| {
        let flag = Arc::clone(&flag);
        Box::pin(async move {
            flag.store(true, Ordering::SeqCst);
            Ok(())
        })
    });
    let scope = bound_scope_with(graph, vec![(EdgeId(1), body)]);

    Scope::run(&scope);
    scope.stop();
    scope.join().await.unwrap();

    assert!(completed.load(Ordering::SeqCst));
}
