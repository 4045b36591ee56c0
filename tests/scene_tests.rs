mod common;

use common::fixtures::*;
use common::{TestResult, init_logging, manual_tree};
use serde_json::json;
use trellis::{SceneError, Signal, SignalKind, Visit};

#[test]
fn test_custom_signal_stops_at_consumer() -> TestResult {
    init_logging();
    let log = event_log();
    let (mut tree, _solver) = manual_tree();
    let top = tree.insert(None, Recorder::new("top", &log))?;
    let menu = tree.insert(Some(top), Recorder::new("menu", &log).consuming("close"))?;
    let item = tree.insert(Some(menu), Recorder::new("item", &log))?;

    let closed = tree.signal(Signal::new(SignalKind::Custom("close".into()), item).with_payload(json!({ "id": 3 })));
    assert_eq!(closed, Some(menu));
    assert_eq!(events(&log), vec!["signal:menu:close"]);

    clear_events(&log);
    let open = tree.signal(Signal::new(SignalKind::Custom("open".into()), item));
    assert_eq!(open, None);
    assert_eq!(events(&log), vec!["signal:menu:open", "signal:top:open"]);
    Ok(())
}

#[test]
fn test_destroy_runs_hooks_children_first() -> TestResult {
    init_logging();
    let log = event_log();
    let (mut tree, _solver) = manual_tree();
    let root = tree.insert_flex(None, Recorder::new("root", &log))?;
    let panel = tree.insert_flex(Some(root), Recorder::new("panel", &log))?;
    let a = tree.insert(Some(panel), Recorder::new("a", &log))?;
    tree.insert_flex(Some(a), Recorder::new("a1", &log))?;
    tree.insert(Some(panel), Recorder::new("b", &log))?;
    assert_eq!(tree.len(), 5);

    tree.destroy(panel)?;
    let destroyed: Vec<String> = events(&log).into_iter().filter(|e| e.starts_with("destroy:")).collect();
    assert_eq!(destroyed, vec!["destroy:a1", "destroy:a", "destroy:b", "destroy:panel"]);
    assert_eq!(tree.len(), 1);
    assert!(tree.children(root).is_empty());
    assert!(matches!(tree.destroy(panel), Err(SceneError::NodeNotFound(_))));
    Ok(())
}

#[test]
fn test_insert_under_missing_parent_fails() -> TestResult {
    init_logging();
    let (mut tree, _solver) = manual_tree::<()>();
    let gone = tree.insert(None, ())?;
    tree.destroy(gone)?;
    assert!(matches!(tree.insert_flex(Some(gone), ()), Err(SceneError::NodeNotFound(id)) if id == gone));
    assert!(tree.top_level().is_empty());
    Ok(())
}

#[test]
fn test_plain_node_has_no_flex_component() -> TestResult {
    init_logging();
    let (mut tree, _solver) = manual_tree::<()>();
    let plain = tree.insert(None, ())?;
    assert!(!tree.is_flex_node(plain));
    assert!(matches!(tree.try_flex_mut(plain), Err(SceneError::NotAFlexNode(_))));
    Ok(())
}

#[test]
fn test_walk_visits_enter_and_exit() -> TestResult {
    init_logging();
    let (mut tree, _solver) = manual_tree::<()>();
    let root = tree.insert(None, ())?;
    let a = tree.insert(Some(root), ())?;
    let b = tree.insert(Some(root), ())?;
    let a1 = tree.insert(Some(a), ())?;

    let visits: Vec<Visit> = tree.walk(root).collect();
    assert_eq!(
        visits,
        vec![
            Visit::Enter(root),
            Visit::Enter(a),
            Visit::Enter(a1),
            Visit::Exit(a1),
            Visit::Exit(a),
            Visit::Enter(b),
            Visit::Exit(b),
            Visit::Exit(root),
        ]
    );
    assert_eq!(tree.descendants(root), vec![root, a, a1, b]);
    Ok(())
}

#[test]
fn test_destroyed_id_never_reaches_its_recycled_slot() -> TestResult {
    init_logging();
    let (mut tree, _solver) = manual_tree::<String>();
    let old = tree.insert(None, "old".to_string())?;
    tree.destroy(old)?;
    let new = tree.insert(None, "new".to_string())?;

    assert_eq!(old.index(), new.index());
    assert_ne!(old, new);
    assert!(!tree.contains(old));
    assert_eq!(tree.get(old), None);
    assert_eq!(tree.get(new).map(String::as_str), Some("new"));
    assert!(matches!(tree.destroy(old), Err(SceneError::NodeNotFound(_))));
    assert_eq!(tree.len(), 1);
    Ok(())
}
