use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use trellis::{Dimension, FlexNode, NodeId, SceneError, SceneNode, SceneTree, Signal, SignalFlow, SignalKind};

/// Inserts a layout node with a fixed size.
pub fn sized_flex<T>(
    tree: &mut SceneTree<T>,
    parent: Option<NodeId>,
    payload: T,
    width: f32,
    height: f32,
) -> Result<NodeId, SceneError> {
    let id = tree.insert_flex(parent, payload)?;
    tree.try_flex_mut(id)?
        .set_width(Dimension::Points(width))
        .set_height(Dimension::Points(height));
    Ok(id)
}

/// Shared event log for [`Recorder`] payloads.
pub type EventLog = Arc<Mutex<Vec<String>>>;

pub fn event_log() -> EventLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn events(log: &EventLog) -> Vec<String> {
    log.lock().map(|l| l.clone()).unwrap_or_default()
}

pub fn clear_events(log: &EventLog) {
    if let Ok(mut l) = log.lock() {
        l.clear();
    }
}

/// A payload that writes every hook call to a shared log.
pub struct Recorder {
    pub name: &'static str,
    pub log: EventLog,
    /// Custom signals with this name stop here.
    pub consumes: Option<&'static str>,
}

impl Recorder {
    pub fn new(name: &'static str, log: &EventLog) -> Self {
        Self {
            name,
            log: log.clone(),
            consumes: None,
        }
    }

    pub fn consuming(mut self, signal: &'static str) -> Self {
        self.consumes = Some(signal);
        self
    }

    fn record(&self, event: String) {
        if let Ok(mut log) = self.log.lock() {
            log.push(event);
        }
    }
}

impl SceneNode for Recorder {
    fn after_update(&mut self, _flex: Option<&FlexNode>) {
        self.record(format!("update:{}", self.name));
    }

    fn on_layout_applied(&mut self, _flex: &FlexNode) {
        self.record(format!("applied:{}", self.name));
    }

    fn on_signal(&mut self, signal: &Signal) -> SignalFlow {
        let label = match &signal.kind {
            SignalKind::NeedsLayout => "needs-layout".to_string(),
            SignalKind::Custom(name) => name.to_string(),
        };
        self.record(format!("signal:{}:{}", self.name, label));
        match (&signal.kind, self.consumes) {
            (SignalKind::Custom(name), Some(consumed)) if name == consumed => SignalFlow::Consumed,
            _ => SignalFlow::Continue,
        }
    }

    fn on_destroy(&mut self) {
        self.record(format!("destroy:{}", self.name));
    }
}

/// A scroll panel with a plain grouping node between it and its content.
pub fn scroll_panel_description() -> Value {
    json!({
        "roots": [
            {
                "name": "panel",
                "width": 200,
                "height": 100,
                "padding": 10,
                "overflow": "scroll",
                "scrollTop": 1000,
                "children": [
                    {
                        "name": "group",
                        "layout": false,
                        "children": [
                            { "name": "tall", "width": 180, "height": 130 }
                        ]
                    }
                ]
            }
        ]
    })
}

/// Two side-by-side cards in a row.
pub fn row_description() -> Value {
    json!({
        "roots": [
            {
                "name": "row",
                "width": 300,
                "height": 80,
                "flexDirection": "row",
                "padding": [10, 20],
                "children": [
                    { "name": "left", "width": 100, "height": 40, "margin": [0, 10, 0, 0] },
                    { "name": "right", "flexGrow": 1, "height": "50%" }
                ]
            }
        ]
    })
}
