use serde_derive::{Deserialize, Serialize};
use std::{fmt, io::Write, sync::Mutex};
use tracing::*;

/// Thread safe json logger that writes a [`NodeRecord`] for every event reported by a tableau
/// into a given writer, one record per line.
pub struct JsonLogger<W: Write> {
    writer: Mutex<W>,
}

impl<W: Write> JsonLogger<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the logger and returns its writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send + 'static> subscriber::Subscriber for JsonLogger<W> {
    fn enabled(&self, _: &Metadata) -> bool {
        true // for now
    }

    fn new_span(&self, span: &span::Attributes) -> Id {
        let mut recorder = Recorder::new();
        span.record(&mut recorder);
        Id::from_u64(recorder.node_id.filter(|id| *id != 0).unwrap_or(1))
    }

    fn record(&self, _span: &Id, _values: &span::Record) {}

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, event: &Event) {
        let mut recorder = Recorder::new();
        event.record(&mut recorder);

        if let Ok(record) = NodeRecord::try_from(recorder) {
            if let (Ok(json), Ok(mut writer)) = (serde_json::to_string(&record), self.writer.lock())
            {
                let _ = writeln!(writer, "{}", json);
            }
        }
    }

    fn enter(&self, _span: &Id) {}

    fn exit(&self, _span: &Id) {}
}

/// A record, containing information about a tableau node when a formula is selected on it, it
/// is split, closed, opened or bounded, or a term is generated for it.
#[derive(Serialize, Deserialize, PartialEq, Debug)]
pub struct NodeRecord {
    pub event: String,
    pub node_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<u64>,
}

impl NodeRecord {
    fn try_from(value: Recorder) -> Result<Self, ()> {
        match (value.event, value.node_id) {
            (Some(event), Some(node_id)) => Ok(NodeRecord {
                event,
                node_id,
                parent: value.parent,
                sequent: value.sequent,
                formula: value.formula,
                term: value.term,
                steps: value.steps,
            }),
            _ => Err(()),
        }
    }
}

/// Generic trace visitor to collect as many fields as it can.
struct Recorder {
    event: Option<String>,
    node_id: Option<u64>,
    parent: Option<u64>,
    sequent: Option<String>,
    formula: Option<String>,
    term: Option<String>,
    steps: Option<u64>,
}

impl Recorder {
    fn new() -> Recorder {
        Recorder {
            event: None,
            node_id: None,
            parent: None,
            sequent: None,
            formula: None,
            term: None,
            steps: None,
        }
    }
}

impl field::Visit for Recorder {
    fn record_u64(&mut self, field: &field::Field, value: u64) {
        match field.name() {
            super::NODE_ID_FIELD => self.node_id = Some(value),
            super::PARENT_FIELD => self.parent = Some(value),
            super::STEPS_FIELD => self.steps = Some(value),
            _ => (),
        }
    }

    fn record_str(&mut self, field: &field::Field, value: &str) {
        if field.name() == super::EVENT_FIELD {
            self.event = Some(value.to_owned());
        }
    }

    fn record_debug(&mut self, field: &field::Field, value: &dyn fmt::Debug) {
        match field.name() {
            super::SEQUENT_FIELD => self.sequent = Some(format!("{:?}", value)),
            super::FORMULA_FIELD => self.formula = Some(format!("{:?}", value)),
            super::TERM_FIELD => self.term = Some(format!("{:?}", value)),
            _ => (),
        }
    }
}
