/*! Names the spans, events and fields that a tableau reports through `tracing`.

[`JsonLogger`](subscriber::JsonLogger) collects these events into JSON records.
*/
pub mod subscriber;

// node log record fields:
pub const EVENT_FIELD: &str = "event";
pub const NODE_ID_FIELD: &str = "node_id";
pub const PARENT_FIELD: &str = "parent";
pub const SEQUENT_FIELD: &str = "sequent";
pub const FORMULA_FIELD: &str = "formula";
pub const TERM_FIELD: &str = "term";
pub const STEPS_FIELD: &str = "steps";

// log span types:
/// Inside a step of a tableau node
pub const TABLEAU_STEP: &str = "@tableau_step";

// log event types:
/// A signed formula is selected for decomposition.
pub const STEP: &str = "@step";

/// A branch is split. Reported once for each child.
pub const BRANCH: &str = "@branch";

/// A branch is closed by a contradiction.
pub const CLOSE: &str = "@close";

/// A branch has nothing left to decompose. The formula is not valid.
pub const OPEN: &str = "@open";

/// A term is generated for a branch.
pub const GENERATE: &str = "@generate";

/// A bound is reached. The search stops without an answer.
pub const BOUND: &str = "@bound";
