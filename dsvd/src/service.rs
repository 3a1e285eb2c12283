//! Request dispatch for the DSV daemon
//!
//! [`Service`] holds one instance of each structure. A request names the
//! structure and an operation; operands arrive as text (or JSON numbers) and
//! are validated before any structure is touched, so a rejected request
//! never mutates state.

use std::{borrow::Cow, collections::BTreeMap, fmt, str::FromStr};

use dsv_error::{codes, helpers, Error, Result};
use dsv_foundation::{
    BinarySearchTree, BoundedArray, BoundedQueue, BoundedStack, DataStructure, Graph,
    SinglyLinkedList,
};
use dsv_logging::{LogLevel, LogOperation, LogRegistry};
use serde::{Deserialize, Serialize};
use tracing::{debug, info_span, warn};

use crate::{
    config::DaemonConfig,
    validation::{parse_index, split_pair, Validator},
};

/// The structure a request targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StructureKind {
    /// [`BoundedArray`]
    Array,
    /// [`BoundedStack`]
    Stack,
    /// [`BoundedQueue`]
    Queue,
    /// [`SinglyLinkedList`]
    List,
    /// [`BinarySearchTree`]
    Bst,
    /// [`Graph`]
    Graph,
}

impl StructureKind {
    /// Every kind, in declaration order
    pub const ALL: [StructureKind; 6] = [
        StructureKind::Array,
        StructureKind::Stack,
        StructureKind::Queue,
        StructureKind::List,
        StructureKind::Bst,
        StructureKind::Graph,
    ];

    /// Lowercase wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            StructureKind::Array => "array",
            StructureKind::Stack => "stack",
            StructureKind::Queue => "queue",
            StructureKind::List => "list",
            StructureKind::Bst => "bst",
            StructureKind::Graph => "graph",
        }
    }

    /// Name used in status messages
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            StructureKind::Array => "Array",
            StructureKind::Stack => "Stack",
            StructureKind::Queue => "Queue",
            StructureKind::List => "List",
            StructureKind::Bst => "BST",
            StructureKind::Graph => "Graph",
        }
    }

    /// Operation names this kind accepts
    #[must_use]
    pub const fn operations(&self) -> &'static [&'static str] {
        match self {
            StructureKind::Array => &["insert", "delete", "search", "get", "state", "reset"],
            StructureKind::Stack => &["push", "pop", "peek", "state", "reset"],
            StructureKind::Queue => &["enqueue", "dequeue", "peek", "state", "reset"],
            StructureKind::List => &[
                "insert_head",
                "insert_tail",
                "insert_at",
                "delete_head",
                "delete_at",
                "search",
                "get",
                "state",
                "reset",
            ],
            StructureKind::Bst => &[
                "insert", "delete", "search", "inorder", "preorder", "postorder", "state", "reset",
            ],
            StructureKind::Graph => &[
                "add_vertex",
                "add_edge",
                "remove_vertex",
                "remove_edge",
                "bfs",
                "dfs",
                "state",
                "reset",
            ],
        }
    }
}

impl fmt::Display for StructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StructureKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        StructureKind::ALL
            .into_iter()
            .find(|kind| s.eq_ignore_ascii_case(kind.as_str()))
            .ok_or(Error::invalid_operand("Unknown structure"))
    }
}

/// One operand of a request, either JSON text or a JSON number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Operand {
    /// A JSON number
    Number(i64),
    /// A JSON string, parsed like user input
    Text(String),
}

impl Operand {
    /// The operand as text to be parsed
    #[must_use]
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Operand::Number(number) => Cow::Owned(number.to_string()),
            Operand::Text(text) => Cow::Borrowed(text),
        }
    }
}

impl From<&str> for Operand {
    fn from(text: &str) -> Self {
        Operand::Text(text.to_string())
    }
}

impl From<String> for Operand {
    fn from(text: String) -> Self {
        Operand::Text(text)
    }
}

impl From<i32> for Operand {
    fn from(number: i32) -> Self {
        Operand::Number(i64::from(number))
    }
}

/// A request for one operation on one structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Target structure
    pub structure: StructureKind,
    /// Operation name, matched case-insensitively
    pub operation: String,
    /// Operands in order
    #[serde(default)]
    pub args:      Vec<Operand>,
}

impl Request {
    /// Build a request
    pub fn new<S, I, A>(structure: StructureKind, operation: S, args: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<Operand>,
    {
        Self {
            structure,
            operation: operation.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

/// Outcome of a request plus a snapshot of the targeted structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// Uppercase operation name (`PUSH`, `BFS`, ...)
    pub operation:  String,
    /// Whether the operation succeeded
    pub success:    bool,
    /// Status message
    pub message:    String,
    /// Contents in the structure's natural order
    pub elements:   Vec<i32>,
    /// Number of elements (vertices for the graph)
    pub size:       usize,
    /// Value produced by the operation (popped, peeked, read, deleted)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value:      Option<i32>,
    /// Position produced by a search
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index:      Option<usize>,
    /// Visiting order of a traversal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traversal:  Option<Vec<i32>>,
    /// Capacity of the array, stack or queue
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity:   Option<usize>,
    /// Directedness of the graph
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directed:   Option<bool>,
    /// Neighbour lists of the graph
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjacency:  Option<BTreeMap<i32, Vec<i32>>>,
    /// Error code of a failed operation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<u16>,
}

impl Response {
    /// A failure response for input that never reached a structure
    #[must_use]
    pub fn rejected(operation: &str, message: String, code: u16) -> Self {
        Self {
            operation: operation.to_ascii_uppercase(),
            success: false,
            message,
            elements: Vec::new(),
            size: 0,
            value: None,
            index: None,
            traversal: None,
            capacity: None,
            directed: None,
            adjacency: None,
            error_code: Some(code),
        }
    }
}

/// What a successful operation produced besides the new state
#[derive(Debug, Default)]
struct Outcome {
    message:   String,
    value:     Option<i32>,
    index:     Option<usize>,
    traversal: Option<Vec<i32>>,
    level:     Option<LogLevel>,
}

impl Outcome {
    fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), ..Self::default() }
    }

    fn value(mut self, value: i32) -> Self {
        self.value = Some(value);
        self
    }

    fn index(mut self, index: Option<usize>) -> Self {
        self.index = index;
        self
    }

    fn traversal(mut self, order: Vec<i32>) -> Self {
        self.traversal = Some(order);
        self
    }

    fn quiet(mut self) -> Self {
        self.level = Some(LogLevel::Debug);
        self
    }
}

type Args<'a> = [Cow<'a, str>];

/// Exactly `N` operands, or an operand count error
fn operands<'a, const N: usize>(args: &'a Args<'_>) -> Result<[&'a str; N]> {
    if args.len() != N {
        return Err(helpers::operand_count_error("Wrong number of operands"));
    }
    Ok(core::array::from_fn(|i| args[i].as_ref()))
}

fn format_order(order: &[i32]) -> String {
    let items: Vec<String> = order.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

/// Owner of the six structures
pub struct Service {
    config:    DaemonConfig,
    validator: Validator,
    array:     BoundedArray,
    stack:     BoundedStack,
    queue:     BoundedQueue,
    list:      SinglyLinkedList,
    bst:       BinarySearchTree,
    graph:     Graph,
    logs:      LogRegistry,
}

impl fmt::Debug for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Service")
            .field("config", &self.config)
            .field("array", &self.array.len())
            .field("stack", &self.stack.len())
            .field("queue", &self.queue.len())
            .field("list", &self.list.len())
            .field("bst", &self.bst.len())
            .field("graph", &self.graph.vertex_count())
            .field("logs", &self.logs)
            .finish()
    }
}

impl Service {
    /// Create a service with empty structures sized from `config`
    #[must_use]
    pub fn new(config: &DaemonConfig) -> Self {
        Self {
            config:    config.clone(),
            validator: Validator::from_config(config),
            array:     BoundedArray::new(config.array_capacity),
            stack:     BoundedStack::new(config.stack_capacity),
            queue:     BoundedQueue::new(config.queue_capacity),
            list:      SinglyLinkedList::new(),
            bst:       BinarySearchTree::new(),
            graph:     Graph::new(config.graph_directed),
            logs:      LogRegistry::new(),
        }
    }

    /// The configuration the service was built from
    #[must_use]
    pub fn config(&self) -> &DaemonConfig {
        &self.config
    }

    /// Receive a [`LogOperation`] for every handled request
    pub fn register_log_handler<F>(&mut self, handler: F)
    where
        F: Fn(&LogOperation) + Send + Sync + 'static,
    {
        self.logs.register_handler(handler);
    }

    /// The structure of the given kind, read-only
    #[must_use]
    pub fn structure(&self, kind: StructureKind) -> &dyn DataStructure {
        match kind {
            StructureKind::Array => &self.array,
            StructureKind::Stack => &self.stack,
            StructureKind::Queue => &self.queue,
            StructureKind::List => &self.list,
            StructureKind::Bst => &self.bst,
            StructureKind::Graph => &self.graph,
        }
    }

    /// Parse one JSON request line and handle it
    ///
    /// Malformed lines produce a failure response instead of an error so a
    /// request stream keeps flowing.
    pub fn handle_line(&mut self, line: &str) -> Response {
        match serde_json::from_str::<Request>(line) {
            Ok(request) => self.handle(&request),
            Err(err) => {
                warn!(error = %err, "malformed request");
                let response =
                    Response::rejected("invalid", format!("Malformed request: {err}"), codes::INVALID_OPERAND);
                self.logs.handle_log(&LogOperation::new(LogLevel::Error, response.message.clone()));
                response
            }
        }
    }

    /// Handle one request
    pub fn handle(&mut self, request: &Request) -> Response {
        let kind = request.structure;
        let operation = request.operation.trim().to_ascii_lowercase();
        let span = info_span!("request", structure = %kind, operation = %operation);
        let _entered = span.enter();

        let args: Vec<Cow<'_, str>> = request.args.iter().map(Operand::as_text).collect();
        let result = match (operation.as_str(), kind) {
            ("state", _) => operands::<0>(&args).map(|_| self.state(kind)),
            ("reset", _) => operands::<0>(&args).map(|_| self.reset(kind)),
            (_, StructureKind::Array) => self.array_op(&operation, &args),
            (_, StructureKind::Stack) => self.stack_op(&operation, &args),
            (_, StructureKind::Queue) => self.queue_op(&operation, &args),
            (_, StructureKind::List) => self.list_op(&operation, &args),
            (_, StructureKind::Bst) => self.bst_op(&operation, &args),
            (_, StructureKind::Graph) => self.graph_op(&operation, &args),
        };

        let (response, level) = match result {
            Ok(outcome) => {
                debug!(message = %outcome.message, "operation succeeded");
                let level = outcome.level.unwrap_or(LogLevel::Info);
                (self.respond(kind, &operation, true, outcome), level)
            }
            Err(error) => {
                warn!(code = error.code, %error, "operation rejected");
                let message = self.describe(kind, &operation, &error);
                let mut response = self.respond(kind, &operation, false, Outcome::new(message));
                response.error_code = Some(error.code);
                (response, LogLevel::Warn)
            }
        };

        self.logs
            .handle_log(&LogOperation::with_structure(level, response.message.clone(), kind.as_str()));
        response
    }

    /// Current state of one structure without changing it
    #[must_use]
    pub fn snapshot(&self, kind: StructureKind) -> Response {
        self.respond(kind, "state", true, self.state(kind))
    }

    fn respond(&self, kind: StructureKind, operation: &str, success: bool, outcome: Outcome) -> Response {
        let structure = self.structure(kind);
        let capacity = match kind {
            StructureKind::Array => Some(self.array.capacity()),
            StructureKind::Stack => Some(self.stack.capacity()),
            StructureKind::Queue => Some(self.queue.capacity()),
            StructureKind::List | StructureKind::Bst | StructureKind::Graph => None,
        };
        let (directed, adjacency) = if kind == StructureKind::Graph {
            let adjacency = self
                .graph
                .vertices()
                .into_iter()
                .map(|vertex| (vertex, self.graph.neighbors(vertex).to_vec()))
                .collect();
            (Some(self.graph.is_directed()), Some(adjacency))
        } else {
            (None, None)
        };

        Response {
            operation: operation.to_ascii_uppercase(),
            success,
            message: outcome.message,
            elements: structure.contents(),
            size: structure.len(),
            value: outcome.value,
            index: outcome.index,
            traversal: outcome.traversal,
            capacity,
            directed,
            adjacency,
            error_code: None,
        }
    }

    fn describe(&self, kind: StructureKind, operation: &str, error: &Error) -> String {
        if error.code == codes::UNKNOWN_OPERATION {
            format!(
                "Unknown operation '{operation}' for {kind}. Expected one of: {}",
                kind.operations().join(", ")
            )
        } else {
            self.validator.describe(error)
        }
    }

    fn state(&self, kind: StructureKind) -> Outcome {
        let structure = self.structure(kind);
        Outcome::new(format!("{}: {} element(s)", kind.title(), structure.len())).quiet()
    }

    fn reset(&mut self, kind: StructureKind) -> Outcome {
        match kind {
            StructureKind::Array => self.array = BoundedArray::new(self.config.array_capacity),
            StructureKind::Stack => self.stack.clear(),
            StructureKind::Queue => self.queue.clear(),
            StructureKind::List => self.list.clear(),
            StructureKind::Bst => self.bst.clear(),
            StructureKind::Graph => self.graph.clear(),
        }
        Outcome::new(format!("{} reset", kind.title()))
    }

    fn value(&self, text: &str) -> Result<i32> {
        self.validator.operand(text)
    }

    fn edge(&self, args: &Args<'_>) -> Result<(i32, i32)> {
        let (from, to) = match args {
            [pair] => split_pair(pair)?,
            [from, to] => (from.as_ref(), to.as_ref()),
            _ => return Err(helpers::operand_count_error("Invalid format. Use: from to")),
        };
        Ok((self.value(from)?, self.value(to)?))
    }

    fn array_op(&mut self, operation: &str, args: &Args<'_>) -> Result<Outcome> {
        match operation {
            "insert" => {
                let (index, value) = match args {
                    [value] => (self.array.len(), self.value(value)?),
                    [index, value] => (parse_index(index)?, self.value(value)?),
                    _ => return Err(helpers::operand_count_error("Wrong number of operands")),
                };
                self.array.insert(index, value)?;
                Ok(Outcome::new(format!("Inserted {value} at index {index}")).value(value))
            }
            "delete" => {
                let [index] = operands::<1>(args)?;
                let value = self.array.delete(parse_index(index)?)?;
                Ok(Outcome::new(format!("Deleted {value}")).value(value))
            }
            "search" => {
                let [value] = operands::<1>(args)?;
                let value = self.value(value)?;
                let found = self.array.search(value);
                let message = match found {
                    Some(index) => format!("Element found at index {index}"),
                    None => format!("Value {value} not found"),
                };
                Ok(Outcome::new(message).index(found))
            }
            "get" => {
                let [index] = operands::<1>(args)?;
                let index = parse_index(index)?;
                let value = self.array.get(index)?;
                Ok(Outcome::new(format!("Value at index {index}: {value}")).value(value))
            }
            _ => Err(helpers::unknown_operation_error("Unknown operation")),
        }
    }

    fn stack_op(&mut self, operation: &str, args: &Args<'_>) -> Result<Outcome> {
        match operation {
            "push" => {
                let [value] = operands::<1>(args)?;
                let value = self.value(value)?;
                self.stack.push(value)?;
                Ok(Outcome::new(format!("Pushed {value}")).value(value))
            }
            "pop" => {
                operands::<0>(args)?;
                let value = self.stack.pop()?;
                Ok(Outcome::new(format!("Popped {value}")).value(value))
            }
            "peek" => {
                operands::<0>(args)?;
                let value = self.stack.peek()?;
                Ok(Outcome::new(format!("Top: {value}")).value(value))
            }
            _ => Err(helpers::unknown_operation_error("Unknown operation")),
        }
    }

    fn queue_op(&mut self, operation: &str, args: &Args<'_>) -> Result<Outcome> {
        match operation {
            "enqueue" => {
                let [value] = operands::<1>(args)?;
                let value = self.value(value)?;
                self.queue.enqueue(value)?;
                Ok(Outcome::new(format!("Enqueued {value}")).value(value))
            }
            "dequeue" => {
                operands::<0>(args)?;
                let value = self.queue.dequeue()?;
                Ok(Outcome::new(format!("Dequeued {value}")).value(value))
            }
            "peek" => {
                operands::<0>(args)?;
                let value = self.queue.peek()?;
                Ok(Outcome::new(format!("Front: {value}")).value(value))
            }
            _ => Err(helpers::unknown_operation_error("Unknown operation")),
        }
    }

    fn list_op(&mut self, operation: &str, args: &Args<'_>) -> Result<Outcome> {
        match operation {
            "insert_head" => {
                let [value] = operands::<1>(args)?;
                let value = self.value(value)?;
                self.list.insert_head(value);
                Ok(Outcome::new(format!("Inserted {value} at head")).value(value))
            }
            "insert_tail" => {
                let [value] = operands::<1>(args)?;
                let value = self.value(value)?;
                self.list.insert_tail(value);
                Ok(Outcome::new(format!("Inserted {value} at tail")).value(value))
            }
            "insert_at" => {
                let [index, value] = operands::<2>(args)?;
                let index = parse_index(index)?;
                let value = self.value(value)?;
                self.list.insert_at(index, value)?;
                Ok(Outcome::new(format!("Inserted {value} at index {index}")).value(value))
            }
            "delete_head" => {
                operands::<0>(args)?;
                let value = self.list.delete_head()?;
                Ok(Outcome::new(format!("Head deleted: {value}")).value(value))
            }
            "delete_at" => {
                let [index] = operands::<1>(args)?;
                let value = self.list.delete_at(parse_index(index)?)?;
                Ok(Outcome::new(format!("Deleted {value}")).value(value))
            }
            "search" => {
                let [value] = operands::<1>(args)?;
                let value = self.value(value)?;
                let found = self.list.search(value);
                let message = match found {
                    Some(position) => format!("Element found at position {position}"),
                    None => format!("Value {value} not found"),
                };
                Ok(Outcome::new(message).index(found))
            }
            "get" => {
                let [index] = operands::<1>(args)?;
                let index = parse_index(index)?;
                let value = self.list.get(index)?;
                Ok(Outcome::new(format!("Value at position {index}: {value}")).value(value))
            }
            _ => Err(helpers::unknown_operation_error("Unknown operation")),
        }
    }

    fn bst_op(&mut self, operation: &str, args: &Args<'_>) -> Result<Outcome> {
        match operation {
            "insert" => {
                let [value] = operands::<1>(args)?;
                let value = self.value(value)?;
                self.bst.insert(value)?;
                Ok(Outcome::new(format!("Inserted {value}")).value(value))
            }
            "delete" => {
                let [value] = operands::<1>(args)?;
                let value = self.value(value)?;
                self.bst.delete(value)?;
                Ok(Outcome::new(format!("Deleted {value}")).value(value))
            }
            "search" => {
                let [value] = operands::<1>(args)?;
                let value = self.value(value)?;
                let message = if self.bst.contains(value) {
                    format!("Found {value}")
                } else {
                    format!("Value {value} not found")
                };
                Ok(Outcome::new(message))
            }
            "inorder" | "preorder" | "postorder" => {
                operands::<0>(args)?;
                let (label, order) = match operation {
                    "inorder" => ("Inorder", self.bst.inorder()),
                    "preorder" => ("Preorder", self.bst.preorder()),
                    _ => ("Postorder", self.bst.postorder()),
                };
                Ok(Outcome::new(format!("{label}: {}", format_order(&order))).traversal(order))
            }
            _ => Err(helpers::unknown_operation_error("Unknown operation")),
        }
    }

    fn graph_op(&mut self, operation: &str, args: &Args<'_>) -> Result<Outcome> {
        match operation {
            "add_vertex" => {
                let [vertex] = operands::<1>(args)?;
                let vertex = self.value(vertex)?;
                let message = if self.graph.add_vertex(vertex) {
                    format!("Vertex {vertex} added")
                } else {
                    format!("Vertex {vertex} already exists")
                };
                Ok(Outcome::new(message))
            }
            "add_edge" => {
                let (from, to) = self.edge(args)?;
                let message = if self.graph.add_edge(from, to) {
                    format!("Edge {from} -> {to} added")
                } else {
                    format!("Edge {from} -> {to} already exists")
                };
                Ok(Outcome::new(message))
            }
            "remove_vertex" => {
                let [vertex] = operands::<1>(args)?;
                let vertex = self.value(vertex)?;
                if !self.graph.remove_vertex(vertex) {
                    return Err(Error::not_found("Vertex not found"));
                }
                Ok(Outcome::new(format!("Vertex {vertex} removed")))
            }
            "remove_edge" => {
                let (from, to) = self.edge(args)?;
                if !self.graph.remove_edge(from, to) {
                    return Err(Error::not_found("Edge not found"));
                }
                Ok(Outcome::new(format!("Edge {from} -> {to} removed")))
            }
            "bfs" | "dfs" => {
                let [start] = operands::<1>(args)?;
                let start = self.value(start)?;
                if !self.graph.has_vertex(start) {
                    return Err(Error::not_found("Vertex not found"));
                }
                let (label, order) = if operation == "bfs" {
                    ("BFS", self.graph.bfs(start))
                } else {
                    ("DFS", self.graph.dfs(start))
                };
                Ok(Outcome::new(format!("{label}: {}", format_order(&order))).traversal(order))
            }
            _ => Err(helpers::unknown_operation_error("Unknown operation")),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    fn service() -> Service {
        Service::new(&DaemonConfig::default())
    }

    fn run(service: &mut Service, kind: StructureKind, operation: &str, args: &[&str]) -> Response {
        service.handle(&Request::new(kind, operation, args.iter().copied()))
    }

    #[test]
    fn test_stack_scenario() {
        let mut service = Service::new(&DaemonConfig { stack_capacity: 3, ..DaemonConfig::default() });
        for value in ["1", "2", "3"] {
            assert!(run(&mut service, StructureKind::Stack, "push", &[value]).success);
        }

        let overflow = run(&mut service, StructureKind::Stack, "push", &["4"]);
        assert!(!overflow.success);
        assert_eq!(overflow.message, "Stack Overflow");
        assert_eq!(overflow.error_code, Some(codes::OVERFLOW));
        assert_eq!(overflow.elements, vec![1, 2, 3]);
        assert_eq!(overflow.capacity, Some(3));

        let popped = run(&mut service, StructureKind::Stack, "pop", &[]);
        assert_eq!(popped.operation, "POP");
        assert_eq!(popped.value, Some(3));
        assert_eq!(popped.elements, vec![1, 2]);
    }

    #[test]
    fn test_rejected_operand_leaves_state() {
        let mut service = service();
        run(&mut service, StructureKind::Queue, "enqueue", &["10"]);

        let response = run(&mut service, StructureKind::Queue, "enqueue", &["12345"]);
        assert!(!response.success);
        assert_eq!(response.message, "Input must be between -9999 and 9999");
        assert_eq!(response.error_code, Some(codes::OPERAND_OUT_OF_RANGE));
        assert_eq!(response.elements, vec![10]);
    }

    #[test]
    fn test_unknown_operation() {
        let mut service = service();
        let response = run(&mut service, StructureKind::Stack, "enqueue", &["1"]);

        assert!(!response.success);
        assert_eq!(response.error_code, Some(codes::UNKNOWN_OPERATION));
        assert!(response.message.contains("push, pop, peek"));
    }

    #[test]
    fn test_operand_count_checked() {
        let mut service = service();
        let response = run(&mut service, StructureKind::Stack, "pop", &["1"]);
        assert_eq!(response.error_code, Some(codes::OPERAND_COUNT_MISMATCH));

        let response = run(&mut service, StructureKind::List, "insert_at", &["0"]);
        assert_eq!(response.error_code, Some(codes::OPERAND_COUNT_MISMATCH));
    }

    #[test]
    fn test_state_and_reset_take_no_operands() {
        let mut service = service();
        run(&mut service, StructureKind::Stack, "push", &["4"]);

        let reset = run(&mut service, StructureKind::Stack, "reset", &["9"]);
        assert!(!reset.success);
        assert_eq!(reset.operation, "RESET");
        assert_eq!(reset.error_code, Some(codes::OPERAND_COUNT_MISMATCH));
        assert_eq!(reset.elements, vec![4]);

        let state = run(&mut service, StructureKind::Graph, "state", &["1"]);
        assert_eq!(state.error_code, Some(codes::OPERAND_COUNT_MISMATCH));

        let reset = run(&mut service, StructureKind::Stack, "reset", &[]);
        assert!(reset.success);
        assert!(reset.elements.is_empty());
    }

    #[test]
    fn test_array_insert_appends_without_index() {
        let mut service = service();
        run(&mut service, StructureKind::Array, "insert", &["5"]);
        run(&mut service, StructureKind::Array, "insert", &["7"]);
        let response = run(&mut service, StructureKind::Array, "insert", &["0", "6"]);

        assert_eq!(response.elements, vec![6, 5, 7]);
        assert_eq!(response.capacity, Some(10));
    }

    #[test]
    fn test_array_reset_restores_capacity() {
        let mut service = Service::new(&DaemonConfig { array_capacity: 1, ..DaemonConfig::default() });
        run(&mut service, StructureKind::Array, "insert", &["1"]);
        run(&mut service, StructureKind::Array, "insert", &["2"]);
        assert_eq!(service.snapshot(StructureKind::Array).capacity, Some(2));

        let response = run(&mut service, StructureKind::Array, "reset", &[]);
        assert_eq!(response.message, "Array reset");
        assert_eq!(response.capacity, Some(1));
        assert!(response.elements.is_empty());
    }

    #[test]
    fn test_graph_edge_operand_forms() {
        let mut service = service();
        run(&mut service, StructureKind::Graph, "add_edge", &["1 2"]);
        run(&mut service, StructureKind::Graph, "add_edge", &["2", "3"]);

        let response = run(&mut service, StructureKind::Graph, "bfs", &["1"]);
        assert_eq!(response.traversal, Some(vec![1, 2, 3]));
        assert_eq!(response.message, "BFS: [1, 2, 3]");
        assert_eq!(response.directed, Some(false));
        assert_eq!(
            response.adjacency.and_then(|map| map.get(&2).cloned()),
            Some(vec![1, 3])
        );

        let bad = run(&mut service, StructureKind::Graph, "add_edge", &["1 2 3"]);
        assert_eq!(bad.error_code, Some(codes::OPERAND_COUNT_MISMATCH));
    }

    #[test]
    fn test_graph_unknown_start_not_found() {
        let mut service = service();
        let response = run(&mut service, StructureKind::Graph, "dfs", &["99"]);
        assert!(!response.success);
        assert_eq!(response.error_code, Some(codes::NOT_FOUND));
    }

    #[test]
    fn test_log_handler_receives_every_request() {
        let mut service = service();
        let seen: Arc<Mutex<Vec<(LogLevel, String)>>> = Arc::default();
        {
            let seen = Arc::clone(&seen);
            service.register_log_handler(move |op| {
                seen.lock().unwrap().push((op.level, op.message.clone()));
            });
        }

        run(&mut service, StructureKind::Bst, "insert", &["5"]);
        run(&mut service, StructureKind::Bst, "insert", &["5"]);
        run(&mut service, StructureKind::Bst, "state", &[]);

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0], (LogLevel::Info, "Inserted 5".to_string()));
        assert_eq!(seen[1], (LogLevel::Warn, "Duplicate value not allowed".to_string()));
        assert_eq!(seen[2], (LogLevel::Debug, "BST: 1 element(s)".to_string()));
    }

    #[test]
    fn test_handle_line_malformed() {
        let mut service = service();
        let response = service.handle_line("{\"structure\": \"heap\", \"operation\": \"push\"}");
        assert!(!response.success);
        assert_eq!(response.operation, "INVALID");
        assert_eq!(response.error_code, Some(codes::INVALID_OPERAND));
    }

    #[test]
    fn test_structure_kind_from_str() {
        assert_eq!("BST".parse::<StructureKind>(), Ok(StructureKind::Bst));
        assert!("heap".parse::<StructureKind>().is_err());
    }
}
