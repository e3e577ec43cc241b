//! In-memory todo store.
//!
//! # Design
//! `TodoStore` owns the record sequence and the id counter; nothing else
//! in the workspace mutates todos. Records keep insertion order, and ids
//! come from a monotonic counter that is never rewound: a deleted id stays
//! gone instead of being reissued to an unrelated record. `SharedStore`
//! wraps the store for concurrent hosts, taking one lock per operation so
//! id assignment, updates, and deletes never interleave.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::ApiError;
use crate::types::{CreateTodo, Todo, UpdateTodo};

/// Owner of the in-memory todo collection.
#[derive(Debug)]
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: u64,
}

impl TodoStore {
    /// Empty store. The first created todo gets id 1.
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }

    /// Store pre-populated with `todos`. The id counter starts above the
    /// highest seeded id, so created records never collide with seeds.
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        let next_id = todos.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self { todos, next_id }
    }

    /// All records, in insertion order.
    pub fn list(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    /// Append a new record under the next id.
    pub fn create(&mut self, input: CreateTodo) -> Result<Todo, ApiError> {
        if input.task.is_empty() {
            return Err(ApiError::Validation("Task is required"));
        }
        let todo = Todo {
            id: self.next_id,
            task: input.task,
            completed: input.completed,
        };
        self.next_id += 1;
        self.todos.push(todo.clone());
        Ok(todo)
    }

    /// Apply the fields present in `patch` to the record with `id`.
    pub fn update(&mut self, id: u64, patch: UpdateTodo) -> Result<Todo, ApiError> {
        let todo = self
            .todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(ApiError::NotFound)?;
        if let Some(task) = patch.task {
            todo.task = task;
        }
        if let Some(completed) = patch.completed {
            todo.completed = completed;
        }
        Ok(todo.clone())
    }

    /// Remove the record with `id`. Its id is not reissued afterwards.
    pub fn delete(&mut self, id: u64) -> Result<(), ApiError> {
        let pos = self
            .todos
            .iter()
            .position(|t| t.id == id)
            .ok_or(ApiError::NotFound)?;
        self.todos.remove(pos);
        Ok(())
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

/// The records the service starts with.
pub fn default_todos() -> Vec<Todo> {
    vec![
        Todo {
            id: 1,
            task: "Learn AWS Lambda".to_string(),
            completed: false,
        },
        Todo {
            id: 2,
            task: "Deploy Flask app".to_string(),
            completed: false,
        },
    ]
}

/// Cloneable handle to a store shared between concurrent requests.
///
/// Each operation acquires the lock once and holds it for the duration of
/// that operation.
#[derive(Debug, Clone)]
pub struct SharedStore(Arc<Mutex<TodoStore>>);

impl SharedStore {
    pub fn new(store: TodoStore) -> Self {
        Self(Arc::new(Mutex::new(store)))
    }

    pub fn list(&self) -> Result<Vec<Todo>, ApiError> {
        Ok(self.lock()?.list())
    }

    pub fn create(&self, input: CreateTodo) -> Result<Todo, ApiError> {
        self.lock()?.create(input)
    }

    pub fn update(&self, id: u64, patch: UpdateTodo) -> Result<Todo, ApiError> {
        self.lock()?.update(id, patch)
    }

    pub fn delete(&self, id: u64) -> Result<(), ApiError> {
        self.lock()?.delete(id)
    }

    /// A poisoned lock means a request panicked mid-operation. Surface it
    /// as an internal error instead of unwinding into the host.
    fn lock(&self) -> Result<MutexGuard<'_, TodoStore>, ApiError> {
        self.0.lock().map_err(|_| ApiError::Internal)
    }
}
