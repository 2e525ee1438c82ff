//! # Scoped Resource Patterns
//!
//! Resources whose acquisition and release are bound to a lexical scope:
//! release runs on every exit path, and grouped resources release in strict
//! reverse acquisition order.
//!
//! ## Patterns Covered
//!
//! 1. **Deterministic Drop Order**
//!    - Locals drop in reverse declaration order
//!    - A named resource that announces enter and exit
//!
//! 2. **Grouped Release with an Exit Stack**
//!    - Enter several resources, release in reverse
//!    - Release still runs while a panic unwinds
//!
//! 3. **Deferred Cleanup**
//!    - A scope guard with disarm
//!    - Deferred actions and resources in one LIFO order
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --example p1_drop_order
//! cargo run --example p1_named_resource
//! cargo run --example p2_exit_stack
//! cargo run --example p2_unwind_exit
//! cargo run --example p3_scope_guard
//! cargo run --example p3_deferred_cleanup
//! ```

use std::any::Any;

/// The line a resource prints when it is entered.
pub fn enter_message(name: &str) -> String {
    format!("Enter {name}.")
}

/// The line a resource prints when it is released.
pub fn exit_message(name: &str) -> String {
    format!("Exit {name}.")
}

/// A named resource that announces acquisition and release on stdout.
///
/// Construction prints the enter line; `Drop` prints the exit line, so the
/// release announcement runs on every exit path, including early returns
/// and panics.
pub struct Resource {
    name: String,
}

impl Resource {
    /// Acquire the resource, printing its enter line.
    pub fn enter(name: impl Into<String>) -> Self {
        let name = name.into();
        println!("{}", enter_message(&name));
        Resource { name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for Resource {
    fn drop(&mut self) {
        println!("{}", exit_message(&self.name));
    }
}

enum Entry {
    Scoped(Box<dyn Any>),
    Deferred(Box<dyn FnOnce()>),
}

/// Owns scoped values and deferred actions, releasing them strictly LIFO.
///
/// `push` takes ownership of any value; its `Drop` runs when the stack is
/// released. `defer` registers a closure to run at the same point. Values
/// and closures share a single release order: the reverse of registration.
///
/// Release happens when the stack is dropped, which includes dropping
/// during a panic unwind. Nothing is suppressed: an in-flight panic keeps
/// propagating after every entry has been released.
#[derive(Default)]
pub struct ExitStack {
    entries: Vec<Entry>,
}

impl ExitStack {
    pub fn new() -> Self {
        ExitStack {
            entries: Vec::new(),
        }
    }

    /// Take ownership of `value`; its `Drop` runs at release time.
    pub fn push<T: Any>(&mut self, value: T) {
        self.entries.push(Entry::Scoped(Box::new(value)));
    }

    /// Register an action to run at release time.
    pub fn defer<F: FnOnce() + 'static>(&mut self, action: F) {
        self.entries.push(Entry::Deferred(Box::new(action)));
    }

    /// Move every pending entry into a fresh stack, transferring release
    /// responsibility. The drained stack then releases nothing.
    pub fn pop_all(&mut self) -> ExitStack {
        ExitStack {
            entries: std::mem::take(&mut self.entries),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Drop for ExitStack {
    fn drop(&mut self) {
        // Strict LIFO: newest entry first.
        while let Some(entry) = self.entries.pop() {
            match entry {
                Entry::Scoped(value) => drop(value),
                Entry::Deferred(action) => action(),
            }
        }
    }
}

/// A single deferred action that runs on scope exit unless disarmed.
pub struct ScopeGuard<F: FnOnce()> {
    action: Option<F>,
}

impl<F: FnOnce()> ScopeGuard<F> {
    pub fn new(action: F) -> Self {
        ScopeGuard {
            action: Some(action),
        }
    }

    /// Consume the guard without running its action.
    pub fn disarm(mut self) {
        self.action = None;
    }

    pub fn is_armed(&self) -> bool {
        self.action.is_some()
    }
}

impl<F: FnOnce()> Drop for ScopeGuard<F> {
    fn drop(&mut self) {
        if let Some(action) = self.action.take() {
            action();
        }
    }
}
