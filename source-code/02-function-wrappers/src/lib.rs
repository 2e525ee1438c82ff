//! # Function Wrapper Patterns
//!
//! Wrapping a callable replaces its behavior, but inspection should still
//! report the original: its name and its documentation text. These examples
//! build a wrapper that carries the wrapped callable's metadata forward
//! instead of presenting its own.
//!
//! ## Patterns Covered
//!
//! 1. **The Wrapper Identity Problem**
//!    - A naive wrapper shadows the original on inspection
//!
//! 2. **Metadata Propagation**
//!    - `wrap_with` copies the wrapped callable's name and doc text
//!
//! 3. **Composing Wrappers**
//!    - Stacked wrappers keep the innermost identity
//!
//! 4. **Practical Wrappers**
//!    - Counting and timing a call without losing identity
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --example p1_naive_wrapper
//! cargo run --example p2_preserved_metadata
//! cargo run --example p3_stacked_wrappers
//! cargo run --example p4_instrumented_wrapper
//! ```

/// Name and documentation text a callable presents to inspection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FnMeta {
    pub name: &'static str,
    pub doc: &'static str,
}

/// The inspection surface: anything that can state its name and doc text.
pub trait Describe {
    fn name(&self) -> &'static str;
    fn doc(&self) -> &'static str;
}

/// A callable bundled with the metadata it exposes to inspection.
pub struct DocumentedFn<F> {
    meta: FnMeta,
    body: F,
}

impl<F> DocumentedFn<F> {
    pub fn new(name: &'static str, doc: &'static str, body: F) -> Self {
        DocumentedFn {
            meta: FnMeta { name, doc },
            body,
        }
    }

    pub fn meta(&self) -> FnMeta {
        self.meta
    }

    /// Build a replacement callable around `body`, carrying this callable's
    /// metadata forward. The replacement reports the wrapped callable's name
    /// and doc text, never its own.
    pub fn wrap_with<G>(&self, body: G) -> DocumentedFn<G> {
        DocumentedFn {
            meta: self.meta,
            body,
        }
    }
}

impl<F: Fn()> DocumentedFn<F> {
    pub fn call(&self) {
        (self.body)()
    }
}

impl<F> Describe for DocumentedFn<F> {
    fn name(&self) -> &'static str {
        self.meta.name
    }

    fn doc(&self) -> &'static str {
        self.meta.doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    fn original<'a>(calls: &'a RefCell<Vec<&'static str>>) -> DocumentedFn<impl Fn() + 'a> {
        DocumentedFn::new("foo", "This is foo.", move || calls.borrow_mut().push("foo"))
    }

    mod metadata {
        use super::*;

        #[test]
        fn wrapper_reports_the_original() {
            let calls = RefCell::new(Vec::new());
            let foo = original(&calls);
            let bar = foo.wrap_with(|| {
                calls.borrow_mut().push("bar");
                foo.call();
            });

            assert_eq!(bar.name(), "foo");
            assert_eq!(bar.doc(), "This is foo.");
        }

        #[test]
        fn wrapper_never_leaks_its_own_strings() {
            let calls = RefCell::new(Vec::new());
            let foo = original(&calls);
            let bar = foo.wrap_with(|| calls.borrow_mut().push("bar"));

            assert_ne!(bar.name(), "bar");
            assert_ne!(bar.doc(), "This is bar.");
            assert_eq!(bar.meta(), foo.meta());
        }

        #[test]
        fn stacked_wrappers_keep_the_innermost_identity() {
            let calls = RefCell::new(Vec::new());
            let base = original(&calls);
            let once = base.wrap_with(|| base.call());
            let twice = once.wrap_with(|| once.call());

            assert_eq!(twice.name(), "foo");
            assert_eq!(twice.doc(), "This is foo.");
        }
    }

    mod behavior {
        use super::*;

        #[test]
        fn unwrapped_callable_records_each_run() {
            let calls = RefCell::new(Vec::new());
            let foo = original(&calls);
            foo.call();
            foo.call();
            assert_eq!(*calls.borrow(), ["foo", "foo"]);
        }

        #[test]
        fn wrapper_body_runs_then_delegates() {
            let calls = RefCell::new(Vec::new());
            let foo = original(&calls);
            let bar = foo.wrap_with(|| {
                calls.borrow_mut().push("bar");
                foo.call();
            });

            bar.call();
            assert_eq!(*calls.borrow(), ["bar", "foo"]);
        }

        #[test]
        fn counting_wrapper_sees_every_call() {
            let count = Cell::new(0u32);
            let noop = DocumentedFn::new("noop", "Does nothing.", || {});
            let counted = noop.wrap_with(|| {
                count.set(count.get() + 1);
                noop.call();
            });

            counted.call();
            counted.call();
            counted.call();
            assert_eq!(count.get(), 3);
        }
    }

    mod inspection_object {
        use super::*;

        #[test]
        fn trait_object_matches_the_concrete_view() {
            let plain = DocumentedFn::new("foo", "This is foo.", || {});
            let via_object: &dyn Describe = &plain;

            assert_eq!(via_object.name(), plain.name());
            assert_eq!(via_object.doc(), plain.doc());
        }
    }
}
