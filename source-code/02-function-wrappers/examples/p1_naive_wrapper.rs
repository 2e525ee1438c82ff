//! Pattern 1: The Wrapper Identity Problem
//! Example: A Naive Wrapper Shadows the Original
//!
//! Run with: cargo run --example p1_naive_wrapper

// A plain wrapper type with no propagation: whatever metadata it is built
// with is what inspection reports.
struct Labeled<F> {
    name: &'static str,
    doc: &'static str,
    body: F,
}

impl<F: Fn()> Labeled<F> {
    fn call(&self) {
        (self.body)()
    }
}

fn main() {
    println!("=== A Wrapper With Its Own Identity ===\n");

    let foo = Labeled {
        name: "foo",
        doc: "This is foo.",
        body: || println!("foo"),
    };

    // The wrapper adds a step, then delegates to the original.
    let bar = Labeled {
        name: "bar",
        doc: "This is bar.",
        body: || {
            println!("bar");
            foo.call();
        },
    };

    println!("Calling the wrapper:");
    bar.call();

    println!("\nInspecting the wrapper:");
    println!("name: {}", bar.name);
    println!("doc: {}", bar.doc);

    println!("\n=== The Problem ===");
    println!("- Inspection now reports the wrapper, not the original");
    println!("- Callers that read the name or doc text see 'bar'");
    println!("- The next example copies the original's metadata instead");
}
