//! Walks the full flow a frontend would drive: extract placeholders,
//! describe the form, bind values, and print both renderings.
//!
//! Run: `cargo run --package promptdeck-core --example render_prompt`

use promptdeck_core::{extract, fields, substitute, Bindings, FieldControl, Locale};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    let body = "Write a {length: short|long} blog post about {topic}.\nTone: {tone: formal|casual}";

    let specs = extract(body);
    println!("placeholders:");
    for field in fields(&specs, Locale::En) {
        match field.control {
            FieldControl::Select { options } => {
                println!("  {} (select: {})", field.label, options.join(", "))
            }
            FieldControl::Text => println!("  {} (text)", field.label),
        }
    }

    let mut bindings = Bindings::new();
    bindings.insert("length", "short");
    bindings.insert("topic", "error handling in Rust");
    bindings.insert_selection("tone", "Other", "playful", Locale::En);

    let result = substitute(body, &bindings);
    println!("\nplain:\n{}", result.plain);
    println!("\nannotated:\n{}", result.annotated);
}
