//! End-to-end tests over the public API: extraction, form description,
//! sentinel resolution, substitution, and library lookup working together
//! the way a frontend would drive them.

use promptdeck_core::{
    extract, fields, has_placeholders, substitute, Bindings, Category, FieldControl, Locale,
    LocalizedText, PlaceholderSpec, Prompt, PromptError, PromptLibrary, RenderResult,
};

#[test]
fn body_without_placeholders_is_left_alone() {
    let body = "No slots here, just text with a stray } brace.";
    assert!(!has_placeholders(body));
    assert!(extract(body).is_empty());

    let result = substitute(body, &Bindings::new());
    assert_eq!(result.plain, body);
}

#[test]
fn full_flow_from_body_to_renderings() {
    let body = "Write a {length: short|long} article about {topic}.\nAudience: {audience}";

    // Extraction drives the form.
    let specs = extract(body);
    assert_eq!(
        specs,
        vec![
            PlaceholderSpec::with_choices("length", vec!["short".into(), "long".into()]),
            PlaceholderSpec::new("topic"),
            PlaceholderSpec::new("audience"),
        ]
    );

    let form = fields(&specs, Locale::En);
    assert_eq!(form.len(), 3);
    assert!(matches!(form[0].control, FieldControl::Select { .. }));
    assert_eq!(form[1].control, FieldControl::Text);

    // The user picks "Other" for length and types a custom value.
    let mut bindings = Bindings::new();
    bindings.insert_selection("length", "Other", "medium-length", Locale::En);
    bindings.insert("topic", "ownership in Rust");
    bindings.insert("audience", "beginners");

    let result = substitute(body, &bindings);
    assert_eq!(
        result.plain,
        "Write a medium-length article about ownership in Rust.\nAudience: beginners"
    );
    assert_eq!(
        result.annotated,
        "Write a **medium-length** article about ownership in Rust.  \nAudience: **beginners**"
    );
}

#[test]
fn unknown_placeholders_survive_both_renderings() {
    let bindings = Bindings::new().with("known", "yes");
    let result = substitute("{known} and {unknown: a|b}", &bindings);
    assert_eq!(result.plain, "yes and {unknown: a|b}");
    assert_eq!(result.annotated, "**yes** and {unknown: a|b}");
}

#[test]
fn duplicate_names_collapse_but_all_occurrences_substitute() {
    let body = "{x: a|b} then {x} again";
    let specs = extract(body);
    assert_eq!(specs.len(), 1);
    // Last occurrence's (empty) choice list wins.
    assert!(specs[0].choices.is_empty());

    let result = substitute(body, &Bindings::new().with("x", "V"));
    assert_eq!(result.plain, "V then V again");
}

#[test]
fn library_round_trip_in_both_locales() {
    let mut library = PromptLibrary::new();
    library.add_category(Category::new(
        "email",
        LocalizedText::new("Email", "E-Mail"),
    ));
    library.register(
        Prompt::new(
            "reply",
            LocalizedText::new("Reply", "Antwort"),
            LocalizedText::new(
                "Reply to {sender} in a {tone: formal|casual} tone.",
                "Antworte {sender} in einem {tone: formellen|lockeren} Ton.",
            ),
        )
        .with_category("email"),
    );

    let bindings = Bindings::new().with("sender", "Alice").with("tone", "formal");
    let en = library.render("reply", Locale::En, &bindings).unwrap();
    assert_eq!(en.plain, "Reply to Alice in a formal tone.");

    let bindings = Bindings::new().with("sender", "Alice").with("tone", "formellen");
    let de = library.render("reply", Locale::De, &bindings).unwrap();
    assert_eq!(de.plain, "Antworte Alice in einem formellen Ton.");

    assert_eq!(
        library.render("missing", Locale::En, &bindings),
        Err(PromptError::UnknownPrompt("missing".to_string()))
    );
}

#[test]
fn render_result_serializes() {
    let result = RenderResult {
        plain: "a".to_string(),
        annotated: "**a**".to_string(),
    };
    let json = serde_json::to_string(&result).unwrap();
    let back: RenderResult = serde_json::from_str(&json).unwrap();
    assert_eq!(result, back);
}
