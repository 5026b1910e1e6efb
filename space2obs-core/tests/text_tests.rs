//! Integration tests for text rendering.

use space2obs_core::{Template, TemplateFields, shorten};

#[test]
fn test_render_with_shortened_explanation() {
    let explanation = "Stars   form\nin   dense clouds of gas and dust. ".repeat(20);
    let max_len = 60;

    let mut fields = TemplateFields::new();
    fields.insert("title", "Nursery".to_string());
    fields.insert("explanation", shorten(&explanation, max_len));

    let rendered = Template::new("{title}\\n\\n{explanation}").render(&fields);
    let mut lines = rendered.lines();

    assert_eq!(lines.next(), Some("Nursery"));
    assert_eq!(lines.next(), Some(""));

    let body = lines.next().unwrap();
    assert!(body.chars().count() <= max_len);
    assert!(body.ends_with("[...]"));
    assert!(body.starts_with("Stars form in dense clouds"));
    assert!(!body.contains('\n'));
}
