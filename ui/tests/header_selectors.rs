/*!
Header stylesheet lint.

Every class identifier the header emits must have a selector in
`ui/assets/styling/header.css`; a rename on either side otherwise degrades
styling silently at runtime. Substring presence is enough for an early warning.
*/

use ui::components::site_header::class;

const HEADER_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/header.css"
));

#[test]
fn stylesheet_has_a_selector_for_every_emitted_class() {
    let missing: Vec<_> = class::ALL
        .iter()
        .filter(|name| {
            let selector = format!(".{name} ");
            !HEADER_CSS.contains(&selector)
        })
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} header selector(s) in header.css: {:?}",
            missing.len(),
            missing
        );
    }
}

#[test]
fn stylesheet_not_trivially_empty() {
    let non_ws_len = HEADER_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 300,
        "header.css appears unexpectedly small ({non_ws_len} non-whitespace chars)"
    );
}
