use crate::core::{ElementKind, ElementTree, HeaderConfig, NavLink, SITE_HEADER};
use dioxus::prelude::*;

// Header stylesheet (inlined as well for release native builds)
const HEADER_CSS: Asset = asset!("/assets/styling/header.css");
const HEADER_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/header.css"
));

/// Style-class identifiers consumed by `header.css`. Renaming any of these
/// breaks the stylesheet.
pub mod class {
    pub const HEADER: &str = "header";
    pub const CONTAINER: &str = "header-container";
    pub const LEFT_ELEMENT: &str = "header-left-element";
    pub const RIGHT_ELEMENTS: &str = "header-right-elements";
    pub const RIGHT_ELEMENT: &str = "header-right-element";

    pub const ALL: [&str; 5] = [HEADER, CONTAINER, LEFT_ELEMENT, RIGHT_ELEMENTS, RIGHT_ELEMENT];
}

/// Describes the site header as an element tree.
///
/// Pure and infallible: no inputs, no I/O, and the same tree on every call.
/// ```
/// let tree = ui::components::site_header::render();
/// assert_eq!(tree.links().len(), 3);
/// ```
pub fn render() -> ElementTree {
    render_with(&SITE_HEADER)
}

/// Same layout as [`render`] for an arbitrary configuration.
pub fn render_with(config: &HeaderConfig) -> ElementTree {
    let left = ElementTree::div(class::LEFT_ELEMENT).with_child(link(&config.brand));
    let right = ElementTree::div(class::RIGHT_ELEMENTS).with_children(
        config
            .links
            .iter()
            .map(|l| ElementTree::div(class::RIGHT_ELEMENT).with_child(link(l))),
    );

    ElementTree::div(class::HEADER)
        .with_child(ElementTree::div(class::CONTAINER).with_children([left, right]))
}

fn link(nav: &NavLink) -> ElementTree {
    ElementTree::anchor(nav.href, nav.label)
}

/// Site header with its stylesheet attached. Hosts mount this directly.
#[component]
pub fn SiteHeader() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: HEADER_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{HEADER_CSS_INLINE}" }
        }
        HeaderMarkup {}
    }
}

/// Dioxus rendering of [`render`]; the layout lives only in the element tree.
#[component]
pub fn HeaderMarkup() -> Element {
    #[cfg(debug_assertions)]
    log::debug!(
        "site header render ({} links, {} external)",
        SITE_HEADER.links.len() + 1,
        std::iter::once(&SITE_HEADER.brand)
            .chain(SITE_HEADER.links)
            .filter(|l| l.is_external())
            .count()
    );

    rsx! {
        ElementNode { node: render() }
    }
}

/// Maps one element tree node (and its subtree) onto Dioxus elements.
///
/// Only `class` and `href` are carried over; the header vocabulary uses no
/// other attributes.
#[component]
pub fn ElementNode(node: ElementTree) -> Element {
    let (kind, children) = match &node {
        ElementTree::Text(text) => return rsx! { "{text}" },
        ElementTree::Element { kind, children, .. } => (*kind, children),
    };
    let class = node.class().map(str::to_owned);
    let children = children.iter().enumerate().map(|(i, child)| {
        rsx! {
            ElementNode { key: "{i}", node: child.clone() }
        }
    });

    match kind {
        ElementKind::Div => rsx! {
            div { class: class, {children} }
        },
        ElementKind::Anchor => {
            let href = node.href().map(str::to_owned);
            rsx! {
                a { href: href, class: class, {children} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEMO: HeaderConfig = HeaderConfig {
        brand: NavLink::new("Home", "/"),
        links: &[],
    };

    #[test]
    fn render_with_empty_links_keeps_right_region() {
        let tree = render_with(&DEMO);
        let right = tree.find_by_class(class::RIGHT_ELEMENTS).unwrap();
        assert!(right.children().is_empty());
        assert_eq!(tree.count_class(class::RIGHT_ELEMENT), 0);
        assert_eq!(tree.links().len(), 1);
    }

    #[test]
    fn outer_wrapper_holds_a_single_container() {
        let tree = render();
        assert_eq!(tree.kind(), Some(ElementKind::Div));
        assert_eq!(tree.class(), Some(class::HEADER));
        let [container] = tree.children() else {
            panic!("expected one child, got {:?}", tree.children());
        };
        let classes: Vec<_> = container.children().iter().map(|c| c.class()).collect();
        assert_eq!(
            classes,
            [Some(class::LEFT_ELEMENT), Some(class::RIGHT_ELEMENTS)]
        );
    }

    #[test]
    fn html_matches_fixed_markup() {
        assert_eq!(
            render().to_html(),
            concat!(
                "<div class=\"header\"><div class=\"header-container\">",
                "<div class=\"header-left-element\">",
                "<a href=\"https://github.com/ethereum/rig\">Robust Incentives Group</a></div>",
                "<div class=\"header-right-elements\">",
                "<div class=\"header-right-element\"><a href=\"/abm1559\">eip1559</a></div>",
                "<div class=\"header-right-element\"><a href=\"/beaconrunner\">eth2</a></div>",
                "</div></div></div>"
            )
        );
    }
}
