use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct SectionHeadingProps {
    #[props(default)]
    subtitle: Option<String>,
    #[props(default = true)]
    centered: bool,
    children: Element,
}

#[component]
pub fn SectionHeading(props: SectionHeadingProps) -> Element {
    rsx! {
        div { class: if props.centered { "section-heading" } else { "section-heading left" },
            if let Some(subtitle) = props.subtitle {
                span { class: "section-badge", "{subtitle}" }
            }
            h2 { class: "section-title", {props.children} }
            div { class: "section-rule" }
        }
    }
}

// the banner at the top of every page except home
#[derive(Clone, PartialEq, Props)]
pub struct PageHeaderProps {
    title: String,
    subtitle: String,
}

#[component]
pub fn PageHeader(props: PageHeaderProps) -> Element {
    rsx! {
        div { class: "page-header",
            h1 { class: "page-title", "{props.title}" }
            p { class: "page-subtitle", "{props.subtitle}" }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct CheckListProps {
    items: Vec<String>,
    #[props(default)]
    class: String,
}

#[component]
pub fn CheckList(props: CheckListProps) -> Element {
    rsx! {
        ul { class: "check-list {props.class}",
            for (i , item) in props.items.iter().enumerate() {
                li { key: "{i}",
                    span { class: "check-icon", "✓" }
                    "{item}"
                }
            }
        }
    }
}
