use dioxus::prelude::*;

use site::catalog::Accordion;

#[derive(Clone, PartialEq, Props)]
pub struct AccordionItemProps {
    group: Signal<Accordion>,
    index: usize,
    title: String,
    children: Element,
}

// one collapsible entry; the group signal enforces that only one is open
#[component]
pub fn AccordionItem(props: AccordionItemProps) -> Element {
    let mut group = props.group;
    let index = props.index;
    let open = group.read().is_open(index);

    rsx! {
        div { class: "accordion-item",
            button {
                class: "accordion-header",
                aria_expanded: "{open}",
                onclick: move |_| {
                    group.write().select(index);
                },
                span { "{props.title}" }
                span { if open { "−" } else { "+" } }
            }
            if open {
                div { class: "accordion-body", {props.children} }
            }
        }
    }
}
