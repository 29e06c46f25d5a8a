use dioxus::prelude::*;

// placeholder only; there is no sign-in behind it
#[component]
pub fn Admin() -> Element {
    rsx! {
        div { class: "admin-stub",
            h1 { "Admin Portal" }
            p { "Restricted Access" }
        }
    }
}
