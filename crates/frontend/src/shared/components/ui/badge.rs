use leptos::prelude::*;

/// Pill-shaped label
#[component]
pub fn Badge(
    /// Badge variant: "type", "ability", "hidden", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "type" => "badge--type",
        "ability" => "badge--ability",
        "hidden" => "badge--ability badge--hidden",
        _ => "badge--neutral",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}
