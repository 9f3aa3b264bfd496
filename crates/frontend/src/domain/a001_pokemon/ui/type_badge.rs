use crate::shared::components::ui::Badge;
use contracts::domain::a001_pokemon::aggregate::title_case;
use leptos::prelude::*;

/// Бейдж типа; цвет берётся из класса `type--{name}`
#[component]
pub fn TypeBadge(#[prop(into)] name: String) -> impl IntoView {
    let class = format!("type--{}", name.to_lowercase());
    view! {
        <Badge variant="type".to_string() class=class>
            {title_case(&name)}
        </Badge>
    }
}
