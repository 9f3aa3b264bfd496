/// Утилиты для списка: подсветка совпадений и строка поиска
use leptos::prelude::*;

/// Splits `text` into (segment, is_match) pairs for a case-insensitive needle.
/// Assumes lowercasing keeps byte offsets, which holds for ASCII names.
pub fn match_segments(text: &str, filter: &str) -> Vec<(String, bool)> {
    let filter_lower = filter.to_lowercase();
    let text_lower = text.to_lowercase();

    if filter_lower.is_empty() || text_lower.len() != text.len() {
        return vec![(text.to_string(), false)];
    }

    let mut parts = Vec::new();
    let mut last_pos = 0;

    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let actual_pos = last_pos + pos;
        if actual_pos > last_pos {
            parts.push((text[last_pos..actual_pos].to_string(), false));
        }
        let match_end = actual_pos + filter_lower.len();
        parts.push((text[actual_pos..match_end].to_string(), true));
        last_pos = match_end;
    }

    if last_pos < text.len() {
        parts.push((text[last_pos..].to_string(), false));
    }

    parts
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let parts: Vec<AnyView> = match_segments(text, filter)
        .into_iter()
        .map(|(segment, is_match)| {
            if is_match {
                view! { <mark class="search-match">{segment}</mark> }.into_any()
            } else {
                view! { <span>{segment}</span> }.into_any()
            }
        })
        .collect();

    view! { <>{parts}</> }.into_any()
}

/// Строка поиска с кнопкой очистки. Значение уходит в `on_change` на каждое
/// нажатие клавиши.
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search Pokémon...".to_string()
    } else {
        placeholder
    };

    let clear_filter = move |_| {
        on_change.run(String::new());
    };

    view! {
        <div class="search-bar">
            <span class="search-bar__icon">{crate::shared::icons::icon("search")}</span>
            <input
                type="text"
                class="search-bar__input"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| {
                    on_change.run(event_target_value(&ev));
                }
            />
            {move || if !value.get().is_empty() {
                view! {
                    <button class="search-bar__clear" on:click=clear_filter title="Clear">
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_segments() {
        assert_eq!(
            match_segments("Charmander", "char"),
            vec![("Char".to_string(), true), ("mander".to_string(), false)]
        );
        assert_eq!(
            match_segments("Nidoran", "o"),
            vec![
                ("Nid".to_string(), false),
                ("o".to_string(), true),
                ("ran".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_no_filter_is_single_segment() {
        assert_eq!(
            match_segments("Pikachu", "  "),
            vec![("Pikachu".to_string(), false)]
        );
        assert_eq!(
            match_segments("Pikachu", "zz"),
            vec![("Pikachu".to_string(), false)]
        );
    }
}
