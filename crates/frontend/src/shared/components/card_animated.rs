//! CardAnimated: обёртка над Thaw Card с анимацией появления.
//!
//! Анимация `card-appear` задаётся в стилях страницы. Для каскадного
//! появления сетки передавайте растущий `delay_ms`:
//!
//! ```text
//! <CardAnimated delay_ms=0>   // карточка 1
//! <CardAnimated delay_ms=30>  // карточка 2
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Stagger step is capped so long grids do not wait seconds for the last card.
pub const MAX_DELAY_MS: u32 = 600;

/// Задержка для карточки с индексом `index` в сетке.
pub fn stagger_delay(index: usize, step_ms: u32) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    index.saturating_mul(step_ms).min(MAX_DELAY_MS)
}

#[component]
pub fn CardAnimated(
    /// Задержка анимации в миллисекундах (для stagger-эффекта).
    #[prop(optional)]
    delay_ms: u32,
    /// Дополнительный CSS класс.
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);
    let class = if class.is_empty() {
        "card-animated".to_string()
    } else {
        format!("card-animated {}", class)
    };

    view! {
        <Card class=class attr:style=style>
            {children()}
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay_is_capped() {
        assert_eq!(stagger_delay(0, 30), 0);
        assert_eq!(stagger_delay(3, 30), 90);
        assert_eq!(stagger_delay(150, 30), MAX_DELAY_MS);
        assert_eq!(stagger_delay(usize::MAX, 30), MAX_DELAY_MS);
    }
}
