use contracts::domain::a001_pokemon::aggregate::NumericAttribute;
use contracts::domain::a001_pokemon::list_query::{stat_bar_percent, MAX_BASE_STAT};
use leptos::prelude::*;

/// Short axis labels for the six battle stats
pub fn stat_label(name: &str) -> String {
    match name {
        "hp" => "HP".to_string(),
        "attack" => "Attack".to_string(),
        "defense" => "Defense".to_string(),
        "special-attack" => "Sp. Atk".to_string(),
        "special-defense" => "Sp. Def".to_string(),
        "speed" => "Speed".to_string(),
        other => other.to_string(),
    }
}

/// Горизонтальная столбчатая диаграмма базовых характеристик (ось 0..255)
#[component]
pub fn StatChart(stats: Vec<NumericAttribute>) -> impl IntoView {
    let total: u32 = stats.iter().map(|s| s.value).sum();

    view! {
        <div class="stat-chart" title=format!("Scale 0–{}", MAX_BASE_STAT)>
            {stats
                .into_iter()
                .map(|stat| {
                    let width = format!("width: {:.1}%;", stat_bar_percent(stat.value));
                    view! {
                        <div class="stat-chart__row">
                            <span class="stat-chart__label">{stat_label(&stat.name)}</span>
                            <div class="stat-chart__track">
                                <div class="stat-chart__bar" style=width></div>
                            </div>
                            <span class="stat-chart__value">{stat.value}</span>
                        </div>
                    }
                })
                .collect_view()}
            <div class="stat-chart__row stat-chart__row--total">
                <span class="stat-chart__label">"Total"</span>
                <div class="stat-chart__track"></div>
                <span class="stat-chart__value">{total}</span>
            </div>
        </div>
    }
}
