//! Option Selector Component
//!
//! Row of toggle buttons for picking one value out of a fixed set.

use leptos::prelude::*;

/// Selector buttons over `options`, highlighting the current value
#[component]
pub fn OptionSelector<T>(
    options: &'static [T],
    current: ReadSignal<T>,
    label: fn(&T) -> &'static str,
    #[prop(into)] on_change: Callback<T>,
) -> impl IntoView
where
    T: Copy + PartialEq + Send + Sync + 'static,
{
    view! {
        <div class="option-selector">
            {options.iter().map(|value| {
                let value = *value;
                let is_selected = move || current.get() == value;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "option-btn small active" } else { "option-btn small" }
                        on:click=move |_| on_change.run(value)
                    >
                        {label(&value)}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
