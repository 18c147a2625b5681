use contracts::shared::DateRange;
use leptos::prelude::*;

use super::date_input::DateInput;

/// Start and end date pickers over two `yyyy-mm-dd` signals. Warns when the
/// start falls after the end (such a range matches nothing).
#[component]
pub fn DateRangeFilter(start: RwSignal<String>, end: RwSignal<String>) -> impl IntoView {
    let inverted = move || DateRange::from_inputs(&start.get(), &end.get()).is_inverted();
    let has_bounds = move || !start.get().is_empty() || !end.get().is_empty();

    view! {
        <div class="date-range-filter">
            <DateInput
                label="Fecha inicio"
                value=Signal::derive(move || start.get())
                on_change=move |v| start.set(v)
            />
            <DateInput
                label="Fecha fin"
                value=Signal::derive(move || end.get())
                on_change=move |v| end.set(v)
            />
            <Show when=has_bounds>
                <button
                    class="button button--link"
                    on:click=move |_| {
                        start.set(String::new());
                        end.set(String::new());
                    }
                >
                    "Limpiar fechas"
                </button>
            </Show>
            <Show when=inverted>
                <div class="alert alert--warning">
                    "La fecha de inicio es posterior a la fecha de fin."
                </div>
            </Show>
        </div>
    }
}
