use leptos::prelude::*;

/// DateInput component with native date picker
/// The browser shows the date in the user's locale format (dd/mm/yyyy for es-ES)
#[component]
pub fn DateInput(
    /// The date value in yyyy-mm-dd format
    #[prop(into)]
    value: Signal<String>,
    /// Callback when the date changes (receives yyyy-mm-dd format)
    on_change: impl Fn(String) + 'static,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    view! {
        <label class="date-input">
            {label.map(|text| view! { <span class="date-input__label">{text}</span> })}
            <input
                type="date"
                class="date-input__field"
                prop:value=value
                on:input=move |ev| {
                    on_change(event_target_value(&ev));
                }
            />
        </label>
    }
}
