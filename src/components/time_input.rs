use leptos::{component, view, Signal, IntoView, SignalGet, SignalGetUntracked, event_target_value, create_node_ref, html::Input};
use chrono::NaiveTime;
use crate::time::{format_departure_time, parse_departure_time};

/// Departure time field, submitted with the route form under `name`
#[component]
#[must_use]
pub fn TimeInput(
    label: &'static str,
    name: &'static str,
    value: Signal<NaiveTime>,
    on_change: Box<dyn Fn(NaiveTime) + 'static>,
) -> impl IntoView {
    let input_ref = create_node_ref::<Input>();

    view! {
        <label class="time-label">
            {label}
            <input
                type="text"
                class="time-input"
                name=name
                inputmode="numeric"
                prop:value=move || format_departure_time(value.get())
                placeholder="HH:MM"
                node_ref=input_ref
                on:change=move |ev| {
                    let time_str = event_target_value(&ev);
                    if let Ok(time) = parse_departure_time(&time_str) {
                        on_change(time);
                    } else if let Some(input_elem) = input_ref.get() {
                        // Reset to last valid value if parsing fails
                        input_elem.set_value(&format_departure_time(value.get_untracked()));
                    }
                }
            />
        </label>
    }
}
