use leptos::{component, view, IntoView, RwSignal, Signal, SignalGet, SignalSet, SignalWithUntracked, create_signal, spawn_local, ev::SubmitEvent};
use crate::api::HttpApi;
use crate::cascade::SelectorCascade;
use crate::components::route_result::ResultPanel;
use crate::components::station_selector::StationSelector;
use crate::components::time_input::TimeInput;
use crate::constants::{labels, DEPARTURE_TIME_FIELD};
use crate::pipeline::{submit, RouteRequest, SubmissionTracker};
use crate::time::current_departure_time;
use std::rc::Rc;
use wasm_bindgen::JsCast;

/// Every text entry of the form, in document order
///
/// File entries are skipped.
fn form_fields(form: &web_sys::HtmlFormElement) -> Vec<(String, String)> {
    let Ok(data) = web_sys::FormData::new_with_form(form) else {
        return Vec::new();
    };
    let Ok(Some(entries)) = js_sys::try_iter(&data) else {
        return Vec::new();
    };
    entries
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let pair: js_sys::Array = entry.dyn_into().ok()?;
            Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
        })
        .collect()
}

#[component]
#[must_use]
pub fn RouteForm(
    api: Rc<HttpApi>,
    origin: RwSignal<SelectorCascade>,
    destination: RwSignal<SelectorCascade>,
    panel: ResultPanel,
) -> impl IntoView {
    let tracker = SubmissionTracker::new();
    let (departure_time, set_departure_time) = create_signal(current_departure_time());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let passthrough = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlFormElement>().ok())
            .map(|form| form_fields(&form))
            .unwrap_or_default();
        let request = origin.with_untracked(|o| {
            destination.with_untracked(|d| RouteRequest::new(o, d))
        })
        .with_fields(passthrough);

        let api = Rc::clone(&api);
        let tracker = tracker.clone();
        spawn_local(async move {
            submit(&*api, &panel, &tracker, request).await;
        });
    };

    view! {
        <form id="route-form" class="route-form" on:submit=on_submit>
            <StationSelector cascade=origin />
            <StationSelector cascade=destination />
            <TimeInput
                label=labels::DEPARTURE_TIME
                name=DEPARTURE_TIME_FIELD
                value=Signal::derive(move || departure_time.get())
                on_change=Box::new(move |time| set_departure_time.set(time))
            />
            <button type="submit" class="primary">{labels::SUBMIT}</button>
        </form>
    }
}
