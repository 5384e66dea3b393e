use leptos::{component, view, IntoView, RwSignal, SignalWith, SignalWithUntracked, SignalUpdate, event_target_value};
use crate::cascade::SelectorCascade;
use crate::constants::labels;

fn color_style(color: Option<&str>) -> String {
    color
        .map(|color| format!("color: {color}; font-weight: bold;"))
        .unwrap_or_default()
}

/// Line and station controls for one end of the journey
#[component]
#[must_use]
pub fn StationSelector(cascade: RwSignal<SelectorCascade>) -> impl IntoView {
    let endpoint = cascade.with_untracked(SelectorCascade::endpoint);
    let prefix = endpoint.id_prefix();

    let on_line_change = move |ev| {
        let line = event_target_value(&ev);
        cascade.update(|c| c.set_line(&line));
    };

    let on_station_change = move |ev| {
        let stop_id = event_target_value(&ev);
        cascade.update(|c| {
            if let Err(e) = c.set_station(&stop_id) {
                leptos::logging::warn!("Ignoring station selection: {e}");
            }
        });
    };

    view! {
        <fieldset class="station-selector">
            <legend>{endpoint.label()}</legend>
            <select
                id=format!("{prefix}-line")
                name=format!("{prefix}_line")
                class="line-select"
                prop:disabled=move || cascade.with(|c| !c.is_line_enabled())
                style=move || cascade.with(|c| color_style(c.selected_line_color()))
                on:change=on_line_change
            >
                <option value="">{labels::LINE_PLACEHOLDER}</option>
                {move || cascade.with(|c| {
                    c.line_options()
                        .into_iter()
                        .map(|option| {
                            let is_selected = option.line == c.selected_line();
                            view! {
                                <option
                                    value=option.line
                                    style=color_style(Some(option.color))
                                    selected=is_selected
                                >
                                    {option.label}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()
                })}
            </select>
            <select
                id=format!("{prefix}-station")
                name=endpoint.field_name()
                class="station-select"
                prop:disabled=move || cascade.with(|c| !c.is_station_enabled())
                style=move || cascade.with(|c| {
                    let color = c.selected_station_id().and_then(|id| {
                        c.station_options().iter().find(|o| o.stop_id == id).map(|o| o.color)
                    });
                    color_style(color)
                })
                on:change=on_station_change
            >
                <option value="" selected=move || cascade.with(|c| c.selected_station_id().is_none())>
                    {labels::STATION_PLACEHOLDER}
                </option>
                {move || cascade.with(|c| {
                    c.station_options()
                        .iter()
                        .map(|option| {
                            let is_selected = c.selected_station_id() == Some(option.stop_id.as_str());
                            view! {
                                <option
                                    value=option.stop_id.clone()
                                    style=color_style(Some(option.color))
                                    selected=is_selected
                                >
                                    {option.stop_name.clone()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()
                })}
            </select>
        </fieldset>
    }
}
