use leptos::{component, view, IntoView, Signal, SignalGet, SignalSet, SignalWith, CollectView, RwSignal, WriteSignal, create_rw_signal};
use crate::components::toast::Toast;
use crate::constants::labels;
use crate::pipeline::ResultSurface;
use crate::render::{LegView, RouteView, SegmentView};

/// Reactive state behind the result panel
#[derive(Clone, Copy)]
pub struct ResultPanel {
    loading: RwSignal<bool>,
    result: RwSignal<Option<RouteView>>,
    set_toast: WriteSignal<Toast>,
}

impl ResultPanel {
    #[must_use]
    pub fn new(set_toast: WriteSignal<Toast>) -> Self {
        Self {
            loading: create_rw_signal(false),
            result: create_rw_signal(None),
            set_toast,
        }
    }

    #[must_use]
    pub fn loading(&self) -> Signal<bool> {
        self.loading.into()
    }

    #[must_use]
    pub fn result(&self) -> Signal<Option<RouteView>> {
        self.result.into()
    }
}

impl ResultSurface for ResultPanel {
    fn begin_loading(&self) {
        self.result.set(None);
        self.loading.set(true);
    }

    fn end_loading(&self) {
        self.loading.set(false);
    }

    fn show_route(&self, view: RouteView) {
        self.result.set(Some(view));
    }

    fn notify(&self, message: &str) {
        self.set_toast.set(Toast::new(message));
    }
}

#[component]
fn LegBadges(legs: Vec<LegView>, transfers: usize) -> impl IntoView {
    view! {
        <div class="route-legs">
            {legs.into_iter().map(|leg| view! {
                <span class="leg-badge" style=format!("background-color: {};", leg.color)>
                    {leg.line}
                </span>
            }).collect_view()}
            <span class="route-transfers">{format!("{} {transfers}", labels::TRANSFERS)}</span>
        </div>
    }
}

#[component]
fn TimelineSegment(segment: SegmentView) -> impl IntoView {
    let arrival = segment.arrival_label();
    let departure = segment.departure_label();
    let line_info = segment.line_info_label();
    let accent = segment.accent_color;

    view! {
        <div class="timeline-segment" style=format!("border-left: 8px solid {accent}")>
            <div class="segment-time">
                {arrival.map(|label| view! { <span class="segment-arrival">{label}</span> })}
                {departure.map(|label| view! { <span class="segment-departure">{label}</span> })}
            </div>
            <div class="segment-station">
                <strong>{segment.station}</strong>
                {line_info.map(|label| view! {
                    <span class="line-info" style=format!("color: {accent}")>{label}</span>
                })}
            </div>
        </div>
    }
}

/// Loading indicator, itinerary timeline and map for the latest search
#[component]
#[must_use]
pub fn RouteResult(loading: Signal<bool>, result: Signal<Option<RouteView>>) -> impl IntoView {
    view! {
        <div id="loading" class=move || if loading.get() { "loading" } else { "loading d-none" }>
            {labels::LOADING}
        </div>
        <div id="result" class=move || if result.with(Option::is_some) { "result" } else { "result d-none" }>
            {move || result.get().map(|route| {
                let transfers = route.transfers();
                view! {
                    <div class="route-summary">
                        <span class="total-time-label">{labels::TOTAL_TIME}</span>
                        <span id="total-time" class="total-time">{route.total_time}</span>
                        <LegBadges legs=route.legs transfers=transfers />
                    </div>
                    <div id="route-info" class="route-timeline">
                        {route.segments.into_iter()
                            .map(|segment| view! { <TimelineSegment segment=segment /> })
                            .collect_view()}
                    </div>
                    <div id="map" class="route-map">
                        <iframe
                            src=route.map_src
                            style="width: 100%; height: 100%; border: none;"
                        ></iframe>
                    </div>
                }
            })}
        </div>
    }
}
