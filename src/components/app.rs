use leptos::*;
use leptos_meta::*;
use std::rc::Rc;
use crate::api::HttpApi;
use crate::cascade::SelectorCascade;
use crate::components::route_form::RouteForm;
use crate::components::route_result::{ResultPanel, RouteResult};
use crate::components::toast::{Toast, ToastNotification};
use crate::constants::labels;
use crate::directory::StationDirectory;

/// Load the station directory once and hand it to both cascades
fn load_directory_action(
    api: Rc<HttpApi>,
    origin: RwSignal<SelectorCascade>,
    destination: RwSignal<SelectorCascade>,
    set_toast: WriteSignal<Toast>,
) {
    spawn_local(async move {
        match StationDirectory::load(&*api).await {
            Ok(directory) => {
                let (loaded_origin, loaded_destination) = SelectorCascade::pair(&Rc::new(directory));
                origin.set(loaded_origin);
                destination.set(loaded_destination);
            }
            Err(e) => {
                logging::error!("Error fetching stations: {e}");
                set_toast.set(Toast::new(labels::DIRECTORY_LOAD_FAILED));
            }
        }
    });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let (toast, set_toast) = create_signal(Toast::default());
    let panel = ResultPanel::new(set_toast);

    // Both cascades start on an empty directory: no lines, station control disabled
    let (empty_origin, empty_destination) = SelectorCascade::pair(&Rc::new(StationDirectory::default()));
    let origin = create_rw_signal(empty_origin);
    let destination = create_rw_signal(empty_destination);

    let api = match HttpApi::from_page() {
        Ok(api) => Rc::new(api),
        Err(e) => {
            logging::error!("Cannot resolve API endpoints: {e}");
            set_toast.set(Toast::new(labels::DIRECTORY_LOAD_FAILED));
            return view! {
                <Title text=labels::PAGE_TITLE/>
                <div class="app">
                    <ToastNotification toast=toast set_toast=set_toast />
                </div>
            }
            .into_view();
        }
    };

    load_directory_action(Rc::clone(&api), origin, destination, set_toast);

    view! {
        <Title text=labels::PAGE_TITLE/>

        <div class="app">
            <h1 class="app-title">{labels::PAGE_TITLE}</h1>
            <RouteForm api=api origin=origin destination=destination panel=panel />
            <RouteResult loading=panel.loading() result=panel.result() />
            <ToastNotification toast=toast set_toast=set_toast />
        </div>
    }
    .into_view()
}
