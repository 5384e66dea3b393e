use crate::api::{ApiError, RouteService};
use crate::cascade::SelectorCascade;
use crate::constants::labels;
use crate::log;
use crate::models::{RouteReply, RouteResponse};
use crate::render::RouteView;
use std::cell::Cell;
use std::rc::Rc;

/// Form fields sent to the routing service
///
/// Holds both station selections first, followed by any passthrough fields
/// from the surrounding form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteRequest {
    fields: Vec<(String, String)>,
}

impl RouteRequest {
    /// Start a request from the two cascades
    ///
    /// Empty selections are sent as empty values; the service decides whether
    /// the request is acceptable.
    #[must_use]
    pub fn new(origin: &SelectorCascade, destination: &SelectorCascade) -> Self {
        let fields = [origin, destination]
            .into_iter()
            .map(|cascade| {
                (
                    cascade.endpoint().field_name().to_string(),
                    cascade.selected_station_id().unwrap_or_default().to_string(),
                )
            })
            .collect();
        Self { fields }
    }

    /// Append passthrough fields, skipping any that would shadow a station
    #[must_use]
    pub fn with_fields<I>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (name, value) in extra {
            if self.is_station_field(&name) {
                continue;
            }
            self.fields.push((name, value));
        }
        self
    }

    #[must_use]
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    fn is_station_field(&self, name: &str) -> bool {
        self.fields.iter().take(2).any(|(key, _)| key == name)
    }
}

/// Sequence number handed to each submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Ticket {
    #[must_use]
    pub fn sequence(self) -> u64 {
        self.0
    }
}

/// Hands out tickets so only the latest submission may touch the UI
#[derive(Debug, Clone, Default)]
pub struct SubmissionTracker {
    latest: Rc<Cell<u64>>,
}

impl SubmissionTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> Ticket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        Ticket(next)
    }

    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.get() == ticket.0
    }
}

/// Where the pipeline shows its progress and results
pub trait ResultSurface {
    /// Hide any previous result and show the loading indicator
    fn begin_loading(&self);
    fn end_loading(&self);
    fn show_route(&self, view: RouteView);
    /// Surface a message to the user
    fn notify(&self, message: &str);
}

#[derive(Debug, thiserror::Error)]
pub enum RouteFailure {
    /// Transport failure or an undecodable reply
    #[error("route request failed: {0}")]
    Request(#[from] ApiError),

    /// The service answered with an error message
    #[error("route computation failed: {0}")]
    Computation(String),
}

impl RouteFailure {
    /// Text shown to the user
    #[must_use]
    pub fn notice(&self) -> &str {
        match self {
            Self::Request(_) => labels::ROUTE_REQUEST_FAILED,
            Self::Computation(message) => message.as_str(),
        }
    }
}

#[derive(Debug)]
pub enum RouteOutcome {
    Shown(RouteView),
    Failed(RouteFailure),
    /// A newer submission started before this one settled
    Superseded,
}

/// Classify the service's answer for the submission holding `ticket`
#[must_use]
pub fn classify(result: Result<RouteResponse, ApiError>, ticket: Ticket) -> RouteOutcome {
    let reply = result.and_then(|response| response.into_reply().ok_or(ApiError::MalformedRoute));
    match reply {
        Ok(RouteReply::Found(plan)) => RouteOutcome::Shown(RouteView::render(&plan, ticket)),
        Ok(RouteReply::Rejected(message)) => RouteOutcome::Failed(RouteFailure::Computation(message)),
        Err(e) => RouteOutcome::Failed(RouteFailure::Request(e)),
    }
}

/// Clears the loading indicator when dropped, if its submission is still current
struct LoadingGuard<'a, V: ResultSurface> {
    surface: &'a V,
    tracker: &'a SubmissionTracker,
    ticket: Ticket,
}

impl<V: ResultSurface> Drop for LoadingGuard<'_, V> {
    fn drop(&mut self) {
        if self.tracker.is_current(self.ticket) {
            self.surface.end_loading();
        }
    }
}

/// Send `request` and show the outcome on `surface`
///
/// The loading indicator goes up before the request is sent and comes down
/// once it settles, whatever the outcome. If another submission starts in the
/// meantime this one is dropped without touching the surface.
pub async fn submit<S, V>(
    service: &S,
    surface: &V,
    tracker: &SubmissionTracker,
    request: RouteRequest,
) -> RouteOutcome
where
    S: RouteService,
    V: ResultSurface,
{
    let ticket = tracker.begin();
    log!(
        "Route submission #{} with fields {:?}",
        ticket.sequence(),
        request.fields().iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>()
    );

    surface.begin_loading();
    let _loading = LoadingGuard {
        surface,
        tracker,
        ticket,
    };

    let result = service.find_route(&request).await;

    if !tracker.is_current(ticket) {
        log!("Discarding stale route response #{}", ticket.sequence());
        return RouteOutcome::Superseded;
    }

    let outcome = classify(result, ticket);
    match &outcome {
        RouteOutcome::Shown(view) => {
            log!(
                "Route #{}: {} stops, total time {}",
                ticket.sequence(),
                view.segments.len(),
                view.total_time
            );
            surface.show_route(view.clone());
        }
        RouteOutcome::Failed(failure) => {
            leptos::logging::error!("Route #{}: {failure}", ticket.sequence());
            surface.notify(failure.notice());
        }
        RouteOutcome::Superseded => {}
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cascade::Endpoint;
    use crate::directory::tests::sample_directory;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        BeginLoading,
        ServiceCalled,
        EndLoading,
        ShowRoute(usize),
        Notify(String),
    }

    #[derive(Default)]
    struct RecordingSurface {
        events: Rc<RefCell<Vec<Event>>>,
    }

    impl ResultSurface for RecordingSurface {
        fn begin_loading(&self) {
            self.events.borrow_mut().push(Event::BeginLoading);
        }

        fn end_loading(&self) {
            self.events.borrow_mut().push(Event::EndLoading);
        }

        fn show_route(&self, view: RouteView) {
            self.events.borrow_mut().push(Event::ShowRoute(view.segments.len()));
        }

        fn notify(&self, message: &str) {
            self.events.borrow_mut().push(Event::Notify(message.to_string()));
        }
    }

    enum Reply {
        Body(&'static str),
        Transport,
    }

    struct FakeService {
        reply: Reply,
        events: Rc<RefCell<Vec<Event>>>,
        received: RefCell<Option<RouteRequest>>,
        /// Simulates a newer submission starting while this one is in flight
        supersede_with: Option<SubmissionTracker>,
    }

    impl FakeService {
        fn new(reply: Reply, surface: &RecordingSurface) -> Self {
            Self {
                reply,
                events: Rc::clone(&surface.events),
                received: RefCell::new(None),
                supersede_with: None,
            }
        }
    }

    impl RouteService for FakeService {
        async fn find_route(&self, request: &RouteRequest) -> Result<RouteResponse, ApiError> {
            self.events.borrow_mut().push(Event::ServiceCalled);
            *self.received.borrow_mut() = Some(request.clone());
            if let Some(tracker) = &self.supersede_with {
                tracker.begin();
            }
            match self.reply {
                Reply::Body(body) => serde_json::from_str(body).map_err(|e| ApiError::Json {
                    message: e.to_string(),
                }),
                Reply::Transport => Err(ApiError::Status { status: 502 }),
            }
        }
    }

    const SUCCESS: &str = r#"{"total_time":10,"route_info":[
        {"station":"A","line":"서울2호선","operator":"A1","arrival":"","departure":"08:00"},
        {"station":"B","line":"서울2호선","operator":"A1","arrival":"08:10","departure":""}
    ]}"#;

    fn run(service: &FakeService, surface: &RecordingSurface, tracker: &SubmissionTracker) -> RouteOutcome {
        block_on(submit(service, surface, tracker, RouteRequest::default()))
    }

    fn end_loading_count(surface: &RecordingSurface) -> usize {
        surface
            .events
            .borrow()
            .iter()
            .filter(|e| **e == Event::EndLoading)
            .count()
    }

    #[test]
    fn test_success_path_sequence() {
        let surface = RecordingSurface::default();
        let service = FakeService::new(Reply::Body(SUCCESS), &surface);
        let outcome = run(&service, &surface, &SubmissionTracker::new());

        assert!(matches!(outcome, RouteOutcome::Shown(_)));
        assert_eq!(
            *surface.events.borrow(),
            [Event::BeginLoading, Event::ServiceCalled, Event::ShowRoute(2), Event::EndLoading]
        );
    }

    #[test]
    fn test_computation_failure_surfaces_message_verbatim() {
        let surface = RecordingSurface::default();
        let service = FakeService::new(Reply::Body(r#"{"error":"출발역을 선택하세요"}"#), &surface);
        let outcome = run(&service, &surface, &SubmissionTracker::new());

        assert!(matches!(outcome, RouteOutcome::Failed(RouteFailure::Computation(ref m)) if m == "출발역을 선택하세요"));
        assert_eq!(
            *surface.events.borrow(),
            [
                Event::BeginLoading,
                Event::ServiceCalled,
                Event::Notify("출발역을 선택하세요".to_string()),
                Event::EndLoading
            ]
        );
    }

    #[test]
    fn test_transport_failure_shows_generic_notice() {
        let surface = RecordingSurface::default();
        let service = FakeService::new(Reply::Transport, &surface);
        let outcome = run(&service, &surface, &SubmissionTracker::new());

        assert!(matches!(outcome, RouteOutcome::Failed(RouteFailure::Request(_))));
        let events = surface.events.borrow();
        assert!(events.contains(&Event::Notify(labels::ROUTE_REQUEST_FAILED.to_string())));
        assert!(!events.iter().any(|e| matches!(e, Event::ShowRoute(_))));
        assert_eq!(events.last(), Some(&Event::EndLoading));
    }

    #[test]
    fn test_non_json_body_is_a_request_failure() {
        let surface = RecordingSurface::default();
        let service = FakeService::new(Reply::Body("<html>502 Bad Gateway</html>"), &surface);
        let outcome = run(&service, &surface, &SubmissionTracker::new());

        assert!(matches!(outcome, RouteOutcome::Failed(RouteFailure::Request(ApiError::Json { .. }))));
        assert_eq!(end_loading_count(&surface), 1);
    }

    #[test]
    fn test_incomplete_body_is_a_request_failure() {
        let surface = RecordingSurface::default();
        let service = FakeService::new(Reply::Body(r#"{"total_time":10}"#), &surface);
        let outcome = run(&service, &surface, &SubmissionTracker::new());

        assert!(matches!(outcome, RouteOutcome::Failed(RouteFailure::Request(ApiError::MalformedRoute))));
        assert!(surface
            .events
            .borrow()
            .contains(&Event::Notify(labels::ROUTE_REQUEST_FAILED.to_string())));
    }

    #[test]
    fn test_loading_cleared_exactly_once_on_every_path() {
        for reply in [
            Reply::Body(SUCCESS),
            Reply::Body(r#"{"error":"경로를 찾지 못했습니다."}"#),
            Reply::Body("not json"),
            Reply::Transport,
        ] {
            let surface = RecordingSurface::default();
            let service = FakeService::new(reply, &surface);
            run(&service, &surface, &SubmissionTracker::new());
            assert_eq!(surface.events.borrow().first(), Some(&Event::BeginLoading));
            assert_eq!(end_loading_count(&surface), 1);
        }
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let surface = RecordingSurface::default();
        let tracker = SubmissionTracker::new();
        let mut service = FakeService::new(Reply::Body(SUCCESS), &surface);
        service.supersede_with = Some(tracker.clone());

        let outcome = run(&service, &surface, &tracker);

        assert!(matches!(outcome, RouteOutcome::Superseded));
        assert_eq!(*surface.events.borrow(), [Event::BeginLoading, Event::ServiceCalled]);
    }

    #[test]
    fn test_request_carries_selections_and_passthrough_fields() {
        let directory = Rc::new(sample_directory());
        let mut origin = SelectorCascade::new(Endpoint::Origin, Rc::clone(&directory));
        let mut destination = SelectorCascade::new(Endpoint::Destination, Rc::clone(&directory));
        origin.set_line("서울2호선");
        origin.set_station("S-222").expect("station offered");
        destination.set_line("서울1호선");
        destination.set_station("S-133").expect("station offered");

        let request = RouteRequest::new(&origin, &destination).with_fields([
            ("departure_time".to_string(), "08:00".to_string()),
            ("from_station".to_string(), "spoofed".to_string()),
        ]);

        let surface = RecordingSurface::default();
        let service = FakeService::new(Reply::Body(SUCCESS), &surface);
        block_on(submit(&service, &surface, &SubmissionTracker::new(), request));

        let sent = service.received.borrow().clone().expect("request sent");
        assert_eq!(
            sent.fields(),
            [
                ("from_station".to_string(), "S-222".to_string()),
                ("to_station".to_string(), "S-133".to_string()),
                ("departure_time".to_string(), "08:00".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_selections_are_still_sent() {
        let directory = Rc::new(sample_directory());
        let origin = SelectorCascade::new(Endpoint::Origin, Rc::clone(&directory));
        let destination = SelectorCascade::new(Endpoint::Destination, directory);
        let request = RouteRequest::new(&origin, &destination);
        assert_eq!(
            request.fields(),
            [
                ("from_station".to_string(), String::new()),
                ("to_station".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn test_tracker_sequences() {
        let tracker = SubmissionTracker::new();
        let first = tracker.begin();
        assert!(tracker.is_current(first));
        let second = tracker.begin();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
        assert_eq!(second.sequence(), first.sequence() + 1);
    }
}
