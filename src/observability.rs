use biometrics::{Collector, Counter, Moments};

pub(crate) static CLIENT_REQUESTS: Counter = Counter::new("architect.client.requests");
pub(crate) static CLIENT_REQUEST_ERRORS: Counter = Counter::new("architect.client.request_errors");
pub(crate) static CLIENT_REQUEST_DURATION: Moments =
    Moments::new("architect.client.request_duration_seconds");

pub(crate) static SESSION_INITIALIZATIONS: Counter =
    Counter::new("architect.session.initializations");
pub(crate) static SESSION_REUSED: Counter = Counter::new("architect.session.reused");
pub(crate) static SESSION_SENDS: Counter = Counter::new("architect.session.sends");
pub(crate) static SESSION_SEND_ERRORS: Counter = Counter::new("architect.session.send_errors");

pub(crate) static CONTROLLER_SUBMISSIONS: Counter =
    Counter::new("architect.controller.submissions");
pub(crate) static CONTROLLER_REJECTED: Counter = Counter::new("architect.controller.rejected");
pub(crate) static CONTROLLER_FAILURES: Counter = Counter::new("architect.controller.failures");

/// Register this crate's biometrics with the provided collector.
pub fn register_biometrics(collector: Collector) {
    collector.register_counter(&CLIENT_REQUESTS);
    collector.register_counter(&CLIENT_REQUEST_ERRORS);
    collector.register_moments(&CLIENT_REQUEST_DURATION);

    collector.register_counter(&SESSION_INITIALIZATIONS);
    collector.register_counter(&SESSION_REUSED);
    collector.register_counter(&SESSION_SENDS);
    collector.register_counter(&SESSION_SEND_ERRORS);

    collector.register_counter(&CONTROLLER_SUBMISSIONS);
    collector.register_counter(&CONTROLLER_REJECTED);
    collector.register_counter(&CONTROLLER_FAILURES);
}
