//! Request filter for the protected areas of the site.
//!
//! Wraps [`RouteGate`] as Actix middleware. Every request is forwarded; the
//! middleware only records what the policy decided so the missing check is
//! visible in logs.

use std::rc::Rc;
use std::task::{Context, Poll};

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use futures_util::future::{Ready, ready};
use tracing::debug;

use crate::domain::{GateDecision, RouteGate};

/// Route gate middleware factory.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use devsync_web::middleware::RouteGateLayer;
///
/// let app = App::new().wrap(RouteGateLayer::default());
/// ```
#[derive(Clone, Default)]
pub struct RouteGateLayer {
    gate: Rc<RouteGate>,
}

impl<S, B> Transform<S, ServiceRequest> for RouteGateLayer
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RouteGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RouteGateMiddleware {
            service,
            gate: Rc::clone(&self.gate),
        }))
    }
}

/// Service wrapper produced by [`RouteGateLayer`].
pub struct RouteGateMiddleware<S> {
    service: S,
    gate: Rc<RouteGate>,
}

impl<S, B> Service<ServiceRequest> for RouteGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = S::Future;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match self.gate.decide(req.path()) {
            GateDecision::Bypass => {}
            GateDecision::Forward { protected: true } => {
                debug!(path = %req.path(), "protected path forwarded without a session check");
            }
            GateDecision::Forward { protected: false } => {}
        }
        self.service.call(req)
    }
}
