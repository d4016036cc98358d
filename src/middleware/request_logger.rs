//! Request logging middleware.
//!
//! Logs `"<user> requested <METHOD> <path>"` for every inbound request, where
//! `<user>` is the value of the `user` header or `Anonymous`. The resolved
//! identity is stored in the request extensions for handlers to read.

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage,
};
use futures::future::{ok, LocalBoxFuture, Ready};
use log::info;
use std::rc::Rc;

use crate::constants::{ANONYMOUS_CALLER, CALLER_HEADER};

/// Caller identity as declared by the `user` request header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity(pub String);

impl CallerIdentity {
    fn from_request(req: &ServiceRequest) -> Self {
        let name = req
            .headers()
            .get(CALLER_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(ANONYMOUS_CALLER);
        CallerIdentity(name.to_string())
    }
}

pub struct RequestLogger;

impl<S, B> Transform<S, ServiceRequest> for RequestLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = RequestLoggerService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(RequestLoggerService {
            service: Rc::new(service),
        })
    }
}

pub struct RequestLoggerService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequestLoggerService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let caller = CallerIdentity::from_request(&req);
            info!("{} requested {} {}", caller.0, req.method(), req.uri());

            req.extensions_mut().insert(caller);

            service.call(req).await
        })
    }
}
