use axum::http::{header, HeaderMap, HeaderName, HeaderValue, Method, Request, Response, StatusCode, Uri};
use std::{
    env,
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};
use tower::{Layer, Service};

const PERMISSIONS_POLICY: &str = "permissions-policy";

const NOSNIFF: &str = "nosniff";
const DENY: &str = "DENY";
const XSS_BLOCK: &str = "1; mode=block";
const HSTS_VALUE: &str = "max-age=31536000; includeSubDomains";
const CSP_API_VALUE: &str = "default-src 'none'; frame-ancestors 'none'";
const REFERRER_POLICY_VALUE: &str = "strict-origin-when-cross-origin";
const PERMISSIONS_POLICY_VALUE: &str = "geolocation=(), microphone=(), camera=()";

/// Request-level authorization, checked before any handler runs.
pub trait AccessPolicy: Send + Sync + 'static {
    fn permits(&self, method: &Method, uri: &Uri, headers: &HeaderMap) -> bool;
}

/// Lets every request through. Development stand-in until real authorization lands.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermitAll;

impl AccessPolicy for PermitAll {
    fn permits(&self, _method: &Method, _uri: &Uri, _headers: &HeaderMap) -> bool {
        true
    }
}

/// Applies an [`AccessPolicy`] and stamps API security headers on every response.
#[derive(Clone)]
pub struct SecurityLayer {
    policy: Arc<dyn AccessPolicy>,
    include_hsts: bool,
}

impl SecurityLayer {
    pub fn new(policy: Arc<dyn AccessPolicy>, include_hsts: bool) -> Self {
        Self {
            policy,
            include_hsts,
        }
    }

    pub fn from_env(policy: Arc<dyn AccessPolicy>) -> Self {
        let is_production = env::var("RUST_ENV")
            .map(|v| v.to_lowercase() == "production")
            .unwrap_or(false);

        if is_production {
            tracing::info!("Security: HSTS header enabled (production mode)");
        } else {
            tracing::info!("Security: HSTS header disabled (development mode)");
        }

        Self::new(policy, is_production)
    }
}

impl<S> Layer<S> for SecurityLayer {
    type Service = SecurityService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        SecurityService {
            inner,
            policy: self.policy.clone(),
            include_hsts: self.include_hsts,
        }
    }
}

#[derive(Clone)]
pub struct SecurityService<S> {
    inner: S,
    policy: Arc<dyn AccessPolicy>,
    include_hsts: bool,
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for SecurityService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
    ResBody: Default,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = SecurityFuture<S::Future, ResBody>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<ReqBody>) -> Self::Future {
        if !self
            .policy
            .permits(request.method(), request.uri(), request.headers())
        {
            tracing::warn!(method = %request.method(), uri = %request.uri(), "Security: request denied by access policy");
            let mut response = Response::new(ResBody::default());
            *response.status_mut() = StatusCode::FORBIDDEN;
            return SecurityFuture::Denied {
                response: Some(response),
                include_hsts: self.include_hsts,
            };
        }

        SecurityFuture::Allowed {
            future: self.inner.call(request),
            include_hsts: self.include_hsts,
        }
    }
}

#[pin_project::pin_project(project = SecurityFutureProj)]
pub enum SecurityFuture<F, B> {
    Allowed {
        #[pin]
        future: F,
        include_hsts: bool,
    },
    Denied {
        response: Option<Response<B>>,
        include_hsts: bool,
    },
}

impl<F, B, E> Future for SecurityFuture<F, B>
where
    F: Future<Output = Result<Response<B>, E>>,
{
    type Output = Result<Response<B>, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.project() {
            SecurityFutureProj::Allowed {
                future,
                include_hsts,
            } => match future.poll(cx) {
                Poll::Ready(Ok(mut response)) => {
                    apply_security_headers(response.headers_mut(), *include_hsts);
                    Poll::Ready(Ok(response))
                }
                other => other,
            },
            SecurityFutureProj::Denied {
                response,
                include_hsts,
            } => {
                let mut response = response
                    .take()
                    .expect("SecurityFuture polled after completion");
                apply_security_headers(response.headers_mut(), *include_hsts);
                Poll::Ready(Ok(response))
            }
        }
    }
}

fn apply_security_headers(headers: &mut HeaderMap, include_hsts: bool) {
    headers.insert(header::X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static(NOSNIFF));
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static(DENY));
    headers.insert(header::X_XSS_PROTECTION, HeaderValue::from_static(XSS_BLOCK));
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(CSP_API_VALUE),
    );
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static(REFERRER_POLICY_VALUE),
    );
    headers.insert(
        HeaderName::from_static(PERMISSIONS_POLICY),
        HeaderValue::from_static(PERMISSIONS_POLICY_VALUE),
    );

    // Only meaningful behind HTTPS
    if include_hsts {
        headers.insert(
            header::STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static(HSTS_VALUE),
        );
    }
}

pub fn create_security_layer() -> SecurityLayer {
    SecurityLayer::from_env(Arc::new(PermitAll))
}
