use std::{
    future::{Ready, ready},
    net::IpAddr,
    sync::Arc,
};

use actix_web::{
    Error, HttpMessage, HttpRequest,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::header::HeaderMap,
};
use futures_util::future::LocalBoxFuture;

/// Address of the client that originated a request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientIp(pub String);

/// Peers whose forwarding headers are believed.
#[derive(Clone, Debug, Default)]
pub struct TrustedProxies {
    proxies: Arc<Vec<IpAddr>>,
}

impl TrustedProxies {
    pub fn new(proxies: Vec<IpAddr>) -> Self {
        Self {
            proxies: Arc::new(proxies),
        }
    }

    pub fn is_trusted(&self, ip: &IpAddr) -> bool {
        self.proxies.contains(ip)
    }

    /// The direct peer, unless it is a trusted proxy that named the client in
    /// `X-Forwarded-For` or `X-Real-IP`.
    pub fn client_ip(&self, req: &HttpRequest) -> ClientIp {
        let ip = match req.peer_addr().map(|addr| addr.ip()) {
            Some(peer) if self.is_trusted(&peer) => {
                forwarded_for(req.headers()).unwrap_or_else(|| peer.to_string())
            }
            Some(peer) => peer.to_string(),
            None => "unknown".to_string(),
        };

        ClientIp(ip)
    }
}

fn forwarded_for(headers: &HeaderMap) -> Option<String> {
    let from_forwarded = headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty());

    let from_real_ip = || {
        headers
            .get("x-real-ip")
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
    };

    from_forwarded.or_else(from_real_ip).map(str::to_string)
}

/// Stores the resolved [`ClientIp`] in the request extensions.
///
/// Must wrap outside `Logger` so the access log can read it.
pub struct ClientIpMiddleware {
    proxies: TrustedProxies,
}

impl ClientIpMiddleware {
    pub fn new(proxies: TrustedProxies) -> Self {
        Self { proxies }
    }
}

impl<S, B> Transform<S, ServiceRequest> for ClientIpMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = ClientIpMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ClientIpMiddlewareService {
            service,
            proxies: self.proxies.clone(),
        }))
    }
}

pub struct ClientIpMiddlewareService<S> {
    service: S,
    proxies: TrustedProxies,
}

impl<S, B> Service<ServiceRequest> for ClientIpMiddlewareService<S>
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
        let client_ip = self.proxies.client_ip(req.request());
        req.extensions_mut().insert(client_ip);

        Box::pin(self.service.call(req))
    }
}

/// Value for the `%{client_ip}xi` access log placeholder.
pub fn log_client_ip(req: &ServiceRequest) -> String {
    req.extensions()
        .get::<ClientIp>()
        .map(|ip| ip.0.clone())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpResponse, test, web};
    use pretty_assertions::assert_eq;

    fn loopback_proxy() -> TrustedProxies {
        TrustedProxies::new(vec!["127.0.0.1".parse().unwrap()])
    }

    #[actix_rt::test]
    async fn trusted_peer_forwards_client_address() {
        let req = test::TestRequest::default()
            .peer_addr("127.0.0.1:40000".parse().unwrap())
            .insert_header(("X-Forwarded-For", "203.0.113.7, 10.0.0.1"))
            .to_http_request();

        assert_eq!(
            loopback_proxy().client_ip(&req),
            ClientIp("203.0.113.7".to_string())
        );
    }

    #[actix_rt::test]
    async fn trusted_peer_falls_back_to_real_ip_then_peer() {
        let with_real_ip = test::TestRequest::default()
            .peer_addr("127.0.0.1:40000".parse().unwrap())
            .insert_header(("X-Real-IP", "198.51.100.4"))
            .to_http_request();
        assert_eq!(loopback_proxy().client_ip(&with_real_ip).0, "198.51.100.4");

        let bare = test::TestRequest::default()
            .peer_addr("127.0.0.1:40000".parse().unwrap())
            .to_http_request();
        assert_eq!(loopback_proxy().client_ip(&bare).0, "127.0.0.1");
    }

    #[actix_rt::test]
    async fn untrusted_peer_headers_are_ignored() {
        let req = test::TestRequest::default()
            .peer_addr("192.0.2.55:5000".parse().unwrap())
            .insert_header(("X-Forwarded-For", "203.0.113.7"))
            .to_http_request();

        assert_eq!(loopback_proxy().client_ip(&req).0, "192.0.2.55");
    }

    #[actix_rt::test]
    async fn missing_peer_is_unknown() {
        let req = test::TestRequest::default().to_http_request();

        assert_eq!(loopback_proxy().client_ip(&req).0, "unknown");
    }

    #[actix_rt::test]
    async fn middleware_stores_client_ip_in_extensions() {
        let app = test::init_service(
            App::new()
                .wrap(ClientIpMiddleware::new(loopback_proxy()))
                .route(
                    "/",
                    web::get().to(|req: HttpRequest| async move {
                        let ip = req
                            .extensions()
                            .get::<ClientIp>()
                            .map(|ip| ip.0.clone())
                            .unwrap_or_default();
                        HttpResponse::Ok().body(ip)
                    }),
                ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .peer_addr("127.0.0.1:40000".parse().unwrap())
            .insert_header(("X-Forwarded-For", "203.0.113.9"))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body, "203.0.113.9");
    }
}
