//! Connection handling module

use crate::config::Site;
use crate::handler;
use crate::logger;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpStream;

/// Serve one HTTP/1.1 connection on a spawned task
pub fn handle_connection(
    stream: TcpStream,
    peer_addr: SocketAddr,
    site: Arc<Site>,
    access_log: bool,
) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new().keep_alive(true).serve_connection(
            io,
            service_fn(move |req| {
                let site = Arc::clone(&site);
                async move { handler::handle_request(req, site, peer_addr, access_log).await }
            }),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
