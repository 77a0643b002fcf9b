//! Remote prefix lists over HTTP(S).

use super::reader::read_lines;
use colored::Colorize;
use std::error::Error;

/// Fetch `url` and split the body into trimmed, non-empty lines.
///
/// Any status other than 200 is an error, as are transport failures and
/// timeouts configured on `client`.
pub async fn fetch_url_lines(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<String>, Box<dyn Error>> {
    log::debug!("GET {url}", url = url.on_blue());

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| format!("Error fetching {url}: {e}"))?;

    let status = response.status();
    if status != reqwest::StatusCode::OK {
        return Err(format!("Non-200 response from {url}: {status}").into());
    }

    let body = response
        .text()
        .await
        .map_err(|e| format!("Error reading body from {url}: {e}"))?;
    log::debug!("Got {} bytes from {url}", body.len());

    Ok(read_lines(&body))
}

#[cfg(test)]
pub(crate) mod test_server {
    //! One-shot HTTP responder for fetch tests.

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve `status_line` and `body` to a single request; returns the URL.
    pub async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Error binding test listener");
        let addr = listener.local_addr().expect("Error reading local addr");

        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;
                let response = format!(
                    "HTTP/1.1 {status_line}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        format!("http://{addr}/list.txt")
    }

    pub fn client() -> reqwest::Client {
        reqwest::Client::builder()
            .no_proxy()
            .build()
            .expect("Error building test client")
    }
}
