use bytes::BytesMut;
use sha2::{Digest, Sha256};
use h1wire::{
    HandlerError, Request,
    headers::HeaderMap,
    http::StatusCode,
    response::Writer,
};

const PORT: u16 = 42069;

const HTML_400: &str = "<html>
  <head>
    <title>400 Bad Request</title>
  </head>
  <body>
    <h1>Bad Request</h1>
    <p>Your request honestly kinda sucked.</p>
  </body>
</html>";

const HTML_500: &str = "<html>
  <head>
    <title>500 Internal Server Error</title>
  </head>
  <body>
    <h1>Internal Server Error</h1>
    <p>Okay, you know what? This one is on me.</p>
  </body>
</html>";

const HTML_200: &str = "<html>
  <head>
    <title>200 OK</title>
  </head>
  <body>
    <h1>Success!</h1>
    <p>Your request was an absolute banger.</p>
  </body>
</html>";

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let server = h1wire::serve(PORT, handle).await?;
    log::info!("Server started on port {PORT}");

    tokio::signal::ctrl_c().await?;
    server.shutdown().await;
    log::info!("Server gracefully stopped");
    Ok(())
}

fn handle(bufm: &mut BytesMut, req: &Request) -> Result<(), HandlerError> {
    let mut writer = Writer::new(bufm);
    let mut headers = HeaderMap::new();
    headers.set("Content-Type", "text/html")?;

    let (status, body) = match req.target() {
        "/yourproblem" => (StatusCode::BAD_REQUEST, HTML_400),
        "/myproblem" => (StatusCode::INTERNAL_SERVER_ERROR, HTML_500),
        "/chunked" => {
            headers.set("Transfer-Encoding", "chunked")?;
            headers.set("Trailer", "X-Content-SHA256, X-Content-Length")?;
            writer.write_status_line(StatusCode::OK)?;
            writer.write_headers(&headers)?;

            for line in HTML_200.split_inclusive('\n') {
                writer.write_chunked_body(line.as_bytes())?;
            }

            let mut trailers = HeaderMap::new();
            trailers.set("X-Content-SHA256", format!("{:x}", Sha256::digest(HTML_200)))?;
            trailers.set("X-Content-Length", HTML_200.len().to_string())?;
            writer.write_trailers(&trailers)?;
            return Ok(());
        }
        _ => (StatusCode::OK, HTML_200),
    };

    headers.set("Content-Length", body.len().to_string())?;
    writer.write_status_line(status)?;
    writer.write_headers(&headers)?;
    writer.write_body(body.as_bytes())?;
    Ok(())
}
