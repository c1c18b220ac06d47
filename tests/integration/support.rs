//! Shared helpers: canned readings and a tiny HTTP server.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use shakewatch::core::Reading;

pub fn reading(id: &str, timestamp_millis: i64) -> Reading {
    Reading {
        id: id.to_string(),
        acceleration: 10.0,
        velocity: 0.1,
        displacement: 0.01,
        timestamp_millis,
    }
}

pub fn envelope_json(readings: &[Reading]) -> String {
    let list: Vec<String> = readings
        .iter()
        .map(|r| {
            format!(
                r#"{{"id":"{}","acc":{},"vel":{},"disp":{},"timestamp":{}}}"#,
                r.id, r.acceleration, r.velocity, r.displacement, r.timestamp_millis
            )
        })
        .collect();
    format!(r#"{{"request":{{"GM":{{"list":[{}]}}}}}}"#, list.join(","))
}

/// Serve each `(status, body)` pair to one connection, in order, then stop.
///
/// Returns the URL to fetch and the server thread.
pub fn serve(responses: Vec<(u16, String)>) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/query/objects.json", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        for (status, body) in responses {
            let (mut stream, _) = match listener.accept() {
                Ok(conn) => conn,
                Err(_) => return,
            };

            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }

            let response = format!(
                "HTTP/1.1 {} Test\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        }
    });

    (url, handle)
}

/// A URL on a port nothing is listening on.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/query/objects.json", addr)
}
