use std::time::Duration;

use employee_form_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, Transport};
use log::debug;

/// Blocking `Transport` backed by a ureq agent.
///
/// 4xx/5xx replies come back as `Ok(HttpResponse)` so the form controller
/// can read the server's message; only connection-level failures are `Err`.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!("{} {}", req.method.as_str(), req.path);
        let mut builder = match req.method {
            HttpMethod::Post => self.agent.post(&req.path),
        };
        for (key, value) in &req.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        let mut response = match req.body {
            Some(body) => builder.send(body.as_bytes()),
            None => builder.send_empty(),
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Deserialization(e.to_string()))?;
        debug!("-> {status} ({} bytes)", body.len());

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::{SocketAddr, TcpListener};
    use std::thread;

    use employee_form_core::{EmployeeClient, Field, FormController, SubmitOutcome, GENERIC_FAILURE};

    use super::*;

    /// Serve exactly one request, answering with `status` and raw `body` bytes.
    fn serve_once(status: &'static str, body: &'static [u8]) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream);
            let mut content_length = 0;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                let line = line.trim_end();
                if line.is_empty() {
                    break;
                }
                if let Some((name, value)) = line.split_once(':') {
                    if name.eq_ignore_ascii_case("content-length") {
                        content_length = value.trim().parse().unwrap();
                    }
                }
            }
            let mut request_body = vec![0; content_length];
            reader.read_exact(&mut request_body).unwrap();

            let mut stream = reader.into_inner();
            write!(
                stream,
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            )
            .unwrap();
            stream.write_all(body).unwrap();
            stream.flush().unwrap();
        });
        addr
    }

    fn filled_form(addr: SocketAddr) -> FormController {
        let mut form = FormController::new(EmployeeClient::new(&format!("http://{addr}")));
        form.update_field(Field::EmployeeId, "E1");
        form.update_field(Field::Name, "Ann");
        form.update_field(Field::Email, "ann@co.com");
        form.update_field(Field::PhoneNumber, "1234567890");
        form.update_field(Field::Department, "Eng");
        form.update_field(Field::DateOfJoining, "2020-01-01");
        form.update_field(Field::Role, "Dev");
        form
    }

    #[test]
    fn reads_status_and_body() {
        let addr = serve_once("201 Created", br#"{"message":"Created"}"#);
        let mut form = filled_form(addr);

        let outcome = form.submit(&UreqTransport::new(Duration::from_secs(5)));

        assert_eq!(
            outcome,
            SubmitOutcome::Succeeded {
                message: Some("Created".to_string())
            }
        );
        assert!(form.values().is_blank());
    }

    #[test]
    fn unreadable_body_fails_the_submit() {
        let addr = serve_once("201 Created", b"\xff\xfe");
        let mut form = filled_form(addr);

        let outcome = form.submit(&UreqTransport::new(Duration::from_secs(5)));

        assert_eq!(
            outcome,
            SubmitOutcome::Failed {
                message: GENERIC_FAILURE.to_string()
            }
        );
        assert_eq!(form.status(), Some(GENERIC_FAILURE));
        assert_eq!(form.values().employee_id, "E1");
    }
}
