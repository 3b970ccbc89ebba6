// Copyright 2025 the pscworld-client authors. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.

// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

//! The SOAP 1.1 transport seam.
//!
//! The client only needs a remote-call capability: given an operation and a
//! map of named string parameters, return the operation's raw string result.
//! [`SoapTransport`] is that seam; [`HttpSoapTransport`] is the default
//! blocking implementation. Host applications may substitute their own
//! implementation to control TLS, timeouts, or proxying; no timeout or
//! retry policy lives in this crate.

use std::{collections::BTreeMap, fmt::Write as _, io::Read};

use log::debug;
use quick_xml::{escape::escape, events::Event, Reader};
use url::Url;

use crate::{Error, Result};

/// The production service endpoint.
pub const PRODUCTION_ENDPOINT: &str = "https://nomtsclient.pscworld.com/NOMTS_Client.svc";

const DEFAULT_ACTION_NAMESPACE: &str = "http://tempuri.org/";

const HTTP_CONTENT_TYPE: &str = "text/xml; charset=utf-8";

/// Cap on the amount of response body read into memory.
const MAX_RESPONSE_SIZE: u64 = 1_000_000;

/// The operations the service publishes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operation {
    /// Generate a new timestamp certificate.
    Genera,
    /// Recover a previously generated certificate by id.
    Recupera,
    /// Validate a certificate.
    ValidaConstancia,
}

impl Operation {
    /// The operation's wire name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Genera => "Genera",
            Self::Recupera => "Recupera",
            Self::ValidaConstancia => "ValidaConstancia",
        }
    }

    /// Name of the response element holding the operation's raw result.
    pub fn result_tag(&self) -> &'static str {
        match self {
            Self::Genera => "GeneraResult",
            Self::Recupera => "RecuperaResult",
            Self::ValidaConstancia => "ValidaConstanciaResult",
        }
    }

    /// The `SOAPAction` header value, sent unquoted as the service's
    /// original clients do.
    fn soap_action(&self, namespace: &str) -> String {
        format!("{namespace}IClient/{}", self.name())
    }
}

/// Where and how to reach the service.
///
/// Wiring is injected here rather than compiled in, so tests and regional
/// deployments can point the client elsewhere. See [`PRODUCTION_ENDPOINT`]
/// for the service's public address.
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    endpoint: Url,
    action_namespace: String,
}

impl ServiceConfig {
    /// Configure the service at `endpoint` with the default SOAPAction
    /// namespace.
    pub fn new(endpoint: &str) -> Result<Self> {
        Ok(Self {
            endpoint: Url::parse(endpoint)?,
            action_namespace: DEFAULT_ACTION_NAMESPACE.to_string(),
        })
    }

    /// Override the SOAPAction namespace. Must end with `/`.
    pub fn with_action_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.action_namespace = namespace.into();
        self
    }

    /// The configured endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// A remote-call capability: one operation in, one raw string result out.
pub trait SoapTransport {
    /// Invoke `operation` with `params` and return the text content of its
    /// result element.
    fn call(&self, operation: Operation, params: &BTreeMap<String, String>) -> Result<String>;
}

/// Blocking SOAP 1.1 transport over HTTPS.
pub struct HttpSoapTransport {
    config: ServiceConfig,
    agent: ureq::Agent,
}

impl HttpSoapTransport {
    /// Create a transport for the configured endpoint.
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config,
            agent: ureq::agent(),
        }
    }
}

impl SoapTransport for HttpSoapTransport {
    fn call(&self, operation: Operation, params: &BTreeMap<String, String>) -> Result<String> {
        let envelope = request_envelope(operation, &self.config.action_namespace, params);
        let action = operation.soap_action(&self.config.action_namespace);

        debug!(
            "invoking {} at {}",
            operation.name(),
            self.config.endpoint.as_str()
        );

        let response = self
            .agent
            .post(self.config.endpoint.as_str())
            .set("Content-Type", HTTP_CONTENT_TYPE)
            .set("SOAPAction", &action)
            .send_string(&envelope)?;

        if response.status() != 200 {
            return Err(Error::HttpErrorResponse(response.status()));
        }

        let mut body = String::new();
        response
            .into_reader()
            .take(MAX_RESPONSE_SIZE)
            .read_to_string(&mut body)?;

        extract_result(&body, operation.result_tag())
    }
}

/// Build the request envelope. Parameter names are fixed identifiers;
/// values are escaped.
pub(crate) fn request_envelope(
    operation: Operation,
    namespace: &str,
    params: &BTreeMap<String, String>,
) -> String {
    let mut body = String::new();
    for (name, value) in params {
        let _ = write!(body, "<{name}>{}</{name}>", escape(value.as_str()));
    }

    format!(
        "<s:Envelope xmlns:s=\"http://schemas.xmlsoap.org/soap/envelope/\">\
         <s:Body>\
         <{op} xmlns=\"{namespace}\">{body}</{op}>\
         </s:Body>\
         </s:Envelope>",
        op = operation.name(),
    )
}

/// Pull the text content of the named result element out of a response
/// envelope.
pub(crate) fn extract_result(xml: &str, result_tag: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) if start.local_name().as_ref() == result_tag.as_bytes() => {
                return result_text(&mut reader, result_tag);
            }
            Ok(Event::Empty(empty)) if empty.local_name().as_ref() == result_tag.as_bytes() => {
                return Ok(String::new());
            }
            Ok(Event::Eof) => {
                return Err(Error::MalformedResponse(format!(
                    "missing {result_tag} element"
                )));
            }
            Err(err) => return Err(Error::MalformedResponse(err.to_string())),
            Ok(_) => {}
        }
    }
}

/// Collect the (unescaped) text content up to the result element's end tag.
fn result_text(reader: &mut Reader<&[u8]>, result_tag: &str) -> Result<String> {
    let mut text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Text(chunk)) => {
                let chunk = chunk
                    .unescape()
                    .map_err(|err| Error::MalformedResponse(err.to_string()))?;
                text.push_str(&chunk);
            }
            Ok(Event::CData(chunk)) => {
                text.push_str(&String::from_utf8_lossy(&chunk));
            }
            Ok(Event::End(end)) if end.local_name().as_ref() == result_tag.as_bytes() => {
                return Ok(text);
            }
            Ok(Event::Eof) => {
                return Err(Error::MalformedResponse(format!(
                    "unclosed {result_tag} element"
                )));
            }
            Err(err) => return Err(Error::MalformedResponse(err.to_string())),
            Ok(_) => {}
        }
    }
}
