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

//! HTTP-level tests for the default SOAP transport.

use httpmock::prelude::*;
use pscworld_client::{Credentials, Error, PscWorldClient, RemoteError, ServiceConfig};

const RECOVER_RESPONSE: &str = concat!(
    "<s:Envelope xmlns:s=\"http://schemas.xmlsoap.org/soap/envelope/\">",
    "<s:Body>",
    "<RecuperaResponse xmlns=\"http://tempuri.org/\">",
    "<RecuperaResult>Super secret certificate</RecuperaResult>",
    "</RecuperaResponse>",
    "</s:Body>",
    "</s:Envelope>"
);

const DUPLICATED_ID_RESPONSE: &str = concat!(
    "<s:Envelope xmlns:s=\"http://schemas.xmlsoap.org/soap/envelope/\">",
    "<s:Body>",
    "<GeneraResponse xmlns=\"http://tempuri.org/\">",
    "<GeneraResult>ERROR: IDENTIFICADOR_EXISTENTE</GeneraResult>",
    "</GeneraResponse>",
    "</s:Body>",
    "</s:Envelope>"
);

// The validation result is itself an XML document, escaped inside the
// envelope.
const VALIDATE_RESPONSE: &str = concat!(
    "<s:Envelope xmlns:s=\"http://schemas.xmlsoap.org/soap/envelope/\">",
    "<s:Body>",
    "<ValidaConstanciaResponse xmlns=\"http://tempuri.org/\">",
    "<ValidaConstanciaResult>",
    "&lt;constancia&gt;&lt;esValida&gt;false&lt;/esValida&gt;&lt;/constancia&gt;",
    "</ValidaConstanciaResult>",
    "</ValidaConstanciaResponse>",
    "</s:Body>",
    "</s:Envelope>"
);

fn client_for(server: &MockServer) -> PscWorldClient {
    let config = ServiceConfig::new(&server.url("/NOMTS_Client.svc")).unwrap();
    PscWorldClient::new(config, Credentials::new("test", "secret"))
}

#[test]
fn recover_round_trip() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/NOMTS_Client.svc")
            .header("Content-Type", "text/xml; charset=utf-8")
            .header("SOAPAction", "http://tempuri.org/IClient/Recupera")
            .body_contains("<Recupera xmlns=\"http://tempuri.org/\">")
            .body_contains("<identificador>1234</identificador>")
            .body_contains("<usuario>test</usuario>")
            .body_contains("<password>secret</password>");
        then.status(200)
            .header("Content-Type", "text/xml; charset=utf-8")
            .body(RECOVER_RESPONSE);
    });

    let certificate = client_for(&server).recover("1234").unwrap();

    assert_eq!(certificate, "Super secret certificate");
    mock.assert();
}

#[test]
fn coded_failure_round_trip() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST)
            .path("/NOMTS_Client.svc")
            .header("SOAPAction", "http://tempuri.org/IClient/Genera");
        then.status(200)
            .header("Content-Type", "text/xml; charset=utf-8")
            .body(DUPLICATED_ID_RESPONSE);
    });

    let result = client_for(&server).generate("1234", std::io::Cursor::new(b"data".to_vec()));

    match result {
        Err(Error::Remote(RemoteError::DuplicatedId)) => {}
        other => panic!("expected DuplicatedId, got {other:?}"),
    }
}

#[test]
fn escaped_xml_payload_round_trip() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/NOMTS_Client.svc")
            .header("SOAPAction", "http://tempuri.org/IClient/ValidaConstancia")
            // The certificate blob must arrive escaped.
            .body_contains("<constancia>&lt;blob&amp;&gt;</constancia>");
        then.status(200)
            .header("Content-Type", "text/xml; charset=utf-8")
            .body(VALIDATE_RESPONSE);
    });

    let certificate = client_for(&server).validate("<blob&>").unwrap();

    assert!(!certificate.is_valid());
    mock.assert();
}

#[test]
fn http_error_statuses_are_surfaced() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/NOMTS_Client.svc");
        then.status(500);
    });

    match client_for(&server).recover("1234") {
        Err(Error::HttpErrorResponse(500)) => {}
        other => panic!("expected an HTTP error, got {other:?}"),
    }
}

#[test]
fn missing_result_element_is_malformed() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/NOMTS_Client.svc");
        then.status(200)
            .header("Content-Type", "text/xml; charset=utf-8")
            .body("<s:Envelope xmlns:s=\"http://schemas.xmlsoap.org/soap/envelope/\"><s:Body/></s:Envelope>");
    });

    match client_for(&server).recover("1234") {
        Err(Error::MalformedResponse(_)) => {}
        other => panic!("expected a malformed-response error, got {other:?}"),
    }
}
