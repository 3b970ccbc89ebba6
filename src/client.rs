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

use std::{
    collections::BTreeMap,
    io::{Read, Seek},
};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use subtle::ConstantTimeEq;

use crate::{
    hash, response,
    soap::{HttpSoapTransport, Operation, ServiceConfig, SoapTransport},
    Certificate, Credentials, Result, TimeStampToken,
};

/// Client for the PSC World timestamp certificate webservice.
///
/// Every remote operation is a single synchronous round trip that either
/// returns the service's answer or raises a typed [`Error`]. The client
/// holds no mutable state, so an instance can be reused for any number of
/// sequential calls; sharing it across threads is safe exactly when the
/// transport is.
///
/// [`Error`]: crate::Error
pub struct PscWorldClient<T: SoapTransport = HttpSoapTransport> {
    transport: T,
    credentials: Credentials,
}

impl PscWorldClient<HttpSoapTransport> {
    /// Create a client talking HTTP to the configured endpoint.
    pub fn new(config: ServiceConfig, credentials: Credentials) -> Self {
        Self::with_transport(HttpSoapTransport::new(config), credentials)
    }
}

impl<T: SoapTransport> PscWorldClient<T> {
    /// Create a client over a caller-supplied transport.
    pub fn with_transport(transport: T, credentials: Credentials) -> Self {
        Self {
            transport,
            credentials,
        }
    }

    /// Generate a timestamp certificate for `data` under the caller-chosen
    /// identifier `id`.
    ///
    /// The data never leaves the machine; the service receives its SHA-256
    /// digest, base64-encoded. Returns the new certificate exactly as the
    /// service sent it.
    pub fn generate<R: Read + Seek>(&self, id: &str, mut data: R) -> Result<String> {
        let digest = hash::sha256_stream(&mut data)?;

        let mut params = BTreeMap::new();
        params.insert("hash".to_string(), STANDARD.encode(digest));
        params.insert("identificador".to_string(), id.to_string());

        self.call(Operation::Genera, &params)
    }

    /// Fetch a previously generated certificate by its identifier.
    pub fn recover(&self, id: &str) -> Result<String> {
        let mut params = BTreeMap::new();
        params.insert("identificador".to_string(), id.to_string());

        self.call(Operation::Recupera, &params)
    }

    /// Ask the service whether `certificate` is one of its own.
    ///
    /// An invalid certificate is a normal answer (`is_valid()` returns
    /// `false`), not an error; errors are reserved for coded failures and
    /// transport problems.
    pub fn validate(&self, certificate: &str) -> Result<Certificate> {
        let mut params = BTreeMap::new();
        params.insert("constancia".to_string(), certificate.to_string());

        let xml = self.call(Operation::ValidaConstancia, &params)?;
        Certificate::from_xml(&xml)
    }

    /// Check `data` against the hash embedded in a certificate, without any
    /// network call.
    ///
    /// `base64_certificate` is the certificate as handed out by the
    /// service. Returns whether the certificate's message imprint equals
    /// the SHA-256 digest of `data`; the comparison is constant-time.
    /// Malformed certificate bytes raise a decode failure rather than
    /// answering `false`.
    pub fn validate_data<R: Read + Seek>(
        &self,
        base64_certificate: &str,
        mut data: R,
    ) -> Result<bool> {
        let token_der = STANDARD.decode(base64_certificate)?;
        let digest = hash::sha256_stream(&mut data)?;

        let token = TimeStampToken::from_der(&token_der)?;
        let embedded = token.hashed_message();

        Ok(bool::from(embedded.as_slice().ct_eq(&digest)))
    }

    fn call(&self, operation: Operation, params: &BTreeMap<String, String>) -> Result<String> {
        let request = self.credentials.authenticate(params);
        let raw = self.transport.call(operation, &request)?;

        response::interpret(raw, &self.credentials)
    }
}
