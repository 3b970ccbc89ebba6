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

#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg, doc_cfg_hide))]

pub(crate) mod asn1;
mod certificate;
mod client;
mod credentials;
mod error;
pub mod hash;
mod response;
pub mod soap;
mod token;

pub use certificate::{Certificate, Issuer, RootAuthority};
pub use client::PscWorldClient;
pub use credentials::Credentials;
pub use error::{Error, RemoteError, Result};
pub use soap::{HttpSoapTransport, Operation, ServiceConfig, SoapTransport, PRODUCTION_ENDPOINT};
pub use token::TimeStampToken;

#[cfg(test)]
pub(crate) mod tests;
