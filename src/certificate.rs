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

//! The certificate validation result model.
//!
//! The `ValidaConstancia` operation answers with a small XML document; these
//! types are its typed form. The field-to-tag mapping is declared with serde
//! renames: child elements for the certificate itself, attributes (`@`) and
//! element text (`$text`) for the issuer and root authority records.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Outcome of validating a certificate with the service.
///
/// `valid == false` is a legitimate, successfully parsed answer, not an
/// error. The issuer and root authority are only present when the
/// service returned them, which it never does for an invalid certificate.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Certificate {
    #[serde(rename = "esValida")]
    valid: bool,

    #[serde(rename = "emisor", skip_serializing_if = "Option::is_none")]
    issuer: Option<Issuer>,

    #[serde(rename = "raiz", skip_serializing_if = "Option::is_none")]
    root: Option<RootAuthority>,
}

/// The authority that issued a validated certificate.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Issuer {
    #[serde(rename = "@organizacion")]
    organization: String,

    #[serde(rename = "@oid")]
    oid: String,

    #[serde(rename = "@certificado")]
    certificate: String,

    #[serde(rename = "$text")]
    name: String,
}

/// The root authority anchoring a validated certificate's chain.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RootAuthority {
    #[serde(rename = "@organizacion")]
    organization: String,

    #[serde(rename = "@certificado")]
    certificate: String,

    #[serde(rename = "$text")]
    name: String,
}

impl Certificate {
    /// Assemble a validation result.
    pub fn new(valid: bool, issuer: Option<Issuer>, root: Option<RootAuthority>) -> Self {
        Self {
            valid,
            issuer,
            root,
        }
    }

    /// Parse the XML document returned by the `ValidaConstancia` operation.
    pub fn from_xml(xml: &str) -> Result<Self> {
        quick_xml::de::from_str(xml).map_err(|err| Error::XmlParsingError(err.to_string()))
    }

    /// Render this result back into its XML wire form.
    pub fn to_xml(&self) -> Result<String> {
        quick_xml::se::to_string_with_root("constancia", self)
            .map_err(|err| Error::XmlParsingError(err.to_string()))
    }

    /// Whether the service vouched for the certificate.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The issuing authority, when one was returned.
    pub fn issuer(&self) -> Option<&Issuer> {
        self.issuer.as_ref()
    }

    /// The root authority, when one was returned.
    pub fn root(&self) -> Option<&RootAuthority> {
        self.root.as_ref()
    }
}

impl Issuer {
    /// Assemble an issuer record.
    pub fn new(
        organization: impl Into<String>,
        name: impl Into<String>,
        oid: impl Into<String>,
        certificate: impl Into<String>,
    ) -> Self {
        Self {
            organization: organization.into(),
            oid: oid.into(),
            certificate: certificate.into(),
            name: name.into(),
        }
    }

    /// Issuing organization.
    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// Human-readable issuer name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Policy OID under which the certificate was issued.
    pub fn oid(&self) -> &str {
        &self.oid
    }

    /// The issuer's certificate blob as the service transmits it.
    pub fn certificate(&self) -> &str {
        &self.certificate
    }
}

impl RootAuthority {
    /// Assemble a root authority record.
    pub fn new(
        organization: impl Into<String>,
        name: impl Into<String>,
        certificate: impl Into<String>,
    ) -> Self {
        Self {
            organization: organization.into(),
            certificate: certificate.into(),
            name: name.into(),
        }
    }

    /// Root organization.
    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// Human-readable root authority name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The root certificate blob as the service transmits it.
    pub fn certificate(&self) -> &str {
        &self.certificate
    }
}
